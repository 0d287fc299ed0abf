#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Remote retrieval of incident report documents.
//!
//! Downloads a report PDF from a URL into a local resource directory and
//! reports the HTTP status alongside the saved path. No retries, no caching,
//! no content-type validation: a non-PDF payload saved here simply fails
//! later when the extractor tries to open it.

use std::path::{Path, PathBuf};

/// File name the downloaded document is saved under inside the resource
/// directory. Each fetch overwrites the previous one.
pub const DOCUMENT_FILE_NAME: &str = "incident_report.pdf";

/// Errors that can occur while fetching a document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request itself failed (connection, TLS, invalid URL).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-200 status. The document's
    /// contribution to the batch must be aborted.
    #[error("failed to fetch {url}: status {status}")]
    Status {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code returned by the server.
        status: u16,
    },

    /// Writing the downloaded document to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A successfully fetched document.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// The HTTP status code of the response (always 200 on success).
    pub status: u16,
    /// Local path of the saved document.
    pub path: PathBuf,
}

/// Downloads the document at `url` and saves it under
/// [`DOCUMENT_FILE_NAME`] inside `dest_dir`.
///
/// # Errors
///
/// Returns [`FetchError::Status`] on any non-200 response (nothing is
/// written to disk in that case), [`FetchError::Http`] if the request fails
/// outright, or [`FetchError::Io`] if the body cannot be saved.
pub async fn fetch_document(
    client: &reqwest::Client,
    url: &str,
    dest_dir: &Path,
) -> Result<FetchedDocument, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    if status != 200 {
        return Err(FetchError::Status {
            url: url.to_owned(),
            status,
        });
    }

    let bytes = response.bytes().await?;
    log::debug!("downloaded {} bytes from {url}", bytes.len());

    let path = dest_dir.join(DOCUMENT_FILE_NAME);
    std::fs::write(&path, &bytes)?;
    log::info!("saved {url} to {}", path.display());

    Ok(FetchedDocument { status, path })
}

#[cfg(test)]
mod tests {
    use std::io::{Read as _, Write as _};
    use std::net::TcpListener;

    use super::*;

    /// Serves a single canned HTTP/1.1 response on a loopback port.
    fn one_shot_server(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0_u8; 1024];
            let _ = stream.read(&mut buf).unwrap();
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/reports/latest.pdf")
    }

    #[tokio::test]
    async fn saves_body_on_200() {
        let url = one_shot_server(
            "HTTP/1.1 200 OK\r\ncontent-length: 8\r\nconnection: close\r\n\r\n%PDF-1.7",
        );
        let dir = tempfile::tempdir().unwrap();
        let client = reqwest::Client::new();

        let fetched = fetch_document(&client, &url, dir.path()).await.unwrap();
        assert_eq!(fetched.status, 200);
        assert_eq!(fetched.path, dir.path().join(DOCUMENT_FILE_NAME));
        assert_eq!(std::fs::read(&fetched.path).unwrap(), b"%PDF-1.7");
    }

    #[tokio::test]
    async fn non_200_aborts_without_writing() {
        let url = one_shot_server(
            "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        );
        let dir = tempfile::tempdir().unwrap();
        let client = reqwest::Client::new();

        let err = fetch_document(&client, &url, dir.path()).await.unwrap_err();
        match err {
            FetchError::Status { url: u, status } => {
                assert_eq!(status, 404);
                // The failure message must name the URL it came from.
                assert_eq!(u, url);
            }
            other => panic!("expected FetchError::Status, got {other:?}"),
        }
        assert!(!dir.path().join(DOCUMENT_FILE_NAME).exists());
    }

    #[test]
    fn status_error_message_names_url() {
        let err = FetchError::Status {
            url: "https://police.example/daily.pdf".to_owned(),
            status: 404,
        };
        let message = err.to_string();
        assert!(message.contains("https://police.example/daily.pdf"));
        assert!(message.contains("404"));
    }
}
