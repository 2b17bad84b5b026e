//! Blocking client for `GET /repos/{owner}/{repo}/pulls/{number}/files`.
//!
//! A single request is made per call. The first page of the response is
//! trusted as the complete list, no token is sent, and no timeout is set.

use std::time::Duration;

use ll_core::{GitHubConfig, PullRequestId};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::GitHubError;

/// `User-Agent` sent with every request. GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!("lorem-lint/", env!("CARGO_PKG_VERSION"));

/// Media type recommended by the GitHub REST API.
const GITHUB_JSON: &str = "application/vnd.github+json";

/// One element of the files array. Every other field is ignored.
#[derive(Debug, Deserialize)]
struct ChangedFile {
    filename: String,
}

/// Client for listing the files changed by a pull request.
///
/// # Examples
///
/// ```no_run
/// use ll_core::{GitHubConfig, PullRequestId};
/// use ll_github::PullRequestClient;
///
/// let client = PullRequestClient::new(GitHubConfig::default())?;
/// for file in client.fetch_changed_files(PullRequestId::new(1234))? {
///     println!("{file}");
/// }
/// # Ok::<(), ll_github::GitHubError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PullRequestClient {
    config: GitHubConfig,
    http: Client,
}

impl PullRequestClient {
    /// Creates a client for the repository named in `config`.
    pub fn new(config: GitHubConfig) -> Result<Self, GitHubError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(GitHubError::Client)?;

        Ok(Self { config, http })
    }

    /// URL of the files endpoint for `id`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ll_core::{GitHubConfig, PullRequestId};
    /// use ll_github::PullRequestClient;
    ///
    /// let client = PullRequestClient::new(GitHubConfig::default()).unwrap();
    /// assert_eq!(
    ///     client.files_url(PullRequestId::new(42)),
    ///     "https://api.github.com/repos/alan-turing-institute/the-turing-way/pulls/42/files"
    /// );
    /// ```
    #[must_use]
    pub fn files_url(&self, id: PullRequestId) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{id}/files",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.owner,
            self.config.repo,
        )
    }

    /// Lists the repository-relative paths changed by pull request `id`.
    ///
    /// Paths are returned in the order the API lists them.
    pub fn fetch_changed_files(&self, id: PullRequestId) -> Result<Vec<String>, GitHubError> {
        let url = self.files_url(id);
        info!(%url, "Fetching pull request files");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .map_err(|e| GitHubError::http(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|e| GitHubError::http(&url, e))?;
        let files = parse_changed_files(&body)?;
        debug!(count = files.len(), pull_request = %id, "Received changed files");

        Ok(files)
    }
}

/// Extracts the `filename` of every element in a files-endpoint response.
///
/// # Examples
///
/// ```
/// use ll_github::parse_changed_files;
///
/// let body = br#"[{"filename": "book/content/x.md", "status": "modified"}]"#;
/// assert_eq!(parse_changed_files(body).unwrap(), vec!["book/content/x.md"]);
/// ```
pub fn parse_changed_files(body: &[u8]) -> Result<Vec<String>, GitHubError> {
    let files: Vec<ChangedFile> = serde_json::from_slice(body)?;
    Ok(files.into_iter().map(|f| f.filename).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serves one canned HTTP response on a local port.
    ///
    /// The join handle yields the request head the client sent.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }

            write!(
                stream,
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();
            head
        });

        (base_url, handle)
    }

    fn local_client(base_url: String) -> PullRequestClient {
        PullRequestClient::new(GitHubConfig {
            api_base_url: base_url,
            owner: "octo".to_owned(),
            repo: "docs".to_owned(),
        })
        .unwrap()
    }

    #[test]
    fn test_files_url_trims_trailing_slash() {
        let client = PullRequestClient::new(GitHubConfig {
            api_base_url: "https://ghe.example.com/api/v3/".to_owned(),
            ..GitHubConfig::default()
        })
        .unwrap();
        assert_eq!(
            client.files_url(PullRequestId::new(5)),
            "https://ghe.example.com/api/v3/repos/alan-turing-institute/the-turing-way/pulls/5/files"
        );
    }

    #[test]
    fn test_parse_keeps_order_and_ignores_other_fields() {
        let body = br#"[
            {"sha": "abc", "filename": "book/content/x.md", "additions": 3},
            {"filename": "README.md", "status": "added"}
        ]"#;
        assert_eq!(
            parse_changed_files(body).unwrap(),
            vec!["book/content/x.md", "README.md"]
        );
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_changed_files(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_error_object() {
        let body = br#"{"message": "Not Found"}"#;
        assert!(matches!(
            parse_changed_files(body),
            Err(GitHubError::Decode(_))
        ));
    }

    #[test]
    fn test_parse_rejects_missing_filename() {
        let body = br#"[{"status": "modified"}]"#;
        assert!(parse_changed_files(body).is_err());
    }

    #[test]
    fn test_fetch_changed_files_from_local_server() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"filename": "book/content/x.md"}, {"filename": "README.md"}]"#,
        );
        let client = local_client(base_url);

        let files = client.fetch_changed_files(PullRequestId::new(17)).unwrap();
        assert_eq!(files, vec!["book/content/x.md", "README.md"]);

        let head = server.join().unwrap();
        assert!(head.starts_with("GET /repos/octo/docs/pulls/17/files HTTP/1.1"));
        assert!(head.to_ascii_lowercase().contains("user-agent: lorem-lint/"));
        assert!(!head.to_ascii_lowercase().contains("authorization"));
    }

    #[test]
    fn test_fetch_changed_files_non_success_status() {
        let (base_url, server) =
            serve_once("HTTP/1.1 404 Not Found", r#"{"message": "Not Found"}"#);
        let client = local_client(base_url);

        let err = client
            .fetch_changed_files(PullRequestId::new(1))
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        server.join().unwrap();
    }

    #[test]
    fn test_fetch_changed_files_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = local_client(base_url)
            .fetch_changed_files(PullRequestId::new(1))
            .unwrap_err();
        assert!(matches!(err, GitHubError::Http { .. }));
    }
}
