//! PDF rendering.
//!
//! Two paths, both taking the rendered HTML page as input:
//! - [`render_with_browser`] shells out to a local headless browser with
//!   `--print-to-pdf`, bounded by a content timeout.
//! - [`PdfClient`] posts `{html, fileName}` to a remote generate-pdf
//!   endpoint (the same contract [`crate::server`] implements).
//!
//! Failures are surfaced to the caller as [`ModocsError`]; there is no
//! retry — the user retries manually.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use modocs_shared::{ModocsError, Result};

/// Wire body of the generate-pdf endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfRequest {
    /// Full HTML page to print. Required; an empty value is rejected.
    #[serde(default)]
    pub html: String,
    /// Download name without the `.pdf` suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// Render HTML to PDF with a local headless browser.
#[tracing::instrument(skip_all, fields(browser, html_len = html.len()))]
pub async fn render_with_browser(
    html: &str,
    browser: &str,
    content_timeout: Duration,
) -> Result<Vec<u8>> {
    // Check the binary exists before writing any temp files.
    let probe = tokio::process::Command::new(browser)
        .arg("--version")
        .output()
        .await;
    match probe {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout);
            tracing::debug!(browser, version = %version.trim(), "headless browser found");
        }
        _ => {
            return Err(ModocsError::export(format!(
                "headless browser '{browser}' not found. Install Chromium or set [pdf].browser in the config."
            )));
        }
    }

    let (html_path, pdf_path) = temp_paths();
    std::fs::write(&html_path, html).map_err(|e| ModocsError::io(&html_path, e))?;

    let result = tokio::time::timeout(
        content_timeout,
        tokio::process::Command::new(browser)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--no-pdf-header-footer")
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(&html_path)
            .output(),
    )
    .await;

    let outcome = match result {
        Err(_) => Err(ModocsError::export(format!(
            "PDF capture timed out after {}s",
            content_timeout.as_secs()
        ))),
        Ok(Err(e)) => Err(ModocsError::export(format!("failed to run {browser}: {e}"))),
        Ok(Ok(output)) if !output.status.success() => Err(ModocsError::export(format!(
            "{browser} exited with status {}: {}",
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stderr).trim(),
        ))),
        Ok(Ok(_)) => {
            std::fs::read(&pdf_path).map_err(|e| ModocsError::io(&pdf_path, e))
        }
    };

    let _ = std::fs::remove_file(&html_path);
    let _ = std::fs::remove_file(&pdf_path);

    let bytes = outcome?;
    tracing::info!(size = bytes.len(), "PDF rendered locally");
    Ok(bytes)
}

fn temp_paths() -> (PathBuf, PathBuf) {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let stem = format!("modocs-render-{}-{nanos}", std::process::id());
    let dir = std::env::temp_dir();
    (
        dir.join(format!("{stem}.html")),
        dir.join(format!("{stem}.pdf")),
    )
}

// ---------------------------------------------------------------------------
// Remote endpoint client
// ---------------------------------------------------------------------------

/// Client for a remote generate-pdf endpoint.
#[derive(Debug)]
pub struct PdfClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl PdfClient {
    /// Build a client for `endpoint` with the given connect and request
    /// timeouts.
    pub fn new(
        endpoint: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ModocsError::config(format!("invalid PDF endpoint '{endpoint}': {e}")))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("MoDocs/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| ModocsError::Network(format!("client build: {e}")))?;
        Ok(Self { endpoint, http })
    }

    /// Post the request and return the PDF bytes.
    pub async fn render(&self, request: &PdfRequest) -> Result<Vec<u8>> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| ModocsError::Network(format!("{}: {e}", self.endpoint)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ModocsError::Network(format!(
                "{}: HTTP {status}: {detail}",
                self.endpoint
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ModocsError::Network(format!("{}: {e}", self.endpoint)))?;
        tracing::info!(size = bytes.len(), endpoint = %self.endpoint, "PDF rendered remotely");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let request = PdfRequest {
            html: "<html></html>".into(),
            file_name: Some("Q4 Invoice".into()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["html"], "<html></html>");
        assert_eq!(json["fileName"], "Q4 Invoice");

        let bare = PdfRequest {
            html: "x".into(),
            file_name: None,
        };
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("fileName").is_none());
    }

    #[test]
    fn missing_html_defaults_to_empty() {
        let request: PdfRequest = serde_json::from_str(r#"{"fileName": "x"}"#).unwrap();
        assert!(request.html.is_empty());
    }

    #[test]
    fn bad_endpoint_is_a_config_error() {
        let err = PdfClient::new(
            "not a url",
            Duration::from_secs(10),
            Duration::from_secs(30),
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid PDF endpoint"));
    }

    #[tokio::test]
    async fn missing_browser_fails_cleanly() {
        let err = render_with_browser(
            "<html></html>",
            "definitely-not-a-browser-binary",
            Duration::from_secs(1),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
