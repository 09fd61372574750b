use std::path::Path;
use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};

use crate::analysis::AnalysisResult;
use crate::config::ClientConfig;
use crate::error::{LensError, Result};

/// Endpoint path on the analysis service, relative to the base URL.
pub const ANALYZE_ENDPOINT: &str = "/api/analyze-outfit";

/// Multipart field name the service expects the image under.
pub const IMAGE_FIELD: &str = "file";

/// Blocking client for the outfit analysis service.
///
/// One attempt per call: no retry, no cancellation. Callers run this off the
/// UI thread (GUI worker or CLI main thread).
#[derive(Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let timeout = if config.timeout_secs > 0 {
            Some(Duration::from_secs(config.timeout_secs))
        } else {
            None
        };
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: config.trimmed_base_url().to_string(),
            http,
        })
    }

    /// Submit image bytes as `multipart/form-data` and parse the result.
    ///
    /// Non-2xx responses map to [`LensError::Status`]; a 2xx body that is not
    /// a valid result maps to [`LensError::MalformedResponse`].
    pub fn analyze_outfit(&self, file_name: &str, bytes: Vec<u8>) -> Result<AnalysisResult> {
        let url = format!("{}{}", self.base_url, ANALYZE_ENDPOINT);

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_for(file_name))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        tracing::debug!(%url, file_name, "submitting outfit for analysis");
        let response = self.http.post(&url).multipart(form).send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "analysis request rejected");
            return Err(LensError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let result: AnalysisResult = serde_json::from_str(&body)?;
        tracing::debug!(rating = result.rating, "analysis complete");
        Ok(result)
    }

    /// Read an image from disk and submit it.
    pub fn analyze_outfit_file(&self, path: &Path) -> Result<AnalysisResult> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "outfit".to_string());
        self.analyze_outfit(&file_name, bytes)
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        _ => "image/jpeg",
    }
}
