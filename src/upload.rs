//! Transport client for the upload form.
//!
//! Builds the one-field `multipart/form-data` body and classifies the
//! response. The client is target-agnostic: on wasm `reqwest` rides the
//! browser's fetch, natively it drives its own connection pool, and in both
//! worlds redirects are followed so [`Uploaded::destination`] is the final
//! URL the browser should land on.

use dioxus::logger::tracing::debug;
use reqwest::{multipart, StatusCode};
use thiserror::Error;

use crate::config::UploadConfig;

const CSV_MIME: &str = "text/csv";

/// The current selection: one file, read into memory when it was staged.
///
/// Replaced wholesale by the next drop or selection; at most one exists at
/// a time.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Outcome of an accepted upload.
#[derive(Clone, Debug, PartialEq)]
pub struct Uploaded {
    /// Final URL of the response after any server-side redirect; the
    /// browser navigates here.
    pub destination: String,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("choose a CSV file before uploading")]
    NoFileSelected,

    /// The server answered outside the 2xx range. The display form is the
    /// server's own message so it can be surfaced to the user verbatim.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("could not reach the upload endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not read {0}")]
    UnreadableFile(String),
}

#[derive(Clone, Debug)]
pub struct UploadClient {
    http: reqwest::Client,
    config: UploadConfig,
}

impl UploadClient {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Post the staged file as the single field of a multipart form.
    ///
    /// 2xx responses resolve to [`Uploaded`]; anything else surfaces the
    /// response body (or the canonical status reason when the body is
    /// empty) as [`UploadError::Rejected`].
    pub async fn send(&self, file: &StagedFile) -> Result<Uploaded, UploadError> {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(CSV_MIME)?;
        let form = multipart::Form::new().part(self.config.field_name.clone(), part);

        let url = absolutize(&self.config.action);
        debug!("posting {} bytes of {} to {url}", file.bytes.len(), file.name);

        let response = self.http.post(&url).multipart(form).send().await?;
        let destination = response.url().to_string();
        let status = response.status();

        if status.is_success() {
            return Ok(Uploaded { destination });
        }

        let body = response.text().await.unwrap_or_default();
        Err(UploadError::Rejected {
            status: status.as_u16(),
            message: failure_message(status, body),
        })
    }
}

/// The error text shown for a rejected upload: the response body, or the
/// canonical status reason when the server sent nothing back.
pub(crate) fn failure_message(status: StatusCode, body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("upload failed")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

/// Resolve a relative action against the window origin. Absolute URLs pass
/// through untouched; without a window (native builds, tests) the value is
/// left as-is and the transport reports the failure.
pub(crate) fn absolutize(action: &str) -> String {
    if action.starts_with("http://") || action.starts_with("https://") {
        return action.to_string();
    }
    match window_origin() {
        Some(origin) => format!("{origin}{action}"),
        None => action.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn window_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn window_origin() -> Option<String> {
    None
}
