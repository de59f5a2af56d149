//! Build-time configuration for the upload form.
//!
//! The wasm target has no runtime environment, so overrides bind at compile
//! time via `option_env!`, the same way the Dioxus CLI passes settings into
//! a build.

/// Endpoint the form posts to when no override is set.
pub const DEFAULT_ACTION: &str = "/upload";

/// Multipart field name the server expects the file under.
pub const DEFAULT_FIELD: &str = "file";

/// File picker filter for the hidden input.
pub const DEFAULT_ACCEPT: &str = ".csv";

/// Where and how the widget submits the staged file.
///
/// Constructed once per launch and handed to [`crate::widget::UploadWidget`]
/// as a prop; nothing in the component tree reaches for globals.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadConfig {
    /// Target URL of the POST. A relative value is resolved against the
    /// window origin at request time.
    pub action: String,
    /// Name of the single multipart field carrying the file.
    pub field_name: String,
    /// `accept` filter applied to the native file picker.
    pub accept: String,
}

impl UploadConfig {
    pub fn from_build_env() -> Self {
        Self {
            action: option_env!("CSV_DROPZONE_ACTION")
                .unwrap_or(DEFAULT_ACTION)
                .to_string(),
            field_name: option_env!("CSV_DROPZONE_FIELD")
                .unwrap_or(DEFAULT_FIELD)
                .to_string(),
            accept: option_env!("CSV_DROPZONE_ACCEPT")
                .unwrap_or(DEFAULT_ACCEPT)
                .to_string(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
