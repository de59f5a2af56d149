//! The upload widget: drop zone, hidden file input, and guarded submit.
//!
//! The original form's five DOM elements collapse into one component tree;
//! element references are owned by the tree, and all feedback is rendered
//! declaratively from [`UploadStatus`] instead of swapped into innerHTML.
//! File names only ever pass through rsx text nodes, which are escaped.

use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing::{debug, error, info, warn};
use dioxus::prelude::*;

use crate::config::UploadConfig;
use crate::upload::{StagedFile, UploadClient, UploadError};

/// Render state of the form. `Uploading` doubles as the reentrancy guard:
/// submit is a no-op while an upload is in flight.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadStatus {
    Idle,
    Uploading,
    Done,
    Failed(String),
}

#[component]
pub fn UploadWidget(config: UploadConfig) -> Element {
    let mut staged = use_signal(|| None as Option<StagedFile>);
    let mut hovered = use_signal(|| false);
    let mut status = use_signal(|| UploadStatus::Idle);

    let client = use_hook({
        let config = config.clone();
        move || UploadClient::new(config)
    });

    // Shared by the drop and browse paths: adopt the first file offered,
    // read it, and clear any stale error.
    let stage = move |files: Vec<FileData>| async move {
        let Some(file) = select_first(files) else {
            return;
        };
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => {
                info!("staged {name} ({} bytes)", bytes.len());
                staged.set(Some(StagedFile {
                    name,
                    bytes: bytes.to_vec(),
                }));
                status.set(UploadStatus::Idle);
            }
            Err(err) => {
                error!("could not read {name}: {err:?}");
                status.set(UploadStatus::Failed(
                    UploadError::UnreadableFile(name).to_string(),
                ));
            }
        }
    };

    let staged_name = staged.read().as_ref().map(|file| file.name.clone());
    let uploading = matches!(&*status.read(), UploadStatus::Uploading);

    rsx! {
        form { class: "upload-form",
            onsubmit: move |evt: FormEvent| {
                let client = client.clone();
                async move {
                    evt.prevent_default();
                    if matches!(&*status.read(), UploadStatus::Uploading) {
                        return;
                    }
                    let Some(file) = staged() else {
                        warn!("submit with nothing staged");
                        status.set(UploadStatus::Failed(UploadError::NoFileSelected.to_string()));
                        return;
                    };
                    status.set(UploadStatus::Uploading);
                    match client.send(&file).await {
                        Ok(uploaded) => {
                            info!("upload accepted, heading to {}", uploaded.destination);
                            status.set(UploadStatus::Done);
                            redirect(&uploaded.destination);
                        }
                        Err(err) => {
                            error!("upload failed: {err}");
                            status.set(UploadStatus::Failed(err.to_string()));
                        }
                    }
                }
            },

            label {
                r#for: "csv-file",
                class: zone_class(hovered()),
                ondragover: move |evt| {
                    evt.prevent_default();
                    hovered.set(true);
                },
                ondragleave: move |_| hovered.set(false),
                ondrop: move |evt| async move {
                    evt.prevent_default();
                    hovered.set(false);
                    stage(evt.files()).await;
                },
                if let Some(name) = staged_name {
                    SelectionBadge { name }
                } else {
                    p { class: "zone-title", "Drag & drop your CSV here" }
                    p { class: "zone-hint", "or click to browse" }
                }
            }

            input {
                id: "csv-file",
                class: "file-input",
                r#type: "file",
                accept: "{config.accept}",
                onchange: move |evt| async move { stage(evt.files()).await },
            }

            StatusLine { status: status() }

            button {
                r#type: "submit",
                class: "submit-button",
                disabled: uploading,
                if uploading { "Uploading…" } else { "Upload" }
            }
        }
    }
}

/// Success indicator for the current selection.
#[component]
pub fn SelectionBadge(name: String) -> Element {
    rsx! {
        p { class: "file-badge",
            span { class: "file-badge-tick", "✓" }
            span { class: "file-badge-name", "{name}" }
            " is ready to upload"
        }
    }
}

/// Inline feedback under the drop zone. Idle and in-flight states render
/// nothing; the button already carries the in-flight label.
#[component]
pub fn StatusLine(status: UploadStatus) -> Element {
    match status {
        UploadStatus::Idle | UploadStatus::Uploading => rsx! {},
        UploadStatus::Done => rsx! {
            p { class: "status", "Upload accepted, loading the report…" }
        },
        UploadStatus::Failed(message) => rsx! {
            p { class: "status status-error", role: "alert", "{message}" }
        },
    }
}

pub(crate) fn zone_class(hovered: bool) -> &'static str {
    if hovered {
        "drop-zone active"
    } else {
        "drop-zone"
    }
}

/// First-file-only policy: the uploader stages one file at a time, so any
/// extras in a multi-file drop are dropped on the floor.
pub(crate) fn select_first<T>(files: Vec<T>) -> Option<T> {
    let mut files = files.into_iter();
    let first = files.next();
    let ignored = files.count();
    if ignored > 0 {
        debug!("ignoring {ignored} additional files");
    }
    first
}

/// Fire-and-forget navigation to the server-provided destination. Not
/// awaited: the form must finish restoring itself while the page change is
/// in flight.
fn redirect(destination: &str) {
    let target = serde_json::Value::String(destination.to_owned()).to_string();
    _ = document::eval(&format!("window.location.assign({target})"));
}
