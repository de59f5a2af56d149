#![doc = include_str!("../README.md")]

pub mod config;
pub mod upload;
pub mod widget;

use dioxus::prelude::*;

use crate::config::UploadConfig;
use crate::widget::UploadWidget;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root view: page chrome around the upload widget.
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        main { class: "page",
            h1 { "Upload a CSV for scanning" }
            UploadWidget { config: UploadConfig::default() }
        }
    }
}
