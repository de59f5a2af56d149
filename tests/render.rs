use csv_dropzone::config::UploadConfig;
use csv_dropzone::widget::{
    SelectionBadge, SelectionBadgeProps, StatusLine, StatusLineProps, UploadStatus, UploadWidget,
    UploadWidgetProps,
};
use dioxus::prelude::*;

fn render_widget(config: UploadConfig) -> String {
    let mut dom = VirtualDom::new_with_props(UploadWidget, UploadWidgetProps { config });
    dom.rebuild(&mut dioxus::dioxus_core::NoOpMutations);
    dioxus_ssr::render(&dom)
}

fn render_status(status: UploadStatus) -> String {
    let mut dom = VirtualDom::new_with_props(StatusLine, StatusLineProps { status });
    dom.rebuild(&mut dioxus::dioxus_core::NoOpMutations);
    dioxus_ssr::render(&dom)
}

#[test]
fn initial_render_offers_the_empty_zone() {
    let html = render_widget(UploadConfig::default());

    assert!(html.contains("drop your CSV here"));
    assert!(html.contains("click to browse"));
    assert!(html.contains(r#"type="file""#));
    assert!(html.contains("Upload</button>"));
    // No selection yet, so no preview and no error.
    assert!(!html.contains("file-badge"));
    assert!(!html.contains("status-error"));
}

#[test]
fn the_accept_filter_comes_from_config() {
    let html = render_widget(UploadConfig::default());
    assert!(html.contains(r#"accept=".csv""#));

    let html = render_widget(UploadConfig {
        accept: ".tsv".to_string(),
        ..UploadConfig::default()
    });
    assert!(html.contains(r#"accept=".tsv""#));
}

#[test]
fn selection_badge_shows_the_file_name_verbatim() {
    let mut dom = VirtualDom::new_with_props(
        SelectionBadge,
        SelectionBadgeProps {
            name: "findings-2024.csv".to_string(),
        },
    );
    dom.rebuild(&mut dioxus::dioxus_core::NoOpMutations);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("findings-2024.csv"));
    assert!(html.contains("ready to upload"));
}

#[test]
fn markup_in_a_file_name_renders_inert() {
    let mut dom = VirtualDom::new_with_props(
        SelectionBadge,
        SelectionBadgeProps {
            name: "<img src=x onerror=alert(1)>.csv".to_string(),
        },
    );
    dom.rebuild(&mut dioxus::dioxus_core::NoOpMutations);
    let html = dioxus_ssr::render(&dom);

    assert!(!html.contains("<img"));
    assert!(html.contains("&#60;img"));
}

#[test]
fn idle_status_renders_nothing() {
    assert_eq!(render_status(UploadStatus::Idle), "");
    assert_eq!(render_status(UploadStatus::Uploading), "");
}

#[test]
fn failed_status_surfaces_the_message() {
    let html = render_status(UploadStatus::Failed("bad header row".to_string()));
    assert!(html.contains("status-error"));
    assert!(html.contains("bad header row"));
}

#[test]
fn done_status_announces_the_handoff() {
    let html = render_status(UploadStatus::Done);
    assert!(html.contains("Upload accepted"));
    assert!(!html.contains("status-error"));
}
