//! Image and file upload elements
//!
//! Clicking the drop zone opens the native file picker. Only the picked
//! file's name is recorded; nothing is read from disk or sent anywhere.

use dioxus::prelude::*;
use formula_core::{ElementId, FormError};
use formula_ir::ElementContent;

use crate::components::form_element::edit_content;
use crate::components::inputs::{InputVariant, TextInput};
use crate::components::text_block::ElementViewProps;
use crate::file_ops::{PickKind, pick_file_name};
use crate::state::{APP_STATE, StatusLevel};

/// Open the picker and record the chosen file on the element
fn pick_into(id: ElementId, kind: PickKind) {
    spawn(async move {
        match pick_file_name(kind).await {
            Ok(name) => edit_content(id, |c| c.with_picked_file(&name)),
            Err(FormError::Cancelled) => tracing::debug!("File picker dismissed"),
            Err(e) => {
                tracing::error!("File picker failed: {}", e);
                APP_STATE
                    .write()
                    .ui
                    .set_status(format!("Could not pick a file: {}", e), StatusLevel::Error);
            }
        }
    });
}

// ============================================================================
// Image
// ============================================================================

/// Image element
#[component]
pub fn ImageView(props: ElementViewProps) -> Element {
    let element = props.element;
    let id = element.id;
    let title = element.display_title();
    let image_url = match &element.content {
        ElementContent::Image { image_url, .. } => image_url.clone(),
        _ => None,
    };

    rsx! {
        div {
            class: "fm-media",

            if props.editing {
                TextInput {
                    value: title.clone(),
                    variant: InputVariant::Title,
                    on_change: move |v: String| edit_content(id, |c| c.with_title(v)),
                }
            }

            if let Some(url) = image_url {
                div {
                    class: "fm-image-frame",
                    img { class: "fm-image", src: "{url}", alt: "{title}" }
                    if props.editing {
                        button {
                            class: "fm-icon-btn fm-image-clear",
                            title: "Remove image",
                            onclick: move |e| {
                                e.stop_propagation();
                                edit_content(id, ElementContent::without_picked_file);
                            },
                            "✕"
                        }
                    }
                }
            } else {
                div {
                    class: "fm-dropzone",
                    onclick: move |e| {
                        e.stop_propagation();
                        pick_into(id, PickKind::Image);
                    },
                    div { class: "fm-dropzone-icon", "🖼️" }
                    p { class: "fm-dropzone-text", "Click to upload an image" }
                    p { class: "fm-hint", "PNG, JPG, GIF up to 10MB" }
                }
            }
        }
    }
}

// ============================================================================
// File Upload
// ============================================================================

/// File upload element
#[component]
pub fn FileUploadView(props: ElementViewProps) -> Element {
    let element = props.element;
    let id = element.id;
    let title = element.display_title();
    let file_name = match &element.content {
        ElementContent::File { file_url, .. } => file_url.clone(),
        _ => None,
    };

    rsx! {
        div {
            class: "fm-media",

            if props.editing {
                TextInput {
                    value: title,
                    variant: InputVariant::Title,
                    on_change: move |v: String| edit_content(id, |c| c.with_title(v)),
                }
            } else {
                label { class: "fm-field-label", "{title}" }
            }

            if let Some(name) = file_name {
                div {
                    class: "fm-file-picked",
                    span { class: "fm-file-icon", "📄" }
                    div {
                        class: "fm-file-info",
                        p { class: "fm-file-name", "{name}" }
                        p { class: "fm-hint fm-hint-success", "Uploaded successfully" }
                    }
                    if props.editing {
                        button {
                            class: "fm-icon-btn",
                            title: "Remove file",
                            onclick: move |e| {
                                e.stop_propagation();
                                edit_content(id, ElementContent::without_picked_file);
                            },
                            "✕"
                        }
                    }
                }
            } else {
                div {
                    class: "fm-dropzone",
                    onclick: move |e| {
                        e.stop_propagation();
                        pick_into(id, PickKind::Document);
                    },
                    div { class: "fm-dropzone-icon", "📤" }
                    button { class: "fm-btn fm-btn-secondary", r#type: "button", "Browse Files" }
                    p { class: "fm-dropzone-text", "Drag and drop files here or click to browse" }
                    p { class: "fm-hint", "PDF, DOCX, XLS up to 10MB" }
                }
            }
        }
    }
}
