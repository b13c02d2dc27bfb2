//! File picking for image and upload elements
//!
//! Uses the `rfd` crate for native file dialogs. Only the picked file's name
//! is kept; nothing is read or uploaded.

use formula_core::{FormError, FormResult};
use rfd::AsyncFileDialog;
use std::path::Path;

// ============================================================================
// File Filter Constants
// ============================================================================

/// Extensions offered when picking an image
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Extensions offered when picking a document
pub const DOCUMENT_EXTENSIONS: [&str; 4] = ["pdf", "docx", "xls", "xlsx"];

/// What kind of file the dialog asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickKind {
    Image,
    Document,
}

impl PickKind {
    fn title(self) -> &'static str {
        match self {
            PickKind::Image => "Choose an Image",
            PickKind::Document => "Choose a File",
        }
    }

    fn filter(self) -> (&'static str, &'static [&'static str]) {
        match self {
            PickKind::Image => ("Images", &IMAGE_EXTENSIONS),
            PickKind::Document => ("Documents", &DOCUMENT_EXTENSIONS),
        }
    }
}

// ============================================================================
// File Dialog Functions
// ============================================================================

/// Open a native dialog and return the picked file's name
///
/// Returns `FormError::Cancelled` when the dialog is dismissed.
pub async fn pick_file_name(kind: PickKind) -> FormResult<String> {
    let (filter_name, extensions) = kind.filter();

    let file = AsyncFileDialog::new()
        .set_title(kind.title())
        .add_filter(filter_name, extensions)
        .add_filter("All Files", &["*"])
        .pick_file()
        .await
        .ok_or(FormError::Cancelled)?;

    let name = file_name_of(file.path())?;
    tracing::debug!("Picked file '{}'", name);
    Ok(name)
}

/// Final path component as a string
fn file_name_of(path: &Path) -> FormResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| FormError::internal(format!("picked path has no file name: {}", path.display())))
}

// ============================================================================
// Tests
// ============================================================================
