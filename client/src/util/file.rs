//! Helpers for the file picker.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use crate::state::submission::SelectedFile;

/// MIME filter applied by the picker. The only file validation performed.
pub const PDF_ACCEPT: &str = "application/pdf";

/// Human-readable byte count (`512 B`, `1.5 KB`, `2.0 MB`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

/// Label shown next to the picker.
#[must_use]
pub fn selection_label(file: Option<&SelectedFile>) -> String {
    match file {
        Some(f) => format!("{} ({})", f.name, format_size(f.size)),
        None => "No file selected".to_owned(),
    }
}

/// First file from an `<input type="file">` change event.
#[cfg(feature = "hydrate")]
pub fn file_from_event(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|list| list.get(0))
}

#[cfg(feature = "hydrate")]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn describe(file: &web_sys::File) -> SelectedFile {
    SelectedFile { name: file.name(), size: file.size().max(0.0) as u64, mime: file.type_() }
}
