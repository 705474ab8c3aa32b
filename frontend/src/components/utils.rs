use gloo_file::File as GlooFile;
use web_sys::HtmlInputElement;

/// Blocking user notification, matching the demo's alert-per-action style.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// First file of a file input, if any. No type or size filtering: whatever
/// the picker yields is accepted.
pub fn first_file(input: &HtmlInputElement) -> Option<GlooFile> {
    input.files().and_then(|list| list.item(0)).map(GlooFile::from)
}
