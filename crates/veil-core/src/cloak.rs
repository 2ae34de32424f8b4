//! Cloak display encoding
//!
//! Reversible base64 rendering of outgoing text for the local echo.
//! This is obfuscation for display, not encryption: in cloak-only mode
//! the plain text is what actually gets transmitted, and only the local
//! echo is encoded so the sender can rehearse the obfuscated look while
//! verifying that plaintext went out.

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Label prefixed to every cloaked rendering.
pub const CLOAK_LABEL: &str = "Encoded Phrase: ";

/// Encode `text` for cloaked local display.
pub fn cloak(text: &str) -> String {
    format!("{CLOAK_LABEL}{}", STANDARD.encode(text.as_bytes()))
}

/// Decode a cloaked rendering back to the original text.
///
/// Returns `None` if `display` lacks the label, the payload is not
/// valid base64, or the decoded bytes are not UTF-8.
pub fn reveal(display: &str) -> Option<String> {
    let payload = display.strip_prefix(CLOAK_LABEL)?;
    let bytes = STANDARD.decode(payload).ok()?;
    String::from_utf8(bytes).ok()
}
