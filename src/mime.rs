//! Default MIME types per coarse media category.
//!
//! Concrete formats carry their own precise MIME tables elsewhere in the
//! server; this is only the category-level fallback a descriptor reports
//! when nothing more specific is known.

use crate::kind::MediaKind;

/// Fallback MIME string for a media category.
pub fn default_mime_type(kind: MediaKind) -> &'static str {
    if kind.is_video() {
        "video/mpeg"
    } else if kind.is_audio() {
        "audio/mpeg"
    } else if kind.is_image() {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}
