//! Renderer-support collaborator.
//!
//! Whether a format can be streamed natively or has to be transcoded is a
//! per-renderer decision. The format layer never decides this itself; it
//! only picks which [`RendererSupport`] implementation gets asked (see
//! [`FormatDescriptor::is_compatible`](crate::FormatDescriptor::is_compatible)).

use crate::descriptor::FormatDescriptor;
use std::path::PathBuf;

/// Opaque description of a library resource.
///
/// The format layer passes this through unexamined; renderer
/// implementations inspect whatever fields they care about.
#[derive(Debug, Clone, Default)]
pub struct MediaItem {
    /// Filesystem path of the resource, when it is file-backed.
    pub path: Option<PathBuf>,
    /// Container token as reported by probing, if any.
    pub container: Option<String>,
    /// Size in bytes, if known.
    pub size_bytes: Option<u64>,
}

impl MediaItem {
    /// Item backed by a file on disk.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        MediaItem {
            path: Some(path.into()),
            ..MediaItem::default()
        }
    }
}

/// Per-renderer native-playback decision.
pub trait RendererSupport {
    /// Whether `item`, interpreted as `format`, can be streamed to this
    /// renderer without transcoding.
    fn is_compatible(&self, item: &MediaItem, format: &FormatDescriptor) -> bool;
}

/// Permissive fallback renderer that direct-plays everything.
///
/// Intended as the composition-root default when no specific renderer is
/// in scope for a compatibility check.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectPlayRenderer;

impl RendererSupport for DirectPlayRenderer {
    fn is_compatible(&self, _item: &MediaItem, _format: &FormatDescriptor) -> bool {
        true
    }
}
