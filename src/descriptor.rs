//! Format descriptors and filename matching.
//!
//! A [`FormatDescriptor`] is the immutable description of one known
//! format: its identifier, its coarse [`MediaKind`], the file extensions
//! it claims, and a few per-format properties. Matching a filename never
//! mutates the descriptor; the extension that matched is written into a
//! caller-owned [`MatchState`], so descriptors can be shared freely
//! across requests (they are registry-scoped and long-lived).

use crate::identifier::FormatIdentifier;
use crate::kind::MediaKind;
use crate::mime;
use crate::renderer::{MediaItem, RendererSupport};
use crate::uri;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Immutable description of one known media format.
#[derive(Debug, Clone)]
pub struct FormatDescriptor {
    identifier: FormatIdentifier,
    kind: MediaKind,
    extensions: Vec<String>,
    transcodable: bool,
    icon: Option<String>,
    secondary: Option<Arc<FormatDescriptor>>,
}

impl FormatDescriptor {
    /// Create a descriptor with no extensions, no icon and no secondary
    /// format. The classification is fixed here for the lifetime of the
    /// descriptor.
    pub fn new(identifier: FormatIdentifier, kind: MediaKind) -> Self {
        FormatDescriptor {
            identifier,
            kind,
            extensions: Vec::new(),
            transcodable: false,
            icon: None,
            secondary: None,
        }
    }

    /// Declare the file extensions this format matches, lower-case and
    /// without the leading dot. A format with no extensions never matches
    /// by filename; protocol-based formats (web streams) stay that way
    /// and are matched by URI scheme elsewhere.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Mark this format as transcodable.
    pub fn with_transcodable(mut self, transcodable: bool) -> Self {
        self.transcodable = transcodable;
        self
    }

    /// Attach a static icon resource reference.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Link an alternate interpretation of this format. The secondary
    /// descriptor is a shared peer, not owned by this one.
    pub fn with_secondary(mut self, secondary: Arc<FormatDescriptor>) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// The unique tag for this format.
    pub fn identifier(&self) -> FormatIdentifier {
        self.identifier
    }

    /// The coarse category this format was classified as at construction.
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// The declared extensions, as given to [`with_extensions`](Self::with_extensions).
    pub fn supported_extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether the server may transcode this format.
    pub fn transcodable(&self) -> bool {
        self.transcodable
    }

    /// Static icon resource reference, if any.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Alternate interpretation of this format, if one is linked.
    pub fn secondary(&self) -> Option<&FormatDescriptor> {
        self.secondary.as_deref()
    }

    /// Match `filename` against the declared extensions.
    ///
    /// Lower-casing is locale-independent, so extension matching is not
    /// affected by locale case folding. URIs are rejected outright even
    /// when their path ends in a supported extension; those belong to the
    /// web format. On success the matched extension (lower-case, no dot)
    /// is recorded into `state` and `true` is returned; a failed match
    /// leaves `state` untouched.
    pub fn match_filename(&self, filename: &str, state: &mut MatchState) -> bool {
        if filename.is_empty() {
            return false;
        }

        let filename = filename.to_lowercase();

        if !self.extensions.is_empty() {
            if uri::protocol(&filename).is_some() {
                // URIs are handled by the web format, not by extension.
                return false;
            }

            for extension in &self.extensions {
                let extension = extension.to_lowercase();
                if filename.ends_with(&format!(".{extension}")) {
                    trace!(format = %self.identifier, %extension, "matched filename extension");
                    state.matched_extension = Some(extension);
                    return true;
                }
            }
        }

        false
    }

    /// Whether the renderer can stream this format natively.
    ///
    /// The decision is delegated entirely to the renderer collaborator:
    /// `renderer` when one is in scope, otherwise the `fallback` resolved
    /// at the composition root. This method only selects which instance
    /// decides.
    pub fn is_compatible(
        &self,
        item: &MediaItem,
        renderer: Option<&dyn RendererSupport>,
        fallback: &dyn RendererSupport,
    ) -> bool {
        renderer.unwrap_or(fallback).is_compatible(item, self)
    }

    /// Default MIME type for this format's media category.
    pub fn mime_type(&self) -> &'static str {
        mime::default_mime_type(self.kind)
    }
}

impl fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)
    }
}

/// Caller-owned record of the most recent successful match.
///
/// Replaces shared mutable state on the descriptor: each request keeps
/// its own `MatchState`, so concurrent matching against the same shared
/// descriptor cannot observe another caller's result.
#[derive(Debug, Clone, Default)]
pub struct MatchState {
    matched_extension: Option<String>,
}

impl MatchState {
    /// Fresh state with no recorded match.
    pub fn new() -> Self {
        MatchState::default()
    }

    /// The extension that caused the most recent successful match,
    /// lower-case and without the leading dot.
    pub fn matched_extension(&self) -> Option<&str> {
        self.matched_extension.as_deref()
    }

    /// Whether the matched extension falls in any of the given
    /// comma-separated extension groups.
    ///
    /// A literal `"*"` group skips unconditionally, with or without a
    /// prior match. Empty group entries are ignored. With no recorded
    /// match and no `"*"`, the answer is `false`.
    pub fn skip(&self, extension_groups: &[&str]) -> bool {
        for group in extension_groups {
            if *group == "*" {
                return true;
            }

            let Some(matched) = self.matched_extension.as_deref() else {
                continue;
            };

            for extension in group.split(',') {
                let extension = extension.trim();
                if !extension.is_empty() && extension.eq_ignore_ascii_case(matched) {
                    return true;
                }
            }
        }

        false
    }
}
