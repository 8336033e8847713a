//! mediakind: format classification and filename matching for
//! media-server pipelines.
//!
//! The crate answers two questions about a media resource:
//!
//! - **Which format is this?** A [`FormatDescriptor`] matches filenames
//!   against its declared extensions and carries the per-format
//!   properties (identifier, icon, transcodability, secondary
//!   interpretation) the rest of the pipeline needs.
//! - **What kind of thing is it?** [`MediaKind`] is the coarse category
//!   bitmask (audio/video/image/...), orthogonal to the fine-grained
//!   [`FormatIdentifier`].
//!
//! Compatibility with a specific renderer is delegated to a
//! [`RendererSupport`] collaborator; this crate never decides native
//! playback itself.
//!
//! # Example
//!
//! ```
//! use mediakind::{FormatDescriptor, FormatIdentifier, MatchState, MediaKind};
//!
//! let mp3 = FormatDescriptor::new(FormatIdentifier::Mp3, MediaKind::AUDIO)
//!     .with_extensions(["mp3", "mpa"])
//!     .with_transcodable(true);
//!
//! let mut state = MatchState::new();
//! assert!(mp3.match_filename("Song.MP3", &mut state));
//! assert_eq!(state.matched_extension(), Some("mp3"));
//!
//! // URIs are never matched by extension.
//! assert!(!mp3.match_filename("http://host/stream.mp3", &mut state));
//! ```

pub mod cover;
pub mod descriptor;
pub mod error;
pub mod identifier;
pub mod kind;
pub mod mime;
pub mod renderer;
pub mod uri;

pub use cover::CoverSupplier;
pub use descriptor::{FormatDescriptor, MatchState};
pub use error::{Error, Result};
pub use identifier::FormatIdentifier;
pub use kind::MediaKind;
pub use renderer::{DirectPlayRenderer, MediaItem, RendererSupport};
