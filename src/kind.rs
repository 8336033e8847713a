//! Coarse media category bitmask.
//!
//! [`MediaKind`] tells the pipeline *what kind of thing* a format is
//! (audio, video, image, ...), independently of *which* format it is
//! (see [`FormatIdentifier`](crate::FormatIdentifier)). The bits are
//! orthogonal so a mask can in principle carry several categories, but
//! every shipped format descriptor sets exactly one dominant bit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bitmask over the coarse media categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaKind(u32);

impl MediaKind {
    /// No classification yet.
    pub const UNSET: MediaKind = MediaKind(0);
    /// Audio-only content.
    pub const AUDIO: MediaKind = MediaKind(1);
    /// Still image.
    pub const IMAGE: MediaKind = MediaKind(2);
    /// Video (audio + video container).
    pub const VIDEO: MediaKind = MediaKind(4);
    /// Unrecognized content.
    pub const UNKNOWN: MediaKind = MediaKind(8);
    /// Playlist container.
    pub const PLAYLIST: MediaKind = MediaKind(16);
    /// Optical-disc image.
    pub const ISO: MediaKind = MediaKind(32);
    /// Subtitle track.
    pub const SUBTITLE: MediaKind = MediaKind(64);

    /// Construct a kind from raw bits. No validation is performed; the
    /// display form of an undefined mask is the `"NOT DEFINED"` sentinel.
    pub const fn from_bits(bits: u32) -> MediaKind {
        MediaKind(bits)
    }

    /// The raw bit representation.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True iff the video bit is set, regardless of other bits.
    pub const fn is_video(self) -> bool {
        self.0 & Self::VIDEO.0 == Self::VIDEO.0
    }

    /// True iff the audio bit is set, regardless of other bits.
    pub const fn is_audio(self) -> bool {
        self.0 & Self::AUDIO.0 == Self::AUDIO.0
    }

    /// True iff the image bit is set, regardless of other bits.
    pub const fn is_image(self) -> bool {
        self.0 & Self::IMAGE.0 == Self::IMAGE.0
    }

    /// True iff the unknown bit is set, regardless of other bits.
    pub const fn is_unknown(self) -> bool {
        self.0 & Self::UNKNOWN.0 == Self::UNKNOWN.0
    }

    /// True iff the subtitle bit is set, regardless of other bits.
    pub const fn is_subtitle(self) -> bool {
        self.0 & Self::SUBTITLE.0 == Self::SUBTITLE.0
    }

    /// Canonical label for the seven defined single-bit values.
    ///
    /// This is an exact-value lookup, not a bitwise test: `UNSET`,
    /// composite masks, and out-of-range values all yield the literal
    /// `"NOT DEFINED"` sentinel. Display code relies on that asymmetry
    /// with the bit predicates above.
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "AUDIO",
            2 => "IMAGE",
            4 => "VIDEO",
            8 => "UNKNOWN",
            16 => "PLAYLIST",
            32 => "ISO",
            64 => "SUBTITLE",
            _ => "NOT DEFINED",
        }
    }
}

impl BitOr for MediaKind {
    type Output = MediaKind;

    fn bitor(self, rhs: MediaKind) -> MediaKind {
        MediaKind(self.0 | rhs.0)
    }
}

impl BitOrAssign for MediaKind {
    fn bitor_assign(&mut self, rhs: MediaKind) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_all_defined_bits() {
        assert_eq!(MediaKind::AUDIO.label(), "AUDIO");
        assert_eq!(MediaKind::IMAGE.label(), "IMAGE");
        assert_eq!(MediaKind::VIDEO.label(), "VIDEO");
        assert_eq!(MediaKind::UNKNOWN.label(), "UNKNOWN");
        assert_eq!(MediaKind::PLAYLIST.label(), "PLAYLIST");
        assert_eq!(MediaKind::ISO.label(), "ISO");
        assert_eq!(MediaKind::SUBTITLE.label(), "SUBTITLE");
    }

    #[test]
    fn label_is_exact_match_only() {
        assert_eq!(MediaKind::UNSET.label(), "NOT DEFINED");
        assert_eq!((MediaKind::AUDIO | MediaKind::VIDEO).label(), "NOT DEFINED");
        assert_eq!(MediaKind::from_bits(128).label(), "NOT DEFINED");
        assert_eq!(MediaKind::from_bits(3).label(), "NOT DEFINED");
    }

    #[test]
    fn predicates_are_bitwise() {
        let composite = MediaKind::VIDEO | MediaKind::SUBTITLE;
        assert!(composite.is_video());
        assert!(composite.is_subtitle());
        assert!(!composite.is_audio());
        assert!(!composite.is_image());
        assert!(!composite.is_unknown());

        // Extra bits do not disturb the named-bit test.
        let noisy = MediaKind::from_bits(MediaKind::AUDIO.bits() | 128);
        assert!(noisy.is_audio());
        assert!(!noisy.is_video());
    }

    #[test]
    fn unset_matches_no_predicate() {
        assert!(!MediaKind::UNSET.is_audio());
        assert!(!MediaKind::UNSET.is_video());
        assert!(!MediaKind::UNSET.is_image());
        assert!(!MediaKind::UNSET.is_unknown());
        assert!(!MediaKind::UNSET.is_subtitle());
    }

    #[test]
    fn default_is_unset() {
        assert_eq!(MediaKind::default(), MediaKind::UNSET);
    }

    #[test]
    fn bits_roundtrip() {
        for kind in [
            MediaKind::UNSET,
            MediaKind::AUDIO,
            MediaKind::IMAGE,
            MediaKind::VIDEO,
            MediaKind::UNKNOWN,
            MediaKind::PLAYLIST,
            MediaKind::ISO,
            MediaKind::SUBTITLE,
        ] {
            assert_eq!(MediaKind::from_bits(kind.bits()), kind);
        }
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&MediaKind::VIDEO).unwrap();
        assert_eq!(json, "4");
        let back: MediaKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MediaKind::VIDEO);
    }
}
