//! Cover/album-art supplier selection.
//!
//! A closed two-member choice with stable integer codes, used by the
//! audio metadata layer. Conversions are lenient: unknown input falls
//! back to a caller-supplied default and never errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where cover art is fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverSupplier {
    /// No cover supplier configured.
    #[default]
    None,
    /// The Cover Art Archive (coverartarchive.org).
    CoverArtArchive,
}

impl CoverSupplier {
    /// Stable integer code (0 = none, 1 = Cover Art Archive).
    pub const fn as_int(self) -> i32 {
        match self {
            CoverSupplier::None => 0,
            CoverSupplier::CoverArtArchive => 1,
        }
    }

    /// Convert an integer code, falling back to `default` for any
    /// unmapped value.
    pub const fn from_int_or(value: i32, default: CoverSupplier) -> CoverSupplier {
        match value {
            0 => CoverSupplier::None,
            1 => CoverSupplier::CoverArtArchive,
            _ => default,
        }
    }

    /// Convert an integer code, falling back to [`CoverSupplier::None`].
    pub const fn from_int(value: i32) -> CoverSupplier {
        Self::from_int_or(value, CoverSupplier::None)
    }

    /// Parse a supplier name case-insensitively, falling back to
    /// `default` for anything unrecognized.
    ///
    /// Accepted synonyms for the archive: `"coverartarchive"`,
    /// `"coverartarchive.org"` and `"cover art archive"`.
    pub fn from_name_or(name: Option<&str>, default: CoverSupplier) -> CoverSupplier {
        let Some(name) = name else {
            return default;
        };
        match name.to_lowercase().as_str() {
            "none" => CoverSupplier::None,
            "coverartarchive" | "coverartarchive.org" | "cover art archive" => {
                CoverSupplier::CoverArtArchive
            }
            _ => default,
        }
    }

    /// Parse a supplier name, falling back to [`CoverSupplier::None`].
    pub fn from_name(name: Option<&str>) -> CoverSupplier {
        Self::from_name_or(name, CoverSupplier::None)
    }
}

impl fmt::Display for CoverSupplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverSupplier::None => write!(f, "None"),
            CoverSupplier::CoverArtArchive => write!(f, "Cover Art Archive"),
        }
    }
}
