//! Fine-grained format identifiers.
//!
//! One tag per known container/codec/subtitle format. The identifier says
//! *which* format a descriptor represents and never changes for the
//! lifetime of that descriptor; the coarse category lives separately in
//! [`MediaKind`](crate::MediaKind).

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of formats known to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatIdentifier {
    Aacp,
    Ac3,
    Adpcm,
    Adts,
    Aiff,
    Ape,
    Atrac,
    Au,
    AudioAsVideo,
    Ass,
    Bmp,
    Dff,
    Dsf,
    Dts,
    Dvrms,
    Eac3,
    Flac,
    Gif,
    Rgbe,
    Icns,
    Ico,
    Iff,
    Idx,
    Iso,
    IsoVob,
    Jpg,
    M4a,
    MicroDvd,
    Mka,
    Mkv,
    Mlp,
    Mp3,
    Mpa,
    Mpc,
    Mpg,
    Oga,
    Ogg,
    Pcx,
    Pict,
    Png,
    Pnm,
    Psd,
    Ra,
    Raw,
    Sami,
    Sgi,
    Shn,
    SubRip,
    Sup,
    Tga,
    Thd,
    ThreeGa,
    ThreeG2a,
    Tiff,
    Tta,
    Txt,
    Wav,
    Wbmp,
    Web,
    Webp,
    WebVtt,
    Wma,
    Wv,
    Custom,
    Playlist,
}

impl FormatIdentifier {
    /// Lowercase token used for display and parsing.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Aacp => "aacp",
            Self::Ac3 => "ac3",
            Self::Adpcm => "adpcm",
            Self::Adts => "adts",
            Self::Aiff => "aiff",
            Self::Ape => "ape",
            Self::Atrac => "atrac",
            Self::Au => "au",
            Self::AudioAsVideo => "audioasvideo",
            Self::Ass => "ass",
            Self::Bmp => "bmp",
            Self::Dff => "dff",
            Self::Dsf => "dsf",
            Self::Dts => "dts",
            Self::Dvrms => "dvrms",
            Self::Eac3 => "eac3",
            Self::Flac => "flac",
            Self::Gif => "gif",
            Self::Rgbe => "rgbe",
            Self::Icns => "icns",
            Self::Ico => "ico",
            Self::Iff => "iff",
            Self::Idx => "idx",
            Self::Iso => "iso",
            Self::IsoVob => "isovob",
            Self::Jpg => "jpg",
            Self::M4a => "m4a",
            Self::MicroDvd => "microdvd",
            Self::Mka => "mka",
            Self::Mkv => "mkv",
            Self::Mlp => "mlp",
            Self::Mp3 => "mp3",
            Self::Mpa => "mpa",
            Self::Mpc => "mpc",
            Self::Mpg => "mpg",
            Self::Oga => "oga",
            Self::Ogg => "ogg",
            Self::Pcx => "pcx",
            Self::Pict => "pict",
            Self::Png => "png",
            Self::Pnm => "pnm",
            Self::Psd => "psd",
            Self::Ra => "ra",
            Self::Raw => "raw",
            Self::Sami => "sami",
            Self::Sgi => "sgi",
            Self::Shn => "shn",
            Self::SubRip => "subrip",
            Self::Sup => "sup",
            Self::Tga => "tga",
            Self::Thd => "thd",
            Self::ThreeGa => "threega",
            Self::ThreeG2a => "threeg2a",
            Self::Tiff => "tiff",
            Self::Tta => "tta",
            Self::Txt => "txt",
            Self::Wav => "wav",
            Self::Wbmp => "wbmp",
            Self::Web => "web",
            Self::Webp => "webp",
            Self::WebVtt => "webvtt",
            Self::Wma => "wma",
            Self::Wv => "wv",
            Self::Custom => "custom",
            Self::Playlist => "playlist",
        }
    }
}

impl fmt::Display for FormatIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for FormatIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aacp" => Ok(Self::Aacp),
            "ac3" => Ok(Self::Ac3),
            "adpcm" => Ok(Self::Adpcm),
            "adts" => Ok(Self::Adts),
            "aiff" => Ok(Self::Aiff),
            "ape" => Ok(Self::Ape),
            "atrac" => Ok(Self::Atrac),
            "au" => Ok(Self::Au),
            "audioasvideo" => Ok(Self::AudioAsVideo),
            "ass" => Ok(Self::Ass),
            "bmp" => Ok(Self::Bmp),
            "dff" => Ok(Self::Dff),
            "dsf" => Ok(Self::Dsf),
            "dts" => Ok(Self::Dts),
            "dvrms" => Ok(Self::Dvrms),
            "eac3" => Ok(Self::Eac3),
            "flac" => Ok(Self::Flac),
            "gif" => Ok(Self::Gif),
            "rgbe" => Ok(Self::Rgbe),
            "icns" => Ok(Self::Icns),
            "ico" => Ok(Self::Ico),
            "iff" => Ok(Self::Iff),
            "idx" => Ok(Self::Idx),
            "iso" => Ok(Self::Iso),
            "isovob" => Ok(Self::IsoVob),
            "jpg" => Ok(Self::Jpg),
            "m4a" => Ok(Self::M4a),
            "microdvd" => Ok(Self::MicroDvd),
            "mka" => Ok(Self::Mka),
            "mkv" => Ok(Self::Mkv),
            "mlp" => Ok(Self::Mlp),
            "mp3" => Ok(Self::Mp3),
            "mpa" => Ok(Self::Mpa),
            "mpc" => Ok(Self::Mpc),
            "mpg" => Ok(Self::Mpg),
            "oga" => Ok(Self::Oga),
            "ogg" => Ok(Self::Ogg),
            "pcx" => Ok(Self::Pcx),
            "pict" => Ok(Self::Pict),
            "png" => Ok(Self::Png),
            "pnm" => Ok(Self::Pnm),
            "psd" => Ok(Self::Psd),
            "ra" => Ok(Self::Ra),
            "raw" => Ok(Self::Raw),
            "sami" => Ok(Self::Sami),
            "sgi" => Ok(Self::Sgi),
            "shn" => Ok(Self::Shn),
            "subrip" => Ok(Self::SubRip),
            "sup" => Ok(Self::Sup),
            "tga" => Ok(Self::Tga),
            "thd" => Ok(Self::Thd),
            "threega" => Ok(Self::ThreeGa),
            "threeg2a" => Ok(Self::ThreeG2a),
            "tiff" => Ok(Self::Tiff),
            "tta" => Ok(Self::Tta),
            "txt" => Ok(Self::Txt),
            "wav" => Ok(Self::Wav),
            "wbmp" => Ok(Self::Wbmp),
            "web" => Ok(Self::Web),
            "webp" => Ok(Self::Webp),
            "webvtt" => Ok(Self::WebVtt),
            "wma" => Ok(Self::Wma),
            "wv" => Ok(Self::Wv),
            "custom" => Ok(Self::Custom),
            "playlist" => Ok(Self::Playlist),
            other => Err(Error::UnknownIdentifier(other.to_string())),
        }
    }
}
