//! Protocol detection for filename strings.
//!
//! Extension matching must reject URIs outright: a stream URL whose path
//! happens to end in `.mp3` belongs to the web format, not the mp3 one.

/// Return the scheme of a URI-shaped string, or `None` for plain paths.
///
/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or
/// `.`, terminated by `://`.
pub fn protocol(filename: &str) -> Option<&str> {
    let (scheme, _) = filename.split_once("://")?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(scheme)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_common_schemes() {
        assert_eq!(protocol("http://host/stream.mp3"), Some("http"));
        assert_eq!(protocol("https://host/x"), Some("https"));
        assert_eq!(protocol("rtsp://host/live"), Some("rtsp"));
        assert_eq!(protocol("mms://host/a.wmv"), Some("mms"));
    }

    #[test]
    fn plain_paths_have_no_protocol() {
        assert_eq!(protocol("Song.mp3"), None);
        assert_eq!(protocol("/media/music/Song.mp3"), None);
        assert_eq!(protocol("C:\\media\\Song.mp3"), None);
        assert_eq!(protocol(""), None);
    }

    #[test]
    fn malformed_schemes_are_rejected() {
        assert_eq!(protocol("://host/x"), None);
        assert_eq!(protocol("1http://host/x"), None);
        assert_eq!(protocol("ht tp://host/x"), None);
    }
}
