/// Container format of a stream reference, keyed on the URL suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistFormat {
    /// Shoutcast/Winamp `.pls`
    Pls,
    /// Single-entry `.m3u`
    M3u,
    /// Anything else is treated as a direct stream
    Direct,
}

impl PlaylistFormat {
    /// Sniff the format from the text after the last `.` of the URL
    ///
    /// Matching is exact and case-sensitive, so `radio.PLS` or
    /// `radio.pls?sid=1` are direct streams.
    #[must_use]
    pub fn sniff(url: &str) -> Self {
        let suffix = url.rsplit_once('.').map_or(url, |(_, suffix)| suffix);
        match suffix {
            "pls" => Self::Pls,
            "m3u" => Self::M3u,
            _ => Self::Direct,
        }
    }

    /// Whether the reference must be fetched before playback
    #[must_use]
    pub fn needs_fetch(self) -> bool {
        !matches!(self, Self::Direct)
    }

    /// Parse a fetched playlist body
    #[must_use]
    pub fn parse(self, body: &str) -> Vec<String> {
        match self {
            Self::Pls => parse_pls(body),
            Self::M3u => parse_m3u(body),
            Self::Direct => Vec::new(),
        }
    }
}

/// Extract stream URLs from a `.pls` body
///
/// Keeps `FileN=http...` style lines and returns what follows the first `=`.
#[must_use]
pub fn parse_pls(body: &str) -> Vec<String> {
    body.lines()
        .filter(|line| line.contains("=http"))
        .filter_map(|line| line.split_once('='))
        .map(|(_, url)| url.to_string())
        .collect()
}

/// Extract the stream URL from a `.m3u` body
///
/// Only single-stream files are supported: the whole trimmed body is the URI.
#[must_use]
pub fn parse_m3u(body: &str) -> Vec<String> {
    let content = body.trim();
    if content.is_empty() {
        Vec::new()
    } else {
        vec![content.to_string()]
    }
}
