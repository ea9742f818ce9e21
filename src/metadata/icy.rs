/// ICY metadata as sent in-band by Shoutcast/Icecast servers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IcyInfo {
    /// `StreamTitle`, usually "Artist - Song"
    pub title: Option<String>,
    /// `StreamUrl`
    pub url: Option<String>,
}

impl IcyInfo {
    /// Info with only a title
    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: None,
        }
    }

    /// Parse a raw ICY block such as `StreamTitle='A - B';StreamUrl='';`
    ///
    /// Values are delimited by `='` and `';`, so a `;` or `'` inside a title
    /// survives. Keys are case-insensitive and unknown keys are skipped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut info = Self::default();
        let raw = raw.trim_end_matches('\0');
        let mut rest = raw;

        while let Some(start) = rest.find("='") {
            let key = rest[..start].trim_start_matches(';').trim();
            let value_start = &rest[start + 2..];
            let (value, next) = match value_start.find("';") {
                Some(end) => (&value_start[..end], &value_start[end + 2..]),
                None => (value_start.strip_suffix('\'').unwrap_or(value_start), ""),
            };

            match key.to_ascii_lowercase().as_str() {
                "streamtitle" => info.title = Some(value.to_string()),
                "streamurl" => info.url = Some(value.to_string()),
                other => tracing::debug!("Ignoring ICY key {:?}", other),
            }
            rest = next;
        }

        info
    }
}
