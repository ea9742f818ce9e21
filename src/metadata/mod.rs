//! Inline stream metadata
//!
//! Engines surface in-band metadata as a [`MetadataEvent`]. Only ICY
//! (Shoutcast/Icecast) entries carry now-playing information we use.

mod icy;


pub use icy::IcyInfo;

use crate::types::NowPlaying;

/// A single metadata entry decoded by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataEntry {
    /// ICY stream metadata
    Icy(IcyInfo),
    /// Any other scheme (ID3, Vorbis comments, ...), ignored
    Other {
        /// Scheme identifier as reported by the engine
        scheme: String,
    },
}

/// Metadata delivered by the engine in one callback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataEvent {
    /// Entries in the order the engine decoded them
    pub entries: Vec<MetadataEntry>,
}

impl MetadataEvent {
    /// Event carrying a single ICY entry
    #[must_use]
    pub fn icy(info: IcyInfo) -> Self {
        Self {
            entries: vec![MetadataEntry::Icy(info)],
        }
    }

    /// Event decoded from a raw ICY block
    #[must_use]
    pub fn from_icy_block(raw: &str) -> Self {
        Self::icy(IcyInfo::parse(raw))
    }

    /// First ICY entry, if any
    #[must_use]
    pub fn first_icy(&self) -> Option<&IcyInfo> {
        self.entries.iter().find_map(|entry| match entry {
            MetadataEntry::Icy(info) => Some(info),
            MetadataEntry::Other { .. } => None,
        })
    }
}

/// Normalize an engine metadata event into now-playing information
///
/// Returns `None` when the event has no ICY entry or its title is absent or
/// empty; callers keep whatever they showed before.
#[must_use]
pub fn extract(event: &MetadataEvent) -> Option<NowPlaying> {
    let title = event.first_icy()?.title.as_deref()?;
    if title.is_empty() {
        return None;
    }
    Some(NowPlaying::from_stream_title(title))
}
