//! Playlist reference resolution
//!
//! Turns a user supplied stream reference into the URIs handed to the
//! player engine. `.pls` and `.m3u` references are fetched and parsed;
//! everything else is played directly.

mod fetcher;
mod format;
mod resolver;

#[cfg(test)]
mod tests;

pub use fetcher::{HttpFetcher, PlaylistFetcher};
pub use format::{PlaylistFormat, parse_m3u, parse_pls};
pub use resolver::PlaylistResolver;
