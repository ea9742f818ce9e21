use std::sync::Arc;
use std::time::Duration;

use crate::playlist::PlaylistResolver;
use crate::testing::StaticFetcher;

fn resolver(fetcher: &Arc<StaticFetcher>) -> PlaylistResolver {
    PlaylistResolver::new(fetcher.clone(), Duration::from_secs(1))
}

#[tokio::test]
async fn test_direct_url_is_not_fetched() {
    let fetcher = Arc::new(StaticFetcher::new());
    let resolver = resolver(&fetcher);

    for url in [
        "http://radio.example/live.mp3",
        "http://radio.example/live",
        "https://radio.example:8443/stream.aac",
    ] {
        let playlist = resolver.resolve(url).await;
        assert_eq!(playlist.uris(), [url]);
    }
    assert!(fetcher.requests().is_empty());
}

#[tokio::test]
async fn test_pls_resolution() {
    let fetcher = Arc::new(
        StaticFetcher::new().with_body(
            "http://radio.example/live.pls",
            "File1=http://a\nNoMatchHere\nFile2=http://b",
        ),
    );

    let playlist = resolver(&fetcher).resolve("http://radio.example/live.pls").await;

    assert_eq!(playlist.uris(), ["http://a", "http://b"]);
    assert_eq!(fetcher.requests(), vec!["http://radio.example/live.pls"]);
}

#[tokio::test]
async fn test_m3u_resolution() {
    let fetcher = Arc::new(
        StaticFetcher::new().with_body("http://radio.example/live.m3u", "  http://stream  \n"),
    );

    let playlist = resolver(&fetcher).resolve("http://radio.example/live.m3u").await;

    assert_eq!(playlist.uris(), ["http://stream"]);
}

#[tokio::test]
async fn test_fetch_failure_falls_back_to_url() {
    let fetcher = Arc::new(StaticFetcher::new().with_failure("http://radio.example/live.pls"));

    let playlist = resolver(&fetcher).resolve("http://radio.example/live.pls").await;

    assert_eq!(playlist.uris(), ["http://radio.example/live.pls"]);
}

#[tokio::test]
async fn test_empty_playlist_falls_back_to_url() {
    let fetcher = Arc::new(
        StaticFetcher::new()
            .with_body("http://radio.example/a.pls", "[playlist]\nNumberOfEntries=0\n")
            .with_body("http://radio.example/b.m3u", "\n  \n"),
    );
    let resolver = resolver(&fetcher);

    let pls = resolver.resolve("http://radio.example/a.pls").await;
    assert_eq!(pls.uris(), ["http://radio.example/a.pls"]);

    let m3u = resolver.resolve("http://radio.example/b.m3u").await;
    assert_eq!(m3u.uris(), ["http://radio.example/b.m3u"]);
}

#[tokio::test(start_paused = true)]
async fn test_slow_fetch_times_out_to_url() {
    let fetcher = Arc::new(
        StaticFetcher::new()
            .with_body("http://radio.example/slow.pls", "File1=http://never")
            .with_delay(Duration::from_secs(30)),
    );

    let playlist = resolver(&fetcher).resolve("http://radio.example/slow.pls").await;

    assert_eq!(playlist.uris(), ["http://radio.example/slow.pls"]);
}
