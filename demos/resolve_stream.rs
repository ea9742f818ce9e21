//! Resolve a radio stream reference and print the playable URIs
//!
//! Usage: `cargo run --example resolve_stream -- http://radio.example/jazz.pls`

use radio_session::{PlaylistResolver, RadioConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("radio_session=info".parse()?),
        )
        .init();

    let Some(url) = std::env::args().nth(1) else {
        eprintln!("usage: resolve_stream <stream-or-playlist-url>");
        std::process::exit(2);
    };

    let resolver = PlaylistResolver::http(&RadioConfig::default())?;
    let playlist = resolver.resolve(&url).await;

    for (index, uri) in playlist.uris().iter().enumerate() {
        println!("{:>2}. {}", index + 1, uri);
    }
    Ok(())
}
