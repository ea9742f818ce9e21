mod resolver;

use super::*;

#[test]
fn test_sniff_suffix() {
    assert_eq!(PlaylistFormat::sniff("http://radio.example/live.pls"), PlaylistFormat::Pls);
    assert_eq!(PlaylistFormat::sniff("http://radio.example/live.m3u"), PlaylistFormat::M3u);
    assert_eq!(PlaylistFormat::sniff("http://radio.example/live.mp3"), PlaylistFormat::Direct);
    assert_eq!(PlaylistFormat::sniff("http://radio.example/live"), PlaylistFormat::Direct);
    assert_eq!(PlaylistFormat::sniff("no-dot-at-all"), PlaylistFormat::Direct);
}

#[test]
fn test_sniff_is_case_sensitive_and_exact() {
    assert_eq!(PlaylistFormat::sniff("http://radio.example/live.PLS"), PlaylistFormat::Direct);
    assert_eq!(PlaylistFormat::sniff("http://radio.example/live.m3u8"), PlaylistFormat::Direct);
    assert_eq!(
        PlaylistFormat::sniff("http://radio.example/live.pls?sid=1"),
        PlaylistFormat::Direct
    );
}

#[test]
fn test_parse_pls_keeps_order() {
    let body = "File1=http://a\nNoMatchHere\nFile2=http://b";
    assert_eq!(parse_pls(body), vec!["http://a", "http://b"]);
}

#[test]
fn test_parse_pls_full_document() {
    let body = "[playlist]\r\n\
                NumberOfEntries=2\r\n\
                File1=http://ice1.example:8000/jazz\r\n\
                Title1=Jazz (Main)\r\n\
                Length1=-1\r\n\
                File2=https://ice2.example/jazz?type=.mp3\r\n\
                Title2=Jazz (Backup)\r\n\
                Version=2\r\n";

    assert_eq!(
        parse_pls(body),
        vec![
            "http://ice1.example:8000/jazz",
            "https://ice2.example/jazz?type=.mp3"
        ]
    );
}

#[test]
fn test_parse_pls_splits_on_first_equals() {
    let body = "File1=http://radio.example/stream?a=1&b=2";
    assert_eq!(parse_pls(body), vec!["http://radio.example/stream?a=1&b=2"]);
}

#[test]
fn test_parse_pls_without_entries() {
    assert!(parse_pls("[playlist]\nNumberOfEntries=0\n").is_empty());
    assert!(parse_pls("").is_empty());
}

#[test]
fn test_parse_m3u_trims_whole_body() {
    assert_eq!(parse_m3u("  http://stream  \n"), vec!["http://stream"]);
    assert!(parse_m3u(" \n\t").is_empty());
}

#[test]
fn test_parse_m3u_is_single_entry() {
    // Multi-line files are not split into entries
    let body = "http://a\nhttp://b\n";
    assert_eq!(parse_m3u(body), vec!["http://a\nhttp://b"]);
}
