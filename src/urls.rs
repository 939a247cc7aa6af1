use url::Url;

const MUSIC_HOST: &str = "music.youtube.com";
const CANONICAL_HOST: &str = "www.youtube.com";

/// Rewrite YouTube Music links to the canonical host the extraction tool
/// expects. Every other input, including strings that do not parse as URLs,
/// comes back unchanged.
pub fn normalize_url(raw: &str) -> String {
    if let Ok(mut url) = Url::parse(raw) {
        if url.host_str() == Some(MUSIC_HOST) && url.set_host(Some(CANONICAL_HOST)).is_ok() {
            return url.to_string();
        }
    }
    raw.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_music_host() {
        let normalized = normalize_url("https://music.youtube.com/playlist?list=PL123");
        assert_eq!(normalized, "https://www.youtube.com/playlist?list=PL123");
        assert!(!normalized.contains("music.youtube.com"));
    }

    #[test]
    fn leaves_canonical_urls_untouched() {
        let input = "https://www.youtube.com/watch?v=abc123";
        assert_eq!(normalize_url(input), input);
    }

    #[test]
    fn leaves_other_hosts_untouched() {
        let input = "https://example.com/music.youtube.com";
        assert_eq!(normalize_url(input), input);
    }

    #[test]
    fn leaves_unparseable_input_untouched() {
        assert_eq!(normalize_url("not a url at all"), "not a url at all");
    }

    #[test]
    fn is_idempotent() {
        let once = normalize_url("https://music.youtube.com/watch?v=abc");
        assert_eq!(normalize_url(&once), once);
    }
}
