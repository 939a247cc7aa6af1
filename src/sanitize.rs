//! Turns arbitrary titles into strings that are safe to use as file and
//! directory names.

const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

const TITLE_CAP: usize = 60;
const PLAYLIST_TITLE_CAP: usize = 50;

const TITLE_FALLBACK: &str = "Unknown Title";
const PLAYLIST_FALLBACK: &str = "Unknown_Playlist";

/// Sanitized item title, at most 60 characters.
pub fn title(raw: &str) -> String {
    clean(raw, TITLE_CAP, TITLE_FALLBACK)
}

/// Sanitized playlist title, at most 50 characters.
pub fn playlist_title(raw: &str) -> String {
    clean(raw, PLAYLIST_TITLE_CAP, PLAYLIST_FALLBACK)
}

fn clean(raw: &str, cap: usize, fallback: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    let mut last_was_space = false;

    for c in raw.chars() {
        if INVALID_CHARS.contains(&c) {
            cleaned.push('_');
            last_was_space = false;
        } else if c.is_whitespace() {
            if !last_was_space {
                cleaned.push(' ');
            }
            last_was_space = true;
        } else {
            cleaned.push(c);
            last_was_space = false;
        }
    }

    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return fallback.to_owned();
    }

    truncate(cleaned, cap)
}

fn truncate(text: &str, cap: usize) -> String {
    if text.chars().count() <= cap {
        return text.to_owned();
    }
    let kept: String = text.chars().take(cap - 3).collect();
    format!("{}...", kept)
}
