use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref COMBINING_MARKS: Regex =
        Regex::new("[\u{0300}-\u{036f}]").expect("Failed to create combining marks regex");
    static ref DISALLOWED_CHARS: Regex =
        Regex::new(r"[^a-z0-9\s-]").expect("Failed to create disallowed chars regex");
    static ref WHITESPACE_RUN: Regex =
        Regex::new(r"\s+").expect("Failed to create whitespace regex");
}

/// Derives the URL-safe identifier of an event from its display name.
///
/// The same function must be used wherever an identifier is derived, so that
/// listing links and detail lookups agree. Names made only of symbols yield an
/// empty slug.
///
/// U+FEFF is not whitespace for `\s` or `str::trim`, so it is dropped rather
/// than turned into a hyphen as the web pages do.
pub fn slug(name: &str) -> String {
    let lowercase = name.to_lowercase();
    let decomposed = lowercase.nfd().collect::<String>();
    let unaccented = COMBINING_MARKS.replace_all(&decomposed, "");
    let allowed = DISALLOWED_CHARS.replace_all(&unaccented, "");

    WHITESPACE_RUN
        .replace_all(allowed.trim(), "-")
        .to_string()
}
