use std::sync::OnceLock;

use regex::Regex;

use crate::state::RawDeparture;

/// A whole token that reads as a line designation: a short route number
/// with an optional letter/hyphen suffix (`31`, `S31`-style suffixes on
/// digits, `31A`, `12-B`).
fn line_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{1,3}[A-Za-z-]*$").unwrap())
}

/// First short digit run anywhere in the name, the last-resort scrape.
fn digit_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]{1,3}[A-Za-z-]*").unwrap())
}

/// Infer a short human line designation from a raw departure. Pure and
/// total; when nothing usable exists the result is an empty string.
///
/// Priority: explicit `number`, then the first name token that looks
/// like a line (long purely-numeric tokens are vehicle/run ids, not
/// lines), then a digit-run scrape of the name, then `category`, then
/// the raw name.
pub fn resolve(raw: &RawDeparture) -> String {
    if let Some(number) = raw.number.as_deref().filter(|n| !n.is_empty()) {
        return number.to_string();
    }

    let name = raw.name.as_deref().unwrap_or("");

    if !name.is_empty() {
        for token in name.split_whitespace() {
            let token: String = token
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
                .collect();
            if token.is_empty() {
                continue;
            }
            // vehicle ids like "023532"
            if token.len() > 3 && token.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            if line_token_re().is_match(&token)
                || token.chars().any(|c| c.is_ascii_alphabetic())
            {
                return token;
            }
        }

        if let Some(m) = digit_run_re().find(name) {
            return m.as_str().to_string();
        }
    }

    raw.number
        .as_deref()
        .filter(|n| !n.is_empty())
        .or_else(|| raw.category.as_deref().filter(|c| !c.is_empty()))
        .unwrap_or(name)
        .trim()
        .to_string()
}
