// Supported locales and Accept-Language header resolution.
//
// The allow-list is fixed at compile time; resolution is a pure function of
// the header value and always falls back to the default locale.

use std::cmp::Ordering;
use std::convert::Infallible;
use axum::extract::FromRequestParts;
use axum::http::{header::ACCEPT_LANGUAGE, request::Parts};

/// One of the locales this service can answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    French,
    Vietnamese,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::English;

    pub const SUPPORTED: [Locale; 3] = [Locale::English, Locale::French, Locale::Vietnamese];

    /// ISO 639-1 code for this locale.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::French => "fr",
            Locale::Vietnamese => "vi",
        }
    }

    /// Looks up a supported locale by its ISO 639-1 code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Locale> {
        Locale::SUPPORTED
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }
}

/// Resolves the best-matching supported locale from a raw `Accept-Language`
/// header value.
///
/// Ranges are ranked by their `q` weight (missing weight counts as 1.0,
/// unparsable as 0) and matched against the allow-list by primary subtag, so
/// `en-US` selects English. An absent, empty or entirely unmatched header
/// resolves to [`Locale::DEFAULT`].
pub fn resolve_locale(header: Option<&str>) -> Locale {
    let header: &str = match header {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Locale::DEFAULT,
    };

    // Parse "tag;q=0.8" ranges, dropping anything with q == 0
    let mut ranges: Vec<(&str, f32)> = Vec::new();

    for part in header.split(',') {
        let mut pieces = part.split(';');
        let tag: &str = pieces.next().unwrap_or("").trim();

        if tag.is_empty() {
            continue;
        }

        let mut quality: f32 = 1.0;
        for param in pieces {
            if let Some(q) = param.trim().strip_prefix("q=") {
                quality = q.trim().parse().unwrap_or(0.0);
            }
        }

        if quality > 0.0 {
            ranges.push((tag, quality));
        }
    }

    // Stable sort keeps header order for equally-weighted ranges
    ranges.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    for (tag, _) in ranges {
        if tag == "*" {
            return Locale::DEFAULT;
        }

        let primary: &str = tag.split('-').next().unwrap_or(tag);
        if let Some(locale) = Locale::from_code(primary) {
            return locale;
        }
    }

    Locale::DEFAULT
}

/// Request-scoped locale, derived from the `Accept-Language` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

impl<S> FromRequestParts<S> for RequestLocale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header: Option<&str> = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());

        Ok(RequestLocale(resolve_locale(header)))
    }
}
