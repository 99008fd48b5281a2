//! Known locale enumeration.
//!
//! Providers that cannot enumerate their own sources probe this table when
//! building the list of available locales. Neutral languages come first,
//! followed by regional variants, so a language-selection UI lists `de`
//! before `de-AT`.

use once_cell::sync::Lazy;

use crate::locale::Locale;

const KNOWN_TAGS: &[&str] = &[
    "en", "de", "fr", "es", "it", "pt", "nl", "sv", "da", "nb", "fi", "is", "pl", "cs", "sk", "sl",
    "hr", "sr", "hu", "ro", "bg", "el", "tr", "ru", "uk", "be", "et", "lv", "lt", "ga", "cy", "ca",
    "eu", "gl", "ar", "he", "fa", "hi", "bn", "th", "vi", "id", "ms", "zh", "ja", "ko", "af", "sw",
    "en-GB", "en-US", "en-AU", "en-CA", "en-IE", "en-NZ", "en-ZA", "de-DE", "de-AT", "de-CH",
    "fr-FR", "fr-BE", "fr-CA", "fr-CH", "es-ES", "es-MX", "es-AR", "it-IT", "it-CH", "pt-PT",
    "pt-BR", "nl-NL", "nl-BE", "sv-SE", "zh-CN", "zh-TW", "zh-HK",
];

static KNOWN_LOCALES: Lazy<Vec<Locale>> = Lazy::new(|| {
    KNOWN_TAGS
        .iter()
        .filter_map(|tag| Locale::parse(tag).ok())
        .collect()
});

/// Return the built-in, ordered table of known locales.
#[must_use]
pub fn known_locales() -> &'static [Locale] {
    KNOWN_LOCALES.as_slice()
}

/// Check whether `locale` appears in the built-in table.
#[must_use]
pub fn is_known_locale(locale: &Locale) -> bool {
    KNOWN_LOCALES.contains(locale)
}
