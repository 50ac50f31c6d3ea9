/// Locale the orchestrator skips translation for: the input side is
/// already English
pub const ENGLISH_US: &str = "en-US";

/// Target locale offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Locales the speech provider has voices for in this product
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language { code: "en-US", name: "English" },
    Language { code: "hi-IN", name: "Hindi" },
    Language { code: "ta-IN", name: "Tamil" },
    Language { code: "ml-IN", name: "Malayalam" },
    Language { code: "te-IN", name: "Telugu" },
    Language { code: "kn-IN", name: "Kannada" },
];

/// Strip the region suffix from a locale code ("hi-IN" -> "hi").
/// The translation provider takes base language codes; the speech provider
/// takes the full locale.
pub fn base_code(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

pub fn find_language(code: &str) -> Option<Language> {
    SUPPORTED_LANGUAGES.iter().copied().find(|l| l.code == code)
}
