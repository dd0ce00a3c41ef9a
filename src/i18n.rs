//! Internationalization (i18n) support
//! The gift ships in Portuguese by default, with an English fallback
//!
//! Structure:
//! - mod.rs: Core types (Language, Key, Locale) and translation lookup
//! - pt.rs: Portuguese translations
//! - en.rs: English translations

mod en;
mod pt;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Portuguese,
    English,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Portuguese => "Português",
            Language::English => "English",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Portuguese => "pt",
            Language::English => "en",
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::Portuguese, Language::English]
    }

    /// Parse a stored language code, defaulting to Portuguese
    pub fn from_code(code: &str) -> Self {
        match code {
            "en" => Language::English,
            _ => Language::Portuguese,
        }
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Navigation
    NavTracks,
    NavMoments,
    NavFeatured,
    NavGallery,

    // Hero
    HeroMonthsOfUs,
    HeroTagline,
    HeroSeeWrapped,
    HeroPlayHighlights,

    // Highlights modal
    HighlightsTitle,
    HighlightsCloseHint,

    // Top tracks
    TracksTitle,
    TracksSubtitle,
    TracksPlays,
    TracksTotalPlays,
    TracksPreviewUnavailable,

    // Moments timeline
    MomentsTitle,
    MomentsSubtitle,
    MomentsSeeMore,
    MomentsVideoUnavailable,

    // Featured partner card
    FeaturedKicker,
    FeaturedBadge,
    FeaturedBlurb,
    FeaturedTagLaughs,
    FeaturedTagCare,
    FeaturedTagCompany,
    FeaturedMessageButton,

    // Message dialog
    MessageDialogTitle,
    MessageInputLabel,
    MessageCopy,
    MessageCopied,

    // Gallery
    GalleryTitle,
    GallerySubtitle,

    // Footer
    FooterCounting,
    FooterMadeWith,
    FooterSubnote,

    // Theme / effects menu
    ThemeSectionTitle,
    ThemeLight,
    ThemeDark,
    ThemeSystem,
    EffectsSectionTitle,
    EffectsEmbers,


    // Toasts
    ToastCopied,
    ToastPreviewUnavailable,
    ToastDataError,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::Portuguese => pt::translations(),
        Language::English => en::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_both_translations() {
        let keys = [
            Key::AppName,
            Key::NavTracks,
            Key::NavMoments,
            Key::NavFeatured,
            Key::NavGallery,
            Key::HeroMonthsOfUs,
            Key::HeroTagline,
            Key::HeroSeeWrapped,
            Key::HeroPlayHighlights,
            Key::HighlightsTitle,
            Key::HighlightsCloseHint,
            Key::TracksTitle,
            Key::TracksSubtitle,
            Key::TracksPlays,
            Key::TracksTotalPlays,
            Key::TracksPreviewUnavailable,
            Key::MomentsTitle,
            Key::MomentsSubtitle,
            Key::MomentsSeeMore,
            Key::MomentsVideoUnavailable,
            Key::FeaturedKicker,
            Key::FeaturedBadge,
            Key::FeaturedBlurb,
            Key::FeaturedTagLaughs,
            Key::FeaturedTagCare,
            Key::FeaturedTagCompany,
            Key::FeaturedMessageButton,
            Key::MessageDialogTitle,
            Key::MessageInputLabel,
            Key::MessageCopy,
            Key::MessageCopied,
            Key::GalleryTitle,
            Key::GallerySubtitle,
            Key::FooterCounting,
            Key::FooterMadeWith,
            Key::FooterSubnote,
            Key::ThemeSectionTitle,
            Key::ThemeLight,
            Key::ThemeDark,
            Key::ThemeSystem,
            Key::EffectsSectionTitle,
            Key::EffectsEmbers,
            Key::ToastCopied,
            Key::ToastPreviewUnavailable,
            Key::ToastDataError,
        ];

        for key in keys {
            assert_ne!(t(Language::Portuguese, key), "???", "missing pt: {key:?}");
            assert_ne!(t(Language::English, key), "???", "missing en: {key:?}");
        }
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), *lang);
        }
        assert_eq!(Language::from_code("zz"), Language::Portuguese);
    }
}
