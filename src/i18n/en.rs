//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Wrapped");

    // Navigation
    m.insert(Key::NavTracks, "Top Tracks");
    m.insert(Key::NavMoments, "Moments");
    m.insert(Key::NavFeatured, "Artist of the Month");
    m.insert(Key::NavGallery, "Gallery");

    // Hero
    m.insert(Key::HeroMonthsOfUs, "months of us");
    m.insert(
        Key::HeroTagline,
        "Top tracks, the moments that mattered and one special highlight — all in a wrapped of our own.",
    );
    m.insert(Key::HeroSeeWrapped, "See my Wrapped");
    m.insert(Key::HeroPlayHighlights, "Play highlights");

    // Highlights modal
    m.insert(Key::HighlightsTitle, "Highlights");
    m.insert(Key::HighlightsCloseHint, "Click outside the area to close");

    // Top tracks
    m.insert(Key::TracksTitle, "Top Tracks");
    m.insert(Key::TracksSubtitle, "The soundtracks of our moments");
    m.insert(Key::TracksPlays, "plays");
    m.insert(Key::TracksTotalPlays, "Total plays");
    m.insert(
        Key::TracksPreviewUnavailable,
        "Preview unavailable. Add the audio file.",
    );

    // Moments timeline
    m.insert(Key::MomentsTitle, "Special Moments");
    m.insert(Key::MomentsSubtitle, "Our story, chapter by chapter");
    m.insert(Key::MomentsSeeMore, "See more");
    m.insert(Key::MomentsVideoUnavailable, "Video not available");

    // Featured partner card
    m.insert(Key::FeaturedKicker, "Artist of the Month");
    m.insert(Key::FeaturedBadge, "#1 this Month");
    m.insert(
        Key::FeaturedBlurb,
        "The person who turns ordinary days into special moments. Owner of the \
         prettiest smile and the best date ideas. Favorite artist in every playlist \
         of a lifetime.",
    );
    m.insert(Key::FeaturedTagLaughs, "Guaranteed laughs");
    m.insert(Key::FeaturedTagCare, "Infinite care");
    m.insert(Key::FeaturedTagCompany, "Best company");
    m.insert(Key::FeaturedMessageButton, "Message for");

    // Message dialog
    m.insert(Key::MessageDialogTitle, "Message for");
    m.insert(Key::MessageInputLabel, "Write your message");
    m.insert(Key::MessageCopy, "Copy message");
    m.insert(Key::MessageCopied, "Copied!");

    // Gallery
    m.insert(Key::GalleryTitle, "Moments Gallery");
    m.insert(Key::GallerySubtitle, "Our collection of special memories");

    // Footer
    m.insert(Key::FooterCounting, "and counting...");
    m.insert(Key::FooterMadeWith, "Made with lots of love");
    m.insert(Key::FooterSubnote, "A special digital gift");

    // Theme / effects menu
    m.insert(Key::ThemeSectionTitle, "Theme");
    m.insert(Key::ThemeLight, "Light");
    m.insert(Key::ThemeDark, "Dark");
    m.insert(Key::ThemeSystem, "System");
    m.insert(Key::EffectsSectionTitle, "Effects");
    m.insert(Key::EffectsEmbers, "Embers");


    // Toasts
    m.insert(Key::ToastCopied, "Message copied");
    m.insert(Key::ToastPreviewUnavailable, "Preview unavailable");
    m.insert(Key::ToastDataError, "Could not load the gift data");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
