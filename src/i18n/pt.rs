//! Portuguese translations (the gift's native language)

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Wrapped");

    // Navigation
    m.insert(Key::NavTracks, "Top Músicas");
    m.insert(Key::NavMoments, "Momentos");
    m.insert(Key::NavFeatured, "Artista do Mês");
    m.insert(Key::NavGallery, "Galeria");

    // Hero
    m.insert(Key::HeroMonthsOfUs, "meses de nós");
    m.insert(
        Key::HeroTagline,
        "Top músicas, momentos que marcaram e um destaque especial — tudo em um wrapped só nosso.",
    );
    m.insert(Key::HeroSeeWrapped, "Ver meu Wrapped");
    m.insert(Key::HeroPlayHighlights, "Tocar highlights");

    // Highlights modal
    m.insert(Key::HighlightsTitle, "Highlights");
    m.insert(
        Key::HighlightsCloseHint,
        "Toque fora da área para fechar",
    );

    // Top tracks
    m.insert(Key::TracksTitle, "Top Músicas");
    m.insert(Key::TracksSubtitle, "As trilhas sonoras dos nossos momentos");
    m.insert(Key::TracksPlays, "plays");
    m.insert(Key::TracksTotalPlays, "Total de plays");
    m.insert(
        Key::TracksPreviewUnavailable,
        "Preview indisponível. Adicione o arquivo de áudio.",
    );

    // Moments timeline
    m.insert(Key::MomentsTitle, "Momentos Especiais");
    m.insert(Key::MomentsSubtitle, "Nossa história em capítulos");
    m.insert(Key::MomentsSeeMore, "Ver mais");
    m.insert(Key::MomentsVideoUnavailable, "Vídeo não disponível");

    // Featured partner card
    m.insert(Key::FeaturedKicker, "Artista do Mês");
    m.insert(Key::FeaturedBadge, "#1 do Mês");
    m.insert(
        Key::FeaturedBlurb,
        "A pessoa que transforma dias comuns em momentos especiais. Dona do sorriso \
         mais lindo e das melhores ideias de programa. Artista favorita em todas as \
         playlists da vida.",
    );
    m.insert(Key::FeaturedTagLaughs, "Risadas garantidas");
    m.insert(Key::FeaturedTagCare, "Carinho infinito");
    m.insert(Key::FeaturedTagCompany, "Melhor companhia");
    m.insert(Key::FeaturedMessageButton, "Mensagem para");

    // Message dialog
    m.insert(Key::MessageDialogTitle, "Mensagem para");
    m.insert(Key::MessageInputLabel, "Escreva sua mensagem");
    m.insert(Key::MessageCopy, "Copiar mensagem");
    m.insert(Key::MessageCopied, "Copiado!");

    // Gallery
    m.insert(Key::GalleryTitle, "Galeria de Momentos");
    m.insert(Key::GallerySubtitle, "Nossa coleção de memórias especiais");

    // Footer
    m.insert(Key::FooterCounting, "e contando...");
    m.insert(Key::FooterMadeWith, "Feito com muito amor");
    m.insert(Key::FooterSubnote, "Um presente digital especial");

    // Theme / effects menu
    m.insert(Key::ThemeSectionTitle, "Tema");
    m.insert(Key::ThemeLight, "Claro");
    m.insert(Key::ThemeDark, "Escuro");
    m.insert(Key::ThemeSystem, "Sistema");
    m.insert(Key::EffectsSectionTitle, "Efeitos");
    m.insert(Key::EffectsEmbers, "Brasinhas");


    // Toasts
    m.insert(Key::ToastCopied, "Mensagem copiada");
    m.insert(Key::ToastPreviewUnavailable, "Preview indisponível");
    m.insert(Key::ToastDataError, "Não foi possível carregar os dados");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
