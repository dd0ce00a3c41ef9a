//! Utility functions

use chrono::{Datelike, NaiveDate};

// ============================================================================
// Date Formatting
// ============================================================================

/// Portuguese month names, indexed by `month0`
const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Format an ISO date (`2025-10-15`) as a long pt-BR date (`15 de outubro de 2025`)
///
/// Falls back to the raw input when the string does not parse, so a broken
/// fixture still renders something instead of panicking.
pub fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => {
            let month = MONTHS_PT[date.month0() as usize];
            format!("{} de {} de {}", date.day(), month, date.year())
        }
        Err(e) => {
            tracing::warn!("Unparseable fixture date '{}': {}", iso, e);
            iso.to_string()
        }
    }
}

/// Format an ISO date as a short `dd/mm` label
pub fn format_short_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => format!("{:02}/{:02}", date.day(), date.month()),
        Err(_) => iso.to_string(),
    }
}

// ============================================================================
// Play Counts
// ============================================================================

/// Format a play count for display (`1234` -> `1.2k`)
pub fn format_plays(plays: u32) -> String {
    if plays >= 1000 {
        format!("{:.1}k", plays as f32 / 1000.0)
    } else {
        plays.to_string()
    }
}

// ============================================================================
// Media Paths
// ============================================================================

/// Video file extensions used by the fixture media paths
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov"];

/// Whether a fixture media path points at a video clip
pub fn is_video_path(media: &str) -> bool {
    media
        .rsplit('.')
        .next()
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_uses_portuguese_months() {
        assert_eq!(format_date("2025-10-15"), "15 de outubro de 2025");
        assert_eq!(format_date("2026-01-02"), "2 de janeiro de 2026");
    }

    #[test]
    fn unparseable_date_falls_back_to_input() {
        assert_eq!(format_date("sometime"), "sometime");
        assert_eq!(format_short_date("??"), "??");
    }

    #[test]
    fn short_date_is_zero_padded() {
        assert_eq!(format_short_date("2025-11-02"), "02/11");
        assert_eq!(format_short_date("2025-12-20"), "20/12");
    }

    #[test]
    fn plays_below_one_thousand_are_verbatim() {
        assert_eq!(format_plays(0), "0");
        assert_eq!(format_plays(999), "999");
    }

    #[test]
    fn plays_above_one_thousand_are_abbreviated() {
        assert_eq!(format_plays(1000), "1.0k");
        assert_eq!(format_plays(1234), "1.2k");
        assert_eq!(format_plays(56789), "56.8k");
    }

    #[test]
    fn video_detection_by_extension() {
        assert!(is_video_path("/images/videos/clip-01.mp4"));
        assert!(is_video_path("CLIP.MP4"));
        assert!(!is_video_path("/images/photos/heitor-livia-01.jpg"));
        assert!(!is_video_path("no-extension"));
    }
}
