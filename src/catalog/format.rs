//! Extension-based file classification.

/// Audio extensions served as songs.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "m4a", "ogg"];

/// Image extensions accepted as album covers.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Extension of lyric files in the lyrics root.
pub const LYRICS_EXTENSION: &str = "lrc";

/// What a catalog entry is, judged by its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Image,
    Other,
}

/// Classify a file name by its `.<ext>` suffix, ignoring case.
///
/// A bare `.mp3` counts as audio: the whole name is the suffix.
pub fn classify(filename: &str) -> MediaKind {
    let name = filename.to_lowercase();
    let has_suffix = |extensions: &[&str]| {
        extensions.iter().any(|ext| {
            name.strip_suffix(*ext)
                .is_some_and(|stem| stem.ends_with('.'))
        })
    };

    if has_suffix(AUDIO_EXTENSIONS) {
        MediaKind::Audio
    } else if has_suffix(IMAGE_EXTENSIONS) {
        MediaKind::Image
    } else {
        MediaKind::Other
    }
}

/// Check if a file name has a supported audio extension.
pub fn is_audio(filename: &str) -> bool {
    classify(filename) == MediaKind::Audio
}

/// Check if a file name has a supported cover image extension.
pub fn is_image(filename: &str) -> bool {
    classify(filename) == MediaKind::Image
}
