// SPDX-License-Identifier: MPL-2.0
//! Video id resolution and thumbnail addressing.
//!
//! Accepts either a bare 11-character id or one of the three URL shapes the
//! provider hands out (`watch?v=`, `embed/`, short link) and extracts the id.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Length of a bare video id.
pub const VIDEO_ID_LEN: usize = 11;

/// URL shapes carrying a video id, tried in order.
static ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^https://(?:www\.|m\.)?youtube\.com/watch\?v=([_\-a-zA-Z0-9]{11}).*$",
        r"^https://(?:www\.|m\.)?youtube(?:-nocookie)?\.com/embed/([_\-a-zA-Z0-9]{11}).*$",
        r"^https://youtu\.be/([_\-a-zA-Z0-9]{11}).*$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("video id pattern is valid"))
    .collect()
});

/// Extracts a video id from `url`, trimming surrounding whitespace first.
///
/// # Examples
///
/// ```
/// use tube_lens::video_player::resolve_id_trimmed;
///
/// assert_eq!(resolve_id_trimmed(" https://youtu.be/dQw4w9WgXcQ "), Some("dQw4w9WgXcQ".to_string()));
/// assert_eq!(resolve_id_trimmed("https://example.com/video"), None);
/// ```
pub fn resolve_id_trimmed(url: &str) -> Option<String> {
    resolve_id(url, true)
}

/// Extracts a video id from `url`.
///
/// A string without a scheme that is exactly [`VIDEO_ID_LEN`] characters long
/// is taken as an id verbatim. Otherwise the known URL shapes are tried in
/// order and the first match wins. Returns `None` when nothing applies.
pub fn resolve_id(url: &str, trim_whitespace: bool) -> Option<String> {
    let url = if trim_whitespace { url.trim() } else { url };

    if !url.contains("http") && url.chars().count() == VIDEO_ID_LEN {
        return Some(url.to_string());
    }

    ID_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}

/// Thumbnail resolutions published for every video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailQuality {
    /// 120x90.
    Default,
    /// 320x180.
    Medium,
    /// 480x360.
    #[default]
    High,
    /// 640x480.
    Standard,
    /// Original resolution, not available for every video.
    Max,
}

impl ThumbnailQuality {
    /// File stem the provider uses for this quality.
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Medium => "mqdefault",
            Self::High => "hqdefault",
            Self::Standard => "sddefault",
            Self::Max => "maxresdefault",
        }
    }
}

/// Builds the thumbnail URL for `video_id`.
///
/// # Examples
///
/// ```
/// use tube_lens::video_player::{thumbnail_url, ThumbnailQuality};
///
/// assert_eq!(
///     thumbnail_url("dQw4w9WgXcQ", ThumbnailQuality::High, false),
///     "https://i3.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
/// );
/// ```
pub fn thumbnail_url(video_id: &str, quality: ThumbnailQuality, webp: bool) -> String {
    let stem = quality.file_stem();
    if webp {
        format!("https://i3.ytimg.com/vi_webp/{video_id}/{stem}.webp")
    } else {
        format!("https://i3.ytimg.com/vi/{video_id}/{stem}.jpg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn bare_id_is_returned_verbatim() {
        assert_eq!(resolve_id_trimmed(ID).as_deref(), Some(ID));
        assert_eq!(resolve_id_trimmed("a-b_c1234XY").as_deref(), Some("a-b_c1234XY"));
    }

    #[test]
    fn bare_id_is_trimmed_by_default() {
        assert_eq!(resolve_id_trimmed(&format!("  {ID}\n")).as_deref(), Some(ID));
    }

    #[test]
    fn untrimmed_whitespace_defeats_bare_id() {
        assert_eq!(resolve_id(&format!(" {ID}"), false), None);
    }

    #[test]
    fn watch_urls_are_resolved() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
        ] {
            assert_eq!(resolve_id_trimmed(url).as_deref(), Some(ID), "{url}");
        }
    }

    #[test]
    fn embed_urls_are_resolved() {
        for url in [
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?autoplay=1",
        ] {
            assert_eq!(resolve_id_trimmed(url).as_deref(), Some(ID), "{url}");
        }
    }

    #[test]
    fn short_links_are_resolved() {
        assert_eq!(
            resolve_id_trimmed("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some(ID)
        );
        assert_eq!(
            resolve_id_trimmed("https://youtu.be/dQw4w9WgXcQ?si=abc").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn unknown_shapes_resolve_to_none() {
        for url in [
            "",
            "short",
            "https://vimeo.com/123456789",
            "http://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=tooShort",
            "https://www.youtube.com/channel/dQw4w9WgXcQ",
        ] {
            assert_eq!(resolve_id_trimmed(url), None, "{url}");
        }
    }

    #[test]
    fn eleven_chars_with_scheme_are_not_ids() {
        assert_eq!(resolve_id_trimmed("http://a.bc"), None);
    }

    #[test]
    fn thumbnail_url_uses_webp_directory() {
        assert_eq!(
            thumbnail_url(ID, ThumbnailQuality::Max, true),
            "https://i3.ytimg.com/vi_webp/dQw4w9WgXcQ/maxresdefault.webp"
        );
        assert_eq!(
            thumbnail_url(ID, ThumbnailQuality::Default, false),
            "https://i3.ytimg.com/vi/dQw4w9WgXcQ/default.jpg"
        );
    }
}
