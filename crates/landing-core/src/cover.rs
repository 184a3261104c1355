//! Hero cover image.
//!
//! The hero section reads a `cover` single type with one image. It prefers
//! larger variants than article cards, defaults to a bigger canvas, and
//! never leaves the alt text empty.

use crate::media::{MediaResolver, NormalizedImage};
use crate::raw::RawCover;

/// Variant preference for the hero image. Thumbnails are too small to use.
pub const HERO_FORMATS: &[&str] = &["large", "medium", "small"];

pub const HERO_DEFAULT_WIDTH: u32 = 1200;
pub const HERO_DEFAULT_HEIGHT: u32 = 900;

/// Alt text used when neither the image nor the cover carries one.
pub const HERO_ALT_PLACEHOLDER: &str = "Cover image";

/// Resolve the hero image, or `None` when the cover has no usable image.
///
/// Alt text falls back from the image's alternative text to the cover
/// title to [`HERO_ALT_PLACEHOLDER`]; empty strings count as missing.
#[must_use]
pub fn resolve_hero(media: &MediaResolver, cover: &RawCover) -> Option<NormalizedImage> {
    let resolver = media
        .clone()
        .with_default_size(HERO_DEFAULT_WIDTH, HERO_DEFAULT_HEIGHT);
    let mut image = resolver.resolve(cover.image.as_ref(), HERO_FORMATS)?;

    if image.alt.is_empty() {
        image.alt = cover
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(HERO_ALT_PLACEHOLDER)
            .to_owned();
    }
    Some(image)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::raw::RawCoverResponse;

    fn resolver() -> MediaResolver {
        MediaResolver::new("http://127.0.0.1:1337")
    }

    fn cover(json: &str) -> RawCover {
        let resp: RawCoverResponse = serde_json::from_str(json).unwrap();
        resp.data.unwrap()
    }

    #[test]
    fn thumbnail_is_never_chosen() {
        let c = cover(
            r#"{ "data": { "image": {
                "url": "/uploads/hero.png", "width": 4000, "height": 3000,
                "formats": { "thumbnail": { "url": "/uploads/t.png", "width": 156, "height": 117 } }
            } } }"#,
        );
        let img = resolve_hero(&resolver(), &c).unwrap();
        assert_eq!(img.url, "http://127.0.0.1:1337/uploads/hero.png");
        assert_eq!((img.width, img.height), (4000, 3000));
    }

    #[test]
    fn missing_dimensions_default_to_hero_canvas() {
        let c = cover(r#"{ "data": { "image": { "url": "/uploads/hero.png" } } }"#);
        let img = resolve_hero(&resolver(), &c).unwrap();
        assert_eq!((img.width, img.height), (1200, 900));
    }

    #[test]
    fn alt_falls_back_to_title_then_placeholder() {
        let with_title = cover(
            r#"{ "data": { "title": "Welcome", "image": { "url": "/h.png", "alternativeText": "" } } }"#,
        );
        assert_eq!(resolve_hero(&resolver(), &with_title).unwrap().alt, "Welcome");

        let bare = cover(r#"{ "data": { "image": { "url": "/h.png" } } }"#);
        assert_eq!(resolve_hero(&resolver(), &bare).unwrap().alt, HERO_ALT_PLACEHOLDER);

        let with_alt = cover(
            r#"{ "data": { "title": "Welcome", "image": { "url": "/h.png", "alternativeText": "Team photo" } } }"#,
        );
        assert_eq!(resolve_hero(&resolver(), &with_alt).unwrap().alt, "Team photo");
    }

    #[test]
    fn cover_without_image_is_none() {
        let c = cover(r#"{ "data": { "title": "Welcome", "image": null } }"#);
        assert_eq!(resolve_hero(&resolver(), &c), None);
    }
}
