//! Media resolution: pick a display variant and build an absolute URL.
//!
//! The CMS stores uploads with relative URLs (`/uploads/x.png`) and a map
//! of pre-rendered variants. [`MediaResolver`] walks a caller-supplied
//! preference list, falls back to the base asset, fills in default
//! dimensions, and prefixes relative URLs with the content server origin.

use serde::{Deserialize, Serialize};

use crate::raw::RawMediaAsset;

/// Variant preference for cover images, largest first.
pub const COVER_FORMATS: &[&str] = &["large", "medium", "small", "thumbnail"];

/// Variant preference for author avatars, smallest first.
pub const AVATAR_FORMATS: &[&str] = &["thumbnail", "small", "medium"];

/// Width used when neither the variant nor the base asset reports one.
pub const DEFAULT_WIDTH: u32 = 800;

/// Height used when neither the variant nor the base asset reports one.
pub const DEFAULT_HEIGHT: u32 = 600;

/// Image shape handed to presentation. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedImage {
    /// Absolute URL.
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// Alternative text; empty when the CMS has none.
    pub alt: String,
}

/// Resolves raw media assets against a content server origin.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    origin: String,
    default_width: u32,
    default_height: u32,
}

impl MediaResolver {
    /// Create a resolver for the given origin (e.g. `http://127.0.0.1:1337`).
    ///
    /// A trailing `/` on the origin is dropped.
    #[must_use]
    pub fn new(origin: impl Into<String>) -> Self {
        let origin: String = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_owned(),
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
        }
    }

    /// Override the dimensions used when the asset reports none.
    ///
    /// Zero values are ignored so the resolver never emits a zero dimension.
    #[must_use]
    pub fn with_default_size(mut self, width: u32, height: u32) -> Self {
        if width > 0 {
            self.default_width = width;
        }
        if height > 0 {
            self.default_height = height;
        }
        self
    }

    /// Content server origin, without a trailing slash.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Resolve an optional asset into a display image.
    ///
    /// Returns `None` when the asset is absent or has no base URL. The first
    /// name in `preferred` present in the asset's variant map wins; with no
    /// match the base asset is used. Dimensions fall back from the variant
    /// to the base asset to the resolver defaults.
    #[must_use]
    pub fn resolve(
        &self,
        media: Option<&RawMediaAsset>,
        preferred: &[&str],
    ) -> Option<NormalizedImage> {
        let media = media?;
        let base_url = media.url.as_deref().filter(|u| !u.is_empty())?;

        let variant = media.formats.as_ref().and_then(|formats| {
            preferred
                .iter()
                .find_map(|name| formats.get(*name).and_then(Option::as_ref))
        });

        let url = variant
            .and_then(|v| v.url.as_deref())
            .filter(|u| !u.is_empty())
            .unwrap_or(base_url);
        let width = variant
            .and_then(|v| v.width)
            .or(media.width)
            .unwrap_or(self.default_width);
        let height = variant
            .and_then(|v| v.height)
            .or(media.height)
            .unwrap_or(self.default_height);

        Some(NormalizedImage {
            url: self.absolute_url(url),
            width,
            height,
            alt: media.alternative_text.clone().unwrap_or_default(),
        })
    }

    /// Prefix a relative URL with the origin; URLs with a scheme pass through.
    #[must_use]
    pub fn absolute_url(&self, url: &str) -> String {
        if has_scheme(url) {
            url.to_owned()
        } else if url.starts_with('/') {
            format!("{}{url}", self.origin)
        } else {
            format!("{}/{url}", self.origin)
        }
    }
}

/// RFC 3986 scheme check: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
