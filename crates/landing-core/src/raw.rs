//! Raw payload shapes returned by the headless CMS.
//!
//! These types mirror the Content API's flattened entity shape. They are
//! open: unknown keys are ignored at decode time, and every
//! scalar is decoded leniently, so a field of the wrong JSON type becomes
//! `None` instead of failing the whole payload. The legacy nested
//! `attributes`/`data` envelope is not supported.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single named rendition of a media asset (`thumbnail`, `small`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawImageVariant {
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub height: Option<u32>,
}

/// A media asset from the upload plugin, with optional responsive variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMediaAsset {
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub height: Option<u32>,
    /// Accessibility text; the CMS sends `null` when unset.
    #[serde(default, deserialize_with = "lenient_string")]
    pub alternative_text: Option<String>,
    /// Variants keyed by name. A `null` or malformed entry counts as absent.
    #[serde(default, deserialize_with = "lenient_formats")]
    pub formats: Option<BTreeMap<String, Option<RawImageVariant>>>,
}

/// Category relation; only the name is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawCategory {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// Author relation with an optional avatar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAuthor {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub avatar: Option<RawMediaAsset>,
}

/// One article entity as returned by `/api/articles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContentItem {
    /// `0` when missing or not an integer.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub document_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    /// Editorial publish date; `null` for drafts and scheduled content.
    #[serde(default, deserialize_with = "lenient_string")]
    pub published_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub cover: Option<RawMediaAsset>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub category: Option<RawCategory>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub author: Option<RawAuthor>,
}

/// List response for `/api/articles`. `data` is absent on some failures;
/// entries that are not objects are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticlesResponse {
    #[serde(default, deserialize_with = "lenient_items")]
    pub data: Option<Vec<RawContentItem>>,
}

/// Single-entity response for `/api/articles/{documentId}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticleResponse {
    #[serde(default, deserialize_with = "lenient_object")]
    pub data: Option<RawContentItem>,
}

/// The `cover` single type that feeds the hero section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawCover {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub image: Option<RawMediaAsset>,
}

/// Response for `/api/cover?populate=image`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCoverResponse {
    #[serde(default, deserialize_with = "lenient_object")]
    pub data: Option<RawCover>,
}

/// Accept a JSON string; anything else (null, number, object) becomes `None`.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Decode a relation; a value of the wrong shape becomes `None`.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decode_object(value))
}

fn decode_object<T: DeserializeOwned>(value: Value) -> Option<T> {
    match value {
        Value::Object(_) => T::deserialize(value).ok(),
        _ => None,
    }
}

/// Variant map; a non-object map becomes `None`, a malformed entry `Some(None)`.
fn lenient_formats<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, Option<RawImageVariant>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        map.into_iter()
            .map(|(name, variant)| (name, decode_object(variant)))
            .collect(),
    ))
}

/// List entries; a non-array becomes `None`, non-object entries are dropped.
fn lenient_items<'de, D>(deserializer: D) -> Result<Option<Vec<RawContentItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(items.into_iter().filter_map(decode_object).collect()))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_i64().unwrap_or_default())
}

/// Accept a positive JSON number (integer or float) that fits in `u32`.
fn lenient_dimension<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Some(n) = value.as_f64() else {
        return Ok(None);
    };
    if !(1.0..=f64::from(u32::MAX)).contains(&n) {
        return Ok(None);
    }
    // Range-checked above.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = n.round() as u32;
    Ok(Some(rounded))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_fully_populated_article() {
        let json = r#"{
            "id": 7,
            "documentId": "abc123",
            "title": "Shipping X",
            "slug": "shipping-x",
            "description": "Summary",
            "publishedDate": "2025-09-01T00:00:00.000Z",
            "cover": {
                "url": "/uploads/cover.png",
                "width": 1920,
                "height": 1080,
                "alternativeText": "Cover",
                "formats": {
                    "small": { "url": "/uploads/small_cover.png", "width": 500, "height": 281 }
                }
            },
            "category": { "name": "News" },
            "author": { "name": "Ada", "avatar": { "url": "/uploads/ada.png" } }
        }"#;

        let item: RawContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.document_id.as_deref(), Some("abc123"));
        let cover = item.cover.unwrap();
        assert_eq!(cover.width, Some(1920));
        let small = cover.formats.unwrap().remove("small").unwrap().unwrap();
        assert_eq!(small.url.as_deref(), Some("/uploads/small_cover.png"));
        assert_eq!(item.category.unwrap().name.as_deref(), Some("News"));
        assert!(item.author.unwrap().avatar.is_some());
    }

    #[test]
    fn tolerates_unknown_keys_and_nulls() {
        let json = r#"{
            "id": 1,
            "title": null,
            "cover": null,
            "category": null,
            "author": { "name": null, "avatar": null, "bio": "extra" },
            "locale": "en",
            "seo": { "metaTitle": "ignored" }
        }"#;

        let item: RawContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, None);
        assert_eq!(item.cover, None);
        assert_eq!(item.category, None);
        let author = item.author.unwrap();
        assert_eq!(author.name, None);
        assert_eq!(author.avatar, None);
    }

    #[test]
    fn wrong_scalar_types_decode_as_absent() {
        let json = r#"{
            "id": 2,
            "title": 42,
            "cover": { "url": "/x.png", "width": "wide", "height": -3, "alternativeText": false }
        }"#;

        let item: RawContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, None);
        let cover = item.cover.unwrap();
        assert_eq!(cover.width, None);
        assert_eq!(cover.height, None);
        assert_eq!(cover.alternative_text, None);
    }

    #[test]
    fn fractional_dimensions_are_rounded() {
        let json = r#"{ "url": "/x.png", "width": 799.6, "height": 0 }"#;
        let asset: RawMediaAsset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.width, Some(800));
        assert_eq!(asset.height, None);
    }

    #[test]
    fn null_variant_entry_is_kept_as_none() {
        let json = r#"{ "url": "/x.png", "formats": { "large": null } }"#;
        let asset: RawMediaAsset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.formats.unwrap().get("large"), Some(&None));
    }

    #[test]
    fn wrong_relation_types_decode_as_absent() {
        let json = r#"{
            "id": null,
            "title": "Kept",
            "cover": { "url": "/x.png", "formats": [] },
            "category": "News",
            "author": { "name": "Ada", "avatar": 7 }
        }"#;

        let item: RawContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 0);
        assert_eq!(item.title.as_deref(), Some("Kept"));
        assert_eq!(item.category, None);
        let cover = item.cover.unwrap();
        assert_eq!(cover.url.as_deref(), Some("/x.png"));
        assert_eq!(cover.formats, None);
        let author = item.author.unwrap();
        assert_eq!(author.name.as_deref(), Some("Ada"));
        assert_eq!(author.avatar, None);
    }

    #[test]
    fn malformed_variant_entry_is_none() {
        let json = r#"{ "url": "/x.png", "formats": { "small": "tiny", "large": { "url": "/l.png" } } }"#;
        let asset: RawMediaAsset = serde_json::from_str(json).unwrap();
        let formats = asset.formats.unwrap();
        assert_eq!(formats.get("small"), Some(&None));
        assert_eq!(formats["large"].as_ref().unwrap().url.as_deref(), Some("/l.png"));
    }

    #[test]
    fn one_bad_item_does_not_sink_the_list() {
        let json = r#"{ "data": [
            { "id": 1, "title": "Good" },
            { "id": 2, "category": "News", "cover": [] },
            "garbage",
            null
        ] }"#;

        let items = serde_json::from_str::<RawArticlesResponse>(json).unwrap().data.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("Good"));
        assert_eq!(items[1].id, 2);
        assert_eq!(items[1].category, None);
        assert_eq!(items[1].cover, None);
    }

    #[test]
    fn list_response_without_data_is_empty() {
        let resp: RawArticlesResponse = serde_json::from_str(r#"{ "meta": {} }"#).unwrap();
        assert!(resp.data.is_none());
    }
}
