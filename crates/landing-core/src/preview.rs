//! View-model assembly for article preview cards.
//!
//! Each [`RawContentItem`] becomes an [`InsightPreview`] with every field
//! populated. Fallbacks are resolved one link at a time so each default
//! stays independently testable; nothing here can fail.

use serde::{Deserialize, Serialize};

use crate::date::{PublishedAt, format_published_at};
use crate::media::{AVATAR_FORMATS, COVER_FORMATS, MediaResolver, NormalizedImage};
use crate::raw::{RawAuthor, RawContentItem};

/// Title shown when an article has none.
pub const TITLE_PLACEHOLDER: &str = "Title Not Found";

/// Category shown when an article is uncategorized.
pub const CATEGORY_PLACEHOLDER: &str = "Press Release";

/// Byline shown when an article has no author.
pub const AUTHOR_PLACEHOLDER: &str = "Sam Plane";

/// Author block for the card footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightAuthor {
    pub name: String,
    pub avatar_image: Option<NormalizedImage>,
}

/// Stable, fallback-complete preview consumed by presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightPreview {
    pub id: i64,
    pub document_id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category_name: String,
    pub published_at: PublishedAt,
    pub cover_image: Option<NormalizedImage>,
    pub author: InsightAuthor,
}

/// Builds previews from raw items.
#[derive(Debug, Clone)]
pub struct PreviewAssembler {
    media: MediaResolver,
}

impl PreviewAssembler {
    #[must_use]
    pub fn new(media: MediaResolver) -> Self {
        Self { media }
    }

    /// The resolver used for cover and avatar images.
    #[must_use]
    pub fn media(&self) -> &MediaResolver {
        &self.media
    }

    /// Normalize a sequence of items, preserving input order.
    #[must_use]
    pub fn assemble_all(&self, items: &[RawContentItem]) -> Vec<InsightPreview> {
        items.iter().map(|item| self.assemble(item)).collect()
    }

    /// Normalize one item.
    #[must_use]
    pub fn assemble(&self, item: &RawContentItem) -> InsightPreview {
        let cover_image = self.media.resolve(item.cover.as_ref(), COVER_FORMATS);
        let author = item.author.as_ref();
        let avatar_image = self
            .media
            .resolve(author.and_then(|a| a.avatar.as_ref()), AVATAR_FORMATS);
        let published_at = format_published_at(item.published_date.as_deref());

        InsightPreview {
            id: item.id,
            document_id: document_id(item),
            slug: slug(item),
            title: item
                .title
                .clone()
                .unwrap_or_else(|| TITLE_PLACEHOLDER.to_owned()),
            description: item.description.clone().unwrap_or_default(),
            category_name: category_name(item),
            published_at,
            cover_image,
            author: InsightAuthor {
                name: author_name(author),
                avatar_image,
            },
        }
    }
}

/// `documentId`, else slug, else the numeric id.
fn document_id(item: &RawContentItem) -> String {
    item.document_id
        .clone()
        .or_else(|| item.slug.clone())
        .unwrap_or_else(|| item.id.to_string())
}

/// Slug, else the numeric id.
fn slug(item: &RawContentItem) -> String {
    item.slug.clone().unwrap_or_else(|| item.id.to_string())
}

fn category_name(item: &RawContentItem) -> String {
    item.category
        .as_ref()
        .and_then(|c| c.name.clone())
        .unwrap_or_else(|| CATEGORY_PLACEHOLDER.to_owned())
}

fn author_name(author: Option<&RawAuthor>) -> String {
    author
        .and_then(|a| a.name.clone())
        .unwrap_or_else(|| AUTHOR_PLACEHOLDER.to_owned())
}
