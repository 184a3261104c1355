//! Article list query, encoded the way the CMS expects.
//!
//! The CMS reads nested parameters in bracket notation
//! (`populate[author][populate][avatar][fields][0]=url`). Keys are sent
//! as-is and only values are percent-encoded.

use std::fmt::Write as _;

/// Scalar fields requested for every article.
pub const ARTICLE_FIELDS: &[&str] = &["title", "slug", "description", "publishedDate", "documentId"];

/// Fields requested for every media relation.
pub const MEDIA_FIELDS: &[&str] = &["url", "alternativeText", "formats", "width", "height"];

/// Newest first.
pub const ARTICLE_SORT: &str = "publishedDate:desc";

/// Ordered `(key, value)` pairs for the article list query.
#[must_use]
pub fn article_list_params(page_size: u32) -> Vec<(String, String)> {
    let mut params = Vec::new();

    push_list(&mut params, "fields", ARTICLE_FIELDS);
    push_list(&mut params, "sort", &[ARTICLE_SORT]);
    push_list(&mut params, "populate[cover][fields]", MEDIA_FIELDS);
    push_list(&mut params, "populate[category][fields]", &["name"]);
    push_list(&mut params, "populate[author][fields]", &["name"]);
    push_list(
        &mut params,
        "populate[author][populate][avatar][fields]",
        MEDIA_FIELDS,
    );
    params.push(("pagination[pageSize]".to_owned(), page_size.to_string()));

    params
}

/// Join pairs into a query string, encoding values only.
#[must_use]
pub fn encode(params: &[(String, String)]) -> String {
    let mut out = String::new();
    for (i, (key, value)) in params.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{key}={}", urlencoding::encode(value));
    }
    out
}

fn push_list(params: &mut Vec<(String, String)>, key: &str, values: &[&str]) {
    for (i, value) in values.iter().enumerate() {
        params.push((format!("{key}[{i}]"), (*value).to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_requests_whitelisted_fields_only() {
        let params = article_list_params(20);
        let fields: Vec<&str> = params
            .iter()
            .filter(|(k, _)| k.starts_with("fields["))
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(fields, ARTICLE_FIELDS);
    }

    #[test]
    fn query_populates_nested_avatar() {
        let params = article_list_params(20);
        assert!(params.contains(&(
            "populate[author][populate][avatar][fields][4]".to_owned(),
            "height".to_owned()
        )));
        assert!(params.contains(&(
            "populate[category][fields][0]".to_owned(),
            "name".to_owned()
        )));
    }

    #[test]
    fn encoded_query_matches_cms_format() {
        let query = encode(&article_list_params(20));
        assert!(query.starts_with("fields[0]=title&fields[1]=slug&"));
        assert!(query.contains("&sort[0]=publishedDate%3Adesc&"));
        assert!(query.contains("&populate[cover][fields][2]=formats&"));
        assert!(query.ends_with("&pagination[pageSize]=20"));
    }

    #[test]
    fn page_size_is_configurable() {
        let query = encode(&article_list_params(5));
        assert!(query.ends_with("pagination[pageSize]=5"));
    }
}
