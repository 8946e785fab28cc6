// src/model/properties.rs
//! Optional-field readers over a page's property map.
//!
//! Every lookup tolerates an absent property, an empty list or an
//! unexpected JSON shape by falling back to a default value.

use super::page::PageRecord;
use crate::types::NotionId;
use log::warn;
use serde_json::Value;

const TITLE_PROPERTY: &str = "Name";
const SLUG_PROPERTY: &str = "Slug";
const KEYWORDS_PROPERTY: &str = "Keywords";
const PARENT_PROPERTY: &str = "Parent";
const CHILDREN_PROPERTY: &str = "Sub-Items";

/// Display metadata of a page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageProperties {
    pub title: String,
    pub slug: String,
    pub keywords: String,
}

/// Position of a page in the relation graph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageRelations {
    pub parent: Option<NotionId>,
    pub children: Vec<NotionId>,
}

/// Reads one property's typed sub-field.
struct PropertyReader<'a> {
    value: Option<&'a Value>,
}

impl<'a> PropertyReader<'a> {
    fn new(page: &'a PageRecord, name: &str) -> Self {
        Self {
            value: page.property(name),
        }
    }

    fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// The array stored under `field` (e.g. `title`, `rich_text`, `relation`).
    fn list(&self, field: &str) -> &'a [Value] {
        self.value
            .and_then(|v| v.get(field))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `plain_text` of the first run in a text list, if any.
    fn first_plain_text(&self, field: &str) -> Option<String> {
        self.list(field)
            .first()
            .and_then(|run| run.get("plain_text"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn relation_ids(&self) -> Vec<NotionId> {
        self.list("relation")
            .iter()
            .filter_map(|entry| entry.get("id").and_then(Value::as_str))
            .filter_map(|raw| match NotionId::parse(raw) {
                Ok(id) => Some(id),
                Err(err) => {
                    warn!("Skipping relation with invalid id '{}': {}", raw, err);
                    None
                }
            })
            .collect()
    }
}

/// Extracts title, slug and keywords.
///
/// The slug is the first `Slug` run, or the title when that list is empty,
/// with spaces replaced by hyphens. A page without a `Slug` property gets
/// an empty slug.
pub fn extract_properties(page: &PageRecord) -> PageProperties {
    let title = PropertyReader::new(page, TITLE_PROPERTY)
        .first_plain_text("title")
        .unwrap_or_default();

    let slug_reader = PropertyReader::new(page, SLUG_PROPERTY);
    let slug = if slug_reader.is_present() {
        slug_reader
            .first_plain_text("rich_text")
            .unwrap_or_else(|| title.clone())
            .replace(' ', "-")
    } else {
        log::debug!("Page {} has no Slug property", page.id);
        String::new()
    };

    let keywords = PropertyReader::new(page, KEYWORDS_PROPERTY)
        .first_plain_text("rich_text")
        .unwrap_or_default();

    PageProperties {
        title,
        slug,
        keywords,
    }
}

/// Extracts the `Parent` relation (first entry) and the `Sub-Items` list.
pub fn extract_relations(page: &PageRecord) -> PageRelations {
    let parent = PropertyReader::new(page, PARENT_PROPERTY)
        .relation_ids()
        .into_iter()
        .next();
    let children = PropertyReader::new(page, CHILDREN_PROPERTY).relation_ids();

    PageRelations { parent, children }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page() -> PageRecord {
        PageRecord::new(NotionId::parse(&"1".repeat(32)).unwrap())
    }

    fn text_property(kind: &str, text: &str) -> Value {
        json!({ "type": kind, kind: [{ "plain_text": text }] })
    }

    #[test]
    fn reads_title_slug_and_keywords() {
        let page = page()
            .with_property("Name", text_property("title", "Getting Started"))
            .with_property("Slug", text_property("rich_text", "getting started"))
            .with_property("Keywords", text_property("rich_text", "intro, setup"));

        let props = extract_properties(&page);
        assert_eq!(props.title, "Getting Started");
        assert_eq!(props.slug, "getting-started");
        assert_eq!(props.keywords, "intro, setup");
    }

    #[test]
    fn empty_slug_falls_back_to_title() {
        let page = page()
            .with_property("Name", text_property("title", "Quick Tour"))
            .with_property("Slug", json!({ "rich_text": [] }));

        assert_eq!(extract_properties(&page).slug, "Quick-Tour");
    }

    #[test]
    fn missing_slug_property_yields_empty_slug() {
        let page = page().with_property("Name", text_property("title", "My Page"));

        let props = extract_properties(&page);
        assert_eq!(props.title, "My Page");
        assert_eq!(props.slug, "");
    }

    #[test]
    fn wrong_shapes_yield_defaults() {
        let page = page()
            .with_property("Name", json!("not an object"))
            .with_property("Slug", json!({ "rich_text": 42 }))
            .with_property("Keywords", json!({ "rich_text": [{ "plain_text": null }] }))
            .with_property("Parent", json!({ "relation": "nope" }));

        assert_eq!(extract_properties(&page), PageProperties::default());
        assert_eq!(extract_relations(&page), PageRelations::default());
    }

    #[test]
    fn reads_relations_and_skips_invalid_ids() {
        let a = "a".repeat(32);
        let b = "b".repeat(32);
        let page = page()
            .with_property("Parent", json!({ "relation": [{ "id": a }] }))
            .with_property(
                "Sub-Items",
                json!({ "relation": [{ "id": b }, { "id": "garbage" }, { "nope": 1 }] }),
            );

        let relations = extract_relations(&page);
        assert_eq!(relations.parent, Some(NotionId::parse(&a).unwrap()));
        assert_eq!(relations.children, vec![NotionId::parse(&b).unwrap()]);
    }
}
