//! Paginated list envelopes.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A page of results in the backend's `{content: [...]}` envelope.
///
/// A missing or `null` `content` is an empty page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Zero-based page index.
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
}

impl<T> Page<T> {
    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        match (self.number, self.total_pages) {
            (Some(number), Some(total)) => number + 1 < total,
            _ => false,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.content
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keys that mark an object as a page envelope.
const PAGE_KEYS: [&str; 5] = ["content", "totalElements", "totalPages", "number", "size"];

/// List bodies seen in the wild: the envelope, or a bare array.
///
/// An object without any envelope key is rejected, so an error body sent
/// with a 2xx status is not mistaken for an empty list.
pub(crate) enum ListBody<T> {
    Items(Vec<T>),
    Page(Page<T>),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ListBody<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Array(_) => serde_json::from_value(value)
                .map(ListBody::Items)
                .map_err(de::Error::custom),
            Value::Object(map) if PAGE_KEYS.iter().any(|key| map.contains_key(*key)) => {
                serde_json::from_value(value)
                    .map(ListBody::Page)
                    .map_err(de::Error::custom)
            }
            _ => Err(de::Error::custom(
                "expected an array or a {\"content\": [...]} envelope",
            )),
        }
    }
}

impl<T> ListBody<T> {
    pub(crate) fn into_items(self) -> Vec<T> {
        match self {
            ListBody::Items(items) => items,
            ListBody::Page(page) => page.content,
        }
    }
}

/// Zero-based page selection for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_content_is_empty() {
        let page: Page<i64> = serde_json::from_value(json!({"content": null})).unwrap();
        assert!(page.content.is_empty());
    }

    #[test]
    fn missing_content_is_empty() {
        let page: Page<i64> = serde_json::from_value(json!({"totalElements": 0})).unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, Some(0));
    }

    #[test]
    fn reads_spring_page_metadata() {
        let page: Page<i64> = serde_json::from_value(json!({
            "content": [1, 2],
            "totalElements": 5,
            "totalPages": 3,
            "number": 0,
            "size": 2
        }))
        .unwrap();
        assert_eq!(page.content, vec![1, 2]);
        assert!(page.has_next());
    }

    #[test]
    fn list_body_accepts_array_or_envelope() {
        let items: ListBody<i64> = serde_json::from_value(json!([1, 2, 3])).unwrap();
        assert_eq!(items.into_items(), vec![1, 2, 3]);

        let page: ListBody<i64> = serde_json::from_value(json!({"content": [4]})).unwrap();
        assert_eq!(page.into_items(), vec![4]);

        let page: ListBody<i64> = serde_json::from_value(json!({"totalElements": 0})).unwrap();
        assert!(page.into_items().is_empty());
    }

    #[test]
    fn list_body_rejects_object_without_envelope_keys() {
        assert!(serde_json::from_value::<ListBody<i64>>(json!({"error": "x"})).is_err());
        assert!(serde_json::from_value::<ListBody<i64>>(json!("oops")).is_err());
    }
}
