//! The gazette item entity.

use serde::{Deserialize, Deserializer, Serialize};

/// One entry in the gazette's daily index.
///
/// Produced by the fetch/parse collaborator and never mutated afterwards.
/// `section` is the top-level heading (e.g. "YASAMA BÖLÜMÜ"), `subsection`
/// the second-level one (e.g. "KANUN").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsection: Option<String>,
}

impl GazetteItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            section: None,
            subsection: None,
        }
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn with_subsection(mut self, subsection: impl Into<String>) -> Self {
        self.subsection = Some(subsection.into());
        self
    }

    /// Dedup key: title and url joined with `|`.
    pub fn identity(&self) -> String {
        format!("{}|{}", self.title, self.url)
    }

    /// Text scored by the policies: section, subsection and title, in that
    /// order, joined by a single space. Absent or empty fields are skipped.
    pub fn haystack(&self) -> String {
        [
            self.section.as_deref(),
            self.subsection.as_deref(),
            Some(self.title.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haystack_orders_section_subsection_title() {
        let item = GazetteItem::new("Gelir Vergisi Genel Tebliği", "https://x/1")
            .with_section("YÜRÜTME VE İDARE BÖLÜMÜ")
            .with_subsection("TEBLİĞLER");
        assert_eq!(
            item.haystack(),
            "YÜRÜTME VE İDARE BÖLÜMÜ TEBLİĞLER Gelir Vergisi Genel Tebliği"
        );
    }

    #[test]
    fn haystack_skips_absent_fields() {
        let item = GazetteItem::new("Kanun", "https://x/2").with_subsection("KANUN");
        assert_eq!(item.haystack(), "KANUN Kanun");
    }

    #[test]
    fn haystack_of_blank_item_is_empty() {
        let item = GazetteItem::new("", "https://x/3");
        assert_eq!(item.haystack(), "");
    }

    #[test]
    fn identity_joins_title_and_url() {
        let item = GazetteItem::new("Karar", "https://x/4");
        assert_eq!(item.identity(), "Karar|https://x/4");
    }

    #[test]
    fn deserializes_null_title_as_empty() {
        let item: GazetteItem =
            serde_json::from_str(r#"{"title": null, "url": "https://x/5"}"#).unwrap();
        assert_eq!(item.title, "");
        assert!(item.section.is_none());
    }

    #[test]
    fn serialization_omits_absent_sections() {
        let json = serde_json::to_value(GazetteItem::new("A", "https://x/6")).unwrap();
        assert!(json.get("section").is_none());
        assert!(json.get("subsection").is_none());
        assert_eq!(json["title"], "A");
    }
}
