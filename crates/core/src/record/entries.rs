//! Optional-field entry types, one per section shape.
//!
//! Every field is optional and tolerant of the wrong JSON type: a field that
//! cannot be read as text (or as a list of text) is simply absent.

use super::fields;
use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer};
use serde_json::Value;

/// Converts a section slice into its entries.
///
/// Returns nothing when the slice is not a sequence. Items that are not
/// mappings are skipped individually.
pub fn entries<T: DeserializeOwned>(section: &Value) -> Vec<T> {
    let Some(items) = section.as_array() else {
        log::debug!(
            "Expected a sequence of entries, found {}; skipping section",
            super::json_type_name(section)
        );
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let entry = fields::object_of(item);
            if entry.is_none() {
                log::debug!(
                    "Skipping entry {} ({} is not a mapping)",
                    index,
                    super::json_type_name(item)
                );
            }
            entry
        })
        .collect()
}

/// A city and region pair.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "fields::text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub region: Option<String>,
}

impl Location {
    /// `"city, region"`, or whichever part is present.
    pub fn display(&self) -> Option<String> {
        let parts: Vec<&str> = [self.city.as_deref(), self.region.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

/// Reads a location given either as free text or as a `{city, region}` mapping.
fn place<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Object(_) => fields::object_of::<Location>(&value).and_then(|l| l.display()),
        other => fields::text_of(other),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "fields::text")]
    pub network: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub username: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Basics {
    #[serde(deserialize_with = "fields::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub label: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "place")]
    pub location: Option<String>,
    #[serde(deserialize_with = "fields::object_list")]
    pub profiles: Vec<Profile>,
}

/// A work or volunteer position.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PositionEntry {
    #[serde(deserialize_with = "fields::text")]
    pub organization: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub position: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "place")]
    pub location: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "fields::text_list")]
    pub highlights: Vec<String>,
}

impl PositionEntry {
    /// The employing organization, whichever of the accepted keys carries it.
    pub fn organization(&self) -> Option<&str> {
        self.organization
            .as_deref()
            .or(self.company.as_deref())
            .or(self.name.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(deserialize_with = "fields::text")]
    pub institution: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub area: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub study_type: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub score: Option<String>,
    #[serde(deserialize_with = "fields::text_list")]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AwardEntry {
    #[serde(deserialize_with = "fields::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub awarder: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PublicationEntry {
    #[serde(deserialize_with = "fields::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub publisher: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub release_date: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub summary: Option<String>,
}

/// A named keyword list (skills and interests share this shape).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeywordEntry {
    #[serde(deserialize_with = "fields::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "fields::text_list")]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LanguageEntry {
    #[serde(deserialize_with = "fields::text")]
    pub language: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub fluency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReferenceEntry {
    #[serde(deserialize_with = "fields::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "fields::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "fields::text_list")]
    pub highlights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entries_skip_non_mappings() {
        let section = json!([
            {"name": "Rust", "keywords": ["async"]},
            "stray string",
            ["an", "array"],
            42,
            {"name": "Go"}
        ]);
        let skills: Vec<KeywordEntry> = entries(&section);
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].name.as_deref(), Some("Rust"));
        assert_eq!(skills[1].name.as_deref(), Some("Go"));
        assert!(skills[1].keywords.is_empty());
    }

    #[test]
    fn test_entries_of_wrong_container_is_empty() {
        let skills: Vec<KeywordEntry> = entries(&json!({"name": "Rust"}));
        assert!(skills.is_empty());
        let skills: Vec<KeywordEntry> = entries(&json!("Rust"));
        assert!(skills.is_empty());
    }

    #[test]
    fn test_wrong_typed_field_only_drops_that_field() {
        let section = json!([{
            "company": "Acme",
            "position": ["not", "text"],
            "startDate": 2019,
            "highlights": ["Shipped", 7, null, {"x": 1}, "", "Scaled"]
        }]);
        let jobs: Vec<PositionEntry> = entries(&section);
        assert_eq!(jobs.len(), 1);
        let job = &jobs[0];
        assert_eq!(job.organization(), Some("Acme"));
        assert_eq!(job.position, None);
        assert_eq!(job.start_date.as_deref(), Some("2019"));
        assert_eq!(job.highlights, vec!["Shipped", "7", "Scaled"]);
    }

    #[test]
    fn test_organization_fallback_order() {
        let jobs: Vec<PositionEntry> = entries(&json!([
            {"organization": "Org", "company": "Co", "name": "Name"},
            {"company": "Co", "name": "Name"},
            {"name": "Name"},
            {"company": "", "name": "Name"},
            {}
        ]));
        let orgs: Vec<Option<&str>> = jobs.iter().map(|j| j.organization()).collect();
        assert_eq!(
            orgs,
            vec![Some("Org"), Some("Co"), Some("Name"), Some("Name"), None]
        );
    }

    #[test]
    fn test_location_string_or_mapping() {
        let jobs: Vec<PositionEntry> = entries(&json!([
            {"location": "Remote"},
            {"location": {"city": "Oslo", "region": "NO"}},
            {"location": {"region": "CA"}},
            {"location": {}},
            {"location": 12.5}
        ]));
        let locations: Vec<Option<&str>> = jobs.iter().map(|j| j.location.as_deref()).collect();
        assert_eq!(
            locations,
            vec![Some("Remote"), Some("Oslo, NO"), Some("CA"), None, Some("12.5")]
        );
    }

    #[test]
    fn test_basics_profiles_tolerate_junk() {
        let basics: Basics = serde_json::from_value(json!({
            "name": "A. Lin",
            "profiles": [{"network": "GitHub", "username": "alin"}, "junk", 3],
            "location": ["not", "a", "place"]
        }))
        .unwrap();
        assert_eq!(basics.name.as_deref(), Some("A. Lin"));
        assert_eq!(basics.profiles.len(), 1);
        assert_eq!(basics.location, None);
    }

    #[test]
    fn test_numeric_score_is_text() {
        let schools: Vec<EducationEntry> = entries(&json!([{"score": 3.8, "courses": "CS101"}]));
        assert_eq!(schools[0].score.as_deref(), Some("3.8"));
        assert!(schools[0].courses.is_empty());
    }
}
