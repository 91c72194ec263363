use super::{EntrySection, SectionBuilder, labelled_line};
use crate::record::entries::LanguageEntry;
use serde_json::Value;
use vitae_blocks::LayoutBlock;
use vitae_style::names;

#[derive(Debug, Default)]
pub struct LanguagesSection;

impl EntrySection for LanguagesSection {
    type Entry = LanguageEntry;

    fn title(&self) -> &str {
        "LANGUAGES"
    }

    fn entry_blocks(&self, entry: &LanguageEntry) -> Vec<LayoutBlock> {
        match (entry.language.as_deref(), entry.fluency.as_deref()) {
            (Some(language), Some(fluency)) => vec![labelled_line(language, fluency)],
            _ => Vec::new(),
        }
    }

    fn entry_gap(&self) -> Option<f32> {
        None
    }
}

impl SectionBuilder for LanguagesSection {
    fn key(&self) -> &str {
        "languages"
    }

    fn styles(&self) -> &'static [&'static str] {
        &[names::SECTION_HEADER, names::BODY]
    }

    fn build(&self, data: &Value) -> Vec<LayoutBlock> {
        self.build_section(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{body, texts};
    use serde_json::json;

    #[test]
    fn test_language_lines() {
        let blocks = LanguagesSection.build(&json!([
            {"language": "Norwegian", "fluency": "Native"},
            {"language": "German"},
            {"fluency": "Basic"},
            {"language": "English", "fluency": "Fluent"}
        ]));
        assert_eq!(
            texts(body(&blocks)),
            vec!["Norwegian: Native", "English: Fluent"]
        );
    }

    #[test]
    fn test_incomplete_languages_is_nothing() {
        assert!(LanguagesSection.build(&json!([{"language": "German"}])).is_empty());
    }
}
