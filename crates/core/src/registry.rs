//! Maps section keys to builders and drives assembly in record order.

use crate::record::{ResumeRecord, is_present};
use crate::sections::{
    AwardsSection, BasicsSection, EducationSection, ExperienceSection, KeywordSection,
    LanguagesSection, ProjectsSection, PublicationsSection, ReferencesSection, SectionBuilder,
    VolunteerSection,
};
use std::collections::{BTreeSet, HashMap};
use vitae_blocks::LayoutBlock;

/// A fixed set of section builders keyed by the record key they consume.
pub struct SectionRegistry {
    builders: Vec<Box<dyn SectionBuilder>>,
    by_key: HashMap<String, usize>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self {
            builders: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    /// The eleven resume sections.
    pub fn resume() -> Self {
        Self::new()
            .with(BasicsSection)
            .with(ExperienceSection)
            .with(VolunteerSection)
            .with(EducationSection)
            .with(AwardsSection)
            .with(PublicationsSection)
            .with(KeywordSection::skills())
            .with(LanguagesSection)
            .with(KeywordSection::interests())
            .with(ReferencesSection)
            .with(ProjectsSection)
    }

    /// Registers `builder`, replacing any builder already registered for its key.
    pub fn register(&mut self, builder: impl SectionBuilder + 'static) {
        let key = builder.key().to_string();
        match self.by_key.get(&key) {
            Some(&index) => self.builders[index] = Box::new(builder),
            None => {
                self.by_key.insert(key, self.builders.len());
                self.builders.push(Box::new(builder));
            }
        }
    }

    pub fn with(mut self, builder: impl SectionBuilder + 'static) -> Self {
        self.register(builder);
        self
    }

    pub fn get(&self, key: &str) -> Option<&dyn SectionBuilder> {
        self.by_key.get(key).map(|&index| self.builders[index].as_ref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.builders.iter().map(|b| b.key())
    }

    /// Every style name any registered builder may reference.
    pub fn required_styles(&self) -> BTreeSet<&'static str> {
        self.builders
            .iter()
            .flat_map(|b| b.styles().iter().copied())
            .collect()
    }

    /// Builds every present, registered section in record order and concatenates the output.
    pub fn assemble(&self, record: &ResumeRecord) -> Vec<LayoutBlock> {
        let mut blocks = Vec::new();
        for (key, value) in record.iter() {
            let Some(builder) = self.get(key) else {
                log::debug!("Skipping unregistered section '{}'", key);
                continue;
            };
            if !is_present(value) {
                log::debug!("Skipping empty section '{}'", key);
                continue;
            }
            let section = builder.build(value);
            if section.is_empty() {
                log::debug!("Section '{}' produced no content", key);
            }
            blocks.extend(section);
        }
        blocks
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::resume()
    }
}

impl std::fmt::Debug for SectionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionRegistry")
            .field("sections", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}
