use super::SectionBuilder;
use crate::record::entries::{Basics, Profile};
use crate::record::fields::object_of;
use serde_json::Value;
use vitae_blocks::{LayoutBlock, RichText};
use vitae_style::names;

const SEPARATOR: &str = " | ";

/// The untitled document header: name, label, contact line, profiles and summary.
#[derive(Debug, Default)]
pub struct BasicsSection;

impl BasicsSection {
    fn contact_line(basics: &Basics) -> RichText {
        let parts = [
            basics.email.as_deref(),
            basics.phone.as_deref(),
            basics.location.as_deref(),
            basics.url.as_deref(),
        ];
        RichText::join(parts.into_iter().flatten().map(RichText::plain), SEPARATOR)
    }

    /// `"network: username"`, the username linked when the profile has a URL.
    fn profile(profile: &Profile) -> Option<RichText> {
        let network = profile.network.as_deref()?;
        let username = profile.username.as_deref()?;
        let label = RichText::strong(network).text(": ");
        Some(match profile.url.as_deref() {
            Some(url) => label.link(username, url),
            None => label.text(username),
        })
    }
}

impl SectionBuilder for BasicsSection {
    fn key(&self) -> &str {
        "basics"
    }

    fn styles(&self) -> &'static [&'static str] {
        &[names::NAME, names::TITLE, names::CONTACT, names::BODY]
    }

    fn build(&self, data: &Value) -> Vec<LayoutBlock> {
        let Some(basics) = object_of::<Basics>(data) else {
            log::debug!("Skipping basics: not a mapping");
            return Vec::new();
        };

        let mut blocks = Vec::new();
        if let Some(name) = &basics.name {
            blocks.push(LayoutBlock::text(name.as_str(), names::NAME));
        }
        if let Some(label) = &basics.label {
            blocks.push(LayoutBlock::text(RichText::strong(label.as_str()), names::TITLE));
        }

        let contact = Self::contact_line(&basics);
        if !contact.is_empty() {
            blocks.push(LayoutBlock::text(contact, names::CONTACT));
        }

        let profiles = RichText::join(basics.profiles.iter().filter_map(Self::profile), SEPARATOR);
        if !profiles.is_empty() {
            blocks.push(LayoutBlock::text(profiles, names::CONTACT));
        }

        if let Some(summary) = &basics.summary {
            blocks.push(LayoutBlock::text(summary.as_str(), names::BODY));
        }

        if blocks.is_empty() {
            Vec::new()
        } else {
            vec![LayoutBlock::group(blocks)]
        }
    }
}
