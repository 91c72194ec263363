//! The default resume theme.

use crate::error::StyleError;
use crate::font::FontFace;
use crate::stylesheet::{StyleRegistry, TextStyle};
use crate::text::{TextAlign, TextTransform};
use vitae_types::Color;

/// Style names referenced by the section builders.
pub mod names {
    pub const NAME: &str = "Name";
    pub const TITLE: &str = "Title";
    pub const CONTACT: &str = "Contact";
    pub const SECTION_HEADER: &str = "SectionHeader";
    pub const JOB_HEADER: &str = "JobHeader";
    pub const BODY: &str = "Body";
    pub const DATE_COLUMN: &str = "DateColumn";
    pub const INSTITUTION: &str = "Institution";

    pub const ALL: [&str; 8] = [
        NAME,
        TITLE,
        CONTACT,
        SECTION_HEADER,
        JOB_HEADER,
        BODY,
        DATE_COLUMN,
        INSTITUTION,
    ];
}

/// Builds the registry of default resume styles: 16pt name, 12pt section
/// headers, 11pt job headers and 10pt body text, all in the primary typeface.
pub fn resume_styles() -> Result<StyleRegistry, StyleError> {
    let body = || TextStyle::new(FontFace::Regular, 10.0);

    StyleRegistry::new()
        .with_style(
            names::NAME,
            TextStyle::new(FontFace::Bold, 16.0)
                .align(TextAlign::Center)
                .space_after(6.0),
        )?
        .with_style(
            names::TITLE,
            body().leading(12.0).align(TextAlign::Center),
        )?
        .with_style(
            names::CONTACT,
            body().align(TextAlign::Center).space_after(6.0),
        )?
        .with_style(
            names::SECTION_HEADER,
            TextStyle::new(FontFace::Bold, 12.0)
                .space_before(8.0)
                .space_after(3.0)
                .transform(TextTransform::Uppercase),
        )?
        .with_style(
            names::JOB_HEADER,
            TextStyle::new(FontFace::Bold, 11.0)
                .leading(13.0)
                .space_before(6.0)
                .space_after(2.0),
        )?
        .with_style(
            names::BODY,
            body().leading(12.0).space_before(1.0).space_after(1.0),
        )?
        .with_style(
            names::DATE_COLUMN,
            body()
                .leading(12.0)
                .color(Color::GRAY)
                .align(TextAlign::Right)
                .space_after(2.0),
        )?
        .with_style(
            names::INSTITUTION,
            body().leading(12.0).color(Color::GRAY).space_after(2.0),
        )
}
