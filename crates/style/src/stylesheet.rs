//! Named text styles and the registry that holds them.

use crate::dimension::PageLayout;
use crate::error::StyleError;
use crate::font::FontFace;
use crate::text::{TextAlign, TextTransform};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use vitae_types::Color;

/// A named, immutable bundle of font, size, color, alignment and spacing.
#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font: FontFace,
    pub font_size: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading: Option<f32>,
    pub color: Color,
    pub text_align: TextAlign,
    pub space_before: f32,
    pub space_after: f32,
    pub text_transform: TextTransform,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: FontFace::Regular,
            font_size: 10.0,
            leading: None,
            color: Color::BLACK,
            text_align: TextAlign::Left,
            space_before: 0.0,
            space_after: 0.0,
            text_transform: TextTransform::None,
        }
    }
}

impl TextStyle {
    pub fn new(font: FontFace, font_size: f32) -> Self {
        Self {
            font,
            font_size,
            ..Default::default()
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn leading(mut self, leading: f32) -> Self {
        self.leading = Some(leading);
        self
    }

    pub fn space_before(mut self, points: f32) -> Self {
        self.space_before = points;
        self
    }

    pub fn space_after(mut self, points: f32) -> Self {
        self.space_after = points;
        self
    }

    pub fn transform(mut self, transform: TextTransform) -> Self {
        self.text_transform = transform;
        self
    }

    /// Baseline-to-baseline distance; 1.2 × font size unless set explicitly.
    pub fn line_height(&self) -> f32 {
        self.leading.unwrap_or(self.font_size * 1.2)
    }

    /// Applies the style's text transform (e.g. upper-casing section headers).
    pub fn apply_transform<'a>(&self, text: &'a str) -> std::borrow::Cow<'a, str> {
        self.text_transform.apply(text)
    }

    fn validate(&self, name: &str) -> Result<(), StyleError> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(StyleError::Invalid {
                name: name.to_string(),
                message: format!("font size must be positive, got {}", self.font_size),
            });
        }
        if let Some(leading) = self.leading
            && !(leading.is_finite() && leading > 0.0)
        {
            return Err(StyleError::Invalid {
                name: name.to_string(),
                message: format!("leading must be positive, got {}", leading),
            });
        }
        Ok(())
    }
}

/// A partial [`TextStyle`]: only the fields that are set replace the base.
#[derive(Deserialize, Serialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontFace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_before: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_after: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
}

impl StyleOverride {
    /// Overlays the set fields onto `base`.
    pub fn apply_to(&self, base: &TextStyle) -> TextStyle {
        TextStyle {
            font: self.font.unwrap_or(base.font),
            font_size: self.font_size.unwrap_or(base.font_size),
            leading: self.leading.or(base.leading),
            color: self.color.clone().unwrap_or_else(|| base.color.clone()),
            text_align: self.text_align.unwrap_or(base.text_align),
            space_before: self.space_before.unwrap_or(base.space_before),
            space_after: self.space_after.unwrap_or(base.space_after),
            text_transform: self.text_transform.unwrap_or(base.text_transform),
        }
    }
}

/// Style overrides and page geometry loaded from a theme file.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageLayout>,
    /// Per-style overrides keyed by style name. Fields left out keep the
    /// existing definition; unknown names start from `TextStyle::default()`.
    #[serde(default)]
    pub styles: BTreeMap<String, StyleOverride>,
}

/// Maps style names to their definitions.
///
/// Built once before the first generation call and shared read-only
/// (usually behind an `Arc`) by the assembler and the rendering backend.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: BTreeMap<String, Arc<TextStyle>>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a style, rejecting definitions with nonsensical metrics.
    pub fn insert(&mut self, name: impl Into<String>, style: TextStyle) -> Result<(), StyleError> {
        let name = name.into();
        style.validate(&name)?;
        self.styles.insert(name, Arc::new(style));
        Ok(())
    }

    /// Builder-style variant of [`StyleRegistry::insert`].
    pub fn with_style(mut self, name: &str, style: TextStyle) -> Result<Self, StyleError> {
        self.insert(name, style)?;
        Ok(self)
    }

    /// Merges every override of `theme` into the same-named definition.
    pub fn extend_from(&mut self, theme: &Theme) -> Result<(), StyleError> {
        for (name, overrides) in &theme.styles {
            let merged = match self.get(name) {
                Some(base) => overrides.apply_to(base),
                None => overrides.apply_to(&TextStyle::default()),
            };
            log::debug!("Theme overrides style '{}'", name);
            self.insert(name.clone(), merged)?;
        }
        Ok(())
    }

    /// Looks up a style by name.
    pub fn get(&self, name: &str) -> Option<&Arc<TextStyle>> {
        self.styles.get(name)
    }

    /// Looks up a style, treating a missing definition as an error.
    pub fn require(&self, name: &str) -> Result<&Arc<TextStyle>, StyleError> {
        self.get(name).ok_or_else(|| StyleError::Undefined(name.to_string()))
    }

    /// Checks that every name in `names` is defined, reporting the first that is not.
    pub fn ensure_defined<'a, I>(&self, names: I) -> Result<(), StyleError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().try_for_each(|name| self.require(name).map(|_| ()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Iterates styles in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<TextStyle>)> {
        self.styles.iter().map(|(name, style)| (name.as_str(), style))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
