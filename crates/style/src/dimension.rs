//! Page geometry: sizes, margins and the page layout handed to backends.
use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};

/// Points per inch.
pub const INCH: f32 = 72.0;

#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Parse a CSS-style length value with optional unit (e.g., "10pt", "5mm", "1in", "12")
    fn parse_length(input: &str) -> Result<f32, String> {
        let input = input.trim();

        let units: [(&str, f32); 5] = [
            ("pt", 1.0),
            ("px", 1.0),
            ("in", INCH),
            ("cm", 28.35),
            ("mm", 2.835),
        ];
        for (suffix, factor) in units {
            if let Some(val) = input.strip_suffix(suffix) {
                return val
                    .trim()
                    .parse::<f32>()
                    .map(|v| v * factor)
                    .map_err(|e| format!("Invalid number: {}", e));
            }
        }

        // No unit, assume points
        input.parse::<f32>().map_err(|e| format!("Invalid number: {}", e))
    }

    /// Parse CSS-style margin shorthand (1, 2, or 4 values)
    pub fn parse_shorthand(input: &str) -> Result<Self, String> {
        let values = input
            .split_whitespace()
            .map(Self::parse_length)
            .collect::<Result<Vec<_>, _>>()?;

        match values.len() {
            1 => Ok(Margins::all(values[0])),
            2 => Ok(Margins {
                top: values[0],
                right: values[1],
                bottom: values[0],
                left: values[1],
            }),
            4 => Ok(Margins {
                top: values[0],
                right: values[1],
                bottom: values[2],
                left: values[3],
            }),
            _ => Err(format!(
                "Invalid margin shorthand: expected 1, 2, or 4 values, got {}",
                values.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MarginsVisitor;
        impl<'de> de::Visitor<'de> for MarginsVisitor {
            type Value = Margins;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string like '10pt' or '1in 0.5in' or a map")
            }

            fn visit_str<E>(self, value: &str) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Margins::parse_shorthand(value).map_err(E::custom)
            }

            fn visit_f64<E>(self, value: f64) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Ok(Margins::all(value as f32))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Ok(Margins::all(value as f32))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Margins, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut margins = Margins::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "top" => margins.top = map.next_value()?,
                        "right" => margins.right = map.next_value()?,
                        "bottom" => margins.bottom = map.next_value()?,
                        "left" => margins.left = map.next_value()?,
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                Ok(margins)
            }
        }
        deserializer.deserialize_any(MarginsVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageSize {
    A4,
    #[default]
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    /// Parse a page size name (e.g., "A4", "Letter", "Legal")
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}

/// Fixed page geometry the rendering backend lays blocks out on.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    #[serde(default)]
    pub size: PageSize,
    #[serde(default = "PageLayout::resume_margins")]
    pub margins: Margins,
}

impl Default for PageLayout {
    /// US Letter with one-inch side margins, a tight top margin and a half-inch bottom margin.
    fn default() -> Self {
        Self {
            size: PageSize::Letter,
            margins: Self::resume_margins(),
        }
    }
}

impl PageLayout {
    fn resume_margins() -> Margins {
        Margins {
            top: 0.1 * INCH,
            right: INCH,
            bottom: 0.5 * INCH,
            left: INCH,
        }
    }

    /// Width available to content between the side margins.
    pub fn content_width(&self) -> f32 {
        let (width, _) = self.size.dimensions_pt();
        (width - self.margins.left - self.margins.right).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_shorthand() {
        assert_eq!(Margins::parse_shorthand("10pt").unwrap(), Margins::all(10.0));
        let two = Margins::parse_shorthand("1in 0.5in").unwrap();
        assert_eq!(two.top, 72.0);
        assert_eq!(two.right, 36.0);
        assert_eq!(two.bottom, 72.0);
        assert!(Margins::parse_shorthand("1 2 3").is_err());
        assert!(Margins::parse_shorthand("abc").is_err());
    }

    #[test]
    fn test_page_layout_defaults_to_letter_resume_margins() {
        let layout = PageLayout::default();
        assert_eq!(layout.size, PageSize::Letter);
        assert_eq!(layout.margins.left, INCH);
        assert!((layout.margins.top - 7.2).abs() < 1e-4);
        assert_eq!(layout.content_width(), 612.0 - 144.0);
    }

    #[test]
    fn test_page_layout_deserializes_partial_definition() {
        let layout: PageLayout = serde_json::from_str(r#"{"size": "A4"}"#).unwrap();
        assert_eq!(layout.size, PageSize::A4);
        assert_eq!(layout.margins, PageLayout::default().margins);

        let layout: PageLayout =
            serde_json::from_str(r#"{"size": {"width": 500, "height": 700}, "margins": "20pt"}"#).unwrap();
        assert_eq!(layout.size.dimensions_pt(), (500.0, 700.0));
        assert_eq!(layout.margins, Margins::all(20.0));
    }
}
