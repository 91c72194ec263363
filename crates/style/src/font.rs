use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Registered name of the regular face of the embedded typeface.
pub const PRIMARY: &str = "primary";
/// Registered name of the bold face of the embedded typeface.
pub const PRIMARY_BOLD: &str = "primary-bold";

/// One of the two weights of the document typeface.
///
/// Serialized as its registered font name (`"primary"` / `"primary-bold"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
}

impl FontFace {
    /// The name under which the face is registered with the font set.
    pub fn registered_name(self) -> &'static str {
        match self {
            FontFace::Regular => PRIMARY,
            FontFace::Bold => PRIMARY_BOLD,
        }
    }

    pub fn is_bold(self) -> bool {
        self == FontFace::Bold
    }

    /// Parse a face from its registered name or a weight keyword ("bold", "regular").
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            PRIMARY | "regular" | "normal" => Ok(FontFace::Regular),
            PRIMARY_BOLD | "bold" => Ok(FontFace::Bold),
            _ => Err(format!("Invalid font face: '{}'", s)),
        }
    }
}

impl Serialize for FontFace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.registered_name())
    }
}

impl<'de> Deserialize<'de> for FontFace {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
