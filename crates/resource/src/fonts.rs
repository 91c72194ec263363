//! The two-face font set of the document typeface.

use vitae_style::FontFace;
use vitae_traits::{FontError, FontProvider, SharedFontData};

/// File name of the regular face looked up by [`FontSet::load_default`].
pub const DEFAULT_REGULAR_FILE: &str = "MarkaziText-Regular.ttf";
/// File name of the bold face looked up by [`FontSet::load_default`].
pub const DEFAULT_BOLD_FILE: &str = "MarkaziText-Bold.ttf";

/// Metadata about a loaded, validated font face.
#[derive(Debug, Clone)]
pub struct FontFaceInfo {
    /// Name the face is registered under (`primary` / `primary-bold`).
    pub registered_name: &'static str,
    /// Family name read from the font's name table, when present.
    pub family: Option<String>,
    pub postscript_name: Option<String>,
    pub source: String,
    pub data: SharedFontData,
}

impl FontFaceInfo {
    fn parse(face: FontFace, source: &str, data: SharedFontData) -> Result<Self, FontError> {
        let parsed = ttf_parser::Face::parse(&data, 0).map_err(|e| FontError::InvalidFont {
            path: source.to_string(),
            message: e.to_string(),
        })?;

        let name_for = |id: u16| {
            parsed
                .names()
                .into_iter()
                .filter(|name| name.name_id == id && name.is_unicode())
                .find_map(|name| name.to_string())
        };
        let family = name_for(ttf_parser::name_id::FAMILY);
        let postscript_name = name_for(ttf_parser::name_id::POST_SCRIPT_NAME);

        log::debug!(
            "Registered '{}' from {} (family: {:?}, postscript: {:?})",
            face.registered_name(),
            source,
            family,
            postscript_name
        );

        Ok(Self {
            registered_name: face.registered_name(),
            family,
            postscript_name,
            source: source.to_string(),
            data,
        })
    }
}

/// The regular and bold faces of the document typeface, loaded once at
/// process start. Both must load and parse or the set is not built.
#[derive(Debug, Clone)]
pub struct FontSet {
    regular: FontFaceInfo,
    bold: FontFaceInfo,
}

impl FontSet {
    /// Loads and validates both faces from `provider`.
    pub fn load(provider: &dyn FontProvider, regular: &str, bold: &str) -> Result<Self, FontError> {
        log::debug!("Loading font set through {}", provider.name());
        let regular = FontFaceInfo::parse(FontFace::Regular, regular, provider.load(regular)?)?;
        let bold = FontFaceInfo::parse(FontFace::Bold, bold, provider.load(bold)?)?;
        Ok(Self { regular, bold })
    }

    /// Loads the faces under their default file names.
    pub fn load_default(provider: &dyn FontProvider) -> Result<Self, FontError> {
        Self::load(provider, DEFAULT_REGULAR_FILE, DEFAULT_BOLD_FILE)
    }

    pub fn face(&self, face: FontFace) -> &FontFaceInfo {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Bold => &self.bold,
        }
    }

    pub fn faces(&self) -> [&FontFaceInfo; 2] {
        [&self.regular, &self.bold]
    }
}
