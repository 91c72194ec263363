//! Inline rich text: a paragraph's content as a sequence of runs.

use serde::Serialize;

fn is_false(value: &bool) -> bool {
    !*value
}

/// A run of text sharing one emphasis flag and an optional link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineRun {
    pub text: String,
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl InlineRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            link: None,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            link: Some(href.into()),
            ..Self::plain(text)
        }
    }
}

/// Formatted paragraph content. The backend composes runs into the final glyph stream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RichText {
    runs: Vec<InlineRun>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content made of a single unemphasized run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    /// Content made of a single bold run.
    pub fn strong(text: impl Into<String>) -> Self {
        Self::new().bold(text)
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.run(InlineRun::plain(text))
    }

    pub fn bold(self, text: impl Into<String>) -> Self {
        self.run(InlineRun::bold(text))
    }

    pub fn link(self, text: impl Into<String>, href: impl Into<String>) -> Self {
        self.run(InlineRun::link(text, href))
    }

    /// Appends a run. Empty runs are dropped so content never carries blank fragments.
    pub fn run(mut self, run: InlineRun) -> Self {
        if !run.text.is_empty() {
            self.runs.push(run);
        }
        self
    }

    /// Appends all runs of `other`.
    pub fn append(mut self, other: RichText) -> Self {
        self.runs.extend(other.runs);
        self
    }

    pub fn runs(&self) -> &[InlineRun] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The content with all markup stripped.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Joins several rich texts with a plain separator, skipping empty ones.
    pub fn join<I>(parts: I, separator: &str) -> RichText
    where
        I: IntoIterator<Item = RichText>,
    {
        parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .fold(RichText::new(), |acc, part| {
                if acc.is_empty() {
                    part
                } else {
                    acc.text(separator).append(part)
                }
            })
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        RichText::plain(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        RichText::plain(text)
    }
}
