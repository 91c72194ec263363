//! Layout Block Model
//! The output contract of the assembly engine: an ordered sequence of
//! renderable blocks referencing styles by name. Blocks own their content and
//! hold no reference back to the resume record they were built from.

mod inline;

pub use inline::{InlineRun, RichText};

use serde::Serialize;
use std::collections::BTreeSet;

/// A run of formatted text set in a named style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub content: RichText,
    pub style: String,
}

impl Paragraph {
    pub fn new(content: impl Into<RichText>, style: &str) -> Self {
        Self {
            content: content.into(),
            style: style.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn plain_text(&self) -> String {
        self.content.plain_text()
    }
}

/// A single-row, two-cell layout: a primary label on the left and a secondary
/// label (dates, location) right-aligned in a fixed-width right column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoColumnRow {
    pub left: Paragraph,
    pub right: Paragraph,
    /// Width of the right cell in points; the left cell takes the rest.
    pub right_column_width: f32,
}

/// Represents a renderable unit in the assembled document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "PascalCase", rename_all_fields = "camelCase")]
pub enum LayoutBlock {
    /// A paragraph of rich text.
    Text(Paragraph),
    /// Vertical whitespace, in points.
    Spacer { height: f32 },
    /// A horizontal separator spanning `width_fraction` of the content width.
    Rule { width_fraction: f32, thickness: f32 },
    /// A two-cell row.
    TwoColumnRow(TwoColumnRow),
    /// A keep-together hint: the backend should avoid a page break inside.
    Group { blocks: Vec<LayoutBlock> },
}

impl LayoutBlock {
    pub fn text(content: impl Into<RichText>, style: &str) -> Self {
        LayoutBlock::Text(Paragraph::new(content, style))
    }

    pub fn spacer(height: f32) -> Self {
        LayoutBlock::Spacer { height }
    }

    pub fn rule(width_fraction: f32, thickness: f32) -> Self {
        LayoutBlock::Rule {
            width_fraction,
            thickness,
        }
    }

    pub fn row(left: Paragraph, right: Paragraph, right_column_width: f32) -> Self {
        LayoutBlock::TwoColumnRow(TwoColumnRow {
            left,
            right,
            right_column_width,
        })
    }

    pub fn group(blocks: Vec<LayoutBlock>) -> Self {
        LayoutBlock::Group { blocks }
    }

    /// Returns a string identifier for the block type.
    pub fn kind(&self) -> &'static str {
        match self {
            LayoutBlock::Text(_) => "text",
            LayoutBlock::Spacer { .. } => "spacer",
            LayoutBlock::Rule { .. } => "rule",
            LayoutBlock::TwoColumnRow(_) => "two-column-row",
            LayoutBlock::Group { .. } => "group",
        }
    }

    /// Child blocks of a group; empty for every other kind.
    pub fn children(&self) -> &[LayoutBlock] {
        match self {
            LayoutBlock::Group { blocks } => blocks,
            _ => &[],
        }
    }

    /// Calls `f` for this block and every nested block, depth first, in order.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a LayoutBlock)) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }

    /// Collects the names of every style referenced by this block or its children.
    pub fn collect_styles<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        self.walk(&mut |block| match block {
            LayoutBlock::Text(p) => {
                out.insert(p.style.as_str());
            }
            LayoutBlock::TwoColumnRow(row) => {
                out.insert(row.left.style.as_str());
                out.insert(row.right.style.as_str());
            }
            _ => {}
        });
    }
}

/// Flattens a block sequence into depth-first order, groups included.
pub fn flatten(blocks: &[LayoutBlock]) -> Vec<&LayoutBlock> {
    let mut out = Vec::new();
    for block in blocks {
        block.walk(&mut |b| out.push(b));
    }
    out
}
