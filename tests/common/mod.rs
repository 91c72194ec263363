#![allow(dead_code)]

pub mod fixtures;

use serde_json::Value;
use vitae::{LayoutBlock, PipelineBuilder, PipelineError, ResumeRecord};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Assemble a record with the default pipeline.
pub fn assemble(value: Value) -> Result<Vec<LayoutBlock>, PipelineError> {
    let pipeline = PipelineBuilder::new().build()?;
    let record = ResumeRecord::from_value(value)?;
    Ok(pipeline.assemble(&record))
}

/// Section titles in emission order. The basics header group has no title and is skipped.
pub fn section_titles(blocks: &[LayoutBlock]) -> Vec<String> {
    blocks
        .iter()
        .filter_map(|block| match block.children().first() {
            Some(LayoutBlock::Text(p)) if p.style == "SectionHeader" => Some(p.plain_text()),
            _ => None,
        })
        .collect()
}

/// Plain text of every paragraph and row cell, depth first.
pub fn all_text(blocks: &[LayoutBlock]) -> Vec<String> {
    let mut out = Vec::new();
    for block in blocks {
        block.walk(&mut |b| match b {
            LayoutBlock::Text(p) => out.push(p.plain_text()),
            LayoutBlock::TwoColumnRow(row) => {
                out.push(row.left.plain_text());
                out.push(row.right.plain_text());
            }
            _ => {}
        });
    }
    out
}

/// The top-level group whose title is `title`.
pub fn section<'a>(blocks: &'a [LayoutBlock], title: &str) -> Option<&'a LayoutBlock> {
    blocks.iter().find(|block| match block.children().first() {
        Some(LayoutBlock::Text(p)) => p.style == "SectionHeader" && p.plain_text() == title,
        _ => false,
    })
}
