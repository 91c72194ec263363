//! Plain-text preview backend.
//!
//! Lays blocks out on a fixed-width character grid: bold runs are wrapped in
//! `**`, links are written as `text <url>`, rules become dashes and two-column
//! rows put the right cell flush against the right edge.

use std::io::Write;
use vitae_blocks::{LayoutBlock, Paragraph, RichText};
use vitae_render_core::{DocumentRenderer, RenderContext, RenderError};
use vitae_style::{TextAlign, TextStyle};

/// Default line width in characters.
pub const DEFAULT_WIDTH: usize = 80;

/// Spacers shorter than this (in points) are not worth a blank line.
const BLANK_LINE_THRESHOLD: f32 = 4.0;

#[derive(Debug, Clone)]
pub struct TextRenderer {
    width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn markup(text: &RichText, style: &TextStyle) -> String {
    let mut out = String::new();
    for run in text.runs() {
        let content = style.apply_transform(&run.text);
        match (&run.link, run.bold) {
            (Some(url), true) => out.push_str(&format!("**{content}** <{url}>")),
            (Some(url), false) => out.push_str(&format!("{content} <{url}>")),
            (None, true) => out.push_str(&format!("**{content}**")),
            (None, false) => out.push_str(&content),
        }
    }
    out
}

/// Accumulates output lines, collapsing runs of blank lines.
struct Sheet {
    width: usize,
    lines: Vec<String>,
}

impl Sheet {
    fn line(&mut self, text: String) {
        self.lines.push(text);
    }

    fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            self.lines.push(String::new());
        }
    }

    /// Writes `text` word-wrapped to the sheet width, each line aligned.
    fn aligned(&mut self, text: String, align: TextAlign) {
        for line in wrap(&text, self.width) {
            let pad = self.width.saturating_sub(char_len(&line));
            let line = match align {
                TextAlign::Left => line,
                TextAlign::Right => format!("{}{}", " ".repeat(pad), line),
                TextAlign::Center => format!("{}{}", " ".repeat(pad / 2), line),
            };
            self.line(line);
        }
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && char_len(&current) + 1 + char_len(word) > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

impl TextRenderer {
    fn paragraph(
        &self,
        paragraph: &Paragraph,
        context: &RenderContext<'_>,
    ) -> Result<(String, TextAlign), RenderError> {
        let style = context.style(&paragraph.style)?;
        Ok((markup(&paragraph.content, style), style.text_align))
    }

    fn block(
        &self,
        block: &LayoutBlock,
        context: &RenderContext<'_>,
        sheet: &mut Sheet,
    ) -> Result<(), RenderError> {
        match block {
            LayoutBlock::Text(paragraph) => {
                let (text, align) = self.paragraph(paragraph, context)?;
                sheet.aligned(text, align);
            }
            LayoutBlock::Spacer { height } => {
                if *height >= BLANK_LINE_THRESHOLD {
                    sheet.blank();
                }
            }
            LayoutBlock::Rule { width_fraction, .. } => {
                let dashes = (self.width as f32 * width_fraction.clamp(0.0, 1.0)).round() as usize;
                sheet.line("-".repeat(dashes));
            }
            LayoutBlock::TwoColumnRow(row) => {
                let (left, _) = self.paragraph(&row.left, context)?;
                let (right, _) = self.paragraph(&row.right, context)?;
                let used = char_len(&left) + char_len(&right);
                if used < self.width {
                    let gap = self.width - used;
                    sheet.line(format!("{left}{}{right}", " ".repeat(gap)));
                } else {
                    sheet.line(left);
                    sheet.aligned(right, TextAlign::Right);
                }
            }
            LayoutBlock::Group { blocks } => {
                for child in blocks {
                    self.block(child, context, sheet)?;
                }
            }
        }
        Ok(())
    }
}

impl<W: Write> DocumentRenderer<W> for TextRenderer {
    fn render(
        &mut self,
        blocks: &[LayoutBlock],
        context: &RenderContext<'_>,
        mut writer: W,
    ) -> Result<W, RenderError> {
        let mut sheet = Sheet {
            width: self.width,
            lines: Vec::new(),
        };
        for block in blocks {
            self.block(block, context, &mut sheet)?;
        }
        while sheet.lines.last().is_some_and(|l| l.is_empty()) {
            sheet.lines.pop();
        }

        for line in &sheet.lines {
            writeln!(writer, "{}", line.trim_end())?;
        }
        writer.flush()?;
        Ok(writer)
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn name(&self) -> &'static str {
        "text"
    }
}
