//! JSON backend: dumps the page geometry and the block sequence as-is.

use serde::Serialize;
use std::io::Write;
use vitae_blocks::LayoutBlock;
use vitae_render_core::{DocumentRenderer, RenderContext, RenderError};
use vitae_style::PageLayout;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FontSummary<'a> {
    registered_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    family: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    postscript_name: Option<&'a str>,
}

#[derive(Serialize)]
struct Document<'a> {
    page: &'a PageLayout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fonts: Vec<FontSummary<'a>>,
    blocks: &'a [LayoutBlock],
}

/// Serializes `{page, fonts?, blocks}` as JSON.
#[derive(Debug, Clone)]
pub struct JsonRenderer {
    pretty: bool,
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a single line instead of pretty-printed output.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl<W: Write> DocumentRenderer<W> for JsonRenderer {
    fn render(
        &mut self,
        blocks: &[LayoutBlock],
        context: &RenderContext<'_>,
        mut writer: W,
    ) -> Result<W, RenderError> {
        let fonts: Vec<FontSummary<'_>> = context
            .fonts
            .map(|set| {
                set.faces()
                    .into_iter()
                    .map(|face| FontSummary {
                        registered_name: face.registered_name,
                        family: face.family.as_deref(),
                        postscript_name: face.postscript_name.as_deref(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let document = Document {
            page: context.page,
            fonts,
            blocks,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &document)?;
        } else {
            serde_json::to_writer(&mut writer, &document)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(writer)
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use vitae_blocks::RichText;
    use vitae_style::{names, resume_styles};

    fn render(blocks: &[LayoutBlock]) -> Value {
        let styles = resume_styles().unwrap();
        let page = PageLayout::default();
        let context = RenderContext::new(&styles, &page);
        let out = JsonRenderer::new()
            .render(blocks, &context, Vec::new())
            .unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_block_shapes() {
        let blocks = vec![LayoutBlock::group(vec![
            LayoutBlock::text(
                RichText::strong("GitHub").text(": ").link("alin", "https://github.com/alin"),
                names::CONTACT,
            ),
            LayoutBlock::rule(1.0, 0.5),
            LayoutBlock::spacer(3.0),
        ])];
        let value = render(&blocks);

        assert_eq!(value["page"]["size"], "Letter");
        assert!(value.get("fonts").is_none());
        let group = &value["blocks"][0];
        assert_eq!(group["type"], "Group");
        assert_eq!(
            group["blocks"][0],
            json!({
                "type": "Text",
                "content": [
                    {"text": "GitHub", "bold": true},
                    {"text": ": "},
                    {"text": "alin", "link": "https://github.com/alin"}
                ],
                "style": "Contact"
            })
        );
        assert_eq!(
            group["blocks"][1],
            json!({"type": "Rule", "widthFraction": 1.0, "thickness": 0.5})
        );
        assert_eq!(group["blocks"][2], json!({"type": "Spacer", "height": 3.0}));
    }

    #[test]
    fn test_empty_sequence() {
        let value = render(&[]);
        assert_eq!(value["blocks"], json!([]));
    }
}
