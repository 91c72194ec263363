use crate::error::RenderError;
use crate::types::RenderContext;
use std::io::Write;
use vitae_blocks::LayoutBlock;

/// A rendering backend: realizes an assembled block sequence into `W`.
///
/// Implementations own pagination and flow-breaking. They must keep block
/// order and should honour `Group` keep-together hints where they can.
pub trait DocumentRenderer<W: Write> {
    /// Renders `blocks` and hands the writer back once everything is flushed.
    fn render(
        &mut self,
        blocks: &[LayoutBlock],
        context: &RenderContext<'_>,
        writer: W,
    ) -> Result<W, RenderError>;

    /// Conventional file extension of the produced output, without the dot.
    fn extension(&self) -> &'static str;

    fn name(&self) -> &'static str;
}
