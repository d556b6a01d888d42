//! Clip-aware walk handing each visible node's command to the renderer.

use crate::error::Result;
use crate::geometry::Rect;
use crate::layout::{LayoutNode, NodeId, RenderCommand};
use crate::metrics::FrameStats;

use super::core::Renderer;

pub(crate) fn emit<R: Renderer + ?Sized>(
    nodes: &[LayoutNode],
    id: NodeId,
    parent_clip: Rect,
    renderer: &mut R,
    stats: &mut FrameStats,
) -> Result<()> {
    let node = &nodes[id.index()];
    let rect = node.final_rect;

    // Nothing below an invisible node can be visible either.
    if rect.intersect(&parent_clip).is_empty() {
        stats.skipped_subtrees += 1;
        return Ok(());
    }

    renderer.set_clip(parent_clip);
    match &node.command {
        RenderCommand::None => {}
        RenderCommand::Text { text, style } => {
            if node.config.wrap_text {
                renderer.draw_wrapped_text(rect, text, style)?;
            } else {
                renderer.draw_text(rect, text, style)?;
            }
            stats.draw_calls += 1;
        }
        RenderCommand::Box { border, style } => {
            if rect.width > 0 && rect.height > 0 {
                renderer.draw_box(rect, *border, style)?;
                stats.draw_calls += 1;
            }
        }
        RenderCommand::Rect { glyph, style } => {
            if rect.width > 0 && rect.height > 0 {
                renderer.draw_fill(rect, *glyph, style)?;
                stats.draw_calls += 1;
            }
        }
    }

    let child_clip = if node.config.overflow.clips() {
        let own = if node.command.is_box() {
            rect.inset(1)
        } else {
            rect
        };
        parent_clip.intersect(&own)
    } else {
        parent_clip
    };

    let mut cursor = node.first_child;
    if cursor.is_some() && child_clip.is_empty() {
        stats.skipped_subtrees += 1;
        return Ok(());
    }

    while let Some(child) = cursor {
        emit(nodes, child, child_clip, renderer, stats)?;
        cursor = nodes[child.index()].next_sibling;
    }

    Ok(())
}
