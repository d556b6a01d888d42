//! Pass 1: bottom-up minimum content sizes.
//!
//! Percent and Grow cannot be resolved without the parent's size, so they
//! measure as zero here. Wrapped text reports its unwrapped extent; the real
//! height is only known once pass 2 has fixed the width.

use super::config::{Axis, Sizing};
use super::node::{LayoutNode, NodeId, children};

pub(crate) fn measure(nodes: &mut [LayoutNode], id: NodeId) {
    let mut cursor = nodes[id.0].first_child;
    while let Some(child) = cursor {
        measure(nodes, child);
        cursor = nodes[child.0].next_sibling;
    }

    for axis in [Axis::X, Axis::Y] {
        let value = measure_axis(nodes, id, axis);
        nodes[id.0].set_min(axis, value);
    }
}

fn measure_axis(nodes: &[LayoutNode], id: NodeId, axis: Axis) -> i32 {
    let node = &nodes[id.0];
    match node.config.sizing(axis) {
        Sizing::Fixed(cells) => i32::from(cells),
        Sizing::Percent(_) | Sizing::Grow(_) => 0,
        Sizing::FitContent if !node.is_container => node.content_along(axis).max(0),
        Sizing::FitContent => {
            let padding = node.config.padding.along(axis);
            let mut total = 0i32;
            let mut widest = 0i32;
            let mut count = 0i32;
            for child in children(nodes, id) {
                let min = nodes[child.0].min_along(axis);
                total = total.saturating_add(min);
                widest = widest.max(min);
                count += 1;
            }

            if axis == node.config.direction.main_axis() {
                let gaps = i32::from(node.config.gap) * (count - 1).max(0);
                total.saturating_add(gaps).saturating_add(padding)
            } else {
                widest.saturating_add(padding)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::Rect;
    use crate::layout::{LayoutConfig, LayoutContext, Padding, Sizing};
    use crate::render::{NullRenderer, Style};

    #[test]
    fn fit_container_sums_main_and_maxes_cross() {
        let mut ctx = LayoutContext::new();
        ctx.reset(Rect::new(0, 0, 80, 24));
        ctx.begin_container(LayoutConfig::row());
        let fit = ctx.begin_container(
            LayoutConfig::row()
                .with_gap(2)
                .with_padding(Padding::new(1, 1, 2, 0)),
        );
        ctx.add_leaf(
            LayoutConfig::new().with_size(Sizing::fixed(5), Sizing::fixed(3)),
            Default::default(),
        );
        ctx.add_leaf(
            LayoutConfig::new().with_size(Sizing::fixed(7), Sizing::fixed(1)),
            Default::default(),
        );
        ctx.add_text(LayoutConfig::new(), "abcd", Style::new());
        ctx.end_container().unwrap();
        ctx.end_container().unwrap();
        ctx.finish(&mut NullRenderer).unwrap();

        let node = ctx.node(fit).unwrap();
        assert_eq!(node.min_width, 5 + 7 + 4 + 2 * 2 + 2);
        assert_eq!(node.min_height, 3 + 2);
    }

    #[test]
    fn percent_and_grow_measure_as_zero() {
        let mut ctx = LayoutContext::new();
        ctx.reset(Rect::new(0, 0, 40, 10));
        let root = ctx.begin_container(LayoutConfig::row());
        let percent = ctx.add_leaf(
            LayoutConfig::new().with_size(Sizing::percent(0.5), Sizing::grow(1)),
            Default::default(),
        );
        ctx.end_container().unwrap();
        ctx.finish(&mut NullRenderer).unwrap();

        let leaf = ctx.node(percent).unwrap();
        assert_eq!(leaf.min_width, 0);
        assert_eq!(leaf.min_height, 0);
        assert_eq!(ctx.node(root).unwrap().min_width, 0);
    }

    #[test]
    fn wrapped_text_measures_unwrapped() {
        let mut ctx = LayoutContext::new();
        ctx.reset(Rect::new(0, 0, 5, 10));
        ctx.begin_container(LayoutConfig::column());
        let text = ctx.add_text(LayoutConfig::new().with_wrap(true), "Hello World", Style::new());
        ctx.end_container().unwrap();
        ctx.finish(&mut NullRenderer).unwrap();

        let node = ctx.node(text).unwrap();
        assert_eq!(node.min_width, 11);
        assert_eq!(node.min_height, 1);
    }
}
