//! Pass 3: top-down placement into absolute cell coordinates.

use super::node::{LayoutNode, NodeId, children};

pub(crate) fn position(nodes: &mut [LayoutNode], id: NodeId) {
    let node = &nodes[id.0];
    if !node.is_container {
        return;
    }

    let config = node.config;
    let main = config.direction.main_axis();
    let cross = main.other();
    let content = config.padding.content_box(&node.final_rect);
    let gap = i32::from(config.gap);

    let mut total_main = 0i32;
    let mut count = 0i32;
    for child in children(nodes, id) {
        total_main = total_main.saturating_add(main.extent(&nodes[child.0].final_rect));
        count += 1;
    }
    total_main = total_main.saturating_add(gap * (count - 1).max(0));

    let free = (main.extent(&content) - total_main).max(0);
    let mut cursor_main = config.alignment.offset(main, free);

    let mut cursor = nodes[id.0].first_child;
    while let Some(child) = cursor {
        let child_node = &mut nodes[child.0];
        let mut placed = child_node.final_rect;
        let child_main = main.extent(&placed);
        let cross_free = cross.extent(&content) - cross.extent(&placed);

        main.set_origin(&mut placed, main.origin(&content) + cursor_main);
        cross.set_origin(
            &mut placed,
            cross.origin(&content) + config.alignment.offset(cross, cross_free),
        );
        placed.x -= config.scroll_offset.x;
        placed.y -= config.scroll_offset.y;

        // Only the far edges are pulled in; the origin stays where alignment
        // and scrolling put it and the render clip hides the near side.
        if config.overflow.clips() {
            placed.width = placed.width.min(content.right() - placed.x).max(0);
            placed.height = placed.height.min(content.bottom() - placed.y).max(0);
        }

        child_node.final_rect = placed;
        cursor_main = cursor_main.saturating_add(child_main).saturating_add(gap);
        cursor = child_node.next_sibling;
        position(nodes, child);
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::{Offset, Rect};
    use crate::layout::{
        Alignment, HAlign, LayoutConfig, LayoutContext, Overflow, Padding, Sizing, VAlign,
    };
    use crate::render::NullRenderer;

    fn fixed(width: u16, height: u16) -> LayoutConfig {
        LayoutConfig::new().with_size(Sizing::fixed(width), Sizing::fixed(height))
    }

    #[test]
    fn centered_child_in_full_screen() {
        let mut ctx = LayoutContext::new();
        ctx.reset(Rect::new(0, 0, 80, 24));
        ctx.begin_container(LayoutConfig::row().with_alignment(Alignment::center()));
        let child = ctx.add_leaf(fixed(10, 1), Default::default());
        ctx.end_container().unwrap();
        ctx.finish(&mut NullRenderer).unwrap();

        assert_eq!(ctx.rect_of(child).unwrap(), Rect::new(35, 11, 10, 1));
    }

    #[test]
    fn row_cursor_advances_by_size_and_gap() {
        let mut ctx = LayoutContext::new();
        ctx.reset(Rect::new(0, 0, 40, 10));
        ctx.begin_container(
            LayoutConfig::row()
                .with_gap(3)
                .with_padding(Padding::new(2, 0, 1, 0)),
        );
        let a = ctx.add_leaf(fixed(5, 2), Default::default());
        let b = ctx.add_leaf(fixed(7, 4), Default::default());
        ctx.end_container().unwrap();
        ctx.finish(&mut NullRenderer).unwrap();

        assert_eq!(ctx.rect_of(a).unwrap(), Rect::new(2, 1, 5, 2));
        assert_eq!(ctx.rect_of(b).unwrap(), Rect::new(10, 1, 7, 4));
    }

    #[test]
    fn column_end_alignment_and_per_child_cross_offset() {
        let mut ctx = LayoutContext::new();
        ctx.reset(Rect::new(0, 0, 20, 10));
        ctx.begin_container(
            LayoutConfig::column().with_alignment(Alignment::new(HAlign::Right, VAlign::Bottom)),
        );
        let wide = ctx.add_leaf(fixed(8, 2), Default::default());
        let narrow = ctx.add_leaf(fixed(4, 3), Default::default());
        ctx.end_container().unwrap();
        ctx.finish(&mut NullRenderer).unwrap();

        // free main space 10 - 5 = 5 goes before the first child
        assert_eq!(ctx.rect_of(wide).unwrap(), Rect::new(12, 5, 8, 2));
        assert_eq!(ctx.rect_of(narrow).unwrap(), Rect::new(16, 7, 4, 3));
    }

    #[test]
    fn fit_container_matches_children_plus_gaps_and_padding() {
        let mut ctx = LayoutContext::new();
        ctx.reset(Rect::new(0, 0, 80, 24));
        ctx.begin_container(LayoutConfig::column());
        let fit = ctx.begin_container(
            LayoutConfig::row()
                .with_gap(1)
                .with_padding(Padding::axes(2, 1)),
        );
        let sizes = [3u16, 6, 9];
        let ids: Vec<_> = sizes
            .iter()
            .map(|w| ctx.add_leaf(fixed(*w, 1), Default::default()))
            .collect();
        ctx.end_container().unwrap();
        ctx.end_container().unwrap();
        ctx.finish(&mut NullRenderer).unwrap();

        let container = ctx.rect_of(fit).unwrap();
        let summed: i32 = ids.iter().map(|id| ctx.rect_of(*id).unwrap().width).sum();
        assert_eq!(summed + 2 + 4, container.width);
        let last = ctx.rect_of(ids[2]).unwrap();
        assert_eq!(last.right() + 2, container.right());
    }

    #[test]
    fn hidden_overflow_clamps_into_content_box() {
        let mut ctx = LayoutContext::new();
        ctx.reset(Rect::new(0, 0, 80, 24));
        ctx.begin_container(LayoutConfig::row());
        let parent = ctx.begin_container(
            fixed(10, 5)
                .with_padding(Padding::all(1))
                .with_overflow(Overflow::Hidden),
        );
        let a = ctx.add_leaf(fixed(6, 2), Default::default());
        let b = ctx.add_leaf(fixed(6, 9), Default::default());
        ctx.end_container().unwrap();
        ctx.end_container().unwrap();
        ctx.finish(&mut NullRenderer).unwrap();

        let outer = ctx.rect_of(parent).unwrap();
        let inner = outer.inset(1);
        for id in [a, b] {
            let rect = ctx.rect_of(id).unwrap();
            assert!(rect.right() <= inner.right());
            assert!(rect.bottom() <= inner.bottom());
            assert!(rect.width >= 0 && rect.height >= 0);
        }
        assert_eq!(ctx.rect_of(a).unwrap(), Rect::new(1, 1, 6, 2));
        assert_eq!(ctx.rect_of(b).unwrap(), Rect::new(7, 1, 2, 3));
    }

    #[test]
    fn visible_overflow_does_not_clamp() {
        let mut ctx = LayoutContext::new();
        ctx.reset(Rect::new(0, 0, 80, 24));
        ctx.begin_container(LayoutConfig::row());
        ctx.begin_container(fixed(4, 2));
        let spill = ctx.add_leaf(fixed(9, 5), Default::default());
        ctx.end_container().unwrap();
        ctx.end_container().unwrap();
        ctx.finish(&mut NullRenderer).unwrap();

        assert_eq!(ctx.rect_of(spill).unwrap(), Rect::new(0, 0, 9, 5));
    }

    #[test]
    fn scroll_offset_shifts_without_moving_origins() {
        let mut ctx = LayoutContext::new();
        ctx.reset(Rect::new(0, 0, 80, 24));
        ctx.begin_container(LayoutConfig::row());
        ctx.begin_container(
            LayoutConfig::column()
                .with_size(Sizing::fixed(10), Sizing::fixed(4))
                .with_overflow(Overflow::Scroll)
                .with_scroll(Offset::new(0, 2)),
        );
        let first = ctx.add_leaf(fixed(10, 1), Default::default());
        let second = ctx.add_leaf(fixed(10, 1), Default::default());
        let third = ctx.add_leaf(fixed(10, 1), Default::default());
        let tall = ctx.add_leaf(fixed(12, 5), Default::default());
        ctx.end_container().unwrap();
        ctx.end_container().unwrap();
        ctx.finish(&mut NullRenderer).unwrap();

        assert_eq!(ctx.rect_of(first).unwrap(), Rect::new(0, -2, 10, 1));
        assert_eq!(ctx.rect_of(second).unwrap(), Rect::new(0, -1, 10, 1));
        assert_eq!(ctx.rect_of(third).unwrap(), Rect::new(0, 0, 10, 1));
        // far edges pulled in to the content box, origin untouched
        assert_eq!(ctx.rect_of(tall).unwrap(), Rect::new(0, 1, 10, 3));
    }

    #[test]
    fn child_past_far_edge_collapses_to_zero_size() {
        let mut ctx = LayoutContext::new();
        ctx.reset(Rect::new(0, 0, 80, 24));
        ctx.begin_container(LayoutConfig::row());
        ctx.begin_container(fixed(5, 2).with_overflow(Overflow::Hidden));
        ctx.add_leaf(fixed(5, 1), Default::default());
        let beyond = ctx.add_leaf(fixed(4, 1), Default::default());
        ctx.end_container().unwrap();
        ctx.end_container().unwrap();
        ctx.finish(&mut NullRenderer).unwrap();

        let rect = ctx.rect_of(beyond).unwrap();
        assert_eq!((rect.x, rect.width), (5, 0));
        assert!(rect.is_empty());
    }

    #[test]
    fn nested_container_above_scroll_edge_keeps_child_offsets() {
        let mut ctx = LayoutContext::new();
        ctx.reset(Rect::new(0, 0, 80, 24));
        ctx.begin_container(LayoutConfig::row());
        ctx.begin_container(
            LayoutConfig::column()
                .with_size(Sizing::fixed(10), Sizing::fixed(3))
                .with_overflow(Overflow::Scroll)
                .with_scroll(Offset::new(0, 2)),
        );
        let inner = ctx.begin_container(LayoutConfig::column().with_size(Sizing::fixed(10), Sizing::fixed(4)));
        let rows: Vec<_> = (0..4)
            .map(|_| ctx.add_leaf(fixed(10, 1), Default::default()))
            .collect();
        ctx.end_container().unwrap();
        ctx.end_container().unwrap();
        ctx.end_container().unwrap();
        ctx.finish(&mut NullRenderer).unwrap();

        assert_eq!(ctx.rect_of(inner).unwrap(), Rect::new(0, -2, 10, 4));
        let ys: Vec<_> = rows.iter().map(|id| ctx.rect_of(*id).unwrap().y).collect();
        assert_eq!(ys, vec![-2, -1, 0, 1]);
    }
}
