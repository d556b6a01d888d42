//! Pass 2: top-down size resolution.
//!
//! A container's own rectangle is final when it is visited, so Percent can be
//! resolved against its content box and leftover main-axis space shared among
//! Grow children. Wrapped text heights are settled here, after the width.

use super::config::{Axis, Sizing};
use super::node::{LayoutNode, NodeId};
use crate::text::TextMeasure;

pub(crate) fn resolve<M: TextMeasure + ?Sized>(nodes: &mut [LayoutNode], id: NodeId, measure: &M) {
    let node = &nodes[id.0];
    if !node.is_container {
        return;
    }

    let config = node.config;
    let main = config.direction.main_axis();
    let cross = main.other();
    let content = config.padding.content_box(&node.final_rect);
    let available_main = main.extent(&content);
    let available_cross = cross.extent(&content);

    let mut used_main = 0i32;
    let mut total_weight = 0u32;
    let mut count = 0i32;

    let mut cursor = node.first_child;
    while let Some(child) = cursor {
        let child_node = &mut nodes[child.0];
        let main_size = match child_node.config.sizing(main) {
            Sizing::Grow(weight) => {
                total_weight += u32::from(weight);
                0
            }
            Sizing::Percent(fraction) => percent_of(fraction, available_main),
            Sizing::Fixed(_) | Sizing::FitContent => child_node.min_along(main),
        };
        let cross_size = match child_node.config.sizing(cross) {
            Sizing::Percent(fraction) => percent_of(fraction, available_cross),
            Sizing::Grow(_) => available_cross,
            Sizing::Fixed(_) | Sizing::FitContent => child_node.min_along(cross),
        };

        main.set_extent(&mut child_node.final_rect, main_size.max(0));
        cross.set_extent(&mut child_node.final_rect, cross_size.max(0));
        used_main = used_main.saturating_add(main_size);
        count += 1;
        cursor = child_node.next_sibling;
    }

    used_main = used_main.saturating_add(i32::from(config.gap) * (count - 1).max(0));
    let remaining = (available_main - used_main).max(0);

    let mut cursor = nodes[id.0].first_child;
    while let Some(child) = cursor {
        let child_node = &mut nodes[child.0];
        if let Sizing::Grow(weight) = child_node.config.sizing(main) {
            // Flooring may strand a few cells; they stay unassigned.
            let share = if total_weight > 0 {
                i64::from(remaining) * i64::from(weight) / i64::from(total_weight)
            } else {
                0
            };
            main.set_extent(&mut child_node.final_rect, share as i32);
        }

        rewrap(child_node, measure);

        cursor = child_node.next_sibling;
        resolve(nodes, child, measure);
    }
}

/// Settle a wrapping text leaf's height against its now-final width.
pub(crate) fn rewrap<M: TextMeasure + ?Sized>(node: &mut LayoutNode, measure: &M) {
    if !wraps_to_width(node) {
        return;
    }
    let width = node.final_rect.width;
    let wrapped = node.text().map(|text| measure.measure_wrapped(text, width).1);
    if let Some(height) = wrapped {
        node.final_rect.height = height.max(0);
    }
}

fn wraps_to_width(node: &LayoutNode) -> bool {
    node.is_leaf()
        && node.config.wrap_text
        && matches!(node.config.sizing(Axis::Y), Sizing::FitContent)
}

fn percent_of(fraction: f32, available: i32) -> i32 {
    (fraction * available.max(0) as f32).floor() as i32
}
