use std::collections::HashMap;

use tracing::debug;

use super::group::group_by_height;
use super::lanes::assign_lanes;
use super::types::{DanglingTip, Edge, Frame, HeightBucket, LayoutBlock};
use crate::config::LayoutConfig;
use crate::model::BlockRecord;
use crate::window::Window;

/// Computes a full layout pass over `records`: group by height, assign
/// lanes, place coordinates, resolve tip edges. The result is a fresh
/// immutable frame; nothing previously published is touched.
pub fn compute_frame(
    records: &[BlockRecord],
    window: Option<Window>,
    config: &LayoutConfig,
) -> Frame {
    let grouped = group_by_height(records, config.direction);

    let mut buckets = Vec::with_capacity(grouped.len());
    let mut positions: HashMap<String, (f32, f32)> = HashMap::with_capacity(records.len());
    let mut max_abs_lane: i64 = 0;

    for (bucket_index, (height, blocks)) in grouped.into_iter().enumerate() {
        let lanes = assign_lanes(blocks.len());
        let x = bucket_index as f32 * config.height_spacing;
        let placed: Vec<LayoutBlock> = blocks
            .into_iter()
            .zip(lanes)
            .map(|(record, lane)| {
                let y = lane as f32;
                positions.insert(record.hash.clone(), (x, y));
                max_abs_lane = max_abs_lane.max(lane.abs());
                LayoutBlock { record, lane, x, y }
            })
            .collect();
        buckets.push(HeightBucket {
            height,
            blocks: placed,
        });
    }

    let mut edges = Vec::new();
    let mut dangling = Vec::new();
    for bucket in &buckets {
        for block in &bucket.blocks {
            for tip in &block.record.tips {
                match positions.get(tip) {
                    Some(&to_pos) => edges.push(Edge {
                        from: block.record.hash.clone(),
                        to: tip.clone(),
                        from_pos: (block.x, block.y),
                        to_pos,
                    }),
                    None => {
                        debug!(from = %block.record.hash, tip = %tip, "tip outside visible set, edge omitted");
                        dangling.push(DanglingTip {
                            from: block.record.hash.clone(),
                            tip: tip.clone(),
                        });
                    }
                }
            }
        }
    }

    let width = match buckets.len() {
        0 => 0.0,
        n => (n - 1) as f32 * config.height_spacing,
    };
    let height = (max_abs_lane * 2) as f32;

    debug!(
        blocks = records.len(),
        buckets = buckets.len(),
        edges = edges.len(),
        dangling = dangling.len(),
        "frame computed"
    );

    Frame {
        window,
        buckets,
        edges,
        dangling,
        width,
        height,
    }
}
