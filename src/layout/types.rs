use serde::{Deserialize, Serialize};

use crate::model::BlockRecord;
use crate::window::Window;

/// A block with its computed placement. `lane` is the signed lateral
/// offset within the height bucket; `x`/`y` are the final coordinates a
/// consumer draws at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutBlock {
    pub record: BlockRecord,
    pub lane: i64,
    pub x: f32,
    pub y: f32,
}

/// All blocks sharing one DAG height, in first-seen input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightBucket {
    pub height: u64,
    pub blocks: Vec<LayoutBlock>,
}

/// A resolved parent reference with both endpoint coordinates, ready for
/// edge drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub from_pos: (f32, f32),
    pub to_pos: (f32, f32),
}

/// A tip hash that pointed outside the visible block set. The referenced
/// parent usually sits just beyond the loaded window, so the edge is
/// omitted rather than treated as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanglingTip {
    pub from: String,
    pub tip: String,
}

/// One fully computed layout result for a given window and block set.
/// Frames are immutable: every recomputation replaces the whole value, so
/// multiple consumers may read the same frame without synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub window: Option<Window>,
    pub buckets: Vec<HeightBucket>,
    pub edges: Vec<Edge>,
    pub dangling: Vec<DanglingTip>,
    /// Extent of the occupied area, for camera/viewport fitting.
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn empty() -> Self {
        Self {
            window: None,
            buckets: Vec::new(),
            edges: Vec::new(),
            dangling: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn blocks(&self) -> impl Iterator<Item = &LayoutBlock> {
        self.buckets.iter().flat_map(|bucket| bucket.blocks.iter())
    }

    pub fn block_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.blocks.len()).sum()
    }
}
