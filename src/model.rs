use serde::{Deserialize, Serialize};

/// Visual classification reported by the node for each block. Affects only
/// how a consumer draws the block, never its placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockType {
    Sync,
    Side,
    Normal,
    Orphaned,
}

impl Default for BlockType {
    fn default() -> Self {
        Self::Normal
    }
}

/// A block as reported by the node. The engine treats records as trusted,
/// read-only input: hashes are unique and never reused, heights may tie
/// with siblings, and `topoheight` may still be unset for very recent
/// blocks until a `BlockOrdered` event assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub hash: String,
    pub height: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topoheight: Option<u64>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub block_type: BlockType,
}

impl BlockRecord {
    pub fn new(hash: impl Into<String>, height: u64) -> Self {
        Self {
            hash: hash.into(),
            height,
            topoheight: None,
            tips: Vec::new(),
            block_type: BlockType::default(),
        }
    }

    pub fn with_topoheight(mut self, topoheight: u64) -> Self {
        self.topoheight = Some(topoheight);
        self
    }

    pub fn with_tips<I, S>(mut self, tips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tips = tips.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_block_type(mut self, block_type: BlockType) -> Self {
        self.block_type = block_type;
        self
    }
}
