use indexmap::IndexMap;

use crate::config::Direction;
use crate::model::BlockRecord;

/// Groups records by height into ordered buckets. Single pass: each record
/// is appended to its height's bucket in first-seen order, so sibling order
/// is stable regardless of hash or arrival time. The bucket sequence is
/// then ordered by height per `direction`.
pub(super) fn group_by_height(
    records: &[BlockRecord],
    direction: Direction,
) -> Vec<(u64, Vec<BlockRecord>)> {
    let mut by_height: IndexMap<u64, Vec<BlockRecord>> = IndexMap::new();
    for record in records {
        by_height
            .entry(record.height)
            .or_default()
            .push(record.clone());
    }

    let mut buckets: Vec<(u64, Vec<BlockRecord>)> = by_height.into_iter().collect();
    match direction {
        Direction::Ascending => buckets.sort_unstable_by_key(|(height, _)| *height),
        Direction::Descending => {
            buckets.sort_unstable_by_key(|(height, _)| std::cmp::Reverse(*height))
        }
    }
    buckets
}
