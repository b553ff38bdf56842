/// Assigns each block in a bucket a signed lane so siblings at the same
/// height fan out around the axis instead of overlapping. A lone block
/// stays centered at lane 0; otherwise even positions climb 1, 3, 5, …
/// and odd positions descend -1, -3, -5, … in insertion order.
///
/// Lanes are recomputed for the whole bucket on any membership change.
/// Bucket order is insertion-stable, so in practice earlier siblings keep
/// their lanes and a new sibling takes the next free lane of its parity.
pub(super) fn assign_lanes(bucket_len: usize) -> Vec<i64> {
    if bucket_len <= 1 {
        return vec![0; bucket_len];
    }

    let mut even_count: i64 = 0;
    let mut odd_count: i64 = 0;
    (0..bucket_len)
        .map(|index| {
            if index % 2 == 0 {
                let lane = even_count * 2 + 1;
                even_count += 1;
                lane
            } else {
                let lane = odd_count * 2 - 1;
                odd_count -= 1;
                lane
            }
        })
        .collect()
}
