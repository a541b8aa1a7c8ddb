//! Order-statistic selection
//!
//! Finds the k-th largest value with an iterative three-way partition
//! (greater / equal / less than the pivot). Every round discards at least
//! the pivot's equal class, so the active partition always shrinks.

/// Value of the `k`-th largest element (1-based), or `None` if `k` is 0 or
/// exceeds the number of values
pub fn kth_largest(values: &[f64], k: usize) -> Option<f64> {
    if k == 0 || k > values.len() {
        return None;
    }

    let mut active: Vec<f64> = values.to_vec();
    let mut rank = k;

    loop {
        let pivot = active[active.len() / 2];

        let mut greater = Vec::new();
        let mut less = Vec::new();
        let mut equal = 0usize;

        for &value in &active {
            if value > pivot {
                greater.push(value);
            } else if value < pivot {
                less.push(value);
            } else {
                equal += 1;
            }
        }

        if rank <= greater.len() {
            active = greater;
        } else if rank <= greater.len() + equal {
            return Some(pivot);
        } else {
            rank -= greater.len() + equal;
            active = less;
        }
    }
}
