//! Row filtering over the loaded tables

/// Keep the rows whose key is a member of `keep`, in original order.
///
/// An empty `keep` is the "no filter" sentinel and returns every row; a
/// `keep` that matches nothing yields an empty table, not an error. The
/// input is never mutated.
pub fn filter_by<T: Clone>(rows: &[T], key: impl Fn(&T) -> &str, keep: &[String]) -> Vec<T> {
    if keep.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| keep.iter().any(|k| k.as_str() == key(row)))
        .cloned()
        .collect()
}
