//! Property tests for `rebuild_bst::Tree` checked against a sorted, deduplicated model.

mod properties;
mod scenarios;

/// The distinct values of `xs` in ascending order, which is what a tree built or filled from
/// `xs` should hold.
pub(crate) fn model<T: Ord + Clone>(xs: &[T]) -> Vec<T> {
    let mut model = xs.to_vec();
    model.sort_unstable();
    model.dedup();
    model
}
