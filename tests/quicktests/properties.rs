use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use rebuild_bst::Tree;

use crate::model;

fn in_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    tree.values().into_iter().cloned().collect()
}

/// Smallest `h` such that a tree of height `h` can hold `n` nodes, i.e. `ceil(lg(n + 1)) - 1`.
fn minimum_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize - 1
}

#[quickcheck]
fn build_in_order_is_sorted_distinct(xs: Vec<i8>) -> bool {
    in_order(&Tree::build(xs.clone())) == model(&xs)
}

#[quickcheck]
fn build_is_balanced_with_minimum_height(xs: Vec<i16>) -> TestResult {
    let tree = Tree::build(xs.clone());
    let Some(root) = tree.root() else {
        return TestResult::discard();
    };

    TestResult::from_bool(
        tree.is_balanced() && root.height() == minimum_height(model(&xs).len()),
    )
}

#[quickcheck]
fn insert_makes_absent_value_findable(xs: Vec<i8>, x: i8) -> TestResult {
    let mut tree = Tree::build(xs);
    if tree.contains(&x) {
        return TestResult::discard();
    }

    let missing_before = tree.find(&x).is_none();
    tree.insert(x);
    TestResult::from_bool(missing_before && tree.find(&x).map(|n| *n.value()) == Some(x))
}

#[quickcheck]
fn insert_existing_is_idempotent(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let before = in_order(&tree);
    let len = tree.len();

    for x in &xs {
        tree.insert(*x);
    }
    in_order(&tree) == before && tree.len() == len
}

#[quickcheck]
fn rebalance_preserves_values_and_balances(xs: Vec<i16>, extra: Vec<i16>) -> bool {
    let mut tree = Tree::build(xs);
    // Skewed inserts, the way a caller would unbalance it.
    let mut extra = extra;
    extra.sort_unstable();
    for x in extra {
        tree.insert(x);
    }
    let before = in_order(&tree);

    tree.rebalance();
    tree.is_balanced() && in_order(&tree) == before && tree.len() == before.len()
}

#[quickcheck]
fn delete_removes_exactly_one_value(xs: Vec<i8>, pick: usize) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let victim = xs[pick % xs.len()];

    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let mut expected = in_order(&tree);
    expected.retain(|x| *x != victim);

    tree.delete(&victim);
    TestResult::from_bool(tree.find(&victim).is_none() && in_order(&tree) == expected)
}

#[quickcheck]
fn delete_missing_is_noop(xs: Vec<i8>, x: i8) -> TestResult {
    let mut tree = Tree::build(xs);
    if tree.contains(&x) {
        return TestResult::discard();
    }
    let before = in_order(&tree);

    tree.delete(&x);
    TestResult::from_bool(in_order(&tree) == before)
}

#[quickcheck]
fn depth_and_height_agree_with_paths(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    // The deepest node's depth is the root's height.
    let deepest = xs.iter().filter_map(|x| tree.depth(x)).max();
    let root_height = tree.root().map(|root| tree.height(root.value()));
    deepest == root_height.flatten()
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let expected = model(&xs);
    let sorted = |mut v: Vec<i8>| {
        v.sort_unstable();
        v
    };

    let pre: Vec<i8> = tree.pre_order().map(|n| *n.value()).collect();
    let post: Vec<i8> = tree.post_order().map(|n| *n.value()).collect();
    let level: Vec<i8> = tree.level_order().map(|n| *n.value()).collect();

    sorted(pre) == expected && sorted(post) == expected && sorted(level) == expected
}
