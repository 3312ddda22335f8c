use rebuild_bst::{Node, Tree};

fn in_order(tree: &Tree<i32>) -> Vec<i32> {
    tree.values().into_iter().copied().collect()
}

#[test]
fn unbalance_then_rebalance() {
    let mut tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(in_order(&tree), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.root().map(|n| *n.value()), Some(5));
    assert!(tree.is_balanced());

    // 100 lands right of 9. Keep extending the right spine until it tips over.
    let mut next = 100;
    while tree.is_balanced() {
        tree.insert(next);
        next += 1;
    }
    assert!(!tree.is_balanced());
    assert!(in_order(&tree).starts_with(&[1, 3, 4, 5, 7, 8, 9, 100]));

    tree.rebalance();
    assert!(tree.is_balanced());
    let expected: Vec<i32> = [1, 3, 4, 5, 7, 8, 9].into_iter().chain(100..next).collect();
    assert_eq!(in_order(&tree), expected);
}

#[test]
fn repeated_inserts_of_the_same_value_do_not_unbalance() {
    let mut tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);
    for _ in 0..10 {
        tree.insert(100);
    }

    assert!(tree.is_balanced());
    assert_eq!(in_order(&tree), [1, 3, 4, 5, 7, 8, 9, 100]);
}

#[test]
fn delete_root_of_three() {
    let mut tree = Tree::build([2, 1, 3]);
    assert_eq!(tree.root().map(|n| *n.value()), Some(2));

    tree.delete(&2);

    let root = tree.root().unwrap();
    assert_eq!(root.value(), &3);
    assert_eq!(root.left().map(Node::value), Some(&1));
    assert!(root.right().is_none());
    assert_eq!(in_order(&tree), [1, 3]);
}

#[test]
fn diagram_after_rebalance() {
    let mut tree = Tree::new();
    for value in 1..=3 {
        tree.insert(value);
    }
    tree.rebalance();

    assert_eq!(tree.to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
}
