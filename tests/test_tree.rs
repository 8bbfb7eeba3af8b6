use collection_practice::{DepthFirstIterator, Nodelike, PracticeError, Status, Tree, TreeNode};
use itertools::Itertools;
use rayon::prelude::*;

const EXPECTED: [&str; 9] = ["1", "1/1", "1/1/1", "1/1/2", "1/2", "1/3", "1/3/1", "1/3/2", "1/3/3"];

/// ```text
/// 1
/// |-- 1/1
/// |   |-- 1/1/1
/// |   `-- 1/1/2
/// |-- 1/2
/// `-- 1/3
///     |-- 1/3/1
///     |-- 1/3/2
///     `-- 1/3/3
/// ```
fn sample_tree() -> Tree {
    Tree::new(TreeNode::new(
        "1",
        [
            TreeNode::new("1/1", [TreeNode::leaf("1/1/1"), TreeNode::leaf("1/1/2")]),
            TreeNode::leaf("1/2"),
            TreeNode::new(
                "1/3",
                [
                    TreeNode::leaf("1/3/1"),
                    TreeNode::leaf("1/3/2"),
                    TreeNode::leaf("1/3/3"),
                ],
            ),
        ],
    ))
}

fn chain(length: usize) -> TreeNode {
    (0..length - 1)
        .rev()
        .fold(TreeNode::leaf(format!("{}", length - 1)), |child, i| {
            TreeNode::new(format!("{i}"), [child])
        })
}

#[test_log::test]
fn test_flatten_with_explicit_cursor() {
    let tree = sample_tree();
    let mut iter = tree.iterate();
    let mut ids = vec![];
    while iter.move_next() {
        ids.push(iter.current().unwrap().id().to_string());
    }
    assert_eq!(ids, EXPECTED);
    // the tenth advance
    assert!(!iter.move_next());
    assert_eq!(iter.status(), Status::Exhausted);
    assert!(matches!(iter.current(), Err(PracticeError::InvalidState(_))));
}

#[test_log::test]
fn test_flatten_validated_by_sorting() {
    let tree = sample_tree();
    let sorted = tree.iterate().sorted_by_key(|node| node.id()).map(|node| node.id()).collect_vec();
    assert_eq!(sorted, EXPECTED);

    // Pre-order happens to be lexicographic for this data set
    assert!(tree.iterate().tuple_windows().all(|(a, b)| a.id() < b.id()));
    assert_eq!(tree.len(), 9);
    assert_eq!(tree.max_depth(), 2);
}

#[test_log::test]
fn test_single_node_tree() {
    let tree = Tree::new(TreeNode::leaf("root"));
    let mut iter = tree.iterate();
    assert!(iter.move_next());
    assert_eq!(iter.current().unwrap().id(), "root");
    assert!(!iter.move_next());
}

#[test_log::test]
fn test_chain_yields_root_to_leaf() {
    for length in [1, 2, 7, 1000, 200_000] {
        let tree = Tree::new(chain(length));
        let ids = tree.iterate().map(|node| node.id().to_string()).collect_vec();
        let expected = (0..length).map(|i| i.to_string()).collect_vec();
        assert_eq!(ids, expected);
        assert_eq!(tree.max_depth(), length - 1);
        // releasing a deep chain must not recurse per level
        drop(tree);
    }
}

#[test_log::test]
fn test_advancing_after_exhaustion() {
    let tree = sample_tree();
    let mut iter = tree.iterate();
    assert_eq!(iter.by_ref().count(), 9);
    for _ in 0..10 {
        assert!(!iter.move_next());
    }
    assert_eq!(iter.status(), Status::Exhausted);
    assert!(iter.current().is_err());
}

#[test_log::test]
fn test_iterators_are_independent() {
    let tree = sample_tree();
    let mut first = tree.iterate();
    let mut second = tree.iterate();

    for _ in 0..4 {
        assert!(first.move_next());
    }
    assert_eq!(first.current().unwrap().id(), "1/1/2");
    assert_eq!(second.status(), Status::Unstarted);

    assert!(second.move_next());
    assert_eq!(second.current().unwrap().id(), "1");
    assert_eq!(first.current().unwrap().id(), "1/1/2");

    assert_eq!(first.map(|node| node.id()).collect_vec(), &EXPECTED[4..]);
    assert_eq!(second.map(|node| node.id()).collect_vec(), &EXPECTED[1..]);
}

#[test_log::test]
fn test_parallel_traversals_share_one_tree() {
    let tree = sample_tree();
    let results = (0..16)
        .into_par_iter()
        .map(|_| tree.iterate().map(|node| node.id()).collect_vec())
        .collect::<Vec<_>>();
    assert!(results.iter().all(|ids| ids == &EXPECTED));
}

#[test_log::test]
fn test_reset_equals_fresh_iterator() {
    let tree = sample_tree();
    let mut iter = tree.iterate();
    iter.by_ref().take(6).for_each(drop);
    iter.reset();
    assert_eq!(iter.map(|node| node.id()).collect_vec(), EXPECTED);

    let mut exhausted = tree.iterate();
    exhausted.by_ref().for_each(drop);
    assert!(exhausted.next().is_none());
    // fused only until reset
    exhausted.reset();
    assert_eq!(exhausted.status(), Status::Unstarted);
    assert_eq!(exhausted.count(), 9);
}

#[test_log::test]
fn test_dispose_mid_traversal() {
    let tree = sample_tree();
    let mut iter = tree.iterate();
    iter.by_ref().take(3).for_each(drop);
    iter.dispose();
    iter.dispose();
    assert!(!iter.move_next());
    assert!(iter.current().is_err());
}

/// Any immutable n-ary node type can be flattened.
struct Directory {
    name: &'static str,
    entries: Vec<Directory>,
}

impl Nodelike for Directory {
    type Id = str;

    fn id(&self) -> &str {
        self.name
    }

    fn children(&self) -> &[Self] {
        &self.entries
    }
}

#[test_log::test]
fn test_custom_node_type() {
    let dir = |name, entries| Directory { name, entries };
    let root = dir(
        "/",
        vec![
            dir("etc", vec![dir("hosts", vec![])]),
            dir("usr", vec![dir("bin", vec![]), dir("lib", vec![])]),
        ],
    );

    let names = DepthFirstIterator::new(&root).map(|d| d.name).collect_vec();
    assert_eq!(names, &["/", "etc", "hosts", "usr", "bin", "lib"]);

    let tree = Tree::new(root);
    assert_eq!(tree.to_string(), "/, etc, hosts, usr, bin, lib");
    assert_eq!(tree.len(), 6);
}
