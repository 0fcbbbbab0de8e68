use bst::avl::HeightBalancedTree;
use bst::ordered::OrderedTree;
use bst::red_black::BalancedColorTree;
use bst::Violation;

use std::collections::HashSet;

use crate::Op;

/// The operations every tree in the crate supports, so that one set of properties can be
/// checked against all of them.
trait SearchTree<K>: Default {
    fn insert(&mut self, key: K);
    fn search(&self, key: &K) -> bool;
    fn validate(&self) -> Result<(), Violation>;
    fn len(&self) -> usize;
}

macro_rules! impl_search_tree {
    ($($tree:ident),*) => {$(
        impl<K: Ord> SearchTree<K> for $tree<K> {
            fn insert(&mut self, key: K) {
                $tree::insert(self, key)
            }

            fn search(&self, key: &K) -> bool {
                $tree::search(self, key)
            }

            fn validate(&self) -> Result<(), Violation> {
                $tree::validate(self)
            }

            fn len(&self) -> usize {
                $tree::len(self)
            }
        }
    )*};
}

impl_search_tree!(OrderedTree, BalancedColorTree, HeightBalancedTree);

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// the tree agrees with the set about every key searched for.
fn do_ops<K, T>(ops: &[Op<K>]) -> bool
where
    K: std::hash::Hash + Eq + Clone + Ord,
    T: SearchTree<K>,
{
    let mut tree = T::default();
    let mut set = HashSet::new();

    ops.iter().all(|op| match op {
        Op::Insert(k) => {
            tree.insert(k.clone());
            set.insert(k.clone());
            true
        }
        Op::Search(k) => tree.search(k) == set.contains(k),
        Op::Validate => tree.validate().is_ok(),
    })
}

fn contains<T: SearchTree<i8>>(xs: &[i8]) -> bool {
    let mut tree = T::default();
    for x in xs {
        tree.insert(*x);
    }

    tree.len() == xs.len() && xs.iter().all(|x| tree.search(x))
}

fn contains_not<T: SearchTree<i8>>(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = T::default();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

fn valid_after_every_insert<T: SearchTree<i8>>(xs: &[i8]) -> bool {
    let mut tree = T::default();
    xs.iter().all(|x| {
        tree.insert(*x);
        tree.validate().is_ok()
    })
}

#[quickcheck]
fn fuzz_multiple_operations_ordered(ops: Vec<Op<i8>>) -> bool {
    do_ops::<_, OrderedTree<_>>(&ops)
}

#[quickcheck]
fn fuzz_multiple_operations_red_black(ops: Vec<Op<i8>>) -> bool {
    do_ops::<_, BalancedColorTree<_>>(&ops)
}

#[quickcheck]
fn fuzz_multiple_operations_avl(ops: Vec<Op<i8>>) -> bool {
    do_ops::<_, HeightBalancedTree<_>>(&ops)
}

#[quickcheck]
fn contains_all_trees(xs: Vec<i8>) -> bool {
    contains::<OrderedTree<_>>(&xs)
        && contains::<BalancedColorTree<_>>(&xs)
        && contains::<HeightBalancedTree<_>>(&xs)
}

#[quickcheck]
fn contains_not_all_trees(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    contains_not::<OrderedTree<_>>(xs.clone(), nots.clone())
        && contains_not::<BalancedColorTree<_>>(xs.clone(), nots.clone())
        && contains_not::<HeightBalancedTree<_>>(xs, nots)
}

#[quickcheck]
fn valid_after_every_insert_all_trees(xs: Vec<i8>) -> bool {
    valid_after_every_insert::<OrderedTree<_>>(&xs)
        && valid_after_every_insert::<BalancedColorTree<_>>(&xs)
        && valid_after_every_insert::<HeightBalancedTree<_>>(&xs)
}

#[test]
fn sorted_inserts_stay_short_when_balanced() {
    let n = 1 << 12;
    let ordered: OrderedTree<_> = (0..n).collect();
    let red_black: BalancedColorTree<_> = (0..n).collect();
    let avl: HeightBalancedTree<_> = (0..n).collect();

    assert_eq!(ordered.height(), n as usize);
    assert!(red_black.height() <= 2 * 13);
    assert!(avl.height() <= 18);

    for x in (0..n).step_by(97) {
        assert!(ordered.search(&x));
        assert!(red_black.search(&x));
        assert!(avl.search(&x));
    }
    assert!(!red_black.search(&n));
    assert!(!avl.search(&-1));
}

#[test]
fn string_keys() {
    let words = ["pear", "apple", "fig", "kiwi", "banana", "apple"];
    let ordered: OrderedTree<_> = words.iter().map(|w| w.to_string()).collect();
    let red_black: BalancedColorTree<_> = words.iter().map(|w| w.to_string()).collect();
    let avl: HeightBalancedTree<_> = words.iter().map(|w| w.to_string()).collect();

    for word in words {
        let word = word.to_string();
        assert!(ordered.search(&word));
        assert!(red_black.search(&word));
        assert!(avl.search(&word));
    }

    let missing = "grape".to_string();
    assert!(!ordered.search(&missing));
    assert!(!red_black.search(&missing));
    assert!(!avl.search(&missing));

    assert_eq!(ordered.len(), 6);
    assert_eq!(red_black.validate(), Ok(()));
    assert_eq!(avl.validate(), Ok(()));
}
