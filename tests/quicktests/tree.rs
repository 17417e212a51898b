use ranked_bst::{Tree, TreeError};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                assert_eq!(tree.insert(k.clone()), set.insert(k.clone()));
            }
            Op::Delete(k) => {
                assert_eq!(tree.delete(k), set.remove(k));
            }
            Op::DeleteMin => {
                let min = set.iter().next().cloned();
                if let Some(min) = &min {
                    set.remove(min);
                }
                assert_eq!(tree.delete_min().ok(), min);
            }
            Op::Balance => tree.balance(),
        }
    }
}

/// The smallest height a tree of `len` keys can have.
fn optimal_height(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len()
            && set.iter().all(|key| tree.contains(key))
            && tree.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: BTreeSet<_> = xs.into_iter().collect();

        nots.iter().filter(|x| !added.contains(*x)).all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let before = tree.len();

        let mut deleted = 0;
        for delete in &deletes {
            if tree.delete(delete) {
                deleted += 1;
            }
        }

        let still_present: Vec<_> = xs.iter().filter(|x| !deletes.contains(*x)).collect();
        tree.len() == before - deleted
            && deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn in_order_is_strictly_ascending(ops: Vec<Op<i16>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();
        do_ops(&ops, &mut tree, &mut set);

        let mut keys = Vec::new();
        tree.visit_in(|key| keys.push(*key));
        keys.windows(2).all(|pair| pair[0] < pair[1])
    }
}

quickcheck::quickcheck! {
    fn rank_select_inverse(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();
        do_ops(&ops, &mut tree, &mut set);

        let len = tree.len();
        (0..len).all(|n| tree.select(n).ok().and_then(|key| tree.rank(key)) == Some(n))
            && set.iter().all(|key| tree.rank(key).and_then(|r| tree.select(r).ok()) == Some(key))
            && tree.select(len) == Err(TreeError::OutOfRange { index: len, len })
    }
}

quickcheck::quickcheck! {
    fn rank_matches_model(xs: Vec<i8>, probes: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let set: BTreeSet<_> = xs.into_iter().collect();

        probes.iter().all(|probe| {
            let expected = if set.contains(probe) {
                Some(set.range(..*probe).count())
            } else {
                None
            };
            tree.rank(probe) == expected
        })
    }
}

quickcheck::quickcheck! {
    fn balance_keeps_keys(xs: Vec<i16>) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        let before: Vec<_> = tree.iter().copied().collect();

        tree.balance();
        let after: Vec<_> = tree.iter().copied().collect();
        before == after && tree.height() == optimal_height(tree.len())
    }
}

quickcheck::quickcheck! {
    fn visits_match_len(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let (mut pre, mut post) = (0, 0);
        tree.visit_pre(|_| pre += 1);
        tree.visit_post(|_| post += 1);

        pre == tree.len() && post == tree.len()
    }
}
