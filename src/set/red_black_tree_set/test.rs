/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::*;
use pretty_assertions::assert_eq;
use static_assertions::assert_impl_all;

assert_impl_all!(RedBlackTreeSet<i32>: Send, Sync);

/// Element whose ordering ignores `tag`, so equal elements can still be told apart.
#[derive(Clone, Copy, Debug)]
struct Tagged {
    key: i32,
    tag: &'static str,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Tagged) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Tagged) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Tagged) -> Ordering {
        self.key.cmp(&other.key)
    }
}

mod iter {
    use super::*;
    use pretty_assertions::assert_eq;

    #[allow(clippy::never_loop)]
    #[test]
    fn test_iter_empty() {
        let set: RedBlackTreeSet<i32> = RedBlackTreeSet::new();

        for _ in set.iter() {
            panic!("iterator should be empty");
        }
    }

    #[test]
    fn test_iter() {
        let mut set = RedBlackTreeSet::new();
        let limit: usize = 100;

        for i in (0..limit).rev() {
            set.insert(i);
        }

        let mut touched = vec![false; limit];

        for v in set.iter() {
            assert!(!touched[*v]);
            touched[*v] = true;
        }

        assert!(touched.iter().all(|b| *b));
    }

    #[test]
    fn test_iter_size_hint() {
        let set = rbt_set![0, 1, 2];
        let mut iterator = set.iter();

        assert_eq!(iterator.size_hint(), (3, Some(3)));

        iterator.next();

        assert_eq!(iterator.size_hint(), (2, Some(2)));

        iterator.next_back();
        iterator.next();

        assert_eq!(iterator.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_iter_sorted() {
        let set = rbt_set![5, 6, 2, 1];

        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 5, 6]);
    }

    #[test]
    fn test_into_iterator() {
        let set = rbt_set![3, 1, 2];
        let mut left = 3;

        for _ in &set {
            left -= 1;
        }

        assert_eq!(left, 0);
        assert_eq!(set.into_iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_range_iterator() {
        let set = rbt_set![-20, -12, -8, 0, 2, -10, -7, -3, 5, 8, 10, 13, 17, 20];

        assert_eq!(set.range(-7..=13).copied().collect::<Vec<_>>(), vec![
            -7, -3, 0, 2, 5, 8, 10, 13
        ]);
        assert_eq!(set.range(-7..-3).rev().copied().collect::<Vec<_>>(), vec![-7]);
    }
}

mod cursor {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_walk() {
        let set = rbt_set![30, 10, 20];
        let mut cursor = set.begin();
        let mut seen = Vec::new();

        while !cursor.is_end() {
            seen.push(*set.value_at(cursor).unwrap());
            cursor = set.move_next(cursor).unwrap();
        }

        assert_eq!(seen, vec![10, 20, 30]);
        assert_eq!(set.value_at(set.move_prev(set.end()).unwrap()), Ok(&30));
        assert_eq!(set.value_at(set.last()), Ok(&30));
    }

    #[test]
    fn test_find_and_bounds() {
        let set = rbt_set![10, 20, 30];

        assert_eq!(set.value_at(set.find(&20)), Ok(&20));
        assert_eq!(set.find(&25), set.end());
        assert_eq!(set.value_at(set.lower_bound(&25)), Ok(&30));
        assert_eq!(set.value_at(set.upper_bound(&10)), Ok(&20));
    }

    #[test]
    fn test_erase_at() {
        let mut set = rbt_set![1, 2, 3];
        let cursor = set.find(&1);

        assert_eq!(set.erase_at(cursor), Ok(1));
        assert_eq!(set.value_at(cursor), Err(CursorError::Stale));
        assert_eq!(set.value_at(set.end()), Err(CursorError::End));
        assert_eq!(set, rbt_set![2, 3]);
    }
}

#[test]
fn test_macro_rbt_set() {
    let mut set_1 = RedBlackTreeSet::new();
    set_1.insert(1);

    let mut set_1_2_3 = RedBlackTreeSet::new();
    set_1_2_3.insert(1);
    set_1_2_3.insert(2);
    set_1_2_3.insert(3);

    assert_eq!(RedBlackTreeSet::<u32>::new(), rbt_set![]);
    assert_eq!(set_1, rbt_set![1]);
    assert_eq!(set_1_2_3, rbt_set![1, 2, 3]);
}

#[test]
fn test_insert() {
    let mut set = RedBlackTreeSet::new();
    assert_eq!(set.size(), 0);

    assert!(set.insert("foo"));
    assert_eq!(set.size(), 1);

    assert!(set.insert("bar"));
    assert_eq!(set.size(), 2);

    assert!(set.insert("baz"));
    assert_eq!(set.size(), 3);

    assert!(!set.insert("foo"));
    assert_eq!(set.size(), 3);

    assert!(set.contains("foo"));
    assert!(set.contains("bar"));
    assert!(set.contains("baz"));
    assert!(!set.contains("qux"));
}

#[test]
fn test_insert_replaces_equal_element() {
    let mut set = RedBlackTreeSet::new();

    set.insert(Tagged { key: 1, tag: "old" });
    set.insert(Tagged { key: 1, tag: "new" });

    assert_eq!(set.size(), 1);
    assert_eq!(set.first_value().map(|t| t.tag), Some("new"));
}

#[test]
fn test_replace() {
    let mut set = RedBlackTreeSet::new();

    assert!(set.replace(Tagged { key: 7, tag: "first" }).is_none());

    let replaced = set.replace(Tagged { key: 7, tag: "second" });

    assert_eq!(replaced.map(|t| t.tag), Some("first"));
    assert_eq!(set.get(&Tagged { key: 7, tag: "" }).map(|t| t.tag), Some("second"));
}

#[test]
fn test_first_last_value() {
    let mut set = rbt_set![5, 3, 9];

    assert_eq!(set.first_value(), Some(&3));
    assert_eq!(set.last_value(), Some(&9));

    set.erase(&3);
    set.erase(&9);

    assert_eq!(set.first_value(), Some(&5));
    assert_eq!(set.last_value(), Some(&5));

    set.erase(&5);

    assert_eq!(set.first_value(), None);
    assert_eq!(set.last_value(), None);
}

#[test]
fn test_erase() {
    let mut set = rbt_set!["foo", "bar", "mumble", "baz"];

    assert_eq!(set.size(), 4);

    assert!(!set.erase("not-there"));
    assert_eq!(set.size(), 4);

    assert!(set.erase("mumble"));
    assert_eq!(set.size(), 3);

    assert!(set.contains("foo"));
    assert!(set.contains("bar"));
    assert!(!set.contains("mumble"));
    assert!(set.contains("baz"));

    assert!(set.erase("foo"));
    assert!(set.erase("baz"));
    assert!(set.erase("bar"));
    assert!(set.is_empty());
}

#[test]
fn test_pop() {
    let mut set = rbt_set![2, 1, 3];

    assert_eq!(set.pop_first(), Some(1));
    assert_eq!(set.pop_last(), Some(3));
    assert_eq!(set.pop_last(), Some(2));
    assert_eq!(set.pop_first(), None);
}

#[test]
fn test_get() {
    let set = rbt_set!["foo", "bar"];

    assert_eq!(set.get("foo"), Some(&"foo"));
    assert_eq!(set.get("baz"), None);
}

#[test]
fn test_clear() {
    let mut set = rbt_set![1, 2, 3];

    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.begin(), set.end());
}

#[test]
fn test_is_disjoint() {
    assert!(!RedBlackTreeSet::is_disjoint(&rbt_set![1, 2, 3], &rbt_set![1, 2, 3]));
    assert!(!RedBlackTreeSet::is_disjoint(&rbt_set![1, 2, 3], &rbt_set![0, 1]));
    assert!(RedBlackTreeSet::is_disjoint(&rbt_set![1, 2, 3, 7, 16], &rbt_set![0, 4, 17]));
}

#[test]
fn test_is_subset() {
    let set = rbt_set![1, 2, 3];

    assert!(set.is_subset(&set));

    assert!(RedBlackTreeSet::is_subset(&rbt_set![], &rbt_set![1, 2, 3]));
    assert!(RedBlackTreeSet::is_subset(&rbt_set![1, 2, 3], &rbt_set![1, 2, 3]));
    assert!(!RedBlackTreeSet::is_subset(&rbt_set![1, 2, 3], &rbt_set![1, 2, 5, 6]));
    assert!(RedBlackTreeSet::is_subset(&rbt_set![1, 2, 3], &rbt_set![1, 2, 3, 5, 6]));
    assert!(!RedBlackTreeSet::is_subset(&rbt_set![1, 2, 3, 5, 6], &rbt_set![1, 2, 3]));
}

#[test]
fn test_is_superset() {
    let set = rbt_set![1, 2, 3];

    assert!(set.is_superset(&set));

    assert!(RedBlackTreeSet::is_superset(&rbt_set![1, 2, 3], &rbt_set![]));
    assert!(RedBlackTreeSet::is_superset(&rbt_set![1, 2, 3], &rbt_set![1, 2, 3]));
    assert!(!RedBlackTreeSet::is_superset(&rbt_set![1, 2, 5, 6], &rbt_set![1, 2, 3]));
    assert!(RedBlackTreeSet::is_superset(&rbt_set![1, 2, 3, 5, 6], &rbt_set![1, 2, 3]));
    assert!(!RedBlackTreeSet::is_superset(&rbt_set![1, 2, 3], &rbt_set![1, 2, 3, 5, 6]));
}

#[test]
fn test_from_iterator() {
    let vec: Vec<&str> = vec!["two", "five"];
    let set: RedBlackTreeSet<&str> = vec.iter().copied().collect();
    let expected_set = rbt_set!["two", "five"];

    assert_eq!(set, expected_set);
}

#[test]
fn test_default() {
    let set: RedBlackTreeSet<u32> = RedBlackTreeSet::default();

    assert_eq!(set.size(), 0);
    assert!(set.is_empty());
}

#[test]
fn test_display() {
    let empty_set: RedBlackTreeSet<i32> = RedBlackTreeSet::new();
    let singleton_set = rbt_set!["hello"];
    let set = rbt_set![5, 12];

    assert_eq!(format!("{}", empty_set), "{}");
    assert_eq!(format!("{}", singleton_set), "{hello}");
    assert_eq!(format!("{}", set), "{5, 12}");
}

#[test]
fn test_debug() {
    let set = rbt_set![12, 5];

    assert_eq!(format!("{:?}", set), "{5, 12}");
}

#[test]
fn test_eq() {
    let set_1 = rbt_set!["a", "b"];
    let set_1_prime = rbt_set!["a", "b"];
    let set_1_prime_2 = rbt_set!["a", "b", "b"];
    let set_2 = rbt_set!["a", "b", "c"];

    assert_eq!(set_1, set_1_prime);
    assert_eq!(set_1, set_1_prime_2);
    assert_eq!(set_1, set_1);
    assert_eq!(set_2, set_2);

    // We also check this since `assert_ne!()` does not call `ne`.
    assert!(set_1.ne(&set_2));
}

#[test]
fn test_partial_ord() {
    let set_1 = rbt_set!["a"];
    let set_1_prime = rbt_set!["a"];
    let set_2 = rbt_set!["b"];

    assert_eq!(set_1.partial_cmp(&set_1_prime), Some(Ordering::Equal));
    assert_eq!(set_1.partial_cmp(&set_2), Some(Ordering::Less));
    assert_eq!(set_2.partial_cmp(&set_1), Some(Ordering::Greater));
}

#[test]
fn test_ord() {
    let set_1 = rbt_set!["a"];
    let set_1_prime = rbt_set!["a"];
    let set_2 = rbt_set!["b"];

    assert_eq!(set_1.cmp(&set_1_prime), Ordering::Equal);
    assert_eq!(set_1.cmp(&set_2), Ordering::Less);
    assert_eq!(set_2.cmp(&set_1), Ordering::Greater);
}

fn hash<T: Hash>(set: &RedBlackTreeSet<T>) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();

    set.hash(&mut hasher);

    hasher.finish()
}

#[test]
fn test_hash() {
    let set_1 = rbt_set!["a"];
    let set_1_prime = rbt_set!["a"];
    let set_2 = rbt_set!["a", "b"];

    assert_eq!(hash(&set_1), hash(&set_1));
    assert_eq!(hash(&set_1), hash(&set_1_prime));
    assert_ne!(hash(&set_1), hash(&set_2));
}

#[test]
fn test_clone() {
    let set = rbt_set!["hello", "there"];
    let clone = set.clone();

    assert_eq!(clone.size(), set.size());
    assert!(clone.contains("hello"));
    assert!(clone.contains("there"));
}
