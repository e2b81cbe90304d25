/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::error::CursorError;
use crate::tree::RedBlackTree;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{Index, RangeBounds};

pub use crate::tree::{Cursor, IntoIter, Iter, IterKeys, IterValues, RangeIter};

/// Creates a [`RedBlackTreeMap`](crate::RedBlackTreeMap) containing the given arguments:
///
/// ```
/// # use containers::*;
/// #
/// let mut m = RedBlackTreeMap::new();
///
/// m.insert(1, "one");
/// m.insert(2, "two");
/// m.insert(3, "three");
///
/// assert_eq!(rbt_map![1 => "one", 2 => "two", 3 => "three"], m);
/// ```
#[macro_export]
macro_rules! rbt_map {
    ($($k:expr => $v:expr),*) => {
        {
            #[allow(unused_mut)]
            let mut m = $crate::RedBlackTreeMap::new();
            $(
                m.insert($k, $v);
            )*
            m
        }
    };
}

/// An ordered map with unique keys.  This implementation uses a
/// [red-black tree](https://en.wikipedia.org/wiki/Red-Black_tree).
///
/// # Complexity
///
/// Let *n* be the number of elements in the map.
///
/// ## Temporal complexity
///
/// | Operation                  | Best case | Average   | Worst case  |
/// |:-------------------------- | ---------:| ---------:| -----------:|
/// | `new()`                    |      Θ(1) |      Θ(1) |        Θ(1) |
/// | `insert()`                 |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | `erase()`                  |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | `get()`                    |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | `contains_key()`           |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | `size()`                   |      Θ(1) |      Θ(1) |        Θ(1) |
/// | `clone()`                  |      Θ(n) |      Θ(n) |        Θ(n) |
/// | iterator creation          |      Θ(1) |      Θ(1) |        Θ(1) |
/// | iterator step              |      Θ(1) |      Θ(1) |   Θ(log(n)) |
/// | iterator full              |      Θ(n) |      Θ(n) |        Θ(n) |
///
/// # Implementation details
///
/// A thin layer over [`RedBlackTree`].  Cursors obtained from a map follow the same invalidation
/// rules as the tree's.
pub struct RedBlackTreeMap<K, V> {
    tree: RedBlackTree<K, V>,
}

impl<K, V> RedBlackTreeMap<K, V> {
    #[must_use]
    pub fn new() -> RedBlackTreeMap<K, V> {
        RedBlackTreeMap { tree: RedBlackTree::new() }
    }

    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.tree.size()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    #[must_use]
    pub fn begin(&self) -> Cursor {
        self.tree.begin()
    }

    #[must_use]
    pub fn end(&self) -> Cursor {
        self.tree.end()
    }

    #[must_use]
    pub fn last(&self) -> Cursor {
        self.tree.last()
    }

    pub fn move_next(&self, cursor: Cursor) -> Result<Cursor, CursorError> {
        self.tree.move_next(cursor)
    }

    pub fn move_prev(&self, cursor: Cursor) -> Result<Cursor, CursorError> {
        self.tree.move_prev(cursor)
    }

    pub fn entry_at(&self, cursor: Cursor) -> Result<(&K, &V), CursorError> {
        self.tree.entry_at(cursor)
    }

    pub fn value_at_mut(&mut self, cursor: Cursor) -> Result<&mut V, CursorError> {
        self.tree.value_at_mut(cursor)
    }

    /// Removes the entry under the cursor and returns it.
    pub fn erase_at(&mut self, cursor: Cursor) -> Result<(K, V), CursorError> {
        self.tree.erase_at(cursor)
    }

    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.tree.first_key_value()
    }

    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.tree.last_key_value()
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.tree.pop_first()
    }

    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.tree.pop_last()
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.tree.iter()
    }

    #[must_use]
    pub fn keys(&self) -> IterKeys<'_, K, V> {
        self.tree.keys()
    }

    #[must_use]
    pub fn values(&self) -> IterValues<'_, K, V> {
        self.tree.values()
    }
}

impl<K, V> RedBlackTreeMap<K, V>
where
    K: Ord,
{
    /// Associates `value` with `key`, returning the value previously associated with it.
    ///
    /// Replacing the value of a key already present keeps existing cursors valid.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.tree.insert(key, value).map(|(_, v)| v)
    }

    /// Like [`insert()`](RedBlackTreeMap::insert) but also hands back the key that was replaced.
    pub(crate) fn insert_entry(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.tree.insert(key, value)
    }

    /// Removes `key`, returning its value if it was present.
    pub fn erase<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.tree.erase(key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.tree.find(key)
    }

    #[must_use]
    pub fn lower_bound<Q: ?Sized>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.tree.lower_bound(key)
    }

    #[must_use]
    pub fn upper_bound<Q: ?Sized>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.tree.upper_bound(key)
    }

    #[must_use]
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.tree.get(key)
    }

    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.tree.get_mut(key)
    }

    #[must_use]
    pub fn get_key_value<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.tree.get_key_value(key)
    }

    #[must_use]
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.tree.contains_key(key)
    }

    pub fn range<Q, RB>(&self, range: RB) -> RangeIter<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        RB: RangeBounds<Q>,
    {
        self.tree.range(range)
    }
}

impl<'a, K, Q: ?Sized, V> Index<&'a Q> for RedBlackTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(v) => v,
            None => panic!("no entry found for key"),
        }
    }
}

impl<K: Clone, V: Clone> Clone for RedBlackTreeMap<K, V> {
    fn clone(&self) -> RedBlackTreeMap<K, V> {
        RedBlackTreeMap { tree: self.tree.clone() }
    }
}

impl<K, V> Default for RedBlackTreeMap<K, V> {
    fn default() -> RedBlackTreeMap<K, V> {
        RedBlackTreeMap::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RedBlackTreeMap<K, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, fmt)
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for RedBlackTreeMap<K, V> {
    fn eq(&self, other: &RedBlackTreeMap<K, V>) -> bool {
        self.tree == other.tree
    }
}

impl<K: Eq, V: Eq> Eq for RedBlackTreeMap<K, V> {}

impl<K: Ord, V: PartialOrd> PartialOrd for RedBlackTreeMap<K, V> {
    fn partial_cmp(&self, other: &RedBlackTreeMap<K, V>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord> Ord for RedBlackTreeMap<K, V> {
    fn cmp(&self, other: &RedBlackTreeMap<K, V>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K: Hash, V: Hash> Hash for RedBlackTreeMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tree.hash(state);
    }
}

impl<K, V> Display for RedBlackTreeMap<K, V>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        fmt.write_str("{")?;

        for (k, v) in self.iter() {
            if !first {
                fmt.write_str(", ")?;
            }
            k.fmt(fmt)?;
            fmt.write_str(": ")?;
            v.fmt(fmt)?;
            first = false;
        }

        fmt.write_str("}")
    }
}

impl<K: Ord, V> Extend<(K, V)> for RedBlackTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RedBlackTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(into_iter: I) -> RedBlackTreeMap<K, V> {
        RedBlackTreeMap { tree: into_iter.into_iter().collect() }
    }
}

impl<'a, K, V> IntoIterator for &'a RedBlackTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for RedBlackTreeMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        self.tree.into_iter()
    }
}
