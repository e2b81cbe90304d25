/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::error::CursorError;
use crate::map::red_black_tree_map::{self, Cursor};
use crate::RedBlackTreeMap;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::RangeBounds;

pub type Iter<'a, T> = red_black_tree_map::IterKeys<'a, T, ()>;
pub type RangeIter<'a, T> =
    std::iter::Map<red_black_tree_map::RangeIter<'a, T, ()>, fn((&'a T, &())) -> &'a T>;
pub type IntoIter<T> = std::iter::Map<red_black_tree_map::IntoIter<T, ()>, fn((T, ())) -> T>;

/// Creates a [`RedBlackTreeSet`](crate::RedBlackTreeSet) containing the given arguments:
///
/// ```
/// # use containers::*;
/// #
/// let mut s = RedBlackTreeSet::new();
///
/// s.insert(1);
/// s.insert(2);
/// s.insert(3);
///
/// assert_eq!(rbt_set![1, 2, 3], s);
/// ```
#[macro_export]
macro_rules! rbt_set {
    ($($e:expr),*) => {
        {
            #[allow(unused_mut)]
            let mut s = $crate::RedBlackTreeSet::new();
            $(
                s.insert($e);
            )*
            s
        }
    };
}

/// An ordered set.  This implementation uses a
/// [red-black tree](https://en.wikipedia.org/wiki/Red-Black_tree).
///
/// # Complexity
///
/// Let *n* be the number of elements in the set.
///
/// ## Temporal complexity
///
/// | Operation                      | Average   | Worst case  |
/// |:------------------------------ | ---------:| -----------:|
/// | `new()`                        |      Θ(1) |        Θ(1) |
/// | `insert()`                     | Θ(log(n)) |   Θ(log(n)) |
/// | `erase()`                      | Θ(log(n)) |   Θ(log(n)) |
/// | `get()`                        | Θ(log(n)) |   Θ(log(n)) |
/// | `contains()`                   | Θ(log(n)) |   Θ(log(n)) |
/// | `first_value()`/`last_value()` |      Θ(1) |        Θ(1) |
/// | `size()`                       |      Θ(1) |        Θ(1) |
/// | `clone()`                      |      Θ(n) |        Θ(n) |
/// | iterator creation              |      Θ(1) |        Θ(1) |
/// | iterator step                  |      Θ(1) |   Θ(log(n)) |
/// | iterator full                  |      Θ(n) |        Θ(n) |
///
/// # Implementation details
///
/// This is a thin wrapper around a [`RedBlackTreeMap`] with unit values.
pub struct RedBlackTreeSet<T> {
    map: RedBlackTreeMap<T, ()>,
}

impl<T> RedBlackTreeSet<T> {
    #[must_use]
    pub fn new() -> RedBlackTreeSet<T> {
        RedBlackTreeSet { map: RedBlackTreeMap::new() }
    }

    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.map.size()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    #[must_use]
    pub fn begin(&self) -> Cursor {
        self.map.begin()
    }

    #[must_use]
    pub fn end(&self) -> Cursor {
        self.map.end()
    }

    #[must_use]
    pub fn last(&self) -> Cursor {
        self.map.last()
    }

    pub fn move_next(&self, cursor: Cursor) -> Result<Cursor, CursorError> {
        self.map.move_next(cursor)
    }

    pub fn move_prev(&self, cursor: Cursor) -> Result<Cursor, CursorError> {
        self.map.move_prev(cursor)
    }

    pub fn value_at(&self, cursor: Cursor) -> Result<&T, CursorError> {
        self.map.entry_at(cursor).map(|(k, _)| k)
    }

    pub fn erase_at(&mut self, cursor: Cursor) -> Result<T, CursorError> {
        self.map.erase_at(cursor).map(|(k, _)| k)
    }

    /// Smallest element of the set.
    #[must_use]
    pub fn first_value(&self) -> Option<&T> {
        self.map.first_key_value().map(|(k, _)| k)
    }

    /// Largest element of the set.
    #[must_use]
    pub fn last_value(&self) -> Option<&T> {
        self.map.last_key_value().map(|(k, _)| k)
    }

    pub fn pop_first(&mut self) -> Option<T> {
        self.map.pop_first().map(|(k, _)| k)
    }

    pub fn pop_last(&mut self) -> Option<T> {
        self.map.pop_last().map(|(k, _)| k)
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.map.keys()
    }
}

impl<T> RedBlackTreeSet<T>
where
    T: Ord,
{
    /// Adds `v` to the set.  Returns `false` if an equal element was already present, in which
    /// case that element is replaced by `v`.
    pub fn insert(&mut self, v: T) -> bool {
        self.map.insert_entry(v, ()).is_none()
    }

    /// Adds `v` to the set, returning the equal element it replaced, if any.
    pub fn replace(&mut self, v: T) -> Option<T> {
        self.map.insert_entry(v, ()).map(|(k, _)| k)
    }

    /// Removes `v` from the set.  Returns whether it was present.
    pub fn erase<V: ?Sized>(&mut self, v: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.map.erase(v).is_some()
    }

    #[must_use]
    pub fn find<V: ?Sized>(&self, v: &V) -> Cursor
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.map.find(v)
    }

    #[must_use]
    pub fn lower_bound<V: ?Sized>(&self, v: &V) -> Cursor
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.map.lower_bound(v)
    }

    #[must_use]
    pub fn upper_bound<V: ?Sized>(&self, v: &V) -> Cursor
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.map.upper_bound(v)
    }

    #[must_use]
    pub fn get<V: ?Sized>(&self, v: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.map.get_key_value(v).map(|(k, _)| k)
    }

    #[must_use]
    pub fn contains<V: ?Sized>(&self, v: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.map.contains_key(v)
    }

    #[must_use]
    pub fn is_disjoint(&self, other: &RedBlackTreeSet<T>) -> bool {
        let mut self_it = self.iter();
        let mut other_it = other.iter();

        let mut v_opt = self_it.next();
        let mut u_opt = other_it.next();

        while let (Some(v), Some(u)) = (v_opt, u_opt) {
            match v.cmp(u) {
                Ordering::Less => v_opt = self_it.next(),
                Ordering::Equal => return false,
                Ordering::Greater => u_opt = other_it.next(),
            }
        }

        true
    }

    #[must_use]
    pub fn is_subset(&self, other: &RedBlackTreeSet<T>) -> bool {
        if self.size() > other.size() {
            return false;
        }

        let mut other_it = other.iter();

        for v in self.iter() {
            loop {
                match other_it.next() {
                    Some(u) => match u.cmp(v) {
                        Ordering::Less => (),
                        Ordering::Equal => break,
                        Ordering::Greater => return false,
                    },
                    None => return false,
                }
            }
        }

        true
    }

    #[must_use]
    pub fn is_superset(&self, other: &RedBlackTreeSet<T>) -> bool {
        other.is_subset(self)
    }

    #[must_use]
    pub fn range<Q, RB>(&self, range: RB) -> RangeIter<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
        RB: RangeBounds<Q>,
    {
        self.map.range(range).map(|(k, _)| k)
    }
}

impl<T: Clone> Clone for RedBlackTreeSet<T> {
    fn clone(&self) -> RedBlackTreeSet<T> {
        RedBlackTreeSet { map: self.map.clone() }
    }
}

impl<T> Default for RedBlackTreeSet<T> {
    fn default() -> RedBlackTreeSet<T> {
        RedBlackTreeSet::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RedBlackTreeSet<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RedBlackTreeSet<T> {
    fn eq(&self, other: &RedBlackTreeSet<T>) -> bool {
        self.map == other.map
    }
}

impl<T: Eq> Eq for RedBlackTreeSet<T> {}

impl<T: Ord> PartialOrd for RedBlackTreeSet<T> {
    fn partial_cmp(&self, other: &RedBlackTreeSet<T>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for RedBlackTreeSet<T> {
    fn cmp(&self, other: &RedBlackTreeSet<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for RedBlackTreeSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Add the hash of length so that if two collections are added one after the other it
        // doesn't hash to the same thing as a single collection with the same elements in the same
        // order.
        self.size().hash(state);

        for e in self {
            e.hash(state);
        }
    }
}

impl<T> Display for RedBlackTreeSet<T>
where
    T: Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        fmt.write_str("{")?;

        for v in self.iter() {
            if !first {
                fmt.write_str(", ")?;
            }
            v.fmt(fmt)?;
            first = false;
        }

        fmt.write_str("}")
    }
}

impl<T: Ord> Extend<T> for RedBlackTreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(into_iter: I) -> RedBlackTreeSet<T> {
        let mut set = RedBlackTreeSet::new();

        set.extend(into_iter);

        set
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for RedBlackTreeSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.map.into_iter().map(|(k, ())| k)
    }
}

#[cfg(test)]
mod test;
