/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::error::CursorError;
use crate::map::entry::Entry;
use crate::owner::OwnerId;
use slab::Slab;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::mem;
use std::ops::{Bound, RangeBounds};

pub type IterKeys<'a, K, V> = std::iter::Map<Iter<'a, K, V>, fn((&'a K, &'a V)) -> &'a K>;
pub type IterValues<'a, K, V> = std::iter::Map<Iter<'a, K, V>, fn((&'a K, &'a V)) -> &'a V>;

/// Index of a node in the tree's arena.  `NodeId::NIL` stands for every absent child or parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) const NIL: NodeId = NodeId(0);

    fn from_slab_key(key: usize) -> NodeId {
        NodeId(key + 1)
    }

    fn slab_key(self) -> usize {
        debug_assert!(!self.is_nil(), "the nil sentinel has no storage");
        self.0 - 1
    }

    #[inline]
    fn is_nil(self) -> bool {
        self.0 == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Clone, Debug)]
struct Node<K, V> {
    entry: Entry<K, V>,
    color: Color,
    parent: NodeId,
    left: NodeId,
    right: NodeId,
}

/// A position in a [`RedBlackTree`].
///
/// A cursor either points at an entry or is the one-past-the-end sentinel returned by
/// [`RedBlackTree::end()`].  The end position sits between the last and the first entry, so
/// stepping backwards from it reaches the last entry and stepping forward reaches the first.
///
/// Cursors do not borrow the tree.  Every structural modification (inserting a new key or
/// erasing one) invalidates all existing cursors, and using an invalidated cursor fails with
/// [`CursorError::Stale`].  Replacing the value of an existing key is not a structural
/// modification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    owner: OwnerId,
    node: NodeId,
    generation: u64,
}

impl Cursor {
    /// Returns `true` if this is the one-past-the-end cursor.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.node.is_nil()
    }
}

/// A mutable ordered map implemented with a
/// [red-black tree](https://en.wikipedia.org/wiki/Red-Black_tree).
///
/// # Complexity
///
/// Let *n* be the number of elements in the tree.
///
/// ## Temporal complexity
///
/// | Operation                  | Best case | Average   | Worst case  |
/// |:-------------------------- | ---------:| ---------:| -----------:|
/// | `new()`                    |      Θ(1) |      Θ(1) |        Θ(1) |
/// | `insert()`                 |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | `erase()`                  |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | `find()`                   |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | `begin()`/`last()`         |      Θ(1) |      Θ(1) |        Θ(1) |
/// | `size()`                   |      Θ(1) |      Θ(1) |        Θ(1) |
/// | cursor step                |      Θ(1) |      Θ(1) |   Θ(log(n)) |
/// | iterator full              |      Θ(n) |      Θ(n) |        Θ(n) |
///
/// # Implementation details
///
/// This is the tree described in "Introduction to Algorithms" by Cormen et al., chapter 13.
/// Nodes live in a [`Slab`] and refer to each other by index.  Index zero is reserved for the
/// nil sentinel: it is black, holds no entry, and its links are never read or written.  Since
/// the sentinel has no parent link, erasure keeps track of the parent of the replacement node
/// explicitly.
///
/// The minimum and maximum nodes are cached so that `begin()` and `last()` are constant time.
pub struct RedBlackTree<K, V> {
    nodes: Slab<Node<K, V>>,
    root: NodeId,
    first: NodeId,
    last: NodeId,
    size: usize,
    owner: OwnerId,
    generation: u64,
}

impl<K, V> RedBlackTree<K, V> {
    #[must_use]
    pub fn new() -> RedBlackTree<K, V> {
        RedBlackTree {
            nodes: Slab::new(),
            root: NodeId::NIL,
            first: NodeId::NIL,
            last: NodeId::NIL,
            size: 0,
            owner: OwnerId::fresh(),
            generation: 0,
        }
    }

    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NodeId::NIL;
        self.first = NodeId::NIL;
        self.last = NodeId::NIL;
        self.size = 0;
        self.bump_generation();
    }

    /// Cursor at the smallest key, or [`end()`](RedBlackTree::end) if the tree is empty.
    #[must_use]
    pub fn begin(&self) -> Cursor {
        self.cursor(self.first)
    }

    #[must_use]
    pub fn end(&self) -> Cursor {
        self.cursor(NodeId::NIL)
    }

    /// Cursor at the largest key, or [`end()`](RedBlackTree::end) if the tree is empty.
    #[must_use]
    pub fn last(&self) -> Cursor {
        self.cursor(self.last)
    }

    /// Moves the cursor to the in-order successor of its entry.
    pub fn move_next(&self, cursor: Cursor) -> Result<Cursor, CursorError> {
        self.check(cursor)?;

        let next = if cursor.node.is_nil() { self.first } else { self.successor(cursor.node) };

        Ok(self.cursor(next))
    }

    /// Moves the cursor to the in-order predecessor of its entry.
    pub fn move_prev(&self, cursor: Cursor) -> Result<Cursor, CursorError> {
        self.check(cursor)?;

        let prev = if cursor.node.is_nil() { self.last } else { self.predecessor(cursor.node) };

        Ok(self.cursor(prev))
    }

    pub fn entry_at(&self, cursor: Cursor) -> Result<(&K, &V), CursorError> {
        self.check_entry(cursor)?;

        Ok(self.node(cursor.node).entry.as_pair())
    }

    pub fn value_at_mut(&mut self, cursor: Cursor) -> Result<&mut V, CursorError> {
        self.check_entry(cursor)?;

        Ok(&mut self.node_mut(cursor.node).entry.value)
    }

    /// Removes the entry under the cursor and returns it.
    pub fn erase_at(&mut self, cursor: Cursor) -> Result<(K, V), CursorError> {
        self.check_entry(cursor)?;

        Ok(self.erase_node(cursor.node))
    }

    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.key_value(self.first)
    }

    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.key_value(self.last)
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        match self.first.is_nil() {
            true => None,
            false => Some(self.erase_node(self.first)),
        }
    }

    pub fn pop_last(&mut self) -> Option<(K, V)> {
        match self.last.is_nil() {
            true => None,
            false => Some(self.erase_node(self.last)),
        }
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { tree: self, front: self.first, back: self.last, remaining: self.size }
    }

    #[must_use]
    pub fn keys(&self) -> IterKeys<'_, K, V> {
        self.iter().map(|(k, _)| k)
    }

    #[must_use]
    pub fn values(&self) -> IterValues<'_, K, V> {
        self.iter().map(|(_, v)| v)
    }

    fn cursor(&self, node: NodeId) -> Cursor {
        Cursor { owner: self.owner, node, generation: self.generation }
    }

    fn check(&self, cursor: Cursor) -> Result<(), CursorError> {
        let valid = cursor.owner == self.owner && cursor.generation == self.generation;

        match valid {
            true => Ok(()),
            false => Err(CursorError::Stale),
        }
    }

    fn check_entry(&self, cursor: Cursor) -> Result<(), CursorError> {
        self.check(cursor)?;

        match cursor.is_end() {
            true => Err(CursorError::End),
            false => Ok(()),
        }
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn key_value(&self, id: NodeId) -> Option<(&K, &V)> {
        match id.is_nil() {
            true => None,
            false => Some(self.node(id).entry.as_pair()),
        }
    }

    fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.slab_key()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.slab_key()]
    }

    fn key(&self, id: NodeId) -> &K {
        &self.node(id).entry.key
    }

    fn color(&self, id: NodeId) -> Color {
        match id.is_nil() {
            true => Color::Black,
            false => self.node(id).color,
        }
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        if !id.is_nil() {
            self.node_mut(id).color = color;
        }
    }

    fn parent(&self, id: NodeId) -> NodeId {
        self.node(id).parent
    }

    fn left(&self, id: NodeId) -> NodeId {
        self.node(id).left
    }

    fn right(&self, id: NodeId) -> NodeId {
        self.node(id).right
    }

    fn child(&self, id: NodeId, side: Side) -> NodeId {
        match side {
            Side::Left => self.left(id),
            Side::Right => self.right(id),
        }
    }

    fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        let node = self.node_mut(id);

        match side {
            Side::Left => node.left = child,
            Side::Right => node.right = child,
        }
    }

    fn side_of(&self, parent: NodeId, child: NodeId) -> Side {
        match self.left(parent) == child {
            true => Side::Left,
            false => Side::Right,
        }
    }

    fn minimum(&self, mut id: NodeId) -> NodeId {
        while !self.left(id).is_nil() {
            id = self.left(id);
        }
        id
    }

    fn maximum(&self, mut id: NodeId) -> NodeId {
        while !self.right(id).is_nil() {
            id = self.right(id);
        }
        id
    }

    /// Returns the in-order successor of `id`, or nil if `id` is the maximum.
    fn successor(&self, id: NodeId) -> NodeId {
        let right = self.right(id);

        if !right.is_nil() {
            return self.minimum(right);
        }

        let mut current = id;
        let mut parent = self.parent(current);

        while !parent.is_nil() && current == self.right(parent) {
            current = parent;
            parent = self.parent(parent);
        }

        parent
    }

    /// Returns the in-order predecessor of `id`, or nil if `id` is the minimum.
    fn predecessor(&self, id: NodeId) -> NodeId {
        let left = self.left(id);

        if !left.is_nil() {
            return self.maximum(left);
        }

        let mut current = id;
        let mut parent = self.parent(current);

        while !parent.is_nil() && current == self.left(parent) {
            current = parent;
            parent = self.parent(parent);
        }

        parent
    }

    /// Puts the subtree rooted at `with` in the place of the subtree rooted at `node`.
    /// `node` keeps its own links.
    fn transplant(&mut self, node: NodeId, with: NodeId) {
        let parent = self.parent(node);

        if parent.is_nil() {
            self.root = with;
        } else {
            let side = self.side_of(parent, node);
            self.set_child(parent, side, with);
        }

        if !with.is_nil() {
            self.node_mut(with).parent = parent;
        }
    }

    /// Rotates the subtree rooted at `x` towards `side`.  A left rotation is shown below, a right
    /// rotation is its mirror image.
    ///
    /// ```text
    ///        ┌───┐                         ┌───┐
    ///        │ x │                         │ y │
    ///        └───┘                         └───┘
    ///         ╱ ╲          rotate           ╱ ╲
    ///        a  ┌───┐    ───────────▶   ┌───┐  c
    ///           │ y │       left        │ x │
    ///           └───┘                   └───┘
    ///            ╱ ╲                     ╱ ╲
    ///           b   c                   a   b
    /// ```
    ///
    /// The in-order sequence `a x b y c` is preserved.
    fn rotate(&mut self, x: NodeId, side: Side) {
        let y = self.child(x, side.opposite());
        let inner = self.child(y, side);

        self.set_child(x, side.opposite(), inner);

        if !inner.is_nil() {
            self.node_mut(inner).parent = x;
        }

        self.transplant(x, y);
        self.set_child(y, side, x);
        self.node_mut(x).parent = y;
    }

    /// Unlinks the node `z`, restores the red-black invariants, releases its slot and returns
    /// its entry.
    fn erase_node(&mut self, z: NodeId) -> (K, V) {
        // The caches must move before `z` loses its links.
        if z == self.first {
            self.first = self.successor(z);
        }
        if z == self.last {
            self.last = self.predecessor(z);
        }

        let z_left = self.left(z);
        let z_right = self.right(z);
        let mut removed_color = self.color(z);
        let x: NodeId;
        let x_parent: NodeId;

        if z_left.is_nil() {
            x = z_right;
            x_parent = self.parent(z);
            self.transplant(z, z_right);
        } else if z_right.is_nil() {
            x = z_left;
            x_parent = self.parent(z);
            self.transplant(z, z_left);
        } else {
            let y = self.minimum(z_right);

            removed_color = self.color(y);
            x = self.right(y);

            if self.parent(y) == z {
                x_parent = y;
            } else {
                x_parent = self.parent(y);
                self.transplant(y, x);
                self.set_child(y, Side::Right, z_right);
                self.node_mut(z_right).parent = y;
            }

            self.transplant(z, y);
            self.set_child(y, Side::Left, z_left);
            self.node_mut(z_left).parent = y;

            let z_color = self.color(z);
            self.set_color(y, z_color);
        }

        if removed_color == Color::Black {
            self.erase_fixup(x, x_parent);
        }

        let node = self.nodes.remove(z.slab_key());

        self.size -= 1;
        self.bump_generation();

        node.entry.into_pair()
    }

    /// Restores the black height after a black node was removed above `x`.  `x` carries an
    /// extra black; `parent` is its parent (needed because `x` may be the nil sentinel).
    fn erase_fixup(&mut self, mut x: NodeId, mut parent: NodeId) {
        log::trace!("erase fixup starting below {:?}", parent);

        while x != self.root && self.color(x) == Color::Black {
            let side = self.side_of(parent, x);
            let mut sibling = self.child(parent, side.opposite());

            if self.color(sibling) == Color::Red {
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.child(parent, side.opposite());
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());

            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                self.set_color(sibling, Color::Red);
                x = parent;
                parent = self.parent(x);
            } else {
                if self.color(far) == Color::Black {
                    self.set_color(near, Color::Black);
                    self.set_color(sibling, Color::Red);
                    self.rotate(sibling, side.opposite());
                    sibling = self.child(parent, side.opposite());
                }

                let parent_color = self.color(parent);
                let far = self.child(sibling, side.opposite());

                self.set_color(sibling, parent_color);
                self.set_color(parent, Color::Black);
                self.set_color(far, Color::Black);
                self.rotate(parent, side);

                x = self.root;
            }
        }

        self.set_color(x, Color::Black);
    }
}

impl<K, V> RedBlackTree<K, V>
where
    K: Ord,
{
    /// Inserts an entry.  If the key was already present its stored key and value are replaced
    /// and the previous pair is returned; existing cursors stay valid in that case.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        let mut parent = NodeId::NIL;
        let mut side = Side::Left;
        let mut current = self.root;

        while !current.is_nil() {
            parent = current;

            match key.cmp(self.key(current)) {
                Ordering::Less => {
                    side = Side::Left;
                    current = self.left(current);
                }
                Ordering::Equal => {
                    let old = mem::replace(&mut self.node_mut(current).entry, Entry::new(key, value));

                    return Some(old.into_pair());
                }
                Ordering::Greater => {
                    side = Side::Right;
                    current = self.right(current);
                }
            }
        }

        let node = Node {
            entry: Entry::new(key, value),
            color: Color::Red,
            parent,
            left: NodeId::NIL,
            right: NodeId::NIL,
        };
        let id = NodeId::from_slab_key(self.nodes.insert(node));

        if parent.is_nil() {
            self.root = id;
        } else {
            self.set_child(parent, side, id);
        }

        if self.first.is_nil() || self.key(id) < self.key(self.first) {
            self.first = id;
        }
        if self.last.is_nil() || self.key(id) > self.key(self.last) {
            self.last = id;
        }

        self.size += 1;
        self.bump_generation();
        self.insert_fixup(id);

        None
    }

    fn insert_fixup(&mut self, mut z: NodeId) {
        while self.color(self.parent(z)) == Color::Red {
            // A red parent is never the root, so the grandparent exists.
            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            let side = self.side_of(grandparent, parent);
            let uncle = self.child(grandparent, side.opposite());

            if self.color(uncle) == Color::Red {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                z = grandparent;
            } else {
                if z == self.child(parent, side.opposite()) {
                    z = parent;
                    self.rotate(z, side);
                }

                let parent = self.parent(z);
                let grandparent = self.parent(parent);

                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate(grandparent, side.opposite());
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    fn find_node<Q: ?Sized>(&self, key: &Q) -> NodeId
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        let mut current = self.root;

        while !current.is_nil() {
            match key.cmp(self.key(current).borrow()) {
                Ordering::Less => current = self.left(current),
                Ordering::Equal => return current,
                Ordering::Greater => current = self.right(current),
            }
        }

        NodeId::NIL
    }

    /// First node whose key is not less than `key` (greater than `key` when `strict`).
    fn lower_bound_node<Q: ?Sized>(&self, key: &Q, strict: bool) -> NodeId
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        let mut candidate = NodeId::NIL;
        let mut current = self.root;

        while !current.is_nil() {
            let in_bound = match key.cmp(self.key(current).borrow()) {
                Ordering::Less => true,
                Ordering::Equal => !strict,
                Ordering::Greater => false,
            };

            if in_bound {
                candidate = current;
                current = self.left(current);
            } else {
                current = self.right(current);
            }
        }

        candidate
    }

    /// Last node whose key is not greater than `key` (less than `key` when `strict`).
    fn upper_bound_node<Q: ?Sized>(&self, key: &Q, strict: bool) -> NodeId
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        let mut candidate = NodeId::NIL;
        let mut current = self.root;

        while !current.is_nil() {
            let in_bound = match key.cmp(self.key(current).borrow()) {
                Ordering::Less => false,
                Ordering::Equal => !strict,
                Ordering::Greater => true,
            };

            if in_bound {
                candidate = current;
                current = self.right(current);
            } else {
                current = self.left(current);
            }
        }

        candidate
    }

    /// Returns a cursor at `key`, or [`end()`](RedBlackTree::end) if the key is absent.
    #[must_use]
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.cursor(self.find_node(key))
    }

    /// Cursor at the first key that is not less than `key`.
    #[must_use]
    pub fn lower_bound<Q: ?Sized>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.cursor(self.lower_bound_node(key, false))
    }

    /// Cursor at the first key that is greater than `key`.
    #[must_use]
    pub fn upper_bound<Q: ?Sized>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.cursor(self.lower_bound_node(key, true))
    }

    #[must_use]
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.get_key_value(key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn get_key_value<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.key_value(self.find_node(key))
    }

    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        let id = self.find_node(key);

        match id.is_nil() {
            true => None,
            false => Some(&mut self.node_mut(id).entry.value),
        }
    }

    #[must_use]
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        !self.find_node(key).is_nil()
    }

    /// Removes `key` and returns its entry.  Erasing an absent key does nothing.
    pub fn erase<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        let id = self.find_node(key);

        match id.is_nil() {
            true => None,
            false => Some(self.erase_node(id)),
        }
    }

    pub fn range<Q, RB>(&self, range: RB) -> RangeIter<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        RB: RangeBounds<Q>,
    {
        let front = match range.start_bound() {
            Bound::Included(key) => self.lower_bound_node(key, false),
            Bound::Excluded(key) => self.lower_bound_node(key, true),
            Bound::Unbounded => self.first,
        };
        let back = match range.end_bound() {
            Bound::Included(key) => self.upper_bound_node(key, false),
            Bound::Excluded(key) => self.upper_bound_node(key, true),
            Bound::Unbounded => self.last,
        };

        let done = front.is_nil() || back.is_nil() || self.key(front) > self.key(back);

        RangeIter { tree: self, front, back, done }
    }
}

impl<K, V> Default for RedBlackTree<K, V> {
    fn default() -> RedBlackTree<K, V> {
        RedBlackTree::new()
    }
}

impl<K: Clone, V: Clone> Clone for RedBlackTree<K, V> {
    fn clone(&self) -> RedBlackTree<K, V> {
        RedBlackTree {
            nodes: self.nodes.clone(),
            root: self.root,
            first: self.first,
            last: self.last,
            size: self.size,
            owner: OwnerId::fresh(),
            generation: self.generation,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RedBlackTree<K, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for RedBlackTree<K, V> {
    fn eq(&self, other: &RedBlackTree<K, V>) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for RedBlackTree<K, V> {}

impl<K: Hash, V: Hash> Hash for RedBlackTree<K, V> {
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

impl<K: Ord, V> Extend<(K, V)> for RedBlackTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RedBlackTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(into_iter: I) -> RedBlackTree<K, V> {
        let mut tree = RedBlackTree::new();

        tree.extend(into_iter);

        tree
    }
}

impl<'a, K, V> IntoIterator for &'a RedBlackTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for RedBlackTree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter { tree: self }
    }
}

/// In-order iterator over the entries of a [`RedBlackTree`].
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    tree: &'a RedBlackTree<K, V>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter { tree: self.tree, front: self.front, back: self.back, remaining: self.remaining }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }

        let current = self.front;

        self.front = self.tree.successor(current);
        self.remaining -= 1;

        self.tree.key_value(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }

        let current = self.back;

        self.back = self.tree.predecessor(current);
        self.remaining -= 1;

        self.tree.key_value(current)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over the entries of a [`RedBlackTree`] within a key range.
#[derive(Debug)]
pub struct RangeIter<'a, K, V> {
    tree: &'a RedBlackTree<K, V>,
    front: NodeId,
    back: NodeId,
    done: bool,
}

impl<'a, K, V> Iterator for RangeIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.done {
            return None;
        }

        let current = self.front;

        if current == self.back {
            self.done = true;
        } else {
            self.front = self.tree.successor(current);
        }

        self.tree.key_value(current)
    }
}

impl<'a, K, V> DoubleEndedIterator for RangeIter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        if self.done {
            return None;
        }

        let current = self.back;

        if current == self.front {
            self.done = true;
        } else {
            self.back = self.tree.predecessor(current);
        }

        self.tree.key_value(current)
    }
}

impl<K, V> FusedIterator for RangeIter<'_, K, V> {}

/// Owning iterator that drains a [`RedBlackTree`] in key order.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    tree: RedBlackTree<K, V>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.tree.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.size(), Some(self.tree.size()))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.tree.pop_last()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
