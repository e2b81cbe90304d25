/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::error::{AllocError, CursorError};
use crate::owner::OwnerId;
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::ops::{Index, IndexMut};

/// Creates a [`Deque`](crate::Deque) containing the given arguments:
///
/// ```
/// # use containers::*;
/// #
/// let mut d = Deque::new();
///
/// d.push_back(1);
/// d.push_back(2);
/// d.push_back(3);
///
/// assert_eq!(deque![1, 2, 3], d);
/// ```
#[macro_export]
macro_rules! deque {
    ($($e:expr),*) => {
        {
            #[allow(unused_mut)]
            let mut d = $crate::Deque::new();
            $(
                d.push_back($e);
            )*
            d
        }
    };
}

/// A position in a [`Deque`].
///
/// A cursor either points at an element or is the one-past-the-end sentinel returned by
/// [`Deque::end()`].  Stepping past the back or before the front yields the end cursor.
///
/// Growing the buffer or removing an element invalidates every existing cursor; using an
/// invalidated cursor fails with [`CursorError::Stale`].  Pushing without growth keeps cursors
/// valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    owner: OwnerId,
    slot: Option<usize>,
    generation: u64,
}

impl Cursor {
    /// Returns `true` if this is the one-past-the-end cursor.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.slot.is_none()
    }
}

/// A growable double-ended queue backed by a ring buffer.
///
/// # Complexity
///
/// Let *n* be the number of elements in the deque.
///
/// ## Temporal complexity
///
/// | Operation                | Average | Worst case  |
/// |:------------------------ | -------:| -----------:|
/// | `new()`                  |    Θ(1) |        Θ(1) |
/// | `push_front()`           |    Θ(1) |        Θ(n) |
/// | `push_back()`            |    Θ(1) |        Θ(n) |
/// | `push_*()` amortized     |    Θ(1) |        Θ(1) |
/// | `pop_front()`            |    Θ(1) |        Θ(1) |
/// | `pop_back()`             |    Θ(1) |        Θ(1) |
/// | `front()`/`back()`       |    Θ(1) |        Θ(1) |
/// | `get()`                  |    Θ(1) |        Θ(1) |
/// | `size()`                 |    Θ(1) |        Θ(1) |
/// | cursor step              |    Θ(1) |        Θ(1) |
/// | iterator full            |    Θ(n) |        Θ(n) |
///
/// # Implementation details
///
/// The elements live in a slot array that is used circularly.  `begin` and `last` are the slots
/// of the front and back elements; the live region is `[begin, last]`, or
/// `[begin, capacity - 1] ∪ [0, last]` when it wraps around the end of the array.  When the
/// array is full its capacity is doubled and the elements are moved to the start of the new
/// array in logical order.
pub struct Deque<T> {
    slots: Vec<Option<T>>,
    size: usize,
    begin: Option<usize>,
    last: Option<usize>,
    owner: OwnerId,
    generation: u64,
}

#[inline]
fn wrapping_next(slot: usize, capacity: usize) -> usize {
    if slot + 1 == capacity {
        0
    } else {
        slot + 1
    }
}

#[inline]
fn wrapping_prev(slot: usize, capacity: usize) -> usize {
    if slot == 0 {
        capacity - 1
    } else {
        slot - 1
    }
}

impl<T> Deque<T> {
    #[must_use]
    pub fn new() -> Deque<T> {
        Deque {
            slots: Vec::new(),
            size: 0,
            begin: None,
            last: None,
            owner: OwnerId::fresh(),
            generation: 0,
        }
    }

    /// Creates an empty deque with room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot be allocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Deque<T> {
        match Deque::try_with_capacity(capacity) {
            Ok(deque) => deque,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Deque<T>, AllocError> {
        let mut deque = Deque::new();

        if capacity > 0 {
            deque.grow(capacity)?;
        }

        Ok(deque)
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

    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Moves the elements into a new slot array of `capacity` slots, front element first.
    /// Nothing changes if the allocation fails.
    fn grow(&mut self, capacity: usize) -> Result<(), AllocError> {
        debug_assert!(capacity >= self.size);

        let old_capacity = self.capacity();
        let mut slots: Vec<Option<T>> = Vec::new();

        if let Err(source) = slots.try_reserve_exact(capacity) {
            log::debug!("failed to grow deque from {} to {} slots", old_capacity, capacity);

            return Err(AllocError::Exhausted { capacity, source });
        }

        log::trace!("growing deque from {} to {} slots", old_capacity, capacity);

        if let Some(begin) = self.begin {
            let mut slot = begin;

            for _ in 0..self.size {
                slots.push(self.slots[slot].take());
                slot = wrapping_next(slot, old_capacity);
            }

            self.begin = Some(0);
            self.last = Some(self.size - 1);
        }

        slots.resize_with(capacity, || None);

        self.slots = slots;
        self.bump_generation();

        Ok(())
    }

    fn reserve_for_push(&mut self) -> Result<(), AllocError> {
        if self.size < self.capacity() {
            return Ok(());
        }

        let capacity = match self.capacity() {
            0 => 1,
            capacity => capacity.checked_mul(2).ok_or(AllocError::CapacityOverflow)?,
        };

        self.grow(capacity)
    }

    /// Makes room for at least `additional` more elements, at least doubling the capacity when it
    /// has to grow.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        let required = self.size.checked_add(additional).ok_or(AllocError::CapacityOverflow)?;

        if required <= self.capacity() {
            return Ok(());
        }

        self.grow(required.max(self.capacity().saturating_mul(2)))
    }

    /// # Panics
    ///
    /// Panics if the storage cannot be allocated.
    pub fn reserve(&mut self, additional: usize) {
        if let Err(error) = self.try_reserve(additional) {
            panic!("{error}");
        }
    }

    /// Adds an element to the front of the deque.
    ///
    /// # Panics
    ///
    /// Panics if the deque is full and the storage cannot be grown.
    pub fn push_front(&mut self, v: T) {
        if let Err(error) = self.try_push_front(v) {
            panic!("{error}");
        }
    }

    /// Adds an element to the back of the deque.
    ///
    /// # Panics
    ///
    /// Panics if the deque is full and the storage cannot be grown.
    pub fn push_back(&mut self, v: T) {
        if let Err(error) = self.try_push_back(v) {
            panic!("{error}");
        }
    }

    pub fn try_push_front(&mut self, v: T) -> Result<(), AllocError> {
        self.reserve_for_push()?;

        let slot = match self.begin {
            Some(begin) => wrapping_prev(begin, self.capacity()),
            None => {
                self.last = Some(0);
                0
            }
        };

        self.begin = Some(slot);
        self.slots[slot] = Some(v);
        self.size += 1;

        Ok(())
    }

    pub fn try_push_back(&mut self, v: T) -> Result<(), AllocError> {
        self.reserve_for_push()?;

        let slot = match self.last {
            Some(last) => wrapping_next(last, self.capacity()),
            None => {
                self.begin = Some(0);
                0
            }
        };

        self.last = Some(slot);
        self.slots[slot] = Some(v);
        self.size += 1;

        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let begin = self.begin?;
        let v = self.slots[begin].take();

        if self.size == 1 {
            self.begin = None;
            self.last = None;
        } else {
            self.begin = Some(wrapping_next(begin, self.capacity()));
        }

        self.size -= 1;
        self.bump_generation();

        v
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.last?;
        let v = self.slots[last].take();

        if self.size == 1 {
            self.begin = None;
            self.last = None;
        } else {
            self.last = Some(wrapping_prev(last, self.capacity()));
        }

        self.size -= 1;
        self.bump_generation();

        v
    }

    /// Removes every element.  The capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }

        self.begin = None;
        self.last = None;
        self.size = 0;
        self.bump_generation();
    }

    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.begin.and_then(|slot| self.slots[slot].as_ref())
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.begin.and_then(|slot| self.slots[slot].as_mut())
    }

    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.last.and_then(|slot| self.slots[slot].as_ref())
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.last.and_then(|slot| self.slots[slot].as_mut())
    }

    /// Slot holding the element at logical position `index`.
    fn slot_of(&self, index: usize) -> Option<usize> {
        match self.begin {
            Some(begin) if index < self.size => Some((begin + index) % self.capacity()),
            _ => None,
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slot_of(index).and_then(|slot| self.slots[slot].as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slot_of(index).and_then(|slot| self.slots[slot].as_mut())
    }

    /// Returns `true` if `slot` lies in the live region of the buffer.
    #[must_use]
    pub fn in_bounds(&self, slot: usize) -> bool {
        match (self.begin, self.last) {
            (Some(begin), Some(last)) if begin <= last => begin <= slot && slot <= last,
            (Some(begin), Some(last)) => (begin <= slot && slot < self.capacity()) || slot <= last,
            _ => false,
        }
    }

    #[must_use]
    pub fn begin(&self) -> Cursor {
        self.cursor(self.begin)
    }

    #[must_use]
    pub fn end(&self) -> Cursor {
        self.cursor(None)
    }

    #[must_use]
    pub fn last(&self) -> Cursor {
        self.cursor(self.last)
    }

    /// Moves the cursor one element towards the back.
    pub fn move_next(&self, cursor: Cursor) -> Result<Cursor, CursorError> {
        self.check(cursor)?;

        let next = match cursor.slot {
            None => self.begin,
            Some(slot) if cursor.slot == self.last => {
                debug_assert!(self.in_bounds(slot));
                None
            }
            Some(slot) => Some(wrapping_next(slot, self.capacity())),
        };

        Ok(self.cursor(next))
    }

    /// Moves the cursor one element towards the front.
    pub fn move_prev(&self, cursor: Cursor) -> Result<Cursor, CursorError> {
        self.check(cursor)?;

        let prev = match cursor.slot {
            None => self.last,
            Some(slot) if cursor.slot == self.begin => {
                debug_assert!(self.in_bounds(slot));
                None
            }
            Some(slot) => Some(wrapping_prev(slot, self.capacity())),
        };

        Ok(self.cursor(prev))
    }

    pub fn get_at(&self, cursor: Cursor) -> Result<&T, CursorError> {
        let slot = self.check_element(cursor)?;

        self.slots[slot].as_ref().ok_or(CursorError::Stale)
    }

    pub fn get_at_mut(&mut self, cursor: Cursor) -> Result<&mut T, CursorError> {
        let slot = self.check_element(cursor)?;

        self.slots[slot].as_mut().ok_or(CursorError::Stale)
    }

    /// Logical position of the element under the cursor, counted from the front.
    pub fn index_of(&self, cursor: Cursor) -> Result<usize, CursorError> {
        let slot = self.check_element(cursor)?;
        let begin = self.begin.ok_or(CursorError::Stale)?;

        Ok((slot + self.capacity() - begin) % self.capacity())
    }

    fn cursor(&self, slot: Option<usize>) -> Cursor {
        Cursor { owner: self.owner, slot, generation: self.generation }
    }

    fn check(&self, cursor: Cursor) -> Result<(), CursorError> {
        if cursor.owner != self.owner || cursor.generation != self.generation {
            return Err(CursorError::Stale);
        }

        match cursor.slot {
            Some(slot) if !self.in_bounds(slot) => Err(CursorError::Stale),
            _ => Ok(()),
        }
    }

    fn check_element(&self, cursor: Cursor) -> Result<usize, CursorError> {
        self.check(cursor)?;

        cursor.slot.ok_or(CursorError::End)
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { deque: self, front: 0, back: self.size }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        match (self.begin, self.last) {
            (Some(begin), Some(last)) if begin <= last => IterMut {
                head: self.slots[begin..=last].iter_mut(),
                tail: std::slice::IterMut::default(),
            },
            (Some(begin), Some(last)) => {
                let (wrapped, head) = self.slots.split_at_mut(begin);

                IterMut { head: head.iter_mut(), tail: wrapped[..=last].iter_mut() }
            }
            _ => IterMut {
                head: std::slice::IterMut::default(),
                tail: std::slice::IterMut::default(),
            },
        }
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Deque<T> {
        Deque::new()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Deque<T> {
        Deque {
            slots: self.slots.clone(),
            size: self.size,
            begin: self.begin,
            last: self.last,
            owner: OwnerId::fresh(),
            generation: self.generation,
        }
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(v) => v,
            None => panic!("index out of bounds: the size is {} but the index is {}", self.size, index),
        }
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let size = self.size;

        match self.get_mut(index) {
            Some(v) => v,
            None => panic!("index out of bounds: the size is {size} but the index is {index}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Deque<T>) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    fn partial_cmp(&self, other: &Deque<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for Deque<T> {
    fn cmp(&self, other: &Deque<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for Deque<T> {
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

impl<T: Display> Display for Deque<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        fmt.write_str("Deque(")?;

        for v in self {
            if !first {
                fmt.write_str(", ")?;
            }
            v.fmt(fmt)?;
            first = false;
        }

        fmt.write_str(")")
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();

        self.reserve(iter.size_hint().0);

        for v in iter {
            self.push_back(v);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(into_iter: I) -> Deque<T> {
        let mut deque = Deque::new();

        deque.extend(into_iter);

        deque
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { deque: self }
    }
}

/// Front-to-back iterator over the elements of a [`Deque`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    front: usize,
    back: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { deque: self.deque, front: self.front, back: self.back }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }

        let v = self.deque.get(self.front);

        self.front += 1;

        v
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;

        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;

        self.deque.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Front-to-back iterator over mutable references to the elements of a [`Deque`].
#[derive(Debug)]
pub struct IterMut<'a, T> {
    head: std::slice::IterMut<'a, Option<T>>,
    tail: std::slice::IterMut<'a, Option<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.head.next().or_else(|| self.tail.next()).and_then(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.head.len() + self.tail.len();

        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.tail.next_back().or_else(|| self.head.next_back()).and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning front-to-back iterator over the elements of a [`Deque`].
#[derive(Debug)]
pub struct IntoIter<T> {
    deque: Deque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.size(), Some(self.deque.size()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
