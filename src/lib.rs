/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![cfg_attr(feature = "fatal-warnings", deny(warnings))]

//! # Containers
//!
//! Mutable ordered and sequential containers with cursor-based traversal.
//!
//! # Data Structures
//!
//! This crate implements the following data structures:
//!
//!   1. [`RedBlackTreeMap`](#redblacktreemap)
//!   2. [`RedBlackTreeSet`](#redblacktreeset)
//!   3. [`Deque`](#deque)
//!
//! The map and the set are both backed by [`RedBlackTree`], an arena-allocated red-black tree.
//!
//! ## `RedBlackTreeMap`
//!
//! An ordered map with unique keys.
//!
//! ### Example
//!
//! ```rust
//! use containers::RedBlackTreeMap;
//!
//! let mut map = RedBlackTreeMap::new();
//!
//! map.insert(0, "zero");
//! map.insert(1, "one");
//!
//! assert_eq!(map.get(&1), Some(&"one"));
//! assert_eq!(map.insert(1, "uno"), Some("one"));
//!
//! let mut cursor = map.begin();
//!
//! while !cursor.is_end() {
//!     let (key, value) = map.entry_at(cursor).unwrap();
//!
//!     println!("{key}: {value}");
//!
//!     cursor = map.move_next(cursor).unwrap();
//! }
//!
//! assert_eq!(map.erase(&0), Some("zero"));
//! assert_eq!(map.size(), 1);
//! ```
//!
//! ## `RedBlackTreeSet`
//!
//! An ordered set.
//!
//! ### Example
//!
//! ```rust
//! use containers::RedBlackTreeSet;
//!
//! let mut set = RedBlackTreeSet::new();
//!
//! assert!(set.insert("zero"));
//! assert!(!set.insert("zero"));
//! assert!(set.insert("one"));
//!
//! assert_eq!(set.first_value(), Some(&"one"));
//! assert!(set.contains("zero"));
//!
//! assert!(set.erase("zero"));
//! assert!(!set.contains("zero"));
//! ```
//!
//! ## `Deque`
//!
//! A double-ended queue stored in a ring buffer that doubles its capacity when full.
//!
//! ### Example
//!
//! ```rust
//! use containers::{CursorError, Deque};
//!
//! let mut deque = Deque::with_capacity(2);
//!
//! deque.push_back(1);
//! deque.push_back(2);
//!
//! let cursor = deque.begin();
//!
//! deque.push_back(3);
//!
//! assert_eq!(deque.capacity(), 4);
//! assert_eq!(deque.get_at(cursor), Err(CursorError::Stale));
//!
//! assert_eq!(deque.pop_front(), Some(1));
//! assert_eq!(deque.front(), Some(&2));
//! ```
//!
//! # Cursors
//!
//! Positions in a container are [`Copy`] cursors that do not borrow the container.  Each
//! container remembers a generation that changes on every structural modification, and a cursor
//! created before the change is rejected with [`CursorError::Stale`] instead of reading the
//! wrong element.

pub mod error;
pub mod map;
mod owner;
pub mod sequence;
pub mod set;
pub mod tree;

#[cfg(test)]
mod utils;

pub use error::{AllocError, CursorError};
pub use map::red_black_tree_map::RedBlackTreeMap;
pub use sequence::deque::Deque;
pub use set::red_black_tree_set::RedBlackTreeSet;
pub use tree::RedBlackTree;
