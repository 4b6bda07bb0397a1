//! This crate provides a doubly-linked list with owned nodes, anchored by a
//! self-linked sentinel node.
//!
//! The [`List`] inserts and removes elements at any known position in
//! constant time. In compromise, reaching a position by index takes
//! *O*(*n*) time.
//!
//! A quick example:
//!
//! ```
//! use anchored_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! list.push_front(0);
//! assert_eq!(list.front(), Some(&0));
//!
//! let mut cursor = list.cursor_mut(3);
//! assert_eq!(cursor.remove(), Some(3)); // [0, 1, 2, 4]
//!
//! assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 4]);
//! ```
//!
//! # Memory Layout
//!
//! The chain is circular and closed by a single sentinel node:
//!
//! ```text
//!          ┌────────────────────────────────────────────────────────┐
//!          ↓                                          Sentinel      │
//!    ╔═══════════╗          ╔═══════════╗           ┌───────────┐   │
//!    ║   next    ║ ───────→ ║   next    ║ ─→ ┄┄ ──→ │   next    │ ──┘
//!    ╟───────────╢          ╟───────────╢           ├───────────┤
//! ┌─ ║   prev    ║ ←─────── ║   prev    ║ ←─ ┄┄ ←── │   prev    │
//! │  ╟───────────╢          ╟───────────╢           ├───────────┤
//! │  ║  value T  ║          ║  value T  ║           │   count   │
//! │  ╚═══════════╝          ╚═══════════╝           └───────────┘
//! │     Node 0                 Node 1                   ↑   ↑
//! └─────────────────────────────────────────────────────┘   │
//!                                     ╔════════╗            │
//!                                     ║ anchor ║ ───────────┘
//!                                     ╚════════╝
//!                                       List
//! ```
//!
//! The `List` owns the sentinel as its only always-present allocation, and
//! through the `next` chain it owns every value node transitively. The
//! sentinel's payload is the element count; the value nodes' payload is one
//! element each.
//!
//! In an empty list the sentinel's `next` and `prev` point at the sentinel
//! itself, so the structure has no null case. As elements arrive,
//! `sentinel.next` leads to the first element and `sentinel.prev` to the
//! last. In a list of length *n* the value nodes are indexed 0, 1, ...,
//! *n* - 1 and the sentinel sits at index *n*.
//!
//! Every `next` link is an exclusive-ownership edge: exactly one link in the
//! whole structure reaches any given node forward, and unlinking a node from
//! that edge is the one thing that frees it. Teardown therefore never
//! recurses through the chain: [`List::clear`] (also used by `Drop`)
//! releases the nodes one at a time in a loop, so dropping a list of any
//! length needs only constant stack.
//!
//! # Iteration
//!
//! [`Iter`] and [`IterMut`] are double-ended, exact-size, fused iterators
//! over the elements, driven like any other Rust iterator:
//!
//! ```
//! use anchored_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! [`Cursor`] and [`CursorMut`] are positions in the chain that move freely
//! in both directions, including onto the sentinel ("one past the end",
//! where [`Cursor::current`] returns `None`). [`CursorMut`] edits the list
//! at its position in constant time:
//!
//! ```
//! use anchored_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 4]);
//!
//! let mut cursor = list.cursor_mut(2);
//! cursor.insert(3);                        // [1, 2, 3, 4]
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(cursor.backspace(), Some(3)); // [1, 2, 4]
//! assert_eq!(cursor.remove(), Some(4));    // [1, 2]
//!
//! assert_eq!(Vec::from_iter(list), vec![1, 2]);
//! ```
//!
//! Positions are invalidated exactly when the node they name is removed or
//! the list is dropped; the borrow checker turns any use after that into a
//! compile error, so the invalidation contract cannot be violated at
//! runtime.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::Cursor
//! [`CursorMut`]: crate::CursorMut

#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::errors::ListError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod experiments;
