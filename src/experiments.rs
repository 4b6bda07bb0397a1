//! A study of the same chain built without raw pointers: every node is
//! shared between exactly two owners via `StaticRc` halves, and `GhostCell`
//! brands all cells with one token so that borrows are checked at compile
//! time. There is no sentinel here; the two list ends each hold one half of
//! their boundary node, which plays the role the sentinel's self-links play
//! in [`crate::List`].
//!
//! Kept private: the token threading makes the API too awkward to expose,
//! but the module documents what the compile-time-checked design costs.
#![allow(dead_code)]

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;

type Link<'id, T> = StaticRc<GhostCell<'id, Knot<'id, T>>, 1, 2>;
type FullLink<'id, T> = StaticRc<GhostCell<'id, Knot<'id, T>>, 2, 2>;

/// A chain node. One half of it lives in the predecessor's `next` (or in
/// `TokenList::head`), the other in the successor's `prev` (or in
/// `TokenList::tail`).
struct Knot<'id, T> {
    next: Option<Link<'id, T>>,
    prev: Option<Link<'id, T>>,
    value: T,
}

impl<'id, T> Knot<'id, T> {
    fn new(value: T) -> Self {
        Self {
            next: None,
            prev: None,
            value,
        }
    }
}

pub struct TokenList<'id, T> {
    head: Option<Link<'id, T>>,
    tail: Option<Link<'id, T>>,
    len: usize,
}

impl<'id, T> Default for TokenList<'id, T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<'id, T> TokenList<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, value: T, token: &mut GhostToken<'id>) {
        let (left, right) = FullLink::split(FullLink::new(GhostCell::new(Knot::new(value))));
        match self.head.take() {
            Some(old_head) => {
                old_head.borrow_mut(token).prev = Some(left);
                right.borrow_mut(token).next = Some(old_head);
                self.head = Some(right);
            }
            None => {
                self.head = Some(left);
                self.tail = Some(right);
            }
        }
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T, token: &mut GhostToken<'id>) {
        let (left, right) = FullLink::split(FullLink::new(GhostCell::new(Knot::new(value))));
        match self.tail.take() {
            Some(old_tail) => {
                old_tail.borrow_mut(token).next = Some(left);
                right.borrow_mut(token).prev = Some(old_tail);
                self.tail = Some(right);
            }
            None => {
                self.head = Some(left);
                self.tail = Some(right);
            }
        }
        self.len += 1;
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let front = self.head.take()?;
        let other = match front.borrow_mut(token).next.take() {
            Some(second) => {
                // The second node's `prev` holds the front node's other half.
                let other = second.borrow_mut(token).prev.take().unwrap();
                self.head = Some(second);
                other
            }
            None => self.tail.take().unwrap(),
        };
        self.len -= 1;
        Some(StaticRc::into_box(FullLink::join(front, other)).into_inner().value)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let back = self.tail.take()?;
        let other = match back.borrow_mut(token).prev.take() {
            Some(previous) => {
                // The previous node's `next` holds the back node's other half.
                let other = previous.borrow_mut(token).next.take().unwrap();
                self.tail = Some(previous);
                other
            }
            None => self.head.take().unwrap(),
        };
        self.len -= 1;
        Some(StaticRc::into_box(FullLink::join(back, other)).into_inner().value)
    }

    /// Release every node. Must be called before the token goes out of
    /// scope; a non-empty `TokenList` leaks its halves on drop.
    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_front(token).is_some() {}
    }
}
