//! Positional singly-linked list.
//!
//! Nodes are heap allocated with `Box` and linked through `NonNull`
//! pointers. The list keeps a pointer to its tail so appends are O(1);
//! anything that needs a predecessor walks from the head.

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::{debug, warn};

use crate::error::ListError;

/// Sentinel rendered for a list with no elements.
pub const EMPTY_LIST: &str = "The list is empty.";

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Moves `value` onto the heap and hands back an owning pointer.
    /// The pointer must eventually be released with `Box::from_raw`.
    fn alloc(value: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }
}

pub struct PositionalList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

// SAFETY: the list owns its nodes exactly like a `Box<Node<T>>` chain would.
unsafe impl<T: Send> Send for PositionalList<T> {}
unsafe impl<T: Sync> Sync for PositionalList<T> {}

// =============================================================================
// Milestone 1: Head and tail operations
// =============================================================================

impl<T> PositionalList<T> {
    pub fn new() -> Self {
        PositionalList {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert_first(&mut self, value: T) {
        let node = Node::alloc(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub fn insert_last(&mut self, value: T) {
        let node = Node::alloc(value, None);
        match self.tail {
            // SAFETY: `tail` is a live node owned by this list.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Unlinks the head and returns its value.
    ///
    /// An empty list is reported as [`ListError::EmptyCollection`] and left
    /// untouched.
    pub fn remove_first(&mut self) -> Result<T, ListError> {
        let Some(head) = self.head else {
            warn!("remove_first: the list was already empty");
            return Err(ListError::EmptyCollection);
        };

        // SAFETY: `head` came from `Node::alloc` and is unlinked right here,
        // so it is released exactly once.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Unlinks the tail and returns its value.
    ///
    /// Without back links the new tail has to be found by walking from the
    /// head, so this is O(n) unless the list holds a single node.
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            warn!("remove_last: the list was already empty");
            return Err(ListError::EmptyCollection);
        }
        self.try_remove_at_offset(self.len)
    }

    pub fn first(&self) -> Result<&T, ListError> {
        self.head
            // SAFETY: `head` is a live node; the borrow is tied to `&self`.
            .map(|head| unsafe { &(*head.as_ptr()).value })
            .ok_or(ListError::EmptyCollection)
    }

    pub fn last(&self) -> Result<&T, ListError> {
        self.tail
            // SAFETY: `tail` is a live node; the borrow is tied to `&self`.
            .map(|tail| unsafe { &(*tail.as_ptr()).value })
            .ok_or(ListError::EmptyCollection)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _list: PhantomData,
        }
    }
}

// =============================================================================
// Milestone 2: Positional access and mutation (1-indexed offsets)
// =============================================================================

impl<T> PositionalList<T> {
    /// Returns the element at `offset`, counting the head as 1.
    pub fn element_at_offset(&self, offset: usize) -> Result<&T, ListError> {
        if offset == 0 {
            return Err(self.unavailable(offset));
        }
        self.iter()
            .nth(offset - 1)
            .ok_or(ListError::EmptyCollection)
    }

    /// Splices `value` in so that it ends up at `offset`.
    ///
    /// Does nothing when the list has fewer than `offset - 1` elements.
    pub fn insert_at_offset(&mut self, offset: usize, value: T) {
        skip_unavailable("insert_at_offset", self.try_insert_at_offset(offset, value));
    }

    /// Removes the element at `offset`; does nothing if it does not exist.
    pub fn remove_at_offset(&mut self, offset: usize) {
        skip_unavailable("remove_at_offset", self.try_remove_at_offset(offset));
    }

    /// Swaps the nodes at `offset` and `offset + 1` by relinking them; the
    /// element values never move. Does nothing if either node is missing.
    pub fn swap_adjacent_at_offsets(&mut self, offset: usize) {
        skip_unavailable(
            "swap_adjacent_at_offsets",
            self.try_swap_adjacent_at_offsets(offset),
        );
    }

    pub fn try_insert_at_offset(&mut self, offset: usize, value: T) -> Result<(), ListError> {
        let Some((_, link)) = self.link_to(offset) else {
            return Err(self.unavailable(offset));
        };

        // SAFETY: `link` points at `self.head` or at the `next` field of a
        // live node, and nothing else borrows it.
        unsafe {
            let node = Node::alloc(value, *link.as_ptr());
            *link.as_ptr() = Some(node);
            if (*node.as_ptr()).next.is_none() {
                self.tail = Some(node);
            }
        }
        self.len += 1;
        Ok(())
    }

    pub fn try_remove_at_offset(&mut self, offset: usize) -> Result<T, ListError> {
        let Some((prev, link)) = self.link_to(offset) else {
            return Err(self.unavailable(offset));
        };
        // SAFETY: see `try_insert_at_offset`.
        let Some(target) = (unsafe { *link.as_ptr() }) else {
            return Err(self.unavailable(offset));
        };

        // SAFETY: `target` is owned by `link` and is detached from it before
        // anything else can observe it, so it is released exactly once.
        let node = unsafe {
            let node = Box::from_raw(target.as_ptr());
            *link.as_ptr() = node.next;
            node
        };
        if node.next.is_none() {
            self.tail = prev;
        }
        self.len -= 1;
        Ok(node.value)
    }

    pub fn try_swap_adjacent_at_offsets(&mut self, offset: usize) -> Result<(), ListError> {
        let Some((_, link)) = self.link_to(offset) else {
            return Err(self.unavailable(offset));
        };

        // SAFETY: `link`, `first` and `second` all refer to storage owned by
        // this list; only `next` pointers are rewritten.
        unsafe {
            let Some(first) = *link.as_ptr() else {
                return Err(self.unavailable(offset));
            };
            let Some(second) = (*first.as_ptr()).next else {
                return Err(self.unavailable(offset));
            };

            let after = (*second.as_ptr()).next;
            *link.as_ptr() = Some(second);
            (*second.as_ptr()).next = Some(first);
            (*first.as_ptr()).next = after;
            if after.is_none() {
                self.tail = Some(first);
            }
        }
        Ok(())
    }

    /// Walks to the link that owns the node at `offset`.
    ///
    /// Offset 1 resolves to `head`; offset `k` resolves to the `next` field
    /// of node `k - 1`, which is also returned as the predecessor. `None`
    /// when `offset` is 0 or the predecessor does not exist.
    fn link_to(&mut self, offset: usize) -> Option<(Link<T>, NonNull<Link<T>>)> {
        if offset == 0 || offset - 1 > self.len {
            return None;
        }

        let mut prev: Link<T> = None;
        let mut link = NonNull::from(&mut self.head);
        for _ in 1..offset {
            // SAFETY: `link` always points at `self.head` or at the `next`
            // field of a live node.
            let node = unsafe { *link.as_ptr() }?;
            prev = Some(node);
            link = unsafe { NonNull::from(&mut (*node.as_ptr()).next) };
        }
        Some((prev, link))
    }

    fn unavailable(&self, offset: usize) -> ListError {
        ListError::PositionUnavailable {
            offset,
            len: self.len,
        }
    }
}

fn skip_unavailable<R>(operation: &str, result: Result<R, ListError>) {
    if let Err(err) = result {
        debug!(operation, %err, "positional mutation skipped");
    }
}

// =============================================================================
// Milestone 3: Fixed offsets of the fifth-element exercise
// =============================================================================

impl<T> PositionalList<T> {
    pub fn fifth_element(&self) -> Result<&T, ListError> {
        self.element_at_offset(5)
    }

    pub fn insert_new_fifth_element(&mut self, value: T) {
        self.insert_at_offset(5, value);
    }

    pub fn delete_fifth_element(&mut self) {
        self.remove_at_offset(5);
    }

    pub fn swap_fourth_and_fifth_element(&mut self) {
        self.swap_adjacent_at_offsets(4);
    }
}

// =============================================================================
// Milestone 4: Rendering, iteration and teardown
// =============================================================================

impl<T: fmt::Display> PositionalList<T> {
    /// Space separated elements, or [`EMPTY_LIST`].
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for PositionalList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        let Some(first) = values.next() else {
            return f.write_str(EMPTY_LIST);
        };
        write!(f, "{first}")?;
        for value in values {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for PositionalList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for PositionalList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        self.tail = None;
        while let Some(node) = current {
            // SAFETY: each node is reachable from exactly one link, and that
            // link is consumed here, so every node is freed once.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            current = node.next;
        }
        self.len = 0;
    }
}

impl<T> FromIterator<T> for PositionalList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for PositionalList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_last(value);
        }
    }
}

pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _list: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: the list outlives `'a` and cannot be mutated while this
        // shared borrow is alive.
        let node = unsafe { &*node.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
