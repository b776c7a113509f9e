//! Doubly linked list backed by an [`Arena`].
//!
//! Nodes live in the arena and link to their neighbors by [`SlotId`], so the
//! list has stable handles and O(1) splice/move operations with no raw
//! pointers and no sentinel allocations:
//!
//! ```text
//!   head ─► [id_2] ◄──► [id_0] ◄──► [id_1] ◄── tail
//!           front                    back
//! ```
//!
//! For LRU use the front is the most-recently-used position and the back is
//! the eviction end. `debug_validate()` checks chain consistency in
//! debug/test builds.

use crate::ds::arena::{Arena, SlotId};
use crate::error::InvariantError;

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Arena-backed doubly linked list with `SlotId` handles.
#[derive(Debug)]
pub struct RecencyList<T> {
    arena: Arena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> RecencyList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Inserts a new node at the front and returns its handle.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => {
                if let Some(node) = self.arena.get_mut(head) {
                    node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        id
    }

    /// Inserts a new node at the back and returns its handle.
    pub fn push_back(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => {
                if let Some(node) = self.arena.get_mut(tail) {
                    node.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Removes and returns the front value.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.head?;
        self.remove(id)
    }

    /// Removes and returns the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Removes the node `id` from the list and returns its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Moves an existing node to the front; returns `false` if `id` is gone.
    ///
    /// Moving the node that is already at the front is a state no-op.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if Some(id) == self.head {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Unlinks `id` from its neighbors without freeing its slot.
    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        match prev {
            Some(prev_id) => {
                if let Some(node) = self.arena.get_mut(prev_id) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(next_id) => {
                if let Some(node) = self.arena.get_mut(next_id) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }
        Some(())
    }

    /// Relinks a detached node at the front.
    fn attach_front(&mut self, id: SlotId) {
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = self.head;
        }
        match self.head {
            Some(head) => {
                if let Some(node) = self.arena.get_mut(head) {
                    node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    /// Iterates values front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Verifies chain consistency: every `next` link has a matching `prev`
    /// link, the walk from head visits exactly `len()` nodes, and the last
    /// visited node is the tail.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.arena.is_empty() {
            if self.head.is_some() || self.tail.is_some() {
                return Err(InvariantError::new("empty list has head or tail set"));
            }
            return Ok(());
        }

        let mut count = 0usize;
        let mut prev: Option<SlotId> = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new("list links to a freed slot"))?;
            if node.prev != prev {
                return Err(InvariantError::new("prev link does not match walk order"));
            }
            count += 1;
            if count > self.arena.len() {
                return Err(InvariantError::new("cycle detected in list"));
            }
            prev = current;
            current = node.next;
        }

        if count != self.arena.len() {
            return Err(InvariantError::new(format!(
                "walk visited {} nodes, arena holds {}",
                count,
                self.arena.len()
            )));
        }
        if prev != self.tail {
            return Err(InvariantError::new("tail does not match last walked node"));
        }
        Ok(())
    }

    /// Panics on a broken chain in debug/test builds; no-op in release.
    pub fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        if let Err(err) = self.check_invariants() {
            panic!("recency list invariant violated: {err}");
        }
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back iterator over list values.
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}
