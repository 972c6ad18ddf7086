//! Singly-linked node chain shared by [`RecordList`](super::records::RecordList)
//! and [`StringList`](super::strings::StringList).
//!
//! Every chain owns a private `slotmap` arena. Nodes are linked head to tail
//! through their `next` handle, and the tail has no successor. Dropping the
//! chain releases every node it owns; nothing is ever shared between chains.
//!
//! Handles ([`NodeId`]) carry the identity of the chain that issued them. A
//! chain resolves only its own handles: a handle from any other chain,
//! including a clone, behaves like a released one.
//!
//! A chain may carry a node limit. Appending past the limit fails with
//! [`AllocationError::NodeLimit`] and leaves the chain untouched, which is how
//! callers model (and test) allocator exhaustion.

use slotmap::{Key, SlotMap};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

static NEXT_OWNER: AtomicU64 = AtomicU64::new(0);

fn next_owner() -> u64 {
    NEXT_OWNER.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// The chain already holds as many nodes as its limit allows.
    #[error("Node limit of {limit} reached")]
    NodeLimit { limit: usize },
    /// The allocator could not provide storage for a string copy.
    #[error("Failed to allocate {requested} bytes of string storage")]
    StringStorage { requested: usize },
}

/// Handle of one node, valid only for the chain that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId<K> {
    owner: u64,
    key: K,
}

#[derive(Debug, Clone)]
struct Node<K, T> {
    value: T,
    next: Option<K>,
}

#[derive(Debug)]
pub struct LinkedNodes<K: Key, T> {
    owner: u64,
    nodes: SlotMap<K, Node<K, T>>,
    head: Option<K>,
    tail: Option<K>,
    limit: Option<usize>,
}

impl<K: Key, T> Default for LinkedNodes<K, T> {
    fn default() -> Self {
        Self {
            owner: next_owner(),
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
            limit: None,
        }
    }
}

impl<K: Key, T: Clone> Clone for LinkedNodes<K, T> {
    /// Deep copy under a fresh identity; handles of `self` do not resolve in
    /// the clone.
    fn clone(&self) -> Self {
        Self {
            owner: next_owner(),
            nodes: self.nodes.clone(),
            head: self.head,
            tail: self.tail,
            limit: self.limit,
        }
    }
}

impl<K: Key, T> LinkedNodes<K, T> {
    /// Creates an empty, unbounded chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty chain that holds at most `limit` nodes.
    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn node_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Number of nodes currently in the chain.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Handle of the first node, `None` for an empty chain.
    pub fn head(&self) -> Option<NodeId<K>> {
        self.head.map(|key| self.handle(key))
    }

    /// Handle of the last node, `None` for an empty chain.
    pub fn tail(&self) -> Option<NodeId<K>> {
        self.tail.map(|key| self.handle(key))
    }

    /// True if `id` was issued by this chain and its node is still live.
    pub fn contains(&self, id: NodeId<K>) -> bool {
        self.slot(id).is_some_and(|key| self.nodes.contains_key(key))
    }

    /// Value stored at `id`, or `None` for a released or foreign handle.
    pub fn get(&self, id: NodeId<K>) -> Option<&T> {
        let key = self.slot(id)?;
        self.nodes.get(key).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: NodeId<K>) -> Option<&mut T> {
        let key = self.slot(id)?;
        self.nodes.get_mut(key).map(|node| &mut node.value)
    }

    /// Successor of `id`, or `None` at the tail or for a foreign handle.
    pub fn next(&self, id: NodeId<K>) -> Option<NodeId<K>> {
        let key = self.slot(id)?;
        let next = self.nodes.get(key)?.next?;
        Some(self.handle(next))
    }

    /// Appends `value` at the tail, honouring the node limit.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::NodeLimit`] when the chain is full. The chain
    /// is unchanged and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<NodeId<K>, AllocationError> {
        if let Some(limit) = self.limit
            && self.nodes.len() >= limit
        {
            return Err(AllocationError::NodeLimit { limit });
        }
        Ok(self.link_back(value))
    }

    /// Appends without checking the limit. Only for chains built without one.
    pub(super) fn link_back(&mut self, value: T) -> NodeId<K> {
        let key = self.nodes.insert(Node { value, next: None });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.handle(key)
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates the whole chain from the head.
    pub fn iter(&self) -> Iter<'_, K, T> {
        self.range(self.head(), None)
    }

    /// Iterates from `start` (inclusive) up to `stop` (exclusive).
    ///
    /// An absent or foreign `start` gives an empty range; an absent or foreign
    /// `stop` runs to the tail.
    pub fn range(&self, start: Option<NodeId<K>>, stop: Option<NodeId<K>>) -> Iter<'_, K, T> {
        Iter {
            owner: self.owner,
            nodes: &self.nodes,
            cursor: start.and_then(|id| self.slot(id)),
            stop: stop.and_then(|id| self.slot(id)),
        }
    }

    fn slot(&self, id: NodeId<K>) -> Option<K> {
        (id.owner == self.owner).then_some(id.key)
    }

    fn handle(&self, key: K) -> NodeId<K> {
        NodeId {
            owner: self.owner,
            key,
        }
    }
}

pub struct Iter<'a, K: Key, T> {
    owner: u64,
    nodes: &'a SlotMap<K, Node<K, T>>,
    cursor: Option<K>,
    stop: Option<K>,
}

impl<'a, K: Key, T> Iterator for Iter<'a, K, T> {
    type Item = (NodeId<K>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        if self.stop == Some(key) {
            self.cursor = None;
            return None;
        }
        let node = self.nodes.get(key)?;
        self.cursor = node.next;
        let id = NodeId {
            owner: self.owner,
            key,
        };
        Some((id, &node.value))
    }
}
