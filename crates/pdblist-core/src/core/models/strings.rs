use super::ids::{StringId, StringSlot};
use super::linked::{AllocationError, LinkedNodes};

/// An ordered, singly-linked list of owned strings.
///
/// Duplicates are allowed; [`StringList::store_unique`] is the lookup-based
/// way to avoid them.
#[derive(Debug, Clone, Default)]
pub struct StringList {
    nodes: LinkedNodes<StringSlot, String>,
}

impl StringList {
    /// Creates an empty, unbounded list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list that holds at most `limit` strings.
    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            nodes: LinkedNodes::with_node_limit(limit),
        }
    }

    /// Number of stored strings, duplicates included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a copy of `value` at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::StringStorage`] if the copy cannot be
    /// allocated, or [`AllocationError::NodeLimit`] if the list is full.
    pub fn store(&mut self, value: &str) -> Result<StringId, AllocationError> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(value.len())
            .map_err(|_| AllocationError::StringStorage {
                requested: value.len(),
            })?;
        owned.push_str(value);
        self.nodes.try_push_back(owned)
    }

    /// Appends a copy of `value` unless an equal string is already stored.
    ///
    /// Returns `true` when the string was stored.
    ///
    /// # Errors
    ///
    /// Same as [`StringList::store`].
    pub fn store_unique(&mut self, value: &str) -> Result<bool, AllocationError> {
        if self.contains(value) {
            return Ok(false);
        }
        self.store(value)?;
        Ok(true)
    }

    /// Case-sensitive, whole-string membership test.
    pub fn contains(&self, value: &str) -> bool {
        self.iter().any(|stored| stored == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|(_, value)| value.as_str())
    }

    /// Releases every node together with its string.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
