use super::atom::Record;
use super::ids::{RecordId, RecordSlot};
use super::linked::{AllocationError, LinkedNodes};

/// An ordered, singly-linked list of atom records.
///
/// The list exclusively owns its nodes. Record handles ([`RecordId`]) resolve
/// only in the list that issued them; a clone or a selection copy issues its
/// own handles. A range is expressed as a
/// `start` handle (inclusive) and an optional `stop` handle (exclusive), which
/// is how a single residue is usually delimited.
#[derive(Debug, Clone, Default)]
pub struct RecordList {
    nodes: LinkedNodes<RecordSlot, Record>,
}

impl RecordList {
    /// Creates an empty, unbounded list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list that refuses to grow beyond `limit` records.
    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            nodes: LinkedNodes::with_node_limit(limit),
        }
    }

    /// Builds a list from `records`, optionally bounded.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the records do not fit under `node_limit`.
    /// The partially built list is released before returning.
    pub fn from_records<I>(records: I, node_limit: Option<usize>) -> Result<Self, AllocationError>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut list = match node_limit {
            Some(limit) => Self::with_node_limit(limit),
            None => Self::new(),
        };
        for record in records {
            list.try_push_back(record)?;
        }
        Ok(list)
    }

    pub fn node_limit(&self) -> Option<usize> {
        self.nodes.node_limit()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handle of the first record, `None` for an empty list.
    pub fn head(&self) -> Option<RecordId> {
        self.nodes.head()
    }

    pub fn tail(&self) -> Option<RecordId> {
        self.nodes.tail()
    }

    /// True if `id` belongs to this list and its record is still live.
    pub fn contains(&self, id: RecordId) -> bool {
        self.nodes.contains(id)
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut Record> {
        self.nodes.get_mut(id)
    }

    /// Handle of the record following `id`.
    pub fn next(&self, id: RecordId) -> Option<RecordId> {
        self.nodes.next(id)
    }

    /// Appends a record at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::NodeLimit`] if the list is bounded and full.
    pub fn try_push_back(&mut self, record: Record) -> Result<RecordId, AllocationError> {
        self.nodes.try_push_back(record)
    }

    /// Releases every record.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Returns an iterator over all records in list order.
    ///
    /// # Return
    ///
    /// An iterator yielding `(RecordId, &Record)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Record)> {
        self.nodes.iter()
    }

    /// Returns an iterator over all records in list order, without handles.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.nodes.iter().map(|(_, record)| record)
    }

    /// Returns an iterator from `start` (inclusive) to `stop` (exclusive).
    ///
    /// # Arguments
    ///
    /// * `start` - First record of the range. `None`, or a handle this list
    ///   does not own, yields an empty range.
    /// * `stop` - First record past the range. `None`, or a handle this list
    ///   does not own, runs to the end of the list.
    pub fn range(
        &self,
        start: Option<RecordId>,
        stop: Option<RecordId>,
    ) -> impl Iterator<Item = (RecordId, &Record)> {
        self.nodes.range(start, stop)
    }

    /// Splits the list into consecutive residue ranges.
    ///
    /// Each item is a `(start, stop)` pair suitable for [`RecordList::range`]:
    /// `start` is the first record of a residue and `stop` the first record of
    /// the next one, or `None` for the last residue.
    pub fn residue_ranges(&self) -> impl Iterator<Item = (RecordId, Option<RecordId>)> + '_ {
        let mut cursor = self.head();
        std::iter::from_fn(move || {
            let start = cursor?;
            let first = self.get(start)?;
            let mut stop = self.next(start);
            while let Some(id) = stop {
                match self.get(id) {
                    Some(record) if record.same_residue(first) => stop = self.next(id),
                    _ => break,
                }
            }
            cursor = stop;
            Some((start, stop))
        })
    }
}

impl PartialEq for RecordList {
    /// Two lists are equal when they hold equal records in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.records().eq(other.records())
    }
}

impl FromIterator<Record> for RecordList {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut list = Self::new();
        for record in iter {
            list.nodes.link_back(record);
        }
        list
    }
}
