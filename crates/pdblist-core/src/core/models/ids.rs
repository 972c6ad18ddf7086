use super::linked::NodeId;
use slotmap::new_key_type;

new_key_type! {
    /// Arena slot of a record node.
    pub struct RecordSlot;
    /// Arena slot of a string node.
    pub struct StringSlot;
}

/// Handle of a record, valid only for the [`RecordList`](super::records::RecordList) that issued it.
pub type RecordId = NodeId<RecordSlot>;
/// Handle of a stored string, valid only for the [`StringList`](super::strings::StringList) that issued it.
pub type StringId = NodeId<StringSlot>;
