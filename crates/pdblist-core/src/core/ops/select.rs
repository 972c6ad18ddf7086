use crate::core::config::SelectionConfig;
use crate::core::models::atom::{AtomName, Record};
use crate::core::models::linked::AllocationError;
use crate::core::models::records::RecordList;
use tracing::{debug, instrument, warn};

/// Copies every record whose atom name matches one of `selection`.
///
/// The source list is only read. The returned list owns fresh copies of the
/// matching records, in source order, each copied at most once however many
/// tokens it matches. An empty selection yields an empty list.
///
/// # Return
///
/// The new list and the number of records copied.
///
/// # Errors
///
/// Propagates [`AllocationError`] from the output list. Nothing allocated for
/// the output survives the failure.
#[instrument(skip_all, fields(source_len = source.len(), selection_len = selection.len()))]
pub fn select_atoms_as_copy(
    source: &RecordList,
    selection: &[AtomName],
) -> Result<(RecordList, usize), AllocationError> {
    copy_matching(source, RecordList::new(), |record| {
        selection.contains(&record.atom_name)
    })
}

/// [`select_atoms_as_copy`] driven by a [`SelectionConfig`], whose node limit
/// bounds the output list.
#[instrument(skip_all, fields(source_len = source.len(), selection_len = config.atom_names.len()))]
pub fn select_atoms_with_config(
    source: &RecordList,
    config: &SelectionConfig,
) -> Result<(RecordList, usize), AllocationError> {
    let output = match config.node_limit {
        Some(limit) => RecordList::with_node_limit(limit),
        None => RecordList::new(),
    };
    copy_matching(source, output, |record| {
        config.atom_names.contains(&record.atom_name)
    })
}

/// Copies the alpha-carbon records.
pub fn select_ca_as_copy(source: &RecordList) -> Result<(RecordList, usize), AllocationError> {
    select_atoms_as_copy(source, &[AtomName::CA])
}

/// Copies every record that is not a hydrogen.
#[instrument(skip_all, fields(source_len = source.len()))]
pub fn strip_hydrogens_as_copy(
    source: &RecordList,
) -> Result<(RecordList, usize), AllocationError> {
    copy_matching(source, RecordList::new(), |record| !record.is_hydrogen())
}

fn copy_matching<F>(
    source: &RecordList,
    mut output: RecordList,
    mut keep: F,
) -> Result<(RecordList, usize), AllocationError>
where
    F: FnMut(&Record) -> bool,
{
    let mut copied = 0;

    for record in source.records().filter(|record| keep(record)) {
        if let Err(err) = output.try_push_back(record.clone()) {
            warn!(
                copied,
                error = %err,
                "Allocation failed while copying records; discarding the partial copy."
            );
            return Err(err);
        }
        copied += 1;
    }

    debug!(copied, "Selection copy complete.");
    Ok((output, copied))
}
