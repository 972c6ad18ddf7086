use crate::core::models::atom::{AtomName, Record};
use crate::core::models::ids::RecordId;
use crate::core::models::records::RecordList;
use nalgebra::{Point3, Vector3};
use tracing::{debug, instrument};

/// Centre of geometry of a set of records, with the number of records that
/// contributed to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub position: Point3<f64>,
    pub atom_count: usize,
}

impl Centroid {
    /// True when no record contributed. The position is then NaN on every axis.
    pub fn is_degenerate(&self) -> bool {
        self.atom_count == 0
    }
}

/// Centre of geometry of the records from `start` (inclusive) to `stop`
/// (exclusive), skipping records whose coordinates are unknown.
///
/// A record counts if any axis is below the null-coordinate sentinel (see
/// [`Record::has_known_coordinates`]). An empty range, or one where no record
/// counts, is not an error: each axis becomes `0.0 / 0.0`, i.e. NaN, and
/// [`Centroid::is_degenerate`] reports it.
///
/// # Arguments
///
/// * `list` - The list the handles belong to. It is never modified.
/// * `start` - First record of the range; `None` means an empty range.
/// * `stop` - First record past the range; `None` runs to the end of the list.
#[instrument(level = "debug", skip(list))]
pub fn centroid_of_range(
    list: &RecordList,
    start: Option<RecordId>,
    stop: Option<RecordId>,
) -> Centroid {
    accumulate(list.range(start, stop).map(|(_, record)| record))
}

/// Centre of geometry of the whole list. Same rules as [`centroid_of_range`].
pub fn centroid(list: &RecordList) -> Centroid {
    centroid_of_range(list, list.head(), None)
}

/// Centre of geometry of the side-chain records of a range.
///
/// Backbone atoms (`N`, `CA`, `C`, `O`) are left out. A range without any
/// side-chain record, such as a glycine, falls back to its `CA` atoms. Unknown
/// coordinates and empty ranges behave as in [`centroid_of_range`].
#[instrument(level = "debug", skip(list))]
pub fn sidechain_centroid_of_range(
    list: &RecordList,
    start: Option<RecordId>,
    stop: Option<RecordId>,
) -> Centroid {
    let records = || list.range(start, stop).map(|(_, record)| record);

    if records().any(|record| !record.is_backbone()) {
        accumulate(records().filter(|record| !record.is_backbone()))
    } else {
        accumulate(records().filter(|record| record.atom_name == AtomName::CA))
    }
}

fn accumulate<'a>(records: impl Iterator<Item = &'a Record>) -> Centroid {
    let mut sum = Vector3::<f64>::zeros();
    let mut atom_count = 0usize;

    for position in records.filter_map(Record::known_position) {
        sum += position.coords;
        atom_count += 1;
    }

    if atom_count == 0 {
        debug!("No records with known coordinates; centroid is undefined.");
    }

    Centroid {
        position: Point3::from(sum / atom_count as f64),
        atom_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, x: f64, y: f64, z: f64) -> Record {
        Record::named(name, Point3::new(x, y, z)).unwrap()
    }

    fn list_of(points: &[(f64, f64, f64)]) -> RecordList {
        points
            .iter()
            .map(|&(x, y, z)| record("CA", x, y, z))
            .collect()
    }

    fn ids(list: &RecordList) -> Vec<RecordId> {
        list.iter().map(|(id, _)| id).collect()
    }

    fn assert_point_eq(actual: Point3<f64>, expected: Point3<f64>) {
        assert!(
            (actual - expected).norm() < 1e-12,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn centroid_is_mean_of_coordinates() {
        let list = list_of(&[(0.0, 0.0, 0.0), (2.0, 0.0, 0.0), (1.0, 3.0, 0.0)]);
        let result = centroid_of_range(&list, list.head(), None);

        assert_point_eq(result.position, Point3::new(1.0, 1.0, 0.0));
        assert_eq!(result.atom_count, 3);
        assert!(!result.is_degenerate());
    }

    #[test]
    fn range_excludes_stop_record() {
        let list = list_of(&[(0.0, 0.0, 0.0), (2.0, 2.0, 2.0), (100.0, 100.0, 100.0)]);
        let ids = ids(&list);
        let result = centroid_of_range(&list, Some(ids[0]), Some(ids[2]));

        assert_point_eq(result.position, Point3::new(1.0, 1.0, 1.0));
        assert_eq!(result.atom_count, 2);
    }

    #[test]
    fn range_can_start_mid_list() {
        let list = list_of(&[(100.0, 0.0, 0.0), (2.0, 4.0, 6.0)]);
        let ids = ids(&list);
        let result = centroid_of_range(&list, Some(ids[1]), None);
        assert_point_eq(result.position, Point3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn null_coordinates_are_excluded() {
        let list = list_of(&[(0.0, 0.0, 0.0), (9999.0, 9999.0, 9999.0)]);
        let result = centroid_of_range(&list, list.head(), None);

        assert_point_eq(result.position, Point3::origin());
        assert_eq!(result.atom_count, 1);
    }

    #[test]
    fn partially_null_coordinates_are_included_as_is() {
        let list = list_of(&[(0.0, 0.0, 0.0), (9999.0, 0.0, 0.0)]);
        let result = centroid_of_range(&list, list.head(), None);

        assert_eq!(result.atom_count, 2);
        assert_point_eq(result.position, Point3::new(4999.5, 0.0, 0.0));
    }

    #[test]
    fn empty_range_is_non_finite() {
        let list = list_of(&[(1.0, 2.0, 3.0)]);
        let head = list.head();
        let result = centroid_of_range(&list, head, head);

        assert!(result.is_degenerate());
        assert!(result.position.coords.iter().all(|c| !c.is_finite()));
    }

    #[test]
    fn absent_start_is_empty_range() {
        let list = list_of(&[(1.0, 2.0, 3.0)]);
        let result = centroid_of_range(&list, None, None);
        assert!(result.is_degenerate());
        assert!(result.position.coords.iter().all(|c| c.is_nan()));
    }

    #[test]
    fn all_null_range_is_non_finite() {
        let list = list_of(&[(9999.0, 9999.0, 9999.0), (9999.0, 9999.0, 9999.0)]);
        let result = centroid(&list);
        assert_eq!(result.atom_count, 0);
        assert!(result.position.coords.iter().all(|c| !c.is_finite()));
    }

    #[test]
    fn centroid_covers_whole_list() {
        let list = list_of(&[(1.0, 1.0, 1.0), (3.0, 3.0, 3.0)]);
        assert_point_eq(centroid(&list).position, Point3::new(2.0, 2.0, 2.0));
        assert!(centroid(&RecordList::new()).is_degenerate());
    }

    #[test]
    fn centroid_does_not_modify_list() {
        let list = list_of(&[(1.0, 1.0, 1.0), (9999.0, 9999.0, 9999.0)]);
        let snapshot = list.clone();
        let _ = centroid(&list);
        assert_eq!(list, snapshot);
    }

    #[test]
    fn sidechain_centroid_ignores_backbone() {
        let list: RecordList = vec![
            record("N", 10.0, 10.0, 10.0),
            record("CA", 10.0, 10.0, 10.0),
            record("C", 10.0, 10.0, 10.0),
            record("O", 10.0, 10.0, 10.0),
            record("CB", 0.0, 0.0, 0.0),
            record("OG", 2.0, 2.0, 2.0),
        ]
        .into_iter()
        .collect();

        let result = sidechain_centroid_of_range(&list, list.head(), None);
        assert_eq!(result.atom_count, 2);
        assert_point_eq(result.position, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn sidechain_centroid_falls_back_to_ca_for_glycine() {
        let list: RecordList = vec![
            record("N", 0.0, 0.0, 0.0),
            record("CA", 1.0, 2.0, 3.0),
            record("C", 5.0, 5.0, 5.0),
            record("O", 6.0, 6.0, 6.0),
        ]
        .into_iter()
        .collect();

        let result = sidechain_centroid_of_range(&list, list.head(), None);
        assert_eq!(result.atom_count, 1);
        assert_point_eq(result.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn sidechain_centroid_with_only_null_sidechain_is_degenerate() {
        let list: RecordList = vec![
            record("CA", 1.0, 2.0, 3.0),
            record("CB", 9999.0, 9999.0, 9999.0),
        ]
        .into_iter()
        .collect();

        let result = sidechain_centroid_of_range(&list, list.head(), None);
        assert!(result.is_degenerate());
    }
}
