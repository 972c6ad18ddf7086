use nalgebra::Point3;
use phf::{Set, phf_set};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coordinate value marking an axis as unknown.
pub const NULL_COORDINATE: f64 = 9999.0;

/// Width of an atom-name token in bytes.
pub const ATOM_NAME_WIDTH: usize = 4;

static BACKBONE_ATOM_NAMES: Set<&'static str> = phf_set! { "N", "CA", "C", "O" };

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AtomNameError {
    /// The name has no characters.
    #[error("Atom name is empty")]
    Empty,
    /// The name does not fit the fixed token width.
    #[error("Atom name '{0}' is longer than 4 characters")]
    TooLong(String),
    /// The name has a character outside ASCII.
    #[error("Atom name '{0}' contains non-ASCII characters")]
    NonAscii(String),
}

/// A fixed-width, space-padded atom-name token such as `"CA  "`.
///
/// Tokens compare byte-for-byte over the full width, so matching is
/// case-sensitive and exact. Leading spaces are kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct AtomName([u8; ATOM_NAME_WIDTH]);

impl AtomName {
    pub const N: AtomName = AtomName(*b"N   ");
    pub const CA: AtomName = AtomName(*b"CA  ");
    pub const C: AtomName = AtomName(*b"C   ");
    pub const O: AtomName = AtomName(*b"O   ");

    /// Builds a token from a name of at most four ASCII characters,
    /// right-padding it with spaces.
    ///
    /// # Errors
    ///
    /// Returns an [`AtomNameError`] if the name is empty, too long, or not ASCII.
    pub fn new(name: &str) -> Result<Self, AtomNameError> {
        if name.is_empty() {
            return Err(AtomNameError::Empty);
        }
        if !name.is_ascii() {
            return Err(AtomNameError::NonAscii(name.to_string()));
        }
        if name.len() > ATOM_NAME_WIDTH {
            return Err(AtomNameError::TooLong(name.to_string()));
        }

        let mut token = [b' '; ATOM_NAME_WIDTH];
        token[..name.len()].copy_from_slice(name.as_bytes());
        Ok(Self(token))
    }

    /// The full padded token.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// The token without trailing padding.
    pub fn trimmed(&self) -> &str {
        self.as_str().trim_end()
    }
}

impl FromStr for AtomName {
    type Err = AtomNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AtomName {
    type Error = AtomNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for AtomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trimmed())
    }
}

/// PDB record kind an atom was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordType {
    /// Standard polymer atom (`ATOM`).
    #[default]
    Atom,
    /// Heterogen atom such as a ligand or water (`HETATM`).
    Hetatm,
}

/// A single atom entry of a structure.
///
/// Records carry no link to their neighbours; ordering and ownership live in
/// the list that holds them, so a clone is always a detached field-wise copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Atom serial number from the source file.
    pub serial: usize,
    pub record_type: RecordType,
    pub atom_name: AtomName,
    /// Alternate location indicator, if any.
    pub alt_loc: Option<char>,
    /// Residue name (e.g., "ALA", "GLY").
    pub residue_name: String,
    pub chain_id: char,
    /// Residue sequence number from source file.
    pub residue_number: isize,
    pub insertion_code: Option<char>,
    /// Cartesian coordinates in Angstroms; axes may hold [`NULL_COORDINATE`].
    pub position: Point3<f64>,
    pub occupancy: f64,
    pub b_factor: f64,
    /// Element symbol, empty when the source did not provide one.
    pub element: String,
}

impl Record {
    /// Creates a record with default values for everything but the name and position.
    ///
    /// # Arguments
    ///
    /// * `atom_name` - The atom-name token.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(atom_name: AtomName, position: Point3<f64>) -> Self {
        Self {
            serial: 0,
            record_type: RecordType::default(),
            atom_name,
            alt_loc: None,
            residue_name: String::new(),
            chain_id: ' ',
            residue_number: 0,
            insertion_code: None,
            position,
            occupancy: 1.0,
            b_factor: 0.0,
            element: String::new(),
        }
    }

    /// Same as [`Record::new`], parsing the atom name first.
    ///
    /// # Errors
    ///
    /// Returns an [`AtomNameError`] if `name` is not a valid atom-name token.
    pub fn named(name: &str, position: Point3<f64>) -> Result<Self, AtomNameError> {
        Ok(Self::new(AtomName::new(name)?, position))
    }

    /// Whether the coordinates count towards aggregate geometry.
    ///
    /// The record passes if any single axis is strictly below
    /// [`NULL_COORDINATE`]. A record such as `(9999.0, 0.0, 0.0)` therefore
    /// passes and its sentinel axis is used as-is.
    pub fn has_known_coordinates(&self) -> bool {
        self.position.x < NULL_COORDINATE
            || self.position.y < NULL_COORDINATE
            || self.position.z < NULL_COORDINATE
    }

    /// The position, or `None` when [`Record::has_known_coordinates`] fails.
    pub fn known_position(&self) -> Option<Point3<f64>> {
        self.has_known_coordinates().then_some(self.position)
    }

    /// Whether `other` belongs to the same residue (chain, number and insertion code).
    pub fn same_residue(&self, other: &Record) -> bool {
        self.chain_id == other.chain_id
            && self.residue_number == other.residue_number
            && self.insertion_code == other.insertion_code
    }

    pub fn is_backbone(&self) -> bool {
        BACKBONE_ATOM_NAMES.contains(self.atom_name.trimmed())
    }

    /// Hydrogen (or deuterium) test.
    ///
    /// Uses the element symbol when present, otherwise the first non-digit
    /// character of the atom name (so `1HB` and `HA` are both hydrogens).
    pub fn is_hydrogen(&self) -> bool {
        let element = self.element.trim();
        if !element.is_empty() {
            return element.eq_ignore_ascii_case("H") || element.eq_ignore_ascii_case("D");
        }
        self.atom_name
            .as_str()
            .trim_start()
            .chars()
            .find(|c| !c.is_ascii_digit())
            .is_some_and(|c| c == 'H')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atom_name_pads_to_fixed_width() {
        let name = AtomName::new("CA").unwrap();
        assert_eq!(name.as_str(), "CA  ");
        assert_eq!(name.trimmed(), "CA");
        assert_eq!(name, AtomName::CA);
        assert_eq!(name.to_string(), "CA");
    }

    #[test]
    fn atom_name_accepts_full_width_token() {
        let name = AtomName::new("HG21").unwrap();
        assert_eq!(name.as_str(), "HG21");
    }

    #[test]
    fn atom_name_rejects_invalid_input() {
        assert_eq!(AtomName::new(""), Err(AtomNameError::Empty));
        assert_eq!(
            AtomName::new("CA123"),
            Err(AtomNameError::TooLong("CA123".to_string()))
        );
        assert_eq!(
            AtomName::new("Cα"),
            Err(AtomNameError::NonAscii("Cα".to_string()))
        );
    }

    #[test]
    fn atom_name_matching_is_case_sensitive_and_exact() {
        assert_ne!(AtomName::new("ca").unwrap(), AtomName::CA);
        assert_ne!(AtomName::new(" CA").unwrap(), AtomName::CA);
        assert_ne!(AtomName::new("C").unwrap(), AtomName::CA);
        assert_eq!(AtomName::from_str("O").unwrap(), AtomName::O);
    }

    #[test]
    fn new_record_has_expected_default_fields() {
        let record = Record::new(AtomName::N, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(record.atom_name, AtomName::N);
        assert_eq!(record.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(record.record_type, RecordType::Atom);
        assert_eq!(record.serial, 0);
        assert_eq!(record.occupancy, 1.0);
        assert_eq!(record.b_factor, 0.0);
        assert!(record.residue_name.is_empty());
        assert!(record.element.is_empty());
        assert!(record.alt_loc.is_none());
        assert!(record.insertion_code.is_none());
    }

    #[test]
    fn named_record_propagates_name_errors() {
        assert!(Record::named("CB", Point3::origin()).is_ok());
        assert_eq!(
            Record::named("", Point3::origin()).unwrap_err(),
            AtomNameError::Empty
        );
    }

    #[test]
    fn fully_null_coordinates_are_unknown() {
        let record = Record::named("CA", Point3::new(9999.0, 9999.0, 9999.0)).unwrap();
        assert!(!record.has_known_coordinates());
        assert!(record.known_position().is_none());
    }

    #[test]
    fn coordinates_above_sentinel_on_every_axis_are_unknown() {
        let record = Record::named("CA", Point3::new(10000.0, 9999.5, 12000.0)).unwrap();
        assert!(!record.has_known_coordinates());
    }

    #[test]
    fn one_axis_below_sentinel_is_enough_to_count() {
        let record = Record::named("CA", Point3::new(9999.0, 0.0, 0.0)).unwrap();
        assert!(record.has_known_coordinates());
        assert_eq!(record.known_position(), Some(Point3::new(9999.0, 0.0, 0.0)));

        let record = Record::named("CA", Point3::new(9999.0, 9999.0, -1.0)).unwrap();
        assert!(record.has_known_coordinates());
    }

    #[test]
    fn same_residue_compares_chain_number_and_insertion() {
        let mut a = Record::named("N", Point3::origin()).unwrap();
        a.chain_id = 'A';
        a.residue_number = 10;
        let mut b = a.clone();
        b.atom_name = AtomName::CA;
        assert!(a.same_residue(&b));

        b.insertion_code = Some('A');
        assert!(!a.same_residue(&b));

        let mut c = a.clone();
        c.chain_id = 'B';
        assert!(!a.same_residue(&c));
    }

    #[test]
    fn backbone_detection_uses_trimmed_name() {
        for name in ["N", "CA", "C", "O"] {
            assert!(Record::named(name, Point3::origin()).unwrap().is_backbone());
        }
        for name in ["CB", "OG1", "OXT", "H"] {
            assert!(!Record::named(name, Point3::origin()).unwrap().is_backbone());
        }
    }

    #[test]
    fn hydrogen_detection_prefers_element() {
        let mut record = Record::named("HG", Point3::origin()).unwrap();
        record.element = "Hg".to_string();
        assert!(!record.is_hydrogen());

        record.element = "H".to_string();
        assert!(record.is_hydrogen());

        record.element = "D".to_string();
        assert!(record.is_hydrogen());
    }

    #[test]
    fn hydrogen_detection_falls_back_to_atom_name() {
        assert!(Record::named("HA", Point3::origin()).unwrap().is_hydrogen());
        assert!(Record::named("1HB", Point3::origin()).unwrap().is_hydrogen());
        assert!(!Record::named("CA", Point3::origin()).unwrap().is_hydrogen());
        assert!(!Record::named("NH1", Point3::origin()).unwrap().is_hydrogen());
    }
}
