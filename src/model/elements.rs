// src/model/elements.rs
//
// Shell configurations follow the Bohr-model table of Periodic-Table-JSON
// (one entry per shell, K shell first).

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{DiagramError, Result};

/// One element of the loaded dataset.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ElementRecord {
    #[serde(rename = "number")]
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    /// Electrons per orbit, innermost first.
    pub shells: Vec<u32>,
}

impl ElementRecord {
    pub fn orbit_count(&self) -> usize {
        self.shells.len()
    }

    /// Total electrons, summed in `u64`.
    pub fn electron_count(&self) -> u64 {
        self.shells.iter().map(|&n| u64::from(n)).sum()
    }

    pub fn valence_electrons(&self) -> u32 {
        self.shells.last().copied().unwrap_or(0)
    }

    /// Human readable configuration, e.g. "2, 8, 8, 2".
    pub fn configuration_label(&self) -> String {
        self.shells
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn validate(&self) -> Result<()> {
        let sum = self.electron_count();
        if self.atomic_number == 0 || sum != u64::from(self.atomic_number) {
            return Err(DiagramError::InvalidRecord {
                number: self.atomic_number,
                sum,
            });
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct DatasetJson {
    elements: Vec<ElementRecord>,
}

/// Element registry keyed by atomic number.
#[derive(Clone, Debug)]
pub struct PeriodicTable {
    elements: HashMap<u32, ElementRecord>,
    by_symbol: HashMap<String, u32>,
}

static EMBEDDED: OnceLock<PeriodicTable> = OnceLock::new();

impl PeriodicTable {
    /// The built-in table, atomic numbers 1 through 118.
    pub fn embedded() -> &'static PeriodicTable {
        EMBEDDED.get_or_init(|| {
            let records = EMBEDDED_SHELLS
                .iter()
                .map(|&(number, symbol, name, shells)| ElementRecord {
                    atomic_number: number,
                    symbol: symbol.to_string(),
                    name: name.to_string(),
                    shells: shells.to_vec(),
                });
            Self::from_records(records)
        })
    }

    /// Parse a dataset of the form `{"elements": [{"number", "symbol", "name", "shells"}]}`.
    ///
    /// Every record must describe a neutral atom.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: DatasetJson = serde_json::from_str(json)?;
        for record in &raw.elements {
            record.validate()?;
        }
        Ok(Self::from_records(raw.elements))
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json(&json)?;
        log::info!("Loaded {} elements from {:?}", table.len(), path);
        Ok(table)
    }

    fn from_records(records: impl IntoIterator<Item = ElementRecord>) -> Self {
        let mut elements = HashMap::new();
        let mut by_symbol = HashMap::new();
        for record in records {
            by_symbol.insert(record.symbol.clone(), record.atomic_number);
            elements.insert(record.atomic_number, record);
        }
        Self { elements, by_symbol }
    }

    pub fn lookup(&self, atomic_number: u32) -> Result<&ElementRecord> {
        self.elements
            .get(&atomic_number)
            .ok_or(DiagramError::UnknownElement(atomic_number))
    }

    pub fn lookup_symbol(&self, symbol: &str) -> Result<&ElementRecord> {
        self.by_symbol
            .get(symbol)
            .and_then(|n| self.elements.get(n))
            .ok_or_else(|| DiagramError::UnknownSymbol(symbol.to_string()))
    }

    /// Highest atomic number in the table, 0 when empty.
    pub fn max_atomic_number(&self) -> u32 {
        self.elements.keys().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

// (number, symbol, name, shells)
const EMBEDDED_SHELLS: &[(u32, &str, &str, &[u32])] = &[
    (1, "H", "Hydrogen", &[1]),
    (2, "He", "Helium", &[2]),
    (3, "Li", "Lithium", &[2, 1]),
    (4, "Be", "Beryllium", &[2, 2]),
    (5, "B", "Boron", &[2, 3]),
    (6, "C", "Carbon", &[2, 4]),
    (7, "N", "Nitrogen", &[2, 5]),
    (8, "O", "Oxygen", &[2, 6]),
    (9, "F", "Fluorine", &[2, 7]),
    (10, "Ne", "Neon", &[2, 8]),
    (11, "Na", "Sodium", &[2, 8, 1]),
    (12, "Mg", "Magnesium", &[2, 8, 2]),
    (13, "Al", "Aluminium", &[2, 8, 3]),
    (14, "Si", "Silicon", &[2, 8, 4]),
    (15, "P", "Phosphorus", &[2, 8, 5]),
    (16, "S", "Sulfur", &[2, 8, 6]),
    (17, "Cl", "Chlorine", &[2, 8, 7]),
    (18, "Ar", "Argon", &[2, 8, 8]),
    (19, "K", "Potassium", &[2, 8, 8, 1]),
    (20, "Ca", "Calcium", &[2, 8, 8, 2]),
    (21, "Sc", "Scandium", &[2, 8, 9, 2]),
    (22, "Ti", "Titanium", &[2, 8, 10, 2]),
    (23, "V", "Vanadium", &[2, 8, 11, 2]),
    (24, "Cr", "Chromium", &[2, 8, 13, 1]),
    (25, "Mn", "Manganese", &[2, 8, 13, 2]),
    (26, "Fe", "Iron", &[2, 8, 14, 2]),
    (27, "Co", "Cobalt", &[2, 8, 15, 2]),
    (28, "Ni", "Nickel", &[2, 8, 16, 2]),
    (29, "Cu", "Copper", &[2, 8, 18, 1]),
    (30, "Zn", "Zinc", &[2, 8, 18, 2]),
    (31, "Ga", "Gallium", &[2, 8, 18, 3]),
    (32, "Ge", "Germanium", &[2, 8, 18, 4]),
    (33, "As", "Arsenic", &[2, 8, 18, 5]),
    (34, "Se", "Selenium", &[2, 8, 18, 6]),
    (35, "Br", "Bromine", &[2, 8, 18, 7]),
    (36, "Kr", "Krypton", &[2, 8, 18, 8]),
    (37, "Rb", "Rubidium", &[2, 8, 18, 8, 1]),
    (38, "Sr", "Strontium", &[2, 8, 18, 8, 2]),
    (39, "Y", "Yttrium", &[2, 8, 18, 9, 2]),
    (40, "Zr", "Zirconium", &[2, 8, 18, 10, 2]),
    (41, "Nb", "Niobium", &[2, 8, 18, 12, 1]),
    (42, "Mo", "Molybdenum", &[2, 8, 18, 13, 1]),
    (43, "Tc", "Technetium", &[2, 8, 18, 13, 2]),
    (44, "Ru", "Ruthenium", &[2, 8, 18, 15, 1]),
    (45, "Rh", "Rhodium", &[2, 8, 18, 16, 1]),
    (46, "Pd", "Palladium", &[2, 8, 18, 18]),
    (47, "Ag", "Silver", &[2, 8, 18, 18, 1]),
    (48, "Cd", "Cadmium", &[2, 8, 18, 18, 2]),
    (49, "In", "Indium", &[2, 8, 18, 18, 3]),
    (50, "Sn", "Tin", &[2, 8, 18, 18, 4]),
    (51, "Sb", "Antimony", &[2, 8, 18, 18, 5]),
    (52, "Te", "Tellurium", &[2, 8, 18, 18, 6]),
    (53, "I", "Iodine", &[2, 8, 18, 18, 7]),
    (54, "Xe", "Xenon", &[2, 8, 18, 18, 8]),
    (55, "Cs", "Cesium", &[2, 8, 18, 18, 8, 1]),
    (56, "Ba", "Barium", &[2, 8, 18, 18, 8, 2]),
    (57, "La", "Lanthanum", &[2, 8, 18, 18, 9, 2]),
    (58, "Ce", "Cerium", &[2, 8, 18, 19, 9, 2]),
    (59, "Pr", "Praseodymium", &[2, 8, 18, 21, 8, 2]),
    (60, "Nd", "Neodymium", &[2, 8, 18, 22, 8, 2]),
    (61, "Pm", "Promethium", &[2, 8, 18, 23, 8, 2]),
    (62, "Sm", "Samarium", &[2, 8, 18, 24, 8, 2]),
    (63, "Eu", "Europium", &[2, 8, 18, 25, 8, 2]),
    (64, "Gd", "Gadolinium", &[2, 8, 18, 25, 9, 2]),
    (65, "Tb", "Terbium", &[2, 8, 18, 27, 8, 2]),
    (66, "Dy", "Dysprosium", &[2, 8, 18, 28, 8, 2]),
    (67, "Ho", "Holmium", &[2, 8, 18, 29, 8, 2]),
    (68, "Er", "Erbium", &[2, 8, 18, 30, 8, 2]),
    (69, "Tm", "Thulium", &[2, 8, 18, 31, 8, 2]),
    (70, "Yb", "Ytterbium", &[2, 8, 18, 32, 8, 2]),
    (71, "Lu", "Lutetium", &[2, 8, 18, 32, 9, 2]),
    (72, "Hf", "Hafnium", &[2, 8, 18, 32, 10, 2]),
    (73, "Ta", "Tantalum", &[2, 8, 18, 32, 11, 2]),
    (74, "W", "Tungsten", &[2, 8, 18, 32, 12, 2]),
    (75, "Re", "Rhenium", &[2, 8, 18, 32, 13, 2]),
    (76, "Os", "Osmium", &[2, 8, 18, 32, 14, 2]),
    (77, "Ir", "Iridium", &[2, 8, 18, 32, 15, 2]),
    (78, "Pt", "Platinum", &[2, 8, 18, 32, 17, 1]),
    (79, "Au", "Gold", &[2, 8, 18, 32, 18, 1]),
    (80, "Hg", "Mercury", &[2, 8, 18, 32, 18, 2]),
    (81, "Tl", "Thallium", &[2, 8, 18, 32, 18, 3]),
    (82, "Pb", "Lead", &[2, 8, 18, 32, 18, 4]),
    (83, "Bi", "Bismuth", &[2, 8, 18, 32, 18, 5]),
    (84, "Po", "Polonium", &[2, 8, 18, 32, 18, 6]),
    (85, "At", "Astatine", &[2, 8, 18, 32, 18, 7]),
    (86, "Rn", "Radon", &[2, 8, 18, 32, 18, 8]),
    (87, "Fr", "Francium", &[2, 8, 18, 32, 18, 8, 1]),
    (88, "Ra", "Radium", &[2, 8, 18, 32, 18, 8, 2]),
    (89, "Ac", "Actinium", &[2, 8, 18, 32, 18, 9, 2]),
    (90, "Th", "Thorium", &[2, 8, 18, 32, 18, 10, 2]),
    (91, "Pa", "Protactinium", &[2, 8, 18, 32, 20, 9, 2]),
    (92, "U", "Uranium", &[2, 8, 18, 32, 21, 9, 2]),
    (93, "Np", "Neptunium", &[2, 8, 18, 32, 22, 9, 2]),
    (94, "Pu", "Plutonium", &[2, 8, 18, 32, 24, 8, 2]),
    (95, "Am", "Americium", &[2, 8, 18, 32, 25, 8, 2]),
    (96, "Cm", "Curium", &[2, 8, 18, 32, 25, 9, 2]),
    (97, "Bk", "Berkelium", &[2, 8, 18, 32, 27, 8, 2]),
    (98, "Cf", "Californium", &[2, 8, 18, 32, 28, 8, 2]),
    (99, "Es", "Einsteinium", &[2, 8, 18, 32, 29, 8, 2]),
    (100, "Fm", "Fermium", &[2, 8, 18, 32, 30, 8, 2]),
    (101, "Md", "Mendelevium", &[2, 8, 18, 32, 31, 8, 2]),
    (102, "No", "Nobelium", &[2, 8, 18, 32, 32, 8, 2]),
    (103, "Lr", "Lawrencium", &[2, 8, 18, 32, 32, 8, 3]),
    (104, "Rf", "Rutherfordium", &[2, 8, 18, 32, 32, 10, 2]),
    (105, "Db", "Dubnium", &[2, 8, 18, 32, 32, 11, 2]),
    (106, "Sg", "Seaborgium", &[2, 8, 18, 32, 32, 12, 2]),
    (107, "Bh", "Bohrium", &[2, 8, 18, 32, 32, 13, 2]),
    (108, "Hs", "Hassium", &[2, 8, 18, 32, 32, 14, 2]),
    (109, "Mt", "Meitnerium", &[2, 8, 18, 32, 32, 15, 2]),
    (110, "Ds", "Darmstadtium", &[2, 8, 18, 32, 32, 16, 2]),
    (111, "Rg", "Roentgenium", &[2, 8, 18, 32, 32, 17, 2]),
    (112, "Cn", "Copernicium", &[2, 8, 18, 32, 32, 18, 2]),
    (113, "Nh", "Nihonium", &[2, 8, 18, 32, 32, 18, 3]),
    (114, "Fl", "Flerovium", &[2, 8, 18, 32, 32, 18, 4]),
    (115, "Mc", "Moscovium", &[2, 8, 18, 32, 32, 18, 5]),
    (116, "Lv", "Livermorium", &[2, 8, 18, 32, 32, 18, 6]),
    (117, "Ts", "Tennessine", &[2, 8, 18, 32, 32, 18, 7]),
    (118, "Og", "Oganesson", &[2, 8, 18, 32, 32, 18, 8]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_covers_1_to_118() {
        let table = PeriodicTable::embedded();
        assert_eq!(table.len(), 118);
        assert_eq!(table.max_atomic_number(), 118);
        for n in 1..=118 {
            assert!(table.lookup(n).is_ok(), "missing element {}", n);
        }
    }

    #[test]
    fn every_configuration_is_neutral() {
        let table = PeriodicTable::embedded();
        for n in 1..=118 {
            let record = table.lookup(n).unwrap();
            assert_eq!(record.electron_count(), u64::from(n), "{} is not neutral", record.symbol);
            assert!(record.shells.iter().all(|&k| k > 0));
        }
    }

    #[test]
    fn helium_and_calcium() {
        let table = PeriodicTable::embedded();
        let he = table.lookup(2).unwrap();
        assert_eq!(he.symbol, "He");
        assert_eq!(he.shells, vec![2]);

        let ca = table.lookup(20).unwrap();
        assert_eq!(ca.name, "Calcium");
        assert_eq!(ca.shells, vec![2, 8, 8, 2]);
        assert_eq!(ca.orbit_count(), 4);
        assert_eq!(ca.valence_electrons(), 2);
        assert_eq!(ca.configuration_label(), "2, 8, 8, 2");
    }

    #[test]
    fn out_of_range_is_unknown_element() {
        let table = PeriodicTable::embedded();
        assert!(matches!(table.lookup(0), Err(DiagramError::UnknownElement(0))));
        assert!(matches!(table.lookup(119), Err(DiagramError::UnknownElement(119))));
    }

    #[test]
    fn lookup_by_symbol() {
        let table = PeriodicTable::embedded();
        assert_eq!(table.lookup_symbol("Fe").unwrap().atomic_number, 26);
        assert!(matches!(
            table.lookup_symbol("Xx"),
            Err(DiagramError::UnknownSymbol(_))
        ));
    }

    #[test]
    fn oversized_shells_are_rejected() {
        let json = r#"{"elements": [
            {"number": 1, "symbol": "H", "name": "Hydrogen", "shells": [4294967295, 2]}
        ]}"#;
        match PeriodicTable::from_json(json) {
            Err(DiagramError::InvalidRecord { number, sum }) => {
                assert_eq!(number, 1);
                assert_eq!(sum, u64::from(u32::MAX) + 2);
            }
            other => panic!("expected InvalidRecord, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn json_dataset_limits_the_range() {
        let json = r#"{"elements": [
            {"number": 1, "symbol": "H", "name": "Hydrogen", "shells": [1]},
            {"number": 3, "symbol": "Li", "name": "Lithium", "shells": [2, 1]}
        ]}"#;
        let table = PeriodicTable::from_json(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(3).unwrap().shells, vec![2, 1]);
        assert!(matches!(table.lookup(2), Err(DiagramError::UnknownElement(2))));
    }

    #[test]
    fn json_dataset_rejects_charged_records() {
        let json = r#"{"elements": [
            {"number": 8, "symbol": "O", "name": "Oxygen", "shells": [2, 8]}
        ]}"#;
        match PeriodicTable::from_json(json) {
            Err(DiagramError::InvalidRecord { number, sum }) => {
                assert_eq!(number, 8);
                assert_eq!(sum, 10);
            }
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_a_dataset_error() {
        assert!(matches!(
            PeriodicTable::from_json("{\"elements\": 3}"),
            Err(DiagramError::Dataset(_))
        ));
    }
}
