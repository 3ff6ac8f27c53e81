//! Seebeck coefficient table.
//!
//! One metal per line, `<name>:<coefficient>` with the coefficient in
//! µV/°C relative to platinum. Order is preserved because it is the order
//! the selection lists display.

use crate::error::{ThermoError, ThermoResult};
use mb_core::Real;
use serde::Serialize;
use tracing::debug;

const BUILTIN_TABLE: &str = include_str!("../data/seebeck.txt");

/// One metal and its Seebeck coefficient (µV/°C).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeebeckEntry {
    pub name: String,
    pub coefficient: Real,
}

/// Ordered, read-only table of metals, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct MetalTable {
    entries: Vec<SeebeckEntry>,
}

impl MetalTable {
    /// Parse a table from line-oriented text. Blank lines are allowed;
    /// anything else that does not parse fails the whole load.
    pub fn parse(text: &str) -> ThermoResult<Self> {
        let mut entries = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let row = raw.trim();
            if row.is_empty() {
                continue;
            }
            let Some((name, coefficient)) = row.split_once(':') else {
                return Err(ThermoError::DataFormat {
                    line,
                    reason: "missing ':' separator",
                    row: row.to_string(),
                });
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(ThermoError::DataFormat {
                    line,
                    reason: "empty metal name",
                    row: row.to_string(),
                });
            }
            let coefficient: Real =
                coefficient
                    .trim()
                    .parse()
                    .map_err(|_| ThermoError::DataFormat {
                        line,
                        reason: "coefficient is not a number",
                        row: row.to_string(),
                    })?;
            entries.push(SeebeckEntry {
                name: name.to_string(),
                coefficient,
            });
        }
        if entries.is_empty() {
            return Err(ThermoError::InvalidArg {
                what: "table has no entries",
            });
        }
        debug!(entries = entries.len(), "loaded Seebeck table");
        Ok(Self { entries })
    }

    /// The table shipped with the emulator. A parse failure here means the
    /// embedded resource itself is broken.
    pub fn builtin() -> ThermoResult<Self> {
        Self::parse(BUILTIN_TABLE)
    }

    pub fn entries(&self) -> &[SeebeckEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> ThermoResult<&SeebeckEntry> {
        self.entries.get(index).ok_or(ThermoError::MetalIndexOob {
            index,
            len: self.entries.len(),
        })
    }

    /// Case-insensitive lookup by metal name.
    pub fn find(&self, name: &str) -> Option<&SeebeckEntry> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_loads_in_display_order() {
        let table = MetalTable::builtin().unwrap();
        assert!(table.len() >= 10);
        // Most negative metal leads the list
        assert_eq!(table.entries()[0].name, "Bismuth");

        let copper = table.find("copper").unwrap();
        assert_eq!(copper.coefficient, 6.5);
        let iron = table.find("Iron").unwrap();
        assert_eq!(iron.coefficient, 19.0);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = MetalTable::parse("Copper:6.5\n\nIron:19.0\n").unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_separator_fails_the_load() {
        let err = MetalTable::parse("Copper:6.5\nIron 19.0\n").unwrap_err();
        assert!(matches!(
            err,
            ThermoError::DataFormat { line: 2, .. }
        ));
    }

    #[test]
    fn non_numeric_coefficient_fails_the_load() {
        let err = MetalTable::parse("Copper:six point five\n").unwrap_err();
        assert!(matches!(err, ThermoError::DataFormat { line: 1, .. }));
    }

    #[test]
    fn no_partial_table_on_failure() {
        // A bad row anywhere means no table at all
        assert!(MetalTable::parse("Copper:6.5\nIron:19.0\nbroken\n").is_err());
    }

    #[test]
    fn index_out_of_bounds() {
        let table = MetalTable::parse("Copper:6.5\n").unwrap();
        assert!(table.get(0).is_ok());
        assert!(matches!(
            table.get(1),
            Err(ThermoError::MetalIndexOob { index: 1, len: 1 })
        ));
    }
}
