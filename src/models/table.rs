//! Contingency tables for exposure-outcome cross-tabulation

use std::fmt;

use serde::Serialize;

use crate::models::Individual;

/// 2x2 table of observed exposure by observed outcome
///
/// Cells follow the usual a, b, c, d convention:
///
/// ```text
///              Cases   Non-cases
/// Exposed        a         b
/// Unexposed      c         d
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContingencyTable {
    /// a: exposed individuals with the outcome
    pub exposed_cases: u64,
    /// b: exposed individuals without the outcome
    pub exposed_non_cases: u64,
    /// c: unexposed individuals with the outcome
    pub unexposed_cases: u64,
    /// d: unexposed individuals without the outcome
    pub unexposed_non_cases: u64,
}

impl ContingencyTable {
    /// Create a table from its four cells
    #[must_use]
    pub const fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self {
            exposed_cases: a,
            exposed_non_cases: b,
            unexposed_cases: c,
            unexposed_non_cases: d,
        }
    }

    /// Tabulate observed exposure against observed outcome
    #[must_use]
    pub fn from_sample(sample: &[Individual]) -> Self {
        sample.iter().fold(Self::default(), |mut table, individual| {
            table.record(individual);
            table
        })
    }

    /// Add one individual to the matching cell
    pub fn record(&mut self, individual: &Individual) {
        match (individual.observed_exposure, individual.observed_outcome) {
            (true, true) => self.exposed_cases += 1,
            (true, false) => self.exposed_non_cases += 1,
            (false, true) => self.unexposed_cases += 1,
            (false, false) => self.unexposed_non_cases += 1,
        }
    }

    /// Cells as floating point values (a, b, c, d)
    #[must_use]
    pub fn cells(&self) -> (f64, f64, f64, f64) {
        (
            self.exposed_cases as f64,
            self.exposed_non_cases as f64,
            self.unexposed_cases as f64,
            self.unexposed_non_cases as f64,
        )
    }

    /// Whether any cell is empty
    #[must_use]
    pub const fn has_zero_cell(&self) -> bool {
        self.exposed_cases == 0
            || self.exposed_non_cases == 0
            || self.unexposed_cases == 0
            || self.unexposed_non_cases == 0
    }

    #[must_use]
    pub const fn total_exposed(&self) -> u64 {
        self.exposed_cases + self.exposed_non_cases
    }

    #[must_use]
    pub const fn total_unexposed(&self) -> u64 {
        self.unexposed_cases + self.unexposed_non_cases
    }

    #[must_use]
    pub const fn total_cases(&self) -> u64 {
        self.exposed_cases + self.unexposed_cases
    }

    #[must_use]
    pub const fn total_non_cases(&self) -> u64 {
        self.exposed_non_cases + self.unexposed_non_cases
    }

    /// Grand total of the table
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total_exposed() + self.total_unexposed()
    }
}

impl fmt::Display for ContingencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<10} | {:>9} | {:>9} | {:>9}", "", "Cases", "Non-cases", "Total")?;
        writeln!(f, "-----------|-----------|-----------|----------")?;
        writeln!(
            f,
            "{:<10} | {:>9} | {:>9} | {:>9}",
            "Exposed",
            self.exposed_cases,
            self.exposed_non_cases,
            self.total_exposed()
        )?;
        writeln!(
            f,
            "{:<10} | {:>9} | {:>9} | {:>9}",
            "Unexposed",
            self.unexposed_cases,
            self.unexposed_non_cases,
            self.total_unexposed()
        )?;
        write!(
            f,
            "{:<10} | {:>9} | {:>9} | {:>9}",
            "Total",
            self.total_cases(),
            self.total_non_cases(),
            self.total()
        )
    }
}

/// Tables for each level of the true confounder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StratifiedTables {
    /// Individuals without the confounder (C=0)
    pub confounder_absent: ContingencyTable,
    /// Individuals with the confounder (C=1)
    pub confounder_present: ContingencyTable,
}

impl StratifiedTables {
    /// Tabulate a sample within strata of the true confounder
    #[must_use]
    pub fn from_sample(sample: &[Individual]) -> Self {
        sample.iter().fold(Self::default(), |mut strata, individual| {
            if individual.true_confounder {
                strata.confounder_present.record(individual);
            } else {
                strata.confounder_absent.record(individual);
            }
            strata
        })
    }

    /// Both strata, absent first
    #[must_use]
    pub const fn strata(&self) -> [ContingencyTable; 2] {
        [self.confounder_absent, self.confounder_present]
    }
}
