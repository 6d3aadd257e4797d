use serde::Serialize;

use crate::core::date_parser::parse_dob;
use crate::core::grid::{classify, missing_numbers, Grid, LO_SHU_LAYOUT};
use crate::core::profile::calculate_profile;
use crate::domain::model::{BirthDate, BirthInput, CellClass, NumerologyProfile};
use crate::utils::error::Result;

/// Everything derived from one date of birth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumerologyReport {
    pub personality: u8,
    pub destiny: u8,
    pub kua: u8,
    pub grid: Grid,
    pub missing: Vec<u8>,
}

impl NumerologyReport {
    pub fn profile(&self) -> NumerologyProfile {
        NumerologyProfile {
            personality: self.personality,
            destiny: self.destiny,
            kua: self.kua,
        }
    }

    pub fn classify(&self, number: u8) -> CellClass {
        classify(number, &self.missing, &self.profile())
    }

    /// The nine cells in Lo Shu order, row by row, with their class.
    pub fn lo_shu_rows(&self) -> [[(u8, CellClass); 3]; 3] {
        LO_SHU_LAYOUT.map(|row| row.map(|n| (n, self.classify(n))))
    }

    /// Missing numbers as "3, 4, 6" for notification payloads.
    pub fn missing_joined(&self) -> String {
        self.missing
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Date parsing, profile numbers and the grid, in one pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumerologyEngine;

impl NumerologyEngine {
    pub fn new() -> Self {
        Self
    }

    /// Fails only when the date of birth cannot be parsed; nothing else is computed then.
    pub fn calculate(&self, input: &BirthInput) -> Result<NumerologyReport> {
        let date = parse_dob(&input.date_of_birth).inspect_err(|_| {
            tracing::warn!("Could not parse date of birth {:?}", input.date_of_birth);
        })?;
        let report = self.calculate_for_date(&date, input);
        tracing::debug!(
            "Profile for {:?}: personality={}, destiny={}, kua={}, missing={:?}",
            date,
            report.personality,
            report.destiny,
            report.kua,
            report.missing
        );
        Ok(report)
    }

    fn calculate_for_date(&self, date: &BirthDate, input: &BirthInput) -> NumerologyReport {
        let profile = calculate_profile(date, input.sex);
        let grid = Grid::from_birth_date(date);
        let missing = missing_numbers(&grid, &profile);

        NumerologyReport {
            personality: profile.personality,
            destiny: profile.destiny,
            kua: profile.kua,
            grid,
            missing,
        }
    }
}
