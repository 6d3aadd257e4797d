use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::model::{BirthDate, CellClass, NumerologyProfile};

/// Lo Shu square, row by row.
pub const LO_SHU_LAYOUT: [[u8; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];

/// Occurrences of each digit 1..=9 in a birth date. Every key is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    cells: BTreeMap<u8, Vec<u8>>,
}

impl Grid {
    pub fn from_birth_date(date: &BirthDate) -> Self {
        let mut cells: BTreeMap<u8, Vec<u8>> = (1..=9).map(|d| (d, Vec::new())).collect();

        for digit in date
            .digit_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .filter(|&d| d != 0)
        {
            let digit = digit as u8;
            cells.entry(digit).or_default().push(digit);
        }

        Self { cells }
    }

    pub fn occurrences(&self, number: u8) -> &[u8] {
        self.cells.get(&number).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty_at(&self, number: u8) -> bool {
        self.occurrences(number).is_empty()
    }

    pub fn total_occurrences(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    pub fn positions(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.keys().copied()
    }

    /// Text shown in a cell: its occurrences joined by spaces, or the bare number when empty.
    pub fn cell_label(&self, number: u8) -> String {
        let occurrences = self.occurrences(number);
        if occurrences.is_empty() {
            number.to_string()
        } else {
            occurrences
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        }
    }
}

/// Empty positions, minus Personality and Destiny, ascending. KUA gives no exemption.
pub fn missing_numbers(grid: &Grid, profile: &NumerologyProfile) -> Vec<u8> {
    grid.positions()
        .filter(|&n| grid.is_empty_at(n))
        .filter(|&n| !profile.covers(n))
        .collect()
}

pub fn classify(number: u8, missing: &[u8], profile: &NumerologyProfile) -> CellClass {
    if missing.contains(&number) {
        CellClass::Missing
    } else if profile.is_core(number) {
        CellClass::Core
    } else {
        CellClass::Present
    }
}
