use std::fmt;
use std::str::FromStr;

use super::errors::StarfieldError;
use super::position::Point;
use super::star::StarId;

/// Label of a grid cell.
///
/// Rows are held as zero-based integers and only rendered as letters
/// (`A`..`Z`, then `AA`, `AB`, ...) for display, so grids taller than 26
/// rows still get unique labels. Columns are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectorLabel {
    row: u32,
    column: u32,
}

impl SectorLabel {
    /// `row` is zero-based, `column` is 1-based.
    pub fn new(row: u32, column: u32) -> Self {
        SectorLabel { row, column }
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Letter form of the row, e.g. `A`, `Z`, `AA`.
    pub fn row_letters(&self) -> String {
        row_letters(self.row)
    }
}

/// Bijective base-26 rendering of a zero-based row index.
pub fn row_letters(row: u32) -> String {
    let mut n = row as u64 + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

impl fmt::Display for SectorLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.row_letters(), self.column)
    }
}

impl FromStr for SectorLabel {
    type Err = StarfieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StarfieldError::InvalidSectorLabel(s.to_string());
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(invalid)?;
        let (letters, digits) = trimmed.split_at(split);
        if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let mut n: u64 = 0;
        for c in letters.chars() {
            let value = (c.to_ascii_uppercase() as u8 - b'A') as u64 + 1;
            n = n
                .checked_mul(26)
                .and_then(|n| n.checked_add(value))
                .filter(|n| *n <= u32::MAX as u64)
                .ok_or_else(invalid)?;
        }
        let column: u32 = digits.parse().map_err(|_| invalid())?;
        if column == 0 {
            return Err(invalid());
        }

        Ok(SectorLabel::new((n - 1) as u32, column))
    }
}

/// One cell of the sector grid.
#[derive(Debug, Clone)]
pub struct Sector {
    label: SectorLabel,
    center: Point,
    /// Stars placed in this cell, in insertion order.
    stars: Vec<StarId>,
}

impl Sector {
    pub fn new(label: SectorLabel, center: Point) -> Self {
        Sector {
            label,
            center,
            stars: Vec::new(),
        }
    }

    pub fn label(&self) -> SectorLabel {
        self.label
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn stars(&self) -> &[StarId] {
        &self.stars
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub(crate) fn push_star(&mut self, id: StarId) {
        if !self.stars.contains(&id) {
            self.stars.push(id);
        }
    }
}
