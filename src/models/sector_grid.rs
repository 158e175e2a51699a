//! Sector grid
//!
//! Partitions a square world into uniform labeled cells and answers
//! point-to-cell and cell-adjacency questions.

use std::collections::HashSet;

use super::constants::SECTOR_DIVISIONS;
use super::errors::{StarfieldError, StarfieldResult};
use super::position::Point;
use super::sector::{Sector, SectorLabel};
use super::star::StarId;

/// Uniform grid of sectors covering a `size` x `size` world.
#[derive(Debug, Clone)]
pub struct SectorGrid {
    size: u32,
    /// Side length of one sector.
    delimiter: u32,
    rows: u32,
    columns: u32,
    /// Row-major: sectors[row * columns + (column - 1)].
    sectors: Vec<Sector>,
}

impl SectorGrid {
    /// Build the grid for a world of the given size.
    /// The sector width is `floor(size / 26)`; sizes below 26 cannot form a grid.
    pub fn build(size: u32) -> StarfieldResult<Self> {
        if size < SECTOR_DIVISIONS {
            return Err(StarfieldError::WorldTooSmall(size));
        }
        let delimiter = size / SECTOR_DIVISIONS;
        let rows = size.div_ceil(delimiter);
        let columns = rows;

        let half = delimiter as f64 / 2.0;
        let mut sectors = Vec::with_capacity((rows * columns) as usize);
        for row in 0..rows {
            for column in 1..=columns {
                let center = Point::new(
                    ((column - 1) * delimiter) as f64 + half,
                    (row * delimiter) as f64 + half,
                );
                sectors.push(Sector::new(SectorLabel::new(row, column), center));
            }
        }

        Ok(SectorGrid {
            size,
            delimiter,
            rows,
            columns,
            sectors,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn delimiter(&self) -> u32 {
        self.delimiter
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn total_sectors(&self) -> usize {
        self.sectors.len()
    }

    /// All sectors in row-major order.
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn contains(&self, label: SectorLabel) -> bool {
        self.index_of(label).is_some()
    }

    pub fn sector(&self, label: SectorLabel) -> Option<&Sector> {
        self.index_of(label).map(|i| &self.sectors[i])
    }

    /// Like [`SectorGrid::sector`] but reports a missing sector as an error.
    pub fn require(&self, label: SectorLabel) -> StarfieldResult<&Sector> {
        self.sector(label)
            .ok_or_else(|| StarfieldError::UnknownSector(label.to_string()))
    }

    pub(crate) fn assign_star(&mut self, label: SectorLabel, id: StarId) -> StarfieldResult<()> {
        let index = self
            .index_of(label)
            .ok_or_else(|| StarfieldError::UnknownSector(label.to_string()))?;
        self.sectors[index].push_star(id);
        Ok(())
    }

    fn index_of(&self, label: SectorLabel) -> Option<usize> {
        if label.row() < self.rows && label.column() >= 1 && label.column() <= self.columns {
            Some((label.row() * self.columns + label.column() - 1) as usize)
        } else {
            None
        }
    }

    /// Zero-based row index for a y coordinate, clamped into the grid.
    pub fn row_of(&self, y: f64) -> u32 {
        self.band_of(y, self.rows)
    }

    /// 1-based column for an x coordinate, clamped into the grid.
    pub fn column_of(&self, x: f64) -> u32 {
        self.band_of(x, self.columns) + 1
    }

    /// Map a point to the label of the sector containing it.
    /// Points on or past the far edge fall into the last row/column.
    pub fn sector_of(&self, point: Point) -> SectorLabel {
        SectorLabel::new(self.row_of(point.y), self.column_of(point.x))
    }

    fn band_of(&self, coordinate: f64, bands: u32) -> u32 {
        // `as` saturates: negatives and NaN become 0
        let band = (coordinate / self.delimiter as f64).floor() as u32;
        band.min(bands - 1)
    }

    /// Labels of the 3x3 block around `label`, row-major.
    /// The block narrows to two rows/columns at the grid edges.
    pub fn adjacent_sectors(&self, label: SectorLabel, include_self: bool) -> Vec<SectorLabel> {
        if !self.contains(label) {
            return Vec::new();
        }
        let first_row = label.row().saturating_sub(1);
        let last_row = (label.row() + 1).min(self.rows - 1);
        let first_column = label.column().saturating_sub(1).max(1);
        let last_column = (label.column() + 1).min(self.columns);

        let mut adjacent = Vec::with_capacity(9);
        for row in first_row..=last_row {
            for column in first_column..=last_column {
                let neighbour = SectorLabel::new(row, column);
                if include_self || neighbour != label {
                    adjacent.push(neighbour);
                }
            }
        }
        adjacent
    }

    /// Number of neighbour rings needed to cover `radius`. Always at least one.
    pub fn ring_depth(&self, radius: f64) -> u32 {
        let rings = (radius / self.delimiter as f64).ceil();
        if rings.is_nan() || rings <= 1.0 {
            1
        } else {
            rings.min(self.rows.max(self.columns) as f64) as u32
        }
    }

    /// Grow `labels` ring by ring until every sector that could hold a point
    /// within `radius` of a point in the starting set is included.
    /// Starting labels come first, then each ring in discovery order; no duplicates.
    pub fn expand_ring(&self, labels: &[SectorLabel], radius: f64) -> Vec<SectorLabel> {
        self.grow(labels, self.ring_depth(radius))
    }

    /// Sectors to scan for points within `radius` of a point in `label`.
    ///
    /// Covers the same sectors as `expand_ring(&[label], radius)`, but starts
    /// from the row-major 3x3 block around `label` so the origin's sector sits
    /// in the middle of the first block rather than at the front. Query order,
    /// and with it route tie-breaking, follows this sequence.
    pub fn neighbourhood(&self, label: SectorLabel, radius: f64) -> Vec<SectorLabel> {
        let block = self.adjacent_sectors(label, true);
        self.grow(&block, self.ring_depth(radius) - 1)
    }

    fn grow(&self, labels: &[SectorLabel], rings: u32) -> Vec<SectorLabel> {
        let mut seen: HashSet<SectorLabel> = HashSet::new();
        let mut expanded: Vec<SectorLabel> = labels
            .iter()
            .copied()
            .filter(|label| self.contains(*label) && seen.insert(*label))
            .collect();

        let mut frontier_start = 0;
        for _ in 0..rings {
            let frontier_end = expanded.len();
            if frontier_start == frontier_end {
                break;
            }
            // Indexed because `expanded` grows while the frontier is walked
            #[allow(clippy::needless_range_loop)]
            for i in frontier_start..frontier_end {
                for neighbour in self.adjacent_sectors(expanded[i], false) {
                    if seen.insert(neighbour) {
                        expanded.push(neighbour);
                    }
                }
            }
            frontier_start = frontier_end;
        }
        expanded
    }

    /// Offsets of the interior grid lines, shared by both axes.
    pub fn grid_lines(&self) -> Vec<f64> {
        (1..)
            .map(|i| (i * self.delimiter) as f64)
            .take_while(|offset| *offset <= (self.size - self.delimiter) as f64)
            .collect()
    }
}
