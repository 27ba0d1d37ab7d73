/// Single coordinate axis used for grid rows, columns, and positions.
pub type Coord = u8;

/// Count type used for prize counts, try budgets, and total-cell counts.
pub type CellCount = u16;

/// Row-major cell address, `row * columns + column`.
pub type CellIndex = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Converts a row-major index into `(row, column)`, `None` when it falls outside `size`.
pub fn index_to_coords(index: CellIndex, size: Coord2) -> Option<Coord2> {
    let (rows, columns) = size;
    if columns == 0 || index >= mult(rows, columns) {
        return None;
    }
    let columns = CellIndex::from(columns);
    let row = (index / columns).try_into().ok()?;
    let column = (index % columns).try_into().ok()?;
    Some((row, column))
}

/// Converts `(row, column)` into a row-major index, `None` when it falls outside `size`.
pub fn coords_to_index(coords: Coord2, size: Coord2) -> Option<CellIndex> {
    let (row, column) = coords;
    let (rows, columns) = size;
    if row >= rows || column >= columns {
        return None;
    }
    Some(CellIndex::from(row) * CellIndex::from(columns) + CellIndex::from(column))
}
