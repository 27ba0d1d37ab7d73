use prizegrid_core::{CellIndex, Coord, Coord2, coords_to_index, mult};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(CellIndex),
    Reset,
    Quit,
    Nothing,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputError {
    #[error("Unknown command `{0}`, enter a cell number, `row,column`, `r` to restart or `q` to quit")]
    Unknown(String),
    #[error("`{0}` is outside the grid")]
    OutOfRange(String),
}

/// Reads one prompt line: a cell index, `row,column` (or `row column`), or a word command.
pub(crate) fn parse(line: &str, size: Coord2) -> Result<Command, InputError> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => return Ok(Command::Nothing),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "r" | "reset" | "restart" => return Ok(Command::Reset),
        _ => {}
    }

    let unknown = || InputError::Unknown(line.to_string());
    let out_of_range = || InputError::OutOfRange(line.to_string());

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [index] => {
            let index: u32 = index.parse().map_err(|_| unknown())?;
            let total = u32::from(mult(size.0, size.1));
            if index >= total {
                return Err(out_of_range());
            }
            CellIndex::try_from(index)
                .map(Command::Reveal)
                .map_err(|_| out_of_range())
        }
        [row, column] => {
            let row: u32 = row.parse().map_err(|_| unknown())?;
            let column: u32 = column.parse().map_err(|_| unknown())?;
            let coords = (
                Coord::try_from(row).map_err(|_| out_of_range())?,
                Coord::try_from(column).map_err(|_| out_of_range())?,
            );
            coords_to_index(coords, size)
                .map(Command::Reveal)
                .ok_or_else(out_of_range)
        }
        _ => Err(unknown()),
    }
}
