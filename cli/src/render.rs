use std::fmt::Write as _;

use prizegrid_core::{EngineCell, Odds, Round, RoundState};

pub(crate) const PRIZE_GLYPH: &str = "*";
pub(crate) const EMPTY_GLYPH: &str = ".";

pub(crate) fn welcome(round: &Round) -> String {
    let config = round.config();
    let tries = counted(config.max_tries, "try", "tries");
    let prizes = counted(config.prizes, "prize", "prizes");
    let all = if config.prizes == 1 { "the" } else { "all" };
    format!(
        "Welcome to the Probability Game!\n\
         You have {tries} to find {prizes} hidden in the grid.\n\
         Enter a cell number (or `row,column`) to reveal what's behind it.\n\
         If you find {all} {prizes} within {tries}, you win! Good luck!",
    )
}

fn counted(count: u16, one: &str, many: &str) -> String {
    format!("{count} {}", if count == 1 { one } else { many })
}

/// Hidden cells show their index so they can be typed back in.
pub(crate) fn grid(round: &Round) -> String {
    let (rows, columns) = round.size();
    let width = round.config().total_cells().saturating_sub(1).to_string().len();
    let board = round.board();

    let mut out = String::new();
    for row in 0..usize::from(rows) {
        let line: Vec<String> = (0..usize::from(columns))
            .map(|column| {
                let label = match board[(row, column)] {
                    EngineCell::Hidden => (row * usize::from(columns) + column).to_string(),
                    EngineCell::Empty => EMPTY_GLYPH.to_string(),
                    EngineCell::Prize => PRIZE_GLYPH.to_string(),
                };
                format!("{label:>width$}")
            })
            .collect();
        let _ = writeln!(out, " {}", line.join(" "));
    }
    out
}

pub(crate) fn status(round: &Round) -> String {
    let config = round.config();
    format!(
        "Tries: {}/{}  Prizes: {}/{}",
        round.attempts(),
        config.max_tries,
        round.found_prizes(),
        config.prizes
    )
}

pub(crate) fn odds(odds: &Odds) -> String {
    format!(
        "Next reveal hits a prize {:.1}% of the time, chance to win {:.1}%",
        odds.hit_chance * 100.0,
        odds.win_chance * 100.0
    )
}

/// Message for a round that just ended, `None` while it is still going.
pub(crate) fn outcome(round: &Round) -> Option<String> {
    match round.state() {
        RoundState::InProgress => None,
        RoundState::Won => Some("You win! Congratulations, you found all the prizes!".to_string()),
        RoundState::Lost => {
            let cells: Vec<String> = (0..round.config().total_cells())
                .filter(|&cell| round.has_prize_at(cell))
                .map(|cell| cell.to_string())
                .collect();
            Some(format!(
                "Game over. Sorry, you didn't find all the prizes in {}. They were at {}.",
                counted(round.config().max_tries, "try", "tries"),
                cells.join(", ")
            ))
        }
    }
}
