use std::io::{BufRead, Write};

use prizegrid_core::{GameSession, Observation, analyze};

use crate::input::{self, Command};
use crate::render;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct Options {
    pub odds: bool,
    pub json: bool,
}

/// Prompt loop: one command per input line until `q` or end of input.
///
/// A round that ends is announced and replaced by a fresh one right away.
pub(crate) fn play(
    session: &mut GameSession,
    options: Options,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    if !options.json {
        writeln!(out, "{}\n", render::welcome(session.round()))?;
    }
    draw(session, options, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let command = match input::parse(&line, session.config().size()) {
            Ok(command) => command,
            Err(err) => {
                log::debug!("rejected input {line:?}: {err}");
                writeln!(out, "{err}")?;
                prompt(options, &mut out)?;
                continue;
            }
        };

        match command {
            Command::Nothing => {
                prompt(options, &mut out)?;
                continue;
            }
            Command::Quit => break,
            Command::Reset => {
                session.reset()?;
                writeln!(out, "New round")?;
            }
            Command::Reveal(index) => {
                let result = session.reveal(index)?;
                if result.ignored {
                    writeln!(out, "Cell {index} is already open")?;
                    prompt(options, &mut out)?;
                    continue;
                }
                if result.is_final() {
                    draw_board(session, options, &mut out)?;
                    if let Some(message) = render::outcome(session.round()) {
                        writeln!(out, "{message}")?;
                    }
                    session.reset()?;
                    writeln!(out, "New round")?;
                }
            }
        }

        draw(session, options, &mut out)?;
    }

    out.flush()?;
    Ok(())
}

fn draw(session: &GameSession, options: Options, out: &mut impl Write) -> anyhow::Result<()> {
    draw_board(session, options, out)?;
    prompt(options, out)
}

fn draw_board(session: &GameSession, options: Options, out: &mut impl Write) -> anyhow::Result<()> {
    let round = session.round();
    let observation = Observation::from_round(round);

    if options.json {
        writeln!(out, "{}", serde_json::to_string(&observation)?)?;
        if options.odds {
            writeln!(out, "{}", serde_json::to_string(&analyze(&observation))?)?;
        }
        return Ok(());
    }

    write!(out, "{}", render::grid(round))?;
    writeln!(out, "{}", render::status(round))?;
    if options.odds && !round.is_finished() {
        writeln!(out, "{}", render::odds(&analyze(&observation)))?;
    }
    Ok(())
}

fn prompt(options: Options, out: &mut impl Write) -> anyhow::Result<()> {
    if !options.json {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use prizegrid_core::RoundConfig;

    use super::*;

    fn run(session: &mut GameSession, options: Options, script: &str) -> String {
        let mut out = Vec::new();
        play(session, options, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bad_input_is_reported_and_ignored() {
        let mut session = GameSession::new(RoundConfig::default(), 7).unwrap();

        let output = run(&mut session, Options::default(), "banana\n99\n\nq\n");

        assert!(output.starts_with("Welcome to the Probability Game!"));
        assert!(output.contains("Unknown command `banana`"));
        assert!(output.contains("`99` is outside the grid"));
        assert_eq!(session.round().attempts(), 0);
    }

    #[test]
    fn repeated_cell_is_not_counted() {
        let mut session = GameSession::new(RoundConfig::new(3, 5, 3, 14), 7).unwrap();

        let output = run(&mut session, Options::default(), "4\n4\n");

        assert!(output.contains("Cell 4 is already open"));
        assert_eq!(session.round().attempts(), 1);
        assert!(output.contains("Tries: 1/14"));
    }

    #[test]
    fn finished_round_is_announced_and_reset() {
        let mut session = GameSession::new(RoundConfig::default(), 7).unwrap();
        let script: String = (0..15).map(|index| format!("{index}\n")).collect();

        let output = run(&mut session, Options::default(), &script);

        assert!(output.contains("You win!") || output.contains("Game over."));
        assert!(output.contains("New round"));
        assert!(session.rounds_started() >= 2);
    }

    #[test]
    fn outcome_follows_the_final_board() {
        let mut session = GameSession::new(RoundConfig::new(1, 1, 1, 1), 3).unwrap();

        let output = run(&mut session, Options::default(), "0\n");

        let board = output.find(" *\nTries: 1/1  Prizes: 1/1\n").unwrap();
        let message = output
            .find("\nYou win! Congratulations, you found all the prizes!\nNew round\n")
            .unwrap();
        assert!(board < message);
        assert!(!output.contains("> You win!"));
        assert_eq!(session.rounds_started(), 2);
    }

    #[test]
    fn reset_command_starts_a_new_round() {
        let mut session = GameSession::new(RoundConfig::new(3, 5, 3, 14), 7).unwrap();

        run(&mut session, Options::default(), "0\n1,1\nr\n");

        assert_eq!(session.rounds_started(), 2);
        assert_eq!(session.round().attempts(), 0);
    }

    #[test]
    fn json_mode_emits_one_observation_per_move() {
        let mut session = GameSession::new(RoundConfig::default(), 7).unwrap();

        let output = run(
            &mut session,
            Options {
                odds: true,
                json: true,
            },
            "3\n",
        );
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        // initial observation and odds, then the same after the reveal
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["attempts"], 0);
        assert_eq!(lines[1]["hidden_cells"], 15);
        assert_eq!(lines[2]["attempts"], 1);
        assert_eq!(lines[3]["hidden_cells"], 14);
    }
}
