use std::io::{self, BufRead, Write};

use dungeon_common::games::SessionRng;
use dungeon_common::games::dungeon::{DungeonError, DungeonGameState, FieldSize, GameStatus};
use dungeon_common::log;

use crate::input::{PlayerCommand, parse_command, parse_dimensions};
use crate::renderer::{CLEAR_SCREEN, outcome_message, render_map, status_lines};

#[derive(Debug, Clone, Copy)]
pub struct GameOptions {
    pub reveal_map: bool,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(GameStatus),
    Quit,
    InputClosed,
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Asks for `W, H` until a usable size is entered. `None` if input runs out first.
pub fn prompt_dimensions<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<FieldSize>> {
    loop {
        write!(output, "Please enter the dimensions of your map, like (5, 5): ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match parse_dimensions(&line) {
            Ok(field) => return Ok(Some(field)),
            Err(message) => writeln!(output, "{}", message)?,
        }
    }
}

pub fn run_game<R: BufRead, W: Write>(
    state: &mut DungeonGameState,
    rng: &mut SessionRng,
    options: GameOptions,
    input: &mut R,
    output: &mut W,
) -> io::Result<SessionEnd> {
    let mut notice: Option<String> = None;

    loop {
        if options.clear_screen {
            write!(output, "{}", CLEAR_SCREEN)?;
        }
        write!(output, "{}", render_map(state, options.reveal_map))?;
        write!(output, "{}", status_lines(state))?;
        if let Some(message) = notice.take() {
            writeln!(output, "{}", message)?;
        }
        write!(output, "Please enter your move: ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            log!("Input closed after {} moves", state.moves_made());
            return Ok(SessionEnd::InputClosed);
        };

        let direction = match parse_command(&line) {
            Ok(PlayerCommand::Move(direction)) => direction,
            Ok(PlayerCommand::Exit) => {
                log!("Player quit after {} moves", state.moves_made());
                return Ok(SessionEnd::Quit);
            }
            Err(message) => {
                notice = Some(message);
                continue;
            }
        };

        match state.apply_move(direction, rng) {
            Ok(status) => {
                if let Some(message) = outcome_message(status) {
                    writeln!(output)?;
                    write!(output, "{}", render_map(state, true))?;
                    writeln!(output, "{}", message)?;
                    return Ok(SessionEnd::Finished(status));
                }
            }
            Err(DungeonError::IllegalMove { .. }) => {
                notice = Some("Please enter a valid move.".to_string());
            }
            Err(e) => return Err(io::Error::other(e)),
        }
    }
}
