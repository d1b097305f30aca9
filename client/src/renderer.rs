use dungeon_common::games::dungeon::{DungeonGameState, GameStatus, LossReason, Point};

pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

const PLAYER_CELL: char = 'X';
const DOOR_CELL: char = 'D';
const DRAGON_CELL: char = 'E';
const EMPTY_CELL: char = '_';

/// Draws the field row by row. Door and dragons stay hidden unless `reveal` is set.
pub fn render_map(state: &DungeonGameState, reveal: bool) -> String {
    let field = state.field();
    let mut map = String::with_capacity(field.cell_count() * 2 + field.height);

    for y in 0..field.height {
        for x in 0..field.width {
            map.push(cell_char(state, Point::new(x, y), reveal));
            map.push(' ');
        }
        map.push('\n');
    }

    map
}

fn cell_char(state: &DungeonGameState, point: Point, reveal: bool) -> char {
    if point == state.player() {
        PLAYER_CELL
    } else if reveal && point == state.door() {
        DOOR_CELL
    } else if reveal && state.dragons().contains(&point) {
        DRAGON_CELL
    } else {
        EMPTY_CELL
    }
}

pub fn status_lines(state: &DungeonGameState) -> String {
    let moves: Vec<&str> = state.available_moves().iter().map(|d| d.as_str()).collect();
    format!(
        "You are in room: {}\nYou can move in: {}\n",
        state.player(),
        moves.join(", ")
    )
}

pub fn outcome_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won => Some("You won the game!"),
        GameStatus::Lost(LossReason::Caught) => Some("You lost the game!"),
        GameStatus::Lost(LossReason::Spotted) => Some("You lost the game! Dragon saw you"),
    }
}
