use super::types::{GameStatus, LossReason, Point};

pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x as f64 - b.x as f64;
    let dy = a.y as f64 - b.y as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Orthogonal neighbours only: a diagonal dragon is `sqrt(2)` away and does not count.
pub fn is_near(player: Point, dragon1: Point, dragon2: Point) -> bool {
    distance(player, dragon1) == 1.0 || distance(player, dragon2) == 1.0
}

/// End-of-turn outcome. Checked in order: caught, spotted, reached the door.
pub fn resolve_outcome(player: Point, door: Point, dragons: [Point; 2]) -> GameStatus {
    if dragons.contains(&player) {
        GameStatus::Lost(LossReason::Caught)
    } else if is_near(player, dragons[0], dragons[1]) {
        GameStatus::Lost(LossReason::Spotted)
    } else if player == door {
        GameStatus::Won
    } else {
        GameStatus::InProgress
    }
}
