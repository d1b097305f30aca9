use crate::games::SessionRng;
use super::adjacency::distance;
use super::settings::DragonBehavior;
use super::types::Point;

/// Cells a dragon may land on: anything except the player and the door.
pub fn dragon_candidates(grid: &[Point], player: Point, door: Point) -> Vec<Point> {
    grid.iter()
        .copied()
        .filter(|&pos| pos != player && pos != door)
        .collect()
}

/// Resolves one dragon's turn.
///
/// The first draw decides whether the dragon moves at all. A moving dragon
/// inside `pursuit_radius` only considers cells no farther from the player than
/// it already is, unless there are none. The destination is then picked
/// uniformly, and the dragon stays put if nothing is left to pick from.
pub fn move_dragon(
    dragon: Point,
    other_dragon: Point,
    player: Point,
    candidates: &[Point],
    behavior: &DragonBehavior,
    rng: &mut SessionRng,
) -> Point {
    let reachable: Vec<Point> = candidates
        .iter()
        .copied()
        .filter(|&pos| pos != other_dragon)
        .collect();

    let distance_to_player = distance(dragon, player);

    if rng.random_unit() >= behavior.move_probability {
        return dragon;
    }

    let pool = if distance_to_player <= behavior.pursuit_radius {
        let closing: Vec<Point> = reachable
            .iter()
            .copied()
            .filter(|&pos| distance(pos, player) <= distance_to_player)
            .collect();
        if closing.is_empty() { reachable } else { closing }
    } else {
        reachable
    };

    rng.choose(&pool).copied().unwrap_or(dragon)
}
