use crate::games::SessionRng;
use crate::log;
use super::adjacency::resolve_outcome;
use super::dragon::{dragon_candidates, move_dragon};
use super::error::DungeonError;
use super::grid::{generate_grid, sample_distinct};
use super::settings::DragonBehavior;
use super::types::{Direction, FieldSize, GameStatus, Point};

const ENTITY_COUNT: usize = 4;

pub struct DungeonGameState {
    field: FieldSize,
    grid: Vec<Point>,
    behavior: DragonBehavior,
    player: Point,
    door: Point,
    dragons: [Point; 2],
    status: GameStatus,
    moves_made: u32,
}

impl DungeonGameState {
    pub fn new(
        field: FieldSize,
        behavior: DragonBehavior,
        rng: &mut SessionRng,
    ) -> Result<Self, DungeonError> {
        if field.width < FieldSize::MIN_SIDE || field.height < FieldSize::MIN_SIDE {
            return Err(DungeonError::InvalidFieldSize {
                width: field.width,
                height: field.height,
            });
        }

        let grid = generate_grid(field.width, field.height);
        let placed = sample_distinct(&grid, ENTITY_COUNT, rng)?;
        let &[player, door, dragon1, dragon2] = placed.as_slice() else {
            return Err(DungeonError::InsufficientSpace {
                requested: ENTITY_COUNT,
                available: grid.len(),
            });
        };

        log!(
            "New {}x{} dungeon (seed {}): player {}, door {}, dragons {} and {}",
            field.width,
            field.height,
            rng.seed(),
            player,
            door,
            dragon1,
            dragon2
        );

        Ok(Self {
            field,
            grid,
            behavior,
            player,
            door,
            dragons: [dragon1, dragon2],
            status: GameStatus::InProgress,
            moves_made: 0,
        })
    }

    /// Plays one turn: the player steps, then each dragon moves in order, then the outcome is checked.
    ///
    /// An illegal direction leaves the state untouched.
    pub fn apply_move(
        &mut self,
        direction: Direction,
        rng: &mut SessionRng,
    ) -> Result<GameStatus, DungeonError> {
        if self.status.is_over() {
            return Err(DungeonError::GameOver);
        }

        self.player = self.field.step(self.player, direction)?;
        self.moves_made += 1;
        log!("Player moved {} to {}", direction, self.player);

        let candidates = dragon_candidates(&self.grid, self.player, self.door);
        for index in 0..self.dragons.len() {
            let other = self.dragons[1 - index];
            let before = self.dragons[index];
            let after = move_dragon(before, other, self.player, &candidates, &self.behavior, rng);
            if after != before {
                log!("Dragon {} moved from {} to {}", index + 1, before, after);
            }
            self.dragons[index] = after;
        }

        self.status = resolve_outcome(self.player, self.door, self.dragons);
        if self.status.is_over() {
            log!("Game over after {} moves: {:?}", self.moves_made, self.status);
        }

        Ok(self.status)
    }

    pub fn available_moves(&self) -> Vec<Direction> {
        self.field.legal_moves(self.player)
    }

    pub fn field(&self) -> FieldSize {
        self.field
    }

    pub fn player(&self) -> Point {
        self.player
    }

    pub fn door(&self) -> Point {
        self.door
    }

    pub fn dragons(&self) -> [Point; 2] {
        self.dragons
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    #[cfg(test)]
    fn place(&mut self, player: Point, door: Point, dragons: [Point; 2]) {
        self.player = player;
        self.door = door;
        self.dragons = dragons;
    }
}
