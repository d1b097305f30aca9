mod adjacency;
mod dragon;
mod error;
mod game_state;
mod grid;
mod movement;
mod settings;
mod types;

pub use adjacency::{distance, is_near, resolve_outcome};
pub use dragon::{dragon_candidates, move_dragon};
pub use error::DungeonError;
pub use game_state::DungeonGameState;
pub use grid::{generate_grid, sample_distinct};
pub use movement::{apply_move, legal_moves};
pub use settings::DragonBehavior;
pub use types::{Direction, FieldSize, GameStatus, LossReason, Point};
