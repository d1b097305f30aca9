use super::types::{Direction, Point};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DungeonError {
    #[error("Cannot place {requested} distinct entities on a grid of {available} cells")]
    InsufficientSpace { requested: usize, available: usize },

    #[error("Cannot move {direction} from {position}")]
    IllegalMove { position: Point, direction: Direction },

    #[error("Field must be at least 2x2, got {width}x{height}")]
    InvalidFieldSize { width: usize, height: usize },

    #[error("The game is already over")]
    GameOver,
}
