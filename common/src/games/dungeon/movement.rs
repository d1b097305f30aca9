use super::error::DungeonError;
use super::types::{Direction, FieldSize, Point};

/// Directions that keep `position` inside a `width` x `height` field, in `Direction::ALL` order.
pub fn legal_moves(position: Point, width: usize, height: usize) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|direction| match direction {
            Direction::Up => position.y > 0,
            Direction::Down => position.y + 1 < height,
            Direction::Left => position.x > 0,
            Direction::Right => position.x + 1 < width,
        })
        .collect()
}

/// Translates `position` one cell toward `direction`.
///
/// Only the top and left edges are known here; a move past either fails with
/// `IllegalMove` instead of wrapping. Use [`FieldSize::step`] when the field is known.
pub fn apply_move(position: Point, direction: Direction) -> Result<Point, DungeonError> {
    let illegal = || DungeonError::IllegalMove { position, direction };

    let next = match direction {
        Direction::Up => Point::new(position.x, position.y.checked_sub(1).ok_or_else(illegal)?),
        Direction::Down => Point::new(position.x, position.y + 1),
        Direction::Left => Point::new(position.x.checked_sub(1).ok_or_else(illegal)?, position.y),
        Direction::Right => Point::new(position.x + 1, position.y),
    };

    Ok(next)
}

impl FieldSize {
    pub fn legal_moves(&self, position: Point) -> Vec<Direction> {
        legal_moves(position, self.width, self.height)
    }

    /// Bounded move: any direction not in [`legal_moves`] is an `IllegalMove`.
    pub fn step(&self, position: Point, direction: Direction) -> Result<Point, DungeonError> {
        if !self.legal_moves(position).contains(&direction) {
            return Err(DungeonError::IllegalMove { position, direction });
        }
        apply_move(position, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::dungeon::grid::generate_grid;

    #[test]
    fn test_interior_has_all_moves() {
        let moves = legal_moves(Point::new(2, 2), 5, 5);
        assert_eq!(moves, Direction::ALL.to_vec());
    }

    #[test]
    fn test_top_left_corner() {
        let moves = legal_moves(Point::new(0, 0), 5, 5);
        assert_eq!(moves, vec![Direction::Down, Direction::Right]);
    }

    #[test]
    fn test_bottom_right_corner_non_square() {
        let moves = legal_moves(Point::new(6, 2), 7, 3);
        assert_eq!(moves, vec![Direction::Up, Direction::Left]);
    }

    #[test]
    fn test_every_edge_excludes_outward_direction() {
        let (width, height) = (4, 6);
        for point in generate_grid(width, height) {
            let moves = legal_moves(point, width, height);
            assert_eq!(!moves.contains(&Direction::Left), point.x == 0, "{point}");
            assert_eq!(!moves.contains(&Direction::Right), point.x == width - 1, "{point}");
            assert_eq!(!moves.contains(&Direction::Up), point.y == 0, "{point}");
            assert_eq!(!moves.contains(&Direction::Down), point.y == height - 1, "{point}");
        }
    }

    #[test]
    fn test_legal_moves_stay_on_field() {
        let field = FieldSize::new(3, 4);
        for point in generate_grid(field.width, field.height) {
            for direction in field.legal_moves(point) {
                let next = field.step(point, direction).unwrap();
                assert!(field.contains(next));
            }
        }
    }

    #[test]
    fn test_apply_move_each_direction() {
        let start = Point::new(2, 3);
        assert_eq!(apply_move(start, Direction::Up), Ok(Point::new(2, 2)));
        assert_eq!(apply_move(start, Direction::Down), Ok(Point::new(2, 4)));
        assert_eq!(apply_move(start, Direction::Left), Ok(Point::new(1, 3)));
        assert_eq!(apply_move(start, Direction::Right), Ok(Point::new(3, 3)));
    }

    #[test]
    fn test_apply_move_opposite_returns_to_start() {
        let start = Point::new(3, 3);
        for direction in Direction::ALL {
            let moved = apply_move(start, direction).unwrap();
            assert_eq!(apply_move(moved, direction.opposite()), Ok(start));
        }
    }

    #[test]
    fn test_apply_move_past_origin_fails() {
        let origin = Point::new(0, 0);
        assert_eq!(
            apply_move(origin, Direction::Up),
            Err(DungeonError::IllegalMove {
                position: origin,
                direction: Direction::Up
            })
        );
        assert!(apply_move(origin, Direction::Left).is_err());
    }

    #[test]
    fn test_step_rejects_far_edges() {
        let field = FieldSize::new(5, 5);
        assert!(field.step(Point::new(4, 2), Direction::Right).is_err());
        assert!(field.step(Point::new(2, 4), Direction::Down).is_err());
        assert_eq!(field.step(Point::new(3, 2), Direction::Right), Ok(Point::new(4, 2)));
    }
}
