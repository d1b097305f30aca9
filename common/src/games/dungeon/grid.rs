use crate::games::SessionRng;
use super::error::DungeonError;
use super::types::Point;

/// Every cell of the field, `x` outermost and `y` varying fastest.
pub fn generate_grid(width: usize, height: usize) -> Vec<Point> {
    (0..width)
        .flat_map(|x| (0..height).map(move |y| Point::new(x, y)))
        .collect()
}

pub fn sample_distinct(
    grid: &[Point],
    count: usize,
    rng: &mut SessionRng,
) -> Result<Vec<Point>, DungeonError> {
    if count > grid.len() {
        return Err(DungeonError::InsufficientSpace {
            requested: count,
            available: grid.len(),
        });
    }
    Ok(rng.sample(grid, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_grid_order() {
        let grid = generate_grid(2, 3);
        assert_eq!(
            grid,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_generate_grid_size_and_bounds() {
        let (width, height) = (5, 4);
        let grid = generate_grid(width, height);
        assert_eq!(grid.len(), width * height);

        let unique: HashSet<Point> = grid.iter().copied().collect();
        assert_eq!(unique.len(), grid.len());
        assert!(grid.iter().all(|p| p.x < width && p.y < height));
    }

    #[test]
    fn test_sample_distinct_four() {
        let grid = generate_grid(5, 5);
        for seed in 0..50 {
            let mut rng = SessionRng::new(seed);
            let picked = sample_distinct(&grid, 4, &mut rng).unwrap();
            assert_eq!(picked.len(), 4);

            let unique: HashSet<Point> = picked.iter().copied().collect();
            assert_eq!(unique.len(), 4);
            assert!(picked.iter().all(|p| grid.contains(p)));
        }
    }

    #[test]
    fn test_sample_distinct_whole_grid() {
        let grid = generate_grid(2, 2);
        let mut rng = SessionRng::new(9);
        let picked = sample_distinct(&grid, 4, &mut rng).unwrap();
        let unique: HashSet<Point> = picked.into_iter().collect();
        let expected: HashSet<Point> = grid.into_iter().collect();
        assert_eq!(unique, expected);
    }

    #[test]
    fn test_sample_distinct_insufficient_space() {
        let grid = generate_grid(1, 1);
        let mut rng = SessionRng::new(0);
        assert_eq!(
            sample_distinct(&grid, 4, &mut rng),
            Err(DungeonError::InsufficientSpace {
                requested: 4,
                available: 1
            })
        );
    }

    #[test]
    fn test_sample_distinct_is_reproducible() {
        let grid = generate_grid(6, 6);
        let first = sample_distinct(&grid, 4, &mut SessionRng::new(11)).unwrap();
        let second = sample_distinct(&grid, 4, &mut SessionRng::new(11)).unwrap();
        assert_eq!(first, second);
    }
}
