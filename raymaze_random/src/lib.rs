use raymaze::*;

use core::f64::consts::TAU;
use log::debug;
use rand::seq::SliceRandom;
pub use rand;

pub trait Random: Sized {
    /// Generate a randomized value using the provided `rng`
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self;
}

impl Random for Orientation {
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        if rng.gen_bool(0.5) {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

/// Tile code given to cells carrying a mirror.
pub const MIRROR_CODE: TileCode = 3;

/// Shape of a randomly generated level.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelParams {
    pub width: usize,
    pub height: usize,
    /// Probability for an inner cell to hold a wall.
    pub wall_density: f64,
    /// Upper bound on the number of mirrors, there may be fewer if walls are scarce.
    pub mirror_count: usize,
}

impl Default for LevelParams {
    fn default() -> Self {
        Self {
            width: 12,
            height: 12,
            wall_density: 0.15,
            mirror_count: 3,
        }
    }
}

/// Generates a level bordered with walls, with walls scattered inside, some of them
/// turned into mirrors. The player spawns in cell `(1, 1)`, which is always kept clear
/// along with its right and bottom neighbours.
///
/// Dimensions smaller than 3 are raised to 3, and `wall_density` is clamped to `[0, 1]`.
pub fn random_level(
    rng: &mut (impl rand::Rng + ?Sized),
    params: &LevelParams,
) -> Result<Level, InvalidLevel> {
    let width = params.width.max(3);
    let height = params.height.max(3);
    let density = params.wall_density.clamp(0.0, 1.0);

    let spawn_area = [(1, 1), (2, 1), (1, 2)];

    let mut rows = vec![vec![EMPTY; width]; height];
    let mut inner_walls = Vec::new();

    for (y, row) in rows.iter_mut().enumerate() {
        for (x, tile) in row.iter_mut().enumerate() {
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                *tile = BOUNDARY_WALL;
            } else if !spawn_area.contains(&(x, y)) && rng.gen_bool(density) {
                *tile = rng.gen_range(1..=2);
                inner_walls.push((x, y));
            }
        }
    }

    let mirrors: Vec<_> = inner_walls
        .choose_multiple(&mut *rng, params.mirror_count)
        .map(|&(x, y)| {
            rows[y][x] = MIRROR_CODE;
            MirrorTile::new(x as i64, y as i64, Orientation::random(&mut *rng))
        })
        .collect();

    debug!(
        "generated a {width}x{height} level with {} inner wall(s) and {} mirror(s)",
        inner_walls.len(),
        mirrors.len()
    );

    let grid = Grid::new(rows)?.with_mirrors(mirrors)?;

    Ok(Level::new(grid, Pose::new(1.5, 1.5, rng.gen_range(0.0..TAU))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_deterministic_generation() {
        let params = LevelParams::default();

        let level1 = random_level(&mut StdRng::seed_from_u64(42), &params).unwrap();
        let level2 = random_level(&mut StdRng::seed_from_u64(42), &params).unwrap();

        assert_eq!(level1, level2);
    }

    #[test]
    fn test_levels_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = LevelParams {
            width: 16,
            height: 9,
            wall_density: 0.4,
            mirror_count: 5,
        };

        for _ in 0..50 {
            let level = random_level(&mut rng, &params).unwrap();
            let grid = &level.grid;

            assert_eq!(grid.width(), 16);
            assert_eq!(grid.height(), 9);

            for x in 0..16 {
                assert_eq!(grid.tile_at(x, 0), BOUNDARY_WALL);
                assert_eq!(grid.tile_at(x, 8), BOUNDARY_WALL);
            }
            for y in 0..9 {
                assert_eq!(grid.tile_at(0, y), BOUNDARY_WALL);
                assert_eq!(grid.tile_at(15, y), BOUNDARY_WALL);
            }

            assert!(!grid.is_blocked(1, 1));
            assert!(grid.mirrors().count() <= 5);
            for mirror in grid.mirrors() {
                assert_eq!(grid.tile_at(mirror.x, mirror.y), MIRROR_CODE);
            }

            let (x, y) = (level.player.x, level.player.y);
            assert_eq!((x, y), (1.5, 1.5));
            assert!((0.0..TAU).contains(&level.player.angle));
        }
    }

    #[test]
    fn test_no_walls_no_mirrors() {
        let params = LevelParams {
            wall_density: 0.0,
            ..LevelParams::default()
        };
        let level = random_level(&mut StdRng::seed_from_u64(3), &params).unwrap();

        assert_eq!(level.grid.mirrors().count(), 0);
        assert!(!level.grid.is_blocked(5, 5));
    }

    #[test]
    fn test_tiny_dimensions_are_raised() {
        let params = LevelParams {
            width: 0,
            height: 1,
            ..LevelParams::default()
        };
        let level = random_level(&mut StdRng::seed_from_u64(9), &params).unwrap();

        assert_eq!((level.grid.width(), level.grid.height()), (3, 3));
        assert!(!level.grid.is_blocked(1, 1));
    }
}
