use super::*;

/// Direction components smaller than this (in magnitude) are replaced by it, keeping their sign.
pub const DIRECTION_EPSILON: Float = 1e-4;

/// Grid lines closer than this to a segment's origin are not counted as crossings.
///
/// A ray leaving a mirror starts (up to roundoff) on the grid line it just hit, without this,
/// it could land slightly "before" that line and bounce off the same mirror again.
pub const LINE_EPSILON: Float = 1e-9;

/// How a single straight segment of a ray ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// Struck a non-empty tile with no mirror on it (or left the grid, reported as [`BOUNDARY_WALL`]).
    HitWall { distance: Float, code: TileCode },
    /// Struck a tile carrying a mirror.
    HitMirror {
        distance: Float,
        code: TileCode,
        mirror: MirrorTile,
    },
    /// Travelled the whole budget without hitting anything.
    OutOfBudget { distance: Float },
}

impl Segment {
    /// The length travelled along this segment.
    #[inline]
    pub fn distance(&self) -> Float {
        match *self {
            Self::HitWall { distance, .. }
            | Self::HitMirror { distance, .. }
            | Self::OutOfBudget { distance } => distance,
        }
    }

    /// The code of the tile that stopped this segment, `0` if nothing did.
    #[inline]
    pub fn surface_type(&self) -> TileCode {
        match *self {
            Self::HitWall { code, .. } | Self::HitMirror { code, .. } => code,
            Self::OutOfBudget { .. } => EMPTY,
        }
    }
}

#[inline]
fn nudge(component: Float) -> Float {
    if component.abs() < DIRECTION_EPSILON {
        DIRECTION_EPSILON.copysign(component)
    } else {
        component
    }
}

/// The first grid line (on one axis) crossed when moving from `coord` along `dir`.
#[inline]
fn first_line(coord: Float, dir: Float) -> Float {
    if dir > 0.0 {
        let line = coord.floor() + 1.0;
        if line - coord < LINE_EPSILON {
            line + 1.0
        } else {
            line
        }
    } else {
        let line = coord.ceil() - 1.0;
        if coord - line < LINE_EPSILON {
            line - 1.0
        } else {
            line
        }
    }
}

/// Walks the grid from `origin` along `direction`, one cell boundary at a time,
/// and reports the first obstruction closer than `max_distance`.
///
/// Distances are measured along `direction` as given, so callers should pass a unit
/// vector to get euclidean lengths. A ray crossing both kinds of grid lines at the
/// exact same distance is considered to cross the horizontal (`y = k`) one.
///
/// Since the grid is finite and every iteration enters a new cell further along the ray,
/// this always terminates, regardless of `max_distance`. Non-finite inputs travel nowhere.
pub fn cast_segment(
    origin: Vector,
    direction: Vector,
    grid: &Grid,
    max_distance: Float,
) -> Segment {
    let (ox, oy) = (origin.x(), origin.y());
    let (dx, dy) = (nudge(direction.x()), nudge(direction.y()));

    if max_distance.is_nan()
        || max_distance <= 0.0
        || ![ox, oy, dx, dy].iter().all(|c| c.is_finite())
    {
        return Segment::OutOfBudget { distance: 0.0 };
    }

    let step_x = dx.signum();
    let step_y = dy.signum();

    // next vertical (x = k) and horizontal (y = k) grid lines on the ray's path
    let mut line_x = first_line(ox, dx);
    let mut line_y = first_line(oy, dy);

    loop {
        let t_x = (line_x - ox) / dx;
        let t_y = (line_y - oy) / dy;

        let crosses_x = t_x < t_y;

        let (distance, cell_x, cell_y) = if crosses_x {
            (t_x, line_x + 0.5 * step_x, oy + t_x * dy)
        } else {
            (t_y, ox + t_y * dx, line_y + 0.5 * step_y)
        };

        if distance > max_distance {
            return Segment::OutOfBudget {
                distance: max_distance,
            };
        }

        let (x, y) = (cell_x.floor() as i64, cell_y.floor() as i64);

        if !grid.in_bounds(x, y) {
            return Segment::HitWall {
                distance,
                code: BOUNDARY_WALL,
            };
        }

        let code = grid.tile_at(x, y);

        if code != EMPTY {
            return match grid.mirror_at(x, y) {
                Some(mirror) => Segment::HitMirror {
                    distance,
                    code,
                    mirror,
                },
                None => Segment::HitWall { distance, code },
            };
        }

        if crosses_x {
            line_x += step_x;
        } else {
            line_y += step_y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A `size`x`size` grid bordered with `1`s, empty inside.
    fn walled(size: usize) -> Vec<Vec<TileCode>> {
        (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| {
                        if x == 0 || y == 0 || x == size - 1 || y == size - 1 {
                            1
                        } else {
                            0
                        }
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_hits_interior_wall() {
        let mut rows = walled(10);
        rows[1][5] = 2;
        let grid = Grid::new(rows).unwrap();

        let segment = cast_segment(
            Vector::new(1.5, 1.5),
            Vector::new(1.0, 0.0),
            &grid,
            20.0,
        );

        assert!((segment.distance() - 3.5).abs() < 1e-6);
        assert_eq!(segment.surface_type(), 2);
        assert!(matches!(segment, Segment::HitWall { .. }));
    }

    #[test]
    fn test_hits_border_going_up() {
        let grid = Grid::new(walled(10)).unwrap();

        let segment = cast_segment(
            Vector::new(4.5, 6.25),
            Vector::new(0.0, -1.0),
            &grid,
            20.0,
        );

        assert_eq!(
            segment,
            Segment::HitWall {
                distance: 5.25,
                code: 1
            }
        );
    }

    #[test]
    fn test_diagonal() {
        let mut rows = walled(10);
        rows[4][4] = 7;
        let grid = Grid::new(rows).unwrap();

        let d = Vector::new(1.0, 1.0).normalize();
        let segment = cast_segment(Vector::new(1.5, 1.6), d, &grid, 20.0);

        // enters cell (4, 4) through its left side, at x = 4
        let expected = (4.0 - 1.5) * core::f64::consts::SQRT_2;
        assert_eq!(segment.surface_type(), 7);
        assert!((segment.distance() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_budget() {
        let grid = Grid::new(walled(10)).unwrap();

        let segment = cast_segment(
            Vector::new(1.5, 1.5),
            Vector::new(1.0, 0.0),
            &grid,
            2.0,
        );

        assert_eq!(segment, Segment::OutOfBudget { distance: 2.0 });
        assert_eq!(segment.surface_type(), EMPTY);
    }

    #[test]
    fn test_zero_budget() {
        let grid = Grid::new(walled(3)).unwrap();

        let segment = cast_segment(
            Vector::new(1.5, 1.5),
            Vector::new(1.0, 0.0),
            &grid,
            0.0,
        );

        assert_eq!(segment, Segment::OutOfBudget { distance: 0.0 });
    }

    #[test]
    fn test_leaving_open_grid_hits_sentinel() {
        let grid = Grid::new([[0; 4]; 4]).unwrap();

        let segment = cast_segment(
            Vector::new(0.5, 2.5),
            Vector::new(-1.0, 0.0),
            &grid,
            20.0,
        );

        assert_eq!(
            segment,
            Segment::HitWall {
                distance: 0.5,
                code: BOUNDARY_WALL
            }
        );
    }

    #[test]
    fn test_reports_mirror() {
        let mut rows = walled(6);
        rows[2][4] = 3;
        let mirror = MirrorTile::new(4, 2, Orientation::Vertical);
        let grid = Grid::new(rows).unwrap().with_mirrors([mirror]).unwrap();

        let segment = cast_segment(
            Vector::new(1.5, 2.5),
            Vector::new(1.0, 0.0),
            &grid,
            20.0,
        );

        assert_eq!(
            segment,
            Segment::HitMirror {
                distance: 2.5,
                code: 3,
                mirror
            }
        );
    }

    #[test]
    fn test_origin_on_grid_line() {
        let mut rows = walled(8);
        rows[3][5] = 2;
        let grid = Grid::new(rows).unwrap();

        // starting exactly on x = 5 (the face of the wall) and moving away from it
        let segment = cast_segment(
            Vector::new(5.0, 3.5),
            Vector::new(-1.0, 0.0),
            &grid,
            20.0,
        );
        assert_eq!(segment.surface_type(), 1);
        assert!((segment.distance() - 4.0).abs() < 1e-9);

        // a line the origin sits on is never crossed, so both of these skip cell (5, 3)
        let exact = cast_segment(
            Vector::new(5.0, 3.5),
            Vector::new(1.0, 0.0),
            &grid,
            20.0,
        );
        let rounded = cast_segment(
            Vector::new(5.0 - 1e-12, 3.5),
            Vector::new(1.0, 0.0),
            &grid,
            20.0,
        );
        assert_eq!(exact.surface_type(), 1);
        assert_eq!(rounded.surface_type(), 1);
        assert!((exact.distance() - 2.0).abs() < 1e-9);
        assert!((rounded.distance() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_corner_tie_prefers_horizontal_line() {
        // the ray passes exactly through the corner shared by cells (1, 1), (2, 1), (1, 2) and (2, 2)
        let rows = [[0, 0, 0, 0], [0, 0, 4, 0], [0, 5, 0, 0], [0, 0, 0, 0]];
        let grid = Grid::new(rows).unwrap();

        let segment = cast_segment(
            Vector::new(1.5, 1.5),
            Vector::new(1.0, 1.0),
            &grid,
            20.0,
        );

        // every crossing lands on a corner, the ray goes through (2, 2) and (3, 3)
        // without touching (2, 1), then leaves the grid
        assert_eq!(segment.surface_type(), BOUNDARY_WALL);

        let segment = cast_segment(
            Vector::new(1.5, 1.5),
            Vector::new(-1.0, 1.0),
            &grid,
            20.0,
        );

        // tie at (1, 2): crossing y = 2 at x = 1.0 enters cell (1, 2), holding a 5
        assert_eq!(segment.surface_type(), 5);
    }
}
