use rayon::prelude::*;

use super::*;

/// A first person point of view: a position, a view direction and a camera plane
/// (perpendicular to the direction) across which one ray per screen column is fanned out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vector,
    pub direction: Vector,
    pub plane: Vector,
}

impl Camera {
    #[inline]
    #[must_use]
    pub const fn new(position: Vector, direction: Vector, plane: Vector) -> Self {
        Self {
            position,
            direction,
            plane,
        }
    }

    /// The (unnormalized) direction of the ray cast for `column`, out of `columns`.
    ///
    /// Column `0` sits on the `-plane` edge of the view, column `columns / 2` in its center.
    #[inline]
    pub fn column_direction(&self, column: usize, columns: usize) -> Vector {
        let camera_x = 2.0 * column as Float / columns as Float - 1.0;
        self.direction + self.plane * camera_x
    }

    /// The factor to multiply a column's raw distance by to undo the fisheye effect,
    /// i.e. the cosine of the angle between the column's ray and the view direction.
    ///
    /// Not applied by any of the casting methods, it is up to renderers to do so.
    #[inline]
    pub fn fisheye_factor(&self, column: usize, columns: usize) -> Float {
        self.column_direction(column, columns)
            .normalize()
            .dot(&self.direction.normalize())
            .abs()
    }

    #[inline]
    pub fn cast_column(
        &self,
        grid: &Grid,
        column: usize,
        columns: usize,
        max_distance: Float,
    ) -> CastResult {
        Ray::new(self.position, self.column_direction(column, columns)).cast(grid, max_distance)
    }

    /// Casts one ray per column, left to right. Columns are independent of each
    /// other and are cast in parallel.
    pub fn cast_frame(&self, grid: &Grid, columns: usize, max_distance: Float) -> Vec<CastResult> {
        (0..columns)
            .into_par_iter()
            .map(|column| self.cast_column(grid, column, columns, max_distance))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Grid {
        Grid::new([
            [1, 1, 1, 1, 1, 1],
            [1, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 2],
            [1, 0, 0, 0, 0, 1],
            [1, 1, 1, 1, 1, 1],
        ])
        .unwrap()
    }

    #[test]
    fn test_column_directions() {
        let camera = Pose::new(1.5, 2.5, 0.0).camera();

        let left = camera.column_direction(0, 4);
        let center = camera.column_direction(2, 4);

        assert!((left - Vector::new(1.0, -FOV_SCALE)).length() < 1e-12);
        assert!((center - Vector::new(1.0, 0.0)).length() < 1e-12);
        assert!((camera.fisheye_factor(2, 4) - 1.0).abs() < 1e-12);
        assert!(camera.fisheye_factor(0, 4) < 1.0);
    }

    #[test]
    fn test_frame_matches_sequential_casts() {
        let grid = room();
        let camera = Pose::new(1.5, 2.5, 0.1).camera();

        let frame = camera.cast_frame(&grid, 33, 20.0);

        assert_eq!(frame.len(), 33);
        for (column, result) in frame.iter().enumerate() {
            assert_eq!(*result, camera.cast_column(&grid, column, 33, 20.0));
        }
    }

    #[test]
    fn test_frame_is_uncorrected() {
        let grid = room();
        let camera = Pose::new(1.5, 2.5, 0.0).camera();

        let frame = camera.cast_frame(&grid, 4, 20.0);

        // the central column looks straight at the `2` on the east wall
        assert_eq!(frame[2].surface_type, 2);
        assert!((frame[2].distance - 3.5).abs() < 1e-6);

        // column 1 hits the east wall too, along a slanted path
        let expected = 3.5 * Vector::new(1.0, -FOV_SCALE / 2.0).length();
        assert_eq!(frame[1].surface_type, 1);
        assert!((frame[1].distance - expected).abs() < 1e-6);
        assert!((frame[1].distance * camera.fisheye_factor(1, 4) - 3.5).abs() < 1e-6);
    }

    #[test]
    fn test_empty_frame() {
        let camera = Pose::default().camera();
        assert!(camera.cast_frame(&room(), 0, 20.0).is_empty());
    }
}
