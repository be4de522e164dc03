use core::f64::consts::FRAC_PI_2;

use super::*;

/// How far the camera plane reaches on each side of the view direction.
/// `0.66` gives a field of view of roughly 66 degrees.
pub const FOV_SCALE: Float = 0.66;

/// Where the player stands and which way they look, `angle` being in radians
/// from the x axis, towards the y axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub x: Float,
    pub y: Float,
    pub angle: Float,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            x: 1.5,
            y: 1.5,
            angle: 0.0,
        }
    }
}

impl Pose {
    #[inline]
    #[must_use]
    pub const fn new(x: Float, y: Float, angle: Float) -> Self {
        Self { x, y, angle }
    }

    #[inline]
    pub fn position(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    #[inline]
    pub fn direction(&self) -> Vector {
        Vector::from_angle(self.angle)
    }

    /// The camera looking out from this pose, with a plane scaled by [`FOV_SCALE`].
    #[inline]
    pub fn camera(&self) -> Camera {
        let direction = self.direction();
        Camera::new(
            self.position(),
            direction,
            direction.rotate(FRAC_PI_2) * FOV_SCALE,
        )
    }
}

/// Everything needed to start playing: the grid, with its mirrors, and where the player spawns.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub grid: Grid,
    pub player: Pose,
}

impl Level {
    #[inline]
    #[must_use]
    pub fn new(grid: Grid, player: Pose) -> Self {
        Self { grid, player }
    }
}
