use core::f64::consts::TAU;

use raymaze::*;

/// Distance kept between the player's center and any wall.
const COLLISION_MARGIN: Float = 0.3;

/// Distance walked per movement step, walls are checked after each one.
pub const STEP: Float = 3.0 / 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub pose: Pose,
}

impl Player {
    pub fn new(pose: Pose) -> Self {
        Self { pose }
    }

    pub fn camera(&self) -> Camera {
        self.pose.camera()
    }

    /// Turns by `angle` radians, keeping the heading in `[0, 2π)`.
    pub fn rotate(&mut self, angle: Float) {
        self.pose.angle = (self.pose.angle + angle).rem_euclid(TAU);
    }

    /// Returns whether the player actually moved.
    pub fn move_forward(&mut self, speed: Float, grid: &Grid) -> bool {
        self.try_move(self.pose.direction() * speed, grid)
    }

    /// Returns whether the player actually moved.
    pub fn move_backward(&mut self, speed: Float, grid: &Grid) -> bool {
        self.try_move(-self.pose.direction() * speed, grid)
    }

    /// Walks `distance` (backwards if negative) in steps of [`STEP`],
    /// stopping at the first step that would run into a wall.
    pub fn walk(&mut self, distance: Float, grid: &Grid) {
        let mut left = distance.abs();

        while left > 0.0 {
            let speed = left.min(STEP);
            let moved = if distance > 0.0 {
                self.move_forward(speed, grid)
            } else {
                self.move_backward(speed, grid)
            };

            if !moved {
                break;
            }
            left -= speed;
        }
    }

    fn try_move(&mut self, offset: Vector, grid: &Grid) -> bool {
        let target = self.pose.position() + offset;

        if collides(target, grid) {
            return false;
        }

        self.pose.x = target.x();
        self.pose.y = target.y();
        true
    }
}

/// Whether a player standing at `position` would overlap a non-empty (or out of bounds) cell.
fn collides(position: Vector, grid: &Grid) -> bool {
    [
        (-COLLISION_MARGIN, -COLLISION_MARGIN),
        (COLLISION_MARGIN, -COLLISION_MARGIN),
        (-COLLISION_MARGIN, COLLISION_MARGIN),
        (COLLISION_MARGIN, COLLISION_MARGIN),
    ]
    .into_iter()
    .any(|(dx, dy)| {
        let x = (position.x() + dx).floor() as i64;
        let y = (position.y() + dy).floor() as i64;
        grid.is_blocked(x, y)
    })
}
