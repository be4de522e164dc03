use log::trace;

use super::*;

/// Number of times a ray may bounce off mirrors before its next hit is final.
pub const MAX_BOUNCES: u32 = 3;

/// What a ray eventually ran into, after all of its bounces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CastResult {
    /// Length of the whole path travelled, summed over all segments.
    pub distance: Float,
    /// Code of the tile the ray stopped on, [`BOUNDARY_WALL`] if it left the grid,
    /// [`EMPTY`] if it ran out of distance.
    pub surface_type: TileCode,
    /// Always `false`, a ray that stopped did not just bounce off anything.
    pub mirror: bool,
}

impl CastResult {
    #[inline]
    fn terminated(distance: Float, surface_type: TileCode) -> Self {
        Self {
            distance,
            surface_type,
            mirror: false,
        }
    }
}

/// A light ray, represented as a half-line, along with how many times it bounced so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// The starting point of the half-line
    pub origin: Vector,
    /// The (unit) direction of the half-line
    pub direction: Vector,
    bounces: u32,
    max_bounces: u32,
}

impl Ray {
    /// Creates a ray starting at `origin`. `direction` is normalized, a zero direction stays zero.
    #[inline]
    #[must_use]
    pub fn new(origin: impl Into<Vector>, direction: impl Into<Vector>) -> Self {
        Self {
            origin: origin.into(),
            direction: direction.into().normalize(),
            bounces: 0,
            max_bounces: MAX_BOUNCES,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_max_bounces(self, max_bounces: u32) -> Self {
        Self {
            max_bounces,
            ..self
        }
    }

    #[inline]
    pub const fn bounces(&self) -> u32 {
        self.bounces
    }

    #[inline]
    pub const fn max_bounces(&self) -> u32 {
        self.max_bounces
    }

    /// Get the point at distance `t` (can be negative) from the ray's origin
    #[inline]
    pub fn at(&self, t: Float) -> Vector {
        self.origin + self.direction * t
    }

    /// Move the ray's origin forward (or backward if t < 0.0) by `t`
    #[inline]
    pub fn advance(&mut self, t: Float) {
        self.origin = self.at(t);
    }

    /// Reflect the ray's direction off a mirror with the given orientation
    #[inline]
    pub fn reflect_dir(&mut self, orientation: Orientation) {
        self.direction = orientation.reflect(self.direction);
    }

    /// Traces the ray through `grid`, bouncing off mirrors, until it stops.
    ///
    /// The ray stops when it hits a tile without a mirror, leaves the grid, travels
    /// `max_distance` in total, or hits anything after having bounced
    /// [`max_bounces`](Self::max_bounces) times already. Every iteration either returns or
    /// uses up a bounce, so this always terminates.
    ///
    /// The returned distance is the raw length of the path, no perspective correction is applied.
    pub fn cast(mut self, grid: &Grid, max_distance: Float) -> CastResult {
        let mut total = 0.0;

        loop {
            let segment = cast_segment(self.origin, self.direction, grid, max_distance - total);
            total += segment.distance();

            match segment {
                Segment::HitMirror {
                    distance, mirror, ..
                } if self.bounces < self.max_bounces && total < max_distance => {
                    self.advance(distance);
                    self.reflect_dir(mirror.orientation);
                    self.bounces += 1;

                    trace!(
                        "bounce {} off {:?} mirror at ({}, {}), {total:.3} travelled",
                        self.bounces,
                        mirror.orientation,
                        mirror.x,
                        mirror.y,
                    );
                }
                segment => return CastResult::terminated(total, segment.surface_type()),
            }
        }
    }
}
