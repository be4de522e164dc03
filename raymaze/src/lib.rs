mod camera;
mod caster;
mod grid;
mod level;
mod ray;
mod vector;

pub use camera::*;
pub use caster::*;
pub use grid::*;
pub use level::*;
pub use ray::*;
pub use vector::*;

pub use nalgebra;

pub type Float = f64;

/// The integer stored in each grid cell. `0` is passable, anything else blocks rays.
pub type TileCode = i32;
