use log::debug;
use raymaze::*;
use std::{error::Error, fs::File, io::BufReader, path::Path};

pub use serde_json;

pub fn map_json_array<C: FromIterator<T>, T>(
    json: &serde_json::Value,
    map: impl FnMut(&serde_json::Value) -> Result<T, Box<dyn Error>>,
) -> Result<C, Box<dyn Error>> {
    json.as_array()
        .ok_or("json value must be an array")?
        .iter()
        .map(map)
        .collect()
}

fn get_float(json: &serde_json::Value, field: &str) -> Result<Float, Box<dyn Error>> {
    json.get(field)
        .ok_or_else(|| format!("missing field: {field}"))?
        .as_f64()
        .ok_or_else(|| format!("{field} must be a number").into())
}

fn get_integer(json: &serde_json::Value, field: &str) -> Result<i64, Box<dyn Error>> {
    json.get(field)
        .ok_or_else(|| format!("missing field: {field}"))?
        .as_i64()
        .ok_or_else(|| format!("{field} must be an integer").into())
}

pub trait JsonSer {
    /// Serialize `self` into a JSON object.
    fn to_json(&self) -> serde_json::Value;
}

impl<T: JsonSer> JsonSer for [T] {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(Vec::from_iter(self.iter().map(T::to_json)))
    }
}

pub trait JsonDes {
    /// Deserialize from a JSON object.
    ///
    /// Returns an error if `json`'s format or values are invalid.
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>>
    where
        Self: Sized;
}

impl<T: JsonDes> JsonDes for Vec<T> {
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        map_json_array(json, T::from_json)
    }
}

impl JsonSer for Orientation {
    fn to_json(&self) -> serde_json::Value {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
        .into()
    }
}

impl JsonDes for Orientation {
    /// Either `"horizontal"` or `"vertical"`.
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        match json.as_str().ok_or("mirror orientation must be a string")? {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(format!("invalid mirror orientation: {other}").into()),
        }
    }
}

impl JsonSer for MirrorTile {
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "x": self.x,
            "y": self.y,
            "orientation": self.orientation.to_json(),
        })
    }
}

impl JsonDes for MirrorTile {
    /// Deserialize a mirror from a JSON object.
    ///
    /// ```json
    /// { "x": 4, "y": 3, "orientation": "vertical" }
    /// ```
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        let orientation = json
            .get("orientation")
            .ok_or("missing field: orientation")?;

        Ok(Self::new(
            get_integer(json, "x")?,
            get_integer(json, "y")?,
            Orientation::from_json(orientation)?,
        ))
    }
}

impl JsonSer for Pose {
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "x": self.x,
            "y": self.y,
            "angle": self.angle,
        })
    }
}

impl JsonDes for Pose {
    /// Deserialize a player pose from a JSON object.
    ///
    /// ```json
    /// { "x": 1.5, "y": 1.5, "angle": 0 }
    /// ```
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        Ok(Self::new(
            get_float(json, "x")?,
            get_float(json, "y")?,
            get_float(json, "angle")?,
        ))
    }
}

fn tile_row_from_json(json: &serde_json::Value) -> Result<Vec<TileCode>, Box<dyn Error>> {
    map_json_array(json, |value| {
        let code = value.as_i64().ok_or("tile codes must be integers")?;
        Ok(TileCode::try_from(code)?)
    })
}

impl JsonSer for Level {
    /// Serialize a level into a JSON object.
    ///
    /// The format of the returned object is explained in [`Self::from_json`]
    fn to_json(&self) -> serde_json::Value {
        let mirrors: Vec<_> = self.grid.mirrors().collect();

        serde_json::json!({
            "grid": Vec::from_iter(self.grid.rows()),
            "mirrors": mirrors.to_json(),
            "player": self.player.to_json(),
        })
    }
}

impl JsonDes for Level {
    /// Deserialize a level from a JSON object.
    ///
    /// The JSON object must follow the following format:
    ///
    /// ```json
    /// {
    ///     "grid": [[1, 1, 1], [1, 0, 1], [1, 1, 1]], // rows of tile codes, all of the same length
    ///     "mirrors": [{ "x": 4, "y": 3, "orientation": "vertical" }], // optional
    ///     "player": { "x": 1.5, "y": 1.5, "angle": 0 } // optional
    /// }
    /// ```
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        let rows: Vec<_> = map_json_array(
            json.get("grid").ok_or("grid field expected")?,
            tile_row_from_json,
        )?;

        let mirrors: Vec<MirrorTile> = json
            .get("mirrors")
            .map(Vec::from_json)
            .transpose()?
            .unwrap_or_default();

        let player = json
            .get("player")
            .map(Pose::from_json)
            .transpose()?
            .unwrap_or_default();

        let grid = Grid::new(rows)?.with_mirrors(mirrors)?;

        debug!(
            "loaded a {}x{} level with {} mirror(s)",
            grid.width(),
            grid.height(),
            grid.mirrors().count()
        );

        Ok(Self::new(grid, player))
    }
}

pub fn load_level(path: impl AsRef<Path>) -> Result<Level, Box<dyn Error>> {
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    Level::from_json(&json)
}

pub fn save_level(path: impl AsRef<Path>, level: &Level) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(File::create(path)?, &level.to_json())?;
    Ok(())
}

/// The level played when no level file is provided.
pub fn default_level() -> Level {
    const ROWS: [[TileCode; 12]; 12] = [
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        [1, 0, 0, 1, 3, 1, 0, 0, 1, 0, 0, 1],
        [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1],
        [1, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 1],
        [1, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 1],
        [1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1],
        [1, 0, 0, 2, 0, 0, 1, 3, 1, 0, 0, 1],
        [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ];

    const MIRRORS: [MirrorTile; 3] = [
        MirrorTile::new(4, 3, Orientation::Vertical),
        MirrorTile::new(8, 5, Orientation::Horizontal),
        MirrorTile::new(7, 8, Orientation::Vertical),
    ];

    let grid = Grid::new(ROWS)
        .and_then(|grid| grid.with_mirrors(MIRRORS))
        .expect("the default level is valid");

    Level::new(grid, Pose::default())
}
