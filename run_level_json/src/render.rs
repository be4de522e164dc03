use raymaze::*;

const CEILING: char = ' ';
const FLOOR: char = '.';

/// Glyphs for each surface type, from nearest to furthest.
fn shades(surface_type: TileCode) -> &'static [char; 4] {
    match surface_type {
        1 => &['#', '=', '-', ':'],
        2 => &['X', 'x', '+', ';'],
        3 => &['@', 'O', 'o', '\''],
        _ => &['%', '*', '~', ','],
    }
}

/// The glyph a wall slice is drawn with, fading as `distance` grows.
fn glyph(surface_type: TileCode, distance: Float) -> char {
    let brightness = 1.0 / (1.0 + distance * 0.2);
    let shades = shades(surface_type);
    let index = ((1.0 - brightness) * shades.len() as Float) as usize;
    shades[index.min(shades.len() - 1)]
}

/// Height, in rows, of the wall slice drawn for a (perspective corrected) `distance`.
pub fn wall_height(distance: Float, rows: usize) -> usize {
    if distance > 0.0 {
        ((rows as Float / distance) as usize).min(rows)
    } else {
        rows
    }
}

/// Draws one frame: a column of characters per cast result.
///
/// Raw distances are corrected for the fisheye effect here, using `camera`, before
/// being turned into wall heights. Columns that hit nothing are left as ceiling and floor.
pub fn render_view(camera: &Camera, frame: &[CastResult], rows: usize) -> Vec<String> {
    let columns = frame.len();

    let slices: Vec<_> = frame
        .iter()
        .enumerate()
        .map(|(column, result)| {
            let distance = result.distance * camera.fisheye_factor(column, columns);
            let height = if result.surface_type == EMPTY {
                0
            } else {
                wall_height(distance, rows)
            };
            let start = (rows - height) / 2;
            (start..start + height, glyph(result.surface_type, distance))
        })
        .collect();

    (0..rows)
        .map(|row| {
            slices
                .iter()
                .map(|(wall, glyph)| {
                    if wall.contains(&row) {
                        *glyph
                    } else if row < rows / 2 {
                        CEILING
                    } else {
                        FLOOR
                    }
                })
                .collect()
        })
        .collect()
}

/// Draws the level from above, marking the player with an arrow pointing where they look.
pub fn render_minimap(grid: &Grid, pose: &Pose) -> Vec<String> {
    let (px, py) = (pose.x.floor() as i64, pose.y.floor() as i64);

    let direction = pose.direction();
    let arrow = if direction.x().abs() >= direction.y().abs() {
        if direction.x() >= 0.0 { '>' } else { '<' }
    } else if direction.y() >= 0.0 {
        'v'
    } else {
        '^'
    };

    (0..grid.height() as i64)
        .map(|y| {
            (0..grid.width() as i64)
                .map(|x| {
                    if (x, y) == (px, py) {
                        arrow
                    } else if grid.mirror_at(x, y).is_some() {
                        'M'
                    } else {
                        match grid.tile_at(x, y) {
                            EMPTY => ' ',
                            code => shades(code)[0],
                        }
                    }
                })
                .collect()
        })
        .collect()
}
