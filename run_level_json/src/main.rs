use std::{error::Error, path::Path};

use clap::Parser;
use log::{debug, info, warn};
use raymaze_json::{default_level, load_level};

mod cli;
mod player;
mod render;

use cli::Args;
use player::Player;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();

    let level = if Path::new(&args.level).exists() {
        load_level(&args.level)?
    } else {
        warn!("{} not found, playing the default level", args.level);
        default_level()
    };

    let mut player = Player::new(level.player);
    player.rotate(args.turn);
    player.walk(args.forward, &level.grid);

    debug!(
        "player at ({:.2}, {:.2}), facing {:.3} rad",
        player.pose.x, player.pose.y, player.pose.angle
    );

    let camera = player.camera();
    let frame = camera.cast_frame(&level.grid, args.columns, args.max_distance);

    let hits = frame
        .iter()
        .filter(|result| result.surface_type != raymaze::EMPTY)
        .count();
    info!(
        "cast {} rays, {hits} hit something within {}",
        frame.len(),
        args.max_distance
    );

    for line in render::render_view(&camera, &frame, args.rows) {
        println!("{line}");
    }

    if args.minimap {
        println!();
        for line in render::render_minimap(&level.grid, &player.pose) {
            println!("{line}");
        }
    }

    Ok(())
}
