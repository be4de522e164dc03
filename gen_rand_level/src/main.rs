use std::error::Error;

use clap::Parser;
use log::info;
use raymaze_json::{default_level, save_level};
use raymaze_random::{
    rand::{rngs::StdRng, SeedableRng},
    random_level, LevelParams,
};

/// Writes a level file, either the default level or a randomly generated one.
#[derive(Parser)]
#[command(name = "gen_rand_level")]
struct Args {
    /// Where to write the level JSON
    path: String,

    /// Generate a random level instead of writing the default one
    #[arg(long)]
    random: bool,

    /// Seed for the random generator (random if not provided)
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "12")]
    width: usize,

    #[arg(long, default_value = "12")]
    height: usize,

    /// Probability for an inner cell to hold a wall
    #[arg(long, default_value = "0.15")]
    density: f64,

    /// Maximum number of mirrors to place
    #[arg(long, default_value = "3")]
    mirrors: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let level = if args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        random_level(
            &mut rng,
            &LevelParams {
                width: args.width,
                height: args.height,
                wall_density: args.density,
                mirror_count: args.mirrors,
            },
        )?
    } else {
        default_level()
    };

    save_level(&args.path, &level)?;

    info!(
        "wrote a {}x{} level to {}",
        level.grid.width(),
        level.grid.height(),
        args.path
    );

    Ok(())
}
