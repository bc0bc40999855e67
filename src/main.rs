#![warn(non_snake_case)]
//! # cavegen command line
//!
//! Generates a single Goblin Halls map and prints it to stdout as `.`/`#`
//! rows. Set `RUST_LOG=debug` to watch room placement and the finishing
//! passes.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use cavegen::generator::{GeneratorConfig, GoblinHalls};
use cavegen::map::Grid;

#[derive(Parser, Debug)]
#[command(name = "cavegen")]
#[command(about = "Generate an organic cave map of rooms and tunnels")]
struct Args {
    /// Map width in cells
    #[arg(short = 'W', long, default_value = "80")]
    width: i32,

    /// Map height in cells
    #[arg(short = 'H', long, default_value = "60")]
    height: i32,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON generator config; omitted fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading generator config from {:?}", path);
            GeneratorConfig::load(path)?
        }
        None => GeneratorConfig::default(),
    };
    let generator = GoblinHalls::new(config)?;
    debug!("Generator config: {:?}", generator.config());

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::new(args.width, args.height)?;

    let stats = generator.generate(&mut grid, &mut rng);
    println!("seed: {}", seed);
    print!("{}", grid);
    info!(
        "{} rooms, {} open cells, connected: {}",
        stats.rooms.len(),
        stats.open_cells,
        stats.connected
    );
    Ok(())
}
