mod config;
mod game_loop;
mod input;
mod renderer;

use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use dungeon_common::games::SessionRng;
use dungeon_common::games::dungeon::DungeonGameState;
use dungeon_common::{log, logger};

use config::{CONFIG_FILE, Config, get_config_manager};
use game_loop::{GameOptions, SessionEnd, prompt_dimensions, run_game};
use input::validate_dimensions;

#[derive(Parser)]
#[command(name = "dungeon_client", about = "Find the door, avoid the dragons")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,
    #[arg(long, requires = "height")]
    width: Option<usize>,
    #[arg(long, requires = "width")]
    height: Option<usize>,
    /// Replay a specific dungeon.
    #[arg(long)]
    seed: Option<u64>,
    /// Show the door and the dragons on the map.
    #[arg(long)]
    reveal: bool,
    #[arg(long)]
    use_log_prefix: bool,
    /// Write the default config to `--config` and exit.
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config_manager = get_config_manager(&args.config);

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        println!("Default config written to {}", args.config);
        return Ok(());
    }

    let config = config_manager.get_config()?;

    let prefix = args.use_log_prefix.then(|| "Dungeon".to_string());
    match &config.log_file {
        Some(path) => logger::init_file_logger(prefix, Path::new(path))?,
        None => logger::init_logger(prefix),
    }

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let field = match (args.width, args.height, config.field) {
        (Some(width), Some(height), _) => validate_dimensions(width, height)?,
        (_, _, Some(field)) => field.to_field_size(),
        _ => match prompt_dimensions(&mut input, &mut output)? {
            Some(field) => field,
            None => return Ok(()),
        },
    };

    let mut rng = args.seed.map_or_else(SessionRng::from_random, SessionRng::new);
    let mut state = DungeonGameState::new(field, config.dragons, &mut rng)?;

    let options = GameOptions {
        reveal_map: args.reveal || config.reveal_map,
        clear_screen: true,
    };

    let end = run_game(&mut state, &mut rng, options, &mut input, &mut output)?;
    if end == SessionEnd::Quit {
        writeln!(output, "Goodbye! Replay this dungeon with --seed {}", rng.seed())?;
    }
    log!("Session ended: {:?}", end);

    Ok(())
}
