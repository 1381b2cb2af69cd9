//! world-prep: headless BlockCraft world tool.
//!
//! Usage:
//!   world-prep generate --seed 1337 --width 220 --height 120 --output world.bc2d
//!   world-prep inspect world.bc2d
//!   world-prep tick world.bc2d --ticks 200 --commands moves.json
//!   world-prep render world.bc2d

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use blockcraft_core::commands::PlayerCommand;
use blockcraft_core::constants::{
    DEFAULT_SAVE_FILE, DEFAULT_SEED, DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH, MAX_TICK_DT,
};
use blockcraft_sim::{Mobile, SimConfig, Simulation};

#[derive(Parser)]
#[command(
    name = "world-prep",
    about = "Generate, inspect and step BlockCraft save files",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh world and write it as a save file
    Generate {
        #[arg(long, default_value_t = DEFAULT_SEED, allow_hyphen_values = true)]
        seed: i64,

        #[arg(long, default_value_t = DEFAULT_WORLD_WIDTH)]
        width: i32,

        #[arg(long, default_value_t = DEFAULT_WORLD_HEIGHT)]
        height: i32,

        #[arg(short, long, default_value = DEFAULT_SAVE_FILE)]
        output: PathBuf,
    },

    /// Print the state of a save file as JSON
    Inspect {
        /// Save file to read
        input: PathBuf,
    },

    /// Run headless ticks on a save file and write the result back
    Tick {
        /// Save file to read
        input: PathBuf,

        #[arg(short = 'n', long, default_value_t = 1)]
        ticks: u32,

        /// Seconds per tick (clamped by the simulation)
        #[arg(long, default_value_t = MAX_TICK_DT)]
        dt: f64,

        /// JSON array of player commands queued before the first tick
        #[arg(short, long)]
        commands: Option<PathBuf>,

        /// Where to write the result (default: overwrite the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the tile rows of a save file, with `@` for the player
    /// and `c` for the creature
    Render {
        /// Save file to read
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            seed,
            width,
            height,
            output,
        } => cmd_generate(seed, width, height, &output),
        Commands::Inspect { input } => cmd_inspect(&input),
        Commands::Tick {
            input,
            ticks,
            dt,
            commands,
            output,
        } => cmd_tick(&input, ticks, dt, commands.as_deref(), output.as_deref()),
        Commands::Render { input } => cmd_render(&input),
    }
}

fn load(path: &Path) -> Result<Simulation> {
    Simulation::load(path).with_context(|| format!("load save file {}", path.display()))
}

fn cmd_generate(seed: i64, width: i32, height: i32, output: &Path) -> Result<()> {
    let sim = Simulation::new(SimConfig::default().with_seed(seed).with_size(width, height));
    sim.save(output)
        .with_context(|| format!("write {}", output.display()))?;

    let spawn = sim.player().position();
    log::info!(
        "generated {}x{} world (seed {seed}), player spawn ({}, {})",
        sim.grid().width(),
        sim.grid().height(),
        spawn.x,
        spawn.y
    );
    Ok(())
}

fn cmd_inspect(input: &Path) -> Result<()> {
    let sim = load(input)?;
    let json = serde_json::to_string_pretty(&sim.snapshot()).context("serialize snapshot")?;
    println!("{json}");
    Ok(())
}

fn cmd_tick(
    input: &Path,
    ticks: u32,
    dt: f64,
    commands: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let mut sim = load(input)?;

    if let Some(path) = commands {
        let text =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let commands: Vec<PlayerCommand> = serde_json::from_str(&text)
            .with_context(|| format!("parse commands in {}", path.display()))?;
        log::info!("queued {} commands", commands.len());
        sim.queue_commands(commands);
    }

    let mut snapshot = sim.snapshot();
    for _ in 0..ticks {
        snapshot = sim.tick(dt);
    }

    let output = output.unwrap_or(input);
    sim.save(output)
        .with_context(|| format!("write {}", output.display()))?;
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("serialize snapshot")?
    );
    Ok(())
}

fn cmd_render(input: &Path) -> Result<()> {
    let sim = load(input)?;
    print!("{}", render_ascii(&sim));
    Ok(())
}

/// Tile rows in save-file characters with both entities drawn on top.
fn render_ascii(sim: &Simulation) -> String {
    let grid = sim.grid();
    let player = sim.player().tile();
    let creature = sim.creature().tile();

    let mut out = String::new();
    for y in 0..grid.height() {
        for (x, kind) in grid.row(y).iter().enumerate() {
            let x = x as i32;
            let c = if (x, y) == (player.x, player.y) {
                '@'
            } else if (x, y) == (creature.x, creature.y) {
                'c'
            } else {
                kind.save_char()
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
