use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use castle_quest::engine::{self, OutputBlock};
use castle_quest::world::{self, LEVELS};
use castle_quest::{Game, GameConfig, LevelError};

#[derive(Parser)]
#[command(name = "castle_quest")]
#[command(about = "A turn-based text adventure: gather magical items, then face the boss")]
#[command(version)]
struct Cli {
    /// Level number to play
    #[arg(short, long)]
    level: Option<u32>,

    /// Player name (prompted for when omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed for reproducible fights
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between combat rounds in milliseconds (0 disables)
    #[arg(long)]
    round_delay_ms: Option<u64>,

    /// Print every room of the level and exit
    #[arg(long)]
    preview: bool,

    /// List the built-in levels and exit
    #[arg(long)]
    list_levels: bool,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // Game text owns stdout; keep logs quiet unless asked for.
    let base_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    let _ = builder.try_init();
}

fn flush_output(out: engine::Output, round_delay: Duration) -> io::Result<()> {
    let mut stdout = io::stdout();

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => println!("\n{}", t),
            OutputBlock::Text(line) => println!("{}", line),
            OutputBlock::Art(art) => println!("\n{}", art),
            OutputBlock::Event(ev) => println!("\n{}", ev),
            OutputBlock::Exits(exits) => println!("\n{}", exits),
            OutputBlock::Pause => {
                stdout.flush()?;
                if !round_delay.is_zero() {
                    thread::sleep(round_delay);
                }
            }
        }
    }
    stdout.flush()
}

fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn resolve_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(level) = cli.level {
        config.level = level;
    }
    if let Some(name) = &cli.name {
        config.player.name = Some(name.clone());
    }
    if let Some(seed) = cli.seed {
        config.combat.seed = Some(seed);
    }
    if let Some(ms) = cli.round_delay_ms {
        config.combat.round_delay_ms = ms;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_levels {
        for entry in LEVELS {
            println!("{:>2}  {}", entry.number, entry.title);
        }
        return Ok(());
    }

    let config = resolve_config(&cli)?;
    let round_delay = config.combat.round_delay();

    if cli.preview {
        let level = world::load_level(config.level)
            .with_context(|| format!("could not preview level {}", config.level))?;
        let mut out = engine::Output::new();
        engine::render_preview(&mut out, &level);
        flush_output(out, round_delay)?;
        return Ok(());
    }

    println!("Welcome to Castle Quest!");

    let name = match config.player.name.clone() {
        Some(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => match read_line("What is your name, brave adventurer? ")? {
            Some(n) if !n.is_empty() => n,
            Some(_) => "Adventurer".to_string(),
            None => {
                println!("\nGoodbye.");
                return Ok(());
            }
        },
    };

    println!("\nWelcome, {}!", name);
    println!("\nCommands: go [direction], look, inventory, take [item], drop [item], quit");

    let mut game = match Game::from_config(&config, &name) {
        Ok(g) => g,
        Err(e @ LevelError::UnknownLevel(_)) => {
            println!("Error: {}", e);
            println!("Error loading level. Exiting game.");
            return Ok(());
        }
        Err(e) => return Err(e).context("built-in level data is broken"),
    };

    flush_output(game.initialize(), round_delay)?;

    loop {
        let input = match read_line("\n> ")? {
            Some(line) => line,
            None => {
                println!("\nGoodbye.");
                break;
            }
        };

        let (out, over) = game.step(&input);
        flush_output(out, round_delay)?;

        if over {
            break;
        }
    }

    log::debug!("session ended: {:?}", game.ending());
    Ok(())
}
