//! Writes generated (or built-in) cast datasets for the saga viewer.

use anyhow::{bail, Result};
use clap::Parser;
use rsaga::{builtin_characters, generate_characters, CastWriter, GeneratorConfig, TimelineLayout};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Random cast generator for the saga timeline viewer
#[derive(Parser, Debug)]
#[command(name = "saga-castgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of characters to generate
    #[arg(short = 'n', long, default_value = "8")]
    characters: usize,

    /// Random seed (same seed, same cast)
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Minimum timeline points per character
    #[arg(long, default_value = "2")]
    min_points: usize,

    /// Maximum timeline points per character
    #[arg(long, default_value = "5")]
    max_points: usize,

    /// Maximum outgoing connections per character
    #[arg(long, default_value = "2")]
    max_connections: usize,

    /// Number of eras (clusters of years separated by long gaps)
    #[arg(long, default_value = "3")]
    eras: usize,

    /// Output file path (default: cast.json, or cast.json.br with --brotli)
    #[arg(short, long)]
    out: Option<String>,

    /// Write a Brotli-compressed dataset
    #[arg(long)]
    brotli: bool,

    /// Write the built-in cast instead of generating one
    #[arg(long)]
    builtin: bool,
}

impl Cli {
    fn output_path(&self) -> String {
        match &self.out {
            Some(path) if self.brotli && !path.ends_with(".br") => format!("{}.br", path),
            Some(path) => path.clone(),
            None if self.brotli => "cast.json.br".to_string(),
            None => "cast.json".to_string(),
        }
    }

    fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            characters: self.characters,
            seed: self.seed,
            points_per_character: (self.min_points, self.max_points),
            max_connections: self.max_connections,
            eras: self.eras,
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    if cli.min_points > cli.max_points {
        bail!("--min-points ({}) exceeds --max-points ({})", cli.min_points, cli.max_points);
    }

    let characters = if cli.builtin {
        builtin_characters().to_vec()
    } else {
        generate_characters(&cli.generator_config())
    };

    let output_path = cli.output_path();
    let mut writer = CastWriter::new(&output_path)?;
    writer.write_characters(&characters)?;
    writer.finish()?;

    let layout = TimelineLayout::compute(&characters);
    info!(
        path = %output_path,
        characters = characters.len(),
        sections = layout.sections().len(),
        "Cast written"
    );
    println!("Cast written to: {}", output_path);

    Ok(())
}
