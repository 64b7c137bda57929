//! Command-line interface for generating bevel illusion SVGs

use crate::document::assembler;
use crate::geometry::layout::{self, GridConfig};
use crate::io::configuration::{
    DEFAULT_CANVAS_SIZE, DEFAULT_CELL_SIZE, DEFAULT_GRID, OUTPUT_PREFIX, SUPPORTED_GRIDS,
};
use crate::io::error::Result;
use crate::io::info::write_reference_notes;
use crate::io::writer::export_document_as_svg;
use crate::palette::selector;
use crate::tiles::classifier;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

/// Command-line arguments for the illusion generator
#[derive(Parser)]
#[command(name = "beveltile")]
#[command(
    author,
    version,
    about = "Generate Kitaoka diagonal bevel optical illusion SVGs"
)]
pub struct Cli {
    /// Module grid size NxN
    #[arg(long, default_value_t = DEFAULT_GRID, value_parser = parse_grid)]
    pub grid: usize,

    /// Canvas size in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE, value_parser = parse_positive)]
    pub size: usize,

    /// Cell size in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE, value_parser = parse_positive)]
    pub cell: usize,

    /// Output SVG filename (default: auto-generated)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Random seed for reproducible colour selection (unseeded by default)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress the run summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if the run summary should be printed
    pub const fn should_print_summary(&self) -> bool {
        !self.quiet
    }
}

fn parse_grid(value: &str) -> std::result::Result<usize, String> {
    let grid: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a valid grid size"))?;

    if SUPPORTED_GRIDS.contains(&grid) {
        Ok(grid)
    } else {
        Err(format!(
            "grid size must be one of {SUPPORTED_GRIDS:?}, got {grid}"
        ))
    }
}

fn parse_positive(value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        Ok(_) => Err("value must be positive".to_string()),
        Err(_) => Err(format!("'{value}' is not a valid pixel size")),
    }
}

/// Orchestrates one generation run from CLI arguments to written files
pub struct IllusionRunner {
    cli: Cli,
}

impl IllusionRunner {
    /// Create a new runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the full pipeline and write the SVG and reference notes
    ///
    /// # Errors
    ///
    /// Returns an error if the output document or the reference notes cannot
    /// be written.
    pub fn run(&self) -> Result<()> {
        let config = GridConfig {
            grid: self.cli.grid,
            cell: self.cli.cell,
            size: self.cli.size,
        };
        let geometry = layout::derive(config.grid, config.cell);

        let mut rng = self
            .cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let palette = selector::select(&mut rng);

        let tiles = classifier::classify(config.grid);
        let document = assembler::assemble(config, geometry, &palette, &tiles);

        let svg_path = self.output_path();
        export_document_as_svg(&document, &svg_path)?;

        let directory = svg_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let info_path = write_reference_notes(directory)?;

        if self.cli.should_print_summary() {
            print_summary(&self.cli, document.scheme_name(), &svg_path, &info_path);
        }

        Ok(())
    }

    // Auto-generated names carry the grid size and a HHMMSS timestamp so
    // repeated runs in one directory don't clobber each other.
    fn output_path(&self) -> PathBuf {
        self.cli.output.clone().unwrap_or_else(|| {
            let timestamp = chrono::Local::now().format("%H%M%S");
            PathBuf::from(format!(
                "{OUTPUT_PREFIX}_{grid}x{grid}_{timestamp}.svg",
                grid = self.cli.grid,
            ))
        })
    }
}

// Allow print for user feedback after a successful run
#[allow(clippy::print_stdout)]
fn print_summary(cli: &Cli, scheme_name: &str, svg_path: &Path, info_path: &Path) {
    println!("beveltile");
    println!("  Grid:    {grid}x{grid}", grid = cli.grid);
    println!("  Canvas:  {size}x{size}px", size = cli.size);
    println!("  Colours: {scheme_name}");
    println!("  Output:  {}", svg_path.display());
    println!("  Info:    {}", info_path.display());
}
