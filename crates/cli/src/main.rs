//! u-loading command-line runner.

use clap::Parser;
use std::path::PathBuf;
use u_loading_cli::{render_text, save_json, write_lists, DatasetParser};
use u_loading_core::{Config, LoadMode};
use u_loading_d3::Classifier;

#[derive(Parser)]
#[command(name = "u-loading")]
#[command(about = "3D cargo loading: fit packages into vehicles grouped by platform")]
struct Cli {
    /// CSV file of vehicles [Platform, Name, Width, Height, Thickness, Weight]
    #[arg(short, long)]
    vehicles: Option<PathBuf>,

    /// CSV file of packages [Name, Width, Height, Thickness, Weight]
    #[arg(short, long)]
    packages: Option<PathBuf>,

    /// Distribute the packages among vehicles
    #[arg(short, long)]
    dist: bool,

    /// Write the packed packages of each platform to a .txt file
    #[arg(short, long)]
    list: bool,

    /// Directory for list files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Save the full report as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut dataset = DatasetParser::new().load(cli.vehicles.as_deref(), cli.packages.as_deref())?;
    let info = dataset.info();
    log::info!(
        "{} packages across {} vehicles in {} platforms",
        info.packages,
        info.vehicles,
        info.platforms
    );

    let mode = if cli.dist {
        LoadMode::Distribute
    } else {
        LoadMode::BestSingle
    };
    let classifier = Classifier::new(Config::new().with_mode(mode));
    let report = classifier.classify(&mut dataset.fleet, &dataset.packages);

    print!("{}", render_text(&report));

    if cli.list {
        std::fs::create_dir_all(&cli.output_dir)?;
        for path in write_lists(&report, &cli.output_dir)? {
            println!("Package list written to {}", path.display());
        }
    }

    if let Some(path) = &cli.json {
        save_json(&report, path)?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}
