//! Cylinder Distance Tool
//!
//! Measures the distance from one or more points to the surface of a finite
//! right circular cylinder. The cylinder and points come either from the
//! command line or from a JSON query file.
//!
//! Usage:
//!   cargo run --bin cyl_distance -- --axis 2,0,0 --radius 0.5 --height 2 --point 1,1,0
//!   cargo run --bin cyl_distance -- --config query.json

use std::process::ExitCode;

use clap::Parser;
use cylprox::{CylinderConfig, QueryConfig};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Cylinder Distance Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes point-to-surface distances for a finite right circular cylinder",
    long_about = None
)]
struct Args {
    /// JSON query file with a cylinder and points; overrides the other flags
    #[arg(short, long)]
    config: Option<String>,

    /// Base point as x,y,z
    #[arg(long, default_value = "0,0,0", value_parser = parse_triple)]
    base: [f64; 3],

    /// Axis direction as x,y,z
    #[arg(long, default_value = "0,0,1", value_parser = parse_triple)]
    axis: [f64; 3],

    /// Cylinder radius
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    radius: f64,

    /// Cylinder height
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    height: f64,

    /// Query point as x,y,z; may be repeated
    #[arg(short, long = "point", value_parser = parse_triple, allow_hyphen_values = true)]
    points: Vec<[f64; 3]>,
}

/// Parse a comma-separated `x,y,z` triple
fn parse_triple(text: &str) -> std::result::Result<[f64; 3], String> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got '{}'", text));
    }

    let mut triple = [0.0; 3];
    for (slot, part) in triple.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{}': {}", part, e))?;
    }
    Ok(triple)
}

fn query_from_args(args: &Args) -> Result<QueryConfig> {
    if let Some(path) = &args.config {
        return Ok(QueryConfig::from_file(path)?);
    }

    Ok(QueryConfig {
        cylinder: CylinderConfig::default()
            .with_base(args.base)
            .with_axis(args.axis)
            .with_dimensions(args.radius, args.height),
        points: args.points.clone(),
    })
}

fn run(args: &Args) -> Result<()> {
    let query = query_from_args(args)?;
    let cylinder = query.cylinder.build()?;

    println!(
        "Cylinder: base {} axis {} radius {} height {}",
        cylinder.base(),
        cylinder.axis(),
        cylinder.radius(),
        cylinder.height()
    );

    let points = query.query_points();
    if points.is_empty() {
        println!("No query points given");
        return Ok(());
    }

    for (point, distance) in points.iter().zip(cylinder.distances(&points)) {
        println!("{}: {:.6}", point, distance);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
