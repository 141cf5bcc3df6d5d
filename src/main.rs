use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;
use log::{info, warn};
use projectile_demo::core::ballistics::{GoalCrossing, LaunchResult, SimulationParameters};
use projectile_demo::core::controller::format_height;
use projectile_demo::core::plot::plot_launch;
use projectile_demo::core::scene::SceneConfig;
use projectile_demo::{compute_launch, init_logging};

/// Computes apex and goal-plane heights for a ball launched toward a goal line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Distance to the goal plane in metres
    distance: Option<f64>,
    /// Launch angle in degrees (0..=90)
    angle: Option<f64>,
    /// Initial velocity in m/s
    velocity: Option<f64>,
    /// Write the arc to an .svg or .png file (`--plot=FILE`); a bare `--plot` uses a timestamped name
    #[arg(long, num_args = 0..=1, require_equals = true, value_name = "FILE")]
    plot: Option<Option<PathBuf>>,
    /// Scene config (JSON); only slider ranges are used here
    #[arg(long)]
    config: Option<PathBuf>,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn read_f64(prompt: &str) -> Result<f64> {
    loop {
        print!("{prompt}");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .context("could not read input")?;

        if bytes == 0 {
            bail!("input ended unexpectedly (EOF)");
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn resolve(value: Option<f64>, prompt: &str) -> Result<f64> {
    match value {
        Some(v) => Ok(v),
        None => read_f64(prompt),
    }
}

fn default_plot_path() -> PathBuf {
    PathBuf::from(format!("launch_{}.svg", Local::now().format("%Y%m%d_%H%M%S")))
}

fn print_launch(launch: &LaunchResult) {
    println!("\nTime to apex: {:.4} s", launch.apex_time_s);
    println!("Max height: {} m", format_height(launch.max_height_m));
    match launch.goal {
        GoalCrossing::Reached {
            arrival_time_s,
            height_m,
        } => {
            println!("Time to goal plane: {arrival_time_s:.4} s");
            println!("Height at goal plane: {} m", format_height(height_m));
        }
        GoalCrossing::Unreachable => {
            println!("Goal plane: never reached (no horizontal velocity)");
        }
    }
    println!(
        "Launch velocity: ({:.3}, {:.3}) m/s",
        launch.velocity.x, launch.velocity.y
    );
}

fn run(args: Args) -> Result<()> {
    let config = SceneConfig::load_or_default(args.config.as_deref())?;

    let params = SimulationParameters::new(
        resolve(args.distance, "Distance (m): ")?,
        resolve(args.angle, "Angle (degrees): ")?,
        resolve(args.velocity, "Velocity (m/s): ")?,
    );
    for (name, range, value) in [
        ("distance", config.sliders.distance_m, params.distance_m),
        ("angle", config.sliders.angle_deg, params.angle_deg),
        ("velocity", config.sliders.velocity_mps, params.velocity_mps),
    ] {
        if !range.contains(value) {
            warn!(
                "{name} {value} is outside the slider range {}..={}",
                range.min, range.max
            );
        }
    }

    let Some(launch) = compute_launch(params)? else {
        println!("Initial velocity is zero: nothing is launched.");
        return Ok(());
    };
    print_launch(&launch);

    if let Some(path) = args.plot {
        let path = path.unwrap_or_else(default_plot_path);
        plot_launch(&path, params, &launch)
            .with_context(|| format!("could not write plot to '{}'", path.display()))?;
        info!("plot written to {}", path.display());
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positionals_and_flags() {
        let args = Args::try_parse_from(["projectile_demo", "25", "45", "20", "-v"]).unwrap();
        assert_eq!(args.distance, Some(25.0));
        assert_eq!(args.angle, Some(45.0));
        assert_eq!(args.velocity, Some(20.0));
        assert_eq!(args.plot, None);
        assert!(args.verbose);
    }

    #[test]
    fn bare_plot_flag_requests_default_name() {
        let args = Args::try_parse_from(["projectile_demo", "25", "45", "20", "--plot"]).unwrap();
        assert_eq!(args.plot, Some(None));
        assert!(default_plot_path().to_string_lossy().starts_with("launch_"));
    }

    #[test]
    fn bare_plot_flag_leaves_positionals_alone() {
        let args = Args::try_parse_from(["projectile_demo", "--plot", "25", "45", "20"]).unwrap();
        assert_eq!(args.plot, Some(None));
        assert_eq!(args.distance, Some(25.0));
        assert_eq!(args.angle, Some(45.0));
        assert_eq!(args.velocity, Some(20.0));
    }

    #[test]
    fn plot_file_is_given_with_equals() {
        let args =
            Args::try_parse_from(["projectile_demo", "25", "45", "20", "--plot=arc.png"]).unwrap();
        assert_eq!(args.plot, Some(Some(PathBuf::from("arc.png"))));
        assert_eq!(args.velocity, Some(20.0));
    }

    #[test]
    fn run_rejects_out_of_range_angle() {
        let args = Args::try_parse_from(["projectile_demo", "25", "120", "20"]).unwrap();
        let err = run(args).unwrap_err();
        assert!(err.to_string().contains("0..=90"));
    }

    #[test]
    fn zero_velocity_is_not_an_error() {
        let args = Args::try_parse_from(["projectile_demo", "25", "45", "0"]).unwrap();
        assert!(run(args).is_ok());
    }
}
