//! Chart of the analytic arc up to the goal plane and back down.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::ballistics::{
    GoalCrossing, LaunchResult, SimulationParameters, landing_time, sample_trajectory,
};
use crate::core::error::PlotError;
use crate::core::window::fixed_ratio_axis_window;

pub const PLOT_SIZE_PX: (u32, u32) = (1200, 600);
const TRAJECTORY_SAMPLES: usize = 320;

fn backend_error<E: std::error::Error>(err: E) -> PlotError {
    PlotError::Backend(err.to_string())
}

/// Writes the chart as SVG or PNG depending on the file extension.
pub fn plot_launch(
    path: &Path,
    params: SimulationParameters,
    launch: &LaunchResult,
) -> Result<(), PlotError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "svg" => {
            let root = SVGBackend::new(path, PLOT_SIZE_PX).into_drawing_area();
            draw_launch(&root, params, launch)
        }
        "png" => {
            let root = BitMapBackend::new(path, PLOT_SIZE_PX).into_drawing_area();
            draw_launch(&root, params, launch)
        }
        other => Err(PlotError::UnsupportedFormat(other.to_string())),
    }
}

fn draw_launch<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    params: SimulationParameters,
    launch: &LaunchResult,
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(backend_error)?;

    let flight_s = landing_time(params).max(launch.goal.arrival_time_s().unwrap_or(0.0));
    let points = sample_trajectory(params, flight_s, TRAJECTORY_SAMPLES);

    let raw_max_x = points
        .iter()
        .fold(params.distance_m, |acc, (x, _)| acc.max(*x));
    let raw_max_y = launch.max_height_m.max(1.0);
    let window = fixed_ratio_axis_window(raw_max_x, raw_max_y);
    let floor_y = points
        .iter()
        .fold(0.0f64, |acc, (_, y)| acc.min(*y))
        .max(-window.y_span);

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!(
                "d = {} m, angle = {} deg, v0 = {} m/s",
                params.distance_m, params.angle_deg, params.velocity_mps
            ),
            ("sans-serif", 24),
        )
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..window.x_span, floor_y..window.y_span)
        .map_err(backend_error)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(backend_error)?;

    chart
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(backend_error)?;

    let goal_color = RGBColor(0x5A, 0x5A, 0x5A);
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(params.distance_m, floor_y), (params.distance_m, window.y_span)],
            goal_color,
        )))
        .map_err(backend_error)?;

    let apex_x = params.velocity_mps * launch.angle_rad.cos() * launch.apex_time_s;
    chart
        .draw_series(std::iter::once(Circle::new(
            (apex_x, launch.max_height_m),
            5,
            BLUE.filled(),
        )))
        .map_err(backend_error)?;

    if let GoalCrossing::Reached { height_m, .. } = launch.goal {
        chart
            .draw_series(std::iter::once(Circle::new(
                (params.distance_m, height_m),
                6,
                RED.filled(),
            )))
            .map_err(backend_error)?;
    }

    root.present().map_err(backend_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::compute_launch;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case(0.0, "svg")]
    #[case(45.0, "svg")]
    #[case(90.0, "svg")]
    #[case(0.0, "png")]
    #[case(45.0, "png")]
    #[case(90.0, "png")]
    fn writes_chart_for_flat_arced_and_vertical_shots(#[case] angle_deg: f64, #[case] ext: &str) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(format!("arc.{ext}"));
        let params = SimulationParameters::new(25.0, angle_deg, 20.0);
        let launch = compute_launch(params).unwrap().unwrap();

        plot_launch(&path, params, &launch).unwrap();

        let written = std::fs::metadata(&path).unwrap();
        assert!(written.len() > 0);
    }

    #[test]
    fn rejects_unknown_extension() {
        let params = SimulationParameters::new(25.0, 45.0, 20.0);
        let launch = compute_launch(params).unwrap().unwrap();
        let err = plot_launch(Path::new("arc.gif"), params, &launch).unwrap_err();
        assert!(matches!(err, PlotError::UnsupportedFormat(ext) if ext == "gif"));
    }
}
