pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Data extents of a chart whose axes keep a fixed aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_span: f64,
    pub y_span: f64,
}

/// Pads the raw extents and widens whichever axis is short of
/// [`DISTANCE_TO_HEIGHT_RATIO`].
pub fn fixed_ratio_axis_window(raw_max_x: f64, raw_max_y: f64) -> AxisWindow {
    let raw_x_span = raw_max_x.max(1.0);
    let raw_y_span = raw_max_y.max(1.0);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let mut x_span = (raw_max_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    AxisWindow { x_span, y_span }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_data_sets_height_from_width() {
        let window = fixed_ratio_axis_window(100.0, 10.0);
        assert!((window.x_span - 106.0).abs() < 1e-9);
        assert!((window.y_span - 53.0).abs() < 1e-9);
    }

    #[test]
    fn tall_data_sets_width_from_height() {
        let window = fixed_ratio_axis_window(10.0, 50.0);
        assert!((window.y_span - 55.0).abs() < 1e-9);
        assert!((window.x_span - 110.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_extents_fall_back_to_unit_window() {
        let window = fixed_ratio_axis_window(0.0, 0.0);
        assert!(window.x_span >= 1.0);
        assert!((window.x_span / window.y_span - DISTANCE_TO_HEIGHT_RATIO).abs() < 1e-9);
    }
}
