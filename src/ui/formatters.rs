//! Shared formatting utilities for UI components.

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Three tick labels: both ends and the middle of a range.
pub(super) fn tick_labels(min: f64, max: f64) -> Vec<String> {
    vec![
        format_axis_label(min),
        format_axis_label((min + max) / 2.0),
        format_axis_label(max),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_label_precision() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(-1.0), "-1.0");
        assert_eq!(format_axis_label(0.25), "0.25");
        assert_eq!(format_axis_label(250.0), "250");
        assert_eq!(format_axis_label(123456.0), "1.2e5");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }
}
