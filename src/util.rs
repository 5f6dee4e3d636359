use crate::model::MetricValue;
use plotters::style::RGBColor;

pub fn format_value(value: &MetricValue) -> String {
    match value {
        MetricValue::Count(n) => format_count(*n),
        MetricValue::Score(s) => format!("{s:.3}"),
    }
}

pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Axis tick labels: thousand suffixes for counts, short decimals otherwise.
pub fn format_axis(v: f64) -> String {
    if v >= 1_000.0 {
        format_count(v as u64)
    } else if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

/// Parse a `#rrggbb` string; anything malformed falls back to neutral grey.
pub fn hex_color(hex: &str) -> RGBColor {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return RGBColor(136, 136, 136);
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(136);
    RGBColor(channel(0), channel(2), channel(4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_use_thousand_suffixes() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(2_300_000), "2.3M");
    }

    #[test]
    fn scores_keep_three_decimals() {
        assert_eq!(format_value(&MetricValue::Score(0.5)), "0.500");
    }

    #[test]
    fn axis_labels_adapt_to_magnitude() {
        assert_eq!(format_axis(0.0), "0");
        assert_eq!(format_axis(0.25), "0.25");
        assert_eq!(format_axis(40.0), "40");
        assert_eq!(format_axis(12_000.0), "12.0K");
    }

    #[test]
    fn hex_colors_parse_with_fallback() {
        assert_eq!(hex_color("#dea584"), RGBColor(0xde, 0xa5, 0x84));
        assert_eq!(hex_color("dea584"), RGBColor(0xde, 0xa5, 0x84));
        assert_eq!(hex_color("nope"), RGBColor(136, 136, 136));
    }
}
