use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Status;

// ---------------------------------------------------------------------------
// Status colors
// ---------------------------------------------------------------------------

/// Canonical color for each status bucket, matching the report's legend.
pub fn status_color(status: Status) -> Color32 {
    match status {
        Status::Ok => Color32::from_rgb(0x4B, 0xBF, 0x73),
        Status::Tolerance => Color32::from_rgb(0xFF, 0xC1, 0x07),
        Status::Calibration => Color32::from_rgb(0xDC, 0x35, 0x45),
        Status::Unclassified => Color32::GRAY,
    }
}

/// A softened variant of the status color, used as a fill behind metric
/// boxes.  Derived by pushing the hue towards low saturation / high
/// lightness so black text stays readable on top.
pub fn status_fill(status: Status) -> Color32 {
    let base = status_color(status);
    let srgb = Srgb::new(
        base.r() as f32 / 255.0,
        base.g() as f32 / 255.0,
        base.b() as f32 / 255.0,
    );
    let mut hsl: Hsl = srgb.into_color();
    hsl.saturation *= 0.6;
    hsl.lightness = 0.30;
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_have_distinct_colors() {
        let colors = [
            status_color(Status::Ok),
            status_color(Status::Tolerance),
            status_color(Status::Calibration),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn fill_differs_from_base() {
        for status in [Status::Ok, Status::Tolerance, Status::Calibration] {
            assert_ne!(status_fill(status), status_color(status));
        }
    }
}
