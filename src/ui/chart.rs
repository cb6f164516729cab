use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::color::status_color;
use crate::data::model::Status;
use crate::data::summary::StatusCounts;

// ---------------------------------------------------------------------------
// Status distribution pie chart
// ---------------------------------------------------------------------------

const PIE_RADIUS: f64 = 1.0;
const LABEL_RADIUS: f64 = 0.6;

/// Render the proportion chart over the three counted buckets.
pub fn status_pie(ui: &mut Ui, counts: &StatusCounts) {
    let slices: Vec<(Status, usize)> = [
        (Status::Ok, counts.ok),
        (Status::Tolerance, counts.tolerance),
        (Status::Calibration, counts.calibration),
    ]
    .into_iter()
    .filter(|(_, n)| *n > 0)
    .collect();

    let classified = counts.classified();
    if classified == 0 {
        ui.label("No classified readings to chart.");
        return;
    }

    Plot::new("status_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.3)
        .include_y(1.3)
        .height(230.0)
        .show(ui, |plot_ui| {
            // Fractions around the circle, starting at 12 o'clock, clockwise.
            let mut start = 0.0_f64;
            for (status, n) in slices {
                let frac = n as f64 / classified as f64;

                let steps = ((frac * 64.0).ceil() as usize).max(2);
                let mut points: Vec<[f64; 2]> = Vec::with_capacity(steps + 2);
                points.push([0.0, 0.0]);
                for i in 0..=steps {
                    let t = start + frac * (i as f64 / steps as f64);
                    let angle = TAU * (0.25 - t);
                    points.push([PIE_RADIUS * angle.cos(), PIE_RADIUS * angle.sin()]);
                }

                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(points))
                        .fill_color(status_color(status))
                        .stroke(Stroke::new(1.0, Color32::WHITE))
                        .name(format!("{} ({n})", status.label())),
                );

                let mid = TAU * (0.25 - (start + frac / 2.0));
                plot_ui.text(Text::new(
                    PlotPoint::new(LABEL_RADIUS * mid.cos(), LABEL_RADIUS * mid.sin()),
                    RichText::new(format!("{:.0}%", frac * 100.0))
                        .strong()
                        .color(Color32::WHITE),
                ));

                start += frac;
            }
        });
}
