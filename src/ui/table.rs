use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::status_color;
use crate::data::model::ReadingSet;

// ---------------------------------------------------------------------------
// Readings table
// ---------------------------------------------------------------------------

/// Render the given rows (indices into `set.readings`) as a color-coded
/// table, preserving the order of `rows`.
pub fn readings_table(ui: &mut Ui, set: &ReadingSet, rows: &[usize]) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::remainder().at_least(100.0))
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Scale");
            });
            header.col(|ui| {
                ui.strong("Sector");
            });
            header.col(|ui| {
                ui.strong("Weight (g)");
            });
            header.col(|ui| {
                ui.strong("Max capacity (g)");
            });
            header.col(|ui| {
                ui.strong("Status");
            });
        })
        .body(|mut body| {
            for &idx in rows {
                let r = &set.readings[idx];
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&r.scale_id);
                    });
                    row.col(|ui| {
                        ui.label(r.sector.map(|s| s.label()).unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(format_grams(r.weight));
                    });
                    row.col(|ui| {
                        ui.label(format_grams(r.max_capacity));
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(r.status.label())
                                .color(Color32::BLACK)
                                .background_color(status_color(r.status)),
                        );
                    });
                });
            }
        });
}

/// Format a gram value with `.` thousands separators (`20000` → `"20.000"`),
/// matching the export's locale.
pub fn format_grams(v: f64) -> String {
    let rounded = v.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grams_use_dot_thousands_separator() {
        assert_eq!(format_grams(20000.0), "20.000");
        assert_eq!(format_grams(35000.0), "35.000");
        assert_eq!(format_grams(999.0), "999");
        assert_eq!(format_grams(1000000.0), "1.000.000");
    }

    #[test]
    fn grams_round_before_grouping() {
        assert_eq!(format_grams(10003.6), "10.004");
        assert_eq!(format_grams(0.2), "0");
    }
}
