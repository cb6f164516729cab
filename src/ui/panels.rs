use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::status_fill;
use crate::data::model::Status;
use crate::state::{AppState, Tab};
use crate::ui::{chart, table};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} readings loaded, {} need review",
                ds.len(),
                state.review_rows.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open scale readings")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(readings) => {
                log::info!("Loaded {} readings from {}", readings.len(), path.display());
                state.set_dataset(readings);
            }
            Err(e) => {
                // Keep whatever was on screen; only surface the failure.
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Central report
// ---------------------------------------------------------------------------

/// Render the whole report: summary strip, pie chart, tab strip, tables.
pub fn report_body(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = state.dataset.clone() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a readings file to audit scales  (File → Open…)");
        });
        return;
    };

    // ---- Summary strip: metric boxes + proportion chart ----
    ui.horizontal(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui: &mut Ui| {
                metric_box(ui, "Total", state.counts.total, None);
                metric_box(ui, "OK", state.counts.ok, Some(Status::Ok));
                metric_box(ui, "± 5 g", state.counts.tolerance, Some(Status::Tolerance));
                metric_box(ui, "> 5 g", state.counts.calibration, Some(Status::Calibration));
            });
        });

        ui.separator();
        chart::status_pie(ui, &state.counts);
    });

    ui.separator();

    // ---- Tab strip ----
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for tab in Tab::all() {
            if ui
                .selectable_label(state.selected_tab == tab, tab.label())
                .clicked()
            {
                state.selected_tab = tab;
            }
        }
    });
    ui.separator();

    // ---- Tab body ----
    // The table scrolls on its own, so no outer ScrollArea here.
    let tab = state.selected_tab;
    ui.push_id(tab.label(), |ui: &mut Ui| match tab {
        Tab::Review => {
            ui.heading(tab.label());
            if state.review_rows.is_empty() {
                info_label(ui, "🎉 No scales need review or calibration right now. All OK!");
            } else {
                table::readings_table(ui, &dataset, &state.review_rows);
            }
        }
        Tab::Sector(sector) => {
            ui.heading(tab.label());
            if dataset.sectors_present.contains(&sector) {
                let rows = dataset.sector_rows(sector);
                table::readings_table(ui, &dataset, &rows);
            } else {
                info_label(
                    ui,
                    &format!("No scales found for sector: {}", sector.label()),
                );
            }
        }
    });
}

/// One summary counter with an optional status-tinted fill.
fn metric_box(ui: &mut Ui, label: &str, value: usize, status: Option<Status>) {
    let mut frame = egui::Frame::group(ui.style());
    if let Some(status) = status {
        frame = frame.fill(status_fill(status));
    }
    frame.show(ui, |ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.set_min_width(64.0);
            ui.label(RichText::new(value.to_string()).size(24.0).strong());
            ui.label(RichText::new(label).small());
        });
    });
}

fn info_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(Color32::LIGHT_BLUE));
}
