//! Control Panel Widget
//! Left side panel with the sector selector and data controls.

use egui::{Color32, ComboBox, RichText};

/// Left side control panel driving the chart and table views.
pub struct ControlPanel {
    pub sectors: Vec<String>,
    pub selected_sector: String,
    pub progress: f32,
    pub status: String,
    pub export_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            sectors: Vec::new(),
            selected_sector: String::new(),
            progress: 0.0,
            status: "Ready".to_string(),
            export_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sector list after a load; selects the first entry.
    pub fn update_sectors(&mut self, sectors: Vec<String>) {
        self.selected_sector = sectors.first().cloned().unwrap_or_default();
        self.sectors = sectors;
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Postings Explorer")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Monthly job postings by sector")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Sector Section =====
        ui.label(RichText::new("🏢 Sector").size(14.0).strong());
        ui.add_space(5.0);

        ui.add_enabled_ui(!self.sectors.is_empty(), |ui| {
            ComboBox::from_id_salt("sector")
                .width(220.0)
                .selected_text(&self.selected_sector)
                .show_ui(ui, |ui| {
                    for sector in &self.sectors {
                        if ui
                            .selectable_label(self.selected_sector == *sector, sector)
                            .clicked()
                            && self.selected_sector != *sector
                        {
                            self.selected_sector = sector.clone();
                            action = ControlPanelAction::SectorChanged;
                        }
                    }
                });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let reload = egui::Button::new(RichText::new("⟳ Reload Data").size(14.0))
                .min_size(egui::vec2(180.0, 30.0));
            if ui.add(reload).clicked() {
                action = ControlPanelAction::Reload;
            }

            ui.add_space(8.0);

            ui.add_enabled_ui(self.export_enabled, |ui| {
                let export = egui::Button::new(RichText::new("💾 Export CSV").size(14.0))
                    .min_size(egui::vec2(180.0, 30.0));
                if ui.add(export).clicked() {
                    action = ControlPanelAction::ExportCsv;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Progress Section =====
        ui.label(RichText::new("📊 Progress").size(14.0).strong());
        ui.add_space(5.0);

        ui.add(
            egui::ProgressBar::new(self.progress / 100.0)
                .show_percentage()
                .animate(self.progress > 0.0 && self.progress < 100.0),
        );

        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") || self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set progress and status
    pub fn set_progress(&mut self, progress: f32, status: &str) {
        self.progress = progress;
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SectorChanged,
    Reload,
    ExportCsv,
}
