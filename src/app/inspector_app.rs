use egui::{Color32, RichText};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use tracing::{debug, info};

use crate::app::controller::{Dialog, DialogLevel, InspectionController};
use crate::app::views::{PreviewView, View};
use crate::config::Settings;
use crate::error::AppError;
use crate::pipeline::{ColorDetector, ColorLabel};

enum UiAction {
    SelectImage,
    ChooseColor(ColorLabel),
}

pub struct InspectorApp {
    controller: InspectionController<ColorDetector>,
    labels: Vec<ColorLabel>,
    preview_view: PreviewView,
}

impl InspectorApp {
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let profiles = settings.profile_table()?;
        let labels = profiles.labels().collect();
        let detector = ColorDetector::new(profiles, &settings.detection);

        Ok(Self {
            controller: InspectionController::new(detector, &settings.preview),
            labels,
            preview_view: PreviewView::new(settings.preview.width, settings.preview.height),
        })
    }

    pub fn start_gui(settings: Settings) -> Result<(), AppError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(egui::vec2(settings.window.width, settings.window.height))
                .with_title(settings.window.title.clone()),
            ..Default::default()
        };

        let app = InspectorApp::new(&settings)?;
        info!("Starting inspector window");
        eframe::run_native(
            &settings.window.title,
            options,
            Box::new(move |_cc| Ok(Box::new(app))),
        )
        .map_err(|e| AppError::Ui(e.to_string()))
    }

    fn handle(&mut self, action: UiAction) {
        let dialog = match action {
            UiAction::SelectImage => {
                let choice = FileDialog::new()
                    .add_filter("Image files", &["jpg", "jpeg", "png"])
                    .pick_file();
                if choice.is_none() {
                    debug!("Image selection cancelled");
                }
                self.controller.select_image(choice)
            }
            UiAction::ChooseColor(label) => Some(self.controller.choose_color(label)),
        };

        if let Some(dialog) = dialog {
            show_dialog(&dialog);
        }
    }
}

fn show_dialog(dialog: &Dialog) {
    let level = match dialog.level {
        DialogLevel::Info => MessageLevel::Info,
        DialogLevel::Error => MessageLevel::Error,
    };
    MessageDialog::new()
        .set_level(level)
        .set_title(dialog.title.as_str())
        .set_description(dialog.message.as_str())
        .set_buttons(MessageButtons::Ok)
        .show();
}

fn button_colors(label: ColorLabel) -> (Color32, Color32) {
    match label {
        ColorLabel::Yellow => (Color32::YELLOW, Color32::BLACK),
        ColorLabel::White => (Color32::WHITE, Color32::BLACK),
        ColorLabel::Black => (Color32::BLACK, Color32::WHITE),
    }
}

fn button_text(label: ColorLabel) -> &'static str {
    match label {
        ColorLabel::Yellow => "Yellow",
        ColorLabel::White => "White",
        ColorLabel::Black => "Black",
    }
}

impl eframe::App for InspectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                if ui
                    .add(egui::Button::new("Select Image").min_size(egui::vec2(150.0, 40.0)))
                    .clicked()
                {
                    action = Some(UiAction::SelectImage);
                }
                ui.add_space(10.0);
                ui.label(RichText::new("Choose a color:").size(15.0));
                ui.add_space(5.0);

                ui.horizontal(|ui| {
                    for label in &self.labels {
                        let (fill, text) = button_colors(*label);
                        let button = egui::Button::new(
                            RichText::new(button_text(*label)).size(15.0).color(text),
                        )
                        .fill(fill)
                        .min_size(egui::vec2(200.0, 60.0));
                        if ui.add(button).clicked() {
                            action = Some(UiAction::ChooseColor(*label));
                        }
                    }
                });

                self.preview_view.draw(ui);
            });
        });

        if let Some(action) = action {
            self.handle(action);
            self.preview_view.sync(ctx, self.controller.preview());
            ctx.request_repaint();
        }
    }
}
