// Graphical form for the splitter (eframe/egui)

use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use rfd::FileDialog;

use crate::app::SplitInteractor;
use crate::shell::ShellState;

const WINDOW_TITLE: &str = "Video Splitter";
const REPAINT_INTERVAL: Duration = Duration::from_millis(100);
const BROWSE_LABEL: &str = "Browse...";

/// Initial field values, e.g. from the command line
#[derive(Debug, Clone, Default)]
pub struct FormPrefill {
    pub source_path: Option<String>,
    pub output_dir: Option<String>,
    pub duration: Option<String>,
}

pub struct SplitterApp {
    state: ShellState,
    /// Rejected field value from the last trigger
    input_error: Option<String>,
}

impl SplitterApp {
    pub fn new(interactor: Arc<SplitInteractor>, prefill: FormPrefill) -> Self {
        let mut state = ShellState::new(interactor);
        if let Some(source) = prefill.source_path {
            state.source_path = source;
        }
        if let Some(output) = prefill.output_dir {
            state.output_dir = output;
        }
        if let Some(duration) = prefill.duration {
            state.duration = duration;
        }
        Self {
            state,
            input_error: None,
        }
    }

    fn form(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("split_form")
            .num_columns(3)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Video file:");
                ui.text_edit_singleline(&mut self.state.source_path);
                if ui.button(BROWSE_LABEL).clicked() {
                    self.state.browse_input(
                        FileDialog::new()
                            .add_filter("Video", &["mp4", "mov", "mkv", "avi", "webm"])
                            .pick_file(),
                    );
                }
                ui.end_row();

                ui.label("Output folder:");
                ui.text_edit_singleline(&mut self.state.output_dir);
                if ui.button(BROWSE_LABEL).clicked() {
                    self.state.browse_output(FileDialog::new().pick_folder());
                }
                ui.end_row();

                ui.label("Clip length (s):");
                ui.text_edit_singleline(&mut self.state.duration);
                ui.end_row();
            });
    }

    fn log_pane(&self, ui: &mut egui::Ui) {
        ui.add_enabled_ui(self.state.log_enabled(), |ui| {
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .max_height(240.0)
                .show(ui, |ui| {
                    for line in self.state.log_lines() {
                        ui.monospace(line);
                    }
                });
        });
    }

    fn progress_bar(&self, ui: &mut egui::Ui) {
        let progress = self.state.progress();
        let text = if progress.total() == 0 {
            String::new()
        } else {
            progress.to_string()
        };
        ui.add(egui::ProgressBar::new(progress.fraction()).text(text));
    }

    fn dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.state.dialog().cloned() else {
            return;
        };
        egui::Window::new(dialog.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(dialog.message);
                if ui.button("OK").clicked() {
                    self.state.dismiss_dialog();
                }
            });
    }
}

impl eframe::App for SplitterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        let busy = self.state.is_busy();
        let modal = self.state.dialog().is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal, |ui| {
                self.form(ui);
                ui.separator();
                self.log_pane(ui);
                ui.separator();
                self.progress_bar(ui);

                ui.horizontal(|ui| {
                    if ui.add_enabled(!busy, egui::Button::new("Split")).clicked() {
                        self.input_error = self.state.start_split().err().map(|e| e.to_string());
                    }
                    if let Some(message) = &self.input_error {
                        ui.colored_label(ui.visuals().error_fg_color, message);
                    } else if let Some(message) = self.state.last_error() {
                        ui.colored_label(ui.visuals().error_fg_color, message);
                    }
                });
            });
        });

        self.dialog(ctx);

        if busy {
            ctx.request_repaint_after(REPAINT_INTERVAL);
        }
    }
}

/// Open the splitter window and block until it is closed
pub fn run_gui(interactor: Arc<SplitInteractor>, prefill: FormPrefill) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 460.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };
    let app = SplitterApp::new(interactor, prefill);
    eframe::run_native(WINDOW_TITLE, options, Box::new(|_cc| Ok(Box::new(app))))
}
