use std::sync::mpsc;

use stylelens_core::config::ClientConfig;
use stylelens_core::session::{OutfitSession, Phase, SelectedImage};

use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{EntryTab, PreviewState, UiState};
use crate::worker;

pub struct StyleLensApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: OutfitSession,
    pub config: ClientConfig,
    pub ui_state: UiState,
    pub preview: PreviewState,
    pub active_tab: EntryTab,
    pub show_about: bool,
    pub show_settings: bool,
}

impl StyleLensApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            session: OutfitSession::new(),
            config: ClientConfig::default().with_env_overrides(),
            ui_state: UiState::default(),
            preview: PreviewState::default(),
            active_tab: EntryTab::default(),
            show_about: false,
            show_settings: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded {
                    file_name,
                    bytes,
                    preview,
                } => {
                    let accepted = self.session.select_image(SelectedImage {
                        file_name: file_name.clone(),
                        bytes,
                    });
                    if accepted {
                        let image = rgba_to_color_image(&preview);
                        let size = image.size;
                        let texture =
                            ctx.load_texture("preview", image, egui::TextureOptions::LINEAR);
                        self.preview.install(texture, size);
                        self.ui_state.file_name = Some(file_name);
                    } else {
                        self.ui_state
                            .add_log(format!("Ignored {file_name}: analysis in progress"));
                    }
                }
                WorkerResult::AnalysisComplete { result, elapsed } => {
                    self.ui_state.last_elapsed = Some(elapsed);
                    self.ui_state.add_log(format!(
                        "Analysis complete: {:.1}/10 in {}",
                        result.rating,
                        format_duration(elapsed)
                    ));
                    self.session.complete(result);
                }
                WorkerResult::AnalysisFailed { message } => {
                    self.session.fail(message);
                }
                WorkerResult::ConfigImported { config } => {
                    self.ui_state
                        .add_log(format!("Config imported: {}", config.base_url));
                    self.config = config;
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Submit the staged image. No-op without a file or while analyzing.
    pub fn submit(&mut self) {
        let cmd = match self.session.begin_analysis() {
            Some(image) => WorkerCommand::Analyze {
                config: self.config.clone(),
                file_name: image.file_name.clone(),
                bytes: image.bytes.clone(),
            },
            None => return,
        };
        let _ = self.cmd_tx.send(cmd);
    }

    /// Clear the session and release the preview texture.
    pub fn reset(&mut self) {
        self.session.reset();
        self.preview.clear();
        self.ui_state.file_name = None;
        self.ui_state.last_elapsed = None;
        self.ui_state.add_log("Ready for a new outfit".into());
    }

    /// Files dropped anywhere on the window select an image, same as the picker.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        if let Some(path) = file.path {
            self.send_command(WorkerCommand::LoadImage { path });
        } else if let Some(bytes) = file.bytes {
            let file_name = if file.name.is_empty() {
                "dropped-image".to_string()
            } else {
                file.name
            };
            self.send_command(WorkerCommand::LoadImageBytes {
                file_name,
                bytes: bytes.to_vec(),
            });
        }
    }
}

impl eframe::App for StyleLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_dropped_files(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);

        if self.session.phase() == Phase::ResultReady {
            panels::results::show(ctx, self);
        } else {
            panels::upload::show(ctx, self);
        }

        if self.show_settings {
            show_settings_window(ctx, self);
        }

        if self.show_about {
            show_about_window(ctx, self);
        }
    }
}

fn show_settings_window(ctx: &egui::Context, app: &mut StyleLensApp) {
    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Service URL");
                    ui.text_edit_singleline(&mut app.config.base_url);
                    ui.end_row();

                    ui.label("Timeout (s)");
                    ui.add(egui::DragValue::new(&mut app.config.timeout_secs).range(0..=600));
                    ui.end_row();
                });

            if app.config.validate().is_err() {
                ui.colored_label(
                    egui::Color32::LIGHT_RED,
                    "URL must start with http:// or https://",
                );
            }
            ui.small("Timeout 0 waits forever.");

            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                app.show_settings = false;
            }
        });
}

fn show_about_window(ctx: &egui::Context, app: &mut StyleLensApp) {
    egui::Window::new("About StyleLens")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("StyleLens");
                ui.label("Outfit analysis client");
                ui.add_space(8.0);
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    app.show_about = false;
                }
            });
        });
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else {
        format!("{secs:.1}s")
    }
}
