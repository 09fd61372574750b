use stylelens_core::session::Phase;

use crate::app::StyleLensApp;

pub fn show(ctx: &egui::Context, app: &mut StyleLensApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Progress bar; the request has no granular progress, so it animates
        // indeterminately while in flight.
        if app.session.phase() == Phase::Analyzing {
            ui.add(
                egui::ProgressBar::new(0.0)
                    .text("Analyzing outfit...")
                    .animate(true),
            );
        } else {
            // Invisible placeholder — same height, no animation
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(ref name) = app.ui_state.file_name {
                ui.label(name);
                ui.separator();
            }
            ui.label(phase_label(app.session.phase()));
            ui.separator();
            if let Some(elapsed) = app.ui_state.last_elapsed {
                ui.label(format!("{:.1}s", elapsed.as_secs_f32()));
                ui.separator();
            }
            ui.label(format!("Service: {}", app.config.base_url));
        });

        ui.add_space(2.0);
    });
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "No photo selected",
        Phase::FileSelected => "Ready to analyze",
        Phase::Analyzing => "Analyzing",
        Phase::ResultReady => "Result ready",
        Phase::Error => "Last attempt failed",
    }
}
