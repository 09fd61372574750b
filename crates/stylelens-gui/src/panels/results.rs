use stylelens_core::analysis::{parse_hex_color, AnalysisResult};

use crate::app::StyleLensApp;

const SWATCH_SIZE: f32 = 28.0;

/// Show the most prominent colors only, like the service's own palette cap.
const MAX_PALETTE_SWATCHES: usize = 5;

pub fn show(ctx: &egui::Context, app: &mut StyleLensApp) {
    let Some(result) = app.session.result().cloned() else {
        return;
    };
    let mut do_reset = false;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(8.0);
            ui.heading("Analysis Results");
            ui.add_space(8.0);

            if let Some(texture) = &app.preview.texture {
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Image::new(texture)
                            .max_height(220.0)
                            .max_width(ui.available_width()),
                    );
                });
                ui.add_space(8.0);
            }

            rating_section(ui, &result);
            ui.add_space(8.0);

            super::section_header(ui, "Color Palette", None);
            swatch_row(
                ui,
                result
                    .color_analysis
                    .primary_colors
                    .iter()
                    .take(MAX_PALETTE_SWATCHES),
            );
            ui.add_space(8.0);

            super::section_header(ui, "Skin Tone", None);
            ui.horizontal(|ui| {
                swatch(ui, &result.skin_tone_analysis.color);
                ui.label(&result.skin_tone_analysis.tone);
            });
            ui.add_space(8.0);

            if !result.suggestions.is_empty() {
                super::section_header(ui, "Suggestions", None);
                for suggestion in &result.suggestions {
                    ui.horizontal_wrapped(|ui| {
                        ui.label("\u{2022}");
                        ui.label(suggestion);
                    });
                }
                ui.add_space(8.0);
            }

            if !result.alternative_colors.is_empty() {
                super::section_header(ui, "Try These Colors", None);
                swatch_row(ui, result.alternative_colors.iter());
                ui.add_space(8.0);
            }

            if let Some(compat) = &result.color_compatibility {
                if !compat.complementary_colors.is_empty() {
                    super::section_header(ui, "Pairs Well With", None);
                    swatch_row(ui, compat.complementary_colors.iter());
                    ui.add_space(8.0);
                }
                if !compat.avoid_colors.is_empty() {
                    super::section_header(ui, "Best Avoided", None);
                    swatch_row(ui, compat.avoid_colors.iter());
                    ui.add_space(8.0);
                }
            }

            ui.add_space(4.0);
            let button = egui::Button::new("Analyze Another Outfit")
                .min_size(egui::vec2(ui.available_width(), 36.0));
            if ui.add(button).clicked() {
                do_reset = true;
            }
            ui.add_space(8.0);
        });
    });

    if do_reset {
        app.reset();
    }
}

fn rating_section(ui: &mut egui::Ui, result: &AnalysisResult) {
    ui.horizontal(|ui| {
        ui.strong("Style Rating");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.heading(format!("{:.1}/10", result.rating));
        });
    });
    ui.add(egui::ProgressBar::new(result.rating_fraction()));
}

fn swatch_row<'a>(ui: &mut egui::Ui, colors: impl Iterator<Item = &'a String>) {
    ui.horizontal(|ui| {
        for color in colors {
            swatch(ui, color);
        }
    });
}

/// One rounded block of solid color; unknown strings render neutral gray.
fn swatch(ui: &mut egui::Ui, hex: &str) {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::hover());

    let color = parse_hex_color(hex)
        .map(|[r, g, b]| egui::Color32::from_rgb(r, g, b))
        .unwrap_or(egui::Color32::GRAY);

    ui.painter().rect_filled(rect, SWATCH_SIZE / 2.0, color);
    ui.painter().rect_stroke(
        rect,
        SWATCH_SIZE / 2.0,
        ui.visuals().widgets.inactive.bg_stroke,
        egui::StrokeKind::Inside,
    );
    response.on_hover_text(hex.to_string());
}
