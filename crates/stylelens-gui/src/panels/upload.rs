use stylelens_core::session::Phase;

use crate::app::StyleLensApp;
use crate::state::EntryTab;

const DROP_ZONE_HEIGHT: f32 = 320.0;

pub fn show(ctx: &egui::Context, app: &mut StyleLensApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(8.0);
            ui.heading("Analyze Your Outfit");
            ui.label("Take a photo of your outfit to get a rating and suggestions.");
            ui.add_space(8.0);

            tab_row(ui, app);
            ui.add_space(4.0);
            drop_zone(ui, app);
            ui.add_space(8.0);
            submit_row(ui, app);

            if let Some(message) = app.session.error_message() {
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    ui.colored_label(egui::Color32::LIGHT_RED, message);
                });
            }
        });
    });
}

fn tab_row(ui: &mut egui::Ui, app: &mut StyleLensApp) {
    ui.horizontal(|ui| {
        for tab in [EntryTab::TakePhoto, EntryTab::Upload] {
            if ui
                .selectable_label(app.active_tab == tab, tab.label())
                .clicked()
            {
                app.active_tab = tab;
            }
        }
    });
}

/// Clickable/droppable region showing either the preview or the pick hints.
fn drop_zone(ui: &mut egui::Ui, app: &mut StyleLensApp) {
    let desired = egui::vec2(ui.available_width(), DROP_ZONE_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click());

    let stroke = if response.hovered() {
        ui.visuals().widgets.hovered.bg_stroke
    } else {
        ui.visuals().widgets.inactive.bg_stroke
    };
    ui.painter().rect_filled(rect, 6.0, ui.visuals().extreme_bg_color);
    ui.painter()
        .rect_stroke(rect, 6.0, stroke, egui::StrokeKind::Inside);

    if let Some(texture) = &app.preview.texture {
        draw_preview(ui, rect, texture, app.preview.image_size);
    } else {
        let weak = ui.visuals().weak_text_color();
        ui.painter().text(
            rect.center() - egui::vec2(0.0, 10.0),
            egui::Align2::CENTER_CENTER,
            "Click to upload or drag and drop",
            egui::FontId::proportional(15.0),
            weak,
        );
        ui.painter().text(
            rect.center() + egui::vec2(0.0, 12.0),
            egui::Align2::CENTER_CENTER,
            "PNG or JPG, up to 10 MB",
            egui::FontId::proportional(12.0),
            weak,
        );
    }

    // Picking is inert while a request is in flight.
    if response.clicked() && app.session.phase() != Phase::Analyzing {
        super::open_image_picker(app);
    }
}

/// Fit the preview inside the zone, preserving aspect ratio.
fn draw_preview(
    ui: &egui::Ui,
    rect: egui::Rect,
    texture: &egui::TextureHandle,
    image_size: Option<[usize; 2]>,
) {
    let [w, h] = image_size.unwrap_or_else(|| texture.size());
    if w == 0 || h == 0 {
        return;
    }

    let inner = rect.shrink(8.0);
    let scale = (inner.width() / w as f32).min(inner.height() / h as f32);
    let size = egui::vec2(w as f32 * scale, h as f32 * scale);
    let img_rect = egui::Rect::from_center_size(inner.center(), size);

    ui.painter().image(
        texture.id(),
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn submit_row(ui: &mut egui::Ui, app: &mut StyleLensApp) {
    let analyzing = app.session.phase() == Phase::Analyzing;
    let label = if analyzing {
        "Analyzing..."
    } else {
        "Analyze Outfit"
    };

    let button = egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 36.0));
    if ui.add_enabled(app.session.can_submit(), button).clicked() {
        app.submit();
    }

    if analyzing {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Contacting analysis service...");
        });
    }
}
