use crate::PaintApp;
use crate::input::canvas_events;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let origin = response.rect.min;

            for event in canvas_events(&response, origin) {
                app.scene.handle_input(event);
            }

            app.scene.surface().paint(&painter, origin);
            if app.scene.surface_mut().take_repaint_request() {
                ctx.request_repaint();
            }
        });
}
