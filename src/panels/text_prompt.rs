use crate::PaintApp;

/// Modal-style window shown while the scene waits for label text
pub fn text_prompt_window(app: &mut PaintApp, ctx: &egui::Context) {
    let Some((title, initial)) = app.scene.pending_text_prompt() else {
        app.prompt_buffer = None;
        return;
    };
    let buffer = app.prompt_buffer.get_or_insert_with(|| initial.to_owned());

    let mut answer = None;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Enter text:");
            let edit = ui.text_edit_singleline(buffer);
            edit.request_focus();
            let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || entered {
                    answer = Some(Some(buffer.clone()));
                }
                if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    answer = Some(None);
                }
            });
        });

    if let Some(text) = answer {
        app.scene.submit_text(text);
        app.prompt_buffer = None;
    }
}
