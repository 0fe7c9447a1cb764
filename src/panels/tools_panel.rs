use egui::{Color32, Ui};

use crate::PaintApp;
use crate::color::parse_color;
use crate::config::FONT_FAMILIES;
use crate::element::DrawableKind;
use crate::tools::{ShapeChoice, ToolKind};

/// Colors offered for one-click edits that go through the undo history
const PALETTE: &[&str] = &[
    "black", "white", "gray", "red", "orange", "yellow", "green", "cyan", "blue", "purple", "pink",
    "brown",
];

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            let active = app.scene.tool();
            for tool in ToolKind::ALL {
                if ui.selectable_label(active == tool, tool.name()).clicked() {
                    log::info!("Tool selected from UI: {tool}");
                    app.scene.select_tool(tool);
                }
            }
            ui.separator();

            match app.scene.tool() {
                ToolKind::Brush => brush_section(app, ui),
                ToolKind::Eraser => eraser_section(app, ui),
                ToolKind::Text => text_section(app, ui),
                ToolKind::Figures => figure_section(app, ui),
                ToolKind::Select => selection_section(app, ui),
            }
            ui.separator();

            ui.horizontal(|ui| {
                let (can_undo, can_redo) = app.scene.history_status();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.scene.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.scene.redo();
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Clear all").clicked() {
                    app.scene.clear_all();
                }
                if ui.button("Save").clicked() {
                    app.save_project();
                }
            });
            ui.label("Background");
            if let Some(color) = palette(ui) {
                app.scene.change_background(Some(color));
            }
        });
}

/// A row of swatches; returns the one clicked this frame
fn palette(ui: &mut Ui) -> Option<&'static str> {
    let mut picked = None;
    ui.horizontal_wrapped(|ui| {
        for &name in PALETTE {
            let fill = parse_color(name).unwrap_or(Color32::BLACK);
            let swatch = egui::Button::new("").fill(fill).min_size(egui::vec2(16.0, 16.0));
            if ui.add(swatch).on_hover_text(name).clicked() {
                picked = Some(name);
            }
        }
    });
    picked
}

/// Color picker for a tool parameter; returns the new color as hex text
fn color_picker(ui: &mut Ui, label: &str, current: &str) -> Option<String> {
    let mut color = parse_color(current).unwrap_or(Color32::BLACK);
    ui.horizontal(|ui| {
        ui.label(label);
        ui.color_edit_button_srgba(&mut color).changed()
    })
    .inner
    .then(|| color.to_hex())
}

fn brush_section(app: &mut PaintApp, ui: &mut Ui) {
    let mut width = app.scene.brush_parameters().width;
    if ui.add(egui::Slider::new(&mut width, 1.0..=50.0).text("Width")).changed() {
        app.scene.set_brush_width(width);
    }
    if let Some(color) = color_picker(ui, "Color", &app.scene.brush_parameters().color) {
        app.scene.set_brush_color(&color);
    }
}

fn eraser_section(app: &mut PaintApp, ui: &mut Ui) {
    let mut width = app.scene.eraser_parameters().width;
    if ui.add(egui::Slider::new(&mut width, 1.0..=50.0).text("Width")).changed() {
        app.scene.set_eraser_width(width);
    }
}

fn font_family_combo(ui: &mut Ui, current: &str) -> Option<&'static str> {
    let mut picked = None;
    egui::ComboBox::from_label("Font")
        .selected_text(current)
        .show_ui(ui, |ui| {
            for &family in FONT_FAMILIES {
                if ui.selectable_label(family == current, family).clicked() {
                    picked = Some(family);
                }
            }
        });
    picked
}

fn text_section(app: &mut PaintApp, ui: &mut Ui) {
    let params = app.scene.label_parameters().clone();
    if let Some(family) = font_family_combo(ui, &params.family) {
        app.scene.set_label_font_family(family);
    }
    let mut size = params.size;
    if ui.add(egui::Slider::new(&mut size, 6.0..=96.0).text("Size")).changed() {
        app.scene.set_label_font_size(size);
    }
    if let Some(color) = color_picker(ui, "Color", &params.color) {
        app.scene.set_label_font_color(&color);
    }
}

fn figure_section(app: &mut PaintApp, ui: &mut Ui) {
    let params = app.scene.figure_parameters().clone();
    ui.horizontal_wrapped(|ui| {
        for choice in ShapeChoice::ALL {
            if ui.selectable_label(params.kind == choice, choice.name()).clicked() {
                app.scene.set_figure_kind(choice);
            }
        }
    });
    if params.kind == ShapeChoice::Polygon {
        ui.small("Click to add vertices, right-click to finish");
    }
    let mut width = params.outline_width;
    if ui.add(egui::Slider::new(&mut width, 1.0..=50.0).text("Outline")).changed() {
        app.scene.set_figure_outline_width(width);
    }
    if let Some(color) = color_picker(ui, "Outline color", &params.outline_color) {
        app.scene.set_figure_outline_color(&color);
    }
    if let Some(color) = color_picker(ui, "Fill color", &params.fill_color) {
        app.scene.set_figure_fill_color(&color);
    }
}

fn selection_section(app: &mut PaintApp, ui: &mut Ui) {
    let Some(kind) = app.scene.selected().map(|object| object.kind()) else {
        ui.label("Click an object to select it");
        return;
    };

    ui.label("Color");
    if let Some(color) = palette(ui) {
        app.scene.change_selected_color(color);
    }
    if kind == DrawableKind::Figure {
        ui.label("Fill");
        if let Some(color) = palette(ui) {
            app.scene.change_selected_fill_color(color);
        }
        if ui.button("Remove fill").clicked() {
            app.scene.remove_selected_fill();
        }
    }
    ui.horizontal(|ui| {
        let label = if kind == DrawableKind::Label { "Size" } else { "Width" };
        ui.label(label);
        for width in [1.0, 3.0, 5.0, 10.0, 20.0] {
            if ui.button(format!("{width}")).clicked() {
                app.scene.change_selected_width(width);
            }
        }
    });
    if kind == DrawableKind::Label {
        let current = app
            .scene
            .selected()
            .and_then(|object| object.as_label())
            .map(|label| label.font_family().to_owned())
            .unwrap_or_default();
        if let Some(family) = font_family_combo(ui, &current) {
            app.scene.change_selected_font_family(family);
        }
        if ui.button("Edit text").clicked() {
            app.scene.edit_selected_text();
        }
    }
    ui.horizontal(|ui| {
        if ui.button("Bring forward").clicked() {
            app.scene.bring_selected_forward();
        }
        if ui.button("Send backward").clicked() {
            app.scene.send_selected_backward();
        }
    });
    if ui.button("Remove").clicked() {
        app.scene.remove_selected();
    }
}
