use egui::Pos2;
use vector_paint::element::{DrawableKind, FigureKind};
use vector_paint::{CanvasSurface, InputEvent, PaintConfig, Scene, ShapeChoice, ToolKind};

fn p(x: f32, y: f32) -> Pos2 {
    Pos2::new(x, y)
}

fn new_scene() -> Scene<CanvasSurface> {
    Scene::new(CanvasSurface::new("white"), PaintConfig::default())
}

fn click(scene: &mut Scene<CanvasSurface>, pos: Pos2) {
    scene.handle_input(InputEvent::PointerDown { pos });
    scene.handle_input(InputEvent::PointerUp { pos });
}

fn polygon_scene() -> Scene<CanvasSurface> {
    let mut scene = new_scene();
    scene.set_figure_kind(ShapeChoice::Polygon);
    scene.select_tool(ToolKind::Figures);
    scene
}

#[test]
fn test_polygon_from_clicks() {
    let mut scene = polygon_scene();
    click(&mut scene, p(0.0, 0.0));
    scene.handle_input(InputEvent::PointerMove { pos: p(4.0, 1.0) });
    click(&mut scene, p(10.0, 0.0));
    scene.handle_input(InputEvent::PointerMove { pos: p(12.0, 6.0) });
    click(&mut scene, p(10.0, 10.0));
    scene.handle_input(InputEvent::PointerMove { pos: p(3.0, 8.0) });
    scene.handle_input(InputEvent::SecondaryClick);

    let figure = scene.document().figures().next().unwrap();
    assert_eq!(figure.kind(), FigureKind::Polygon);
    assert_eq!(figure.polygon_coords(), vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0]);
    assert_eq!(
        scene.save().figures[0].vertices_of_polygon,
        vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0]
    );
    assert_eq!(scene.surface().shape_count(), 1);
    assert_eq!(scene.history_status(), (true, false));
}

#[test]
fn test_polygon_preview_follows_drag() {
    let mut scene = polygon_scene();
    click(&mut scene, p(0.0, 0.0));
    scene.pointer_drag(p(7.0, 7.0));

    match scene.interaction() {
        vector_paint::Interaction::BuildingPolygon { figure } => {
            assert_eq!(figure.polygon_coords(), vec![0.0, 0.0, 7.0, 7.0]);
        }
        other => panic!("expected a polygon in progress, got {}", other.name()),
    }
    assert!(scene.document().is_empty());
}

#[test]
fn test_degenerate_polygon_is_discarded() {
    let mut scene = polygon_scene();
    click(&mut scene, p(0.0, 0.0));
    click(&mut scene, p(10.0, 0.0));
    scene.secondary_click();

    assert!(scene.document().is_empty());
    assert_eq!(scene.surface().shape_count(), 0);
    assert_eq!(scene.history_status(), (false, false));
}

#[test]
fn test_switching_tool_finishes_polygon() {
    let mut scene = polygon_scene();
    for pos in [p(0.0, 0.0), p(20.0, 0.0), p(20.0, 20.0), p(0.0, 20.0)] {
        click(&mut scene, pos);
    }
    scene.select_tool(ToolKind::Brush);

    let figure = scene.document().figures().next().unwrap();
    assert_eq!(figure.vertices().len(), 4);
}

#[test]
fn test_undo_settles_polygon_in_progress() {
    let mut scene = polygon_scene();
    for pos in [p(0.0, 0.0), p(20.0, 0.0), p(20.0, 20.0)] {
        click(&mut scene, pos);
    }
    scene.undo();

    assert!(scene.interaction().is_idle());
    assert!(scene.document().is_empty());
    assert_eq!(scene.surface().shape_count(), 0);
}

#[test]
fn test_line_follows_drag() {
    let mut scene = new_scene();
    scene.select_tool(ToolKind::Figures);
    scene.pointer_down(p(0.0, 0.0));
    scene.pointer_drag(p(5.0, 5.0));
    scene.pointer_drag(p(10.0, 10.0));
    assert_eq!(scene.surface().shape_count(), 1);
    scene.pointer_up(p(20.0, 20.0));

    let line = scene.document().lines().next().unwrap();
    assert_eq!(line.start(), p(0.0, 0.0));
    assert_eq!(line.end(), p(20.0, 20.0));
    assert_eq!(line.outline().width(), 5.0);
    assert_eq!(scene.surface().shape_count(), 1);
}

#[test]
fn test_triangle_uses_figure_parameters() {
    let mut scene = new_scene();
    scene.set_figure_kind(ShapeChoice::Triangle);
    assert!(scene.set_figure_fill_color("yellow"));
    assert!(scene.set_figure_outline_color("#0000ff"));
    assert!(!scene.set_figure_outline_color("nope"));
    scene.set_figure_outline_width(2.0);
    scene.select_tool(ToolKind::Figures);
    scene.pointer_down(p(10.0, 0.0));
    scene.pointer_drag(p(15.0, 20.0));
    scene.pointer_up(p(15.0, 20.0));

    let figure = scene.document().figures().next().unwrap();
    assert_eq!(figure.kind(), FigureKind::Triangle);
    assert_eq!(figure.fill().map(|f| f.color()), Some("yellow"));
    assert_eq!(figure.outline().color(), "#0000ff");
    assert_eq!(figure.triangle_apex(), p(5.0, 20.0));
}

#[test]
fn test_click_without_drag_draws_no_figure() {
    let mut scene = new_scene();
    scene.set_figure_kind(ShapeChoice::Oval);
    scene.select_tool(ToolKind::Figures);
    click(&mut scene, p(30.0, 30.0));

    assert!(scene.document().is_empty());
    assert_eq!(scene.history_status(), (false, false));
}

#[test]
fn test_label_added_after_text_entry() {
    let mut scene = new_scene();
    scene.set_label_font_size(18.0);
    scene.select_tool(ToolKind::Text);
    click(&mut scene, p(30.0, 30.0));

    assert_eq!(scene.pending_text_prompt(), Some(("Add text", "Add text")));
    assert_eq!(scene.surface().shape_count(), 1);
    assert!(scene.document().is_empty());

    // Pointer input waits for the prompt
    click(&mut scene, p(80.0, 80.0));
    assert_eq!(scene.surface().shape_count(), 1);

    assert!(scene.submit_text(Some("hello".to_owned())));
    let label = scene.document().labels().next().unwrap();
    assert_eq!(label.text(), "hello");
    assert_eq!(label.font_size(), 18.0);
    assert_eq!(label.pos(), p(30.0, 30.0));
    assert!(scene.pending_text_prompt().is_none());
}

#[test]
fn test_cancelled_or_empty_label_is_discarded() {
    let mut scene = new_scene();
    scene.select_tool(ToolKind::Text);

    click(&mut scene, p(30.0, 30.0));
    assert!(!scene.submit_text(None));
    click(&mut scene, p(60.0, 30.0));
    assert!(!scene.submit_text(Some(String::new())));

    assert!(scene.document().is_empty());
    assert_eq!(scene.surface().shape_count(), 0);
    assert_eq!(scene.history_status(), (false, false));
    assert!(!scene.submit_text(Some("late".to_owned())));
}

#[test]
fn test_prompt_resolves_through_callback() {
    let mut scene = new_scene();
    scene.select_tool(ToolKind::Text);
    click(&mut scene, p(30.0, 30.0));

    let mut seen = Vec::new();
    let mut prompt = |title: &str, initial: &str| {
        seen.push((title.to_owned(), initial.to_owned()));
        Some("typed".to_owned())
    };
    assert!(scene.resolve_text_input(&mut prompt));
    assert_eq!(seen, vec![("Add text".to_owned(), "Add text".to_owned())]);
    assert_eq!(scene.document().labels().next().unwrap().text(), "typed");
}

#[test]
fn test_edit_label_text_is_undoable() {
    let mut scene = new_scene();
    scene.select_tool(ToolKind::Text);
    click(&mut scene, p(30.0, 30.0));
    scene.submit_text(Some("hello".to_owned()));

    scene.select_tool(ToolKind::Select);
    assert_eq!(scene.select(p(30.0, 30.0)), Some(DrawableKind::Label));
    assert!(scene.edit_selected_text());
    assert_eq!(scene.pending_text_prompt(), Some(("Edit text", "hello")));
    assert!(scene.submit_text(Some("bye".to_owned())));
    assert_eq!(scene.document().labels().next().unwrap().text(), "bye");

    scene.undo();
    assert_eq!(scene.document().labels().next().unwrap().text(), "hello");

    // Cancelling an edit keeps the text and records nothing
    scene.select(p(30.0, 30.0));
    assert!(scene.edit_selected_text());
    assert!(!scene.submit_text(None));
    assert_eq!(scene.document().labels().next().unwrap().text(), "hello");
    assert_eq!(scene.history_status(), (true, true));
}

#[test]
fn test_label_font_edits() {
    let mut scene = new_scene();
    scene.select_tool(ToolKind::Text);
    click(&mut scene, p(30.0, 30.0));
    scene.submit_text(Some("hi".to_owned()));

    scene.select_tool(ToolKind::Select);
    scene.select(p(30.0, 30.0));
    assert!(scene.change_selected_font_family("Courier"));
    assert!(scene.change_selected_width(24.0));
    assert!(scene.change_selected_color("red"));

    let label = scene.document().labels().next().unwrap();
    assert_eq!(label.font_family(), "Courier");
    assert_eq!(label.font_size(), 24.0);
    assert_eq!(label.font_color(), "red");
}

#[test]
fn test_parameter_getters_reflect_setters() {
    let mut scene = new_scene();
    assert_eq!(scene.brush_parameters().width, 5.0);
    assert_eq!(scene.label_parameters().family, "Arial");
    assert_eq!(scene.figure_parameters().kind, ShapeChoice::Line);

    scene.set_brush_width(9.0);
    assert!(scene.set_brush_color("#123456"));
    assert!(!scene.set_brush_color(""));
    scene.set_eraser_width(12.0);
    assert!(scene.set_label_font_color("blue"));
    scene.set_label_font_family("Verdana");

    assert_eq!(scene.brush_parameters().width, 9.0);
    assert_eq!(scene.brush_parameters().color, "#123456");
    assert_eq!(scene.eraser_parameters().width, 12.0);
    assert_eq!(scene.label_parameters().color, "blue");
    assert_eq!(scene.label_parameters().family, "Verdana");
}

#[test]
fn test_pending_label_dropped_by_tool_switch_and_clear() {
    let mut scene = new_scene();
    scene.select_tool(ToolKind::Text);
    click(&mut scene, p(30.0, 30.0));
    scene.select_tool(ToolKind::Brush);

    assert!(scene.interaction().is_idle());
    assert!(scene.document().is_empty());
    assert_eq!(scene.surface().shape_count(), 0);

    scene.select_tool(ToolKind::Text);
    click(&mut scene, p(60.0, 60.0));
    assert_eq!(scene.clear_all(), (false, false));
    assert!(scene.pending_text_prompt().is_none());
    assert_eq!(scene.surface().shape_count(), 0);
}
