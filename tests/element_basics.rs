use egui::{Pos2, Vec2};
use vector_paint::element::{Drawable, DrawableKind, Element, Figure, FigureKind, Label, Line, Stroke, StrokeGroup};
use vector_paint::style::{Fill, Outline};
use vector_paint::surface::{CanvasSurface, RenderSurface, ShapeSpec};

fn create_test_group(surface: &mut CanvasSurface) -> StrokeGroup {
    let mut group = StrokeGroup::new(4);
    for x in [10.0, 20.0, 30.0] {
        group.push(Stroke::new(Pos2::new(x, 10.0), 2.0, "red"));
    }
    group.render(surface);
    group
}

#[test]
fn test_element_identity() {
    let line = Line::new(2, Outline::new("black", 1.0), Pos2::ZERO, None);
    assert_eq!(line.id(), 2);
    assert_eq!(line.element_type(), "line");
    assert_eq!(line.end(), Pos2::ZERO);

    let drawable: Drawable = Label::new(3, Pos2::new(5.0, 5.0), "Arial", 12.0, "black").into();
    assert_eq!(drawable.kind(), DrawableKind::Label);
    assert_eq!(drawable.id(), 3);
    assert_eq!(drawable.as_label().map(|l| l.text()), Some("Add text"));
}

#[test]
fn test_stroke_is_dot_with_radius_width() {
    let mut surface = CanvasSurface::new("white");
    let mut stroke = Stroke::new(Pos2::new(10.0, 10.0), 3.0, "blue");
    stroke.render(&mut surface);

    let handle = stroke.handle().unwrap();
    match surface.shape(handle) {
        Some(ShapeSpec::Oval { rect, fill, outline, .. }) => {
            assert_eq!(rect.min, Pos2::new(7.0, 7.0));
            assert_eq!(rect.max, Pos2::new(13.0, 13.0));
            assert_eq!(fill.as_deref(), Some("blue"));
            assert_eq!(outline, "blue");
        }
        other => panic!("unexpected shape {other:?}"),
    }
}

#[test]
fn test_erase_before_render_is_noop() {
    let mut surface = CanvasSurface::new("white");
    let mut figure = Figure::new(1, FigureKind::Oval, Outline::new("black", 1.0), None, Pos2::ZERO);
    figure.erase(&mut surface);
    assert!(!figure.is_rendered());

    figure.render(&mut surface);
    figure.erase(&mut surface);
    figure.erase(&mut surface);
    assert_eq!(surface.shape_count(), 0);
    assert!(figure.handle().is_none());
}

#[test]
fn test_group_membership() {
    let mut surface = CanvasSurface::new("white");
    let mut group = create_test_group(&mut surface);
    let handles = group.handles();
    assert_eq!(handles.len(), 3);
    assert!(group.contains(handles[1]));
    assert_eq!(group.member(handles[1]).map(|s| s.center()), Some(Pos2::new(20.0, 10.0)));

    let (position, mut removed) = group.remove_member(handles[1]).unwrap();
    removed.erase(&mut surface);
    assert_eq!(position, 1);
    assert_eq!(group.len(), 2);
    assert!(!group.contains(handles[1]));
    assert!(group.remove_member(handles[1]).is_none());

    assert_eq!(group.insert_member(10, removed), 2);
    assert_eq!(group.strokes()[2].center(), Pos2::new(20.0, 10.0));
}

#[test]
fn test_group_color_and_width_fall_back_to_brush_defaults() {
    let group = StrokeGroup::new(1);
    assert_eq!(group.color(), "black");
    assert_eq!(group.width(), 5.0);

    let mut surface = CanvasSurface::new("white");
    let group = create_test_group(&mut surface);
    assert_eq!(group.color(), "red");
    assert_eq!(group.width(), 2.0);
}

#[test]
fn test_bring_to_front_renders_missing_members() {
    let mut surface = CanvasSurface::new("white");
    let mut line = Line::new(1, Outline::new("black", 1.0), Pos2::ZERO, Some(Pos2::new(9.0, 9.0)));
    line.render(&mut surface);

    let mut group = StrokeGroup::with_strokes(
        2,
        vec![
            Stroke::new(Pos2::new(1.0, 1.0), 1.0, "red"),
            Stroke::new(Pos2::new(2.0, 2.0), 1.0, "red"),
        ],
    );
    group.bring_to_front(&mut surface);
    assert_eq!(group.handles().len(), 2);
    assert_eq!(surface.handles()[1..], group.handles()[..]);

    group.send_to_back(&mut surface);
    assert_eq!(surface.handles()[..2], group.handles()[..]);
    assert_eq!(surface.handles()[2], line.handle().unwrap());
}

#[test]
fn test_move_keeps_handle_and_stacking() {
    let mut surface = CanvasSurface::new("white");
    let mut line = Line::new(1, Outline::new("black", 1.0), Pos2::ZERO, Some(Pos2::new(10.0, 0.0)));
    line.render(&mut surface);
    let mut label: Drawable = Label::new(2, Pos2::new(50.0, 50.0), "Arial", 12.0, "black").into();
    label.render(&mut surface);

    let handle = line.handle().unwrap();
    line.move_by(Vec2::new(5.0, 5.0), &mut surface);
    assert_eq!(line.handle(), Some(handle));
    assert_eq!(line.start(), Pos2::new(5.0, 5.0));
    assert_eq!(surface.handles()[0], handle);
    match surface.shape(handle) {
        Some(ShapeSpec::Line { start, end, .. }) => {
            assert_eq!(*start, Pos2::new(5.0, 5.0));
            assert_eq!(*end, Pos2::new(15.0, 5.0));
        }
        other => panic!("unexpected shape {other:?}"),
    }
}

#[test]
fn test_style_edit_redraws_rendered_figure_only() {
    let mut surface = CanvasSurface::new("white");
    let mut figure = Figure::new(
        1,
        FigureKind::Rectangle,
        Outline::new("black", 2.0),
        Some(Fill::new("red")),
        Pos2::ZERO,
    );
    figure.set_fill("blue", &mut surface);
    assert_eq!(surface.shape_count(), 0);

    figure.render(&mut surface);
    figure.remove_fill(&mut surface);
    assert_eq!(surface.shape_count(), 1);
    assert!(figure.fill().is_none());
    match surface.shape(figure.handle().unwrap()) {
        Some(ShapeSpec::Rectangle { fill, .. }) => assert!(fill.is_none()),
        other => panic!("unexpected shape {other:?}"),
    }
}

#[test]
fn test_copies_compare_without_handles() {
    let mut surface = CanvasSurface::new("white");
    let group = create_test_group(&mut surface);
    let mut copy = group.clone();
    copy.render(&mut surface);
    assert_eq!(copy, group);
    assert_ne!(copy.handles(), group.handles());
    assert_eq!(surface.shape_count(), 6);
}
