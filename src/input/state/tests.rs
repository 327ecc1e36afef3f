use super::*;
use crate::draw::{BLACK, BLUE, Color, PaintStyle, RED, Rgba, StyleUpdate, WHITE};
use crate::export::{ExportFormat, ExportSettings};
use crate::input::{Action, InputEvent, Tool};

const SHAPE_TOOLS: [Tool; 4] = [Tool::Rectangle, Tool::Circle, Tool::Triangle, Tool::Line];

fn create_controller() -> DrawingController {
    DrawingController::with_defaults(
        100,   // width
        100,   // height
        WHITE, // background
        false, // antialias
        Tool::Brush,
        PaintStyle {
            stroke_color: BLACK,
            fill_color: BLACK,
            line_width: 4.0,
            fill_enabled: false,
        },
    )
    .unwrap()
}

fn pixels(controller: &DrawingController) -> Vec<u8> {
    controller.surface().to_rgba8().unwrap()
}

fn pixel(controller: &DrawingController, x: i32, y: i32) -> Rgba {
    controller.surface().pixel(x, y).unwrap()
}

fn png() -> ExportSettings {
    ExportSettings {
        format: ExportFormat::Png,
        jpeg_quality: 90,
    }
}

/// Draws something on the controller so later assertions have content to lose.
fn scribble(controller: &mut DrawingController) {
    controller.set_tool(Tool::Brush);
    controller.begin_stroke(5.0, 5.0);
    controller.continue_stroke(95.0, 95.0);
    controller.end_stroke();
}

#[test]
fn test_new_controller_is_idle_with_background() {
    let controller = create_controller();
    assert!(!controller.is_drawing());
    assert!(controller.session().is_none());
    assert_eq!(controller.tool(), Tool::Brush);
    assert_eq!(controller.background(), WHITE);
    assert_eq!((controller.width(), controller.height()), (100, 100));
    assert_eq!(pixel(&controller, 50, 50), WHITE.to_rgba8());
}

#[test]
fn test_begin_stroke_opens_session() {
    let mut controller = create_controller();
    controller.begin_stroke(10.0, 20.0);

    let session = controller.session().expect("session should be active");
    assert_eq!(session.start().x, 10.0);
    assert_eq!(session.start().y, 20.0);
    assert_eq!(session.last_point(), session.start());
    assert_eq!(session.tool(), Tool::Brush);
    assert_eq!(session.snapshot().width(), 100);
}

#[test]
fn test_begin_stroke_outside_surface_is_ignored() {
    let mut controller = create_controller();
    controller.begin_stroke(-1.0, 10.0);
    assert!(!controller.is_drawing());

    controller.begin_stroke(100.0, 10.0);
    assert!(!controller.is_drawing());
}

#[test]
fn test_second_pointer_down_keeps_original_session() {
    let mut controller = create_controller();
    controller.begin_stroke(10.0, 10.0);
    controller.begin_stroke(60.0, 60.0);

    let session = controller.session().unwrap();
    assert_eq!(session.start().x, 10.0);
}

#[test]
fn test_continue_without_session_is_noop() {
    let mut controller = create_controller();
    let before = pixels(&controller);

    for tool in Tool::ALL {
        controller.set_tool(tool);
        controller.continue_stroke(50.0, 50.0);
    }

    assert_eq!(pixels(&controller), before);
    assert!(!controller.is_drawing());
}

#[test]
fn test_brush_draws_cumulative_segments() {
    let mut controller = create_controller();
    controller.begin_stroke(10.0, 10.0);
    controller.continue_stroke(50.0, 10.0);
    controller.continue_stroke(50.0, 50.0);

    assert_eq!(controller.session().unwrap().last_point().y, 50.0);
    controller.end_stroke();

    // Both segments remain: the brush never restores the snapshot.
    assert_eq!(pixel(&controller, 30, 10), BLACK.to_rgba8());
    assert_eq!(pixel(&controller, 50, 30), BLACK.to_rgba8());
    assert_eq!(pixel(&controller, 30, 40), WHITE.to_rgba8());
}

#[test]
fn test_eraser_paints_background_without_touching_style() {
    let mut controller = create_controller();
    controller.set_style(&StyleUpdate::color(RED));
    scribble(&mut controller);

    controller.set_tool(Tool::Eraser);
    controller.begin_stroke(50.0, 0.0);
    controller.continue_stroke(50.0, 99.0);
    controller.end_stroke();

    assert_eq!(pixel(&controller, 50, 50), WHITE.to_rgba8());
    assert_eq!(controller.style().stroke_color, RED);
}

#[test]
fn test_brush_then_eraser_restores_background() {
    let path = [
        (12.0, 15.0),
        (30.0, 22.5),
        (47.0, 60.0),
        (80.0, 71.0),
        (90.0, 20.0),
    ];

    let mut controller = create_controller();
    let fresh = pixels(&controller);

    for tool in [Tool::Brush, Tool::Eraser] {
        controller.set_tool(tool);
        controller.begin_stroke(path[0].0, path[0].1);
        for &(x, y) in &path[1..] {
            controller.continue_stroke(x, y);
        }
        controller.end_stroke();

        if tool == Tool::Brush {
            assert_ne!(pixels(&controller), fresh);
        }
    }

    assert_eq!(pixels(&controller), fresh);
}

#[test]
fn test_preview_frames_do_not_accumulate() {
    for fill in [false, true] {
        for tool in SHAPE_TOOLS {
            let mut twice = create_controller();
            twice.set_style(&StyleUpdate::fill_enabled(fill));
            twice.set_tool(tool);
            twice.begin_stroke(30.0, 30.0);
            twice.continue_stroke(80.0, 70.0);
            twice.continue_stroke(45.0, 50.0);

            let mut once = create_controller();
            once.set_style(&StyleUpdate::fill_enabled(fill));
            once.set_tool(tool);
            once.begin_stroke(30.0, 30.0);
            once.continue_stroke(45.0, 50.0);

            assert_eq!(
                pixels(&twice),
                pixels(&once),
                "{tool} preview (fill: {fill}) kept a stale frame"
            );
        }
    }
}

#[test]
fn test_preview_depends_on_pre_gesture_snapshot() {
    let mut controller = create_controller();
    scribble(&mut controller);
    let before = pixels(&controller);

    controller.set_tool(Tool::Rectangle);
    controller.begin_stroke(20.0, 20.0);
    controller.continue_stroke(70.0, 70.0);
    assert_ne!(pixels(&controller), before);

    // Collapsing the drag back onto the start leaves only a dot-sized rectangle;
    // the diagonal scribble underneath is intact.
    controller.continue_stroke(20.0, 20.0);
    assert_eq!(pixel(&controller, 70, 45), WHITE.to_rgba8());
    assert_eq!(pixel(&controller, 60, 60), BLACK.to_rgba8());
}

#[test]
fn test_end_stroke_keeps_last_preview() {
    let mut controller = create_controller();
    controller.set_tool(Tool::Line);
    controller.begin_stroke(10.0, 50.0);
    controller.continue_stroke(90.0, 50.0);
    controller.end_stroke();

    assert!(!controller.is_drawing());
    assert_eq!(pixel(&controller, 50, 50), BLACK.to_rgba8());

    // A later pointer move without a session must not touch the committed line.
    controller.continue_stroke(10.0, 10.0);
    assert_eq!(pixel(&controller, 50, 50), BLACK.to_rgba8());
}

#[test]
fn test_end_stroke_twice_does_not_alter_surface() {
    let mut controller = create_controller();
    controller.set_tool(Tool::Circle);
    controller.begin_stroke(50.0, 50.0);
    controller.continue_stroke(70.0, 50.0);
    controller.end_stroke();
    let after_first = pixels(&controller);

    controller.end_stroke();
    assert_eq!(pixels(&controller), after_first);
    assert!(!controller.is_drawing());
}

#[test]
fn test_rectangle_outline_and_fill() {
    let mut controller = create_controller();
    controller.set_tool(Tool::Rectangle);

    controller.begin_stroke(80.0, 80.0);
    controller.continue_stroke(20.0, 20.0);
    controller.end_stroke();
    assert_eq!(pixel(&controller, 20, 50), BLACK.to_rgba8());
    assert_eq!(pixel(&controller, 50, 50), WHITE.to_rgba8());

    controller.clear();
    controller.set_style(&StyleUpdate {
        fill_color: Some(BLUE),
        fill_enabled: Some(true),
        ..StyleUpdate::default()
    });
    controller.begin_stroke(20.0, 20.0);
    controller.continue_stroke(80.0, 80.0);
    controller.end_stroke();
    assert_eq!(pixel(&controller, 50, 50), BLUE.to_rgba8());
}

#[test]
fn test_circle_is_centered_on_start() {
    let mut controller = create_controller();
    controller.set_tool(Tool::Circle);
    controller.set_style(&StyleUpdate::fill_enabled(true));

    // Radius 5 (3-4-5 triangle).
    controller.begin_stroke(50.0, 50.0);
    controller.continue_stroke(53.0, 54.0);
    controller.end_stroke();

    assert_eq!(pixel(&controller, 50, 50), BLACK.to_rgba8());
    assert_eq!(pixel(&controller, 46, 50), BLACK.to_rgba8());
    assert_eq!(pixel(&controller, 50, 57), WHITE.to_rgba8());
    assert_eq!(pixel(&controller, 57, 50), WHITE.to_rgba8());
}

#[test]
fn test_triangle_uses_mirrored_vertex() {
    let mut controller = create_controller();
    controller.set_tool(Tool::Triangle);
    controller.set_style(&StyleUpdate::fill_enabled(true));

    // Vertices: (50, 10), (70, 50) and the mirrored (30, 50).
    controller.begin_stroke(50.0, 10.0);
    controller.continue_stroke(70.0, 50.0);
    controller.end_stroke();

    assert_eq!(pixel(&controller, 35, 48), BLACK.to_rgba8());
    assert_eq!(pixel(&controller, 65, 48), BLACK.to_rgba8());
    assert_eq!(pixel(&controller, 50, 30), BLACK.to_rgba8());
    assert_eq!(pixel(&controller, 20, 48), WHITE.to_rgba8());
    assert_eq!(pixel(&controller, 50, 60), WHITE.to_rgba8());
}

#[test]
fn test_style_is_captured_at_stroke_start() {
    let mut controller = create_controller();
    controller.set_tool(Tool::Line);
    controller.begin_stroke(10.0, 50.0);

    controller.set_style(&StyleUpdate::color(RED));
    controller.set_tool(Tool::Rectangle);
    controller.continue_stroke(90.0, 50.0);
    controller.end_stroke();

    // Still a black line, not a red rectangle.
    assert_eq!(pixel(&controller, 50, 50), BLACK.to_rgba8());
    assert_eq!(pixel(&controller, 50, 10), WHITE.to_rgba8());

    // The new settings apply to the next gesture.
    controller.begin_stroke(10.0, 10.0);
    assert_eq!(controller.session().unwrap().tool(), Tool::Rectangle);
    assert_eq!(controller.session().unwrap().style().stroke_color, RED);
}

#[test]
fn test_clear_restores_fresh_surface_and_ends_session() {
    let mut controller = create_controller();
    let fresh = pixels(&controller);

    scribble(&mut controller);
    controller.begin_stroke(10.0, 10.0);
    controller.clear();

    assert!(!controller.is_drawing());
    assert_eq!(pixels(&controller), fresh);
}

#[test]
fn test_clear_then_export_matches_fresh_export() {
    for format in [ExportFormat::Png, ExportFormat::Jpeg] {
        let settings = ExportSettings {
            format,
            jpeg_quality: 85,
        };

        let fresh = create_controller().export(&settings).unwrap();

        let mut controller = create_controller();
        scribble(&mut controller);
        controller.set_tool(Tool::Circle);
        controller.set_style(&StyleUpdate::fill_enabled(true));
        controller.begin_stroke(40.0, 40.0);
        controller.continue_stroke(60.0, 60.0);
        controller.end_stroke();
        controller.clear();

        let exported = controller.export(&settings).unwrap();
        assert_eq!(exported.bytes, fresh.bytes, "{format} export differs");
        assert_eq!(exported.format, format);
    }
}

#[test]
fn test_export_is_read_only_and_timestamped() {
    let mut controller = create_controller();
    controller.set_tool(Tool::Line);
    controller.begin_stroke(10.0, 10.0);
    controller.continue_stroke(90.0, 90.0);
    let before = pixels(&controller);

    let image = controller.export(&png()).unwrap();

    assert_eq!(pixels(&controller), before);
    assert!(controller.is_drawing());

    let (stem, ext) = image.file_name.split_once('.').unwrap();
    assert_eq!(ext, "png");
    assert!(stem.parse::<i64>().is_ok());
}

#[test]
fn test_initialize_resizes_and_discards_content() {
    let mut controller = create_controller();
    scribble(&mut controller);
    controller.begin_stroke(10.0, 10.0);

    controller.initialize(40, 30).unwrap();

    assert!(!controller.is_drawing());
    assert_eq!((controller.width(), controller.height()), (40, 30));
    assert!(
        pixels(&controller)
            .chunks_exact(4)
            .all(|px| px == [255, 255, 255, 255])
    );
}

#[test]
fn test_initialize_rejects_invalid_size() {
    let mut controller = create_controller();
    assert!(controller.initialize(0, 10).is_err());
    assert_eq!((controller.width(), controller.height()), (100, 100));
}

#[test]
fn test_custom_background_is_used_by_eraser_and_clear() {
    let background = Color::from_rgb8(250, 240, 200);
    let mut controller = DrawingController::with_defaults(
        50,
        50,
        background,
        false,
        Tool::Brush,
        PaintStyle::default(),
    )
    .unwrap();

    controller.begin_stroke(0.0, 25.0);
    controller.continue_stroke(49.0, 25.0);
    controller.end_stroke();
    assert_eq!(pixel(&controller, 25, 25), BLACK.to_rgba8());

    controller.set_tool(Tool::Eraser);
    controller.begin_stroke(0.0, 25.0);
    controller.continue_stroke(49.0, 25.0);
    controller.end_stroke();
    assert_eq!(pixel(&controller, 25, 25), background.to_rgba8());
}

#[test]
fn test_apply_dispatches_events() {
    let mut controller = create_controller();
    let events = vec![
        InputEvent::SelectTool {
            tool: Tool::Rectangle,
        },
        InputEvent::SetStyle {
            color: Some("red".parse::<Color>().unwrap().into()),
            stroke_color: None,
            fill_color: None,
            line_width: Some(2.0),
            fill_enabled: Some(true),
        },
        InputEvent::PointerDown { x: 20.0, y: 20.0 },
        InputEvent::PointerMove { x: 60.0, y: 60.0 },
        InputEvent::Export,
        InputEvent::PointerUp,
    ];

    let actions = controller.apply_all(&events);

    assert_eq!(actions, vec![Action::Export]);
    assert_eq!(controller.tool(), Tool::Rectangle);
    assert_eq!(controller.style().line_width, 2.0);
    assert!(!controller.is_drawing());
    assert_eq!(pixel(&controller, 40, 40), RED.to_rgba8());

    assert_eq!(controller.apply(&InputEvent::Clear), None);
    assert_eq!(pixel(&controller, 40, 40), WHITE.to_rgba8());
}

#[test]
fn test_apply_ignores_unparseable_style() {
    let mut controller = create_controller();
    let before = *controller.style();

    controller.apply(&InputEvent::SetStyle {
        color: Some(crate::config::ColorSpec::Name("nope".into())),
        stroke_color: None,
        fill_color: None,
        line_width: Some(9.0),
        fill_enabled: None,
    });

    assert_eq!(*controller.style(), before);
}
