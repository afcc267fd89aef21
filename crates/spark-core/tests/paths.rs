// File: crates/spark-core/tests/paths.rs
// Purpose: Validate line/area path construction and SVG path data output.

use spark_core::{area_path, line_path, project, svg_data, DisplayBox, PathCmd, PAD};

#[test]
fn line_path_is_move_then_lines() {
    let bx = DisplayBox::tiny();
    let pts = project(&[1.0, 3.0, 2.0], bx);
    let cmds = line_path(&pts);
    assert_eq!(cmds.len(), 3);
    assert!(matches!(cmds[0], PathCmd::MoveTo { .. }));
    assert!(cmds[1..].iter().all(|c| matches!(c, PathCmd::LineTo { .. })));
}

#[test]
fn area_path_closes_to_the_baseline_corners() {
    // [1,2] as area: move, line, then two closing segments. Exactly 4 commands.
    let bx = DisplayBox::tiny();
    let pts = project(&[1.0, 2.0], bx);
    let cmds = area_path(&pts, bx);
    assert_eq!(cmds.len(), 4);
    assert!(matches!(cmds[0], PathCmd::MoveTo { .. }));
    let bottom = bx.height - PAD;
    match cmds[2] {
        PathCmd::LineTo { x, y } => {
            assert!((x - (bx.width - PAD)).abs() < 1e-4);
            assert!((y - bottom).abs() < 1e-4);
        }
        _ => panic!("expected LineTo to bottom-right corner"),
    }
    match cmds[3] {
        PathCmd::LineTo { x, y } => {
            assert!((x - PAD).abs() < 1e-4);
            assert!((y - bottom).abs() < 1e-4);
        }
        _ => panic!("expected LineTo to bottom-left corner"),
    }
}

#[test]
fn empty_projection_builds_empty_paths() {
    let bx = DisplayBox::tiny();
    let pts = project(&[1.0], bx);
    assert!(line_path(&pts).is_empty());
    assert!(area_path(&pts, bx).is_empty());
}

#[test]
fn svg_data_formats_commands() {
    let cmds = [
        PathCmd::MoveTo { x: 1.5, y: 12.5 },
        PathCmd::LineTo { x: 48.5, y: 1.5 },
    ];
    assert_eq!(svg_data(&cmds), "M1.5 12.5 L48.5 1.5");
    assert_eq!(svg_data(&[]), "");
}
