use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use isogrid_core::{HoverMode, InputEvent, LogicalKey, Viewer};

/// A scripted input sequence, read from TOML. Each `[[frame]]` step describes
/// the input state for one or more consecutive frames, so replays are
/// deterministic and diffable.
#[derive(Debug, Deserialize)]
pub struct ReplayScript {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default, rename = "frame")]
    pub frames: Vec<FrameStep>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FrameStep {
    /// Physical key codes held during this step (e.g. "KeyW", "ArrowLeft").
    #[serde(default)]
    pub keys: Vec<String>,
    /// Absolute pointer position in pixels, if the pointer moved.
    pub pointer: Option<[f32; 2]>,
    /// Mouse button held down?
    pub button: Option<bool>,
    /// Pointer inside the viewport?
    pub inside: Option<bool>,
    /// Number of frames to run with this state.
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

fn default_width() -> f32 {
    800.0
}

fn default_height() -> f32 {
    600.0
}

fn default_repeat() -> u32 {
    1
}

/// One line of replay output.
#[derive(Debug)]
pub struct FrameReport {
    pub frame: u32,
    pub target: (f32, f32),
    pub position: (f32, f32),
    pub highlighted: usize,
    pub mode: HoverMode,
}

pub fn load(path: &Path) -> anyhow::Result<ReplayScript> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

pub fn parse(text: &str) -> anyhow::Result<ReplayScript> {
    Ok(toml::from_str(text)?)
}

/// Run the script through a fresh viewer, emitting one report per frame.
///
/// Key and pointer state is diffed between steps and turned into the same
/// events the browser listeners would have produced.
pub fn run(script: &ReplayScript) -> Vec<FrameReport> {
    let mut viewer = Viewer::new(script.width, script.height);
    let mut held: BTreeSet<LogicalKey> = BTreeSet::new();
    let mut inside = false;
    let mut button = false;
    let mut pointer: Option<[f32; 2]> = None;

    let mut reports = Vec::new();
    let mut frame_no = 0u32;

    for step in &script.frames {
        let want: BTreeSet<LogicalKey> = step
            .keys
            .iter()
            .filter_map(|code| LogicalKey::from_code(code))
            .collect();
        for key in want.difference(&held) {
            viewer.handle_event(InputEvent::KeyDown(*key));
        }
        for key in held.difference(&want) {
            viewer.handle_event(InputEvent::KeyUp(*key));
        }
        held = want;

        if let Some(now_inside) = step.inside {
            if now_inside != inside {
                viewer.handle_event(if now_inside {
                    InputEvent::PointerEnter
                } else {
                    InputEvent::PointerLeave
                });
                inside = now_inside;
            }
        }
        if let Some(now_down) = step.button {
            if now_down != button {
                viewer.handle_event(if now_down {
                    InputEvent::PointerDown
                } else {
                    InputEvent::PointerUp
                });
                button = now_down;
            }
        }
        if let Some([x, y]) = step.pointer {
            let (dx, dy) = match pointer {
                Some([px, py]) => (x - px, y - py),
                None => (0.0, 0.0),
            };
            viewer.handle_event(InputEvent::PointerMove { x, y, dx, dy });
            pointer = Some([x, y]);
        }

        for _ in 0..step.repeat.max(1) {
            viewer.frame();
            frame_no += 1;
            let target = viewer.camera().target();
            let position = viewer.camera().position();
            reports.push(FrameReport {
                frame: frame_no,
                target: (target.x, target.y),
                position: (position.x, position.y),
                highlighted: viewer.highlighted().len(),
                mode: viewer.hover_mode(),
            });
        }
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_parse_minimal_script() {
        let script = parse(
            r#"
            [[frame]]
            keys = ["KeyW"]
            repeat = 10

            [[frame]]
            inside = true
            pointer = [400.0, 300.0]
            "#,
        )
        .unwrap();
        assert_eq!(script.width, 800.0);
        assert_eq!(script.frames.len(), 2);
        assert_eq!(script.frames[0].repeat, 10);
        assert_eq!(script.frames[1].pointer, Some([400.0, 300.0]));
    }

    #[test]
    fn test_key_hold_target_is_vector_sum() {
        let script = parse(
            r#"
            [[frame]]
            keys = ["KeyD"]
            repeat = 10
            "#,
        )
        .unwrap();
        let reports = run(&script);
        assert_eq!(reports.len(), 10);

        let per_frame = 0.1 * std::f32::consts::FRAC_1_SQRT_2;
        let last = reports.last().unwrap();
        assert!(approx_eq(last.target.0, 10.0 * per_frame));
        assert!(approx_eq(last.target.1, 10.0 * per_frame));
        // Smoothed position still lags the target.
        assert!(last.position.0 < last.target.0);
    }

    #[test]
    fn test_drag_cancelled_when_pointer_leaves() {
        let script = parse(
            r#"
            [[frame]]
            inside = true
            button = true
            pointer = [100.0, 100.0]

            [[frame]]
            pointer = [110.0, 100.0]

            [[frame]]
            inside = false
            pointer = [300.0, 100.0]
            "#,
        )
        .unwrap();
        let reports = run(&script);
        // Frame 2 dragged; frame 3 (outside) must not move the target further.
        assert_ne!(reports[1].target, reports[0].target);
        assert_eq!(reports[2].target, reports[1].target);
    }

    #[test]
    fn test_hover_over_center_highlights_neighborhood() {
        let script = parse(
            r#"
            [[frame]]
            inside = true
            pointer = [400.0, 300.0]
            "#,
        )
        .unwrap();
        let reports = run(&script);
        assert_eq!(reports[0].mode, HoverMode::Neighborhood);
        assert_eq!(reports[0].highlighted, 9);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.toml");
        std::fs::write(&path, "[[frame]]\nkeys = [\"ArrowUp\"]\nrepeat = 3\n").unwrap();

        let script = load(&path).unwrap();
        assert_eq!(run(&script).len(), 3);
    }

    #[test]
    fn test_load_rejects_bad_script() {
        assert!(parse("frames = 3").is_err());
    }
}
