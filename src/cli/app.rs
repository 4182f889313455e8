//! Command runners for render, frames and geometry

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use tracing::{debug, warn};

use crate::application::ports::{ConfigStore, RenderError, SceneRenderer};
use crate::application::{RecordButton, Scene};
use crate::domain::config::ButtonConfig;
use crate::domain::geometry::Rect;
use crate::infrastructure::{create_feedback, write_png, PixmapRenderer, XdgConfigStore};

use super::args::FrameArgs;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// How long each simulated tap holds the button down
const TAP_HOLD: Duration = Duration::from_millis(100);

/// Config store for an explicit path, or the XDG default
pub fn config_store(path: Option<PathBuf>) -> XdgConfigStore {
    match path {
        Some(path) => XdgConfigStore::with_path(path),
        None => XdgConfigStore::new(),
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: ButtonConfig) -> ButtonConfig {
    let file_config = store.load().await.unwrap_or_else(|e| {
        warn!(path = %store.path().display(), error = %e, "ignoring unreadable config file");
        ButtonConfig::empty()
    });

    // Merge: defaults < file < cli
    ButtonConfig::defaults().merge(file_config).merge(cli_config)
}

/// Button laid out at the configured size, without feedback
pub fn build_button(config: &ButtonConfig) -> RecordButton {
    let size = config.size_or_default() as f32;
    RecordButton::with_style(config.to_style()).with_bounds(Rect::from_size(size, size))
}

/// Button showing the static state described by `frame`
pub fn frame_button(config: &ButtonConfig, frame: FrameArgs) -> RecordButton {
    let mut button = build_button(config);
    button.set_selected(frame.selected);
    if frame.pressed {
        let center = button.bounds().center();
        button.pointer_down(center);
    }
    button.finish_animation();
    button
}

/// Render a single frame to `output`
pub fn run_render(config: &ButtonConfig, frame: FrameArgs, output: &Path) -> ExitCode {
    let presenter = Presenter::new();
    let button = frame_button(config, frame);

    let result = PixmapRenderer::new()
        .render(&button.scene())
        .and_then(|pixmap| write_png(&pixmap, output));

    match result {
        Ok(()) => {
            presenter.success(&format!("Wrote {}", output.display()));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&format!("Render failed: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Print the scene of a static frame as JSON
pub fn run_geometry(config: &ButtonConfig, frame: FrameArgs) -> ExitCode {
    let presenter = Presenter::new();
    let scene = frame_button(config, frame).scene();

    match serde_json::to_string_pretty(&scene) {
        Ok(json) => {
            presenter.output(&json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&format!("Failed to serialize scene: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Simulate `taps` taps at `fps` and write every frame into `output`
pub fn run_frames(config: &ButtonConfig, fps: u32, taps: u32, output: &Path) -> ExitCode {
    let mut presenter = Presenter::new();

    if let Err(e) = std::fs::create_dir_all(output) {
        presenter.error(&format!(
            "Failed to create {}: {}",
            output.display(),
            e
        ));
        return ExitCode::from(EXIT_ERROR);
    }

    let mode = config.haptics_or_default();
    let mut button = build_button(config).with_feedback(mode, create_feedback(mode));
    let scenes = simulate_taps(&mut button, fps, taps);

    presenter.start_progress(scenes.len() as u64, "Rendering frames");
    let mut renderer = PixmapRenderer::new();
    for (index, scene) in scenes.iter().enumerate() {
        let path = output.join(frame_file_name(index));
        if let Err(e) = render_to(&mut renderer, scene, &path) {
            presenter.progress_fail("Rendering failed");
            presenter.error(&format!("{}: {}", path.display(), e));
            return ExitCode::from(EXIT_ERROR);
        }
        presenter.advance_progress();
    }
    presenter.progress_success(&format!(
        "Wrote {} frames to {}",
        scenes.len(),
        output.display()
    ));

    ExitCode::from(EXIT_SUCCESS)
}

/// Drive `button` through `taps` press/release cycles, capturing one scene
/// per timeline step. Each tap holds for [`TAP_HOLD`] and the next tap
/// starts once the release animation has settled.
pub fn simulate_taps(button: &mut RecordButton, fps: u32, taps: u32) -> Vec<Scene> {
    let step = Duration::from_secs(1) / fps.max(1);
    let hold_steps = steps_for(TAP_HOLD, step);
    let center = button.bounds().center();

    let mut scenes = vec![button.scene()];
    for tap in 0..taps {
        debug!(tap, "simulated press");
        button.pointer_down(center);
        for _ in 0..hold_steps {
            button.advance(step);
            scenes.push(button.scene());
        }

        button.pointer_up(center);
        loop {
            let animating = button.advance(step);
            scenes.push(button.scene());
            if !animating {
                break;
            }
        }
    }
    scenes
}

/// Numbered PNG file name for a frame
pub fn frame_file_name(index: usize) -> String {
    format!("frame_{:04}.png", index)
}

fn steps_for(span: Duration, step: Duration) -> u32 {
    let steps = span.as_secs_f64() / step.as_secs_f64();
    (steps.round() as u32).max(1)
}

fn render_to(renderer: &mut PixmapRenderer, scene: &Scene, path: &Path) -> Result<(), RenderError> {
    let pixmap = renderer.render(scene)?;
    write_png(&pixmap, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::{resting_shape, RoundedRect};

    fn config(size: u32) -> ButtonConfig {
        ButtonConfig {
            size: Some(size),
            ..ButtonConfig::defaults()
        }
    }

    fn frame(selected: bool, pressed: bool) -> FrameArgs {
        FrameArgs {
            size: None,
            selected,
            pressed,
        }
    }

    #[tokio::test]
    async fn merged_config_prefers_cli_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        store
            .save(&ButtonConfig {
                ring_width: Some(3.0),
                size: Some(64),
                ..Default::default()
            })
            .await
            .unwrap();

        let cli = ButtonConfig {
            size: Some(128),
            ..Default::default()
        };
        let config = load_merged_config(&store, cli).await;
        assert_eq!(config.ring_width, Some(3.0));
        assert_eq!(config.size, Some(128));
        assert_eq!(config.ring_spacing, Some(2.0));
    }

    #[tokio::test]
    async fn merged_config_ignores_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "ring_width = [").unwrap();
        let store = XdgConfigStore::with_path(path);

        let config = load_merged_config(&store, ButtonConfig::empty()).await;
        assert_eq!(config, ButtonConfig::defaults());
    }

    #[test]
    fn frame_button_settles_requested_state() {
        let button = frame_button(&config(100), frame(true, false));
        assert!(button.is_selected());
        assert!(!button.is_animating());

        let style = button.style();
        let expected: RoundedRect = resting_shape(button.bounds(), style, true);
        assert_eq!(button.presented_shape(), expected);
    }

    #[test]
    fn frame_button_pressed_is_smaller() {
        let resting = frame_button(&config(100), frame(false, false)).presented_shape();
        let pressed = frame_button(&config(100), frame(false, true));
        assert!(pressed.is_pressed());
        assert!(pressed.presented_shape().rect.width < resting.rect.width);
    }

    #[test]
    fn simulate_taps_ends_on_toggled_state() {
        let mut button = build_button(&config(100));
        let scenes = simulate_taps(&mut button, 60, 1);
        let last = scenes.last().unwrap();
        assert!(last.selected);
        assert!(!last.pressed);
        assert!(!last.animating);
        assert!(!scenes[0].selected);
    }

    #[test]
    fn simulate_two_taps_returns_to_idle() {
        let mut button = build_button(&config(100));
        let scenes = simulate_taps(&mut button, 30, 2);
        assert!(!scenes.last().unwrap().selected);
        assert!(scenes.iter().any(|scene| scene.selected));
    }

    #[test]
    fn instant_transitions_still_emit_frames() {
        let mut config = config(50);
        config.transition_duration = Some(0.0);
        let mut button = build_button(&config);
        let scenes = simulate_taps(&mut button, 10, 1);
        // initial + one hold step + one settle step
        assert_eq!(scenes.len(), 3);
    }

    #[test]
    fn frame_names_are_zero_padded() {
        assert_eq!(frame_file_name(0), "frame_0000.png");
        assert_eq!(frame_file_name(42), "frame_0042.png");
    }

    #[test]
    fn steps_round_to_whole_frames() {
        let step = Duration::from_secs(1) / 60;
        assert_eq!(steps_for(Duration::from_millis(100), step), 6);
        assert_eq!(steps_for(Duration::from_millis(25), step), 2);
        assert_eq!(steps_for(Duration::ZERO, step), 1);
    }

    #[test]
    fn run_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("button.png");
        run_render(&config(32), frame(false, false), &path);
        assert!(path.exists());
    }

    #[test]
    fn run_frames_writes_numbered_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(32);
        config.transition_duration = Some(0.05);
        run_frames(&config, 20, 1, dir.path());
        assert!(dir.path().join("frame_0000.png").exists());
        assert!(dir.path().join("frame_0001.png").exists());
    }
}
