//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::config::ButtonConfig;
use crate::domain::style::{Color, HapticsMode, MAX_TRANSITION_SECS};

/// Largest accepted render size in pixels
pub const MAX_SIZE: u32 = 4096;

/// record-button - Animated record button renderer
#[derive(Parser, Debug)]
#[command(name = "record-button")]
#[command(version)]
#[command(about = "Render and simulate an animated record button")]
#[command(long_about = None)]
pub struct Cli {
    /// Inner shape colour (#RRGGBB or #RRGGBBAA)
    #[arg(long, value_name = "COLOR", global = true)]
    pub inner_color: Option<Color>,

    /// Outer ring colour (#RRGGBB or #RRGGBBAA)
    #[arg(long, value_name = "COLOR", global = true)]
    pub ring_color: Option<Color>,

    /// Outer ring stroke width in points
    #[arg(long, value_name = "POINTS", global = true)]
    pub ring_width: Option<f32>,

    /// Gap between the ring and the inner shape in points
    #[arg(long, value_name = "POINTS", global = true)]
    pub ring_spacing: Option<f32>,

    /// Transition duration in seconds (0 to 60)
    #[arg(short = 'd', long, value_name = "SECS", global = true, value_parser = parse_duration)]
    pub duration: Option<f32>,

    /// Feedback mode (none, selection, highlight, highlight:<0..1>)
    #[arg(long, value_name = "MODE", global = true)]
    pub haptics: Option<HapticsMode>,

    /// Use this config file instead of the XDG default
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Style overrides given on the command line
    pub fn to_config(&self) -> ButtonConfig {
        ButtonConfig {
            inner_color: self.inner_color.map(|c| c.to_string()),
            ring_color: self.ring_color.map(|c| c.to_string()),
            ring_width: self.ring_width,
            ring_spacing: self.ring_spacing,
            transition_duration: self.duration,
            haptics: self.haptics.map(|h| h.to_string()),
            size: self.command.size(),
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one frame to a PNG file
    Render {
        #[command(flatten)]
        frame: FrameArgs,

        /// Output PNG path
        #[arg(short = 'o', long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Simulate taps and write every animation frame as a numbered PNG
    Frames {
        /// Button size in pixels
        #[arg(short = 's', long, value_name = "PIXELS", value_parser = size_parser())]
        size: Option<u32>,

        /// Frames per second of the simulated timeline
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
        fps: u32,

        /// Number of taps to simulate
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=100))]
        taps: u32,

        /// Output directory (created if missing)
        #[arg(short = 'o', long, value_name = "DIR")]
        output: PathBuf,
    },
    /// Print the scene geometry as JSON
    Geometry {
        #[command(flatten)]
        frame: FrameArgs,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Commands {
    fn size(&self) -> Option<u32> {
        match self {
            Commands::Render { frame, .. } | Commands::Geometry { frame } => frame.size,
            Commands::Frames { size, .. } => *size,
            Commands::Config { .. } => None,
        }
    }
}

/// Static frame options shared by `render` and `geometry`
#[derive(Args, Debug, Clone, Copy)]
pub struct FrameArgs {
    /// Button size in pixels
    #[arg(short = 's', long, value_name = "PIXELS", value_parser = size_parser())]
    pub size: Option<u32>,

    /// Show the selected (recording) state
    #[arg(long)]
    pub selected: bool,

    /// Show the button while held down
    #[arg(long)]
    pub pressed: bool,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "inner_color",
    "ring_color",
    "ring_width",
    "ring_spacing",
    "transition_duration",
    "haptics",
    "size",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

fn size_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=MAX_SIZE as i64)
}

/// Transition seconds within `0..=MAX_TRANSITION_SECS`
pub fn parse_duration(s: &str) -> Result<f32, String> {
    let secs: f32 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if secs.is_finite() && (0.0..=MAX_TRANSITION_SECS).contains(&secs) {
        Ok(secs)
    } else {
        Err(format!("must be between 0 and {} seconds", MAX_TRANSITION_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_render() {
        let cli = Cli::parse_from(["record-button", "render", "-o", "out.png"]);
        match cli.command {
            Commands::Render { frame, output } => {
                assert_eq!(output, PathBuf::from("out.png"));
                assert!(frame.size.is_none());
                assert!(!frame.selected);
                assert!(!frame.pressed);
            }
            other => panic!("Expected Render command, got {:?}", other),
        }
    }

    #[test]
    fn cli_parses_frame_flags() {
        let cli = Cli::parse_from([
            "record-button",
            "geometry",
            "--size",
            "100",
            "--selected",
            "--pressed",
        ]);
        match cli.command {
            Commands::Geometry { frame } => {
                assert_eq!(frame.size, Some(100));
                assert!(frame.selected);
                assert!(frame.pressed);
            }
            other => panic!("Expected Geometry command, got {:?}", other),
        }
    }

    #[test]
    fn cli_parses_frames_defaults() {
        let cli = Cli::parse_from(["record-button", "frames", "-o", "out"]);
        match cli.command {
            Commands::Frames { fps, taps, .. } => {
                assert_eq!(fps, 60);
                assert_eq!(taps, 2);
            }
            other => panic!("Expected Frames command, got {:?}", other),
        }
    }

    #[test]
    fn cli_parses_global_style_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "record-button",
            "geometry",
            "--inner-color",
            "#00ff00",
            "--ring-width",
            "4",
            "--haptics",
            "highlight:0.5",
        ]);
        assert_eq!(cli.inner_color, Some(Color::rgb(0, 255, 0)));
        assert_eq!(cli.ring_width, Some(4.0));
        assert_eq!(cli.haptics, Some(HapticsMode::Highlight(0.5)));
    }

    #[test]
    fn cli_rejects_bad_color() {
        let result = Cli::try_parse_from(["record-button", "--inner-color", "red", "geometry"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_rejects_bad_haptics() {
        let result = Cli::try_parse_from(["record-button", "--haptics", "buzz", "geometry"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_rejects_zero_size() {
        let result = Cli::try_parse_from(["record-button", "geometry", "--size", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_rejects_out_of_range_duration() {
        for value in ["1e30", "-1", "inf", "NaN", "slow"] {
            let result = Cli::try_parse_from(["record-button", "geometry", "-d", value]);
            assert!(result.is_err(), "accepted duration {}", value);
        }
        let cli = Cli::parse_from(["record-button", "geometry", "-d", "60"]);
        assert_eq!(cli.duration, Some(60.0));
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["record-button"]).is_err());
    }

    #[test]
    fn to_config_carries_overrides_only() {
        let cli = Cli::parse_from([
            "record-button",
            "--ring-color",
            "#101010",
            "-d",
            "0.3",
            "render",
            "-s",
            "64",
            "-o",
            "x.png",
        ]);
        let config = cli.to_config();
        assert_eq!(config.ring_color, Some("#101010".to_string()));
        assert_eq!(config.transition_duration, Some(0.3));
        assert_eq!(config.size, Some(64));
        assert!(config.inner_color.is_none());
        assert!(config.haptics.is_none());
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["record-button", "config", "set", "ring_width", "4"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "ring_width");
            assert_eq!(value, "4");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("inner_color"));
        assert!(is_valid_config_key("haptics"));
        assert!(is_valid_config_key("size"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
