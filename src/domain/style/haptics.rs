//! Haptics mode value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::HapticsModeParseError;

/// Intensity used by `highlight` when none is given
pub const DEFAULT_HIGHLIGHT_INTENSITY: f32 = 1.0;

/// Which tactile feedback the button produces
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HapticsMode {
    /// No feedback at all
    #[default]
    None,
    /// A neutral tick whenever the selection toggles
    Selection,
    /// An impact pulse on press plus another on toggle.
    /// Intensity is kept within `0.0..=1.0`.
    Highlight(f32),
}

impl HapticsMode {
    /// Build a highlight mode with the intensity clamped to `0.0..=1.0`
    pub fn highlight(intensity: f32) -> Self {
        Self::Highlight(clamp_intensity(intensity))
    }

    /// Same mode with any out-of-range intensity clamped
    pub fn normalized(self) -> Self {
        match self {
            Self::Highlight(i) => Self::highlight(i),
            other => other,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Selection => "selection",
            Self::Highlight(_) => "highlight",
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }
}

fn clamp_intensity(intensity: f32) -> f32 {
    if intensity.is_nan() {
        DEFAULT_HIGHLIGHT_INTENSITY
    } else {
        intensity.clamp(0.0, 1.0)
    }
}

impl FromStr for HapticsMode {
    type Err = HapticsModeParseError;

    /// Accepts `none`, `selection`, `highlight` or `highlight:<intensity>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || HapticsModeParseError {
            input: s.to_string(),
        };

        let input = s.trim().to_lowercase();
        let (name, arg) = match input.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (input.as_str(), None),
        };

        match (name, arg) {
            ("none", None) => Ok(Self::None),
            ("selection", None) => Ok(Self::Selection),
            ("highlight", None) => Ok(Self::Highlight(DEFAULT_HIGHLIGHT_INTENSITY)),
            ("highlight", Some(arg)) => {
                let intensity: f32 = arg.trim().parse().map_err(|_| err())?;
                if !(0.0..=1.0).contains(&intensity) {
                    return Err(err());
                }
                Ok(Self::Highlight(intensity))
            }
            _ => Err(err()),
        }
    }
}

impl fmt::Display for HapticsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Highlight(i) => write!(f, "highlight:{}", i),
            other => write!(f, "{}", other.name()),
        }
    }
}
