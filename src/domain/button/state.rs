//! Button interaction state machine

use std::fmt;

/// Snapshot of the button's state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ButtonState {
    /// Persistent on/off flag (recording in progress)
    pub is_selected: bool,
    /// True only while a touch that began inside the bounds is held
    pub is_pressed: bool,
}

impl ButtonState {
    pub const fn idle(selected: bool) -> Self {
        Self {
            is_selected: selected,
            is_pressed: false,
        }
    }

    pub const fn pressed(selected: bool) -> Self {
        Self {
            is_selected: selected,
            is_pressed: true,
        }
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = if self.is_pressed { "pressed" } else { "idle" };
        write!(f, "{}(selected={})", phase, self.is_selected)
    }
}

/// Where a touch ended relative to the control bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseLocation {
    Inside,
    Outside,
}

impl ReleaseLocation {
    pub const fn from_inside(inside: bool) -> Self {
        if inside {
            Self::Inside
        } else {
            Self::Outside
        }
    }
}

/// A state change the controller must render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ButtonState,
    pub to: ButtonState,
}

impl Transition {
    pub fn entered_press(&self) -> bool {
        !self.from.is_pressed && self.to.is_pressed
    }

    pub fn left_press(&self) -> bool {
        self.from.is_pressed && !self.to.is_pressed
    }

    pub fn selection_changed(&self) -> bool {
        self.from.is_selected != self.to.is_selected
    }
}

/// Interaction state machine.
///
/// ```text
///   Idle(s)    -- press inside    --> Pressed(s)
///   Pressed(s) -- release inside  --> Idle(!s)
///   Pressed(s) -- release outside --> Idle(s)
///   Pressed(s) -- cancel          --> Idle(s)
/// ```
///
/// Events that do not apply in the current state return `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionState {
    state: ButtonState,
}

impl InteractionState {
    pub fn new(selected: bool) -> Self {
        Self {
            state: ButtonState::idle(selected),
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn is_selected(&self) -> bool {
        self.state.is_selected
    }

    pub fn is_pressed(&self) -> bool {
        self.state.is_pressed
    }

    /// Touch down. Ignored outside the bounds or while already pressed.
    pub fn press(&mut self, inside: bool) -> Option<Transition> {
        if !inside || self.state.is_pressed {
            return None;
        }
        self.apply(ButtonState::pressed(self.state.is_selected))
    }

    /// Touch up. Toggles the selection only when released inside.
    pub fn release(&mut self, location: ReleaseLocation) -> Option<Transition> {
        if !self.state.is_pressed {
            return None;
        }
        let selected = match location {
            ReleaseLocation::Inside => !self.state.is_selected,
            ReleaseLocation::Outside => self.state.is_selected,
        };
        self.apply(ButtonState::idle(selected))
    }

    /// Touch cancelled by the system; same as releasing outside
    pub fn cancel(&mut self) -> Option<Transition> {
        self.release(ReleaseLocation::Outside)
    }

    /// Programmatic selection write. Writing the current value is a no-op.
    pub fn set_selected(&mut self, selected: bool) -> Option<Transition> {
        if self.state.is_selected == selected {
            return None;
        }
        self.apply(ButtonState {
            is_selected: selected,
            is_pressed: self.state.is_pressed,
        })
    }

    fn apply(&mut self, to: ButtonState) -> Option<Transition> {
        let transition = Transition {
            from: self.state,
            to,
        };
        self.state = to;
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle() {
        let machine = InteractionState::new(false);
        assert!(!machine.is_pressed());
        assert!(!machine.is_selected());

        let machine = InteractionState::new(true);
        assert!(machine.is_selected());
    }

    #[test]
    fn press_inside_enters_pressed() {
        let mut machine = InteractionState::new(false);
        let t = machine.press(true).unwrap();
        assert!(t.entered_press());
        assert!(!t.selection_changed());
        assert!(machine.is_pressed());
    }

    #[test]
    fn press_outside_is_ignored() {
        let mut machine = InteractionState::new(false);
        assert!(machine.press(false).is_none());
        assert!(!machine.is_pressed());
    }

    #[test]
    fn second_press_is_ignored() {
        let mut machine = InteractionState::new(false);
        machine.press(true).unwrap();
        assert!(machine.press(true).is_none());
        assert!(machine.is_pressed());
    }

    #[test]
    fn release_inside_toggles() {
        let mut machine = InteractionState::new(false);
        machine.press(true).unwrap();

        let t = machine.release(ReleaseLocation::Inside).unwrap();
        assert!(t.left_press());
        assert!(t.selection_changed());
        assert_eq!(t.to, ButtonState::idle(true));
        assert!(machine.is_selected());
    }

    #[test]
    fn release_outside_keeps_selection() {
        let mut machine = InteractionState::new(true);
        machine.press(true).unwrap();

        let t = machine.release(ReleaseLocation::Outside).unwrap();
        assert!(t.left_press());
        assert!(!t.selection_changed());
        assert!(machine.is_selected());
        assert!(!machine.is_pressed());
    }

    #[test]
    fn cancel_behaves_like_release_outside() {
        let mut machine = InteractionState::new(false);
        machine.press(true).unwrap();

        let t = machine.cancel().unwrap();
        assert!(!t.selection_changed());
        assert_eq!(machine.state(), ButtonState::idle(false));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut machine = InteractionState::new(false);
        assert!(machine.release(ReleaseLocation::Inside).is_none());
        assert!(machine.cancel().is_none());
        assert!(!machine.is_selected());
    }

    #[test]
    fn set_selected_same_value_is_noop() {
        let mut machine = InteractionState::new(true);
        assert!(machine.set_selected(true).is_none());
        assert!(machine.is_selected());
    }

    #[test]
    fn set_selected_while_pressed_keeps_press() {
        let mut machine = InteractionState::new(false);
        machine.press(true).unwrap();

        let t = machine.set_selected(true).unwrap();
        assert!(t.selection_changed());
        assert!(!t.entered_press());
        assert!(!t.left_press());
        assert_eq!(machine.state(), ButtonState::pressed(true));
    }

    #[test]
    fn full_cycle() {
        let mut machine = InteractionState::new(false);

        machine.press(true).unwrap();
        machine.release(ReleaseLocation::Inside).unwrap();
        assert!(machine.is_selected());

        machine.press(true).unwrap();
        machine.release(ReleaseLocation::Inside).unwrap();
        assert!(!machine.is_selected());
    }

    #[test]
    fn state_display() {
        assert_eq!(ButtonState::idle(true).to_string(), "idle(selected=true)");
        assert_eq!(
            ButtonState::pressed(false).to_string(),
            "pressed(selected=false)"
        );
    }
}
