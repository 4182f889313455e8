pub mod state;

pub use state::{ButtonState, InteractionState, ReleaseLocation, Transition};
