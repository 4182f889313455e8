//! record-button - Animated record button control
//!
//! This crate provides a record-style toggle button: a circular outer ring
//! around an inner shape that morphs between a circle (idle) and a rounded
//! square (selected), with press feedback and optional haptic-style pulses.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Geometry, style value objects, the interaction state machine, and errors
//! - **Application**: The button controller, animation timeline, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (tiny-skia renderer, rodio feedback, XDG config)
//! - **CLI**: Command-line interface for rendering frames and managing configuration

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod logging;
