pub mod button_config;

pub use button_config::ButtonConfig;
