pub mod catalog;
pub mod config;
pub mod effects;
pub mod error;
pub mod globe;
pub mod nav;
pub mod stats;
pub mod viewport;

pub use config::{AppConfig, EasingType, ReachFigure, ScrollConfig};
pub use error::{Error, Result};
pub use viewport::{Region, ViewportActivation, VisibilitySource};
