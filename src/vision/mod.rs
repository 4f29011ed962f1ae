//! Vision document loading and directory alignment scoring.

mod assess;
mod config;
mod text;

pub use assess::{Assessment, assess};
pub use config::{VisionConfig, VisionTargets};
