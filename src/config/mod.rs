pub mod defaults;
pub mod settings;

pub use defaults::*;
pub use settings::{RenderSettings, Settings};
