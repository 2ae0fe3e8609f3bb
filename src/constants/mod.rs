//! Camera and map constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! These are the defaults; everything tunable is also exposed through
//! the JSON configuration.

mod camera;
mod hex;
mod input;
mod time;
mod ui;

pub use camera::*;
pub use hex::*;
pub use input::*;
pub use time::*;
pub use ui::*;
