mod controller;
mod scheduler;

pub use controller::{Controller, SurfaceGeometry};
pub use scheduler::{DEFAULT_RATE, Playback, Scheduler};
