// Domain layer - automaton state and pattern data
pub mod domain;

// Application layer - playback scheduling and action coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{Controller, Playback, Scheduler, SurfaceGeometry};
pub use domain::{Cell, Pattern, PatternCatalog, Universe};
pub use ui::{Button, Dropdown, Slider};
