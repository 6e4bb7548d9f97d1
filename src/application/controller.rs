use log::{debug, warn};

use super::Scheduler;
use crate::domain::{PatternCatalog, Universe};

/// How the rendered grid surface maps to display pixels. The logical
/// surface is `pitch * dim + 1` pixels per axis; the window may show it
/// scaled, so pointer positions are mapped back through the
/// buffer/display ratio before cell addressing.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceGeometry {
    pub display_width: f32,
    pub display_height: f32,
    pub buffer_width: f32,
    pub buffer_height: f32,
    pub cell_pitch: f32,
}

/// Controller maps discrete user actions onto engine mutations and
/// scheduler transitions. It owns the engine slot: the scheduler reaches
/// the universe only through this field, per poll, so a randomize swap
/// is always visible to the next cycle.
pub struct Controller {
    engine: Universe,
    scheduler: Scheduler,
    catalog: PatternCatalog,
    generation: u64,
}

impl Controller {
    pub fn new(engine: Universe, catalog: PatternCatalog, now: f64) -> Self {
        Self {
            engine,
            scheduler: Scheduler::new(now),
            catalog,
            generation: 0,
        }
    }

    pub fn engine(&self) -> &Universe {
        &self.engine
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Label for the play/pause affordance. Derived from scheduler state
    /// on every read, so it cannot drift.
    pub fn playback_label(&self) -> &'static str {
        if self.scheduler.is_playing() {
            "Pause"
        } else {
            "Play"
        }
    }

    /// Run the scheduler for this frame, ticking the current engine
    /// instance when a cycle is due. Returns whether a tick fired.
    pub fn frame(&mut self, now: f64) -> bool {
        let ticked = self.scheduler.poll(now, &mut self.engine);
        if ticked {
            self.generation += 1;
        }
        ticked
    }

    pub fn toggle_playback(&mut self, now: f64) {
        self.scheduler.toggle(now);
        debug!("playback is now {:?}", self.scheduler.playback());
    }

    /// Restore the engine's fixed known configuration. Playback state is
    /// untouched.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.generation = 0;
        debug!("universe reset");
    }

    /// Replace the engine with a fresh random instance of the same
    /// dimensions. Playback state is untouched; a pending cycle will
    /// tick the replacement.
    pub fn randomize(&mut self) {
        let (width, height) = (self.engine.width(), self.engine.height());
        self.engine = Universe::randomized(width, height);
        self.generation = 0;
        debug!("universe randomized at {width}x{height}");
    }

    /// Validated target-rate entry point. Non-finite values are a caller
    /// bug and are dropped; non-positive values pass through and the
    /// scheduler clamps them to its minimum rate.
    pub fn set_target_rate(&mut self, rate: f32) {
        if !rate.is_finite() {
            warn!("ignoring non-finite target rate {rate}");
            return;
        }
        self.scheduler.set_target_rate(rate);
    }

    /// Toggle the cell under a pointer position given in display pixels
    /// relative to the surface origin. Coordinates are scaled into
    /// buffer space, divided by the cell pitch, floored, and clamped.
    pub fn toggle_cell(&mut self, pointer: (f32, f32), geometry: SurfaceGeometry) {
        let scale_x = geometry.buffer_width / geometry.display_width;
        let scale_y = geometry.buffer_height / geometry.display_height;
        let buffer_x = pointer.0 * scale_x;
        let buffer_y = pointer.1 * scale_y;

        // `as usize` saturates negatives to zero, clamping the low side
        let row = ((buffer_y / geometry.cell_pitch).floor() as usize)
            .min(self.engine.height() - 1);
        let col = ((buffer_x / geometry.cell_pitch).floor() as usize)
            .min(self.engine.width() - 1);

        self.engine.toggle_cell(row, col);
        debug!("toggled cell ({row}, {col})");
    }

    /// Seed the named pattern: exactly its cells alive, all others dead,
    /// and playback forced to Paused for inspection. An unknown name is
    /// a logged no-op.
    pub fn select_pattern(&mut self, name: &str) {
        let Some(pattern) = self.catalog.get(name) else {
            warn!("unknown pattern {name:?}, ignoring");
            return;
        };

        // Seeds outside the grid are dropped here rather than relying on
        // the flat-index length check: a col >= width would otherwise
        // alias into the next row.
        let (width, height) = (self.engine.width(), self.engine.height());
        let indices: Vec<usize> = pattern
            .cells
            .iter()
            .filter(|&&(row, col)| row < height && col < width)
            .map(|&(row, col)| row * width + col)
            .collect();

        self.engine.set_pattern(&indices);
        self.scheduler.pause();
        self.generation = 0;
        debug!("seeded pattern {name:?} ({} cells)", indices.len());
    }
}
