use std::time::{Duration, Instant};

use log::{debug, info};

use crate::consts::TIMESTEP;
use crate::error::{DemoError, RenderError};
use crate::field::AsteroidField;
use crate::render::SpriteRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to close the window.
    Quit,
    Other,
}

/// The window side of the loop: where input comes from and where frames go.
pub trait Display {
    /// Everything that has happened since the last poll.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Puts the frame that was just rendered on screen.
    fn present(&mut self) -> Result<(), RenderError>;

    fn show_fps(&mut self, _fps: u32) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Tracks when frames start. The elapsed time it reports lags by a frame:
/// at the top of frame N it measures from the start of N-2 to the start of
/// N-1.
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    previous: Instant,
    latest: Instant,
}

impl FrameTimer {
    pub fn start(now: Instant) -> Self {
        FrameTimer {
            previous: now,
            latest: now,
        }
    }

    /// Call once at the top of every frame.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let elapsed = self.latest - self.previous;
        self.previous = self.latest;
        self.latest = now;
        elapsed
    }
}

/// Whole frames per second, or nothing if no time has passed.
pub fn fps_estimate(elapsed: Duration) -> Option<u32> {
    if elapsed.is_zero() {
        None
    } else {
        Some((1.0 / elapsed.as_secs_f64()) as u32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames that made it all the way through step, sync, and render.
    pub frames: u64,
    pub last_fps: Option<u32>,
}

/// Drives the simulation: poll, step, sync, draw, present, repeat.
pub struct FrameLoop<D, R> {
    display: D,
    renderer: R,
    field: AsteroidField,
    timestep: f32,
    state: LoopState,
    timer: FrameTimer,
    frames: u64,
    last_fps: Option<u32>,
}

impl<D: Display, R: SpriteRenderer> FrameLoop<D, R> {
    pub fn new(display: D, renderer: R, field: AsteroidField) -> Self {
        FrameLoop {
            display,
            renderer,
            field,
            timestep: TIMESTEP,
            state: LoopState::Running,
            timer: FrameTimer::start(Instant::now()),
            frames: 0,
            last_fps: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn field(&self) -> &AsteroidField {
        &self.field
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            last_fps: self.last_fps,
        }
    }

    /// Runs a single iteration. A quit event stops the loop before anything
    /// else in the iteration happens.
    pub fn run_frame(&mut self) -> Result<LoopState, RenderError> {
        if self.state == LoopState::Stopped {
            return Ok(LoopState::Stopped);
        }

        let elapsed = self.timer.tick(Instant::now());

        let events = self.display.poll_events();
        if events.contains(&InputEvent::Quit) {
            info!("quit requested after {} frames", self.frames);
            self.state = LoopState::Stopped;
            return Ok(self.state);
        }

        // Always the same step, no matter how long the frame took.
        self.field.advance(self.timestep);
        self.field.sync_sprites();

        self.renderer.clear();
        self.renderer.render_many(self.field.sprites())?;
        self.renderer.flush()?;
        self.display.present()?;
        self.frames += 1;

        if let Some(fps) = fps_estimate(elapsed) {
            debug!("FPS: {}", fps);
            self.last_fps = Some(fps);
            self.display.show_fps(fps);
        }

        Ok(self.state)
    }

    /// Loops until the display reports a quit or something fails to draw.
    pub fn run(&mut self) -> Result<RunSummary, DemoError> {
        while self.run_frame()? == LoopState::Running {}
        Ok(self.summary())
    }
}
