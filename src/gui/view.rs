use std::rc::Rc;

use kiss3d::text::Font;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3};

use super::controller;
use crate::error::RenderError;
use crate::frame_loop::{Display, InputEvent};

/// The kiss3d window, as the frame loop sees it. Dropping this closes the
/// window.
pub struct View {
    window: Window,
    closed: bool,
    fps_text: Option<String>,
    font: Rc<Font>,
}

impl View {
    pub fn new(window: Window) -> Self {
        View {
            window,
            closed: false,
            fps_text: None,
            font: Font::default(),
        }
    }
}

impl Display for View {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = self.window.events();
        let mut polled: Vec<InputEvent> = events
            .iter()
            .map(|event| controller::translate(&event.value))
            .collect();

        // kiss3d also closes the window on its own (e.g. Escape), in which
        // case the only sign is that the last render said so.
        if self.closed {
            polled.push(InputEvent::Quit);
        }
        polled
    }

    fn present(&mut self) -> Result<(), RenderError> {
        if let Some(text) = &self.fps_text {
            let text_color = Point3::new(1.0, 1.0, 1.0);
            self.window
                .draw_text(text, &Point2::origin(), 40.0, &self.font, &text_color);
        }

        if !self.window.render() {
            self.closed = true;
        }
        Ok(())
    }

    fn show_fps(&mut self, fps: u32) {
        self.fps_text = Some(format!("FPS: {}", fps));
    }
}
