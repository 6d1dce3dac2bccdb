use crate::error::RenderError;
use crate::frame_loop::{Display, InputEvent};

/// A display with no window. It asks to quit once `frame_budget` frames have
/// gone by, and otherwise reports nothing.
pub struct HeadlessDisplay {
    frame_budget: u64,
    polls: u64,
    presented: u64,
}

impl HeadlessDisplay {
    pub fn new(frame_budget: u64) -> Self {
        HeadlessDisplay {
            frame_budget,
            polls: 0,
            presented: 0,
        }
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Display for HeadlessDisplay {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.polls += 1;
        if self.polls > self.frame_budget {
            vec![InputEvent::Quit]
        } else {
            vec![]
        }
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.presented += 1;
        Ok(())
    }
}
