use kiss3d::event::{Action, Key, WindowEvent};

use crate::frame_loop::InputEvent;

// Key config, all in one place
const KEY_QUIT: Key = Key::Q;

/// Turns raw window events into the handful the frame loop cares about.
pub fn translate(event: &WindowEvent) -> InputEvent {
    match *event {
        WindowEvent::Close => InputEvent::Quit,
        WindowEvent::Key(KEY_QUIT, Action::Press, _) => InputEvent::Quit,
        _ => InputEvent::Other,
    }
}
