//! Keyboard handling shared by the four demos.

use winit::event::{ElementState, KeyEvent};
use winit::event_loop::EventLoopWindowTarget;
use winit::keyboard::{Key, NamedKey};

/// Runtime controls toggled from the keyboard.
#[derive(Default)]
pub struct Controls {
    pub paused: bool,
    /// Set by the single-step key; the loop consumes it on the next tick.
    pub step_once: bool,
}

/// `q`/Escape quits, space pauses, `s` advances one generation while paused.
pub fn handle_key(controls: &mut Controls, event: &KeyEvent, window_target: &EventLoopWindowTarget<()>) {
    if event.state != ElementState::Pressed {
        return;
    }
    match &event.logical_key {
        Key::Named(NamedKey::Escape) => window_target.exit(),
        Key::Character(c) if c.as_str() == "q" => window_target.exit(),
        Key::Named(NamedKey::Space) => {
            controls.paused = !controls.paused;
            log::info!("{}", if controls.paused { "paused" } else { "running" });
        }
        Key::Character(c) if c.as_str() == "s" => {
            controls.step_once = true;
        }
        _ => {}
    }
}
