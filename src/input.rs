// input.rs - Keyboard events for the simulation loop

use egui::Key;

/// A state transition requested by the user. Window close is not represented
/// here; the windowing layer terminates the process directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// `s`: toggle Running <-> Paused.
    TogglePause,
    /// `r`: randomize the active buffer, keeping pause state.
    Reseed,
    /// `q`: end the simulation loop.
    Quit,
}

/// Translates this frame's key presses into control events. Keys other than
/// `s`, `r`, and `q` are ignored.
pub fn poll(ctx: &egui::Context) -> Vec<ControlEvent> {
    ctx.input(|input| {
        let mut events = Vec::new();
        if input.key_pressed(Key::S) {
            events.push(ControlEvent::TogglePause);
        }
        if input.key_pressed(Key::R) {
            events.push(ControlEvent::Reseed);
        }
        if input.key_pressed(Key::Q) {
            events.push(ControlEvent::Quit);
        }
        events
    })
}
