use crate::input::events::{Action, InputEvent};
use log::warn;

use super::DrawingController;

impl DrawingController {
    /// Dispatches one input event to the matching controller operation.
    ///
    /// Export requests cannot be fulfilled here (the controller does not know
    /// where images go), so they are handed back as [`Action::Export`].
    pub fn apply(&mut self, event: &InputEvent) -> Option<Action> {
        match event {
            InputEvent::PointerDown { x, y } => self.begin_stroke(*x, *y),
            InputEvent::PointerMove { x, y } => self.continue_stroke(*x, *y),
            InputEvent::PointerUp => self.end_stroke(),
            InputEvent::SelectTool { tool } => self.set_tool(*tool),
            InputEvent::SetStyle { .. } => match event.style_update() {
                Ok(Some(update)) => self.set_style(&update),
                Ok(None) => {}
                Err(err) => warn!("Ignoring style change: {err}"),
            },
            InputEvent::Clear => self.clear(),
            InputEvent::Export => return Some(Action::Export),
        }
        None
    }

    /// Dispatches a sequence of events, collecting the actions they produce.
    pub fn apply_all<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a InputEvent>,
    ) -> Vec<Action> {
        events
            .into_iter()
            .filter_map(|event| self.apply(event))
            .collect()
    }
}
