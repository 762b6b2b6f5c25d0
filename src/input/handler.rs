//! Input event handler for polling and processing keyboard events.

use super::keys::{map_key_event, Keybinds, PickerEvent};
use crate::editor::mode::PickerMode;
use crate::editor::picker::Picker;
use crate::editor::session::Session;
use crate::error::MarkError;
use crate::host::{OpenFileLocator, Workspace};
use anyhow::{Context, Result};
use std::fs::File;
use std::time::Duration;
use termion::event::Event;
use termion::input::{Events, TermRead};

/// Reads terminal events from `/dev/tty` and applies them to a picker.
///
/// Input always comes from the terminal device so stdin and stdout stay
/// free for the calling editor.
pub struct InputHandler {
    /// Event source iterator (maintains position in input buffer)
    events: Events<File>,
    keybinds: Keybinds,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from /dev/tty.
    pub fn new_with_tty(keybinds: Keybinds) -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: tty_file.events(),
            keybinds,
        })
    }

    pub fn keybinds(&self) -> &Keybinds {
        &self.keybinds
    }

    /// Polls for a terminal event.
    ///
    /// Returns Some(Event) if an event occurred, None if input ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the event system fails
    pub fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        match self.events.next() {
            Some(event_result) => Ok(Some(event_result?)),
            None => Ok(None),
        }
    }

    /// Handles a terminal event.
    ///
    /// Returns true once the picker has closed.
    pub fn handle_event(
        &self,
        event: Event,
        picker: &mut Picker,
        session: &mut Session,
        workspace: &mut dyn Workspace,
        locator: &dyn OpenFileLocator,
    ) -> bool {
        let registers = session.config().registers(picker.scope());
        let picker_event = map_key_event(event, &self.keybinds, &registers);
        handle_picker_event(picker_event, picker, session, workspace, locator)
    }
}

/// Applies one picker event. Failures become notices on the session;
/// nothing here aborts.
///
/// Returns true once the picker has closed.
pub fn handle_picker_event(
    event: PickerEvent,
    picker: &mut Picker,
    session: &mut Session,
    workspace: &mut dyn Workspace,
    locator: &dyn OpenFileLocator,
) -> bool {
    match event {
        PickerEvent::MoveUp => picker.move_selection(-1),
        PickerEvent::MoveDown => picker.move_selection(1),
        PickerEvent::Cancel => picker.close(),
        PickerEvent::Delete => {
            if let Some(selected) = picker.selected().cloned() {
                if let Err(e) = session.delete_mark(&selected.symbol) {
                    session.report(&e);
                }
                picker.refresh(session);
            }
        }
        PickerEvent::Undo => {
            if let Err(e) = session.restore_last_changed() {
                session.report(&e);
            }
            picker.refresh(session);
        }
        PickerEvent::Select => {
            if let Some(selected) = picker.selected().cloned() {
                choose(&selected.symbol, picker, session, workspace, locator);
            }
        }
        PickerEvent::Register(symbol) => {
            // goto and delete only act on registers that carry a mark
            if picker.mode() == PickerMode::Set || session.mark(&symbol).is_some() {
                choose(&symbol, picker, session, workspace, locator);
            }
        }
        PickerEvent::Unknown => {}
    }
    picker.is_closed()
}

fn choose(
    symbol: &str,
    picker: &mut Picker,
    session: &mut Session,
    workspace: &mut dyn Workspace,
    locator: &dyn OpenFileLocator,
) {
    let result = match picker.mode() {
        PickerMode::Set => session.set_mark(symbol, workspace),
        PickerMode::Goto => session.goto_mark(symbol, workspace, locator).map(|_| ()),
        PickerMode::Delete => session.delete_mark(symbol).map(|_| ()),
    };

    match result {
        // Nothing was bound; the list stays open.
        Err(MarkError::NoActiveDocument) => session.report(&MarkError::NoActiveDocument),
        Err(e) => {
            session.report(&e);
            picker.close();
        }
        Ok(()) => picker.close(),
    }
}
