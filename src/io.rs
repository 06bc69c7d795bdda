use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::events::Event;

/// Converts a crossterm event into a simulation event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        // some terminals also report releases and repeats
        CrossTermEvent::Key(KeyEvent { kind, .. }) if kind != KeyEventKind::Press => None,

        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::Exit),
            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => Some(Event::StepAndCapture),
            _ => None,
        },

        CrossTermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..
        }) => Some(Event::TogglePause),

        event => {
            tracing::trace!(?event, "ignored");
            None
        }
    }
}
