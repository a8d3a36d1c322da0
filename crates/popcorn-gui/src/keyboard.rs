//! Global keyboard shortcuts.
//!
//! Maps key presses to semantic `Shortcut` variants that the app router
//! dispatches.

use iced::keyboard;
use iced::Subscription;

use crate::app::Message;

/// Application-level keyboard shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape: close the detail pane.
    CloseDetail,
    /// F5 or Ctrl+R: re-run the current search.
    Refresh,
}

/// Subscription that converts keyboard events to `Message::Shortcut`.
pub fn keyboard_subscription() -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _id| match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            map_shortcut(key, modifiers).map(Message::Shortcut)
        }
        _ => None,
    })
}

fn map_shortcut(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Shortcut> {
    use keyboard::key::Named;
    use keyboard::Key;

    match key {
        Key::Named(Named::Escape) => Some(Shortcut::CloseDetail),
        Key::Named(Named::F5) => Some(Shortcut::Refresh),
        Key::Character(ref c) if modifiers.control() && c.as_str() == "r" => {
            Some(Shortcut::Refresh)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyboard::key::Named;
    use keyboard::{Key, Modifiers};

    #[test]
    fn test_map_shortcut() {
        assert_eq!(
            map_shortcut(Key::Named(Named::Escape), Modifiers::empty()),
            Some(Shortcut::CloseDetail)
        );
        assert_eq!(
            map_shortcut(Key::Character("r".into()), Modifiers::CTRL),
            Some(Shortcut::Refresh)
        );
        assert_eq!(map_shortcut(Key::Character("r".into()), Modifiers::empty()), None);
    }
}
