use std::time::Duration;

use iced::Subscription;
use popcorn_core::config::ThemeMode;

use crate::app::Message;
use crate::keyboard;

/// How often the OS appearance is re-checked in `System` mode.
const APPEARANCE_POLL: Duration = Duration::from_secs(5);

/// All app-level subscriptions.
pub fn subscriptions(mode: ThemeMode) -> Subscription<Message> {
    let mut subs = vec![keyboard::keyboard_subscription()];
    if mode == ThemeMode::System {
        subs.push(iced::time::every(APPEARANCE_POLL).map(|_| Message::AppearanceTick));
    }
    Subscription::batch(subs)
}
