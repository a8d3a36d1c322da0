pub mod details;
pub mod search;
pub mod watched;

use iced::Task;

use popcorn_core::models::WatchedEntry;

use crate::app;
use crate::toast::ToastKind;

/// Actions that a screen can request from the app router.
///
/// Screens return these from `update()` instead of touching shared state
/// (selection, watched list, posters); the app interprets them in one place.
pub enum Action {
    /// No side-effect.
    None,
    /// Run an async Iced task that eventually produces an app::Message.
    RunTask(Task<app::Message>),
    /// Show a toast notification.
    ShowToast(String, ToastKind),
    /// Select a movie, or deselect it if it is already open.
    ToggleSelection(String),
    /// Close the detail pane.
    CloseDetail,
    /// Append a rated movie to the watched list.
    AddWatched(WatchedEntry),
    /// Download posters for these `(imdb_id, poster_url)` pairs.
    RequestPosters(Vec<(String, Option<String>)>),
}
