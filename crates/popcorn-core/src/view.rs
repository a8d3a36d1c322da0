//! Derives what to render from search, selection and detail state.

use crate::detail::DetailState;
use crate::fetch::FetchError;
use crate::search::SearchState;
use crate::selection::Selection;

/// Window title when no movie is open.
pub const DEFAULT_TITLE: &str = "Popcorn";

/// The single view the app is in.
///
/// An active selection wins over everything else; without one, an
/// in-flight fetch shows as loading, a failed one as its error, and
/// otherwise the (possibly empty) results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    Loading,
    Error(&'a FetchError),
    Results,
    Detail(&'a str),
}

impl<'a> View<'a> {
    pub fn compose(search: &'a SearchState, selection: &'a Selection) -> Self {
        match selection.current() {
            Some(id) => View::Detail(id),
            None => Self::list_pane(search),
        }
    }

    /// State of the results pane alone, ignoring selection. Never `Detail`.
    pub fn list_pane(search: &'a SearchState) -> Self {
        if search.is_loading() {
            View::Loading
        } else if let Some(err) = search.error() {
            View::Error(err)
        } else {
            View::Results
        }
    }
}

/// `"Movie | <title>"` while a movie is open, the app name otherwise.
pub fn window_title(detail: &DetailState) -> String {
    match detail.movie() {
        Some(movie) if !movie.title.is_empty() => format!("Movie | {}", movie.title),
        _ => DEFAULT_TITLE.to_string(),
    }
}
