use std::time::Duration;

use iced::widget::{column, container, row, text, text_input};
use iced::{Alignment, Element, Length, Task};

use popcorn_api::OmdbClient;
use popcorn_core::fetch::{self, SearchOutcome};
use popcorn_core::search::{SearchState, SearchTicket};
use popcorn_core::selection::Selection;
use popcorn_core::view::View;

use crate::app;
use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

// ── State ─────────────────────────────────────────────────────────

/// Search bar plus the results list.
pub struct Search {
    state: SearchState,
    debounce: Duration,
    /// Abort handle of the running (possibly still debouncing) fetch.
    in_flight: Option<iced::task::Handle>,
}

// ── Messages ──────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    ResultsLoaded(SearchOutcome),
    MovieClicked(String),
}

// ── Implementation ────────────────────────────────────────────────

impl Search {
    pub fn new(min_query_length: usize, debounce: Duration) -> Self {
        Self {
            state: SearchState::new(min_query_length),
            debounce,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Search for `query` right away, skipping the debounce window.
    pub fn search_now(&mut self, query: String, client: &OmdbClient) -> Action {
        self.abort_in_flight();
        match self.state.set_query(query) {
            Some(ticket) => self.spawn(ticket, Duration::ZERO, client),
            None => Action::None,
        }
    }

    /// Re-run the current query.
    pub fn refresh(&mut self, client: &OmdbClient) -> Action {
        self.abort_in_flight();
        match self.state.retry() {
            Some(ticket) => self.spawn(ticket, Duration::ZERO, client),
            None => Action::None,
        }
    }

    pub fn update(&mut self, msg: Message, client: &OmdbClient) -> Action {
        match msg {
            Message::QueryChanged(query) => {
                self.abort_in_flight();
                match self.state.set_query(query) {
                    Some(ticket) => self.spawn(ticket, self.debounce, client),
                    None => Action::None,
                }
            }
            Message::ResultsLoaded(outcome) => {
                if !self.state.settle(outcome) {
                    return Action::None;
                }
                self.in_flight = None;
                let posters = self
                    .state
                    .results()
                    .iter()
                    .map(|m| (m.imdb_id.clone(), m.poster_url.clone()))
                    .collect();
                Action::RequestPosters(posters)
            }
            Message::MovieClicked(imdb_id) => Action::ToggleSelection(imdb_id),
        }
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    fn spawn(&mut self, ticket: SearchTicket, debounce: Duration, client: &OmdbClient) -> Action {
        tracing::debug!(
            query = ticket.query(),
            generation = ticket.generation(),
            "search scheduled"
        );
        let client = client.clone();
        let (task, handle) = Task::perform(
            async move { fetch::run_search(&client, ticket, debounce).await },
            |outcome| app::Message::Search(Message::ResultsLoaded(outcome)),
        )
        .abortable();
        self.in_flight = Some(handle);
        Action::RunTask(task)
    }

    // ── Views ─────────────────────────────────────────────────────

    /// The pill-shaped search input shown in the top bar.
    pub fn search_bar<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let input = text_input("Search movies...", self.state.query())
            .on_input(Message::QueryChanged)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_XS, style::SPACE_SM])
            .style(theme::text_input_borderless(cs));

        container(
            row![
                lucide_icons::iced::icon_search()
                    .size(style::TEXT_BASE)
                    .color(cs.on_primary_container),
                input,
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center),
        )
        .padding([style::SPACE_XXS, style::SPACE_MD])
        .width(Length::Fixed(style::SEARCH_BAR_WIDTH))
        .style(theme::search_bar(cs))
        .into()
    }

    /// "Found N results", shown next to the search bar.
    pub fn results_count<'a>(&self, cs: &ColorScheme) -> Element<'a, Message> {
        text(format!("Found {} results", self.state.results().len()))
            .size(style::TEXT_SM)
            .color(cs.on_primary)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .into()
    }

    /// The results pane: loading, error, or the list itself.
    pub fn view<'a>(
        &'a self,
        cs: &ColorScheme,
        selection: &Selection,
        posters: &'a PosterCache,
    ) -> Element<'a, Message> {
        match View::list_pane(&self.state) {
            View::Loading => widgets::empty_state(
                cs,
                lucide_icons::iced::icon_clock()
                    .size(style::TEXT_3XL)
                    .color(cs.outline)
                    .into(),
                "Loading...",
                None,
            ),
            View::Error(err) => widgets::empty_state(
                cs,
                lucide_icons::iced::icon_circle_x()
                    .size(style::TEXT_3XL)
                    .color(cs.error)
                    .into(),
                err.to_string(),
                None,
            ),
            View::Results if self.state.results().is_empty() => widgets::empty_state(
                cs,
                lucide_icons::iced::icon_search()
                    .size(style::TEXT_3XL)
                    .color(cs.outline)
                    .into(),
                "Search for a movie",
                Some("Type at least a few characters to start."),
            ),
            View::Results | View::Detail(_) => {
                let items = self.state.results().iter().map(|movie| {
                    widgets::movie_item(
                        cs,
                        movie,
                        selection.is_selected(&movie.imdb_id),
                        posters,
                        Message::MovieClicked(movie.imdb_id.clone()),
                    )
                });
                widgets::styled_scrollable(
                    column(items)
                        .spacing(style::SPACE_XXS)
                        .padding([style::SPACE_SM, 0.0]),
                    cs,
                )
                .height(Length::Fill)
                .into()
            }
        }
    }
}
