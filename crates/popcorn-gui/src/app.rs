use iced::widget::{column, container, row, stack, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use popcorn_api::OmdbClient;
use popcorn_core::config::{AppConfig, ThemeMode};
use popcorn_core::selection::{Selection, SelectionChange};
use popcorn_core::view::{self, View};

use crate::keyboard::Shortcut;
use crate::poster_cache::PosterCache;
use crate::screen::{details, search, watched, Action};
use crate::style;
use crate::subscription;
use crate::theme::{self, ColorScheme, PopcornTheme};
use crate::toast::{self, ToastKind, Toasts};

/// Application state: a slim router that delegates to screens.
pub struct Popcorn {
    config: AppConfig,
    client: OmdbClient,
    // Theme
    current_theme: PopcornTheme,
    active_mode: ThemeMode,
    // Screens
    search: search::Search,
    details: details::Details,
    watched: watched::Watched,
    // Shared between screens
    selection: Selection,
    posters: PosterCache,
    toasts: Toasts,
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    Search(search::Message),
    Details(details::Message),
    Watched(watched::Message),
    PosterLoaded {
        imdb_id: String,
        result: Result<Vec<u8>, String>,
    },
    Shortcut(Shortcut),
    DismissToast(u64),
    AppearanceTick,
}

impl Popcorn {
    /// Build the app and kick off the initial search.
    pub fn new(
        config: AppConfig,
        client: OmdbClient,
        initial_query: String,
    ) -> (Self, Task<Message>) {
        let active_mode = theme::resolve_mode(config.appearance.mode);
        let mut app = Self {
            search: search::Search::new(
                config.search.min_query_length,
                config.search.debounce(),
            ),
            details: details::Details::new(config.rating.max_rating),
            watched: watched::Watched::default(),
            config,
            client,
            current_theme: PopcornTheme::embedded(),
            active_mode,
            selection: Selection::default(),
            posters: PosterCache::default(),
            toasts: Toasts::default(),
        };

        tracing::info!(query = %initial_query, "initial search");
        let action = app.search.search_now(initial_query, &app.client);
        let task = app.handle_action(action);
        (app, task)
    }

    pub fn title(&self) -> String {
        view::window_title(self.details.state())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Search(msg) => {
                let action = self.search.update(msg, &self.client);
                self.handle_action(action)
            }
            Message::Details(msg) => {
                let action = self.details.update(msg);
                self.handle_action(action)
            }
            Message::Watched(msg) => {
                let action = self.watched.update(msg);
                self.handle_action(action)
            }
            Message::PosterLoaded { imdb_id, result } => {
                self.posters.finish(imdb_id, result);
                Task::none()
            }
            Message::Shortcut(Shortcut::CloseDetail) => self.handle_action(Action::CloseDetail),
            Message::Shortcut(Shortcut::Refresh) => {
                let action = self.search.refresh(&self.client);
                self.handle_action(action)
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
            Message::AppearanceTick => {
                let mode = theme::resolve_mode(self.config.appearance.mode);
                if mode != self.active_mode {
                    tracing::debug!(?mode, "system appearance changed");
                    self.active_mode = mode;
                }
                Task::none()
            }
        }
    }

    /// Interpret an Action returned by a screen.
    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::RunTask(task) => task,
            Action::ShowToast(message, kind) => self.show_toast(message, kind),
            Action::ToggleSelection(imdb_id) => match self.selection.toggle(&imdb_id) {
                SelectionChange::Selected(imdb_id) => {
                    let action = self.details.open(&imdb_id, &self.client);
                    self.handle_action(action)
                }
                SelectionChange::Cleared => {
                    self.details.close();
                    Task::none()
                }
            },
            Action::CloseDetail => {
                if self.selection.clear() {
                    self.details.close();
                }
                Task::none()
            }
            Action::AddWatched(entry) => {
                let title = entry.title.clone();
                match self.watched.add(entry) {
                    Ok(()) => {
                        self.selection.clear();
                        self.details.close();
                        self.show_toast(format!("Added {title} to your list"), ToastKind::Success)
                    }
                    Err(e) => self.show_toast(e.to_string(), ToastKind::Error),
                }
            }
            Action::RequestPosters(items) => {
                let tasks: Vec<Task<Message>> = items
                    .into_iter()
                    .map(|(id, url)| self.request_poster(id, url))
                    .collect();
                Task::batch(tasks)
            }
        }
    }

    fn show_toast(&mut self, message: String, kind: ToastKind) -> Task<Message> {
        let id = self.toasts.push(message, kind);
        Task::perform(tokio::time::sleep(toast::AUTO_DISMISS), move |_| {
            Message::DismissToast(id)
        })
    }

    /// Request a poster download if it was not already requested.
    fn request_poster(&mut self, imdb_id: String, poster_url: Option<String>) -> Task<Message> {
        if !self.posters.begin(&imdb_id, poster_url.is_some()) {
            return Task::none();
        }
        let Some(url) = poster_url else {
            return Task::none();
        };
        let client = self.client.clone();
        Task::perform(
            async move { client.fetch_poster(&url).await.map_err(|e| e.to_string()) },
            move |result| Message::PosterLoaded { imdb_id, result },
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = self.current_theme.colors(self.active_mode);

        let list_pane = container(
            self.search
                .view(cs, &self.selection, &self.posters)
                .map(Message::Search),
        )
        .style(theme::pane(cs))
        .width(Length::FillPortion(1))
        .max_width(style::PANE_MAX_WIDTH)
        .height(Length::Fill);

        let side: Element<'_, Message> = match View::compose(self.search.state(), &self.selection)
        {
            View::Detail(imdb_id) => self
                .details
                .view(cs, &self.posters, self.watched.list().get(imdb_id))
                .map(Message::Details),
            _ => self
                .watched
                .view(cs, &self.selection, &self.posters)
                .map(Message::Watched),
        };
        let side_pane = container(side)
            .style(theme::pane(cs))
            .width(Length::FillPortion(1))
            .max_width(style::PANE_MAX_WIDTH)
            .height(Length::Fill);

        let main = column![
            self.top_bar(cs),
            row![list_pane, side_pane]
                .spacing(style::SPACE_XL)
                .height(Length::Fill),
        ]
        .spacing(style::SPACE_XL)
        .padding(style::SPACE_XL)
        .align_x(Alignment::Center);

        stack![
            main,
            toast::toast_overlay(cs, self.toasts.items(), Message::DismissToast),
        ]
        .into()
    }

    fn top_bar<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let logo = row![
            lucide_icons::iced::icon_film()
                .size(style::TEXT_2XL)
                .color(cs.on_primary),
            text("Popcorn")
                .size(style::TEXT_2XL)
                .font(style::FONT_HEADING)
                .color(cs.on_primary),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center);

        container(
            row![
                container(logo).width(Length::Fill),
                self.search.search_bar(cs).map(Message::Search),
                container(self.search.results_count(cs).map(Message::Search))
                    .width(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Right),
            ]
            .align_y(Alignment::Center),
        )
        .style(theme::top_bar(cs))
        .width(Length::Fill)
        .height(Length::Fixed(style::TOP_BAR_HEIGHT))
        .padding([0.0, style::SPACE_XL])
        .center_y(Length::Fixed(style::TOP_BAR_HEIGHT))
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscriptions(self.config.appearance.mode)
    }

    pub fn theme(&self) -> Theme {
        self.current_theme.iced_theme(self.active_mode)
    }
}

#[cfg(test)]
mod tests {
    use popcorn_core::models::WatchedEntry;

    use super::*;

    fn app() -> Popcorn {
        let mut config = AppConfig::default();
        config.appearance.mode = ThemeMode::Dark;
        let (app, _) = Popcorn::new(config, OmdbClient::new("k3y".into()), String::new());
        app
    }

    fn entry(imdb_id: &str, user_rating: u8) -> WatchedEntry {
        WatchedEntry {
            imdb_id: imdb_id.into(),
            title: "Heat".into(),
            year: "1995".into(),
            poster_url: None,
            imdb_rating: 8.3,
            runtime_minutes: 170,
            user_rating,
        }
    }

    fn last_toast(app: &Popcorn) -> Option<ToastKind> {
        app.toasts.items().last().map(|t| t.kind)
    }

    fn in_list_mode(app: &Popcorn) -> bool {
        !matches!(
            View::compose(app.search.state(), &app.selection),
            View::Detail(_)
        )
    }

    // Toasts schedule their dismissal on the tokio timer.
    #[tokio::test]
    async fn test_add_watched_returns_to_list() {
        let mut app = app();
        let _ = app.handle_action(Action::ToggleSelection("tt0113277".into()));
        assert_eq!(app.selection.current(), Some("tt0113277"));
        assert!(app.details.state().is_loading());

        let _ = app.handle_action(Action::AddWatched(entry("tt0113277", 8)));
        assert_eq!(app.selection.current(), None);
        assert!(in_list_mode(&app));
        assert!(!app.details.state().is_loading());
        assert!(app.watched.list().contains("tt0113277"));
        assert_eq!(last_toast(&app), Some(ToastKind::Success));
    }

    #[tokio::test]
    async fn test_duplicate_add_keeps_selection_and_list() {
        let mut app = app();
        let _ = app.handle_action(Action::AddWatched(entry("tt0113277", 8)));
        let _ = app.handle_action(Action::ToggleSelection("tt0113277".into()));

        let _ = app.handle_action(Action::AddWatched(entry("tt0113277", 3)));
        assert_eq!(app.selection.current(), Some("tt0113277"));
        assert!(!in_list_mode(&app));
        assert_eq!(app.watched.list().entries().len(), 1);
        assert_eq!(app.watched.list().entries()[0].user_rating, 8);
        assert_eq!(last_toast(&app), Some(ToastKind::Error));
    }

    #[test]
    fn test_escape_closes_detail() {
        let mut app = app();
        let _ = app.handle_action(Action::ToggleSelection("tt0113277".into()));

        let _ = app.update(Message::Shortcut(Shortcut::CloseDetail));
        assert_eq!(app.selection.current(), None);
        assert!(in_list_mode(&app));
        assert!(!app.details.state().is_loading());
    }

    #[test]
    fn test_close_button_closes_detail() {
        let mut app = app();
        let _ = app.handle_action(Action::ToggleSelection("tt0113277".into()));

        let _ = app.update(Message::Details(details::Message::Close));
        assert_eq!(app.selection.current(), None);
        assert!(in_list_mode(&app));
    }

    #[test]
    fn test_clicking_open_movie_again_deselects() {
        let mut app = app();
        let _ = app.handle_action(Action::ToggleSelection("tt0113277".into()));
        let _ = app.handle_action(Action::ToggleSelection("tt0113277".into()));

        assert_eq!(app.selection.current(), None);
        assert!(!app.details.state().is_loading());
    }
}
