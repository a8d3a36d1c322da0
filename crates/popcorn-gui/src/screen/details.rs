use iced::widget::{button, column, container, row, rule, text};
use iced::{Alignment, Element, Length, Task};

use popcorn_api::OmdbClient;
use popcorn_core::detail::DetailState;
use popcorn_core::fetch::{self, DetailOutcome};
use popcorn_core::models::{MovieDetails, WatchedEntry};

use crate::app;
use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::toast::ToastKind;
use crate::widgets;

/// Detail pane for the selected movie, with the rating input.
pub struct Details {
    state: DetailState,
    /// Rating picked for the open movie; reset whenever another one opens.
    rating: Option<u8>,
    max_rating: u8,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(DetailOutcome),
    RatingPicked(u8),
    AddToWatched,
    Close,
}

impl Details {
    pub fn new(max_rating: u8) -> Self {
        Self {
            state: DetailState::default(),
            rating: None,
            max_rating,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Start loading `imdb_id`, dropping whatever was shown before.
    pub fn open(&mut self, imdb_id: &str, client: &OmdbClient) -> Action {
        let ticket = self.state.request(imdb_id);
        self.rating = None;
        let client = client.clone();
        Action::RunTask(Task::perform(
            async move { fetch::run_detail(&client, ticket).await },
            |outcome| app::Message::Details(Message::Loaded(outcome)),
        ))
    }

    pub fn close(&mut self) {
        self.state.clear();
        self.rating = None;
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::Loaded(outcome) => {
                if !self.state.settle(outcome) {
                    return Action::None;
                }
                match self.state.movie() {
                    Some(movie) => Action::RequestPosters(vec![(
                        movie.imdb_id.clone(),
                        movie.poster_url.clone(),
                    )]),
                    None => Action::None,
                }
            }
            Message::RatingPicked(n) => {
                self.rating = Some(n);
                Action::None
            }
            Message::AddToWatched => {
                let (Some(movie), Some(rating)) = (self.state.movie(), self.rating) else {
                    return Action::None;
                };
                match WatchedEntry::from_details(movie, rating, self.max_rating) {
                    Ok(entry) => Action::AddWatched(entry),
                    Err(e) => {
                        tracing::warn!(imdb_id = %movie.imdb_id, error = %e, "cannot add to watched");
                        Action::ShowToast(
                            format!("Could not add {}: {e}", movie.title),
                            ToastKind::Error,
                        )
                    }
                }
            }
            Message::Close => Action::CloseDetail,
        }
    }

    // ── Views ─────────────────────────────────────────────────────

    /// `watched` is the existing entry when this movie was already rated.
    pub fn view<'a>(
        &'a self,
        cs: &ColorScheme,
        posters: &'a PosterCache,
        watched: Option<&'a WatchedEntry>,
    ) -> Element<'a, Message> {
        let back = button(
            row![
                lucide_icons::iced::icon_arrow_left()
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant),
                text("Back").size(style::TEXT_SM),
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center),
        )
        .padding([style::SPACE_XS, style::SPACE_MD])
        .on_press(Message::Close)
        .style(theme::ghost_button(cs));

        let body: Element<'a, Message> = if let Some(movie) = self.state.movie() {
            self.movie_view(cs, movie, posters, watched)
        } else if let Some(err) = self.state.error() {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_circle_x()
                    .size(style::TEXT_3XL)
                    .color(cs.error)
                    .into(),
                err.detail_message(),
                None,
            )
        } else {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_clock()
                    .size(style::TEXT_3XL)
                    .color(cs.outline)
                    .into(),
                "Loading...",
                None,
            )
        };

        column![back, body]
            .spacing(style::SPACE_MD)
            .padding(style::SPACE_LG)
            .height(Length::Fill)
            .into()
    }

    fn movie_view<'a>(
        &'a self,
        cs: &ColorScheme,
        movie: &'a MovieDetails,
        posters: &'a PosterCache,
        watched: Option<&'a WatchedEntry>,
    ) -> Element<'a, Message> {
        let poster = widgets::poster(
            cs,
            posters,
            &movie.imdb_id,
            style::POSTER_WIDTH,
            style::POSTER_HEIGHT,
            style::RADIUS_MD,
        );

        let header = column![
            text(movie.title.as_str())
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            text(format!("{}  \u{00B7}  {}", movie.released, movie.runtime))
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_NORMAL),
            text(movie.genre.as_str())
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_NORMAL),
            row![
                lucide_icons::iced::icon_star()
                    .size(style::TEXT_SM)
                    .color(cs.star),
                text(format!("{} IMDb rating", movie.imdb_rating))
                    .size(style::TEXT_SM)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center),
        ]
        .spacing(style::SPACE_XS);

        let rating_card: Element<'a, Message> = match watched {
            Some(entry) => text(format!("You rated this movie {}", entry.user_rating))
                .size(style::TEXT_BASE)
                .color(cs.on_surface_variant)
                .into(),
            None => {
                let mut col = column![widgets::star_rating(
                    cs,
                    self.max_rating,
                    self.rating,
                    Message::RatingPicked,
                )]
                .spacing(style::SPACE_MD)
                .align_x(Alignment::Center);
                if self.rating.is_some() {
                    col = col.push(
                        button(
                            row![
                                lucide_icons::iced::icon_plus().size(style::TEXT_SM),
                                text("Add to list").size(style::TEXT_SM),
                            ]
                            .spacing(style::SPACE_XS)
                            .align_y(Alignment::Center),
                        )
                        .padding([style::SPACE_SM, style::SPACE_XL])
                        .on_press(Message::AddToWatched)
                        .style(theme::primary_button(cs)),
                    );
                }
                col.into()
            }
        };

        let credits = column![
            text(movie.plot.as_str())
                .size(style::TEXT_SM)
                .line_height(style::LINE_HEIGHT_LOOSE),
            text(format!("Starring {}", movie.actors))
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
            text(format!("Directed by {}", movie.director))
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .spacing(style::SPACE_SM);

        widgets::styled_scrollable(
            column![
                row![poster, header]
                    .spacing(style::SPACE_LG)
                    .align_y(Alignment::Center),
                rule::horizontal(1),
                container(rating_card)
                    .padding(style::SPACE_MD)
                    .center_x(Length::Fill)
                    .style(theme::card(cs)),
                credits,
            ]
            .spacing(style::SPACE_LG)
            .padding([0.0, style::SPACE_XS]),
            cs,
        )
        .height(Length::Fill)
        .into()
    }
}
