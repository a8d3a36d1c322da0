use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length};

use popcorn_core::error::PopcornError;
use popcorn_core::models::WatchedEntry;
use popcorn_core::selection::Selection;
use popcorn_core::watched::{WatchedList, WatchedSummary};

use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// The watched list with its summary header.
#[derive(Default)]
pub struct Watched {
    list: WatchedList,
}

#[derive(Debug, Clone)]
pub enum Message {
    EntryClicked(String),
}

impl Watched {
    pub fn list(&self) -> &WatchedList {
        &self.list
    }

    pub fn add(&mut self, entry: WatchedEntry) -> Result<(), PopcornError> {
        self.list.add(entry)
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::EntryClicked(imdb_id) => Action::ToggleSelection(imdb_id),
        }
    }

    pub fn view<'a>(
        &'a self,
        cs: &ColorScheme,
        selection: &Selection,
        posters: &'a PosterCache,
    ) -> Element<'a, Message> {
        let header = container(summary_row(cs, &self.list.summary()))
            .width(Length::Fill)
            .padding([style::SPACE_MD, style::SPACE_LG])
            .style(theme::summary_strip(cs));

        let body: Element<'a, Message> = if self.list.is_empty() {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_list()
                    .size(style::TEXT_3XL)
                    .color(cs.outline)
                    .into(),
                "No movies watched yet",
                Some("Open a movie, rate it, and add it to your list."),
            )
        } else {
            let items = self.list.entries().iter().map(|entry| {
                widgets::watched_item(
                    cs,
                    entry,
                    selection.is_selected(&entry.imdb_id),
                    posters,
                    Message::EntryClicked(entry.imdb_id.clone()),
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
        };

        column![header, body]
            .spacing(style::SPACE_SM)
            .height(Length::Fill)
            .into()
    }
}

fn summary_row<'a, Message: 'a>(
    cs: &ColorScheme,
    summary: &WatchedSummary,
) -> Element<'a, Message> {
    let stat = |label: String| {
        text(label)
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_NORMAL)
    };

    column![
        text("Movies you watched")
            .size(style::TEXT_LG)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_TIGHT),
        row![
            stat(format!("{} movies", summary.count)),
            stat(format!("IMDb {:.2}", summary.avg_imdb_rating)),
            stat(format!("Yours {:.2}", summary.avg_user_rating)),
            stat(format!("{:.0} min", summary.avg_runtime_minutes)),
        ]
        .spacing(style::SPACE_LG)
        .align_y(Alignment::Center),
    ]
    .spacing(style::SPACE_XS)
    .into()
}
