use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Length};

use popcorn_core::models::{MovieSummary, WatchedEntry};

use crate::poster_cache::PosterCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// One search result: poster thumbnail, title, and year.
///
/// Clicking it emits `on_select`; the highlight follows `selected`.
pub fn movie_item<'a, Message: Clone + 'static>(
    cs: &ColorScheme,
    movie: &'a MovieSummary,
    selected: bool,
    posters: &'a PosterCache,
    on_select: Message,
) -> Element<'a, Message> {
    let thumb = widgets::poster(
        cs,
        posters,
        &movie.imdb_id,
        style::THUMB_WIDTH,
        style::THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let mut meta = row![
        lucide_icons::iced::icon_calendar()
            .size(style::TEXT_XS)
            .color(cs.outline),
        text(movie.year.as_str())
            .size(style::TEXT_XS)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_XS)
    .align_y(Alignment::Center);

    if let Some(kind) = &movie.kind {
        meta = meta.push(
            text(format!("\u{00B7}  {kind}"))
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }

    let info = column![
        text(movie.title.as_str())
            .size(style::TEXT_BASE)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::None),
        meta,
    ]
    .spacing(style::SPACE_XXS)
    .clip(true);

    button(
        row![thumb, info.width(Length::Fill)]
            .spacing(style::SPACE_MD)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([style::SPACE_XS, style::SPACE_MD])
    .on_press(on_select)
    .style(theme::list_item(selected, cs))
    .into()
}

/// One watched-list row: poster thumbnail, title, and the three numbers
/// the summary averages over.
pub fn watched_item<'a, Message: Clone + 'static>(
    cs: &ColorScheme,
    entry: &'a WatchedEntry,
    selected: bool,
    posters: &'a PosterCache,
    on_select: Message,
) -> Element<'a, Message> {
    let thumb = widgets::poster(
        cs,
        posters,
        &entry.imdb_id,
        style::THUMB_WIDTH,
        style::THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let star = cs.star;
    let muted = cs.on_surface_variant;
    let stat = |icon: Element<'a, Message>, value: String| {
        row![
            icon,
            text(value)
                .size(style::TEXT_XS)
                .color(muted)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center)
    };
    let icon = |t: iced::widget::Text<'static>| -> Element<'a, Message> {
        t.size(style::TEXT_XS).color(star).into()
    };

    let stats = row![
        stat(
            icon(lucide_icons::iced::icon_star()),
            format!("{:.1}", entry.imdb_rating)
        ),
        stat(
            icon(lucide_icons::iced::icon_circle_check()),
            entry.user_rating.to_string()
        ),
        stat(
            icon(lucide_icons::iced::icon_clock()),
            format!("{} min", entry.runtime_minutes)
        ),
    ]
    .spacing(style::SPACE_LG);

    let info = column![
        text(entry.title.as_str())
            .size(style::TEXT_BASE)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::None),
        stats,
    ]
    .spacing(style::SPACE_XXS)
    .clip(true);

    button(
        row![thumb, info.width(Length::Fill)]
            .spacing(style::SPACE_MD)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([style::SPACE_XS, style::SPACE_MD])
    .on_press(on_select)
    .style(theme::list_item(selected, cs))
    .into()
}
