use iced::widget::{button, row, text};
use iced::{Alignment, Element};

use crate::style;
use crate::theme::{self, ColorScheme};

/// A row of `max` clickable stars. Stars up to `value` are lit.
///
/// `value` of `None` means nothing has been picked yet.
pub fn star_rating<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    max: u8,
    value: Option<u8>,
    on_pick: impl Fn(u8) -> Message + 'a,
) -> Element<'a, Message> {
    let picked = value.unwrap_or(0);

    let stars = (1..=max).fold(row![].spacing(style::SPACE_XXS), |stars, n| {
        let color = if n <= picked { cs.star } else { cs.outline };
        stars.push(
            button(
                lucide_icons::iced::icon_star()
                    .size(style::STAR_SIZE)
                    .color(color),
            )
            .padding(style::SPACE_XXS)
            .on_press(on_pick(n))
            .style(theme::star_button(cs)),
        )
    });

    let label = match value {
        Some(n) => format!("{n} / {max}"),
        None => format!("- / {max}"),
    };

    row![
        stars,
        text(label)
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_NORMAL),
    ]
    .spacing(style::SPACE_MD)
    .align_y(Alignment::Center)
    .into()
}
