use iced::widget::{center, column, text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::ColorScheme;

/// A centered placeholder with icon, title, and optional subtitle.
///
/// Used for the empty result list, fetch errors and the empty watched list.
pub fn empty_state<'a, Message: 'a>(
    cs: &ColorScheme,
    icon: Element<'a, Message>,
    title: impl text::IntoFragment<'a>,
    subtitle: Option<&'a str>,
) -> Element<'a, Message> {
    let mut content = column![
        icon,
        text(title)
            .size(style::TEXT_LG)
            .font(style::FONT_HEADING)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_TIGHT),
    ]
    .spacing(style::SPACE_MD)
    .align_x(Alignment::Center);

    if let Some(subtitle) = subtitle {
        content = content.push(
            text(subtitle)
                .size(style::TEXT_SM)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }

    center(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
