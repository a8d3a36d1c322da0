use std::time::Duration;

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::{self, ColorScheme};

/// Kind of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Auto-dismiss delay.
pub const AUTO_DISMISS: Duration = Duration::from_secs(4);

/// The stack of visible toasts, newest last.
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Push a toast and return its id for the dismiss timer.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Render the toast overlay: a column of toasts anchored top-right.
pub fn toast_overlay<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    toasts: &'a [Toast],
    on_dismiss: impl Fn(u64) -> Message + 'a,
) -> Element<'a, Message> {
    if toasts.is_empty() {
        return iced::widget::Space::new().width(0).height(0).into();
    }

    let mut toast_column = column![]
        .spacing(style::SPACE_SM)
        .width(Length::Fixed(style::TOAST_WIDTH));

    for toast in toasts {
        let (icon, accent) = match toast.kind {
            ToastKind::Success => (lucide_icons::iced::icon_circle_check(), cs.success),
            ToastKind::Error => (lucide_icons::iced::icon_circle_x(), cs.error),
        };

        let toast_card = container(
            row![
                icon.size(style::TEXT_LG).color(accent),
                text(toast.message.as_str())
                    .size(style::TEXT_SM)
                    .line_height(style::LINE_HEIGHT_NORMAL)
                    .width(Length::Fill),
                button(
                    lucide_icons::iced::icon_x()
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant),
                )
                .on_press(on_dismiss(toast.id))
                .padding(style::SPACE_XXS)
                .style(theme::icon_button(cs)),
            ]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center),
        )
        .style(theme::card(cs))
        .padding([style::SPACE_SM, style::SPACE_MD])
        .width(Length::Fill);

        toast_column = toast_column.push(toast_card);
    }

    container(toast_column)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .padding([style::TOP_BAR_HEIGHT + style::SPACE_MD, style::SPACE_XL])
        .into()
}
