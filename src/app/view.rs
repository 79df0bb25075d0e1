// SPDX-License-Identifier: MPL-2.0
//! Demo window layout: a control panel with the snackbar stacked on top.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::snackbar::{Location, Timeout, Variant};
use iced::widget::{button, pick_list, text_input, toggler, Column, Container, Row, Space, Stack, Text};
use iced::{Alignment, Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let snackbar_layer = app.snackbar.view(
        app.visible,
        Text::new(app.message.as_str()).size(typography::BODY),
        vec![
            app.snackbar.action("Undo", Message::Undo),
            app.snackbar.action("Close", Message::CloseSnackbar),
        ],
        Message::Snackbar,
    );

    Stack::new()
        .push(controls(app))
        .push(snackbar_layer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn controls(app: &App) -> Element<'_, Message> {
    let title = Text::new("Snackbar").size(typography::TITLE_MD);

    let message_input = text_input("Message", &app.message)
        .on_input(Message::MessageInputChanged)
        .padding(spacing::XS);

    let timeout_input = text_input("Timeout in ms, -1 for never", &app.timeout_input)
        .on_input(Message::TimeoutInputChanged)
        .padding(spacing::XS);

    let timeout_hint = Text::new(timeout_hint(app.snackbar.timeout())).size(typography::CAPTION);

    let options = app.snackbar.options();
    let location_picker = pick_list(
        Location::ALL,
        Some(options.location),
        Message::LocationSelected,
    )
    .padding(spacing::XS);
    let variant_picker = pick_list(
        Variant::ALL,
        Some(options.variant),
        Message::VariantSelected,
    )
    .padding(spacing::XS);

    let toggles = Row::new()
        .spacing(spacing::MD)
        .align_y(Alignment::Center)
        .push(Text::new("Vertical").size(typography::BODY))
        .push(toggler(options.vertical).on_toggle(Message::VerticalToggled))
        .push(Text::new("Multi-line").size(typography::BODY))
        .push(toggler(options.multi_line).on_toggle(Message::MultiLineToggled));

    let buttons = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Show")).on_press(Message::Show))
        .push(button(Text::new("Hide")).on_press(Message::Hide))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("Save settings"))
                .style(iced::widget::button::secondary)
                .on_press(Message::SaveSettings),
        );

    let column = Column::new()
        .spacing(spacing::SM)
        .max_width(480.0)
        .push(title)
        .push(message_input)
        .push(timeout_input)
        .push(timeout_hint)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(location_picker)
                .push(variant_picker),
        )
        .push(toggles)
        .push(buttons)
        .push(Text::new(app.status.as_str()).size(typography::CAPTION));

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn timeout_hint(timeout: Timeout) -> String {
    match timeout.duration() {
        Some(duration) => format!("Hides after {} ms", duration.as_millis()),
        None => "Stays until closed".to_string(),
    }
}
