// SPDX-License-Identifier: MPL-2.0
//! Demo control panel with the notification overlay on top.

use super::message::Preset;
use super::Message;
use crate::notifications::{Notifier, SimpleNotification};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::Toast;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Counters shown under the controls.
pub struct Status {
    pub active: usize,
    pub pending: usize,
    pub tracked_dismissals: u32,
    pub diagnostics_events: usize,
}

pub fn view<'a>(
    notifier: &'a Notifier<SimpleNotification>,
    status: Status,
) -> Element<'a, Message> {
    let presets = Row::with_children(Preset::ALL.iter().map(|preset| {
        button(Text::new(preset.label()))
            .on_press(Message::Show(*preset))
            .into()
    }))
    .spacing(spacing::XS)
    .wrap();

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Dismiss current")).on_press(Message::DismissCurrent))
        .push(button(Text::new("Dismiss all")).on_press(Message::DismissAll))
        .push(button(Text::new("Export diagnostics")).on_press(Message::ExportDiagnostics));

    let status_text = Text::new(format!(
        "Active: {}  Pending: {}  Tracked dismissals: {}  Logged events: {}",
        status.active, status.pending, status.tracked_dismissals, status.diagnostics_events
    ))
    .size(typography::BODY);

    let controls = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(presets)
        .push(actions)
        .push(status_text);

    let base = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG);

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(notifier).map(Message::Notification))
        .into()
}
