// SPDX-License-Identifier: MPL-2.0
//! Overlay rendering for the active notifications.
//!
//! Notifications are drawn as small cards with a style-colored accent,
//! a glyph, the text and a dismiss button. The active set is split by
//! position: top-edge and bottom-edge items stack in their own column,
//! centered items share a column (with a backdrop when a full-screen
//! notification is showing) and custom-position items are placed one by
//! one.

use crate::notifications::{
    Alignment, Horizontal, Message, Method, NotificationContent, NotificationItem, Notifier,
    Scheduler, SimpleNotification, Style, Vertical,
};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Text accessors the overlay needs on top of [`NotificationContent`].
pub trait ToastContent: NotificationContent {
    fn title(&self) -> Option<&str>;
    fn message(&self) -> &str;
}

impl ToastContent for SimpleNotification {
    fn title(&self) -> Option<&str> {
        SimpleNotification::title(self)
    }

    fn message(&self) -> &str {
        SimpleNotification::message(self)
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single notification card.
    ///
    /// A right click stands in for the swipe gesture on desktop.
    pub fn view<'a, C: ToastContent>(item: &'a NotificationItem<C>) -> Element<'a, Message> {
        let content = item.content();
        let style = content.style();
        let accent = accent_color(&style);
        let background = card_background(&style);

        let icon = Text::new(glyph(&style))
            .size(typography::ICON)
            .width(Length::Fixed(sizing::ICON_MD))
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = content.title() {
            body = body.push(
                Text::new(title)
                    .size(typography::TITLE_SM)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }
        body = body.push(
            Text::new(content.message())
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        );

        let dismiss_button = button(Text::new("\u{2715}").size(sizing::ICON_SM))
            .on_press(Message::Dismiss(item.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [glyph] [title/message] [dismiss]
        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let card = Container::new(row)
            .width(Length::Fixed(card_width(item.method())))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent, background));

        mouse_area(card)
            .on_right_press(Message::Swiped(item.id()))
            .into()
    }

    /// Renders every active notification as a full-window overlay layer.
    pub fn view_overlay<'a, C: ToastContent, S: Scheduler>(
        notifier: &'a Notifier<C, S>,
    ) -> Element<'a, Message> {
        let groups = notifier.active_by_position();
        if groups.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let gap = notifier.state().configuration().spacing.value();
        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        if !groups.center.is_empty() {
            let full_screen = groups
                .center
                .iter()
                .any(|item| matches!(item.method(), Method::FullScreen));
            let column = stack_column(&groups.center, gap);
            let layer = placed(column, Alignment::CENTER);
            layers = layers.push(if full_screen {
                Element::from(layer.style(backdrop_style))
            } else {
                Element::from(layer)
            });
        }
        if !groups.top.is_empty() {
            layers = layers.push(placed(stack_column(&groups.top, gap), Alignment::TOP));
        }
        if !groups.bottom.is_empty() {
            layers = layers.push(placed(stack_column(&groups.bottom, gap), Alignment::BOTTOM));
        }
        for item in groups.custom {
            layers = layers.push(placed(Self::view(item), item.position().alignment()));
        }

        layers.into()
    }
}

fn stack_column<'a, C: ToastContent>(
    items: &[&'a NotificationItem<C>],
    gap: f32,
) -> Column<'a, Message> {
    Column::with_children(items.iter().map(|item| Toast::view(*item)))
        .spacing(gap)
        .align_x(alignment::Horizontal::Center)
}

/// Wraps `content` in a full-window container aligned to `alignment`.
fn placed<'a>(
    content: impl Into<Element<'a, Message>>,
    alignment: Alignment,
) -> Container<'a, Message> {
    let (horizontal, vertical) = to_iced_alignment(alignment);
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(vertical)
        .padding(spacing::MD)
}

fn to_iced_alignment(alignment: Alignment) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match alignment.horizontal {
        Horizontal::Leading => alignment::Horizontal::Left,
        Horizontal::Center => alignment::Horizontal::Center,
        Horizontal::Trailing => alignment::Horizontal::Right,
    };
    let vertical = match alignment.vertical {
        Vertical::Top => alignment::Vertical::Top,
        Vertical::Center => alignment::Vertical::Center,
        Vertical::Bottom => alignment::Vertical::Bottom,
    };
    (horizontal, vertical)
}

fn card_width(method: Method) -> f32 {
    match method {
        Method::Alert | Method::FullScreen => sizing::ALERT_WIDTH,
        _ => sizing::TOAST_WIDTH,
    }
}

/// Accent color of a style.
fn accent_color(style: &Style) -> Color {
    match style {
        Style::Info => palette::INFO_500,
        Style::Success => palette::SUCCESS_500,
        Style::Warning => palette::WARNING_500,
        Style::Error => palette::ERROR_500,
        Style::Custom { icon_color, .. } => *icon_color,
    }
}

fn card_background(style: &Style) -> Option<Color> {
    match style {
        Style::Custom { background, .. } => *background,
        _ => None,
    }
}

/// Glyph drawn in the icon slot.
fn glyph(style: &Style) -> String {
    match style {
        Style::Info => "\u{2139}".to_string(),
        Style::Success => "\u{2713}".to_string(),
        Style::Warning | Style::Error => "\u{26A0}".to_string(),
        Style::Custom { icon, .. } => icon.clone(),
    }
}

/// Style function for the notification card.
fn card_style(theme: &Theme, accent: Color, background: Option<Color>) -> container::Style {
    let bg_color = background.unwrap_or(theme.extended_palette().background.base.color);

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| iced::Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
