// SPDX-License-Identifier: MPL-2.0
//! The content contract between application code and the notifier.
//!
//! The engine treats content as opaque. It only asks for the display
//! duration; everything else on [`NotificationContent`] is metadata for the
//! view layer and the platform feedback hooks.

use super::method::Method;
use iced::Color;
use std::time::Duration;

/// Visual style of a notification.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Style {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Custom {
        /// Short glyph drawn in the icon slot.
        icon: String,
        icon_color: Color,
        /// Card background, `None` keeps the theme background.
        background: Option<Color>,
    },
}

/// Haptic pattern requested by a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticFeedback {
    Light,
    Medium,
    Heavy,
    Success,
    Warning,
    Error,
    Selection,
}

/// Sound requested by a notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sound {
    Default,
    Success,
    Error,
    /// A named asset resolved by the platform player.
    Custom(String),
}

/// Anything that can be shown as a notification.
pub trait NotificationContent {
    /// How long the notification stays visible. `None` or zero means it
    /// stays until dismissed.
    fn duration(&self) -> Option<Duration>;

    /// Whether a horizontal swipe may dismiss the notification.
    fn is_swipe_to_dismiss_enabled(&self) -> bool {
        true
    }

    /// Method used when the caller does not pick one.
    fn method(&self) -> Method {
        Method::banner()
    }

    fn style(&self) -> Style {
        Style::Info
    }

    fn haptic_feedback(&self) -> Option<HapticFeedback> {
        None
    }

    fn sound_effect(&self) -> Option<Sound> {
        None
    }
}

/// Returns the auto-dismiss delay for `content`, if it has one.
pub(crate) fn auto_dismiss_delay<C: NotificationContent + ?Sized>(content: &C) -> Option<Duration> {
    content.duration().filter(|d| !d.is_zero())
}

/// Built-in text notification: optional title, message and style.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleNotification {
    title: Option<String>,
    message: String,
    style: Style,
    duration: Option<Duration>,
    method: Method,
    haptic: Option<HapticFeedback>,
    sound: Option<Sound>,
    swipe_to_dismiss: bool,
}

impl SimpleNotification {
    /// Creates an info banner that stays for three seconds.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            style: Style::Info,
            duration: Some(Duration::from_secs(3)),
            method: Method::banner(),
            haptic: None,
            sound: None,
            swipe_to_dismiss: true,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_style(Style::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_style(Style::Warning)
    }

    /// Errors stay until dismissed.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_style(Style::Error).persistent()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Disables auto-dismiss.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = None;
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn with_haptic(mut self, haptic: HapticFeedback) -> Self {
        self.haptic = Some(haptic);
        self
    }

    #[must_use]
    pub fn with_sound(mut self, sound: Sound) -> Self {
        self.sound = Some(sound);
        self
    }

    #[must_use]
    pub fn swipe_to_dismiss(mut self, enabled: bool) -> Self {
        self.swipe_to_dismiss = enabled;
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl NotificationContent for SimpleNotification {
    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn is_swipe_to_dismiss_enabled(&self) -> bool {
        self.swipe_to_dismiss
    }

    fn method(&self) -> Method {
        self.method
    }

    fn style(&self) -> Style {
        self.style.clone()
    }

    fn haptic_feedback(&self) -> Option<HapticFeedback> {
        self.haptic
    }

    fn sound_effect(&self) -> Option<Sound> {
        self.sound.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::method::Priority;

    #[test]
    fn simple_notification_defaults() {
        let n = SimpleNotification::new("saved");
        assert_eq!(n.message(), "saved");
        assert!(n.title().is_none());
        assert_eq!(n.duration(), Some(Duration::from_secs(3)));
        assert_eq!(n.method().priority(), Priority::High);
        assert!(n.is_swipe_to_dismiss_enabled());
        assert_eq!(n.style(), Style::Info);
    }

    #[test]
    fn error_notifications_are_persistent() {
        let n = SimpleNotification::error("failed");
        assert_eq!(n.style(), Style::Error);
        assert!(auto_dismiss_delay(&n).is_none());
    }

    #[test]
    fn zero_duration_means_no_auto_dismiss() {
        let n = SimpleNotification::new("x").with_duration(Duration::ZERO);
        assert!(auto_dismiss_delay(&n).is_none());

        let n = SimpleNotification::new("x").with_duration(Duration::from_millis(250));
        assert_eq!(auto_dismiss_delay(&n), Some(Duration::from_millis(250)));
    }

    #[test]
    fn builder_sets_metadata() {
        let n = SimpleNotification::success("done")
            .with_title("Export")
            .with_haptic(HapticFeedback::Success)
            .with_sound(Sound::Custom("chime".into()))
            .with_method(Method::toast())
            .swipe_to_dismiss(false);

        assert_eq!(n.title(), Some("Export"));
        assert_eq!(n.haptic_feedback(), Some(HapticFeedback::Success));
        assert_eq!(n.sound_effect(), Some(Sound::Custom("chime".into())));
        assert_eq!(n.method(), Method::toast());
        assert!(!n.is_swipe_to_dismiss_enabled());
    }
}
