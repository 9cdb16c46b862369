// SPDX-License-Identifier: MPL-2.0
//! Application-facing notifier.
//!
//! The `Notifier` wraps a [`NotificationState`], derives the presentation
//! method from the content, plays feedback on admission and routes UI
//! messages (dismiss button, swipe, tick) into the engine.

use super::configuration::NotificationConfiguration;
use super::content::{HapticFeedback, NotificationContent, SimpleNotification, Sound, Style};
use super::item::{NotificationId, NotificationItem};
use super::layout::PositionGroups;
use super::method::Method;
use super::observer::SubscriptionId;
use super::state::NotificationState;
use super::timer::{DeadlineScheduler, Scheduler};
use crate::diagnostics::DiagnosticsHandle;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Dismiss button pressed on a notification.
    Dismiss(NotificationId),
    /// Horizontal swipe on a notification.
    Swiped(NotificationId),
    /// Periodic tick for auto-dismiss timers.
    Tick(Instant),
}

/// Platform hook for the haptic and sound requests attached to content.
pub trait FeedbackSink {
    fn haptic(&mut self, feedback: HapticFeedback);
    fn sound(&mut self, sound: &Sound);
}

/// The engine plus feedback and message routing.
pub struct Notifier<C, S: Scheduler = DeadlineScheduler> {
    state: NotificationState<C, S>,
    feedback: Option<Box<dyn FeedbackSink>>,
}

impl<C: NotificationContent, S: Scheduler + Default> Notifier<C, S> {
    #[must_use]
    pub fn new(configuration: NotificationConfiguration) -> Self {
        Self::from_state(NotificationState::new(configuration))
    }
}

impl<C: NotificationContent, S: Scheduler> Notifier<C, S> {
    #[must_use]
    pub fn from_state(state: NotificationState<C, S>) -> Self {
        Self {
            state,
            feedback: None,
        }
    }

    /// Installs the platform feedback sink.
    pub fn set_feedback(&mut self, sink: Box<dyn FeedbackSink>) {
        self.feedback = Some(sink);
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.state.set_diagnostics(handle);
    }

    /// Shows `content` using the method it asks for.
    pub fn notify(&mut self, content: C) -> NotificationId {
        let method = content.method();
        self.notify_with(content, method)
    }

    /// Shows `content` with an explicit method.
    pub fn notify_with(&mut self, content: C, method: Method) -> NotificationId {
        self.play_feedback(&content);
        self.state.enqueue(content, method)
    }

    /// Shows `content` and calls `on_dismiss` once it is dismissed.
    pub fn notify_on_dismiss(
        &mut self,
        content: C,
        on_dismiss: impl FnOnce() + 'static,
    ) -> NotificationId {
        let method = content.method();
        self.notify_with_on_dismiss(content, method, on_dismiss)
    }

    /// Shows `content` with an explicit method and calls `on_dismiss` once
    /// it is dismissed.
    pub fn notify_with_on_dismiss(
        &mut self,
        content: C,
        method: Method,
        on_dismiss: impl FnOnce() + 'static,
    ) -> NotificationId {
        self.play_feedback(&content);
        self.state.enqueue_with_callback(content, method, on_dismiss)
    }

    fn play_feedback(&mut self, content: &C) {
        if self.state.is_shut_down() {
            return;
        }
        let Some(sink) = self.feedback.as_mut() else {
            return;
        };
        if let Some(haptic) = content.haptic_feedback() {
            sink.haptic(haptic);
        }
        if let Some(sound) = content.sound_effect() {
            sink.sound(&sound);
        }
    }

    /// Dismisses the front notification.
    pub fn dismiss(&mut self) {
        self.state.dismiss_current();
    }

    pub fn dismiss_specific(&mut self, id: NotificationId) -> bool {
        self.state.dismiss_specific(id)
    }

    pub fn dismiss_all(&mut self) {
        self.state.dismiss_all();
    }

    /// Handles a notification message.
    ///
    /// Swipes only dismiss content that allows it.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.state.dismiss_specific(id);
            }
            Message::Swiped(id) => {
                let swipeable = self
                    .state
                    .active()
                    .iter()
                    .find(|item| item.id() == id)
                    .is_some_and(|item| item.content().is_swipe_to_dismiss_enabled());
                if swipeable {
                    self.state.dismiss_specific(id);
                }
            }
            Message::Tick(now) => {
                self.state.tick(now);
            }
        }
    }

    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&[NotificationItem<C>]) + 'static,
    ) -> SubscriptionId {
        self.state.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    #[must_use]
    pub fn is_presenting(&self) -> bool {
        self.state.is_presenting()
    }

    #[must_use]
    pub fn active(&self) -> &[NotificationItem<C>] {
        self.state.active()
    }

    #[must_use]
    pub fn active_by_position(&self) -> PositionGroups<'_, C> {
        self.state.active_by_position()
    }

    #[must_use]
    pub fn state(&self) -> &NotificationState<C, S> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut NotificationState<C, S> {
        &mut self.state
    }

    pub fn shutdown(&mut self) {
        self.state.shutdown();
    }
}

impl<S: Scheduler> Notifier<SimpleNotification, S> {
    /// Shows a text notification using the configured default duration.
    pub fn notify_message(
        &mut self,
        title: Option<&str>,
        message: &str,
        style: Style,
    ) -> NotificationId {
        let duration = self.state.configuration().default_duration.as_duration();
        let mut content = SimpleNotification::new(message)
            .with_style(style)
            .with_duration(duration);
        if let Some(title) = title {
            content = content.with_title(title);
        }
        self.notify(content)
    }
}

impl<C, S: Scheduler + std::fmt::Debug> std::fmt::Debug for Notifier<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("state", &self.state)
            .field("feedback", &self.feedback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::DisplayDuration;
    use crate::notifications::method::Priority;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        played: Rc<RefCell<Vec<String>>>,
    }

    impl FeedbackSink for Recorder {
        fn haptic(&mut self, feedback: HapticFeedback) {
            self.played.borrow_mut().push(format!("haptic:{feedback:?}"));
        }

        fn sound(&mut self, sound: &Sound) {
            self.played.borrow_mut().push(format!("sound:{sound:?}"));
        }
    }

    fn notifier(max: usize) -> Notifier<SimpleNotification> {
        Notifier::new(NotificationConfiguration::with_max_concurrent(max))
    }

    #[test]
    fn notify_uses_content_method() {
        let mut notifier = notifier(3);
        let toast = notifier.notify(SimpleNotification::new("saved").with_method(Method::toast()));
        let banner = notifier.notify(SimpleNotification::new("synced"));

        let active = notifier.active();
        assert_eq!(active[0].id(), banner);
        assert_eq!(active[1].id(), toast);
        assert_eq!(active[1].priority(), Priority::Normal);
    }

    #[test]
    fn feedback_is_played_on_admission() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = notifier(3);
        notifier.set_feedback(Box::new(Recorder {
            played: Rc::clone(&played),
        }));

        notifier.notify(
            SimpleNotification::success("done")
                .with_haptic(HapticFeedback::Success)
                .with_sound(Sound::Success),
        );
        notifier.notify(SimpleNotification::info("quiet"));

        assert_eq!(
            *played.borrow(),
            vec!["haptic:Success".to_string(), "sound:Success".to_string()]
        );
    }

    #[test]
    fn dismiss_message_removes_notification() {
        let mut notifier = notifier(3);
        let id = notifier.notify(SimpleNotification::info("a"));
        notifier.handle_message(Message::Dismiss(id));
        assert!(!notifier.is_presenting());
    }

    #[test]
    fn swipe_respects_content_setting() {
        let mut notifier = notifier(3);
        let fixed = notifier.notify(SimpleNotification::info("fixed").swipe_to_dismiss(false));
        let loose = notifier.notify(SimpleNotification::info("loose"));

        notifier.handle_message(Message::Swiped(fixed));
        notifier.handle_message(Message::Swiped(loose));

        let remaining: Vec<_> = notifier.active().iter().map(NotificationItem::id).collect();
        assert_eq!(remaining, vec![fixed]);
    }

    #[test]
    fn tick_message_expires_notifications() {
        let mut notifier = notifier(3);
        notifier.notify(SimpleNotification::info("short").with_duration(Duration::from_millis(10)));
        notifier.notify(SimpleNotification::error("sticky"));

        notifier.handle_message(Message::Tick(Instant::now() + Duration::from_secs(1)));
        assert_eq!(notifier.active().len(), 1);
        assert_eq!(notifier.active()[0].content().message(), "sticky");
    }

    #[test]
    fn notify_message_uses_configured_default_duration() {
        let mut configuration = NotificationConfiguration::with_max_concurrent(3);
        configuration.default_duration = DisplayDuration::from_secs(5.0);
        let mut notifier: Notifier<SimpleNotification> = Notifier::new(configuration);

        let id = notifier.notify_message(Some("Export"), "Finished", Style::Success);
        let item = notifier.state().get(id).expect("notification admitted");
        assert_eq!(item.content().title(), Some("Export"));
        assert_eq!(item.content().duration(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn on_dismiss_callback_runs_via_facade() {
        let mut notifier = notifier(3);
        let hits = Rc::new(RefCell::new(0));
        let id = {
            let hits = Rc::clone(&hits);
            notifier.notify_on_dismiss(SimpleNotification::error("x"), move || {
                *hits.borrow_mut() += 1;
            })
        };
        assert!(notifier.dismiss_specific(id));
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn explicit_method_and_callback_combine() {
        let mut notifier = notifier(1);
        let played = Rc::new(RefCell::new(Vec::new()));
        notifier.set_feedback(Box::new(Recorder {
            played: Rc::clone(&played),
        }));
        let hits = Rc::new(RefCell::new(0));

        let first = notifier.notify(SimpleNotification::info("first"));
        let alert = {
            let hits = Rc::clone(&hits);
            notifier.notify_with_on_dismiss(
                SimpleNotification::info("escalated").with_haptic(HapticFeedback::Success),
                Method::Alert,
                move || *hits.borrow_mut() += 1,
            )
        };

        let method = notifier.state().get(alert).map(|item| item.method());
        assert_eq!(method, Some(Method::Alert));
        assert_eq!(notifier.active()[0].id(), alert);
        assert!(notifier.state().is_active(first));
        assert_eq!(*played.borrow(), vec!["haptic:Success".to_string()]);

        assert!(notifier.dismiss_specific(alert));
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn no_feedback_after_shutdown() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = notifier(3);
        notifier.set_feedback(Box::new(Recorder {
            played: Rc::clone(&played),
        }));
        notifier.shutdown();
        notifier.notify(SimpleNotification::info("late").with_haptic(HapticFeedback::Light));
        assert!(played.borrow().is_empty());
        assert!(!notifier.is_presenting());
    }
}
