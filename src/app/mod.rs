// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the notifier into an Iced program.
//!
//! The `App` owns the notifier and the diagnostics collector, forwards
//! overlay messages to the notifier and drives its timers from a periodic
//! tick.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message, Preset};

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::error::Result;
use crate::notifications::{self, Method, Notifier, Priority, SimpleNotification, Style};
use iced::{window, Element, Subscription, Task, Theme};
use std::cell::Cell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;

/// Root Iced application state.
pub struct App {
    notifier: Notifier<SimpleNotification>,
    diagnostics: DiagnosticsCollector,
    /// Number of presets shown so far, used to label them.
    shown: u32,
    /// Bumped by the dismissal callback of tracked toasts.
    tracked_dismissals: Rc<Cell<u32>>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active", &self.notifier.active().len())
            .field("shown", &self.shown)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, warning) = match load_config(&flags) {
            Ok(config) => (config, None),
            Err(error) => (Config::default(), Some(error.to_string())),
        };
        if let Some(max) = flags.max_concurrent {
            config.max_concurrent = Some(max);
        }

        let mut app = Self::from_config(&config);
        if let Some(warning) = warning {
            app.notifier.notify_message(
                Some("Settings"),
                &format!("Using defaults: {warning}"),
                Style::Warning,
            );
        }
        (app, Task::none())
    }

    fn from_config(config: &Config) -> Self {
        let diagnostics = DiagnosticsCollector::new(config.diagnostics_capacity());
        let mut notifier = Notifier::new(config.notification_configuration());
        notifier.set_diagnostics(diagnostics.handle());

        Self {
            notifier,
            diagnostics,
            shown: 0,
            tracked_dismissals: Rc::new(Cell::new(0)),
        }
    }

    fn title(&self) -> String {
        if self.notifier.is_presenting() {
            format!("Iced Notifier ({})", self.notifier.active().len())
        } else {
            "Iced Notifier".to_string()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifier.state().next_deadline())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(preset) => self.show(preset),
            Message::DismissCurrent => self.notifier.dismiss(),
            Message::DismissAll => self.notifier.dismiss_all(),
            Message::ExportDiagnostics => self.export_diagnostics(),
            Message::Notification(message) => self.notifier.handle_message(message),
            Message::Tick(now) => {
                self.notifier
                    .handle_message(notifications::Message::Tick(now));
                self.diagnostics.process_pending();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(
            &self.notifier,
            view::Status {
                active: self.notifier.state().active_len(),
                pending: self.notifier.state().pending_len(),
                tracked_dismissals: self.tracked_dismissals.get(),
                diagnostics_events: self.diagnostics.len(),
            },
        )
    }

    fn show(&mut self, preset: Preset) {
        self.shown += 1;
        let label = format!("{} #{}", preset.label(), self.shown);

        match preset {
            Preset::Toast => {
                self.notifier.notify(
                    SimpleNotification::success(label).with_method(Method::toast()),
                );
            }
            Preset::Banner => {
                self.notifier.notify(
                    SimpleNotification::info(label)
                        .with_title("Banner")
                        .with_duration(Duration::from_secs(4)),
                );
            }
            Preset::Low => {
                self.notifier.notify(
                    SimpleNotification::info(label).with_method(Method::custom(Priority::Low)),
                );
            }
            Preset::Alert => {
                self.notifier.notify(
                    SimpleNotification::warning(label)
                        .with_title("Alert")
                        .with_method(Method::Alert),
                );
            }
            Preset::FullScreen => {
                self.notifier.notify(
                    SimpleNotification::error(label)
                        .with_title("Full screen")
                        .with_method(Method::FullScreen)
                        .swipe_to_dismiss(false),
                );
            }
            Preset::Persistent => {
                self.notifier.notify(SimpleNotification::error(label));
            }
            Preset::Tracked => {
                let counter = Rc::clone(&self.tracked_dismissals);
                self.notifier.notify_on_dismiss(
                    SimpleNotification::info(label).with_method(Method::toast()),
                    move || counter.set(counter.get() + 1),
                );
            }
        }
    }

    fn export_diagnostics(&mut self) {
        self.diagnostics.process_pending();
        let path = diagnostics_report_path();
        match self.diagnostics.export_to_file(&path) {
            Ok(()) => {
                self.notifier.notify_message(
                    Some("Diagnostics"),
                    &format!("Report written to {}", path.display()),
                    Style::Success,
                );
            }
            Err(error) => {
                self.notifier.notify(
                    SimpleNotification::error(error.to_string()).with_title("Diagnostics"),
                );
            }
        }
    }
}

fn load_config(flags: &Flags) -> Result<Config> {
    match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    }
}

/// Timestamped report path in the user data directory, or the working
/// directory when there is none.
fn diagnostics_report_path() -> PathBuf {
    let file_name = format!(
        "diagnostics-{}.json",
        chrono::Utc::now().format("%Y%m%d-%H%M%S")
    );
    dirs::data_dir()
        .map(|dir| dir.join("IcedNotifier").join(&file_name))
        .unwrap_or_else(|| PathBuf::from(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn title_reflects_active_count() {
        let mut app = App::default();
        assert_eq!(app.title(), "Iced Notifier");

        let _ = app.update(Message::Show(Preset::Toast));
        assert_eq!(app.title(), "Iced Notifier (1)");
    }

    #[test]
    fn presets_follow_priority_rules() {
        let mut app = App::default();
        for _ in 0..4 {
            let _ = app.update(Message::Show(Preset::Toast));
        }
        assert_eq!(app.notifier.state().pending_len(), 1);

        let _ = app.update(Message::Show(Preset::Alert));
        assert_eq!(app.notifier.state().pending_len(), 0);
        assert_eq!(app.notifier.active()[0].method(), Method::Alert);
    }

    #[test]
    fn tracked_toast_counts_dismissals() {
        let mut app = App::default();
        let _ = app.update(Message::Show(Preset::Tracked));
        let _ = app.update(Message::DismissAll);
        assert_eq!(app.tracked_dismissals.get(), 1);
    }

    #[test]
    fn tick_expires_and_collects_events() {
        let mut app = App::default();
        let _ = app.update(Message::Show(Preset::Toast));
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(60)));

        assert!(!app.notifier.is_presenting());
        assert!(app.diagnostics.len() >= 2);
    }

    #[test]
    fn overlay_messages_reach_notifier() {
        let mut app = App::default();
        let _ = app.update(Message::Show(Preset::Persistent));
        let id = app.notifier.active()[0].id();

        let _ = app.update(Message::Notification(notifications::Message::Dismiss(id)));
        assert!(!app.notifier.is_presenting());
    }
}
