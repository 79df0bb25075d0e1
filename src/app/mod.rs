// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single snackbar.
//!
//! The `App` owns the visibility flag. Every change to it goes through
//! [`App::set_visible`], which reports the transition to the snackbar so it
//! can arm or cancel its timer, and every snackbar event is folded back into
//! the flag.

mod message;
pub mod paths;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::snackbar::{self, Snackbar, Timeout};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 520;
pub const WINDOW_DEFAULT_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Root Iced application state.
pub struct App {
    config: Config,
    theme_mode: ThemeMode,
    /// Resolved once at boot so System mode does not query the OS per frame.
    theme: Theme,
    snackbar: Snackbar,
    /// Whether the snackbar is shown. Owned here, never by the snackbar.
    visible: bool,
    message: String,
    /// Raw timeout text as typed, kept so invalid input stays editable.
    timeout_input: String,
    /// Last thing that happened, shown under the controls.
    status: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("visible", &self.visible)
            .field("snackbar", &self.snackbar)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call only
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads the config and applies CLI overrides.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, warning) = config::load();
        let (mut app, task) = Self::with_config(config, &flags);

        if let Some(warning) = warning {
            app.message = warning;
            let warn_task = app.set_visible(true);
            return (app, Task::batch([task, warn_task]));
        }

        (app, task)
    }

    /// Builds the app from an already-loaded config.
    pub fn with_config(config: Config, flags: &Flags) -> (Self, Task<Message>) {
        let timeout = flags
            .timeout
            .as_deref()
            .map_or(config.snackbar.timeout, Timeout::parse);
        let message = flags
            .message
            .clone()
            .unwrap_or_else(|| config.snackbar.message.clone());
        let theme_mode = flags.theme_mode.unwrap_or(config.general.theme_mode);
        let snackbar = Snackbar::new(timeout).with_options(config.snackbar.options());

        let mut app = App {
            config,
            theme_mode,
            theme: theme_mode.theme(),
            snackbar,
            visible: false,
            message,
            timeout_input: timeout.to_string(),
            status: String::new(),
        };
        let task = app.snackbar.mount(app.visible).map(Message::Snackbar);

        (app, task)
    }

    fn title(&self) -> String {
        if self.visible {
            "Snackbar Demo (showing)".to_string()
        } else {
            "Snackbar Demo".to_string()
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn snackbar(&self) -> &Snackbar {
        &self.snackbar
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Updates the flag and reports real transitions to the snackbar.
    fn set_visible(&mut self, visible: bool) -> Task<Message> {
        if self.visible == visible {
            return Task::none();
        }
        self.visible = visible;
        tracing::debug!(visible, "snackbar visibility changed");
        self.snackbar
            .visibility_changed(visible)
            .map(Message::Snackbar)
    }

    fn apply_event(&mut self, event: snackbar::Event) -> Task<Message> {
        match event {
            snackbar::Event::None => Task::none(),
            snackbar::Event::VisibilityChanged(visible) => self.set_visible(visible),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Snackbar(msg) => {
                let (event, task) = self.snackbar.update(msg, self.visible);
                let follow_up = self.apply_event(event);
                Task::batch([task.map(Message::Snackbar), follow_up])
            }
            Message::Show => self.set_visible(true),
            Message::Hide => self.set_visible(false),
            Message::MessageInputChanged(text) => {
                self.message = text;
                Task::none()
            }
            Message::TimeoutInputChanged(raw) => {
                let timeout = Timeout::parse(&raw);
                self.timeout_input = raw;
                self.snackbar
                    .set_timeout(timeout, self.visible)
                    .map(Message::Snackbar)
            }
            Message::LocationSelected(location) => {
                let options = self.snackbar.options().with_location(location);
                self.snackbar.set_options(options);
                Task::none()
            }
            Message::VariantSelected(variant) => {
                let options = self.snackbar.options().with_variant(variant);
                self.snackbar.set_options(options);
                Task::none()
            }
            Message::VerticalToggled(enabled) => {
                let options = self.snackbar.options().vertical(enabled);
                self.snackbar.set_options(options);
                Task::none()
            }
            Message::MultiLineToggled(enabled) => {
                let options = self.snackbar.options().multi_line(enabled);
                self.snackbar.set_options(options);
                Task::none()
            }
            Message::Undo => {
                self.status = "Undo requested".to_string();
                let event = self.snackbar.dismiss();
                self.apply_event(event)
            }
            Message::CloseSnackbar => {
                let event = self.snackbar.dismiss();
                self.apply_event(event)
            }
            Message::SaveSettings => self.save_settings(),
        }
    }

    fn save_settings(&mut self) -> Task<Message> {
        let options = self.snackbar.options();
        self.config.general.theme_mode = self.theme_mode;
        self.config.snackbar.timeout = self.snackbar.timeout();
        self.config.snackbar.message = self.message.clone();
        self.config.snackbar.location = options.location;
        self.config.snackbar.variant = options.variant;
        self.config.snackbar.rounded = options.rounded;
        self.config.snackbar.vertical = options.vertical;
        self.config.snackbar.multi_line = options.multi_line;

        match config::save(&self.config) {
            Ok(()) => {
                self.status = "Settings saved".to_string();
                Task::none()
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to save settings");
                self.status = format!("Could not save settings: {err}");
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::snackbar::{Location, TimerState};
    use std::time::Duration;

    fn app_with_timeout(raw: &str) -> App {
        let flags = Flags {
            timeout: Some(raw.to_string()),
            ..Flags::default()
        };
        App::with_config(Config::default(), &flags).0
    }

    fn fire_pending(app: &mut App) {
        let id = app.snackbar().pending_timer().expect("timer should be armed");
        let _ = app.update(Message::Snackbar(snackbar::Message::Elapsed(id)));
    }

    #[test]
    fn starts_hidden_and_idle() {
        let app = app_with_timeout("1000");
        assert!(!app.is_visible());
        assert_eq!(app.snackbar().timer_state(), TimerState::Idle);
    }

    #[test]
    fn cli_timeout_overrides_config() {
        let app = app_with_timeout("1234");
        assert_eq!(
            app.snackbar().timeout(),
            Timeout::After(Duration::from_millis(1234))
        );
        assert_eq!(app.timeout_input, "1234");
    }

    #[test]
    fn show_arms_and_elapsed_hides() {
        let mut app = app_with_timeout("1000");
        let _ = app.update(Message::Show);
        assert!(app.is_visible());

        fire_pending(&mut app);
        assert!(!app.is_visible());
        assert_eq!(app.snackbar().timer_state(), TimerState::Idle);
    }

    #[test]
    fn hide_cancels_timer() {
        let mut app = app_with_timeout("1000");
        let _ = app.update(Message::Show);
        let id = app.snackbar().pending_timer().expect("armed");

        let _ = app.update(Message::Hide);
        assert!(app.snackbar().pending_timer().is_none());

        let _ = app.update(Message::Show);
        let _ = app.update(Message::Snackbar(snackbar::Message::Elapsed(id)));
        assert!(app.is_visible(), "stale timer must not hide a fresh showing");
    }

    #[test]
    fn repeated_show_keeps_single_timer() {
        let mut app = app_with_timeout("1000");
        let _ = app.update(Message::Show);
        let first = app.snackbar().pending_timer();
        let _ = app.update(Message::Show);
        assert_eq!(app.snackbar().pending_timer(), first);
    }

    #[test]
    fn invalid_timeout_text_disables_auto_dismiss() {
        let mut app = app_with_timeout("1000");
        let _ = app.update(Message::Show);
        let _ = app.update(Message::TimeoutInputChanged("abc".to_string()));

        assert_eq!(app.snackbar().timeout(), Timeout::Never);
        assert_eq!(app.snackbar().timer_state(), TimerState::Idle);
        assert_eq!(app.timeout_input, "abc");
    }

    #[test]
    fn close_action_hides_immediately() {
        let mut app = app_with_timeout("-1");
        let _ = app.update(Message::Show);
        let _ = app.update(Message::CloseSnackbar);
        assert!(!app.is_visible());
    }

    #[test]
    fn undo_action_records_status_and_hides() {
        let mut app = app_with_timeout("5000");
        let _ = app.update(Message::Show);
        let _ = app.update(Message::Undo);
        assert!(!app.is_visible());
        assert_eq!(app.status(), "Undo requested");
    }

    #[test]
    fn hover_round_trip_rearms() {
        let mut app = app_with_timeout("3000");
        let _ = app.update(Message::Show);
        let _ = app.update(Message::Snackbar(snackbar::Message::PointerEntered));
        assert_eq!(app.snackbar().timer_state(), TimerState::Idle);

        let _ = app.update(Message::Snackbar(snackbar::Message::PointerExited));
        assert_eq!(app.snackbar().timer_state(), TimerState::Armed);
        fire_pending(&mut app);
        assert!(!app.is_visible());
    }

    #[test]
    fn option_messages_update_snackbar() {
        let mut app = app_with_timeout("1000");
        let _ = app.update(Message::LocationSelected(Location::TopEnd));
        let _ = app.update(Message::VerticalToggled(true));

        assert_eq!(app.snackbar().options().location, Location::TopEnd);
        assert!(app.snackbar().options().vertical);
    }

    #[test]
    fn message_flag_overrides_config() {
        let flags = Flags {
            message: Some("Hello".to_string()),
            theme_mode: Some(ThemeMode::Light),
            ..Flags::default()
        };
        let (app, _) = App::with_config(Config::default(), &flags);
        assert_eq!(app.message, "Hello");
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn theme_is_resolved_at_boot() {
        let flags = Flags {
            theme_mode: Some(ThemeMode::System),
            ..Flags::default()
        };
        let (app, _) = App::with_config(Config::default(), &flags);
        let resolved = app.theme.clone();

        assert!(resolved == Theme::Light || resolved == Theme::Dark);
        assert_eq!(app.theme(), resolved);
        assert_eq!(app.theme(), resolved);
    }
}
