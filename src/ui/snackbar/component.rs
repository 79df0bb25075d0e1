// SPDX-License-Identifier: MPL-2.0
//! Snackbar component: timer wiring, messages and view.
//!
//! The visibility flag belongs to the host. The component reads it on every
//! call and asks for it to be cleared through [`Event::VisibilityChanged`];
//! it never stores or flips it.

use super::options::SnackbarOptions;
use super::style;
use super::timeout::Timeout;
use super::timer::{AutoDismiss, Schedule, TimerId, TimerState};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::text::IntoFragment;
use iced::widget::{button, mouse_area, text, Column, Container, Row, Space};
use iced::{alignment, task, Element, Length, Padding, Task, Theme};
use std::fmt;

/// Messages produced by the snackbar's own widgets and timer.
#[derive(Debug, Clone)]
pub enum Message {
    /// A scheduled hide reached its deadline.
    Elapsed(TimerId),
    /// Pointer moved onto the wrapper.
    PointerEntered,
    /// Pointer left the wrapper.
    PointerExited,
}

/// Requests the host must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The host should set its visibility flag to this value.
    VisibilityChanged(bool),
}

/// A single snackbar instance.
pub struct Snackbar {
    timeout: Timeout,
    options: SnackbarOptions,
    timer: AutoDismiss,
    /// Abort handle of the sleeping timer task; aborts on drop.
    in_flight: Option<task::Handle>,
}

impl fmt::Debug for Snackbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snackbar")
            .field("timeout", &self.timeout)
            .field("options", &self.options)
            .field("timer", &self.timer.state())
            .finish()
    }
}

impl Default for Snackbar {
    fn default() -> Self {
        Self::new(Timeout::default())
    }
}

impl Snackbar {
    #[must_use]
    pub fn new(timeout: Timeout) -> Self {
        Self {
            timeout,
            options: SnackbarOptions::default(),
            timer: AutoDismiss::new(),
            in_flight: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: SnackbarOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Timeout {
        self.timeout
    }

    #[must_use]
    pub fn options(&self) -> &SnackbarOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SnackbarOptions) {
        self.options = options;
    }

    #[must_use]
    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    /// Id the next [`Message::Elapsed`] must carry to hide the snackbar.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.timer.pending().map(|schedule| schedule.id)
    }

    /// Starts the countdown if the snackbar is already visible when created.
    pub fn mount(&mut self, visible: bool) -> Task<Message> {
        if visible {
            self.restart(visible)
        } else {
            Task::none()
        }
    }

    /// Must be called whenever the host flips its visibility flag.
    pub fn visibility_changed(&mut self, visible: bool) -> Task<Message> {
        self.restart(visible)
    }

    /// Replaces the timeout, restarting the countdown if it actually changed.
    pub fn set_timeout(&mut self, timeout: Timeout, visible: bool) -> Task<Message> {
        if timeout == self.timeout {
            return Task::none();
        }
        self.timeout = timeout;
        self.restart(visible)
    }

    /// Handles a snackbar message.
    pub fn update(&mut self, message: Message, visible: bool) -> (Event, Task<Message>) {
        match message {
            Message::Elapsed(id) => {
                if self.timer.fire(id) {
                    self.in_flight = None;
                    (Event::VisibilityChanged(false), Task::none())
                } else {
                    (Event::None, Task::none())
                }
            }
            Message::PointerEntered => {
                self.timer.on_hover_enter();
                self.abort_in_flight();
                (Event::None, Task::none())
            }
            Message::PointerExited => {
                let schedule = self.timer.on_hover_leave(visible, self.timeout);
                (Event::None, self.spawn(schedule))
            }
        }
    }

    /// Closes the snackbar right away, e.g. from an action button.
    pub fn dismiss(&mut self) -> Event {
        self.teardown();
        Event::VisibilityChanged(false)
    }

    /// Cancels any pending hide. Dropping the snackbar does the same.
    pub fn teardown(&mut self) {
        self.timer.cancel();
        self.abort_in_flight();
    }

    fn restart(&mut self, visible: bool) -> Task<Message> {
        let schedule = self.timer.reschedule(visible, self.timeout);
        self.spawn(schedule)
    }

    fn spawn(&mut self, schedule: Option<Schedule>) -> Task<Message> {
        self.abort_in_flight();

        let Some(Schedule { id, after }) = schedule else {
            return Task::none();
        };

        // The sleep is built inside the future so it binds to the executor's reactor.
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(after).await },
            move |()| Message::Elapsed(id),
        )
        .abortable();
        self.in_flight = Some(handle.abort_on_drop());
        task
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    /// Builds an action button styled for this snackbar.
    pub fn action<'a, M>(&self, label: impl IntoFragment<'a>, on_press: M) -> Element<'a, M>
    where
        M: Clone + 'a,
    {
        let options = self.options;
        button(text(label).size(typography::BODY))
            .on_press(on_press)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XS, spacing::SM])
            .style(move |theme: &Theme, status| style::action_button(theme, status, &options))
            .into()
    }

    /// Renders the snackbar anchored inside the available area.
    ///
    /// Returns an empty element while hidden. Stack the result over the
    /// host's content.
    pub fn view<'a, M>(
        &self,
        visible: bool,
        content: impl Into<Element<'a, M>>,
        actions: Vec<Element<'a, M>>,
        on_message: impl Fn(Message) -> M,
    ) -> Element<'a, M>
    where
        M: Clone + 'a,
    {
        if !visible {
            return Space::new().into();
        }

        let options = self.options;
        let vertical_padding = if options.is_multi_line() {
            spacing::LG
        } else {
            spacing::SM
        };

        let message = Container::new(content)
            .width(Length::Fill)
            .padding([vertical_padding, spacing::MD])
            .align_y(alignment::Vertical::Center);

        let body: Element<'a, M> = if actions.is_empty() {
            message.into()
        } else {
            let actions = Row::with_children(actions)
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center);

            if options.vertical {
                Column::new()
                    .push(message)
                    .push(
                        Container::new(actions)
                            .width(Length::Fill)
                            .align_x(alignment::Horizontal::Right)
                            .padding([0.0, spacing::XS]),
                    )
                    .padding(Padding {
                        bottom: spacing::XS,
                        ..Padding::ZERO
                    })
                    .into()
            } else {
                Row::new()
                    .push(message)
                    .push(Container::new(actions).padding([0.0, spacing::XS]))
                    .align_y(alignment::Vertical::Center)
                    .into()
            }
        };

        let wrapper = Container::new(body)
            .width(Length::Fill)
            .max_width(options.max_width)
            .style(move |theme: &Theme| style::wrapper(theme, &options));

        let hover_area = mouse_area(wrapper)
            .on_enter(on_message(Message::PointerEntered))
            .on_exit(on_message(Message::PointerExited));

        Container::new(hover_area)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(options.location.horizontal())
            .align_y(options.location.vertical())
            .padding(spacing::MD)
            .into()
    }
}
