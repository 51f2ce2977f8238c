//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: event handling, state updates, background requests
//! to the task service, and rendering.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tasklet_client::TaskService;
use tasklet_config::Config;
use tasklet_protocol::Message;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::{
    AppState, Focus,
    effect::{Completion, Effect},
    event::{event_to_message, poll_event},
    layout::{
        FORM_WIDTH_PERCENT, HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH,
        STATUS_BAR_HEIGHT,
    },
    terminal::AppTerminal,
    widgets::{
        render_error_banner, render_form, render_help_overlay, render_notice, render_status_bar,
        render_task_list,
    },
};

/// The main application struct.
///
/// [`update`](Self::update) applies a message synchronously and may return an
/// [`Effect`]. Effects run on the tokio runtime in a [`JoinSet`] owned by the
/// app, and their [`Completion`]s come back through [`apply`](Self::apply),
/// so input is never blocked by a request.
#[derive(Debug)]
pub struct App {
    state: AppState,
    service: TaskService,
    config: Config,
    /// Requests in flight.
    pending: JoinSet<Completion>,
    should_quit: bool,
    mounted: bool,
    /// Whether the header was shown in the last render.
    header_visible: bool,
}

impl App {
    /// Creates a new application talking to `service`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklet_client::{InMemoryGateway, TaskService};
    /// use tasklet_config::Config;
    /// use tasklet_tui::App;
    ///
    /// let service = TaskService::new(InMemoryGateway::new());
    /// let app = App::new(service, Config::default());
    /// assert!(!app.should_quit());
    /// ```
    #[must_use]
    pub fn new(service: TaskService, config: Config) -> Self {
        Self {
            state: AppState::default(),
            service,
            config,
            pending: JoinSet::new(),
            should_quit: false,
            mounted: false,
            header_visible: true,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Number of requests still in flight.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Starts the initial load of recent tasks.
    ///
    /// Returns the load effect the first time only.
    #[must_use]
    pub fn mount(&mut self) -> Option<Effect> {
        if std::mem::replace(&mut self.mounted, true) {
            return None;
        }
        self.state.tasks.begin_load();
        Some(Effect::LoadRecent {
            limit: self.config.recent_limit,
        })
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, any message other than `Quit`
    /// dismisses it instead of its normal action.
    ///
    /// Returns the request to make, if the message calls for one.
    #[must_use]
    pub fn update(&mut self, msg: Message) -> Option<Effect> {
        if msg.is_terminating() {
            self.quit();
            return None;
        }

        if self.state.dismiss_help() {
            return None;
        }

        let focus = self.state.focus();
        if msg.is_edit() && focus.field().is_none() {
            return None;
        }

        match msg {
            Message::FocusNext => self.state.set_focus(focus.next()),
            Message::FocusPrev => self.state.set_focus(focus.prev()),
            Message::NavigateUp if focus == Focus::List => self.state.navigate_up(),
            Message::NavigateDown if focus == Focus::List => self.state.navigate_down(),
            Message::Input { ch } => self.state.form.insert_char(ch),
            Message::Backspace => self.state.form.backspace(),
            Message::Newline => self.state.form.insert_newline(),
            Message::Submit if focus.is_form() => return self.submit(),
            Message::CompleteSelected if focus == Focus::List => return self.complete_selected(),
            Message::Refresh => return self.refresh(),
            Message::Escape => self.escape(),
            Message::ToggleHelp => self.state.toggle_help(),
            _ => {}
        }
        None
    }

    fn quit(&mut self) {
        self.should_quit = true;
        self.pending.abort_all();
    }

    fn submit(&mut self) -> Option<Effect> {
        let request = self.state.form.submit()?;
        self.state.tasks.begin_add();
        Some(Effect::Create(request))
    }

    fn complete_selected(&mut self) -> Option<Effect> {
        let id = self.state.selected_id()?;
        self.state
            .tasks
            .begin_complete(&id)
            .then_some(Effect::Complete(id))
    }

    fn refresh(&mut self) -> Option<Effect> {
        if self.state.tasks.fetching() {
            debug!("load in flight, ignoring reload");
            return None;
        }
        self.state.tasks.begin_load();
        Some(Effect::LoadRecent {
            limit: self.config.recent_limit,
        })
    }

    /// Contextual escape: dismiss the error banner, then the notice, then
    /// leave the task list for the form.
    fn escape(&mut self) {
        if self.state.tasks.error().is_some() {
            self.state.tasks.dismiss_error();
        } else if self.state.notice.is_some() {
            self.state.notice = None;
        } else if self.state.focus() == Focus::List {
            self.state.set_focus(Focus::Title);
        }
    }

    /// Feeds the outcome of a request back into the state.
    pub fn apply(&mut self, completion: Completion) {
        self.apply_at(completion, Instant::now());
    }

    fn apply_at(&mut self, completion: Completion, now: Instant) {
        match completion {
            Completion::Loaded(result) => self.state.tasks.finish_load(result),
            Completion::Created(result) => {
                let outcome = self.state.tasks.finish_add(result);
                self.state.form.finish_submit(&outcome);
                if outcome.is_ok() {
                    if self.state.focus().is_form() {
                        self.state.set_focus(Focus::Title);
                    }
                    self.state
                        .show_notice(now, Duration::from_secs(self.config.notice_secs));
                }
            }
            Completion::Completed { id, result } => self.state.tasks.finish_complete(&id, result),
        }
        self.state.clamp_selection();
    }

    /// Applies a message and starts the request it calls for.
    ///
    /// Must be called from within a tokio runtime.
    pub fn handle(&mut self, msg: Message) {
        if let Some(effect) = self.update(msg) {
            self.dispatch(effect);
        }
    }

    /// Runs `effect` in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, effect: Effect) {
        debug!(?effect, "dispatching");
        let service = self.service.clone();
        self.pending.spawn(async move { effect.run(&service).await });
    }

    /// Applies the completions of every finished request without waiting.
    pub fn drain_completions(&mut self) {
        while let Some(joined) = self.pending.try_join_next() {
            self.apply_joined(joined);
        }
    }

    /// Waits for every request in flight and applies its completion.
    pub async fn wait_for_pending(&mut self) {
        while let Some(joined) = self.pending.join_next().await {
            self.apply_joined(joined);
        }
    }

    fn apply_joined(&mut self, joined: Result<Completion, tokio::task::JoinError>) {
        match joined {
            Ok(completion) => self.apply(completion),
            Err(e) if e.is_cancelled() => debug!("request cancelled"),
            Err(e) => error!(error = %e, "request task failed"),
        }
    }

    /// Hides the notice once it has expired.
    pub fn tick(&mut self, now: Instant) {
        self.state.expire_notice(now);
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.render_terminal_too_small(frame, area);
            return;
        }

        self.header_visible = area.height >= MIN_HEIGHT_WITH_HEADER;
        let header_height = if self.header_visible {
            HEADER_HEIGHT
        } else {
            0
        };
        let error = self.state.tasks.error();
        let notice = self.state.notice.as_ref();

        let [header_area, banner_area, body_area, notice_area, status_area] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Length(u16::from(error.is_some())),
            Constraint::Min(0),
            Constraint::Length(u16::from(notice.is_some())),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        if self.header_visible {
            render_header(frame, header_area);
        }

        let [form_area, list_area] = Layout::horizontal([
            Constraint::Percentage(FORM_WIDTH_PERCENT),
            Constraint::Min(0),
        ])
        .areas(body_area);

        let focus = self.state.focus();
        let buf = frame.buffer_mut();
        if let Some(message) = error {
            render_error_banner(message, banner_area, buf);
        }
        render_form(&self.state.form, focus, form_area, buf);
        render_task_list(
            &self.state.tasks,
            self.state.selected,
            focus == Focus::List,
            list_area,
            buf,
        );
        if let Some(notice) = notice {
            render_notice(notice.text(), notice_area, buf);
        }
        render_status_bar(focus, status_area, buf);

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// Starts the initial load, then renders, polls input and applies
    /// finished requests until the user quits. Requests still in flight are
    /// aborted on the way out.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tasklet_client::{InMemoryGateway, TaskService};
    /// use tasklet_config::Config;
    /// use tasklet_tui::{App, terminal::TerminalGuard};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut guard = TerminalGuard::new()?;
    ///     let service = TaskService::new(InMemoryGateway::new());
    ///     let mut app = App::new(service, Config::default());
    ///     app.run(&mut guard).await?;
    ///     guard.restore()?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        if let Some(effect) = self.mount() {
            self.dispatch(effect);
        }

        loop {
            self.drain_completions();
            self.tick(Instant::now());

            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.state.focus())
            {
                self.handle(msg);
            }

            if self.should_quit {
                break;
            }
        }

        info!(aborted = self.pending.len(), "shutting down");
        self.pending.abort_all();
        Ok(())
    }
}

/// Renders the header bar with title and help cue.
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, help_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(18), // "Press F1 for help" = 17 chars + padding
    ])
    .areas(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "tasklet",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled("Recent Tasks", Style::default().fg(Color::White)),
    ]));
    frame.render_widget(title, title_area);

    let help_cue = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("F1", Style::default().fg(Color::Yellow)),
        Span::styled(" for help", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(help_cue, help_area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::state::TASK_ADDED;
    use crate::task_list::{COMPLETE_FAILED, CREATE_FAILED, LOAD_FAILED};
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};
    use tasklet_client::{Error, InMemoryGateway, Operation};
    use tasklet_protocol::dummy::dummy_tasks;
    use tasklet_protocol::{DraftField, NewTask, Task, TaskId};

    fn app() -> App {
        App::new(TaskService::new(InMemoryGateway::new()), Config::default())
    }

    /// An app that already shows the sample tasks.
    fn loaded_app() -> App {
        let mut app = app();
        let _ = app.mount();
        app.apply(Completion::Loaded(Ok(dummy_tasks())));
        app
    }

    fn unavailable() -> Error {
        Error::Unavailable("connection refused".to_string())
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            assert_eq!(app.update(Message::Input { ch }), None);
        }
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn mount_loads_once_with_configured_limit() {
        let config = Config {
            recent_limit: 3,
            ..Config::default()
        };
        let mut app = App::new(TaskService::new(InMemoryGateway::new()), config);

        assert_eq!(app.mount(), Some(Effect::LoadRecent { limit: 3 }));
        assert!(app.state().tasks.loading());
        assert_eq!(app.mount(), None);
    }

    #[test]
    fn failed_initial_load_sets_banner() {
        let mut app = app();
        let _ = app.mount();
        app.apply(Completion::Loaded(Err(unavailable())));

        assert!(!app.state().tasks.loading());
        assert_eq!(app.state().tasks.error(), Some(LOAD_FAILED));
        assert!(app.state().tasks.tasks().is_empty());
    }

    #[test]
    fn quit_message_sets_should_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        assert_eq!(app.update(Message::Quit), None);
        assert!(app.should_quit());
    }

    #[test]
    fn quit_works_with_help_visible() {
        let mut app = app();
        let _ = app.update(Message::ToggleHelp);
        assert!(app.state().help_visible);

        let _ = app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn help_dismisses_on_any_key_without_acting() {
        let mut app = app();
        let _ = app.update(Message::ToggleHelp);

        assert_eq!(app.update(Message::Input { ch: 'x' }), None);
        assert!(!app.state().help_visible);
        assert!(app.state().form.draft().is_empty());

        let _ = app.update(Message::ToggleHelp);
        let _ = app.update(Message::ToggleHelp);
        assert!(!app.state().help_visible);
    }

    #[test]
    fn typing_and_focus_cycling() {
        let mut app = app();
        type_text(&mut app, "Buy milk");
        let _ = app.update(Message::FocusNext);
        type_text(&mut app, "2 litres");
        let _ = app.update(Message::Newline);
        type_text(&mut app, "semi");

        let draft = app.state().form.draft();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description, "2 litres\nsemi");
        assert_eq!(app.state().form.field(), DraftField::Description);

        let _ = app.update(Message::FocusNext);
        assert_eq!(app.state().focus(), Focus::Submit);
        let _ = app.update(Message::FocusNext);
        assert_eq!(app.state().focus(), Focus::List);
        for _ in 0..3 {
            let _ = app.update(Message::FocusPrev);
        }
        assert_eq!(app.state().focus(), Focus::Title);
    }

    #[test]
    fn submit_control_sends_draft() {
        let mut app = loaded_app();
        type_text(&mut app, "Buy milk");
        app.state.set_focus(Focus::Submit);

        let _ = app.update(Message::Input { ch: 'x' });
        assert_eq!(app.state().form.draft().title, "Buy milk");

        assert_eq!(
            app.update(Message::Submit),
            Some(Effect::Create(NewTask::new("Buy milk", "")))
        );
        app.apply(Completion::Created(Ok(Task::new(9, "Buy milk", ""))));
        assert_eq!(app.state().focus(), Focus::Title);
    }

    #[test]
    fn edits_are_ignored_on_the_list() {
        let mut app = loaded_app();
        app.state.set_focus(Focus::List);
        let _ = app.update(Message::Input { ch: 'x' });
        let _ = app.update(Message::Newline);
        assert!(app.state().form.draft().is_empty());
    }

    #[test]
    fn blank_title_submits_nothing() {
        let mut app = app();
        type_text(&mut app, "   ");
        assert_eq!(app.update(Message::Submit), None);
        assert!(!app.state().form.submitting());
        assert!(!app.state().tasks.loading());
    }

    #[test]
    fn submit_sends_trimmed_task_once() {
        let mut app = loaded_app();
        type_text(&mut app, "  Buy milk ");

        assert_eq!(
            app.update(Message::Submit),
            Some(Effect::Create(NewTask::new("Buy milk", "")))
        );
        assert!(app.state().form.submitting());
        assert!(app.state().tasks.loading());

        assert_eq!(app.update(Message::Submit), None);
    }

    #[test]
    fn successful_creation_resets_form_and_shows_notice() {
        let mut app = loaded_app();
        type_text(&mut app, "Buy milk");
        let _ = app.update(Message::FocusNext);
        assert!(app.update(Message::Submit).is_some());

        app.apply(Completion::Created(Ok(Task::new(9, "Buy milk", ""))));

        let state = app.state();
        assert!(state.form.draft().is_empty());
        assert!(!state.form.submitting());
        assert_eq!(state.focus(), Focus::Title);
        assert_eq!(state.tasks.tasks()[0].id, TaskId::from(9));
        assert_eq!(state.notice.as_ref().map(|n| n.text()), Some(TASK_ADDED));
    }

    #[test]
    fn failed_creation_keeps_draft_and_shows_banner() {
        let mut app = loaded_app();
        type_text(&mut app, "Buy milk");
        let _ = app.update(Message::Submit);

        app.apply(Completion::Created(Err(unavailable())));

        let state = app.state();
        assert_eq!(state.form.draft().title, "Buy milk");
        assert!(!state.form.submitting());
        assert!(state.notice.is_none());
        assert_eq!(state.tasks.error(), Some(CREATE_FAILED));
        assert_eq!(state.tasks.tasks(), dummy_tasks().as_slice());
    }

    #[test]
    fn complete_selected_targets_selection_once() {
        let mut app = loaded_app();
        let _ = app.update(Message::FocusPrev);
        let _ = app.update(Message::NavigateDown);

        assert_eq!(
            app.update(Message::CompleteSelected),
            Some(Effect::Complete(TaskId::from(7)))
        );
        assert_eq!(app.update(Message::CompleteSelected), None);
    }

    #[test]
    fn completion_hides_task_and_keeps_selection_in_range() {
        let mut app = loaded_app();
        let _ = app.update(Message::FocusPrev);
        let _ = app.update(Message::NavigateUp);
        assert_eq!(app.state().selected_id(), Some(TaskId::from(2)));

        let _ = app.update(Message::CompleteSelected);
        app.apply(Completion::Completed {
            id: TaskId::from(2),
            result: Ok(None),
        });

        let visible: Vec<_> = app.state().tasks.visible().iter().map(|t| t.id.clone()).collect();
        // Task 1 moves up into the fifth slot.
        assert_eq!(visible, [8, 7, 5, 4, 1].map(TaskId::from));
        assert_eq!(app.state().selected, Some(4));
    }

    #[test]
    fn failed_completion_sets_banner_and_allows_retry() {
        let mut app = loaded_app();
        let _ = app.update(Message::FocusPrev);
        let _ = app.update(Message::CompleteSelected);

        app.apply(Completion::Completed {
            id: TaskId::from(8),
            result: Err(unavailable()),
        });

        assert_eq!(app.state().tasks.error(), Some(COMPLETE_FAILED));
        assert_eq!(app.state().tasks.visible().len(), 5);
        assert_eq!(
            app.update(Message::CompleteSelected),
            Some(Effect::Complete(TaskId::from(8)))
        );
    }

    #[test]
    fn failed_create_does_not_end_initial_load() {
        let mut app = app();
        let _ = app.mount();
        type_text(&mut app, "Buy milk");
        assert!(matches!(app.update(Message::Submit), Some(Effect::Create(_))));

        app.apply(Completion::Created(Err(unavailable())));

        assert!(app.state().tasks.fetching());
        assert_eq!(app.update(Message::Refresh), None);
        let screen = render(&mut app, 80, 24);
        assert!(screen.contains("Loading tasks..."));
        assert!(!screen.contains("No tasks yet!"));

        app.apply(Completion::Loaded(Ok(dummy_tasks())));
        assert_eq!(
            app.update(Message::Refresh),
            Some(Effect::LoadRecent { limit: 5 })
        );
    }

    #[test]
    fn refresh_is_ignored_while_loading() {
        let mut app = app();
        let _ = app.mount();
        assert_eq!(app.update(Message::Refresh), None);

        app.apply(Completion::Loaded(Ok(Vec::new())));
        assert_eq!(
            app.update(Message::Refresh),
            Some(Effect::LoadRecent { limit: 5 })
        );
    }

    #[test]
    fn escape_dismisses_banner_then_notice_then_leaves_list() {
        let mut app = loaded_app();
        app.state.set_focus(Focus::List);
        app.state.show_notice(Instant::now(), Duration::from_secs(3));
        app.apply(Completion::Loaded(Err(unavailable())));

        let _ = app.update(Message::Escape);
        assert!(app.state().tasks.error().is_none());
        assert!(app.state().notice.is_some());

        let _ = app.update(Message::Escape);
        assert!(app.state().notice.is_none());
        assert_eq!(app.state().focus(), Focus::List);

        let _ = app.update(Message::Escape);
        assert_eq!(app.state().focus(), Focus::Title);
        assert!(!app.should_quit());
    }

    #[test]
    fn notice_expires_on_tick() {
        let mut app = loaded_app();
        let start = Instant::now();
        type_text(&mut app, "a");
        let _ = app.update(Message::Submit);
        app.apply_at(Completion::Created(Ok(Task::new(9, "a", ""))), start);

        app.tick(start + Duration::from_secs(2));
        assert!(app.state().notice.is_some());
        app.tick(start + Duration::from_secs(3));
        assert!(app.state().notice.is_none());
    }

    #[tokio::test]
    async fn dispatched_effects_come_back_through_apply() {
        let gateway = Arc::new(InMemoryGateway::with_tasks(dummy_tasks()));
        let mut app = App::new(TaskService::from_shared(gateway.clone()), Config::default());

        let effect = app.mount().expect("initial load");
        app.dispatch(effect);
        app.wait_for_pending().await;

        assert!(!app.state().tasks.loading());
        // The server lists incomplete tasks only.
        assert_eq!(app.state().tasks.tasks().len(), 5);
        assert_eq!(gateway.calls().recent, 1);
        assert_eq!(app.pending(), 0);
    }

    #[tokio::test]
    async fn handle_runs_requests_in_background() {
        let gateway = Arc::new(InMemoryGateway::new());
        gateway.fail(Operation::Create);
        let mut app = App::new(TaskService::from_shared(gateway.clone()), Config::default());

        type_text(&mut app, "Buy milk");
        app.handle(Message::Submit);
        assert!(app.state().form.submitting());
        app.wait_for_pending().await;

        assert_eq!(app.state().tasks.error(), Some(CREATE_FAILED));
        assert_eq!(app.state().form.draft().title, "Buy milk");
        assert_eq!(gateway.calls().create, 1);
    }

    #[tokio::test]
    async fn quit_aborts_requests_in_flight() {
        let mut app = app();
        let effect = app.mount().expect("initial load");
        app.dispatch(effect);

        let _ = app.update(Message::Quit);
        app.wait_for_pending().await;

        assert!(app.should_quit());
        assert_eq!(app.pending(), 0);
    }

    // --- Rendering ---

    #[test]
    fn view_shows_too_small_message_when_height_below_minimum() {
        let mut app = app();
        let content = render(&mut app, 80, MIN_HEIGHT - 1);

        assert!(!app.header_visible);
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn view_shows_too_small_message_when_width_below_minimum() {
        let mut app = app();
        let content = render(&mut app, MIN_WIDTH - 1, 24);

        assert!(!app.header_visible);
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn view_hides_header_in_compact_mode() {
        let mut app = loaded_app();
        let content = render(&mut app, 80, MIN_HEIGHT);

        assert!(!app.header_visible);
        assert!(content.contains("New Task"));
        assert!(content.contains("Recent Tasks"));
    }

    #[test]
    fn view_shows_header_form_and_list() {
        let mut app = loaded_app();
        let content = render(&mut app, 80, 24);

        assert!(app.header_visible);
        assert!(content.contains("tasklet - Recent Tasks"));
        assert!(content.contains("Press F1 for help"));
        assert!(content.contains("New Task"));
        assert!(content.contains("Book dentist appointment"));
        assert!(!content.contains("Water the plants"));
    }

    #[test]
    fn view_shows_loading_then_empty_state() {
        let mut app = app();
        let _ = app.mount();
        assert!(render(&mut app, 80, 24).contains("Loading tasks..."));

        app.apply(Completion::Loaded(Ok(Vec::new())));
        assert!(render(&mut app, 80, 24).contains("No tasks yet!"));
    }

    #[test]
    fn view_shows_banner_and_notice() {
        let mut app = loaded_app();
        app.apply(Completion::Loaded(Err(unavailable())));
        app.state.show_notice(Instant::now(), Duration::from_secs(3));

        let content = render(&mut app, 80, 24);
        assert!(content.contains(LOAD_FAILED));
        assert!(content.contains(TASK_ADDED));
    }

    #[test]
    fn view_renders_help_overlay() {
        let mut app = app();
        let _ = app.update(Message::ToggleHelp);

        let content = render(&mut app, 80, 24);
        assert!(content.contains("Press any key to close"));
    }
}
