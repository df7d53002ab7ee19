//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the task collection,
//! handles user input, renders the interface, and mirrors every mutation
//! to the storage backend.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};

use crate::store::{Storage, TaskStore};
use crate::task::Task;
use crate::tui::{
    colors::{DARK_AMBER, DARK_RED, MOSS_GREEN},
    task_form::{FormMode, TaskForm},
    utils::{centered_rect, truncate},
};

/// Screens of the terminal user interface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppState {
    TaskList,
    TaskForm,
    ConfirmDelete,
    Alert,
    Help,
}

/// Main application state for the terminal user interface.
///
/// Holds the single source of truth (the task store) and the per-screen
/// UI state. Every successful mutation is followed by a flush through the
/// storage backend.
pub struct App<S: Storage> {
    state: AppState,
    store: TaskStore,
    storage: S,
    task_list_state: TableState,
    form: TaskForm,
    status_message: String,
    pending_delete: Option<u64>,
    alert_message: String,
}

impl<S: Storage> App<S> {
    /// Create a new App, reading the persisted collection once at startup.
    pub fn new(storage: S) -> Self {
        let store = TaskStore::new(storage.load());
        let mut task_list_state = TableState::default();
        if !store.is_empty() {
            task_list_state.select(Some(0));
        }
        App {
            state: AppState::TaskList,
            store,
            storage,
            task_list_state,
            form: TaskForm::new(),
            status_message: String::new(),
            pending_delete: None,
            alert_message: String::new(),
        }
    }

    /// Flush the collection to storage. Runs after every successful mutation.
    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.store.tasks) {
            self.set_status_message(format!("Failed to save tasks: {e}"));
        }
    }

    /// Id of the task under the selection cursor, if any.
    fn selected_id(&self) -> Option<u64> {
        self.task_list_state
            .selected()
            .and_then(|idx| self.store.tasks.get(idx))
            .map(|t| t.id)
    }

    /// Keep the selection on the same task id where possible, clamping to
    /// the last row after a removal.
    fn restore_selection(&mut self, old_id: Option<u64>) {
        if self.store.is_empty() {
            self.task_list_state.select(None);
            return;
        }
        let idx = old_id
            .and_then(|id| self.store.tasks.iter().position(|t| t.id == id))
            .or_else(|| {
                self.task_list_state
                    .selected()
                    .map(|i| i.min(self.store.len() - 1))
            })
            .unwrap_or(0);
        self.task_list_state.select(Some(idx));
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Handle keyboard input when in the task list view.
    ///
    /// Returns true if the application should quit.
    fn handle_task_list_input(&mut self, key: KeyCode, _modifiers: KeyModifiers) -> io::Result<bool> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('a') => {
                self.form = TaskForm::new();
                self.state = AppState::TaskForm;
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    if let Some(task) = self.store.get(id) {
                        self.form = TaskForm::from_task(task);
                        self.state = AppState::TaskForm;
                    }
                }
            }
            KeyCode::Char('t') | KeyCode::Char(' ') => {
                if let Some(id) = self.selected_id() {
                    if self.store.toggle(id) {
                        self.persist();
                        let done = self.store.get(id).map(|t| t.completed).unwrap_or(false);
                        self.set_status_message(
                            if done {
                                "Marked completed"
                            } else {
                                "Marked active"
                            }
                            .to_string(),
                        );
                    }
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    self.pending_delete = Some(id);
                    self.state = AppState::ConfirmDelete;
                }
            }
            KeyCode::Char('h') => {
                self.state = AppState::Help;
            }
            KeyCode::Up => {
                if let Some(sel) = self.task_list_state.selected() {
                    if sel > 0 {
                        self.task_list_state.select(Some(sel - 1));
                    }
                }
            }
            KeyCode::Down => {
                if let Some(sel) = self.task_list_state.selected() {
                    if sel + 1 < self.store.len() {
                        self.task_list_state.select(Some(sel + 1));
                    }
                } else if !self.store.is_empty() {
                    self.task_list_state.select(Some(0));
                }
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handle keyboard input when the add/edit form is open.
    fn handle_form_input(&mut self, key: KeyCode, _modifiers: KeyModifiers) -> io::Result<bool> {
        match key {
            KeyCode::Esc => {
                self.form.clear();
                self.state = AppState::TaskList;
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Left => self.form.handle_left_right(false),
            KeyCode::Right => self.form.handle_left_right(true),
            KeyCode::Backspace => self.form.handle_backspace(),
            KeyCode::Delete => self.form.handle_delete(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Char(c) => self.form.handle_char(c),
            _ => {}
        }
        Ok(false)
    }

    /// Validate and apply the form: append in add mode, overwrite the
    /// matching task's text fields in edit mode. A validation failure
    /// raises the blocking alert and leaves the collection untouched.
    fn submit_form(&mut self) {
        if let Err(msg) = self.form.validate() {
            self.alert_message = msg.to_string();
            self.state = AppState::Alert;
            return;
        }

        let name = self.form.name.value.clone();
        let description = self.form.description.value.clone();
        match self.form.mode {
            FormMode::Adding => {
                let id = self.store.add(&name, &description);
                self.persist();
                self.form.clear();
                self.restore_selection(Some(id));
                self.set_status_message("Task added".to_string());
            }
            FormMode::Editing(id) => {
                if self.store.update(id, &name, &description) {
                    self.persist();
                    self.set_status_message("Task updated".to_string());
                } else {
                    self.set_status_message(format!("Task #{id} no longer exists"));
                }
                self.form.clear();
            }
        }
        self.state = AppState::TaskList;
    }

    /// Handle the delete confirmation prompt.
    fn handle_confirm_input(&mut self, key: KeyCode, _modifiers: KeyModifiers) -> io::Result<bool> {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                if let Some(id) = self.pending_delete.take() {
                    if self.store.remove(id) {
                        self.persist();
                        self.restore_selection(None);
                        self.set_status_message("Task deleted".to_string());
                    }
                }
                self.state = AppState::TaskList;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.pending_delete = None;
                self.state = AppState::TaskList;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Dismiss the validation alert and return to the form, fields intact.
    fn handle_alert_input(&mut self, key: KeyCode, _modifiers: KeyModifiers) -> io::Result<bool> {
        match key {
            KeyCode::Enter | KeyCode::Esc => {
                self.alert_message.clear();
                self.state = AppState::TaskForm;
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_help_input(&mut self, _key: KeyCode, _modifiers: KeyModifiers) -> io::Result<bool> {
        self.state = AppState::TaskList;
        Ok(false)
    }

    /// Poll for a key event and dispatch it to the active screen's handler.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.clear_status_message();

                let should_quit = match self.state {
                    AppState::TaskList => self.handle_task_list_input(key.code, key.modifiers)?,
                    AppState::TaskForm => self.handle_form_input(key.code, key.modifiers)?,
                    AppState::ConfirmDelete => self.handle_confirm_input(key.code, key.modifiers)?,
                    AppState::Alert => self.handle_alert_input(key.code, key.modifiers)?,
                    AppState::Help => self.handle_help_input(key.code, key.modifiers)?,
                };
                if should_quit {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Render one task as a table row.
    fn task_row(task: &Task) -> Row<'_> {
        let marker = if task.completed { "[x]" } else { "[ ]" };
        let name_style = if task.completed {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
        };
        Row::new(vec![
            Span::styled(marker, Style::default().fg(MOSS_GREEN)),
            Span::styled(task.name.as_str(), name_style),
            Span::styled(
                truncate(&task.description, 60),
                Style::default().fg(Color::Gray),
            ),
        ])
    }

    /// Render the main task list view.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let header_text = vec![Line::from(vec![
            Span::styled("TO-DO LIST", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                format!("{} task(s)", self.store.len()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ])];
        let header = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        let rows: Vec<Row> = self.store.tasks.iter().map(Self::task_row).collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Percentage(35),
                Constraint::Percentage(65),
            ],
        )
        .header(
            Row::new(vec!["", "Name", "Description"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title("Tasks"))
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White));

        f.render_stateful_widget(table, chunks[1], &mut self.task_list_state);
    }

    /// Render one input field as a bordered single-line box, placing the
    /// terminal cursor when the field is focused.
    fn render_input_field(
        f: &mut Frame,
        area: Rect,
        title: &str,
        field: &crate::tui::input::InputField,
    ) {
        let border_style = if field.active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let widget = Paragraph::new(field.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        );
        f.render_widget(widget, area);
        if field.active {
            let col = field.value[..field.cursor].chars().count() as u16;
            f.set_cursor_position((area.x + 1 + col, area.y + 1));
        }
    }

    /// Render the add/edit form.
    fn render_task_form(&mut self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(60, 50, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.form.submit_label());
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(inner);

        Self::render_input_field(f, chunks[0], "Task Name", &self.form.name);
        Self::render_input_field(f, chunks[1], "Task Description", &self.form.description);

        let hint = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(": {}  ", self.form.submit_label())),
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": next field  "),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": cancel"),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(hint, chunks[2]);
    }

    /// Render the delete confirmation popup over the task list.
    fn render_confirm(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Confirm Delete")
            .borders(Borders::ALL)
            .style(Style::default().bg(DARK_RED));

        let area = centered_rect(50, 25, area);
        f.render_widget(Clear, area);

        let name = self
            .pending_delete
            .and_then(|id| self.store.get(id))
            .map(|t| truncate(&t.name, 40))
            .unwrap_or_default();

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Are you sure you want to delete this task?",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(name),
            Line::from(""),
            Line::from("This action cannot be undone."),
            Line::from(""),
            Line::from("Press 'y' to confirm, 'n' to cancel"),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, area);
    }

    /// Render the blocking validation alert over the form.
    fn render_alert(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Invalid Input")
            .borders(Borders::ALL)
            .style(Style::default().bg(DARK_AMBER));

        let area = centered_rect(40, 20, area);
        f.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                self.alert_message.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("Press Enter to continue"),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, area);
    }

    /// Render the help screen.
    fn render_help(&mut self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(""),
            Line::from("  a          Add a new task"),
            Line::from("  e / Enter  Edit the selected task"),
            Line::from("  t / Space  Toggle completed"),
            Line::from("  d          Delete the selected task (asks first)"),
            Line::from("  Up / Down  Move the selection"),
            Line::from("  h          This help"),
            Line::from("  q / Esc    Quit"),
            Line::from(""),
            Line::from("  Press any key to return."),
        ];
        let paragraph =
            Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Help"));
        f.render_widget(paragraph, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::TaskList => {
                    format!("Tasks: {} | Press 'h' for help", self.store.len())
                }
                AppState::TaskForm => match self.form.mode {
                    FormMode::Adding => "Add New Task".to_string(),
                    FormMode::Editing(id) => format!("Edit Task #{id}"),
                },
                AppState::ConfirmDelete => "Confirm Delete".to_string(),
                AppState::Alert => "Invalid Input".to_string(),
                AppState::Help => "Help".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(Color::Blue).fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(status, area);
    }

    /// Main render function that dispatches to the active screen.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        match self.state {
            AppState::TaskList => self.render_task_list(f, chunks[0]),
            AppState::TaskForm => {
                self.render_task_list(f, chunks[0]);
                self.render_task_form(f, chunks[0]);
            }
            AppState::ConfirmDelete => {
                self.render_task_list(f, chunks[0]);
                self.render_confirm(f, chunks[0]);
            }
            AppState::Alert => {
                self.render_task_list(f, chunks[0]);
                self.render_task_form(f, chunks[0]);
                self.render_alert(f, chunks[0]);
            }
            AppState::Help => self.render_help(f, chunks[0]),
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Storage stub that keeps the persisted collection in memory.
    struct MemoryStorage {
        saved: RefCell<Vec<Task>>,
    }

    impl MemoryStorage {
        fn new(tasks: Vec<Task>) -> Self {
            Self {
                saved: RefCell::new(tasks),
            }
        }
    }

    impl Storage for MemoryStorage {
        fn load(&self) -> Vec<Task> {
            self.saved.borrow().clone()
        }

        fn save(&self, tasks: &[Task]) -> io::Result<()> {
            *self.saved.borrow_mut() = tasks.to_vec();
            Ok(())
        }
    }

    fn new_app() -> App<MemoryStorage> {
        App::new(MemoryStorage::new(Vec::new()))
    }

    fn type_text(app: &mut App<MemoryStorage>, text: &str) {
        for c in text.chars() {
            app.handle_form_input(KeyCode::Char(c), KeyModifiers::NONE)
                .unwrap();
        }
    }

    fn add_task(app: &mut App<MemoryStorage>, name: &str, description: &str) -> u64 {
        app.handle_task_list_input(KeyCode::Char('a'), KeyModifiers::NONE)
            .unwrap();
        type_text(app, name);
        app.handle_form_input(KeyCode::Tab, KeyModifiers::NONE).unwrap();
        type_text(app, description);
        app.handle_form_input(KeyCode::Enter, KeyModifiers::NONE)
            .unwrap();
        app.store.tasks.last().map(|t| t.id).unwrap_or(0)
    }

    #[test]
    fn test_add_flow_creates_task_and_clears_form() {
        let mut app = new_app();
        add_task(&mut app, "A", "B");

        assert_eq!(app.store.len(), 1);
        let task = &app.store.tasks[0];
        assert_eq!(task.name, "A");
        assert_eq!(task.description, "B");
        assert!(!task.completed);
        assert_eq!(app.state, AppState::TaskList);
        assert!(app.form.name.value.is_empty());
        assert!(app.form.description.value.is_empty());
        // Mutation reached the backend.
        assert_eq!(app.storage.load().len(), 1);
    }

    #[test]
    fn test_empty_field_raises_alert_and_creates_nothing() {
        let mut app = new_app();
        app.handle_task_list_input(KeyCode::Char('a'), KeyModifiers::NONE)
            .unwrap();
        type_text(&mut app, "only a name");
        app.handle_form_input(KeyCode::Enter, KeyModifiers::NONE)
            .unwrap();

        assert_eq!(app.state, AppState::Alert);
        assert!(app.store.is_empty());

        // Dismissing returns to the form with the fields intact.
        app.handle_alert_input(KeyCode::Enter, KeyModifiers::NONE)
            .unwrap();
        assert_eq!(app.state, AppState::TaskForm);
        assert_eq!(app.form.name.value, "only a name");
    }

    #[test]
    fn test_toggle_round_trips_through_ui() {
        let mut app = new_app();
        let id = add_task(&mut app, "A", "B");

        app.handle_task_list_input(KeyCode::Char('t'), KeyModifiers::NONE)
            .unwrap();
        assert!(app.store.get(id).unwrap().completed);
        assert!(app.storage.load()[0].completed);

        app.handle_task_list_input(KeyCode::Char('t'), KeyModifiers::NONE)
            .unwrap();
        let task = app.store.get(id).unwrap();
        assert!(!task.completed);
        assert_eq!(task.name, "A");
        assert_eq!(task.description, "B");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = new_app();
        let first = add_task(&mut app, "keep", "me");
        let second = add_task(&mut app, "drop", "me");

        // Select the second task and decline.
        app.handle_task_list_input(KeyCode::Down, KeyModifiers::NONE)
            .unwrap();
        app.handle_task_list_input(KeyCode::Char('d'), KeyModifiers::NONE)
            .unwrap();
        assert_eq!(app.state, AppState::ConfirmDelete);
        app.handle_confirm_input(KeyCode::Char('n'), KeyModifiers::NONE)
            .unwrap();
        assert_eq!(app.store.len(), 2);

        // Confirm this time; exactly that id goes.
        app.handle_task_list_input(KeyCode::Char('d'), KeyModifiers::NONE)
            .unwrap();
        app.handle_confirm_input(KeyCode::Char('y'), KeyModifiers::NONE)
            .unwrap();
        let remaining: Vec<u64> = app.store.tasks.iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![first]);
        assert!(!remaining.contains(&second));
        assert_eq!(app.storage.load().len(), 1);
    }

    #[test]
    fn test_edit_preserves_id_and_completion() {
        let mut app = new_app();
        let id = add_task(&mut app, "old", "text");
        app.handle_task_list_input(KeyCode::Char('t'), KeyModifiers::NONE)
            .unwrap();

        app.handle_task_list_input(KeyCode::Char('e'), KeyModifiers::NONE)
            .unwrap();
        assert_eq!(app.form.mode, FormMode::Editing(id));
        assert_eq!(app.form.name.value, "old");

        // Rewrite the name field entirely.
        for _ in 0.."old".len() {
            app.handle_form_input(KeyCode::Backspace, KeyModifiers::NONE)
                .unwrap();
        }
        type_text(&mut app, "new");
        app.handle_form_input(KeyCode::Enter, KeyModifiers::NONE)
            .unwrap();

        let task = app.store.get(id).unwrap();
        assert_eq!(task.name, "new");
        assert_eq!(task.description, "text");
        assert!(task.completed);
        // Form returned to add mode.
        assert_eq!(app.form.mode, FormMode::Adding);
        assert_eq!(app.state, AppState::TaskList);
    }

    #[test]
    fn test_cancel_edit_resets_form() {
        let mut app = new_app();
        add_task(&mut app, "A", "B");
        app.handle_task_list_input(KeyCode::Char('e'), KeyModifiers::NONE)
            .unwrap();
        app.handle_form_input(KeyCode::Esc, KeyModifiers::NONE)
            .unwrap();
        assert_eq!(app.state, AppState::TaskList);
        assert_eq!(app.form.mode, FormMode::Adding);
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_startup_loads_persisted_collection() {
        let tasks = vec![
            Task {
                id: 1,
                name: "A".into(),
                description: "B".into(),
                completed: true,
            },
            Task {
                id: 2,
                name: "C".into(),
                description: "D".into(),
                completed: false,
            },
        ];
        let app = App::new(MemoryStorage::new(tasks.clone()));
        assert_eq!(app.store.tasks, tasks);
        assert_eq!(app.task_list_state.selected(), Some(0));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut app = new_app();
        add_task(&mut app, "first", "x");
        add_task(&mut app, "second", "x");
        add_task(&mut app, "third", "x");
        let names: Vec<&str> = app.store.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_selection_clamps_after_deleting_last_row() {
        let mut app = new_app();
        add_task(&mut app, "a", "x");
        add_task(&mut app, "b", "x");
        app.handle_task_list_input(KeyCode::Down, KeyModifiers::NONE)
            .unwrap();
        assert_eq!(app.task_list_state.selected(), Some(1));

        app.handle_task_list_input(KeyCode::Char('d'), KeyModifiers::NONE)
            .unwrap();
        app.handle_confirm_input(KeyCode::Enter, KeyModifiers::NONE)
            .unwrap();
        assert_eq!(app.task_list_state.selected(), Some(0));
    }
}
