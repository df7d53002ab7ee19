//! Add/edit form for the terminal user interface.
//!
//! This module provides the `TaskForm` structure holding the two text
//! fields, the field focus, and the explicit add/edit mode the submit
//! action dispatches on.

use crate::task::Task;
use crate::tui::input::InputField;

/// Global order constants for the form fields.
pub const NAME_FIELD: usize = 0;
pub const DESCRIPTION_FIELD: usize = 1;
pub const FIELD_COUNT: usize = 2;

/// What a submitted form applies to.
///
/// The mode is tagged explicitly rather than inferred from an absent task,
/// so add mode survives whatever values task ids may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submit appends a new task.
    Adding,
    /// Submit overwrites the name and description of the task with this id.
    Editing(u64),
}

/// Task form for entering a name and description.
pub struct TaskForm {
    pub name: InputField,
    pub description: InputField,
    pub mode: FormMode,
    pub current_field: usize,
}

impl TaskForm {
    /// Create an empty form in add mode with the name field focused.
    pub fn new() -> Self {
        let mut form = Self {
            name: InputField::new(),
            description: InputField::new(),
            mode: FormMode::Adding,
            current_field: NAME_FIELD,
        };
        form.update_active_field();
        form
    }

    /// Create a form pre-populated from an existing task, in edit mode.
    pub fn from_task(task: &Task) -> Self {
        let mut form = Self {
            name: InputField::with_value(&task.name),
            description: InputField::with_value(&task.description),
            mode: FormMode::Editing(task.id),
            current_field: NAME_FIELD,
        };
        form.update_active_field();
        form
    }

    /// Move focus to the next field.
    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % FIELD_COUNT;
        self.update_active_field();
    }

    /// Move focus to the previous field.
    pub fn prev_field(&mut self) {
        self.current_field = if self.current_field == 0 {
            FIELD_COUNT - 1
        } else {
            self.current_field - 1
        };
        self.update_active_field();
    }

    /// Update which field is currently active for editing.
    fn update_active_field(&mut self) {
        self.name.active = self.current_field == NAME_FIELD;
        self.description.active = self.current_field == DESCRIPTION_FIELD;
    }

    fn active_field_mut(&mut self) -> &mut InputField {
        match self.current_field {
            NAME_FIELD => &mut self.name,
            _ => &mut self.description,
        }
    }

    /// Handle character input for the currently focused field.
    pub fn handle_char(&mut self, c: char) {
        self.active_field_mut().handle_char(c);
    }

    /// Handle backspace for the currently focused field.
    pub fn handle_backspace(&mut self) {
        self.active_field_mut().handle_backspace();
    }

    /// Handle delete for the currently focused field.
    pub fn handle_delete(&mut self) {
        self.active_field_mut().handle_delete();
    }

    /// Handle left/right arrow keys for cursor movement.
    pub fn handle_left_right(&mut self, right: bool) {
        let field = self.active_field_mut();
        if right {
            field.move_cursor_right();
        } else {
            field.move_cursor_left();
        }
    }

    /// Check the single validation rule: both fields must be non-blank.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.is_blank() || self.description.is_blank() {
            Err("Both fields are required!")
        } else {
            Ok(())
        }
    }

    /// Reset to an empty add-mode form with the name field focused.
    pub fn clear(&mut self) {
        self.name.clear();
        self.description.clear();
        self.mode = FormMode::Adding;
        self.current_field = NAME_FIELD;
        self.update_active_field();
    }

    /// Label for the submit action, reflecting the current mode.
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Adding => "Add Task",
            FormMode::Editing(_) => "Update Task",
        }
    }
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}
