use crate::notify::Toasts;
use crate::types::Entry;

mod delete;
mod form;
mod list;
mod state;
pub use delete::DeleteConfirm;
pub use form::{DialogMode, EntryForm, FormField, SubmitRequest};
pub use list::EntryList;
pub use state::{TextInput, View};

pub struct App {
    pub running: bool,

    // Controllers
    pub list: EntryList,
    pub form: EntryForm,
    pub delete: DeleteConfirm,
    pub toasts: Toasts,

    // List navigation
    pub focused_index: Option<usize>,
    pub list_scroll: usize,
    pub list_view_height: usize, // Last-rendered inner height (updated by renderer each frame)

    // Loading indicator
    pub throbber_state: throbber_widgets_tui::ThrobberState,

    /// Where records come from, shown in the header.
    pub source_label: String,
}

impl App {
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            running: true,
            list: EntryList::new(),
            form: EntryForm::new(),
            delete: DeleteConfirm::new(),
            toasts: Toasts::new(),
            focused_index: None,
            list_scroll: 0,
            list_view_height: 0,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            source_label: source_label.into(),
        }
    }

    /// The view is derived from which dialog, if any, is open.
    pub fn current_view(&self) -> View {
        if self.delete.is_open() {
            View::ConfirmDelete
        } else if self.form.is_open() {
            View::EntryForm
        } else {
            View::List
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn focused_entry(&self) -> Option<&Entry> {
        self.focused_index.and_then(|i| self.list.entries().get(i))
    }

    pub fn select_next(&mut self) {
        let len = self.list.len();
        if len == 0 {
            self.focused_index = None;
            return;
        }
        self.focused_index = Some(match self.focused_index {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.list.is_empty() {
            self.focused_index = None;
            return;
        }
        self.focused_index = Some(self.focused_index.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Jump a screenful using the height of the last rendered frame.
    pub fn page(&mut self, down: bool) {
        let step = self.list_view_height.max(1);
        for _ in 0..step {
            if down {
                self.select_next();
            } else {
                self.select_previous();
            }
        }
    }

    /// Keep the cursor on a real row after the collection was replaced.
    pub fn clamp_focus(&mut self) {
        let len = self.list.len();
        self.focused_index = match self.focused_index {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
    }

    pub fn edit_focused(&mut self) {
        if let Some(id) = self.focused_entry().map(|e| e.id.clone()) {
            self.form.open_for_edit(&id, &self.list, &mut self.toasts);
        }
    }

    pub fn request_delete_focused(&mut self) {
        if let Some(id) = self.focused_entry().map(|e| e.id.clone()) {
            self.delete.request_delete(id);
        }
    }
}
