use crate::api::EntryGateway;
use crate::app::list::EntryList;
use crate::app::state::{InputKind, TextInput};
use crate::notify::{Notification, Notifier};
use crate::types::{Entry, EntryId, NewEntry};
use crate::validation::{validate, FieldErrors, FormValues};

pub const TARGET_NOT_FOUND: &str = "That record no longer exists";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit(EntryId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Time,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormFields {
    pub title: TextInput,
    pub time: TextInput,
    pub focused: FormField,
}

impl FormFields {
    fn blank() -> Self {
        Self {
            title: TextInput::new(InputKind::Text),
            time: TextInput::with_value(InputKind::Integer, "0"),
            focused: FormField::Title,
        }
    }

    fn from_entry(entry: &Entry) -> Self {
        Self {
            title: TextInput::with_value(InputKind::Text, &entry.title),
            time: TextInput::with_value(InputKind::Integer, &entry.time.to_string()),
            focused: FormField::Title,
        }
    }

    pub fn values(&self) -> FormValues {
        FormValues {
            title: self.title.value.clone(),
            time: self.time.value.clone(),
        }
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focused {
            FormField::Title => &mut self.title,
            FormField::Time => &mut self.time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct FormSession {
    mode: DialogMode,
    fields: FormFields,
    errors: FieldErrors,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum FormDialog {
    #[default]
    Closed,
    Open(FormSession),
    Submitting(FormSession),
}

/// A validated write waiting to be sent to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRequest {
    Create(NewEntry),
    Update(Entry),
}

impl SubmitRequest {
    fn success_message(&self) -> &'static str {
        match self {
            Self::Create(_) => "Study record added",
            Self::Update(_) => "Study record updated",
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            Self::Create(_) => "Could not add study record",
            Self::Update(_) => "Could not update study record",
        }
    }
}

/// Create/edit dialog: `Closed -> Open -> Submitting -> Closed`.
#[derive(Debug, Default)]
pub struct EntryForm {
    dialog: FormDialog,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.dialog, FormDialog::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.dialog, FormDialog::Submitting(_))
    }

    fn session(&self) -> Option<&FormSession> {
        match &self.dialog {
            FormDialog::Closed => None,
            FormDialog::Open(session) | FormDialog::Submitting(session) => Some(session),
        }
    }

    fn editable_session(&mut self) -> Option<&mut FormSession> {
        match &mut self.dialog {
            FormDialog::Open(session) => Some(session),
            _ => None,
        }
    }

    pub fn mode(&self) -> Option<&DialogMode> {
        self.session().map(|s| &s.mode)
    }

    pub fn fields(&self) -> Option<&FormFields> {
        self.session().map(|s| &s.fields)
    }

    pub fn errors(&self) -> FieldErrors {
        self.session().map(|s| s.errors).unwrap_or_default()
    }

    pub fn open_for_create(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.dialog = FormDialog::Open(FormSession {
            mode: DialogMode::Create,
            fields: FormFields::blank(),
            errors: FieldErrors::default(),
        });
    }

    /// Open pre-filled from the local copy of `id`. Returns whether the dialog opened.
    pub fn open_for_edit(
        &mut self,
        id: &EntryId,
        list: &EntryList,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if self.is_submitting() {
            return false;
        }
        let Some(entry) = list.find(id) else {
            tracing::warn!(%id, "edit requested for unknown record");
            notifier.notify(Notification::warning(TARGET_NOT_FOUND));
            return false;
        };
        self.dialog = FormDialog::Open(FormSession {
            mode: DialogMode::Edit(entry.id.clone()),
            fields: FormFields::from_entry(entry),
            errors: FieldErrors::default(),
        });
        true
    }

    pub fn cancel(&mut self) {
        if let FormDialog::Open(_) = self.dialog {
            self.dialog = FormDialog::Closed;
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(session) = self.editable_session() {
            session.fields.focused_input().insert(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(session) = self.editable_session() {
            session.fields.focused_input().backspace();
        }
    }

    pub fn move_cursor(&mut self, left: bool) {
        if let Some(session) = self.editable_session() {
            let input = session.fields.focused_input();
            if left {
                input.move_left();
            } else {
                input.move_right();
            }
        }
    }

    pub fn cursor_home_end(&mut self, home: bool) {
        if let Some(session) = self.editable_session() {
            let input = session.fields.focused_input();
            if home {
                input.home();
            } else {
                input.end();
            }
        }
    }

    /// With two fields, next and previous are the same move.
    pub fn toggle_field(&mut self) {
        if let Some(session) = self.editable_session() {
            session.fields.focused = match session.fields.focused {
                FormField::Title => FormField::Time,
                FormField::Time => FormField::Title,
            };
        }
    }

    /// Validate the open dialog. Invalid input stays open with field errors;
    /// valid input moves to submitting and yields the write to perform.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        let session = match std::mem::take(&mut self.dialog) {
            FormDialog::Open(session) => session,
            other => {
                self.dialog = other;
                return None;
            }
        };

        match validate(&session.fields.values()) {
            Err(errors) => {
                tracing::debug!(?errors, "form rejected");
                self.dialog = FormDialog::Open(FormSession { errors, ..session });
                None
            }
            Ok(NewEntry { title, time }) => {
                let request = match &session.mode {
                    DialogMode::Create => SubmitRequest::Create(NewEntry { title, time }),
                    DialogMode::Edit(id) => SubmitRequest::Update(Entry {
                        id: id.clone(),
                        title,
                        time,
                        created_at: None,
                    }),
                };
                self.dialog = FormDialog::Submitting(FormSession {
                    errors: FieldErrors::default(),
                    ..session
                });
                Some(request)
            }
        }
    }

    /// Send `request`, report the outcome, close the dialog and re-fetch the list.
    pub async fn complete_submit<G>(
        &mut self,
        request: SubmitRequest,
        gateway: &G,
        list: &mut EntryList,
        notifier: &mut dyn Notifier,
    ) where
        G: EntryGateway + ?Sized,
    {
        let result = match &request {
            SubmitRequest::Create(entry) => gateway.create(entry).await,
            SubmitRequest::Update(entry) => gateway.update(entry).await,
        };
        match result {
            Ok(()) => notifier.notify(Notification::success(request.success_message())),
            Err(err) => {
                tracing::error!("Failed to save record: {}", err);
                notifier.notify(Notification::error(request.failure_message()));
            }
        }
        self.dialog = FormDialog::Closed;
        list.refresh(gateway, notifier).await;
    }

    /// Both phases back to back. The event loop runs them on separate frames instead.
    #[cfg(test)]
    pub async fn submit<G>(
        &mut self,
        gateway: &G,
        list: &mut EntryList,
        notifier: &mut dyn Notifier,
    ) where
        G: EntryGateway + ?Sized,
    {
        if let Some(request) = self.begin_submit() {
            self.complete_submit(request, gateway, list, notifier).await;
        }
    }
}
