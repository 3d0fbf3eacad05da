//! Application state and key handling

use crate::config::WizardConfig;
use crate::state::{
    Attachment, AttachmentSlot, EditAction, EditOutcome, FieldFocus, FieldValue, FormField,
    SectionKey, SectionRecord, SECTION_COUNT,
};
use crate::submission::{StorageBackend, StoreClient, SubmissionAdapter};
use crate::wizard::{Notice, NoticeLevel, SubmitOutcome, WizardController};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use futures::{Stream, StreamExt};
use std::collections::VecDeque;
use std::path::Path;

/// Path prompt opened on a file slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePrompt {
    pub slot: AttachmentSlot,
    /// Index of the slot's field in the current editor
    pub field_index: usize,
    pub input: String,
}

/// Main application struct
pub struct App<B = StoreClient> {
    pub controller: WizardController<B>,
    /// Focused control; on the last section one extra position holds the confirmation checkbox
    pub focus: FieldFocus,
    pub prompt: Option<FilePrompt>,
    /// Errors waiting to be shown, oldest first
    pub errors: VecDeque<String>,
    /// Latest success or warning message for the status bar
    pub status: Option<Notice>,
    /// Submission requested by the last key, run by the event loop after the next draw
    pending_submit: bool,
    quit: bool,
}

impl App<StoreClient> {
    /// Create the app backed by the configured remote store
    pub fn new(config: &WizardConfig) -> Self {
        let client = StoreClient::new(config);
        if !client.is_configured() {
            tracing::warn!("store_url not configured; submissions will fail");
        }
        Self::with_controller(WizardController::new(SubmissionAdapter::from_config(
            client, config,
        )))
    }
}

impl<B: StorageBackend> App<B> {
    pub fn with_controller(controller: WizardController<B>) -> Self {
        Self {
            controller,
            focus: FieldFocus::default(),
            prompt: None,
            errors: VecDeque::new(),
            status: None,
            pending_submit: false,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while a submission is queued or in flight
    pub fn is_sending(&self) -> bool {
        self.pending_submit || self.controller.state().is_submitting
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    pub fn current_key(&self) -> SectionKey {
        self.controller.state().current().key
    }

    pub fn current_record(&self) -> SectionRecord {
        self.controller.slice_or_empty(self.current_key())
    }

    pub fn current_fields(&self) -> Vec<FormField> {
        self.current_record().fields()
    }

    /// Number of focusable positions on the current section
    pub fn focus_count(&self) -> usize {
        let extra = usize::from(self.controller.state().is_final_section());
        self.current_fields().len() + extra
    }

    /// True when focus is on the final confirmation checkbox
    pub fn confirmation_focused(&self) -> bool {
        self.controller.state().is_final_section()
            && self.focus.index() == self.current_fields().len()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if is_quit_key(&key) {
            self.controller.cancellation_token().cancel();
            self.quit = true;
            return;
        }

        // Error dialog is modal
        if self.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_error();
            }
            return;
        }

        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            self.after_event();
            return;
        }

        if self.controller.state().is_submitted {
            if ctrl && key.code == KeyCode::Char('r') {
                // Rejections are reported through notices
                let _ = self.controller.reset();
            }
            self.after_event();
            return;
        }

        self.status = None;

        match key.code {
            KeyCode::Char('n') if ctrl => {
                let _ = self.controller.go_next();
            }
            KeyCode::Char('b') if ctrl => {
                let _ = self.controller.go_back();
            }
            KeyCode::Char('s') if ctrl => self.request_submit(),
            KeyCode::F(n) if (1..=SECTION_COUNT as u8).contains(&n) => {
                let _ = self.controller.jump_to(usize::from(n));
            }
            KeyCode::Tab | KeyCode::Down => self.focus.next(self.focus_count()),
            KeyCode::BackTab | KeyCode::Up => self.focus.prev(self.focus_count()),
            _ if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.handle_field_key(key)
            }
            _ => {}
        }

        self.after_event();
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        if self.confirmation_focused() {
            if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                let flag = !self.controller.state().final_confirmation;
                let _ = self.controller.set_final_confirmation(flag);
            }
            return;
        }

        let index = self.focus.index();
        let Some(field) = self.current_fields().into_iter().nth(index) else {
            return;
        };

        let action = match (&field.value, key.code) {
            (FieldValue::Checkbox(_) | FieldValue::Radio(_), KeyCode::Char(' ') | KeyCode::Enter) => {
                EditAction::Toggle
            }
            (FieldValue::File { slot, .. }, KeyCode::Enter) => {
                self.prompt = Some(FilePrompt {
                    slot: *slot,
                    field_index: index,
                    input: String::new(),
                });
                return;
            }
            (FieldValue::File { .. }, KeyCode::Delete | KeyCode::Backspace) => EditAction::Remove,
            (FieldValue::Text { .. }, KeyCode::Char(c)) => EditAction::Insert(c),
            (FieldValue::Text { .. }, KeyCode::Backspace) => EditAction::Backspace,
            (FieldValue::Text { multiline: true, .. }, KeyCode::Enter) => EditAction::Newline,
            (FieldValue::Text { .. }, KeyCode::Enter) => {
                self.focus.next(self.focus_count());
                return;
            }
            _ => return,
        };
        self.apply_edit(index, action);
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.prompt = None,
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char(c) => prompt.input.push(c),
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    self.attach_from_path(&prompt);
                }
            }
            _ => {}
        }
    }

    fn attach_from_path(&mut self, prompt: &FilePrompt) {
        let input = prompt.input.trim();
        if input.is_empty() {
            return;
        }
        match Attachment::load(Path::new(input), prompt.slot) {
            Ok(attachment) => self.apply_edit(prompt.field_index, EditAction::Attach(attachment)),
            Err(rejection) => {
                tracing::warn!(slot = prompt.slot.prefix(), error = %rejection, "file not attached");
                self.status = Some(Notice::warning(rejection.to_string()));
            }
        }
    }

    /// Run an edit through the current section's editor and store the result
    pub fn apply_edit(&mut self, index: usize, action: EditAction) {
        let key = self.current_key();
        match self.current_record().edit(index, &action) {
            EditOutcome::Updated(record) => {
                let _ = self.controller.update_slice(key, record);
            }
            EditOutcome::Rejected(message) => self.status = Some(Notice::warning(message)),
            EditOutcome::Unchanged => {}
        }
    }

    fn request_submit(&mut self) {
        if !self.controller.state().is_final_section() {
            self.status = Some(Notice::warning(
                "L'invio è disponibile nell'ultima sezione",
            ));
            return;
        }
        self.pending_submit = true;
    }

    /// Run a queued submission, if any, while reading `keys`.
    ///
    /// Ctrl+C cancels the submission in flight and quits; other keys are
    /// dropped until it settles. Returns `None` when nothing was queued or the
    /// controller refused the request.
    pub async fn run_pending<K>(&mut self, keys: &mut K) -> Option<SubmitOutcome>
    where
        K: Stream<Item = KeyEvent> + Unpin,
    {
        if !std::mem::take(&mut self.pending_submit) {
            return None;
        }

        let cancel = self.controller.cancellation_token();
        let mut interrupted = false;
        let mut keys_open = true;
        let result = {
            let submit = self.controller.submit();
            tokio::pin!(submit);
            loop {
                tokio::select! {
                    result = &mut submit => break result,
                    key = keys.next(), if keys_open && !interrupted => match key {
                        Some(key) if is_quit_key(&key) => {
                            tracing::info!("submission cancelled by user");
                            cancel.cancel();
                            interrupted = true;
                        }
                        Some(_) => {}
                        None => keys_open = false,
                    },
                }
            }
        };

        if interrupted {
            self.quit = true;
        }
        self.after_event();
        result.ok()
    }

    fn after_event(&mut self) {
        self.drain_notices();
        if self.controller.take_scroll_request() {
            self.focus.reset();
        }
        self.focus.clamp(self.focus_count());
    }

    /// Move controller notices into the error queue and status bar
    pub fn drain_notices(&mut self) {
        for notice in self.controller.take_notices() {
            match notice.level {
                NoticeLevel::Error => self.errors.push_back(notice.message),
                NoticeLevel::Success | NoticeLevel::Warning => self.status = Some(notice),
            }
        }
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}
