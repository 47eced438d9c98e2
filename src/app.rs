//! Application state and core logic
//!
//! `App` is the input-handling layer: it turns key events into calls on the
//! form records and drives the submission lifecycle of the mounted page.

use crate::api::{ApiError, BackendClient, BackendClientTrait, UpdateRequest};
use crate::config::DeskConfig;
use crate::photo::{FsPhotoSource, PhotoSource};
use crate::state::{AppState, BusRouteForm, EditorForm, EditorPage, Form, PageKind, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A submission that has passed validation and is ready to go out
#[derive(Debug)]
pub struct SubmitJob {
    pub mount_id: u64,
    pub request: UpdateRequest,
}

/// Result of a submission, addressed to the page instance that sent it
#[derive(Debug)]
pub struct SubmitOutcome {
    pub mount_id: u64,
    pub page: PageKind,
    pub result: Result<String, ApiError>,
}

impl SubmitJob {
    /// Send the request once
    pub async fn run(self, client: &dyn BackendClientTrait) -> SubmitOutcome {
        let page = self.request.kind();
        let result = self.request.send(client).await;
        SubmitOutcome {
            mount_id: self.mount_id,
            page,
            result,
        }
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend client shared with in-flight submissions
    client: Arc<dyn BackendClientTrait>,
    /// Where bus photos are picked from
    photos: Box<dyn PhotoSource>,
    outcome_tx: UnboundedSender<SubmitOutcome>,
    outcome_rx: UnboundedReceiver<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance talking to the configured backend
    pub fn new(config: &DeskConfig) -> Result<Self> {
        let base_url = config.api_base_url();
        let client = BackendClient::new(&base_url)?;
        tracing::info!(base_url = %client.base_url(), "Backend client ready");
        Ok(Self::with_parts(
            Arc::new(client),
            Box::new(FsPhotoSource),
            base_url,
        ))
    }

    pub fn with_parts(
        client: Arc<dyn BackendClientTrait>,
        photos: Box<dyn PhotoSource>,
        api_base_url: String,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(api_base_url),
            client,
            photos,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Mount a fresh instance of a page
    pub fn open_page(&mut self, kind: PageKind) {
        let mount_id = self.state.mount_page(kind);
        tracing::debug!(?kind, mount_id, "Page mounted");
    }

    /// Leave the current page. Its state is dropped; an in-flight request
    /// keeps running and its outcome is discarded on arrival.
    pub fn leave_page(&mut self) {
        if let Some(page) = &self.state.editor {
            if page.is_submitting() {
                tracing::debug!(
                    kind = ?page.kind(),
                    mount_id = page.mount_id,
                    "Leaving page with a request in flight"
                );
            }
        }
        self.state.unmount_page();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // The confirmation blocks everything until dismissed
        if self.state.has_alert() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.state.dismiss_alert();
            }
            return;
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Editor(_) => self.handle_editor_key(key),
        }
    }

    /// Handle keys on the page list
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.move_selection_down(PageKind::ALL.len());
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Enter => {
                if let Some(kind) = PageKind::ALL.get(self.state.sidebar_index).copied() {
                    self.open_page(kind);
                }
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some(kind) = PageKind::ALL.get(index).copied() {
                    self.open_page(kind);
                }
            }
            _ => {}
        }
    }

    /// Handle keys on a mounted editor page
    fn handle_editor_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let Some(page) = self.state.editor.as_mut() else {
            return;
        };
        let form = page.form.as_form();
        let on_submit = form.is_submit_active();
        let on_choice = form
            .get_field(form.active_field())
            .is_some_and(|f| f.is_choice());

        match key.code {
            KeyCode::Esc => self.leave_page(),
            KeyCode::Tab => page.form.as_form_mut().next_field(),
            KeyCode::BackTab => page.form.as_form_mut().prev_field(),
            // Submit (Ctrl+S, or Cmd+W / Ctrl+W)
            KeyCode::Char('s') if ctrl => self.request_submit(),
            KeyCode::Char('w') if key.modifiers.contains(crate::platform::ALT_SUBMIT_MODIFIER) => {
                self.request_submit()
            }
            KeyCode::Char('a') if ctrl => {
                if let EditorForm::BusRoute(form) = &mut page.form {
                    let index = form.add_stop();
                    form.set_active_field(BusRouteForm::stop_control(index));
                }
            }
            KeyCode::Char('r') if ctrl => {
                if let EditorForm::BusRoute(form) = &mut page.form {
                    // The remove control only exists while more than one stop is shown
                    if let Some(index) = form.active_stop().filter(|_| form.can_remove_stop()) {
                        form.remove_stop(index);
                    }
                }
            }
            KeyCode::Enter if on_submit => self.request_submit(),
            KeyCode::Enter => {
                let on_photo = matches!(&page.form, EditorForm::BusName(f)
                    if f.active_field() == crate::state::BusNameForm::PHOTO);
                if on_photo {
                    self.choose_photo();
                } else {
                    page.form.as_form_mut().next_field();
                }
            }
            KeyCode::Left if on_choice => page.form.as_form_mut().cycle_active_choice(false),
            KeyCode::Right if on_choice => page.form.as_form_mut().cycle_active_choice(true),
            KeyCode::Char(' ') if on_choice => page.form.as_form_mut().cycle_active_choice(true),
            KeyCode::Char(c) if !ctrl => page.form.as_form_mut().type_char(c),
            KeyCode::Backspace => page.form.as_form_mut().backspace(),
            _ => {}
        }
    }

    /// Select the photo at the typed path. A failed selection keeps the
    /// previously chosen photo.
    fn choose_photo(&mut self) {
        let Some(EditorPage {
            form: EditorForm::BusName(form),
            ..
        }) = self.state.editor.as_mut()
        else {
            return;
        };

        match self.photos.select(form.photo_path.as_text()) {
            Ok(photo) => {
                tracing::info!(file = %photo.file_name, bytes = photo.bytes.len(), "Photo selected");
                form.set_photo(photo);
                self.state.status_message = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Photo not selected");
                self.state.status_message = Some(err.to_string());
            }
        }
    }

    /// Validate the mounted page and move it to `Pending`.
    ///
    /// Returns `None` when nothing is mounted, a request is already in flight
    /// (the button is disabled) or a required field blocks submission.
    pub fn submit(&mut self) -> Option<SubmitJob> {
        let page = self.state.editor.as_mut()?;
        if page.is_submitting() {
            return None;
        }
        if let Err(problem) = page.validate() {
            let form = page.form.as_form();
            if let Some(field) = form.get_field(form.active_field()) {
                tracing::debug!(field = %field.name, ?problem, "Submission blocked");
            }
            self.state.status_message = Some(problem.hint().to_string());
            return None;
        }

        let request = UpdateRequest::from_form(&page.form)?;
        if !page.begin_submit() {
            return None;
        }
        tracing::info!(
            kind = ?page.kind(),
            mount_id = page.mount_id,
            endpoint = page.kind().endpoint(),
            "Submitting"
        );
        let job = SubmitJob {
            mount_id: page.mount_id,
            request,
        };
        self.state.status_message = None;
        Some(job)
    }

    /// Submit the mounted page in the background
    fn request_submit(&mut self) {
        if let Some(job) = self.submit() {
            self.spawn_submit(job);
        }
    }

    fn spawn_submit(&self, job: SubmitJob) {
        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = job.run(client.as_ref()).await;
            // A closed channel only means the app is shutting down
            let _ = tx.send(outcome);
        });
    }

    /// Apply every outcome that has arrived since the last tick
    pub fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Settle a submission on the page that sent it
    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        let SubmitOutcome {
            mount_id,
            page: kind,
            result,
        } = outcome;

        match &result {
            Ok(body) => {
                tracing::info!(?kind, mount_id, "Update accepted");
                tracing::debug!(?kind, response = %body, "Update response");
            }
            Err(err) => {
                tracing::error!(?kind, mount_id, error = %err, "Update failed");
            }
        }

        let Some(page) = self.state.editor_for(mount_id) else {
            tracing::debug!(?kind, mount_id, "Discarding outcome for unmounted page");
            return;
        };
        page.finish_submit(result.is_ok());
        if result.is_ok() {
            self.state.show_alert(kind.success_message());
        }
    }
}
