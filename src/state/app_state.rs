//! Application state definitions

use super::editor::{EditorPage, PageKind};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Page list, nothing mounted
    #[default]
    Home,
    Editor(PageKind),
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub sidebar_index: usize,

    /// The mounted editor page, if any
    pub editor: Option<EditorPage>,
    /// Id handed to the next mounted page
    next_mount_id: u64,

    // UI state
    /// Blocking confirmation; all other input waits until it is dismissed
    pub alert: Option<String>,
    pub status_message: Option<String>,
    pub api_base_url: String,
}

impl AppState {
    pub fn new(api_base_url: String) -> Self {
        Self {
            api_base_url,
            ..Default::default()
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.sidebar_index < max - 1 {
            self.sidebar_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.sidebar_index > 0 {
            self.sidebar_index -= 1;
        }
    }

    /// Mount a fresh instance of `kind`, replacing whatever was mounted
    pub fn mount_page(&mut self, kind: PageKind) -> u64 {
        self.next_mount_id += 1;
        let mount_id = self.next_mount_id;
        self.editor = Some(EditorPage::mount(kind, mount_id));
        self.current_view = View::Editor(kind);
        if let Some(index) = PageKind::ALL.iter().position(|k| *k == kind) {
            self.sidebar_index = index;
        }
        self.status_message = None;
        mount_id
    }

    /// Drop the mounted page and its state
    pub fn unmount_page(&mut self) {
        self.editor = None;
        self.current_view = View::Home;
        self.status_message = None;
    }

    /// The mounted page, only if it is the instance `mount_id` refers to
    pub fn editor_for(&mut self, mount_id: u64) -> Option<&mut EditorPage> {
        self.editor.as_mut().filter(|page| page.mount_id == mount_id)
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }
}
