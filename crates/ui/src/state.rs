//! Application State Management for Formula
//!
//! Centralized state built on Dioxus 0.7 Signals. Holds the form document
//! being edited, the condition rules, the identity session, the form service
//! configuration, and the UI state (active view, tabs, notices).

use dioxus::prelude::*;
use formula_client::{AuthSession, ClientConfig, FormApiClient};
use formula_core::{ElementCategory, FormError, FormResult};
use formula_ir::{ConditionSet, FormDocument, SubmissionPayload};

// ============================================================================
// View Navigation
// ============================================================================

/// Top-level views
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppView {
    /// Sign-in status and entry points
    #[default]
    Landing,
    /// The form builder
    Builder,
    /// Show/hide rule editor
    Conditions,
    /// Filling in a stored form, by id
    FillForm(String),
}

impl AppView {
    /// Get the display name for this view
    pub fn display_name(&self) -> &'static str {
        match self {
            AppView::Landing => "Home",
            AppView::Builder => "Build",
            AppView::Conditions => "Use Conditions",
            AppView::FillForm(_) => "Fill Form",
        }
    }

    /// Check if this view needs a signed-in user
    pub fn requires_auth(&self) -> bool {
        matches!(self, AppView::Builder | AppView::Conditions)
    }

    /// Check if this view edits the form document
    pub fn is_editor(&self) -> bool {
        matches!(self, AppView::Builder | AppView::Conditions)
    }
}

/// Tabs across the top of the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderTab {
    #[default]
    Build,
    UseConditions,
    Publish,
}

impl BuilderTab {
    pub const ALL: [BuilderTab; 3] = [
        BuilderTab::Build,
        BuilderTab::UseConditions,
        BuilderTab::Publish,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BuilderTab::Build => "BUILD",
            BuilderTab::UseConditions => "USE CONDITIONS",
            BuilderTab::Publish => "PUBLISH",
        }
    }

    /// View a tab leads to, if it leads anywhere
    pub fn view(self) -> Option<AppView> {
        match self {
            BuilderTab::Build => Some(AppView::Builder),
            BuilderTab::UseConditions => Some(AppView::Conditions),
            BuilderTab::Publish => None,
        }
    }
}

// ============================================================================
// Notices
// ============================================================================

/// Blocking acknowledgment shown as a modal
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub text: String,
    pub level: StatusLevel,
}

/// Status message for the status line
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

// ============================================================================
// UI State
// ============================================================================

/// General UI state (view, tabs, notices)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    /// Currently active view
    pub active_view: AppView,
    /// Tab shown in the element palette
    pub sidebar_tab: ElementCategory,
    /// Modal notice waiting for acknowledgment
    pub notice: Option<Notice>,
    /// Status line message
    pub status_message: Option<StatusMessage>,
}

impl UiState {
    /// Create new UI state
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a modal notice
    pub fn show_notice(&mut self, title: impl Into<String>, text: impl Into<String>, level: StatusLevel) {
        self.notice = Some(Notice {
            title: title.into(),
            text: text.into(),
            level,
        });
    }

    /// Acknowledge the modal notice
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone)]
pub struct AppState {
    /// Form being built; recreated on each visit to the editor
    pub document: FormDocument,
    /// Show/hide rules being edited
    pub conditions: ConditionSet,
    /// Who is signed in
    pub session: AuthSession,
    /// Where the form service lives
    pub client_config: ClientConfig,
    /// UI state
    pub ui: UiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with(AuthSession::anonymous(), ClientConfig::default())
    }
}

impl AppState {
    /// Create application state with an explicit session and configuration
    pub fn with(session: AuthSession, client_config: ClientConfig) -> Self {
        Self {
            document: FormDocument::new(),
            conditions: ConditionSet::new(),
            session,
            client_config,
            ui: UiState::new(),
        }
    }

    /// Create application state from the process environment
    ///
    /// A broken API configuration falls back to the defaults and is reported
    /// on the status line instead of stopping the app.
    pub fn from_env() -> Self {
        let session = AuthSession::from_env();
        match ClientConfig::from_env() {
            Ok(config) => Self::with(session, config),
            Err(e) => {
                tracing::warn!("Falling back to default API configuration: {}", e);
                let mut state = Self::with(session, ClientConfig::default());
                state.ui.set_status(e.to_string(), StatusLevel::Warning);
                state
            }
        }
    }

    /// Navigate to a view
    ///
    /// Editor views redirect to the landing view without a signed-in user.
    /// Entering the editor from outside starts a fresh document; leaving it
    /// discards the document.
    pub fn navigate(&mut self, view: AppView) {
        if view.requires_auth() && !self.session.is_authenticated() {
            tracing::warn!("{} requires sign-in, redirecting", view.display_name());
            self.ui
                .set_status("Sign in to build forms", StatusLevel::Warning);
            self.ui.active_view = AppView::Landing;
            return;
        }

        let was_editing = self.ui.active_view.is_editor();
        if was_editing != view.is_editor() {
            self.reset_editor();
        }

        tracing::debug!("Navigating to {:?}", view);
        self.ui.active_view = view;
    }

    /// Throw away the document and rules
    pub fn reset_editor(&mut self) {
        self.document = FormDocument::new();
        self.conditions = ConditionSet::new();
    }

    /// Build a client for the form service
    pub fn api_client(&self) -> FormResult<FormApiClient> {
        Ok(FormApiClient::new(self.client_config.clone())?.with_token(self.session.token()))
    }

    /// Payload for submitting the current page
    pub fn submission_payload(&self) -> FormResult<SubmissionPayload> {
        let owner_id = self.session.owner_id().ok_or(FormError::NotAuthenticated)?;
        Ok(SubmissionPayload::from_page(
            self.document.current_page(),
            owner_id,
        ))
    }

    /// Get window title
    pub fn window_title(&self) -> String {
        format!("{} - Formula", self.ui.active_view.display_name())
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
/// Use this in components to access and modify app state
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::from_env);

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Hook to access the current view
pub fn use_current_view() -> AppView {
    let state = APP_STATE.read();
    state.ui.active_view.clone()
}

/// Hook to check whether the form is being previewed
pub fn use_preview_mode() -> bool {
    let state = APP_STATE.read();
    state.document.preview_mode()
}

// ============================================================================
// Tests
// ============================================================================
