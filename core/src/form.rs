//! The user form and its two-mode state machine.
//!
//! # Design
//! The form starts in `Create` mode. Selecting a record moves it to
//! `Edit(id)` with the record's fields copied in; cancelling or a successful
//! update returns it to `Create` with empty fields. The form never talks to
//! the network; `UserManager` reads a validated `UserDraft` out of it.

use crate::error::ValidationError;
use crate::types::{User, UserDraft, UserId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(UserId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    name: String,
    email: String,
    mode: FormMode,
}

impl FormState {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Id of the record being edited, if any.
    pub fn editing(&self) -> Option<&UserId> {
        match &self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Enter edit mode for `user`, replacing whatever the form held.
    pub fn begin_edit(&mut self, user: &User) {
        self.name = user.name.clone();
        self.email = user.email.clone();
        self.mode = FormMode::Edit(user.id.clone());
    }

    /// Back to create mode with empty fields.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Empty the fields, keeping the mode.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
    }

    /// Presence check only: both fields must be non-empty.
    pub fn validate(&self) -> Result<UserDraft, ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        Ok(UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
        })
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add New User",
            FormMode::Edit(_) => "Edit User",
        }
    }

    pub fn submit_label(&self, busy: bool) -> &'static str {
        match (&self.mode, busy) {
            (_, true) => "Processing...",
            (FormMode::Create, false) => "Add User",
            (FormMode::Edit(_), false) => "Update User",
        }
    }

    /// Cancel is only offered while editing.
    pub fn can_cancel(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> User {
        User {
            id: UserId::new("1"),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
        }
    }

    #[test]
    fn starts_in_create_mode() {
        let form = FormState::default();
        assert_eq!(form.mode(), &FormMode::Create);
        assert_eq!(form.title(), "Add New User");
        assert_eq!(form.submit_label(false), "Add User");
        assert!(!form.can_cancel());
    }

    #[test]
    fn begin_edit_prefills_and_tracks_target() {
        let mut form = FormState::default();
        form.begin_edit(&ann());
        assert_eq!(form.name(), "Ann");
        assert_eq!(form.email(), "ann@x.com");
        assert_eq!(form.editing(), Some(&UserId::new("1")));
        assert_eq!(form.title(), "Edit User");
        assert_eq!(form.submit_label(false), "Update User");
        assert!(form.can_cancel());
    }

    #[test]
    fn reset_returns_to_empty_create_mode() {
        let mut form = FormState::default();
        form.begin_edit(&ann());
        form.reset();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn clear_keeps_mode() {
        let mut form = FormState::default();
        form.begin_edit(&ann());
        form.clear();
        assert!(form.name().is_empty());
        assert_eq!(form.editing(), Some(&UserId::new("1")));
    }

    #[test]
    fn busy_label_wins_in_both_modes() {
        let mut form = FormState::default();
        assert_eq!(form.submit_label(true), "Processing...");
        form.begin_edit(&ann());
        assert_eq!(form.submit_label(true), "Processing...");
    }

    #[test]
    fn validate_requires_both_fields() {
        let mut form = FormState::default();
        assert_eq!(form.validate(), Err(ValidationError::MissingName));
        form.set_name("Bob");
        assert_eq!(form.validate(), Err(ValidationError::MissingEmail));
        form.set_email("bob@x.com");
        assert_eq!(
            form.validate(),
            Ok(UserDraft {
                name: "Bob".to_string(),
                email: "bob@x.com".to_string(),
            })
        );
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut form = FormState::default();
        form.set_name(" ");
        form.set_email("not-an-email");
        assert!(form.validate().is_ok());
    }
}
