//! The state owner behind the user page: list, form, request slot, toast.
//!
//! # Design
//! `UserManager` follows the same build/parse split as `UsersClient`. Every
//! network operation is two-phase: a `begin_*` method validates, occupies the
//! single request slot and hands back the `HttpRequest` to run; `complete`
//! takes whatever the transport produced, frees the slot on every path and
//! reconciles local state. `refresh`, `submit` and `delete` chain both phases
//! through a `Transport` for callers that are happy to block.
//!
//! Local state only changes after the server confirms. A failed operation
//! leaves the list, the form and the mode exactly as they were and reports
//! one generic error notification for that operation.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::client::UsersClient;
use crate::error::{ActionError, ApiError, TransportError};
use crate::form::FormState;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::notification::{Notification, NotificationSlot, Severity};
use crate::types::{User, UserId};

/// Shown when a submit fails the presence check.
pub const VALIDATION_MESSAGE: &str = "Please fill all fields!";

/// The four remote operations, used to label outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn success_message(self) -> &'static str {
        match self {
            Operation::List => "Users loaded successfully!",
            Operation::Create => "User created successfully!",
            Operation::Update => "User updated successfully!",
            Operation::Delete => "User deleted successfully!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Error fetching users!",
            Operation::Create => "Error creating user!",
            Operation::Update => "Error updating user!",
            Operation::Delete => "Error deleting user!",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::List => "list users",
            Operation::Create => "create user",
            Operation::Update => "update user",
            Operation::Delete => "delete user",
        })
    }
}

/// What the outstanding request will do once it resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    List,
    Create,
    Update(UserId),
    Delete(UserId),
}

impl Pending {
    fn operation(&self) -> Operation {
        match self {
            Pending::List => Operation::List,
            Pending::Create => Operation::Create,
            Pending::Update(_) => Operation::Update,
            Pending::Delete(_) => Operation::Delete,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserManager {
    client: UsersClient,
    users: Vec<User>,
    form: FormState,
    pending: Option<Pending>,
    notifications: NotificationSlot,
}

impl UserManager {
    pub fn new(client: UsersClient) -> Self {
        Self {
            client,
            users: Vec::new(),
            form: FormState::default(),
            pending: None,
            notifications: NotificationSlot::default(),
        }
    }

    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notifications = NotificationSlot::new(ttl);
        self
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// True while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn clear_expired(&mut self, now: Instant) {
        self.notifications.clear_expired(now);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.set_name(name);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.set_email(email);
    }

    /// Switch the form to edit `id`, pre-filled from the local list.
    pub fn begin_edit(&mut self, id: &UserId) -> Result<(), ActionError> {
        let user = self
            .users
            .iter()
            .find(|u| &u.id == id)
            .ok_or_else(|| ActionError::UnknownUser(id.clone()))?;
        self.form.begin_edit(user);
        Ok(())
    }

    /// Leave edit mode with an empty form. Does nothing in create mode.
    pub fn cancel_edit(&mut self) {
        if self.form.can_cancel() {
            self.form.reset();
        }
    }

    // -----------------------------------------------------------------------
    // Phase one: produce a request
    // -----------------------------------------------------------------------

    pub fn begin_refresh(&mut self) -> Result<HttpRequest, ActionError> {
        self.ensure_idle()?;
        let request = self.client.build_list_users();
        self.pending = Some(Pending::List);
        Ok(request)
    }

    /// Validate the form and build a create or update request for it.
    ///
    /// An empty field short-circuits with an error notification and no
    /// request.
    pub fn begin_submit(&mut self) -> Result<HttpRequest, ActionError> {
        self.ensure_idle()?;
        let draft = match self.form.validate() {
            Ok(draft) => draft,
            Err(err) => {
                self.notify(VALIDATION_MESSAGE, Severity::Error);
                return Err(err.into());
            }
        };

        let (pending, built) = match self.form.editing() {
            None => (Pending::Create, self.client.build_create_user(&draft)),
            Some(id) => (
                Pending::Update(id.clone()),
                self.client.build_update_user(id, &draft),
            ),
        };
        match built {
            Ok(request) => {
                self.pending = Some(pending);
                Ok(request)
            }
            Err(source) => Err(self.fail(pending.operation(), source)),
        }
    }

    /// Ask `confirm` before building a delete request for `id`.
    ///
    /// Returns `Ok(None)` when the user declines; nothing changes in that
    /// case, not even the notification.
    pub fn begin_delete<F>(&mut self, id: &UserId, confirm: F) -> Result<Option<HttpRequest>, ActionError>
    where
        F: FnOnce(&User) -> bool,
    {
        self.ensure_idle()?;
        let user = self
            .users
            .iter()
            .find(|u| &u.id == id)
            .ok_or_else(|| ActionError::UnknownUser(id.clone()))?;
        if !confirm(user) {
            debug!(%id, "delete declined");
            return Ok(None);
        }
        let request = self.client.build_delete_user(id);
        self.pending = Some(Pending::Delete(id.clone()));
        Ok(Some(request))
    }

    // -----------------------------------------------------------------------
    // Phase two: apply the outcome
    // -----------------------------------------------------------------------

    /// Apply the result of the outstanding request and free the slot.
    pub fn complete(&mut self, result: Result<HttpResponse, TransportError>) -> Result<(), ActionError> {
        let pending = self.pending.take().ok_or(ActionError::NothingPending)?;
        let operation = pending.operation();
        let applied = result
            .map_err(ApiError::from)
            .and_then(|response| self.apply(pending, response));

        match applied {
            Ok(()) => {
                debug!(%operation, users = self.users.len(), "operation succeeded");
                self.notify(operation.success_message(), Severity::Success);
                Ok(())
            }
            Err(source) => Err(self.fail(operation, source)),
        }
    }

    fn apply(&mut self, pending: Pending, response: HttpResponse) -> Result<(), ApiError> {
        match pending {
            Pending::List => {
                self.users = self.client.parse_list_users(response)?;
            }
            Pending::Create => {
                let created = self.client.parse_create_user(response)?;
                self.users.push(created);
                self.form.clear();
            }
            Pending::Update(id) => {
                let updated = self.client.parse_update_user(response)?;
                if let Some(slot) = self.users.iter_mut().find(|u| u.id == id) {
                    *slot = updated;
                }
                self.form.reset();
            }
            Pending::Delete(id) => {
                self.client.parse_delete_user(response)?;
                self.users.retain(|u| u.id != id);
                // Editing a record that no longer exists would only 404.
                if self.form.editing() == Some(&id) {
                    self.form.reset();
                }
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Blocking helpers
    // -----------------------------------------------------------------------

    pub fn refresh<T: Transport + ?Sized>(&mut self, transport: &mut T) -> Result<(), ActionError> {
        let request = self.begin_refresh()?;
        self.dispatch(transport, request)
    }

    pub fn submit<T: Transport + ?Sized>(&mut self, transport: &mut T) -> Result<(), ActionError> {
        let request = self.begin_submit()?;
        self.dispatch(transport, request)
    }

    pub fn delete<T, F>(&mut self, transport: &mut T, id: &UserId, confirm: F) -> Result<(), ActionError>
    where
        T: Transport + ?Sized,
        F: FnOnce(&User) -> bool,
    {
        match self.begin_delete(id, confirm)? {
            Some(request) => self.dispatch(transport, request),
            None => Ok(()),
        }
    }

    fn dispatch<T: Transport + ?Sized>(&mut self, transport: &mut T, request: HttpRequest) -> Result<(), ActionError> {
        debug!(method = %request.method, path = %request.path, "dispatching request");
        let result = transport.execute(request);
        self.complete(result)
    }

    fn ensure_idle(&self) -> Result<(), ActionError> {
        if self.is_busy() {
            return Err(ActionError::Busy);
        }
        Ok(())
    }

    fn notify(&mut self, text: &str, severity: Severity) {
        self.notifications.show(text, severity, Instant::now());
    }

    fn fail(&mut self, operation: Operation, source: ApiError) -> ActionError {
        warn!(%operation, error = %source, "operation failed");
        self.notify(operation.failure_message(), Severity::Error);
        ActionError::Network { operation, source }
    }
}
