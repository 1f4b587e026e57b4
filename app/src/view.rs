//! Text rendering of the page: toast, form card and user list.

use colored::Colorize;
use users_core::{Severity, UserManager};

pub const TITLE: &str = "Simple CRUD App";
pub const LOADING: &str = "Loading...";
pub const EMPTY_LIST: &str = "No users found. Add one above!";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this user?";

/// Render the whole page for the current state.
pub fn render(manager: &UserManager) -> String {
    let mut lines = vec![String::new(), format!("=== {TITLE} ===").bold().to_string()];

    if let Some(notification) = manager.notification() {
        let toast = match notification.severity() {
            Severity::Success => format!("[ok] {}", notification.text()).green(),
            Severity::Error => format!("[error] {}", notification.text()).red(),
        };
        lines.push(toast.to_string());
    }

    let form = manager.form();
    let mut buttons = format!("  [{}]", form.submit_label(manager.is_busy()));
    if form.can_cancel() {
        buttons.push_str("  [Cancel]");
    }
    lines.extend([
        String::new(),
        format!("--- {} ---", form.title()),
        format!("  Name:  {}", form.name()),
        format!("  Email: {}", form.email()),
        buttons,
        String::new(),
        "--- Users List ---".to_string(),
    ]);

    let users = manager.users();
    if users.is_empty() {
        let placeholder = if manager.is_busy() { LOADING } else { EMPTY_LIST };
        lines.push(format!("  {}", placeholder.dimmed()));
    }
    lines.extend(
        users
            .iter()
            .enumerate()
            .map(|(position, user)| format!("  {}. {} / {}", position + 1, user.name, user.email)),
    );

    let mut page = lines.join("\n");
    page.push('\n');
    page
}
