//! Client core for a user directory backed by a remote REST collection.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and owns the page state a
//! front end renders: the local list of users, the create/edit form, the
//! single outstanding-request slot and a self-expiring notification.
//!
//! # Design
//! - `UsersClient` is stateless; it holds only the collection URL.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `UserManager` reuses that split: `begin_*` hands out a request and
//!   marks the manager busy, `complete` applies the response. A `Transport`
//!   implementation supplied by the host runs the round-trip in between.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod notification;
pub mod types;

pub use client::UsersClient;
pub use controller::{Operation, UserManager, VALIDATION_MESSAGE};
pub use error::{ActionError, ApiError, TransportError, ValidationError};
pub use form::{FormMode, FormState};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use notification::{Notification, NotificationSlot, Severity, DEFAULT_NOTIFICATION_TTL};
pub use types::{User, UserDraft, UserId};
