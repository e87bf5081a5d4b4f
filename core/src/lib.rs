//! Deterministic core of the user management dashboard.
//!
//! # Overview
//! Builds the users listing request and parses its response without touching
//! the network (host-does-IO pattern), keeps the user list in an explicitly
//! owned state container, validates the create/edit form, and derives the
//! table and dashboard views from state snapshots.
//!
//! # Design
//! - `UsersClient` is stateless; it holds only `base_url`.
//! - `UsersState::reduce` is the single update dispatch, driven by the
//!   `UserAction` tagged variant.
//! - `UserStore::begin_fetch` / `complete_fetch` bracket the one network
//!   round-trip, so the host decides how the request is executed.
//! - Local add/update/delete never reach the server.

pub mod client;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod http;
pub mod ids;
pub mod store;
pub mod table;
pub mod types;

pub use client::{UsersClient, DEFAULT_BASE_URL};
pub use dashboard::{DashboardBody, DashboardView, Stats};
pub use error::ApiError;
pub use form::{validate, FieldErrors, FormField, UserForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use ids::generate_user_id;
pub use store::{FetchOutcome, FetchStatus, UserAction, UserStore, UsersState, FETCH_FAILED_MESSAGE};
pub use table::{UserRow, UserTable};
pub use types::{Company, User, UserDraft};
