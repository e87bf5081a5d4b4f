//! Explicitly owned state container for the user list.
//!
//! # Design
//! Every change goes through `UsersState::reduce` with a `UserAction`, so a
//! state transition is a pure function of the prior state and the action.
//! `UserStore` adds fetch-all on top in the host-does-IO style:
//! `begin_fetch` marks the state as loading and hands out the request,
//! `complete_fetch` takes whatever the host got back and applies exactly one
//! outcome. Nothing de-duplicates overlapping fetches; the last completion
//! wins.

use tracing::{debug, error, info};

use crate::client::UsersClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::User;

/// The only message a failed fetch ever surfaces.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users";

/// Records with an id above this are counted as locally created.
pub const CUSTOM_ID_THRESHOLD: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UsersState {
    /// Newest-first for local adds, server order after a fetch.
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Every state transition the dashboard can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Add(User),
    Update(User),
    Delete(u64),
    ClearError,
    FetchStarted,
    FetchSucceeded(Vec<User>),
    FetchFailed(String),
}

impl UsersState {
    pub fn reduce(&mut self, action: UserAction) {
        match action {
            UserAction::Add(user) => self.users.insert(0, user),
            UserAction::Update(user) => {
                if let Some(slot) = self.users.iter_mut().find(|u| u.id == user.id) {
                    *slot = user;
                }
            }
            UserAction::Delete(id) => self.users.retain(|u| u.id != id),
            UserAction::ClearError => self.error = None,
            UserAction::FetchStarted => {
                self.loading = true;
                self.error = None;
            }
            UserAction::FetchSucceeded(users) => {
                self.loading = false;
                self.users = users;
            }
            UserAction::FetchFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }

    pub fn total(&self) -> usize {
        self.users.len()
    }

    pub fn custom_count(&self) -> usize {
        self.users
            .iter()
            .filter(|u| u.id > CUSTOM_ID_THRESHOLD)
            .count()
    }

    pub fn find(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn fetch_status(&self) -> FetchStatus<'_> {
        match (&self.error, self.loading) {
            (_, true) => FetchStatus::Pending,
            (Some(message), false) => FetchStatus::Failed(message),
            (None, false) => FetchStatus::Ready,
        }
    }
}

/// What the rendering layer needs to know about the last fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus<'a> {
    Pending,
    Failed(&'a str),
    Ready,
}

/// Result of one completed fetch, as applied to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Carries the number of records now in the list.
    Succeeded(usize),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct UserStore {
    client: UsersClient,
    state: UsersState,
}

impl UserStore {
    pub fn new(client: UsersClient) -> Self {
        Self {
            client,
            state: UsersState::default(),
        }
    }

    pub fn state(&self) -> &UsersState {
        &self.state
    }

    pub fn client(&self) -> &UsersClient {
        &self.client
    }

    pub fn dispatch(&mut self, action: UserAction) {
        debug!(?action, "dispatch");
        self.state.reduce(action);
    }

    pub fn add(&mut self, user: User) {
        self.dispatch(UserAction::Add(user));
    }

    pub fn update(&mut self, user: User) {
        self.dispatch(UserAction::Update(user));
    }

    pub fn delete(&mut self, id: u64) {
        self.dispatch(UserAction::Delete(id));
    }

    pub fn clear_error(&mut self) {
        self.dispatch(UserAction::ClearError);
    }

    pub fn begin_fetch(&mut self) -> HttpRequest {
        let request = self.client.build_list_users();
        info!(path = %request.path, "fetching users");
        self.state.reduce(UserAction::FetchStarted);
        request
    }

    pub fn complete_fetch(&mut self, response: Result<HttpResponse, ApiError>) -> FetchOutcome {
        match response.and_then(|r| self.client.parse_list_users(r)) {
            Ok(users) => {
                let count = users.len();
                info!(count, "fetched users");
                self.state.reduce(UserAction::FetchSucceeded(users));
                FetchOutcome::Succeeded(count)
            }
            Err(err) => {
                error!(error = %err, "error fetching users");
                self.state
                    .reduce(UserAction::FetchFailed(FETCH_FAILED_MESSAGE.to_string()));
                FetchOutcome::Failed(FETCH_FAILED_MESSAGE.to_string())
            }
        }
    }
}
