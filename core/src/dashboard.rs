//! Container view: derives everything the dashboard shows from one state
//! snapshot.

use std::fmt;

use crate::store::{FetchStatus, UsersState};
use crate::table::UserTable;

pub const TITLE: &str = "User Management Dashboard";
pub const LOADING_TEXT: &str = "Fetching user data...";
pub const RETRY_LABEL: &str = "Try Again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub custom: usize,
    pub healthy: bool,
}

impl Stats {
    pub fn status_label(&self) -> &'static str {
        if self.healthy {
            "Healthy"
        } else {
            "Error"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardBody {
    Loading,
    Error(String),
    Table(UserTable),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub stats: Stats,
    pub body: DashboardBody,
    pub refreshing: bool,
}

impl DashboardView {
    pub fn from_state(state: &UsersState) -> Self {
        let body = match state.fetch_status() {
            FetchStatus::Pending => DashboardBody::Loading,
            FetchStatus::Failed(message) => DashboardBody::Error(message.to_string()),
            FetchStatus::Ready => DashboardBody::Table(UserTable::from_users(&state.users)),
        };
        Self {
            stats: Stats {
                total: state.total(),
                custom: state.custom_count(),
                healthy: state.error.is_none(),
            },
            body,
            refreshing: state.loading,
        }
    }

    pub fn refresh_label(&self) -> &'static str {
        if self.refreshing {
            "Refreshing..."
        } else {
            "Refresh Data"
        }
    }

    /// Refresh is disabled while a fetch is pending.
    pub fn can_refresh(&self) -> bool {
        !self.refreshing
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(
            f,
            "Total Users: {}  |  Custom Users: {}  |  System Status: {}",
            self.stats.total,
            self.stats.custom,
            self.stats.status_label()
        )?;
        writeln!(f)?;
        match &self.body {
            DashboardBody::Loading => writeln!(f, "{LOADING_TEXT}"),
            DashboardBody::Error(message) => {
                writeln!(f, "Error: {message}")?;
                writeln!(f, "[{RETRY_LABEL}]")
            }
            DashboardBody::Table(table) => write!(f, "{table}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{UserAction, FETCH_FAILED_MESSAGE};
    use crate::types::{Company, User};

    fn user(id: u64) -> User {
        User {
            id,
            name: format!("User {id}"),
            email: format!("u{id}@example.com"),
            phone: "555".to_string(),
            website: "example.com".to_string(),
            company: Company {
                name: "Acme".to_string(),
            },
        }
    }

    #[test]
    fn loading_hides_table_and_disables_refresh() {
        let mut state = UsersState::default();
        state.reduce(UserAction::FetchStarted);
        let view = DashboardView::from_state(&state);
        assert_eq!(view.body, DashboardBody::Loading);
        assert_eq!(view.refresh_label(), "Refreshing...");
        assert!(!view.can_refresh());
        assert!(view.to_string().contains(LOADING_TEXT));
    }

    #[test]
    fn error_shows_message_and_retry() {
        let mut state = UsersState::default();
        state.reduce(UserAction::FetchFailed(FETCH_FAILED_MESSAGE.to_string()));
        let view = DashboardView::from_state(&state);
        assert_eq!(view.body, DashboardBody::Error(FETCH_FAILED_MESSAGE.to_string()));
        assert_eq!(view.stats.status_label(), "Error");
        assert!(view.can_refresh());
        let text = view.to_string();
        assert!(text.contains("Error: Failed to fetch users"));
        assert!(text.contains("[Try Again]"));
    }

    #[test]
    fn ready_state_shows_table_and_counts() {
        let mut state = UsersState::default();
        state.reduce(UserAction::FetchSucceeded((1..=10).map(user).collect()));
        state.reduce(UserAction::Add(user(11)));
        let view = DashboardView::from_state(&state);
        assert_eq!(view.stats.total, 11);
        assert_eq!(view.stats.custom, 1);
        assert_eq!(view.stats.status_label(), "Healthy");
        assert_eq!(view.refresh_label(), "Refresh Data");
        let DashboardBody::Table(table) = &view.body else {
            panic!("expected table, got {:?}", view.body);
        };
        assert_eq!(table.rows()[0].id, 11);
        assert!(view.to_string().contains("Total Users: 11  |  Custom Users: 1"));
    }
}
