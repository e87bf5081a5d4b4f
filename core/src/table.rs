//! Read-only table view over the current user list.

use std::fmt;

use crate::form::normalize_website;
use crate::store::UserAction;
use crate::types::User;

pub const EMPTY_TEXT: &str = "No users found";
pub const EMPTY_ACTION: &str = "Add Your First User";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";

const HEADERS: [&str; 6] = ["ID", "Name", "Email", "Phone", "Website", "Company"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: u64,
    pub badge: String,
    pub name: String,
    pub email: String,
    pub email_href: String,
    pub phone: String,
    pub website: String,
    pub website_href: String,
    pub company: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            badge: format!("#{}", user.id),
            name: user.name.clone(),
            email: user.email.clone(),
            email_href: format!("mailto:{}", user.email),
            phone: user.phone.clone(),
            website: user.website.clone(),
            website_href: normalize_website(&user.website),
            company: user.company.name.clone(),
        }
    }
}

impl UserRow {
    fn cells(&self) -> [&str; 6] {
        [
            self.badge.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.website.as_str(),
            self.company.as_str(),
        ]
    }
}

/// Rows in list order. No sorting, filtering or pagination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserTable {
    rows: Vec<UserRow>,
}

impl UserTable {
    pub fn from_users(users: &[User]) -> Self {
        Self {
            rows: users.iter().map(UserRow::from).collect(),
        }
    }

    pub fn rows(&self) -> &[UserRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Asks `confirm` with the delete prompt and yields the delete action
    /// only if it agrees.
    pub fn request_delete(id: u64, confirm: impl FnOnce(&str) -> bool) -> Option<UserAction> {
        confirm(DELETE_PROMPT).then_some(UserAction::Delete(id))
    }
}

impl fmt::Display for UserTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            writeln!(f, "{EMPTY_TEXT}")?;
            return writeln!(f, "[{EMPTY_ACTION}]");
        }

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_line(f, &HEADERS, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
        write_line(f, &rule, &widths)?;
        for row in &self.rows {
            write_line(f, &row.cells(), &widths)?;
        }
        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[&str], widths: &[usize]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(f, "{}", line.trim_end())
}
