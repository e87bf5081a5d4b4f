//! User records and the flat form draft.
//!
//! # Design
//! `User` mirrors the public endpoint's JSON shape. The remote service sends
//! more fields (`username`, `address`, `company.catchPhrase`, ...) than the
//! dashboard shows; serde ignores them, so the record keeps only what the
//! table and the form use.

use serde::{Deserialize, Serialize};

/// A single user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Company {
    pub name: String,
}

/// Editable, unvalidated form contents. Lives only while a form is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company_name: String,
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            website: user.website.clone(),
            company_name: user.company.name.clone(),
        }
    }
}
