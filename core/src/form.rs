//! Create/edit form with field-by-field validation.
//!
//! # Design
//! `UserForm` owns the draft for as long as the form is open. Validation
//! errors live in `FieldErrors`, one optional message per field, and never
//! reach the store's error slot. A successful `submit` turns the draft into
//! the `UserAction` the caller should dispatch.
//!
//! New records always take their id from an empty reference list, so every
//! locally created record gets id `1` until a refresh replaces the list.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::ids::generate_user_id;
use crate::store::UserAction;
use crate::types::{Company, User, UserDraft};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Website,
    CompanyName,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Website,
        FormField::CompanyName,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name *",
            FormField::Email => "Email Address *",
            FormField::Phone => "Phone Number *",
            FormField::Website => "Website",
            FormField::CompanyName => "Company Name *",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Enter full name",
            FormField::Email => "Enter email address",
            FormField::Phone => "Enter phone number",
            FormField::Website => "example.com",
            FormField::CompanyName => "Enter company name",
        }
    }

    fn value(self, draft: &UserDraft) -> &str {
        match self {
            FormField::Name => &draft.name,
            FormField::Email => &draft.email,
            FormField::Phone => &draft.phone,
            FormField::Website => &draft.website,
            FormField::CompanyName => &draft.company_name,
        }
    }

    fn value_mut(self, draft: &mut UserDraft) -> &mut String {
        match self {
            FormField::Name => &mut draft.name,
            FormField::Email => &mut draft.email,
            FormField::Phone => &mut draft.phone,
            FormField::Website => &mut draft.website,
            FormField::CompanyName => &mut draft.company_name,
        }
    }
}

/// Per-field validation messages. Website is optional and never fails.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Email => self.email.as_deref(),
            FormField::Phone => self.phone.as_deref(),
            FormField::Website => None,
            FormField::CompanyName => self.company_name.as_deref(),
        }
    }

    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Name => self.name = None,
            FormField::Email => self.email = None,
            FormField::Phone => self.phone = None,
            FormField::Website => {}
            FormField::CompanyName => self.company_name = None,
        }
    }

    pub fn len(&self) -> usize {
        FormField::ALL
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        FormField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|message| (field, message)))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (_, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

pub fn validate(draft: &UserDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }

    if draft.email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !EMAIL_REGEX.is_match(&draft.email) {
        errors.email = Some("Invalid email format".to_string());
    }

    if draft.phone.trim().is_empty() {
        errors.phone = Some("Phone is required".to_string());
    }

    if draft.company_name.trim().is_empty() {
        errors.company_name = Some("Company name is required".to_string());
    }

    errors
}

/// Prefixes `https://` unless the value already starts with `http`.
pub fn normalize_website(website: &str) -> String {
    if website.starts_with("http") {
        website.to_string()
    } else {
        format!("https://{website}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserForm {
    editing: Option<User>,
    draft: UserDraft,
    errors: FieldErrors,
}

impl UserForm {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(user: &User) -> Self {
        Self {
            editing: Some(user.clone()),
            draft: UserDraft::from(user),
            errors: FieldErrors::default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit User"
        } else {
            "Create New User"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update User"
        } else {
            "Create User"
        }
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn value(&self, field: FormField) -> &str {
        field.value(&self.draft)
    }

    /// Editing a field clears its pending error.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *field.value_mut(&mut self.draft) = value.into();
        self.errors.clear(field);
    }

    pub fn submit(&mut self) -> Result<UserAction, FieldErrors> {
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        let draft = std::mem::take(&mut self.draft);
        self.errors = FieldErrors::default();
        let user = User {
            id: match &self.editing {
                Some(existing) => existing.id,
                None => generate_user_id(&[]),
            },
            website: normalize_website(&draft.website),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            company: Company {
                name: draft.company_name,
            },
        };

        Ok(if self.is_editing() {
            UserAction::Update(user)
        } else {
            UserAction::Add(user)
        })
    }
}
