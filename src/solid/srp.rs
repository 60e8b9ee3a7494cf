//! Single responsibility: validation, storage, mailing and reporting each
//! live in their own type.

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

pub struct UserValidator;

impl UserValidator {
    /// Needs an `@` followed somewhere by a `.`.
    pub fn validate_email(email: &str) -> Result<()> {
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if valid {
            Ok(())
        } else {
            Err(PatternError::InvalidEmail {
                email: email.to_string(),
            })
        }
    }
}

#[derive(Debug, Default)]
pub struct UserRepository {
    users: Vec<User>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, user: &User) -> String {
        self.users.push(user.clone());
        format!("Saving {} to database...", user.name)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

pub struct WelcomeMailer;

impl WelcomeMailer {
    pub fn send_welcome_email(user: &User) -> String {
        format!("Sending welcome email to {}", user.email)
    }
}

pub struct ReportGenerator;

impl ReportGenerator {
    pub fn user_report(user: &User) -> String {
        format!("User Report: {} - {}", user.name, user.email)
    }
}

/// Registers a user by composing the single-purpose pieces.
pub fn register(repository: &mut UserRepository, user: &User) -> Result<Vec<String>> {
    UserValidator::validate_email(&user.email)?;
    Ok(vec![
        repository.save(user),
        WelcomeMailer::send_welcome_email(user),
        ReportGenerator::user_report(user),
    ])
}
