//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by [`User::set_email`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The replacement email address was empty.
    #[error("email cannot be empty")]
    EmptyEmail,
}

/// Numeric user identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Application user.
///
/// Missing JSON fields decode to zero values (`0` and empty strings), so a
/// body carrying only `name` and `email` is accepted.
///
/// ## Invariants
/// - `email`, once replaced through [`User::set_email`], is non-empty.
///
/// # Examples
/// ```
/// use roster::domain::User;
///
/// let mut user = User::new(1, "Ada", "ada@example.com");
/// user.set_email("countess@example.com").expect("non-empty email");
/// assert_eq!(user.display_name(), "Ada <countess@example.com>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct User {
    #[schema(value_type = i64, example = 1)]
    #[serde(alias = "Id", alias = "ID")]
    id: UserId,
    #[schema(example = "John Doe")]
    #[serde(alias = "Name")]
    name: String,
    #[schema(example = "john@example.com")]
    #[serde(alias = "Email")]
    email: String,
}

impl User {
    /// Build a user from its parts.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Stable user identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Name shown to other users.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Render the user as `Name <email>`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// Replace the email address.
    ///
    /// # Errors
    /// Returns [`UserValidationError::EmptyEmail`] when `email` is empty; the
    /// current address is left untouched.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), UserValidationError> {
        let email = email.into();
        if email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        self.email = email;
        Ok(())
    }
}
