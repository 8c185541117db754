//! Driving port for user operations.
//!
//! Inbound adapters (HTTP handlers) use this port to read and submit users
//! without knowing where the data comes from. The fixture implementation
//! serves two hard-coded users and stores nothing.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{Error, User, UserId};

/// Domain use-case port covering the user capability set.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Return every visible user.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Fetch a single user by identifier.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;

    /// Accept a new user and return the stored representation.
    async fn create_user(&self, user: User) -> Result<User, Error>;

    /// Replace an existing user.
    async fn update_user(&self, user: User) -> Result<User, Error>;

    /// Remove a user.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}

const FIXTURE_USERS: [(i64, &str, &str); 2] = [
    (1, "John Doe", "john@example.com"),
    (2, "Jane Smith", "jane@example.com"),
];

fn fixture_users() -> Vec<User> {
    FIXTURE_USERS
        .iter()
        .map(|&(id, name, email)| User::new(id, name, email))
        .collect()
}

fn find_fixture(id: UserId) -> Result<User, Error> {
    fixture_users()
        .into_iter()
        .find(|user| user.id() == id)
        .ok_or_else(|| Error::not_found(format!("user {id} not found")))
}

/// Fixture user service returning the same two users on every call.
///
/// Writes are acknowledged but never persisted, so every request observes
/// the same data.
///
/// # Examples
/// ```
/// use roster::domain::ports::{FixtureUserService, UserService};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let users = FixtureUserService.list_users().await.expect("fixture users");
/// assert_eq!(users.len(), 2);
/// # });
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserService;

#[async_trait]
impl UserService for FixtureUserService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        Ok(fixture_users())
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        find_fixture(id)
    }

    async fn create_user(&self, user: User) -> Result<User, Error> {
        debug!(user_id = %user.id(), "fixture service accepted user without storing it");
        Ok(user)
    }

    async fn update_user(&self, user: User) -> Result<User, Error> {
        find_fixture(user.id())?;
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        find_fixture(id).map(|_| ())
    }
}
