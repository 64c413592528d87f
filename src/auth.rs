//! Collaborators consumed by the navigation engine.
//!
//! The engine performs no I/O of its own. It reads the current user from an
//! [`AuthController`] and hands a [`DataSourceDelegate`] to collection and
//! view builders untouched.

use crate::permissions::Role;
use std::fmt;

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    /// Unique id
    pub uid: String,
    /// Display name, if known
    pub display_name: Option<String>,
    /// Email, if known
    pub email: Option<String>,
    /// Roles assigned to the user
    pub roles: Vec<Role>,
}

impl User {
    /// Create a user with the given uid.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }

    /// Set the display name.
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set the email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Add a role.
    pub fn role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }
}

/// Source of the current authentication state.
pub trait AuthController: Send + Sync + 'static {
    /// The signed-in user, `None` when signed out.
    fn user(&self) -> Option<&User>;

    /// `true` while the initial session is still being established.
    ///
    /// Resolution is skipped in this state so permission rules never run
    /// against an unknown user.
    fn initial_loading(&self) -> bool;
}

/// A fixed snapshot of authentication state.
///
/// Swap in a new snapshot through
/// [`NavigationController::set_auth_controller`](crate::NavigationController::set_auth_controller)
/// whenever the session changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    /// Signed-in user
    pub user: Option<User>,
    /// Whether the session is still being established
    pub initial_loading: bool,
}

impl AuthState {
    /// A state with a signed-in user.
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            initial_loading: false,
        }
    }

    /// A state with nobody signed in.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// A state still waiting for the session.
    pub fn loading() -> Self {
        Self {
            user: None,
            initial_loading: true,
        }
    }
}

impl AuthController for AuthState {
    fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn initial_loading(&self) -> bool {
        self.initial_loading
    }
}

/// Backend handle passed opaquely to collection and view builders.
pub trait DataSourceDelegate: Send + Sync + 'static {
    /// Short identifier of the backend, used in log output.
    fn key(&self) -> &str;
}

/// A data source that does nothing, for configurations whose builders never
/// touch the backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDataSource;

impl DataSourceDelegate for NoDataSource {
    fn key(&self) -> &str {
        "none"
    }
}

impl fmt::Debug for dyn DataSourceDelegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSourceDelegate")
            .field("key", &self.key())
            .finish()
    }
}

impl fmt::Debug for dyn AuthController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthController")
            .field("user", &self.user().map(|u| &u.uid))
            .field("initial_loading", &self.initial_loading())
            .finish()
    }
}
