use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{
            auth::{current_user, login, logout, register},
            ApiClient,
        },
        model::error::ApiError,
    },
    model::user::{LoginDto, RegisterDto, Role, UserDto},
};

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// Initial state - stored session not checked yet
    Initializing,
    /// No active session
    Unauthenticated,
    /// Login or registration in flight
    Authenticating,
    /// User is authenticated
    Authenticated(UserDto),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// Whether the auth outcome is still unknown and views should wait.
    pub fn is_pending(&self) -> bool {
        matches!(self, AuthState::Initializing | AuthState::Authenticating)
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }

    pub fn has_role(&self, roles: &[Role]) -> bool {
        self.role().is_some_and(|role| roles.contains(&role))
    }

    /// Whether a 401 in this state should tell the user their session expired.
    ///
    /// A token rejected while the stored session is being restored just leaves the visitor
    /// signed out.
    pub fn reports_expiry(&self) -> bool {
        !matches!(self, AuthState::Initializing)
    }

    /// State after a login or registration attempt: the new user on success, otherwise the state
    /// held before the attempt.
    pub fn after_attempt(previous: AuthState, result: &Result<UserDto, ApiError>) -> AuthState {
        match result {
            Ok(user) => AuthState::Authenticated(user.clone()),
            Err(_) => previous,
        }
    }
}

/// Resolves the stored session on startup.
///
/// A stored token and user are re-validated against the backend; any failure clears them. Without
/// a stored pair no request is made.
pub async fn restore_session(api: &ApiClient) -> AuthState {
    if api.credentials().session().is_none() {
        api.credentials().clear();
        return AuthState::Unauthenticated;
    }

    match current_user(api).await {
        Ok(user) => {
            api.credentials().save_user(&user);
            AuthState::Authenticated(user)
        }
        Err(e) => {
            tracing::warn!("Stored session is no longer valid: {}", e);
            api.credentials().clear();
            AuthState::Unauthenticated
        }
    }
}

/// Logs in and stores the returned token and user.
pub async fn sign_in(api: &ApiClient, credentials: &LoginDto) -> Result<UserDto, ApiError> {
    let response = login(api, credentials).await?;
    api.credentials().save(&response.token, &response.user);
    Ok(response.user)
}

/// Registers with `role` and stores the returned token and user.
pub async fn sign_up(api: &ApiClient, data: &RegisterDto, role: Role) -> Result<UserDto, ApiError> {
    let response = register(api, data, role).await?;
    api.credentials().save(&response.token, &response.user);
    Ok(response.user)
}

/// Re-fetches the current user. A failure signs the user out.
pub async fn reload_user(api: &ApiClient) -> Result<UserDto, ApiError> {
    match current_user(api).await {
        Ok(user) => {
            api.credentials().save_user(&user);
            Ok(user)
        }
        Err(e) => {
            tracing::warn!("Failed to refresh current user, signing out: {}", e);
            logout(api);
            Err(e)
        }
    }
}

/// Signed-in user shared through the app, plus whether the last session ended with a 401.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
    expired: Signal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
            expired: Signal::new(false),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn session_expired(&self) -> bool {
        (self.expired)()
    }

    pub fn acknowledge_expiry(&mut self) {
        self.expired.set(false);
    }

    /// Ends the session after the backend rejected the token.
    pub fn expire(&mut self) {
        let reports_expiry = self.inner.peek().reports_expiry();
        self.inner.set(AuthState::Unauthenticated);
        if reports_expiry {
            self.expired.set(true);
        }
    }

    pub async fn restore(&mut self, api: &ApiClient) {
        let state = restore_session(api).await;
        self.inner.set(state);
    }

    pub async fn login(
        &mut self,
        api: &ApiClient,
        credentials: LoginDto,
    ) -> Result<UserDto, ApiError> {
        let previous = self.begin_attempt();
        let result = sign_in(api, &credentials).await;
        self.finish_attempt(previous, &result);
        result
    }

    pub async fn register(
        &mut self,
        api: &ApiClient,
        data: RegisterDto,
        role: Role,
    ) -> Result<UserDto, ApiError> {
        let previous = self.begin_attempt();
        let result = sign_up(api, &data, role).await;
        self.finish_attempt(previous, &result);
        result
    }

    pub fn logout(&mut self, api: &ApiClient) {
        logout(api);
        self.inner.set(AuthState::Unauthenticated);
    }

    pub async fn refresh_user(&mut self, api: &ApiClient) -> Result<UserDto, ApiError> {
        let result = reload_user(api).await;
        self.inner.set(match &result {
            Ok(user) => AuthState::Authenticated(user.clone()),
            Err(_) => AuthState::Unauthenticated,
        });
        result
    }

    fn begin_attempt(&mut self) -> AuthState {
        let previous = self.inner.peek().clone();
        self.inner.set(AuthState::Authenticating);
        previous
    }

    fn finish_attempt(&mut self, previous: AuthState, result: &Result<UserDto, ApiError>) {
        if let Err(e) = result {
            tracing::info!("Authentication failed: {}", e);
        } else {
            self.expired.set(false);
        }
        self.inner.set(AuthState::after_attempt(previous, result));
    }
}

#[cfg(test)]
mod test;
