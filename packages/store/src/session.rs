//! # Auth session — token persistence and the verify/login/logout lifecycle
//!
//! [`Session`] owns the persisted bearer token and resolves it into an
//! [`AuthState`] against the remote API. All reads and writes of the token go
//! through the [`TokenStore`] trait, so the same logic works against the
//! browser cookie jar ([`crate::CookieTokenStore`]) or an in-memory store in
//! tests ([`crate::MemoryTokenStore`]). Verification is injected through
//! [`VerifyAuth`], implemented by the API client.
//!
//! Lifecycle:
//!
//! | Operation | Behaviour |
//! |-----------|-----------|
//! | [`check_auth`](Session::check_auth) | No persisted token: settles to logged-out without any network call. With a token: verify it; failure clears the token. |
//! | [`login`](Session::login) | Persists the caller-supplied pair, then immediately re-verifies. A pair that fails verification is rolled back and discarded — login is never trusted blindly. |
//! | [`logout`](Session::logout) | Clears the state, the persisted token and the advisory `lastAuthCheck` timestamp. |
//!
//! A user without a verifiable token is always treated as logged out; token and
//! user are never independently valid.

use std::future::Future;

use crate::models::UserInfo;

/// Cookie that mirrors the bearer token, path `/`.
pub const AUTH_TOKEN_COOKIE: &str = "auth_token";

/// Advisory local-storage timestamp of the last successful auth check.
pub const LAST_AUTH_CHECK_KEY: &str = "lastAuthCheck";

/// Token cookie lifetime: 24 hours.
pub const TOKEN_MAX_AGE_SECS: u32 = 86_400;

/// Persistence backend for the bearer token and the advisory check timestamp.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn remove(&self);
    fn set_last_check(&self, millis: f64);
    fn clear_last_check(&self);
}

/// Remote verification of a bearer token.
pub trait VerifyAuth {
    fn verify(&self, token: &str) -> impl Future<Output = Result<UserInfo, String>>;
}

/// Authentication state for the application.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub token: Option<String>,
    /// True until the initial `check_auth` has resolved.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Resolved, logged-out state.
    pub fn logged_out() -> Self {
        Self {
            user: None,
            token: None,
            loading: false,
        }
    }

    fn authenticated(user: UserInfo, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// An auth session backed by a TokenStore and a verifier.
pub struct Session<S: TokenStore, V: VerifyAuth> {
    tokens: S,
    verifier: V,
}

impl<S: TokenStore, V: VerifyAuth> Session<S, V> {
    pub fn new(tokens: S, verifier: V) -> Self {
        Self { tokens, verifier }
    }

    /// The currently persisted token, if any.
    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    /// Resolve the session from any persisted token.
    pub async fn check_auth(&self) -> AuthState {
        let Some(token) = self.tokens.get() else {
            return AuthState::logged_out();
        };
        match self.verifier.verify(&token).await {
            Ok(user) => AuthState::authenticated(user, token),
            Err(_) => self.logout(),
        }
    }

    /// Accept a user/token pair from the OAuth callback, persist it, then
    /// re-verify. The verified profile always supersedes the caller-supplied
    /// one. On verification failure the pair is discarded.
    pub async fn login(
        &self,
        _user: UserInfo,
        token: String,
        now_millis: f64,
    ) -> Result<AuthState, String> {
        self.tokens.set(&token);
        self.tokens.set_last_check(now_millis);
        match self.verifier.verify(&token).await {
            Ok(verified) => Ok(AuthState::authenticated(verified, token)),
            Err(e) => {
                self.logout();
                Err(e)
            }
        }
    }

    /// Clear the persisted token and return the logged-out state.
    pub fn logout(&self) -> AuthState {
        self.tokens.remove();
        self.tokens.clear_last_check();
        AuthState::logged_out()
    }
}

/// Milliseconds since the Unix epoch, platform-aware.
pub fn now_millis() -> f64 {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        js_sys::Date::now()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTokenStore;

    fn user(id: &str) -> UserInfo {
        UserInfo {
            id: id.to_string(),
            username: Some("octocat".to_string()),
            name: None,
            avatar_url: None,
        }
    }

    /// Verifier that accepts any token and returns a fixed user.
    struct Accept(UserInfo);

    impl VerifyAuth for Accept {
        fn verify(&self, _token: &str) -> impl Future<Output = Result<UserInfo, String>> {
            let user = self.0.clone();
            async move { Ok(user) }
        }
    }

    /// Verifier that rejects every token.
    struct Reject;

    impl VerifyAuth for Reject {
        fn verify(&self, _token: &str) -> impl Future<Output = Result<UserInfo, String>> {
            async move { Err("invalid token".to_string()) }
        }
    }

    /// Verifier that must never be called.
    struct NoNetwork;

    impl VerifyAuth for NoNetwork {
        fn verify(&self, _token: &str) -> impl Future<Output = Result<UserInfo, String>> {
            async move { panic!("verify must not be called without a persisted token") }
        }
    }

    #[tokio::test]
    async fn check_auth_without_token_makes_no_network_call() {
        let session = Session::new(MemoryTokenStore::new(), NoNetwork);
        let state = session.check_auth().await;
        assert_eq!(state, AuthState::logged_out());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn check_auth_with_valid_token_authenticates() {
        let tokens = MemoryTokenStore::new();
        tokens.set("tok-1");
        let session = Session::new(tokens, Accept(user("u1")));

        let state = session.check_auth().await;
        assert!(state.is_authenticated());
        assert_eq!(state.token.as_deref(), Some("tok-1"));
        assert_eq!(state.user.unwrap().id, "u1");
    }

    #[tokio::test]
    async fn check_auth_with_bad_token_clears_it() {
        let tokens = MemoryTokenStore::new();
        tokens.set("stale");
        let session = Session::new(tokens.clone(), Reject);

        let state = session.check_auth().await;
        assert_eq!(state, AuthState::logged_out());
        assert_eq!(tokens.get(), None);
    }

    #[tokio::test]
    async fn login_persists_and_uses_verified_profile() {
        let tokens = MemoryTokenStore::new();
        let session = Session::new(tokens.clone(), Accept(user("verified")));

        let state = session
            .login(user("claimed"), "tok-2".to_string(), 1_000.0)
            .await
            .unwrap();
        assert_eq!(state.user.unwrap().id, "verified");
        assert_eq!(tokens.get().as_deref(), Some("tok-2"));
        assert_eq!(tokens.last_check(), Some(1_000.0));
    }

    #[tokio::test]
    async fn login_with_bad_token_rolls_back() {
        let tokens = MemoryTokenStore::new();
        let session = Session::new(tokens.clone(), Reject);

        let err = session
            .login(user("claimed"), "bad".to_string(), 2_000.0)
            .await
            .unwrap_err();
        assert_eq!(err, "invalid token");
        assert_eq!(tokens.get(), None);
        assert_eq!(tokens.last_check(), None);
    }

    #[tokio::test]
    async fn logout_clears_everything() {
        let tokens = MemoryTokenStore::new();
        tokens.set("tok-3");
        tokens.set_last_check(5.0);
        let session = Session::new(tokens.clone(), Accept(user("u1")));

        let state = session.logout();
        assert_eq!(state, AuthState::logged_out());
        assert_eq!(tokens.get(), None);
        assert_eq!(tokens.last_check(), None);
    }
}
