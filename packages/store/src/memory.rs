use std::sync::{Arc, Mutex};

use crate::session::TokenStore;

/// In-memory TokenStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
    last_check: Arc<Mutex<Option<f64>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test helper: the stored advisory timestamp, if any.
    pub fn last_check(&self) -> Option<f64> {
        *self.last_check.lock().unwrap()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn remove(&self) {
        *self.token.lock().unwrap() = None;
    }

    fn set_last_check(&self, millis: f64) {
        *self.last_check.lock().unwrap() = Some(millis);
    }

    fn clear_last_check(&self) {
        *self.last_check.lock().unwrap() = None;
    }
}
