//! An in-memory user directory that can be told to misbehave.
//!
//! It speaks both lookup contracts: [`InMemoryDirectory::fetch`] fails with
//! an opaque error, [`InMemoryDirectory::lookup`] reports a
//! [`LookupFailure`] as a value.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::anyhow;
use tracing::debug;

use crate::error::LookupFailure;
use crate::model::{LookupResult, UserDetails};

#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    users: HashMap<String, UserDetails>,
    unavailable: AtomicBool,
    latency: Option<Duration>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every lookup by `latency` before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn with_user(mut self, id: impl Into<String>, details: UserDetails) -> Self {
        self.insert(id, details);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, details: UserDetails) {
        self.users.insert(id.into(), details);
    }

    /// Simulate the backing service going down or coming back.
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    pub fn is_available(&self) -> bool {
        !self.unavailable.load(Ordering::SeqCst)
    }

    /// Result-style lookup: never fails, the failure is in the value.
    pub async fn lookup(&self, id: &str) -> LookupResult {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if !self.is_available() {
            debug!(id, "directory unavailable");
            return Err(LookupFailure::ServiceNotAvailable);
        }

        self.users
            .get(id)
            .cloned()
            .ok_or(LookupFailure::UserNotFound)
    }

    /// Exception-style lookup: any failure comes back as an opaque error.
    pub async fn fetch(&self, id: &str) -> anyhow::Result<UserDetails> {
        self.lookup(id)
            .await
            .map_err(|failure| anyhow!("lookup of user {id} failed: {failure}"))
    }
}
