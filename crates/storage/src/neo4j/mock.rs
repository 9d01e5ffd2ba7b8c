//! Mock connector for testing

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use async_trait::async_trait;
use graphconn_core::{AccessMode, DriverOptions};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::traits::{ConnectParams, GraphConnector};
use crate::error::StorageError;

/// Handle produced by [`MockConnector`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockHandle {
    /// Order in which this handle was constructed, starting at 1
    pub serial: usize,
    pub mode: AccessMode,
    pub uri: String,
    pub user: String,
    pub database: String,
    pub options: DriverOptions,
}

/// A recorded call to [`MockConnector::connect`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectCall {
    pub mode: AccessMode,
    pub uri: String,
}

/// Connector that builds in-memory handles and records every call
#[derive(Debug, Default)]
pub struct MockConnector {
    calls: Mutex<Vec<ConnectCall>>,
    constructed: AtomicUsize,
    fail_next: AtomicBool,
    delay: Option<Duration>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `connect` sleep before returning, widening race windows
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Fail the next `connect` call with `ConnectionFailed`
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Number of `connect` calls, successful or not
    pub fn connect_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Number of `connect` calls for one mode
    pub fn connect_count_for(&self, mode: AccessMode) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.mode == mode)
            .count()
    }

    pub fn calls(&self) -> Vec<ConnectCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphConnector for MockConnector {
    type Handle = MockHandle;

    async fn connect(&self, params: ConnectParams<'_>) -> Result<MockHandle, StorageError> {
        self.calls.lock().unwrap().push(ConnectCall {
            mode: params.mode,
            uri: params.uri.to_string(),
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StorageError::ConnectionFailed(format!(
                "mock refused connection to {}",
                params.uri
            )));
        }

        let serial = self.constructed.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(MockHandle {
            serial,
            mode: params.mode,
            uri: params.uri.to_string(),
            user: params.user.to_string(),
            database: params.database.to_string(),
            options: params.options.clone(),
        })
    }
}
