// ABOUTME: View lifetime scoping for in-flight backend calls
// ABOUTME: Closing a view cancels its calls so late responses are never applied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! View lifecycle
//!
//! Every view owns a [`ViewScope`]. Handlers route their network calls
//! through [`ViewScope::run`]; once the scope is closed (explicitly, through a
//! [`ScopeCloser`] held by another task, or by dropping the view) the pending
//! call resolves to an `OperationCancelled` error and the handler leaves its
//! state untouched.

use solicitudes_core::errors::{AppError, AppResult};
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Lifetime of one view activation
#[derive(Debug)]
pub struct ViewScope {
    view: &'static str,
    token: CancellationToken,
}

impl ViewScope {
    /// Open a scope for the named view
    #[must_use]
    pub fn new(view: &'static str) -> Self {
        Self {
            view,
            token: CancellationToken::new(),
        }
    }

    /// Open a scope that also closes when `parent` is cancelled
    #[must_use]
    pub fn with_parent(view: &'static str, parent: &CancellationToken) -> Self {
        Self {
            view,
            token: parent.child_token(),
        }
    }

    /// Name of the owning view, for logs
    #[must_use]
    pub const fn view(&self) -> &'static str {
        self.view
    }

    /// Drive `call` unless the scope closes first
    ///
    /// A result that arrives after the scope closed is discarded.
    ///
    /// # Errors
    ///
    /// Returns `OperationCancelled` if the scope is or becomes closed, or
    /// whatever error `call` resolves to.
    pub async fn run<T, F>(&self, operation: &str, call: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        if self.token.is_cancelled() {
            return Err(self.cancelled(operation));
        }

        tokio::select! {
            biased;
            () = self.token.cancelled() => Err(self.cancelled(operation)),
            result = call => {
                if self.token.is_cancelled() {
                    Err(self.cancelled(operation))
                } else {
                    result
                }
            }
        }
    }

    /// Close the scope, cancelling every in-flight call
    pub fn close(&self) {
        if !self.token.is_cancelled() {
            debug!(view = self.view, "View scope closed");
        }
        self.token.cancel();
    }

    /// Whether the scope has been closed
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Handle that can close this scope from another task
    #[must_use]
    pub fn closer(&self) -> ScopeCloser {
        ScopeCloser {
            token: self.token.clone(),
        }
    }

    fn cancelled(&self, operation: &str) -> AppError {
        debug!(view = self.view, operation, "Discarding call for closed view");
        AppError::cancelled(format!("{}: {operation}", self.view))
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Detached handle closing a [`ViewScope`], e.g. on navigation
#[derive(Debug, Clone)]
pub struct ScopeCloser {
    token: CancellationToken,
}

impl ScopeCloser {
    /// Close the associated scope
    pub fn close(&self) {
        self.token.cancel();
    }
}
