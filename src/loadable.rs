// ABOUTME: Three-state loading container used by every view
// ABOUTME: Distinguishes not-yet-loaded, failed-with-reason, and loaded data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Loading state
//!
//! An empty collection is a successful load, never a stand-in for
//! "still loading" or "could not load".

/// Data that is pending, failed to load, or ready
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Loadable<T> {
    /// No answer yet
    #[default]
    Pending,
    /// The load failed; the reason is kept for rendering
    Failed(String),
    /// Loaded data (possibly empty)
    Ready(T),
}

impl<T> Loadable<T> {
    /// Whether nothing has been received yet
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether data is available
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Loaded data, if any
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Failure reason, if the load failed
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
