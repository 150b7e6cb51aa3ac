// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sharing an engine between threads.
//!
//! The engines themselves are plain single-threaded values. There are two ways
//! to put one behind several threads:
//!
//! - **Build-then-freeze**: build it, wrap it in an `Arc`, and only ever call
//!   the `&self` query methods. No locking at all.
//! - **Single writer, many readers**: wrap it in a [`SharedIndex`]. Queries take
//!   the read lock and run concurrently; `insert` / `add_document` take the
//!   write lock, so no reader ever sees a half-applied mutation.
//!
//! The closure-based API keeps guards from escaping: a mutation runs to
//! completion inside `write` before any reader can get back in.

use std::sync::Arc;

use parking_lot::RwLock;

/// Single-writer, multi-reader handle to an engine. Cheap to clone.
#[derive(Debug, Default)]
pub struct SharedIndex<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for SharedIndex<T> {
    fn clone(&self) -> Self {
        SharedIndex {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedIndex<T> {
    pub fn new(index: T) -> Self {
        SharedIndex {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Run a query under the shared read lock.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run a mutation under the exclusive write lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Take the engine back if this is the last handle.
    pub fn into_inner(self) -> Result<T, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => Ok(lock.into_inner()),
            Err(inner) => Err(SharedIndex { inner }),
        }
    }
}
