// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Connector session lifecycle.
//!
//! A [`Connector`] owns the native session created from an XML configuration
//! and hands out [`Input`] and [`Output`] endpoints. Disposal is explicit (or
//! happens on drop) and is observed by every derived endpoint and sample
//! accessor: once the disposed flag is set, no further native call is issued
//! through this handle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;

use crate::error::{check_retcode, to_cstring, ConnectorError, Result};
use crate::input::Input;
use crate::native::{self, RawConnector};
use crate::output::Output;

/// Shared view of the native session pointer plus its disposed flag.
///
/// The flag is atomic because disposal may not be sequenced against reads by
/// the compiler alone; every public operation loads it before touching native
/// memory, and the delete itself is guarded by a swap so it runs exactly once.
#[derive(Debug)]
pub(crate) struct ConnectorHandle {
    raw: RawConnector,
    disposed: AtomicBool,
}

impl ConnectorHandle {
    fn new(raw: RawConnector) -> Self {
        Self {
            raw,
            disposed: AtomicBool::new(false),
        }
    }

    pub(crate) fn raw(&self) -> RawConnector {
        self.raw
    }

    pub(crate) fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Fails fast if the session was disposed. Called at the top of every
    /// operation that would otherwise cross the FFI boundary.
    pub(crate) fn check_open(&self) -> Result<()> {
        if self.is_disposed() {
            Err(ConnectorError::Disposed)
        } else {
            Ok(())
        }
    }

    fn dispose(&self) {
        if !self.disposed.swap(true, Ordering::AcqRel) {
            debug!("deleting native connector session");
            unsafe { native::delete(self.raw) };
        }
    }
}

impl Drop for ConnectorHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// A native DDS connector session.
///
/// Created from an XML configuration file and a configuration name, exactly
/// as the native library expects them. The session and everything derived
/// from it is torn down when the connector is disposed or dropped; endpoints
/// that outlive it return [`ConnectorError::Disposed`] instead of touching
/// freed native memory.
///
/// The handle is not `Send`/`Sync`: this layer adds no synchronization of its
/// own, and the native library's thread-safety rules are its own contract.
#[derive(Debug)]
pub struct Connector {
    handle: Arc<ConnectorHandle>,
    config_name: String,
}

impl Connector {
    /// Creates a connector session from `config_file`, instantiating the
    /// configuration named `config_name`.
    pub fn new(config_name: &str, config_file: &str) -> Result<Self> {
        let c_name = to_cstring(config_name)?;
        let c_file = to_cstring(config_file)?;
        let raw = unsafe { native::new(c_name.as_ptr(), c_file.as_ptr()) };
        if raw.is_null() {
            return Err(ConnectorError::Creation(config_name.to_owned()));
        }
        debug!("created connector session from configuration `{config_name}`");
        Ok(Self {
            handle: Arc::new(ConnectorHandle::new(raw)),
            config_name: config_name.to_owned(),
        })
    }

    /// Configuration name this session was created from.
    pub fn config_name(&self) -> &str {
        &self.config_name
    }

    /// Resolves the data-reader endpoint named `entity_name`.
    pub fn input(&self, entity_name: &str) -> Result<Input> {
        self.handle.check_open()?;
        let c_entity = to_cstring(entity_name)?;
        let reader = unsafe { native::get_reader(self.handle.raw(), c_entity.as_ptr()) };
        if reader.is_null() {
            return Err(ConnectorError::EntityNotFound(entity_name.to_owned()));
        }
        Ok(Input::new(Arc::clone(&self.handle), entity_name.to_owned(), c_entity))
    }

    /// Resolves the data-writer endpoint named `entity_name`.
    pub fn output(&self, entity_name: &str) -> Result<Output> {
        self.handle.check_open()?;
        let c_entity = to_cstring(entity_name)?;
        let writer = unsafe { native::get_writer(self.handle.raw(), c_entity.as_ptr()) };
        if writer.is_null() {
            return Err(ConnectorError::EntityNotFound(entity_name.to_owned()));
        }
        Ok(Output::new(Arc::clone(&self.handle), entity_name.to_owned(), c_entity))
    }

    /// Blocks until any reader in the session receives data, or `timeout_ms`
    /// elapses (`-1` waits forever). Timeout is reported as
    /// [`ConnectorError::Timeout`].
    pub fn wait(&self, timeout_ms: i32) -> Result<()> {
        self.handle.check_open()?;
        let code = unsafe { native::wait(self.handle.raw(), timeout_ms) };
        check_retcode(code)
    }

    /// Whether this session has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.handle.is_disposed()
    }

    /// Tears down the native session. Idempotent; the native delete runs at
    /// most once. Endpoints derived from this connector keep existing but
    /// fail with [`ConnectorError::Disposed`] from here on.
    pub fn dispose(&self) {
        self.handle.dispose();
    }
}

impl Drop for Connector {
    fn drop(&mut self) {
        self.handle.dispose();
    }
}
