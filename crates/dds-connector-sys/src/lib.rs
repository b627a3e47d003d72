// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # dds-connector-sys
//!
//! Raw FFI declarations for the native `ddsconnector` shared library: one
//! `extern "C"` declaration per native entry point, plus the opaque handle
//! type and the retcodes the library reports. No behavioral content lives
//! here; the safe API is in the `dds-connector` crate.
//!
//! Linking is opt-in: set `DDSCONNECTOR_LIB_DIR` to the directory containing
//! `libddsconnector` and the build script emits the link directives. Without
//! it the crate still compiles, which is how the workspace builds and tests
//! on machines that do not carry the vendor runtime.
//!
//! # String ownership
//!
//! Every `*mut c_char` returned by the library (`getStringFromSamples`,
//! `getJSONSample`) is owned by the native side and must be released with
//! [`DDSConnector_freeString`] exactly once. A null return signals failure,
//! in which case there is nothing to free.

#![allow(non_camel_case_types, non_snake_case)]

use libc::{c_char, c_double, c_int};

/// Opaque handle to a native connector session.
#[repr(C)]
pub struct DDS_Connector {
    _private: [u8; 0],
}

/// Opaque handle to a data-reader or data-writer entity inside a connector.
#[repr(C)]
pub struct DDS_Entity {
    _private: [u8; 0],
}

pub const DDS_RETCODE_OK: c_int = 0;
pub const DDS_RETCODE_TIMEOUT: c_int = 10;

extern "C" {
    /// Creates a connector session from an XML configuration. Returns null on
    /// failure (missing file, unknown configuration name, DDS init failure).
    pub fn DDSConnector_new(
        config_name: *const c_char,
        config_file: *const c_char,
    ) -> *mut DDS_Connector;

    /// Tears down the session and every entity derived from it. The handle
    /// must not be used afterwards.
    pub fn DDSConnector_delete(connector: *mut DDS_Connector);

    /// Resolves a data-reader entity by name. Returns null if the
    /// configuration defines no such reader.
    pub fn DDSConnector_getReader(
        connector: *mut DDS_Connector,
        entity_name: *const c_char,
    ) -> *mut DDS_Entity;

    /// Resolves a data-writer entity by name. Returns null if the
    /// configuration defines no such writer.
    pub fn DDSConnector_getWriter(
        connector: *mut DDS_Connector,
        entity_name: *const c_char,
    ) -> *mut DDS_Entity;

    /// Refreshes the reader's sample batch without removing samples from the
    /// native queue.
    pub fn DDSConnector_read(
        connector: *mut DDS_Connector,
        entity_name: *const c_char,
    ) -> c_int;

    /// Refreshes the reader's sample batch, removing the returned samples
    /// from the native queue.
    pub fn DDSConnector_take(
        connector: *mut DDS_Connector,
        entity_name: *const c_char,
    ) -> c_int;

    /// Blocks until any reader in the session receives data or the timeout
    /// (milliseconds, -1 = infinite) elapses. Returns `DDS_RETCODE_TIMEOUT`
    /// on timeout.
    pub fn DDSConnector_wait(connector: *mut DDS_Connector, timeout_ms: c_int) -> c_int;

    /// Number of samples in the reader's current batch.
    pub fn DDSConnector_getSamplesLength(
        connector: *mut DDS_Connector,
        entity_name: *const c_char,
    ) -> c_double;

    pub fn DDSConnector_getNumberFromSamples(
        connector: *mut DDS_Connector,
        entity_name: *const c_char,
        index: c_int,
        field_name: *const c_char,
    ) -> c_double;

    pub fn DDSConnector_getBooleanFromSamples(
        connector: *mut DDS_Connector,
        entity_name: *const c_char,
        index: c_int,
        field_name: *const c_char,
    ) -> c_int;

    /// Returns a native-owned string, or null on failure. See the module docs
    /// for the ownership protocol.
    pub fn DDSConnector_getStringFromSamples(
        connector: *mut DDS_Connector,
        entity_name: *const c_char,
        index: c_int,
        field_name: *const c_char,
    ) -> *mut c_char;

    /// Serializes the whole sample to JSON. Native-owned string, null on
    /// failure.
    pub fn DDSConnector_getJSONSample(
        connector: *mut DDS_Connector,
        entity_name: *const c_char,
        index: c_int,
    ) -> *mut c_char;

    /// Reads a boolean flag from the sample's metadata block (for example
    /// `valid_data`), not from the payload.
    pub fn DDSConnector_getBooleanFromInfos(
        connector: *mut DDS_Connector,
        entity_name: *const c_char,
        index: c_int,
        field_name: *const c_char,
    ) -> c_int;

    /// Resets the writer's staged instance to default member values.
    pub fn DDSConnector_clear(connector: *mut DDS_Connector, entity_name: *const c_char);

    pub fn DDSConnector_setNumberIntoSamples(
        connector: *mut DDS_Connector,
        entity_name: *const c_char,
        field_name: *const c_char,
        value: c_double,
    );

    pub fn DDSConnector_setBooleanIntoSamples(
        connector: *mut DDS_Connector,
        entity_name: *const c_char,
        field_name: *const c_char,
        value: c_int,
    );

    pub fn DDSConnector_setStringIntoSamples(
        connector: *mut DDS_Connector,
        entity_name: *const c_char,
        field_name: *const c_char,
        value: *const c_char,
    );

    /// Populates the writer's staged instance from a JSON document.
    pub fn DDSConnector_setJSONInstance(
        connector: *mut DDS_Connector,
        entity_name: *const c_char,
        json: *const c_char,
    ) -> c_int;

    /// Publishes the writer's staged instance.
    pub fn DDSConnector_write(connector: *mut DDS_Connector, entity_name: *const c_char)
        -> c_int;

    /// Releases a string previously returned by the library. Must be called
    /// exactly once per non-null returned pointer.
    pub fn DDSConnector_freeString(s: *mut c_char);
}
