// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dispatch layer between the safe API and the native entry points.
//!
//! In normal builds every function forwards straight to `dds-connector-sys`.
//! Under `cfg(test)` the whole module is replaced by [`mock`], which records
//! call counts and serves scripted return values from thread-local state, so
//! the binding's contract (disposal checks, string ownership handoff, retcode
//! mapping) is testable without the vendor runtime installed.

use std::os::raw::c_void;

/// Opaque native connector handle as carried by the safe layer. Only ever
/// produced by [`new`] and consumed by the other entry points; never
/// dereferenced on the Rust side.
pub(crate) type RawConnector = *mut c_void;

pub(crate) const RETCODE_OK: i32 = 0;
pub(crate) const RETCODE_TIMEOUT: i32 = 10;

#[cfg(not(test))]
mod real {
    use super::RawConnector;
    use dds_connector_sys as sys;
    use std::os::raw::{c_char, c_int, c_void};

    #[inline]
    fn conn(c: RawConnector) -> *mut sys::DDS_Connector {
        c.cast::<sys::DDS_Connector>()
    }

    pub(crate) unsafe fn new(config_name: *const c_char, config_file: *const c_char) -> RawConnector {
        sys::DDSConnector_new(config_name, config_file).cast::<c_void>()
    }

    pub(crate) unsafe fn delete(c: RawConnector) {
        sys::DDSConnector_delete(conn(c));
    }

    pub(crate) unsafe fn get_reader(c: RawConnector, entity: *const c_char) -> *mut c_void {
        sys::DDSConnector_getReader(conn(c), entity).cast::<c_void>()
    }

    pub(crate) unsafe fn get_writer(c: RawConnector, entity: *const c_char) -> *mut c_void {
        sys::DDSConnector_getWriter(conn(c), entity).cast::<c_void>()
    }

    pub(crate) unsafe fn read(c: RawConnector, entity: *const c_char) -> c_int {
        sys::DDSConnector_read(conn(c), entity)
    }

    pub(crate) unsafe fn take(c: RawConnector, entity: *const c_char) -> c_int {
        sys::DDSConnector_take(conn(c), entity)
    }

    pub(crate) unsafe fn wait(c: RawConnector, timeout_ms: c_int) -> c_int {
        sys::DDSConnector_wait(conn(c), timeout_ms)
    }

    pub(crate) unsafe fn get_samples_length(c: RawConnector, entity: *const c_char) -> f64 {
        sys::DDSConnector_getSamplesLength(conn(c), entity)
    }

    pub(crate) unsafe fn get_number_from_samples(
        c: RawConnector,
        entity: *const c_char,
        index: c_int,
        field: *const c_char,
    ) -> f64 {
        sys::DDSConnector_getNumberFromSamples(conn(c), entity, index, field)
    }

    pub(crate) unsafe fn get_boolean_from_samples(
        c: RawConnector,
        entity: *const c_char,
        index: c_int,
        field: *const c_char,
    ) -> c_int {
        sys::DDSConnector_getBooleanFromSamples(conn(c), entity, index, field)
    }

    pub(crate) unsafe fn get_string_from_samples(
        c: RawConnector,
        entity: *const c_char,
        index: c_int,
        field: *const c_char,
    ) -> *mut c_char {
        sys::DDSConnector_getStringFromSamples(conn(c), entity, index, field)
    }

    pub(crate) unsafe fn get_json_sample(
        c: RawConnector,
        entity: *const c_char,
        index: c_int,
    ) -> *mut c_char {
        sys::DDSConnector_getJSONSample(conn(c), entity, index)
    }

    pub(crate) unsafe fn get_boolean_from_infos(
        c: RawConnector,
        entity: *const c_char,
        index: c_int,
        field: *const c_char,
    ) -> c_int {
        sys::DDSConnector_getBooleanFromInfos(conn(c), entity, index, field)
    }

    pub(crate) unsafe fn clear(c: RawConnector, entity: *const c_char) {
        sys::DDSConnector_clear(conn(c), entity);
    }

    pub(crate) unsafe fn set_number_into_samples(
        c: RawConnector,
        entity: *const c_char,
        field: *const c_char,
        value: f64,
    ) {
        sys::DDSConnector_setNumberIntoSamples(conn(c), entity, field, value);
    }

    pub(crate) unsafe fn set_boolean_into_samples(
        c: RawConnector,
        entity: *const c_char,
        field: *const c_char,
        value: c_int,
    ) {
        sys::DDSConnector_setBooleanIntoSamples(conn(c), entity, field, value);
    }

    pub(crate) unsafe fn set_string_into_samples(
        c: RawConnector,
        entity: *const c_char,
        field: *const c_char,
        value: *const c_char,
    ) {
        sys::DDSConnector_setStringIntoSamples(conn(c), entity, field, value);
    }

    pub(crate) unsafe fn set_json_instance(
        c: RawConnector,
        entity: *const c_char,
        json: *const c_char,
    ) -> c_int {
        sys::DDSConnector_setJSONInstance(conn(c), entity, json)
    }

    pub(crate) unsafe fn write(c: RawConnector, entity: *const c_char) -> c_int {
        sys::DDSConnector_write(conn(c), entity)
    }

    pub(crate) unsafe fn free_string(s: *mut c_char) {
        sys::DDSConnector_freeString(s);
    }
}

#[cfg(not(test))]
pub(crate) use real::*;

#[cfg(test)]
pub(crate) use mock::api::*;
