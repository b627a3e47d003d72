// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-sample field accessors.
//!
//! A [`Sample`] is an ephemeral view over one item of an input's current
//! batch, identified by `(input, index)`. It caches nothing: every getter is
//! one live native call, so the same accessor observes different data if the
//! batch is refreshed in between. Each getter checks the owning connector's
//! disposed flag before crossing the FFI boundary, and string-returning
//! getters follow a strict ownership handoff: the native layer allocates, we
//! copy into an owned `String`, then release the native buffer.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

use crate::error::{to_cstring, ConnectorError, Result};
use crate::input::Input;
use crate::native;

/// Accessor for one received sample in an [`Input`]'s current batch.
#[derive(Debug)]
pub struct Sample<'a> {
    input: &'a Input,
    index: usize,
}

impl<'a> Sample<'a> {
    pub(crate) fn new(input: &'a Input, index: usize) -> Self {
        Self { input, index }
    }

    /// Zero-based position of this sample within the current batch.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Numeric value of `field`.
    ///
    /// Unknown field names are the native library's contract: no validation
    /// happens at this layer, and faults on that path are reported through
    /// the library's own error channel, not this call's return value.
    pub fn get_number(&self, field: &str) -> Result<f64> {
        self.input.handle().check_open()?;
        let c_field = to_cstring(field)?;
        Ok(unsafe {
            native::get_number_from_samples(
                self.input.handle().raw(),
                self.input.c_name().as_ptr(),
                self.index as c_int,
                c_field.as_ptr(),
            )
        })
    }

    /// Boolean value of `field`. Any nonzero native integer maps to `true`.
    pub fn get_bool(&self, field: &str) -> Result<bool> {
        self.input.handle().check_open()?;
        let c_field = to_cstring(field)?;
        let value = unsafe {
            native::get_boolean_from_samples(
                self.input.handle().raw(),
                self.input.c_name().as_ptr(),
                self.index as c_int,
                c_field.as_ptr(),
            )
        };
        Ok(value != 0)
    }

    /// String value of `field`, copied out of the native buffer.
    pub fn get_string(&self, field: &str) -> Result<String> {
        self.input.handle().check_open()?;
        let c_field = to_cstring(field)?;
        let ptr = unsafe {
            native::get_string_from_samples(
                self.input.handle().raw(),
                self.input.c_name().as_ptr(),
                self.index as c_int,
                c_field.as_ptr(),
            )
        };
        unsafe { copy_and_free(ptr) }
    }

    /// The whole sample serialized to a JSON string.
    pub fn get_json(&self) -> Result<String> {
        self.input.handle().check_open()?;
        let ptr = unsafe {
            native::get_json_sample(
                self.input.handle().raw(),
                self.input.c_name().as_ptr(),
                self.index as c_int,
            )
        };
        unsafe { copy_and_free(ptr) }
    }

    /// Boolean flag from the sample's metadata block (for example
    /// `"valid_data"`), as opposed to a payload field.
    pub fn get_info_bool(&self, field: &str) -> Result<bool> {
        self.input.handle().check_open()?;
        let c_field = to_cstring(field)?;
        let value = unsafe {
            native::get_boolean_from_infos(
                self.input.handle().raw(),
                self.input.c_name().as_ptr(),
                self.index as c_int,
                c_field.as_ptr(),
            )
        };
        Ok(value != 0)
    }
}

/// Copies a native-owned string into caller memory and releases the native
/// buffer.
///
/// A null pointer is an unrecoverable native-side failure, not an absent
/// value; on that path nothing is freed. On the success path the free runs
/// unconditionally once the copy is done, and the raw pointer never reaches
/// the caller.
///
/// # Safety
///
/// `ptr` must be null or a string pointer returned by the native library and
/// not yet freed.
unsafe fn copy_and_free(ptr: *mut c_char) -> Result<String> {
    if ptr.is_null() {
        return Err(ConnectorError::NativeString);
    }
    let owned = CStr::from_ptr(ptr).to_string_lossy().into_owned();
    native::free_string(ptr);
    Ok(owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::mock;
    use crate::Connector;

    fn fixture() -> (Connector, crate::Input) {
        let c = Connector::new("TestLibrary::TestParticipant", "test.xml").expect("connector");
        let i = c.input("Foo").expect("input");
        (c, i)
    }

    #[test]
    fn test_get_number_passes_entity_index_field() {
        mock::reset();
        mock::with(|s| {
            s.numbers.insert("x".into(), 3.14);
        });
        let (_c, input) = fixture();

        let value = input.sample(0).get_number("x").expect("number");
        assert_eq!(value, 3.14);
        assert_eq!(mock::with(|s| s.last_entity.clone()), Some("Foo".into()));
        assert_eq!(mock::with(|s| s.last_index), Some(0));
        assert_eq!(mock::calls_to("getNumberFromSamples"), 1);
    }

    #[test]
    fn test_get_number_after_dispose() {
        mock::reset();
        mock::with(|s| {
            s.numbers.insert("x".into(), 3.14);
        });
        let (c, input) = fixture();
        let sample = input.sample(0);
        assert_eq!(sample.get_number("x").expect("number"), 3.14);

        c.dispose();
        mock::reset_calls();
        assert!(matches!(sample.get_number("x"), Err(ConnectorError::Disposed)));
        assert_eq!(mock::total_calls(), 0);
    }

    #[test]
    fn test_every_getter_fails_fast_when_disposed() {
        mock::reset();
        let (c, input) = fixture();
        let sample = input.sample(0);
        c.dispose();
        mock::reset_calls();

        assert!(matches!(sample.get_number("x"), Err(ConnectorError::Disposed)));
        assert!(matches!(sample.get_bool("x"), Err(ConnectorError::Disposed)));
        assert!(matches!(sample.get_string("x"), Err(ConnectorError::Disposed)));
        assert!(matches!(sample.get_json(), Err(ConnectorError::Disposed)));
        assert!(matches!(sample.get_info_bool("x"), Err(ConnectorError::Disposed)));
        assert_eq!(mock::total_calls(), 0);
    }

    #[test]
    fn test_nonzero_coerces_to_true() {
        mock::reset();
        let (_c, input) = fixture();
        let sample = input.sample(0);

        for truthy in [1, 2, -1] {
            mock::with(|s| {
                s.booleans.insert("flag".into(), truthy);
                s.infos.insert("valid_data".into(), truthy);
            });
            assert!(sample.get_bool("flag").expect("bool"));
            assert!(sample.get_info_bool("valid_data").expect("info"));
        }

        mock::with(|s| {
            s.booleans.insert("flag".into(), 0);
            s.infos.insert("valid_data".into(), 0);
        });
        assert!(!sample.get_bool("flag").expect("bool"));
        assert!(!sample.get_info_bool("valid_data").expect("info"));
    }

    #[test]
    fn test_info_block_uses_distinct_native_entry() {
        mock::reset();
        mock::with(|s| {
            s.infos.insert("valid_data".into(), 1);
        });
        let (_c, input) = fixture();

        assert!(input.sample(0).get_info_bool("valid_data").expect("info"));
        assert_eq!(mock::calls_to("getBooleanFromInfos"), 1);
        assert_eq!(mock::calls_to("getBooleanFromSamples"), 0);
    }

    #[test]
    fn test_get_string_copies_then_frees_exactly_once() {
        mock::reset();
        mock::with(|s| {
            s.strings.insert("color".into(), "BLUE".into());
        });
        let (_c, input) = fixture();

        let value = input.sample(0).get_string("color").expect("string");
        assert_eq!(value, "BLUE");
        assert_eq!(mock::calls_to("freeString"), 1);
        assert_eq!(mock::live_string_count(), 0);
    }

    #[test]
    fn test_null_string_pointer_frees_nothing() {
        mock::reset();
        let (_c, input) = fixture();
        let sample = input.sample(0);

        // No scripted value: the mock returns null, as the native library
        // does on failure.
        assert!(matches!(sample.get_string("color"), Err(ConnectorError::NativeString)));
        assert!(matches!(sample.get_json(), Err(ConnectorError::NativeString)));
        assert_eq!(mock::calls_to("freeString"), 0);
    }

    #[test]
    fn test_json_round_trip_preserves_field_values() {
        mock::reset();
        mock::with(|s| {
            s.samples_length = 1.0;
            s.json = Some(r#"{"x":3.14,"color":"BLUE","enabled":true}"#.into());
        });
        let (_c, input) = fixture();

        let json = input.sample(0).get_json().expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["x"], 3.14);
        assert_eq!(value["color"], "BLUE");
        assert_eq!(value["enabled"], true);
        assert_eq!(mock::calls_to("freeString"), 1);
        assert_eq!(mock::live_string_count(), 0);
    }

    #[test]
    fn test_interior_nul_field_name_never_reaches_native() {
        mock::reset();
        let (_c, input) = fixture();
        let sample = input.sample(0);
        mock::reset_calls();

        assert!(matches!(
            sample.get_number("bad\0name"),
            Err(ConnectorError::InvalidString(_))
        ));
        assert_eq!(mock::total_calls(), 0);
    }
}
