// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Publishing endpoint: stages field values into the writer's instance and
//! publishes it.

use std::ffi::{CStr, CString};
use std::os::raw::c_int;
use std::sync::Arc;

use log::trace;

use crate::connector::ConnectorHandle;
use crate::error::{check_retcode, to_cstring, Result};
use crate::native;

/// A named data-writer endpoint within a connector.
///
/// Same lifecycle model as an input: a non-owning reference to the connector
/// session, with the disposed flag checked before every native call.
#[derive(Debug)]
pub struct Output {
    handle: Arc<ConnectorHandle>,
    name: String,
    c_name: CString,
}

impl Output {
    pub(crate) fn new(handle: Arc<ConnectorHandle>, name: String, c_name: CString) -> Self {
        Self { handle, name, c_name }
    }

    /// Entity name this output was resolved from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The staging area for the next sample to publish.
    pub fn instance(&self) -> Instance<'_> {
        Instance { output: self }
    }

    /// Resets every member of the staged instance to its default value.
    pub fn clear_members(&self) -> Result<()> {
        self.handle.check_open()?;
        unsafe { native::clear(self.handle.raw(), self.c_name.as_ptr()) };
        Ok(())
    }

    /// Publishes the staged instance.
    pub fn write(&self) -> Result<()> {
        self.handle.check_open()?;
        trace!("write on output `{}`", self.name);
        let code = unsafe { native::write(self.handle.raw(), self.c_name.as_ptr()) };
        check_retcode(code)
    }

    fn c_name(&self) -> &CStr {
        &self.c_name
    }
}

/// Staged sample of an [`Output`], populated field by field (or wholesale
/// from JSON) before [`Output::write`].
#[derive(Debug)]
pub struct Instance<'a> {
    output: &'a Output,
}

impl Instance<'_> {
    /// Stages a numeric value for `field`.
    pub fn set_number(&self, field: &str, value: f64) -> Result<()> {
        let output = self.output;
        output.handle.check_open()?;
        let c_field = to_cstring(field)?;
        unsafe {
            native::set_number_into_samples(
                output.handle.raw(),
                output.c_name().as_ptr(),
                c_field.as_ptr(),
                value,
            );
        }
        Ok(())
    }

    /// Stages a boolean value for `field`.
    pub fn set_bool(&self, field: &str, value: bool) -> Result<()> {
        let output = self.output;
        output.handle.check_open()?;
        let c_field = to_cstring(field)?;
        unsafe {
            native::set_boolean_into_samples(
                output.handle.raw(),
                output.c_name().as_ptr(),
                c_field.as_ptr(),
                c_int::from(value),
            );
        }
        Ok(())
    }

    /// Stages a string value for `field`.
    pub fn set_string(&self, field: &str, value: &str) -> Result<()> {
        let output = self.output;
        output.handle.check_open()?;
        let c_field = to_cstring(field)?;
        let c_value = to_cstring(value)?;
        unsafe {
            native::set_string_into_samples(
                output.handle.raw(),
                output.c_name().as_ptr(),
                c_field.as_ptr(),
                c_value.as_ptr(),
            );
        }
        Ok(())
    }

    /// Populates the whole instance from a JSON document.
    pub fn set_json(&self, json: &str) -> Result<()> {
        let output = self.output;
        output.handle.check_open()?;
        let c_json = to_cstring(json)?;
        let code = unsafe {
            native::set_json_instance(output.handle.raw(), output.c_name().as_ptr(), c_json.as_ptr())
        };
        check_retcode(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConnectorError;
    use crate::native::mock;
    use crate::Connector;

    fn output() -> (Connector, Output) {
        let c = Connector::new("TestLibrary::TestParticipant", "test.xml").expect("connector");
        let o = c.output("Pub::Writer").expect("output");
        (c, o)
    }

    #[test]
    fn test_setters_marshal_exact_values() {
        mock::reset();
        let (_c, output) = output();
        let instance = output.instance();

        instance.set_number("x", 1.5).expect("set_number");
        instance.set_bool("enabled", true).expect("set_bool");
        instance.set_string("color", "GREEN").expect("set_string");

        mock::with(|s| {
            assert_eq!(
                s.set_numbers,
                vec![("Pub::Writer".to_string(), "x".to_string(), 1.5)]
            );
            assert_eq!(
                s.set_booleans,
                vec![("Pub::Writer".to_string(), "enabled".to_string(), 1)]
            );
            assert_eq!(
                s.set_strings,
                vec![(
                    "Pub::Writer".to_string(),
                    "color".to_string(),
                    "GREEN".to_string()
                )]
            );
        });
    }

    #[test]
    fn test_set_json_and_write() {
        mock::reset();
        let (_c, output) = output();

        output.instance().set_json(r#"{"x":1}"#).expect("set_json");
        output.write().expect("write");
        mock::with(|s| {
            assert_eq!(
                s.set_jsons,
                vec![("Pub::Writer".to_string(), r#"{"x":1}"#.to_string())]
            );
        });
        assert_eq!(mock::calls_to("write"), 1);

        mock::with(|s| s.write_ret = 4);
        assert!(matches!(output.write(), Err(ConnectorError::Native(4))));
    }

    #[test]
    fn test_clear_members() {
        mock::reset();
        let (_c, output) = output();

        output.clear_members().expect("clear");
        mock::with(|s| assert_eq!(s.cleared, vec!["Pub::Writer".to_string()]));
    }

    #[test]
    fn test_disposed_output_issues_no_native_calls() {
        mock::reset();
        let (c, output) = output();
        let instance = output.instance();
        c.dispose();
        mock::reset_calls();

        assert!(matches!(instance.set_number("x", 1.0), Err(ConnectorError::Disposed)));
        assert!(matches!(instance.set_bool("b", false), Err(ConnectorError::Disposed)));
        assert!(matches!(instance.set_string("s", "v"), Err(ConnectorError::Disposed)));
        assert!(matches!(instance.set_json("{}"), Err(ConnectorError::Disposed)));
        assert!(matches!(output.clear_members(), Err(ConnectorError::Disposed)));
        assert!(matches!(output.write(), Err(ConnectorError::Disposed)));
        assert_eq!(mock::total_calls(), 0);
    }
}
