// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Subscribing endpoint: refreshes the received-sample batch and hands out
//! per-sample accessors.

use std::ffi::{CStr, CString};
use std::sync::Arc;

use log::trace;

use crate::connector::ConnectorHandle;
use crate::error::{check_retcode, Result};
use crate::native;
use crate::sample::Sample;

/// A named data-reader endpoint within a connector.
///
/// Holds a non-owning reference to the connector session; every operation
/// checks the session's disposed flag before crossing the FFI boundary.
#[derive(Debug)]
pub struct Input {
    handle: Arc<ConnectorHandle>,
    name: String,
    c_name: CString,
}

impl Input {
    pub(crate) fn new(handle: Arc<ConnectorHandle>, name: String, c_name: CString) -> Self {
        Self { handle, name, c_name }
    }

    pub(crate) fn handle(&self) -> &ConnectorHandle {
        &self.handle
    }

    pub(crate) fn c_name(&self) -> &CStr {
        &self.c_name
    }

    /// Entity name this input was resolved from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Refreshes the current batch without removing samples from the native
    /// queue.
    pub fn read(&self) -> Result<()> {
        self.handle.check_open()?;
        trace!("read on input `{}`", self.name);
        let code = unsafe { native::read(self.handle.raw(), self.c_name.as_ptr()) };
        check_retcode(code)
    }

    /// Refreshes the current batch, removing the returned samples from the
    /// native queue.
    pub fn take(&self) -> Result<()> {
        self.handle.check_open()?;
        trace!("take on input `{}`", self.name);
        let code = unsafe { native::take(self.handle.raw(), self.c_name.as_ptr()) };
        check_retcode(code)
    }

    /// Number of samples in the current batch, queried live from the native
    /// layer.
    pub fn sample_count(&self) -> Result<usize> {
        self.handle.check_open()?;
        let length = unsafe { native::get_samples_length(self.handle.raw(), self.c_name.as_ptr()) };
        Ok(length as usize)
    }

    /// Accessor for the sample at `index` (zero-based) in the current batch.
    ///
    /// The accessor holds no native resource and performs no caching: it is a
    /// live view keyed by index, so a `read`/`take` in between calls changes
    /// what it observes. Index validity is the native library's contract.
    pub fn sample(&self, index: usize) -> Sample<'_> {
        Sample::new(self, index)
    }

    /// Iterates over the batch as it stands right now. The length is sampled
    /// once at the start of iteration; refreshing the batch mid-iteration is
    /// the native library's concern, not this layer's.
    pub fn samples(&self) -> Result<Samples<'_>> {
        let len = self.sample_count()?;
        Ok(Samples {
            input: self,
            index: 0,
            len,
        })
    }
}

/// Iterator over the current sample batch of an [`Input`].
#[derive(Debug)]
pub struct Samples<'a> {
    input: &'a Input,
    index: usize,
    len: usize,
}

impl<'a> Iterator for Samples<'a> {
    type Item = Sample<'a>;

    fn next(&mut self) -> Option<Sample<'a>> {
        if self.index >= self.len {
            return None;
        }
        let sample = self.input.sample(self.index);
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConnectorError;
    use crate::native::mock;
    use crate::Connector;

    fn input() -> (Connector, Input) {
        let c = Connector::new("TestLibrary::TestParticipant", "test.xml").expect("connector");
        let i = c.input("Sub::Reader").expect("input");
        (c, i)
    }

    #[test]
    fn test_read_take_retcodes() {
        mock::reset();
        let (_c, input) = input();

        assert!(input.read().is_ok());
        assert!(input.take().is_ok());
        assert_eq!(mock::calls_to("read"), 1);
        assert_eq!(mock::calls_to("take"), 1);

        mock::with(|s| s.read_ret = 1);
        assert!(matches!(input.read(), Err(ConnectorError::Native(1))));
        mock::with(|s| s.take_ret = 10);
        assert!(matches!(input.take(), Err(ConnectorError::Timeout)));
    }

    #[test]
    fn test_sample_count_truncates_native_length() {
        mock::reset();
        let (_c, input) = input();

        mock::with(|s| s.samples_length = 3.0);
        assert_eq!(input.sample_count().expect("count"), 3);
        mock::with(|s| s.samples_length = 0.0);
        assert_eq!(input.sample_count().expect("count"), 0);
    }

    #[test]
    fn test_samples_iterator_yields_indexed_accessors() {
        mock::reset();
        let (_c, input) = input();
        mock::with(|s| s.samples_length = 3.0);

        let samples: Vec<_> = input.samples().expect("samples").collect();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].index(), 0);
        assert_eq!(samples[2].index(), 2);

        let iter = input.samples().expect("samples");
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn test_disposed_input_issues_no_native_calls() {
        mock::reset();
        let (c, input) = input();
        c.dispose();
        mock::reset_calls();

        assert!(matches!(input.read(), Err(ConnectorError::Disposed)));
        assert!(matches!(input.take(), Err(ConnectorError::Disposed)));
        assert!(matches!(input.sample_count(), Err(ConnectorError::Disposed)));
        assert!(matches!(input.samples(), Err(ConnectorError::Disposed)));
        assert_eq!(mock::total_calls(), 0);
    }
}
