// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # dds-connector
//!
//! Safe Rust binding to the native `ddsconnector` DDS library. The native
//! side owns the wire protocol, discovery, QoS negotiation and sample
//! storage; this crate is the marshaling layer on top of it: string
//! conversion, disposal checks, string-ownership handoff, and error
//! translation into [`ConnectorError`].
//!
//! ## Usage
//!
//! ```ignore
//! // Linking requires the vendor runtime; point DDSCONNECTOR_LIB_DIR at it.
//! use dds_connector::Connector;
//!
//! let connector = Connector::new("MyLibrary::MyParticipant", "connector.xml")?;
//! let input = connector.input("MySubscriber::MyReader")?;
//!
//! connector.wait(4000)?;
//! input.take()?;
//! for sample in input.samples()? {
//!     if sample.get_info_bool("valid_data")? {
//!         println!("x = {}", sample.get_number("x")?);
//!     }
//! }
//! # Ok::<(), dds_connector::ConnectorError>(())
//! ```
//!
//! ## Contract
//!
//! - Every operation checks the owning connector's disposed flag before any
//!   native call; a disposed session never reaches the FFI boundary.
//! - Native-owned strings are copied into owned `String`s and released with
//!   the library's free function exactly once; raw pointers never surface.
//! - This layer is a synchronous, stateless façade: no locking, no caching,
//!   no retries, caller-issued order equals native-call order. The native
//!   library's thread-safety and batch-refresh semantics are its own
//!   contract, which is also why [`Connector`] is not `Send`/`Sync`.

mod connector;
mod error;
mod input;
mod native;
mod output;
mod sample;

pub use connector::Connector;
pub use error::{ConnectorError, Result};
pub use input::{Input, Samples};
pub use output::{Instance, Output};
pub use sample::Sample;
