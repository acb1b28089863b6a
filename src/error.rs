//! Error handling for datlib operations
//!
//! This module re-exports the error types defined in [`crate::common`] so
//! callers can `use datlib::error::{DatLibError, Result}`.

pub use crate::common::DatLibError;
pub use crate::common::Result;
