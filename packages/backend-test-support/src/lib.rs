//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing: unified
//! logging initialization, unique test data, HTTP auth header builders and
//! Problem Details assertions.

pub mod http_auth;
pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
