//! Browser-form front end for the analog forecast tool: date-range
//! validation, forecast URL building, and the field catalog the page is
//! rendered from. The heavy lifting happens in an external forecast API;
//! this crate decides whether a request is well-formed and what its URL
//! should be.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod request;
pub mod state;
