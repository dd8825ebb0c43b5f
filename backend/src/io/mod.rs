//! # IO Module
//!
//! HTTP interface over the domain services. Handlers translate JSON requests
//! into service calls and domain errors into status codes with an
//! `ApiErrorResponse` body.

pub mod rest;

pub use rest::*;
