//! Networking for the `/solve` round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the upload and classifies the reply; `types` defines the
//! wire schema and its mapping into display fields.

pub mod api;
pub mod types;
