//! # slotproxy core
//!
//! Domain types shared by the provider client and the HTTP API: the slot
//! shapes at each stage of a request, the error taxonomy, and the
//! conversational time formatter.

pub mod errors;
pub mod formatting;
pub mod models;
