//! Data structures for Fedwire Funds Service (FAIM) messages.
//!
//! This crate owns the *shapes* and the *rules*: one plain data record per
//! tag segment, the shared composite records, the lexical validators, the
//! error taxonomy, and the [`FedwireMessage`] model with its message-level
//! validation engine. Reading and writing the on-wire form lives in the
//! companion codec crate.
//!
//! # Overview
//!
//! ```text
//!  validators ──► segments (one record per {NNNN} tag) ──► FedwireMessage
//!      │                        │                               │
//!      └── ErrorKind ◄── FieldError ◄──────────── ValidationError
//! ```
//!
//! Records hold trimmed field values as owned strings; `validate` applies
//! inclusion rules first, then the lexical checks in declared field order,
//! and returns the first violation.

#![deny(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod message;
pub mod party;
pub mod segments;
pub mod tag;
pub mod validators;

pub use error::{ErrorKind, FieldError, ValidationError};
pub use message::FedwireMessage;
pub use segments::Segment;
pub use tag::Tag;
