//! Reader, writer, and validating codec for Fedwire Funds Service (FAIM)
//! messages.
//!
//! A Fedwire message is a single concatenated record of tagged segments
//! (`{1500}`, `{3400}`, `{4200}`, …), each with a positional prefix and a
//! `*`-delimited tail. This crate losslessly round-trips between that
//! on-wire form and the structured model of [`fedwire_types`]:
//!
//! * [`SegmentCodec`], the per-tag bidirectional codec
//!   ([`decode::Decoder`] / [`encode::Encoder`]);
//! * [`Reader`], a line-framed state machine assembling
//!   [`FedwireMessage`](types::FedwireMessage)s from a byte stream;
//! * [`Writer`], the canonical-order emitter, gated by message-level
//!   validation.
//!
//! Parsing is structural: it never validates semantic correctness. Call
//! `validate` on a segment or message separately.
//!
//! ```rust
//! use fedwire_codec::decode::Decoder;
//! use fedwire_codec::SegmentCodec;
//!
//! let (rest, segment) = SegmentCodec.decode("{2000}000000001234")?;
//! assert!(rest.is_empty());
//! assert!(segment.validate().is_ok());
//! # Ok::<(), fedwire_codec::decode::SegmentDecodeError>(())
//! ```

#![deny(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod codec;
mod fields;
mod reader;
mod segments;
mod writer;

pub use codec::{decode, encode};
pub use fedwire_types as types;
pub use reader::{ReadError, Reader};
pub use writer::{WriteError, Writer};

/// Codec for a single tag segment.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SegmentCodec;
