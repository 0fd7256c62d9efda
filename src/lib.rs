//! Reference-counted **copy-on-write byte strings** 🧵
//!
//! * cheap **clones**: a clone shares the buffer, no copy
//! * zero-copy **substrings**: [`substr`](Strand::substr) is a window into the
//!   parent's buffer
//! * no copy **literal wrapping** with [`Strand::from_static`]
//! * **detach-on-write**: the first handle to write while others are looking
//!   silently moves to a private copy
//! * amortized O(1) **appends** with capacity doubling
//! * **zero dependency**, except for optional `serde` and `bstr` support
//!
//! # Examples
//!
//! ```rust
//! use strand::Strand;
//!
//! let record = Strand::from("0123$#456$#789");
//! let fields: Vec<Strand> = record.split("$#").collect();
//! assert_eq!(fields, ["0123", "456", "789"]);
//! // all four strands share one allocation
//! assert_eq!(record.references_count(), 4);
//!
//! let mut copy = fields[2].clone();
//! copy.push_slice("!"); // detaches, nobody else is affected
//! assert_eq!(copy, "789!");
//! assert_eq!(fields[2], "789");
//! ```
//!
//! # Sharing and mutation
//!
//! A [`Strand`] is a handle: a window (offset and length) into a
//! reference-counted, fixed-capacity buffer. Reads never copy. Writes follow
//! two rules:
//!
//! - a handle writes its buffer in place only while it is the *sole* handle
//!   on that buffer and holds the buffer's write lease;
//! - a handle that wants to write without that right detaches first onto a
//!   private copy of its window.
//!
//! Bytes observed through a strand therefore never change behind its back,
//! no matter what other strands do.
//!
//! # Single-threaded
//!
//! Sharing is tracked with plain non-atomic counters, so [`Strand`] is
//! neither [`Send`] nor [`Sync`]. Copy the bytes out (for example with
//! `Vec::from`) to move data across threads.
//!
//! # Features
//!
//! * `serde`: `Serialize` and `Deserialize` as byte strings
//! * `bstr`: conversions and comparisons with the `bstr` crate's byte
//!   strings, and a printable `as_bstr` view

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(unsafe_op_in_unsafe_fn)]

mod macros;
mod seq;
mod storage;
pub mod strand;

pub use seq::ByteSeq;
pub use strand::{OutOfBounds, Split, Strand};
