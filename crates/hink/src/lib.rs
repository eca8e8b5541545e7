//!
//! Small in-memory collections and a GUID value type.
//!
//! Every structure here is a thin, synchronous wrapper over an ordered
//! sequence: a key/value [`Pair`], an insertion-ordered [`Dictionary`] of
//! unique-keyed pairs, a fixed-capacity [`Tuple`], a LIFO [`Stack`], a FIFO
//! [`Queue`], and a 32-nibble [`Guid`] with template-driven renderings.
//!
//! None of the types lock internally. Share them across threads behind an
//! external mutex.
//!

pub mod dictionary;
pub mod error;
pub mod guid;
pub mod log;
pub mod pair;
pub mod queue;
pub mod rand;
pub mod stack;
pub mod tuple;

pub use dictionary::{Dictionary, Entry};
pub use error::Error;
pub use guid::Guid;
pub use pair::{IntoPair, Pair, Record};
pub use queue::Queue;
pub use stack::Stack;
pub use tuple::Tuple;

///
/// Result
///

pub type Result<T, E = Error> = core::result::Result<T, E>;
