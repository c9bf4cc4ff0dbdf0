//! On-disk log files:
//!
//! ```text
//! offset 0..2   record count, big-endian u16
//! offset 2..4   spare, zero
//! offset 4..    count fixed 40-byte records, oldest first
//! final byte    additive checksum of every byte before it
//! ```

pub mod appender;
pub mod error;
pub mod reader;

pub use appender::{append, AppendReceipt};
pub use error::StoreError;
pub use reader::{LogReader, RecordIter};

pub const FILE_HEADER_SIZE: usize = 4;
