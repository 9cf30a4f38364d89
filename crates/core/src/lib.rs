//! `fitclub-core` — domain foundation building blocks.
//!
//! Pure domain primitives shared by the store and API layers; no
//! infrastructure concerns.

pub mod error;
pub mod id;
pub mod stamp;

pub use error::InvalidRecordId;
pub use id::RecordId;
pub use stamp::InsertStamp;
