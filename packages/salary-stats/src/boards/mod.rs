//! [`JobBoard`](crate::JobBoard) implementations for the supported sites.

pub mod hh;
pub mod superjob;

pub use hh::HeadHunterBoard;
pub use superjob::SuperJobBoard;
