//! One-shot HTTP fetch of the wallets list.
//!
//! The client performs a single GET and resolves to a tagged result:
//! the decoded JSON payload, or a [`RequestError`] describing which part
//! of the exchange failed.

mod client;
mod error;

pub use client::{Payload, WalletsClient};
pub use error::{FetchFailure, RequestError};
