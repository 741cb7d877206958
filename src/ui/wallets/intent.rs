use crate::fetch::{FetchFailure, Payload, RequestError};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum WalletsIntent {
    /// The request succeeded with this body.
    Loaded(Payload),
    /// The request failed. All failure kinds arrive here.
    Failed(FetchFailure),
}

impl Intent for WalletsIntent {}

impl From<Result<Payload, RequestError>> for WalletsIntent {
    fn from(result: Result<Payload, RequestError>) -> Self {
        match result {
            Ok(payload) => WalletsIntent::Loaded(payload),
            Err(err) => WalletsIntent::Failed(FetchFailure::from(&err)),
        }
    }
}
