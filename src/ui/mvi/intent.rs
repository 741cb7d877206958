/// Marker for values that drive state transitions: key presses,
/// fetch results, timers.
///
/// Intents may be produced on a worker task and handed to the UI
/// thread, hence `Send`.
pub trait Intent: Send + 'static {}
