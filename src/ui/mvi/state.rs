/// Marker for view state.
///
/// `Default` is the state before anything has happened; `PartialEq`
/// lets callers skip redraws when a reduction changed nothing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
