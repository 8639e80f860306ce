/// Marker trait for page state.
///
/// `Default` is the freshly mounted page; `PartialEq` lets callers detect
/// whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
