/// Marker trait for page intents.
///
/// Intents carry every input the reducer needs, including the current
/// `Instant` for anything time based, so reducers stay deterministic.
pub trait Intent: Send + 'static {}
