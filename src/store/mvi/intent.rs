//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (typing a query, toggling a favorite)
/// - Load lifecycle events (pending, fulfilled, rejected)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
