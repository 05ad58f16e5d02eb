/// Marker trait for intents: user actions (keys) or sync outcomes.
pub trait Intent: Send + 'static {}
