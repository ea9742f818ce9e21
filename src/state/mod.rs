//! State management and events

mod container;
mod events;

pub use container::StateContainer;
pub use events::{EventBus, EventFilter, SessionEvent};
