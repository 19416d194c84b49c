pub mod commands;
pub mod controller;
pub mod debounce;
pub mod enhance;
pub mod events;
pub mod reconcile;
pub mod state;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod state_test;

pub use commands::Command;
pub use controller::{DocView, ScrollTarget};
pub use debounce::Debouncer;
pub use events::Message;
pub use reconcile::{ContentArea, DocumentView};
pub use state::ViewState;
