//! core/toast/mod.rs
//! Toast notifications: data, ordered store, and the timer-driven service.
//!
//! Producers hold a `ToastCenter` clone and call `success/error/...`.
//! Renderers call `subscribe()` and mirror the `ToastEvent` stream.
//! No Iced imports.

mod center;
mod store;
mod types;

pub use center::{RemovalReason, ToastCenter, ToastEvent};
pub use types::{Toast, ToastId, ToastKind};
