//! core/mod.rs
//!
//! Everything that isn't drawing widgets:
//! - toast notifications (store, expiry timers, event broadcast)
//! - audio (effects cache, background music, fades)
//! - login stub, session store, router
//!
//! The GUI owns one instance of each service and passes them around.
//! Nothing in here is global, so tests build their own.

pub mod audio;
pub mod auth;
pub mod router;
pub mod session;
pub mod toast;
