//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('StarLearn')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (periodic tick)
//! - the renderer's mirror of live toasts ('toast_layer')

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod toast_layer;
pub(crate) mod update;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::StarLearn;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
