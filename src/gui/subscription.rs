//! gui/subscription.rs
//! Periodic Tick: drains toast events, advances music fades and card fade-ins.

use iced::{Subscription, time};
use std::time::{Duration, Instant};

use super::state::{Message, StarLearn};
use crate::config::TICK_MS;

pub(crate) fn subscription(_state: &StarLearn) -> Subscription<Message> {
    time::every(Duration::from_millis(TICK_MS)).map(|_| Message::Tick(Instant::now()))
}
