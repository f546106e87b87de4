// SPDX-License-Identifier: MPL-2.0
//! Reusable state primitives for the screens.
//!
//! - [`timer`] - One-shot deadlines polled from the application tick
//! - [`observer`] - Synchronous listener lists for state changes

pub mod observer;
pub mod timer;

pub use observer::{ListenerId, Listeners};
pub use timer::{TimerHandle, TimerId};
