// SPDX-License-Identifier: MPL-2.0
//! `reey_notifications` provides toast notifications for the Iced GUI framework.
//!
//! A [`Registry`] binds a display name and style resources and creates
//! detached [`Notification`]s. A [`Manager`] stacks them in order, runs their
//! entrance and exit animations, fires their auto-dismiss timers and removes
//! them individually or by [`Context`]. The [`behaviours`] module adds
//! pointer-driven removal, and [`toast`] renders the stack.
//!
//! Time never advances on its own: every time-sensitive call takes the
//! current `Instant`, and [`toast::subscription`] produces the ticks that
//! drive pending deadlines in an application.

#![doc(html_root_url = "https://docs.rs/reey_notifications/0.1.0")]

pub mod animation;
pub mod behaviours;
pub mod config;
pub mod content;
mod data;
pub mod error;
pub mod manager;
pub mod notification;
pub mod registry;
pub mod styles;
pub mod toast;

pub use content::{Content, ContentKind};
pub use error::{Error, Result};
pub use manager::{Event, Manager, Message};
pub use notification::{
    Context, Icon, Level, Lifecycle, Notification, NotificationData, NotificationId, Phase, Slot,
    WidgetFn,
};
pub use registry::{Registration, Registry, Remover};
pub use styles::{ContainerStyle, ItemStyle, LevelColors};
