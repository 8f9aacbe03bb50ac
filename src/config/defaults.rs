// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Registration**: Default component name
//! - **Notification**: Auto-dismiss and behaviour timeouts
//! - **Animation**: Entrance/exit staging and transition length
//! - **Layout**: Container width, padding and spacing

// ==========================================================================
// Registration Defaults
// ==========================================================================

/// Name bound by [`Registry::register_default`](crate::registry::Registry::register_default).
pub const DEFAULT_NAME: &str = "reey-notifications";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss time for a notification (in milliseconds).
pub const DEFAULT_TIME_MS: u64 = 7000;

/// Default delay used by the pointer/click behaviours (in milliseconds).
pub const DEFAULT_BEHAVIOUR_TIMEOUT_MS: u64 = 1000;

/// Notifications show a close affordance unless told otherwise.
pub const DEFAULT_CLOSEABLE: bool = true;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Delay between attaching an item and enabling its transition (in milliseconds).
pub const ENTER_TRANSITION_DELAY_MS: u64 = 10;

/// Delay between attaching an item and expanding it (in milliseconds).
///
/// Must be greater than [`ENTER_TRANSITION_DELAY_MS`].
pub const ENTER_EXPAND_DELAY_MS: u64 = 200;

/// Delay between requesting an animated removal and collapsing (in milliseconds).
pub const EXIT_COLLAPSE_DELAY_MS: u64 = 10;

/// Length of the grow/fade transition (in milliseconds).
pub const TRANSITION_DURATION_MS: u64 = 300;

/// Interval of the animation tick subscription (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Container width in logical pixels (15rem).
pub const CONTAINER_WIDTH: f32 = 240.0;

/// Padding around the container in logical pixels (0.5rem).
pub const CONTAINER_PADDING: f32 = 8.0;

/// Vertical gap between notifications in logical pixels (0.3rem).
pub const ITEM_SPACING: f32 = 4.8;

/// Height an expanded notification is allowed to grow to.
pub const ITEM_MAX_HEIGHT: f32 = 10_000.0;

const _: () = {
    assert!(ENTER_EXPAND_DELAY_MS > ENTER_TRANSITION_DELAY_MS);
    assert!(TRANSITION_DURATION_MS > 0);
    assert!(DEFAULT_TIME_MS > 0);
};
