// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Style resources

Visual resources bound at registration: one [`ContainerStyle`] for the
stack and one [`ItemStyle`] for every notification in it.

## Defaults

- Container: 240 px wide, anchored top-right, 8 px padding, 4.8 px gap,
  300 ms grow/fade transition.
- Items: translucent card per level (default: warm white, error: orange,
  info: light blue, success: green), bold title above a smaller body.

```
use reey_notifications::styles::{ContainerStyle, ItemStyle};
use reey_notifications::Level;

let container = ContainerStyle::default();
assert_eq!(container.width, 240.0);

let item = ItemStyle::default();
assert_ne!(item.colors(Level::Error), item.colors(Level::Info));
```
"#]

use crate::animation::Timing;
use crate::config::defaults;
use crate::notification::Level;
use iced::{Color, Padding, Shadow, Vector};

/// Colours of one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelColors {
    pub background: Color,
    pub text: Color,
}

// ============================================================================
// Palette
// ============================================================================

pub mod palette {
    use super::LevelColors;
    use iced::Color;

    pub const TEXT_DARK: Color = Color::from_rgb(0.133, 0.133, 0.133); // #222
    pub const TEXT_LIGHT: Color = Color::WHITE;

    /// hsla(40, 40%, 95%, 0.9)
    pub const DEFAULT: LevelColors = LevelColors {
        background: Color::from_rgba(0.97, 0.957, 0.93, 0.9),
        text: TEXT_DARK,
    };

    /// hsla(20, 80%, 55%, 0.9)
    pub const ERROR: LevelColors = LevelColors {
        background: Color::from_rgba(0.91, 0.43, 0.19, 0.9),
        text: TEXT_LIGHT,
    };

    /// hsla(200, 80%, 85%, 0.9)
    pub const INFO: LevelColors = LevelColors {
        background: Color::from_rgba(0.73, 0.89, 0.97, 0.9),
        text: TEXT_DARK,
    };

    /// hsla(100, 50%, 65%, 0.9)
    pub const SUCCESS: LevelColors = LevelColors {
        background: Color::from_rgba(0.592, 0.825, 0.475, 0.9),
        text: TEXT_LIGHT,
    };

    pub const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.2);
}

/// Style of the notification stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerStyle {
    pub width: f32,
    pub padding: f32,
    /// Gap below every notification, collapsing with it.
    pub spacing: f32,
    pub timing: Timing,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            width: defaults::CONTAINER_WIDTH,
            padding: defaults::CONTAINER_PADDING,
            spacing: defaults::ITEM_SPACING,
            timing: Timing::default(),
        }
    }
}

/// Style of a single notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub default: LevelColors,
    pub error: LevelColors,
    pub info: LevelColors,
    pub success: LevelColors,
    pub padding: Padding,
    pub radius: f32,
    pub shadow: Shadow,
    pub icon_size: f32,
    pub title_size: f32,
    pub body_size: f32,
    pub max_height: f32,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            default: palette::DEFAULT,
            error: palette::ERROR,
            info: palette::INFO,
            success: palette::SUCCESS,
            padding: Padding {
                top: 8.0,
                right: 24.0,
                bottom: 8.0,
                left: 12.8,
            },
            radius: 3.2,
            shadow: Shadow {
                color: palette::SHADOW,
                offset: Vector::ZERO,
                blur_radius: 3.2,
            },
            icon_size: 48.0,
            title_size: 16.0,
            body_size: 14.4,
            max_height: defaults::ITEM_MAX_HEIGHT,
        }
    }
}

impl ItemStyle {
    #[must_use]
    pub fn colors(&self, level: Level) -> LevelColors {
        match level {
            Level::Default => self.default,
            Level::Error => self.error,
            Level::Info => self.info,
            Level::Success => self.success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_distinct_background() {
        let style = ItemStyle::default();
        for (i, a) in Level::ALL.iter().enumerate() {
            for b in &Level::ALL[i + 1..] {
                assert_ne!(style.colors(*a).background, style.colors(*b).background);
            }
        }
    }

    #[test]
    fn backgrounds_are_translucent() {
        let style = ItemStyle::default();
        for level in Level::ALL {
            assert!((style.colors(level).background.a - 0.9).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn container_uses_default_transition() {
        assert_eq!(ContainerStyle::default().timing, Timing::default());
    }
}
