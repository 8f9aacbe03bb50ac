// SPDX-License-Identifier: MPL-2.0
//! Registration and notification factories.
//!
//! Nothing can be created until a name and style resources are registered:
//!
//! ```
//! use reey_notifications::{Error, NotificationData, Registry};
//!
//! let mut registry = Registry::new();
//! assert_eq!(registry.create(NotificationData::new()).unwrap_err(), Error::NotRegistered);
//!
//! registry.register_default().unwrap();
//! let item = registry.create(NotificationData::new().title("Saved")).unwrap();
//! assert_eq!(item.title().as_text(), Some("Saved"));
//! ```

use crate::config::{defaults, Config};
use crate::error::{Error, Result};
use crate::manager::Message;
use crate::notification::{Level, Notification, NotificationData, NotificationId};
use crate::styles::{ContainerStyle, ItemStyle};
use std::cell::Cell;
use std::time::Duration;
use tracing::debug;

/// Name and style resources bound by [`Registry::register`].
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    name: String,
    container_style: ContainerStyle,
    item_style: ItemStyle,
}

impl Registration {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn container_style(&self) -> &ContainerStyle {
        &self.container_style
    }

    #[must_use]
    pub fn item_style(&self) -> &ItemStyle {
        &self.item_style
    }
}

/// Removes the notification it was created for.
///
/// Handed to the builder of [`Registry::create_interactive`] so interactive
/// content can close its own notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remover {
    id: NotificationId,
}

impl Remover {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Message removing the notification with its exit animation.
    #[must_use]
    pub fn remove(&self) -> Message {
        self.message(false)
    }

    /// Message removing the notification without animation.
    #[must_use]
    pub fn remove_immediately(&self) -> Message {
        self.message(true)
    }

    #[must_use]
    pub fn message(&self, immediate: bool) -> Message {
        Message::Remove {
            id: self.id,
            immediate,
        }
    }
}

/// Process-wide configuration that factories and containers are built from.
#[derive(Debug)]
pub struct Registry {
    registration: Option<Registration>,
    defaults: NotificationData,
    created: Cell<usize>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates an empty, unregistered registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registration: None,
            defaults: NotificationData::default(),
            created: Cell::new(0),
        }
    }

    /// Creates a registry registered with the values of `config`.
    ///
    /// # Errors
    ///
    /// Never fails for a fresh registry; the `Result` mirrors [`Registry::register`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::new();
        registry.defaults = NotificationData::new()
            .time(config.default_time())
            .level(config.default_level.unwrap_or_default())
            .closeable(config.closeable.unwrap_or(defaults::DEFAULT_CLOSEABLE));

        let mut container_style = ContainerStyle::default();
        if let Some(width) = config.width {
            container_style.width = width;
        }
        if let Some(spacing) = config.spacing {
            container_style.spacing = spacing;
        }
        if let Some(padding) = config.padding {
            container_style.padding = padding;
        }
        if let Some(ms) = config.transition_ms {
            container_style.timing.transition = Duration::from_millis(ms);
        }

        let name = config.name.as_deref().unwrap_or(defaults::DEFAULT_NAME);
        registry.register(name, container_style, ItemStyle::default())?;
        Ok(registry)
    }

    /// Binds the display name and style resources.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistrationLocked`] once a notification has been
    /// created under the current registration.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        container_style: ContainerStyle,
        item_style: ItemStyle,
    ) -> Result<()> {
        if self.created.get() > 0 {
            return Err(Error::RegistrationLocked);
        }
        let name = name.into();
        debug!(%name, "notifications component registered");
        self.registration = Some(Registration {
            name,
            container_style,
            item_style,
        });
        Ok(())
    }

    /// Registers under the default name with the default styles.
    ///
    /// # Errors
    ///
    /// See [`Registry::register`].
    pub fn register_default(&mut self) -> Result<()> {
        self.register(
            defaults::DEFAULT_NAME,
            ContainerStyle::default(),
            ItemStyle::default(),
        )
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.registration.is_some()
    }

    #[must_use]
    pub fn registration(&self) -> Option<&Registration> {
        self.registration.as_ref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.registration.as_ref().map(Registration::name)
    }

    /// Number of notifications created so far.
    #[must_use]
    pub fn created_count(&self) -> usize {
        self.created.get()
    }

    /// Construction parameters pre-filled with the configured defaults.
    #[must_use]
    pub fn data(&self) -> NotificationData {
        self.defaults.clone()
    }

    /// Default level used by [`Registry::data`].
    #[must_use]
    pub fn default_level(&self) -> Level {
        self.defaults.level
    }

    /// Creates a detached notification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRegistered`] before [`Registry::register`] was called.
    pub fn create(&self, data: NotificationData) -> Result<Notification> {
        let mut notification = self.create_empty()?;
        notification.apply(data);
        Ok(notification)
    }

    /// Creates a detached notification whose fields come from `build`.
    ///
    /// `build` receives a [`Remover`] bound to the new notification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRegistered`] before [`Registry::register`] was
    /// called; `build` is not invoked in that case.
    pub fn create_interactive<F>(&self, build: F) -> Result<Notification>
    where
        F: FnOnce(Remover) -> NotificationData,
    {
        let mut notification = self.create_empty()?;
        let data = build(Remover {
            id: notification.id(),
        });
        notification.apply(data);
        Ok(notification)
    }

    fn create_empty(&self) -> Result<Notification> {
        let registration = self.registration.as_ref().ok_or(Error::NotRegistered)?;
        let mut notification = Notification::new(registration.container_style.timing);
        notification.apply(self.defaults.clone());
        self.created.set(self.created.get() + 1);
        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Phase;

    #[test]
    fn create_before_register_fails() {
        let registry = Registry::new();
        assert_eq!(
            registry.create(NotificationData::new()).unwrap_err(),
            Error::NotRegistered
        );
        assert_eq!(registry.created_count(), 0);
    }

    #[test]
    fn create_interactive_before_register_skips_builder() {
        let registry = Registry::new();
        let mut called = false;
        let result = registry.create_interactive(|_| {
            called = true;
            NotificationData::new()
        });
        assert_eq!(result.unwrap_err(), Error::NotRegistered);
        assert!(!called);
    }

    #[test]
    fn created_notification_is_pending_with_applied_fields() {
        let mut registry = Registry::new();
        registry.register_default().expect("register");

        let item = registry
            .create(
                NotificationData::new()
                    .title("Hello")
                    .level(Level::Info)
                    .closeable(false)
                    .context("greeting"),
            )
            .expect("create");

        assert_eq!(item.phase(), Phase::Pending);
        assert_eq!(item.title().as_text(), Some("Hello"));
        assert_eq!(item.level(), Level::Info);
        assert!(!item.closeable());
        assert_eq!(item.context().and_then(|c| c.name()), Some("greeting"));
        assert_eq!(item.time(), Some(Duration::from_millis(7000)));
    }

    #[test]
    fn re_registration_is_allowed_until_first_create() {
        let mut registry = Registry::new();
        registry.register_default().expect("register");
        registry
            .register("app-toasts", ContainerStyle::default(), ItemStyle::default())
            .expect("re-register");
        assert_eq!(registry.name(), Some("app-toasts"));

        registry.create(NotificationData::new()).expect("create");
        assert_eq!(
            registry.register_default().unwrap_err(),
            Error::RegistrationLocked
        );
        assert_eq!(registry.name(), Some("app-toasts"));
    }

    #[test]
    fn interactive_builder_gets_remover_for_the_new_item() {
        let mut registry = Registry::new();
        registry.register_default().expect("register");

        let mut seen = None;
        let item = registry
            .create_interactive(|remover| {
                seen = Some(remover);
                NotificationData::new().title("Confirm?").time(None)
            })
            .expect("create");

        let remover = seen.expect("builder called");
        assert_eq!(remover.id(), item.id());
        assert!(matches!(
            remover.remove(),
            Message::Remove { id, immediate: false } if id == item.id()
        ));
        assert_eq!(item.time(), None);
    }

    #[test]
    fn from_config_applies_defaults() {
        let config = Config {
            name: Some("custom".into()),
            default_time_ms: Some(0),
            default_level: Some(Level::Success),
            closeable: Some(false),
            transition_ms: Some(100),
            ..Config::default()
        };
        let registry = Registry::from_config(&config).expect("register");

        assert_eq!(registry.name(), Some("custom"));
        let data = registry.data();
        assert_eq!(data.time, None);
        assert_eq!(data.level, Level::Success);
        assert!(!data.closeable);

        let timing = registry
            .registration()
            .expect("registered")
            .container_style()
            .timing;
        assert_eq!(timing.transition, Duration::from_millis(100));
    }
}
