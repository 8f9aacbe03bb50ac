// SPDX-License-Identifier: MPL-2.0
//! Values a notification is built from and rendered with.

use crate::config::defaults;
use crate::content::{Content, ContentKind};
use crate::error::{Error, Result};
use crate::manager::Message;
use iced::widget::image;
use iced::Element;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Level of a notification. Only affects presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Default,
    Error,
    Info,
    Success,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Default, Level::Error, Level::Info, Level::Success];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Default => "default",
            Level::Error => "error",
            Level::Info => "info",
            Level::Success => "success",
        }
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == name)
            .ok_or_else(|| Error::InvalidLevel(name.to_string()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque tag used to find and remove related notifications together.
///
/// Named contexts compare by name. [`Context::unique`] creates a token that
/// only equals its own clones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Context(ContextKey);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ContextKey {
    Named(Arc<str>),
    Token(u64),
}

impl Context {
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self(ContextKey::Named(name.into()))
    }

    #[must_use]
    pub fn unique() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(ContextKey::Token(COUNTER.fetch_add(1, Ordering::Relaxed)))
    }

    /// The name of a named context.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.0 {
            ContextKey::Named(name) => Some(name),
            ContextKey::Token(_) => None,
        }
    }
}

impl From<&str> for Context {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for Context {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

/// Icon shown to the left of the title and content.
#[derive(Debug, Clone, Default)]
pub enum Icon {
    #[default]
    None,
    /// Path or URL of an image.
    Source(String),
    /// An already loaded image.
    Image(image::Handle),
}

impl Icon {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Icon::None)
    }
}

impl From<&str> for Icon {
    fn from(source: &str) -> Self {
        source.to_string().into()
    }
}

impl From<String> for Icon {
    fn from(source: String) -> Self {
        if source.is_empty() {
            Icon::None
        } else {
            Icon::Source(source)
        }
    }
}

impl From<image::Handle> for Icon {
    fn from(handle: image::Handle) -> Self {
        Icon::Image(handle)
    }
}

impl<T: Into<Icon>> From<Option<T>> for Icon {
    fn from(icon: Option<T>) -> Self {
        icon.map_or(Icon::None, Into::into)
    }
}

/// Builds the element shown in a title or content slot.
#[derive(Clone)]
pub struct WidgetFn(Rc<dyn Fn() -> Element<'static, Message>>);

impl WidgetFn {
    pub fn new(build: impl Fn() -> Element<'static, Message> + 'static) -> Self {
        Self(Rc::new(build))
    }

    #[must_use]
    pub fn build(&self) -> Element<'static, Message> {
        (self.0)()
    }
}

impl fmt::Debug for WidgetFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WidgetFn(..)")
    }
}

/// What a title or content slot renders.
#[derive(Debug, Clone, Default)]
pub enum Slot {
    #[default]
    Empty,
    /// Shown verbatim.
    Text(String),
    /// Tags are interpreted, not shown.
    Markup(String),
    /// Inserted as-is.
    Widget(WidgetFn),
}

impl Slot {
    /// Stringifies any displayable value into escaped text.
    pub fn display(value: impl fmt::Display) -> Self {
        value.to_string().into()
    }

    pub fn widget(build: impl Fn() -> Element<'static, Message> + 'static) -> Self {
        Slot::Widget(WidgetFn::new(build))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Text of a text or markup slot, as stored.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Slot::Text(text) | Slot::Markup(text) => Some(text),
            Slot::Empty | Slot::Widget(_) => None,
        }
    }
}

impl From<&str> for Slot {
    fn from(text: &str) -> Self {
        text.to_string().into()
    }
}

impl From<String> for Slot {
    fn from(text: String) -> Self {
        if text.is_empty() {
            Slot::Empty
        } else {
            Slot::Text(text)
        }
    }
}

impl From<Content> for Slot {
    fn from(content: Content) -> Self {
        let kind = content.kind();
        let body = content.body().to_string();
        match kind {
            ContentKind::Markup => Slot::Markup(body),
            ContentKind::PlainText => Slot::Text(body),
        }
    }
}

impl From<WidgetFn> for Slot {
    fn from(widget: WidgetFn) -> Self {
        Slot::Widget(widget)
    }
}

impl<T: Into<Slot>> From<Option<T>> for Slot {
    fn from(value: Option<T>) -> Self {
        value.map_or(Slot::Empty, Into::into)
    }
}

/// Construction parameters of a notification.
#[derive(Debug, Clone)]
pub struct NotificationData {
    pub icon: Icon,
    pub title: Slot,
    pub content: Slot,
    /// Auto-dismiss time. `None` keeps the notification until removed.
    pub time: Option<Duration>,
    pub level: Level,
    pub closeable: bool,
    pub context: Option<Context>,
}

impl Default for NotificationData {
    fn default() -> Self {
        Self {
            icon: Icon::None,
            title: Slot::Empty,
            content: Slot::Empty,
            time: Some(Duration::from_millis(defaults::DEFAULT_TIME_MS)),
            level: Level::Default,
            closeable: defaults::DEFAULT_CLOSEABLE,
            context: None,
        }
    }
}

impl NotificationData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<Slot>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<Slot>) -> Self {
        self.content = content.into();
        self
    }

    #[must_use]
    pub fn time(mut self, time: Option<Duration>) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn closeable(mut self, closeable: bool) -> Self {
        self.closeable = closeable;
        self
    }

    #[must_use]
    pub fn context(mut self, context: impl Into<Context>) -> Self {
        self.context = Some(context.into());
        self
    }
}
