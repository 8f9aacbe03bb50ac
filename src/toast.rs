// SPDX-License-Identifier: MPL-2.0
//! Toast widgets for rendering the notification stack.
//!
//! Every toast is drawn at its current visibility: height, padding, gap and
//! colours scale from nothing to full size while it enters and back while it
//! exits.

use crate::config::defaults;
use crate::content::{parse_markup, MarkupStyle};
use crate::manager::{Manager, Message};
use crate::notification::{Icon, Notification, Slot};
use crate::styles::{ItemStyle, LevelColors};
use iced::widget::{
    button, container, image, mouse_area, rich_text, span, text, Column, Container, Row, Space,
};
use iced::{
    alignment, font, Background, Border, Color, Element, Font, Length, Padding, Shadow,
    Subscription, Theme,
};
use std::time::{Duration, Instant};

/// Renders a single notification.
pub fn view<'a>(notification: &'a Notification, style: &ItemStyle, now: Instant) -> Element<'a, Message> {
    let id = notification.id();
    let visibility = notification.visibility(now);
    let colors = style.colors(notification.level());

    let mut body = Column::new().width(Length::Fill);
    if let Some(title) = slot(notification.title(), style.title_size, colors.text) {
        body = body.push(title);
    }
    if let Some(content) = slot(notification.content(), style.body_size, colors.text) {
        body = body.push(content);
    }

    let mut row = Row::new()
        .spacing(style.padding.left)
        .align_y(alignment::Vertical::Center);
    if let Some(icon) = icon(notification.icon(), style.icon_size) {
        row = row.push(icon);
    }
    row = row.push(body);
    if notification.closeable() {
        let text_color = colors.text;
        row = row.push(
            button(text("×").size(style.title_size))
                .on_press(Message::Close(id))
                .padding(0)
                .style(move |_theme: &Theme, status| close_button_style(text_color, status)),
        );
    }

    let item_style = *style;
    let card = Container::new(row)
        .width(Length::Fill)
        .max_height(style.max_height * visibility)
        .padding(scale_padding(style.padding, visibility))
        .clip(true)
        .style(move |_theme: &Theme| item_container_style(colors, &item_style, visibility));

    mouse_area(card)
        .on_enter(Message::PointerEntered(id))
        .on_exit(Message::PointerLeft(id))
        .on_press(Message::Clicked(id))
        .into()
}

/// Renders the whole stack anchored to the top-right corner.
pub fn view_overlay(manager: &Manager, now: Instant) -> Element<'_, Message> {
    let container_style = manager.style();
    let item_style = manager.item_style();

    let toasts: Vec<Element<'_, Message>> = manager
        .notifications(None)
        .into_iter()
        .map(|notification| {
            let gap = container_style.spacing * notification.visibility(now);
            Column::new()
                .push(view(notification, item_style, now))
                .push(Space::new().height(gap))
                .into()
        })
        .collect();

    if toasts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    Container::new(
        Column::with_children(toasts)
            .width(Length::Fixed(container_style.width))
            .align_x(alignment::Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Top)
    .padding(container_style.padding)
    .into()
}

/// Ticks while any notification has a pending deadline.
pub fn subscription(manager: &Manager) -> Subscription<Message> {
    if manager.is_active() {
        iced::time::every(Duration::from_millis(defaults::TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn slot<'a>(slot: &'a Slot, size: f32, color: Color) -> Option<Element<'a, Message>> {
    let element: Element<'a, Message> = match slot {
        Slot::Empty => return None,
        Slot::Text(value) => text(value.as_str()).size(size).color(color).into(),
        Slot::Markup(markup) => styled(markup, size, color),
        Slot::Widget(widget) => widget.build(),
    };
    Some(element)
}

/// Markup as rich text, one span per styled run.
fn styled<'a>(markup: &str, size: f32, color: Color) -> Element<'a, Message> {
    let spans: Vec<text::Span<'a>> = parse_markup(markup)
        .into_iter()
        .map(|run| {
            span(run.text)
                .font(markup_font(run.style))
                .underline(run.style.underline)
                .strikethrough(run.style.strikethrough)
        })
        .collect();
    Element::from(rich_text(spans).size(size).color(color))
}

fn markup_font(style: MarkupStyle) -> Font {
    Font {
        family: if style.monospace {
            font::Family::Monospace
        } else {
            Font::DEFAULT.family
        },
        weight: if style.bold {
            font::Weight::Bold
        } else {
            font::Weight::Normal
        },
        style: if style.italic {
            font::Style::Italic
        } else {
            font::Style::Normal
        },
        ..Font::DEFAULT
    }
}

fn icon<'a>(icon: &Icon, size: f32) -> Option<Element<'a, Message>> {
    let handle = match icon {
        Icon::None => return None,
        Icon::Source(source) => image::Handle::from_path(source),
        Icon::Image(handle) => handle.clone(),
    };
    Some(
        image(handle)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
    )
}

fn scale_padding(padding: Padding, visibility: f32) -> Padding {
    Padding {
        top: padding.top * visibility,
        right: padding.right,
        bottom: padding.bottom * visibility,
        left: padding.left,
    }
}

fn fade(color: Color, visibility: f32) -> Color {
    Color {
        a: color.a * visibility,
        ..color
    }
}

fn item_container_style(colors: LevelColors, style: &ItemStyle, visibility: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(fade(colors.background, visibility))),
        text_color: Some(fade(colors.text, visibility)),
        border: Border {
            radius: style.radius.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: fade(style.shadow.color, visibility),
            ..style.shadow
        },
        ..Default::default()
    }
}

fn close_button_style(text_color: Color, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => text_color,
        button::Status::Active | button::Status::Disabled => fade(text_color, 0.7),
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Level;
    use crate::styles::palette;

    #[test]
    fn container_style_uses_level_background() {
        let style = ItemStyle::default();
        let container = item_container_style(style.colors(Level::Error), &style, 1.0);
        assert_eq!(
            container.background,
            Some(Background::Color(palette::ERROR.background))
        );
        assert_eq!(container.text_color, Some(palette::ERROR.text));
    }

    #[test]
    fn collapsed_toast_is_transparent() {
        let style = ItemStyle::default();
        let container = item_container_style(style.colors(Level::Info), &style, 0.0);
        assert_eq!(
            container.background.map(|background| match background {
                Background::Color(color) => color.a,
                Background::Gradient(_) => 1.0,
            }),
            Some(0.0)
        );
        assert_eq!(container.shadow.color.a, 0.0);
    }

    #[test]
    fn padding_collapses_vertically_only() {
        let padding = scale_padding(ItemStyle::default().padding, 0.5);
        assert_eq!(padding.top, 4.0);
        assert_eq!(padding.bottom, 4.0);
        assert_eq!(padding.right, 24.0);
        assert_eq!(padding.left, 12.8);
    }

    #[test]
    fn close_button_dims_until_hovered() {
        let active = close_button_style(Color::WHITE, button::Status::Active);
        let hovered = close_button_style(Color::WHITE, button::Status::Hovered);
        assert!(active.text_color.a < hovered.text_color.a);
    }

    #[test]
    fn markup_styles_map_to_fonts() {
        let plain = markup_font(MarkupStyle::default());
        assert_eq!(plain, Font::DEFAULT);

        let font = markup_font(MarkupStyle {
            bold: true,
            italic: true,
            monospace: true,
            ..MarkupStyle::default()
        });
        assert_eq!(font.weight, font::Weight::Bold);
        assert_eq!(font.style, font::Style::Italic);
        assert_eq!(font.family, font::Family::Monospace);
    }

    #[test]
    fn empty_icon_renders_nothing() {
        assert!(icon(&Icon::None, 48.0).is_none());
        assert!(slot(&Slot::Empty, 16.0, Color::BLACK).is_none());
    }
}
