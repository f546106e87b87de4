// SPDX-License-Identifier: MPL-2.0
//! Dashboard header: search box, New menu, kiosk switch, notifications bell
//! and user avatar, plus the dropdown panels they control.
//!
//! The header has a fixed geometry so the same rectangles drive both the
//! view and outside-click hit-testing:
//!
//! ```text
//! | [ search .............. ]                 [ New ] (K) (B) (A) |
//!   [ search panel        ]                   [ new ]  [notif][user]
//! ```

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::panels::{Controller, LayoutRegions, PanelId, Region};
use crate::ui::styles;
use iced::widget::{button, container, text_input, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length, Padding, Point, Rectangle, Size};

/// Entries of the New menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewItem {
    Project,
    Report,
    Widget,
}

impl NewItem {
    pub const ALL: [NewItem; 3] = [NewItem::Project, NewItem::Report, NewItem::Widget];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            NewItem::Project => "new-project",
            NewItem::Report => "new-report",
            NewItem::Widget => "new-widget",
        }
    }
}

/// Messages emitted by the header and its panels.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    TogglePanel(PanelId),
    ToggleKiosk,
    Create(NewItem),
    OpenProfile,
    SignOut,
}

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub panels: &'a Controller,
    pub search_query: &'a str,
    pub search_results: Vec<String>,
    pub notifications: Vec<String>,
    pub kiosk_enabled: bool,
}

/// Toggle and panel rectangles for a window of `window` size.
#[must_use]
pub fn layout(window: Size) -> LayoutRegions {
    let button_y = (sizing::HEADER_HEIGHT - sizing::HEADER_BUTTON) / 2.0;
    let input_y = (sizing::HEADER_HEIGHT - sizing::INPUT_HEIGHT) / 2.0;
    let panel_y = sizing::HEADER_HEIGHT + spacing::XXS;

    let right = window.width - spacing::MD;
    let avatar_x = right - sizing::HEADER_BUTTON;
    let bell_x = avatar_x - spacing::XS - sizing::HEADER_BUTTON;
    let kiosk_x = bell_x - spacing::XS - sizing::HEADER_BUTTON;
    let new_x = kiosk_x - spacing::XS - sizing::HEADER_NEW_BUTTON_WIDTH;

    let square = Size::new(sizing::HEADER_BUTTON, sizing::HEADER_BUTTON);

    LayoutRegions::new()
        .with(
            Region::Toggle(PanelId::Search),
            Rectangle::new(
                Point::new(spacing::MD, input_y),
                Size::new(sizing::SEARCH_WIDTH, sizing::INPUT_HEIGHT),
            ),
        )
        .with(
            Region::Panel(PanelId::Search),
            Rectangle::new(
                Point::new(spacing::MD, panel_y),
                Size::new(sizing::SEARCH_WIDTH, sizing::SEARCH_PANEL_HEIGHT),
            ),
        )
        .with(
            Region::Toggle(PanelId::New),
            Rectangle::new(
                Point::new(new_x, button_y),
                Size::new(sizing::HEADER_NEW_BUTTON_WIDTH, sizing::HEADER_BUTTON),
            ),
        )
        .with(
            Region::Panel(PanelId::New),
            Rectangle::new(
                Point::new(new_x.max(0.0), panel_y),
                Size::new(sizing::MENU_WIDTH, sizing::NEW_MENU_HEIGHT),
            ),
        )
        .with(
            Region::Toggle(PanelId::Notifications),
            Rectangle::new(Point::new(bell_x, button_y), square),
        )
        .with(
            Region::Panel(PanelId::Notifications),
            Rectangle::new(
                Point::new(
                    (bell_x + sizing::HEADER_BUTTON - sizing::NOTIFICATIONS_WIDTH).max(0.0),
                    panel_y,
                ),
                Size::new(sizing::NOTIFICATIONS_WIDTH, sizing::NOTIFICATIONS_HEIGHT),
            ),
        )
        .with(
            Region::Toggle(PanelId::User),
            Rectangle::new(Point::new(avatar_x, button_y), square),
        )
        .with(
            Region::Panel(PanelId::User),
            Rectangle::new(
                Point::new((right - sizing::MENU_WIDTH).max(0.0), panel_y),
                Size::new(sizing::MENU_WIDTH, sizing::USER_MENU_HEIGHT),
            ),
        )
}

/// Renders the header bar.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let search = text_input(&i18n.tr("header-search-placeholder"), ctx.search_query)
        .on_input(Message::SearchChanged)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::SEARCH_WIDTH));

    let new_button = button(
        Text::new(i18n.tr("header-new"))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(Message::TogglePanel(PanelId::New))
    .width(Length::Fixed(sizing::HEADER_NEW_BUTTON_WIDTH))
    .height(Length::Fixed(sizing::HEADER_BUTTON))
    .style(styles::button::primary);

    let kiosk_button = icon_button("⛶", Message::ToggleKiosk, ctx.kiosk_enabled);
    let bell_button = icon_button(
        "🔔",
        Message::TogglePanel(PanelId::Notifications),
        ctx.panels.is_open(PanelId::Notifications),
    );

    let initial = Container::new(Text::new("U").size(typography::BODY))
        .center(Length::Fill)
        .style(styles::container::avatar);
    let avatar_button = button(initial)
        .on_press(Message::TogglePanel(PanelId::User))
        .padding(spacing::XXS)
        .width(Length::Fixed(sizing::HEADER_BUTTON))
        .height(Length::Fixed(sizing::HEADER_BUTTON))
        .style(styles::button::header_icon(ctx.panels.is_open(PanelId::User)));

    let bar = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(search)
        .push(Space::new().width(Length::Fill))
        .push(new_button)
        .push(kiosk_button)
        .push(bell_button)
        .push(avatar_button);

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .style(styles::container::header_bar)
        .into()
}

/// Renders the open dropdown panels at their layout positions.
pub fn panels<'a>(ctx: &ViewContext<'a>, window: Size) -> Option<Element<'a, Message>> {
    if !ctx.panels.any_open() {
        return None;
    }

    let regions = layout(window);
    let i18n = ctx.i18n;

    let layers = ctx
        .panels
        .open_panels()
        .filter_map(|panel| {
            let bounds = regions.bounds(Region::Panel(panel))?;
            let content = match panel {
                PanelId::Search => search_panel(i18n, &ctx.search_results),
                PanelId::New => new_panel(i18n),
                PanelId::Notifications => notifications_panel(i18n, &ctx.notifications),
                PanelId::User => user_panel(i18n),
            };
            Some(place(content, bounds))
        })
        .fold(Stack::new(), |stack, layer| stack.push(layer));

    Some(layers.into())
}

/// Positions `content` inside `bounds` of a full-window layer.
fn place<'a>(content: Element<'a, Message>, bounds: Rectangle) -> Element<'a, Message> {
    let card = Container::new(content)
        .width(Length::Fixed(bounds.width))
        .height(Length::Fixed(bounds.height))
        .padding(spacing::SM)
        .style(styles::container::panel);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: bounds.y,
            left: bounds.x,
            right: 0.0,
            bottom: 0.0,
        })
        .into()
}

fn icon_button<'a>(glyph: &'a str, message: Message, active: bool) -> Element<'a, Message> {
    button(
        Text::new(glyph)
            .size(typography::TITLE_MD)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(message)
    .width(Length::Fixed(sizing::HEADER_BUTTON))
    .height(Length::Fixed(sizing::HEADER_BUTTON))
    .style(styles::button::header_icon(active))
    .into()
}

fn menu_entry<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::menu_item)
        .into()
}

fn caption<'a>(label: String) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::CAPTION)
        .style(iced::widget::text::secondary)
        .into()
}

fn search_panel<'a>(i18n: &I18n, results: &[String]) -> Element<'a, Message> {
    let column = Column::new().spacing(spacing::XXS);
    if results.is_empty() {
        return column.push(caption(i18n.tr("search-no-results"))).into();
    }
    results
        .iter()
        .fold(column, |column, result| {
            column.push(Text::new(result.clone()).size(typography::BODY))
        })
        .into()
}

fn new_panel<'a>(i18n: &I18n) -> Element<'a, Message> {
    NewItem::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, item| {
            column.push(menu_entry(i18n.tr(item.i18n_key()), Message::Create(item)))
        })
        .into()
}

fn notifications_panel<'a>(i18n: &I18n, notifications: &[String]) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("notifications-title")).size(typography::TITLE_MD));
    if notifications.is_empty() {
        return column.push(caption(i18n.tr("notifications-empty"))).into();
    }
    notifications
        .iter()
        .fold(column, |column, entry| {
            column.push(
                container(Text::new(entry.clone()).size(typography::BODY))
                    .padding([spacing::XXS, 0.0]),
            )
        })
        .into()
}

fn user_panel<'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(menu_entry(i18n.tr("user-menu-profile"), Message::OpenProfile))
        .push(menu_entry(i18n.tr("user-menu-sign-out"), Message::SignOut))
        .into()
}
