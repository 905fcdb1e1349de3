//! Storefront section: account forms, paginated product grid and cart.
//!
//! Responsibilities:
//! - Login / signup / logout against local state only.
//! - Product pagination (three per page), per-page select all, zoom preview.
//! - Cart add, quantity and removal with a running total.
//!
//! Invariants:
//! - Cart quantities never drop below one; removal is explicit.
//! - Zoom stays within 0.5x..=3.0x.
//! - Logging out empties the cart.

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::pages::{Effects, KeyOutcome, Section, SectionContext};
use crate::ui::theme::{ThemeExt, helpers};

use super::common::{button, checkbox, format_price, marker, render_card, row_style, write_lines};
use super::text_field::TextField;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price: u64,
    pub description: &'static str,
    pub category: &'static str,
    pub rating: f32,
}

pub static PRODUCTS: [Product; 6] = [
    Product {
        id: 1,
        name: "Wireless headphones",
        price: 89_000,
        description: "High-quality wireless headphones",
        category: "Electronics",
        rating: 4.5,
    },
    Product {
        id: 2,
        name: "Smartwatch",
        price: 299_000,
        description: "Latest-generation smartwatch",
        category: "Electronics",
        rating: 4.3,
    },
    Product {
        id: 3,
        name: "Laptop",
        price: 1_299_000,
        description: "High-performance laptop",
        category: "Computers",
        rating: 4.7,
    },
    Product {
        id: 4,
        name: "Sneakers",
        price: 159_000,
        description: "Comfortable sneakers",
        category: "Apparel",
        rating: 4.2,
    },
    Product {
        id: 5,
        name: "Coffee machine",
        price: 450_000,
        description: "Premium coffee machine",
        category: "Appliances",
        rating: 4.6,
    },
    Product {
        id: 6,
        name: "Desk",
        price: 200_000,
        description: "Modern desk",
        category: "Furniture",
        rating: 4.4,
    },
];

pub const ITEMS_PER_PAGE: usize = 3;
/// Zoom is tracked in tenths.
const ZOOM_MIN: u8 = 5;
const ZOOM_MAX: u8 = 30;
const ZOOM_STEP: u8 = 2;
const ZOOM_DEFAULT: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Account,
    Products,
    Cart,
}

impl Pane {
    fn next(self) -> Self {
        match self {
            Self::Account => Self::Products,
            Self::Products => Self::Cart,
            Self::Cart => Self::Account,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Rows of the account form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccountRow {
    Name,
    Email,
    Password,
    Submit,
    SwitchMode,
}

struct Account {
    mode: AuthMode,
    name: TextField,
    email: TextField,
    password: TextField,
    row: usize,
    editing: bool,
    user: Option<User>,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            mode: AuthMode::Login,
            name: TextField::new("Your name"),
            email: TextField::new("you@example.com"),
            password: TextField::new("Password").masked(),
            row: 0,
            editing: false,
            user: None,
        }
    }
}

impl Account {
    fn rows(&self) -> &'static [AccountRow] {
        match self.mode {
            AuthMode::Login => &[
                AccountRow::Email,
                AccountRow::Password,
                AccountRow::Submit,
                AccountRow::SwitchMode,
            ],
            AuthMode::Signup => &[
                AccountRow::Name,
                AccountRow::Email,
                AccountRow::Password,
                AccountRow::Submit,
                AccountRow::SwitchMode,
            ],
        }
    }

    fn current_row(&self) -> AccountRow {
        self.rows()[self.row.min(self.rows().len() - 1)]
    }

    fn field_mut(&mut self, row: AccountRow) -> Option<&mut TextField> {
        match row {
            AccountRow::Name => Some(&mut self.name),
            AccountRow::Email => Some(&mut self.email),
            AccountRow::Password => Some(&mut self.password),
            AccountRow::Submit | AccountRow::SwitchMode => None,
        }
    }

    fn clear_form(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.row = 0;
        self.editing = false;
    }

    fn submit(&mut self, fx: &mut Effects) {
        match self.mode {
            AuthMode::Login => {
                if self.email.is_blank() || self.password.is_blank() {
                    fx.error("Enter your email and password.");
                    return;
                }
                let name = if self.name.is_blank() {
                    "User".to_string()
                } else {
                    self.name.value().trim().to_string()
                };
                self.user = Some(User {
                    name,
                    email: self.email.value().trim().to_string(),
                });
                fx.success("Logged in!");
            }
            AuthMode::Signup => {
                if self.name.is_blank() || self.email.is_blank() || self.password.is_blank() {
                    fx.error("Please fill in every field.");
                    return;
                }
                self.user = Some(User {
                    name: self.name.value().trim().to_string(),
                    email: self.email.value().trim().to_string(),
                });
                fx.success("Sign-up complete!");
            }
        }
        tracing::info!(mode = ?self.mode, "account signed in");
        self.clear_form();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: u32,
    pub quantity: u32,
}

pub struct StoreSection {
    pane: Pane,
    account: Account,
    page: usize,
    cursor: usize,
    selected: BTreeSet<u32>,
    zoom: Option<(u32, u8)>,
    cart: Vec<CartItem>,
    cart_cursor: usize,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            pane: Pane::Products,
            account: Account::default(),
            page: 0,
            cursor: 0,
            selected: BTreeSet::new(),
            zoom: None,
            cart: Vec::new(),
            cart_cursor: 0,
        }
    }
}

fn product(id: u32) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.id == id)
}

impl StoreSection {
    pub fn total_pages() -> usize {
        PRODUCTS.len().div_ceil(ITEMS_PER_PAGE)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn page_items(&self) -> &'static [Product] {
        let start = self.page * ITEMS_PER_PAGE;
        let end = (start + ITEMS_PER_PAGE).min(PRODUCTS.len());
        &PRODUCTS[start..end]
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    pub fn selected(&self) -> &BTreeSet<u32> {
        &self.selected
    }

    pub fn user(&self) -> Option<&User> {
        self.account.user.as_ref()
    }

    /// Zoom factor of the open preview.
    pub fn zoom(&self) -> Option<f32> {
        self.zoom.map(|(_, tenths)| f32::from(tenths) / 10.0)
    }

    pub fn total_price(&self) -> u64 {
        self.cart
            .iter()
            .filter_map(|item| product(item.product_id).map(|p| p.price * u64::from(item.quantity)))
            .sum()
    }

    pub fn add_to_cart(&mut self, id: u32, fx: &mut Effects) {
        let Some(product) = product(id) else {
            return;
        };
        match self.cart.iter_mut().find(|item| item.product_id == id) {
            Some(item) => item.quantity += 1,
            None => self.cart.push(CartItem {
                product_id: id,
                quantity: 1,
            }),
        }
        fx.success(format!("{} added to cart", product.name));
    }

    /// Change a quantity by `delta`; a result below one leaves the item unchanged.
    pub fn update_quantity(&mut self, id: u32, delta: i64) {
        if let Some(item) = self.cart.iter_mut().find(|item| item.product_id == id) {
            let next = i64::from(item.quantity) + delta;
            if next > 0 {
                item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
            }
        }
    }

    pub fn remove_from_cart(&mut self, id: u32, fx: &mut Effects) {
        let before = self.cart.len();
        self.cart.retain(|item| item.product_id != id);
        if self.cart.len() != before {
            self.cart_cursor = self.cart_cursor.min(self.cart.len().saturating_sub(1));
            fx.info("Item removed from cart");
        }
    }

    pub fn select_all_on_page(&mut self) {
        self.selected
            .extend(self.page_items().iter().map(|product| product.id));
    }

    pub fn deselect_all_on_page(&mut self) {
        for product in self.page_items() {
            self.selected.remove(&product.id);
        }
    }

    pub fn logout(&mut self, fx: &mut Effects) {
        self.account.user = None;
        self.cart.clear();
        self.cart_cursor = 0;
        fx.info("Logged out");
        tracing::info!("account signed out");
    }

    fn adjust_zoom(&mut self, up: bool) {
        if let Some((_, tenths)) = self.zoom.as_mut() {
            *tenths = if up {
                tenths.saturating_add(ZOOM_STEP).min(ZOOM_MAX)
            } else {
                tenths.saturating_sub(ZOOM_STEP).max(ZOOM_MIN)
            };
        }
    }

    fn current_product(&self) -> Option<&'static Product> {
        self.page_items().get(self.cursor)
    }

    fn account_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        let account = &mut self.account;
        if account.editing {
            match key.code {
                KeyCode::Esc => account.editing = false,
                KeyCode::Enter => {
                    account.editing = false;
                    account.row = (account.row + 1).min(account.rows().len() - 1);
                }
                KeyCode::Tab | KeyCode::BackTab => {
                    account.editing = false;
                    return KeyOutcome::Ignored;
                }
                _ => {
                    let row = account.current_row();
                    if let Some(field) = account.field_mut(row) {
                        field.handle_key(key);
                    }
                }
            }
            return KeyOutcome::Consumed;
        }

        if account.user.is_some() {
            return match key.code {
                KeyCode::Enter => {
                    self.logout(fx);
                    KeyOutcome::Consumed
                }
                _ => KeyOutcome::Ignored,
            };
        }

        match key.code {
            KeyCode::Up => account.row = account.row.saturating_sub(1),
            KeyCode::Down => account.row = (account.row + 1).min(account.rows().len() - 1),
            KeyCode::Enter => match account.current_row() {
                AccountRow::Submit => account.submit(fx),
                AccountRow::SwitchMode => {
                    account.mode = match account.mode {
                        AuthMode::Login => AuthMode::Signup,
                        AuthMode::Signup => AuthMode::Login,
                    };
                    account.row = 0;
                }
                _ => account.editing = true,
            },
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn products_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        if self.zoom.is_some() {
            match key.code {
                KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_zoom(true),
                KeyCode::Char('-') => self.adjust_zoom(false),
                KeyCode::Esc | KeyCode::Char('z') => self.zoom = None,
                _ => return KeyOutcome::Ignored,
            }
            return KeyOutcome::Consumed;
        }
        match key.code {
            KeyCode::Left => {
                self.page = self.page.saturating_sub(1);
                self.cursor = self.cursor.min(self.page_items().len() - 1);
            }
            KeyCode::Right => {
                self.page = (self.page + 1).min(Self::total_pages() - 1);
                self.cursor = self.cursor.min(self.page_items().len() - 1);
            }
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => self.cursor = (self.cursor + 1).min(self.page_items().len() - 1),
            KeyCode::Enter | KeyCode::Char('a') => {
                if let Some(product) = self.current_product() {
                    self.add_to_cart(product.id, fx);
                }
            }
            KeyCode::Char(' ') => {
                if let Some(product) = self.current_product()
                    && !self.selected.remove(&product.id)
                {
                    self.selected.insert(product.id);
                }
            }
            KeyCode::Char('A') => self.select_all_on_page(),
            KeyCode::Char('D') => self.deselect_all_on_page(),
            KeyCode::Char('z') => {
                if let Some(product) = self.current_product() {
                    self.zoom = Some((product.id, ZOOM_DEFAULT));
                }
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn cart_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        let current = self.cart.get(self.cart_cursor).map(|item| item.product_id);
        match (key.code, current) {
            (KeyCode::Up, _) => self.cart_cursor = self.cart_cursor.saturating_sub(1),
            (KeyCode::Down, _) => {
                self.cart_cursor = (self.cart_cursor + 1).min(self.cart.len().saturating_sub(1));
            }
            (KeyCode::Char('+') | KeyCode::Char('='), Some(id)) => self.update_quantity(id, 1),
            (KeyCode::Char('-'), Some(id)) => self.update_quantity(id, -1),
            (KeyCode::Char('d') | KeyCode::Delete, Some(id)) => self.remove_from_cart(id, fx),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn render_tabs(&self, ctx: &SectionContext<'_>) -> Line<'static> {
        let tab = |pane: Pane, label: String| {
            let style = if pane == self.pane {
                if ctx.focused {
                    helpers::selected_style(ctx.theme)
                } else {
                    ctx.theme.title()
                }
            } else {
                ctx.theme.text_dim()
            };
            Span::styled(format!(" {label} "), style)
        };
        let cart_count: u32 = self.cart.iter().map(|item| item.quantity).sum();
        Line::from(vec![
            tab(
                Pane::Account,
                match self.user() {
                    Some(user) => format!("Account ({})", user.name),
                    None => "Account".to_string(),
                },
            ),
            Span::styled("│", ctx.theme.border()),
            tab(Pane::Products, "Products".to_string()),
            Span::styled("│", ctx.theme.border()),
            tab(Pane::Cart, format!("Cart ({cart_count})")),
        ])
    }

    fn render_account(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let account = &self.account;
        if let Some(user) = &account.user {
            write_lines(
                area,
                buf,
                &[
                    Line::from(vec![
                        Span::styled("Signed in as ", ctx.theme.text_dim()),
                        Span::styled(user.name.clone(), ctx.theme.title()),
                    ]),
                    Line::from(Span::styled(user.email.clone(), ctx.theme.text())),
                    Line::default(),
                    Line::from(button("Log out", ctx.focused, ctx.theme)),
                ],
            );
            return;
        }

        let heading = match account.mode {
            AuthMode::Login => "Log in",
            AuthMode::Signup => "Create an account",
        };
        buf.set_line(
            area.x,
            area.y,
            &Line::from(Span::styled(heading, ctx.theme.text().add_modifier(Modifier::BOLD))),
            area.width,
        );
        for (index, row) in account.rows().iter().enumerate() {
            let y = area.y + 1 + index as u16;
            if y >= area.bottom() {
                break;
            }
            let active = ctx.focused && index == account.row;
            let cursor = marker(index == account.row, ctx.focused);
            buf.set_string(area.x, y, cursor, Style::default().fg(ctx.theme.accent));
            let row_area = Rect::new(area.x + 2, y, area.width.saturating_sub(2), 1);
            match row {
                AccountRow::Name | AccountRow::Email | AccountRow::Password => {
                    let (field, label) = match row {
                        AccountRow::Name => (&account.name, "Name:    "),
                        AccountRow::Email => (&account.email, "Email:   "),
                        _ => (&account.password, "Password:"),
                    };
                    field.render(row_area, buf, label, active && account.editing, ctx.theme);
                }
                AccountRow::Submit => {
                    let label = match account.mode {
                        AuthMode::Login => "Log in",
                        AuthMode::Signup => "Sign up",
                    };
                    buf.set_span(row_area.x, y, &button(label, active, ctx.theme), row_area.width);
                }
                AccountRow::SwitchMode => {
                    let label = match account.mode {
                        AuthMode::Login => "No account? Sign up instead",
                        AuthMode::Signup => "Have an account? Log in instead",
                    };
                    let span = Span::styled(label, row_style(active, ctx.focused, ctx.theme));
                    buf.set_span(row_area.x, y, &span, row_area.width);
                }
            }
        }
    }

    fn render_products(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        if let Some((id, tenths)) = self.zoom
            && let Some(product) = product(id)
        {
            let bar = usize::from(tenths) * 2;
            write_lines(
                area,
                buf,
                &[
                    Line::from(Span::styled(format!("Preview: {}", product.name), ctx.theme.title())),
                    Line::from(Span::styled(
                        format!("Zoom {:.1}x", f32::from(tenths) / 10.0),
                        ctx.theme.text(),
                    )),
                    Line::from(Span::styled("▇".repeat(bar), ctx.theme.info())),
                    Line::default(),
                    Line::from(Span::styled("+/- zoom  Esc close", ctx.theme.text_dim())),
                ],
            );
            return;
        }

        let mut lines = Vec::new();
        for (index, product) in self.page_items().iter().enumerate() {
            let is_cursor = index == self.cursor;
            lines.push(Line::from(vec![
                Span::raw(marker(is_cursor, ctx.focused)),
                Span::styled(
                    format!("{} ", checkbox(self.selected.contains(&product.id))),
                    ctx.theme.text_dim(),
                ),
                Span::styled(product.name, row_style(is_cursor, ctx.focused, ctx.theme)),
                Span::styled(format!("  {}", format_price(product.price)), ctx.theme.success()),
            ]));
            lines.push(Line::from(vec![
                Span::raw("      "),
                Span::styled(product.description, ctx.theme.text_dim()),
                Span::styled(format!("  [{}]", product.category), ctx.theme.info()),
                Span::styled(format!("  ★ {:.1}", product.rating), ctx.theme.warning()),
            ]));
        }
        lines.push(Line::default());
        let mut pager = vec![Span::styled("‹ ", ctx.theme.text_dim())];
        for page in 0..Self::total_pages() {
            let style = if page == self.page {
                ctx.theme.title()
            } else {
                ctx.theme.text_dim()
            };
            pager.push(Span::styled(format!("{} ", page + 1), style));
        }
        pager.push(Span::styled("›", ctx.theme.text_dim()));
        pager.push(Span::styled(
            format!("   {} selected", self.selected.len()),
            ctx.theme.text_dim(),
        ));
        lines.push(Line::from(pager));
        write_lines(area, buf, &lines);
    }

    fn render_cart(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        if self.cart.is_empty() {
            buf.set_line(
                area.x,
                area.y,
                &Line::from(Span::styled("Your cart is empty.", ctx.theme.text_dim())),
                area.width,
            );
            return;
        }
        let mut lines = Vec::new();
        for (index, item) in self.cart.iter().enumerate() {
            let Some(product) = product(item.product_id) else {
                continue;
            };
            let is_cursor = index == self.cart_cursor;
            lines.push(Line::from(vec![
                Span::raw(marker(is_cursor, ctx.focused)),
                Span::styled(product.name, row_style(is_cursor, ctx.focused, ctx.theme)),
                Span::styled(format!("  × {}", item.quantity), ctx.theme.text()),
                Span::styled(
                    format!("  {}", format_price(product.price * u64::from(item.quantity))),
                    ctx.theme.success(),
                ),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Total: ", ctx.theme.text_dim()),
            Span::styled(format_price(self.total_price()), ctx.theme.title()),
        ]));
        write_lines(area, buf, &lines);
    }
}

impl Section for StoreSection {
    fn title(&self) -> &'static str {
        "Store"
    }

    fn height(&self, _width: u16) -> u16 {
        // borders + tabs + gap + the tallest pane (products: 3x2 rows, gap, pager)
        2 + 2 + 8
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        if inner.height < 2 {
            return;
        }
        buf.set_line(inner.x, inner.y, &self.render_tabs(ctx), inner.width);
        let body = Rect {
            y: inner.y + 2,
            height: inner.height - 2,
            ..inner
        };
        match self.pane {
            Pane::Account => self.render_account(body, buf, ctx),
            Pane::Products => self.render_products(body, buf, ctx),
            Pane::Cart => self.render_cart(body, buf, ctx),
        }
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        if !self.captures_text() && self.zoom.is_none() && key.code == KeyCode::Char('p') {
            self.pane = self.pane.next();
            return KeyOutcome::Consumed;
        }
        match self.pane {
            Pane::Account => self.account_key(key, fx),
            Pane::Products => self.products_key(key, fx),
            Pane::Cart => self.cart_key(key, fx),
        }
    }

    fn captures_text(&self) -> bool {
        self.pane == Pane::Account && self.account.editing
    }

    fn hints(&self) -> &'static str {
        match self.pane {
            Pane::Account if self.account.editing => "type  Enter next  Esc done",
            Pane::Account => "p pane  ↑/↓ row  Enter edit/submit",
            Pane::Products if self.zoom.is_some() => "+/- zoom  Esc close",
            Pane::Products => "p pane  ←/→ page  Enter add  Space select  A/D all  z zoom",
            Pane::Cart => "p pane  ↑/↓ item  +/- qty  d remove",
        }
    }

    fn blur(&mut self) {
        self.account.editing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::ui::ToastLevel;
    use crossterm::event::KeyModifiers;
    use std::time::Instant;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(store: &mut StoreSection, codes: &[KeyCode]) -> Vec<Action> {
        let mut fx = Effects::new(Instant::now());
        for code in codes {
            store.handle_key(key(*code), &mut fx);
        }
        fx.into_actions()
    }

    fn type_text(store: &mut StoreSection, text: &str) {
        let codes: Vec<KeyCode> = text.chars().map(KeyCode::Char).collect();
        press(store, &codes);
    }

    #[test]
    fn test_pagination_is_clamped() {
        let mut store = StoreSection::default();
        assert_eq!(StoreSection::total_pages(), 2);
        press(&mut store, &[KeyCode::Right, KeyCode::Right]);
        assert_eq!(store.page(), 1);
        assert_eq!(store.page_items()[0].id, 4);
        press(&mut store, &[KeyCode::Left, KeyCode::Left]);
        assert_eq!(store.page(), 0);
    }

    #[test]
    fn test_adding_twice_increments_quantity() {
        let mut store = StoreSection::default();
        let actions = press(&mut store, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(store.cart(), &[CartItem { product_id: 1, quantity: 2 }]);
        assert_eq!(store.total_price(), 178_000);
        assert_eq!(
            actions[0],
            Action::Notify(ToastLevel::Success, "Wireless headphones added to cart".into())
        );
    }

    #[test]
    fn test_quantity_never_drops_below_one() {
        let mut store = StoreSection::default();
        press(&mut store, &[KeyCode::Enter]);
        store.update_quantity(1, -1);
        assert_eq!(store.cart()[0].quantity, 1);
        store.update_quantity(1, 3);
        assert_eq!(store.cart()[0].quantity, 4);
    }

    #[test]
    fn test_remove_emits_info_toast() {
        let mut store = StoreSection::default();
        press(&mut store, &[KeyCode::Enter, KeyCode::Char('p')]);
        assert_eq!(store.pane(), Pane::Cart);
        let actions = press(&mut store, &[KeyCode::Char('d')]);
        assert!(store.cart().is_empty());
        assert_eq!(actions, vec![Action::Notify(ToastLevel::Info, "Item removed from cart".into())]);
    }

    #[test]
    fn test_select_all_is_scoped_to_current_page() {
        let mut store = StoreSection::default();
        press(&mut store, &[KeyCode::Char('A')]);
        assert_eq!(store.selected().iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        press(&mut store, &[KeyCode::Right, KeyCode::Char(' ')]);
        assert_eq!(store.selected().len(), 4);
        press(&mut store, &[KeyCode::Left, KeyCode::Char('D')]);
        assert_eq!(store.selected().iter().copied().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut store = StoreSection::default();
        press(&mut store, &[KeyCode::Char('z')]);
        assert_eq!(store.zoom(), Some(1.0));
        for _ in 0..20 {
            press(&mut store, &[KeyCode::Char('+')]);
        }
        assert_eq!(store.zoom(), Some(3.0));
        for _ in 0..20 {
            press(&mut store, &[KeyCode::Char('-')]);
        }
        assert_eq!(store.zoom(), Some(0.5));
        press(&mut store, &[KeyCode::Esc]);
        assert_eq!(store.zoom(), None);
    }

    #[test]
    fn test_login_requires_email_and_password() {
        let mut store = StoreSection::default();
        press(&mut store, &[KeyCode::Char('p'), KeyCode::Char('p')]);
        assert_eq!(store.pane(), Pane::Account);

        // Submit an empty form.
        let actions = press(&mut store, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(
            actions,
            vec![Action::Notify(ToastLevel::Error, "Enter your email and password.".into())]
        );
        assert!(store.user().is_none());

        press(&mut store, &[KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert!(store.captures_text());
        type_text(&mut store, "ada@example.com");
        press(&mut store, &[KeyCode::Enter, KeyCode::Enter]);
        type_text(&mut store, "pw");
        let actions = press(&mut store, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(actions, vec![Action::Notify(ToastLevel::Success, "Logged in!".into())]);
        let user = store.user().cloned();
        assert_eq!(
            user,
            Some(User {
                name: "User".into(),
                email: "ada@example.com".into()
            })
        );
    }

    #[test]
    fn test_logout_clears_cart() {
        let mut store = StoreSection::default();
        press(&mut store, &[KeyCode::Enter]);
        store.account.user = Some(User {
            name: "Ada".into(),
            email: "ada@example.com".into(),
        });
        press(&mut store, &[KeyCode::Char('p'), KeyCode::Char('p')]);
        let actions = press(&mut store, &[KeyCode::Enter]);
        assert!(store.user().is_none());
        assert!(store.cart().is_empty());
        assert_eq!(actions, vec![Action::Notify(ToastLevel::Info, "Logged out".into())]);
    }

    #[test]
    fn test_signup_requires_name() {
        let mut store = StoreSection::default();
        store.pane = Pane::Account;
        // Switch to signup via the last row.
        press(&mut store, &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        press(&mut store, &[KeyCode::Down, KeyCode::Enter]);
        type_text(&mut store, "a@b.c");
        press(&mut store, &[KeyCode::Enter, KeyCode::Enter]);
        type_text(&mut store, "pw");
        let actions = press(&mut store, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(
            actions,
            vec![Action::Notify(ToastLevel::Error, "Please fill in every field.".into())]
        );
    }
}
