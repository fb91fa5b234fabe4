//! Asset and pair selection: the selector button, the dropdown list and the
//! Pairs/Crypto switcher that wraps it.

use super::badge::CryptoBadge;
use super::checkbox::{Checkbox, CheckboxState};
use super::icon::Icon;
use super::markup::Element;
use super::tabs::{ListType, PillTabs, Tab, TypeOption, TypeSelector};
use super::Component;
use crate::shared::AssetSymbol;

/// Filter value that shows every item.
pub const ALL_FILTER: &str = "all";

const SELECTOR_BADGE_SIZE: u32 = 24;

fn badge(symbol: AssetSymbol) -> Element {
    CryptoBadge::new(symbol).size(SELECTOR_BADGE_SIZE).render()
}

// ─── CryptoSelector ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SelectorVariant {
    Buy,
    Sell,
    #[default]
    Regular,
}

impl SelectorVariant {
    pub fn modifier(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Regular => "regular",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorBadges {
    Single(AssetSymbol),
    Pair(AssetSymbol, AssetSymbol),
}

/// The collapsed selector button: optional label, badges, text and a caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoSelector {
    pub label: Option<String>,
    pub badges: SelectorBadges,
    pub display_text: String,
    pub variant: SelectorVariant,
    open: bool,
}

impl CryptoSelector {
    pub fn new(badges: SelectorBadges, display_text: impl Into<String>) -> Self {
        Self {
            label: None,
            badges,
            display_text: display_text.into(),
            variant: SelectorVariant::Regular,
            open: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>, variant: SelectorVariant) -> Self {
        self.label = Some(label.into());
        self.variant = variant;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Toggles the open flag and returns it.
    pub fn click(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Changing the selection closes the dropdown.
    pub fn set_badges(&mut self, badges: SelectorBadges, display_text: impl Into<String>) {
        self.badges = badges;
        self.display_text = display_text.into();
        self.open = false;
    }
}

impl Component for CryptoSelector {
    fn render(&self) -> Element {
        let badges = match self.badges {
            SelectorBadges::Single(symbol) => vec![Element::new("div")
                .class("crypto-selector__badge")
                .child(badge(symbol))],
            SelectorBadges::Pair(primary, secondary) => vec![
                Element::new("div")
                    .class("crypto-selector__badge crypto-selector__badge--primary")
                    .child(badge(primary)),
                Element::new("div")
                    .class("crypto-selector__badge crypto-selector__badge--secondary")
                    .child(badge(secondary)),
            ],
        };

        let label = self.label.as_ref().map(|l| {
            Element::new("span")
                .class("crypto-selector__label")
                .class(format!("crypto-selector__label--{}", self.variant.modifier()))
                .text(l)
        });

        Element::new("button")
            .class("crypto-selector")
            .class_if(self.open, "crypto-selector--active")
            .attr("type", "button")
            .child(
                Element::new("div")
                    .class("crypto-selector__content")
                    .child_opt(label)
                    .child(Element::new("div").class("crypto-selector__badges").children(badges))
                    .child(
                        Element::new("span")
                            .class("crypto-selector__text")
                            .text(&self.display_text),
                    ),
            )
            .child(Icon::Dropdown.render().class("crypto-selector__icon"))
    }
}

// ─── CryptoSelectorDropdown ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Pair,
    Crypto,
}

impl From<ListType> for ItemKind {
    fn from(list: ListType) -> Self {
        match list {
            ListType::Pairs => ItemKind::Pair,
            ListType::Crypto => ItemKind::Crypto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownItem {
    pub id: String,
    pub kind: ItemKind,
    pub display_name: String,
    pub crypto: AssetSymbol,
    pub secondary: Option<AssetSymbol>,
    /// Items without a category only appear under the "all" filter.
    pub category: Option<String>,
    pub selectable: bool,
    pub show_check: bool,
    pub checkbox_state: Option<CheckboxState>,
}

impl DropdownItem {
    pub fn pair(
        id: impl Into<String>,
        primary: AssetSymbol,
        secondary: AssetSymbol,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Pair,
            display_name: display_name.into(),
            crypto: primary,
            secondary: Some(secondary),
            category: None,
            selectable: true,
            show_check: false,
            checkbox_state: None,
        }
    }

    pub fn crypto(id: impl Into<String>, crypto: AssetSymbol, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Crypto,
            display_name: display_name.into(),
            crypto,
            secondary: None,
            category: None,
            selectable: true,
            show_check: false,
            checkbox_state: None,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn show_check(mut self, show: bool) -> Self {
        self.show_check = show;
        self
    }

    pub fn matches_filter(&self, filter: &str) -> bool {
        filter == ALL_FILTER || self.category.as_deref() == Some(filter)
    }
}

/// Filterable list of pairs or assets with single or multi selection.
///
/// Selection is owned by the caller: `click` reports the new id list and the
/// caller writes it back into `selected_ids`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoSelectorDropdown {
    pub items: Vec<DropdownItem>,
    pub selected_ids: Vec<String>,
    pub multi_select: bool,
    filter_tabs: Vec<Tab<String>>,
    active_filter: String,
}

fn initial_filter(tabs: &[Tab<String>]) -> String {
    tabs.first()
        .map(|t| t.value.clone())
        .unwrap_or_else(|| ALL_FILTER.to_string())
}

impl CryptoSelectorDropdown {
    pub fn new(items: Vec<DropdownItem>) -> Self {
        Self {
            items,
            selected_ids: Vec::new(),
            multi_select: false,
            filter_tabs: Vec::new(),
            active_filter: ALL_FILTER.to_string(),
        }
    }

    pub fn with_filters(mut self, tabs: Vec<Tab<String>>) -> Self {
        self.set_filter_tabs(tabs);
        self
    }

    pub fn multi_select(mut self, multi: bool) -> Self {
        self.multi_select = multi;
        self
    }

    pub fn selected(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.selected_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn filter_tabs(&self) -> &[Tab<String>] {
        &self.filter_tabs
    }

    /// Replaces the filter tabs; the active filter resets to the first tab.
    pub fn set_filter_tabs(&mut self, tabs: Vec<Tab<String>>) {
        self.active_filter = initial_filter(&tabs);
        self.filter_tabs = tabs;
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// Filter pill click.
    pub fn select_filter(&mut self, value: impl Into<String>) {
        self.active_filter = value.into();
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &DropdownItem> {
        self.items
            .iter()
            .filter(move |item| item.matches_filter(&self.active_filter))
    }

    pub fn is_selected(&self, item: &DropdownItem) -> bool {
        self.selected_ids.iter().any(|id| *id == item.id)
    }

    /// Item click. `None` when the item is unknown or not selectable.
    pub fn click(&self, id: &str) -> Option<Vec<String>> {
        let item = self.items.iter().find(|i| i.id == id)?;
        if !item.selectable {
            return None;
        }
        if !self.multi_select {
            return Some(vec![item.id.clone()]);
        }
        let mut next = self.selected_ids.clone();
        match next.iter().position(|s| *s == item.id) {
            Some(pos) => {
                next.remove(pos);
            }
            None => next.push(item.id.clone()),
        }
        Some(next)
    }

    pub fn checkbox_state(&self, item: &DropdownItem) -> CheckboxState {
        if let Some(state) = item.checkbox_state {
            state
        } else if !item.selectable {
            CheckboxState::Fixed
        } else if self.is_selected(item) {
            CheckboxState::Selected
        } else {
            CheckboxState::Default
        }
    }

    pub fn shows_checkbox(&self, item: &DropdownItem) -> bool {
        item.show_check || self.multi_select
    }

    fn render_item(&self, item: &DropdownItem) -> Element {
        let selected = self.is_selected(item);
        let badges = match (item.kind, item.secondary) {
            (ItemKind::Pair, Some(secondary)) => vec![
                Element::new("div")
                    .class("crypto-selector-dropdown__badge crypto-selector-dropdown__badge--primary")
                    .child(badge(item.crypto)),
                Element::new("div")
                    .class("crypto-selector-dropdown__badge crypto-selector-dropdown__badge--secondary")
                    .child(badge(secondary)),
            ],
            _ => vec![Element::new("div")
                .class("crypto-selector-dropdown__badge")
                .child(badge(item.crypto))],
        };
        let checkbox = self
            .shows_checkbox(item)
            .then(|| Checkbox::new(self.checkbox_state(item), selected).render());

        Element::new("button")
            .class("crypto-selector-dropdown__item")
            .class_if(selected, "crypto-selector-dropdown__item--selected")
            .class_if(!item.selectable, "crypto-selector-dropdown__item--fixed")
            .attr("type", "button")
            .attr("data-id", &item.id)
            .flag("disabled", !item.selectable)
            .child(
                Element::new("div")
                    .class("crypto-selector-dropdown__item-content")
                    .child(
                        Element::new("div")
                            .class("crypto-selector-dropdown__badges")
                            .children(badges),
                    )
                    .child(
                        Element::new("span")
                            .class("crypto-selector-dropdown__pair-name")
                            .text(&item.display_name),
                    ),
            )
            .child_opt(checkbox)
    }
}

impl Component for CryptoSelectorDropdown {
    fn render(&self) -> Element {
        let filters = (!self.filter_tabs.is_empty()).then(|| {
            Element::new("div")
                .class("crypto-selector-dropdown__filters")
                .child(PillTabs::new(self.filter_tabs.clone(), self.active_filter.clone()).render())
        });
        Element::new("div")
            .class("crypto-selector-dropdown")
            .child_opt(filters)
            .child(
                Element::new("div")
                    .class("crypto-selector-dropdown__list")
                    .children(self.visible_items().map(|item| self.render_item(item))),
            )
    }
}

// ─── PairCryptoSelector ──────────────────────────────────────────────────────

/// Dropdown with a Pairs / Crypto switch. Filter tabs only apply to pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCryptoSelector {
    items: Vec<DropdownItem>,
    pair_filters: Vec<Tab<String>>,
    list_type: ListType,
    dropdown: CryptoSelectorDropdown,
}

impl PairCryptoSelector {
    pub fn new(items: Vec<DropdownItem>, pair_filters: Vec<Tab<String>>) -> Self {
        let mut selector = Self {
            items,
            pair_filters,
            list_type: ListType::Pairs,
            dropdown: CryptoSelectorDropdown::new(Vec::new()),
        };
        selector.rebuild();
        selector
    }

    pub fn multi_select(mut self, multi: bool) -> Self {
        self.dropdown.multi_select = multi;
        self
    }

    pub fn initial_list(mut self, list_type: ListType) -> Self {
        self.set_list_type(list_type);
        self
    }

    pub fn list_type(&self) -> ListType {
        self.list_type
    }

    pub fn dropdown(&self) -> &CryptoSelectorDropdown {
        &self.dropdown
    }

    pub fn dropdown_mut(&mut self) -> &mut CryptoSelectorDropdown {
        &mut self.dropdown
    }

    /// Type selector click.
    pub fn select_type(&mut self, option: TypeOption) {
        self.set_list_type(option.into());
    }

    pub fn set_list_type(&mut self, list_type: ListType) {
        if self.list_type != list_type {
            self.list_type = list_type;
            self.rebuild();
        }
    }

    pub fn click(&self, id: &str) -> Option<Vec<String>> {
        self.dropdown.click(id)
    }

    fn rebuild(&mut self) {
        let kind = ItemKind::from(self.list_type);
        self.dropdown.items = self
            .items
            .iter()
            .filter(|i| i.kind == kind)
            .cloned()
            .collect();
        let filters = match self.list_type {
            ListType::Pairs => self.pair_filters.clone(),
            ListType::Crypto => Vec::new(),
        };
        self.dropdown.set_filter_tabs(filters);
    }
}

impl Component for PairCryptoSelector {
    fn render(&self) -> Element {
        Element::new("div")
            .class("pair-crypto-selector")
            .child(
                Element::new("div")
                    .class("pair-crypto-selector__header")
                    .child(TypeSelector::pairs_crypto(self.list_type).render()),
            )
            .child(self.dropdown.render())
    }
}
