//! Tab strips: underline tabs, pills, the two-way type selector and the
//! order-type tabs.
//!
//! All of these are stateless. `active` is a prop; clicks are reported back
//! to the owner, which decides whether to update it.

use super::markup::Element;
use super::order_form::OrderType;
use super::Component;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab<V> {
    pub label: String,
    pub value: V,
}

impl<V> Tab<V> {
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Tabs whose label and value are both the display string.
pub fn labelled<V: Display + Clone>(values: impl IntoIterator<Item = V>) -> Vec<Tab<V>> {
    values
        .into_iter()
        .map(|v| Tab::new(v.to_string(), v))
        .collect()
}

fn tab_buttons<V: Display + PartialEq>(
    tabs: &[Tab<V>],
    active: &V,
    base: &str,
    active_classes: &str,
) -> Vec<Element> {
    tabs.iter()
        .map(|tab| {
            Element::new("button")
                .class(base)
                .class_if(tab.value == *active, active_classes)
                .attr("type", "button")
                .attr("data-value", tab.value.to_string())
                .text(&tab.label)
        })
        .collect()
}

fn value_at<V: Clone>(tabs: &[Tab<V>], index: usize) -> Option<V> {
    tabs.get(index).map(|t| t.value.clone())
}

// ─── Tabs ────────────────────────────────────────────────────────────────────

/// Underline colour of the active tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TabsVariant {
    #[default]
    Brand,
    Buy,
    Sell,
}

impl TabsVariant {
    pub fn modifier(&self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

/// Equal-width tabs with an underline on the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tabs<V> {
    pub tabs: Vec<Tab<V>>,
    pub active: V,
    pub variant: TabsVariant,
}

impl<V: Clone + PartialEq + Display> Tabs<V> {
    pub fn new(tabs: Vec<Tab<V>>, active: V) -> Self {
        Self {
            tabs,
            active,
            variant: TabsVariant::default(),
        }
    }

    pub fn variant(mut self, variant: TabsVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Value of the tab at `index`, reported on click.
    pub fn click_at(&self, index: usize) -> Option<V> {
        value_at(&self.tabs, index)
    }
}

impl<V: Clone + PartialEq + Display> Component for Tabs<V> {
    fn render(&self) -> Element {
        let active = format!(
            "tabs__tab--active tabs__tab--active-{}",
            self.variant.modifier()
        );
        Element::new("div").class("tabs").child(
            Element::new("div")
                .class("tabs__container")
                .children(tab_buttons(&self.tabs, &self.active, "tabs__tab", &active)),
        )
    }
}

// ─── PillTabs ────────────────────────────────────────────────────────────────

/// Horizontally scrolling pill buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PillTabs<V> {
    pub tabs: Vec<Tab<V>>,
    pub active: V,
}

impl<V: Clone + PartialEq + Display> PillTabs<V> {
    pub fn new(tabs: Vec<Tab<V>>, active: V) -> Self {
        Self { tabs, active }
    }

    pub fn click_at(&self, index: usize) -> Option<V> {
        value_at(&self.tabs, index)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t.value == self.active)
    }
}

impl<V: Clone + PartialEq + Display> Component for PillTabs<V> {
    fn render(&self) -> Element {
        Element::new("div").class("pill-tabs").child(
            Element::new("div").class("pill-tabs__container").children(tab_buttons(
                &self.tabs,
                &self.active,
                "pill-tabs__tab",
                "pill-tabs__tab--active",
            )),
        )
    }
}

// ─── TypeSelector ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TypeOption {
    #[default]
    First,
    Second,
}

/// A compact two-way toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSelector {
    pub first: String,
    pub second: String,
    pub active: TypeOption,
}

impl TypeSelector {
    pub fn new(first: impl Into<String>, second: impl Into<String>, active: TypeOption) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            active,
        }
    }

    /// The Pairs / Crypto toggle used by the selectors.
    pub fn pairs_crypto(active: ListType) -> Self {
        let active = match active {
            ListType::Pairs => TypeOption::First,
            ListType::Crypto => TypeOption::Second,
        };
        Self::new("Pairs", "Crypto", active)
    }

    pub fn click(&self, option: TypeOption) -> TypeOption {
        option
    }
}

impl Component for TypeSelector {
    fn render(&self) -> Element {
        let tab = |label: &str, option: TypeOption| {
            Element::new("button")
                .class("type-selector__tab")
                .class_if(self.active == option, "type-selector__tab--active")
                .attr("type", "button")
                .text(label)
        };
        Element::new("div")
            .class("type-selector")
            .child(tab(self.first.as_str(), TypeOption::First))
            .child(tab(self.second.as_str(), TypeOption::Second))
    }
}

/// Which list a pair/crypto selector shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ListType {
    #[default]
    Pairs,
    Crypto,
}

impl From<TypeOption> for ListType {
    fn from(option: TypeOption) -> Self {
        match option {
            TypeOption::First => ListType::Pairs,
            TypeOption::Second => ListType::Crypto,
        }
    }
}

// ─── OrderTypeTabs ───────────────────────────────────────────────────────────

/// Market / Limit / Stop tabs with a buy or sell indicator colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTypeTabs {
    pub active: OrderType,
    pub is_buy: bool,
}

impl OrderTypeTabs {
    pub const TYPES: [OrderType; 3] = [OrderType::Market, OrderType::Limit, OrderType::Stop];

    pub fn new(active: OrderType, is_buy: bool) -> Self {
        Self { active, is_buy }
    }

    pub fn click_at(&self, index: usize) -> Option<OrderType> {
        Self::TYPES.get(index).copied()
    }
}

impl Component for OrderTypeTabs {
    fn render(&self) -> Element {
        let side = if self.is_buy {
            "order-type-tabs__tab--buy"
        } else {
            "order-type-tabs__tab--sell"
        };
        let buttons = Self::TYPES.iter().map(|t| {
            Element::new("button")
                .class("order-type-tabs__tab")
                .class_if(*t == self.active, "order-type-tabs__tab--active")
                .class(side)
                .attr("type", "button")
                .attr("data-value", t.as_str())
                .text(t.label())
        });
        Element::new("div")
            .class("order-type-tabs")
            .child(Element::new("div").class("order-type-tabs__buttons").children(buttons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Period;

    #[test]
    fn test_tabs_active_variant_class() {
        let tabs = Tabs::new(labelled(["Buy".to_string(), "Sell".to_string()]), "Sell".to_string())
            .variant(TabsVariant::Sell);
        let el = tabs.render();
        let active = el.find("tabs__tab--active").unwrap();
        assert_eq!(active.text_content(), "Sell");
        assert!(active.has_class("tabs__tab--active-sell"));
        assert_eq!(el.find_all("tabs__tab").len(), 2);
    }

    #[test]
    fn test_pill_tabs_exactly_one_active() {
        let pills = PillTabs::new(labelled(Period::ALL), Period::Week1);
        let el = pills.render();
        assert_eq!(el.find_all("pill-tabs__tab").len(), 6);
        let active = el.find_all("pill-tabs__tab--active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text_content(), "1W");
        assert_eq!(pills.active_index(), Some(2));
        assert_eq!(pills.click_at(1), Some(Period::Day1));
        assert_eq!(pills.click_at(6), None);
    }

    #[test]
    fn test_type_selector_pairs_crypto() {
        let sel = TypeSelector::pairs_crypto(ListType::Crypto);
        let el = sel.render();
        let active = el.find("type-selector__tab--active").unwrap();
        assert_eq!(active.text_content(), "Crypto");
        assert_eq!(ListType::from(sel.click(TypeOption::First)), ListType::Pairs);
    }

    #[test]
    fn test_order_type_tabs_sell_colour() {
        let el = OrderTypeTabs::new(OrderType::Limit, false).render();
        assert_eq!(el.find_all("order-type-tabs__tab--sell").len(), 3);
        assert_eq!(
            el.find("order-type-tabs__tab--active").unwrap().text_content(),
            "Limit"
        );
    }
}
