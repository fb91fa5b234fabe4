//! Presentation models for the design-system components.
//!
//! Each component is a plain struct of closed-variant props. Rendering is a
//! pure function to a [`markup::Element`] tree with BEM class names; user
//! events are methods that return the value the owner should act on.
//! Callers add their own classes with `.render().class("...")`.

pub mod badge;
pub mod button;
pub mod checkbox;
pub mod icon;
pub mod input;
pub mod markup;
pub mod order_form;
pub mod price_card;
pub mod selector;
pub mod tabs;
pub mod theme_switcher;
pub mod transaction;

pub use badge::{BadgePair, CryptoBadge};
pub use button::{Button, ButtonSize, ButtonState, ButtonVariant};
pub use checkbox::{Checkbox, CheckboxState};
pub use icon::Icon;
pub use input::{CurrencyPairInput, DualAmountInput, Input, InputKind, InputState};
pub use markup::Element;
pub use order_form::{OrderForm, OrderFormData, OrderSide, OrderType, TabStyle};
pub use price_card::{PriceCard, PriceCardStatus, PriceCardVariant};
pub use selector::{CryptoSelector, CryptoSelectorDropdown, DropdownItem, PairCryptoSelector};
pub use tabs::{ListType, OrderTypeTabs, PillTabs, Tab, Tabs, TypeSelector};
pub use theme_switcher::ThemeSwitcher;
pub use transaction::{TransactionDetails, TransactionFooter, TransactionHeader, TransactionType};

/// Anything that renders to markup.
pub trait Component {
    fn render(&self) -> Element;

    fn to_html(&self) -> String {
        self.render().to_html()
    }
}
