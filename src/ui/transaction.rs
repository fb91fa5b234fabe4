//! Transaction sheet chrome: header, footer button and the details summary.

use super::badge::BadgePair;
use super::icon::Icon;
use super::markup::Element;
use super::Component;
use crate::shared::AssetSymbol;

// ─── TransactionHeader ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TransactionType {
    #[default]
    BuyPair,
    SellPair,
    BuyAsset,
    SellAsset,
    Send,
    Receive,
    Convert,
}

/// Colour family of the header action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionColor {
    Buy,
    Sell,
    Secondary,
}

impl ActionColor {
    pub fn modifier(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Secondary => "secondary",
        }
    }
}

impl TransactionType {
    pub fn action_icon(&self) -> Icon {
        match self {
            Self::BuyPair | Self::BuyAsset => Icon::Buy,
            Self::SellPair | Self::SellAsset => Icon::Sell,
            Self::Send => Icon::Send,
            Self::Receive => Icon::Receive,
            Self::Convert => Icon::Convert,
        }
    }

    pub fn action_color(&self) -> ActionColor {
        match self {
            Self::BuyPair | Self::BuyAsset => ActionColor::Buy,
            Self::SellPair | Self::SellAsset => ActionColor::Sell,
            Self::Send | Self::Receive | Self::Convert => ActionColor::Secondary,
        }
    }

    /// Selector prefix. Convert has none.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BuyPair | Self::BuyAsset => "Buy:",
            Self::SellPair | Self::SellAsset => "Sell:",
            Self::Send => "Send:",
            Self::Receive => "Receive:",
            Self::Convert => "",
        }
    }

    /// Pair types show two badges and the pair placeholder.
    pub fn is_pair(&self) -> bool {
        matches!(self, Self::BuyPair | Self::SellPair | Self::Convert)
    }

    pub fn placeholder(&self) -> &'static str {
        if self.is_pair() {
            "Select Pair"
        } else {
            "Select Asset"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionHeader {
    pub kind: TransactionType,
    /// Shows the placeholder instead of the selection.
    pub empty: bool,
    pub primary: Option<AssetSymbol>,
    pub secondary: Option<AssetSymbol>,
    pub display_text: Option<String>,
}

impl TransactionHeader {
    pub fn new(kind: TransactionType) -> Self {
        Self {
            kind,
            empty: false,
            primary: None,
            secondary: None,
            display_text: None,
        }
    }

    pub fn empty(kind: TransactionType) -> Self {
        Self {
            empty: true,
            ..Self::new(kind)
        }
    }

    pub fn selection(
        mut self,
        primary: AssetSymbol,
        secondary: Option<AssetSymbol>,
        display_text: impl Into<String>,
    ) -> Self {
        self.primary = Some(primary);
        self.secondary = secondary;
        self.display_text = Some(display_text.into());
        self
    }

    fn render_selection(&self) -> Vec<Element> {
        if self.empty {
            return vec![Element::new("span")
                .class("transaction-header__placeholder")
                .text(self.kind.placeholder())];
        }
        let Some(primary) = self.primary else {
            return Vec::new();
        };
        let badges = BadgePair {
            primary,
            secondary: self.secondary.filter(|_| self.kind.is_pair()),
            size: 24,
        };
        let mut out = vec![badges.render()];
        if let Some(text) = &self.display_text {
            out.push(
                Element::new("span")
                    .class("transaction-header__display-text")
                    .text(text),
            );
        }
        out
    }
}

impl Component for TransactionHeader {
    fn render(&self) -> Element {
        let color = self.kind.action_color().modifier();
        let label = self.kind.label();

        let action = Element::new("button")
            .class("transaction-header__action")
            .class(format!("transaction-header__action--{color}"))
            .attr("type", "button")
            .attr("aria-label", label.replace(':', ""))
            .child(self.kind.action_icon().render());

        let prefix = (!label.is_empty()).then(|| {
            Element::new("span")
                .class("transaction-header__label")
                .class(format!("transaction-header__label--{color}"))
                .text(label)
        });

        let selector = Element::new("button")
            .class("transaction-header__selector")
            .attr("type", "button")
            .child(
                Element::new("div")
                    .class("transaction-header__selector-content")
                    .child_opt(prefix)
                    .children(self.render_selection()),
            )
            .child(Icon::Dropdown.render().class("transaction-header__dropdown-icon"));

        let close = Element::new("button")
            .class("transaction-header__close")
            .attr("type", "button")
            .attr("aria-label", "Close")
            .child(Icon::Close.render());

        Element::new("div")
            .class("transaction-header")
            .child(
                Element::new("div")
                    .class("transaction-header__dragger")
                    .child(Element::new("div").class("transaction-header__dragger-bar")),
            )
            .child(
                Element::new("div")
                    .class("transaction-header__content")
                    .child(action)
                    .child(selector)
                    .child(close),
            )
    }
}

// ─── TransactionFooter ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FooterVariant {
    Buy,
    Sell,
    Brand,
    /// Greyed out and never clickable.
    #[default]
    Default,
    /// Shows the error message in place of the label.
    Error,
}

impl FooterVariant {
    pub fn modifier(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Brand => "brand",
            Self::Default => "default",
            Self::Error => "error",
        }
    }
}

pub const DEFAULT_FUNDS_ERROR: &str = "You do not have enough funds for this transaction";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFooter {
    pub variant: FooterVariant,
    pub text: String,
    pub error_message: String,
    pub disabled: bool,
}

impl TransactionFooter {
    pub fn new(variant: FooterVariant) -> Self {
        Self {
            variant,
            text: "Buy".to_string(),
            error_message: DEFAULT_FUNDS_ERROR.to_string(),
            disabled: false,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled || self.variant == FooterVariant::Default
    }

    pub fn button_text(&self) -> &str {
        match self.variant {
            FooterVariant::Error => &self.error_message,
            _ => &self.text,
        }
    }

    pub fn click(&self) -> bool {
        !self.is_disabled()
    }
}

impl Component for TransactionFooter {
    fn render(&self) -> Element {
        Element::new("div").class("transaction-footer").child(
            Element::new("button")
                .class("transaction-footer__button")
                .class(format!(
                    "transaction-footer__button--{}",
                    self.variant.modifier()
                ))
                .attr("type", "button")
                .flag("disabled", self.is_disabled())
                .text(self.button_text()),
        )
    }
}

// ─── TransactionDetails ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
    pub asset: Option<String>,
}

impl DetailRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>, asset: Option<&str>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            asset: asset.map(str::to_string),
        }
    }
}

/// Label/value summary rows (price, fees, totals).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDetails {
    pub rows: Vec<DetailRow>,
}

impl TransactionDetails {
    pub fn new(rows: Vec<DetailRow>) -> Self {
        Self { rows }
    }
}

impl Component for TransactionDetails {
    fn render(&self) -> Element {
        let rows = self.rows.iter().map(|row| {
            Element::new("div")
                .class("transaction-details__row")
                .child(
                    Element::new("span")
                        .class("transaction-details__label")
                        .text(&row.label),
                )
                .child(
                    Element::new("div")
                        .class("transaction-details__value-container")
                        .child(
                            Element::new("span")
                                .class("transaction-details__value")
                                .text(&row.value),
                        )
                        .child_opt(row.asset.as_ref().map(|a| {
                            Element::new("span")
                                .class("transaction-details__asset")
                                .text(a)
                        })),
                )
        });
        Element::new("div")
            .class("transaction-details")
            .child(
                Element::new("div")
                    .class("transaction-details__values")
                    .children(rows),
            )
    }
}
