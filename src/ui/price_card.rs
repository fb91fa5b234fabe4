//! Price summary card.

use super::markup::Element;
use super::Component;
use crate::shared::fmt::{format_change_pct, format_usd};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PriceCardVariant {
    #[default]
    Compact,
    Detailed,
}

impl PriceCardVariant {
    pub fn modifier(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Detailed => "detailed",
        }
    }
}

/// Loading wins over error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PriceCardStatus {
    #[default]
    Ready,
    Loading,
    Error,
}

pub const PRICE_ERROR_TEXT: &str = "Failed to load price data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceCard {
    pub name: String,
    pub symbol: String,
    pub price: Decimal,
    /// 24h change in percent.
    pub change_24h: Decimal,
    pub variant: PriceCardVariant,
    pub status: PriceCardStatus,
}

impl PriceCard {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        price: Decimal,
        change_24h: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            price,
            change_24h,
            variant: PriceCardVariant::Compact,
            status: PriceCardStatus::Ready,
        }
    }

    pub fn variant(mut self, variant: PriceCardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn status(mut self, status: PriceCardStatus) -> Self {
        self.status = status;
        self
    }

    /// Zero counts as positive.
    pub fn is_positive(&self) -> bool {
        !self.change_24h.is_sign_negative() || self.change_24h.is_zero()
    }

    pub fn formatted_price(&self) -> String {
        format_usd(self.price)
    }

    /// First character of the symbol, shown in the icon circle.
    pub fn icon_text(&self) -> String {
        self.symbol.chars().take(1).collect()
    }
}

impl Component for PriceCard {
    fn render(&self) -> Element {
        let card = Element::new("div")
            .class("price-card")
            .class(format!("price-card--{}", self.variant.modifier()));

        match self.status {
            PriceCardStatus::Loading => {
                return card
                    .class("price-card--loading")
                    .child(Element::new("div").class("skeleton skeleton--text"))
                    .child(Element::new("div").class("skeleton skeleton--price"));
            }
            PriceCardStatus::Error => {
                return card
                    .class("price-card--error")
                    .child(Element::new("p").text(PRICE_ERROR_TEXT));
            }
            PriceCardStatus::Ready => {}
        }

        let (direction, arrow) = if self.is_positive() {
            ("positive", "▲")
        } else {
            ("negative", "▼")
        };

        card.child(
            Element::new("div")
                .class("price-card__header")
                .child(Element::new("div").class("price-card__icon").text(self.icon_text()))
                .child(
                    Element::new("div")
                        .class("price-card__info")
                        .child(Element::new("h3").class("price-card__name").text(&self.name))
                        .child(Element::new("span").class("price-card__symbol").text(&self.symbol)),
                ),
        )
        .child(
            Element::new("div")
                .class("price-card__body")
                .child(
                    Element::new("div")
                        .class("price-card__price")
                        .text(self.formatted_price()),
                )
                .child(
                    Element::new("div")
                        .class("price-card__change")
                        .class(direction)
                        .child(Element::new("span").class("price-card__change-icon").text(arrow))
                        .child(Element::new("span").text(format_change_pct(self.change_24h))),
                ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_ready_card() {
        let card = PriceCard::new("Bitcoin", "BTC", d("67012.5"), d("2.345"));
        let el = card.render();
        assert_eq!(el.class_name(), "price-card price-card--compact");
        assert_eq!(el.find("price-card__icon").unwrap().text_content(), "B");
        assert_eq!(el.find("price-card__price").unwrap().text_content(), "$67,012.50");
        let change = el.find("price-card__change").unwrap();
        assert!(change.has_class("positive"));
        assert_eq!(change.text_content(), "▲2.35%");
    }

    #[test]
    fn test_negative_change() {
        let el = PriceCard::new("Ether", "ETH", d("3000"), d("-1.5"))
            .variant(PriceCardVariant::Detailed)
            .render();
        assert!(el.has_class("price-card--detailed"));
        let change = el.find("price-card__change").unwrap();
        assert!(change.has_class("negative"));
        assert_eq!(change.text_content(), "▼1.50%");
    }

    #[test]
    fn test_zero_change_is_positive() {
        assert!(PriceCard::new("x", "X", d("1"), d("0")).is_positive());
        assert!(PriceCard::new("x", "X", d("1"), d("-0")).is_positive());
    }

    #[test]
    fn test_loading_and_error() {
        let loading = PriceCard::new("Bitcoin", "BTC", d("1"), d("0"))
            .status(PriceCardStatus::Loading)
            .render();
        assert!(loading.has_class("price-card--loading"));
        assert_eq!(loading.find_all("skeleton").len(), 2);
        assert!(loading.find("price-card__price").is_none());

        let error = PriceCard::new("Bitcoin", "BTC", d("1"), d("0"))
            .status(PriceCardStatus::Error)
            .render();
        assert_eq!(error.text_content(), PRICE_ERROR_TEXT);
    }
}
