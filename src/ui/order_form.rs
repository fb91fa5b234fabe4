//! Order entry form.
//!
//! The form owns its field values and the current side/order type. Which
//! fields are shown, and which are included in the submitted payload, is
//! driven by one table: [`OrderType::fields`].

use super::input::{CurrencyPairInput, Input, PairField, PairFieldState};
use super::markup::Element;
use super::tabs::{OrderTypeTabs, PillTabs, Tab};
use super::transaction::{
    DetailRow, FooterVariant, TransactionDetails, TransactionFooter, TransactionHeader,
    TransactionType,
};
use super::Component;
use crate::shared::AssetSymbol;
use serde::{Deserialize, Serialize};

// ─── OrderType ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    #[default]
    Market,
    Limit,
    Stop,
    StopLimit,
    TrailingStopMarket,
    TrailingStopLimit,
    ReserveOrder,
}

impl OrderType {
    pub const ALL: [OrderType; 7] = [
        Self::Market,
        Self::Limit,
        Self::Stop,
        Self::StopLimit,
        Self::TrailingStopMarket,
        Self::TrailingStopLimit,
        Self::ReserveOrder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
            Self::Stop => "stop",
            Self::StopLimit => "stop-limit",
            Self::TrailingStopMarket => "trailing-stop-market",
            Self::TrailingStopLimit => "trailing-stop-limit",
            Self::ReserveOrder => "reserve-order",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Market => "Market",
            Self::Limit => "Limit",
            Self::Stop => "Stop",
            Self::StopLimit => "Stop-Limit",
            Self::TrailingStopMarket => "Trailing Stop Market",
            Self::TrailingStopLimit => "Trailing Stop Limit",
            Self::ReserveOrder => "Reserve Order",
        }
    }

    /// Fields of this order type, in display order.
    pub fn fields(&self) -> &'static [OrderField] {
        use OrderField::*;
        match self {
            Self::Market => &[TopAmount, BottomAmount],
            Self::Limit => &[LimitPrice, TopAmount, BottomAmount, Tif],
            Self::Stop => &[StopPrice, TopAmount, BottomAmount, Tif],
            Self::StopLimit => &[LimitPrice, StopPrice, TopAmount, BottomAmount, Tif],
            Self::TrailingStopMarket => &[Amount, TrailingAmount, PegPrice],
            Self::TrailingStopLimit => &[Amount, TrailingAmount, PegPrice, Tif],
            Self::ReserveOrder => &[Amount, LimitPrice, DisplayQuantity],
        }
    }

    pub fn has_field(&self, field: OrderField) -> bool {
        self.fields().contains(&field)
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    #[default]
    Buy,
    Sell,
}

impl OrderSide {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

/// Pill tabs list every order type; basic tabs only market/limit/stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TabStyle {
    #[default]
    Pill,
    Basic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    LimitPrice,
    StopPrice,
    /// Base amount of the currency pair input.
    TopAmount,
    /// Quote amount of the currency pair input.
    BottomAmount,
    Amount,
    TrailingAmount,
    PegPrice,
    DisplayQuantity,
    Tif,
}

impl OrderField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LimitPrice => "Limit Price:",
            Self::StopPrice => "Stop Price:",
            Self::TopAmount | Self::BottomAmount | Self::Amount => "Amount:",
            Self::TrailingAmount => "Trailing Amount:",
            Self::PegPrice => "Peg Price:",
            Self::DisplayQuantity => "Display Quantity:",
            Self::Tif => "TIF:",
        }
    }
}

// ─── Values and payload ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFormValues {
    pub limit_price: String,
    pub stop_price: String,
    pub top_amount: String,
    pub bottom_amount: String,
    pub amount: String,
    pub trailing_amount: String,
    pub peg_price: String,
    pub display_quantity: String,
    pub tif: String,
}

impl Default for OrderFormValues {
    fn default() -> Self {
        Self {
            limit_price: "18,000.00".to_string(),
            stop_price: "18,000.00".to_string(),
            top_amount: "0.5".to_string(),
            bottom_amount: "9,420.25".to_string(),
            amount: "0.5".to_string(),
            trailing_amount: "0.5".to_string(),
            peg_price: "Last".to_string(),
            display_quantity: "10,0000".to_string(),
            tif: "GTC: Good Til Cancelled".to_string(),
        }
    }
}

impl OrderFormValues {
    pub fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::LimitPrice => &self.limit_price,
            OrderField::StopPrice => &self.stop_price,
            OrderField::TopAmount => &self.top_amount,
            OrderField::BottomAmount => &self.bottom_amount,
            OrderField::Amount => &self.amount,
            OrderField::TrailingAmount => &self.trailing_amount,
            OrderField::PegPrice => &self.peg_price,
            OrderField::DisplayQuantity => &self.display_quantity,
            OrderField::Tif => &self.tif,
        }
    }

    fn get_mut(&mut self, field: OrderField) -> &mut String {
        match field {
            OrderField::LimitPrice => &mut self.limit_price,
            OrderField::StopPrice => &mut self.stop_price,
            OrderField::TopAmount => &mut self.top_amount,
            OrderField::BottomAmount => &mut self.bottom_amount,
            OrderField::Amount => &mut self.amount,
            OrderField::TrailingAmount => &mut self.trailing_amount,
            OrderField::PegPrice => &mut self.peg_price,
            OrderField::DisplayQuantity => &mut self.display_quantity,
            OrderField::Tif => &mut self.tif,
        }
    }
}

/// Submitted order. Fields that do not apply to `order_type` are `None` and
/// are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormData {
    pub order_type: OrderType,
    pub order_side: OrderSide,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peg_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tif: Option<String>,
}

// ─── OrderForm ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    side: OrderSide,
    order_type: OrderType,
    pub tab_style: TabStyle,
    pub primary: AssetSymbol,
    pub secondary: AssetSymbol,
    pub display_text: String,
    pub values: OrderFormValues,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new(OrderSide::Buy, OrderType::Market)
    }
}

impl OrderForm {
    pub fn new(side: OrderSide, order_type: OrderType) -> Self {
        Self {
            side,
            order_type,
            tab_style: TabStyle::Pill,
            primary: AssetSymbol::Btc,
            secondary: AssetSymbol::Usdt,
            display_text: "BTCUSD".to_string(),
            values: OrderFormValues::default(),
        }
    }

    pub fn tab_style(mut self, style: TabStyle) -> Self {
        self.tab_style = style;
        self
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Header action click.
    pub fn toggle_side(&mut self) -> OrderSide {
        self.side = self.side.opposite();
        self.side
    }

    pub fn select_order_type(&mut self, order_type: OrderType) {
        self.order_type = order_type;
    }

    /// Updates a field value. Values of hidden fields are kept.
    pub fn set_value(&mut self, field: OrderField, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();
    }

    pub fn is_visible(&self, field: OrderField) -> bool {
        self.order_type.has_field(field)
    }

    /// Footer click: the payload for the current order type.
    pub fn submit(&self) -> OrderFormData {
        let pick = |field: OrderField| {
            self.is_visible(field)
                .then(|| self.values.get(field).to_string())
        };
        OrderFormData {
            order_type: self.order_type,
            order_side: self.side,
            limit_price: pick(OrderField::LimitPrice),
            stop_price: pick(OrderField::StopPrice),
            top_amount: pick(OrderField::TopAmount),
            bottom_amount: pick(OrderField::BottomAmount),
            amount: pick(OrderField::Amount),
            trailing_amount: pick(OrderField::TrailingAmount),
            peg_price: pick(OrderField::PegPrice),
            display_quantity: pick(OrderField::DisplayQuantity),
            tif: pick(OrderField::Tif),
        }
    }

    pub fn details() -> TransactionDetails {
        TransactionDetails::new(vec![
            DetailRow::new("Market Price", "18,880.50", Some("USD")),
            DetailRow::new("Fees", "0.00000000", Some("BTC")),
            DetailRow::new("Order Total", "9,020.25", Some("USD")),
            DetailRow::new("Net", "0.50000000", Some("BTC")),
        ])
    }

    fn header(&self) -> TransactionHeader {
        let kind = match self.side {
            OrderSide::Buy => TransactionType::BuyPair,
            OrderSide::Sell => TransactionType::SellPair,
        };
        TransactionHeader::new(kind).selection(
            self.primary,
            Some(self.secondary),
            self.display_text.clone(),
        )
    }

    fn footer(&self) -> TransactionFooter {
        let variant = match self.side {
            OrderSide::Buy => FooterVariant::Buy,
            OrderSide::Sell => FooterVariant::Sell,
        };
        TransactionFooter::new(variant).text(self.side.label())
    }

    fn render_tabs(&self) -> Element {
        match self.tab_style {
            TabStyle::Pill => {
                let tabs = OrderType::ALL
                    .iter()
                    .map(|t| Tab::new(t.label(), *t))
                    .collect();
                Element::new("div")
                    .class("order-form__pill-tabs")
                    .child(PillTabs::new(tabs, self.order_type).render())
            }
            TabStyle::Basic => {
                OrderTypeTabs::new(self.order_type, self.side == OrderSide::Buy).render()
            }
        }
    }

    fn render_field(&self, field: OrderField) -> Option<Element> {
        let v = |f: OrderField| self.values.get(f).to_string();
        let input = match field {
            OrderField::LimitPrice | OrderField::StopPrice => {
                Input::asset("USD", v(field), "0.00").render()
            }
            OrderField::Amount | OrderField::DisplayQuantity => {
                Input::asset("BTC", v(field), "0.0").render()
            }
            OrderField::TrailingAmount => Input::asset("USD", v(field), "0.0").render(),
            OrderField::PegPrice => Input::dropdown(v(field), "Select Peg Price").render(),
            OrderField::Tif => Input::dropdown(v(field), "Select TIF").render(),
            OrderField::TopAmount => CurrencyPairInput::new(
                PairFieldState::new("BTC", v(OrderField::TopAmount)),
                PairFieldState::new("USD", v(OrderField::BottomAmount)),
            )
            .render(),
            // Rendered with the top amount.
            OrderField::BottomAmount => return None,
        };
        Some(
            Element::new("div")
                .class("order-form__field-group")
                .child(Element::new("div").class("order-form__label").text(field.label()))
                .child(input),
        )
    }
}

/// Maps a change in the amount pair input to the form field it edits.
impl From<PairField> for OrderField {
    fn from(field: PairField) -> Self {
        match field {
            PairField::Top => OrderField::TopAmount,
            PairField::Bottom => OrderField::BottomAmount,
        }
    }
}

impl Component for OrderForm {
    fn render(&self) -> Element {
        let fields = self
            .order_type
            .fields()
            .iter()
            .filter_map(|f| self.render_field(*f));

        Element::new("div")
            .class("order-form")
            .child(self.header().render())
            .child(
                Element::new("div")
                    .class("order-form__content")
                    .child(self.render_tabs())
                    .child(Element::new("div").class("order-form__fields").children(fields))
                    .child(Self::details().render()),
            )
            .child(self.footer().render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(form: &OrderForm) -> Vec<String> {
        form.render()
            .find_all("order-form__label")
            .into_iter()
            .map(|e| e.text_content())
            .collect()
    }

    #[test]
    fn test_market_submit_has_only_amounts() {
        let data = OrderForm::default().submit();
        assert_eq!(data.order_type, OrderType::Market);
        assert_eq!(data.top_amount.as_deref(), Some("0.5"));
        assert_eq!(data.bottom_amount.as_deref(), Some("9,420.25"));
        assert_eq!(data.limit_price, None);
        assert_eq!(data.tif, None);

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "orderType": "market",
                "orderSide": "buy",
                "topAmount": "0.5",
                "bottomAmount": "9,420.25",
            })
        );
    }

    #[test]
    fn test_stop_limit_fields() {
        let mut form = OrderForm::new(OrderSide::Sell, OrderType::StopLimit);
        form.set_value(OrderField::StopPrice, "17,500.00");
        let data = form.submit();
        assert_eq!(data.limit_price.as_deref(), Some("18,000.00"));
        assert_eq!(data.stop_price.as_deref(), Some("17,500.00"));
        assert_eq!(data.tif.as_deref(), Some("GTC: Good Til Cancelled"));
        assert_eq!(data.amount, None);
        assert_eq!(
            labels(&form),
            ["Limit Price:", "Stop Price:", "Amount:", "TIF:"]
        );
    }

    #[test]
    fn test_reserve_order_fields() {
        let form = OrderForm::new(OrderSide::Buy, OrderType::ReserveOrder);
        let data = form.submit();
        assert_eq!(data.amount.as_deref(), Some("0.5"));
        assert_eq!(data.limit_price.as_deref(), Some("18,000.00"));
        assert_eq!(data.display_quantity.as_deref(), Some("10,0000"));
        assert_eq!(data.tif, None);
        assert_eq!(data.top_amount, None);
        assert_eq!(
            labels(&form),
            ["Amount:", "Limit Price:", "Display Quantity:"]
        );
    }

    #[test]
    fn test_trailing_stop_limit_fields() {
        let data = OrderForm::new(OrderSide::Buy, OrderType::TrailingStopLimit).submit();
        assert_eq!(data.trailing_amount.as_deref(), Some("0.5"));
        assert_eq!(data.peg_price.as_deref(), Some("Last"));
        assert_eq!(data.tif.as_deref(), Some("GTC: Good Til Cancelled"));
        assert_eq!(data.limit_price, None);
    }

    #[test]
    fn test_hidden_values_survive_type_switch() {
        let mut form = OrderForm::new(OrderSide::Buy, OrderType::Limit);
        form.set_value(OrderField::LimitPrice, "1.00");
        form.select_order_type(OrderType::Market);
        assert_eq!(form.submit().limit_price, None);
        form.select_order_type(OrderType::Limit);
        assert_eq!(form.submit().limit_price.as_deref(), Some("1.00"));
    }

    #[test]
    fn test_toggle_side_updates_header_and_footer() {
        let mut form = OrderForm::default();
        assert_eq!(form.toggle_side(), OrderSide::Sell);
        let el = form.render();
        assert!(el.find("transaction-header__action--sell").is_some());
        let footer = el.find("transaction-footer__button--sell").unwrap();
        assert_eq!(footer.text_content(), "Sell");
        assert_eq!(form.submit().order_side, OrderSide::Sell);
    }

    #[test]
    fn test_tab_styles() {
        let pill = OrderForm::default().render();
        assert_eq!(pill.find_all("pill-tabs__tab").len(), 7);
        assert!(pill.find("order-form__pill-tabs").is_some());

        let basic = OrderForm::new(OrderSide::Sell, OrderType::Stop)
            .tab_style(TabStyle::Basic)
            .render();
        assert_eq!(basic.find_all("order-type-tabs__tab").len(), 3);
        assert_eq!(
            basic.find("order-type-tabs__tab--active").unwrap().text_content(),
            "Stop"
        );
    }

    #[test]
    fn test_pair_field_maps_to_amounts() {
        let mut form = OrderForm::default();
        form.set_value(OrderField::from(PairField::Bottom), "100.00");
        assert_eq!(form.submit().bottom_amount.as_deref(), Some("100.00"));
    }

    #[test]
    fn test_order_type_serde_values() {
        for t in OrderType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }
}
