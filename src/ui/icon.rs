//! Icon glyph references.

use super::markup::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Eye,
    Dropdown,
    Buy,
    Sell,
    Send,
    Receive,
    Convert,
    Close,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Eye => "eye",
            Icon::Dropdown => "dropdown",
            Icon::Buy => "buy",
            Icon::Sell => "sell",
            Icon::Send => "send",
            Icon::Receive => "receive",
            Icon::Convert => "convert",
            Icon::Close => "close",
        }
    }

    pub fn render(&self) -> Element {
        Element::new("span")
            .class("icon")
            .class(format!("icon--{}", self.name()))
            .attr("aria-hidden", "true")
    }
}
