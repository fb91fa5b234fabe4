//! Crypto badges.

use super::markup::Element;
use super::Component;
use crate::shared::AssetSymbol;

pub const MIN_BADGE_SIZE: u32 = 24;
pub const MAX_BADGE_SIZE: u32 = 44;

/// Circular asset icon, 24–44 px.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoBadge {
    pub symbol: AssetSymbol,
    size: u32,
    pub clickable: bool,
}

impl CryptoBadge {
    pub fn new(symbol: AssetSymbol) -> Self {
        Self {
            symbol,
            size: MAX_BADGE_SIZE,
            clickable: false,
        }
    }

    /// Sets the size, clamped to the supported range.
    pub fn size(mut self, size: u32) -> Self {
        self.size = size.clamp(MIN_BADGE_SIZE, MAX_BADGE_SIZE);
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn px(&self) -> u32 {
        self.size
    }

    /// Artwork path. USDT shares the USD artwork.
    pub fn asset_path(&self) -> String {
        format!("badges/Badge{}.svg", self.symbol.badge().as_str())
    }
}

impl Component for CryptoBadge {
    fn render(&self) -> Element {
        let cursor = if self.clickable { "pointer" } else { "default" };
        Element::new("div")
            .class("crypto-badge")
            .attr(
                "style",
                format!(
                    "cursor: {cursor}; width: {size}px; height: {size}px",
                    size = self.size
                ),
            )
            .child(
                Element::new("img")
                    .attr("src", self.asset_path())
                    .attr("alt", format!("{} Badge", self.symbol)),
            )
    }
}

/// One badge, or two overlapping badges for a trading pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgePair {
    pub primary: AssetSymbol,
    pub secondary: Option<AssetSymbol>,
    pub size: u32,
}

impl BadgePair {
    pub fn single(primary: AssetSymbol) -> Self {
        Self {
            primary,
            secondary: None,
            size: MIN_BADGE_SIZE,
        }
    }

    pub fn pair(primary: AssetSymbol, secondary: AssetSymbol) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
            size: MIN_BADGE_SIZE,
        }
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn is_pair(&self) -> bool {
        self.secondary.is_some()
    }
}

impl Component for BadgePair {
    fn render(&self) -> Element {
        let badge = |s: AssetSymbol| CryptoBadge::new(s).size(self.size).render();
        match self.secondary {
            None => Element::new("div")
                .class("badge-pair badge-pair--single")
                .child(badge(self.primary)),
            Some(secondary) => Element::new("div")
                .class("badge-pair badge-pair--pair")
                .child(
                    Element::new("div")
                        .class("badge-pair__primary")
                        .child(badge(self.primary)),
                )
                .child(
                    Element::new("div")
                        .class("badge-pair__secondary")
                        .child(badge(secondary)),
                ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_clamped() {
        assert_eq!(CryptoBadge::new(AssetSymbol::Btc).size(10).px(), 24);
        assert_eq!(CryptoBadge::new(AssetSymbol::Btc).size(100).px(), 44);
        assert_eq!(CryptoBadge::new(AssetSymbol::Btc).size(32).px(), 32);
        assert_eq!(CryptoBadge::new(AssetSymbol::Btc).px(), 44);
    }

    #[test]
    fn test_usdt_renders_usd_artwork() {
        let el = CryptoBadge::new(AssetSymbol::Usdt).render();
        let img = el.child_elements().next().unwrap();
        assert_eq!(img.attr_value("src"), Some("badges/BadgeUSD.svg"));
        assert_eq!(img.attr_value("alt"), Some("USDT Badge"));
    }

    #[test]
    fn test_badge_pair_modes() {
        let single = BadgePair::single(AssetSymbol::Btc).render();
        assert!(single.has_class("badge-pair--single"));
        assert_eq!(single.find_all("crypto-badge").len(), 1);

        let pair = BadgePair::pair(AssetSymbol::Btc, AssetSymbol::Usdt).render();
        assert!(pair.has_class("badge-pair--pair"));
        assert_eq!(pair.find_all("crypto-badge").len(), 2);
        assert!(pair.find("badge-pair__secondary").is_some());
    }
}
