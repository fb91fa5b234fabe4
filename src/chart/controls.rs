//! Chart controls: the Candle/Area toggle and the period pills.

use crate::shared::{Period, SeriesKind};
use crate::ui::markup::Element;
use crate::ui::tabs::{labelled, PillTabs, TypeOption, TypeSelector};
use crate::ui::Component;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeToggle {
    pub active: SeriesKind,
}

impl TypeToggle {
    pub fn new(active: SeriesKind) -> Self {
        Self { active }
    }

    /// The kind chosen by clicking `option`.
    pub fn click(&self, option: TypeOption) -> SeriesKind {
        match option {
            TypeOption::First => SeriesKind::Candle,
            TypeOption::Second => SeriesKind::Area,
        }
    }

    fn selector(&self) -> TypeSelector {
        let active = match self.active {
            SeriesKind::Candle => TypeOption::First,
            SeriesKind::Area => TypeOption::Second,
        };
        TypeSelector::new(SeriesKind::Candle.label(), SeriesKind::Area.label(), active)
    }
}

impl Component for TypeToggle {
    fn render(&self) -> Element {
        self.selector().render()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodPills {
    pub active: Period,
}

impl PeriodPills {
    pub fn new(active: Period) -> Self {
        Self { active }
    }

    pub fn click_at(&self, index: usize) -> Option<Period> {
        Period::ALL.get(index).copied()
    }

    fn pills(&self) -> PillTabs<Period> {
        PillTabs::new(labelled(Period::ALL), self.active)
    }
}

impl Component for PeriodPills {
    fn render(&self) -> Element {
        self.pills().render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_toggle_highlights_active() {
        let el = TypeToggle::new(SeriesKind::Area).render();
        assert_eq!(
            el.find("type-selector__tab--active").unwrap().text_content(),
            "Area"
        );
        assert_eq!(TypeToggle::default().click(TypeOption::Second), SeriesKind::Area);
    }

    #[test]
    fn test_period_pills() {
        let pills = PeriodPills::new(Period::Day1);
        let el = pills.render();
        assert_eq!(el.find_all("pill-tabs__tab").len(), 6);
        assert_eq!(
            el.find("pill-tabs__tab--active").unwrap().text_content(),
            "1D"
        );
        assert_eq!(pills.click_at(5), Some(Period::All));
        assert_eq!(pills.click_at(6), None);
    }
}
