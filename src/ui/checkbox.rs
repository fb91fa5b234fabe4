//! Checkbox.

use super::markup::Element;
use super::Component;

/// `Selected` shows a brand check, `Fixed` a secondary check that cannot be
/// toggled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CheckboxState {
    #[default]
    Default,
    Selected,
    Fixed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checkbox {
    pub state: CheckboxState,
    pub checked: bool,
    pub disabled: bool,
}

impl Checkbox {
    pub fn new(state: CheckboxState, checked: bool) -> Self {
        Self {
            state,
            checked,
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Any non-default state renders checked.
    pub fn is_checked(&self) -> bool {
        self.state != CheckboxState::Default || self.checked
    }

    pub fn is_interactive(&self) -> bool {
        !self.disabled && self.state != CheckboxState::Fixed
    }

    /// The value to report on click, `None` when the click is ignored.
    pub fn click(&self) -> Option<bool> {
        self.is_interactive().then_some(!self.checked)
    }
}

impl Component for Checkbox {
    fn render(&self) -> Element {
        let checked = self.is_checked();
        let selected = self.state == CheckboxState::Selected
            || (checked && self.state == CheckboxState::Default);
        let tab_index = if self.is_interactive() { "0" } else { "-1" };

        Element::new("div")
            .class("checkbox")
            .class_if(checked, "checkbox--checked")
            .class_if(selected, "checkbox--selected")
            .class_if(self.state == CheckboxState::Fixed, "checkbox--fixed")
            .class_if(self.disabled, "checkbox--disabled")
            .attr("role", "checkbox")
            .attr("aria-checked", checked.to_string())
            .attr("aria-disabled", (!self.is_interactive()).to_string())
            .attr("tabindex", tab_index)
            .child(
                Element::new("div")
                    .class("checkbox__box")
                    .child_opt(checked.then(|| Element::new("span").class("checkbox__icon"))),
            )
    }
}
