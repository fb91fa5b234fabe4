//! Text inputs: the general `Input`, the stacked `CurrencyPairInput` and
//! `DualAmountInput`.

use super::icon::Icon;
use super::markup::Element;
use super::Component;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputKind {
    #[default]
    Basic,
    /// Trailing icon button; toggles password visibility.
    Icon,
    Dropdown,
    /// Leading asset badge with secondary text and a MAX button.
    Asset,
}

impl InputKind {
    pub fn modifier(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Icon => "icon",
            Self::Dropdown => "dropdown",
            Self::Asset => "asset",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HtmlInputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
}

impl HtmlInputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
        }
    }
}

/// Exactly one applies, in precedence order error > disabled > active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Default,
    Active,
    Disabled,
    Error,
}

impl InputState {
    fn resolve(error: bool, disabled: bool, focused: bool) -> Self {
        if error {
            InputState::Error
        } else if disabled {
            InputState::Disabled
        } else if focused {
            InputState::Active
        } else {
            InputState::Default
        }
    }
}

// ─── Input ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub kind: InputKind,
    pub value: String,
    pub placeholder: String,
    pub label: Option<String>,
    pub error_message: Option<String>,
    pub error: bool,
    disabled: bool,
    pub icon: Icon,
    pub asset_badge: String,
    pub secondary_text: String,
    pub show_max: bool,
    pub input_type: HtmlInputType,
    focused: bool,
    show_password: bool,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            kind: InputKind::Basic,
            value: String::new(),
            placeholder: "Input Here".to_string(),
            label: None,
            error_message: None,
            error: false,
            disabled: false,
            icon: Icon::Eye,
            asset_badge: "BTC".to_string(),
            secondary_text: "Secondary Title".to_string(),
            show_max: true,
            input_type: HtmlInputType::Text,
            focused: false,
            show_password: false,
        }
    }
}

impl Input {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// An asset-badge input as used in order forms: no secondary text.
    pub fn asset(badge: &str, value: impl Into<String>, placeholder: &str) -> Self {
        Self {
            kind: InputKind::Asset,
            value: value.into(),
            placeholder: placeholder.to_string(),
            asset_badge: badge.to_string(),
            secondary_text: String::new(),
            ..Self::default()
        }
    }

    pub fn dropdown(value: impl Into<String>, placeholder: &str) -> Self {
        Self {
            kind: InputKind::Dropdown,
            value: value.into(),
            placeholder: placeholder.to_string(),
            ..Self::default()
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disabling drops focus.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.focused = false;
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        if !self.disabled {
            self.focused = true;
        }
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn state(&self) -> InputState {
        InputState::resolve(self.error, self.disabled, self.focused)
    }

    /// Accepts typed text. Returns the value to report, `None` while disabled.
    pub fn change(&mut self, value: impl Into<String>) -> Option<String> {
        if self.disabled {
            return None;
        }
        self.value = value.into();
        Some(self.value.clone())
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn password_visible(&self) -> bool {
        self.show_password
    }

    /// Whether a MAX click should reach the parent.
    pub fn max_click(&self) -> bool {
        self.kind == InputKind::Asset && self.show_max && !self.disabled
    }

    /// The `type` attribute actually rendered.
    ///
    /// Only the icon kind masks a password; elsewhere passwords render as
    /// plain text.
    pub fn rendered_type(&self) -> HtmlInputType {
        match (self.kind, self.input_type) {
            (InputKind::Icon, HtmlInputType::Password) if !self.show_password => {
                HtmlInputType::Password
            }
            (_, HtmlInputType::Password) => HtmlInputType::Text,
            (_, other) => other,
        }
    }
}

impl Component for Input {
    fn render(&self) -> Element {
        let state_class = match self.state() {
            InputState::Error => "input--error",
            InputState::Disabled => "input--disabled",
            InputState::Active => "input--active",
            InputState::Default => "",
        };

        let field = Element::new("input")
            .class("input__field")
            .attr("type", self.rendered_type().as_str())
            .attr("value", &self.value)
            .attr("placeholder", &self.placeholder)
            .flag("disabled", self.disabled);

        let mut container = Element::new("div")
            .class("input")
            .class(format!("input--{}", self.kind.modifier()))
            .class(state_class);

        if self.kind == InputKind::Asset {
            container = container.child(
                Element::new("div")
                    .class("input__asset-badge")
                    .text(&self.asset_badge),
            );
        }
        container = container.child(field);

        match self.kind {
            InputKind::Icon => {
                container = container.child(
                    Element::new("button")
                        .class("input__icon-button")
                        .attr("type", "button")
                        .attr("tabindex", "-1")
                        .flag("disabled", self.disabled)
                        .child(self.icon.render().class("input__icon")),
                );
            }
            InputKind::Dropdown => {
                container = container.child(
                    Element::new("div")
                        .class("input__dropdown-icon")
                        .child(Icon::Dropdown.render().class("input__icon")),
                );
            }
            InputKind::Asset => {
                let secondary = (!self.secondary_text.is_empty()).then(|| {
                    Element::new("span")
                        .class("input__secondary-text")
                        .text(&self.secondary_text)
                });
                let max = self.show_max.then(|| max_button("input__max-button", self.disabled));
                container = container.child(
                    Element::new("div")
                        .class("input__asset-controls")
                        .child_opt(secondary)
                        .child_opt(max),
                );
            }
            InputKind::Basic => {}
        }

        Element::new("div")
            .class("input-wrapper")
            .child_opt(
                self.label
                    .as_ref()
                    .map(|l| Element::new("label").class("input__label").text(l)),
            )
            .child(container)
            .child_opt(
                self.error_message
                    .as_ref()
                    .map(|m| Element::new("div").class("input__error").text(m)),
            )
    }
}

fn max_button(class: &str, disabled: bool) -> Element {
    Element::new("button")
        .class(class)
        .attr("type", "button")
        .flag("disabled", disabled)
        .text("MAX")
}

// ─── CurrencyPairInput ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairField {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairFieldState {
    pub currency: String,
    pub value: String,
    pub show_max: bool,
    pub error: bool,
    focused: bool,
}

impl PairFieldState {
    pub fn new(currency: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            value: value.into(),
            show_max: true,
            error: false,
            focused: false,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

/// Two connected fields for a base/quote amount pair. The MAX buttons are
/// shown only when a balance is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyPairInput {
    pub top: PairFieldState,
    pub bottom: PairFieldState,
    disabled: bool,
    pub label: Option<String>,
    pub error_message: Option<String>,
}

impl CurrencyPairInput {
    pub fn new(top: PairFieldState, bottom: PairFieldState) -> Self {
        Self {
            top,
            bottom,
            disabled: false,
            label: None,
            error_message: None,
        }
    }

    pub fn field(&self, which: PairField) -> &PairFieldState {
        match which {
            PairField::Top => &self.top,
            PairField::Bottom => &self.bottom,
        }
    }

    fn field_mut(&mut self, which: PairField) -> &mut PairFieldState {
        match which {
            PairField::Top => &mut self.top,
            PairField::Bottom => &mut self.bottom,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.top.focused = false;
            self.bottom.focused = false;
        }
    }

    pub fn focus(&mut self, which: PairField) {
        if !self.disabled {
            self.field_mut(which).focused = true;
        }
    }

    pub fn blur(&mut self, which: PairField) {
        self.field_mut(which).focused = false;
    }

    pub fn change(&mut self, which: PairField, value: impl Into<String>) -> Option<String> {
        if self.disabled {
            return None;
        }
        let field = self.field_mut(which);
        field.value = value.into();
        Some(field.value.clone())
    }

    pub fn max_click(&self, which: PairField) -> bool {
        self.field(which).show_max && !self.disabled
    }

    /// Error wins over focus. Disabled is shown on the inputs, not the field.
    pub fn field_state(&self, which: PairField) -> InputState {
        let f = self.field(which);
        InputState::resolve(f.error, false, f.focused)
    }

    fn render_field(&self, which: PairField) -> Element {
        let f = self.field(which);
        let position = match which {
            PairField::Top => "currency-pair-input__field--top",
            PairField::Bottom => "currency-pair-input__field--bottom",
        };
        let state_class = match self.field_state(which) {
            InputState::Error => "currency-pair-input__field--error",
            InputState::Active => "currency-pair-input__field--active",
            InputState::Default | InputState::Disabled => "",
        };
        Element::new("div")
            .class("currency-pair-input__field")
            .class(position)
            .class(state_class)
            .child(
                Element::new("div")
                    .class("currency-pair-input__badge")
                    .text(&f.currency),
            )
            .child(
                Element::new("input")
                    .class("currency-pair-input__input")
                    .attr("type", "text")
                    .attr("value", &f.value)
                    .attr("placeholder", "0.0")
                    .flag("disabled", self.disabled),
            )
            .child_opt(f.show_max.then(|| {
                Element::new("div")
                    .class("currency-pair-input__controls")
                    .child(max_button("currency-pair-input__max-button", self.disabled))
            }))
    }
}

impl Component for CurrencyPairInput {
    fn render(&self) -> Element {
        Element::new("div")
            .class("currency-pair-input-wrapper")
            .child_opt(self.label.as_ref().map(|l| {
                Element::new("label")
                    .class("currency-pair-input__label")
                    .text(l)
            }))
            .child(
                Element::new("div")
                    .class("currency-pair-input")
                    .child(self.render_field(PairField::Top))
                    .child(self.render_field(PairField::Bottom)),
            )
            .child_opt(self.error_message.as_ref().map(|m| {
                Element::new("div")
                    .class("currency-pair-input__error")
                    .text(m)
            }))
    }
}

// ─── DualAmountInput ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountField {
    pub label: String,
    pub value: String,
    pub show_max: bool,
}

impl AmountField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            show_max: true,
        }
    }
}

/// Two stacked amount fields, e.g. BTC over USD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualAmountInput {
    pub top: AmountField,
    pub bottom: AmountField,
}

impl DualAmountInput {
    pub fn new(top: AmountField, bottom: AmountField) -> Self {
        Self { top, bottom }
    }

    pub fn change(&mut self, which: PairField, value: impl Into<String>) -> String {
        let field = match which {
            PairField::Top => &mut self.top,
            PairField::Bottom => &mut self.bottom,
        };
        field.value = value.into();
        field.value.clone()
    }
}

impl Component for DualAmountInput {
    fn render(&self) -> Element {
        let field = |f: &AmountField, position: &str| {
            Element::new("div")
                .class("dual-amount-input__field")
                .class(position)
                .child(Element::new("div").class("dual-amount-input__label").text(&f.label))
                .child(
                    Element::new("input")
                        .class("dual-amount-input__input")
                        .attr("type", "text")
                        .attr("value", &f.value)
                        .attr("placeholder", "0.0"),
                )
                .child_opt(f.show_max.then(|| max_button("dual-amount-input__max", false)))
        };
        Element::new("div")
            .class("dual-amount-input")
            .child(field(&self.top, "dual-amount-input__field--top"))
            .child(field(&self.bottom, "dual-amount-input__field--bottom"))
    }
}
