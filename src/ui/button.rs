//! Buttons.

use super::icon::Icon;
use super::markup::Element;
use super::Component;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Brand,
    Buy,
    Sell,
    Negative,
    Basic,
    Transparent,
    Line,
    BrandOpposite,
}

impl ButtonVariant {
    pub fn modifier(&self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Negative => "negative",
            Self::Basic => "basic",
            Self::Transparent => "transparent",
            Self::Line => "line",
            Self::BrandOpposite => "brandOpposite",
        }
    }
}

/// Big is 44 px tall, small is 36 px.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    #[default]
    Big,
    Small,
}

impl ButtonSize {
    pub fn modifier(&self) -> &'static str {
        match self {
            Self::Big => "big",
            Self::Small => "small",
        }
    }

    pub fn height_px(&self) -> u32 {
        match self {
            Self::Big => 44,
            Self::Small => 36,
        }
    }
}

/// Visual state. `Active` takes precedence over `Disabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Active,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub icon: Option<Icon>,
    pub show_icon: bool,
    pub disabled: bool,
    pub active: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            icon: None,
            show_icon: true,
            disabled: false,
            active: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn state(&self) -> ButtonState {
        if self.active {
            ButtonState::Active
        } else if self.disabled {
            ButtonState::Disabled
        } else {
            ButtonState::Normal
        }
    }

    /// True when a click should reach the parent.
    pub fn click(&self) -> bool {
        !self.disabled
    }
}

impl Component for Button {
    fn render(&self) -> Element {
        let state_class = match self.state() {
            ButtonState::Active => "button--active",
            ButtonState::Disabled => "button--disabled",
            ButtonState::Normal => "",
        };
        let icon = self
            .icon
            .filter(|_| self.show_icon)
            .map(|i| i.render().class("button__icon"));

        Element::new("button")
            .class("button")
            .class(format!("button--{}", self.variant.modifier()))
            .class(format!("button--{}", self.size.modifier()))
            .class(state_class)
            .attr("type", "button")
            .flag("disabled", self.disabled)
            .child(
                Element::new("div")
                    .class("button__content")
                    .child_opt(icon)
                    .child(Element::new("span").class("button__text").text(&self.label)),
            )
    }
}
