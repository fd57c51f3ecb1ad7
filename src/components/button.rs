//! Shared call-to-action button used across the landing page sections.

use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Clone, Copy, PartialEq)]
pub enum Variant {
    Primary,
    Outline,
}

impl Variant {
    fn class(self) -> &'static str {
        match self {
            Variant::Primary => "btn-primary",
            Variant::Outline => "btn-outline",
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum Glow {
    Cyan,
    Magenta,
}

impl Glow {
    fn class(self) -> &'static str {
        match self {
            Glow::Cyan => "glow-cyan",
            Glow::Magenta => "glow-magenta",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or(Variant::Primary)]
    pub variant: Variant,
    #[prop_or(Glow::Cyan)]
    pub glow: Glow,
    /// When set the button renders as a link opening in a new tab.
    #[prop_or_default]
    pub href: Option<String>,
    #[prop_or_else(Callback::noop)]
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!("glow-button", props.variant.class(), props.glow.class());

    match &props.href {
        Some(href) => html! {
            <a class={class} href={href.clone()} target="_blank" rel="noopener noreferrer">
                { for props.children.iter() }
            </a>
        },
        None => html! {
            <button class={class} onclick={props.onclick.clone()}>
                { for props.children.iter() }
            </button>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_distinct_classes() {
        assert_eq!(Variant::Primary.class(), "btn-primary");
        assert_eq!(Variant::Outline.class(), "btn-outline");
    }

    #[test]
    fn glow_colors_map_to_distinct_classes() {
        assert_eq!(Glow::Cyan.class(), "glow-cyan");
        assert_eq!(Glow::Magenta.class(), "glow-magenta");
    }
}
