use super::Loading;
use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ButtonProps {
    pub label: f::AttrValue,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub size: Option<f::DaisySize>,
    #[prop_or_default]
    pub outline: bool,
    #[prop_or_default]
    pub disabled: bool,
    /// Request in flight: shows a spinner and blocks further clicks.
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub onclick: f::Callback<f::MouseEvent>,
}

#[f::function_component(Button)]
pub fn button(props: &ButtonProps) -> f::Html {
    let mut classes = f::class_list(&["btn"], &props.class);
    if let Some(variant) = props.variant {
        classes.push(variant.class("btn"));
    }
    if let Some(size) = props.size {
        classes.push(size.class("btn"));
    }
    if props.outline {
        classes.push("btn-outline");
    }
    let spinner = if props.busy {
        f::html! { <Loading label={props.label.clone()} compact=true size={f::DaisySize::Xs} /> }
    } else {
        f::Html::default()
    };
    f::html! {
        <button
            type="button"
            class={classes}
            disabled={props.disabled || props.busy}
            aria-busy={props.busy.then_some("true")}
            onclick={props.onclick.clone()}
        >
            { spinner }
            <span aria-hidden={props.busy.then_some("true")}>{ props.label.clone() }</span>
        </button>
    }
}
