use crate::components::daisy_ui::foundation as f;

pub const DEFAULT_LOADING_LABEL: &str = "Loading…";

#[derive(f::Properties, PartialEq, Eq, Clone)]
pub struct LoadingProps {
    #[prop_or(f::AttrValue::Static(DEFAULT_LOADING_LABEL))]
    pub label: f::AttrValue,
    /// Spinner only; the label stays available to screen readers.
    #[prop_or_default]
    pub compact: bool,
    #[prop_or_default]
    pub size: Option<f::DaisySize>,
    #[prop_or_default]
    pub class: f::Classes,
}

/// Busy indicator for grid placeholder rows and in-flight buttons.
#[f::function_component(Loading)]
pub fn loading(props: &LoadingProps) -> f::Html {
    let mut spinner = f::classes!("loading", "loading-spinner");
    if let Some(size) = props.size {
        spinner.push(size.class("loading"));
    }
    let label_class = if props.compact { "sr-only" } else { "opacity-70" };
    let wrapper = f::class_list(&["inline-flex", "items-center", "gap-2"], &props.class);
    f::html! {
        <span class={wrapper} role="status" aria-live="polite">
            <span class={spinner} aria-hidden="true"></span>
            <span class={label_class}>{ props.label.clone() }</span>
        </span>
    }
}
