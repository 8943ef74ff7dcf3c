pub use wasm_bindgen::JsCast;
pub use web_sys::{
    Event, HtmlInputElement, HtmlSelectElement, InputEvent, KeyboardEvent, MouseEvent,
};
pub use yew::classes;
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, NodeRef, Properties, html};
pub use yew::{use_effect_with, use_node_ref, use_state};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DaisyColor {
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl DaisyColor {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DaisySize {
    Xs,
    Sm,
}

impl DaisySize {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[must_use]
pub fn attr_value(opt: &Option<AttrValue>) -> Option<AttrValue> {
    opt.clone()
}

/// Swallow a click so it does not reach an enclosing clickable row.
#[must_use]
pub fn stop_propagation() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| {
        #[cfg(target_arch = "wasm32")]
        {
            e.stop_propagation();
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = e;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{DaisyColor, DaisySize, attr_value, class_list};
    use yew::Classes;

    #[test]
    fn daisy_color_classes_include_prefix_and_suffix() {
        let colors = [
            DaisyColor::Neutral,
            DaisyColor::Info,
            DaisyColor::Success,
            DaisyColor::Warning,
            DaisyColor::Error,
        ];
        for color in colors {
            assert!(color.class("alert").starts_with("alert-"));
        }
        assert_eq!(DaisyColor::Error.class("badge"), "badge-error");
    }

    #[test]
    fn daisy_size_classes_include_prefix_and_suffix() {
        assert_eq!(DaisySize::Xs.class("loading"), "loading-xs");
        assert_eq!(DaisySize::Sm.class("btn"), "btn-sm");
    }

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("mx-1");
        let rendered = class_list(&["table", "table-zebra"], &extra).to_string();
        assert!(rendered.contains("table"));
        assert!(rendered.contains("table-zebra"));
        assert!(rendered.contains("mx-1"));
    }

    #[test]
    fn attr_value_clones_optional_attr() {
        let value = Some(yew::AttrValue::from("search"));
        assert_eq!(attr_value(&value).as_deref(), Some("search"));
    }
}
