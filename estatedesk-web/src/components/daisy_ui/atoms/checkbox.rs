use crate::components::daisy_ui::foundation as f;
#[cfg(target_arch = "wasm32")]
use f::TargetCast;

#[derive(f::Properties, PartialEq, Clone)]
pub struct CheckboxProps {
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<f::AttrValue>,
    #[prop_or_default]
    pub checked: bool,
    /// Mixed state; only settable as a DOM property, so it is applied after mount.
    #[prop_or_default]
    pub indeterminate: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_toggle: f::Callback<bool>,
}

#[f::function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> f::Html {
    let input_ref = f::use_node_ref();
    {
        let input_ref = input_ref.clone();
        f::use_effect_with(props.indeterminate, move |indeterminate| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(input) = input_ref.cast::<f::HtmlInputElement>() {
                    input.set_indeterminate(*indeterminate);
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&input_ref, indeterminate);
            }
            || ()
        });
    }
    let on_change = {
        let on_toggle = props.on_toggle.clone();
        f::Callback::from(move |e: f::Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                    on_toggle.emit(input.checked());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &on_toggle);
            }
        })
    };
    let class = f::class_list(&["checkbox", "checkbox-sm"], &props.class);
    let aria_checked: f::AttrValue = if props.indeterminate {
        "mixed".into()
    } else if props.checked {
        "true".into()
    } else {
        "false".into()
    };
    f::html! {
        <label class="label cursor-pointer gap-2">
            <input
                ref={input_ref}
                class={class}
                type="checkbox"
                checked={props.checked}
                disabled={props.disabled}
                aria-label={f::attr_value(&props.aria_label)}
                aria-checked={aria_checked}
                onchange={on_change}
            />
            { props.label.as_ref().map(|l| f::html! { <span>{ l.clone() }</span> }).unwrap_or_default() }
        </label>
    }
}
