use crate::components::daisy_ui::foundation as f;

/// Width of the dialog box.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ModalWidth {
    /// Short prompts such as delete confirmations.
    #[default]
    Compact,
    /// Record details with several label/value rows.
    Wide,
}

impl ModalWidth {
    const fn class(self) -> &'static str {
        match self {
            Self::Compact => "max-w-sm",
            Self::Wide => "max-w-2xl",
        }
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct ModalProps {
    pub open: bool,
    pub title: f::AttrValue,
    #[prop_or_default]
    pub description: Option<f::AttrValue>,
    #[prop_or_default]
    pub actions: Option<f::Html>,
    #[prop_or_default]
    pub width: ModalWidth,
    /// When false the close button, backdrop and Escape are inert, e.g. while
    /// a delete is in flight.
    #[prop_or(true)]
    pub dismissible: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_close: f::Callback<()>,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Modal)]
pub fn modal(props: &ModalProps) -> f::Html {
    if !props.open {
        return f::Html::default();
    }
    let class = f::class_list(&["modal", "modal-open"], &props.class);
    let dismissible = props.dismissible;
    let close = {
        let cb = props.on_close.clone();
        f::Callback::from(move |_: f::MouseEvent| {
            if dismissible {
                cb.emit(());
            }
        })
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        f::Callback::from(move |e: f::KeyboardEvent| {
            if dismissible && e.key() == "Escape" {
                cb.emit(());
            }
        })
    };
    let box_class = f::classes!("modal-box", props.width.class());
    f::html! {
        <div
            class={class}
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-title"
            tabindex="-1"
            onkeydown={on_keydown}
        >
            <div class={box_class}>
                <header class="flex justify-between items-start gap-2">
                    <h3 id="modal-title" class="font-bold text-lg">{ props.title.clone() }</h3>
                    <button
                        type="button"
                        class="btn btn-ghost btn-sm btn-circle"
                        aria-label="Close"
                        disabled={!dismissible}
                        onclick={close.clone()}
                    >{"✕"}</button>
                </header>
                { props.description.as_ref().map(|d| f::html! {
                    <p class="py-2 text-base-content/70">{ d.clone() }</p>
                }).unwrap_or_default() }
                { if props.children.is_empty() {
                    f::Html::default()
                } else {
                    f::html! { <div class="py-2">{ for props.children.iter() }</div> }
                } }
                { props.actions.clone().map(|actions| f::html! {
                    <div class="modal-action">{ actions }</div>
                }).unwrap_or_default() }
            </div>
            <div class="modal-backdrop" onclick={close}></div>
        </div>
    }
}
