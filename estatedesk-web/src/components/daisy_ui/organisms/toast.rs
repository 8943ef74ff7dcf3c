use crate::components::daisy_ui::foundation as f;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// Milliseconds a toast stays up before dismissing itself.
    #[must_use]
    pub const fn lifetime_ms(self) -> i32 {
        match self {
            Self::Info | Self::Success => 4_000,
            Self::Error => 8_000,
        }
    }

    const fn color(self) -> f::DaisyColor {
        match self {
            Self::Info => f::DaisyColor::Info,
            Self::Success => f::DaisyColor::Success,
            Self::Error => f::DaisyColor::Error,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ToastItem {
    pub id: u64,
    pub kind: ToastKind,
    pub message: f::AttrValue,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u64),
}

/// Visible notifications, oldest first.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<ToastItem>,
}

impl ToastQueue {
    pub const MAX_VISIBLE: usize = 4;

    #[must_use]
    pub fn items(&self) -> &[ToastItem] {
        &self.items
    }

    /// Append a toast, dropping the oldest beyond [`Self::MAX_VISIBLE`].
    pub fn push(&mut self, kind: ToastKind, message: impl Into<f::AttrValue>) -> u64 {
        self.next_id += 1;
        self.items.push(ToastItem {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        if self.items.len() > Self::MAX_VISIBLE {
            let excess = self.items.len() - Self::MAX_VISIBLE;
            self.items.drain(..excess);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.push(kind, message);
            }
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        Rc::new(next)
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub toasts: Vec<ToastItem>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_dismiss: Option<f::Callback<u64>>,
}

#[derive(f::Properties, PartialEq, Clone)]
struct ToastEntryProps {
    toast: ToastItem,
    on_dismiss: Option<f::Callback<u64>>,
}

/// One alert; dismisses itself after [`ToastKind::lifetime_ms`] when a
/// dismiss callback is wired.
#[f::function_component(ToastEntry)]
fn toast_entry(props: &ToastEntryProps) -> f::Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        let lifetime = props.toast.kind.lifetime_ms();
        f::use_effect_with(id, move |_| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(cb) = on_dismiss {
                    wasm_bindgen_futures::spawn_local(async move {
                        if let Err(err) = crate::dom::sleep_ms(lifetime).await {
                            log::warn!("toast timer failed: {}", crate::dom::js_error_message(&err));
                        }
                        cb.emit(id);
                    });
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (on_dismiss, lifetime);
            }
            || ()
        });
    }
    let dismiss_btn = props.on_dismiss.as_ref().map(|cb| {
        let id = props.toast.id;
        let cb = cb.clone();
        let on_click = f::Callback::from(move |_: f::MouseEvent| cb.emit(id));
        f::html! { <button type="button" class="btn btn-ghost btn-xs" aria-label="Dismiss" onclick={on_click}>{"✕"}</button> }
    }).unwrap_or_default();
    let alert_class = f::classes!("alert", props.toast.kind.color().class("alert"), "flex", "items-center", "gap-2");
    f::html! {
        <div class={alert_class} data-toast-id={props.toast.id.to_string()}>
            <span>{ props.toast.message.clone() }</span>
            { dismiss_btn }
        </div>
    }
}

#[f::function_component(Toast)]
pub fn toast(props: &ToastProps) -> f::Html {
    if props.toasts.is_empty() {
        return f::Html::default();
    }
    let class = f::class_list(&["toast", "toast-end", "toast-top"], &props.class);
    f::html! {
        <div class={class} role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| f::html! {
                <ToastEntry
                    key={toast.id}
                    toast={toast.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn queue_caps_visible_toasts() {
        let mut queue = ToastQueue::default();
        for n in 0..6 {
            queue.push(ToastKind::Info, format!("note {n}"));
        }
        assert_eq!(queue.items().len(), ToastQueue::MAX_VISIBLE);
        assert_eq!(queue.items()[0].message.as_str(), "note 2");
    }

    #[test]
    fn errors_linger_longer_than_confirmations() {
        assert!(ToastKind::Error.lifetime_ms() > ToastKind::Success.lifetime_ms());
        assert!(ToastKind::Info.lifetime_ms() > 0);
    }

    #[test]
    fn dismissing_twice_is_harmless() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Saved");
        queue.push(ToastKind::Info, "Synced");
        queue.dismiss(first);
        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].message.as_str(), "Synced");
    }

    #[test]
    fn reducer_pushes_and_dismisses() {
        let queue = Rc::new(ToastQueue::default());
        let queue = queue.reduce(ToastAction::Push(ToastKind::Error, "Failed".into()));
        let id = queue.items()[0].id;
        let queue = queue.reduce(ToastAction::Dismiss(id));
        assert!(queue.items().is_empty());
    }

    #[test]
    fn renders_alert_per_kind() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Success, "Tenant deleted");
        queue.push(ToastKind::Error, "Network down");
        let props = ToastProps {
            toasts: queue.items().to_vec(),
            class: f::Classes::new(),
            on_dismiss: Some(f::Callback::noop()),
        };
        let html = block_on(LocalServerRenderer::<Toast>::with_props(props).render());
        assert!(html.contains("alert-success"));
        assert!(html.contains("alert-error"));
        assert!(html.contains("Dismiss"));
    }
}
