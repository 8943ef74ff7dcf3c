use crate::components::daisy_ui::atoms::Button;
use crate::components::daisy_ui::foundation as f;
use crate::components::daisy_ui::organisms::Modal;

#[derive(f::Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    /// Singular noun shown in the prompt, e.g. "tenant".
    pub subject: f::AttrValue,
    pub count: usize,
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: f::Callback<()>,
    pub on_cancel: f::Callback<()>,
}

#[must_use]
pub fn prompt(subject: &str, count: usize) -> String {
    if count == 1 {
        format!("Delete this {subject}? This cannot be undone.")
    } else {
        format!("Delete {count} {subject}s? This cannot be undone.")
    }
}

#[f::function_component(ConfirmDelete)]
pub fn confirm_delete(props: &Props) -> f::Html {
    let confirm = {
        let cb = props.on_confirm.clone();
        f::Callback::from(move |_: f::MouseEvent| cb.emit(()))
    };
    let cancel = {
        let cb = props.on_cancel.clone();
        f::Callback::from(move |_: f::MouseEvent| cb.emit(()))
    };
    let actions = f::html! {
        <>
            <Button label={f::AttrValue::from("Cancel")} disabled={props.busy} onclick={cancel} />
            <Button
                label={f::AttrValue::from(if props.busy { "Deleting…" } else { "Delete" })}
                variant={f::DaisyColor::Error}
                busy={props.busy}
                onclick={confirm}
            />
        </>
    };
    f::html! {
        <Modal
            open={props.open}
            title={f::AttrValue::from("Confirm delete")}
            description={f::AttrValue::from(prompt(&props.subject, props.count))}
            actions={actions}
            dismissible={!props.busy}
            on_close={props.on_cancel.clone()}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(open: bool, count: usize) -> Props {
        Props {
            open,
            subject: "tenant".into(),
            count,
            busy: false,
            on_confirm: f::Callback::noop(),
            on_cancel: f::Callback::noop(),
        }
    }

    #[test]
    fn prompt_pluralizes() {
        assert_eq!(prompt("tenant", 1), "Delete this tenant? This cannot be undone.");
        assert_eq!(prompt("vendor", 3), "Delete 3 vendors? This cannot be undone.");
    }

    #[test]
    fn renders_only_when_open() {
        let closed = block_on(LocalServerRenderer::<ConfirmDelete>::with_props(props(false, 2)).render());
        assert!(!closed.contains("modal-open"));
        let open = block_on(LocalServerRenderer::<ConfirmDelete>::with_props(props(true, 2)).render());
        assert!(open.contains("modal-open"));
        assert!(open.contains("Delete 2 tenants?"));
        assert!(open.contains("btn-error"));
        assert!(!open.contains("aria-busy"));
    }

    #[test]
    fn busy_dialog_locks_until_delete_finishes() {
        let mut busy = props(true, 1);
        busy.busy = true;
        let html = block_on(LocalServerRenderer::<ConfirmDelete>::with_props(busy).render());
        assert!(html.contains("Deleting…"));
        assert!(html.contains("aria-busy=\"true\""));
        assert!(html.contains("loading-spinner"));
        assert!(html.matches("disabled").count() >= 3);
    }
}
