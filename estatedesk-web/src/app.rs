use crate::api::ApiClient;
use crate::components::daisy_ui::atoms::Button;
use crate::pages::tenants::{Tenant, TenantsPage};
use crate::session::SessionHandle;
use estatedesk_grid::{Paged, SessionSnapshot, Theme};
use std::rc::Rc;
use yew::prelude::*;

/// Set `data-theme` on `<html>` so daisyUI picks the palette.
pub fn apply_theme(theme: Theme) {
    if !cfg!(target_arch = "wasm32") {
        return;
    }
    if let Some(root) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        && let Err(err) = root.set_attribute("data-theme", theme.as_str())
    {
        log::warn!(
            "could not apply theme: {}",
            crate::dom::js_error_message(&err)
        );
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ShellProps {
    pub session: SessionHandle,
    #[prop_or_default]
    pub api: ApiClient,
    #[prop_or_default]
    pub initial_tenants: Option<Paged<Tenant>>,
}

#[function_component(AppShell)]
pub fn app_shell(props: &ShellProps) -> Html {
    let theme = use_state(|| props.session.theme());
    let user_name = use_state(|| props.session.user().map(|u| u.name));

    {
        let theme = theme.clone();
        let user_name = user_name.clone();
        use_effect_with(props.session.clone(), move |session| {
            let subscription = session.on_change(Rc::new(move |snapshot: &SessionSnapshot| {
                apply_theme(snapshot.theme);
                theme.set(snapshot.theme);
                user_name.set(snapshot.user.as_ref().map(|u| u.name.clone()));
            }));
            move || drop(subscription)
        });
    }

    let on_toggle_theme = {
        let session = props.session.clone();
        let current = *theme;
        Callback::from(move |_: MouseEvent| session.set_theme(current.toggled()))
    };
    let toggle_label = match *theme {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    html! {
        <div class="min-h-screen bg-base-200" data-theme={theme.as_str()}>
            <nav class="navbar bg-base-100 shadow-sm">
                <div class="flex-1">
                    <span class="text-xl font-bold px-2">{"EstateDesk"}</span>
                </div>
                <div class="flex-none flex items-center gap-2">
                    { (*user_name).clone().map(|name| html! {
                        <span class="text-sm opacity-70 session-user">{ name }</span>
                    }).unwrap_or_default() }
                    <Button
                        class={classes!("btn-ghost", "theme-toggle")}
                        label={AttrValue::from(toggle_label)}
                        onclick={on_toggle_theme}
                    />
                </div>
            </nav>
            <main class="container mx-auto p-4">
                <TenantsPage
                    session={props.session.clone()}
                    api={props.api.clone()}
                    initial={props.initial_tenants.clone()}
                />
            </main>
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_memo((), |()| SessionHandle::browser());
    html! { <AppShell session={(*session).clone()} /> }
}
