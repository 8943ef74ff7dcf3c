//! Reference list page: tenants with search, status filter, sortable
//! columns, detail modal and bulk delete.

mod model;
#[cfg(test)]
mod tests;

pub use model::{RESOURCE, Tenant, TenantStatus, status_badge, tenant_columns, tenant_row};

use crate::api::ApiClient;
use crate::components::daisy_ui::atoms::{Button, Input};
use crate::components::daisy_ui::foundation as f;
use crate::components::daisy_ui::organisms::{Modal, ModalWidth, Toast, ToastAction, ToastKind};
use crate::components::{ConfirmDelete, DataGrid, GridRow};
use crate::pages::list::use_list_page;
use crate::session::SessionHandle;
use estatedesk_grid::{Paged, RowId, SelectionMode, format_amount, format_date};
use f::TargetCast;

pub const DELETE_GRANT: &str = "tenant.delete";

#[derive(f::Properties, PartialEq, Clone)]
pub struct Props {
    pub session: SessionHandle,
    #[prop_or_default]
    pub api: ApiClient,
    /// Pre-fetched first page; skips the initial request.
    #[prop_or_default]
    pub initial: Option<Paged<Tenant>>,
}

fn detail_row(label: &'static str, value: String) -> f::Html {
    f::html! {
        <div class="flex justify-between gap-4 py-1">
            <dt class="opacity-70">{ label }</dt>
            <dd class="font-medium">{ value }</dd>
        </div>
    }
}

#[must_use]
pub fn tenant_detail(tenant: &Tenant) -> f::Html {
    let dash = || "—".to_string();
    f::html! {
        <dl class="tenant-detail">
            { detail_row("Unit", tenant.unit.clone()) }
            { detail_row("Phone", tenant.phone.clone().unwrap_or_else(dash)) }
            { detail_row("Email", tenant.email.clone().unwrap_or_else(dash)) }
            { detail_row("Status", tenant.status.label().to_string()) }
            { detail_row("Move-in", tenant.move_in.as_deref().map_or_else(dash, format_date)) }
            { detail_row("Balance", format_amount(tenant.balance_cents)) }
        </dl>
    }
}

fn status_filter(on_change: f::Callback<String>) -> f::Html {
    let onchange = f::Callback::from(move |e: f::Event| {
        if let Some(select) = e.target_dyn_into::<f::HtmlSelectElement>() {
            on_change.emit(select.value());
        }
    });
    f::html! {
        <select class="select select-bordered select-sm" aria-label="Filter by status" onchange={onchange}>
            <option value="">{"All statuses"}</option>
            { for TenantStatus::ALL.iter().map(|s| f::html! {
                <option value={s.as_str()}>{ s.label() }</option>
            }) }
        </select>
    }
}

#[f::function_component(TenantsPage)]
pub fn tenants_page(props: &Props) -> f::Html {
    let list = use_list_page::<Tenant>(
        RESOURCE,
        props.session.clone(),
        props.api.clone(),
        props.initial.clone(),
    );
    let selected = f::use_state(Vec::<RowId>::new);
    let confirm_open = f::use_state(|| false);
    let deleting = f::use_state(|| false);
    let detail = f::use_state(|| None::<Tenant>);

    // Selection covers the rows on screen only; any query change clears it.
    {
        let selected = selected.clone();
        f::use_effect_with((*list.query).clone(), move |_| {
            if !selected.is_empty() {
                selected.set(Vec::new());
            }
            || ()
        });
    }

    let can_delete = props.session.permissions().can(DELETE_GRANT);
    let rows: Vec<GridRow> = list.data.data.iter().map(tenant_row).collect();

    let on_select = {
        let selected = selected.clone();
        f::Callback::from(move |ids: Vec<RowId>| selected.set(ids))
    };

    let on_click_row = {
        let detail = detail.clone();
        let data = list.data.clone();
        f::Callback::from(move |id: RowId| {
            let found = data.data.iter().find(|t| RowId::from(t.id) == id).cloned();
            detail.set(found);
        })
    };
    let close_detail = {
        let detail = detail.clone();
        f::Callback::from(move |()| detail.set(None))
    };

    let open_confirm = {
        let confirm_open = confirm_open.clone();
        f::Callback::from(move |_: f::MouseEvent| confirm_open.set(true))
    };
    let cancel_confirm = {
        let confirm_open = confirm_open.clone();
        f::Callback::from(move |()| confirm_open.set(false))
    };
    let on_confirm = {
        let list = list.clone();
        let selected = selected.clone();
        let deleting = deleting.clone();
        let confirm_open = confirm_open.clone();
        f::Callback::from(move |()| {
            let ids = (*selected).clone();
            let requested = ids.len();
            deleting.set(true);
            let on_done = {
                let list = list.clone();
                let selected = selected.clone();
                let deleting = deleting.clone();
                let confirm_open = confirm_open.clone();
                f::Callback::from(move |failed: Vec<RowId>| {
                    deleting.set(false);
                    confirm_open.set(false);
                    if failed.is_empty() {
                        list.notify(ToastKind::Success, format!("Deleted {requested} tenant(s)"));
                    } else {
                        list.notify(
                            ToastKind::Error,
                            format!("Could not delete {} of {requested} tenant(s)", failed.len()),
                        );
                    }
                    selected.set(failed);
                })
            };
            list.delete_many(ids, on_done);
        })
    };

    let on_dismiss = {
        let toasts = list.toasts.clone();
        f::Callback::from(move |id: u64| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let delete_button = if can_delete {
        f::html! {
            <Button
                label={f::AttrValue::from("Delete selected")}
                variant={f::DaisyColor::Error}
                outline=true
                size={f::DaisySize::Sm}
                disabled={selected.is_empty()}
                onclick={open_confirm}
            />
        }
    } else {
        f::Html::default()
    };

    let detail_modal = (*detail).as_ref().map_or_else(f::Html::default, |tenant| {
        f::html! {
            <Modal
                open=true
                title={f::AttrValue::from(tenant.name.clone())}
                width={ModalWidth::Wide}
                on_close={close_detail}
            >
                { tenant_detail(tenant) }
            </Modal>
        }
    });

    let query = &*list.query;
    f::html! {
        <section class="tenants-page flex flex-col gap-4">
            <header class="flex flex-wrap items-center justify-between gap-2">
                <h1 class="text-2xl font-bold">{"Tenants"}</h1>
                <div class="flex flex-wrap items-center gap-2">
                    <Input
                        value={f::AttrValue::from((*list.search_text).clone())}
                        placeholder={f::AttrValue::from("Search tenants")}
                        aria_label={f::AttrValue::from("Search tenants")}
                        input_type={f::AttrValue::from("search")}
                        oninput={list.on_search()}
                    />
                    { status_filter(list.on_filter("status")) }
                    { delete_button }
                </div>
            </header>
            <DataGrid
                headers={tenant_columns()}
                rows={rows}
                total={list.data.total}
                page={query.page}
                limit={query.limit.get()}
                with_checkbox={can_delete}
                striped=true
                loading={*list.loading}
                selection={SelectionMode::ExternallyControlled((*selected).clone())}
                sort={query.sort.clone()}
                empty_message={f::AttrValue::from("No tenants found")}
                on_change_page={list.on_change_page()}
                on_click_row={Some(on_click_row)}
                on_click_checkbox={on_select}
                on_sort={list.on_sort()}
            />
            <ConfirmDelete
                open={*confirm_open}
                subject={f::AttrValue::from("tenant")}
                count={selected.len()}
                busy={*deleting}
                on_confirm={on_confirm}
                on_cancel={cancel_confirm}
            />
            { detail_modal }
            <Toast toasts={list.toasts.items().to_vec()} on_dismiss={Some(on_dismiss)} />
        </section>
    }
}
