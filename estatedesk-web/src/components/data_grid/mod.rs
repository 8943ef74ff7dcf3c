//! Reusable list table: two-level header, optional selection column, body
//! rows and a pagination footer.
//!
//! The grid owns only its selection. Paging, sorting and data fetching stay
//! with the page that renders it; the grid reports clicks through callbacks.

mod body;
mod header;
#[cfg(test)]
mod tests;

use crate::components::daisy_ui::foundation as f;
use crate::components::daisy_ui::organisms::Pagination;
use estatedesk_grid::{
    ColumnKey, ColumnSpec, DEFAULT_SIBLING_COUNT, RowId, RowRecord, SelectionMode, SelectionSet,
    SortState, column_count, row_ids,
};

pub type GridRow = RowRecord<f::Html>;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data";

#[derive(f::Properties, PartialEq, Clone)]
pub struct DataGridProps {
    pub headers: Vec<ColumnSpec>,
    pub rows: Vec<GridRow>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    #[prop_or(DEFAULT_SIBLING_COUNT)]
    pub sibling_count: u32,
    #[prop_or_default]
    pub with_checkbox: bool,
    #[prop_or_default]
    pub striped: bool,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub selection: SelectionMode,
    #[prop_or_default]
    pub sort: Option<SortState>,
    #[prop_or_default]
    pub empty_message: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change_page: f::Callback<u32>,
    #[prop_or_default]
    pub on_click_row: Option<f::Callback<RowId>>,
    #[prop_or_default]
    pub on_click_checkbox: f::Callback<Vec<RowId>>,
    #[prop_or_default]
    pub on_sort: f::Callback<ColumnKey>,
}

#[f::function_component(DataGrid)]
pub fn data_grid(props: &DataGridProps) -> f::Html {
    let selected = f::use_state(|| props.selection.initial_set());

    {
        let selected = selected.clone();
        let controlled = props.selection.controlled_ids().map(<[RowId]>::to_vec);
        f::use_effect_with(controlled, move |controlled| {
            if let Some(ids) = controlled {
                selected.set(SelectionSet::from_ids(ids.iter().cloned()));
            }
            || ()
        });
    }

    let ids = row_ids(&props.rows);

    let on_toggle_all = {
        let selected = selected.clone();
        let ids = ids.clone();
        let cb = props.on_click_checkbox.clone();
        f::Callback::from(move |_checked: bool| {
            let mut next = (*selected).clone();
            let emitted = next.toggle_all(&ids);
            selected.set(next);
            cb.emit(emitted);
        })
    };

    let on_toggle_row = {
        let selected = selected.clone();
        let cb = props.on_click_checkbox.clone();
        f::Callback::from(move |id: RowId| {
            let mut next = (*selected).clone();
            let emitted = next.toggle(&id);
            selected.set(next);
            cb.emit(emitted);
        })
    };

    let width = column_count(&props.headers) + usize::from(props.with_checkbox);
    let header_check = selected.header_state(&ids);

    let mut table_class = f::classes!("table", "table-sm", "w-full");
    if props.striped {
        table_class.push("table-zebra");
    }
    let wrapper_class = f::class_list(&["data-grid", "flex", "flex-col"], &props.class);

    let head = header::render_header(&header::HeaderView {
        columns: &props.headers,
        with_checkbox: props.with_checkbox,
        header_check,
        sort: props.sort.as_ref(),
        on_toggle_all,
        on_sort: &props.on_sort,
    });

    let rows = body::render_body(&body::BodyView {
        columns: &props.headers,
        rows: &props.rows,
        width,
        loading: props.loading,
        with_checkbox: props.with_checkbox,
        selected: &selected,
        empty_message: props
            .empty_message
            .clone()
            .unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.into()),
        on_toggle_row,
        on_click_row: props.on_click_row.as_ref(),
    });

    f::html! {
        <div class={wrapper_class}>
            <div class="overflow-x-auto">
                <table class={table_class} role="table" aria-busy={props.loading.then_some("true")}>
                    { head }
                    { rows }
                </table>
            </div>
            <Pagination
                total={props.total}
                page={props.page}
                limit={props.limit}
                sibling_count={props.sibling_count}
                on_change={props.on_change_page.clone()}
            />
        </div>
    }
}
