use crate::components::daisy_ui::atoms::Checkbox;
use crate::components::daisy_ui::foundation as f;
use estatedesk_grid::{ColumnKey, ColumnSpec, HeaderCheck, HeaderLayout, SortDirection, SortState};

pub(super) struct HeaderView<'a> {
    pub columns: &'a [ColumnSpec],
    pub with_checkbox: bool,
    pub header_check: HeaderCheck,
    pub sort: Option<&'a SortState>,
    pub on_toggle_all: f::Callback<bool>,
    pub on_sort: &'a f::Callback<ColumnKey>,
}

pub(super) const fn sort_icon(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "▲",
        Some(SortDirection::Descending) => "▼",
        None => "↕",
    }
}

const fn sort_marker(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    }
}

fn sort_button(
    column: &ColumnSpec,
    sort: Option<&SortState>,
    on_sort: &f::Callback<ColumnKey>,
) -> f::Html {
    if !column.sortable {
        return f::Html::default();
    }
    let direction = SortState::direction_for(sort, &column.key);
    let onclick = {
        let key = column.key.clone();
        let cb = on_sort.clone();
        f::Callback::from(move |_: f::MouseEvent| cb.emit(key.clone()))
    };
    f::html! {
        <button
            type="button"
            class="btn btn-ghost btn-xs sort-toggle"
            aria-label={format!("Sort by {}", column.label)}
            data-sort={sort_marker(direction)}
            onclick={onclick}
        >{ sort_icon(direction) }</button>
    }
}

fn header_label(column: &ColumnSpec, view: &HeaderView<'_>) -> f::Html {
    f::html! {
        <span class="inline-flex items-center gap-1">
            { column.label.clone() }
            { sort_button(column, view.sort, view.on_sort) }
        </span>
    }
}

fn select_all_cell(view: &HeaderView<'_>, row_span: u32) -> f::Html {
    if !view.with_checkbox {
        return f::Html::default();
    }
    let checked = view.header_check == HeaderCheck::All;
    let indeterminate = view.header_check == HeaderCheck::Indeterminate;
    f::html! {
        <th class="w-8 grid-select-all" rowspan={row_span.to_string()}>
            <Checkbox
                aria_label={f::AttrValue::from("Select all rows")}
                checked={checked}
                indeterminate={indeterminate}
                disabled={view.header_check == HeaderCheck::Empty}
                on_toggle={view.on_toggle_all.clone()}
            />
        </th>
    }
}

pub(super) fn render_header(view: &HeaderView<'_>) -> f::Html {
    let layout = HeaderLayout::from_columns(view.columns);
    let header_rows: u32 = if layout.has_subheader() { 2 } else { 1 };

    let top = layout.top.iter().map(|cell| {
        let column = cell.column;
        let label = if column.is_group() {
            f::html! { { column.label.clone() } }
        } else {
            header_label(column, view)
        };
        let class = if column.is_group() { "text-center" } else { "" };
        f::html! {
            <th
                scope={if column.is_group() { "colgroup" } else { "col" }}
                class={class}
                colspan={(cell.col_span > 1).then(|| cell.col_span.to_string())}
                rowspan={(cell.row_span > 1).then(|| cell.row_span.to_string())}
                style={column.width.as_ref().map(|w| format!("width: {w}"))}
            >{ label }</th>
        }
    });

    let sub_row = if layout.has_subheader() {
        f::html! {
            <tr class="grid-subheader">
                { for layout.sub.iter().map(|column| f::html! {
                    <th
                        scope="col"
                        style={column.width.as_ref().map(|w| format!("width: {w}"))}
                    >{ header_label(column, view) }</th>
                }) }
            </tr>
        }
    } else {
        f::Html::default()
    };

    f::html! {
        <thead>
            <tr>
                { select_all_cell(view, header_rows) }
                { for top }
            </tr>
            { sub_row }
        </thead>
    }
}
