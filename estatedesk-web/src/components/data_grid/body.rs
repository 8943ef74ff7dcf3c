use super::GridRow;
use crate::components::daisy_ui::atoms::{Checkbox, Loading};
use crate::components::daisy_ui::foundation as f;
use estatedesk_grid::{CellValue, ColumnSpec, RowId, SelectionSet, leaf_columns};

pub(super) struct BodyView<'a> {
    pub columns: &'a [ColumnSpec],
    pub rows: &'a [GridRow],
    pub width: usize,
    pub loading: bool,
    pub with_checkbox: bool,
    pub selected: &'a SelectionSet,
    pub empty_message: f::AttrValue,
    pub on_toggle_row: f::Callback<RowId>,
    pub on_click_row: Option<&'a f::Callback<RowId>>,
}

pub(super) fn render_cell(value: Option<&CellValue<f::Html>>) -> f::Html {
    match value {
        Some(CellValue::Node(node)) => node.clone(),
        Some(other) => f::html! { { other.display_text().unwrap_or_default() } },
        None => f::Html::default(),
    }
}

fn placeholder_row(width: usize, class: &'static str, content: f::Html) -> f::Html {
    f::html! {
        <tbody>
            <tr class={class}>
                <td colspan={width.max(1).to_string()} class="text-center py-6">{ content }</td>
            </tr>
        </tbody>
    }
}

fn render_row(view: &BodyView<'_>, leaves: &[&ColumnSpec], row: &GridRow) -> f::Html {
    let is_selected = view.selected.contains(&row.id);
    let onclick = view.on_click_row.map(|cb| {
        let cb = cb.clone();
        let id = row.id.clone();
        f::Callback::from(move |_: f::MouseEvent| cb.emit(id.clone()))
    });
    let mut class = f::classes!("grid-row");
    if onclick.is_some() {
        class.push("hover cursor-pointer");
    }
    if is_selected {
        class.push("row-selected");
    }

    let select_cell = if view.with_checkbox {
        let on_toggle = {
            let cb = view.on_toggle_row.clone();
            let id = row.id.clone();
            f::Callback::from(move |_checked: bool| cb.emit(id.clone()))
        };
        f::html! {
            <td class="w-8" onclick={f::stop_propagation()}>
                <Checkbox
                    aria_label={f::AttrValue::from(format!("Select row {}", row.id))}
                    checked={is_selected}
                    on_toggle={on_toggle}
                />
            </td>
        }
    } else {
        f::Html::default()
    };

    f::html! {
        <tr
            key={row.id.as_str().to_string()}
            class={class}
            data-row-id={row.id.to_string()}
            aria-selected={view.with_checkbox.then(|| is_selected.to_string())}
            onclick={onclick}
        >
            { select_cell }
            { for leaves.iter().map(|column| f::html! {
                <td>{ render_cell(row.cell(&column.key)) }</td>
            }) }
        </tr>
    }
}

pub(super) fn render_body(view: &BodyView<'_>) -> f::Html {
    if view.loading {
        return placeholder_row(
            view.width,
            "grid-loading",
            f::html! { <Loading /> },
        );
    }
    if view.rows.is_empty() {
        return placeholder_row(
            view.width,
            "grid-empty",
            f::html! { <span class="opacity-60">{ view.empty_message.clone() }</span> },
        );
    }
    let leaves = leaf_columns(view.columns);
    f::html! {
        <tbody>
            { for view.rows.iter().map(|row| render_row(view, &leaves, row)) }
        </tbody>
    }
}
