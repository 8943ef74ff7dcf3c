use estatedesk_grid::{ColumnSpec, DEFAULT_SIBLING_COUNT, RowId, SelectionMode};
use estatedesk_web::components::daisy_ui::organisms::Pagination;
use estatedesk_web::components::daisy_ui::organisms::pagination::PaginationProps;
use estatedesk_web::components::{ConfirmDelete, DataGrid, DataGridProps, GridRow};
use futures::executor::block_on;
use yew::{AttrValue, Callback, Classes, LocalServerRenderer};

fn grid_props(rows: Vec<GridRow>, total: u64, page: u32) -> DataGridProps {
    DataGridProps {
        headers: vec![
            ColumnSpec::new("name", "Name").sortable(),
            ColumnSpec::new("unit", "Unit"),
        ],
        rows,
        total,
        page,
        limit: 10,
        sibling_count: DEFAULT_SIBLING_COUNT,
        with_checkbox: true,
        striped: false,
        loading: false,
        selection: SelectionMode::SelfManaged,
        sort: None,
        empty_message: None,
        class: Classes::new(),
        on_change_page: Callback::noop(),
        on_click_row: None,
        on_click_checkbox: Callback::noop(),
        on_sort: Callback::noop(),
    }
}

fn page_rows(page: u32) -> Vec<GridRow> {
    (1..=10_u64)
        .map(|n| u64::from(page - 1) * 10 + n)
        .map(|id| GridRow::new(id).with("name", format!("Tenant {id}")).with("unit", "C-1"))
        .collect()
}

#[test]
fn grid_footer_shows_dotted_range_for_middle_page() {
    let html = block_on(
        LocalServerRenderer::<DataGrid>::with_props(grid_props(page_rows(5), 100, 5)).render(),
    );
    assert_eq!(html.matches("pagination-ellipsis").count(), 2);
    assert!(html.contains("aria-current=\"page\""));
    assert!(html.contains("41–50 of 100"));
    assert!(html.contains("Tenant 45"));
}

#[test]
fn self_managed_grid_starts_with_nothing_selected() {
    let html = block_on(
        LocalServerRenderer::<DataGrid>::with_props(grid_props(page_rows(1), 10, 1)).render(),
    );
    assert!(!html.contains("row-selected"));
    assert_eq!(html.matches("aria-selected=\"false\"").count(), 10);
}

#[test]
fn controlled_grid_ignores_ids_from_other_pages() {
    let mut props = grid_props(page_rows(1), 20, 1);
    props.selection = SelectionMode::ExternallyControlled(vec![RowId::from(3), RowId::from(15)]);
    let html = block_on(LocalServerRenderer::<DataGrid>::with_props(props).render());
    assert_eq!(html.matches("row-selected").count(), 1);
    assert!(html.contains("aria-checked=\"mixed\""));
}

#[test]
fn full_selection_from_another_page_leaves_header_unchecked() {
    let mut props = grid_props(page_rows(2), 20, 2);
    props.selection = SelectionMode::ExternallyControlled((1..=10_u64).map(RowId::from).collect());
    let html = block_on(LocalServerRenderer::<DataGrid>::with_props(props).render());
    assert!(!html.contains("row-selected"));
    assert!(html.contains("aria-checked=\"mixed\""));
    assert!(!html.contains("aria-checked=\"true\""));
}

#[test]
fn standalone_pagination_marks_current_page() {
    let props = PaginationProps {
        total: 100,
        page: 1,
        limit: 10,
        sibling_count: DEFAULT_SIBLING_COUNT,
        class: Classes::new(),
        on_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Pagination>::with_props(props).render());
    assert_eq!(html.matches("pagination-ellipsis").count(), 1);
    assert!(html.contains(">10<"));
}

#[test]
fn confirm_delete_names_the_subject() {
    let props = estatedesk_web::components::confirm_delete::Props {
        open: true,
        subject: AttrValue::from("vendor"),
        count: 1,
        busy: true,
        on_confirm: Callback::noop(),
        on_cancel: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ConfirmDelete>::with_props(props).render());
    assert!(html.contains("Delete this vendor?"));
    assert!(html.contains("Deleting…"));
}
