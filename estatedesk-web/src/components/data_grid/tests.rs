use super::*;
use futures::executor::block_on;
use yew::LocalServerRenderer;

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("name", "Name").sortable(),
        ColumnSpec::new("unit", "Unit"),
        ColumnSpec::new("balance", "Balance").sortable(),
    ]
}

fn rows(ids: &[u64]) -> Vec<GridRow> {
    ids.iter()
        .map(|id| {
            GridRow::new(*id)
                .with("name", format!("Tenant {id}"))
                .with("unit", format!("A-{id}0{id}"))
                .with("balance", 1200_i64)
        })
        .collect()
}

fn props(headers: Vec<ColumnSpec>, rows: Vec<GridRow>) -> DataGridProps {
    DataGridProps {
        headers,
        rows,
        total: 3,
        page: 1,
        limit: 10,
        sibling_count: DEFAULT_SIBLING_COUNT,
        with_checkbox: false,
        striped: false,
        loading: false,
        selection: SelectionMode::SelfManaged,
        sort: None,
        empty_message: None,
        class: f::Classes::new(),
        on_change_page: f::Callback::noop(),
        on_click_row: None,
        on_click_checkbox: f::Callback::noop(),
        on_sort: f::Callback::noop(),
    }
}

fn render(props: DataGridProps) -> String {
    block_on(LocalServerRenderer::<DataGrid>::with_props(props).render())
}

fn body_of(html: &str) -> &str {
    html.split("<tbody").nth(1).unwrap_or_default()
}

#[test]
fn renders_one_row_per_record() {
    let html = render(props(columns(), rows(&[1, 2, 3])));
    assert_eq!(body_of(&html).matches("<tr").count(), 3);
    assert!(html.contains("Tenant 2"));
    assert!(html.contains("data-row-id=\"3\""));
}

#[test]
fn empty_rows_render_single_placeholder() {
    for headers in [vec![], columns(), vec![ColumnSpec::new("only", "Only")]] {
        let html = render(props(headers, vec![]));
        let body = body_of(&html);
        assert_eq!(body.matches("<tr").count(), 1, "{html}");
        assert!(body.contains("grid-empty"));
        assert!(body.contains(DEFAULT_EMPTY_MESSAGE));
    }
}

#[test]
fn placeholder_spans_every_column_including_checkbox() {
    let mut p = props(columns(), vec![]);
    p.with_checkbox = true;
    p.empty_message = Some("No tenants yet".into());
    let html = render(p);
    assert!(html.contains("colspan=\"4\""), "{html}");
    assert!(html.contains("No tenants yet"));
}

#[test]
fn loading_replaces_body_but_keeps_header_and_pagination() {
    let mut p = props(columns(), rows(&[1, 2]));
    p.loading = true;
    p.total = 40;
    let html = render(p);
    let body = body_of(&html);
    assert_eq!(body.matches("<tr").count(), 1);
    assert!(body.contains("loading-spinner"));
    assert!(!html.contains("Tenant 1"));
    assert!(html.contains("<thead"));
    assert!(html.contains("aria-label=\"Pagination\""));
    assert!(html.contains("aria-busy=\"true\""));
}

#[test]
fn select_all_is_indeterminate_when_nothing_selected() {
    let mut p = props(columns(), rows(&[1, 2, 3]));
    p.with_checkbox = true;
    let html = render(p);
    assert!(html.contains("grid-select-all"));
    assert!(html.contains("aria-checked=\"mixed\""));
    assert_eq!(html.matches("type=\"checkbox\"").count(), 4);
}

#[test]
fn controlled_selection_checks_supplied_rows() {
    let mut p = props(columns(), rows(&[1, 2, 3]));
    p.with_checkbox = true;
    p.selection = SelectionMode::ExternallyControlled(vec![RowId::from(1), RowId::from(3)]);
    let html = render(p);
    assert_eq!(html.matches("row-selected").count(), 2);
    assert_eq!(html.matches("aria-selected=\"true\"").count(), 2);
    assert!(html.contains("aria-checked=\"mixed\""));
}

#[test]
fn full_controlled_selection_checks_header() {
    let mut p = props(columns(), rows(&[1, 2]));
    p.with_checkbox = true;
    p.selection = SelectionMode::ExternallyControlled(vec![RowId::from(1), RowId::from(2)]);
    let html = render(p);
    assert!(!html.contains("aria-checked=\"mixed\""));
    assert_eq!(html.matches("aria-checked=\"true\"").count(), 3);
}

#[test]
fn grouped_headers_render_subheader_row() {
    let headers = vec![
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("contact", "Contact").with_subcolumns(vec![
            ColumnSpec::new("phone", "Phone").sortable(),
            ColumnSpec::new("email", "Email").sortable(),
        ]),
    ];
    let row = GridRow::new(9_u64)
        .with("name", "Ada")
        .with("phone", "555-0101")
        .with("email", "ada@example.com");
    let html = render(props(headers, vec![row]));
    assert!(html.contains("grid-subheader"));
    assert!(html.contains("colspan=\"2\""));
    assert!(html.contains("rowspan=\"2\""));
    assert!(html.contains("Sort by Phone"));
    assert!(html.contains("Sort by Email"));
    let body = body_of(&html);
    assert_eq!(body.matches("<td").count(), 3);
}

#[test]
fn sort_icon_reflects_page_sort_state() {
    let mut p = props(columns(), rows(&[1]));
    p.sort = Some(SortState::new(
        "balance".into(),
        estatedesk_grid::SortDirection::Descending,
    ));
    let html = render(p);
    assert!(html.contains("data-sort=\"descending\""));
    assert_eq!(html.matches("data-sort=\"none\"").count(), 1);
    assert!(!html.contains("Sort by Unit"));
}

#[test]
fn node_cells_render_markup() {
    let row = GridRow::new(4_u64).with_node("name", f::html! { <strong class="vip">{"Kim"}</strong> });
    let html = render(props(columns(), vec![row]));
    assert!(html.contains("<strong class=\"vip\">Kim</strong>"));
}

#[test]
fn striped_adds_zebra_class() {
    let mut p = props(columns(), rows(&[1]));
    p.striped = true;
    assert!(render(p).contains("table-zebra"));
}

#[test]
fn clickable_rows_get_hover_class() {
    let mut p = props(columns(), rows(&[1]));
    p.on_click_row = Some(f::Callback::noop());
    assert!(render(p).contains("cursor-pointer"));
}
