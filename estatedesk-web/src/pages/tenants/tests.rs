use super::*;
use estatedesk_grid::{MemorySession, SessionUser, leaf_columns};
use futures::executor::block_on;
use yew::LocalServerRenderer;

fn tenant(id: u64, name: &str, status: TenantStatus) -> Tenant {
    Tenant {
        id,
        name: name.into(),
        unit: format!("B-{id:02}"),
        phone: Some("555-0100".into()),
        email: None,
        status,
        move_in: Some("2023-11-01".into()),
        balance_cents: 125_050,
    }
}

fn session(grants: &[&str]) -> SessionHandle {
    let memory = MemorySession::default();
    memory.sign_in(
        SessionUser {
            id: "u-7".into(),
            name: "Rae Lin".into(),
            email: None,
            role: Some("agent".into()),
            permissions: grants.iter().map(ToString::to_string).collect(),
        },
        "tok",
    );
    SessionHandle::memory(memory)
}

fn render(session: SessionHandle, initial: Option<Paged<Tenant>>) -> String {
    let props = Props {
        session,
        api: ApiClient::new("/api"),
        initial,
    };
    block_on(LocalServerRenderer::<TenantsPage>::with_props(props).render())
}

fn seeded() -> Option<Paged<Tenant>> {
    Some(Paged {
        data: vec![
            tenant(1, "Ada Park", TenantStatus::Active),
            tenant(2, "Ben Ortiz", TenantStatus::Former),
        ],
        total: 2,
    })
}

#[test]
fn tenant_json_uses_api_field_names() {
    let raw = r#"{"id":5,"name":"Cy","unit":"C-3","status":"pending","moveInDate":"2024-01-02","balance":900}"#;
    let parsed: Tenant = serde_json::from_str(raw).expect("tenant");
    assert_eq!(parsed.status, TenantStatus::Pending);
    assert_eq!(parsed.move_in.as_deref(), Some("2024-01-02"));
    assert_eq!(parsed.balance_cents, 900);
    assert!(parsed.phone.is_none());
}

#[test]
fn rows_cover_every_leaf_column() {
    let row = tenant_row(&tenant(3, "Cy", TenantStatus::Pending));
    let columns = tenant_columns();
    let leaves = leaf_columns(&columns);
    assert_eq!(leaves.len(), 7);
    let filled = leaves.iter().filter(|c| row.cell(&c.key).is_some()).count();
    assert_eq!(filled, 6, "email is absent");
    assert_eq!(
        row.cell(&"moveInDate".into()).and_then(estatedesk_grid::CellValue::display_text),
        Some("01 Nov 2023".to_string())
    );
    assert_eq!(
        row.cell(&"balance".into()).and_then(estatedesk_grid::CellValue::display_text),
        Some("1,250.50".to_string())
    );
}

#[test]
fn seeded_page_renders_rows_and_badges() {
    let html = render(session(&["tenant.read"]), seeded());
    assert!(html.contains("Ada Park"));
    assert!(html.contains("Ben Ortiz"));
    assert!(html.contains("badge-success"));
    assert!(html.contains("badge-neutral"));
    assert!(html.contains("Search tenants"));
    assert!(html.contains("Filter by status"));
    assert!(!html.contains("aria-busy=\"true\""));
}

#[test]
fn delete_requires_grant() {
    let reader = render(session(&["tenant.read"]), seeded());
    assert!(!reader.contains("Delete selected"));
    assert!(!reader.contains("grid-select-all"));

    let manager = render(session(&[DELETE_GRANT]), seeded());
    assert!(manager.contains("Delete selected"));
    assert!(manager.contains("grid-select-all"));
}

#[test]
fn unseeded_page_starts_loading() {
    let html = render(session(&[]), None);
    assert!(html.contains("aria-busy=\"true\""));
    assert!(html.contains("grid-loading"));
}

#[test]
fn empty_result_shows_message() {
    let html = render(session(&[]), Some(Paged::empty()));
    assert!(html.contains("No tenants found"));
    assert!(!html.contains("aria-label=\"Pagination\""));
}

#[test]
fn detail_lists_fallbacks_for_missing_fields() {
    let html = block_on(
        LocalServerRenderer::<DetailHarness>::with_props(DetailProps {
            tenant: tenant(9, "Dee", TenantStatus::Active),
        })
        .render(),
    );
    assert!(html.contains("555-0100"));
    assert!(html.contains("—"));
    assert!(html.contains("01 Nov 2023"));
}

#[derive(f::Properties, PartialEq, Clone)]
struct DetailProps {
    tenant: Tenant,
}

#[f::function_component(DetailHarness)]
fn detail_harness(props: &DetailProps) -> f::Html {
    tenant_detail(&props.tenant)
}
