use crate::components::GridRow;
use crate::components::daisy_ui::atoms::Badge;
use crate::components::daisy_ui::foundation as f;
use estatedesk_grid::{ColumnSpec, format_amount, format_date};
use serde::{Deserialize, Serialize};

pub const RESOURCE: &str = "tenants";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    #[default]
    Active,
    Pending,
    Former,
}

impl TenantStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Pending, Self::Former];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Former => "former",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Former => "Former",
        }
    }

    const fn color(self) -> f::DaisyColor {
        match self {
            Self::Active => f::DaisyColor::Success,
            Self::Pending => f::DaisyColor::Warning,
            Self::Former => f::DaisyColor::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: TenantStatus,
    #[serde(default, rename = "moveInDate")]
    pub move_in: Option<String>,
    /// Outstanding balance in cents.
    #[serde(default, rename = "balance")]
    pub balance_cents: i64,
}

#[must_use]
pub fn tenant_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("name", "Name").sortable(),
        ColumnSpec::new("unit", "Unit").sortable().width("6rem"),
        ColumnSpec::new("contact", "Contact").with_subcolumns(vec![
            ColumnSpec::new("phone", "Phone"),
            ColumnSpec::new("email", "Email").sortable(),
        ]),
        ColumnSpec::new("status", "Status"),
        ColumnSpec::new("moveInDate", "Move-in").sortable(),
        ColumnSpec::new("balance", "Balance").sortable(),
    ]
}

#[must_use]
pub fn status_badge(status: TenantStatus) -> f::Html {
    f::html! { <Badge label={f::AttrValue::from(status.label())} variant={status.color()} /> }
}

#[must_use]
pub fn tenant_row(tenant: &Tenant) -> GridRow {
    let mut row = GridRow::new(tenant.id)
        .with("name", tenant.name.as_str())
        .with("unit", tenant.unit.as_str())
        .with_node("status", status_badge(tenant.status))
        .with("balance", format_amount(tenant.balance_cents));
    if let Some(phone) = &tenant.phone {
        row = row.with("phone", phone.as_str());
    }
    if let Some(email) = &tenant.email {
        row = row.with("email", email.as_str());
    }
    if let Some(move_in) = &tenant.move_in {
        row = row.with("moveInDate", format_date(move_in));
    }
    row
}
