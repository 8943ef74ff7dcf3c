pub mod list;
pub mod tenants;

pub use list::{ListPage, use_list_page};
pub use tenants::TenantsPage;
