use estatedesk_grid::{ColumnKey, ListQuery, QueryController, SortState, total_pages};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use std::num::NonZeroU32;

use super::{Violation, ensure};

const SEARCHES: &[&str] = &["", "ada", "  ada  ", "park lane", "unit 4"];
const STATUSES: &[&str] = &["", "active", "pending", "former"];
const SORT_KEYS: &[&str] = &["name", "unit", "balance"];

fn pick<'a>(rng: &mut ChaCha20Rng, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

pub fn check(rng: &mut ChaCha20Rng) -> Result<(), Violation> {
    let limit = NonZeroU32::new(rng.gen_range(1..=25_u32)).unwrap_or(NonZeroU32::MIN);
    let mut controller = QueryController::new(ListQuery::with_limit(limit));
    let mut issued = Vec::new();

    for step in 0..rng.gen_range(1..=30) {
        let before = controller.query().clone();
        let (action, ticket) = match rng.gen_range(0..4) {
            0 => ("page", controller.set_page(rng.gen_range(1..=40))),
            1 => ("search", controller.set_search(pick(rng, SEARCHES))),
            2 => {
                let status = pick(rng, STATUSES);
                ("filter", controller.set_filter("status", Some(status)))
            }
            _ => {
                let key = ColumnKey::from(pick(rng, SORT_KEYS));
                let next = SortState::toggle(controller.query().sort.as_ref(), &key);
                ("sort", controller.set_sort(next))
            }
        };
        let after = controller.query();

        match ticket {
            Some(ticket) => {
                ensure(controller.is_current(ticket), "fresh-ticket", || {
                    format!("step {step}: {action} ticket #{} is not current", ticket.sequence())
                })?;
                ensure(
                    issued.iter().all(|old| !controller.is_current(*old)),
                    "stale-rejected",
                    || format!("step {step}: an older ticket is still current after {action}"),
                )?;
                issued.push(ticket);
                if action != "page" {
                    ensure(after.page == 1, "page-reset", || {
                        format!("step {step}: {action} left page {}", after.page)
                    })?;
                }
            }
            None => {
                ensure(*after == before, "no-op-unchanged", || {
                    format!("step {step}: {action} changed the query without a ticket")
                })?;
            }
        }
    }

    let total = rng.gen_range(0..=500_u64);
    let page_before = controller.query().page;
    let last = total_pages(total, limit).max(1);
    let corrected = controller.reconcile_total(total);
    let page_after = controller.query().page;
    if page_before > last {
        ensure(
            corrected.as_ref().map(|q| q.page) == Some(last) && page_after == last,
            "reconcile-clamps",
            || format!("page {page_before} with total {total} became {page_after}"),
        )
    } else {
        ensure(corrected.is_none() && page_after == page_before, "reconcile-keeps", || {
            format!("page {page_before} with total {total} became {page_after}")
        })
    }
}
