use estatedesk_grid::{PageItem, pagination_range, total_pages};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use std::num::NonZeroU32;

use super::{Violation, ensure};

const TEN: NonZeroU32 = NonZeroU32::MIN.saturating_add(9);

fn fixed_examples() -> Result<(), Violation> {
    use PageItem::{Ellipsis, Page};

    let middle = pagination_range(100, TEN, 5, 1);
    let expected = [Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)];
    ensure(middle.as_slice() == expected, "example-middle", || {
        format!("100/10 at page 5 gave {middle:?}")
    })?;

    let dense = pagination_range(50, TEN, 1, 1);
    let expected = [Page(1), Page(2), Page(3), Page(4), Page(5)];
    ensure(dense.as_slice() == expected, "example-dense", || {
        format!("50/10 at page 1 gave {dense:?}")
    })
}

pub fn check(rng: &mut ChaCha20Rng) -> Result<(), Violation> {
    fixed_examples()?;

    let total = rng.gen_range(0..=5_000_u64);
    let page_size = NonZeroU32::new(rng.gen_range(1..=50_u32)).unwrap_or(NonZeroU32::MIN);
    let siblings = rng.gen_range(0..=8_u32);
    let pages = total_pages(total, page_size);
    let current = rng.gen_range(1..=pages.max(1));
    let label = format!("total={total} size={page_size} page={current} siblings={siblings}");

    let range = pagination_range(total, page_size, current, siblings);
    let numbers: Vec<u32> = range.iter().filter_map(|item| item.page()).collect();
    let ellipses = range.iter().filter(|item| item.is_ellipsis()).count();

    ensure(numbers.windows(2).all(|w| w[0] <= w[1]), "ordered", || {
        format!("{label}: {range:?}")
    })?;
    ensure(numbers.iter().all(|n| (1..=pages).contains(n)), "in-bounds", || {
        format!("{label}: {range:?} exceeds 1..={pages}")
    })?;

    if pages <= siblings + 5 {
        let dense: Vec<u32> = (1..=pages).collect();
        ensure(numbers == dense && ellipses == 0, "dense", || {
            format!("{label}: {range:?}")
        })?;
    }

    ensure(
        pages == 0 || (numbers.first() == Some(&1) && numbers.last() == Some(&pages)),
        "edges-present",
        || format!("{label}: {range:?}"),
    )?;
    ensure(
        !range.windows(2).any(|w| w[0].is_ellipsis() && w[1].is_ellipsis()),
        "no-adjacent-dots",
        || format!("{label}: {range:?}"),
    )?;
    ensure(numbers.windows(2).all(|w| w[0] < w[1]), "no-repeats", || {
        format!("{label}: {range:?}")
    })?;

    let left = current.saturating_sub(siblings).max(1);
    let right = current.saturating_add(siblings).min(pages);
    if pages > siblings + 5 && left > 2 && right < pages.saturating_sub(2) {
        let window_present = (left..=right).all(|p| numbers.contains(&p));
        ensure(
            ellipses == 2
                && numbers.first() == Some(&1)
                && numbers.last() == Some(&pages)
                && window_present,
            "both-dots",
            || format!("{label}: {range:?}"),
        )?;
    }

    let again = pagination_range(total, page_size, current, siblings);
    ensure(again == range, "idempotent", || format!("{label}: {range:?} then {again:?}"))
}
