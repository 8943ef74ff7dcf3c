use estatedesk_grid::{HeaderCheck, RowId, SelectionSet};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

use super::{Violation, ensure};

fn ids(raw: &[u64]) -> Vec<RowId> {
    raw.iter().copied().map(RowId::from).collect()
}

fn fixed_examples() -> Result<(), Violation> {
    let rows = ids(&[1, 2, 3]);
    let mut set = SelectionSet::new();
    let first = set.toggle_all(&rows);
    ensure(first == rows && set.ids() == rows.as_slice(), "select-all", || {
        format!("first toggle emitted {first:?}")
    })?;
    let second = set.toggle_all(&rows);
    ensure(second.is_empty() && set.is_empty(), "clear-all", || {
        format!("second toggle emitted {second:?}")
    })?;

    let mut set = SelectionSet::from_ids(ids(&[1, 2]));
    let emitted = set.toggle(&RowId::from(2));
    ensure(emitted == ids(&[1]), "toggle-one", || {
        format!("removing 2 from {{1,2}} emitted {emitted:?}")
    })
}

pub fn check(rng: &mut ChaCha20Rng) -> Result<(), Violation> {
    fixed_examples()?;

    let count = rng.gen_range(0..=12_u64);
    let rows: Vec<RowId> = (1..=count).map(RowId::from).collect();
    let mut set = SelectionSet::new();

    for _ in 0..rng.gen_range(1..=20) {
        let before = set.ids().to_vec();
        if rows.is_empty() || rng.gen_bool(0.2) {
            let emitted = set.toggle_all(&rows);
            let expected = if before.is_empty() { rows.clone() } else { Vec::new() };
            ensure(emitted == expected, "select-all-flip", || {
                format!("from {before:?} over {rows:?} emitted {emitted:?}")
            })?;
        } else if let Some(id) = rows.choose(rng) {
            let emitted = set.toggle(id);
            let was_selected = before.contains(id);
            ensure(emitted.contains(id) != was_selected, "toggle-one", || {
                format!("toggling {id} from {before:?} emitted {emitted:?}")
            })?;
            let others_kept = before
                .iter()
                .filter(|other| *other != id)
                .all(|other| emitted.contains(other));
            ensure(others_kept && emitted.len().abs_diff(before.len()) == 1, "toggle-isolated", || {
                format!("toggling {id} from {before:?} emitted {emitted:?}")
            })?;
        }

        let state = set.header_state(&rows);
        let expected = if rows.is_empty() {
            HeaderCheck::Empty
        } else if set.len() == rows.len() {
            HeaderCheck::All
        } else {
            HeaderCheck::Indeterminate
        };
        ensure(state == expected, "header-state", || {
            format!("{} of {} selected gave {state:?}", set.len(), rows.len())
        })?;
    }

    // A full page worth of ids from elsewhere must not check the header.
    let foreign = SelectionSet::from_ids((1..=count).map(|n| RowId::from(n + 1_000)));
    let foreign_state = foreign.header_state(&rows);
    let expected = if rows.is_empty() { HeaderCheck::Empty } else { HeaderCheck::Indeterminate };
    ensure(foreign_state == expected, "header-foreign-ids", || {
        format!("{count} foreign ids over {rows:?} gave {foreign_state:?}")
    })?;

    let external: Vec<RowId> = rows.iter().filter(|_| rng.gen_bool(0.5)).cloned().collect();
    set.sync(&external);
    ensure(set.ids() == external.as_slice(), "controlled-sync", || {
        format!("sync to {external:?} left {:?}", set.ids())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn sweep_holds_for_many_seeds() {
        for seed in 0..300 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            assert_eq!(check(&mut rng), Ok(()), "seed {seed}");
        }
    }
}
