use std::collections::HashSet;

use super::*;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
    v.sort();
    v
}

#[test]
fn empty_source_is_rejected() {
    let err = Selector::<u32>::new(&[]).unwrap_err();
    assert_eq!(err, SelectorError::Empty);
    assert_eq!(err.to_string(), "selector requires at least one item");
}

#[test]
fn single_item_repeats_forever() {
    let mut sel = Selector::with_rng(&["only"], seeded(1)).unwrap();
    for _ in 0..50 {
        assert_eq!(sel.draw(), "only");
    }
}

#[test]
fn each_cycle_is_a_permutation_of_the_source() {
    let source: Vec<u32> = (0..17).collect();
    let mut sel = Selector::with_rng(&source, seeded(7)).unwrap();

    for cycle in 0..10 {
        let drawn: Vec<u32> = (0..source.len()).map(|_| sel.draw()).collect();
        assert_eq!(sorted(drawn), source, "cycle {cycle} is not a permutation");
    }
}

#[test]
fn no_repeat_within_a_cycle() {
    let source = ["a", "b", "c", "d", "e", "f"];
    let mut sel = Selector::with_rng(&source, seeded(99)).unwrap();

    let mut seen = HashSet::new();
    for _ in 0..source.len() {
        assert!(seen.insert(sel.draw()), "item repeated inside one cycle");
    }
}

#[test]
fn draws_forever_without_leaving_the_source() {
    let source = ['x', 'y', 'z', 'w'];
    let sel = Selector::new(&source).unwrap();
    for item in sel.take(source.len() * 10) {
        assert!(source.contains(&item));
    }
}

#[test]
fn remaining_tracks_the_current_cycle() {
    let mut sel = Selector::with_rng(&[1, 2, 3], seeded(3)).unwrap();
    assert_eq!(sel.len(), 3);
    assert_eq!(sel.remaining(), 0);

    sel.draw();
    assert_eq!(sel.remaining(), 2);
    sel.draw();
    assert_eq!(sel.remaining(), 1);
    sel.draw();
    assert_eq!(sel.remaining(), 0);

    // Fourth draw starts a new cycle.
    sel.draw();
    assert_eq!(sel.remaining(), 2);
}

#[test]
fn source_is_copied_at_construction() {
    let mut source = vec![String::from("a"), String::from("b")];
    let mut sel = Selector::with_rng(&source, seeded(5)).unwrap();

    source.clear();
    source.push(String::from("mutated"));

    let drawn = sorted((0..4).map(|_| sel.draw()).collect::<Vec<_>>());
    assert_eq!(drawn, vec!["a", "a", "b", "b"]);
}

#[test]
fn selectors_do_not_share_pools() {
    let source = [10, 20, 30, 40];
    let mut first = Selector::with_rng(&source, seeded(11)).unwrap();
    let mut second = Selector::with_rng(&source, seeded(11)).unwrap();

    first.draw();
    first.draw();
    first.draw();
    assert_eq!(first.remaining(), 1);
    assert_eq!(second.remaining(), 0);

    second.draw();
    assert_eq!(second.remaining(), 3);
    assert_eq!(first.remaining(), 1);
}

#[test]
fn cloned_selector_draws_independently() {
    let mut original = Selector::with_rng(&['a', 'b', 'c'], seeded(2)).unwrap();
    original.draw();
    let mut copy = original.clone();

    copy.draw();
    copy.draw();
    assert_eq!(copy.remaining(), 0);
    assert_eq!(original.remaining(), 2);
}

#[test]
fn abc_scenario_spans_two_cycles() {
    let mut sel = Selector::with_rng(&['A', 'B', 'C'], seeded(42)).unwrap();

    let first: Vec<char> = (0..3).map(|_| sel.draw()).collect();
    assert_eq!(sorted(first), vec!['A', 'B', 'C']);

    let fourth = sel.draw();
    assert!(['A', 'B', 'C'].contains(&fourth));

    let mut second = vec![fourth, sel.draw(), sel.draw()];
    second.sort_unstable();
    assert_eq!(second, vec!['A', 'B', 'C']);
}

#[test]
fn every_item_eventually_leads_a_cycle() {
    let source = [0u8, 1, 2];
    let mut sel = Selector::with_rng(&source, seeded(1234)).unwrap();

    let mut leaders = HashSet::new();
    for _ in 0..200 {
        leaders.insert(sel.draw());
        sel.draw();
        sel.draw();
    }
    assert_eq!(leaders.len(), source.len());
}

#[test]
fn iterator_never_ends() {
    let sel = Selector::with_rng(&[1, 2], seeded(8)).unwrap();
    assert_eq!(sel.size_hint(), (usize::MAX, None));
    assert_eq!(sel.take(1000).count(), 1000);
}
