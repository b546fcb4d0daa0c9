use std::collections::HashMap;

use mystery_mansion::map::ROOM_CLUES;
use mystery_mansion::suspects::hash_key;
use mystery_mansion::SuspectIndex;
use proptest::prelude::*;

fn suspect() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Dr. Watson".to_string()),
        Just("Professora Moriarty".to_string()),
        Just("Jardineiro Gregson".to_string()),
    ]
}

proptest! {
    #[test]
    fn lookup_returns_latest_suspect(
        pairs in proptest::collection::vec(("[a-z]{1,6}", suspect()), 0..40),
        buckets in 1usize..32,
        probe in "[A-Z]{1,6}",
    ) {
        let mut index = SuspectIndex::new(buckets).expect("non-zero buckets");
        let mut model = HashMap::new();
        for (clue, suspect) in &pairs {
            index.insert(clue, suspect);
            prop_assert_eq!(index.lookup(clue), Some(suspect.as_str()));
            model.insert(clue.clone(), suspect.clone());
        }

        prop_assert_eq!(index.len(), model.len());
        for (clue, suspect) in &model {
            prop_assert_eq!(index.lookup(clue), Some(suspect.as_str()));
        }
        // Keys are lowercase, the probe uppercase
        prop_assert_eq!(index.lookup(&probe), None);
    }

    #[test]
    fn scan_visits_buckets_in_order(
        clues in proptest::collection::btree_set("[a-z]{1,8}", 0..30),
        buckets in 1usize..20,
    ) {
        let mut index = SuspectIndex::new(buckets).expect("non-zero buckets");
        for clue in &clues {
            index.insert(clue, "Dr. Watson");
        }

        let order: Vec<usize> = index.iter().map(|(clue, _)| hash_key(clue, buckets)).collect();
        prop_assert!(order.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(index.chain_lengths().iter().sum::<usize>(), clues.len());
    }

    #[test]
    fn most_cited_has_maximal_count(
        pairs in proptest::collection::vec(("[a-z]{1,6}", suspect()), 1..40),
    ) {
        let mut index = SuspectIndex::default();
        for (clue, suspect) in &pairs {
            index.insert(clue, suspect);
        }

        let tally = index.tally();
        let winner = index.most_cited().expect("non-empty index has a winner");
        let best = tally.citations().iter().map(|c| c.count).max().unwrap_or(0);
        prop_assert_eq!(tally.count(winner), best);

        // Earlier scanned suspects never hold the same maximum
        let first_with_best = tally
            .citations()
            .iter()
            .find(|c| c.count == best)
            .map(|c| c.suspect);
        prop_assert_eq!(first_with_best, Some(winner));
    }
}

#[test]
fn full_catalog_names_dr_watson() {
    let mut index = SuspectIndex::default();
    for entry in &ROOM_CLUES {
        index.insert(entry.clue, entry.suspect);
    }

    let tally = index.tally();
    assert_eq!(tally.count("Dr. Watson"), 2);
    assert_eq!(tally.count("Professora Moriarty"), 2);
    assert_eq!(index.most_cited(), Some("Dr. Watson"));
}

#[test]
fn catalog_order_does_not_change_winner() {
    // Same per-suspect totals inserted in reverse; scan order is by bucket
    let mut index = SuspectIndex::default();
    for entry in ROOM_CLUES.iter().rev() {
        index.insert(entry.clue, entry.suspect);
    }
    assert_eq!(index.most_cited(), Some("Dr. Watson"));
}
