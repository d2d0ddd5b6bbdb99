//! Deck enumeration and harness properties.

use std::collections::HashSet;

use goldfisher::{run_search, Deck, DeckSpec, SearchConfig, DECK_SIZE};

use goldfisher::cards::{BRAINSPOIL, ISLAND, LOOTING, PONDER, PREORDAIN, VISIONS, WRAITH};

fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let mut result = 1u64;
    for i in 0..k.min(n - k) {
        result = result * (n - i) / (i + 1);
    }
    result
}

/// Fill a base so that `slots` remain open.
fn spec_with_slots(slots: usize, options: Vec<goldfisher::CardId>) -> DeckSpec {
    DeckSpec::new(vec![ISLAND; DECK_SIZE - slots], options)
}

#[test]
fn test_enumeration_has_no_duplicate_multisets() {
    let spec = DeckSpec::standard();
    let decks = spec.enumerate();

    let unique: HashSet<&Deck> = decks.iter().collect();
    assert_eq!(unique.len(), decks.len());
    for deck in &decks {
        assert_eq!(deck.len(), DECK_SIZE);
    }
}

#[test]
fn test_duplicate_options_collapse_below_binomial() {
    // Five options holding a duplicated card, three slots: the raw
    // C(5, 3) selections collapse strictly.
    let options = vec![PONDER, PONDER, PREORDAIN, VISIONS, LOOTING];
    let spec = spec_with_slots(3, options.clone());
    let decks = spec.enumerate();

    let raw = binomial(options.len() as u64, 3);
    assert!(
        (decks.len() as u64) < raw,
        "{} candidates did not collapse below C({}, 3) = {raw}",
        decks.len(),
        options.len()
    );
}

#[test]
fn test_distinct_options_match_binomial_exactly() {
    let options = vec![PONDER, PREORDAIN, VISIONS, LOOTING, BRAINSPOIL];
    let spec = spec_with_slots(2, options.clone());
    let decks = spec.enumerate();

    assert_eq!(decks.len() as u64, binomial(options.len() as u64, 2));
}

#[test]
fn test_every_candidate_contains_the_base() {
    let spec = spec_with_slots(2, vec![PONDER, PREORDAIN, WRAITH]);
    for deck in spec.enumerate() {
        let islands = deck
            .card_counts()
            .iter()
            .find(|&&(card, _)| card == ISLAND)
            .map_or(0, |&(_, n)| n);
        assert_eq!(islands as usize, DECK_SIZE - 2);
    }
}

#[test]
fn test_search_reports_cover_all_trials_and_candidates() {
    let spec = spec_with_slots(1, vec![PONDER, WRAITH]);
    let config = SearchConfig::new().with_trials(16).with_seed(2);

    let reports = run_search(&spec, &config);

    assert_eq!(reports.len(), 2);
    for report in &reports {
        assert_eq!(report.trials, 16);
        assert_eq!(report.wins + report.losses + report.errors, 16);
        let cards: u32 = report.deck.card_counts().iter().map(|&(_, n)| n).sum();
        assert_eq!(cards as usize, DECK_SIZE);
    }
}

#[test]
fn test_search_is_deterministic() {
    let spec = spec_with_slots(1, vec![PONDER, WRAITH]);
    let config = SearchConfig::new().with_trials(24).with_seed(11);

    let a = run_search(&spec, &config);
    let b = run_search(&spec, &config);
    assert_eq!(a, b);
}

#[test]
fn test_stock_deck_report_exports_card_counts() {
    let config = SearchConfig::new().with_trials(8).with_seed(1);
    let report = goldfisher::evaluate_deck(&Deck::standard(), &config);

    let counts = report.deck.card_counts();
    let total: u32 = counts.iter().map(|&(_, n)| n).sum();
    assert_eq!(total as usize, DECK_SIZE);

    // Serializable as-is for the external tabular exporter.
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"wins\""));
}
