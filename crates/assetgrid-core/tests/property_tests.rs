//! Property-based tests for card filtering
//!
//! Uses proptest to verify the visibility invariants of the filter.

use assetgrid_core::{
    plan, Card, CardElement, CardField, FilterController, Query, Visibility, VisibilityMap,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Optional field text, mixed case, sometimes missing
fn field_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(0.8, prop::string::string_regex("[a-zA-Z0-9 -]{0,16}").expect("valid regex"))
}

/// A card with an index-based id so ids stay unique
fn card_strategy() -> impl Strategy<Value = [Option<String>; 5]> {
    [
        field_strategy(),
        field_strategy(),
        field_strategy(),
        field_strategy(),
        field_strategy(),
    ]
}

fn cards_strategy(max: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card_strategy(), 0..max).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, fields)| {
                let mut card = Card::new(format!("card-{}", i));
                for (field, text) in CardField::ALL.into_iter().zip(fields) {
                    if let Some(text) = text {
                        card = card.with_field(field, text);
                    }
                }
                card
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 -]{0,4}").expect("valid regex")
}

/// Reference predicate written directly from the definition
fn expected_visible(card: &Card, query: &str) -> bool {
    let needle = query.to_uppercase();
    needle.is_empty()
        || CardField::ALL
            .iter()
            .filter_map(|f| card.field_text(*f))
            .any(|text| text.to_uppercase().contains(&needle))
}

fn run(cards: &[Card], query: &str) -> VisibilityMap {
    let mut display = VisibilityMap::new();
    FilterController::new(query, cards).evaluate(&mut display);
    display
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A card is visible iff some field contains the query
    #[test]
    fn visibility_matches_definition(cards in cards_strategy(12), query in query_strategy()) {
        let display = run(&cards, &query);
        for card in &cards {
            prop_assert_eq!(
                display.get(&card.id).is_visible(),
                expected_visible(card, &query)
            );
        }
    }

    /// The empty query shows every card
    #[test]
    fn empty_query_shows_all(cards in cards_strategy(12)) {
        let display = run(&cards, "");
        prop_assert_eq!(display.hidden_count(), 0);
    }

    /// Lowercase and uppercase queries give identical results
    #[test]
    fn case_insensitive(cards in cards_strategy(12), query in query_strategy()) {
        let lower = plan(&Query::new(query.to_lowercase()), &cards);
        let upper = plan(&Query::new(query.to_uppercase()), &cards);
        prop_assert_eq!(lower, upper);
    }

    /// Evaluating twice leaves the same state as evaluating once
    #[test]
    fn idempotent(cards in cards_strategy(12), query in query_strategy()) {
        let once = run(&cards, &query);

        let mut twice = VisibilityMap::new();
        let controller = FilterController::new(query.as_str(), &cards);
        controller.evaluate(&mut twice);
        controller.evaluate(&mut twice);

        prop_assert_eq!(once, twice);
    }

    /// Every card is evaluated exactly once, in order
    #[test]
    fn plan_covers_every_card_in_order(cards in cards_strategy(12), query in query_strategy()) {
        let updates = plan(&Query::new(query), &cards);
        prop_assert_eq!(updates.len(), cards.len());
        for (update, card) in updates.iter().zip(&cards) {
            prop_assert_eq!(&update.card, &card.id);
        }
    }

    /// A query no field can contain hides everything
    #[test]
    fn unmatched_query_hides_all(cards in cards_strategy(12)) {
        // '#' never appears in generated fields
        let updates = plan(&Query::new("#"), &cards);
        prop_assert!(updates.iter().all(|u| u.visibility == Visibility::Hidden));
    }
}
