//! Filter controller
//!
//! Re-evaluates the visibility of every card in a container against the
//! current value of a filter input. The work is split in two:
//!
//! - [`plan`] is pure: query + cards in, ordered [`VisibilityUpdate`]s out.
//! - [`apply`] pushes those decisions into a [`VisibilitySink`].
//!
//! [`FilterController`] holds injected references to the input and the
//! container and runs both steps per trigger. Nothing is cached between
//! evaluations; the container is re-queried every time.
//!
//! ## Example
//!
//! ```
//! use assetgrid_core::{Card, CardField, FilterController, VisibilityMap, Visibility};
//!
//! let cards = vec![
//!     Card::new("1").with_field(CardField::Title, "Dell Latitude"),
//!     Card::new("2").with_field(CardField::Title, "HP EliteBook"),
//! ];
//! let mut display = VisibilityMap::new();
//!
//! let report = FilterController::new("dell", &cards).evaluate(&mut display);
//!
//! assert_eq!(report.visible, 1);
//! assert_eq!(display.get(&cards[1].id), Visibility::Hidden);
//! ```

use tracing::{debug, trace};

use crate::card::{CardElement, CardField};
use crate::query::{Query, QuerySource};
use crate::visibility::{Visibility, VisibilitySink, VisibilityUpdate};

/// The card container: yields the cards currently present, in order
pub trait CardSource {
    type Card: CardElement;

    fn cards(&self) -> Vec<&Self::Card>;
}

impl<C: CardElement> CardSource for [C] {
    type Card = C;

    fn cards(&self) -> Vec<&C> {
        self.iter().collect()
    }
}

impl<C: CardElement> CardSource for Vec<C> {
    type Card = C;

    fn cards(&self) -> Vec<&C> {
        self.iter().collect()
    }
}

impl<T: CardSource + ?Sized> CardSource for &T {
    type Card = T::Card;

    fn cards(&self) -> Vec<&T::Card> {
        (**self).cards()
    }
}

/// Decide the visibility of every card in `container`, in container order
pub fn plan<S: CardSource + ?Sized>(query: &Query, container: &S) -> Vec<VisibilityUpdate> {
    container
        .cards()
        .into_iter()
        .map(|card| {
            VisibilityUpdate::new(card.id().clone(), Visibility::from_match(query.matches(card)))
        })
        .collect()
}

/// Push decisions into the rendering layer
pub fn apply<V: VisibilitySink + ?Sized>(updates: &[VisibilityUpdate], sink: &mut V) {
    for update in updates {
        sink.set_visibility(&update.card, update.visibility);
    }
}

/// Outcome of one evaluation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Cards evaluated
    pub total: usize,
    /// Cards left visible
    pub visible: usize,
    /// Cards hidden
    pub hidden: usize,
    /// Cards with at least one missing searchable field
    pub malformed: usize,
}

impl FilterReport {
    fn record(&mut self, visibility: Visibility, missing: &[CardField]) {
        self.total += 1;
        match visibility {
            Visibility::Visible => self.visible += 1,
            Visibility::Hidden => self.hidden += 1,
        }
        if !missing.is_empty() {
            self.malformed += 1;
        }
    }
}

/// Binds a filter input to a card container
#[derive(Debug, Clone)]
pub struct FilterController<I, S> {
    input: I,
    container: S,
}

impl<I: QuerySource, S: CardSource> FilterController<I, S> {
    pub fn new(input: I, container: S) -> Self {
        Self { input, container }
    }

    /// Read the input's current value as a query
    pub fn query(&self) -> Query {
        Query::new(self.input.current_value())
    }

    /// Pure step only: the decisions an evaluation would apply
    pub fn plan(&self) -> Vec<VisibilityUpdate> {
        plan(&self.query(), &self.container)
    }

    /// Full pass: read the input, plan every card, apply to `sink`
    ///
    /// A card missing some fields is still evaluated on the rest and never
    /// stops the pass.
    pub fn evaluate<V: VisibilitySink + ?Sized>(&self, sink: &mut V) -> FilterReport {
        let query = self.query();
        let cards = self.container.cards();
        let updates = plan(&query, &cards);
        apply(&updates, sink);

        let mut report = FilterReport::default();
        for (card, update) in cards.iter().zip(&updates) {
            let missing = card.missing_fields();
            if !missing.is_empty() {
                debug!(card = %update.card, ?missing, "card is missing searchable fields");
            }
            trace!(card = %update.card, visibility = %update.visibility, "evaluated card");
            report.record(update.visibility, &missing);
        }

        debug!(
            query = query.raw(),
            total = report.total,
            visible = report.visible,
            malformed = report.malformed,
            "filter evaluated"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, CardId};
    use crate::visibility::VisibilityMap;

    fn scenario() -> Vec<Card> {
        vec![
            Card::new("1")
                .with_field(CardField::Title, "Dell Latitude")
                .with_field(CardField::ServiceTag, "SVC001")
                .with_field(CardField::User, "alice")
                .with_field(CardField::ComputerName, "PC01")
                .with_field(CardField::ModelMake, "Dell"),
            Card::new("2")
                .with_field(CardField::Title, "HP EliteBook")
                .with_field(CardField::ServiceTag, "SVC002")
                .with_field(CardField::User, "bob")
                .with_field(CardField::ComputerName, "PC02")
                .with_field(CardField::ModelMake, "HP"),
        ]
    }

    fn visible_ids(cards: &[Card], query: &str) -> Vec<String> {
        let mut display = VisibilityMap::new();
        FilterController::new(query, cards).evaluate(&mut display);
        cards
            .iter()
            .filter(|c| display.get(&c.id).is_visible())
            .map(|c| c.id.to_string())
            .collect()
    }

    #[test]
    fn test_scenario_queries() {
        let cards = scenario();
        assert_eq!(visible_ids(&cards, "dell"), vec!["1"]);
        assert_eq!(visible_ids(&cards, "DeLL"), vec!["1"]);
        assert_eq!(visible_ids(&cards, "pc0"), vec!["1", "2"]);
        assert!(visible_ids(&cards, "zzz").is_empty());
        assert_eq!(visible_ids(&cards, ""), vec!["1", "2"]);
    }

    #[test]
    fn test_plan_preserves_order() {
        let cards = scenario();
        let updates = plan(&Query::new("bob"), &cards);

        assert_eq!(
            updates,
            vec![
                VisibilityUpdate::new(CardId::new("1"), Visibility::Hidden),
                VisibilityUpdate::new(CardId::new("2"), Visibility::Visible),
            ]
        );
    }

    #[test]
    fn test_apply_matches_evaluate() {
        let cards = scenario();
        let controller = FilterController::new("elite", &cards);

        let mut applied = VisibilityMap::new();
        apply(&controller.plan(), &mut applied);

        let mut evaluated = VisibilityMap::new();
        controller.evaluate(&mut evaluated);

        assert_eq!(applied, evaluated);
    }

    /// Container that counts how often it is asked for its cards
    struct CountingGrid {
        cards: Vec<Card>,
        reads: std::cell::Cell<usize>,
    }

    impl CardSource for CountingGrid {
        type Card = Card;

        fn cards(&self) -> Vec<&Card> {
            self.reads.set(self.reads.get() + 1);
            self.cards.iter().collect()
        }
    }

    #[test]
    fn test_evaluate_applies_the_plan() {
        let grid = CountingGrid {
            cards: scenario(),
            reads: std::cell::Cell::new(0),
        };
        let controller = FilterController::new("svc002", &grid);

        let mut log: Vec<VisibilityUpdate> = Vec::new();
        let report = controller.evaluate(&mut log);
        assert_eq!(grid.reads.get(), 1);

        assert_eq!(log, controller.plan());
        assert_eq!(report.visible, 1);
        assert_eq!(report.hidden, 1);
    }

    #[test]
    fn test_malformed_card_does_not_abort_pass() {
        let mut cards = scenario();
        cards.insert(1, Card::new("broken").with_field(CardField::User, "carol"));

        let mut log: Vec<VisibilityUpdate> = Vec::new();
        let report = FilterController::new("carol", &cards).evaluate(&mut log);

        assert_eq!(log.len(), 3);
        assert_eq!(
            report,
            FilterReport {
                total: 3,
                visible: 1,
                hidden: 2,
                malformed: 1,
            }
        );
        assert_eq!(log[1].visibility, Visibility::Visible);
    }

    #[test]
    fn test_container_requeried_each_evaluation() {
        let mut cards = scenario();
        let mut display = VisibilityMap::new();

        FilterController::new("hp", &cards).evaluate(&mut display);
        assert_eq!(display.get(&CardId::new("2")), Visibility::Visible);

        cards.push(Card::new("3").with_field(CardField::ModelMake, "HP"));
        let report = FilterController::new("hp", &cards).evaluate(&mut display);

        assert_eq!(report.total, 3);
        assert_eq!(display.get(&CardId::new("3")), Visibility::Visible);
    }

    #[test]
    fn test_owned_string_input() {
        let cards = scenario();
        let controller = FilterController::new(String::from("alice"), cards);
        assert_eq!(controller.query().normalized(), "ALICE");
        assert_eq!(controller.plan()[0].visibility, Visibility::Visible);
    }
}
