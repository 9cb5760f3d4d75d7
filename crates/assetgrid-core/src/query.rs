//! Filter query normalization and matching

use crate::card::{CardElement, CardField};

/// A normalized, case-insensitive substring query
///
/// The raw text is uppercased once; each field is uppercased at match time.
/// An empty query matches every card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    raw: String,
    normalized: String,
}

impl Query {
    /// Normalize raw input text into a query
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = raw.to_uppercase();
        Self { raw, normalized }
    }

    /// Text as typed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Uppercased text used for matching
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// True when the query matches everything
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Whether a single field's text contains the query
    pub fn matches_text(&self, text: &str) -> bool {
        text.to_uppercase().contains(&self.normalized)
    }

    /// Whether any present searchable field of `card` contains the query
    ///
    /// Missing fields never match. The empty query matches even a card with
    /// no fields at all.
    pub fn matches<C: CardElement + ?Sized>(&self, card: &C) -> bool {
        if self.is_empty() {
            return true;
        }
        CardField::ALL
            .iter()
            .filter_map(|field| card.field_text(*field))
            .any(|text| self.matches_text(text))
    }

    /// First field of `card` that contains the query, if any
    pub fn matching_field<C: CardElement + ?Sized>(&self, card: &C) -> Option<CardField> {
        CardField::ALL.into_iter().find(|field| {
            card.field_text(*field)
                .is_some_and(|text| self.matches_text(text))
        })
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// The filter input: anything holding the current query text
///
/// Read once per evaluation, at trigger time.
pub trait QuerySource {
    fn current_value(&self) -> String;
}

impl QuerySource for str {
    fn current_value(&self) -> String {
        self.to_string()
    }
}

impl QuerySource for String {
    fn current_value(&self) -> String {
        self.clone()
    }
}

impl<T: QuerySource + ?Sized> QuerySource for &T {
    fn current_value(&self) -> String {
        (**self).current_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;

    fn laptop() -> Card {
        Card::new("1")
            .with_field(CardField::Title, "Dell Latitude")
            .with_field(CardField::ModelMake, "Dell")
            .with_field(CardField::ServiceTag, "SVC001")
            .with_field(CardField::User, "alice")
            .with_field(CardField::ComputerName, "PC01")
    }

    #[test]
    fn test_query_is_uppercased() {
        let query = Query::new("dell lat");
        assert_eq!(query.raw(), "dell lat");
        assert_eq!(query.normalized(), "DELL LAT");
    }

    #[test]
    fn test_matches_any_field() {
        let card = laptop();
        assert!(Query::new("latitude").matches(&card));
        assert!(Query::new("svc0").matches(&card));
        assert!(Query::new("ALI").matches(&card));
        assert!(Query::new("pc01").matches(&card));
        assert!(!Query::new("hp").matches(&card));
    }

    #[test]
    fn test_empty_query_matches_card_without_fields() {
        let card = Card::new("bare");
        assert!(Query::new("").matches(&card));
        assert!(!Query::new("a").matches(&card));
    }

    #[test]
    fn test_missing_field_skipped() {
        let card = Card::new("2").with_field(CardField::User, "bob");
        assert!(Query::new("BOB").matches(&card));
        assert!(!Query::new("svc").matches(&card));
    }

    #[test]
    fn test_matching_field_reports_first_hit() {
        let card = laptop();
        assert_eq!(
            Query::new("dell").matching_field(&card),
            Some(CardField::Title)
        );
        assert_eq!(
            Query::new("alice").matching_field(&card),
            Some(CardField::User)
        );
        assert_eq!(Query::new("zzz").matching_field(&card), None);
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let card = Card::new("3").with_field(CardField::User, "Søren Østergård");
        assert!(Query::new("østergÅrd").matches(&card));
    }

    #[test]
    fn test_query_source_impls() {
        let owned = String::from("abc");
        assert_eq!(owned.current_value(), "abc");
        assert_eq!("xyz".current_value(), "xyz");
        assert_eq!((&owned).current_value(), "abc");
    }
}
