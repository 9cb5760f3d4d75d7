//! Inventory loading
//!
//! An inventory is the ordered card set a grid renders. It is read once
//! from a JSON file, either a bare array of card records or an object with
//! a `cards` array.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::card::{AssetKind, Card, CardDetails, CardElement, CardField, CardId};
use crate::error::{GridError, GridResult};
use crate::filter::CardSource;

#[derive(Deserialize)]
struct WrappedFile {
    cards: Vec<Card>,
}

/// Ordered collection of cards with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    cards: Vec<Card>,
}

impl Inventory {
    /// Build an inventory, rejecting duplicate ids
    pub fn from_cards(cards: Vec<Card>) -> GridResult<Self> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(&card.id) {
                return Err(GridError::DuplicateCard(card.id.to_string()));
            }
        }
        Ok(Self { cards })
    }

    /// Parse inventory JSON
    ///
    /// Unknown record keys are an error rather than silently dropped.
    pub fn from_json_str(json: &str) -> GridResult<Self> {
        let cards = if json.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<Card>>(json)?
        } else {
            serde_json::from_str::<WrappedFile>(json)?.cards
        };
        Self::from_cards(cards)
    }

    /// Read an inventory file
    pub fn load(path: &Path) -> GridResult<Self> {
        if !path.exists() {
            return Err(GridError::InventoryNotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path)?;
        let inventory = Self::from_json_str(&json)?;
        info!("Loaded {} cards from {:?}", inventory.len(), path);
        Ok(inventory)
    }

    /// Read an inventory file without blocking the UI thread
    pub async fn load_async(path: &Path) -> GridResult<Self> {
        if !tokio::fs::try_exists(path).await? {
            return Err(GridError::InventoryNotFound(path.to_path_buf()));
        }
        let json = tokio::fs::read_to_string(path).await?;
        let inventory = Self::from_json_str(&json)?;
        info!("Loaded {} cards from {:?}", inventory.len(), path);
        Ok(inventory)
    }

    /// Small built-in inventory used when no file is configured
    pub fn sample() -> Self {
        let cards = vec![
            Card::new("1")
                .with_field(CardField::Title, "Dell Latitude")
                .with_field(CardField::ModelMake, "Dell")
                .with_field(CardField::ServiceTag, "SVC001")
                .with_field(CardField::User, "alice")
                .with_field(CardField::ComputerName, "PC01")
                .with_details(CardDetails {
                    asset_tag: Some("AT-1001".to_string()),
                    department: Some("Finance".to_string()),
                    ram: Some("16GB".to_string()),
                    ..CardDetails::default()
                }),
            Card::new("2")
                .with_field(CardField::Title, "HP EliteBook")
                .with_field(CardField::ModelMake, "HP")
                .with_field(CardField::ServiceTag, "SVC002")
                .with_field(CardField::User, "bob")
                .with_field(CardField::ComputerName, "PC02")
                .with_details(CardDetails {
                    asset_tag: Some("AT-1002".to_string()),
                    department: Some("Engineering".to_string()),
                    cpu: Some("i7-1185G7".to_string()),
                    ..CardDetails::default()
                }),
            Card::new("3")
                .with_field(CardField::Title, "Lenovo ThinkPad")
                .with_field(CardField::ModelMake, "Lenovo")
                .with_field(CardField::ServiceTag, "SVC003")
                .with_field(CardField::ComputerName, "PC03"),
            Card::new("4")
                .with_kind(AssetKind::Monitor)
                .with_field(CardField::Title, "Dell P2419H")
                .with_field(CardField::ModelMake, "Dell")
                .with_field(CardField::ServiceTag, "SVC004")
                .with_field(CardField::ComputerName, "PC01")
                .with_details(CardDetails {
                    asset_tag: Some("AT-2001".to_string()),
                    ..CardDetails::default()
                }),
        ];
        debug!("Using built-in sample inventory");
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards lacking at least one searchable field
    pub fn malformed(&self) -> Vec<(&Card, Vec<CardField>)> {
        self.cards
            .iter()
            .map(|card| (card, card.missing_fields()))
            .filter(|(_, missing)| !missing.is_empty())
            .collect()
    }
}

impl CardSource for Inventory {
    type Card = Card;

    fn cards(&self) -> Vec<&Card> {
        self.cards.iter().collect()
    }
}
