//! Card types for AssetGrid
//!
//! A card is one rendered asset record. Five of its text fields are
//! searchable; each may be absent, the same way a sub-element may be
//! missing from a rendered card.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card
///
/// Taken verbatim from the asset record's primary key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a CardId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The searchable text fields of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    Title,
    ModelMake,
    ServiceTag,
    User,
    ComputerName,
}

impl CardField {
    /// All searchable fields, in display order
    pub const ALL: [CardField; 5] = [
        CardField::Title,
        CardField::ModelMake,
        CardField::ServiceTag,
        CardField::User,
        CardField::ComputerName,
    ];

    /// Stable CSS class of the sub-element holding this field
    pub fn css_class(&self) -> &'static str {
        match self {
            CardField::Title => "title",
            CardField::ModelMake => "modelmake",
            CardField::ServiceTag => "servicetag",
            CardField::User => "user",
            CardField::ComputerName => "computername1",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            CardField::Title => "title",
            CardField::ModelMake => "model/make",
            CardField::ServiceTag => "service tag",
            CardField::User => "user",
            CardField::ComputerName => "computer name",
        }
    }
}

impl std::fmt::Display for CardField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// What sort of asset a card shows
///
/// Display-only: the kind is never matched against the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    #[default]
    Computer,
    Printer,
    Monitor,
    DockingStation,
}

impl AssetKind {
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Computer => "computer",
            AssetKind::Printer => "printer",
            AssetKind::Monitor => "monitor",
            AssetKind::DockingStation => "docking station",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Anything that can be evaluated as a card
///
/// `field_text` returns `None` when the sub-element is missing.
pub trait CardElement {
    /// Identifier used when applying visibility
    fn id(&self) -> &CardId;

    /// Text content of a searchable field, if present
    fn field_text(&self, field: CardField) -> Option<&str>;

    /// Fields this card lacks
    fn missing_fields(&self) -> Vec<CardField> {
        CardField::ALL
            .into_iter()
            .filter(|field| self.field_text(*field).is_none())
            .collect()
    }
}

impl<T: CardElement + ?Sized> CardElement for &T {
    fn id(&self) -> &CardId {
        (**self).id()
    }

    fn field_text(&self, field: CardField) -> Option<&str> {
        (**self).field_text(field)
    }
}

/// Details shown on a card that are never matched against the query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
}

impl CardDetails {
    /// Present details as (label, value) pairs
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("asset tag", &self.asset_tag),
            ("department", &self.department),
            ("cpu", &self.cpu),
            ("ram", &self.ram),
            ("storage", &self.storage),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

/// One asset card
///
/// Deserialized from an inventory record: unknown keys are rejected and
/// separate `make`/`model` columns are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CardRecord")]
pub struct Card {
    pub id: CardId,
    pub kind: AssetKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_name: Option<String>,
    #[serde(flatten)]
    pub details: CardDetails,
}

impl Card {
    /// Create a card with no fields set
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: CardId::new(id),
            kind: AssetKind::default(),
            title: None,
            model_make: None,
            service_tag: None,
            user: None,
            computer_name: None,
            details: CardDetails::default(),
        }
    }

    /// Set a searchable field, builder style
    pub fn with_field(mut self, field: CardField, text: impl Into<String>) -> Self {
        *self.slot_mut(field) = Some(text.into());
        self
    }

    pub fn with_kind(mut self, kind: AssetKind) -> Self {
        self.kind = kind;
        self
    }

    /// Attach display-only details
    pub fn with_details(mut self, details: CardDetails) -> Self {
        self.details = details;
        self
    }

    fn slot_mut(&mut self, field: CardField) -> &mut Option<String> {
        match field {
            CardField::Title => &mut self.title,
            CardField::ModelMake => &mut self.model_make,
            CardField::ServiceTag => &mut self.service_tag,
            CardField::User => &mut self.user,
            CardField::ComputerName => &mut self.computer_name,
        }
    }
}

/// An asset record as stored in an inventory file
///
/// Asset databases keep make and model as two columns; when `model_make`
/// is absent they are joined into it. A printer's `description` stands in
/// for a missing `title`, and a peripheral's `computer` (the machine it is
/// attached to) for a missing `computer_name`. Record ids may be strings or
/// integer primary keys.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CardRecord {
    id: RecordId,
    #[serde(default)]
    kind: AssetKind,
    title: Option<String>,
    description: Option<String>,
    model_make: Option<String>,
    make: Option<String>,
    model: Option<String>,
    service_tag: Option<String>,
    user: Option<String>,
    computer_name: Option<String>,
    computer: Option<String>,
    asset_tag: Option<String>,
    department: Option<String>,
    cpu: Option<String>,
    ram: Option<String>,
    storage: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordId {
    Text(String),
    Number(u64),
}

impl From<RecordId> for CardId {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Text(text) => CardId(text),
            RecordId::Number(n) => CardId(n.to_string()),
        }
    }
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        let model_make = record
            .model_make
            .or_else(|| join_make_model(record.make, record.model));

        Self {
            id: record.id.into(),
            kind: record.kind,
            title: record.title.or(record.description),
            model_make,
            service_tag: record.service_tag,
            user: record.user,
            computer_name: record.computer_name.or(record.computer),
            details: CardDetails {
                asset_tag: record.asset_tag,
                department: record.department,
                cpu: record.cpu,
                ram: record.ram,
                storage: record.storage,
            },
        }
    }
}

fn join_make_model(make: Option<String>, model: Option<String>) -> Option<String> {
    match (make, model) {
        (Some(make), Some(model)) => Some(format!("{make} {model}")),
        (make, model) => make.or(model),
    }
}

impl CardElement for Card {
    fn id(&self) -> &CardId {
        &self.id
    }

    fn field_text(&self, field: CardField) -> Option<&str> {
        match field {
            CardField::Title => self.title.as_deref(),
            CardField::ModelMake => self.model_make.as_deref(),
            CardField::ServiceTag => self.service_tag.as_deref(),
            CardField::User => self.user.as_deref(),
            CardField::ComputerName => self.computer_name.as_deref(),
        }
    }
}
