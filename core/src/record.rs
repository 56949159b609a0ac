//! Domain types for inventory records.
//!
//! A record is one t-shirt line: a size, a color and a quantity on hand.
//! Identity is assigned by the record store on creation and never changes
//! afterwards, even if an update payload carries one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an inventory record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Creates a new random `RecordId`.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `RecordId` from a UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// The canonical size scale, in display order.
///
/// Sizes are stored as free text at the data layer (the historical behavior);
/// this enum exists for ordering and for the client's filter chips. Anything
/// that does not parse sorts after every enumerated size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Size {
    /// Extra small.
    Xs,
    /// Small.
    S,
    /// Medium.
    M,
    /// Large.
    L,
    /// Extra large.
    Xl,
    /// Double extra large.
    Xxl,
}

impl Size {
    /// All enumerated sizes in rank order.
    pub const ALL: [Self; 6] = [Self::Xs, Self::S, Self::M, Self::L, Self::Xl, Self::Xxl];

    /// Parses a size label, case-insensitively.
    ///
    /// Returns `None` for anything outside the enumerated scale ("3XL",
    /// "medium", ...); callers decide how unenumerated sizes behave.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_ascii_uppercase().as_str() {
            "XS" => Some(Self::Xs),
            "S" => Some(Self::S),
            "M" => Some(Self::M),
            "L" => Some(Self::L),
            "XL" => Some(Self::Xl),
            "XXL" => Some(Self::Xxl),
            _ => None,
        }
    }

    /// Canonical rank within the scale: XS=0 through XXL=5.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Xs => 0,
            Self::S => 1,
            Self::M => 2,
            Self::L => 3,
            Self::Xl => 4,
            Self::Xxl => 5,
        }
    }

    /// The canonical uppercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
            Self::Xxl => "XXL",
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One persisted inventory record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShirtRecord {
    /// Store-generated identity, immutable after creation.
    pub id: RecordId,
    /// Size label. Free text at this layer; see [`Size`].
    pub size: String,
    /// Color label, case-sensitive for grouping.
    pub color: String,
    /// Units on hand. Never negative.
    pub quantity: i32,
}

impl ShirtRecord {
    /// Builds a record from a validated draft and a freshly assigned id.
    #[must_use]
    pub fn from_draft(id: RecordId, draft: ShirtDraft) -> Self {
        Self {
            id,
            size: draft.size,
            color: draft.color,
            quantity: draft.quantity,
        }
    }
}

/// Insert/update payload: a record without identity.
///
/// Identity is the store's to assign. Updates carrying an `id` field on the
/// wire are deserialized into this type, so a payload can never rename a
/// record out from under itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShirtDraft {
    /// Size label.
    pub size: String,
    /// Color label.
    pub color: String,
    /// Units on hand, defaults to 0 when omitted.
    #[serde(default)]
    pub quantity: i32,
}

impl ShirtDraft {
    /// Creates a draft.
    #[must_use]
    pub fn new(size: impl Into<String>, color: impl Into<String>, quantity: i32) -> Self {
        Self {
            size: size.into(),
            color: color.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_roundtrips_through_display() {
        let id = RecordId::new();
        let parsed: RecordId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn size_parse_is_case_insensitive() {
        assert_eq!(Size::parse("xs"), Some(Size::Xs));
        assert_eq!(Size::parse("XXL"), Some(Size::Xxl));
        assert_eq!(Size::parse("xL"), Some(Size::Xl));
    }

    #[test]
    fn size_parse_rejects_unenumerated() {
        assert_eq!(Size::parse("3XL"), None);
        assert_eq!(Size::parse(""), None);
        assert_eq!(Size::parse("medium"), None);
    }

    #[test]
    fn size_ranks_follow_the_scale() {
        let ranks: Vec<u8> = Size::ALL.iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn draft_quantity_defaults_to_zero() {
        let draft: ShirtDraft = serde_json::from_str(r#"{"size":"M","color":"Red"}"#).unwrap();
        assert_eq!(draft.quantity, 0);
    }

    #[test]
    fn draft_ignores_unknown_id_field_on_the_wire() {
        let draft: ShirtDraft =
            serde_json::from_str(r#"{"id":"abc","size":"M","color":"Red","quantity":2}"#).unwrap();
        assert_eq!(draft.size, "M");
        assert_eq!(draft.quantity, 2);
    }
}
