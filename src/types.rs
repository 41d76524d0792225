//! Custom MinionType schemas for Minions Venues
//!
//! The four types describe Oktoberfest venue structure and booking rules:
//!
//! ```text
//! venues-tent ─┬─ venues-tent-area
//!              ├─ venues-reservation-rule  (tentId, tentAreaId)
//!              └─ venues-opening-schedule  (tentId)
//! ```
//!
//! References between types are naming conventions only.

use std::sync::LazyLock;

use tracing::debug;

use crate::schema::{FieldDefinition, FieldType, MinionType};

use crate::schema::FieldType::{Boolean, Number, Select, String as Text};

static CUSTOM_TYPES: LazyLock<Vec<MinionType>> = LazyLock::new(|| {
    let types = vec![
        build_tent_type(),
        build_tent_area_type(),
        build_reservation_rule_type(),
        build_opening_schedule_type(),
    ];
    debug!(count = types.len(), "built custom minion types");
    types
});

/// All custom types, in registration order
pub fn custom_types() -> &'static [MinionType] {
    &CUSTOM_TYPES
}

/// An Oktoberfest tent
pub fn tent_type() -> &'static MinionType {
    &CUSTOM_TYPES[0]
}

/// A reservable section within a tent
pub fn tent_area_type() -> &'static MinionType {
    &CUSTOM_TYPES[1]
}

/// Reservation constraints for a tent or area
pub fn reservation_rule_type() -> &'static MinionType {
    &CUSTOM_TYPES[2]
}

/// Daily opening hours for a tent
pub fn opening_schedule_type() -> &'static MinionType {
    &CUSTOM_TYPES[3]
}

fn minion_type(
    id: &str,
    name: &str,
    slug: &str,
    description: &str,
    icon: &str,
    fields: &[(&str, FieldType)],
) -> MinionType {
    MinionType {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        schema: fields
            .iter()
            .map(|(name, field_type)| FieldDefinition::labeled(name, *field_type))
            .collect(),
    }
}

fn build_tent_type() -> MinionType {
    minion_type(
        "venues-tent",
        "Tent",
        "tent",
        "An Oktoberfest tent with its metadata and capacity info.",
        "🎪",
        &[
            ("name", Text),
            ("shortName", Text),
            ("brewer", Text),
            ("totalSeats", Number),
            ("standingCapacity", Number),
            ("website", Text),
            ("reservationUrl", Text),
            ("category", Select),
            ("isLargeTent", Boolean),
            ("status", Select),
        ],
    )
}

fn build_tent_area_type() -> MinionType {
    minion_type(
        "venues-tent-area",
        "Tent area",
        "tent-area",
        "A reservable section within a tent (Boxen, gallery, terrace, etc.).",
        "🪑",
        &[
            ("tentId", Text),
            ("name", Text),
            ("areaType", Select),
            ("seats", Number),
            ("isIndoor", Boolean),
            ("isEvening", Boolean),
            ("minimumSpend", Number),
            ("currency", Text),
            ("notes", Text),
        ],
    )
}

fn build_reservation_rule_type() -> MinionType {
    minion_type(
        "venues-reservation-rule",
        "Reservation rule",
        "reservation-rule",
        "Rules and constraints for reserving a specific tent or area.",
        "📏",
        &[
            ("tentId", Text),
            ("tentAreaId", Text),
            ("minGroupSize", Number),
            ("maxGroupSize", Number),
            ("reservationOpenDate", Text),
            ("reservationCloseDate", Text),
            ("mustOrderFood", Boolean),
            ("depositRequired", Boolean),
            ("depositAmount", Number),
            ("notes", Text),
        ],
    )
}

fn build_opening_schedule_type() -> MinionType {
    minion_type(
        "venues-opening-schedule",
        "Opening schedule",
        "opening-schedule",
        "The daily opening hours and session definitions for a tent.",
        "🕐",
        &[
            ("tentId", Text),
            ("date", Text),
            ("openTime", Text),
            ("closeTime", Text),
            ("sessionType", Select),
            ("isSpecialEvent", Boolean),
            ("eventName", Text),
        ],
    )
}
