//! The `Property` listing entity.
//!
//! A `Property` is the single persisted record of the service: one hotel
//! or rental listing with an externally supplied numeric id and thirteen
//! descriptive text attributes. Wire names are camelCase to match both
//! the seed JSON document and the REST responses.

use serde::{Deserialize, Serialize};

/// A property listing.
///
/// All descriptive attributes are stored as text, including the
/// currency-like fields (`property_price_per_night`,
/// `property_commission_amount`, `property_cancellation_penalty`) --
/// the service never parses or validates them numerically. A record is
/// immutable once persisted; there is no update or delete path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Externally supplied unique identifier, the primary key.
    pub id: i64,
    /// Display name of the property.
    pub property_name: String,
    /// Location category label (e.g. "beachfront", "downtown").
    pub property_location: String,
    /// City.
    pub property_city: String,
    /// State or province.
    pub property_state: String,
    /// Country.
    pub property_country: String,
    /// Street address.
    pub property_address: String,
    /// Contact phone number.
    pub property_phone_number: String,
    /// Contact email address.
    pub property_email_address: String,
    /// Free-text note on airport proximity.
    pub property_airport_proximity: String,
    /// Free-text description, up to 1000 characters.
    pub property_description: String,
    /// Nightly rate, kept as text.
    pub property_price_per_night: String,
    /// Commission amount, kept as text.
    pub property_commission_amount: String,
    /// Cancellation penalty, kept as text.
    pub property_cancellation_penalty: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let property = Property {
            id: 7,
            property_name: "Test Resort".to_owned(),
            property_city: "Miami".to_owned(),
            ..Property::default()
        };

        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["propertyName"], "Test Resort");
        assert_eq!(value["propertyCity"], "Miami");
        assert_eq!(value["propertyPricePerNight"], "");
    }

    #[test]
    fn deserializes_from_camel_case_document() {
        let json = r#"{
            "id": 1,
            "propertyName": "Harbor Inn",
            "propertyLocation": "waterfront",
            "propertyCity": "Portland",
            "propertyState": "ME",
            "propertyCountry": "USA",
            "propertyAddress": "1 Pier Rd",
            "propertyPhoneNumber": "207-555-0101",
            "propertyEmailAddress": "stay@harborinn.example",
            "propertyAirportProximity": "20 min from PWM",
            "propertyDescription": "Quiet rooms over the water.",
            "propertyPricePerNight": "189.00",
            "propertyCommissionAmount": "18.90",
            "propertyCancellationPenalty": "50.00"
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.id, 1);
        assert_eq!(property.property_name, "Harbor Inn");
        assert_eq!(property.property_price_per_night, "189.00");
    }
}
