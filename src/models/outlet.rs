// Outlet (vendor pickup point) types

use serde::{Deserialize, Serialize};

use crate::validation::{
    LatitudeRange, LongitudeRange, NotEmpty, PhoneNumber, ValidationErrors,
};

/// Outlet payload for create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlet {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub phone_number: String,
    /// ISO 4217 currency code of the outlet's market.
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halal: Option<bool>,
    /// Email addresses granted access to the outlet in the portal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_user: Option<Vec<String>>,
}

impl Outlet {
    /// Check the payload against the API's field rules.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(NotEmpty::validate(&self.name, "name"));
        errors.check(NotEmpty::validate(&self.address, "address"));
        errors.check(NotEmpty::validate(&self.city, "city"));
        errors.check(NotEmpty::validate(&self.currency, "currency"));
        errors.check(PhoneNumber::validate(&self.phone_number, "phone_number"));
        errors.check(LatitudeRange::validate(self.latitude, "latitude"));
        errors.check(LongitudeRange::validate(self.longitude, "longitude"));

        errors.into_result()
    }
}

/// An outlet as reported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutletInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_vendor_id: Option<String>,
    #[serde(flatten)]
    pub outlet: Outlet,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlet() -> Outlet {
        Outlet {
            name: "Chatime Bugis".to_string(),
            address: "200 Victoria Street".to_string(),
            latitude: 1.2999497,
            longitude: 103.8554916,
            city: "Singapore".to_string(),
            phone_number: "+6567338388".to_string(),
            currency: "SGD".to_string(),
            locale: Some("en-SG".to_string()),
            description: Some("Bubble tea".to_string()),
            street: None,
            street_number: None,
            building: None,
            district: None,
            postal_code: Some("188021".to_string()),
            rider_instructions: None,
            halal: Some(false),
            add_user: None,
        }
    }

    #[test]
    fn test_valid_outlet_passes() {
        assert!(outlet().validate().is_ok());
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        let mut bad = outlet();
        bad.latitude = -100.0;
        bad.phone_number = "shop".to_string();
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.errors.len(), 2);
    }

    #[test]
    fn test_outlet_info_flattens_fields() {
        let raw = r#"{
            "client_vendor_id": "outlet-0001",
            "name": "Chatime Bugis",
            "address": "200 Victoria Street",
            "latitude": 1.2999497,
            "longitude": 103.8554916,
            "city": "Singapore",
            "phone_number": "+6567338388",
            "currency": "SGD"
        }"#;

        let info: OutletInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.client_vendor_id.as_deref(), Some("outlet-0001"));
        assert_eq!(info.outlet.name, "Chatime Bugis");
    }
}
