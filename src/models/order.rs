// Order lifecycle types

use serde::{Deserialize, Serialize};

use crate::models::Location;
use crate::validation::{
    LatitudeRange, LongitudeRange, MaxLength, NonNegativeAmount, NotEmpty, PhoneNumber,
    ValidationErrors,
};

/// How the recipient pays for the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Already paid; nothing collected on delivery.
    Paid,
    /// Courier collects cash from the recipient.
    CashOnDelivery,
}

/// Server-side order state, observed by the client only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    Received,
    WaitingForTransport,
    AssignedToTransport,
    CourierAcceptedDelivery,
    NearVendor,
    PickedUp,
    CourierLeftVendor,
    NearCustomer,
    Delivered,
    Cancelled,
    Delayed,
    ReturnedToVendor,
    Failed,
}

/// Reason supplied when cancelling an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancellationReason {
    DeliveryEtaTooLong,
    MistakeError,
    ReasonUnknown,
}

/// Pickup contact; omitted fields fall back to the outlet defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Drop-off contact; all fields are required by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub phone_number: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Recipient {
    /// Create a recipient.
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            location,
            notes: None,
        }
    }
}

/// Special handling instructions for the courier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryTasks {
    pub age_validation_required: bool,
}

/// Payload for creating an order or requesting a fee/time estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Caller-chosen idempotency reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Contact>,
    pub recipient: Recipient,
    pub payment_method: PaymentMethod,
    /// Order value in the outlet's currency.
    pub amount: f64,
    /// Cash the courier collects; only meaningful for cash on delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_from_customer: Option<f64>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cold_bag_needed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_tasks: Option<DeliveryTasks>,
    /// Unix timestamp for pre-ordered pickup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preordered_for: Option<i64>,
}

impl NewOrder {
    /// Create an order payload with the required fields.
    pub fn new(
        recipient: Recipient,
        payment_method: PaymentMethod,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            client_order_id: None,
            sender: None,
            recipient,
            payment_method,
            amount,
            collect_from_customer: None,
            description: description.into(),
            cold_bag_needed: None,
            delivery_tasks: None,
            preordered_for: None,
        }
    }

    /// Set the caller-chosen idempotency reference.
    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }

    /// Set an explicit pickup contact.
    pub fn with_sender(mut self, sender: Contact) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Set the cash amount collected from the recipient.
    pub fn with_collect_from_customer(mut self, amount: f64) -> Self {
        self.collect_from_customer = Some(amount);
        self
    }

    /// Set delivery tasks.
    pub fn with_delivery_tasks(mut self, tasks: DeliveryTasks) -> Self {
        self.delivery_tasks = Some(tasks);
        self
    }

    /// Check the payload against the API's field rules.
    ///
    /// Runs every rule and reports all failures at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(NotEmpty::validate(&self.recipient.name, "recipient.name"));
        errors.check(PhoneNumber::validate(
            &self.recipient.phone_number,
            "recipient.phone_number",
        ));
        errors.check(NotEmpty::validate(
            &self.recipient.location.address,
            "recipient.location.address",
        ));
        errors.check(LatitudeRange::validate(
            self.recipient.location.latitude,
            "recipient.location.latitude",
        ));
        errors.check(LongitudeRange::validate(
            self.recipient.location.longitude,
            "recipient.location.longitude",
        ));
        errors.check(NotEmpty::validate(&self.description, "description"));
        errors.check(MaxLength(200).validate(&self.description, "description"));
        errors.check(NonNegativeAmount::validate(self.amount, "amount"));
        if let Some(collect) = self.collect_from_customer {
            errors.check(NonNegativeAmount::validate(collect, "collect_from_customer"));
        }

        errors.into_result()
    }
}

/// Courier assigned to an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// An order as reported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<Contact>,
    pub recipient: Recipient,
    pub payment_method: PaymentMethod,
    pub amount: f64,
    pub description: String,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<Driver>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Delivery fee estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeEstimate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    pub estimated_delivery_fee: f64,
}

/// Pickup/delivery time estimate, unix timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_pickup_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_time: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> NewOrder {
        NewOrder::new(
            Recipient::new(
                "Merlion",
                "+6500000000",
                Location::new("20 Esplanade Drive", 1.2923742, 103.8486029),
            ),
            PaymentMethod::Paid,
            23.50,
            "Refreshing drink",
        )
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(
            serde_json::to_value(PaymentMethod::CashOnDelivery).unwrap(),
            "CASH_ON_DELIVERY"
        );
        assert_eq!(
            serde_json::to_value(OrderStatus::CourierLeftVendor).unwrap(),
            "COURIER_LEFT_VENDOR"
        );
        assert_eq!(
            serde_json::to_value(CancellationReason::DeliveryEtaTooLong).unwrap(),
            "DELIVERY_ETA_TOO_LONG"
        );
    }

    #[test]
    fn test_new_order_serializes_without_absent_fields() {
        let json = serde_json::to_value(order()).unwrap();
        assert!(json.get("client_order_id").is_none());
        assert!(json.get("sender").is_none());
        assert_eq!(json["payment_method"], "PAID");
        assert_eq!(json["amount"], 23.50);
    }

    #[test]
    fn test_valid_order_passes() {
        assert!(order().validate().is_ok());
    }

    #[test]
    fn test_invalid_order_reports_every_failure() {
        let mut bad = order();
        bad.recipient.name = String::new();
        bad.recipient.phone_number = "call-me".to_string();
        bad.recipient.location.latitude = 95.0;
        bad.amount = -1.0;
        bad.description = "x".repeat(201);

        let errors = bad.validate().unwrap_err();
        let fields: Vec<&str> = errors.errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"recipient.name"));
        assert!(fields.contains(&"recipient.phone_number"));
        assert!(fields.contains(&"recipient.location.latitude"));
        assert!(fields.contains(&"amount"));
        assert!(fields.contains(&"description"));
    }

    #[test]
    fn test_order_deserializes_api_payload() {
        let raw = r#"{
            "order_id": "y0ud-000001",
            "client_order_id": "client-ref-000001",
            "recipient": {
                "name": "Merlion",
                "phone_number": "+6500000000",
                "location": {
                    "address": "20 Esplanade Drive",
                    "latitude": 1.2923742,
                    "longitude": 103.8486029
                }
            },
            "payment_method": "PAID",
            "amount": 23.5,
            "description": "Refreshing drink",
            "status": "NEW",
            "delivery_fee": 8.17,
            "tracking_link": "https://example.com/tracking/y0ud-000001",
            "created_at": 1536802000,
            "updated_at": 1536802000
        }"#;

        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.delivery_fee, Some(8.17));
        assert!(order.driver.is_none());
    }
}
