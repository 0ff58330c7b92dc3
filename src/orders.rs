//! Order lifecycle operations.

use http::Method;
use serde::Serialize;

use crate::models::{CancellationReason, Coordinates, FeeEstimate, NewOrder, Order, TimeEstimate};
use crate::{Pandago, RequestOptions, Result};

#[derive(Serialize)]
struct CancelBody {
    reason: CancellationReason,
}

/// Order operations, obtained from [`Pandago::orders`].
pub struct OrdersApi<'a> {
    client: &'a Pandago,
}

impl<'a> OrdersApi<'a> {
    pub(crate) fn new(client: &'a Pandago) -> Self {
        Self { client }
    }

    /// Submit a new order. The payload is validated before any network call.
    pub async fn create(&self, order: &NewOrder) -> Result<Order> {
        order.validate()?;
        self.client
            .authorized_request_with_body(Method::POST, "/orders", order, RequestOptions::default())
            .await?
            .json()
    }

    /// Fetch the current state of an order.
    pub async fn get(&self, order_id: &str) -> Result<Order> {
        self.client
            .authorized_request(
                Method::GET,
                &format!("/orders/{order_id}"),
                RequestOptions::default(),
            )
            .await?
            .json()
    }

    /// Cancel an order, stating a reason. Whether the cancellation is still
    /// possible is decided server-side.
    pub async fn cancel(&self, order_id: &str, reason: CancellationReason) -> Result<()> {
        self.client
            .authorized_request_with_body(
                Method::DELETE,
                &format!("/orders/{order_id}"),
                &CancelBody { reason },
                RequestOptions::default(),
            )
            .await?;
        Ok(())
    }

    /// Current courier coordinates for an active order.
    pub async fn coordinates(&self, order_id: &str) -> Result<Coordinates> {
        self.client
            .authorized_request(
                Method::GET,
                &format!("/orders/{order_id}/coordinates"),
                RequestOptions::default(),
            )
            .await?
            .json()
    }

    /// Estimate the delivery fee for a prospective order.
    pub async fn estimate_fee(&self, order: &NewOrder) -> Result<FeeEstimate> {
        order.validate()?;
        self.client
            .authorized_request_with_body(
                Method::POST,
                "/orders/fee",
                order,
                RequestOptions::default(),
            )
            .await?
            .json()
    }

    /// Estimate pickup and delivery times for a prospective order.
    pub async fn estimate_time(&self, order: &NewOrder) -> Result<TimeEstimate> {
        order.validate()?;
        self.client
            .authorized_request_with_body(
                Method::POST,
                "/orders/time",
                order,
                RequestOptions::default(),
            )
            .await?
            .json()
    }
}
