//! Outlet lifecycle operations.

use http::Method;

use crate::models::{Outlet, OutletInfo};
use crate::{Pandago, RequestOptions, Result};

/// Outlet operations, obtained from [`Pandago::outlets`].
pub struct OutletsApi<'a> {
    client: &'a Pandago,
}

impl<'a> OutletsApi<'a> {
    pub(crate) fn new(client: &'a Pandago) -> Self {
        Self { client }
    }

    /// Create or update an outlet under a caller-chosen vendor id.
    ///
    /// The endpoint is an upsert: the same call creates a missing outlet and
    /// replaces an existing one.
    pub async fn upsert(&self, client_vendor_id: &str, outlet: &Outlet) -> Result<OutletInfo> {
        outlet.validate()?;
        self.client
            .authorized_request_with_body(
                Method::PUT,
                &format!("/outlets/{client_vendor_id}"),
                outlet,
                RequestOptions::default(),
            )
            .await?
            .json()
    }

    /// Fetch an outlet by vendor id.
    pub async fn get(&self, client_vendor_id: &str) -> Result<OutletInfo> {
        self.client
            .authorized_request(
                Method::GET,
                &format!("/outlets/{client_vendor_id}"),
                RequestOptions::default(),
            )
            .await?
            .json()
    }
}
