//! Data transfer objects for the Pandago REST API.

mod common;
mod order;
mod outlet;

pub use common::{Coordinates, Location};
pub use order::{
    CancellationReason, Contact, DeliveryTasks, Driver, FeeEstimate, NewOrder, Order, OrderStatus,
    PaymentMethod, Recipient, TimeEstimate,
};
pub use outlet::{Outlet, OutletInfo};
