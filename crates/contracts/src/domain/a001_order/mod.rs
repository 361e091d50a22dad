pub mod aggregate;
pub mod snapshot;

pub use aggregate::{Order, OrderId};
pub use snapshot::OrdersSnapshot;
