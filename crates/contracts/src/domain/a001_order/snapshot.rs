use super::aggregate::Order;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Snapshot handed to the order browser at construction time.
///
/// The `data` collection is mandatory: a snapshot without one is an
/// integration bug and must fail loudly instead of degrading to an empty
/// list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersSnapshot {
    /// List title shown in the page header
    pub title: String,
    /// Ordered collection of order records
    pub data: Vec<Order>,
}

impl OrdersSnapshot {
    /// Decode a snapshot from JSON. A missing or null `data` collection is
    /// reported as an error, never substituted with a default.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("orders snapshot requires a `data` collection")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_snapshot_decodes() {
        let json = r##"{
            "title": "Order List",
            "data": [{
                "id": "3f0e014e-7a33-4a24-9c06-2a4f29291a97",
                "order_no": "#CM9801",
                "user": "Natali Craig",
                "project": "Landing Page",
                "address": "Meadow Lane Oakland",
                "date": "Just now",
                "status": "In Progress",
                "status_color": "purple"
            }]
        }"##;
        let snapshot = OrdersSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.title, "Order List");
        assert_eq!(snapshot.data.len(), 1);
        assert_eq!(snapshot.data[0].order_no, "#CM9801");
    }

    #[test]
    fn missing_data_collection_is_an_error() {
        let err = OrdersSnapshot::from_json(r#"{"title": "Order List"}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("`data` collection"));
    }

    #[test]
    fn null_data_collection_is_an_error() {
        assert!(OrdersSnapshot::from_json(r#"{"title": "Order List", "data": null}"#).is_err());
    }

    #[test]
    fn empty_data_collection_is_allowed() {
        let snapshot =
            OrdersSnapshot::from_json(r#"{"title": "Order List", "data": []}"#).unwrap();
        assert!(snapshot.data.is_empty());
    }
}
