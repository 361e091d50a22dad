use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for the Order record
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order record
///
/// `status` is an open set of strings: the engine tolerates any value and the
/// UI palette is free to define its own closed list. `date` is a display
/// string, either a relative phrase ("Just now", "2 hours ago", "Yesterday")
/// or an absolute date ("Feb 2, 2023").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier, stable for the record's lifetime (selection key)
    pub id: OrderId,
    /// Display number, "#CM" + decimal digits (e.g. "#CM9801")
    pub order_no: String,
    /// Customer name
    pub user: String,
    /// Project name
    pub project: String,
    /// Delivery address
    pub address: String,
    /// Display date (relative phrase or absolute date string)
    pub date: String,
    /// Status label
    pub status: String,
    /// Status color tag consumed by the UI palette (not validated here)
    pub status_color: String,
}

impl Order {
    /// Numeric part of the display number, used as the sort key.
    ///
    /// Strips the fixed 3-char "#CM" prefix and parses the remaining digits;
    /// a malformed number yields 0 and sorts ahead of well-formed ones.
    pub fn order_no_numeric(&self) -> i64 {
        self.order_no
            .get(3..)
            .and_then(|digits| digits.parse::<i64>().ok())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(no: &str) -> Order {
        Order {
            id: OrderId::new_v4(),
            order_no: no.to_string(),
            user: "Natali Craig".to_string(),
            project: "Landing Page".to_string(),
            address: "Meadow Lane Oakland".to_string(),
            date: "Just now".to_string(),
            status: "In Progress".to_string(),
            status_color: "purple".to_string(),
        }
    }

    #[test]
    fn numeric_order_no_parses_digits_after_prefix() {
        assert_eq!(order("#CM9801").order_no_numeric(), 9801);
        assert_eq!(order("#CM001").order_no_numeric(), 1);
    }

    #[test]
    fn malformed_order_no_falls_back_to_zero() {
        assert_eq!(order("#CM").order_no_numeric(), 0);
        assert_eq!(order("#CMabc").order_no_numeric(), 0);
        assert_eq!(order("").order_no_numeric(), 0);
    }

    #[test]
    fn order_id_round_trips_through_string() {
        let id = OrderId::new_v4();
        assert_eq!(OrderId::from_string(&id.as_string()), Ok(id));
        assert!(OrderId::from_string("not-a-uuid").is_err());
    }
}
