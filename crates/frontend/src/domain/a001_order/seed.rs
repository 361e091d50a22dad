//! Embedded demo dataset
//!
//! The browser is constructed from a snapshot; in this build the snapshot is
//! baked into the binary. It goes through the same decode path as any
//! externally supplied one, so a malformed snapshot fails at startup instead
//! of rendering an empty table.

use contracts::domain::a001_order::OrdersSnapshot;

const SEED_JSON: &str = include_str!("seed_orders.json");

pub fn demo_snapshot() -> OrdersSnapshot {
    OrdersSnapshot::from_json(SEED_JSON).expect("embedded orders snapshot must decode")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_snapshot_decodes_and_is_populated() {
        let snapshot = demo_snapshot();
        assert_eq!(snapshot.title, "Order List");
        assert!(snapshot.data.len() > 20);
    }

    #[test]
    fn demo_ids_are_unique() {
        let snapshot = demo_snapshot();
        let mut ids: Vec<_> = snapshot.data.iter().map(|o| o.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), snapshot.data.len());
    }
}
