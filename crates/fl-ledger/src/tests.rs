//! Unit tests for fl-ledger.

#[cfg(test)]
mod helpers {
    use fl_core::{LocationId, Timestamp};

    use crate::{InventoryLedger, Order, OrderContent};

    pub fn content(weight_kg: f64, volume_m3: f64) -> OrderContent {
        OrderContent { weight_kg, volume_m3, description: String::new() }
    }

    /// Two warehouses and a client; O1 starts at W1, O2 at W2.
    pub fn ledger() -> InventoryLedger {
        let deadline = Timestamp::parse("2025-03-10T12:00:00").unwrap();
        InventoryLedger::new(
            ["Depot", "W1", "W2", "Client"].into_iter().map(LocationId::from).collect(),
            vec![
                Order::new("O1", "W1", "Client", content(100.0, 1.0), deadline),
                Order::new("O2", "W2", "Client", content(40.0, 0.5), deadline),
            ],
        )
        .unwrap()
    }
}

#[cfg(test)]
mod allocation {
    use fl_core::LocationId;

    use super::helpers::ledger;
    use crate::{Fractions, LedgerError};

    #[test]
    fn initial_allocation_is_whole_at_origin() {
        let l = ledger();
        assert_eq!(l.fraction("W1", "O1"), 1.0);
        assert_eq!(l.fraction("W2", "O1"), 0.0);
        assert_eq!(l.fraction("W2", "O2"), 1.0);
        l.check_conservation(&Fractions::new()).unwrap();
    }

    #[test]
    fn content_at_lists_positive_fractions_only() {
        let l = ledger();
        let w1 = l.content_at("W1");
        assert_eq!(w1.len(), 1);
        assert_eq!(w1["O1"], 1.0);
        assert!(l.content_at("Client").is_empty());
        assert!(l.content_at("Nowhere").is_empty());
    }

    #[test]
    fn orders_by_location_covers_every_location() {
        let view = ledger().orders_by_location();
        let names: Vec<&str> = view.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(names, vec!["Depot", "W1", "W2", "Client"]);
        assert!(view[0].1.is_empty());
        assert_eq!(view[1].1.len(), 1);
        assert_eq!(view[1].1[0].0.as_str(), "O1");
    }

    #[test]
    fn zeroed_template_has_every_order() {
        let t = ledger().zeroed_content_template();
        assert_eq!(t.len(), 2);
        assert!(t.values().all(|&f| f == 0.0));
    }

    #[test]
    fn weight_and_volume_totals() {
        let mut l = ledger();
        l.update("W1", "O1", -0.5).unwrap();
        l.update("Client", "O1", 0.5).unwrap();
        assert!((l.weight_at("W1") - 50.0).abs() < 1e-9);
        assert!((l.volume_at("Client") - 0.5).abs() < 1e-9);
        assert_eq!(l.weight_at("Depot"), 0.0);

        let mut onboard = Fractions::new();
        onboard.insert("O2".into(), 0.25);
        assert!((l.weight_of(&onboard) - 10.0).abs() < 1e-9);
        assert!((l.volume_of(&onboard) - 0.125).abs() < 1e-9);
    }

    #[test]
    fn unknown_origin_rejected() {
        let deadline = fl_core::Timestamp(0);
        let result = crate::InventoryLedger::new(
            vec![LocationId::from("W1")],
            vec![crate::Order::new("O1", "W9", "W1", super::helpers::content(1.0, 1.0), deadline)],
        );
        assert!(matches!(result, Err(LedgerError::UnknownLocation(_))));
    }

    #[test]
    fn duplicate_order_rejected() {
        let deadline = fl_core::Timestamp(0);
        let o = crate::Order::new("O1", "W1", "W1", super::helpers::content(1.0, 1.0), deadline);
        let result = crate::InventoryLedger::new(vec![LocationId::from("W1")], vec![o.clone(), o]);
        assert!(matches!(result, Err(LedgerError::Core(_))));
    }

    #[test]
    fn negative_weight_rejected() {
        let o = crate::Order::new(
            "O1",
            "W1",
            "W1",
            super::helpers::content(-1.0, 1.0),
            fl_core::Timestamp(0),
        );
        let result = crate::InventoryLedger::new(vec![LocationId::from("W1")], vec![o]);
        assert!(matches!(result, Err(LedgerError::InvalidOrder { .. })));
    }
}

#[cfg(test)]
mod update {
    use super::helpers::ledger;
    use crate::{Fractions, LedgerError};

    #[test]
    fn moves_keep_sum_to_one() {
        let mut l = ledger();
        let mut onboard = l.zeroed_content_template();

        l.update("W1", "O1", -0.4).unwrap();
        *onboard.get_mut("O1").unwrap() += 0.4;
        l.check_conservation(&onboard).unwrap();

        l.update("Client", "O1", 0.4).unwrap();
        *onboard.get_mut("O1").unwrap() -= 0.4;
        l.check_conservation(&onboard).unwrap();

        assert!((l.allocated_total("O1").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn result_is_clamped_at_zero() {
        let mut l = ledger();
        let after = l.update("W1", "O1", -1.5).unwrap();
        assert_eq!(after, 0.0);
        assert_eq!(l.fraction("W1", "O1"), 0.0);
        assert!(l.orders().all(|o| l.locations().iter().all(|loc| o.fraction_at(loc) >= 0.0)));
    }

    #[test]
    fn unknown_order_is_an_error() {
        let mut l = ledger();
        let before = l.clone();
        assert!(matches!(l.update("W1", "O9", 0.1), Err(LedgerError::UnknownOrder(_))));
        assert_eq!(l, before);
    }

    #[test]
    fn unknown_location_is_an_error() {
        let mut l = ledger();
        let before = l.clone();
        assert!(matches!(l.update("Mars", "O1", 0.1), Err(LedgerError::UnknownLocation(_))));
        assert_eq!(l, before);
    }

    #[test]
    fn non_finite_delta_rejected() {
        let mut l = ledger();
        assert!(matches!(
            l.update("W1", "O1", f64::NAN),
            Err(LedgerError::NonFiniteDelta { .. })
        ));
        assert_eq!(l.fraction("W1", "O1"), 1.0);
    }

    #[test]
    fn conservation_violation_reported() {
        let mut l = ledger();
        l.update("W1", "O1", -0.3).unwrap();
        let err = l.check_conservation(&Fractions::new()).unwrap_err();
        assert!(matches!(err, LedgerError::ConservationViolated { .. }));
    }

    #[test]
    fn clone_is_independent() {
        let original = ledger();
        let mut copy = original.clone();
        copy.update("W1", "O1", -1.0).unwrap();
        assert_eq!(original.fraction("W1", "O1"), 1.0);
        assert_eq!(copy.fraction("W1", "O1"), 0.0);
    }
}
