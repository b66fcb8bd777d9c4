//! Comprehensive tests for domain_discount

use domain_discount::rules::{role_based_discount, tenure_based_discount};
use domain_discount::{DiscountService, DiscountServiceImpl, UserRole};
use proptest::prelude::*;
use test_utils::{
    assert_computation_failure, assert_net_approx_eq, assert_net_non_negative, bill_strategy,
    invalid_amount_strategy, role_strategy, BillFixtures, TestBillBuilder,
};

// ============================================================================
// Documented scenarios
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_employee_small_bill() {
        let net = DiscountServiceImpl::new()
            .calculate_net_payable_amount(&BillFixtures::employee_small())
            .unwrap();

        assert_eq!(net.value(), 35.0);
    }

    #[test]
    fn test_affiliate_small_bill() {
        let net = DiscountServiceImpl::new()
            .calculate_net_payable_amount(&BillFixtures::affiliate_small())
            .unwrap();

        assert_eq!(net.value(), 45.0);
    }

    #[test]
    fn test_loyal_customer_small_bill() {
        let net = DiscountServiceImpl::new()
            .calculate_net_payable_amount(&BillFixtures::loyal_customer_small())
            .unwrap();

        assert_eq!(net.value(), 47.5);
    }

    #[test]
    fn test_employee_large_bill() {
        let breakdown = DiscountServiceImpl::new()
            .breakdown(&BillFixtures::employee_large())
            .unwrap();

        assert_eq!(breakdown.role_discount.value(), 60.0);
        assert_eq!(breakdown.secondary_discount.value(), 10.0);
        assert_eq!(breakdown.total_discount.value(), 70.0);
        assert_eq!(breakdown.net.value(), 130.0);
    }

    #[test]
    fn test_groceries_large_bill() {
        let breakdown = DiscountServiceImpl::new()
            .breakdown(&BillFixtures::groceries_large())
            .unwrap();

        assert!(breakdown.role_discount.is_zero());
        assert!(breakdown.tenure_discount.is_zero());
        assert_eq!(breakdown.net.value(), 190.0);
    }

    #[test]
    fn test_new_customer_without_discounts_pays_full_amount() {
        let bill = TestBillBuilder::new().with_amount(99.99).build();
        let net = DiscountServiceImpl::new().calculate_net_payable_amount(&bill).unwrap();

        assert_eq!(net.value(), 99.99);
    }

    #[test]
    fn test_bill_at_threshold_gets_no_secondary_discount() {
        let bill = TestBillBuilder::new()
            .with_amount(100.0)
            .with_role(UserRole::Affiliate)
            .build();
        let net = DiscountServiceImpl::new().calculate_net_payable_amount(&bill).unwrap();

        assert_net_approx_eq(&net, 90.0, 1e-9);
    }

    #[test]
    fn test_loyal_customer_large_bill() {
        let bill = TestBillBuilder::new().with_amount(1000.0).loyal().build();
        let net = DiscountServiceImpl::new().calculate_net_payable_amount(&bill).unwrap();

        assert_net_approx_eq(&net, 900.0, 1e-9);
    }

    #[test]
    fn test_identifiers_do_not_affect_result() {
        let with_ids = TestBillBuilder::new()
            .with_amount(250.0)
            .with_role(UserRole::Employee)
            .with_ids()
            .build();
        let without_ids = TestBillBuilder::new()
            .with_amount(250.0)
            .with_role(UserRole::Employee)
            .build();
        let service = DiscountServiceImpl::new();

        assert_eq!(
            service.calculate_net_payable_amount(&with_ids).unwrap(),
            service.calculate_net_payable_amount(&without_ids).unwrap()
        );
    }
}

// ============================================================================
// Zero and invalid amounts
// ============================================================================

mod edge_case_tests {
    use super::*;

    #[test]
    fn test_zero_amount_for_every_combination() {
        let service = DiscountServiceImpl::new();
        for role in [UserRole::Employee, UserRole::Affiliate, UserRole::Other] {
            for groceries in [false, true] {
                for loyal in [false, true] {
                    let mut builder = TestBillBuilder::new().with_amount(0.0).with_role(role);
                    if groceries {
                        builder = builder.groceries();
                    }
                    if loyal {
                        builder = builder.loyal();
                    }
                    let net = service.calculate_net_payable_amount(&builder.build()).unwrap();
                    assert_eq!(net.value(), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_negative_zero_amount_gives_positive_zero() {
        let service = DiscountServiceImpl::new();
        for role in [UserRole::Employee, UserRole::Other] {
            for groceries in [false, true] {
                let mut builder = TestBillBuilder::new().with_amount(-0.0).with_role(role).loyal();
                if groceries {
                    builder = builder.groceries();
                }
                let net = service.calculate_net_payable_amount(&builder.build()).unwrap();

                assert_eq!(net.value(), 0.0);
                assert!(!net.value().is_sign_negative());
                assert_eq!(serde_json::to_string(&net).unwrap(), r#"{"value":0.0}"#);
            }
        }
    }

    #[test]
    fn test_negative_amount_fails() {
        let bill = TestBillBuilder::new().with_amount(-10.0).build();
        let result = DiscountServiceImpl::new().calculate_net_payable_amount(&bill);

        assert_computation_failure(&result);
    }

    #[test]
    fn test_failure_carries_cause() {
        let bill = TestBillBuilder::new().with_amount(f64::INFINITY).build();
        let error = DiscountServiceImpl::new()
            .calculate_net_payable_amount(&bill)
            .unwrap_err();

        let source = std::error::Error::source(&error).expect("cause should be attached");
        assert!(source.to_string().contains("finite"));
        assert!(error.to_string().contains("Computation failure"));
    }

    #[test]
    fn test_service_usable_as_trait_object() {
        let service: std::sync::Arc<dyn DiscountService> =
            std::sync::Arc::new(DiscountServiceImpl::new());
        let net = service
            .calculate_net_payable_amount(&BillFixtures::employee_small())
            .unwrap();

        assert_eq!(net.value(), 35.0);
    }
}

// ============================================================================
// Invariants
// ============================================================================

proptest! {
    #[test]
    fn net_amount_is_never_negative(bill in bill_strategy()) {
        let net = DiscountServiceImpl::new().calculate_net_payable_amount(&bill).unwrap();
        assert_net_non_negative(&net);
        prop_assert!(!net.value().is_sign_negative());
    }

    #[test]
    fn net_amount_never_exceeds_bill_amount(bill in bill_strategy()) {
        let net = DiscountServiceImpl::new().calculate_net_payable_amount(&bill).unwrap();
        prop_assert!(net.value() <= bill.amount);
    }

    #[test]
    fn role_and_tenure_discounts_are_exclusive(bill in bill_strategy()) {
        let breakdown = DiscountServiceImpl::new().breakdown(&bill).unwrap();
        prop_assert!(breakdown.role_discount.is_zero() || breakdown.tenure_discount.is_zero());
    }

    #[test]
    fn groceries_only_receive_secondary_discount(
        bill in bill_strategy().prop_map(|mut b| { b.is_groceries = true; b })
    ) {
        let breakdown = DiscountServiceImpl::new().breakdown(&bill).unwrap();
        prop_assert!(breakdown.role_discount.is_zero());
        prop_assert!(breakdown.tenure_discount.is_zero());
        prop_assert_eq!(breakdown.total_discount, breakdown.secondary_discount);
    }

    #[test]
    fn secondary_discount_uses_per_hundred_formula(bill in bill_strategy()) {
        let breakdown = DiscountServiceImpl::new().breakdown(&bill).unwrap();
        let expected = if bill.amount > 100.0 { (bill.amount / 100.0) * 5.0 } else { 0.0 };
        prop_assert_eq!(breakdown.secondary_discount.value(), expected);
    }

    #[test]
    fn non_grocery_discount_matches_rules(bill in bill_strategy().prop_map(|mut b| { b.is_groceries = false; b })) {
        let breakdown = DiscountServiceImpl::new().breakdown(&bill).unwrap();
        let amount = core_kernel::Amount::try_new(bill.amount).unwrap();
        let role = role_based_discount(amount, bill.user.role);
        let expected = if role.is_zero() { tenure_based_discount(amount, &bill.user) } else { role };

        prop_assert_eq!(breakdown.role_discount + breakdown.tenure_discount, expected);
    }

    #[test]
    fn invalid_amounts_fail(amount in invalid_amount_strategy(), role in role_strategy()) {
        let bill = TestBillBuilder::new().with_amount(amount).with_role(role).build();
        let result = DiscountServiceImpl::new().calculate_net_payable_amount(&bill);
        assert_computation_failure(&result);
    }
}
