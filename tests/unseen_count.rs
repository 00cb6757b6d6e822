use oficina_console_wasm::domain::finance::FinanceService;
use oficina_console_wasm::domain::workshop::{
    Money, OrderStatus, RecordId, ServiceOrder,
};

fn order(id: &str, craftsman: &str, viewed: bool) -> ServiceOrder {
    ServiceOrder {
        id: RecordId::from(id),
        craftsman_id: RecordId::from(craftsman),
        title: "Prateleira".to_string(),
        description: None,
        value: Money::from(100.0),
        status: OrderStatus::Pendente,
        deadline: None,
        photo_url: None,
        completed_at: None,
        viewed,
        created_at: None,
    }
}

#[test]
fn counts_unseen_orders_for_the_craftsman() {
    let orders = vec![
        order("s1", "m1", false),
        order("s2", "m1", true),
        order("s3", "m1", false),
    ];

    assert_eq!(FinanceService::new().unseen_count(&orders, &RecordId::from("m1")), 2);
}

#[test]
fn other_craftsmen_orders_are_ignored() {
    let orders = vec![
        order("s1", "m1", false),
        order("s2", "m2", false),
        order("s3", "m2", false),
    ];

    let finance = FinanceService::new();
    assert_eq!(finance.unseen_count(&orders, &RecordId::from("m1")), 1);
    assert_eq!(finance.unseen_count(&orders, &RecordId::from("m2")), 2);
    assert_eq!(finance.unseen_count(&orders, &RecordId::from("m3")), 0);
}

#[test]
fn all_seen_means_zero_badge() {
    let orders = vec![order("s1", "m1", true), order("s2", "m1", true)];
    assert_eq!(FinanceService::new().unseen_count(&orders, &RecordId::from("m1")), 0);
}
