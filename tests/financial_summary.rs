use oficina_console_wasm::domain::finance::{FinanceService, FinancialSummary};
use oficina_console_wasm::domain::workshop::{
    Craftsman, Money, OrderStatus, Payment, RecordId, ServiceOrder, Timestamp,
};
use quickcheck_macros::quickcheck;
use serde_json::json;

fn order(id: &str, value: Money, status: OrderStatus) -> ServiceOrder {
    let completed_at = (status == OrderStatus::Concluido)
        .then(|| Timestamp::parse_rfc3339("2024-01-10T12:00:00Z").unwrap());
    ServiceOrder {
        id: RecordId::from(id),
        craftsman_id: RecordId::from("m1"),
        title: format!("Peça {}", id),
        description: None,
        value,
        status,
        deadline: None,
        photo_url: None,
        completed_at,
        viewed: true,
        created_at: None,
    }
}

fn payment(id: &str, value: Money) -> Payment {
    Payment {
        id: RecordId::from(id),
        craftsman_id: RecordId::from("m1"),
        value,
        date: Timestamp::parse_rfc3339("2024-01-15T00:00:00Z").unwrap(),
        note: None,
    }
}

#[test]
fn balance_is_completed_value_minus_paid() {
    let finance = FinanceService::new();
    let orders = vec![
        order("s1", Money::from(500.0), OrderStatus::Concluido),
        order("s2", Money::from(300.0), OrderStatus::Concluido),
    ];
    let payments = vec![payment("p1", Money::from(200.0)), payment("p2", Money::from(100.0))];

    let summary = finance.summary(&orders, &payments);
    assert_eq!(summary.total_completed.value(), 800.0);
    assert_eq!(summary.total_paid.value(), 300.0);
    assert_eq!(summary.balance.value(), 500.0);
}

#[test]
fn empty_inputs_yield_zero_summary() {
    let summary = FinanceService::new().summary(&[], &[]);
    assert_eq!(summary.total_completed.value(), 0.0);
    assert_eq!(summary.total_paid.value(), 0.0);
    assert_eq!(summary.balance.value(), 0.0);
}

#[test]
fn balance_may_go_negative() {
    let finance = FinanceService::new();
    let orders = vec![order("s1", Money::from(100.0), OrderStatus::Concluido)];
    let payments = vec![payment("p1", Money::from(250.0))];

    assert_eq!(finance.summary(&orders, &payments).balance.value(), -150.0);
}

#[test]
fn open_orders_do_not_count_as_realized() {
    let finance = FinanceService::new();
    let orders = vec![
        order("s1", Money::from(500.0), OrderStatus::Concluido),
        order("s2", Money::from(900.0), OrderStatus::Pendente),
        order("s3", Money::from(700.0), OrderStatus::EmAndamento),
    ];

    assert_eq!(finance.summary(&orders, &[]).total_completed.value(), 500.0);
}

#[test]
fn malformed_values_contribute_zero_without_poisoning_the_rest() {
    let finance = FinanceService::new();
    let orders = vec![
        order("s1", Money::from(500.0), OrderStatus::Concluido),
        order("s2", Money::parse_lenient(&json!(null)), OrderStatus::Concluido),
        order("s3", Money::parse_lenient(&json!("")), OrderStatus::Concluido),
        order("s4", Money::parse_lenient(&json!("abc")), OrderStatus::Concluido),
        order("s5", Money::from(300.0), OrderStatus::Concluido),
    ];

    assert_eq!(finance.summary(&orders, &[]).total_completed.value(), 800.0);
}

#[test]
fn craftsman_without_records_gets_a_zero_balance() {
    let finance = FinanceService::new();
    let craftsmen = vec![
        Craftsman { id: RecordId::from("m1"), name: "Ana".to_string() },
        Craftsman { id: RecordId::from("m2"), name: "Bruno".to_string() },
    ];
    let orders = vec![order("s1", Money::from(500.0), OrderStatus::Concluido)];
    let payments = vec![payment("p1", Money::from(100.0))];

    let balances = finance.craftsman_balances(&craftsmen, &orders, &payments);
    assert_eq!(balances.len(), 2);
    assert_eq!(balances[0].summary.balance.value(), 400.0);
    assert_eq!(balances[1].craftsman.name, "Bruno");
    assert_eq!(balances[1].summary, FinancialSummary::EMPTY);
}

#[quickcheck]
fn summary_is_invariant_under_reordering(order_values: Vec<u16>, payment_values: Vec<u16>) -> bool {
    let finance = FinanceService::new();
    let orders: Vec<ServiceOrder> = order_values
        .iter()
        .enumerate()
        .map(|(i, v)| order(&format!("s{}", i), Money::from(*v as f64), OrderStatus::Concluido))
        .collect();
    let payments: Vec<Payment> = payment_values
        .iter()
        .enumerate()
        .map(|(i, v)| payment(&format!("p{}", i), Money::from(*v as f64)))
        .collect();

    let forward = finance.summary(&orders, &payments);

    let mut orders_rev = orders;
    let mut payments_rev = payments;
    orders_rev.reverse();
    payments_rev.reverse();
    let backward = finance.summary(&orders_rev, &payments_rev);

    forward == backward && forward.balance == forward.total_completed - forward.total_paid
}
