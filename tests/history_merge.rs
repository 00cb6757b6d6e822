use oficina_console_wasm::domain::errors::DataIntegrityError;
use oficina_console_wasm::domain::finance::{
    DEFAULT_PAYMENT_NOTE, FinanceService, HistoryKind,
};
use oficina_console_wasm::domain::workshop::{
    Money, OrderStatus, Payment, RecordId, ServiceOrder, Timestamp,
};

fn completed_order(id: &str, title: &str, value: f64, completed_at: &str) -> ServiceOrder {
    ServiceOrder {
        id: RecordId::from(id),
        craftsman_id: RecordId::from("m1"),
        title: title.to_string(),
        description: None,
        value: Money::from(value),
        status: OrderStatus::Concluido,
        deadline: None,
        photo_url: None,
        completed_at: Some(Timestamp::parse_rfc3339(completed_at).unwrap()),
        viewed: true,
        created_at: None,
    }
}

fn payment(id: &str, value: f64, date: &str, note: Option<&str>) -> Payment {
    Payment {
        id: RecordId::from(id),
        craftsman_id: RecordId::from("m1"),
        value: Money::from(value),
        date: Timestamp::parse_rfc3339(date).unwrap(),
        note: note.map(str::to_string),
    }
}

#[test]
fn merges_newest_first_with_default_payment_note() {
    let finance = FinanceService::new();
    let orders = vec![completed_order("s1", "Mesa", 500.0, "2024-01-10")];
    let payments = vec![payment("p1", 200.0, "2024-01-15", None)];

    let feed = finance.merge_history(&orders, &payments).unwrap();
    assert_eq!(feed.len(), 2);

    assert_eq!(feed[0].kind, HistoryKind::Payment);
    assert_eq!(feed[0].description, DEFAULT_PAYMENT_NOTE);
    assert_eq!(feed[0].amount.value(), 200.0);

    assert_eq!(feed[1].kind, HistoryKind::Service);
    assert_eq!(feed[1].description, "Mesa");
    assert_eq!(feed[1].amount.value(), 500.0);
}

#[test]
fn keeps_payment_note_when_present() {
    let finance = FinanceService::new();
    let payments = vec![
        payment("p1", 150.0, "2024-01-05", Some("Adiantamento")),
        payment("p2", 150.0, "2024-01-04", Some("   ")),
    ];

    let feed = finance.merge_history(&[], &payments).unwrap();
    assert_eq!(feed[0].description, "Adiantamento");
    // Whitespace-only notes fall back to the default too.
    assert_eq!(feed[1].description, DEFAULT_PAYMENT_NOTE);
}

#[test]
fn equal_timestamps_keep_services_before_payments() {
    let finance = FinanceService::new();
    let orders = vec![completed_order("s1", "Cadeira", 120.0, "2024-01-10T12:00:00Z")];
    let payments = vec![payment("p1", 120.0, "2024-01-10T12:00:00Z", None)];

    let feed = finance.merge_history(&orders, &payments).unwrap();
    assert_eq!(feed[0].kind, HistoryKind::Service);
    assert_eq!(feed[1].kind, HistoryKind::Payment);
}

#[test]
fn merge_is_pure_and_idempotent() {
    let finance = FinanceService::new();
    let orders = vec![
        completed_order("s1", "Mesa", 500.0, "2024-01-10"),
        completed_order("s2", "Estante", 800.0, "2024-02-01"),
    ];
    let payments = vec![payment("p1", 200.0, "2024-01-15", None)];

    let first = finance.merge_history(&orders, &payments).unwrap();
    let second = finance.merge_history(&orders, &payments).unwrap();
    assert_eq!(first, second);
}

#[test]
fn open_orders_are_excluded_from_history() {
    let finance = FinanceService::new();
    let mut pending = completed_order("s1", "Banco", 90.0, "2024-01-10");
    pending.status = OrderStatus::Pendente;
    pending.completed_at = None;

    let feed = finance.merge_history(&[pending], &[]).unwrap();
    assert!(feed.is_empty());
}

#[test]
fn concluded_order_without_date_is_a_data_integrity_error() {
    let finance = FinanceService::new();
    let mut broken = completed_order("s1", "Mesa", 500.0, "2024-01-10");
    broken.completed_at = None;

    assert_eq!(
        finance.merge_history(&[broken], &[]),
        Err(DataIntegrityError::MissingCompletionDate { order_id: RecordId::from("s1") })
    );
}
