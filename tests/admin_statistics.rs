use oficina_console_wasm::domain::finance::FinanceService;
use oficina_console_wasm::domain::workshop::{
    Money, OrderStatus, RecordId, ServiceOrder, Timestamp,
};
use quickcheck_macros::quickcheck;

fn order(id: usize, value: f64, status: OrderStatus) -> ServiceOrder {
    let completed_at = (status == OrderStatus::Concluido)
        .then(|| Timestamp::parse_rfc3339("2024-03-01T09:00:00Z").unwrap());
    ServiceOrder {
        id: RecordId::from(format!("s{}", id).as_str()),
        craftsman_id: RecordId::from("m1"),
        title: "Armário".to_string(),
        description: None,
        value: Money::from(value),
        status,
        deadline: None,
        photo_url: None,
        completed_at,
        viewed: false,
        created_at: None,
    }
}

#[test]
fn counts_orders_by_status() {
    use OrderStatus::*;
    let orders: Vec<ServiceOrder> = [Pendente, Pendente, EmAndamento, Concluido, Concluido]
        .iter()
        .enumerate()
        .map(|(i, s)| order(i, 100.0, *s))
        .collect();

    let stats = FinanceService::new().admin_statistics(&orders);
    assert_eq!(stats.total_orders, 5);
    assert_eq!(stats.pending_count, 2);
    assert_eq!(stats.in_progress_count, 1);
    assert_eq!(stats.completed_count, 2);
    assert!(stats.counts_are_consistent());
}

#[test]
fn total_value_includes_open_orders() {
    use OrderStatus::*;
    // Contracted value, not realized value: all five orders count, not just
    // the two concluded ones.
    let orders: Vec<ServiceOrder> = [Pendente, Pendente, EmAndamento, Concluido, Concluido]
        .iter()
        .enumerate()
        .map(|(i, s)| order(i, (i + 1) as f64 * 100.0, *s))
        .collect();

    let stats = FinanceService::new().admin_statistics(&orders);
    assert_eq!(stats.total_value.value(), 1500.0);
}

#[test]
fn empty_shop_has_zeroed_statistics() {
    let stats = FinanceService::new().admin_statistics(&[]);
    assert_eq!(stats.total_orders, 0);
    assert_eq!(stats.total_value.value(), 0.0);
    assert!(stats.counts_are_consistent());
}

#[quickcheck]
fn status_counts_always_sum_to_total(statuses: Vec<u8>) -> bool {
    let orders: Vec<ServiceOrder> = statuses
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let status = match s % 3 {
                0 => OrderStatus::Pendente,
                1 => OrderStatus::EmAndamento,
                _ => OrderStatus::Concluido,
            };
            order(i, 50.0, status)
        })
        .collect();

    FinanceService::new().admin_statistics(&orders).counts_are_consistent()
}
