mod common;

use common::payment;
use paydesk::domain::payment::{Amount, PaymentStatus};
use paydesk::domain::summary::summarize;
use paydesk::infrastructure::in_memory::sample_payments;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_sample_summary() {
    let summary = summarize(&sample_payments());

    assert_eq!(summary.total.value(), dec!(5086.50));
    assert_eq!(summary.paid.value(), dec!(3851.00));
    assert_eq!(summary.paid + summary.pending + summary.failed, summary.total);
    assert_eq!(summary.pending.value(), dec!(890.50));
    assert_eq!(summary.failed.value(), dec!(345.00));
    assert_eq!(summary.count, 5);
}

#[test]
fn test_sample_share_labels() {
    let summary = summarize(&sample_payments());

    assert_eq!(summary.share_label(PaymentStatus::Paid), "75.7%");
    assert_eq!(summary.share_label(PaymentStatus::Pending), "17.5%");
    assert_eq!(summary.share_label(PaymentStatus::Failed), "6.8%");
}

#[test]
fn test_empty_summary_has_zero_shares() {
    let summary = summarize(&[]);

    assert_eq!(summary.total, Amount::ZERO);
    assert_eq!(summary.paid, Amount::ZERO);
    assert_eq!(summary.pending, Amount::ZERO);
    assert_eq!(summary.failed, Amount::ZERO);
    for status in PaymentStatus::ALL {
        assert_eq!(summary.share(status), Decimal::ZERO);
    }
}

#[test]
fn test_all_zero_amounts_have_zero_shares() {
    let records = vec![payment("A", "a", dec!(0), PaymentStatus::Paid)];
    let summary = summarize(&records);

    assert_eq!(summary.count, 1);
    assert_eq!(summary.share(PaymentStatus::Paid), Decimal::ZERO);
}

#[test]
fn test_status_totals_add_up_to_total() {
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let len = rng.gen_range(1..40);
        let records: Vec<_> = (0..len)
            .map(|i| {
                let cents: i64 = rng.gen_range(0..10_000_000);
                let status = PaymentStatus::ALL[rng.gen_range(0..3)];
                payment(&format!("PAY-{i}"), "c", Decimal::new(cents, 2), status)
            })
            .collect();

        let expected: Decimal = records.iter().map(|r| r.amount.value()).sum();
        let summary = summarize(&records);

        assert_eq!(summary.total.value(), expected);
        assert_eq!(summary.paid + summary.pending + summary.failed, summary.total);
    }
}
