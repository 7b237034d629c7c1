use super::payment::{Amount, PaymentRecord, PaymentStatus};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Aggregated amounts over a set of payment records.
///
/// `paid + pending + failed == total` always holds because every record
/// carries exactly one of the three statuses. Sums cannot overflow since each
/// amount is at most `Amount::MAX`.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
pub struct SummaryTotals {
    pub total: Amount,
    pub paid: Amount,
    pub pending: Amount,
    pub failed: Amount,
    /// Number of records summarized.
    pub count: usize,
}

impl SummaryTotals {
    /// Sum of amounts for one status.
    pub fn for_status(&self, status: PaymentStatus) -> Amount {
        match status {
            PaymentStatus::Paid => self.paid,
            PaymentStatus::Pending => self.pending,
            PaymentStatus::Failed => self.failed,
        }
    }

    /// Percentage of the grand total held by `status`.
    ///
    /// Zero when the total is zero, so an empty list never yields NaN-like output.
    pub fn share(&self, status: PaymentStatus) -> Decimal {
        let total = self.total.value();
        if total.is_zero() {
            return Decimal::ZERO;
        }
        self.for_status(status).value() * Decimal::ONE_HUNDRED / total
    }

    /// Share rendered with one fraction digit, e.g. `75.7%`.
    pub fn share_label(&self, status: PaymentStatus) -> String {
        let mut share = self
            .share(status)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        share.rescale(1);
        format!("{share}%")
    }
}

pub fn summarize(records: &[PaymentRecord]) -> SummaryTotals {
    records.iter().fold(SummaryTotals::default(), |mut acc, record| {
        acc.total += record.amount;
        acc.count += 1;
        match record.status {
            PaymentStatus::Paid => acc.paid += record.amount,
            PaymentStatus::Pending => acc.pending += record.amount,
            PaymentStatus::Failed => acc.failed += record.amount,
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_summary_is_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary, SummaryTotals::default());
        assert_eq!(summary.total, Amount::ZERO);
        assert_eq!(summary.count, 0);
    }

    #[test]
    fn test_share_of_empty_total_is_zero() {
        let summary = summarize(&[]);
        for status in PaymentStatus::ALL {
            assert_eq!(summary.share(status), Decimal::ZERO);
            assert_eq!(summary.share_label(status), "0.0%");
        }
    }

    #[test]
    fn test_summing_largest_amounts_stays_exact() {
        let records: Vec<_> = (0..1000)
            .map(|i| {
                let status = PaymentStatus::ALL[i % 3];
                PaymentRecord::new(format!("PAY-{i}"), "c", "2025-01-01", Amount::MAX, status, "UPI")
            })
            .collect();
        let summary = summarize(&records);

        assert_eq!(summary.total.value(), Amount::MAX.value() * Decimal::from(1000));
        assert_eq!(summary.paid + summary.pending + summary.failed, summary.total);
    }

    #[test]
    fn test_share_label_rounds_to_one_digit() {
        let records = vec![
            PaymentRecord::new("A", "a", "2025-01-01", Amount::new(dec!(2)).unwrap(), PaymentStatus::Paid, "UPI"),
            PaymentRecord::new("B", "b", "2025-01-01", Amount::new(dec!(1)).unwrap(), PaymentStatus::Failed, "UPI"),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.share_label(PaymentStatus::Paid), "66.7%");
        assert_eq!(summary.share_label(PaymentStatus::Failed), "33.3%");
        assert_eq!(summary.share_label(PaymentStatus::Pending), "0.0%");
    }
}
