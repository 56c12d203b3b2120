use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::schedule::PaymentSchedule;
use crate::types::PaymentStatus;

/// aggregate figures for a projected timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub paid_count: usize,
    pub overdue_count: usize,
    pub upcoming_count: usize,
    pub amount_overdue: Money,
    pub next_due: Option<NaiveDate>,
    pub truncated: bool,
}

impl ScheduleSummary {
    pub fn from_schedule(schedule: &PaymentSchedule, price: Money) -> Self {
        let overdue_count = schedule.count(PaymentStatus::Overdue);

        Self {
            paid_count: schedule.count(PaymentStatus::Paid),
            overdue_count,
            upcoming_count: schedule.count(PaymentStatus::Upcoming),
            amount_overdue: price.times(overdue_count),
            next_due: schedule.next_due().map(|e| e.date),
            truncated: schedule.is_truncated(),
        }
    }

    pub fn is_up_to_date(&self) -> bool {
        self.overdue_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::PaymentScheduleProjector;
    use crate::types::BillingCycle;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_summary_with_overdue() {
        let schedule = PaymentScheduleProjector::default().project_dates(
            ymd(2024, 1, 15),
            BillingCycle::Monthly,
            Some(ymd(2024, 4, 15)),
            ymd(2024, 6, 15),
        );
        let summary = ScheduleSummary::from_schedule(&schedule, Money::from_decimal(dec!(180.00)));

        assert_eq!(summary.paid_count, 4);
        assert_eq!(summary.overdue_count, 2);
        assert_eq!(summary.upcoming_count, 1);
        assert_eq!(summary.amount_overdue, Money::from_major(360));
        assert_eq!(summary.next_due, Some(ymd(2024, 5, 15)));
        assert!(!summary.truncated);
        assert!(!summary.is_up_to_date());
    }

    #[test]
    fn test_summary_up_to_date() {
        let schedule = PaymentScheduleProjector::default().project_dates(
            ymd(2024, 1, 1),
            BillingCycle::Quarterly,
            Some(ymd(2024, 4, 1)),
            ymd(2024, 6, 15),
        );
        let summary = ScheduleSummary::from_schedule(&schedule, Money::from_major(500));

        assert!(summary.is_up_to_date());
        assert_eq!(summary.amount_overdue, Money::ZERO);
        assert_eq!(summary.next_due, Some(ymd(2024, 7, 1)));
    }
}
