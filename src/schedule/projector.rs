use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;

use crate::config::ScheduleConfig;
use crate::errors::Result;
use crate::plan::BillingPlan;
use crate::schedule::{PaymentEntry, PaymentSchedule};
use crate::types::{BillingCycle, PaymentStatus};

/// projects recurring due dates and classifies them against today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaymentScheduleProjector {
    config: ScheduleConfig,
}

impl PaymentScheduleProjector {
    pub fn new(config: ScheduleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// project the plan's timeline as of `today`
    pub fn project(&self, plan: &BillingPlan, today: NaiveDate) -> PaymentSchedule {
        self.project_dates(
            plan.start_date,
            plan.billing_cycle,
            plan.last_payment_date,
            today,
        )
    }

    /// project using the provider's current UTC calendar date as today
    pub fn project_now(&self, plan: &BillingPlan, time: &SafeTimeProvider) -> PaymentSchedule {
        self.project(plan, time.now().date_naive())
    }

    /// walk forward from `start_date` one cycle at a time, stopping after the
    /// first upcoming entry or at `max_entries`
    pub fn project_dates(
        &self,
        start_date: NaiveDate,
        cycle: BillingCycle,
        last_paid: Option<NaiveDate>,
        today: NaiveDate,
    ) -> PaymentSchedule {
        let mut entries = Vec::new();
        let mut current = Some(start_date);

        while let Some(date) = current {
            if entries.len() >= self.config.max_entries {
                break;
            }

            let status = classify(date, last_paid, today);
            entries.push(PaymentEntry { date, status });
            if status == PaymentStatus::Upcoming {
                break;
            }

            current = cycle.advance(date, self.config.month_overflow);
        }

        let schedule = PaymentSchedule::from_entries(entries);
        if schedule.is_truncated() && schedule.len() == self.config.max_entries {
            tracing::warn!(
                %start_date,
                cycle = cycle.as_str(),
                max_entries = self.config.max_entries,
                "payment schedule truncated before reaching an upcoming date"
            );
        }
        tracing::debug!(
            %start_date,
            %today,
            entries = schedule.len(),
            overdue = schedule.count(PaymentStatus::Overdue),
            "projected payment schedule"
        );

        schedule
    }
}

/// paid beats overdue; a date equal to today is overdue, not upcoming
pub fn classify(date: NaiveDate, last_paid: Option<NaiveDate>, today: NaiveDate) -> PaymentStatus {
    match last_paid {
        Some(paid) if date <= paid => PaymentStatus::Paid,
        _ if date <= today => PaymentStatus::Overdue,
        _ => PaymentStatus::Upcoming,
    }
}
