//! serialization support for the payment timeline
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::plan::BillingPlan;
use crate::schedule::{PaymentEntry, PaymentScheduleProjector, ScheduleSummary};
use crate::types::{BillingCycle, PlanId, PlanStatus};

/// serializable view of a plan and its projected timeline
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub plan: PlanView,
    pub as_of: NaiveDate,
    pub entries: Vec<PaymentEntry>,
    pub summary: ScheduleSummary,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanView {
    pub id: PlanId,
    pub price: Money,
    pub currency: String,
    pub billing_cycle: BillingCycle,
    pub status: PlanStatus,
    pub start_date: NaiveDate,
    pub next_payment_date: Option<NaiveDate>,
    pub last_payment_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl PlanView {
    pub fn from_plan(plan: &BillingPlan) -> Self {
        PlanView {
            id: plan.id,
            price: plan.price,
            currency: plan.currency.clone(),
            billing_cycle: plan.billing_cycle,
            status: plan.status,
            start_date: plan.start_date,
            next_payment_date: plan.next_payment_date,
            last_payment_date: plan.last_payment_date,
            notes: plan.notes.clone(),
        }
    }
}

impl ScheduleView {
    pub fn build(plan: &BillingPlan, today: NaiveDate, projector: &PaymentScheduleProjector) -> Self {
        let schedule = projector.project(plan, today);
        let summary = ScheduleSummary::from_schedule(&schedule, plan.price);

        ScheduleView {
            plan: PlanView::from_plan(plan),
            as_of: today,
            entries: schedule.into_entries(),
            summary,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_view_json_layout() {
        let plan = BillingPlan::from_json(
            r#"{"price": "150.00", "billingCycle": "quarterly", "startDate": "2024-01-01"}"#,
        )
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let view = ScheduleView::build(&plan, today, &PaymentScheduleProjector::default());

        let json: Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();
        assert_eq!(json["asOf"], "2024-06-15");
        assert_eq!(json["plan"]["billingCycle"], "quarterly");
        assert_eq!(json["plan"]["status"], "active");
        assert_eq!(json["plan"]["startDate"], "2024-01-01");
        assert!(json["plan"]["lastPaymentDate"].is_null());

        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["date"], "2024-01-01");
        assert_eq!(entries[0]["status"], "overdue");
        assert_eq!(entries[2]["date"], "2024-07-01");
        assert_eq!(entries[2]["status"], "upcoming");

        assert_eq!(json["summary"]["overdueCount"], 2);
        assert_eq!(json["summary"]["nextDue"], "2024-01-01");
        assert_eq!(view.summary.amount_overdue, Money::from_major(300));
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let plan = BillingPlan::builder()
            .start_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
            .build()
            .unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let pretty = ScheduleView::build(&plan, today, &PaymentScheduleProjector::default())
            .to_json_pretty()
            .unwrap();

        let parsed: ScheduleView = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed.entries.len(), 3);
        assert_eq!(parsed.plan.id, plan.id);
    }
}
