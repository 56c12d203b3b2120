use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::{format_date, parse_date, parse_optional_date};
use crate::config::ScheduleConfig;
use crate::decimal::Money;
use crate::errors::{Result, ScheduleError};
use crate::events::{Event, EventStore};
use crate::types::{BillingCycle, PlanId, PlanStatus};

pub const DEFAULT_CURRENCY: &str = "BRL";

/// plan row as handed over by the data layer, every field still a string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPlanRecord {
    pub id: Option<String>,
    pub price: Option<String>,
    pub currency: Option<String>,
    pub billing_cycle: String,
    pub status: Option<String>,
    pub start_date: String,
    pub next_payment_date: Option<String>,
    pub last_payment_date: Option<String>,
    pub notes: Option<String>,
}

/// validated recurring billing plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BillingPlanRecord", into = "BillingPlanRecord")]
pub struct BillingPlan {
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

impl BillingPlan {
    pub fn builder() -> BillingPlanBuilder {
        BillingPlanBuilder::new()
    }

    /// parse and validate a record serialized as json
    pub fn from_json(json: &str) -> Result<Self> {
        let record: BillingPlanRecord = serde_json::from_str(json)?;
        Self::try_from(record)
    }

    pub fn to_record(&self) -> BillingPlanRecord {
        BillingPlanRecord {
            id: Some(self.id.to_string()),
            price: Some(self.price.to_string()),
            currency: Some(self.currency.clone()),
            billing_cycle: self.billing_cycle.as_str().to_string(),
            status: Some(self.status.as_str().to_string()),
            start_date: format_date(self.start_date),
            next_payment_date: self.next_payment_date.map(format_date),
            last_payment_date: self.last_payment_date.map(format_date),
            notes: self.notes.clone(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == PlanStatus::Active
    }

    /// first scheduled date not yet covered by a payment
    pub fn next_unpaid_date(&self, config: &ScheduleConfig) -> Result<NaiveDate> {
        let Some(last_paid) = self.last_payment_date else {
            return Ok(self.start_date);
        };

        // due dates strictly increase, so this ends once one passes `last_paid`
        let mut date = self.start_date;
        while date <= last_paid {
            date = self
                .billing_cycle
                .advance(date, config.month_overflow)
                .ok_or_else(|| {
                    ScheduleError::invalid_field("lastPaymentDate", "no due date follows it in the calendar range")
                })?;
        }

        Ok(date)
    }

    /// mark the next unpaid due date as paid and move the plan forward one cycle
    pub fn record_payment(
        &mut self,
        config: &ScheduleConfig,
        events: &mut EventStore,
        time: &SafeTimeProvider,
    ) -> Result<NaiveDate> {
        if !self.is_active() {
            return Err(ScheduleError::PlanNotActive {
                status: self.status,
            });
        }

        let covered = self.next_unpaid_date(config)?;
        let next = self.billing_cycle.advance(covered, config.month_overflow);

        self.last_payment_date = Some(covered);
        self.next_payment_date = next;

        tracing::info!(
            plan_id = %self.id,
            covered = %covered,
            amount = %self.price,
            "recorded plan payment"
        );

        events.emit(Event::PaymentRecorded {
            plan_id: self.id,
            amount: self.price,
            covers_due_date: covered,
            next_payment_date: next,
            timestamp: time.now(),
        });

        Ok(covered)
    }

    pub fn set_status(&mut self, new_status: PlanStatus, events: &mut EventStore, time: &SafeTimeProvider) {
        if self.status == new_status {
            return;
        }

        let old_status = self.status;
        self.status = new_status;

        tracing::info!(
            plan_id = %self.id,
            from = old_status.as_str(),
            to = new_status.as_str(),
            "plan status changed"
        );

        events.emit(Event::StatusChanged {
            plan_id: self.id,
            old_status,
            new_status,
            timestamp: time.now(),
        });
    }
}

impl From<BillingPlan> for BillingPlanRecord {
    fn from(plan: BillingPlan) -> Self {
        plan.to_record()
    }
}

impl TryFrom<BillingPlanRecord> for BillingPlan {
    type Error = ScheduleError;

    fn try_from(record: BillingPlanRecord) -> Result<Self> {
        let id = match non_blank(record.id.as_deref()) {
            Some(raw) => Uuid::parse_str(raw)
                .map_err(|e| ScheduleError::invalid_field("id", e.to_string()))?,
            None => Uuid::new_v4(),
        };

        let price = match non_blank(record.price.as_deref()) {
            Some(raw) => Money::from_str_exact(raw)
                .map_err(|_| ScheduleError::invalid_field("price", format!("{raw:?} is not a decimal amount")))?,
            None => return Err(ScheduleError::invalid_field("price", "is required")),
        };
        validate_price(price)?;

        let currency = parse_currency(record.currency.as_deref())?;

        let status = match non_blank(record.status.as_deref()) {
            Some(raw) => PlanStatus::parse(raw)
                .ok_or_else(|| ScheduleError::invalid_field("status", format!("unknown status {raw:?}")))?,
            None => PlanStatus::Active,
        };

        Ok(Self {
            id,
            price,
            currency,
            billing_cycle: BillingCycle::from_string(&record.billing_cycle),
            status,
            start_date: parse_date("startDate", &record.start_date)?,
            next_payment_date: parse_optional_date("nextPaymentDate", record.next_payment_date.as_deref())?,
            last_payment_date: parse_optional_date("lastPaymentDate", record.last_payment_date.as_deref())?,
            notes: non_blank(record.notes.as_deref()).map(str::to_string),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn validate_price(price: Money) -> Result<()> {
    if price.is_negative() {
        return Err(ScheduleError::InvalidAmount { amount: price });
    }
    Ok(())
}

fn parse_currency(value: Option<&str>) -> Result<String> {
    match non_blank(value) {
        None => Ok(DEFAULT_CURRENCY.to_string()),
        Some(code) if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) => {
            Ok(code.to_ascii_uppercase())
        }
        Some(code) => Err(ScheduleError::invalid_field(
            "currency",
            format!("{code:?} is not a three-letter code"),
        )),
    }
}

/// builder for plans constructed from already typed values
#[derive(Debug, Default)]
pub struct BillingPlanBuilder {
    id: Option<PlanId>,
    price: Option<Money>,
    currency: Option<String>,
    billing_cycle: BillingCycle,
    status: PlanStatus,
    start_date: Option<NaiveDate>,
    next_payment_date: Option<NaiveDate>,
    last_payment_date: Option<NaiveDate>,
    notes: Option<String>,
}

impl BillingPlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: PlanId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn billing_cycle(mut self, cycle: BillingCycle) -> Self {
        self.billing_cycle = cycle;
        self
    }

    pub fn status(mut self, status: PlanStatus) -> Self {
        self.status = status;
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn next_payment_date(mut self, date: NaiveDate) -> Self {
        self.next_payment_date = Some(date);
        self
    }

    pub fn last_payment_date(mut self, date: NaiveDate) -> Self {
        self.last_payment_date = Some(date);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn build(self) -> Result<BillingPlan> {
        let start_date = self
            .start_date
            .ok_or_else(|| ScheduleError::invalid_field("startDate", "is required"))?;

        let price = self.price.unwrap_or(Money::ZERO);
        validate_price(price)?;

        Ok(BillingPlan {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            price,
            currency: parse_currency(self.currency.as_deref())?,
            billing_cycle: self.billing_cycle,
            status: self.status,
            start_date,
            next_payment_date: self.next_payment_date,
            last_payment_date: self.last_payment_date,
            notes: self.notes,
        })
    }
}
