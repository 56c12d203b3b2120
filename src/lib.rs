pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod plan;
pub mod schedule;
pub mod serialization;
pub mod types;

// re-export key types
pub use config::{ScheduleConfig, DEFAULT_MAX_ENTRIES};
pub use decimal::Money;
pub use errors::{Result, ScheduleError};
pub use events::{Event, EventStore};
pub use plan::{BillingPlan, BillingPlanBuilder, BillingPlanRecord};
pub use schedule::{PaymentEntry, PaymentSchedule, PaymentScheduleProjector, ScheduleSummary};
pub use serialization::{PlanView, ScheduleView};
pub use types::{BillingCycle, MonthOverflow, PaymentStatus, PlanId, PlanStatus};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;

use chrono::NaiveDate;

/// project a plan with the default configuration (120-entry cap, carry overflow)
pub fn payment_schedule(plan: &BillingPlan, today: NaiveDate) -> PaymentSchedule {
    PaymentScheduleProjector::default().project(plan, today)
}
