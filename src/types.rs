use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// unique identifier for a billing plan
pub type PlanId = Uuid;

/// recurrence interval between scheduled payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Quarterly => "quarterly",
            BillingCycle::Annual => "annual",
        }
    }

    /// unrecognized values advance monthly
    pub fn from_string(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "quarterly" => BillingCycle::Quarterly,
            "annual" => BillingCycle::Annual,
            _ => BillingCycle::Monthly,
        }
    }

    /// number of calendar months between due dates
    pub fn months(&self) -> u32 {
        match self {
            BillingCycle::Monthly => 1,
            BillingCycle::Quarterly => 3,
            BillingCycle::Annual => 12,
        }
    }
}

/// plan lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    #[default]
    Active,
    Paused,
    Cancelled,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "active",
            PlanStatus::Paused => "paused",
            PlanStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Some(PlanStatus::Active),
            "paused" => Some(PlanStatus::Paused),
            "cancelled" | "canceled" => Some(PlanStatus::Cancelled),
            _ => None,
        }
    }
}

/// classification of a projected due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// on or before the last confirmed payment
    Paid,
    /// due on or before today and not covered by a payment
    Overdue,
    /// due after today
    Upcoming,
}

/// rule applied when the target month lacks the source day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MonthOverflow {
    /// spill the extra days into the following month (Jan 31 -> Mar 2/3)
    #[default]
    Carry,
    /// pin to the last day of the target month (Jan 31 -> Feb 28/29)
    Clamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_fallback() {
        assert_eq!(BillingCycle::from_string("quarterly"), BillingCycle::Quarterly);
        assert_eq!(BillingCycle::from_string(" Annual "), BillingCycle::Annual);
        assert_eq!(BillingCycle::from_string("monthly"), BillingCycle::Monthly);
        assert_eq!(BillingCycle::from_string("weekly"), BillingCycle::Monthly);
        assert_eq!(BillingCycle::from_string(""), BillingCycle::Monthly);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(PlanStatus::parse("ACTIVE"), Some(PlanStatus::Active));
        assert_eq!(PlanStatus::parse("canceled"), Some(PlanStatus::Cancelled));
        assert_eq!(PlanStatus::parse("archived"), None);
    }

    #[test]
    fn test_payment_status_serializes_lowercase() {
        let json = serde_json::to_string(&PaymentStatus::Overdue).unwrap();
        assert_eq!(json, "\"overdue\"");
    }
}
