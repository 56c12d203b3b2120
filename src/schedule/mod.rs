pub mod projector;
pub mod summary;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::PaymentStatus;

pub use projector::PaymentScheduleProjector;
pub use summary::ScheduleSummary;

/// one projected due date with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub date: NaiveDate,
    pub status: PaymentStatus,
}

impl PaymentEntry {
    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }
}

/// ordered payment timeline, strictly increasing in date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct PaymentSchedule {
    entries: Vec<PaymentEntry>,
}

impl PaymentSchedule {
    pub(crate) fn from_entries(entries: Vec<PaymentEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PaymentEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<PaymentEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaymentEntry> {
        self.entries.iter()
    }

    pub fn count(&self, status: PaymentStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }

    /// the trailing upcoming entry, if the projection reached one
    pub fn upcoming(&self) -> Option<&PaymentEntry> {
        self.entries
            .last()
            .filter(|e| e.status == PaymentStatus::Upcoming)
    }

    /// first entry not covered by a payment
    pub fn next_due(&self) -> Option<&PaymentEntry> {
        self.entries.iter().find(|e| !e.is_paid())
    }

    /// the entry cap stopped the projection before any upcoming date
    pub fn is_truncated(&self) -> bool {
        !self.entries.is_empty() && self.upcoming().is_none()
    }
}

impl<'a> IntoIterator for &'a PaymentSchedule {
    type Item = &'a PaymentEntry;
    type IntoIter = std::slice::Iter<'a, PaymentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(m: u32, status: PaymentStatus) -> PaymentEntry {
        PaymentEntry {
            date: NaiveDate::from_ymd_opt(2024, m, 15).unwrap(),
            status,
        }
    }

    #[test]
    fn test_schedule_accessors() {
        let schedule = PaymentSchedule::from_entries(vec![
            entry(1, PaymentStatus::Paid),
            entry(2, PaymentStatus::Overdue),
            entry(3, PaymentStatus::Upcoming),
        ]);

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.count(PaymentStatus::Paid), 1);
        assert_eq!(schedule.next_due().map(|e| e.date.to_string()), Some("2024-02-15".to_string()));
        assert_eq!(schedule.upcoming().map(|e| e.date.to_string()), Some("2024-03-15".to_string()));
        assert!(!schedule.is_truncated());
    }

    #[test]
    fn test_truncated_without_upcoming() {
        let schedule = PaymentSchedule::from_entries(vec![
            entry(1, PaymentStatus::Paid),
            entry(2, PaymentStatus::Paid),
        ]);
        assert!(schedule.is_truncated());
        assert!(schedule.next_due().is_none());
        assert!(!PaymentSchedule::default().is_truncated());
    }

    #[test]
    fn test_entry_json_shape() {
        let json = serde_json::to_string(&entry(6, PaymentStatus::Overdue)).unwrap();
        assert_eq!(json, r#"{"date":"2024-06-15","status":"overdue"}"#);
    }
}
