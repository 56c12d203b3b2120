/// quick start - project a monthly plan as of a fixed date
use billing_schedule_rs::chrono::NaiveDate;
use billing_schedule_rs::{payment_schedule, BillingCycle, BillingPlan, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let plan = BillingPlan::builder()
        .price(Money::from_major(180))
        .billing_cycle(BillingCycle::Monthly)
        .start_date(NaiveDate::from_ymd_opt(2024, 1, 15).ok_or("bad date")?)
        .last_payment_date(NaiveDate::from_ymd_opt(2024, 4, 15).ok_or("bad date")?)
        .build()?;

    let today = NaiveDate::from_ymd_opt(2024, 6, 15).ok_or("bad date")?;
    for entry in &payment_schedule(&plan, today) {
        println!("{}  {:?}", entry.date, entry.status);
    }

    Ok(())
}
