/// json view - render the timeline payload for a plan record
use billing_schedule_rs::chrono::NaiveDate;
use billing_schedule_rs::{BillingPlan, PaymentScheduleProjector, ScheduleConfig, ScheduleView};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let record = r#"{
        "id": "0b0f4c7e-4f55-4a4e-8d55-2d6b1f0f6a21",
        "price": "1200.00",
        "currency": "BRL",
        "billingCycle": "monthly",
        "status": "active",
        "startDate": "2024-01-31",
        "lastPaymentDate": "2024-03-02",
        "notes": "end-of-month plan"
    }"#;
    let plan = BillingPlan::from_json(record)?;
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).ok_or("bad date")?;

    println!("-- carry overflow (default) --");
    let projector = PaymentScheduleProjector::default();
    println!("{}", ScheduleView::build(&plan, today, &projector).to_json_pretty()?);

    println!("\n-- clamp overflow --");
    let projector = PaymentScheduleProjector::new(ScheduleConfig::clamped())?;
    println!("{}", ScheduleView::build(&plan, today, &projector).to_json_pretty()?);

    Ok(())
}
