/// time control - the same plan viewed on different days
use billing_schedule_rs::chrono::{Duration, TimeZone, Utc};
use billing_schedule_rs::{
    BillingPlan, EventStore, PaymentScheduleProjector, SafeTimeProvider, ScheduleConfig,
    ScheduleSummary, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== time control example ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    let config = ScheduleConfig::default();
    let projector = PaymentScheduleProjector::new(config)?;
    let mut events = EventStore::new();

    let mut plan = BillingPlan::from_json(
        r#"{"price": "450.00", "billingCycle": "quarterly", "startDate": "2024-01-01"}"#,
    )?;

    for quarter in 1..=4 {
        let schedule = projector.project_now(&plan, &time);
        let summary = ScheduleSummary::from_schedule(&schedule, plan.price);
        println!(
            "{}: {} overdue ({}), next due {:?}",
            time.now().format("%Y-%m-%d"),
            summary.overdue_count,
            summary.amount_overdue,
            summary.next_due,
        );

        // pay every other quarter
        if quarter % 2 == 1 {
            let covered = plan.record_payment(&config, &mut events, &time)?;
            println!("  paid installment due {covered}");
        }

        controller.advance(Duration::days(91));
    }

    println!("\n{} events recorded", events.events().len());
    Ok(())
}
