//! plan-runner: headless capacity-plan runner.
//!
//! Usage:
//!   plan-runner --seed 42 --periods 12 --fiscal-year 2024 --out run.json
//!   plan-runner --plan plan.json --out run.json
//!
//! Without --plan, a deterministic sample plan is generated from the
//! seed. --dump-plan writes that plan back out in the loadable format.

use anyhow::Result;
use capacity_core::{
    chain::{PlanEngine, PlanRun},
    config::PlanDefinition,
    period::PeriodInterval,
    sample::sample_plan,
};
use std::env;

/// On-disk record of one run: the full result tree plus when it was
/// produced.
#[derive(serde::Serialize)]
struct PlanRunRecord {
    run: PlanRun,
    generated_at: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let periods = parse_arg(&args, "--periods", 12usize);
    let fiscal_year = parse_arg(&args, "--fiscal-year", 2024i32);
    let plan_path = args
        .windows(2)
        .find(|w| w[0] == "--plan")
        .map(|w| w[1].as_str());
    let out_path = args
        .windows(2)
        .find(|w| w[0] == "--out")
        .map(|w| w[1].as_str());
    let dump_path = args
        .windows(2)
        .find(|w| w[0] == "--dump-plan")
        .map(|w| w[1].as_str());
    let interval = match args
        .windows(2)
        .find(|w| w[0] == "--interval")
        .map(|w| w[1].as_str())
        .unwrap_or("week")
    {
        "week" => PeriodInterval::Week,
        "month" => PeriodInterval::Month,
        other => anyhow::bail!("Unknown interval '{other}' (expected week or month)"),
    };

    println!("plan-runner");
    println!("  plan:        {}", plan_path.unwrap_or("(generated sample)"));
    println!("  seed:        {seed}");
    println!("  interval:    {}", interval.name());
    println!("  periods:     {periods}");
    println!("  fiscal year: {fiscal_year}");
    println!();

    let plan = match plan_path {
        Some(path) => {
            let plan = PlanDefinition::load(path)?;
            log::info!("Loaded plan '{}' from {path}", plan.plan_id);
            plan
        }
        None => sample_plan(seed, interval, periods, fiscal_year),
    };

    if let Some(path) = dump_path {
        let json = serde_json::to_string_pretty(&serde_json::json!({ "plan": plan }))?;
        std::fs::write(path, json)?;
        println!("Plan definition written to {path}");
    }

    let engine = PlanEngine::new(plan)?;
    let run = engine.run();
    print_summary(&run);

    if let Some(path) = out_path {
        let record = PlanRunRecord {
            run,
            generated_at: chrono::Utc::now().to_rfc3339(),
        };
        std::fs::write(path, serde_json::to_string_pretty(&record)?)?;
        println!();
        println!("Run written to {path}");
    }

    Ok(())
}

fn print_summary(run: &PlanRun) {
    println!("=== RUN SUMMARY ===");
    println!("  run_id:      {}", run.run_id);
    println!("  plan:        {} ({})", run.plan_name, run.plan_id);
    println!("  periods:     {}", run.period_labels.len());
    println!("  std minutes: {:.0}", run.standard_work_minutes);
    println!("  findings:    {}", run.findings.len());

    let last = run.period_labels.len() - 1;
    println!();
    println!("=== FINAL PERIOD STAFFING ({}) ===", run.period_labels[last]);
    let mut total_required = 0.0;
    let mut total_actual = 0.0;
    for bu in &run.business_units {
        let line = &bu.rollup[last];
        total_required += line.required_hc;
        total_actual += line.actual_hc;
        println!(
            "  {:<24} | Req: {:>8.1} | Act: {:>8.1} | O/U: {:>+8.1}",
            bu.name, line.required_hc, line.actual_hc, line.over_under_hc
        );
        for lob in &bu.lobs {
            let line = &lob.rollup[last];
            println!(
                "    {:<22} | Req: {:>8.1} | Act: {:>8.1} | O/U: {:>+8.1}",
                lob.name, line.required_hc, line.actual_hc, line.over_under_hc
            );
        }
    }
    println!(
        "  {:<24} | Req: {:>8.1} | Act: {:>8.1} | O/U: {:>+8.1}",
        "TOTAL",
        total_required,
        total_actual,
        total_actual - total_required
    );

    if !run.findings.is_empty() {
        println!();
        println!("=== VALIDATION FINDINGS ===");
        for finding in run.findings.iter().take(10) {
            match &finding.period {
                Some(p) => println!("  [{}] {} ({p})", finding.scope, finding.message),
                None => println!("  [{}] {}", finding.scope, finding.message),
            }
        }
        if run.findings.len() > 10 {
            println!("  ... and {} more", run.findings.len() - 10);
        }
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
