use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use nutrimodel::{TdeeReport, compute_tdee};

/// Health-metrics calculator for free-text profile fields.
#[derive(Parser, Debug)]
#[command(name = "nutrimodel")]
#[command(about = "Computes BMR/TDEE and macro targets from profile text")]
#[command(version)]
struct Args {
    /// Date of birth, MM/DD/YYYY.
    /// Can also be set via NUTRIMODEL_DOB environment variable.
    #[arg(long, value_name = "DATE", env = "NUTRIMODEL_DOB")]
    dob: String,

    /// Height, e.g. 5'9, 5 ft 9 in, 69 in.
    /// Can also be set via NUTRIMODEL_HEIGHT environment variable.
    #[arg(long, value_name = "HEIGHT", env = "NUTRIMODEL_HEIGHT")]
    height: String,

    /// Weight in pounds, e.g. 160 or 160 lbs.
    /// Can also be set via NUTRIMODEL_WEIGHT environment variable.
    #[arg(long, value_name = "WEIGHT", env = "NUTRIMODEL_WEIGHT")]
    weight: String,

    /// Daily steps range label (inactive/low_active/active/very_active,
    /// legacy none/some/moderate/lots also accepted).
    #[arg(long, value_name = "LABEL", env = "NUTRIMODEL_STEPS")]
    steps: Option<String>,

    /// Workout days per week label (0, 1-2, 3-4, 5-7).
    #[arg(long, value_name = "LABEL", env = "NUTRIMODEL_ACTIVE_DAYS")]
    active_days: Option<String>,

    /// Reference date for the age computation, MM/DD/YYYY.
    /// Defaults to the current local date.
    #[arg(long, value_name = "DATE")]
    today: Option<String>,

    /// Emit the rounded report as JSON instead of the text summary.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let today = match &args.today {
        Some(text) => NaiveDate::parse_from_str(text.trim(), "%m/%d/%Y")
            .with_context(|| format!("invalid --today date: {text}"))?,
        None => Local::now().date_naive(),
    };

    let result = compute_tdee(
        &args.dob,
        &args.height,
        &args.weight,
        args.steps.as_deref(),
        args.active_days.as_deref(),
        today,
    )
    .context("failed to compute health metrics")?;

    let report = TdeeReport::from_result(&result);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("=== Profile ===");
    println!();
    println!("Age:    {} years", report.age_years);
    println!("Height: {:.2} cm", report.height_cm);
    println!("Weight: {:.2} kg", report.weight_kg);
    println!(
        "PAL:    {:.3} ({})",
        report.activity_factor, report.pal_category
    );

    println!();
    println!("=== Energy (kcal/day) ===");
    println!();
    println!("{:22} {:>8} {:>8}", "", "male", "female");
    println!("{:22} {:>8} {:>8}", "Mifflin BMR", report.bmr_male, report.bmr_female);
    println!("{:22} {:>8} {:>8}", "Mifflin TDEE (BMR*PAL)", report.tdee_male, report.tdee_female);
    println!(
        "{:22} {:>8} {:>8}",
        "EER (NAS adult)",
        result.energy.eer_male.round() as i64,
        result.energy.eer_female.round() as i64
    );

    println!();
    println!("=== Macro Targets ===");
    for (label, plan) in [("male", &report.macros_male), ("female", &report.macros_female)] {
        println!();
        println!("{label} ({} kcal):", plan.calories);
        println!(
            "  carbs   {:6.1} g  ({:.0}%)",
            plan.carbs_g, plan.carbs_pct
        );
        println!(
            "  protein {:6.1} g  ({:.0}%)",
            plan.protein_g, plan.protein_pct
        );
        println!("  fat     {:6.1} g  ({:.0}%)", plan.fats_g, plan.fats_pct);
        println!("  fiber   {:6.1} g", plan.fiber_g);
    }

    Ok(())
}
