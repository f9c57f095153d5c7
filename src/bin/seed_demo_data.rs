// ABOUTME: Demo data seeder for Spotter server testing
// ABOUTME: Generates realistic check-in, session, and set log history for demo athletes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Demo data seeder for the Spotter server.
//!
//! Populates the database with a handful of athletes and several weeks
//! of wellness and training history so the safety analysis endpoints
//! have something realistic to chew on.
//!
//! Usage:
//! ```bash
//! # Seed the default database with four weeks of history
//! cargo run --bin seed-demo-data
//!
//! # Seed a specific database with more history
//! cargo run --bin seed-demo-data -- --database-url sqlite:./demo.db --weeks 8
//! ```

use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use spotter_server::database_plugins::factory::Database;
use spotter_server::database_plugins::DatabaseProvider;
use spotter_server::models::{Athlete, CheckIn, SessionStatus, SessionSummary, SetLog};

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Spotter demo data seeder",
    long_about = "Populate the database with realistic athlete history for testing"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long, default_value = "sqlite:./data/spotter.db")]
    database_url: String,

    /// Weeks of historical data to generate
    #[arg(long, default_value = "4")]
    weeks: u32,

    /// RNG seed so repeated runs produce the same history
    #[arg(long, default_value = "42")]
    seed: u64,
}

/// Demo athlete configuration
struct DemoAthlete {
    display_name: &'static str,
    birthdate: &'static str,
    /// Baseline soreness the generator drifts around, 1-5
    soreness_baseline: f64,
    /// Baseline nightly sleep in hours
    sleep_baseline: f64,
    /// Whether session RPE should climb week over week
    ramping_load: bool,
}

const DEMO_ATHLETES: &[DemoAthlete] = &[
    DemoAthlete {
        display_name: "Maya Lindgren",
        birthdate: "2011-03-22",
        soreness_baseline: 2.5,
        sleep_baseline: 6.2,
        ramping_load: true,
    },
    DemoAthlete {
        display_name: "Jonas Petterson",
        birthdate: "2007-11-04",
        soreness_baseline: 2.0,
        sleep_baseline: 7.4,
        ramping_load: false,
    },
    DemoAthlete {
        display_name: "Elena Ruiz",
        birthdate: "1996-06-15",
        soreness_baseline: 1.5,
        sleep_baseline: 7.9,
        ramping_load: false,
    },
];

const EXERCISES: &[&str] = &["Back Squat", "Bench Press", "Deadlift", "Overhead Press", "Row"];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args = SeedArgs::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let database = Database::new(&args.database_url).await?;
    database.migrate().await?;
    info!("Seeding {} weeks of demo data", args.weeks);

    let today = Utc::now().date_naive();
    let days = i64::from(args.weeks) * 7;

    for demo in DEMO_ATHLETES {
        let birthdate = NaiveDate::parse_from_str(demo.birthdate, "%Y-%m-%d")?;
        let athlete = Athlete::new(demo.display_name.to_owned(), birthdate, Utc::now());
        database.create_athlete(&athlete).await?;

        let mut check_ins = 0u32;
        let mut sessions = 0u32;
        let mut sets = 0u32;

        for day_offset in (0..days).rev() {
            let date = today - Duration::days(day_offset);
            let created_at = Utc::now() - Duration::days(day_offset);
            // Fatigue builds toward the present for ramping athletes
            let progress = 1.0 - (day_offset as f64 / days as f64);

            let soreness_drift = if demo.ramping_load { progress * 2.0 } else { 0.0 };
            let soreness = (demo.soreness_baseline + soreness_drift + rng.gen_range(-0.5..0.5))
                .round()
                .clamp(1.0, 5.0);
            let sleep = (demo.sleep_baseline + rng.gen_range(-0.8..0.8)).clamp(3.0, 10.0);
            let energy = f64::from(rng.gen_range(4u8..=8)) - soreness_drift;
            let mood = rng.gen_range(2u8..=5);

            let check_in = CheckIn::new(
                athlete.id,
                date,
                mood,
                (energy.round().clamp(1.0, 10.0)) as u8,
                (sleep * 4.0).round() / 4.0,
                soreness as u8,
                created_at,
            )?;
            database.create_check_in(&check_in).await?;
            check_ins += 1;

            // Roughly three sessions a week
            if rng.gen_range(0..7) >= 4 {
                let base_rpe = if demo.ramping_load {
                    6.0 + progress * 3.0
                } else {
                    rng.gen_range(5.0..7.5)
                };
                let average_rpe = (base_rpe + rng.gen_range(-0.5..0.5)).clamp(1.0, 10.0);
                let status = if rng.gen_range(0..10) < 9 {
                    SessionStatus::Completed
                } else {
                    SessionStatus::Skipped
                };
                let rated = matches!(status, SessionStatus::Completed);

                let session = SessionSummary::new(
                    athlete.id,
                    date,
                    status,
                    rated.then_some((average_rpe * 2.0).round() / 2.0),
                    created_at,
                )?;
                database.create_session(&session).await?;
                sessions += 1;

                if rated {
                    for _ in 0..rng.gen_range(3..=6) {
                        let set_rpe =
                            (average_rpe + rng.gen_range(-1.0..1.0)).clamp(1.0, 10.0).round() as u8;
                        let exercise = EXERCISES[rng.gen_range(0..EXERCISES.len())];
                        let weight = f64::from(rng.gen_range(8..32)) * 2.5;
                        let reps = rng.gen_range(3u32..=12);

                        let set_log = SetLog::new(
                            session.id,
                            exercise.to_owned(),
                            set_rpe,
                            weight,
                            reps,
                            created_at,
                        )?;
                        database.create_set_log(&set_log).await?;
                        sets += 1;
                    }
                }
            }
        }

        info!(
            athlete = demo.display_name,
            athlete_id = %athlete.id,
            check_ins,
            sessions,
            sets,
            "Seeded demo athlete"
        );
    }

    info!("Demo data seeding complete");
    Ok(())
}
