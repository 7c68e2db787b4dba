//! Plain-text command front end. Each command loads the latest snapshot from the
//! store, runs the matching derivation and writes its result to `out`.

mod args;
mod context;
mod handlers;
mod registry;

use std::io::Write;

pub use args::Args;
pub use context::CliContext;
pub use registry::{CommandDefinition, CommandHandler, CommandRegistry, CommandResult};

use crate::errors::CliError;

pub fn registry() -> CommandRegistry {
    CommandRegistry::new(handlers::definitions())
}

/// Dispatches `tokens` (command name first) against `ctx`.
pub fn run(tokens: &[String], ctx: &mut CliContext, out: &mut dyn Write) -> CommandResult {
    let Some((name, rest)) = tokens.split_first() else {
        return Err(CliError::Usage(usage()));
    };
    let registry = registry();
    let command = registry
        .get(name)
        .ok_or_else(|| CliError::UnknownCommand(name.clone()))?;
    let args = Args::parse(rest)?;
    tracing::debug!(command = command.name, "dispatching command");
    (command.handler)(ctx, &args, out)
}

pub fn usage() -> String {
    let mut text = String::from("Usage: calm_compass_cli <command>\nCommands:");
    for command in registry().iter() {
        text.push_str(&format!("\n  {}\n      {}", command.usage, command.description));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        storage::{CompassStore, MemoryStore},
        time::FixedClock,
    };
    use chrono::{TimeZone, Utc};

    fn context() -> CliContext {
        let clock = FixedClock::utc(Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap());
        CliContext::new(
            Box::new(MemoryStore::new()),
            Config::default(),
            Box::new(clock),
        )
    }

    fn exec(ctx: &mut CliContext, line: &[&str]) -> Result<String, CliError> {
        let tokens: Vec<String> = line.iter().map(|token| token.to_string()).collect();
        let mut out = Vec::new();
        run(&tokens, ctx, &mut out)?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn registry_lists_every_command_once() {
        let names: Vec<_> = registry().names().collect();
        for expected in [
            "parse",
            "set-profile",
            "show",
            "metrics",
            "reroute",
            "log",
            "report",
            "stress",
            "reset",
            "help",
        ] {
            assert_eq!(names.iter().filter(|name| **name == expected).count(), 1);
        }
    }

    #[test]
    fn parse_reports_exact_and_range() {
        let mut ctx = context();
        assert_eq!(exec(&mut ctx, &["parse", "8,000"]).unwrap(), "exact: 8000\n");
        assert_eq!(
            exec(&mut ctx, &["parse", "25k-15k"]).unwrap(),
            "range: 15000\u{2013}25000\n"
        );
        let err = exec(&mut ctx, &["parse", "abc"]).unwrap_err();
        assert_eq!(err.to_string(), "could not read `abc` as an amount");
    }

    #[test]
    fn metrics_without_profile_still_reports_ledger() {
        let mut ctx = context();
        exec(&mut ctx, &["log", "200", "emotion", "--intercepted"]).unwrap();
        let output = exec(&mut ctx, &["metrics"]).unwrap();
        assert!(output.starts_with("No profile yet."));
        assert!(output.contains("Preserved so far: $200"));
    }

    #[test]
    fn profile_then_metrics() {
        let mut ctx = context();
        let saved = exec(
            &mut ctx,
            &["set-profile", "--safety-net", "20k-40k", "--spend", "6k-10k"],
        )
        .unwrap();
        assert!(saved.contains("Safety net: $20,000\u{2013}$40,000"));
        assert!(saved.contains("Milestone: First step ($0 / $500)"));

        exec(&mut ctx, &["log", "50", "needs"]).unwrap();
        let output = exec(&mut ctx, &["metrics"]).unwrap();
        assert!(output.contains("Runway: 2\u{2013}7 months (2\u{2013}6.7)"), "{output}");
        assert!(output.contains("Daily freedom: $200\u{2013}$333 per day"), "{output}");
        assert!(output.contains("Milestone: First step 0%"), "{output}");
        assert!(output.contains("$267 budget, $50 spent, $217 free"), "{output}");
        assert!(output.contains("Most common motive: Real need"), "{output}");
    }

    #[test]
    fn set_profile_requires_core_ranges_first_time() {
        let mut ctx = context();
        let err = exec(&mut ctx, &["set-profile", "--spend", "6k"]).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        let err = exec(
            &mut ctx,
            &["set-profile", "--safety-net", "lots", "--spend", "6k"],
        )
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidAmount(_)));
    }

    #[test]
    fn set_profile_updates_existing_fields() {
        let mut ctx = context();
        exec(&mut ctx, &["set-profile", "--safety-net", "20k", "--spend", "2k"]).unwrap();
        exec(
            &mut ctx,
            &["set-profile", "--milestone", "Flight", "--target", "1800", "--tightness", "tight"],
        )
        .unwrap();
        let profile = ctx.store.load_profile().unwrap().unwrap();
        assert_eq!(profile.safety_net, crate::compass::NumericRange::exact(20_000.0));
        assert_eq!(profile.milestone.name, "Flight");
        assert_eq!(profile.milestone.target_amount, 1_800.0);
        assert_eq!(profile.tightness, crate::compass::Tightness::Tight);
    }

    #[test]
    fn overflowing_amount_leaves_saved_profile_intact() {
        let mut ctx = context();
        exec(&mut ctx, &["set-profile", "--safety-net", "20k", "--spend", "2k"]).unwrap();
        let huge = "9".repeat(400);
        let err = exec(&mut ctx, &["set-profile", "--safety-net", huge.as_str()]).unwrap_err();
        assert!(matches!(err, CliError::InvalidAmount(_)));
        let profile = ctx.store.load_profile().unwrap().expect("profile kept");
        assert_eq!(profile.safety_net, crate::compass::NumericRange::exact(20_000.0));
    }

    #[test]
    fn money_follows_configured_locale() {
        let mut ctx = context();
        ctx.config.locale = "de-DE".into();
        ctx.config.currency_symbol = "\u{20ac}".into();
        let output = exec(
            &mut ctx,
            &["set-profile", "--safety-net", "20k-40k", "--spend", "6k-10k"],
        )
        .unwrap();
        assert!(
            output.contains("Safety net: \u{20ac}20.000\u{2013}\u{20ac}40.000"),
            "{output}"
        );
    }

    #[test]
    fn reroute_offers_both_sides() {
        let mut ctx = context();
        exec(&mut ctx, &["set-profile", "--safety-net", "20k", "--spend", "8k"]).unwrap();
        let output = exec(&mut ctx, &["reroute", "300"]).unwrap();
        assert!(output.contains("spend $10 less per day for the next 30 days"), "{output}");
        assert!(output.contains("First step arrives about 11 days later"), "{output}");
        assert_eq!(exec(&mut ctx, &["reroute", "0"]).unwrap(), "Nothing to reroute.\n");
    }

    #[test]
    fn report_groups_month_entries() {
        let mut ctx = context();
        exec(&mut ctx, &["log", "100", "needs"]).unwrap();
        exec(&mut ctx, &["log", "150", "needs", "--note", "groceries"]).unwrap();
        exec(&mut ctx, &["log", "200", "emotion", "--intercepted"]).unwrap();
        let output = exec(&mut ctx, &["report", "2024-04"]).unwrap();
        assert!(output.contains("Spent: $250 across 2 entries"), "{output}");
        assert!(output.contains("Preserved: $200 across 1 intercepted"), "{output}");
        assert!(output.contains("Most common motive: Real need"), "{output}");

        let empty = exec(&mut ctx, &["report", "2024-05"]).unwrap();
        assert!(empty.contains("No entries this month."));
        assert!(matches!(
            exec(&mut ctx, &["report", "2024-13"]),
            Err(CliError::InvalidValue(_))
        ));
    }

    #[test]
    fn stress_scales_spending() {
        let mut ctx = context();
        exec(&mut ctx, &["set-profile", "--safety-net", "26k", "--spend", "2k"]).unwrap();
        let output = exec(&mut ctx, &["stress", "illness"]).unwrap();
        assert!(output.contains("Safety net lasts about 10.0 months"), "{output}");
        let output = exec(&mut ctx, &["stress", "job-loss", "--spend", "2600"]).unwrap();
        assert!(output.contains("Safety net lasts about 10.0 months"), "{output}");
    }

    #[test]
    fn reset_clears_everything() {
        let mut ctx = context();
        exec(&mut ctx, &["set-profile", "--safety-net", "1k", "--spend", "1k"]).unwrap();
        exec(&mut ctx, &["log", "5"]).unwrap();
        exec(&mut ctx, &["reset"]).unwrap();
        assert!(ctx.store.load_profile().unwrap().is_none());
        assert!(ctx.store.load_ledger().unwrap().is_empty());
    }

    #[test]
    fn unknown_command_is_an_error() {
        let mut ctx = context();
        assert!(matches!(
            exec(&mut ctx, &["teleport"]),
            Err(CliError::UnknownCommand(_))
        ));
    }
}
