use std::io::Write;

use crate::{
    compass::{NumericRange, UserProfile},
    errors::CliError,
    estimate::{reroute::SPREAD_DAYS, MetricsService, StressScenario},
    format::{format_months_range, format_percent, format_range},
    ledger::{Motive, MonthKey, Transaction},
    parse::{parse_amount, parse_range, ParsedAmount},
    storage::LedgerChange,
};

use super::{
    args::Args,
    context::CliContext,
    registry::{CommandDefinition, CommandResult},
    usage,
};

const NO_PROFILE: &str = "No profile yet. Run `set-profile --safety-net <text> --spend <text>` first.";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "parse",
            "Read a free-text amount or range",
            "parse <text>",
            cmd_parse,
        ),
        CommandDefinition::new(
            "set-profile",
            "Save the safety net, monthly spend and milestone",
            "set-profile --safety-net <text> --spend <text> [--milestone <name>] [--target <n>] [--saved <n>] [--tightness <t>] [--dream <text>]",
            cmd_set_profile,
        ),
        CommandDefinition::new("show", "Show the saved profile", "show", cmd_show),
        CommandDefinition::new(
            "metrics",
            "Show runway, daily freedom, milestone and today's budget",
            "metrics [--view tighter|as-is|looser]",
            cmd_metrics,
        ),
        CommandDefinition::new(
            "reroute",
            "Compare the two ways to absorb an unplanned expense",
            "reroute <amount>",
            cmd_reroute,
        ),
        CommandDefinition::new(
            "log",
            "Record a spend or an intercepted purchase",
            "log <amount> [motive] [--intercepted] [--note <text>]",
            cmd_log,
        ),
        CommandDefinition::new(
            "report",
            "Summarize one month of the ledger",
            "report [YYYY-MM]",
            cmd_report,
        ),
        CommandDefinition::new(
            "stress",
            "Run a what-if against the safety net",
            "stress <job-loss|illness> [--spend <n>]",
            cmd_stress,
        ),
        CommandDefinition::new("reset", "Clear the profile and the ledger", "reset", cmd_reset),
        CommandDefinition::new("help", "List commands", "help", cmd_help),
    ]
}

fn cmd_parse(_ctx: &mut CliContext, args: &Args, out: &mut dyn Write) -> CommandResult {
    let text = args.joined();
    if text.trim().is_empty() {
        return Err(CliError::Usage("usage: parse <text>".into()));
    }
    match parse_amount(&text) {
        Some(ParsedAmount::Exact(value)) => writeln!(out, "exact: {value}")?,
        Some(ParsedAmount::Range(range)) => {
            writeln!(out, "range: {}", format_range(range.min(), range.max(), ""))?
        }
        None => return Err(CliError::InvalidAmount(text)),
    }
    Ok(())
}

fn cmd_set_profile(ctx: &mut CliContext, args: &Args, out: &mut dyn Write) -> CommandResult {
    let safety_net = args.option("safety-net").map(read_range).transpose()?;
    let monthly_spend = args.option("spend").map(read_range).transpose()?;
    let now = ctx.clock.now();

    let mut profile = match ctx.store.load_profile()? {
        Some(mut existing) => {
            if let Some(range) = safety_net {
                existing.safety_net = range;
            }
            if let Some(range) = monthly_spend {
                existing.monthly_spend = range;
            }
            existing
        }
        None => {
            let (Some(safety_net), Some(monthly_spend)) = (safety_net, monthly_spend) else {
                return Err(CliError::Usage(
                    "set-profile needs both --safety-net and --spend the first time".into(),
                ));
            };
            let mut profile = UserProfile::new(safety_net, monthly_spend);
            profile.created_at = now;
            profile
        }
    };

    if let Some(name) = args.option("milestone") {
        profile.milestone.name = name.trim().to_string();
    }
    if let Some(text) = args.option("target") {
        profile.milestone.target_amount = read_exact(text)?;
    }
    if let Some(text) = args.option("saved") {
        profile.milestone.saved_amount = read_exact(text)?;
    }
    if let Some(text) = args.option("tightness") {
        profile.tightness = text.parse().map_err(CliError::InvalidValue)?;
    }
    if let Some(dream) = args.option("dream") {
        profile.dream_text = Some(dream.to_string());
    }
    profile.updated_at = now;

    ctx.store.save_profile(&profile)?;
    tracing::info!("profile saved");
    writeln!(out, "Profile saved.")?;
    write_profile(ctx, &profile, out)
}

fn cmd_show(ctx: &mut CliContext, _args: &Args, out: &mut dyn Write) -> CommandResult {
    match ctx.store.load_profile()? {
        Some(profile) => write_profile(ctx, &profile, out),
        None => {
            writeln!(out, "{NO_PROFILE}")?;
            Ok(())
        }
    }
}

fn cmd_metrics(ctx: &mut CliContext, args: &Args, out: &mut dyn Write) -> CommandResult {
    let view = match args.option("view") {
        Some(text) => text.parse().map_err(CliError::InvalidValue)?,
        None => ctx.config.default_view,
    };
    let profile = ctx.store.load_profile()?;
    let ledger = ctx.store.load_ledger()?;
    let eval = ctx.evaluation(view);
    let metrics = MetricsService::evaluate(profile.as_ref(), &ledger, &eval);

    match profile.as_ref() {
        Some(profile) => {
            let runway = metrics.runway_months;
            writeln!(
                out,
                "Runway: {} months ({})",
                format_months_range(&runway),
                format_range(runway.min(), runway.max(), "")
            )?;
            writeln!(
                out,
                "Daily freedom: {} per day",
                ctx.money_range(&metrics.daily_freedom)
            )?;
            writeln!(
                out,
                "Milestone: {} {} ({} / {})",
                profile.milestone.name,
                format_percent(metrics.milestone_progress),
                ctx.money(profile.milestone.saved_amount),
                ctx.money(profile.milestone.target_amount)
            )?;
            writeln!(
                out,
                "Safety level: {:.1} months ({})",
                metrics.safety.mid_months,
                format_percent(metrics.safety.fill)
            )?;
            writeln!(
                out,
                "Today, {view}: {} budget, {} spent, {} free",
                ctx.money(metrics.today.budget_per_day),
                ctx.money(metrics.today.spent_today),
                ctx.money(metrics.today.free_today)
            )?;
        }
        None => writeln!(out, "{NO_PROFILE}")?,
    }

    let month = &metrics.month;
    writeln!(
        out,
        "This month ({}): {} spent in {} entries, {} preserved in {}",
        eval.current_month(),
        ctx.money(month.spend_total),
        month.spend_count,
        ctx.money(month.intercepted_total),
        month.intercepted_count
    )?;
    if let Some(motive) = month.top_motive {
        writeln!(out, "Most common motive: {}", motive.label())?;
    }
    writeln!(out, "Preserved so far: {}", ctx.money(metrics.preserved_total))?;
    Ok(())
}

fn cmd_reroute(ctx: &mut CliContext, args: &Args, out: &mut dyn Write) -> CommandResult {
    let delta = read_exact(args.require(0, "reroute <amount>")?)?;
    let Some(profile) = ctx.store.load_profile()? else {
        writeln!(out, "{NO_PROFILE}")?;
        return Ok(());
    };
    let plan = MetricsService::reroute(Some(&profile), delta);
    if plan.hold_goal.daily_adjustment == 0 && plan.hold_pace.days_delay == 0 {
        writeln!(out, "Nothing to reroute.")?;
        return Ok(());
    }

    writeln!(out, "Unplanned expense: {}", ctx.money(plan.delta))?;
    writeln!(
        out,
        "Hold the goal: spend {} less per day for the next {SPREAD_DAYS} days",
        ctx.money(plan.hold_goal.daily_adjustment as f64)
    )?;
    writeln!(
        out,
        "Hold the pace: {} arrives about {} days later",
        profile.milestone.name, plan.hold_pace.days_delay
    )?;
    Ok(())
}

fn cmd_log(ctx: &mut CliContext, args: &Args, out: &mut dyn Write) -> CommandResult {
    let amount = read_exact(args.require(0, "log <amount> [motive]")?)?;
    let motive = match args.positional(1) {
        Some(text) => text.parse().map_err(CliError::InvalidValue)?,
        None => Motive::Unknown,
    };
    let now = ctx.clock.now();
    let mut transaction = if args.switch("intercepted") {
        Transaction::intercepted(amount, motive, now)
    } else {
        Transaction::new(amount, motive, now)
    };
    if let Some(note) = args.option("note") {
        transaction = transaction.with_note(note);
    }
    let intercepted = transaction.is_intercepted;

    let entries = match ctx.store.append_transaction(transaction)? {
        LedgerChange::Appended { len, .. } => len,
        LedgerChange::Cleared => 0,
    };
    if intercepted {
        writeln!(
            out,
            "Intercepted {} ({}), that money stays put.",
            ctx.money(amount),
            motive
        )?;
    } else {
        writeln!(out, "Logged {} ({}).", ctx.money(amount), motive)?;
    }
    writeln!(out, "Ledger entries: {entries}")?;
    Ok(())
}

fn cmd_report(ctx: &mut CliContext, args: &Args, out: &mut dyn Write) -> CommandResult {
    let eval = ctx.evaluation(ctx.config.default_view);
    let month = match args.positional(0) {
        Some(text) => text.parse::<MonthKey>().map_err(CliError::InvalidValue)?,
        None => eval.current_month(),
    };
    let ledger = ctx.store.load_ledger()?;
    let summary = MetricsService::month_report(&ledger, month, &eval);

    writeln!(out, "Report for {month}")?;
    if summary.is_empty() {
        writeln!(out, "No entries this month.")?;
        return Ok(());
    }
    writeln!(
        out,
        "Spent: {} across {} entries",
        ctx.money(summary.spend_total),
        summary.spend_count
    )?;
    writeln!(
        out,
        "Preserved: {} across {} intercepted",
        ctx.money(summary.intercepted_total),
        summary.intercepted_count
    )?;
    for motive in Motive::ALL {
        let count = summary.motive_counts.get(motive);
        if count > 0 {
            writeln!(out, "  {}: {count}", motive.label())?;
        }
    }
    if let Some(motive) = summary.top_motive {
        writeln!(out, "Most common motive: {}", motive.label())?;
    }
    Ok(())
}

fn cmd_stress(ctx: &mut CliContext, args: &Args, out: &mut dyn Write) -> CommandResult {
    let scenario: StressScenario = args
        .require(0, "stress <job-loss|illness> [--spend <n>]")?
        .parse()
        .map_err(CliError::InvalidValue)?;
    let spend_override = args.option("spend").map(read_exact).transpose()?;
    let Some(profile) = ctx.store.load_profile()? else {
        writeln!(out, "{NO_PROFILE}")?;
        return Ok(());
    };
    let outcome = MetricsService::stress(Some(&profile), scenario, spend_override);

    writeln!(
        out,
        "Scenario: {} (spending x{:.1})",
        outcome.scenario,
        scenario.spend_factor()
    )?;
    writeln!(out, "Monthly spend: {}", ctx.money(outcome.monthly_spend))?;
    writeln!(out, "Safety net lasts about {:.1} months", outcome.months)?;
    writeln!(
        out,
        "Runway range: {} months",
        format_months_range(&outcome.runway)
    )?;
    Ok(())
}

fn cmd_reset(ctx: &mut CliContext, _args: &Args, out: &mut dyn Write) -> CommandResult {
    ctx.store.clear_profile()?;
    ctx.store.clear_ledger()?;
    tracing::info!("profile and ledger cleared");
    writeln!(out, "Profile and ledger cleared.")?;
    Ok(())
}

fn cmd_help(_ctx: &mut CliContext, _args: &Args, out: &mut dyn Write) -> CommandResult {
    writeln!(out, "{}", usage())?;
    Ok(())
}

fn write_profile(ctx: &CliContext, profile: &UserProfile, out: &mut dyn Write) -> CommandResult {
    writeln!(out, "Safety net: {}", ctx.money_range(&profile.safety_net))?;
    writeln!(out, "Monthly spend: {}", ctx.money_range(&profile.monthly_spend))?;
    writeln!(
        out,
        "Milestone: {} ({} / {})",
        profile.milestone.name,
        ctx.money(profile.milestone.saved_amount),
        ctx.money(profile.milestone.target_amount)
    )?;
    writeln!(out, "Stance: {}", profile.tightness)?;
    if let Some(dream) = &profile.dream_text {
        writeln!(out, "Dream: {dream}")?;
    }
    Ok(())
}

fn read_range(text: &str) -> Result<NumericRange, CliError> {
    parse_range(text).ok_or_else(|| CliError::InvalidAmount(text.to_string()))
}

fn read_exact(text: &str) -> Result<f64, CliError> {
    match parse_amount(text) {
        Some(ParsedAmount::Exact(value)) => Ok(value),
        Some(ParsedAmount::Range(_)) => Err(CliError::InvalidValue(format!(
            "`{text}` must be a single amount, not a range"
        ))),
        None => Err(CliError::InvalidAmount(text.to_string())),
    }
}
