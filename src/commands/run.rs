//! Harden and restore commands
//!
//! Both build a selection from the live overview, hand it to the engine
//! once, and print the transcript. A status flag write failure after
//! hardening is returned as the command's error.

use anyhow::bail;
use log::info;

use hardentools::config::Config;
use hardentools::core::models::{Direction, RESTORE_WILL_NOT_WORK};
use hardentools::core::services::{Orchestrator, Overview};
use hardentools::output::{OperationResult, OutputMode, RunResult};

use super::context::Context;

/// Harden the selected subjects
pub fn harden(
    config: Config,
    only: &[String],
    skip: &[String],
    dry_run: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let ctx = Context::open(config, dry_run)?;
    let mut overview = ctx.overview();

    if overview.mode != Direction::Harden {
        bail!("The system is already hardened. Run 'hardentools restore' first.");
    }

    if !only.is_empty() {
        overview.select_only(only)?;
    }
    for name in skip {
        overview.select(name, false)?;
    }

    if overview.selection().count() == 0 {
        OperationResult {
            success: false,
            message: "Nothing to harden: every entry is already hardened or deselected.".into(),
        }
        .render(mode);
        return Ok(());
    }

    execute(&ctx, &overview, Direction::Harden, mode)
}

/// Restore everything that is hardened
pub fn restore(config: Config, dry_run: bool, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = Context::open(config, dry_run)?;
    let overview = ctx.overview();

    if overview.mode != Direction::Restore {
        bail!("Nothing to restore: the system has not been hardened by hardentools.");
    }

    execute(&ctx, &overview, Direction::Restore, mode)
}

fn execute(
    ctx: &Context,
    overview: &Overview,
    direction: Direction,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let selection = overview.selection();
    info!(
        "{} {} subject(s): {}",
        direction.verb(),
        selection.count(),
        selection.selected().join(", ")
    );

    let mut engine = Orchestrator::new(&ctx.catalog, &ctx.status);
    let report = engine.run_all(direction, &selection)?;

    let result = RunResult::new(report, ctx.dry_run);
    result.render(mode);

    if result.escalation.is_some() {
        bail!(RESTORE_WILL_NOT_WORK);
    }
    Ok(())
}
