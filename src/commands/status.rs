//! Status command - show mode and per-subject state

use hardentools::config::Config;
use hardentools::output::{OutputMode, StatusResult};

use super::context::Context;

/// Show whether hardentools would harden or restore, and what
pub fn status(config: Config, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = Context::open(config, false)?;
    let overview = ctx.overview();
    StatusResult::from(&overview).render(mode);
    Ok(())
}
