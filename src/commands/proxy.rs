//! `zeroops proxy` handlers

use anyhow::{Context as _, Result};

use zeroops::{ProxyOptions, ProxyUseCase};

use super::AppContext;
use crate::cli::ProxyCommand;

pub fn cmd_proxy(action: ProxyCommand, ctx: &AppContext) -> Result<()> {
    let executor = ctx.executor();
    let use_case = ProxyUseCase::new(&ctx.store, &executor, ctx.layout());

    match action {
        ProxyCommand::Add { app, conf } => {
            let conf = conf.unwrap_or_else(|| ctx.config.proxy.conf.clone());
            let options = ProxyOptions::new(app, conf);
            if !ctx.json {
                println!("Deploying nginx configuration for {}...", options.app);
            }
            let events = ctx.events();
            use_case
                .add_with_events(&options, events.as_ref())
                .with_context(|| format!("proxy setup for '{}' failed", options.app))?;
        }
        ProxyCommand::Status { app } => use_case.status(&app)?,
        ProxyCommand::List => use_case.list()?,
        ProxyCommand::Rm { app } => {
            use_case.remove(&app)?;
            if !ctx.json {
                println!("✅ Nginx configuration for {} removed", app);
            }
        }
    }
    Ok(())
}
