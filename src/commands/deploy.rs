//! `zeroops deploy` handlers

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use zeroops::{DeployOptions, DeployUseCase, RenderMode};

use super::AppContext;
use crate::cli::DeployCommand;

pub fn cmd_deploy(action: DeployCommand, ctx: &AppContext) -> Result<()> {
    let executor = ctx.executor();
    let use_case = DeployUseCase::new(&ctx.store, &executor, ctx.layout());

    match action {
        DeployCommand::Add {
            app,
            env_file,
            template,
            output,
            strict,
        } => {
            let options = deploy_options(ctx, app, env_file, template, output, strict);
            let events = ctx.events();
            use_case
                .execute_with_events(&options, events.as_ref())
                .with_context(|| format!("deploy of '{}' failed", options.app))?;
        }
        DeployCommand::Status { app } => use_case.status(&app)?,
        DeployCommand::Rm { app } => {
            use_case.remove(&app)?;
            if !ctx.json {
                println!("✅ App '{}' removed", app);
            }
        }
        DeployCommand::List => use_case.list()?,
    }
    Ok(())
}

/// CLI flags win over config values
fn deploy_options(
    ctx: &AppContext,
    app: String,
    env_file: Option<PathBuf>,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
    strict: bool,
) -> DeployOptions {
    let defaults = &ctx.config.deploy;
    DeployOptions::new(app)
        .with_env_file(env_file.unwrap_or_else(|| defaults.env_file.clone()))
        .with_template(template.unwrap_or_else(|| defaults.template.clone()))
        .with_output(output.unwrap_or_else(|| defaults.output.clone()))
        .with_render_mode(RenderMode::from_strict(strict || ctx.config.template.strict))
        .with_cleanup_on_failure(defaults.cleanup_on_failure)
}
