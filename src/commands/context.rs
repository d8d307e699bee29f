//! `zeroops context` handlers

use anyhow::Result;

use zeroops::TargetsUseCase;

use super::AppContext;
use crate::cli::ContextCommand;
use crate::ui::output::emit;

pub fn cmd_context(action: ContextCommand, ctx: &AppContext) -> Result<()> {
    let use_case = TargetsUseCase::new(&ctx.store);

    match action {
        ContextCommand::Add { name, docker, key } => {
            let target = use_case.add(&name, &docker, key.as_deref())?;
            println!("✅ Context '{}' saved: {}", target.name, target.destination());
        }
        ContextCommand::List => {
            let listing = use_case.list()?;
            if ctx.json {
                emit(serde_json::json!({
                    "contexts": listing.names,
                    "current": listing.current,
                }))?;
            } else if listing.is_empty() {
                println!("No contexts found");
            } else {
                println!("Available contexts:");
                for name in &listing.names {
                    if listing.current.as_deref() == Some(name.as_str()) {
                        println!("- {} (current)", name);
                    } else {
                        println!("- {}", name);
                    }
                }
            }
        }
        ContextCommand::Use { name } => {
            use_case.use_target(&name)?;
            println!("✅ Switched to context '{}'", name);
        }
        ContextCommand::Current => {
            let current = use_case.current()?;
            if ctx.json {
                emit(serde_json::json!({ "current": current }))?;
            } else {
                match current {
                    Some(name) => println!("Current context: {}", name),
                    None => println!("No current context set"),
                }
            }
        }
        ContextCommand::Rm { name } => {
            let cleared = use_case.remove(&name)?;
            println!("✅ Context '{}' removed", name);
            if cleared {
                println!("No current context set");
            }
        }
    }
    Ok(())
}
