//! Progress lines and JSON output

use std::io::{self, Write};

use zeroops::domain::ports::{EventSink, OpsEvent};

/// Prints one line per deploy/proxy step to stdout
pub struct ConsoleEventSink;

impl EventSink for ConsoleEventSink {
    fn on_event(&self, event: OpsEvent) {
        println!("{}", format_event(&event));
    }
}

pub fn format_event(event: &OpsEvent) -> String {
    match event {
        OpsEvent::ManifestRendered { template, output } => format!(
            "📝 Rendered {} -> {}",
            template.display(),
            output.display()
        ),
        OpsEvent::EnsuringDirectory { destination, path } => {
            format!("📁 Ensuring remote directory exists: {}:{}", destination, path)
        }
        OpsEvent::Uploading { local, remote } => {
            format!("🛁 Copying {} to {}", local.display(), remote)
        }
        OpsEvent::BringingUp { app } => format!("🚀 Running docker compose for {}...", app),
        OpsEvent::CleaningUp { path } => {
            format!("❌ Docker build failed, cleaning up {}...", path)
        }
        OpsEvent::CleanupFailed { path, error } => {
            format!("⚠️  Cleanup of {} failed: {}", path, error)
        }
        OpsEvent::ReloadingProxy => "🔄 Reloading nginx configuration...".to_string(),
        OpsEvent::Deployed { app, destination } => {
            format!("✅ Deployment of {} to {} complete!", app, destination)
        }
        OpsEvent::ProxyInstalled { app, remote } => format!(
            "✅ Nginx configuration for {} deployed to {} and reloaded",
            app, remote
        ),
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}
