use zeroops::ZeroopsError;

/// Innermost zeroops error in the chain, if any
fn zeroops_error(err: &anyhow::Error) -> Option<&ZeroopsError> {
    err.chain().find_map(|cause| cause.downcast_ref::<ZeroopsError>())
}

pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("❌ {}\n", err);
    for cause in err.chain().skip(1) {
        out.push_str(&format!("   caused by: {}\n", cause));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "kind": zeroops_error(err).map(|e| e.kind().as_str()),
            "message": err.to_string(),
            "causes": err.chain().skip(1).map(|c| c.to_string()).collect::<Vec<_>>(),
        });
        let _ = crate::ui::output::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}
