#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use zeroops::{EnvMapping, RenderMode, TemplateRenderer};

fuzz_target!(|data: &[u8]| {
    if let Ok(template) = std::str::from_utf8(data) {
        // Malformed templates must surface as errors, never panics
        let env: EnvMapping = [("PORT".to_string(), "8080".to_string())]
            .into_iter()
            .collect();
        let _ = TemplateRenderer::new(RenderMode::Lenient).render_str(
            Path::new("fuzz.tpl"),
            template,
            &env,
        );
    }
});
