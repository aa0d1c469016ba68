use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use scss_refresh::compile::StyleCompiler;

/// A fake compiler that:
/// - records every source it was asked to compile
/// - returns `/* compiled */` followed by the source
/// - fails for any source containing `fail_marker`, if one is set.
#[derive(Debug, Clone, Default)]
pub struct RecordingCompiler {
    compiled: Arc<Mutex<Vec<String>>>,
    fail_marker: Option<String>,
}

impl RecordingCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(marker: &str) -> Self {
        Self {
            compiled: Arc::default(),
            fail_marker: Some(marker.to_string()),
        }
    }

    /// Sources compiled so far, in call order.
    pub fn compiled(&self) -> Vec<String> {
        self.compiled.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.compiled.lock().unwrap().len()
    }
}

impl StyleCompiler for RecordingCompiler {
    fn compile(&self, source: &str) -> Result<String> {
        self.compiled.lock().unwrap().push(source.to_string());
        if let Some(marker) = &self.fail_marker {
            if source.contains(marker.as_str()) {
                bail!("syntax error: unexpected {marker}");
            }
        }
        Ok(format!("/* compiled */\n{source}"))
    }
}
