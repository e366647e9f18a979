//! Crash report printed instead of the default panic message
//!
//! The metrics engine is total, so a panic is always a bug. The report names
//! the file and phase from [`super::context`] so it can be reproduced.

use super::context::{get_current_context, get_progress, AnalysisContext};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("{}", crash_report(info, &get_current_context(), get_progress()));
    }));
}

fn crash_report(
    info: &PanicHookInfo<'_>,
    context: &AnalysisContext,
    (processed, total): (usize, usize),
) -> String {
    let message = info
        .payload()
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    let location = info
        .location()
        .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
        .unwrap_or_else(|| "unknown".to_string());

    let mut report = format!("codegauge {VERSION} crashed\n");
    report.push_str(&format!("  message:  {message}\n"));
    report.push_str(&format!("  location: {location}\n"));
    report.push_str(&format_context(context, processed, total));
    report.push_str("Re-run with RUST_BACKTRACE=1 for a backtrace.");
    report
}

fn format_context(context: &AnalysisContext, processed: usize, total: usize) -> String {
    let mut out = String::new();
    if let Some(phase) = context.phase {
        out.push_str(&format!("  phase:    {phase}\n"));
    }
    if let Some(file) = &context.current_file {
        out.push_str(&format!("  file:     {}\n", file.display()));
    }
    if total > 0 {
        out.push_str(&format!("  progress: {processed}/{total} files\n"));
    }
    out
}
