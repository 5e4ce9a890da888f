use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use funnel_sim::config::Config;
use funnel_sim::models::FunnelEdit;
use funnel_sim::report::FunnelReport;
use funnel_sim::session::FunnelSession;

fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    // funnel-sim [--json] [--save] [key=value ...]
    let mut as_json = false;
    let mut save = false;
    let mut edits = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            "--save" => save = true,
            _ => edits.push(
                FunnelEdit::parse(&arg).with_context(|| format!("bad argument '{}'", arg))?,
            ),
        }
    }

    let mut session = FunnelSession::new(cfg.baseline_input());
    for edit in &edits {
        session.apply_edit(edit)?;
    }
    info!(
        "Simulated '{}' with {} edit(s)",
        session.input().funnel_name,
        session.edits_applied()
    );

    let report = FunnelReport::new(session.input(), session.metrics());
    if as_json {
        println!("{}", report.to_json()?);
    } else {
        report.print_summary();
    }

    if save {
        let path = report.save_to_file(&cfg.report_dir)?;
        println!("\nReport saved to: {}", path.display());
    }

    Ok(())
}
