use anyhow::Context;
use clap::Parser;
use generator::profile::build_scan_sequence;
use gui_bridge::bridge::{gui_bind_address, GuiBridge};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Synthetic scan driver for the scan window core")]
struct Args {
    /// Run a batch of synthetic frames and print a per-frame summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value_t = 45.0, allow_hyphen_values = true)]
    left_deg: f32,
    #[arg(long, default_value_t = -45.0, allow_hyphen_values = true)]
    right_deg: f32,
    #[arg(long, default_value_t = 2.0)]
    window_deg: f32,
    #[arg(long, default_value_t = 10)]
    frames: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Keep the debug scan bridge alive for incoming frames
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.left_deg,
            args.right_deg,
            args.window_deg,
            args.frames,
            args.seed,
        )
    };

    let runner = Arc::new(Runner::new(workflow_config.clone()));
    info!(
        "watching {} deg and {} deg with a {} deg window",
        runner.config().left_angle_deg,
        runner.config().right_angle_deg,
        runner.config().window_deg
    );
    let gui_bridge = GuiBridge::new();
    if args.serve {
        gui_bridge.serve(gui_bind_address(), runner.clone());
    }

    if args.offline {
        let frames = build_scan_sequence(&workflow_config.generator, workflow_config.frames)?;
        for frame in &frames {
            let report = runner
                .execute(frame, &gui_bridge)
                .with_context(|| format!("processing frame at {:.3}s", frame.header.stamp))?;
            gui_bridge.publish_report(&report, runner.metrics());

            println!(
                "t={:.3}s min {} max {} | left {} {:?} | right {} {:?}",
                report.stamp,
                format_distance(report.min_range),
                format_distance(report.max_range),
                format_distance(report.left.average),
                report.left.window,
                format_distance(report.right.average),
                report.right.window,
            );
        }

        let metrics = runner.metrics();
        info!(
            "offline run finished: {} frames, {} empty windows, {} rejected",
            metrics.processed, metrics.empty_windows, metrics.rejected
        );
        gui_bridge.publish_status("Offline workflow results ready.");
    }

    if args.serve {
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}

fn format_distance(distance: Option<f32>) -> String {
    match distance {
        Some(d) => format!("{:.3}m", d),
        None => "n/a".into(),
    }
}
