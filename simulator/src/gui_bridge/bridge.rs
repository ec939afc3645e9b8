use crate::gui_bridge::model::VisualizationModel;
use crate::workflow::runner::{FrameReport, Runner};
use log::{error, info, warn};
use scancore::telemetry::MetricsSnapshot;
use scancore::{ScanFrame, ScanSink};
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

pub fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

type SharedModel = Arc<RwLock<VisualizationModel>>;

/// Visualization sink: keeps the latest debug scan and frame report and
/// serves them over HTTP.
#[derive(Clone, Default)]
pub struct GuiBridge {
    state: SharedModel,
}

impl GuiBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the HTTP endpoint on its own thread.
    ///
    /// `GET /debug-scan` returns the current model; `POST /ingest` takes a
    /// scan frame, runs it through `runner` and publishes the result here.
    pub fn serve(&self, address: SocketAddr, runner: Arc<Runner>) {
        let bridge_for_filter = self.clone();
        let bridge_filter = warp::any().map(move || bridge_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let get_route = warp::path("debug-scan")
            .and(warp::get())
            .and(bridge_filter.clone())
            .map(|bridge: GuiBridge| warp::reply::json(&bridge.snapshot()));

        let post_route = warp::path("ingest")
            .and(warp::post())
            .and(warp::body::json())
            .and(bridge_filter)
            .and(runner_filter)
            .and_then(
                |frame: ScanFrame, bridge: GuiBridge, runner: Arc<Runner>| async move {
                    match runner.execute(&frame, &bridge) {
                        Ok(report) => {
                            bridge.publish_report(&report, runner.metrics());
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "left": report.left.average,
                                    "right": report.right.average,
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            error!("ingest error: {:#}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(post_route);
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!("failed to build bridge runtime: {}", err);
                    return;
                }
            };
            info!("debug scan bridge listening on {}", address);
            runtime.block_on(async move {
                warp::serve(routes).run(address).await;
            });
        });
    }

    pub fn publish_report(&self, report: &FrameReport, metrics: MetricsSnapshot) {
        match self.state.write() {
            Ok(mut guard) => {
                guard.report = Some(report.clone());
                guard.metrics = metrics;
            }
            Err(_) => warn!("visualization state poisoned, report dropped"),
        }
    }

    pub fn publish_status(&self, message: &str) {
        info!("[GUI] {}", message);
    }

    pub fn snapshot(&self) -> VisualizationModel {
        self.state
            .read()
            .map(|guard| (*guard).clone())
            .unwrap_or_default()
    }
}

impl ScanSink for GuiBridge {
    fn publish(&self, frame: ScanFrame) {
        match self.state.write() {
            Ok(mut guard) => guard.debug_scan = Some(frame),
            Err(_) => warn!("visualization state poisoned, debug scan dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::build_scan_frame;
    use crate::workflow::config::WorkflowConfig;

    #[test]
    fn gui_bridge_updates_state() {
        let cfg = WorkflowConfig::from_args(45.0, -45.0, 2.0, 1, 3);
        let runner = Runner::new(cfg.clone());
        let gui = GuiBridge::new();
        let frame = build_scan_frame(&cfg.generator, 0).unwrap();

        let report = runner.execute(&frame, &gui).unwrap();
        gui.publish_report(&report, runner.metrics());

        let model = gui.snapshot();
        let debug = model.debug_scan.unwrap();
        assert_eq!(debug.ranges.len(), frame.ranges.len());
        assert_eq!(debug.header, frame.header);
        assert_eq!(model.report.unwrap().left.window, report.left.window);
        assert_eq!(model.metrics.processed, 1);
    }

    #[test]
    fn model_serializes_masked_samples_as_null() {
        let gui = GuiBridge::new();
        gui.publish(ScanFrame::from_geometry(0.0, 0.1, 0.0, 5.0, vec![f32::INFINITY, 2.0]));
        let json = serde_json::to_value(gui.snapshot()).unwrap();
        assert_eq!(json["debug_scan"]["ranges"], json!([null, 2.0]));
        assert!(json["report"].is_null());
    }
}
