use crate::scan_interface::frame::ScanFrame;
use log::trace;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Receiver of derived frames, typically a visualization topic.
///
/// Publishing is fire-and-forget: implementations must not block the caller
/// and report nothing back.
pub trait ScanSink: Send + Sync {
    fn publish(&self, frame: ScanFrame);
}

impl<F> ScanSink for F
where
    F: Fn(ScanFrame) + Send + Sync,
{
    fn publish(&self, frame: ScanFrame) {
        self(frame)
    }
}

/// Fans frames out to any number of subscribers over a bounded broadcast
/// channel. Slow subscribers lose the oldest frames.
#[derive(Clone)]
pub struct BroadcastSink {
    sender: broadcast::Sender<Arc<ScanFrame>>,
}

impl BroadcastSink {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Arc<ScanFrame>> {
        self.sender.subscribe()
    }
}

impl ScanSink for BroadcastSink {
    fn publish(&self, frame: ScanFrame) {
        if self.sender.send(Arc::new(frame)).is_err() {
            trace!("debug scan dropped: no subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn closure_acts_as_sink() {
        let seen = Mutex::new(Vec::new());
        let sink = |frame: ScanFrame| seen.lock().unwrap().push(frame.ranges.len());
        sink.publish(ScanFrame::from_geometry(0.0, 0.1, 0.0, 1.0, vec![0.5; 3]));
        assert_eq!(*seen.lock().unwrap(), vec![3]);
    }

    #[test]
    fn broadcast_sink_delivers_to_subscribers() {
        let sink = BroadcastSink::new(4);
        let mut rx = sink.subscribe();
        sink.publish(ScanFrame::from_geometry(0.0, 0.1, 0.0, 1.0, vec![0.5; 2]));
        let frame = rx.try_recv().unwrap();
        assert_eq!(frame.ranges, vec![0.5, 0.5]);
    }

    #[test]
    fn broadcast_sink_without_subscribers_does_not_fail() {
        let sink = BroadcastSink::new(1);
        sink.publish(ScanFrame::default());
    }
}
