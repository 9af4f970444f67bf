use game_types::FrameOutcome;
use tokio::sync::mpsc;
use tracing::debug;

/// Presentation seam: receives every outcome a round produces, in order
pub trait FrameSink: Send {
    fn handle_frame(&mut self, frame: FrameOutcome);
}

impl FrameSink for mpsc::UnboundedSender<FrameOutcome> {
    fn handle_frame(&mut self, frame: FrameOutcome) {
        if self.send(frame).is_err() {
            debug!("Frame receiver dropped");
        }
    }
}

impl<S: FrameSink + ?Sized> FrameSink for Box<S> {
    fn handle_frame(&mut self, frame: FrameOutcome) {
        (**self).handle_frame(frame)
    }
}

/// Fans one stream of outcomes out to several sinks
#[derive(Default)]
pub struct FrameBus {
    sinks: Vec<Box<dyn FrameSink>>,
}

impl FrameBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sink(&mut self, sink: Box<dyn FrameSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl FrameSink for FrameBus {
    fn handle_frame(&mut self, frame: FrameOutcome) {
        for sink in &mut self.sinks {
            sink.handle_frame(frame.clone());
        }
    }
}
