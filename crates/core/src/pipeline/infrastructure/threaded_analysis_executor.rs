use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender};

use crate::landmarks::domain::landmark_source::{LandmarkFrame, LandmarkSource, SourceError};
use crate::pipeline::analysis_executor::{local_error, AnalysisExecutor, FrameSink};
use crate::pipeline::analysis_session::AnalysisSession;
use crate::pipeline::frame_analysis::FrameMeasurement;

const DEFAULT_CHANNEL_CAPACITY: usize = 8;

type Indexed<T> = Result<(usize, T), SourceError>;

/// Runs landmark reading and per-frame measurement on dedicated threads.
///
/// Layout: `reader → measure → main [stabilize/score]`
///
/// Measurement is stateless, so it overlaps with reading. The session is
/// only touched on the calling thread, in the order frames were read.
pub struct ThreadedAnalysisExecutor {
    channel_capacity: usize,
}

impl ThreadedAnalysisExecutor {
    pub fn new() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl Default for ThreadedAnalysisExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisExecutor for ThreadedAnalysisExecutor {
    fn execute(
        &self,
        source: Box<dyn LandmarkSource>,
        session: &mut AnalysisSession,
        on_frame: &mut FrameSink<'_>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let cap = self.channel_capacity;
        let cancelled = Arc::new(AtomicBool::new(false));

        let (frame_tx, frame_rx) = crossbeam_channel::bounded::<Indexed<LandmarkFrame>>(cap);
        let (measured_tx, measured_rx) =
            crossbeam_channel::bounded::<Indexed<FrameMeasurement>>(cap);

        let reader_handle = spawn_reader(source, frame_tx, cancelled.clone());
        let measure_handle = spawn_measurer(frame_rx, measured_tx, cancelled.clone());

        let main_error = run_main_loop(&measured_rx, session, on_frame, &cancelled);
        drop(measured_rx);

        join_threads(reader_handle, measure_handle, main_error)
    }
}

fn spawn_reader(
    mut source: Box<dyn LandmarkSource>,
    frame_tx: Sender<Indexed<LandmarkFrame>>,
    cancelled: Arc<AtomicBool>,
) -> JoinHandle<Box<dyn LandmarkSource>> {
    std::thread::spawn(move || {
        for (index, frame_result) in source.frames().enumerate() {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            let failed = frame_result.is_err();
            if frame_tx.send(frame_result.map(|f| (index, f))).is_err() || failed {
                break;
            }
        }
        source.close();
        source
    })
}

fn spawn_measurer(
    frame_rx: Receiver<Indexed<LandmarkFrame>>,
    measured_tx: Sender<Indexed<FrameMeasurement>>,
    cancelled: Arc<AtomicBool>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        for frame_result in frame_rx {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            let measured = frame_result
                .map(|(index, frame)| (index, FrameMeasurement::measure(frame.as_ref())));
            if measured_tx.send(measured).is_err() {
                break;
            }
        }
    })
}

/// Applies measurements to the session in arrival order, which is read order.
fn run_main_loop(
    measured_rx: &Receiver<Indexed<FrameMeasurement>>,
    session: &mut AnalysisSession,
    on_frame: &mut FrameSink<'_>,
    cancelled: &AtomicBool,
) -> Option<Box<dyn std::error::Error>> {
    for measured in measured_rx.iter() {
        let (index, measurement) = match measured {
            Ok(pair) => pair,
            Err(e) => {
                cancelled.store(true, Ordering::Relaxed);
                return Some(local_error(e));
            }
        };

        let analysis = session.apply(index, measurement);
        if !on_frame(analysis) {
            cancelled.store(true, Ordering::Relaxed);
            return Some("Cancelled".into());
        }
    }
    None
}

/// Joins pipeline threads and coalesces the first error encountered.
fn join_threads(
    reader_handle: JoinHandle<Box<dyn LandmarkSource>>,
    measure_handle: JoinHandle<()>,
    mut first_error: Option<Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    fn set_if_none(slot: &mut Option<Box<dyn std::error::Error>>, err: Box<dyn std::error::Error>) {
        if slot.is_none() {
            *slot = Some(err);
        }
    }

    if measure_handle.join().is_err() {
        set_if_none(&mut first_error, "Measure thread panicked".into());
    }

    if reader_handle.join().is_err() {
        set_if_none(&mut first_error, "Reader thread panicked".into());
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
