//! Save progress reporting.
//!
//! Save walks the pack twice: once writing textures, once building
//! records. Each pass reports `begin` with the pack length, then one
//! `step` per card with a monotonically increasing count.

/// Phase of a save.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SavePhase {
    /// Rendering and writing front textures.
    Textures,
    /// Building `cards.json` records.
    Records,
}

/// Observer of save progress.
pub trait SaveProgress {
    /// A phase starts with `total` steps.
    fn begin(&mut self, phase: SavePhase, total: usize);

    /// `done` of the phase's steps are complete.
    fn step(&mut self, phase: SavePhase, done: usize);
}

/// Ignores progress.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl SaveProgress for NoProgress {
    fn begin(&mut self, _phase: SavePhase, _total: usize) {}

    fn step(&mut self, _phase: SavePhase, _done: usize) {}
}

/// Reports progress as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogProgress {
    total: usize,
}

impl SaveProgress for LogProgress {
    fn begin(&mut self, phase: SavePhase, total: usize) {
        self.total = total;
        tracing::info!(?phase, total, "save phase started");
    }

    fn step(&mut self, phase: SavePhase, done: usize) {
        tracing::trace!(?phase, done, total = self.total, "save progress");
    }
}

/// Records every event, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordedProgress {
    pub events: Vec<(SavePhase, ProgressEvent)>,
}

/// One recorded progress event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressEvent {
    Begin { total: usize },
    Step { done: usize },
}

impl RecordedProgress {
    /// The step counts reported for a phase.
    #[must_use]
    pub fn steps(&self, phase: SavePhase) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|(p, e)| match e {
                ProgressEvent::Step { done } if *p == phase => Some(*done),
                _ => None,
            })
            .collect()
    }
}

impl SaveProgress for RecordedProgress {
    fn begin(&mut self, phase: SavePhase, total: usize) {
        self.events.push((phase, ProgressEvent::Begin { total }));
    }

    fn step(&mut self, phase: SavePhase, done: usize) {
        self.events.push((phase, ProgressEvent::Step { done }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_steps() {
        let mut rec = RecordedProgress::default();
        rec.begin(SavePhase::Textures, 2);
        rec.step(SavePhase::Textures, 1);
        rec.step(SavePhase::Textures, 2);
        rec.begin(SavePhase::Records, 2);
        rec.step(SavePhase::Records, 1);

        assert_eq!(rec.steps(SavePhase::Textures), vec![1, 2]);
        assert_eq!(rec.steps(SavePhase::Records), vec![1]);
        assert_eq!(rec.events[0], (SavePhase::Textures, ProgressEvent::Begin { total: 2 }));
    }
}
