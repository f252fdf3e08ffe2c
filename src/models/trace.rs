//! Execution trace (Gantt record).
//!
//! One entry per busy tick, naming the process that held the CPU.
//! Idle ticks are never recorded, so the trace length always equals the
//! total burst time of the workload that produced it.

use serde::{Deserialize, Serialize};

use super::{ProcessId, Ticks};

/// Ordered per-tick log of CPU ownership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionTrace {
    slots: Vec<ProcessId>,
}

/// A contiguous run of ticks owned by one process.
///
/// `start` and `end` are positions in the trace (busy ticks), not clock
/// times: idle gaps are not part of the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceSegment {
    /// Process that held the CPU.
    pub process_id: ProcessId,
    /// First trace position (inclusive).
    pub start: Ticks,
    /// Last trace position (exclusive).
    pub end: Ticks,
}

impl TraceSegment {
    /// Length of the segment in ticks.
    #[inline]
    pub fn len(&self) -> Ticks {
        self.end - self.start
    }

    /// Whether the segment covers no ticks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

impl ExecutionTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trace with room for `ticks` entries.
    pub fn with_capacity(ticks: usize) -> Self {
        Self {
            slots: Vec::with_capacity(ticks),
        }
    }

    /// Records `ticks` consecutive busy ticks for `process_id`.
    pub fn record(&mut self, process_id: ProcessId, ticks: Ticks) {
        self.slots
            .extend(std::iter::repeat(process_id).take(ticks as usize));
    }

    /// Number of recorded ticks.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total busy ticks.
    #[inline]
    pub fn busy_ticks(&self) -> Ticks {
        self.slots.len() as Ticks
    }

    /// The raw per-tick entries.
    pub fn as_slice(&self) -> &[ProcessId] {
        &self.slots
    }

    /// Iterates over per-tick entries.
    pub fn iter(&self) -> impl Iterator<Item = ProcessId> + '_ {
        self.slots.iter().copied()
    }

    /// Ticks recorded for a given process.
    pub fn ticks_for(&self, process_id: ProcessId) -> Ticks {
        self.slots.iter().filter(|&&id| id == process_id).count() as Ticks
    }

    /// Compresses the trace into contiguous per-process segments.
    pub fn segments(&self) -> Vec<TraceSegment> {
        let mut segments: Vec<TraceSegment> = Vec::new();
        for (pos, &id) in self.slots.iter().enumerate() {
            let pos = pos as Ticks;
            match segments.last_mut() {
                Some(last) if last.process_id == id => last.end = pos + 1,
                _ => segments.push(TraceSegment {
                    process_id: id,
                    start: pos,
                    end: pos + 1,
                }),
            }
        }
        segments
    }
}

impl From<Vec<ProcessId>> for ExecutionTrace {
    fn from(slots: Vec<ProcessId>) -> Self {
        Self { slots }
    }
}
