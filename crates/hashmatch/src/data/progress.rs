use crate::data::options::HashPhase;

/// Snapshot of a running hash operation, passed to progress callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// Current phase of the operation.
    pub phase: HashPhase,

    /// Bytes fed into the digest session so far.
    pub bytes_processed: u64,

    /// Total source length, when the source declares one.
    pub total_bytes: Option<u64>,

    /// Chunks fed into the digest session so far.
    pub chunks_processed: u64,
}

impl Progress {
    /// Percentage of the source consumed, if the total is known.
    pub fn percentage(&self) -> Option<f64> {
        self.total_bytes.map(|total| {
            if total == 0 {
                100.0
            } else {
                (self.bytes_processed as f64 / total as f64) * 100.0
            }
        })
    }

    pub fn is_completed(&self) -> bool { self.phase == HashPhase::Completed }
}
