use crate::{CoreResult, Sample};

use serde::Serialize;

/// Ordered samples of one gesture, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

/// Export envelope: `{"trajectory": [[x, y, elapsed_ms], ...]}`.
#[derive(Serialize)]
struct TrajectoryExport<'a> {
    trajectory: &'a Trajectory,
}

impl Trajectory {
    pub(crate) fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Samples in capture order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of captured samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no sample has been captured.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Elapsed time of the most recent sample, if any.
    pub fn last_elapsed_ms(&self) -> Option<u64> {
        self.samples.last().map(|s| s.elapsed_ms)
    }

    /// Whether elapsed times never decrease along the trajectory.
    pub fn is_time_ordered(&self) -> bool {
        self.samples
            .windows(2)
            .all(|pair| pair[0].elapsed_ms <= pair[1].elapsed_ms)
    }

    /// Serialize as the exported JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecorderError::Serialization`] if serde_json fails.
    #[track_caller]
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(&TrajectoryExport { trajectory: self })?)
    }
}

impl FromIterator<Sample> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}
