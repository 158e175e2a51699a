use std::fmt;
use std::time::Duration;

/// A bound that can end the generation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    StarLimit,
    LoopLimit,
    TimeLimit,
}

impl TerminationReason {
    pub fn label(&self) -> &'static str {
        match self {
            TerminationReason::StarLimit => "star limit",
            TerminationReason::LoopLimit => "loop limit",
            TerminationReason::TimeLimit => "time limit",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which bounds were reached when the loop exited. Several can hold at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Termination {
    pub star_limit: bool,
    pub loop_limit: bool,
    pub time_limit: bool,
}

impl Termination {
    pub fn reasons(&self) -> Vec<TerminationReason> {
        [
            (self.star_limit, TerminationReason::StarLimit),
            (self.loop_limit, TerminationReason::LoopLimit),
            (self.time_limit, TerminationReason::TimeLimit),
        ]
        .into_iter()
        .filter_map(|(hit, reason)| hit.then_some(reason))
        .collect()
    }

    /// True when the star target was met.
    pub fn completed(&self) -> bool {
        self.star_limit
    }
}

/// Outcome of one generation run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerationStatistics {
    pub elapsed: Duration,
    /// Candidates thrown out for crowding an existing star.
    pub rejected_attempts: u64,
    /// Candidates outside the radial disk. Not counted against the loop limit.
    pub discarded_outside_disk: u64,
    /// Most existing stars that had to be considered for a single candidate.
    pub max_proximity_checks: usize,
    /// Neighbour rings scanned around each candidate's sector.
    pub scan_depth: u32,
    pub termination: Termination,
}
