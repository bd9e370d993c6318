/// Doctor and pharmacy overlap between two plan networks, as reported by a
/// network source collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkComparison {
    pub doctors_lost: u32,
    pub doctors_gained: u32,
    pub pharmacies_lost: u32,
    pub pharmacies_gained: u32,
    pub coverage_changes: Vec<String>,
}

/// The user-facing delta of switching from a baseline plan to a candidate.
///
/// Owned by the caller for a single render; recomputed from scratch on every
/// invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanChangeImpact {
    /// Yearly premium delta, negated so positive means the candidate is
    /// cheaper.
    pub yearly_savings: i64,

    pub doctors_lost: u32,
    pub doctors_gained: u32,
    pub pharmacies_lost: u32,
    pub pharmacies_gained: u32,

    /// Free-text coverage notes from the network source, order preserved.
    pub coverage_changes: Vec<String>,
}

impl PlanChangeImpact {
    pub fn has_savings(&self) -> bool {
        self.yearly_savings > 0
    }

    pub fn has_losses(&self) -> bool {
        self.doctors_lost > 0 || self.pharmacies_lost > 0 || !self.coverage_changes.is_empty()
    }

    /// Whether the impact is worth surfacing at all.
    ///
    /// Zero savings with no losses suppresses the banner even when gains are
    /// nonzero. This reproduces the reference behavior literally; product has
    /// not confirmed whether hiding pure gains is intentional.
    pub fn should_display(&self) -> bool {
        self.yearly_savings != 0 || self.has_losses()
    }
}
