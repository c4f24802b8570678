use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::DEFAULT_GROUP_NAME_PREFIX;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

static GROUP_NAME_COUNTER: AtomicU64 = AtomicU64::new(1);

//--------------------------------------------------------------------------------------------------
// Traits
//--------------------------------------------------------------------------------------------------

/// A source of internal group names.
///
/// A name is drawn exactly once per [`InstanceGroupRecord`](super::InstanceGroupRecord), when the
/// record is constructed. Any `FnMut() -> String` closure is a generator, which lets callers
/// supply deterministic names.
pub trait GroupNameGenerator {
    /// Produces the next internal group name.
    fn generate(&mut self) -> String;
}

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Generates `cvd_<n>` names from a process-wide counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGroupNameGenerator;

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl GroupNameGenerator for DefaultGroupNameGenerator {
    fn generate(&mut self) -> String {
        let n = GROUP_NAME_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("{DEFAULT_GROUP_NAME_PREFIX}_{n}")
    }
}

impl<F> GroupNameGenerator for F
where
    F: FnMut() -> String,
{
    fn generate(&mut self) -> String {
        self()
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
