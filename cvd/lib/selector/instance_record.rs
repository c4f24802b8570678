use std::fmt;

use getset::{CopyGetters, Getters};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A single virtual device instance registered to an instance group.
///
/// The instance id is only unique within the owning group. The record refers to its group by
/// the group's internal name and does not own it.
///
/// ## Examples
///
/// ```
/// use cvd::selector::InstanceRecord;
///
/// let instance = InstanceRecord::new(3, "cvd_1");
///
/// assert_eq!(instance.get_instance_id(), 3);
/// assert_eq!(instance.get_internal_name(), "3");
/// assert_eq!(instance.internal_device_name(), "cvd_1-3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct InstanceRecord {
    /// The id of the instance, unique within its group.
    #[getset(get_copy = "pub with_prefix")]
    instance_id: i32,

    /// The id rendered as the instance's internal name.
    #[getset(get = "pub with_prefix")]
    internal_name: String,

    /// The internal name of the group the instance belongs to.
    #[getset(get = "pub with_prefix")]
    internal_group_name: String,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl InstanceRecord {
    /// Creates a new `InstanceRecord` bound to the group named `internal_group_name`.
    pub fn new(instance_id: i32, internal_group_name: impl Into<String>) -> Self {
        Self {
            instance_id,
            internal_name: instance_id.to_string(),
            internal_group_name: internal_group_name.into(),
        }
    }

    /// Returns the name host tools know the device by: `<group>-<instance>`.
    pub fn internal_device_name(&self) -> String {
        format!("{}-{}", self.internal_group_name, self.internal_name)
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl fmt::Display for InstanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.internal_device_name())
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
