use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    path::PathBuf,
};

use cvdutils::{directory_exists, file_exists, realpath};
use getset::Getters;

use crate::{
    config::{CUTTLEFISH_ASSEMBLY_SUBDIR, CUTTLEFISH_CONFIG_FILENAME},
    CvdError, CvdResult,
};

use super::{DefaultGroupNameGenerator, GroupNameGenerator, InstanceRecord};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// An instance group: virtual device instances that run under a shared home directory.
///
/// The home directory is the identity of the group. Equality and [`Hash`] only look at it, so
/// records can key collections where groups are looked up by home directory. The hash is an
/// identity surrogate; callers must still rely on equality to tell groups apart.
///
/// Instance ids are unique within a group and members keep the order they were added in.
///
/// ## Examples
///
/// ```
/// use cvd::{selector::InstanceGroupRecord, CvdError};
///
/// let mut group = InstanceGroupRecord::with_name_generator(
///     "/tmp/g1",
///     "/opt/cuttlefish/bin",
///     &mut || "cvd".to_string(),
/// );
///
/// group.add_instance(1)?;
/// assert!(matches!(
///     group.add_instance(1),
///     Err(CvdError::DuplicateInstanceId { instance_id: 1, .. })
/// ));
/// group.add_instance(2)?;
///
/// assert!(group.has_instance(1));
/// assert!(!group.has_instance(3));
/// assert_eq!(group.get_instances()[1].internal_device_name(), "cvd-2");
/// # Ok::<(), CvdError>(())
/// ```
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub with_prefix")]
pub struct InstanceGroupRecord {
    /// The home directory of the group.
    home_dir: PathBuf,

    /// The directory holding the host tool binaries used by the group.
    host_binaries_dir: PathBuf,

    /// The name generated for the group at construction.
    internal_group_name: String,

    /// The member instances in insertion order.
    #[getset(skip)]
    instances: Vec<InstanceRecord>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl InstanceGroupRecord {
    /// Creates an empty group with a name from [`DefaultGroupNameGenerator`].
    ///
    /// Neither path is checked for existence.
    pub fn new(home_dir: impl Into<PathBuf>, host_binaries_dir: impl Into<PathBuf>) -> Self {
        Self::with_name_generator(home_dir, host_binaries_dir, &mut DefaultGroupNameGenerator)
    }

    /// Creates an empty group, drawing its internal name from `generator`.
    pub fn with_name_generator(
        home_dir: impl Into<PathBuf>,
        host_binaries_dir: impl Into<PathBuf>,
        generator: &mut impl GroupNameGenerator,
    ) -> Self {
        Self {
            home_dir: home_dir.into(),
            host_binaries_dir: host_binaries_dir.into(),
            internal_group_name: generator.generate(),
            instances: Vec::new(),
        }
    }

    /// Registers a new instance with the given id.
    ///
    /// Fails with [`CvdError::DuplicateInstanceId`] if the id already belongs to the group, in
    /// which case the group is left untouched.
    pub fn add_instance(&mut self, instance_id: i32) -> CvdResult<()> {
        if self.has_instance(instance_id) {
            tracing::warn!(
                group = %self.internal_group_name,
                instance_id,
                "instance id is taken"
            );
            return Err(CvdError::DuplicateInstanceId {
                instance_id,
                group: self.internal_group_name.clone(),
            });
        }

        self.instances
            .push(InstanceRecord::new(instance_id, &self.internal_group_name));
        tracing::debug!(
            group = %self.internal_group_name,
            instance_id,
            "added instance"
        );

        Ok(())
    }

    /// Registers an instance by the id of `instance`.
    ///
    /// Only the id is taken over. The new member is bound to this group regardless of the group
    /// `instance` refers to.
    pub fn add_instance_record(&mut self, instance: &InstanceRecord) -> CvdResult<()> {
        self.add_instance(instance.get_instance_id())
    }

    /// Returns `true` if an instance with the given id belongs to the group.
    pub fn has_instance(&self, instance_id: i32) -> bool {
        self.find_instance(instance_id).is_some()
    }

    /// Returns the member with the given id, if any.
    pub fn find_instance(&self, instance_id: i32) -> Option<&InstanceRecord> {
        self.instances
            .iter()
            .find(|instance| instance.get_instance_id() == instance_id)
    }

    /// Returns the members in the order they were added.
    pub fn get_instances(&self) -> &[InstanceRecord] {
        &self.instances
    }

    /// Returns the number of members.
    pub fn num_instances(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Returns a hash of the home directory.
    ///
    /// Records with equal home directories hash equal. Distinct home directories may collide.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Locates the group's generated `cuttlefish_config.json`.
    ///
    /// The file is expected at `cuttlefish_assembly/cuttlefish_config.json` below the canonical
    /// home directory. Returns `Ok(None)` when the home directory does not exist yet or when the
    /// file has not been generated. Fails with [`CvdError::PathResolution`] when the home
    /// directory exists but cannot be canonicalized.
    pub fn get_cuttlefish_config_path(&self) -> CvdResult<Option<PathBuf>> {
        if !directory_exists(&self.home_dir) {
            tracing::trace!("home directory {} does not exist", self.home_dir.display());
            return Ok(None);
        }

        let home_realpath = realpath(&self.home_dir).map_err(|source| CvdError::PathResolution {
            path: self.home_dir.clone(),
            source,
        })?;

        // The canonical home is absolute and free of `.` and `..`, so joining keeps it that way.
        let config_path = home_realpath
            .join(CUTTLEFISH_ASSEMBLY_SUBDIR)
            .join(CUTTLEFISH_CONFIG_FILENAME);

        if file_exists(&config_path) {
            return Ok(Some(config_path));
        }

        tracing::trace!("config file {} does not exist", config_path.display());
        Ok(None)
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl PartialEq for InstanceGroupRecord {
    fn eq(&self, other: &Self) -> bool {
        self.home_dir == other.home_dir
    }
}

impl Eq for InstanceGroupRecord {}

impl Hash for InstanceGroupRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.home_dir.hash(state);
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn named_group(home_dir: &str, name: &str) -> InstanceGroupRecord {
        InstanceGroupRecord::with_name_generator(home_dir, "/opt/cuttlefish/bin", &mut || {
            name.to_string()
        })
    }

    #[test_log::test]
    fn test_instance_group_record_add_and_query() {
        let mut group = named_group("/tmp/g1", "cvd");

        group.add_instance(1).unwrap();
        assert!(matches!(
            group.add_instance(1),
            Err(CvdError::DuplicateInstanceId { instance_id: 1, ref group }) if group == "cvd"
        ));
        group.add_instance(2).unwrap();

        assert!(group.has_instance(1));
        assert!(group.has_instance(2));
        assert!(!group.has_instance(3));
        assert_eq!(group.num_instances(), 2);
    }

    #[test_log::test]
    fn test_instance_group_record_duplicate_leaves_members_unchanged() {
        let mut group = named_group("/tmp/g1", "cvd");
        for id in [5, 3, 9] {
            group.add_instance(id).unwrap();
        }

        let before = group.get_instances().to_vec();
        assert!(group.add_instance(3).is_err());
        assert_eq!(group.get_instances(), before.as_slice());
    }

    #[test]
    fn test_instance_group_record_membership_matches_added_ids() {
        let ids = [7, 1, -2, 42, 0, 100];
        let mut group = named_group("/tmp/g2", "cvd");
        for id in ids {
            group.add_instance(id).unwrap();
        }

        for id in -8..=128 {
            assert_eq!(group.has_instance(id), ids.contains(&id), "id {id}");
        }

        let order: Vec<i32> = group
            .get_instances()
            .iter()
            .map(|instance| instance.get_instance_id())
            .collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn test_instance_group_record_add_instance_record_rebinds_group() {
        let mut group = named_group("/tmp/g1", "local");
        let foreign = InstanceRecord::new(4, "other");

        group.add_instance_record(&foreign).unwrap();
        assert!(group.add_instance_record(&foreign).is_err());
        assert!(group.add_instance(4).is_err());

        let member = group.find_instance(4).unwrap();
        assert_eq!(member.get_internal_group_name(), "local");
        assert_eq!(member.internal_device_name(), "local-4");
        assert!(group.find_instance(5).is_none());
    }

    #[test]
    fn test_instance_group_record_construction() {
        let group = InstanceGroupRecord::new("/tmp/g1", "/opt/cuttlefish/bin");
        let other = InstanceGroupRecord::new("/tmp/g1", "/opt/cuttlefish/bin");

        assert_eq!(group.get_home_dir(), &PathBuf::from("/tmp/g1"));
        assert_eq!(
            group.get_host_binaries_dir(),
            &PathBuf::from("/opt/cuttlefish/bin")
        );
        assert!(group.get_internal_group_name().starts_with("cvd_"));
        assert_ne!(group.get_internal_group_name(), other.get_internal_group_name());
        assert!(group.is_empty());
    }

    #[test]
    fn test_instance_group_record_hash_code() {
        let mut first = named_group("/tmp/g1", "a");
        let second = named_group("/tmp/g1", "b");
        let third = named_group("/tmp/g3", "a");

        assert_eq!(first.hash_code(), second.hash_code());
        first.add_instance(1).unwrap();
        assert_eq!(first.hash_code(), second.hash_code());
        assert_eq!(first, second);

        assert_ne!(first, third);
        assert_ne!(first.hash_code(), third.hash_code());
    }

    #[test]
    fn test_instance_group_record_keys_set_by_home_dir() {
        let mut groups = HashSet::new();
        assert!(groups.insert(named_group("/tmp/g1", "a")));
        assert!(groups.insert(named_group("/tmp/g2", "b")));
        assert!(!groups.insert(named_group("/tmp/g1", "c")));

        assert_eq!(groups.len(), 2);
        assert!(groups.contains(&named_group("/tmp/g2", "z")));
    }
}
