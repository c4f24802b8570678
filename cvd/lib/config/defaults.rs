//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// The sub directory of a group's home directory where the assembled runtime configuration lives.
pub const CUTTLEFISH_ASSEMBLY_SUBDIR: &str = "cuttlefish_assembly";

/// The filename of a group's generated runtime configuration.
pub const CUTTLEFISH_CONFIG_FILENAME: &str = "cuttlefish_config.json";

/// The prefix of internal group names produced by the default name generator.
pub const DEFAULT_GROUP_NAME_PREFIX: &str = "cvd";
