//! Records for instance groups and their member instances.

mod group_name;
mod instance_group_record;
mod instance_record;

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub use group_name::*;
pub use instance_group_record::*;
pub use instance_record::*;
