//! Type-safe identifier wrappers.

mod keyspace_name;

pub use keyspace_name::KeyspaceName;
