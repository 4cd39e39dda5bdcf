//! Filesystem adapters.

mod local;
mod memory;

pub(crate) use local::map_io_error;
pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
