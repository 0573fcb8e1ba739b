//! Ignis Lifecycle
//!
//! This crate sequences the lifecycle of a loaded driver image in the Ignis
//! firmware environment. It bridges a freshly loaded image and the
//! host-provided system services, guaranteeing that dependency
//! initialization, the module's own entry points, and cleanup run in a
//! strict, recoverable order, with partial success unwinding cleanly.
//!
//! # Architecture
//!
//! The lifecycle engine is organized into several functional domains:
//!
//! - **Gate**: Revision compatibility check between module and host
//! - **Runner**: Ordered walks over the build-emitted callback lists
//! - **Orchestrator**: The load entry point, its companion exit routine,
//!   and the host-initiated unload path
//! - **Host**: Hosted reference system table used by tests and benchmarks
//!
//! # Usage
//!
//! ```rust
//! use ignis_api::{ImageHandle, ImageManifest, Status};
//! use ignis_lifecycle::host::HostedSystemTable;
//! use ignis_lifecycle::load;
//!
//! static MANIFEST: ImageManifest = ImageManifest {
//!     required_revision: 0,
//!     unload_count: 0,
//!     constructors: &[],
//!     destructors: &[],
//!     entry_points: &[],
//!     unload_handlers: &[],
//! };
//!
//! let table = HostedSystemTable::new(1);
//! let status = load(&MANIFEST, ImageHandle::from_raw(1), &table);
//! assert_eq!(status, Status::Success);
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod gate;
#[cfg(feature = "alloc")]
pub mod host;
pub mod orchestrator;
pub mod runner;

// Re-export commonly used items
pub use gate::{Compatibility, check_revision};
pub use orchestrator::{LifecyclePhase, exit_image, load, unload};
pub use runner::{run_dependency_list, run_entry_point_list, run_unload_list};
