//! Ignis API
//!
//! This crate provides the core types and host-boundary interfaces for the
//! Ignis firmware environment: image handles, status codes, the callback
//! hooks invoked during an image lifecycle, the build-emitted image
//! manifest, and the system services a host exposes to loaded images.
//!
//! # Architecture
//!
//! The API is organized into several functional domains:
//!
//! - **Handle**: Opaque identifiers for loaded images
//! - **Status**: Result codes shared across the lifecycle boundary
//! - **Hooks**: Callback traits invoked by the list runners
//! - **Manifest**: The build-emitted declaration block for one image
//! - **Services**: The host service table visible to loaded images
//!
//! # Usage
//!
//! ```rust
//! use ignis_api::{ImageHandle, Status};
//!
//! let image = ImageHandle::from_raw(0x1000);
//! assert_eq!(image.as_raw(), 0x1000);
//!
//! let status = Status::from_raw(0).unwrap();
//! assert!(status.is_success());
//! ```

#![no_std]

pub mod handle;
pub mod hooks;
pub mod manifest;
pub mod services;
pub mod status;

// Re-export commonly used items
pub use handle::ImageHandle;
pub use hooks::{DependencyHook, DependencyList, EntryPoint, EntryPointList, UnloadHandler, UnloadList};
pub use manifest::{ImageManifest, UnloadEntryFn, UnloadRoutine};
pub use services::SystemServices;
pub use status::Status;
