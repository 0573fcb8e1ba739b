//! Callback hooks invoked by the list runners
//!
//! Each hook list is an ordered sequence emitted by the offline build
//! tooling; membership is fixed before the core ever runs, so the lists are
//! plain static slices rather than any dynamic registry.

use crate::handle::ImageHandle;
use crate::services::SystemServices;
use crate::status::Status;

/// Initialization or teardown hook for one of an image's static
/// dependencies.
///
/// Dependency hooks cannot fail explicitly; anything they need to signal
/// must travel through host-observable side effects.
pub trait DependencyHook: Sync {
    /// Invoke the hook for `image`
    fn invoke(&self, image: ImageHandle, services: &dyn SystemServices);
}

/// Module entry point, run once the image's dependencies are initialized.
pub trait EntryPoint: Sync {
    /// Invoke the entry point for `image`
    fn invoke(&self, image: ImageHandle, services: &dyn SystemServices) -> Status;
}

/// Module teardown logic, run only when the host requests removal of an
/// image that declared unload capability.
pub trait UnloadHandler: Sync {
    /// Invoke the unload handler for `image`
    fn invoke(&self, image: ImageHandle, services: &dyn SystemServices) -> Status;
}

impl<F> DependencyHook for F
where
    F: Fn(ImageHandle, &dyn SystemServices) + Sync,
{
    fn invoke(&self, image: ImageHandle, services: &dyn SystemServices) {
        self(image, services)
    }
}

impl<F> EntryPoint for F
where
    F: Fn(ImageHandle, &dyn SystemServices) -> Status + Sync,
{
    fn invoke(&self, image: ImageHandle, services: &dyn SystemServices) -> Status {
        self(image, services)
    }
}

impl<F> UnloadHandler for F
where
    F: Fn(ImageHandle, &dyn SystemServices) -> Status + Sync,
{
    fn invoke(&self, image: ImageHandle, services: &dyn SystemServices) -> Status {
        self(image, services)
    }
}

/// Ordered constructor or destructor hooks for an image's static
/// dependencies.
///
/// Constructor lists are ordered by dependency depth: a library's own
/// dependencies come before the library itself. Destructor lists mirror
/// that order; the core walks whatever order it is given.
pub type DependencyList = &'static [&'static dyn DependencyHook];

/// Ordered module entry points
pub type EntryPointList = &'static [&'static dyn EntryPoint];

/// Ordered module unload handlers
pub type UnloadList = &'static [&'static dyn UnloadHandler];
