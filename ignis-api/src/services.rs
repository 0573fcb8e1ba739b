//! The host service table visible to loaded images

use crate::handle::ImageHandle;
use crate::manifest::UnloadRoutine;
use crate::status::Status;

/// Host-provided system services.
///
/// The table is owned by the host and outlives every call into the
/// lifecycle core; the core only reads from it and invokes its operations,
/// it never stores the reference. All state a sequence of lifecycle calls
/// needs is threaded explicitly through [`ImageHandle`] and this trait, so
/// several image lifecycles can be in flight without cross-talk.
pub trait SystemServices {
    /// Interface revision offered by the host
    fn revision(&self) -> u32;

    /// Terminate `image`, reporting `status` to the host.
    ///
    /// The lifecycle core calls this exactly once per image, on the
    /// failure-unwind path, after the dependency destructors have run.
    fn exit(&self, image: ImageHandle, status: Status);

    /// Associate `routine` with `image` so a later host-initiated removal
    /// can reach the image's unload path.
    ///
    /// A non-success return means the host refused the registration and the
    /// image cannot be made resident.
    fn register_unload(&self, image: ImageHandle, routine: UnloadRoutine) -> Status;
}
