//! Lifecycle orchestrator
//!
//! The top-level driver entry point and its companions. `load` drives one
//! image through the full load protocol; `exit_image` is the teardown
//! routine shared by the failure unwind and module-initiated termination;
//! `unload` is the entry path a host reaches through the routine registered
//! at load time.
//!
//! The orchestrator never retries and never reinterprets a failure code:
//! every status is surfaced verbatim to the caller. It also owns no state
//! of its own, so lifecycles of distinct image handles cannot cross-talk.

use ignis_api::{ImageHandle, ImageManifest, Status, SystemServices, UnloadRoutine};

use crate::gate::{Compatibility, check_revision};
use crate::runner::{run_dependency_list, run_entry_point_list, run_unload_list};

/// Phases an image lifecycle passes through.
///
/// The load machine runs `Start -> Gated -> Constructed -> Run ->
/// {Registered, Unwinding} -> Exited`; the unload machine, entered only
/// from `Registered`, runs `UnloadInvoked -> Destructed -> Exited`. The
/// orchestrator is a straight run-to-completion sequence, so phases exist
/// for transition diagnostics rather than for resumable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Load call received, nothing has run
    Start,
    /// Revision gate passed
    Gated,
    /// Dependency constructors have run
    Constructed,
    /// Entry points have run, aggregate status captured
    Run,
    /// Image resident; unload routine registered if one was declared
    Registered,
    /// Failure captured, destructors running
    Unwinding,
    /// Host invoked the registered unload path
    UnloadInvoked,
    /// Destructors have run on the unload path
    Destructed,
    /// Lifecycle complete; the handle is no longer valid for reentry
    Exited,
}

fn transition(image: ImageHandle, phase: LifecyclePhase) {
    #[cfg(feature = "log")]
    log::debug!("image {:?}: entering {:?}", image, phase);
    #[cfg(not(feature = "log"))]
    let _ = (image, phase);
}

/// Load entry point for a driver image.
///
/// Sequences the full load protocol: revision gate, dependency
/// constructors, module entry points, then either unload registration or
/// the failure unwind. On success the image remains resident and the call
/// returns success; on any failure the destructors run, the host exit
/// service fires with the captured status, and that status is returned.
///
/// An image whose revision requirement exceeds the host's offered revision
/// observably runs nothing: no constructor, no entry point, no
/// registration, just the single incompatibility status.
pub fn load(
    manifest: &'static ImageManifest,
    image: ImageHandle,
    services: &dyn SystemServices,
) -> Status {
    transition(image, LifecyclePhase::Start);

    let declared = manifest.validate();
    if declared.is_error() {
        #[cfg(feature = "log")]
        log::warn!(
            "image {:?}: rejected manifest, {} unload handlers declared but {} listed",
            image,
            manifest.unload_count,
            manifest.unload_handlers.len()
        );
        return declared;
    }

    if check_revision(manifest.required_revision, services.revision()) == Compatibility::Incompatible {
        transition(image, LifecyclePhase::Exited);
        return Status::IncompatibleVersion;
    }
    transition(image, LifecyclePhase::Gated);

    run_dependency_list(manifest.constructors, image, services);
    transition(image, LifecyclePhase::Constructed);

    let status = run_entry_point_list(manifest.entry_points, image, services);
    transition(image, LifecyclePhase::Run);

    if status.is_error() {
        transition(image, LifecyclePhase::Unwinding);
        return exit_image(manifest, image, services, status);
    }

    if manifest.declares_unload() {
        let registered = services.register_unload(image, UnloadRoutine::new(manifest, unload));
        if registered.is_error() {
            // A resident image the host can never remove is worse than a
            // failed load; unwind exactly as if an entry point had failed.
            transition(image, LifecyclePhase::Unwinding);
            return exit_image(manifest, image, services, registered);
        }
    }

    transition(image, LifecyclePhase::Registered);
    Status::Success
}

/// Companion exit routine: tear down `image` and report `status` to the
/// host.
///
/// Runs the dependency destructors, then fires the host exit service with
/// the status being reported, and hands that status back. The load path
/// calls this for its failure unwind; module code may also call it directly
/// to terminate.
pub fn exit_image(
    manifest: &ImageManifest,
    image: ImageHandle,
    services: &dyn SystemServices,
    status: Status,
) -> Status {
    run_dependency_list(manifest.destructors, image, services);
    services.exit(image, status);
    transition(image, LifecyclePhase::Exited);
    status
}

/// Host-initiated unload path for a resident image.
///
/// Runs the module's unload handlers; on success the dependency destructors
/// run and the image is torn down. On failure the module has judged itself
/// not safely removable: nothing is torn down, the image stays resident
/// with its registration intact, and the failure code is returned to the
/// host.
///
/// Invoking this for an image that declared no unload capability is a
/// caller contract violation and is rejected without running anything.
pub fn unload(
    manifest: &'static ImageManifest,
    image: ImageHandle,
    services: &dyn SystemServices,
) -> Status {
    if !manifest.declares_unload() {
        #[cfg(feature = "log")]
        log::warn!("image {:?}: unload requested but none declared", image);
        return Status::InvalidParameter;
    }
    transition(image, LifecyclePhase::UnloadInvoked);

    let status = run_unload_list(manifest.unload_handlers, image, services);
    if status.is_error() {
        return status;
    }

    run_dependency_list(manifest.destructors, image, services);
    transition(image, LifecyclePhase::Destructed);

    transition(image, LifecyclePhase::Exited);
    Status::Success
}
