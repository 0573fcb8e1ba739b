//! List runners
//!
//! Ordered walks over the build-emitted callback lists. The three runners
//! share one shape: pure sequencing over an immutable list, with no
//! branching on outcome beyond the status fold. Ordering is decided by the
//! offline build tooling; the runners never reorder, skip, or retry.

use ignis_api::{DependencyList, EntryPointList, ImageHandle, Status, SystemServices, UnloadList};

/// Run every dependency hook in `list`, in list order.
///
/// Dependency hooks are defined to not fail explicitly, so the runner
/// continues unconditionally and propagates no status. Hooks may mutate
/// arbitrary state owned by the dependency libraries themselves; that state
/// is opaque here.
pub fn run_dependency_list(list: DependencyList, image: ImageHandle, services: &dyn SystemServices) {
    for hook in list {
        hook.invoke(image, services);
    }
}

/// Run every entry point in `list` and return the aggregate status.
///
/// Every listed entry point is invoked unconditionally; the aggregate is
/// the first non-success code encountered, or success. A failure does not
/// roll back side effects already applied by earlier entry points.
pub fn run_entry_point_list(
    list: EntryPointList,
    image: ImageHandle,
    services: &dyn SystemServices,
) -> Status {
    let mut aggregate = Status::Success;
    for (index, entry_point) in list.iter().enumerate() {
        let status = entry_point.invoke(image, services);
        if status.is_error() {
            #[cfg(feature = "log")]
            log::debug!("image {:?}: entry point {} returned {}", image, index, status);
            #[cfg(not(feature = "log"))]
            let _ = index;
        }
        aggregate = fold_status(aggregate, status);
    }
    aggregate
}

/// Run every unload handler in `list` and return the aggregate status.
///
/// Same aggregation policy as the entry point runner.
pub fn run_unload_list(list: UnloadList, image: ImageHandle, services: &dyn SystemServices) -> Status {
    let mut aggregate = Status::Success;
    for handler in list {
        let status = handler.invoke(image, services);
        aggregate = fold_status(aggregate, status);
    }
    aggregate
}

/// Fold one callback status into the aggregate for a run-all list walk.
///
/// Once the aggregate holds a failure it is sticky; later codes, success or
/// not, cannot displace it.
fn fold_status(aggregate: Status, status: Status) -> Status {
    if aggregate.is_error() { aggregate } else { status }
}
