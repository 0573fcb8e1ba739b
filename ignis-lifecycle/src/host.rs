//! Hosted reference system table
//!
//! An in-memory implementation of the host service boundary, used by the
//! integration tests and benchmarks. It keeps the per-image unload
//! registration table a real host would keep, and records every observable
//! interaction in an append-only trace so callers can assert on exact
//! ordering. It is a stand-in for a firmware host, not an implementation of
//! one.

use alloc::vec::Vec;
use hashbrown::HashMap;
use spin::Mutex;

use ignis_api::{ImageHandle, Status, SystemServices, UnloadRoutine};

/// One observable host interaction.
///
/// Registration and exit events are appended by the table itself; callback
/// events are appended by test hooks through [`HostedSystemTable::record`],
/// each carrying the marker the hook was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// A dependency constructor ran
    Constructor(u32),
    /// A module entry point ran
    EntryPoint(u32),
    /// A module unload handler ran
    UnloadHandler(u32),
    /// A dependency destructor ran
    Destructor(u32),
    /// An unload routine was offered for registration
    Registered(ImageHandle),
    /// The exit service fired
    Exited(ImageHandle, Status),
}

/// Hosted reference implementation of [`SystemServices`].
pub struct HostedSystemTable {
    revision: u32,
    registration_status: Status,
    trace: Mutex<Vec<HostEvent>>,
    routines: Mutex<HashMap<u64, UnloadRoutine>>,
}

impl HostedSystemTable {
    /// Create a table offering `revision`
    pub fn new(revision: u32) -> Self {
        Self {
            revision,
            registration_status: Status::Success,
            trace: Mutex::new(Vec::new()),
            routines: Mutex::new(HashMap::new()),
        }
    }

    /// Make every future registration call fail with `status`
    pub fn refuse_registration(mut self, status: Status) -> Self {
        self.registration_status = status;
        self
    }

    /// Append an interaction to the trace
    pub fn record(&self, event: HostEvent) {
        self.trace.lock().push(event);
    }

    /// Snapshot of the trace so far
    pub fn events(&self) -> Vec<HostEvent> {
        self.trace.lock().clone()
    }

    /// Routine registered for `image`, if any
    pub fn registered(&self, image: ImageHandle) -> Option<UnloadRoutine> {
        self.routines.lock().get(&image.as_raw()).copied()
    }

    /// Dispatch a host-initiated unload for `image`.
    ///
    /// Looks up the registered routine and invokes it against this table. A
    /// successful unload drops the registration, mirroring how a host
    /// disposes of a removed image; a failed unload leaves the image
    /// registered and resident.
    pub fn request_unload(&self, image: ImageHandle) -> Status {
        let routine = match self.registered(image) {
            Some(routine) => routine,
            None => return Status::NotFound,
        };

        let status = routine.invoke(image, self);
        if status.is_success() {
            self.routines.lock().remove(&image.as_raw());
        }
        status
    }
}

impl SystemServices for HostedSystemTable {
    fn revision(&self) -> u32 {
        self.revision
    }

    fn exit(&self, image: ImageHandle, status: Status) {
        self.record(HostEvent::Exited(image, status));
    }

    fn register_unload(&self, image: ImageHandle, routine: UnloadRoutine) -> Status {
        self.record(HostEvent::Registered(image));
        if self.registration_status.is_error() {
            return self.registration_status;
        }
        self.routines.lock().insert(image.as_raw(), routine);
        Status::Success
    }
}
