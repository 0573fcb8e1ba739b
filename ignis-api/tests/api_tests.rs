//! API tests

use ignis_api::{ImageHandle, ImageManifest, Status, SystemServices, UnloadRoutine};

static EMPTY_MANIFEST: ImageManifest = ImageManifest {
    required_revision: 0,
    unload_count: 0,
    constructors: &[],
    destructors: &[],
    entry_points: &[],
    unload_handlers: &[],
};

struct NullServices;

impl SystemServices for NullServices {
    fn revision(&self) -> u32 {
        0
    }

    fn exit(&self, _image: ImageHandle, _status: Status) {}

    fn register_unload(&self, _image: ImageHandle, _routine: UnloadRoutine) -> Status {
        Status::Success
    }
}

fn routine_entry(
    manifest: &'static ImageManifest,
    image: ImageHandle,
    _services: &dyn SystemServices,
) -> Status {
    // The routine must hand back exactly the manifest and handle it was
    // built with.
    if core::ptr::eq(manifest, &EMPTY_MANIFEST) && image.as_raw() == 42 {
        Status::Success
    } else {
        Status::LoadError
    }
}

#[test]
fn test_status_pass_through_values() {
    // Raw codes decode to the fixed enumeration and back
    for status in [
        Status::Success,
        Status::LoadError,
        Status::DeviceError,
        Status::IncompatibleVersion,
    ] {
        assert_eq!(Status::from_raw(status.as_raw()), Some(status));
    }

    // Values outside the enumeration are rejected, not coerced
    assert_eq!(Status::from_raw(1000), None);
}

#[test]
fn test_status_display() {
    assert_eq!(Status::IncompatibleVersion.to_string(), "incompatible version");
    assert_eq!(Status::Success.to_string(), "success");
}

#[test]
fn test_handle_is_opaque_token() {
    let image = ImageHandle::from_raw(0x8000_0000_0000_0001);
    assert_eq!(image.as_raw(), 0x8000_0000_0000_0001);
    assert_eq!(image, ImageHandle::from_raw(0x8000_0000_0000_0001));
}

#[test]
fn test_manifest_declaration_consistency() {
    assert_eq!(EMPTY_MANIFEST.validate(), Status::Success);
    assert!(!EMPTY_MANIFEST.declares_unload());

    let mut mismatched = EMPTY_MANIFEST;
    mismatched.unload_count = 1;
    assert!(mismatched.declares_unload());
    assert_eq!(mismatched.validate(), Status::InvalidParameter);
}

#[test]
fn test_unload_routine_dispatch() {
    let routine = UnloadRoutine::new(&EMPTY_MANIFEST, routine_entry);
    assert!(core::ptr::eq(routine.manifest(), &EMPTY_MANIFEST));

    let status = routine.invoke(ImageHandle::from_raw(42), &NullServices);
    assert_eq!(status, Status::Success);
}

#[test]
fn test_unload_routine_is_copyable() {
    // Hosts store routines in their own tables; the pair must copy without
    // touching the manifest.
    let routine = UnloadRoutine::new(&EMPTY_MANIFEST, routine_entry);
    let stored = routine;
    assert_eq!(stored.invoke(ImageHandle::from_raw(42), &NullServices), Status::Success);
    assert_eq!(routine.invoke(ImageHandle::from_raw(42), &NullServices), Status::Success);
}
