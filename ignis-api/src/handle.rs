//! Opaque identifiers for loaded images

use static_assertions::assert_eq_size;

/// Opaque identifier of a loaded image.
///
/// Handles are minted by the host when it loads an image and stay valid for
/// the whole lifetime of that image. The lifecycle core never interprets
/// the token; it holds the handle only for the duration of a call and
/// passes it through to every callback unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ImageHandle(u64);

assert_eq_size!(ImageHandle, u64);

impl ImageHandle {
    /// Wrap a raw host token
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw host token for this handle
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}
