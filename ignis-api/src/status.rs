//! Result codes shared across the lifecycle boundary

use core::fmt;
use static_assertions::assert_eq_size;

/// Result code returned across the image lifecycle boundary.
///
/// Discriminants follow the firmware interface status numbering, so a code
/// survives a round trip through hosts that traffic in raw values. The
/// lifecycle core never branches on a specific failure code, only on
/// success versus non-success; failure codes originate in module callbacks
/// and pass through to the host untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Status {
    /// Operation completed normally
    Success = 0,
    /// The image could not be loaded
    LoadError = 1,
    /// A parameter violated the caller contract
    InvalidParameter = 2,
    /// The operation is not supported by the host
    Unsupported = 3,
    /// A hardware or device fault was reported
    DeviceError = 7,
    /// A required resource could not be allocated
    OutOfResources = 9,
    /// The requested item does not exist
    NotFound = 14,
    /// Access to the resource was denied
    AccessDenied = 15,
    /// The operation timed out
    Timeout = 18,
    /// The operation was aborted by the callee
    Aborted = 21,
    /// The module requires a newer host interface revision
    IncompatibleVersion = 25,
}

assert_eq_size!(Status, u32);

impl Status {
    /// Whether this code reports success
    pub const fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Whether this code reports any failure kind
    pub const fn is_error(self) -> bool {
        !self.is_success()
    }

    /// Decode a raw host status code.
    ///
    /// Returns `None` for values outside the fixed enumeration.
    pub const fn from_raw(raw: u32) -> Option<Status> {
        match raw {
            0 => Some(Status::Success),
            1 => Some(Status::LoadError),
            2 => Some(Status::InvalidParameter),
            3 => Some(Status::Unsupported),
            7 => Some(Status::DeviceError),
            9 => Some(Status::OutOfResources),
            14 => Some(Status::NotFound),
            15 => Some(Status::AccessDenied),
            18 => Some(Status::Timeout),
            21 => Some(Status::Aborted),
            25 => Some(Status::IncompatibleVersion),
            _ => None,
        }
    }

    /// Raw status code for this value
    pub const fn as_raw(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => write!(f, "success"),
            Status::LoadError => write!(f, "load error"),
            Status::InvalidParameter => write!(f, "invalid parameter"),
            Status::Unsupported => write!(f, "unsupported"),
            Status::DeviceError => write!(f, "device error"),
            Status::OutOfResources => write!(f, "out of resources"),
            Status::NotFound => write!(f, "not found"),
            Status::AccessDenied => write!(f, "access denied"),
            Status::Timeout => write!(f, "timed out"),
            Status::Aborted => write!(f, "aborted"),
            Status::IncompatibleVersion => write!(f, "incompatible version"),
        }
    }
}
