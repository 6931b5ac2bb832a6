//! C++ text emitters for the construction overloads.
//!
//! [`unsafe_ctor`] renders the `tpie_unsafe_new` family that performs
//! allocate/construct/finalize; [`interface`] renders the `tpie_new` shims
//! that forward to it with pinned reference categories.

pub mod interface;
pub mod unsafe_ctor;

/// Function performing the guarded allocation and construction.
pub const UNSAFE_NEW: &str = "tpie_unsafe_new";

/// Public forwarding function, one overload per constness combination.
pub const INTERFACE_NEW: &str = "tpie_new";

/// Scoped guard type that owns the raw storage until `finalize()`.
pub const GUARD_TYPE: &str = "allocation_scope_magic";

/// MSVC diagnostic C4345 ("behavior change: an object of POD type
/// constructed with an initializer of the form () will be
/// default-initialized"), silenced around the placement construction.
pub const SUPPRESSED_WARNING: u16 = 4345;

/// Rendering switches shared by the emitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Bracket the placement construction with `#ifdef WIN32` warning
    /// push/pop pragmas.
    pub warning_pragmas: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            warning_pragmas: true,
        }
    }
}

/// Joins list items with `", "`; an empty list yields an empty string.
pub(crate) fn comma_list(items: &[String]) -> String {
    items.join(", ")
}
