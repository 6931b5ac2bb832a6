//! Emitter for the `tpie_new` forwarding shims.

use super::{INTERFACE_NEW, UNSAFE_NEW, comma_list};
use crate::signature::InterfaceSignature;

/// Renders one single-line `tpie_new` overload, without a trailing newline.
///
/// The shim does no allocation of its own; it forwards its arguments by
/// name, in position order, to the `tpie_unsafe_new` overload of the same
/// arity with every reference category spelled out explicitly.
///
/// # Examples
///
/// ```
/// use tpie_memgen::bounds::ConstnessMask;
/// use tpie_memgen::emit::interface;
/// use tpie_memgen::signature::InterfaceSignature;
///
/// let mask = ConstnessMask::new(1, 1)?;
/// assert_eq!(
///     interface::render(InterfaceSignature::new(mask)),
///     "template <typename T, typename T0> T * tpie_new(const T0& t0) \
///      {return tpie_unsafe_new<T, const T0&>(t0);}"
/// );
/// # Ok::<(), tpie_memgen::error::MemgenError>(())
/// ```
#[must_use]
pub fn render(signature: InterfaceSignature) -> String {
    format!(
        "template <{}> T * {INTERFACE_NEW}({}) {{return {UNSAFE_NEW}<{}>({});}}",
        comma_list(&signature.template_params()),
        comma_list(&signature.value_params()),
        comma_list(&signature.explicit_args()),
        comma_list(&signature.call_args()),
    )
}
