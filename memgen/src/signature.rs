//! Signature derivation for the generated overloads.
//!
//! Each signature is fully determined by its inputs: an arity for
//! `tpie_unsafe_new`, a [`ConstnessMask`] for `tpie_new`. The pieces are kept
//! as ordered lists so tests can inspect them position by position before the
//! emitters join them into text.

use crate::bounds::{ConstnessMask, RefKind};

/// Name of the template parameter for argument `position`.
#[must_use]
pub fn type_param(position: usize) -> String {
    format!("T{position}")
}

/// Name of the value parameter for argument `position`.
#[must_use]
pub fn value_name(position: usize) -> String {
    format!("t{position}")
}

fn template_params(arity: usize) -> Vec<String> {
    std::iter::once("typename T".to_owned())
        .chain((0..arity).map(|position| format!("typename {}", type_param(position))))
        .collect()
}

fn call_args(arity: usize) -> Vec<String> {
    (0..arity).map(value_name).collect()
}

/// Signature of the `tpie_unsafe_new` overload taking `arity` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsafeSignature {
    arity: usize,
}

impl UnsafeSignature {
    /// Signature for `arity` forwarded arguments.
    #[must_use]
    pub const fn new(arity: usize) -> Self {
        Self { arity }
    }

    /// Number of forwarded arguments.
    #[must_use]
    pub const fn arity(self) -> usize {
        self.arity
    }

    /// `typename T, typename T0, …` in declaration order.
    #[must_use]
    pub fn template_params(self) -> Vec<String> {
        template_params(self.arity)
    }

    /// `T0 t0, T1 t1, …`; arguments are taken as the deduced types.
    #[must_use]
    pub fn value_params(self) -> Vec<String> {
        (0..self.arity)
            .map(|position| format!("{} {}", type_param(position), value_name(position)))
            .collect()
    }

    /// Arguments handed to the placement construction, `t0, t1, …`.
    #[must_use]
    pub fn call_args(self) -> Vec<String> {
        call_args(self.arity)
    }
}

/// Signature of one `tpie_new` overload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceSignature {
    mask: ConstnessMask,
}

impl InterfaceSignature {
    /// Signature whose argument constness follows `mask`.
    #[must_use]
    pub const fn new(mask: ConstnessMask) -> Self {
        Self { mask }
    }

    /// Constness selection backing this signature.
    #[must_use]
    pub const fn mask(self) -> ConstnessMask {
        self.mask
    }

    /// Number of forwarded arguments.
    #[must_use]
    pub const fn arity(self) -> usize {
        self.mask.arity()
    }

    /// The unsafe overload this shim forwards to.
    #[must_use]
    pub const fn target(self) -> UnsafeSignature {
        UnsafeSignature::new(self.arity())
    }

    /// `typename T, typename T0, …` in declaration order.
    #[must_use]
    pub fn template_params(self) -> Vec<String> {
        template_params(self.arity())
    }

    /// `T0& t0` or `const T0& t0` per position.
    #[must_use]
    pub fn value_params(self) -> Vec<String> {
        self.kinds()
            .enumerate()
            .map(|(position, kind)| {
                format!("{} {}", kind.qualify(&type_param(position)), value_name(position))
            })
            .collect()
    }

    /// Explicit template arguments pinned on the forwarded call.
    ///
    /// `T` first, then each argument type qualified exactly as the matching
    /// value parameter, so the unsafe overload never deduces a different
    /// reference category.
    #[must_use]
    pub fn explicit_args(self) -> Vec<String> {
        std::iter::once("T".to_owned())
            .chain(
                self.kinds()
                    .enumerate()
                    .map(|(position, kind)| kind.qualify(&type_param(position))),
            )
            .collect()
    }

    /// Arguments of the forwarded call, `t0, t1, …`.
    #[must_use]
    pub fn call_args(self) -> Vec<String> {
        call_args(self.arity())
    }

    /// Reference category of each argument, in position order.
    pub fn kinds(self) -> impl Iterator<Item = RefKind> {
        self.mask.kinds()
    }
}
