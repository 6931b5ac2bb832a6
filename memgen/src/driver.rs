//! Enumerates every overload and concatenates the emitted text.
//!
//! Order is fixed: the header line and a blank line, then one
//! `tpie_unsafe_new` block per arity in `0..UNSAFE_ARITY_LIMIT` (each
//! followed by a blank line), then one `tpie_new` line per
//! `(arity, mask)` pair with arity in `0..INTERFACE_ARITY_LIMIT` and mask
//! increasing within each arity. The output is a pure function of the
//! bounds and [`RenderOptions`].

use crate::bounds::{ConstnessMask, INTERFACE_ARITY_LIMIT, UNSAFE_ARITY_LIMIT};
use crate::emit::{RenderOptions, interface, unsafe_ctor};
use crate::signature::{InterfaceSignature, UnsafeSignature};

/// First line of every generated file.
pub const HEADER: &str = "//This file is auto generated, do not edit";

/// Generated text together with what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Complete file contents.
    pub text: String,
    /// Number of overloads emitted per family.
    pub stats: GenerationStats,
}

/// Overload counts for one generation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// `tpie_unsafe_new` definitions emitted.
    pub unsafe_functions: usize,
    /// `tpie_new` definitions emitted.
    pub interface_functions: usize,
}

impl GenerationStats {
    /// Total number of emitted functions.
    #[must_use]
    pub const fn total(self) -> usize {
        self.unsafe_functions + self.interface_functions
    }
}

/// Unsafe signatures in emission order.
pub fn unsafe_signatures() -> impl Iterator<Item = UnsafeSignature> {
    (0..UNSAFE_ARITY_LIMIT).map(UnsafeSignature::new)
}

/// Interface signatures in emission order: arity-major, mask-minor.
pub fn interface_signatures() -> impl Iterator<Item = InterfaceSignature> {
    // INTERFACE_ARITY_LIMIT is const-asserted within MAX_MASK_ARITY.
    (0..INTERFACE_ARITY_LIMIT)
        .filter_map(|arity| ConstnessMask::all(arity).ok())
        .flatten()
        .map(InterfaceSignature::new)
}

/// Runs one full generation pass.
#[must_use]
pub fn generate(options: &RenderOptions) -> Generated {
    let mut text = String::with_capacity(192 * 1024);
    let mut stats = GenerationStats::default();

    text.push_str(HEADER);
    text.push_str("\n\n");

    for signature in unsafe_signatures() {
        tracing::trace!(arity = signature.arity(), "emitting unsafe constructor");
        text.push_str(&unsafe_ctor::render(signature, options));
        text.push('\n');
        stats.unsafe_functions += 1;
    }
    tracing::debug!(count = stats.unsafe_functions, "unsafe constructors emitted");

    for signature in interface_signatures() {
        text.push_str(&interface::render(signature));
        text.push('\n');
        stats.interface_functions += 1;
    }
    tracing::debug!(count = stats.interface_functions, "interface overloads emitted");

    Generated { text, stats }
}
