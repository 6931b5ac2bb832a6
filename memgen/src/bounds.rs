//! Arity bounds and per-argument reference constness.
//!
//! The limits are a contract with the C++ code that includes the generated
//! header: callers of `tpie_new` rely on overloads existing up to these
//! arities, so changing either constant means regenerating and re-checking
//! every consumer.

use crate::error::MemgenError;

/// Exclusive upper bound on unsafe constructor arities (`0..20`).
pub const UNSAFE_ARITY_LIMIT: usize = 20;

/// Exclusive upper bound on interface constructor arities (`0..9`).
///
/// Arities from here up to [`UNSAFE_ARITY_LIMIT`] are reachable only through
/// `tpie_unsafe_new`.
pub const INTERFACE_ARITY_LIMIT: usize = 9;

/// Widest arity a [`ConstnessMask`] can describe.
pub const MAX_MASK_ARITY: usize = 31;

const _: () = assert!(INTERFACE_ARITY_LIMIT <= MAX_MASK_ARITY + 1);

/// Reference category bound to one forwarded argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// `T&`
    Mutable,
    /// `const T&`
    Const,
}

impl RefKind {
    /// Qualifies `ty` as a reference of this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use tpie_memgen::bounds::RefKind;
    ///
    /// assert_eq!(RefKind::Mutable.qualify("T0"), "T0&");
    /// assert_eq!(RefKind::Const.qualify("T3"), "const T3&");
    /// ```
    #[must_use]
    pub fn qualify(self, ty: &str) -> String {
        match self {
            Self::Mutable => format!("{ty}&"),
            Self::Const => format!("const {ty}&"),
        }
    }
}

/// Selects const or mutable references for each argument of an interface
/// overload.
///
/// Bit `i` set means argument `i` binds as `const Ti&`; clear means `Ti&`.
/// Bits at or above the arity are never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstnessMask {
    arity: usize,
    bits: u32,
}

impl ConstnessMask {
    /// Builds a mask for `arity` arguments.
    ///
    /// # Errors
    ///
    /// Returns [`MemgenError::ArityOutOfRange`] when `arity` exceeds
    /// [`MAX_MASK_ARITY`] and [`MemgenError::MaskOutOfRange`] when `bits`
    /// is not below `2^arity`.
    pub const fn new(arity: usize, bits: u32) -> Result<Self, MemgenError> {
        if arity > MAX_MASK_ARITY {
            return Err(MemgenError::ArityOutOfRange {
                arity,
                max: MAX_MASK_ARITY,
            });
        }
        if bits >= mask_count(arity) {
            return Err(MemgenError::MaskOutOfRange { arity, mask: bits });
        }
        Ok(Self { arity, bits })
    }

    /// Enumerates every mask for `arity`, from `0` up to `2^arity - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`MemgenError::ArityOutOfRange`] when `arity` exceeds
    /// [`MAX_MASK_ARITY`].
    pub const fn all(arity: usize) -> Result<MaskSweep, MemgenError> {
        if arity > MAX_MASK_ARITY {
            return Err(MemgenError::ArityOutOfRange {
                arity,
                max: MAX_MASK_ARITY,
            });
        }
        Ok(MaskSweep::new(arity))
    }

    /// Number of arguments this mask covers.
    #[must_use]
    pub const fn arity(self) -> usize {
        self.arity
    }

    /// Raw mask bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Reference category for argument `position`.
    ///
    /// Positions past the arity report [`RefKind::Mutable`].
    #[must_use]
    pub const fn ref_kind(self, position: usize) -> RefKind {
        if position < self.arity && self.bits & (1_u32 << position) != 0 {
            RefKind::Const
        } else {
            RefKind::Mutable
        }
    }

    /// Reference categories in argument order.
    pub fn kinds(self) -> impl Iterator<Item = RefKind> {
        (0..self.arity).map(move |position| self.ref_kind(position))
    }
}

/// Iterator over every [`ConstnessMask`] of one arity, in increasing order.
#[derive(Debug, Clone)]
pub struct MaskSweep {
    arity: usize,
    next: u32,
    end: u32,
}

impl MaskSweep {
    /// Caller guarantees `arity <= MAX_MASK_ARITY`.
    const fn new(arity: usize) -> Self {
        Self {
            arity,
            next: 0,
            end: mask_count(arity),
        }
    }
}

impl Iterator for MaskSweep {
    type Item = ConstnessMask;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let mask = ConstnessMask {
            arity: self.arity,
            bits: self.next,
        };
        self.next += 1;
        Some(mask)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MaskSweep {}

/// `2^arity`, the number of distinct masks for `arity` arguments.
const fn mask_count(arity: usize) -> u32 {
    1_u32 << arity
}
