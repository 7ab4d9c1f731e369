// src/engine/kernel.rs
/*!
The pluggable kernel contract and the engine's alignment parameters.

An operation is injected into the engine as a strategy object implementing
[`BinaryKernel`] (two-operand elementwise) or [`UnaryKernel`]
(single-operand). The engine itself contains no arithmetic: it only decides
*which index pairs* a kernel sees, per [`AlignMode`] and an optional
[`Window`].

Concrete kernels live in [`crate::ops`]; any caller-supplied type
satisfying the contract works equally.
*/

use serde::{Deserialize, Serialize};

use crate::math::scalar::Scalar;

// ======================================================================================
// ------------------------------- Alignment parameters ---------------------------------
// ======================================================================================

/// How two operands of unequal shape are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignMode {
    /// Union-preserving: indices or members present on only one side pass
    /// through unmodified.
    Standard,
    /// Intersection-only: indices or members present on only one side are
    /// discarded.
    Strict,
}

/// An index window `[begin, begin + length)` restricting which elements
/// participate in a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub begin: usize,
    pub length: usize,
}

impl Window {
    #[inline]
    pub fn new(begin: usize, length: usize) -> Self {
        Self { begin, length }
    }

    /// One past the last index covered.
    #[inline]
    pub fn end(&self) -> usize {
        self.begin + self.length
    }
}

// ======================================================================================
// --------------------------------- Kernel contract ------------------------------------
// ======================================================================================

/// A two-operand elementwise operation, injected into the engine.
pub trait BinaryKernel<T: Scalar>: Send + Sync {
    /// Short operation name for diagnostics and logging.
    fn name(&self) -> &'static str;

    /// Combine one aligned element pair.
    fn apply(&self, a: T, b: T) -> T;

    /// Clone behind the trait object, mirroring stateful kernels.
    fn boxed_clone(&self) -> Box<dyn BinaryKernel<T>>;
}

/// A single-operand elementwise operation, injected into the broadcast
/// engine.
pub trait UnaryKernel<T: Scalar>: Send + Sync {
    /// Short operation name for diagnostics and logging.
    fn name(&self) -> &'static str;

    /// Transform one element.
    fn apply(&self, a: T) -> T;

    /// Clone behind the trait object.
    fn boxed_clone(&self) -> Box<dyn UnaryKernel<T>>;
}

impl<T: Scalar> Clone for Box<dyn BinaryKernel<T>> {
    #[inline]
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

impl<T: Scalar> Clone for Box<dyn UnaryKernel<T>> {
    #[inline]
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

impl<T: Scalar> BinaryKernel<T> for Box<dyn BinaryKernel<T>> {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn apply(&self, a: T, b: T) -> T {
        (**self).apply(a, b)
    }

    #[inline]
    fn boxed_clone(&self) -> Box<dyn BinaryKernel<T>> {
        (**self).boxed_clone()
    }
}

impl<T: Scalar> UnaryKernel<T> for Box<dyn UnaryKernel<T>> {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn apply(&self, a: T) -> T {
        (**self).apply(a)
    }

    #[inline]
    fn boxed_clone(&self) -> Box<dyn UnaryKernel<T>> {
        (**self).boxed_clone()
    }
}
