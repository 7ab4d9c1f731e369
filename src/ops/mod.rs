// src/ops/mod.rs
/*!
Concrete elementwise **kernels** satisfying the engine's strategy contract.

Each operation is a small struct implementing [`BinaryKernel`] or
[`UnaryKernel`]; the engine stays free of arithmetic and callers inject
these (or their own) at call time.

- Arithmetic kernels work for any [`Scalar`].
- Bitwise and shift kernels require the integer subset ([`IntScalar`]).
- Shift kernels carry their bit count (the single parameter of the
  operation), like any other stateful kernel would.

Enum kinds plus `*_kernel` factories give a boxed kernel by name; using the
unit structs directly avoids the allocation.

Numeric-domain behavior (division by zero, unsigned underflow, shift
overflow) belongs to the element type, not the engine; kernels do not mask
it.
*/

use serde::{Deserialize, Serialize};

use crate::engine::kernel::{BinaryKernel, UnaryKernel};
use crate::math::scalar::{IntScalar, Scalar};

// ======================================================================================
// --------------------------------- Binary: arithmetic ---------------------------------
// ======================================================================================

macro_rules! binary_arith_kernel {
    ($(#[$doc:meta])* $name:ident, $label:literal, $op:tt) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl<T: Scalar> BinaryKernel<T> for $name {
            #[inline]
            fn name(&self) -> &'static str {
                $label
            }

            #[inline]
            fn apply(&self, a: T, b: T) -> T {
                a $op b
            }

            #[inline]
            fn boxed_clone(&self) -> Box<dyn BinaryKernel<T>> {
                Box::new(*self)
            }
        }
    };
}

binary_arith_kernel!(
    /// Elementwise `a + b`.
    Addition, "addition", +
);
binary_arith_kernel!(
    /// Elementwise `a - b`.
    Subtraction, "subtraction", -
);
binary_arith_kernel!(
    /// Elementwise `a * b`.
    Multiplication, "multiplication", *
);
binary_arith_kernel!(
    /// Elementwise `a / b`.
    Division, "division", /
);
binary_arith_kernel!(
    /// Elementwise `a % b`.
    Modulus, "modulus", %
);

// ======================================================================================
// ---------------------------------- Binary: bitwise -----------------------------------
// ======================================================================================

macro_rules! binary_bit_kernel {
    ($(#[$doc:meta])* $name:ident, $label:literal, $op:tt) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl<T: IntScalar> BinaryKernel<T> for $name {
            #[inline]
            fn name(&self) -> &'static str {
                $label
            }

            #[inline]
            fn apply(&self, a: T, b: T) -> T {
                a $op b
            }

            #[inline]
            fn boxed_clone(&self) -> Box<dyn BinaryKernel<T>> {
                Box::new(*self)
            }
        }
    };
}

binary_bit_kernel!(
    /// Elementwise `a & b`.
    BitwiseAnd, "bitwise-and", &
);
binary_bit_kernel!(
    /// Elementwise `a | b`.
    BitwiseOr, "bitwise-or", |
);
binary_bit_kernel!(
    /// Elementwise `a ^ b`.
    BitwiseXor, "bitwise-xor", ^
);

// ======================================================================================
// ------------------------------------- Unary ------------------------------------------
// ======================================================================================

/// Elementwise `a + 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Increment;

impl<T: Scalar> UnaryKernel<T> for Increment {
    #[inline]
    fn name(&self) -> &'static str {
        "increment"
    }

    #[inline]
    fn apply(&self, a: T) -> T {
        a + T::one()
    }

    #[inline]
    fn boxed_clone(&self) -> Box<dyn UnaryKernel<T>> {
        Box::new(*self)
    }
}

/// Elementwise `a - 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decrement;

impl<T: Scalar> UnaryKernel<T> for Decrement {
    #[inline]
    fn name(&self) -> &'static str {
        "decrement"
    }

    #[inline]
    fn apply(&self, a: T) -> T {
        a - T::one()
    }

    #[inline]
    fn boxed_clone(&self) -> Box<dyn UnaryKernel<T>> {
        Box::new(*self)
    }
}

/// Elementwise `a << bits`.
#[derive(Debug, Clone, Copy)]
pub struct LeftShift {
    pub bits: u32,
}

impl LeftShift {
    #[inline]
    pub fn new(bits: u32) -> Self {
        Self { bits }
    }
}

impl<T: IntScalar> UnaryKernel<T> for LeftShift {
    #[inline]
    fn name(&self) -> &'static str {
        "left-shift"
    }

    #[inline]
    fn apply(&self, a: T) -> T {
        a << self.bits
    }

    #[inline]
    fn boxed_clone(&self) -> Box<dyn UnaryKernel<T>> {
        Box::new(*self)
    }
}

/// Elementwise `a >> bits`.
#[derive(Debug, Clone, Copy)]
pub struct RightShift {
    pub bits: u32,
}

impl RightShift {
    #[inline]
    pub fn new(bits: u32) -> Self {
        Self { bits }
    }
}

impl<T: IntScalar> UnaryKernel<T> for RightShift {
    #[inline]
    fn name(&self) -> &'static str {
        "right-shift"
    }

    #[inline]
    fn apply(&self, a: T) -> T {
        a >> self.bits
    }

    #[inline]
    fn boxed_clone(&self) -> Box<dyn UnaryKernel<T>> {
        Box::new(*self)
    }
}

// ======================================================================================
// ------------------------------------ Factories ----------------------------------------
// ======================================================================================

/// Arithmetic binary operations (any `Scalar`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithmeticOp {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulus,
}

/// Bitwise binary operations (`IntScalar` only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BitwiseOp {
    And,
    Or,
    Xor,
}

/// Parameterless unary operations (any `Scalar`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Increment,
    Decrement,
}

/// Shift operations carrying their bit count (`IntScalar` only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftOp {
    Left { bits: u32 },
    Right { bits: u32 },
}

/// Boxed arithmetic kernel by kind.
#[inline]
pub fn arithmetic_kernel<T: Scalar>(op: ArithmeticOp) -> Box<dyn BinaryKernel<T>> {
    match op {
        ArithmeticOp::Addition => Box::new(Addition),
        ArithmeticOp::Subtraction => Box::new(Subtraction),
        ArithmeticOp::Multiplication => Box::new(Multiplication),
        ArithmeticOp::Division => Box::new(Division),
        ArithmeticOp::Modulus => Box::new(Modulus),
    }
}

/// Boxed bitwise kernel by kind.
#[inline]
pub fn bitwise_kernel<T: IntScalar>(op: BitwiseOp) -> Box<dyn BinaryKernel<T>> {
    match op {
        BitwiseOp::And => Box::new(BitwiseAnd),
        BitwiseOp::Or => Box::new(BitwiseOr),
        BitwiseOp::Xor => Box::new(BitwiseXor),
    }
}

/// Boxed parameterless unary kernel by kind.
#[inline]
pub fn unary_kernel<T: Scalar>(op: UnaryOp) -> Box<dyn UnaryKernel<T>> {
    match op {
        UnaryOp::Increment => Box::new(Increment),
        UnaryOp::Decrement => Box::new(Decrement),
    }
}

/// Boxed shift kernel by kind.
#[inline]
pub fn shift_kernel<T: IntScalar>(op: ShiftOp) -> Box<dyn UnaryKernel<T>> {
    match op {
        ShiftOp::Left { bits } => Box::new(LeftShift::new(bits)),
        ShiftOp::Right { bits } => Box::new(RightShift::new(bits)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernels_apply_elementwise() {
        assert_eq!(BinaryKernel::<i64>::apply(&Addition, 2, 3), 5);
        assert_eq!(BinaryKernel::<i64>::apply(&Modulus, 7, 4), 3);
        assert_eq!(BinaryKernel::<i64>::apply(&BitwiseXor, 0b1100, 0b1010), 0b0110);
        assert_eq!(UnaryKernel::<i64>::apply(&Increment, -1), 0);
        assert_eq!(UnaryKernel::<u32>::apply(&LeftShift::new(3), 1), 8);
    }

    #[test]
    fn factories_dispatch_by_kind() {
        let k = arithmetic_kernel::<f64>(ArithmeticOp::Division);
        assert_eq!(k.name(), "division");
        assert_eq!(k.apply(1.0, 4.0), 0.25);

        let k = shift_kernel::<u8>(ShiftOp::Right { bits: 2 });
        assert_eq!(k.apply(8), 2);

        // boxed kernels clone through the trait object
        let k2 = k.clone();
        assert_eq!(k2.apply(4), 1);
    }
}
