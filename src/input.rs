//! Coercion of prior inputs to `f64`.
//!
//! Inputs are cast with *same-kind* rules: anything on the real number line
//! (booleans, integers, floats) becomes an `f64`, complex values are refused.
//! The shape of the input is carried through to the output, so a scalar
//! evaluates to a scalar and an array of length `n` to `n` values.
use num::Complex;

use crate::PriorError;

/// Same-kind cast to `f64`
pub trait SameKindCast {
    fn cast_f64(&self) -> Result<f64, PriorError>;
}

macro_rules! impl_cast_lossless {
    ($($kind: ty),+) => {
        $(
            impl SameKindCast for $kind {
                #[inline]
                fn cast_f64(&self) -> Result<f64, PriorError> {
                    Ok(f64::from(*self))
                }
            }
        )+
    };
}

// 64-bit integers may round, which same-kind casting permits
macro_rules! impl_cast_rounding {
    ($($kind: ty),+) => {
        $(
            impl SameKindCast for $kind {
                #[inline]
                fn cast_f64(&self) -> Result<f64, PriorError> {
                    Ok(*self as f64)
                }
            }
        )+
    };
}

impl_cast_lossless!(u8, u16, u32, i8, i16, i32, f32, f64);
impl_cast_rounding!(u64, usize, i64, isize);

impl SameKindCast for bool {
    #[inline]
    fn cast_f64(&self) -> Result<f64, PriorError> {
        Ok(if *self { 1.0 } else { 0.0 })
    }
}

impl<T> SameKindCast for Complex<T> {
    fn cast_f64(&self) -> Result<f64, PriorError> {
        Err(PriorError::Cast {
            from: std::any::type_name::<Complex<T>>(),
        })
    }
}

/// A dynamically typed scalar
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Complex(Complex<f64>),
}

impl SameKindCast for Scalar {
    fn cast_f64(&self) -> Result<f64, PriorError> {
        match self {
            Scalar::Bool(x) => x.cast_f64(),
            Scalar::Int(x) => x.cast_f64(),
            Scalar::UInt(x) => x.cast_f64(),
            Scalar::Float(x) => Ok(*x),
            Scalar::Complex(x) => x.cast_f64(),
        }
    }
}

macro_rules! impl_scalar_from {
    ($variant: ident, $($kind: ty),+) => {
        $(
            impl From<$kind> for Scalar {
                fn from(x: $kind) -> Scalar {
                    Scalar::$variant(x.into())
                }
            }
        )+
    };
}

impl_scalar_from!(Bool, bool);
impl_scalar_from!(Int, i8, i16, i32, i64);
impl_scalar_from!(UInt, u8, u16, u32, u64);
impl_scalar_from!(Float, f32, f64);
impl_scalar_from!(Complex, Complex<f64>);

/// A dynamically typed and dynamically shaped input
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Array(Vec<Scalar>),
}

macro_rules! impl_value_from {
    ($($kind: ty),+) => {
        $(
            impl From<$kind> for Value {
                fn from(x: $kind) -> Value {
                    Value::Scalar(x.into())
                }
            }

            impl From<Vec<$kind>> for Value {
                fn from(xs: Vec<$kind>) -> Value {
                    Value::Array(xs.into_iter().map(Scalar::from).collect())
                }
            }
        )+
    };
}

impl_value_from!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    Complex<f64>,
    Scalar
);

/// Output of evaluating a [`Value`]. Has the same shape as the input.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    Scalar(f64),
    Array(Vec<f64>),
}

impl Evaluation {
    /// Returns the scalar if this is `Evaluation::Scalar`
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Evaluation::Scalar(x) => Some(*x),
            Evaluation::Array(_) => None,
        }
    }

    /// Returns the values if this is `Evaluation::Array`
    pub fn as_array(&self) -> Option<&[f64]> {
        match self {
            Evaluation::Scalar(_) => None,
            Evaluation::Array(xs) => Some(xs.as_slice()),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Evaluation::Scalar(..))
    }
}

/// Something a prior can be evaluated at.
///
/// `map_f64` casts every element with [`SameKindCast`], applies `f`, and
/// returns the results in the shape of `self`. A single failed cast fails
/// the whole evaluation.
pub trait PriorInput {
    type Output;

    fn map_f64<F>(&self, f: F) -> Result<Self::Output, PriorError>
    where
        F: Fn(f64) -> f64;
}

macro_rules! impl_scalar_input {
    ($($kind: ty),+) => {
        $(
            impl PriorInput for $kind {
                type Output = f64;

                #[inline]
                fn map_f64<F>(&self, f: F) -> Result<f64, PriorError>
                where
                    F: Fn(f64) -> f64,
                {
                    self.cast_f64().map(f)
                }
            }
        )+
    };
}

impl_scalar_input!(
    bool, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64,
    Scalar
);

impl<T> PriorInput for Complex<T> {
    type Output = f64;

    fn map_f64<F>(&self, f: F) -> Result<f64, PriorError>
    where
        F: Fn(f64) -> f64,
    {
        self.cast_f64().map(f)
    }
}

impl<T: SameKindCast> PriorInput for [T] {
    type Output = Vec<f64>;

    fn map_f64<F>(&self, f: F) -> Result<Vec<f64>, PriorError>
    where
        F: Fn(f64) -> f64,
    {
        self.iter().map(|x| x.cast_f64().map(&f)).collect()
    }
}

impl<T: SameKindCast> PriorInput for Vec<T> {
    type Output = Vec<f64>;

    fn map_f64<F>(&self, f: F) -> Result<Vec<f64>, PriorError>
    where
        F: Fn(f64) -> f64,
    {
        self.as_slice().map_f64(f)
    }
}

impl<T: SameKindCast, const N: usize> PriorInput for [T; N] {
    type Output = [f64; N];

    fn map_f64<F>(&self, f: F) -> Result<[f64; N], PriorError>
    where
        F: Fn(f64) -> f64,
    {
        let mut out = [0.0; N];
        for (y, x) in out.iter_mut().zip(self.iter()) {
            *y = f(x.cast_f64()?);
        }
        Ok(out)
    }
}

impl PriorInput for Value {
    type Output = Evaluation;

    fn map_f64<F>(&self, f: F) -> Result<Evaluation, PriorError>
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Value::Scalar(x) => x.map_f64(f).map(Evaluation::Scalar),
            Value::Array(xs) => xs.map_f64(f).map(Evaluation::Array),
        }
    }
}
