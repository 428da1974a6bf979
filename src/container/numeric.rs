//! Numeric element adapters for the typed extrema.
//!
//! The typed extrema (`imax`, `imin`, `fmax`, `fmin`) return a raw number
//! instead of a reference to an element. These traits describe which element
//! types can be widened to that number without loss.
//!
//! # Available Adapters
//!
//! - [`Integral`]: Widens to `i64` (signed integers up to 64 bits, unsigned up to 32 bits)
//! - [`Floating`]: Widens to `f64` (`f32`, `f64`, and integers up to 32 bits)

// =============================================================================
// Integral Trait
// =============================================================================

/// An element type that widens losslessly to `i64`.
///
/// # Implementing Integral
///
/// ```rust
/// use herd::container::Integral;
///
/// #[derive(Debug, Clone, Copy)]
/// struct Score(u8);
///
/// impl Integral for Score {
///     fn to_i64(&self) -> i64 {
///         i64::from(self.0)
///     }
/// }
///
/// assert_eq!(Score(7).to_i64(), 7);
/// ```
pub trait Integral {
    /// Returns the element as an `i64`.
    fn to_i64(&self) -> i64;
}

// =============================================================================
// Floating Trait
// =============================================================================

/// An element type that widens losslessly to `f64`.
///
/// # Examples
///
/// ```rust
/// use herd::container::Floating;
///
/// assert_eq!(1.5_f32.to_f64(), 1.5);
/// assert_eq!(3_i32.to_f64(), 3.0);
/// ```
pub trait Floating {
    /// Returns the element as an `f64`.
    fn to_f64(&self) -> f64;
}

macro_rules! impl_integral {
    ($($numeric:ty),*) => {
        $(
            impl Integral for $numeric {
                #[inline]
                fn to_i64(&self) -> i64 {
                    i64::from(*self)
                }
            }
        )*
    };
}

macro_rules! impl_floating {
    ($($numeric:ty),*) => {
        $(
            impl Floating for $numeric {
                #[inline]
                fn to_f64(&self) -> f64 {
                    f64::from(*self)
                }
            }
        )*
    };
}

impl_integral!(i8, i16, i32, i64, u8, u16, u32);
impl_floating!(f32, f64, i8, i16, i32, u8, u16, u32);

impl<T: Integral + ?Sized> Integral for &T {
    #[inline]
    fn to_i64(&self) -> i64 {
        (**self).to_i64()
    }
}

impl<T: Floating + ?Sized> Floating for &T {
    #[inline]
    fn to_f64(&self) -> f64 {
        (**self).to_f64()
    }
}
