use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use crate::Shape;

/// A type with a known container shape.
///
/// Implemented for arrays, slices, the standard growable sequences, the
/// common scalar types and, by forwarding, for references and smart pointers
/// to any of these.
pub trait Shaped {
    /// The shape of this type.
    const SHAPE: Shape;

    /// The capacity, if it is fixed by the type.
    const FIXED_CAPACITY: Option<usize> = None;
}

impl<T, const N: usize> Shaped for [T; N] {
    const SHAPE: Shape = Shape::Array;
    const FIXED_CAPACITY: Option<usize> = Some(N);
}

impl<T> Shaped for [T] {
    const SHAPE: Shape = Shape::Slice;
}

impl<T> Shaped for Vec<T> {
    const SHAPE: Shape = Shape::Slice;
}

impl<T> Shaped for VecDeque<T> {
    const SHAPE: Shape = Shape::Slice;
}

#[cfg(feature = "arrayvec")]
impl<T, const CAP: usize> Shaped for arrayvec::ArrayVec<T, CAP> {
    const SHAPE: Shape = Shape::Array;
    const FIXED_CAPACITY: Option<usize> = Some(CAP);
}

macro_rules! forward_shaped {
    ($($pointer:ty),* $(,)?) => {
        $(
            impl<T: Shaped + ?Sized> Shaped for $pointer {
                const SHAPE: Shape = T::SHAPE;
                const FIXED_CAPACITY: Option<usize> = T::FIXED_CAPACITY;
            }
        )*
    };
}

forward_shaped!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

macro_rules! scalar_shaped {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Shaped for $scalar {
                const SHAPE: Shape = Shape::Scalar;
            }
        )*
    };
}

scalar_shaped!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    str, String,
);

/// The shape of a value's type.
pub fn shape_of<V: Shaped + ?Sized>(_value: &V) -> Shape {
    V::SHAPE
}

/// Is the value a fixed-size array?
///
/// `is_array(&[1, 2])` holds; a `Vec`, a slice, a string or a scalar does
/// not.
pub fn is_array<V: Shaped + ?Sized>(_value: &V) -> bool {
    V::SHAPE.is_array()
}

/// Is the value a growable or dynamically sized sequence?
///
/// `is_slice(&vec![1, 2])` and `is_slice(&[1, 2][..])` hold; an array, a
/// string or a scalar does not.
pub fn is_slice<V: Shaped + ?Sized>(_value: &V) -> bool {
    V::SHAPE.is_slice()
}

/// The fixed capacity of a value's type, if it has one.
pub fn fixed_capacity_of<V: Shaped + ?Sized>(_value: &V) -> Option<usize> {
    V::FIXED_CAPACITY
}
