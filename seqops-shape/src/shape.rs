use strum_macros::{Display, EnumIter};

/// The shape of a container type.
///
/// `Array` and `Slice` never apply to the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// A container whose capacity is fixed by its type, such as `[T; N]`.
    Array,
    /// A growable or dynamically sized sequence, such as `Vec<T>` or `[T]`.
    Slice,
    /// Anything that is not a sequence container. Strings are scalars here.
    Scalar,
}

impl Shape {
    /// Is this the shape of a fixed-capacity array?
    pub fn is_array(self) -> bool {
        matches!(self, Shape::Array)
    }

    /// Is this the shape of a growable sequence?
    pub fn is_slice(self) -> bool {
        matches!(self, Shape::Slice)
    }

    /// Is this a sequence container of either kind?
    pub fn is_sequence(self) -> bool {
        !matches!(self, Shape::Scalar)
    }
}
