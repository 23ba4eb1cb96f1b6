//! # Value Types
//!
//! Runtime descriptors for the Rust types handed to the resolvers.
//!
//! A `ValueType` is the identity of a type (`TypeId` + name) plus the two
//! facts resolution needs beyond identity: the element type of a sequence and
//! the set of types it may be treated as ("assignable to"). Descriptors are
//! compared on all three.

use std::any::{type_name, TypeId};
use std::collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};
use url::Url;

/// Describes a Rust type at runtime.
///
/// Equality and hashing cover the `TypeId`, the element descriptor and the
/// assignable-to set, so descriptors that resolve differently never compare equal.
/// Use [`Described::value_type`] for resolution; [`ValueType::of`] carries no
/// element or assignability.
#[derive(Clone)]
pub struct ValueType {
    id: TypeId,
    name: &'static str,
    element: Option<Box<ValueType>>,
    assignable_to: Vec<TypeId>,
}

impl ValueType {
    /// Creates a bare descriptor for `T` with no element and no assignability.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            element: None,
            assignable_to: Vec::new(),
        }
    }

    /// Returns the descriptor `T` reports for itself via [`Described`].
    pub fn described<T: Described + ?Sized>() -> Self {
        T::value_type()
    }

    /// Marks this type as a sequence of `element`.
    pub fn with_element(mut self, element: ValueType) -> Self {
        self.element = Some(Box::new(element));
        self
    }

    /// Marks this type as assignable to `U` (an interface it implements or a type it wraps).
    pub fn assignable_to<U: ?Sized + 'static>(mut self) -> Self {
        let target = TypeId::of::<U>();
        // Kept sorted so equality does not depend on declaration order.
        if let Err(at) = self.assignable_to.binary_search(&target) {
            self.assignable_to.insert(at, target);
        }
        self
    }

    /// The `TypeId` of the described type.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The fully qualified Rust type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The element type when this type is a sequence.
    pub fn element(&self) -> Option<&ValueType> {
        self.element.as_deref()
    }

    /// Whether this descriptor is exactly `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Whether a value of this type can be used where `target` is expected.
    pub fn is_assignable_to(&self, target: &ValueType) -> bool {
        self.id == target.id || self.assignable_to.contains(&target.id)
    }

    /// Whether this type is a sequence whose element is assignable to `element`.
    pub fn is_sequence_of(&self, element: &ValueType) -> bool {
        self.element()
            .is_some_and(|inner| inner.is_assignable_to(element))
    }
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.element == other.element
            && self.assignable_to == other.assignable_to
    }
}

impl Eq for ValueType {}

impl Hash for ValueType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.element.hash(state);
        self.assignable_to.hash(state);
    }
}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueType({})", self.name)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Types that know how to describe themselves as a [`ValueType`].
///
/// The default implementation yields a bare descriptor. Sequence and wrapper
/// types override it to report their element or assignability.
pub trait Described: 'static {
    /// Returns the runtime descriptor for `Self`.
    fn value_type() -> ValueType {
        ValueType::of::<Self>()
    }
}

macro_rules! impl_described {
    ($($ty:ty),* $(,)?) => {
        $(impl Described for $ty {})*
    };
}

impl_described!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, str, Url,
);

macro_rules! impl_described_sequence {
    ($($ty:ty),* $(,)?) => {
        $(impl<T: Described> Described for $ty {
            fn value_type() -> ValueType {
                ValueType::of::<Self>().with_element(T::value_type())
            }
        })*
    };
}

impl_described_sequence!(
    Vec<T>,
    VecDeque<T>,
    LinkedList<T>,
    BTreeSet<T>,
    BinaryHeap<T>,
    [T],
    Box<[T]>,
);

impl<T: Described, S: 'static> Described for HashSet<T, S> {
    fn value_type() -> ValueType {
        ValueType::of::<Self>().with_element(T::value_type())
    }
}

impl<T: Described, const N: usize> Described for [T; N] {
    fn value_type() -> ValueType {
        ValueType::of::<Self>().with_element(T::value_type())
    }
}
