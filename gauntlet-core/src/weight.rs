//! Typed optional weights for vertices and edges.
//!
//! A [`Weight`] is a tagged value with an explicit [`Weight::Empty`] state.
//! [`WeightArray`] stores weights sparsely: slots past its length read as
//! empty, and writes extend it on demand. The concrete output type of an array
//! is only decided when it is prepared for printing, see
//! [`crate::LabeledGraph::prepare_weight_array`].

use std::fmt;

static EMPTY: Weight = Weight::Empty;

/// Type tag of a non-empty [`Weight`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WeightType {
    /// Signed integer weight.
    Int,
    /// Floating-point weight.
    Float,
    /// Free-form text weight.
    Text,
    /// Pair of signed integers.
    Pair,
}

impl WeightType {
    /// Returns the zero value used to back-fill empty slots of this type.
    ///
    /// # Examples
    /// ```
    /// use gauntlet_core::{Weight, WeightType};
    ///
    /// assert_eq!(WeightType::Int.default_weight(), Weight::Int(0));
    /// assert_eq!(WeightType::Pair.default_weight(), Weight::Pair(0, 0));
    /// ```
    #[must_use]
    pub const fn default_weight(self) -> Weight {
        match self {
            Self::Int => Weight::Int(0),
            Self::Float => Weight::Float(0.0),
            Self::Text => Weight::Text(String::new()),
            Self::Pair => Weight::Pair(0, 0),
        }
    }
}

/// Weight attached to a vertex or an edge.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Weight {
    /// No weight has been assigned.
    #[default]
    Empty,
    /// Signed integer weight.
    Int(i64),
    /// Floating-point weight.
    Float(f64),
    /// Free-form text weight.
    Text(String),
    /// Pair of signed integers, printed space separated.
    Pair(i64, i64),
}

impl Weight {
    /// Returns `true` for [`Weight::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the type tag of a non-empty weight.
    ///
    /// # Examples
    /// ```
    /// use gauntlet_core::{Weight, WeightType};
    ///
    /// assert_eq!(Weight::from("7").weight_type(), Some(WeightType::Text));
    /// assert_eq!(Weight::Empty.weight_type(), None);
    /// ```
    #[must_use]
    pub const fn weight_type(&self) -> Option<WeightType> {
        match self {
            Self::Empty => None,
            Self::Int(_) => Some(WeightType::Int),
            Self::Float(_) => Some(WeightType::Float),
            Self::Text(_) => Some(WeightType::Text),
            Self::Pair(..) => Some(WeightType::Pair),
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Pair(first, second) => write!(f, "{first} {second}"),
        }
    }
}

impl From<i64> for Weight {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Weight {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl TryFrom<usize> for Weight {
    type Error = std::num::TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        i64::try_from(value).map(Self::Int)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Weight {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Weight {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<(i64, i64)> for Weight {
    fn from((first, second): (i64, i64)) -> Self {
        Self::Pair(first, second)
    }
}

/// Sparse, lazily extended sequence of [`Weight`] values.
///
/// # Examples
/// ```
/// use gauntlet_core::{Weight, WeightArray};
///
/// let mut weights = WeightArray::new();
/// weights.set(2, Weight::Int(5));
/// assert_eq!(weights.len(), 3);
/// assert!(weights.get(0).is_empty());
/// assert!(weights.get(10).is_empty());
/// assert_eq!(weights.get(2), &Weight::Int(5));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightArray {
    values: Vec<Weight>,
}

impl WeightArray {
    /// Creates an empty array.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Number of stored slots, set or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no slot is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads slot `index`; slots beyond the stored length are empty.
    #[must_use]
    pub fn get(&self, index: usize) -> &Weight {
        self.values.get(index).unwrap_or(&EMPTY)
    }

    /// Writes slot `index`, extending the array with empty slots as needed.
    pub fn set(&mut self, index: usize, weight: Weight) {
        if index >= self.values.len() {
            self.extend(index + 1);
        }
        if let Some(slot) = self.values.get_mut(index) {
            *slot = weight;
        }
    }

    /// Grows the array to `size` slots. Never shrinks.
    pub fn extend(&mut self, size: usize) {
        if size > self.values.len() {
            self.values.resize(size, Weight::Empty);
        }
    }

    /// Returns `true` if any slot holds a weight.
    #[must_use]
    pub fn has_non_empty(&self) -> bool {
        self.values.iter().any(|weight| !weight.is_empty())
    }

    /// Type of the first non-empty slot.
    #[must_use]
    pub fn any_type(&self) -> Option<WeightType> {
        self.values.iter().find_map(Weight::weight_type)
    }

    /// Iterates over the stored slots.
    pub fn iter(&self) -> std::slice::Iter<'_, Weight> {
        self.values.iter()
    }

    /// Returns the slots selected by `order`, in that order.
    ///
    /// Positions past the stored length contribute empty slots.
    #[must_use]
    pub fn reindexed(&self, order: &[usize]) -> Self {
        order.iter().map(|&index| self.get(index).clone()).collect()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Weight> {
        self.values.iter_mut()
    }
}

impl FromIterator<Weight> for WeightArray {
    fn from_iter<I: IntoIterator<Item = Weight>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Weight>> for WeightArray {
    fn from(values: Vec<Weight>) -> Self {
        Self { values }
    }
}

impl<'a> IntoIterator for &'a WeightArray {
    type Item = &'a Weight;
    type IntoIter = std::slice::Iter<'a, Weight>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
