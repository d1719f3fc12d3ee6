//! Error types for the Gauntlet core library.
//!
//! Every enum carries a stable machine-readable code so callers (and the CLI)
//! can report failures without matching on message text.

use std::{fmt, io};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::LabeledGraph`] operations.
///
/// All variants except [`GraphError::InvariantViolation`] are detected before
/// the graph is mutated, so the graph stays usable after they are returned.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A label or edge id was outside the current bounds.
    #[error("{operation}: {value} is out of range (bound {bound})")]
    OutOfRange {
        /// Operation that rejected the argument.
        operation: &'static str,
        /// Offending label, index or edge id.
        value: usize,
        /// Exclusive upper bound in force when the call was made.
        bound: usize,
    },
    /// A bulk argument did not have the length the graph requires.
    #[error("{operation}: argument must have exactly {expected} elements (got {got})")]
    ArgumentSizeMismatch {
        /// Operation that rejected the argument.
        operation: &'static str,
        /// Required length (`n` or `m`).
        expected: usize,
        /// Length supplied by the caller.
        got: usize,
    },
    /// The graph is in a state the operation does not support.
    #[error("{operation}: {reason}")]
    PreconditionViolation {
        /// Operation that refused to run.
        operation: &'static str,
        /// Human-readable description of the unmet precondition.
        reason: &'static str,
    },
    /// Serialisation was requested for a weight array with no set entries.
    #[error("attempt to print an empty weight array")]
    EmptyWeightArray,
    /// Internal bookkeeping disagreed with itself.
    ///
    /// This signals a programming error; the graph state is undefined once it
    /// has been observed.
    #[error("{operation}: graph invariant violated: {invariant}")]
    InvariantViolation {
        /// Operation that observed the inconsistency.
        operation: &'static str,
        /// Description of the broken invariant.
        invariant: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A label or edge id was outside the current bounds.
        OutOfRange => OutOfRange { .. } => "GRAPH_OUT_OF_RANGE",
        /// A bulk argument did not have the required length.
        ArgumentSizeMismatch => ArgumentSizeMismatch { .. } => "GRAPH_ARGUMENT_SIZE_MISMATCH",
        /// The graph is in a state the operation does not support.
        PreconditionViolation => PreconditionViolation { .. } => "GRAPH_PRECONDITION_VIOLATION",
        /// Serialisation was requested for an empty weight array.
        EmptyWeightArray => EmptyWeightArray => "GRAPH_EMPTY_WEIGHT_ARRAY",
        /// Internal bookkeeping disagreed with itself.
        InvariantViolation => InvariantViolation { .. } => "GRAPH_INVARIANT_VIOLATION",
    }
}

impl GraphError {
    /// Returns `true` when the graph must not be used after this error.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }

    pub(crate) fn invariant(operation: &'static str, invariant: impl Into<String>) -> Self {
        Self::InvariantViolation {
            operation,
            invariant: invariant.into(),
        }
    }
}

/// An error produced by the string generators in [`crate::strings`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StringError {
    /// A `(modulus, base)` pair was outside the supported domain.
    #[error("invalid hash base (mod {modulus}, base {base}): {reason}")]
    InvalidHashBase {
        /// Modulus of the rejected pair.
        modulus: u64,
        /// Multiplier of the rejected pair.
        base: u64,
        /// Which constraint was violated.
        reason: &'static str,
    },
    /// The alphabet pattern expanded to fewer than two characters.
    #[error("alphabet must contain at least two characters (got {size})")]
    AlphabetTooSmall {
        /// Number of distinct characters in the expanded alphabet.
        size: usize,
    },
    /// The requested total length cannot hold the colliding core.
    #[error("cannot fit colliding strings of length {required} into length {requested}")]
    LengthTooShort {
        /// Length of the shortest colliding pair found.
        required: usize,
        /// Length requested by the caller.
        requested: usize,
    },
    /// No collision was found before the word length limit.
    #[error("no hash collision found for mod {modulus} with words up to {max_length} letters")]
    SearchExhausted {
        /// Modulus being attacked when the search gave up.
        modulus: u64,
        /// Longest word length attempted.
        max_length: usize,
    },
    /// A generated code point is not a valid `char`.
    #[error("code point {code_point:#x} is not a valid character")]
    InvalidCharacter {
        /// Offending code point.
        code_point: u32,
    },
}

define_error_codes! {
    /// Stable codes describing [`StringError`] variants.
    enum StringErrorCode for StringError {
        /// A `(modulus, base)` pair was outside the supported domain.
        InvalidHashBase => InvalidHashBase { .. } => "STRING_INVALID_HASH_BASE",
        /// The alphabet expanded to fewer than two characters.
        AlphabetTooSmall => AlphabetTooSmall { .. } => "STRING_ALPHABET_TOO_SMALL",
        /// The requested total length cannot hold the colliding core.
        LengthTooShort => LengthTooShort { .. } => "STRING_LENGTH_TOO_SHORT",
        /// No collision was found before the word length limit.
        SearchExhausted => SearchExhausted { .. } => "STRING_SEARCH_EXHAUSTED",
        /// A generated code point is not a valid `char`.
        InvalidCharacter => InvalidCharacter { .. } => "STRING_INVALID_CHARACTER",
    }
}

/// An error produced while configuring or running a graph generator.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GenerateError {
    /// More distinct edges were requested than the vertex set admits.
    #[error("requested {requested} edges but only {capacity} distinct edges are admissible")]
    TooManyEdges {
        /// Edge count supplied by the caller.
        requested: usize,
        /// Number of admissible distinct edges.
        capacity: usize,
    },
    /// Edges were requested for a graph without vertices.
    #[error("cannot place {edges} edges on a graph with no vertices")]
    EdgesWithoutVertices {
        /// Edge count supplied by the caller.
        edges: usize,
    },
    /// The underlying graph rejected a mutation.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`GenerateError`] variants.
    enum GenerateErrorCode for GenerateError {
        /// More distinct edges were requested than the vertex set admits.
        TooManyEdges => TooManyEdges { .. } => "GENERATE_TOO_MANY_EDGES",
        /// Edges were requested for a graph without vertices.
        EdgesWithoutVertices => EdgesWithoutVertices { .. } => "GENERATE_EDGES_WITHOUT_VERTICES",
        /// The underlying graph rejected a mutation.
        GraphFailure => Graph(..) => "GENERATE_GRAPH_FAILURE",
    }
}

impl GenerateError {
    /// Retrieve the inner [`GraphErrorCode`] when the failure came from the graph.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// An error produced while writing a graph in [`crate::format`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FormatError {
    /// The output stream failed.
    #[error("failed to write graph: {0}")]
    Io(#[from] io::Error),
    /// The graph could not supply print-ready data.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Convenient alias for results returned by graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
