//! Gauntlet core library.
//!
//! Builds adversarial test data: labeled graphs whose public vertex labels can
//! be reshuffled independently of their storage, random graph and tree
//! generators, and strings that collide under polynomial hashes.

mod error;
pub mod format;
pub mod generate;
mod graph;
pub mod random;
pub mod strings;
mod weight;

pub use crate::{
    error::{
        FormatError, GenerateError, GenerateErrorCode, GraphError, GraphErrorCode, Result,
        StringError, StringErrorCode,
    },
    graph::{EdgeId, LabeledGraph, MAX_VERTICES},
    random::{RandomSource, SeededRandom},
    weight::{Weight, WeightArray, WeightType},
};
