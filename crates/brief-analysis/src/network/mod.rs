//! Evidence network: which ids carry the brief, which are cited once, and
//! which claims hang on a single id.

pub mod analyzer;
pub mod graph;

pub use analyzer::{compute_evidence_network, NetworkAnalyzer};
pub use graph::{CitationGraph, CitationNode, ClaimKind};
