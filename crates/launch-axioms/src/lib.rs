//! # launch-axioms
//!
//! Launch geometry to standing axioms.
//!
//! A Rust library that turns the out-of-band launch configuration of a
//! GPU kernel (work-group and grid dimensionality, local sizes, group
//! counts, global offsets) into the closed formulas a symbolic verifier
//! installs as assumptions, plus the clamped image addressing contract
//! used for image-access expressions.
//!
//! ## Modules
//!
//! - [`geometry`]: Flag sets, validated geometry configuration, lint
//! - [`axiom`]: Axiom terms, synthesis, global-id equations, evaluation
//! - [`witness`]: Concrete satisfying assignments for synthesized axioms
//! - [`emit`]: Text, SMT-LIB and JSON renderings of an axiom list
//! - [`launch`]: Command-line style launch options to flag sets
//! - [`image`]: Clamped 2-D/3-D image addressing and color reinterpretation
//! - [`intrinsics`]: External math-intrinsic catalogue and typed overloads

pub mod axiom;
pub mod emit;
pub mod error;
pub mod geometry;
pub mod image;
pub mod intrinsics;
pub mod launch;
pub mod witness;
