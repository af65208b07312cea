#![allow(clippy::len_without_is_empty)]
#![allow(clippy::too_long_first_doc_paragraph)]

//! Sparse univariate polynomials over machine integers.
//!
//! ```
//! use sparse_poly::SparsePolynomial;
//!
//! let a = SparsePolynomial::<i64>::from([(2, 1), (0, -1)]);
//! let b = SparsePolynomial::<i64>::from([(1, 1), (0, -1)]);
//! assert_eq!((&a * &b).to_string(), "1x^3 + -1x^2 + -1x^1 + 1x^0");
//! assert_eq!((&a % &b).to_string(), "0x^0");
//! ```

pub mod poly;
pub mod utils;

pub use poly::coefficient::{Coefficient, Power};
pub use poly::mul::{MulConfig, MulStrategy, PARALLEL_THRESHOLD};
pub use poly::sparse_poly::SparsePolynomial;
pub use utils::errors::PolyError;
