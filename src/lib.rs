//! # Sequence Toolkit
//!
//! This library works with integer-valued arithmetic sequences: generating them, recovering
//! their defining quantities from a list of terms, and solving for whichever of the four
//! defining quantities (`an`, `a1`, `d`, `n`) is unknown. All arithmetic is exact over
//! arbitrary-precision integers, so validation and equality checks never suffer from
//! floating-point drift. A small Fibonacci module rounds out the crate with the three
//! classic nth-term implementations for runtime comparison.
//!
//! ## Key Features
//! - **Exact Arithmetic**: Every operation runs over `BigInt`/`BigUint`, so sequences with
//!   huge or negative terms behave identically to small ones.
//! - **Unknown Solving**: Any three of the four defining quantities determine the fourth;
//!   absence is expressed with `Option`, never a sentinel value.
//! - **Validated Decomposition**: Recovering `(an, a1, d, n)` from a list of terms
//!   regenerates the sequence and rejects inputs whose difference is not constant.
//! - **Concurrency**: Chunked generation variants compute chunk boundaries in closed form
//!   and fill chunks in parallel, both synchronously and asynchronously.
//!
//! ## Overview of Functions
//!
//! ### Errors
//! - `ArithSeqError`: Enum covering the domain failures: a zero term count, a sequence too
//!   short to decompose, a non-constant difference, too few known quantities for the
//!   solver, and zero or inexact divisions while solving.
//! - `SequenceTaskError`: Enum for failures of the parallel variants, such as Tokio or
//!   standard join errors, semaphore acquisition issues, or send errors in threaded
//!   communication.
//!
//! ### Arithmetic-Sequence Operations
//!
//! #### `arith::generate`
//! Produces the finite sequence `[a1, a1+d, ..., a1+d*(n-1)]` for a first term, common
//! difference, and term count.
//!
//! #### `arith::decompose`
//! The inverse of `generate`: given a list of terms, recovers `(an, a1, d, n)` after
//! validating that the input really is a constant-difference progression.
//!
//! #### `arith::solve`
//! Given at least three of the four defining quantities, computes the missing one.
//! Divisions are exact; a remainder is an error, not a silently truncated answer.
//!
//! #### `arith::generate_chunked`
//! Sequential chunked generation. Each chunk's first term comes from the closed form and
//! the rest of the chunk is filled by repeated addition.
//!
//! #### `arith::generate_rayon`
//! Parallel version of `generate_chunked`, leveraging the Rayon library for concurrent
//! chunk processing.
//!
//! #### `arith::generate_tokio`
//! Asynchronous version using Tokio, with the number of concurrent tasks controlled by a
//! semaphore and chunks written into a pre-allocated result.
//!
//! #### `arith::generate_kanal`
//! Multi-threaded version using `std::thread` and the `kanal` library for communication
//! between threads; chunks are reassembled in offset order on the main thread.
//!
//! ### Closed-Form Helpers
//! - `math::term_at`: the term at a zero-based offset, `a1 + d*offset`.
//! - `math::series_sum`: exact sum of the first `n` terms.
//!
//! ### Fibonacci Comparison
//! - `fibonacci::nth_recursive`: the naive doubly-recursive form.
//! - `fibonacci::nth_memoized`: same recursion with a per-call memo table.
//! - `fibonacci::nth_iterative`: two-variable loop, constant space.
//!
//! ## Usage Example
//! ```rust
//! use num_bigint::BigInt;
//! use sequence_toolkit::arith;
//!
//! let seq = arith::generate(&BigInt::from(5), &BigInt::from(-3), 8).unwrap();
//! assert_eq!(seq, [5, 2, -1, -4, -7, -10, -13, -16].map(BigInt::from));
//!
//! let (an, a1, d, n) = arith::decompose(&seq).unwrap();
//! assert_eq!((an, a1, d, n), (BigInt::from(-16), BigInt::from(5), BigInt::from(-3), 8));
//! ```

pub mod arith;
pub mod fibonacci;
pub mod math;
