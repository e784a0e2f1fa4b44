use kanal::{bounded, SendError};
use num_bigint::BigInt;
use num_traits::Zero;
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};
use std::thread;
use std::{cmp, sync::Arc};
use tokio::sync::{AcquireError, Semaphore};
use tokio::task::{self, JoinError, JoinHandle};

use crate::math::term_at;

/// Errors reported by the arithmetic-sequence operations themselves.
///
/// Every operation is all-or-nothing: an error is returned at the point of
/// detection and nothing is retried or partially computed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithSeqError {
    #[error("term count must be 1 or greater")]
    InvalidTermCount,
    #[error("sequence has {len} terms, at least 2 are required")]
    SequenceTooShort { len: usize },
    #[error("difference is not constant, first mismatch at index {index}")]
    NotArithmetic { index: usize },
    #[error("{known} of 4 quantities known, at least 3 are required")]
    InsufficientKnowns { known: usize },
    #[error("division by zero while solving for {unknown}")]
    DivisionByZero { unknown: &'static str },
    #[error("no integer solution for {unknown}, division leaves remainder {remainder}")]
    InexactDivision {
        unknown: &'static str,
        remainder: BigInt,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SequenceTaskError {
    #[error(transparent)]
    Sequence(#[from] ArithSeqError),
    #[error("Tokio Join error: {0:?}")]
    TokioJoin(#[from] JoinError),
    #[error("Std Join error: {0:?}")]
    StdJoin(String),
    #[error("Acquire error: {0:?}")]
    Acquire(#[from] AcquireError),
    #[error("Send error: {0:?}")]
    Send(#[from] SendError),
}

// Iterative worker that fills one chunk of the sequence, starting from a
// precomputed boundary term.
pub fn sequence_chunk(first: BigInt, d: &BigInt, len: usize) -> Vec<BigInt> {
    let mut terms = Vec::with_capacity(len);
    let mut current = first;

    for _ in 0..len {
        let next = &current + d;
        terms.push(current);
        current = next;
    }

    terms
}

/// Generates a finite arithmetic sequence.
///
/// # Parameters
/// - `a1`: Value of the first term.
/// - `d`: Common difference added to each term to obtain the next. May be
///   zero or negative.
/// - `n`: Number of terms to generate, 1-based.
///
/// # Returns
/// The ordered terms `[a1, a1 + d, ..., a1 + d*(n-1)]`, of length exactly
/// `n`, or [`ArithSeqError::InvalidTermCount`] when `n` is zero.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use sequence_toolkit::arith;
/// let seq = arith::generate(&BigInt::from(5), &BigInt::from(-3), 8).unwrap();
/// assert_eq!(seq.last(), Some(&BigInt::from(-16)));
/// ```
pub fn generate(a1: &BigInt, d: &BigInt, n: usize) -> Result<Vec<BigInt>, ArithSeqError> {
    if n < 1 {
        return Err(ArithSeqError::InvalidTermCount);
    }
    Ok(sequence_chunk(a1.clone(), d, n))
}

/// Recovers the defining quantities of a finite arithmetic sequence.
///
/// Derives `a1` from the first term, `d` from the first pair, and `n` from
/// the length, then regenerates the sequence from those values and compares
/// it element-wise against the input. Exact integer equality is required; a
/// sequence whose difference drifts anywhere is rejected.
///
/// # Returns
/// The tuple `(an, a1, d, n)` on success. Fails with
/// [`ArithSeqError::SequenceTooShort`] for inputs of fewer than 2 terms
/// (a single term cannot determine a common difference) and with
/// [`ArithSeqError::NotArithmetic`] when the input is not a
/// constant-difference progression.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use sequence_toolkit::arith;
/// let seq: Vec<BigInt> = [1, 3, 5, 7, 9].map(BigInt::from).to_vec();
/// let (an, a1, d, n) = arith::decompose(&seq).unwrap();
/// assert_eq!((an, a1, d, n), (BigInt::from(9), BigInt::from(1), BigInt::from(2), 5));
/// ```
pub fn decompose(seq: &[BigInt]) -> Result<(BigInt, BigInt, BigInt, usize), ArithSeqError> {
    if seq.len() < 2 {
        return Err(ArithSeqError::SequenceTooShort { len: seq.len() });
    }

    let a1 = seq[0].clone();
    let d = &seq[1] - &seq[0];
    let n = seq.len();

    let expected = generate(&a1, &d, n)?;
    if let Some(index) = seq.iter().zip(&expected).position(|(got, want)| got != want) {
        return Err(ArithSeqError::NotArithmetic { index });
    }

    let an = solve(None, Some(&a1), Some(&d), Some(n))?;
    Ok((an, a1, d, n))
}

/// Solves for the missing one of the four defining quantities.
///
/// At least 3 of `an`, `a1`, `d`, `n` must be supplied; absence is expressed
/// with `None`, never a sentinel value. The missing quantity is resolved in
/// first-match order (`an`, then `a1`, then `d`, then `n`); when all four
/// are supplied, `an` is recomputed from the other three without checking
/// the supplied value for consistency.
///
/// Divisions (solving for `d` or `n`) are exact: a zero denominator fails
/// with [`ArithSeqError::DivisionByZero`] and a non-zero remainder fails
/// with [`ArithSeqError::InexactDivision`] rather than truncating to a
/// wrong answer.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use sequence_toolkit::arith;
/// // {3, 6, 9, 12, 15}: solve for n given an, a1 and d.
/// let n = arith::solve(
///     Some(&BigInt::from(15)),
///     Some(&BigInt::from(3)),
///     Some(&BigInt::from(3)),
///     None,
/// );
/// assert_eq!(n, Ok(BigInt::from(5)));
/// ```
pub fn solve(
    an: Option<&BigInt>,
    a1: Option<&BigInt>,
    d: Option<&BigInt>,
    n: Option<usize>,
) -> Result<BigInt, ArithSeqError> {
    let known = [an.is_some(), a1.is_some(), d.is_some(), n.is_some()]
        .iter()
        .filter(|&&k| k)
        .count();
    if known < 3 {
        return Err(ArithSeqError::InsufficientKnowns { known });
    }
    if n == Some(0) {
        return Err(ArithSeqError::InvalidTermCount);
    }

    match (an, a1, d, n) {
        // Solve for an; also the all-known case, where an is recomputed.
        (_, Some(a1), Some(d), Some(n)) => Ok(term_at(a1, d, n - 1)),
        // Solve for a1
        (Some(an), None, Some(d), Some(n)) => Ok(an - d * BigInt::from(n - 1)),
        // Solve for d
        (Some(an), Some(a1), None, Some(n)) => exact_div(an - a1, &BigInt::from(n - 1), "d"),
        // Solve for n
        (Some(an), Some(a1), Some(d), None) => exact_div(an - a1, d, "n").map(|q| q + 1),
        _ => unreachable!("fewer than 3 known quantities already rejected"),
    }
}

fn exact_div(
    dividend: BigInt,
    divisor: &BigInt,
    unknown: &'static str,
) -> Result<BigInt, ArithSeqError> {
    if divisor.is_zero() {
        return Err(ArithSeqError::DivisionByZero { unknown });
    }
    let remainder = &dividend % divisor;
    if !remainder.is_zero() {
        return Err(ArithSeqError::InexactDivision { unknown, remainder });
    }
    Ok(dividend / divisor)
}

// Chunked generation: boundary terms come from the closed form, the terms
// within each chunk from repeated addition.
pub fn generate_chunked(
    a1: &BigInt,
    d: &BigInt,
    n: usize,
    chunk_size: usize,
) -> Result<Vec<BigInt>, ArithSeqError> {
    if n < 1 {
        return Err(ArithSeqError::InvalidTermCount);
    }

    let mut result = Vec::with_capacity(n);

    for start in (0..n).step_by(chunk_size) {
        let end = cmp::min(start + chunk_size - 1, n - 1);

        // Compute the chunk's first term directly, then fill iteratively
        let chunk = sequence_chunk(term_at(a1, d, start), d, end - start + 1);

        result.extend(chunk);
    }

    Ok(result)
}

pub fn generate_rayon(
    a1: &BigInt,
    d: &BigInt,
    n: usize,
    chunk_size: usize,
) -> Result<Vec<BigInt>, ArithSeqError> {
    if n < 1 {
        return Err(ArithSeqError::InvalidTermCount);
    }

    // Create a parallel iterator over the chunk start offsets
    let chunks: Vec<Vec<BigInt>> = (0..n)
        .into_par_iter()
        .step_by(chunk_size)
        .map(|start| {
            let end = cmp::min(start + chunk_size - 1, n - 1);
            sequence_chunk(term_at(a1, d, start), d, end - start + 1)
        })
        .collect();

    // Extend the result with all the chunks
    let mut result = Vec::with_capacity(n);
    for chunk in chunks {
        result.extend(chunk);
    }

    Ok(result)
}

pub async fn generate_tokio(
    a1: &BigInt,
    d: &BigInt,
    n: usize,
    chunk_size: usize,
    max_concurrent_tasks: usize,
) -> Result<Vec<BigInt>, SequenceTaskError> {
    if n < 1 {
        return Err(ArithSeqError::InvalidTermCount.into());
    }

    let semaphore = Arc::new(Semaphore::new(max_concurrent_tasks));

    // Pre-allocate the result vector with the correct size
    let mut result = vec![BigInt::zero(); n];

    let mut tasks = vec![];

    for start in (0..n).step_by(chunk_size) {
        let end = cmp::min(start + chunk_size - 1, n - 1);
        let semaphore = Arc::clone(&semaphore);
        let first = term_at(a1, d, start);
        let d = d.clone();

        // Spawn a new task for each chunk
        let task: JoinHandle<Result<(usize, Vec<BigInt>), SequenceTaskError>> =
            task::spawn(async move {
                // Acquire a semaphore permit to control concurrency
                let _permit = semaphore.acquire().await?;

                let chunk = sequence_chunk(first, &d, end - start + 1);

                Ok((start, chunk)) // Return the start offset and the computed chunk
            });

        tasks.push(task);
    }

    // Wait for all tasks to complete and insert chunks directly into the result
    for task in tasks {
        let (start, chunk) = task.await??;
        for (i, value) in chunk.into_iter().enumerate() {
            result[start + i] = value;
        }
    }

    Ok(result)
}

// Thread-per-chunk generation with the results sent back over a kanal channel
pub fn generate_kanal(
    a1: &BigInt,
    d: &BigInt,
    n: usize,
    chunk_size: usize,
) -> Result<Vec<BigInt>, SequenceTaskError> {
    if n < 1 {
        return Err(ArithSeqError::InvalidTermCount.into());
    }

    // Create a channel to communicate between threads
    let (sender, receiver) = bounded::<(usize, Vec<BigInt>)>(n / chunk_size + 1);

    // Vector to store join handles to propagate thread results/errors back to main thread
    let mut handles = Vec::new();

    for start in (0..n).step_by(chunk_size) {
        let end = cmp::min(start + chunk_size - 1, n - 1);
        let first = term_at(a1, d, start);
        let d = d.clone();

        let sender = sender.clone();
        let handle = thread::spawn(move || -> Result<(), SequenceTaskError> {
            let chunk = sequence_chunk(first, &d, end - start + 1);

            // Send the result to the main thread
            sender.send((start, chunk))?;

            Ok(())
        });

        // Store the handle to join later and propagate errors
        handles.push(handle);
    }

    // Drop the sender to allow the receiver to exit after all threads finish
    drop(sender);

    // Wait for all threads to finish and propagate any errors
    for handle in handles {
        handle
            .join()
            .map_err(|e| SequenceTaskError::StdJoin(format!("Thread panicked: {:?}", e)))??;
    }

    // Collect the chunks and reassemble them in offset order
    let mut results: Vec<(usize, Vec<BigInt>)> = Vec::new();
    for (start, chunk) in receiver {
        results.push((start, chunk));
    }
    results.sort_by_key(|(start, _)| *start);

    let mut result = Vec::with_capacity(n);
    for (_, chunk) in results {
        result.extend(chunk);
    }

    Ok(result)
}
