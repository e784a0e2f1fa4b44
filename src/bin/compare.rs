//! Console comparison of the Fibonacci approaches and a walkthrough of the
//! arithmetic-sequence toolkit. Output is self-test style: inputs, results,
//! and runtimes, with errors reported by kind rather than crashing.

use std::time::Instant;

use num_bigint::BigInt;
use sequence_toolkit::{arith, fibonacci, math};

fn main() {
    fibonacci_comparison();
    arithmetic_walkthrough();
}

fn fibonacci_comparison() {
    println!("\nFIBONACCI COMPARISON\n====================");
    for n in [1usize, 5, 10, 20, 30] {
        println!("n={n}");

        let start = Instant::now();
        let output = fibonacci::nth_recursive(n);
        println!(
            "  nth_recursive  output={output}  runtime={:?}",
            start.elapsed()
        );

        let start = Instant::now();
        let output = fibonacci::nth_memoized(n);
        println!(
            "  nth_memoized   output={output}  runtime={:?}",
            start.elapsed()
        );

        let start = Instant::now();
        let output = fibonacci::nth_iterative(n);
        println!(
            "  nth_iterative  output={output}  runtime={:?}",
            start.elapsed()
        );
        println!();
    }
}

fn arithmetic_walkthrough() {
    println!("ARITHMETIC SEQUENCES\n====================");

    let a1 = BigInt::from(5);
    let d = BigInt::from(-3);
    let n = 8;
    println!("generate(a1={a1}, d={d}, n={n})");
    match arith::generate(&a1, &d, n) {
        Ok(terms) => {
            let rendered: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
            println!("  Result: [{}]", rendered.join(", "));
            println!("  Sum of terms: {}", math::series_sum(&a1, &d, n));
        }
        Err(e) => println!("  Error: {e}"),
    }
    println!();

    for values in [vec![1, 3, 5, 7, 9], vec![1, 4, 7, 11]] {
        let seq: Vec<BigInt> = values.iter().copied().map(BigInt::from).collect();
        println!("decompose({values:?})");
        match arith::decompose(&seq) {
            Ok((an, a1, d, n)) => println!("  Result: an={an}, a1={a1}, d={d}, n={n}"),
            Err(e) => println!("  Error: {e}"),
        }
        println!();
    }

    // {3, 6, 9, 12, 15}: each quantity in turn treated as the unknown
    let (an, a1, d) = (BigInt::from(15), BigInt::from(3), BigInt::from(3));
    println!("solve over {{3, 6, 9, 12, 15}} (an={an}, a1={a1}, d={d}, n=5)");
    let scenarios = [
        ("an", arith::solve(None, Some(&a1), Some(&d), Some(5))),
        ("a1", arith::solve(Some(&an), None, Some(&d), Some(5))),
        ("d", arith::solve(Some(&an), Some(&a1), None, Some(5))),
        ("n", arith::solve(Some(&an), Some(&a1), Some(&d), None)),
    ];
    for (unknown, outcome) in scenarios {
        match outcome {
            Ok(value) => println!("  When {unknown} is unknown, result: {unknown}={value}"),
            Err(e) => println!("  When {unknown} is unknown, error: {e}"),
        }
    }
    println!();

    println!("solve failure modes");
    for (label, outcome) in [
        ("two knowns", arith::solve(None, Some(&a1), Some(&d), None)),
        (
            "d with n=1",
            arith::solve(Some(&BigInt::from(5)), Some(&BigInt::from(5)), None, Some(1)),
        ),
        (
            "n with d=0",
            arith::solve(
                Some(&BigInt::from(5)),
                Some(&BigInt::from(3)),
                Some(&BigInt::from(0)),
                None,
            ),
        ),
    ] {
        match outcome {
            Ok(value) => println!("  {label}: unexpectedly solved, result={value}"),
            Err(e) => println!("  {label}: {e}"),
        }
    }
}
