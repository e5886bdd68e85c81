//! compare CLI - Tylax vs reference converter comparison harness
//!
//! Drives the translator CLI and pandoc as opaque processes, feeding each
//! the same LaTeX on stdin, and reports output equality and relative
//! speed. A failing backend is reported per case and never aborts the run.

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::time::Duration;
#[cfg(feature = "cli")]
use tylax_mapgen::harness::{compare_case, Backend, CaseReport, ProcessBackend};

/// Curated math expressions exercising the mapped symbol classes.
#[cfg(feature = "cli")]
const MATH_TEST_CASES: &[(&str, &str)] = &[
    // Basic
    (r"\frac{1}{2}", "Basic fraction"),
    (r"\frac{1}{2}_3", "Fraction with subscript (edge case)"),
    (r"\sqrt{x^2 + y^2}", "Square root"),
    (r"\sqrt[3]{x}", "Nth root"),
    // Greek
    (r"\alpha + \beta = \gamma", "Greek letters"),
    (r"\Gamma \Delta \Theta", "Uppercase Greek"),
    // Operators
    (r"\sum_{i=1}^{n} i^2", "Summation"),
    (r"\sum\limits_{i=1}^{n} i", "Sum with limits"),
    (r"\int_0^\infty e^{-x} dx", "Integral"),
    (r"\prod_{i=1}^{n} x_i", "Product"),
    // Relations
    (r"a \leq b \geq c \neq d", "Comparisons"),
    (r"A \subset B \subseteq C", "Set relations"),
    // Matrices
    (r"\begin{pmatrix} a & b \\ c & d \end{pmatrix}", "Matrix"),
    (r"\begin{bmatrix} 1 & 2 \\ 3 & 4 \end{bmatrix}", "Bracket matrix"),
    // Complex
    (
        r"\frac{\partial^2 u}{\partial x^2} + \frac{\partial^2 u}{\partial y^2} = 0",
        "Laplace equation",
    ),
    (r"e^{i\pi} + 1 = 0", "Euler's identity"),
    (
        r"\lim_{n \to \infty} \left(1 + \frac{1}{n}\right)^n = e",
        "Limit of e",
    ),
];

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "compare")]
#[command(author = "SciPenAI")]
#[command(version)]
#[command(about = "Compare Tylax output against a reference converter", long_about = None)]
struct Cli {
    /// Test a single math expression
    #[arg(short, long)]
    math: Option<String>,

    /// Test a full document file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Run a performance benchmark instead of the test suite
    #[arg(short, long)]
    benchmark: bool,

    /// Benchmark iterations
    #[arg(short = 'n', long, default_value_t = 10)]
    iterations: usize,

    /// Translator executable
    #[arg(long, default_value = "t2l")]
    translator: String,

    /// Reference converter executable
    #[arg(long, default_value = "pandoc")]
    reference: String,

    /// Per-process timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    let timeout = Duration::from_secs(cli.timeout);

    let math_args = ["-d", "l2t"];
    let document_args = ["-d", "l2t", "-f"];
    let reference_args = ["-f", "latex", "-t", "typst", "--wrap=none"];

    let reference = ProcessBackend::new("pandoc", &cli.reference, &reference_args, timeout);

    if let Some(ref expr) = cli.math {
        let tylax = ProcessBackend::new("tylax", &cli.translator, &math_args, timeout);
        let report = compare_case(&tylax, &reference, &format!("${}$", expr));
        print_case(&report, "");
        return;
    }

    if let Some(ref path) = cli.file {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("✗ {} - read error: {}", path.display(), err);
                std::process::exit(1);
            }
        };
        let tylax = ProcessBackend::new("tylax", &cli.translator, &document_args, timeout);
        let report = compare_case(&tylax, &reference, &content);
        print_case(&report, &path.display().to_string());
        return;
    }

    if cli.benchmark {
        let tylax = ProcessBackend::new("tylax", &cli.translator, &math_args, timeout);
        run_benchmark(&tylax, &reference, cli.iterations);
        return;
    }

    let tylax = ProcessBackend::new("tylax", &cli.translator, &math_args, timeout);
    run_all_tests(&tylax, &reference);
}

#[cfg(feature = "cli")]
fn print_case(report: &CaseReport, description: &str) {
    println!("{}", "=".repeat(60));
    if !description.is_empty() {
        println!("Test: {}", description);
    }
    println!("LaTeX:  {}", report.input);
    println!(
        "Tylax:  {} ({:.2}ms)",
        report.left.output.trim_end(),
        report.left.elapsed.as_secs_f64() * 1000.0
    );
    println!(
        "Pandoc: {} ({:.2}ms)",
        report.right.output.trim_end(),
        report.right.elapsed.as_secs_f64() * 1000.0
    );
    if report.matched {
        println!("Result: ✓ MATCH");
    } else {
        println!("Result: ✗ DIFFER");
    }
}

#[cfg(feature = "cli")]
fn run_all_tests(tylax: &dyn Backend, reference: &dyn Backend) {
    println!("Tylax vs Pandoc: LaTeX -> Typst comparison");

    let mut matches = 0;
    let mut tylax_ok = 0;
    let mut reference_ok = 0;
    let mut tylax_time = Duration::ZERO;
    let mut reference_time = Duration::ZERO;

    for (latex, description) in MATH_TEST_CASES {
        let report = compare_case(tylax, reference, &format!("${}$", latex));
        print_case(&report, description);

        if !report.left.is_error() {
            tylax_ok += 1;
        }
        if !report.right.is_error() {
            reference_ok += 1;
        }
        if report.matched {
            matches += 1;
        }
        tylax_time += report.left.elapsed;
        reference_time += report.right.elapsed;
    }

    let total = MATH_TEST_CASES.len();
    println!();
    println!("Summary");
    println!("  Total tests:    {}", total);
    println!("  Tylax success:  {}/{}", tylax_ok, total);
    println!("  Pandoc success: {}/{}", reference_ok, total);
    println!("  Exact matches:  {}/{}", matches, total);
    println!();
    println!("Performance:");
    println!("  Tylax total:  {:.2}ms", tylax_time.as_secs_f64() * 1000.0);
    println!(
        "  Pandoc total: {:.2}ms",
        reference_time.as_secs_f64() * 1000.0
    );
    if tylax_time > Duration::ZERO {
        println!(
            "  Speedup:      {:.1}x",
            reference_time.as_secs_f64() / tylax_time.as_secs_f64()
        );
    }
}

#[cfg(feature = "cli")]
fn run_benchmark(tylax: &dyn Backend, reference: &dyn Backend, iterations: usize) {
    let expr = r"\frac{\partial^2 u}{\partial x^2} + \frac{\partial^2 u}{\partial y^2} = 0";
    let input = format!("${}$", expr);

    println!("Performance benchmark");
    println!("Test expression: {}", expr);
    println!("Iterations: {}", iterations);
    println!();

    for backend in [tylax, reference] {
        let mut times = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            times.push(backend.run(&input).elapsed);
        }
        let total: Duration = times.iter().sum();
        let avg = total.as_secs_f64() * 1000.0 / iterations.max(1) as f64;
        let min = times.iter().min().copied().unwrap_or_default();
        let max = times.iter().max().copied().unwrap_or_default();
        println!(
            "{}: avg={:.2}ms, min={:.2}ms, max={:.2}ms",
            backend.name(),
            avg,
            min.as_secs_f64() * 1000.0,
            max.as_secs_f64() * 1000.0
        );
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo run --features cli --bin compare");
}
