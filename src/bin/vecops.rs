//! Vector Operation Tool
//!
//! Parses one or two vectors from the command line, applies a single
//! operation and prints the result as text or JSON.
//!
//! Usage:
//!   cargo run --bin vecops -- cross "1,0,0" "0,1,0"
//!   cargo run --bin vecops -- lerp "0,0,0" "10,10,10" --scalar 0.25 --json

use std::fmt;

use clap::{Parser, ValueEnum};
use csgvec::Vector3;
use serde::Serialize;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Vector Operation Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Applies a vector operation to vectors given as \"x,y[,z]\"",
    long_about = None
)]
struct Args {
    /// Operation to apply
    #[arg(value_enum)]
    op: Op,

    /// First operand
    #[arg(allow_hyphen_values = true)]
    a: Vector3,

    /// Second operand, for binary operations
    #[arg(allow_hyphen_values = true)]
    b: Option<Vector3>,

    /// Scalar for times, divided-by and lerp
    #[arg(short, long, allow_hyphen_values = true)]
    scalar: Option<f64>,

    /// Print the result as JSON
    #[arg(short, long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Op {
    Negated,
    Abs,
    Unit,
    Length,
    LengthSquared,
    NonParallel,
    Times,
    DividedBy,
    Plus,
    Minus,
    Dot,
    Cross,
    Lerp,
    Distance,
    DistanceSquared,
    Equals,
    Min,
    Max,
}

/// Result of an operation
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    Vector(Vector3),
    Scalar(f64),
    Flag(bool),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Vector(v) => write!(f, "{}", v),
            Output::Scalar(s) => write!(f, "{}", s),
            Output::Flag(b) => write!(f, "{}", b),
        }
    }
}

fn require_second(args: &Args) -> Result<Vector3> {
    args.b
        .ok_or_else(|| format!("{:?} needs a second vector", args.op).into())
}

fn require_scalar(args: &Args) -> Result<f64> {
    args.scalar
        .ok_or_else(|| format!("{:?} needs --scalar", args.op).into())
}

fn apply(args: &Args) -> Result<Output> {
    let a = args.a;
    let out = match args.op {
        Op::Negated => Output::Vector(a.negated()),
        Op::Abs => Output::Vector(a.abs()),
        Op::Unit => Output::Vector(a.unit()),
        Op::Length => Output::Scalar(a.length()),
        Op::LengthSquared => Output::Scalar(a.length_squared()),
        Op::NonParallel => Output::Vector(a.random_non_parallel_vector()),
        Op::Times => Output::Vector(a.times(require_scalar(args)?)),
        Op::DividedBy => Output::Vector(a.divided_by(require_scalar(args)?)),
        Op::Plus => Output::Vector(a.plus(&require_second(args)?)),
        Op::Minus => Output::Vector(a.minus(&require_second(args)?)),
        Op::Dot => Output::Scalar(a.dot(&require_second(args)?)),
        Op::Cross => Output::Vector(a.cross(&require_second(args)?)),
        Op::Lerp => Output::Vector(a.lerp(&require_second(args)?, require_scalar(args)?)),
        Op::Distance => Output::Scalar(a.distance_to(&require_second(args)?)),
        Op::DistanceSquared => Output::Scalar(a.distance_to_squared(&require_second(args)?)),
        Op::Equals => Output::Flag(a.equals(&require_second(args)?)),
        Op::Min => Output::Vector(a.min(&require_second(args)?)),
        Op::Max => Output::Vector(a.max(&require_second(args)?)),
    };
    Ok(out)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let out = apply(&args)?;

    if args.json {
        // JSON has no NaN or infinity; serde_json writes them as null
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!("{}", out);
    }

    Ok(())
}
