use clap::Parser;
use std::cmp::Ordering;
use vector_lab_core::{Error, Pair, River, RiverRegistry, Vec3};

/// Vector exercise demo with configurable operands
#[derive(Parser, Debug)]
#[command(name = "vector-lab-demo")]
#[command(about = "Vector, pair, and registry exercise demo", long_about = None)]
struct Args {
    /// First vector x coordinate
    #[arg(long, default_value_t = 1.0)]
    x1: f64,

    /// First vector y coordinate
    #[arg(long, default_value_t = 2.0)]
    y1: f64,

    /// First vector z coordinate
    #[arg(long, default_value_t = 3.0)]
    z1: f64,

    /// Second vector x coordinate
    #[arg(long, default_value_t = 4.0)]
    x2: f64,

    /// Second vector y coordinate
    #[arg(long, default_value_t = 5.0)]
    y2: f64,

    /// Second vector z coordinate
    #[arg(long, default_value_t = 6.0)]
    z2: f64,

    /// Scalar used for the scaling step
    #[arg(short, long, default_value_t = 2.0)]
    scalar: f64,

    /// Base for the pair power step
    #[arg(long, default_value_t = 2.5)]
    base: f64,

    /// Exponent for the pair power step
    #[arg(long, default_value_t = 3)]
    exponent: i32,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    println!("=== Vector Lab Demo ===\n");

    let v1 = Vec3::new(args.x1, args.y1, args.z1)?;
    let v2 = Vec3::new(args.x2, args.y2, args.z2)?;
    println!("Vectors:");
    println!("  v1 = {v1}");
    println!("  v2 = {v2}");

    println!("\nAddition:");
    println!("  v1 + v2 = {}", v1 + v2);

    println!("\nSubtraction:");
    println!("  v1 - v2 = {}", v1 - v2);

    println!("\nDot product:");
    println!("  v1 . v2 = {}", v1.dot(&v2));

    println!("\nScaling:");
    println!("  v1 * {} = {}", args.scalar, v1.scale(args.scalar)?);

    println!("\nLengths:");
    println!("  |v1| = {}", v1.length());
    println!("  |v2| = {}", v2.length());

    println!("\nEquality:");
    println!("  v1 == v2: {}", v1 == v2);

    println!("\nLength comparison:");
    match v1.compare_length(&v2) {
        Ordering::Greater => println!("  v1 is longer than v2"),
        Ordering::Less => println!("  v1 is shorter than v2"),
        Ordering::Equal => println!("  v1 and v2 have equal length"),
    }

    let pair = Pair::new(args.base, args.exponent)?;
    println!("\nPair power:");
    println!("  {pair}");
    println!("  power = {}", pair.power());

    let mut registry = RiverRegistry::new();
    registry.register(River::new("Volga", 3530.0)?);
    registry.register(River::new("Seine", 776.0)?);
    registry.register(River::new("Nile", 6852.0)?);
    println!("\nRegistered rivers:");
    for name in registry.names() {
        println!("  {name}");
    }

    Ok(())
}
