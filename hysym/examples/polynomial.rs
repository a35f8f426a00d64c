use std::io::Write;

use clap::Parser;
use hysym::prelude::*;
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Build a polynomial from its coefficients, print it with its derivative
/// and evaluate both at a point
#[derive(Parser)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
pub struct Args {
    /// Coefficients, constant term first (`1 -3 0 2` is 1 - 3x + 2x^3)
    #[arg(required = true)]
    pub coefficients: Vec<Scalar>,

    /// Name of the variable
    #[arg(short, long, default_value = "x")]
    pub var: String,

    /// Point at which both expressions are evaluated
    #[arg(short, long, default_value_t = 1.0)]
    pub at: f64,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

fn polynomial(coefficients: &[Scalar], var: &Expr) -> Expr {
    let mut terms = coefficients
        .iter()
        .enumerate()
        .filter(|(i, c)| *i == 0 || c.to_f64() != 0.0)
        .map(|(i, &c)| match i {
            0 => number(c),
            1 => c * var,
            _ => c * var.pow(i as i64),
        });

    // The constant term is always kept, so there is at least one term
    let first = terms.next().unwrap_or_else(|| number(0));
    terms.fold(first, |acc, term| acc + term)
}

fn main() {
    let args = Args::parse();

    let mut label_color = ColorSpec::new();
    label_color.set_fg(Some(termcolor::Color::Green));
    label_color.set_intense(true);

    let mut error_color = ColorSpec::new();
    error_color.set_fg(Some(termcolor::Color::Red));
    error_color.set_intense(true);

    let choice = if args.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let config = RenderConfig::default().with_color(choice);
    let stdout = StandardStream::stdout(choice);
    let mut stdout = stdout.lock();

    let x = match symbol(args.var.as_str()) {
        Ok(x) => x,
        Err(e) => {
            stdout.set_color(&error_color).unwrap();
            writeln!(stdout, "{e}").unwrap();
            stdout.reset().unwrap();
            std::process::exit(1);
        }
    };

    let p = polynomial(&args.coefficients, &x);
    let dp = p.differentiate(&args.var).expect("variable name was validated");

    for (label, e) in [("p", &p), ("p'", &dp)] {
        stdout.set_color(&label_color).unwrap();
        write!(stdout, "{label}({}) = ", args.var).unwrap();
        stdout.reset().unwrap();
        stdout.flush().unwrap();
        e.pretty_print_with(&config).unwrap();
        println!();
    }

    for (label, e) in [("p", &p), ("p'", &dp)] {
        let value = e
            .evaluate([(args.var.as_str(), args.at)])
            .expect("the polynomial only mentions its variable");
        stdout.set_color(&label_color).unwrap();
        write!(stdout, "{label}({}) = ", args.at).unwrap();
        stdout.reset().unwrap();
        writeln!(stdout, "{value}").unwrap();
    }
    stdout.flush().unwrap();
}
