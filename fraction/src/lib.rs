//! The fraction demo app. For the arithmetic itself, see [libfraction's documentation](libfraction).
//!
//! The app builds one [Fraction](libfraction::Fraction) from its options and prints a few mixed
//! integer and float operations on it.

#![deny(missing_docs)]

#[cfg(test)]
mod test;

mod diagnostics;
use diagnostics::{emit_diagnostics, Diagnostic};

use libfraction::{Fraction, FractionError, Int};

/// Options to run the demo with.
pub struct Opts {
    /// Numerator of the demo fraction.
    pub numerator: String,
    /// Denominator of the demo fraction.
    pub denominator: String,
    /// Integer the fraction is multiplied by, from either side.
    pub integer: String,
    /// Float added to the fraction.
    pub float: String,
    /// When true, diagnostics will be colored.
    pub color: bool,
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let app = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .arg(
            clap::Arg::with_name("numerator")
                .short("n")
                .long("numerator")
                .help("Numerator of the demo fraction")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("3"),
        )
        .arg(
            clap::Arg::with_name("denominator")
                .short("d")
                .long("denominator")
                .help("Denominator of the demo fraction. Must be non-zero.")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("4"),
        )
        .arg(
            clap::Arg::with_name("integer")
                .short("i")
                .long("integer")
                .help("Integer to multiply the fraction by")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("10"),
        )
        .arg(
            clap::Arg::with_name("float")
                .short("f")
                .long("float")
                .help("Float to add to the fraction")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.5"),
        );
    let matches = parser(app)?;

    let value = |name: &str| matches.value_of(name).unwrap_or_default().to_owned();
    Ok(Opts {
        numerator: value("numerator"),
        denominator: value("denominator"),
        integer: value("integer"),
        float: value("float"),
        color,
    })
}

/// Output of a demo run.
#[derive(Default, Debug)]
pub struct FractionResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
}

/// Builds a [FractionResult](self::FractionResult).
struct FractionResultBuilder {
    color: bool,
    stdout: Vec<String>,
    stderr: String,
}

impl FractionResultBuilder {
    fn new(color: bool) -> Self {
        Self {
            color,
            stdout: Vec::with_capacity(4),
            stderr: String::new(),
        }
    }

    fn emit(&mut self, label: &str, frac: Fraction) {
        self.stdout.push(format!("{}: {}", label, frac));
    }

    fn err(&mut self, diagnostics: &[Diagnostic]) {
        self.stderr
            .push_str(&emit_diagnostics(diagnostics, self.color));
    }

    fn ok(self) -> FractionResult {
        FractionResult {
            code: 0,
            stdout: self.stdout.join("\n"),
            stderr: self.stderr,
        }
    }

    fn failed(self) -> FractionResult {
        FractionResult {
            code: 1,
            stdout: self.stdout.join("\n"),
            stderr: self.stderr,
        }
    }
}

/// Parsed demo inputs.
struct DemoInputs {
    numerator: Int,
    denominator: Int,
    integer: Int,
    float: f64,
}

impl DemoInputs {
    fn parse(opts: &Opts) -> Result<DemoInputs, Vec<Diagnostic>> {
        let mut diagnostics = Vec::new();
        let numerator = parse_option(&mut diagnostics, "numerator", &opts.numerator, "an integer");
        let denominator =
            parse_option(&mut diagnostics, "denominator", &opts.denominator, "an integer");
        let integer = parse_option(&mut diagnostics, "integer", &opts.integer, "an integer");
        let float = parse_option(&mut diagnostics, "float", &opts.float, "a number");

        match (numerator, denominator, integer, float) {
            (Some(numerator), Some(denominator), Some(integer), Some(float)) => Ok(DemoInputs {
                numerator,
                denominator,
                integer,
                float,
            }),
            _ => Err(diagnostics),
        }
    }
}

/// Parses one option, recording a diagnostic when it is malformed.
fn parse_option<T: std::str::FromStr>(
    diagnostics: &mut Vec<Diagnostic>,
    name: &str,
    value: &str,
    expected: &str,
) -> Option<T> {
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            diagnostics.push(
                Diagnostic::err(format!("invalid value \"{}\" for --{}", value, name))
                    .with_note(format!("expected {}", expected)),
            );
            None
        }
    }
}

/// The demo computation: `f`, `f * i`, `i * f`, `f + float`.
fn demo(inputs: &DemoInputs) -> Result<[(&'static str, Fraction); 4], FractionError> {
    let f = Fraction::new(inputs.numerator, inputs.denominator)?;
    Ok([
        ("f", f),
        ("f1", f * inputs.integer),
        ("f2", inputs.integer * f),
        ("f3", f + inputs.float),
    ])
}

/// Runs the demo end-to-end.
pub fn run_fraction(opts: Opts) -> FractionResult {
    let mut result = FractionResultBuilder::new(opts.color);

    let inputs = match DemoInputs::parse(&opts) {
        Ok(inputs) => inputs,
        Err(diagnostics) => {
            result.err(&diagnostics);
            return result.failed();
        }
    };

    match demo(&inputs) {
        Ok(lines) => {
            for (label, frac) in lines.iter() {
                result.emit(label, *frac);
            }
            result.ok()
        }
        Err(err) => {
            result.err(&[Diagnostic::from(err)]);
            result.failed()
        }
    }
}
