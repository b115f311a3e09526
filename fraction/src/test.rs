use crate::{get_opts, run_fraction, FractionResult, Opts};

fn opts_from(args: &[&str]) -> Result<Opts, clap::Error> {
    let mut argv = vec!["fraction"];
    argv.extend_from_slice(args);
    get_opts(|app| app.get_matches_from_safe(argv), false)
}

fn run(args: &[&str]) -> FractionResult {
    run_fraction(opts_from(args).unwrap())
}

macro_rules! demo_test {
    ($($name:ident: [$($arg:expr),*] => $stdout:expr)*) => {
    $(
        #[test]
        fn $name() {
            let result = run(&[$($arg),*]);
            assert_eq!(result.code, 0, "{}", result.stderr);
            assert_eq!(result.stdout, $stdout);
            assert!(result.stderr.is_empty(), "{}", result.stderr);
        }
    )*
    }
}

mod demo {
    use super::*;

    demo_test! {
        defaults: [] => "f: 3/4\nf1: 15/2\nf2: 15/2\nf3: 9/4"
        negative_numerator: ["--numerator", "-3"] => "f: -3/4\nf1: -15/2\nf2: -15/2\nf3: 3/4"
        short_flags: ["-n", "1", "-d", "2", "-i", "4", "-f", "0.25"] => "f: 1/2\nf1: 2/1\nf2: 2/1\nf3: 3/4"
        reduces_input: ["-n", "6", "-d", "-8"] => "f: -3/4\nf1: -15/2\nf2: -15/2\nf3: 3/4"
        negative_float: ["--float=-0.75"] => "f: 3/4\nf1: 15/2\nf2: 15/2\nf3: 0/1"
        zero_integer: ["-i", "0"] => "f: 3/4\nf1: 0/1\nf2: 0/1\nf3: 9/4"
    }
}

#[test]
fn option_defaults() {
    let opts = opts_from(&[]).unwrap();
    assert_eq!(opts.numerator, "3");
    assert_eq!(opts.denominator, "4");
    assert_eq!(opts.integer, "10");
    assert_eq!(opts.float, "1.5");
    assert!(!opts.color);
}

#[test]
fn zero_denominator_fails() {
    let result = run(&["--denominator", "0"]);
    assert_eq!(result.code, 1);
    assert!(result.stdout.is_empty());
    assert!(
        result.stderr.contains("Denominator cannot be zero."),
        "{}",
        result.stderr
    );
    assert!(result.stderr.contains("--denominator"), "{}", result.stderr);
}

#[test]
fn malformed_options_fail() {
    let result = run(&["-n", "three", "-f", "x"]);
    assert_eq!(result.code, 1);
    assert!(result.stdout.is_empty());
    assert!(
        result.stderr.contains("invalid value \"three\" for --numerator"),
        "{}",
        result.stderr
    );
    assert!(
        result.stderr.contains("invalid value \"x\" for --float"),
        "{}",
        result.stderr
    );
}

#[test]
fn unknown_flag_is_a_clap_error() {
    assert!(opts_from(&["--bogus"]).is_err());
}
