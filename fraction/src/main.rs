use fraction::{get_opts, run_fraction, FractionResult};
use std::io::Write;
use termcolor::{BufferedStandardStream, ColorChoice, WriteColor};

fn main_impl() -> Result<i32, Box<dyn std::error::Error>> {
    let mut ch_stdout = BufferedStandardStream::stdout(ColorChoice::Auto);
    let mut ch_stderr = BufferedStandardStream::stderr(ColorChoice::Auto);
    let is_tty = atty::is(atty::Stream::Stderr);
    let use_color = is_tty && ch_stderr.supports_color();

    let opts = match get_opts(|app| app.get_matches_safe(), use_color) {
        Ok(opts) => opts,
        // Prints usage, or help and version requests, with clap's own exit code.
        Err(err) => err.exit(),
    };
    let FractionResult {
        code,
        stdout,
        stderr,
    } = run_fraction(opts);

    if !stderr.is_empty() {
        writeln!(&mut ch_stderr, "{}", stderr)?;
        ch_stderr.flush()?;
    }
    if !stdout.is_empty() {
        writeln!(&mut ch_stdout, "{}", stdout)?;
        ch_stdout.flush()?;
    }

    Ok(code)
}

fn main() {
    let out = std::panic::catch_unwind(main_impl);

    match out {
        Ok(Ok(code)) => std::process::exit(code),
        Ok(Err(err)) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
        Err(..) => {
            eprint!("\nnote: you found an internal error in the fraction demo!\n");
            std::process::exit(2);
        }
    }
}
