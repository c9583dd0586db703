use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

/// Runs the command-line front end and converts its status into an
/// [`ExitCode`].
#[must_use]
pub fn run_with<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    Out: Write,
    Err: Write,
{
    cli::exit_code_from(cli::run(args, stdout, stderr))
}
