use std::process::ExitCode;

fn main() -> ExitCode {
    buildtoc::cli::run()
}
