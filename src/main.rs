use std::process::ExitCode;

fn main() -> ExitCode {
    match swatch_match::run(wild::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
