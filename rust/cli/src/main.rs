use std::io;

fn main() {
    sevens_cli::logging::init_logging();
    let code = sevens_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
