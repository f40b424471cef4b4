use std::io;

fn main() {
    casino_cli::logging::init_logging();
    let code = casino_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
