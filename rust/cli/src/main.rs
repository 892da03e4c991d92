use std::process::exit;

fn main() {
    let code = ventuno_cli::run(
        std::env::args(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    exit(code);
}
