use skaflo::{
    cli::{get_log_level_from_verbose, parse_cli, run},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(cli.verbose))
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => default_error_handler(err),
    }
}
