#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate iplist;

use std::io;

use iplist::demos::validate;

// Reports the line numbers of invalid IP entries read from stdin.
fn main() {
    env_logger::init();

    let matches = clap_app!(app =>
        (@arg LIMIT: +takes_value --limit "Maximum number of invalid lines to report")
    ).get_matches();

    let n = matches
        .value_of("LIMIT")
        .or(Some("1"))
        .and_then(|n| n.parse::<usize>().ok())
        .expect("Bad limit!");

    let stdin = io::stdin();
    let stdout = io::stdout();
    validate(stdin.lock(), stdout.lock(), n).expect("Validating failed!");
}
