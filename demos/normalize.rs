#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate iplist;

use std::io;

use iplist::demos::normalize;

// Normalizes a list of IP entries read from stdin.
fn main() {
    env_logger::init();

    clap_app!(app =>
        (about: "Reads IP entries from stdin and prints the normalized list")
    ).get_matches();

    let stdin = io::stdin();
    let stdout = io::stdout();
    normalize(stdin.lock(), stdout.lock()).expect("Normalizing failed!");
}
