#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate iplist;

use std::io;

use iplist::demos::filter;

// Copies stdin to stdout, dropping invalid IP entry lines.
fn main() {
    env_logger::init();

    clap_app!(app =>
        (about: "Copies stdin to stdout with invalid IP entry lines removed")
    ).get_matches();

    let stdin = io::stdin();
    let stdout = io::stdout();
    filter(stdin.lock(), stdout.lock()).expect("Filtering failed!");
}
