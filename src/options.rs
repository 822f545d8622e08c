//! Parsing Options.
//! One required positional argument: the number whose factorial to compute.

use clap::{Arg, Command};

fn make_options_parser() -> clap::Command {
    let parser = Command::new("bigfact")
        .no_binary_name(true)
        .version("v0.1.0")
        .about("Computes the exact factorial of a non-negative integer")
        .arg(
            Arg::new("number")
                .value_name("N")
                .help("Non-negative integer whose factorial to compute")
                .required(true)
                .num_args(1),
        );
    parser
}

#[derive(Debug, Default)]
pub struct Options {
    pub number: String,
}

impl Options {
    pub fn parse_from_args(flags: &[String]) -> Result<Self, clap::Error> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let number = matches.get_one::<String>("number").unwrap().to_string();
        Ok(Options { number })
    }
}
