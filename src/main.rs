use anyhow::{anyhow, Result};
use clap::error::ErrorKind;
use log::debug;

use bigfact::engine;
use bigfact::options::Options;

fn main() -> Result<()> {
    if std::env::var("BIGFACT_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("BIGFACT_LOG")
            .write_style("BIGFACT_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let args = std::env::args_os()
        .skip(1)
        .enumerate()
        .map(|(i, arg)| {
            arg.into_string()
                .map_err(|arg| anyhow!("argument {} is not valid Unicode: {:?}", i + 1, arg))
        })
        .collect::<Result<Vec<_>>>()?;

    let options = match Options::parse_from_args(&args) {
        Ok(options) => options,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{e}");
            return Ok(());
        }
        Err(e) => {
            eprint!("{e}");
            std::process::exit(1);
        }
    };

    debug!("options: {:?}", options);

    let n = engine::parse_input(&options.number)?;
    let result = engine::compute_factorial(n)?;
    println!("Factorial of {} is: {}", n, result);

    Ok(())
}
