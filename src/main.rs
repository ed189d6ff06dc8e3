use std::{env, path::PathBuf};

use anyhow::Result;
use log::{debug, warn};
use optscan::{Opt, Parser};

fn main() -> Result<()> {
    alto_logger::init_alt_term_logger()?;

    let args = Parser::from([
        Opt::new('h', "help", "print help message"),
        Opt::new('v', "verbose", "print more"),
        Opt::new('f', "file", "use the given file"),
        Opt::new('n', "count", "how many times to say hello"),
    ]);

    let options = args.parse_env();
    debug!("found {} options", options.len());

    if options.iter().any(|opt| opt.is('h', "help")) {
        let name = env::args_os().next().unwrap_or_default();

        println!("Usage:\n{} [options]", name.to_string_lossy());
        println!("Options:\n{}", args.help());
        return Ok(());
    }

    let mut verbosity = 0;
    let mut count = 1u32;

    for opt in &options {
        match opt.short {
            Some('v') => verbosity += 1,
            Some('f') => {
                let file: PathBuf = opt.value()?;
                println!("Using file: '{}'", file.display());
            }
            Some('n') => count = opt.value()?,
            _ if !opt.known => {
                warn!("ignoring {}", opt.unexpected());
            }
            _ => {}
        }
    }

    if verbosity > 0 {
        println!("Verbose (level {verbosity})");
    }

    for _ in 0..count {
        println!("hello");
    }

    Ok(())
}
