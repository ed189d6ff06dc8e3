#![no_main]

use libfuzzer_sys::fuzz_target;
use optscan::{Opt, Parser};

fn drain(parser: &Parser, args: &[&str]) {
    for opt in parser.parse(args) {
        let _ = opt.value::<i64>();
        let _ = opt.value::<f64>();
        let _ = opt.string();
        let _ = opt.usage();
    }
}

fuzz_target!(|data: &[u8]| {
    let parser = Parser::from([Opt::new('a', "all", ""), Opt::long("name", "")]);

    let byte_args: Vec<String> = data.iter().map(|&b| format!("{}", b as char)).collect();
    let mut args = vec!["fuzz"];
    args.extend(byte_args.iter().map(|s| s.as_str()));

    drain(&parser, &args);

    let null_string = String::from_utf8_lossy(data);
    let null_split: Vec<&str> = null_string.split('\0').collect();
    let mut args = vec!["fuzz"];
    args.extend(null_split);

    drain(&parser, &args);
});
