#![no_main]

use libfuzzer_sys::fuzz_target;
use optscan::Parser;

fuzz_target!(|data: &[u8]| {
    let mut args: Vec<String> = vec!["fuzz".to_string()];

    for &byte in data {
        args.push(format!("{}", byte));
        args.push(format!("-{}", byte));
        args.push(format!("{}", byte as char));
        args.push(format!("-{}", byte as char));
        args.push(format!("--{}", byte as char));
        args.push(format!("-{}={}", byte as char, byte));
        args.push(format!("--{}={}", byte as char, byte));
        args.push(format!("--{}={:x}", byte, byte));
    }

    let mut parser = Parser::new();
    for &byte in data.iter().take(8) {
        parser.add(byte as char, format!("{byte}"), "");
    }

    let found = parser.parse(&args);

    for (opt, again) in found.iter().zip(parser.parse(&args)) {
        assert_eq!(*opt, again);
        assert!(opt.index > 0 && opt.index < args.len());
        assert_eq!(opt.value::<u8>(), opt.value::<u8>());
    }
});
