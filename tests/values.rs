use std::path::PathBuf;

use optscan::{Error, Value};

#[test]
fn integer() {
    assert_eq!(Value::new("42").parse::<i32>(), Ok(42));
    assert_eq!(Value::new("-7").parse::<i64>(), Ok(-7));
    assert_eq!(Value::new("\t42\n").parse::<u16>(), Ok(42));
}

#[test]
fn integer_from_garbage() {
    assert!(matches!(
        Value::new("flibble").parse::<i32>(),
        Err(Error::InvalidValue { .. })
    ));
    assert!(matches!(
        Value::new("42abc").parse::<i32>(),
        Err(Error::InvalidValue { .. })
    ));
}

#[test]
fn float_is_not_an_integer() {
    let err = Value::new("3.1415").parse::<i32>().unwrap_err();

    assert_eq!(
        err,
        Error::InvalidValue {
            text: "3.1415".to_string(),
            expected: "i32",
            usage: None,
        }
    );
}

#[test]
fn float() {
    let value: f64 = Value::new("3.1415").parse().unwrap();
    assert!((value - 3.1415).abs() < f64::EPSILON);

    let value: f32 = Value::new(" 2.5 ").parse().unwrap();
    assert!((value - 2.5).abs() < f32::EPSILON);
}

#[test]
fn string_is_verbatim() {
    assert_eq!(Value::new("hello world").string(), Ok("hello world".to_string()));
    assert_eq!(Value::new("  padded ").string(), Ok("  padded ".to_string()));
    assert_eq!(Value::from("x=y+z").parse::<String>(), Ok("x=y+z".to_string()));
}

#[test]
fn other_types() {
    assert_eq!(Value::new("true").parse::<bool>(), Ok(true));
    assert_eq!(Value::new("x").parse::<char>(), Ok('x'));
    assert_eq!(
        Value::new("/tmp/file.txt").parse::<PathBuf>(),
        Ok(PathBuf::from("/tmp/file.txt"))
    );
    assert!(Value::new("yes").parse::<bool>().is_err());
}

#[test]
fn short_type_names() {
    assert_eq!(
        Value::absent().string().unwrap_err().to_string(),
        "Missing argument, expected type String"
    );
    assert_eq!(
        Value::new("").parse::<PathBuf>().unwrap_err().to_string(),
        "Missing argument, expected type PathBuf"
    );
}

#[test]
fn absent_value() {
    let value = Value::absent();

    assert!(!value.is_present());
    assert_eq!(
        value.parse::<u32>(),
        Err(Error::MissingValue {
            expected: "u32",
            usage: None,
        })
    );
}

#[test]
fn rendered_values() {
    assert_eq!(Value::render(&42).parse::<i64>(), Ok(42));
    assert_eq!(Value::render(&1.5).parse::<f32>(), Ok(1.5));
    assert_eq!(Value::render("text").raw(), Some("text"));
    assert_eq!(Value::render(&'c').parse::<String>(), Ok("c".to_string()));
}

#[test]
fn conversions() {
    assert_eq!(Value::from("a"), Value::new("a"));
    assert_eq!(Value::from(String::from("a")), Value::new("a"));
    assert_eq!(Value::from(None::<&str>), Value::absent());
    assert_eq!(Value::from(Some(String::from("a"))), Value::new("a"));
    assert_eq!(Value::default(), Value::absent());
}

#[test]
fn parse_or_panic() {
    assert_eq!(Value::new("9").parse_or_panic::<u8>(), 9);
}

#[test]
#[should_panic(expected = "Invalid argument: expected type u8 but got '300'")]
fn parse_or_panic_on_overflow() {
    let _ = Value::new("300").parse_or_panic::<u8>();
}
