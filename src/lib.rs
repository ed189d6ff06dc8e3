#![warn(clippy::pedantic)]
#![warn(clippy::complexity)]
//! Optscan - a small option scanner
//!
//! Walks the command line once and reports every option it finds,
//! in order, together with the text that follows it. Whether that
//! text is actually a value is up to the caller: it is only parsed
//! when read through [`Occurrence::value`].
//!
//! ```
//! use optscan::{Opt, Parser};
//!
//! let args = Parser::from([
//!     Opt::new('v', "verbose", "print more"),
//!     Opt::new('n', "count", "how many times"),
//! ]);
//!
//! let found = args.parse(["prog", "-v", "--count=3"]);
//!
//! assert!(found[0].is('v', "verbose"));
//! assert_eq!(found[1].value::<u32>().unwrap(), 3);
//! ```
//!
//! Unknown options are reported too, see [`Occurrence::known`].

mod value;

pub use value::Value;

use std::{
    env,
    ffi::OsString,
    fmt::{self, Display},
};

use log::{debug, trace};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// An option the parser knows about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Opt {
    /// The single character form, as in `-v`.
    pub short: Option<char>,

    /// The named form without dashes, as in `verbose`.
    /// Empty if there is none.
    pub long: String,

    pub help: String,
}

impl Opt {
    pub fn new<L, H>(short: char, long: L, help: H) -> Self
    where
        L: Into<String>,
        H: Into<String>,
    {
        Self {
            short: Some(short),
            long: long.into(),
            help: help.into(),
        }
    }

    /// An option with only a `-s` form.
    pub fn short<H>(short: char, help: H) -> Self
    where
        H: Into<String>,
    {
        Self {
            short: Some(short),
            long: String::new(),
            help: help.into(),
        }
    }

    /// An option with only a `--long` form.
    pub fn long<L, H>(long: L, help: H) -> Self
    where
        L: Into<String>,
        H: Into<String>,
    {
        Self {
            short: None,
            long: long.into(),
            help: help.into(),
        }
    }

    /// Renders the option as typed on the command line,
    /// e.g. `-v, --verbose`.
    #[must_use]
    pub fn usage(&self) -> String {
        usage(self.short, &self.long)
    }
}

/// The help line: `-v, --verbose\t\tprint more`.
impl Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t\t{}", self.usage(), self.help)
    }
}

/// One appearance of an option in the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub short: Option<char>,
    pub long: String,

    /// Empty for unknown options.
    pub help: String,

    /// Position in the argument list, the program name being `0`.
    pub index: usize,

    /// Whatever followed the option: the part after `=`,
    /// or else the next argument.
    pub arg: Value,

    /// Whether the option was found in the parser's table.
    pub known: bool,
}

impl Occurrence {
    fn matched(opt: &Opt, index: usize, arg: Value) -> Self {
        Self {
            short: opt.short,
            long: opt.long.clone(),
            help: opt.help.clone(),
            index,
            arg,
            known: true,
        }
    }

    fn unknown(short: Option<char>, long: &str, index: usize, arg: Value) -> Self {
        Self {
            short,
            long: long.to_string(),
            help: String::new(),
            index,
            arg,
            known: false,
        }
    }

    /// See [`Opt::usage`].
    #[must_use]
    pub fn usage(&self) -> String {
        usage(self.short, &self.long)
    }

    /// Checks whether this is `-short` or `--long`.
    /// An empty `long` never matches.
    #[must_use]
    pub fn is(&self, short: char, long: &str) -> bool {
        self.short == Some(short) || (!long.is_empty() && self.long == long)
    }

    /// Converts the trailing text to `T`.
    ///
    /// # Errors
    ///
    /// Same as [`Value::parse_for`], with this option's usage line.
    pub fn value<T>(&self) -> Result<T>
    where
        T: std::str::FromStr,
    {
        self.arg.parse_for(&self.usage())
    }

    /// The trailing text, verbatim.
    ///
    /// # Errors
    ///
    /// [`Error::MissingValue`] when nothing followed the option.
    pub fn string(&self) -> Result<String> {
        self.value()
    }

    /// Builds an error for options the caller does not accept.
    #[must_use]
    pub fn unexpected(&self) -> Error {
        Error::UnexpectedArgument {
            usage: self.usage(),
        }
    }
}

/// The table of known options, matched in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parser {
    options: Vec<Opt>,
}

impl Parser {
    /// A parser that knows nothing. Every option
    /// it finds is reported as unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an option.
    ///
    /// Pass `None` for no short form and an empty string
    /// for no long form.
    pub fn add<S, L, H>(&mut self, short: S, long: L, help: H) -> &mut Self
    where
        S: Into<Option<char>>,
        L: Into<String>,
        H: Into<String>,
    {
        self.options.push(Opt {
            short: short.into(),
            long: long.into(),
            help: help.into(),
        });

        self
    }

    #[must_use]
    pub fn options(&self) -> &[Opt] {
        &self.options
    }

    /// Lists the known options, one help line each.
    #[must_use]
    pub fn help(&self) -> String {
        self.options
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Scans the arguments of the current process.
    ///
    /// Arguments that are not valid UTF-8 are decoded lossily.
    #[must_use]
    pub fn parse_env(&self) -> Vec<Occurrence> {
        self.parse(env::args_os().map(decode))
    }

    /// Scans `args`, skipping the first item (the program name).
    ///
    /// - Arguments not starting with `-`, a lonely `-`
    ///   and negative numbers such as `-3` are skipped.
    /// - A lonely `--` stops the scan.
    /// - `--name` and `--name=value` are long options.
    /// - `-abc` is three short options; `-abc=value` gives
    ///   `value` to all three.
    ///
    /// Unless a value was given with `=`, each option takes the next
    /// argument as its value, whatever it looks like. That argument
    /// is still scanned on its own afterwards.
    #[must_use]
    pub fn parse<I>(&self, args: I) -> Vec<Occurrence>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut found = Vec::new();
        let mut args = args.into_iter().enumerate().skip(1).peekable();

        while let Some((index, arg)) = args.next() {
            let arg = arg.as_ref();

            let Some(rest) = arg.strip_prefix('-') else {
                trace!("{index}: skipping {arg:?}");
                continue;
            };

            // lonely `-`, usually stdin
            if rest.is_empty() {
                trace!("{index}: skipping lonely `-`");
                continue;
            }

            if rest.starts_with(|c: char| c.is_ascii_digit()) {
                trace!("{index}: skipping negative number {arg:?}");
                continue;
            }

            let next = args.peek().map(|(_, next)| next.as_ref());

            // Long option (`--`)
            if let Some(name) = rest.strip_prefix('-') {
                if name.is_empty() {
                    debug!("{index}: end of options");
                    break;
                }

                let (name, inline) = split_value(name);
                let arg = Value::from(inline.or(next));

                let occurrence = match self.find_long(name) {
                    Some(opt) => Occurrence::matched(opt, index, arg),
                    None => Occurrence::unknown(None, name, index, arg),
                };

                trace!("{index}: long option {:?}", occurrence.usage());
                found.push(occurrence);

            // Short options, possibly combined.
            } else {
                let (cluster, inline) = split_value(rest);
                let value = inline.or(next);

                for short in cluster.chars() {
                    let arg = Value::from(value);

                    let occurrence = match self.find_short(short) {
                        Some(opt) => Occurrence::matched(opt, index, arg),
                        None => Occurrence::unknown(Some(short), "", index, arg),
                    };

                    trace!("{index}: short option {:?}", occurrence.usage());
                    found.push(occurrence);
                }
            }
        }

        found
    }

    fn find_long(&self, name: &str) -> Option<&Opt> {
        self.options
            .iter()
            .find(|opt| !opt.long.is_empty() && opt.long == name)
    }

    fn find_short(&self, short: char) -> Option<&Opt> {
        self.options.iter().find(|opt| opt.short == Some(short))
    }
}

impl FromIterator<Opt> for Parser {
    fn from_iter<T: IntoIterator<Item = Opt>>(iter: T) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[Opt; N]> for Parser {
    fn from(options: [Opt; N]) -> Self {
        options.into_iter().collect()
    }
}

impl Extend<Opt> for Parser {
    fn extend<T: IntoIterator<Item = Opt>>(&mut self, iter: T) {
        self.options.extend(iter);
    }
}

/// Error type describing the ways
/// reading an option can fail.
///
/// Scanning itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A value was requested but nothing followed the option.
    #[error("Missing argument, expected type {expected}{}", usage_line(.usage.as_deref()))]
    MissingValue {
        expected: &'static str,
        usage: Option<String>,
    },

    /// The text did not parse as the requested type.
    #[error(
        "Invalid argument: expected type {expected} but got '{text}'{}",
        usage_line(.usage.as_deref())
    )]
    InvalidValue {
        text: String,
        expected: &'static str,
        usage: Option<String>,
    },

    /// This error is not produced by the parser,
    /// it lets callers reject options they do not handle.
    #[error("unexpected argument: {usage}")]
    UnexpectedArgument { usage: String },
}

fn usage_line(usage: Option<&str>) -> String {
    match usage {
        Some(usage) => format!("\nusage: {usage}\n"),
        None => String::new(),
    }
}

fn usage(short: Option<char>, long: &str) -> String {
    match (short, long) {
        (Some(short), "") => format!("-{short}"),
        (Some(short), long) => format!("-{short}, --{long}"),
        // `--=value`
        (None, "") => "--".to_string(),
        (None, long) => format!("--{long}"),
    }
}

fn decode(arg: OsString) -> String {
    match arg.into_string() {
        Ok(arg) => arg,
        Err(arg) => {
            debug!("decoding non UTF-8 argument {arg:?} lossily");

            arg.to_string_lossy().into_owned()
        }
    }
}

// Splits an option like
// `option=value`
// into ("option", Some("value"))
//
// without an `=` the 2nd field of the tuple is `None`
fn split_value(src: &str) -> (&str, Option<&str>) {
    match src.split_once('=') {
        None => (src, None),
        Some((left, right)) => (left, Some(right)),
    }
}
