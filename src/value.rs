use std::{any::type_name, fmt::Display, str::FromStr};

use crate::{Error, Result};

/// The text found after an option, converted to a concrete
/// type only when somebody asks for it.
///
/// A `Value` is either absent (the option was the last argument)
/// or holds the text that followed it. Conversion goes through
/// [`FromStr`], so a value that is never read can never fail.
///
/// An empty string counts as missing: `--name=` and a trailing
/// `--name` behave the same through the typed accessors.
/// Use [`Value::raw`] if the difference matters.
///
/// Errors name the requested type without its module path
/// (`String`, not `alloc::string::String`). Generic types such
/// as `Vec<String>` keep their full name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Value {
    text: Option<String>,
}

impl Value {
    pub fn new<S>(text: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            text: Some(text.into()),
        }
    }

    /// A value that was never attached to anything.
    #[must_use]
    pub const fn absent() -> Self {
        Self { text: None }
    }

    /// Stores the textual form of any printable value,
    /// so it can later be read back as another type.
    pub fn render<T>(value: &T) -> Self
    where
        T: Display + ?Sized,
    {
        Self::new(value.to_string())
    }

    /// The stored text, untouched. `Some("")` for `--name=`.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.text.as_deref().is_some_and(|text| !text.is_empty())
    }

    /// Converts the value to `T`.
    ///
    /// Leading and trailing whitespace is tolerated, anything else
    /// left over after the parsed value is not.
    ///
    /// # Errors
    ///
    /// [`Error::MissingValue`] when there is no text,
    /// [`Error::InvalidValue`] when the text does not parse as `T`.
    /// Neither error carries a usage line.
    pub fn parse<T>(&self) -> Result<T>
    where
        T: FromStr,
    {
        self.convert(None)
    }

    /// Same as [`Value::parse`], but failures name the option
    /// this value belongs to.
    ///
    /// # Errors
    ///
    /// Same as [`Value::parse`], with `usage` attached.
    pub fn parse_for<T>(&self, usage: &str) -> Result<T>
    where
        T: FromStr,
    {
        self.convert(Some(usage))
    }

    /// The stored text as an owned `String`, verbatim.
    ///
    /// # Errors
    ///
    /// [`Error::MissingValue`] if the text is absent or empty.
    pub fn string(&self) -> Result<String> {
        self.parse()
    }

    /// Converts the value to `T`, panicking on failure.
    ///
    /// # Panics
    ///
    /// When [`Value::parse`] would return an error.
    #[must_use]
    pub fn parse_or_panic<T>(&self) -> T
    where
        T: FromStr,
    {
        match self.parse() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    fn convert<T>(&self, usage: Option<&str>) -> Result<T>
    where
        T: FromStr,
    {
        let expected = expected_name::<T>();

        let text = match self.text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => {
                return Err(Error::MissingValue {
                    expected,
                    usage: usage.map(String::from),
                });
            }
        };

        // The untrimmed attempt keeps `String` conversions verbatim.
        if let Ok(value) = text.parse::<T>() {
            return Ok(value);
        }

        let trimmed = text.trim();
        if trimmed.len() != text.len() {
            if let Ok(value) = trimmed.parse::<T>() {
                return Ok(value);
            }
        }

        Err(Error::InvalidValue {
            text: text.to_string(),
            expected,
            usage: usage.map(String::from),
        })
    }
}

// `alloc::string::String` -> `String`
fn expected_name<T>() -> &'static str {
    let name = type_name::<T>();

    if name.contains('<') {
        return name;
    }

    name.rsplit("::").next().unwrap_or(name)
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<Option<&str>> for Value {
    fn from(text: Option<&str>) -> Self {
        Self {
            text: text.map(String::from),
        }
    }
}

impl From<Option<String>> for Value {
    fn from(text: Option<String>) -> Self {
        Self { text }
    }
}
