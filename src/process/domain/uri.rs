//! Parser for the `instantiatesUri` grammar.
//!
//! ```text
//! process-uri  = scheme "://" base "/bpe/Process/" process-name "/" version
//! scheme       = "http" / "https"
//! base         = 1*( any character except line terminators )
//! process-name = 1*( ALPHA / DIGIT / "_" / "-" )
//! version      = number "." number "." number
//! number       = "0" / %x31-39 *DIGIT
//! ```

use super::{ProcessUriError, ProcessVersion};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Path segment separating the base URL from the process name.
pub const PROCESS_PATH_SEGMENT: &str = "/bpe/Process";

const SCHEMES: [&str; 2] = ["http://", "https://"];

/// A parsed `instantiatesUri`.
///
/// # Examples
///
/// ```
/// use taskgate::process::domain::{ProcessUri, ProcessVersion};
///
/// let uri = ProcessUri::parse("http://example.org/bpe/Process/registerPatient/1.0.0")
///     .expect("valid process URI");
/// assert_eq!(uri.process_url(), "http://example.org/bpe/Process/registerPatient");
/// assert_eq!(uri.process_name(), "registerPatient");
/// assert_eq!(uri.version(), ProcessVersion::new(1, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessUri {
    base_url: String,
    process_name: String,
    version: ProcessVersion,
}

impl ProcessUri {
    /// Parses and validates an `instantiatesUri`.
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessUriError`] describing the first grammar rule the
    /// value violates.
    pub fn parse(value: &str) -> Result<Self, ProcessUriError> {
        let scheme_len = SCHEMES
            .iter()
            .find(|scheme| value.starts_with(*scheme))
            .map(|scheme| scheme.len())
            .ok_or_else(|| ProcessUriError::UnsupportedScheme(value.to_owned()))?;

        let missing_path = || ProcessUriError::MissingProcessPath(value.to_owned());
        let (process_url, version) = value.rsplit_once('/').ok_or_else(missing_path)?;
        let (prefix, process_name) = process_url.rsplit_once('/').ok_or_else(missing_path)?;
        let base_url = prefix
            .strip_suffix(PROCESS_PATH_SEGMENT)
            .filter(|base| base.len() >= scheme_len)
            .ok_or_else(missing_path)?;

        let authority = base_url.get(scheme_len..).unwrap_or_default();
        if authority.is_empty() {
            return Err(ProcessUriError::EmptyBase(value.to_owned()));
        }
        if authority.chars().any(is_line_terminator) {
            return Err(missing_path());
        }

        if process_name.is_empty() || !process_name.chars().all(is_process_name_char) {
            return Err(ProcessUriError::InvalidProcessName(process_name.to_owned()));
        }

        Ok(Self {
            base_url: base_url.to_owned(),
            process_name: process_name.to_owned(),
            version: version.parse()?,
        })
    }

    /// Returns the base URL preceding `/bpe/Process`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the process name.
    #[must_use]
    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    /// Returns the process version.
    #[must_use]
    pub const fn version(&self) -> ProcessVersion {
        self.version
    }

    /// Returns the versionless process URL,
    /// `<base>/bpe/Process/<name>`.
    #[must_use]
    pub fn process_url(&self) -> String {
        format!(
            "{}{PROCESS_PATH_SEGMENT}/{}",
            self.base_url, self.process_name
        )
    }
}

impl fmt::Display for ProcessUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.process_url(), self.version)
    }
}

const fn is_process_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

const fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}
