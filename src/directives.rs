//! Directive classification and value validation.
//!
//! Directive names are compared case-insensitively everywhere. The static
//! sets here are stored lower-cased.

use std::fmt;

use crate::error::{Result, SshConfigError};

/// Directives whose values accumulate instead of "first wins".
const PLURAL: &[&str] = &[
    "certificatefile",
    "dynamicforward",
    "identityfile",
    "localforward",
    "remoteforward",
    "sendenv",
    "setenv",
];

/// Directives that only accept `yes` or `no`.
const YES_NO: &[&str] = &[
    "batchmode",
    "canonicalizefallbacklocal",
    "challengeresponseauthentication",
    "checkhostip",
    "clearallforwardings",
    "compression",
    "enablesshkeysign",
    "exitonforwardfailure",
    "forwardagent",
    "forwardx11",
    "forwardx11trusted",
    "gatewayports",
    "gssapiauthentication",
    "gssapidelegatecredentials",
    "hostbasedauthentication",
    "identitiesonly",
    "kbdinteractiveauthentication",
    "nohostauthenticationforlocalhost",
    "passwordauthentication",
    "permitlocalcommand",
    "pubkeyauthentication",
    "rhostsrsaauthentication",
    "rsaauthentication",
    "streamlocalbindunlink",
    "tcpkeepalive",
    "usekeychain",
    "useprivilegedport",
    "visualhostkey",
];

/// Directives that only accept an unsigned integer.
const UNSIGNED: &[&str] = &[
    "canonicalizemaxdots",
    "compressionlevel",
    "connectionattempts",
    "connecttimeout",
    "numberofpasswordprompts",
    "port",
    "serveralivecountmax",
    "serveraliveinterval",
];

fn contains(set: &[&str], key: &str) -> bool {
    set.iter().any(|d| d.eq_ignore_ascii_case(key))
}

/// Returns `true` if values for `key` accumulate across matches.
#[must_use]
pub fn is_plural(key: &str) -> bool {
    contains(PLURAL, key)
}

/// Returns `true` if `key` only accepts `yes` or `no`.
#[must_use]
pub fn is_yes_no(key: &str) -> bool {
    contains(YES_NO, key)
}

/// Returns `true` if `key` only accepts an unsigned integer.
#[must_use]
pub fn is_unsigned(key: &str) -> bool {
    contains(UNSIGNED, key)
}

/// Checks a single directive value against the yes/no and integer sets.
///
/// Directives outside both sets are always accepted.
///
/// # Errors
///
/// Returns [`SshConfigError::MustBeYesOrNo`] or [`SshConfigError::MustBeUInt`].
pub fn validate(key: &str, value: &str) -> Result<()> {
    if is_yes_no(key) && value != "yes" && value != "no" {
        return Err(SshConfigError::MustBeYesOrNo {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    if is_unsigned(key) && value.parse::<u64>().is_err() {
        return Err(SshConfigError::MustBeUInt {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// A value to store on a directive.
///
/// Flags render as `yes`/`no`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveValue {
    /// Free-form text, stored as given
    Text(String),
    /// Boolean directive
    Flag(bool),
    /// Unsigned number
    Number(u64),
}

impl fmt::Display for DirectiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Flag(true) => f.write_str("yes"),
            Self::Flag(false) => f.write_str("no"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for DirectiveValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DirectiveValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for DirectiveValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<u16> for DirectiveValue {
    fn from(value: u16) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for DirectiveValue {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for DirectiveValue {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}
