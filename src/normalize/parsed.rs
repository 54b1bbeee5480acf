//! Structural decomposition of a URL string.
//!
//! The WHATWG parser from the `url` crate decides whether the input is a URL at
//! all and supplies the diagnostic when it is not. The parts themselves are
//! sliced from the raw input so that host casing, port, trailing slashes and
//! escapes survive exactly as supplied; `url::Url` would normalize them away.
//!
//! Input the two readings would disagree on is rejected up front rather than
//! repaired: ASCII control characters anywhere (the WHATWG parser drops tabs
//! and newlines silently), leading or trailing spaces (it trims them), a `\`
//! inside the authority (it reads one as `/` for `http` and `https`), and an
//! empty host.

use std::fmt;

use crate::error_handling::NormalizeError;

/// A URL split into the parts the normalization policies operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    pub userinfo: Option<String>,
    /// Host including the port, if one was given.
    pub host: String,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl ParsedUrl {
    /// Parses `raw` into its parts.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::InvalidUrl` if the input is not a URL, has no
    /// `//` authority component, or contains characters the parts cannot carry
    /// verbatim (see the module docs).
    pub fn parse(raw: &str) -> Result<Self, NormalizeError> {
        check_characters(raw)?;

        url::Url::parse(raw).map_err(|e| NormalizeError::InvalidUrl(e.to_string()))?;

        let (scheme, rest) = raw
            .split_once(':')
            .ok_or_else(|| NormalizeError::InvalidUrl("missing protocol scheme".to_string()))?;
        let rest = rest.strip_prefix("//").ok_or_else(|| {
            NormalizeError::InvalidUrl(format!("missing authority in {raw:?}"))
        })?;

        let (rest, fragment) = match rest.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (rest, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query.to_string())),
            None => (rest, None),
        };

        let (authority, path) = rest.split_at(rest.find('/').unwrap_or(rest.len()));
        if authority.contains('\\') {
            return Err(NormalizeError::InvalidUrl(format!(
                "invalid character '\\' in host of {raw:?}"
            )));
        }
        let (userinfo, host) = match authority.rsplit_once('@') {
            Some((userinfo, host)) => (Some(userinfo.to_string()), host),
            None => (None, authority),
        };
        if host.is_empty() {
            return Err(NormalizeError::InvalidUrl(format!("missing host in {raw:?}")));
        }

        Ok(Self {
            scheme: scheme.to_string(),
            userinfo,
            host: host.to_string(),
            path: path.to_string(),
            query,
            fragment,
        })
    }

    /// Removes the query string, including the `?` separator.
    pub fn drop_query(&mut self) {
        self.query = None;
    }

    /// Removes at most one trailing `/` from the path.
    pub fn strip_trailing_slash(&mut self) {
        if self.path.ends_with('/') {
            self.path.pop();
        }
    }

    /// Replaces host and port, keeping any userinfo.
    pub fn set_host(&mut self, host: &str) {
        self.host = host.to_string();
    }

    pub fn lowercase_path(&mut self) {
        self.path = self.path.to_lowercase();
    }
}

/// Rejects characters that `url::Url` would strip or rewrite before parsing.
///
/// # Errors
///
/// Returns `NormalizeError::InvalidUrl` on any ASCII control character, or on
/// a space at either end of `raw`.
pub fn check_characters(raw: &str) -> Result<(), NormalizeError> {
    if raw.chars().any(|c| c.is_ascii_control()) {
        return Err(NormalizeError::InvalidUrl(format!(
            "invalid control character in {raw:?}"
        )));
    }
    if raw.starts_with(' ') || raw.ends_with(' ') {
        return Err(NormalizeError::InvalidUrl(format!(
            "leading or trailing space in {raw:?}"
        )));
    }
    Ok(())
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.scheme)?;
        if let Some(userinfo) = &self.userinfo {
            write!(f, "{userinfo}@")?;
        }
        f.write_str(&self.host)?;
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}
