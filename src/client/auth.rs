//! Request credentials.

use std::collections::HashMap;
use std::fmt;

/// Key read from a raw credential mapping for the login name.
pub const USERNAME_KEY: &str = "username";
/// Key read from a raw credential mapping for the password.
pub const PASSWORD_KEY: &str = "password";

/// HTTP basic-auth credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keep passwords out of logs.
impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Credentials accepted by every backend method.
///
/// Either a ready-made [`BasicAuth`], or a raw mapping carrying
/// `username` / `password` keys. Both are turned into the same
/// [`BasicAuth`] by [`normalize`](Self::normalize) before the transport
/// sees them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    /// No authentication.
    #[default]
    None,
    /// Pre-built credential object.
    Basic(BasicAuth),
    /// Raw mapping; missing keys default to empty strings.
    Raw(HashMap<String, String>),
}

impl Credentials {
    /// Builds a raw credential mapping from a username and password.
    #[must_use]
    pub fn raw(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Raw(HashMap::from([
            (USERNAME_KEY.to_string(), username.into()),
            (PASSWORD_KEY.to_string(), password.into()),
        ]))
    }

    /// Resolves these credentials to what the transport should send.
    #[must_use]
    pub fn normalize(&self) -> Option<BasicAuth> {
        match self {
            Self::None => None,
            Self::Basic(auth) => Some(auth.clone()),
            Self::Raw(map) => {
                let field = |key: &str| map.get(key).cloned().unwrap_or_default();
                Some(BasicAuth::new(field(USERNAME_KEY), field(PASSWORD_KEY)))
            }
        }
    }
}

impl From<BasicAuth> for Credentials {
    fn from(auth: BasicAuth) -> Self {
        Self::Basic(auth)
    }
}

impl From<HashMap<String, String>> for Credentials {
    fn from(map: HashMap<String, String>) -> Self {
        Self::Raw(map)
    }
}

impl From<Option<BasicAuth>> for Credentials {
    fn from(auth: Option<BasicAuth>) -> Self {
        auth.map_or(Self::None, Self::Basic)
    }
}
