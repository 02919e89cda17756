/// Decides whether a submitted username/password pair may log in.
pub trait CredentialStore: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single fixed credential pair, compared by exact string equality.
#[derive(Clone, Debug)]
pub struct StaticCredentialStore {
    username: String,
    password: String,
}

impl StaticCredentialStore {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentialStore {
    fn default() -> Self {
        Self::new("admin", "123")
    }
}

impl CredentialStore for StaticCredentialStore {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
