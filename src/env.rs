use indexmap::IndexMap;

/// A read-only snapshot of the process environment.
///
/// Captured once at startup so every lookup observes the same values.
/// Lookups never fail: absent keys yield a caller-supplied default, which
/// lets log lines explain how to set the variable instead of erroring.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: IndexMap<String, String>,
}

impl EnvSnapshot {
    /// Snapshot the current process environment.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Raw lookup without a fallback.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Lookup with a fallback default for absent variables.
    pub fn get(&self, name: &str, default: &str) -> String {
        self.lookup(name).unwrap_or(default).to_owned()
    }
}

impl FromIterator<(String, String)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}
