//! Filter pattern and match expression value objects

/// One line of the exclusion file, in rsync filter syntax
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterPattern(String);

impl FilterPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FilterPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Regular expression passed to `fswatch --exclude`
///
/// Anchored to the absolute path of the watched directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchExpression(String);

impl MatchExpression {
    pub(crate) fn new(expression: String) -> Self {
        Self(expression)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `--exclude=` argument for the watcher
    pub fn to_exclude_arg(&self) -> String {
        format!("--exclude={}", self.0)
    }
}

impl std::fmt::Display for MatchExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MatchExpression {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
