//! Argument vector — append-only list of owned strings.

use std::fmt;

/// Ordered, append-only list of owned argument strings.
///
/// Used for both the merged raw-argument list and the pass-through list
/// handed to the mount runtime. There is no way to remove or reorder
/// entries once appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgVec {
    args: Vec<String>,
}

impl ArgVec {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Copy `value` into a new slot at the end.
    pub fn append(&mut self, value: impl Into<String>) {
        self.args.push(value.into());
    }

    /// Append every item of `values`, in order.
    pub fn extend<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(values.into_iter().map(Into::into));
    }

    /// Read-only view of the current contents.
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }

    /// Consume the vector, returning the underlying list.
    pub fn into_vec(self) -> Vec<String> {
        self.args
    }
}

impl<S: Into<String>> FromIterator<S> for ArgVec {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut argv = ArgVec::new();
        argv.extend(iter);
        argv
    }
}

impl fmt::Display for ArgVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}
