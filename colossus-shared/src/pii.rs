use std::fmt;

/// Wraps a passenger name so log lines only show its initial.
/// The mask applies to `Debug` and `Display`, which is what `tracing` fields
/// go through.
#[derive(Clone)]
pub struct Masked<T>(pub T);

impl<T: AsRef<str>> Masked<T> {
    fn write_masked(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_ref().chars().next() {
            Some(initial) => write!(f, "{}***", initial),
            None => f.write_str("***"),
        }
    }
}

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_masked(f)
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_masked(f)
    }
}
