/// Source of the "current page" URL stamped on every record. Read once per
/// report, at call time.
pub trait Location: Send + Sync {
    fn current_url(&self) -> String;
}

/// A location that never changes.
#[derive(Debug, Clone)]
pub struct StaticLocation(pub String);

impl Location for StaticLocation {
    fn current_url(&self) -> String {
        self.0.clone()
    }
}

impl<F> Location for F
where
    F: Fn() -> String + Send + Sync,
{
    fn current_url(&self) -> String {
        self()
    }
}
