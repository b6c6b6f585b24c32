/// Logging port used by every use case.
///
/// Adapters decide where messages go; business code only picks the level.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
