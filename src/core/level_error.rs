#[derive(Debug)]
pub enum LevelError {
    InvalidConfiguration(String),
    ConfigImport(String),
}

impl From<&str> for LevelError {
    fn from(error: &str) -> Self {
        LevelError::InvalidConfiguration(error.to_string())
    }
}
