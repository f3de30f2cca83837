use std::{error::Error, fmt, path::{Path, PathBuf}};

#[derive(Debug, Clone)]
pub struct ImgAuditError {
    details: String,
    path: PathBuf,
}

impl ImgAuditError {
    pub fn new(msg: &str, path: &Path) -> ImgAuditError {
        ImgAuditError { details: msg.to_string(), path: path.to_path_buf() }
    }
}

impl fmt::Display for ImgAuditError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.details, self.path.display())
    }
}

impl Error for ImgAuditError {
    fn description(&self) -> &str {
        &self.details
    }
}
