/// RestoreRequest - request DTO for the restore-all use case
#[derive(Debug, Clone)]
pub struct RestoreRequest {
    /// Shell command run while the restore Podfile is in place
    pub build_command: String,
}

impl RestoreRequest {
    pub fn new(build_command: impl Into<String>) -> Self {
        Self {
            build_command: build_command.into(),
        }
    }
}
