use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Database {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        code: &'static str,
        message: String,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        code: &'static str,
        message: String,
    },
}

impl CommandError {
    // the catalog failure name carried back to the caller
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::Database { .. } => "Database",
            CommandError::DuplicateKey { code, .. } => *code,
            CommandError::NotFound { .. } => "NotFound",
            CommandError::Runtime { .. } => "Runtime",
            CommandError::Serialization { .. } => "Serialization",
            CommandError::Validation { code, .. } => *code,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CommandError::Database { message, reason_code } |
            CommandError::Runtime { message, reason_code } => {
                match reason_code {
                    Some(reason) => format!("{} ({})", message, reason),
                    None => message.to_string(),
                }
            }
            CommandError::DuplicateKey { message, .. } |
            CommandError::NotFound { message } |
            CommandError::Serialization { message } |
            CommandError::Validation { message, .. } => message.to_string(),
        }
    }
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let code = other.code();
        if other.is_duplicate() {
            return CommandError::DuplicateKey { code, message: other.to_string() };
        }
        if other.is_validation() {
            return CommandError::Validation { code, message: other.to_string() };
        }
        match other {
            LibraryError::Database { message, reason_code } => {
                CommandError::Database { message, reason_code }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            other => {
                CommandError::Runtime { message: other.to_string(), reason_code: Some(code.to_string()) }
            }
        }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::Serialization { message: format!("{}", err) }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_keep_catalog_codes() {
        let err = CommandError::from(LibraryError::duplicate_isbn("isbn taken"));
        assert!(matches!(err, CommandError::DuplicateKey { .. }));
        assert_eq!("DuplicateIsbn", err.code());
        assert_eq!("isbn taken", err.message().as_str());

        let err = CommandError::from(LibraryError::insufficient_stock("not enough", 2, 5));
        assert!(matches!(err, CommandError::Validation { .. }));
        assert_eq!("InsufficientStock", err.code());
        assert_eq!("not enough (available 2, requested 5)", err.message().as_str());
    }

    #[test]
    fn test_should_map_infrastructure_errors() {
        assert_eq!("NotFound", CommandError::from(LibraryError::not_found("x")).code());
        let err = CommandError::from(LibraryError::database("write failed", Some("PermissionDenied".to_string())));
        assert_eq!("Database", err.code());
        assert_eq!("write failed (PermissionDenied)", err.message().as_str());
        assert_eq!("Serialization", CommandError::from(LibraryError::serialization("bad")).code());
    }
}
