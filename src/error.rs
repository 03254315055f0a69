use crate::mach::Address;
use std::borrow::Cow;
use std::path::Path;

pub struct Error {
    code: ErrorCode,
    address: Option<Address>,
    message: Cow<'static, str>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::Error::new($crate::ErrorCode::$err)
    };
    ($err:ident, $at:expr) => {
        $crate::Error::new($crate::ErrorCode::$err).at_address($at)
    };
    ($err:ident; $msg:expr) => {
        $crate::Error::new($crate::ErrorCode::$err).message($msg)
    };
    ($err:ident, $at:expr; $msg:expr) => {
        $crate::Error::new($crate::ErrorCode::$err)
            .at_address($at)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            address: None,
            message: Cow::Borrowed(""),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn at_address(self, address: Address) -> Error {
        debug_assert!(self.address.is_none());
        Error {
            address: Some(address),
            ..self
        }
    }

    pub fn in_file(self, path: &Path) -> Error {
        let message = if self.message.is_empty() {
            path.display().to_string()
        } else {
            format!("{}: {}", path.display(), self.message)
        };
        Error {
            message: message.into(),
            ..self
        }
    }

    pub fn message<M: Into<Cow<'static, str>>>(self, message: M) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    TruncatedImage,
    UnsupportedRecord,
    InconsistentLayout,
    FileNotFound,
    IoError,
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        match error.kind() {
            std::io::ErrorKind::NotFound => error!(FileNotFound; error.to_string()),
            _ => error!(IoError; error.to_string()),
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::TruncatedImage => "TRUNCATED IMAGE",
            ErrorCode::UnsupportedRecord => "UNSUPPORTED RECORD",
            ErrorCode::InconsistentLayout => "INCONSISTENT LAYOUT",
            ErrorCode::FileNotFound => "FILE NOT FOUND",
            ErrorCode::IoError => "I/O ERROR",
        };
        write!(f, "{}", code_str)?;
        if let Some(address) = self.address {
            write!(f, " AT ${:04X}", address)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
