//! Error handling and reporting for this backend

use dockbar_core::errors::DockError;
use thiserror::Error;
use x11rb::errors::{ConnectionError, ReplyError, ReplyOrIdError};
use x11rb::protocol::ErrorKind;

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("Connection error occured: {0}")]
    Connection(#[from] ConnectionError),

    #[error("Unable to parse reply: {0}")]
    Reply(#[from] ReplyError),

    #[error("Unable to parse reply: {0}")]
    ReplyOrId(#[from] ReplyOrIdError),

    #[error("Window name is not valid UTF-8: {0}")]
    NameEncoding(#[from] std::string::FromUtf8Error),
}

impl From<Error> for DockError {
    fn from(err: Error) -> Self {
        match err {
            // A BadWindow reply means the window vanished between the
            // client-list read and the query; the core recovers from that.
            Error::Reply(ReplyError::X11Error(ref x11_err))
                if x11_err.error_kind == ErrorKind::Window =>
            {
                Self::StaleWindow(err.to_string())
            }
            _ => Self::Backend(err.to_string()),
        }
    }
}
