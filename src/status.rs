use core::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// SMTP reply codes used by the dispatcher and its collaborators.
#[repr(C, u16)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Debug, Serialize, Deserialize)]
pub enum Status {
    ServiceReady = 220,
    GoodBye = 221,
    Ok = 250,
    CannotVerify = 252,
    StartMailInput = 354,
    Unavailable = 421,
    CommandUnrecognized = 500,
    NotImplemented = 502,
    InvalidCommandSequence = 503,
    Error = 550,
    ExceededStorage = 552,
    Unknown(u16),
}

impl Status {
    /// Checks if the status is a permanent rejection
    #[must_use]
    pub fn is_permanent(self) -> bool {
        u16::from(self) >= 500
    }

    /// Checks if the status is a temporary rejection
    #[must_use]
    pub fn is_temporary(self) -> bool {
        u16::from(self) >= 400 && u16::from(self) < 500
    }
}

impl From<u16> for Status {
    fn from(value: u16) -> Self {
        match value {
            220 => Self::ServiceReady,
            221 => Self::GoodBye,
            250 => Self::Ok,
            252 => Self::CannotVerify,
            354 => Self::StartMailInput,
            421 => Self::Unavailable,
            500 => Self::CommandUnrecognized,
            502 => Self::NotImplemented,
            503 => Self::InvalidCommandSequence,
            550 => Self::Error,
            552 => Self::ExceededStorage,
            _ => Self::Unknown(value),
        }
    }
}

impl From<Status> for u16 {
    fn from(value: Status) -> Self {
        match value {
            Status::ServiceReady => 220,
            Status::GoodBye => 221,
            Status::Ok => 250,
            Status::CannotVerify => 252,
            Status::StartMailInput => 354,
            Status::Unavailable => 421,
            Status::CommandUnrecognized => 500,
            Status::NotImplemented => 502,
            Status::InvalidCommandSequence => 503,
            Status::Error => 550,
            Status::ExceededStorage => 552,
            Status::Unknown(v) => v,
        }
    }
}

impl Display for Status {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(fmt, "{}", u16::from(*self))
    }
}

#[cfg(test)]
mod test {
    use super::Status;

    #[test]
    fn status() {
        assert!(Status::CommandUnrecognized.is_permanent());
        assert!(!Status::CommandUnrecognized.is_temporary());

        assert!(Status::Unavailable.is_temporary());
        assert!(!Status::Unavailable.is_permanent());

        assert!(!Status::Ok.is_permanent());
        assert!(!Status::Ok.is_temporary());

        assert_eq!(Status::from(502), Status::NotImplemented);
        assert_eq!(u16::from(Status::NotImplemented), 502);

        assert_eq!(Status::from(599), Status::Unknown(599));
        assert_eq!(u16::from(Status::Unknown(599)), 599);
    }

    #[test]
    fn display_is_numeric() {
        assert_eq!(Status::Ok.to_string(), "250");
        assert_eq!(Status::StartMailInput.to_string(), "354");
        assert_eq!(Status::Unknown(251).to_string(), "251");
    }
}
