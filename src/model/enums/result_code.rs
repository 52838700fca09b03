use enum_primitive_derive::Primitive;
use num_traits::FromPrimitive;
use std::fmt;

/// The subset of Steam's `EResult` the web API hands back for stats requests.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Primitive)]
pub enum KnownResultCode {
    Invalid = 0,
    OK = 1,
    Fail = 2,
    NoConnection = 3,
    InvalidPassword = 5,
    LoggedInElsewhere = 6,
    InvalidProtocolVer = 7,
    InvalidParam = 8,
    FileNotFound = 9,
    Busy = 10,
    InvalidState = 11,
    InvalidName = 12,
    AccessDenied = 15,
    Timeout = 16,
    Banned = 17,
    AccountNotFound = 18,
    InvalidSteamID = 19,
    ServiceUnavailable = 20,
    NotLoggedOn = 21,
    Pending = 22,
    LimitExceeded = 25,
    Revoked = 26,
    Expired = 27,
    RateLimitExceeded = 84,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ResultCode {
    Known(KnownResultCode),
    Unknown(i32),
}

impl ResultCode {
    pub fn from_raw(raw: i32) -> Self {
        KnownResultCode::from_i32(raw)
            .map(ResultCode::Known)
            .unwrap_or(ResultCode::Unknown(raw))
    }

    pub fn is_ok(self) -> bool {
        self == ResultCode::Known(KnownResultCode::OK)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ResultCode::Known(code) => write!(f, "{:?}", code),
            ResultCode::Unknown(raw) => write!(f, "Unknown({})", raw),
        }
    }
}
