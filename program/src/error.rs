use pinocchio::program_error::ProgramError;

/// First custom error code; `RealEstateError` variants count up from here.
pub const ERROR_CODE_OFFSET: u32 = 6000;

// domain errors; standard conditions use ProgramError directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum RealEstateError {
    StringTooLong,
    InvalidUtf8,
    InvalidPropertyAccount,
    SellerMismatch,
    BuyerIsOwner,
    AlreadyInitialized,
}

impl RealEstateError {
    pub const fn code(self) -> u32 {
        ERROR_CODE_OFFSET + self as u32
    }

    /// Reverse of [`RealEstateError::code`], for clients reading `Custom(n)`.
    pub const fn from_code(code: u32) -> Option<Self> {
        match code.checked_sub(ERROR_CODE_OFFSET) {
            Some(0) => Some(Self::StringTooLong),
            Some(1) => Some(Self::InvalidUtf8),
            Some(2) => Some(Self::InvalidPropertyAccount),
            Some(3) => Some(Self::SellerMismatch),
            Some(4) => Some(Self::BuyerIsOwner),
            Some(5) => Some(Self::AlreadyInitialized),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StringTooLong => "string exceeds its slot capacity",
            Self::InvalidUtf8 => "string is not valid utf-8",
            Self::InvalidPropertyAccount => "account does not hold a property",
            Self::SellerMismatch => "seller is not the recorded owner",
            Self::BuyerIsOwner => "buyer already owns the property",
            Self::AlreadyInitialized => "property account already in use",
        }
    }
}

// map internal errors to standard program error
impl From<RealEstateError> for ProgramError {
    fn from(err: RealEstateError) -> Self {
        ProgramError::Custom(err.code())
    }
}
