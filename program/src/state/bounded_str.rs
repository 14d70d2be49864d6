use core::fmt;

use crate::error::RealEstateError;

/// Fixed-capacity UTF-8 string slot: one length byte followed by `N` bytes.
///
/// Alignment is 1 so the slot can live inside zero-copy account data.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BoundedStr<const N: usize> {
    len: u8,
    bytes: [u8; N],
}

impl<const N: usize> BoundedStr<N> {
    pub const fn empty() -> Self {
        Self { len: 0, bytes: [0; N] }
    }

    /// Copy `bytes` into a new slot, rejecting oversize or non-UTF-8 input.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, RealEstateError> {
        if bytes.len() > N || bytes.len() > u8::MAX as usize {
            return Err(RealEstateError::StringTooLong);
        }
        core::str::from_utf8(bytes).map_err(|_| RealEstateError::InvalidUtf8)?;

        let mut slot = Self::empty();
        slot.bytes[..bytes.len()].copy_from_slice(bytes);
        slot.len = bytes.len() as u8;
        Ok(slot)
    }

    #[inline]
    pub fn new(s: &str) -> Result<Self, RealEstateError> {
        Self::from_utf8(s.as_bytes())
    }

    #[inline]
    pub fn len(&self) -> usize {
        // a corrupted length byte never reads past the slot
        core::cmp::min(self.len as usize, N)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Account data is not trusted, so the UTF-8 check runs on every read.
    pub fn as_str(&self) -> Result<&str, RealEstateError> {
        core::str::from_utf8(self.as_bytes()).map_err(|_| RealEstateError::InvalidUtf8)
    }
}

impl<const N: usize> Default for BoundedStr<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const N: usize> fmt::Debug for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Ok(s) => fmt::Debug::fmt(s, f),
            Err(_) => f.debug_tuple("BoundedStr").field(&self.as_bytes()).finish(),
        }
    }
}
