use pinocchio::program_error::ProgramError;

use crate::{helpers::PayloadReader, state::BoundedStr};

pub const ADDRESS_MAX: usize = 64;
pub const CITY_MAX: usize = 32;
pub const VIEW_MAX: usize = 64;
pub const IMAGE_URL_MAX: usize = 200;

/// Listing details stored inside a [`crate::state::Property`] account.
///
/// Numbers are kept as little-endian byte arrays (like every other field here)
/// so the struct has alignment 1 and can be read straight out of account data.
#[repr(C)]
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub struct PropertyData {
    pub address: BoundedStr<ADDRESS_MAX>,
    pub rooms: [u8; 8],
    pub bathrooms: [u8; 8],
    pub kitchens: [u8; 8],
    /// Asking price in lamports
    pub price: [u8; 8],
    pub city: BoundedStr<CITY_MAX>,
    pub north_view: BoundedStr<VIEW_MAX>,
    pub south_view: BoundedStr<VIEW_MAX>,
    pub east_view: BoundedStr<VIEW_MAX>,
    pub west_view: BoundedStr<VIEW_MAX>,
    pub image_url: BoundedStr<IMAGE_URL_MAX>,
}

impl PropertyData {
    pub const fn size() -> usize {
        core::mem::size_of::<PropertyData>()
    }

    /// Decode the `CreateProperty` payload: fields in declaration order,
    /// integers as `u64` LE, strings as `u32` LE length + UTF-8 bytes.
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let mut reader = PayloadReader::new(data);

        let address = BoundedStr::from_utf8(reader.read_str_bytes()?)?;
        let rooms = reader.read_u64()?;
        let bathrooms = reader.read_u64()?;
        let kitchens = reader.read_u64()?;
        let price = reader.read_u64()?;
        let city = BoundedStr::from_utf8(reader.read_str_bytes()?)?;
        let north_view = BoundedStr::from_utf8(reader.read_str_bytes()?)?;
        let south_view = BoundedStr::from_utf8(reader.read_str_bytes()?)?;
        let east_view = BoundedStr::from_utf8(reader.read_str_bytes()?)?;
        let west_view = BoundedStr::from_utf8(reader.read_str_bytes()?)?;
        let image_url = BoundedStr::from_utf8(reader.read_str_bytes()?)?;
        reader.finish()?;

        Ok(Self {
            address,
            rooms: rooms.to_le_bytes(),
            bathrooms: bathrooms.to_le_bytes(),
            kitchens: kitchens.to_le_bytes(),
            price: price.to_le_bytes(),
            city,
            north_view,
            south_view,
            east_view,
            west_view,
            image_url,
        })
    }

    #[inline]
    pub fn rooms(&self) -> u64 {
        u64::from_le_bytes(self.rooms)
    }

    #[inline]
    pub fn bathrooms(&self) -> u64 {
        u64::from_le_bytes(self.bathrooms)
    }

    #[inline]
    pub fn kitchens(&self) -> u64 {
        u64::from_le_bytes(self.kitchens)
    }

    #[inline]
    pub fn price(&self) -> u64 {
        u64::from_le_bytes(self.price)
    }
}
