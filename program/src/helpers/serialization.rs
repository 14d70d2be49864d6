use pinocchio::program_error::ProgramError;

/// Cursor over an instruction payload in Borsh layout
/// (little-endian integers, `u32` length-prefixed strings).
pub struct PayloadReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> PayloadReader<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], ProgramError> {
        let end = self
            .offset
            .checked_add(len)
            .ok_or(ProgramError::InvalidInstructionData)?;
        let bytes = self
            .data
            .get(self.offset..end)
            .ok_or(ProgramError::InvalidInstructionData)?;
        self.offset = end;
        Ok(bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, ProgramError> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(buf))
    }

    pub fn read_u64(&mut self) -> Result<u64, ProgramError> {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(buf))
    }

    /// Raw bytes of a length-prefixed string; UTF-8 is checked by the caller.
    pub fn read_str_bytes(&mut self) -> Result<&'a [u8], ProgramError> {
        let len = self.read_u32()? as usize;
        self.take(len)
    }

    /// Trailing bytes are rejected.
    pub fn finish(self) -> Result<(), ProgramError> {
        if self.offset != self.data.len() {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(())
    }
}
