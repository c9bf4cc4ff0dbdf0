use super::{FLAG_AUX, FLAG_DST, MESSAGE_OFFSET, MESSAGE_SIZE, RECORD_SIZE};

#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    bytes: &'a [u8; RECORD_SIZE],
}

impl<'a> RecordView<'a> {
    pub fn new(bytes: &'a [u8; RECORD_SIZE]) -> Self {
        Self { bytes }
    }

    #[inline]
    pub fn sequence(&self) -> u16 {
        u16::from_be_bytes([self.bytes[0], self.bytes[1]])
    }

    #[inline]
    pub fn aux(&self) -> bool {
        self.bytes[2] & FLAG_AUX != 0
    }

    #[inline]
    pub fn dst(&self) -> bool {
        self.bytes[2] & FLAG_DST != 0
    }

    #[inline]
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.bytes[3], self.bytes[4], self.bytes[5], self.bytes[6]])
    }

    #[inline]
    pub fn message(&self) -> &'a [u8] {
        &self.bytes[MESSAGE_OFFSET..MESSAGE_OFFSET + MESSAGE_SIZE]
    }

    #[inline]
    pub fn stored_checksum(&self) -> u8 {
        self.bytes[RECORD_SIZE - 1]
    }
}
