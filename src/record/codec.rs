use crate::checksum;

use super::{FLAG_AUX, FLAG_DST, MESSAGE_OFFSET, MESSAGE_SIZE, RECORD_SIZE};

/// Encoded layout, all integers big-endian:
///
/// ```text
/// offset 0..2    sequence number
/// offset 2       flag byte (bit 7 aux, bit 6 dst, rest zero)
/// offset 3..7    timestamp, seconds since the local 2000 epoch
/// offset 7..9    spare, zero
/// offset 9..39   message, space-padded to 30 bytes
/// offset 39      additive checksum of the 39 bytes before it
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub sequence: u16,
    pub aux: bool,
    pub dst: bool,
    pub timestamp: u32,
    message: [u8; MESSAGE_SIZE],
}

impl Record {
    pub fn new(sequence: u16, aux: bool, dst: bool, timestamp: u32, message: &str) -> Self {
        let mut padded = [b' '; MESSAGE_SIZE];
        let len = message.len().min(MESSAGE_SIZE);
        padded[..len].copy_from_slice(&message.as_bytes()[..len]);
        Self {
            sequence,
            aux,
            dst,
            timestamp,
            message: padded,
        }
    }

    #[inline]
    pub fn message(&self) -> &[u8; MESSAGE_SIZE] {
        &self.message
    }

    pub fn flag_byte(&self) -> u8 {
        let mut flags = 0u8;
        if self.aux {
            flags |= FLAG_AUX;
        }
        if self.dst {
            flags |= FLAG_DST;
        }
        flags
    }

    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        buf[0..2].copy_from_slice(&self.sequence.to_be_bytes());
        buf[2] = self.flag_byte();
        buf[3..7].copy_from_slice(&self.timestamp.to_be_bytes());
        buf[MESSAGE_OFFSET..MESSAGE_OFFSET + MESSAGE_SIZE].copy_from_slice(&self.message);
        buf[RECORD_SIZE - 1] = checksum::fold(&buf[..RECORD_SIZE - 1]);
        buf
    }
}
