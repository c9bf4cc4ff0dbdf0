#[inline]
pub fn step(running: u8, byte: u8) -> u8 {
    running.wrapping_add(byte)
}

#[inline]
pub fn fold(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, &b| step(acc, b))
}
