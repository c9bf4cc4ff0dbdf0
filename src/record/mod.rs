pub mod codec;
pub mod view;

pub use codec::Record;
pub use view::RecordView;

pub const RECORD_SIZE: usize = 40;
pub const MESSAGE_SIZE: usize = 30;
pub const MESSAGE_OFFSET: usize = 9;
pub const FLAG_AUX: u8 = 0b1000_0000;
pub const FLAG_DST: u8 = 0b0100_0000;
