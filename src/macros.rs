macro_rules! bitpos {
    ($idx:expr) => {{
        let idx = $idx;
        (idx >> 3, idx & 7)
    }};
}

macro_rules! bitmask {
    ($off:expr) => {
        0x80u8 >> $off
    };
}

pub(crate) use bitmask;
pub(crate) use bitpos;
