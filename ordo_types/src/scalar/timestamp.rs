use crate::codec::{require_value, Codec};
use crate::lengths::WriteLen;
use crate::order::Order;
use crate::scalar::Long;
use anyhow::Result;
use derive_more::{Deref, From, Into};
use std::cmp::Ordering;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch; negative before it.
#[derive(From, Into, Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default, Debug)]
pub struct EpochMillis(i64);

impl EpochMillis {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    /// `None` if the instant is not representable as a `SystemTime` on this platform.
    pub fn to_system_time(self) -> Option<SystemTime> {
        let offset = Duration::from_millis(self.0.unsigned_abs());
        if self.0 >= 0 {
            UNIX_EPOCH.checked_add(offset)
        } else {
            UNIX_EPOCH.checked_sub(offset)
        }
    }
}

impl TryFrom<SystemTime> for EpochMillis {
    type Error = anyhow::Error;

    /// Rounds toward negative infinity, like a wall clock read at millisecond resolution.
    fn try_from(time: SystemTime) -> Result<Self> {
        let millis = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis())?,
            Err(e) => {
                let before = e.duration();
                let partial = (before.subsec_nanos() % 1_000_000 != 0) as u128;
                -i64::try_from(before.as_millis() + partial)?
            }
        };
        Ok(Self(millis))
    }
}

/// Instants at millisecond resolution, encoded as their [`Long`] epoch offset.
#[derive(Clone, Copy, Default, Debug)]
pub struct Timestamp {
    long: Long,
}

impl Timestamp {
    pub const WIDTH: usize = Long::WIDTH;

    pub fn new(order: Order) -> Self {
        Self {
            long: Long::new(order),
        }
    }
}

impl Codec for Timestamp {
    type Value = EpochMillis;

    fn order(&self) -> Order {
        self.long.order()
    }
    fn supports_null(&self) -> bool {
        false
    }

    fn encode_into(&self, val: Option<&EpochMillis>, dst: &mut Vec<u8>) -> Result<WriteLen> {
        let millis = require_value::<Self, _>(val)?;
        self.long.encode_into(Some(&millis.0), dst)
    }

    fn decode_prefix(&self, src: &[u8]) -> Result<(usize, Option<EpochMillis>)> {
        let (r_len, millis) = self.long.decode_prefix(src)?;
        Ok((r_len, millis.map(EpochMillis)))
    }

    fn cmp_values(&self, a: &EpochMillis, b: &EpochMillis) -> Ordering {
        a.cmp(b)
    }
}
