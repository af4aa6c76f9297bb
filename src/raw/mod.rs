mod projection;
mod raw_sorted_vec;

pub(crate) use projection::{ByKey, Identity};
pub(crate) use raw_sorted_vec::RawSortedVec;
