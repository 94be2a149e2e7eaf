mod format;
mod sexagesimal;

pub use format::{DmsFmt, HmsFmt};
pub use sexagesimal::{
    days_to_hms, radians_to_dms, radians_to_hms, try_days_to_hms, try_radians_to_dms,
    try_radians_to_hms, Sexagesimal, Sign, MAX_NDP,
};
