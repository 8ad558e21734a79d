pub mod cardiac;
pub mod curve;
pub mod time_axis;
pub mod waveform;

pub use self::cardiac::*;
pub use self::curve::*;
pub use self::time_axis::*;
pub use self::waveform::*;
