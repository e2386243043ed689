// Error types shared by the conversion layer and the wiper driver.
// The conversion layer has no bus, so its errors are standalone types that
// convert into the driver's wrapper.

/// Requested resistance outside the wiper's reachable range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutOfRange(pub f32);

/// Channel id with no wiper bonded out on this part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidChannel(pub u8);

/// Everything that can go wrong while driving the chip. `E` is the raw error
/// of whatever transport the driver was given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error<E> {
    /// Channel id with no wiper on this part. Raised before any bus traffic.
    InvalidChannel(u8),
    /// Requested resistance outside the wiper's reachable range.
    OutOfRange(f32),
    /// The transport failed. Carries the transport's own error unchanged.
    Bus(E),
    /// The read transaction completed but the chip supplied no byte.
    NoData,
}

impl<E> From<OutOfRange> for Error<E> {
    fn from(e: OutOfRange) -> Self {
        Error::OutOfRange(e.0)
    }
}

impl<E> From<InvalidChannel> for Error<E> {
    fn from(e: InvalidChannel) -> Self {
        Error::InvalidChannel(e.0)
    }
}
