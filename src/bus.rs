// Transport seam for the driver. The chip protocol consists of whole bus
// transactions, so that is what the trait carries; any embedded-hal I2C
// peripheral plugs in through the blanket impl below.

use embedded_hal::blocking::i2c::{Read, Write};

pub trait I2cBus {
    type Error;

    /// Address the device and write all of `bytes` in one transaction.
    fn send(&mut self, addr: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Address the device and read into `buf` in one transaction. Returns
    /// how many bytes the device actually supplied.
    fn receive(&mut self, addr: u8, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

// A HAL read either fills the whole buffer or fails, so a successful read is
// always full length here.
impl<T, E> I2cBus for T
where
    T: Write<Error = E>,
    T: Read<Error = E>,
{
    type Error = E;

    fn send(&mut self, addr: u8, bytes: &[u8]) -> Result<(), E> {
        self.write(addr, bytes)
    }

    fn receive(&mut self, addr: u8, buf: &mut [u8]) -> Result<usize, E> {
        self.read(addr, buf)?;
        Ok(buf.len())
    }
}
