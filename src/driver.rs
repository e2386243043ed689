// This file interacts with an AD5252 dual channel digital potentiometer
// over I2C. The part shares the AD525x register map but only bonds out
// wipers 1 and 3; asking for the other two is refused before any bus
// traffic.

use ufmt::{uWrite, uwriteln};

use crate::bus::I2cBus;
use crate::codec::{code_to_resistance, resistance_to_code, R_AB_OHMS};
use crate::error::{Error, InvalidChannel};
use crate::log::NullLog;

// Chip parameters
/// Fixed 7-bit device address with both AD pins grounded.
pub const I2C_ADDRESS: u8 = 0x2C;

/// Wiper registers of the AD525x family. The discriminant is the selector
/// byte sent on the wire.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum Channel {
    Rdac0 = 0,
    Rdac1 = 1,
    Rdac2 = 2,
    Rdac3 = 3,
}
impl Channel {
    /// Parse a raw channel id, as carried in host-side command protocols.
    pub fn from_number(number: u8) -> Result<Channel, InvalidChannel> {
        match number {
            0 => Ok(Channel::Rdac0),
            1 => Ok(Channel::Rdac1),
            2 => Ok(Channel::Rdac2),
            3 => Ok(Channel::Rdac3),
            _ => Err(InvalidChannel(number)),
        }
    }
}
impl TryFrom<u8> for Channel {
    type Error = InvalidChannel;
    fn try_from(number: u8) -> Result<Channel, InvalidChannel> {
        Channel::from_number(number)
    }
}

pub struct Ad5252<B: I2cBus, L: uWrite = NullLog> {
    bus: B,
    log: L,
    r_ab_ohms: f32,
}
impl<B: I2cBus> Ad5252<B> {
    /// Driver with the default end-to-end resistance and no diagnostics.
    pub fn new(bus: B) -> Ad5252<B> {
        Ad5252 { bus, log: NullLog, r_ab_ohms: R_AB_OHMS }
    }
}
impl<B: I2cBus, L: uWrite> Ad5252<B, L> {
    /// Use the measured end-to-end resistance of this board's part.
    pub fn with_r_ab(mut self, r_ab_ohms: f32) -> Ad5252<B, L> {
        self.r_ab_ohms = r_ab_ohms;
        self
    }
    /// Send a status line to `log` after every successful operation and
    /// every refused request.
    pub fn with_log<L2: uWrite>(self, log: L2) -> Ad5252<B, L2> {
        Ad5252 { bus: self.bus, log, r_ab_ohms: self.r_ab_ohms }
    }
    pub fn return_parts(self) -> (B, L) {
        (self.bus, self.log)
    }

    /// Set the wiper register of `channel` to a raw code.
    pub fn write_wiper(&mut self, channel: Channel, code: u8) -> Result<(), Error<B::Error>> {
        let register = self.check_channel(channel)?;
        self.bus
            .send(I2C_ADDRESS, &[register, code])
            .map_err(Error::Bus)?;
        let ohms = code_to_resistance(code, self.r_ab_ohms);
        uwriteln!(self.log, "RDAC{} set to {} ohm (code {})", register, ohms as u32, code).ok();
        Ok(())
    }

    /// Read the wiper register of `channel` back from the chip.
    pub fn read_wiper(&mut self, channel: Channel) -> Result<u8, Error<B::Error>> {
        let register = self.check_channel(channel)?;
        // Park the register pointer, then fetch the single wiper byte.
        self.bus.send(I2C_ADDRESS, &[register]).map_err(Error::Bus)?;
        let mut buf = [0u8; 1];
        let received = self
            .bus
            .receive(I2C_ADDRESS, &mut buf)
            .map_err(Error::Bus)?;
        if received == 0 {
            return Err(Error::NoData);
        }
        let code = buf[0];
        let ohms = code_to_resistance(code, self.r_ab_ohms);
        uwriteln!(self.log, "RDAC{} reads {} ohm (code {})", register, ohms as u32, code).ok();
        Ok(code)
    }

    /// Move `channel` to the closest wiper position at or below `ohms`.
    pub fn set_resistance(&mut self, channel: Channel, ohms: f32) -> Result<(), Error<B::Error>> {
        let code = match resistance_to_code(ohms, self.r_ab_ohms) {
            Ok(code) => code,
            Err(e) => {
                uwriteln!(self.log, "{} ohm outside wiper range", ohms as i32).ok();
                return Err(e.into());
            }
        };
        self.write_wiper(channel, code)
    }

    /// Resistance currently selected on `channel`.
    pub fn read_resistance(&mut self, channel: Channel) -> Result<f32, Error<B::Error>> {
        let code = self.read_wiper(channel)?;
        Ok(code_to_resistance(code, self.r_ab_ohms))
    }

    // The family register map has four wipers; this part only bonds out
    // RDAC1 and RDAC3.
    fn check_channel(&mut self, channel: Channel) -> Result<u8, Error<B::Error>> {
        match channel {
            Channel::Rdac1 | Channel::Rdac3 => Ok(channel as u8),
            Channel::Rdac0 | Channel::Rdac2 => {
                uwriteln!(self.log, "RDAC{} not present on this part", channel as u8).ok();
                Err(Error::InvalidChannel(channel as u8))
            }
        }
    }
}
