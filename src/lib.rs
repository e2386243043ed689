//! Driver for the AD5252 dual channel I2C digital potentiometer.
//! Datasheet here: <https://www.analog.com/media/en/technical-documentation/data-sheets/AD5251_5252.pdf>
//!
//! The part shares the AD525x register map; of the four family wipers it
//! bonds out RDAC1 and RDAC3, each a 256 position divider across the
//! resistive element. Lower codes select more resistance, code 0 the full
//! element. Conversions use the measured end-to-end resistance of the part
//! (1080 ohm for the 1k variant, overridable per instance), and every bus
//! or range failure comes back as an [`Error`] instead of a sentinel code.
//!
//! The driver works with any bus implementing [`I2cBus`], which any
//! `embedded-hal` I2C peripheral does out of the box. Diagnostics are off
//! by default; hand the driver a [`SerialLog`] (or any `ufmt` sink) to get
//! a status line per operation.
//!
//! ```
//! use ad5252::{Ad5252, Channel};
//! use embedded_hal_mock::i2c::{Mock, Transaction};
//!
//! let i2c = Mock::new(&[
//!     Transaction::write(0x2C, vec![1, 138]),
//!     Transaction::write(0x2C, vec![1]),
//!     Transaction::read(0x2C, vec![138]),
//! ]);
//!
//! let mut pot = Ad5252::new(i2c);
//! pot.set_resistance(Channel::Rdac1, 500.0).unwrap();
//! assert_eq!(pot.read_wiper(Channel::Rdac1).unwrap(), 138);
//!
//! let (mut i2c, _) = pot.return_parts();
//! i2c.done();
//! ```

#![cfg_attr(not(test), no_std)]

mod bus;
mod codec;
mod driver;
mod error;
mod log;

pub use bus::I2cBus;
pub use codec::{code_to_resistance, resistance_to_code, R_AB_OHMS, WIPER_POSITIONS};
pub use driver::{Ad5252, Channel, I2C_ADDRESS};
pub use error::{Error, InvalidChannel, OutOfRange};
pub use log::{NullLog, SerialLog};
