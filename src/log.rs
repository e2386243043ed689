// Diagnostic sinks. The driver accepts any ufmt sink; these cover the two
// usual cases, silence and a serial port.

use embedded_hal::serial::Write;
use ufmt::uWrite;
use void::Void;

/// Sink that discards everything. The driver's default, and the one to keep
/// in flight builds.
pub struct NullLog;

impl uWrite for NullLog {
    type Error = Void;

    fn write_str(&mut self, _s: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Sink that pushes each byte out a serial transmitter, waiting for the
/// transmitter whenever it is busy.
pub struct SerialLog<TX: Write<u8>> {
    tx: TX,
}
impl<TX: Write<u8>> SerialLog<TX> {
    pub fn new(tx: TX) -> SerialLog<TX> {
        SerialLog { tx }
    }
    pub fn return_serial(self) -> TX {
        self.tx
    }
}
impl<TX: Write<u8>> uWrite for SerialLog<TX> {
    type Error = TX::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for b in s.as_bytes() {
            nb::block!(self.tx.write(*b))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::serial::{Mock as SerialMock, Transaction as SerialTransaction};
    use ufmt::uwriteln;

    #[test]
    fn null_log_swallows_lines() {
        let mut log = NullLog;
        assert!(uwriteln!(log, "RDAC1 set to {} ohm", 497u32).is_ok());
    }

    #[test]
    fn serial_log_pushes_formatted_bytes() {
        let expected: Vec<SerialTransaction<u8>> = b"1080 ohm\n"
            .iter()
            .map(|b| SerialTransaction::write(*b))
            .collect();
        let mut log = SerialLog::new(SerialMock::new(&expected));

        uwriteln!(log, "{} ohm", 1080u32).unwrap();
        log.return_serial().done();
    }

    // Transmitter that needs a retry for every byte.
    struct BusyTx {
        sent: Vec<u8>,
        ready: bool,
    }
    impl Write<u8> for BusyTx {
        type Error = Void;

        fn write(&mut self, word: u8) -> nb::Result<(), Void> {
            if self.ready {
                self.ready = false;
                self.sent.push(word);
                Ok(())
            } else {
                self.ready = true;
                Err(nb::Error::WouldBlock)
            }
        }

        fn flush(&mut self) -> nb::Result<(), Void> {
            Ok(())
        }
    }

    #[test]
    fn serial_log_waits_out_a_busy_transmitter() {
        let mut log = SerialLog::new(BusyTx { sent: Vec::new(), ready: false });

        uwriteln!(log, "ok").unwrap();
        assert_eq!(log.return_serial().sent, b"ok\n".to_vec());
    }
}
