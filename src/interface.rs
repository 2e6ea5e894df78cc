//! The bus connection which carries transfers to the display.

use core::fmt;

use crate::address::PeripheralAddress;

/// A blocking connection to the two-wire bus the SSD1306 is attached to.
///
/// The driver never reads from the bus, and considers a transfer successful only when the
/// returned count equals the length of `bytes`.
pub trait BusConnection {
    type Error: fmt::Debug;

    /// Write `bytes` to the device at `address` in a single transfer, returning how many bytes
    /// were accepted.
    fn write(&mut self, address: PeripheralAddress, bytes: &[u8]) -> Result<usize, Self::Error>;
}

impl<T: BusConnection + ?Sized> BusConnection for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: PeripheralAddress, bytes: &[u8]) -> Result<usize, Self::Error> {
        T::write(self, address, bytes)
    }
}

pub mod i2c {
    //! Bus connection over any blocking `embedded-hal` I2C master. An I2C write either transfers
    //! the whole buffer or fails, so a successful write reports the full length.

    use core::fmt;

    use super::BusConnection;
    use crate::address::PeripheralAddress;

    pub struct I2cBus<I2C> {
        /// The I2C master device connected to the SSD1306.
        i2c: I2C,
    }

    impl<I2C> I2cBus<I2C>
    where
        I2C: hal::blocking::i2c::Write,
    {
        /// Create a new bus connection over the I2C master `i2c`.
        pub fn new(i2c: I2C) -> Self {
            Self { i2c }
        }

        /// Give back the I2C master.
        pub fn release(self) -> I2C {
            self.i2c
        }
    }

    impl<I2C> BusConnection for I2cBus<I2C>
    where
        I2C: hal::blocking::i2c::Write,
        I2C::Error: fmt::Debug,
    {
        type Error = I2C::Error;

        fn write(
            &mut self,
            address: PeripheralAddress,
            bytes: &[u8],
        ) -> Result<usize, Self::Error> {
            self.i2c.write(address.seven_bit(), bytes)?;
            Ok(bytes.len())
        }
    }
}

#[cfg(feature = "linux")]
pub mod linux {
    //! Bus connection over a Linux I2C character device such as `/dev/i2c-1`.

    use std::path::Path;

    use linux_embedded_hal::i2cdev::linux::LinuxI2CError;
    use linux_embedded_hal::I2cdev;

    use super::i2c::I2cBus;

    pub type LinuxBus = I2cBus<I2cdev>;

    /// Open the I2C character device at `device`.
    pub fn open<P: AsRef<Path>>(device: P) -> Result<LinuxBus, LinuxI2CError> {
        let device = device.as_ref();
        log::debug!("opening I2C device {}", device.display());
        Ok(I2cBus::new(I2cdev::new(device)?))
    }
}


#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh0::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    use super::i2c::I2cBus;
    use super::BusConnection;
    use crate::address::PeripheralAddress;

    #[test]
    fn i2c_bus_writes_whole_buffer_to_seven_bit_address() {
        let expectations = [
            I2cTransaction::write(0x3C, vec![0x00, 0xAF]),
            I2cTransaction::write(0x3D, vec![0x40, 0xDE, 0xAD]),
        ];
        let mut bus = I2cBus::new(I2cMock::new(&expectations));
        assert_eq!(
            bus.write(PeripheralAddress::Primary, &[0x00, 0xAF]).unwrap(),
            2
        );
        assert_eq!(
            bus.write(PeripheralAddress::Secondary, &[0x40, 0xDE, 0xAD])
                .unwrap(),
            3
        );
        bus.release().done();
    }
}
