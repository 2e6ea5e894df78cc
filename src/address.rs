//! The I2C address of the SSD1306.

use core::convert::TryFrom;

/// One of the two I2C addresses an SSD1306 can be strapped to with its SA0 pin.
///
/// Datasheets usually write these as 8-bit write addresses (`0x78` and `0x7A`); the bus itself is
/// addressed with the 7-bit form (`0x3C` and `0x3D`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralAddress {
    /// SA0 low: `0x3C`, written as `0x78`.
    Primary,
    /// SA0 high: `0x3D`, written as `0x7A`.
    Secondary,
}

impl PeripheralAddress {
    /// The 7-bit address placed on the bus.
    pub fn seven_bit(self) -> u8 {
        match self {
            PeripheralAddress::Primary => 0x3C,
            PeripheralAddress::Secondary => 0x3D,
        }
    }

    /// The 8-bit write address, i.e. the 7-bit address shifted left with the R/W bit clear.
    pub fn write_byte(self) -> u8 {
        self.seven_bit() << 1
    }
}

impl Default for PeripheralAddress {
    fn default() -> Self {
        PeripheralAddress::Primary
    }
}

/// Accepts either the 8-bit write address or the 7-bit address. The rejected value is returned.
impl TryFrom<u8> for PeripheralAddress {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0x78 | 0x3C => Ok(PeripheralAddress::Primary),
            0x7A | 0x3D => Ok(PeripheralAddress::Secondary),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_forms() {
        assert_eq!(
            PeripheralAddress::try_from(0x78),
            Ok(PeripheralAddress::Primary)
        );
        assert_eq!(
            PeripheralAddress::try_from(0x3C),
            Ok(PeripheralAddress::Primary)
        );
        assert_eq!(
            PeripheralAddress::try_from(0x7A),
            Ok(PeripheralAddress::Secondary)
        );
        assert_eq!(
            PeripheralAddress::try_from(0x3D),
            Ok(PeripheralAddress::Secondary)
        );
    }

    #[test]
    fn rejects_everything_else() {
        for value in (0..=255u8).filter(|v| ![0x78, 0x3C, 0x7A, 0x3D].contains(v)) {
            assert_eq!(PeripheralAddress::try_from(value), Err(value));
        }
    }

    #[test]
    fn address_forms() {
        assert_eq!(PeripheralAddress::Primary.seven_bit(), 0x3C);
        assert_eq!(PeripheralAddress::Primary.write_byte(), 0x78);
        assert_eq!(PeripheralAddress::Secondary.seven_bit(), 0x3D);
        assert_eq!(PeripheralAddress::Secondary.write_byte(), 0x7A);
    }
}
