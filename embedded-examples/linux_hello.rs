//! Example of driving a 128x64 SSD1306 module from a Linux single board computer. The module is
//! wired to `/dev/i2c-1` with SA0 tied low. Build with the `linux` feature enabled.

use std::thread;
use std::time::Duration;

use ssd1306_i2c::{Config, PeripheralAddress, ScrollDirection, ScrollInterval, Ssd1306};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut disp = Ssd1306::open("/dev/i2c-1", PeripheralAddress::Primary)?;
    disp.init(Config::module_128x64().contrast(0xCF))?;
    disp.clear_display()?;

    disp.write_line(0, b"SSD1306 over I2C")?;
    disp.write_line(2, b"The quick brown fox")?;
    disp.write_line(3, b"jumps over the lazy dog.")?;

    // A dotted rule across page 5.
    for column in (0..128).step_by(4) {
        disp.write_byte(5, column, 0x18)?;
    }

    disp.set_scroll(ScrollDirection::Left, 2, 3, ScrollInterval::Frames5, 0)?;
    thread::sleep(Duration::from_secs(10));
    disp.stop_scroll()?;

    disp.clear_line(2)?;
    disp.clear_line(3)?;
    disp.write_line(7, b"bye")?;
    Ok(())
}
