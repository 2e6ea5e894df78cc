//! Defines the configuration sent to the SSD1306 at init time.

use crate::command::*;

/// A configuration for the display. Builder methods offer a declarative way to either send a
/// configuration command at init time, or to leave it at the chip's POR default.
#[derive(Clone, Debug, Default)]
pub struct Config {
    mux_ratio_cmd: Option<Command>,
    display_offset_cmd: Option<Command>,
    start_line_cmd: Option<Command>,
    segment_remap_cmd: Option<Command>,
    com_scan_direction_cmd: Option<Command>,
    com_pins_cmd: Option<Command>,
    contrast_cmd: Option<Command>,
    precharge_period_cmd: Option<Command>,
    vcomh_deselect_cmd: Option<Command>,
    clock_divide_cmd: Option<Command>,
    charge_pump_cmd: Option<Command>,
}

impl Config {
    /// Create a new configuration which leaves every setting at its POR default.
    pub fn new() -> Self {
        Self::default()
    }

    /// The usual configuration of a 128x64 module powered from a single supply, with the panel
    /// mounted so that the image is upright with the flex cable at the bottom.
    pub fn module_128x64() -> Self {
        Config::new()
            .mux_ratio(64)
            .segment_remap(true)
            .com_scan_direction(ComScanDirection::Remapped)
            .com_pins(ComPinLayout::Alternative, false)
            .charge_pump(true)
    }

    /// Extend this `Config` to explicitly configure the multiplex ratio. See
    /// `Command::SetMuxRatio`.
    pub fn mux_ratio(self, ratio: u8) -> Self {
        Self {
            mux_ratio_cmd: Some(Command::SetMuxRatio(ratio)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the COM line offset. See
    /// `Command::SetDisplayOffset`.
    pub fn display_offset(self, offset: u8) -> Self {
        Self {
            display_offset_cmd: Some(Command::SetDisplayOffset(offset)),
            ..self
        }
    }

    /// See `Command::SetStartLine`.
    pub fn start_line(self, line: u8) -> Self {
        Self {
            start_line_cmd: Some(Command::SetStartLine(line)),
            ..self
        }
    }

    /// See `Command::SetSegmentRemap`.
    pub fn segment_remap(self, remap: bool) -> Self {
        Self {
            segment_remap_cmd: Some(Command::SetSegmentRemap(remap)),
            ..self
        }
    }

    pub fn com_scan_direction(self, direction: ComScanDirection) -> Self {
        Self {
            com_scan_direction_cmd: Some(Command::SetComScanDirection(direction)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the COM pin layout. This is dictated by the
    /// display module; see `ComPinLayout`.
    pub fn com_pins(self, layout: ComPinLayout, left_right_remap: bool) -> Self {
        Self {
            com_pins_cmd: Some(Command::SetComPins(layout, left_right_remap)),
            ..self
        }
    }

    pub fn contrast(self, contrast: u8) -> Self {
        Self {
            contrast_cmd: Some(Command::SetContrast(contrast)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure OLED drive pre-charge phase lengths. See
    /// `Command::SetPrechargePeriod`.
    pub fn precharge_period(self, phase_1: u8, phase_2: u8) -> Self {
        Self {
            precharge_period_cmd: Some(Command::SetPrechargePeriod(phase_1, phase_2)),
            ..self
        }
    }

    pub fn vcomh_deselect(self, level: VcomhLevel) -> Self {
        Self {
            vcomh_deselect_cmd: Some(Command::SetVcomhDeselect(level)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the display clock divider and oscillator
    /// frequency. See `Command::SetClockDivide`.
    pub fn clock_divide(self, divide: u8, fosc: u8) -> Self {
        Self {
            clock_divide_cmd: Some(Command::SetClockDivide(divide, fosc)),
            ..self
        }
    }

    /// Extend this `Config` to enable or disable the internal charge pump. Must be enabled on
    /// modules that do not supply an external panel voltage.
    pub fn charge_pump(self, enabled: bool) -> Self {
        Self {
            charge_pump_cmd: Some(Command::SetChargePump(enabled)),
            ..self
        }
    }

    /// The configured commands, in the order the datasheet's init flow sends them.
    pub(crate) fn commands(&self) -> [Option<Command>; 11] {
        [
            self.mux_ratio_cmd,
            self.display_offset_cmd,
            self.start_line_cmd,
            self.segment_remap_cmd,
            self.com_scan_direction_cmd,
            self.com_pins_cmd,
            self.contrast_cmd,
            self.precharge_period_cmd,
            self.vcomh_deselect_cmd,
            self.clock_divide_cmd,
            self.charge_pump_cmd,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_send_nothing() {
        assert!(Config::new().commands().iter().all(Option::is_none));
    }

    #[test]
    fn builder_keeps_datasheet_order() {
        let cfg = Config::new()
            .charge_pump(true)
            .contrast(0xCF)
            .mux_ratio(32);
        let cmds: Vec<Command> = cfg.commands().iter().flatten().copied().collect();
        assert_eq!(
            cmds,
            vec![
                Command::SetMuxRatio(32),
                Command::SetContrast(0xCF),
                Command::SetChargePump(true),
            ]
        );
    }

    #[test]
    fn later_setting_replaces_earlier() {
        let cfg = Config::new().contrast(1).contrast(2);
        let cmds: Vec<Command> = cfg.commands().iter().flatten().copied().collect();
        assert_eq!(cmds, vec![Command::SetContrast(2)]);
    }
}
