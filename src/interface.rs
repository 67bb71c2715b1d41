//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`]
//! struct that drives the SSD1306's 4-line serial bus entirely in software.
//!
//! ## Hardware Requirements
//!
//! The wiring this crate was written for has no hardware SPI peripheral; the
//! controller hangs off four dedicated GPIO lines, all outputs:
//! - **SCK**: serial clock, idles low
//! - **MOSI**: serial data
//! - **DC**: mode select (low = command, high = data), idles in data mode
//! - **CS**: chip select, active low
//!
//! Every clock edge is produced by direct, blocking pin toggling in the
//! calling context; there is no timeout, no retry and no interleaving.
//! A target with a real SPI peripheral can substitute its own
//! [`DisplayInterface`] implementation, preserving only the framing and
//! mode-toggle contract.

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;

/// Trait for the byte-level command/data framing to the SSD1306
///
/// This is the seam between the rendering side of the driver and the wire.
/// The provided [`Interface`] bit-bangs the bus over GPIO; a hardware-backed
/// implementation only has to reproduce the same framing.
pub trait DisplayInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Send a single command byte
    ///
    /// The implementation must assert CS, select command mode, shift the
    /// byte out most-significant-bit first, then restore data mode and
    /// deassert CS.
    ///
    /// # Errors
    ///
    /// Returns an error if driving an output line fails.
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send a sequence of command bytes under one CS assertion
    ///
    /// Same framing as [`send_command`](Self::send_command) but held across
    /// the whole slice. Used for the power-up initialization table.
    ///
    /// # Errors
    ///
    /// Returns an error if driving an output line fails.
    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error>;

    /// Stream data bytes (one composed page) to display RAM
    ///
    /// Identical bit framing without the mode toggle: DC already idles in
    /// data mode and must not be touched.
    ///
    /// # Errors
    ///
    /// Returns an error if driving an output line fails.
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// Software-driven (bit-banged) interface over four output lines
///
/// ## Type Parameters
///
/// * `SCK` - clock line implementing [`OutputPin`]
/// * `MOSI` - data line implementing [`OutputPin`]
/// * `DC` - mode-select line implementing [`OutputPin`]
/// * `CS` - chip-select line implementing [`OutputPin`]
///
/// All four pins must share one error type.
pub struct Interface<SCK, MOSI, DC, CS> {
    /// Serial clock line (idles low)
    sck: SCK,
    /// Serial data line
    mosi: MOSI,
    /// Mode-select line (low = command, high = data; idles high)
    dc: DC,
    /// Chip-select line (active low; idles high)
    cs: CS,
}

impl<SCK, MOSI, DC, CS, PinErr> Interface<SCK, MOSI, DC, CS>
where
    SCK: OutputPin<Error = PinErr>,
    MOSI: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    /// Take ownership of the four lines and drive them to their idle
    /// levels: clock low, data low, mode select high (data), chip select
    /// high (deasserted)
    ///
    /// # Errors
    ///
    /// Returns the pin error if any line cannot be driven.
    pub fn new(mut sck: SCK, mut mosi: MOSI, mut dc: DC, mut cs: CS) -> Result<Self, PinErr> {
        sck.set_low()?;
        mosi.set_low()?;
        dc.set_high()?;
        cs.set_high()?;
        Ok(Self { sck, mosi, dc, cs })
    }

    /// Release the four lines
    pub fn release(self) -> (SCK, MOSI, DC, CS) {
        (self.sck, self.mosi, self.dc, self.cs)
    }

    /// Shift one byte out MSB-first, pulsing the clock once per bit
    fn write_byte(&mut self, byte: u8) -> Result<(), PinErr> {
        for shift in 0..8 {
            if byte & (0x80 >> shift) != 0 {
                self.mosi.set_high()?;
            } else {
                self.mosi.set_low()?;
            }
            self.sck.set_high()?;
            self.sck.set_low()?;
        }
        Ok(())
    }
}

impl<SCK, MOSI, DC, CS, PinErr> DisplayInterface for Interface<SCK, MOSI, DC, CS>
where
    SCK: OutputPin<Error = PinErr>,
    MOSI: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = PinErr;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.cs.set_low()?;
        self.dc.set_low()?;
        self.write_byte(command)?;
        self.dc.set_high()?;
        self.cs.set_high()?;
        Ok(())
    }

    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
        self.cs.set_low()?;
        self.dc.set_low()?;
        for &command in commands {
            self.write_byte(command)?;
        }
        self.dc.set_high()?;
        self.cs.set_high()?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.cs.set_low()?;
        for &byte in data {
            self.write_byte(byte)?;
        }
        self.cs.set_high()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use core::convert::Infallible;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Line {
        Sck,
        Mosi,
        Dc,
        Cs,
    }

    type Trace = Rc<RefCell<Vec<(Line, bool)>>>;

    struct TracePin {
        line: Line,
        trace: Trace,
    }

    impl embedded_hal::digital::ErrorType for TracePin {
        type Error = Infallible;
    }

    impl OutputPin for TracePin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.trace.borrow_mut().push((self.line, false));
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.trace.borrow_mut().push((self.line, true));
            Ok(())
        }
    }

    fn trace_interface() -> (Interface<TracePin, TracePin, TracePin, TracePin>, Trace) {
        let trace: Trace = Rc::new(RefCell::new(Vec::new()));
        let pin = |line| TracePin {
            line,
            trace: Rc::clone(&trace),
        };
        let interface = Interface::new(
            pin(Line::Sck),
            pin(Line::Mosi),
            pin(Line::Dc),
            pin(Line::Cs),
        )
        .unwrap();
        trace.borrow_mut().clear();
        (interface, trace)
    }

    /// Replay the trace, sampling the data line on every rising clock edge
    fn sampled_bytes(trace: &Trace) -> Vec<u8> {
        let mut bytes = Vec::new();
        let mut bits = 0usize;
        let mut current = 0u8;
        let mut mosi = false;
        for &(line, level) in trace.borrow().iter() {
            match line {
                Line::Mosi => mosi = level,
                Line::Sck if level => {
                    current = (current << 1) | u8::from(mosi);
                    bits += 1;
                    if bits == 8 {
                        bytes.push(current);
                        bits = 0;
                        current = 0;
                    }
                }
                _ => {}
            }
        }
        assert_eq!(bits, 0, "trailing partial byte");
        bytes
    }

    fn events_on(trace: &Trace, line: Line) -> Vec<bool> {
        trace
            .borrow()
            .iter()
            .filter(|(l, _)| *l == line)
            .map(|&(_, level)| level)
            .collect()
    }

    #[test]
    fn new_drives_lines_to_idle() {
        let trace: Trace = Rc::new(RefCell::new(Vec::new()));
        let pin = |line| TracePin {
            line,
            trace: Rc::clone(&trace),
        };
        let _interface = Interface::new(
            pin(Line::Sck),
            pin(Line::Mosi),
            pin(Line::Dc),
            pin(Line::Cs),
        )
        .unwrap();
        assert_eq!(
            trace.borrow().as_slice(),
            &[
                (Line::Sck, false),
                (Line::Mosi, false),
                (Line::Dc, true),
                (Line::Cs, true),
            ]
        );
    }

    #[test]
    fn command_shifts_msb_first_with_mode_toggle() {
        let (mut interface, trace) = trace_interface();
        interface.send_command(0xA5).unwrap();

        assert_eq!(sampled_bytes(&trace), &[0xA5]);
        // select, command mode, ... , data mode, deselect
        assert_eq!(events_on(&trace, Line::Cs), &[false, true]);
        assert_eq!(events_on(&trace, Line::Dc), &[false, true]);

        let events = trace.borrow();
        let first_clock = events
            .iter()
            .position(|&(l, _)| l == Line::Sck)
            .unwrap();
        let dc_low = events
            .iter()
            .position(|&e| e == (Line::Dc, false))
            .unwrap();
        let cs_low = events
            .iter()
            .position(|&e| e == (Line::Cs, false))
            .unwrap();
        assert!(cs_low < dc_low && dc_low < first_clock);
    }

    #[test]
    fn command_sequence_holds_one_select_assertion() {
        let (mut interface, trace) = trace_interface();
        interface.send_commands(&[0xAE, 0xD5, 0xF0]).unwrap();

        assert_eq!(sampled_bytes(&trace), &[0xAE, 0xD5, 0xF0]);
        assert_eq!(events_on(&trace, Line::Cs), &[false, true]);
        assert_eq!(events_on(&trace, Line::Dc), &[false, true]);
    }

    #[test]
    fn data_never_touches_mode_select() {
        let (mut interface, trace) = trace_interface();
        interface.send_data(&[0x0F, 0xF0, 0x81]).unwrap();

        assert_eq!(sampled_bytes(&trace), &[0x0F, 0xF0, 0x81]);
        assert_eq!(events_on(&trace, Line::Cs), &[false, true]);
        assert!(events_on(&trace, Line::Dc).is_empty());
    }

    #[test]
    fn clock_returns_low_after_every_byte() {
        let (mut interface, trace) = trace_interface();
        interface.send_data(&[0xFF]).unwrap();

        let clocks = events_on(&trace, Line::Sck);
        assert_eq!(clocks.len(), 16);
        assert_eq!(clocks.last(), Some(&false));
    }
}
