#![allow(dead_code)]

use myrtio_led_cube::{Cell, Cube3, CubeConfig, CubeDriver, Duration, PinLevel};
use rand::SeedableRng;
use rand::rngs::SmallRng;

pub const LEVEL_PINS: [u8; 3] = [20, 21, 22];
pub const COL_PINS: [u8; 9] = [2, 3, 4, 5, 6, 7, 8, 9, 10];
pub const SEED: u64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Output(u8),
    Write(u8, PinLevel),
    Delay(Duration),
}

/// Driver that records every hardware call
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub events: Vec<Event>,
}

impl CubeDriver for RecordingDriver {
    type Pin = u8;

    fn set_output(&mut self, pin: u8) {
        self.events.push(Event::Output(pin));
    }

    fn write(&mut self, pin: u8, level: PinLevel) {
        self.events.push(Event::Write(pin, level));
    }

    fn delay(&mut self, duration: Duration) {
        self.events.push(Event::Delay(duration));
    }
}

impl RecordingDriver {
    pub fn delays(&self) -> Vec<Duration> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Delay(duration) => Some(*duration),
                _ => None,
            })
            .collect()
    }

    pub fn writes(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Write(..)))
            .count()
    }

    /// Cells switched on, in order
    ///
    /// A cell is switched on by a high column write followed by a high
    /// level write.
    pub fn lit(&self) -> Vec<Cell> {
        self.events
            .windows(2)
            .filter_map(|pair| match pair {
                [
                    Event::Write(col, PinLevel::High),
                    Event::Write(level, PinLevel::High),
                ] => {
                    let col = COL_PINS.iter().position(|pin| pin == col)?;
                    let level = LEVEL_PINS.iter().position(|pin| pin == level)?;
                    Some(Cell::new(level as u8, col as u8))
                }
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

pub fn cube3() -> Cube3<RecordingDriver, SmallRng> {
    cube3_with(&CubeConfig::default())
}

pub fn cube3_with(config: &CubeConfig) -> Cube3<RecordingDriver, SmallRng> {
    let mut cube = Cube3::new(
        RecordingDriver::default(),
        SmallRng::seed_from_u64(SEED),
        &LEVEL_PINS,
        &COL_PINS,
        config,
    )
    .unwrap();
    cube.driver_mut().clear();
    cube
}

pub fn cells(pairs: &[(u8, u8)]) -> Vec<Cell> {
    pairs.iter().copied().map(Cell::from).collect()
}
