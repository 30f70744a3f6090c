use embassy_time::Duration;
use heapless::Vec;
use rand::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::diagnostics::{Pattern, Rejection, RejectionHook};
use crate::frame::{Frame, FrameQueue};
use crate::frame_buffer::FrameBuffer;
use crate::geometry::{Cell, ConfigError, CubeGeometry};
use crate::patterns::{self, collect};
use crate::random::{random_cell, random_column};
use crate::{CubeDriver, PinLevel};

/// Default gap of the first full draw in `lights_out`
const DEFAULT_REVEAL_MS: u64 = 25;

/// Timings used by built-in animations
#[derive(Debug, Clone, Copy)]
pub struct CubeTimings {
    /// Gap of the first full draw in `lights_out`
    pub reveal: Duration,
}

impl Default for CubeTimings {
    fn default() -> Self {
        Self {
            reveal: Duration::from_millis(DEFAULT_REVEAL_MS),
        }
    }
}

/// Configuration for the cube
#[derive(Debug, Clone, Default)]
pub struct CubeConfig {
    pub timings: CubeTimings,
    /// Called for every ignored call. Off by default.
    pub on_reject: Option<RejectionHook>,
}

/// 3×3×3 cube
pub type Cube3<D, R> = LedCube<D, R, 3, 9, 27>;
/// 4×4×4 cube
pub type Cube4<D, R> = LedCube<D, R, 4, 16, 64>;
/// 8×8×8 cube
pub type Cube8<D, R> = LedCube<D, R, 8, 64, 512>;

/// Multiplexed LED cube
///
/// LEVELS is the cube size, COLS must be `LEVELS²` and CELLS `LEVELS³`;
/// the constructor rejects any other combination.
pub struct LedCube<
    D: CubeDriver,
    R: RngCore,
    const LEVELS: usize,
    const COLS: usize,
    const CELLS: usize,
> {
    // External dependencies and configuration
    driver: D,
    rng: R,
    level_pins: [D::Pin; LEVELS],
    col_pins: [D::Pin; COLS],
    timings: CubeTimings,
    on_reject: Option<RejectionHook>,

    // Internal state
    geometry: CubeGeometry,
    buffer: FrameBuffer<LEVELS, COLS>,
}

impl<D: CubeDriver, R: RngCore, const LEVELS: usize, const COLS: usize, const CELLS: usize>
    LedCube<D, R, LEVELS, COLS, CELLS>
{
    /// Create a cube and configure every drive line as output
    ///
    /// `level_pins` must hold exactly `LEVELS` pins and `col_pins` exactly
    /// `COLS` pins.
    pub fn new(
        mut driver: D,
        rng: R,
        level_pins: &[D::Pin],
        col_pins: &[D::Pin],
        config: &CubeConfig,
    ) -> Result<Self, ConfigError> {
        let geometry = CubeGeometry::from_dimensions(LEVELS, COLS, CELLS)?;
        let level_pins: [D::Pin; LEVELS] =
            level_pins.try_into().map_err(|_| ConfigError::LevelPins {
                expected: LEVELS,
                actual: level_pins.len(),
            })?;
        let col_pins: [D::Pin; COLS] = col_pins.try_into().map_err(|_| ConfigError::ColumnPins {
            expected: COLS,
            actual: col_pins.len(),
        })?;

        for pin in level_pins.iter().chain(col_pins.iter()) {
            driver.set_output(*pin);
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[cube] ready: {} levels, {} columns, {} cells",
            geometry.levels(),
            geometry.cols(),
            geometry.num()
        );

        let mut cube = Self {
            driver,
            rng,
            level_pins,
            col_pins,
            timings: config.timings,
            on_reject: config.on_reject,
            geometry,
            buffer: FrameBuffer::new(),
        };
        cube.clear_buffer();
        Ok(cube)
    }

    pub const fn geometry(&self) -> CubeGeometry {
        self.geometry
    }

    pub const fn timings(&self) -> CubeTimings {
        self.timings
    }

    pub const fn buffer(&self) -> &FrameBuffer<LEVELS, COLS> {
        &self.buffer
    }

    /// Read a buffered cell
    pub fn buffer_at(&self, cell: Cell) -> Option<bool> {
        self.buffer.get(cell)
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Release the driver and the random source
    pub fn into_parts(self) -> (D, R) {
        (self.driver, self.rng)
    }

    fn reject(&self, rejection: Rejection) {
        #[cfg(feature = "esp32-log")]
        println!("[cube] ignored: {:?}", rejection);

        if let Some(hook) = self.on_reject {
            hook(rejection);
        }
    }

    /// Write a single cell
    ///
    /// In buffered mode the value is staged; otherwise the column and level
    /// lines are driven to it immediately. Out-of-bounds cells are ignored.
    pub fn light(&mut self, cell: Cell, value: bool) {
        if !self.geometry.contains(cell) {
            self.reject(Rejection::CellOutOfBounds(cell));
            return;
        }
        if self.buffer.is_enabled() {
            self.buffer.set(cell, value);
            return;
        }
        let level = PinLevel::from(value);
        self.driver.write(self.col_pins[usize::from(cell.col)], level);
        self.driver.write(self.level_pins[usize::from(cell.level)], level);
    }

    /// Turn a cell on, honoring direct-drive inversion
    pub fn light_on(&mut self, cell: Cell) {
        let value = self.buffer.is_enabled() || !self.buffer.is_inverted();
        self.light(cell, value);
    }

    /// Turn a cell off, honoring direct-drive inversion
    pub fn light_off(&mut self, cell: Cell) {
        let value = !self.buffer.is_enabled() && self.buffer.is_inverted();
        self.light(cell, value);
    }

    /// Flash a cell for `gap`
    ///
    /// In buffered mode the cell is only turned on.
    pub fn light_pulse(&mut self, cell: Cell, gap: Duration) {
        self.light_on(cell);
        if !self.buffer.is_enabled() {
            self.driver.delay(gap);
            self.light_off(cell);
        }
    }

    /// Play a sequence `repeat` times, pulsing each cell for `gap`
    ///
    /// In buffered mode every cell is staged exactly once, without delays.
    pub fn light_sequence(&mut self, sequence: &[Cell], repeat: u16, gap: Duration) {
        self.play(sequence.iter().copied(), repeat, gap);
    }

    /// Play an interleaved `level, col, level, col, ...` sequence
    ///
    /// Odd-length sequences are ignored as a whole.
    pub fn light_sequence_raw(&mut self, sequence: &[u8], repeat: u16, gap: Duration) {
        if !sequence.len().is_multiple_of(2) {
            self.reject(Rejection::OddSequence {
                len: sequence.len(),
            });
            return;
        }
        let cells = sequence
            .chunks_exact(2)
            .map(|pair| Cell::new(pair[0], pair[1]));
        self.play(cells, repeat, gap);
    }

    fn play<I>(&mut self, cells: I, repeat: u16, gap: Duration)
    where
        I: Iterator<Item = Cell> + Clone,
    {
        if self.buffer.is_enabled() {
            for cell in cells {
                self.light_on(cell);
            }
            return;
        }
        for _ in 0..repeat {
            for cell in cells.clone() {
                self.light_pulse(cell, gap);
            }
        }
    }

    fn play_pattern(
        &mut self,
        pattern: Pattern,
        selector: u8,
        sequence: Option<Vec<Cell, CELLS>>,
        repeat: u16,
        gap: Duration,
    ) {
        match sequence {
            Some(sequence) => self.light_sequence(&sequence, repeat, gap),
            None => self.reject(Rejection::Selector {
                pattern,
                value: selector,
            }),
        }
    }

    /// Light every column of a level (1-based)
    pub fn light_level(&mut self, plane: u8, wait: Duration) {
        let sequence = patterns::level(self.geometry, plane);
        self.play_pattern(Pattern::Level, plane, sequence, 1, wait);
    }

    /// Light one line across a level
    ///
    /// `row` is in `1..=2 * levels` and also picks the level (`row - 1`).
    /// Selectors above `levels` address no level, so their cells are
    /// ignored. A zero `level` ignores the whole call.
    pub fn light_row(&mut self, row: u8, level: u8, wait: Duration) {
        let (selector, sequence) = if level == 0 {
            (level, None)
        } else {
            (row, patterns::row(self.geometry, row))
        };
        self.play_pattern(Pattern::Row, selector, sequence, 1, wait);
    }

    /// Light a vertical slice, one level at a time
    pub fn light_plane(&mut self, selector: u8, wait: Duration) {
        let sequence = patterns::plane(self.geometry, selector);
        self.play_pattern(Pattern::Plane, selector, sequence, 1, wait);
    }

    /// Light a column (1-based) from the bottom up
    pub fn light_column(&mut self, col: u8, wait: Duration) {
        let sequence = patterns::column(self.geometry, col);
        self.play_pattern(Pattern::Column, col, sequence, 1, wait);
    }

    /// Let a light fall down a column (1-based)
    pub fn light_drop(&mut self, col: u8, wait: Duration) {
        let sequence = patterns::drop_column(self.geometry, col);
        self.play_pattern(Pattern::Drop, col, sequence, 1, wait);
    }

    /// Run around the border of a level (1-based) `rotations` times
    pub fn light_perimeter(&mut self, plane: u8, rotations: u16, wait: Duration) {
        let sequence = patterns::perimeter(self.geometry, plane);
        self.play_pattern(Pattern::Perimeter, plane, sequence, rotations, wait);
    }

    /// Pulse `count` random cells
    pub fn random_light(&mut self, count: u16, wait: Duration) {
        for _ in 0..count {
            let cell = random_cell(&mut self.rng, self.geometry);
            self.light_sequence(&[cell], 1, wait);
        }
    }

    /// Light `count` random columns
    pub fn random_column(&mut self, count: u16, wait: Duration) {
        for _ in 0..count {
            let col = random_column(&mut self.rng, self.geometry);
            self.light_column(col, wait);
        }
    }

    /// Switch buffered mode
    ///
    /// Leaving buffered mode resets inversion.
    pub fn enable_buffer(&mut self, enable: bool) {
        self.buffer.enable(enable);
    }

    /// Switch direct-drive polarity
    pub fn invert_buffer(&mut self, invert: bool) {
        self.buffer.invert(invert);
    }

    pub fn set_buffer(&mut self, value: bool) {
        self.buffer.set_all(value);
    }

    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    pub fn fill_buffer(&mut self) {
        self.buffer.fill();
    }

    /// Drive every lit buffer cell once
    pub fn draw_buffer(&mut self, wait: Duration) {
        self.draw_buffer_repeated(1, wait);
    }

    /// Drive every lit buffer cell, scanning the buffer `repeat` times
    ///
    /// Buffering is left while drawing, so cells are always driven with
    /// normal polarity and inversion is reset. The buffered flag is restored
    /// afterwards.
    pub fn draw_buffer_repeated(&mut self, repeat: u16, wait: Duration) {
        let sequence: Vec<Cell, CELLS> = collect(self.buffer.lit_cells());

        let enabled = self.buffer.is_enabled();
        self.buffer.enable(false);
        self.light_sequence(&sequence, repeat, wait);
        self.buffer.enable(enabled);
    }

    /// Fill the cube, then switch random lights off until it goes dark
    ///
    /// Samples `num` random cells; lit ones are turned off and the buffer is
    /// redrawn with `wait`. Buffering is disabled on return.
    pub fn lights_out(&mut self, wait: Duration) {
        self.enable_buffer(true);
        self.fill_buffer();
        self.draw_buffer(self.timings.reveal);

        for _ in 0..self.geometry.num() {
            let cell = random_cell(&mut self.rng, self.geometry);
            if self.buffer.get(cell) == Some(true) {
                self.light_off(cell);
                self.draw_buffer(wait);
            }
        }

        self.enable_buffer(false);
    }

    /// Play one frame with its own delay
    pub fn light_frame<const N: usize>(&mut self, frame: &Frame<N>) {
        self.light_sequence(frame.sequence(), 1, frame.delay());
    }

    /// Play frames in order
    pub fn light_frames<const N: usize>(&mut self, frames: &[Frame<N>]) {
        for frame in frames {
            self.light_frame(frame);
        }
    }

    /// Play every queued frame, releasing each once played
    pub fn play_queue<const FRAMES: usize, const N: usize>(
        &mut self,
        queue: &mut FrameQueue<FRAMES, N>,
    ) {
        while let Some(frame) = queue.pop() {
            self.light_frame(&frame);
        }
    }
}
