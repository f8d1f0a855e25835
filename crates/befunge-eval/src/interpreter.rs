//! The execution engine.
//!
//! One [`Interpreter`] owns the grid, stack, pointer, and output buffer for a
//! run. Each step reads the cell under the pointer, halts on `@`, otherwise
//! executes it and advances one cell in the current direction.

use befunge_grid::{wrap, Grid};
use befunge_types::{Direction, FungeError, Position, Result, Status, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::ops::{self, Operation};
use crate::snapshot::EngineState;
use crate::stack::Stack;

/// The halt cell.
pub const HALT: char = '@';

/// The string-mode toggle.
pub const QUOTE: char = '"';

/// A Befunge execution engine.
///
/// `R` is the random source used by `?`. Tests inject a seeded or mock
/// generator; [`Interpreter::new`] seeds one from OS entropy.
#[derive(Debug, Clone)]
pub struct Interpreter<R = StdRng> {
    grid: Grid,
    stack: Stack,
    position: Position,
    direction: Direction,
    string_mode: bool,
    output: String,
    status: Status,
    steps: u64,
    rng: R,
}

impl Interpreter<StdRng> {
    /// Create an engine with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an engine whose `?` choices are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Interpreter<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Interpreter<R> {
    /// Create an engine around an explicit random source.
    ///
    /// The engine starts with a single blank cell, so [`execute`](Self::execute)
    /// works before any program is loaded.
    pub fn with_rng(rng: R) -> Self {
        Self {
            grid: Grid::default(),
            stack: Stack::new(),
            position: Position::default(),
            direction: Direction::default(),
            string_mode: false,
            output: String::new(),
            status: Status::Running,
            steps: 0,
            rng,
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Lifecycle
    // ══════════════════════════════════════════════════════════════════════

    /// Reset all run state and install `source` as the program.
    ///
    /// The random source is kept, so a seeded engine continues its sequence.
    pub fn load(&mut self, source: &str) {
        self.grid = Grid::parse(source);
        self.stack.clear();
        self.position = Position::default();
        self.direction = Direction::default();
        self.string_mode = false;
        self.output.clear();
        self.status = Status::Running;
        self.steps = 0;
        debug!(
            width = self.grid.width(),
            height = self.grid.height(),
            "program loaded"
        );
    }

    /// Load `source`, run it to the halt cell, and return its output.
    pub fn interpret(&mut self, source: &str) -> Result<String> {
        self.load(source);
        self.run().map(str::to_owned)
    }

    /// Step until the program halts. Runs forever if it never reaches `@`.
    pub fn run(&mut self) -> Result<&str> {
        while self.step()? == Status::Running {}
        debug!(
            steps = self.steps,
            output_len = self.output.len(),
            "program halted"
        );
        Ok(&self.output)
    }

    /// Perform one fetch/execute cycle.
    ///
    /// Returns [`Status::Halted`] when `@` is under the pointer; the pointer
    /// does not move past it, and further calls are no-ops.
    pub fn step(&mut self) -> Result<Status> {
        if self.status == Status::Halted {
            return Ok(Status::Halted);
        }

        let ch = self.fetch();
        if ch == HALT {
            self.status = Status::Halted;
            return Ok(Status::Halted);
        }

        trace!(
            x = self.position.x,
            y = self.position.y,
            ?ch,
            direction = %self.direction,
            "step"
        );
        if let Err(err) = self.execute(ch) {
            warn!(%err, code = %err.code(), "run aborted");
            return Err(err);
        }
        self.steps += 1;
        Ok(Status::Running)
    }

    /// Execute `ch` as if it were under the pointer, then advance once.
    ///
    /// In string mode every character except `"` is pushed as its code.
    /// `@` is not an operation: only [`step`](Self::step) halts on it, so
    /// executing it here raises UnknownOperation.
    pub fn execute(&mut self, ch: char) -> Result<()> {
        if self.string_mode && ch != QUOTE {
            self.stack.push(Value::from(u32::from(ch)));
            self.advance();
            return Ok(());
        }

        let op = Operation::decode(ch).ok_or(FungeError::UnknownOperation {
            ch,
            x: self.position.x,
            y: self.position.y,
        })?;
        self.apply(op)?;
        self.advance();
        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════
    // Pointer movement
    // ══════════════════════════════════════════════════════════════════════

    /// Normalize the pointer onto the grid and read the cell under it.
    fn fetch(&mut self) -> char {
        self.position.x = wrap(self.position.x, self.grid.width()) as i64;
        self.position.y = wrap(self.position.y, self.grid.height()) as i64;
        self.grid.read(self.position.x, self.position.y)
    }

    /// Move one cell in the current direction.
    fn advance(&mut self) {
        self.position = self.position.step(self.direction);
    }

    // ══════════════════════════════════════════════════════════════════════
    // Operations
    // ══════════════════════════════════════════════════════════════════════

    fn apply(&mut self, op: Operation) -> Result<()> {
        match op {
            Operation::PushDigit(digit) => self.stack.push(Value::from(digit)),

            Operation::Add => {
                let (a, b) = self.pop_pair();
                self.stack.push(a.wrapping_add(b));
            }
            Operation::Subtract => {
                let (a, b) = self.pop_pair();
                self.stack.push(b.wrapping_sub(a));
            }
            Operation::Multiply => {
                let (a, b) = self.pop_pair();
                self.stack.push(a.wrapping_mul(b));
            }
            Operation::Divide => {
                let (a, b) = self.pop_pair();
                self.stack.push(ops::divide(b, a));
            }
            Operation::Modulo => {
                let (a, b) = self.pop_pair();
                self.stack.push(ops::modulo(b, a));
            }
            Operation::Not => {
                let a = self.stack.pop();
                self.stack.push(Value::from(a == 0));
            }
            Operation::GreaterThan => {
                let (a, b) = self.pop_pair();
                self.stack.push(Value::from(b > a));
            }

            Operation::Go(direction) => self.direction = direction,
            Operation::GoRandom => self.direction = self.rng.gen(),
            Operation::HorizontalIf => {
                self.direction = if self.stack.pop() == 0 {
                    Direction::Right
                } else {
                    Direction::Left
                };
            }
            Operation::VerticalIf => {
                self.direction = if self.stack.pop() == 0 {
                    Direction::Down
                } else {
                    Direction::Up
                };
            }
            Operation::ToggleStringMode => self.string_mode = !self.string_mode,

            Operation::Duplicate => {
                let a = self.stack.pop();
                self.stack.push(a);
                self.stack.push(a);
            }
            Operation::Swap => {
                let (a, b) = self.pop_pair();
                self.stack.push(a);
                self.stack.push(b);
            }
            Operation::Discard => {
                self.stack.pop();
            }

            Operation::OutputInt => {
                let a = self.stack.pop();
                self.output.push_str(&a.to_string());
            }
            Operation::OutputChar => {
                let ch = to_char(self.stack.pop(), "output character")?;
                self.output.push(ch);
            }

            // The normal post-operation advance supplies the second move.
            Operation::Bridge => self.advance(),

            Operation::Put => {
                let y = self.stack.pop();
                let x = self.stack.pop();
                let ch = to_char(self.stack.pop(), "grid cell")?;
                self.grid.write(x, y, ch);
            }
            Operation::Get => {
                let y = self.stack.pop();
                let x = self.stack.pop();
                let ch = self.grid.read(x, y);
                self.stack.push(Value::from(u32::from(ch)));
            }

            Operation::Noop => {}
        }
        Ok(())
    }

    /// Pop `a` (the top) then `b`.
    fn pop_pair(&mut self) -> (Value, Value) {
        let a = self.stack.pop();
        let b = self.stack.pop();
        (a, b)
    }

    // ══════════════════════════════════════════════════════════════════════
    // State access
    // ══════════════════════════════════════════════════════════════════════

    /// Push onto the engine stack.
    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    /// Pop from the engine stack (`0` when empty).
    pub fn pop(&mut self) -> Value {
        self.stack.pop()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// The pointer position. Only normalized once the cell has been fetched.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn string_mode(&self) -> bool {
        self.string_mode
    }

    /// Output accumulated so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of cells executed since the program was loaded.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Capture the current engine state.
    pub fn snapshot(&self) -> EngineState {
        EngineState {
            grid: self.grid.rows().collect(),
            stack: self.stack.as_slice().to_vec(),
            position: self.position,
            direction: self.direction,
            string_mode: self.string_mode,
            output: self.output.clone(),
            status: self.status,
            steps: self.steps,
        }
    }
}

/// Convert a stack value to the character with that code.
///
/// Codes that are not Unicode scalar values (negative, surrogates, above
/// `char::MAX`) have no `char` and raise InvalidValue instead of being
/// truncated to some other character.
fn to_char(value: Value, context: &str) -> Result<char> {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| {
            FungeError::invalid_value(value, format!("{context} is not a character code"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn engine() -> Interpreter<StepRng> {
        Interpreter::with_rng(StepRng::new(0, 1))
    }

    #[test]
    fn test_fresh_engine_state() {
        let e = engine();
        assert_eq!(e.position(), Position::new(0, 0));
        assert_eq!(e.direction(), Direction::Right);
        assert!(!e.string_mode());
        assert_eq!(e.status(), Status::Running);
        assert_eq!(e.output(), "");
        assert_eq!(e.grid().width(), 1);
    }

    #[test]
    fn test_fetch_normalizes_position_in_place() {
        let mut e = engine();
        e.load("12\n34");
        e.position = Position::new(-1, 2);
        assert_eq!(e.fetch(), '2');
        assert_eq!(e.position(), Position::new(1, 0));
    }

    #[test]
    fn test_to_char_rejects_non_scalar_values() {
        assert_eq!(to_char(72, "x").unwrap(), 'H');
        assert!(to_char(-1, "x").is_err());
        assert!(to_char(0xD800, "x").is_err());
        assert!(to_char(Value::from(u32::MAX) + 1, "x").is_err());
    }

    #[test]
    fn test_halted_engine_stays_put() {
        let mut e = engine();
        e.load("@");
        assert_eq!(e.step().unwrap(), Status::Halted);
        assert_eq!(e.step().unwrap(), Status::Halted);
        assert_eq!(e.position(), Position::new(0, 0));
        assert_eq!(e.steps(), 0);
    }
}
