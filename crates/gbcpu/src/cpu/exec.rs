//! Instruction handlers, grouped by family.
//!
//! Each handler runs one instruction to completion against the register
//! file and the bus, then records its cost with exactly one call to
//! `step`/`step_with`. Mapping opcode bytes to handlers is the caller's
//! job; handlers take typed register operands instead.

mod alu;
mod incdec;
mod ld;
mod stack;
mod system;
