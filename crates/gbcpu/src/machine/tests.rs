use super::*;
use crate::cpu::{Bus, Clock, Cycles, Flags, Pair, Reg8};

#[test]
fn default_config_is_power_on_at_zero() {
    let config = MachineConfig::default();
    assert_eq!(config.boot, BootState::PowerOn);
    assert_eq!(config.origin, 0x0000);

    let config = MachineConfig::builder().origin(0x0100).build();
    assert_eq!(config.boot, BootState::PowerOn);
    assert_eq!(config.origin, 0x0100);
}

#[test]
fn new_machine_starts_zeroed_and_stopped() {
    let mut machine = Machine::default();

    assert!(machine.cpu.is_stopped());
    assert!(!machine.cpu.halted);
    assert_eq!(machine.cpu.regs.af(), 0);
    assert_eq!(machine.cpu.regs.pc, 0);
    assert_eq!(machine.bus.read8(0xC000), 0);
    assert_eq!(machine.bus.memory.len(), crate::MEMORY_SIZE);
}

#[test]
fn reset_clears_cpu_and_memory_together() {
    let mut machine = Machine::default();
    machine.cpu.regs.set_hl(0xC000);
    machine.cpu.regs.a = 0x42;
    machine.cpu.ld_pair_r(&mut machine.bus, Pair::HL, Reg8::A);
    machine.cpu.halt();
    assert_eq!(machine.bus.memory[0xC000], 0x42);

    machine.reset();

    assert_eq!(machine.bus.memory[0xC000], 0);
    assert_eq!(machine.cpu.regs.hl(), 0);
    assert_eq!(machine.cpu.regs.a, 0);
    assert!(!machine.cpu.halted);
    assert!(machine.cpu.is_stopped());
    assert_eq!(machine.cpu.last, Cycles::default());
    assert_eq!(machine.cpu.clock, Clock::default());
}

#[test]
fn dmg_post_boot_preset() {
    let config = MachineConfig::builder()
        .boot(BootState::DmgPostBoot)
        .build();
    let mut machine = Machine::new(config);

    let regs = &machine.cpu.regs;
    assert_eq!(regs.af(), 0x01B0);
    assert_eq!(regs.f, Flags::Z | Flags::H | Flags::C);
    assert_eq!(regs.bc(), 0x0013);
    assert_eq!(regs.de(), 0x00D8);
    assert_eq!(regs.hl(), 0x014D);
    assert_eq!(regs.sp, 0xFFFE);
    assert_eq!(regs.pc, 0x0100);
    assert!(!machine.cpu.is_stopped());

    // Reset re-applies the preset.
    machine.cpu.regs.a = 0;
    machine.cpu.regs.pc = 0x1234;
    machine.reset();
    assert_eq!(machine.cpu.regs.a, 0x01);
    assert_eq!(machine.cpu.regs.pc, 0x0100);
}

#[test]
fn load_program_places_image_at_origin() {
    let config = MachineConfig::builder().origin(0x0100).build();
    let mut machine = Machine::new(config);

    machine
        .load_program(&[0x3E, 0x05, 0x06, 0x0A])
        .expect("program fits");

    assert_eq!(&machine.bus.memory[0x0100..0x0104], &[0x3E, 0x05, 0x06, 0x0A]);
    assert_eq!(machine.cpu.regs.pc, 0x0100);

    // LD A,5 ; LD B,10 ; ADD A,B driven by hand, skipping each opcode
    // byte the way a dispatcher would after decoding it.
    machine.cpu.regs.pc += 1;
    machine.cpu.ld_r_d8(&mut machine.bus, Reg8::A);
    machine.cpu.regs.pc += 1;
    machine.cpu.ld_r_d8(&mut machine.bus, Reg8::B);
    machine.cpu.add_r(Reg8::B, false);
    assert_eq!(machine.cpu.regs.a, 15);
    assert_eq!(machine.cpu.regs.pc, 0x0104);
    assert_eq!(machine.cpu.clock, Clock { m: 5, t: 20 });
}

#[test]
fn load_program_up_to_last_byte() {
    let config = MachineConfig::builder().origin(0xFFFE).build();
    let mut machine = Machine::new(config);

    machine.load_program(&[0xAA, 0xBB]).expect("fits exactly");

    assert_eq!(machine.bus.memory[0xFFFE], 0xAA);
    assert_eq!(machine.bus.memory[0xFFFF], 0xBB);
}

#[test]
fn load_program_rejects_oversized_image() {
    let config = MachineConfig::builder().origin(0xFFFE).build();
    let mut machine = Machine::new(config);
    machine.cpu.regs.pc = 0x1234;

    let err = machine.load_program(&[1, 2, 3]).unwrap_err();

    assert!(err.to_string().contains("does not fit"));
    assert_eq!(machine.cpu.regs.pc, 0x1234);
    assert_eq!(machine.bus.memory[0xFFFE], 0);
}

#[test]
fn flat_memory_load_bounds() {
    let mut memory = FlatMemory::default();

    memory.load(0x8000, &[1, 2, 3]).expect("fits");
    assert_eq!(memory.read16(0x8000), 0x0201);
    assert_eq!(memory.read8(0x8002), 3);

    assert!(memory.load(0xFFFF, &[1, 2]).is_err());
    assert!(memory.load(0xFFFF, &[9]).is_ok());
    assert_eq!(memory.memory[0xFFFF], 9);
}

#[test]
fn stack_round_trip_through_flat_memory() {
    let mut machine = Machine::default();
    machine.cpu.regs.sp = 0xFFFE;
    machine.cpu.regs.set_bc(0xBEEF);

    machine.cpu.push(&mut machine.bus, Pair::BC);
    assert_eq!(machine.bus.read16(0xFFFC), 0xBEEF);

    machine.cpu.pop(&mut machine.bus, Pair::DE);
    assert_eq!(machine.cpu.regs.de(), 0xBEEF);
    assert_eq!(machine.cpu.regs.sp, 0xFFFE);
}
