use anyhow::{Context, Result};

use gbcpu::{BootState, Machine, MachineConfig, Pair, Reg16, Reg8};

const USAGE: &str = "Usage: cycle_table [--csv]";

/// Operand bytes placed at PC before each handler runs.
const OPERANDS: [u8; 2] = [0x34, 0x12];

type Handler = fn(&mut Machine);

const HANDLERS: &[(&str, Handler)] = &[
    ("NOP", |m: &mut Machine| m.cpu.nop()),
    ("HALT", |m: &mut Machine| m.cpu.halt()),
    ("LD B,A", |m: &mut Machine| m.cpu.ld_r_r(Reg8::B, Reg8::A)),
    ("LD A,d8", |m: &mut Machine| m.cpu.ld_r_d8(&mut m.bus, Reg8::A)),
    ("LD BC,d16", |m: &mut Machine| {
        m.cpu.ld_rr_d16(&mut m.bus, Reg8::C, Reg8::B)
    }),
    ("LD SP,d16", |m: &mut Machine| {
        m.cpu.ld_r16_d16(&mut m.bus, Reg16::SP)
    }),
    ("LD A,(HL)", |m: &mut Machine| m.cpu.ld_a_hl(&mut m.bus)),
    ("LD B,(DE)", |m: &mut Machine| {
        m.cpu.ld_r_pair(&mut m.bus, Reg8::B, Pair::DE)
    }),
    ("LD (HL),A", |m: &mut Machine| {
        m.cpu.ld_pair_r(&mut m.bus, Pair::HL, Reg8::A)
    }),
    ("LD (HL),d8", |m: &mut Machine| {
        m.cpu.ld_pair_d8(&mut m.bus, Pair::HL)
    }),
    ("LD (a16),A", |m: &mut Machine| {
        m.cpu.ld_a16_r(&mut m.bus, Reg8::A)
    }),
    ("LD (a16),SP", |m: &mut Machine| {
        m.cpu.ld_a16_r16(&mut m.bus, Reg16::SP)
    }),
    ("LD A,(a16)", |m: &mut Machine| {
        m.cpu.ld_r_a16(&mut m.bus, Reg8::A)
    }),
    ("LDH (a8),A", |m: &mut Machine| {
        m.cpu.ldh_a8_r(&mut m.bus, Reg8::A)
    }),
    ("LDH A,(a8)", |m: &mut Machine| {
        m.cpu.ldh_r_a8(&mut m.bus, Reg8::A)
    }),
    ("LD (C),A", |m: &mut Machine| {
        m.cpu.ldh_reg_r(&mut m.bus, Reg8::C, Reg8::A)
    }),
    ("LD A,(C)", |m: &mut Machine| {
        m.cpu.ldh_r_reg(&mut m.bus, Reg8::A, Reg8::C)
    }),
    ("LD SP,HL", |m: &mut Machine| {
        m.cpu.ld_r16_pair(Reg16::SP, Pair::HL)
    }),
    ("LD HL,SP+e8", |m: &mut Machine| {
        m.cpu.ld_pair_sp_e8(&mut m.bus, Pair::HL)
    }),
    ("PUSH BC", |m: &mut Machine| m.cpu.push(&mut m.bus, Pair::BC)),
    ("POP BC", |m: &mut Machine| m.cpu.pop(&mut m.bus, Pair::BC)),
    ("ADD A,B", |m: &mut Machine| m.cpu.add_r(Reg8::B, false)),
    ("ADC A,(HL)", |m: &mut Machine| {
        m.cpu.add_pair(&mut m.bus, Pair::HL, true)
    }),
    ("ADD A,d8", |m: &mut Machine| m.cpu.add_d8(&mut m.bus, false)),
    ("SUB B", |m: &mut Machine| m.cpu.sub_r(Reg8::B, false)),
    ("SBC A,(HL)", |m: &mut Machine| {
        m.cpu.sub_pair(&mut m.bus, Pair::HL, true)
    }),
    ("SUB d8", |m: &mut Machine| m.cpu.sub_d8(&mut m.bus, false)),
    ("AND B", |m: &mut Machine| m.cpu.and_r(Reg8::B)),
    ("AND (HL)", |m: &mut Machine| {
        m.cpu.and_pair(&mut m.bus, Pair::HL)
    }),
    ("AND d8", |m: &mut Machine| m.cpu.and_d8(&mut m.bus)),
    ("OR B", |m: &mut Machine| m.cpu.or_r(Reg8::B)),
    ("OR (HL)", |m: &mut Machine| m.cpu.or_pair(&mut m.bus, Pair::HL)),
    ("OR d8", |m: &mut Machine| m.cpu.or_d8(&mut m.bus)),
    ("XOR B", |m: &mut Machine| m.cpu.xor_r(Reg8::B)),
    ("XOR (HL)", |m: &mut Machine| {
        m.cpu.xor_pair(&mut m.bus, Pair::HL)
    }),
    ("XOR d8", |m: &mut Machine| m.cpu.xor_d8(&mut m.bus)),
    ("CP B", |m: &mut Machine| m.cpu.cp_r(Reg8::B)),
    ("CP (HL)", |m: &mut Machine| m.cpu.cp_pair(&mut m.bus, Pair::HL)),
    ("CP d8", |m: &mut Machine| m.cpu.cp_d8(&mut m.bus)),
    ("ADD HL,BC", |m: &mut Machine| {
        m.cpu.add16_pair(Pair::HL, Pair::BC)
    }),
    ("ADD SP,e8", |m: &mut Machine| m.cpu.add_sp_e8(&mut m.bus)),
    ("INC B", |m: &mut Machine| m.cpu.inc_r(Reg8::B)),
    ("INC (HL)", |m: &mut Machine| {
        m.cpu.inc_pair_mem(&mut m.bus, Pair::HL)
    }),
    ("INC BC", |m: &mut Machine| m.cpu.inc16(Reg16::BC)),
    ("DEC B", |m: &mut Machine| m.cpu.dec_r(Reg8::B)),
    ("DEC (HL)", |m: &mut Machine| {
        m.cpu.dec_pair_mem(&mut m.bus, Pair::HL)
    }),
    ("DEC BC", |m: &mut Machine| m.cpu.dec16(Reg16::BC)),
];

fn main() -> Result<()> {
    env_logger::init();

    let mut csv = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--csv" => csv = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument '{other}'.");
                eprintln!("{USAGE}");
                std::process::exit(2);
            }
        }
    }

    let config = MachineConfig::builder()
        .boot(BootState::DmgPostBoot)
        .origin(0x0100)
        .build();

    if csv {
        println!("instruction,m,t");
    } else {
        println!("{:<14} {:>2} {:>3}", "instruction", "m", "t");
    }

    for &(name, handler) in HANDLERS {
        let mut machine = Machine::new(config.clone());
        machine
            .load_program(&OPERANDS)
            .with_context(|| format!("failed to set up operands for {name}"))?;

        handler(&mut machine);

        let cost = machine.cpu.last;
        if csv {
            println!("{name},{},{}", cost.m, cost.t);
        } else {
            println!("{name:<14} {:>2} {:>3}", cost.m, cost.t);
        }
    }

    Ok(())
}
