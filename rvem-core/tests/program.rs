//! End-to-end tests driving whole program images through the public API,
//! the same way the command line driver does.

use rvem_core::cpu::{Cpu, CpuEvent};
use rvem_core::mem::io::ConsolePort;
use rvem_core::mem::ram::Memory;
use rvem_core::mem::Bus;

use std::io::Write;
use std::sync::{Arc, Mutex};

const ROM_BASE: u32 = 0x0000_0000;
const ROM_SIZE: usize = 0x80;
const RAM_BASE: u32 = 0x8000_0000;
const RAM_SIZE: usize = 0x1000;
const CONSOLE_ADDR: u32 = 0x100;

#[derive(Clone)]
struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn build_machine(program: &[u32]) -> (Cpu, Arc<Mutex<Vec<u8>>>) {
    let mut image = Vec::new();
    for word in program {
        image.extend_from_slice(&word.to_le_bytes());
    }

    let mut rom = Memory::new(ROM_BASE, ROM_SIZE);
    rom.load_image(&image).unwrap();

    let sink = Arc::new(Mutex::new(Vec::new()));
    let port = ConsolePort::with_output(CONSOLE_ADDR, Box::new(SharedSink(sink.clone())));

    let mut bus = Bus::new();
    bus.add(Box::new(rom));
    bus.add(Box::new(Memory::new(RAM_BASE, RAM_SIZE)));
    bus.add(Box::new(port));

    let mut cpu = Cpu::new(bus, RAM_BASE + RAM_SIZE as u32);
    cpu.init().unwrap();
    (cpu, sink)
}

/// The driving loop as the binary runs it: fetch, check the end-of-program
/// sentinel, advance, execute, then poll the core's state.
fn run(cpu: &mut Cpu) -> CpuEvent {
    loop {
        let word = cpu.fetch().expect("fetch faulted");
        if word == 0 {
            return CpuEvent::Retired;
        }
        cpu.advance_pc();
        match cpu.execute(word).expect("execution faulted") {
            CpuEvent::Retired => {}
            event => return event,
        }
        if cpu.pc() == 0 {
            return CpuEvent::Retired;
        }
    }
}

#[test]
fn store_byte_to_console_port() {
    // addi x5, x0, 7 ; sb x5, 0x100(x0)
    let program = [0x0070_0293, 0x1050_0023];
    let (mut cpu, sink) = build_machine(&program);

    run(&mut cpu);

    assert_eq!(vec![0x07], *sink.lock().unwrap());
    assert_eq!(7, cpu.read_register(5).unwrap());
    assert_eq!(8, cpu.pc());

    let dump = cpu.dump_registers();
    assert!(dump.starts_with("PC 00000008 REG"), "dump was: {}", dump);
}

#[test]
fn stack_pointer_starts_at_the_top_of_ram() {
    let (cpu, _sink) = build_machine(&[]);
    assert_eq!(RAM_BASE + RAM_SIZE as u32, cpu.read_register(2).unwrap());
}

#[test]
fn countdown_loop_emits_three_characters() {
    // addi x5, x0, 3       ; counter
    // addi x6, x0, 65      ; 'A'
    // sb   x6, 0x100(x0)
    // addi x5, x5, -1
    // bne  x5, x0, -8
    // ecall
    let program = [
        0x0030_0293,
        0x0410_0313,
        0x1060_0023,
        0xFFF2_8293,
        0xFE02_9CE3,
        0x0000_0073,
    ];
    let (mut cpu, sink) = build_machine(&program);

    let event = run(&mut cpu);

    assert_eq!(CpuEvent::Ecall, event);
    assert_eq!(b"AAA".to_vec(), *sink.lock().unwrap());
    assert_eq!(0, cpu.read_register(5).unwrap());
    assert_eq!(24, cpu.pc());
}

#[test]
fn ram_holds_data_across_instructions() {
    // lui x6, 0x80000 ; addi x7, x0, 42 ; sw x7, 16(x6) ; lw x8, 16(x6)
    let program = [0x8000_0337, 0x02A0_0393, 0x0073_2823, 0x0103_2403];
    let (mut cpu, _sink) = build_machine(&program);

    run(&mut cpu);

    assert_eq!(42, cpu.read_register(8).unwrap());
    assert_eq!(16, cpu.pc());
}
