extern crate clap;

use crossbeam_channel::bounded;
use ctrlc;
use env_logger;
use log::{debug, error};

use rvem_core::consts::memmap;
use rvem_core::cpu::{Cpu, CpuEvent};
use rvem_core::mem::io::ConsolePort;
use rvem_core::mem::ram::Memory;
use rvem_core::mem::Bus;

use std::fs::File;
use std::io::Read;

fn fetch_config<'a>() -> clap::ArgMatches<'a> {
    let about = "RVEM is a RV32I RISC-V instruction set emulator written entirely in Rust";
    let c = clap::App::new("Rust RISC-V Emulator (RVEM)")
        .version("0.1")
        .about(about)
        .arg(
            clap::Arg::with_name("filename")
                .index(1)
                .required(true)
                .help("Flat binary of raw machine code to load into ROM"),
        )
        .arg(
            clap::Arg::with_name("delay")
                .long("delay")
                .takes_value(true)
                .help("Pacing delay between instructions, in milliseconds"),
        )
        .arg(
            clap::Arg::with_name("sp")
                .long("sp")
                .takes_value(true)
                .help("Initial stack pointer in hex (defaults to the top of RAM)"),
        );
    c.get_matches()
}

fn load_program_file(filename: &str) -> Option<Vec<u8>> {
    // Check to make sure we are able to open the file. If we are not
    // able to, throw up the issue up to the caller to know we failed
    // at opening the file.
    let fp = File::open(filename);
    let mut f = match fp {
        Ok(f) => f,
        _ => {
            error!("Unable to open file: {:?}", filename);
            return None;
        }
    };

    let mut image = Vec::new();
    match f.read_to_end(&mut image) {
        Ok(_len) => Some(image),
        Err(x) => {
            error!("Unable to read file {:?}: {:?}", filename, x);
            None
        }
    }
}

///
/// Build the default machine: ROM at the bottom of the address space with
/// the program image installed, RAM higher up, and the console port far
/// outside both. The regions must not overlap.
///
fn build_machine(image: &[u8], sp: u32) -> Option<Cpu> {
    let mut rom = Memory::new(memmap::ROM_BASE, memmap::ROM_SIZE);
    match rom.load_image(image) {
        Ok(()) => {}
        Err(x) => {
            error!("Program image does not fit in ROM: {}", x);
            return None;
        }
    }

    let mut bus = Bus::new();
    bus.add(Box::new(rom));
    bus.add(Box::new(Memory::new(memmap::RAM_BASE, memmap::RAM_SIZE)));
    bus.add(Box::new(ConsolePort::new(memmap::CONSOLE_ADDR)));

    let mut cpu = Cpu::new(bus, sp);
    match cpu.init() {
        Ok(()) => Some(cpu),
        Err(x) => {
            error!("Unable to initialize the CPU: {}", x);
            None
        }
    }
}

fn main() {
    env_logger::init();

    // Register for a ctrlc handler which will push a signal to the
    // application. If the signal is pushed multiple times without being
    // consumed, force close the application.
    let (ctrlc_tx, ctrlc_rx) = bounded(1);
    let res = ctrlc::set_handler(move || {
        if ctrlc_tx.is_full() == true {
            std::process::exit(-1);
        }
        let _res = ctrlc_tx.send(());
    });

    match res {
        Err(x) => {
            error!("Unable to register signal handler. {:?}.", x);
            return;
        }
        _ => {}
    }

    let matches = fetch_config();
    let filename = matches.value_of("filename").unwrap();
    let delay = matches
        .value_of("delay")
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);
    let sp = matches
        .value_of("sp")
        .and_then(|v| u32::from_str_radix(v.trim_start_matches("0x"), 16).ok())
        .unwrap_or(memmap::RAM_BASE + memmap::RAM_SIZE as u32);

    let image = match load_program_file(filename) {
        Some(image) => image,
        None => {
            std::process::exit(1);
        }
    };

    let mut cpu = match build_machine(&image, sp) {
        Some(cpu) => cpu,
        None => {
            std::process::exit(1);
        }
    };

    debug!("{}", cpu.dump_registers());
    loop {
        // Check to see if we received a ctrlc signal. If we have, we need
        // to exit out of the loop and exit the application.
        if ctrlc_rx.len() > 0 {
            break;
        }

        let word = match cpu.fetch() {
            Ok(word) => word,
            Err(x) => {
                error!("Fetch fault: {}", x);
                std::process::exit(1);
            }
        };

        // The all-zero word is the end-of-program sentinel
        if word == 0 {
            break;
        }

        cpu.advance_pc();
        match cpu.execute(word) {
            Ok(CpuEvent::Retired) => {}
            Ok(CpuEvent::Ecall) | Ok(CpuEvent::Ebreak) => {
                break;
            }
            Err(x) => {
                error!("Execution fault: {}", x);
                std::process::exit(1);
            }
        }

        debug!("{}", cpu.dump_registers());
        if cpu.pc() == 0 {
            break;
        }

        if delay > 0 {
            std::thread::sleep(std::time::Duration::from_millis(delay));
        }
    }
}
