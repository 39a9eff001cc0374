#[cfg(test)]
mod ldst_tests {
    use crate::consts::{load, opcode, store};
    use crate::errors::EmuError;
    use crate::instr::tests::{enc_i, enc_s, init_cpu, TEST_RAM_BASE};

    #[test]
    fn word_store_load_roundtrip() {
        let program = [
            enc_s(0, 7, 6, store::SW),
            enc_i(0, 6, load::LW, 5, opcode::LOAD),
        ];
        let mut cpu = init_cpu(&program);
        cpu.write_register(6, TEST_RAM_BASE).unwrap();
        cpu.write_register(7, 0xDEAD_BEEF).unwrap();

        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(0xDEAD_BEEF, cpu.read_register(5).unwrap());
        assert_eq!(8, cpu.pc());
    }

    #[test]
    fn lb_sign_extends_and_lbu_does_not() {
        let program = [
            enc_s(0, 7, 6, store::SB),
            enc_i(0, 6, load::LB, 5, opcode::LOAD),
            enc_i(0, 6, load::LBU, 8, opcode::LOAD),
        ];
        let mut cpu = init_cpu(&program);
        cpu.write_register(6, TEST_RAM_BASE).unwrap();
        cpu.write_register(7, 0x80).unwrap();

        cpu.step().unwrap();
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(0xFFFF_FF80, cpu.read_register(5).unwrap());
        assert_eq!(0x0000_0080, cpu.read_register(8).unwrap());
    }

    #[test]
    fn lh_sign_extends_and_lhu_does_not() {
        let program = [
            enc_s(0, 7, 6, store::SH),
            enc_i(0, 6, load::LH, 5, opcode::LOAD),
            enc_i(0, 6, load::LHU, 8, opcode::LOAD),
        ];
        let mut cpu = init_cpu(&program);
        cpu.write_register(6, TEST_RAM_BASE).unwrap();
        cpu.write_register(7, 0x8001).unwrap();

        cpu.step().unwrap();
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(0xFFFF_8001, cpu.read_register(5).unwrap());
        assert_eq!(0x0000_8001, cpu.read_register(8).unwrap());
    }

    #[test]
    fn narrow_stores_only_touch_their_bytes() {
        let program = [
            enc_s(0, 7, 6, store::SW),
            enc_s(1, 8, 6, store::SB),
            enc_i(0, 6, load::LW, 5, opcode::LOAD),
        ];
        let mut cpu = init_cpu(&program);
        cpu.write_register(6, TEST_RAM_BASE).unwrap();
        cpu.write_register(7, 0xAAAA_AAAA).unwrap();
        cpu.write_register(8, 0x55).unwrap();

        cpu.step().unwrap();
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(0xAAAA_55AA, cpu.read_register(5).unwrap());
    }

    #[test]
    fn negative_offsets_address_below_the_base() {
        let program = [
            enc_s(-4, 7, 6, store::SW),
            enc_i(-4, 6, load::LW, 5, opcode::LOAD),
        ];
        let mut cpu = init_cpu(&program);
        cpu.write_register(6, TEST_RAM_BASE + 8).unwrap();
        cpu.write_register(7, 0x1234_5678).unwrap();

        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(0x1234_5678, cpu.read_register(5).unwrap());
    }

    #[test]
    fn access_outside_every_region_is_unmapped() {
        let mut cpu = init_cpu(&[enc_i(0, 6, load::LW, 5, opcode::LOAD)]);
        cpu.write_register(6, 0x5000_0000).unwrap();
        assert_eq!(
            Err(EmuError::UnmappedAddress { addr: 0x5000_0000 }),
            cpu.step()
        );
    }

    #[test]
    fn partial_word_at_region_end_is_out_of_range() {
        use crate::instr::tests::TEST_RAM_SIZE;
        let end = TEST_RAM_BASE + TEST_RAM_SIZE as u32 - 2;

        let mut cpu = init_cpu(&[enc_s(0, 7, 6, store::SW)]);
        cpu.write_register(6, end).unwrap();
        cpu.write_register(7, 1).unwrap();
        assert_eq!(Err(EmuError::OutOfRange { addr: end }), cpu.step());
    }
}
