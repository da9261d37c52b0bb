use probes_decoder::arm::{
    arm_actions, arm_decode_insn, simulator_name, ArmAction, ARM_DECODE_TABLES,
};
use probes_decoder::{
    ArmReturn, InsnVerdict, ProbeAction, ProbeInsn, ProbeRegs, SlotState, ARM_BX_LR, ARM_MOV_PC_LR,
    PSR_Z_BIT,
};

fn emulate(_insn: u32, _asi: &ProbeInsn, _regs: &mut ProbeRegs) {}

fn decode(insn: u32) -> (InsnVerdict, ProbeInsn) {
    let actions = arm_actions(emulate);
    let mut asi = ProbeInsn::default();
    let verdict = arm_decode_insn(insn, &mut asi, &actions);
    (verdict, asi)
}

fn assert_simulated(insn: u32, action: ArmAction) {
    let (verdict, asi) = decode(insn);
    assert_eq!(verdict, InsnVerdict::GoodNoSlot, "{insn:#010x}");
    assert!(asi.has_action(action.idx()), "{insn:#010x}: {:?}", asi.action);
    assert!(simulator_name(action).is_some());
    assert_eq!(asi.state, SlotState::MatchedNoSlot);
}

fn assert_emulated(insn: u32, slot_insn: u32) {
    let (verdict, asi) = decode(insn);
    assert_eq!(verdict, InsnVerdict::Good, "{insn:#010x}");
    let action = asi.action.and_then(ArmAction::from_idx);
    assert!(action.is_some_and(ArmAction::is_emulated), "{insn:#010x}: {action:?}");
    assert_eq!(asi.slot.words(), &[slot_insn, ARM_MOV_PC_LR], "{insn:#010x}");
}

fn assert_rejected(insn: u32) {
    let (verdict, asi) = decode(insn);
    assert_eq!(verdict, InsnVerdict::Rejected, "{insn:#010x}");
    assert!(asi.handler.is_none(), "{insn:#010x}");
    assert_eq!(asi.action, None, "{insn:#010x}");
    assert_eq!(asi.state, SlotState::Rejected);
}

#[test]
fn test_tables_validate() {
    let actions = arm_actions(emulate);
    ARM_DECODE_TABLES.validate(&actions).unwrap();
}

#[test]
fn test_validate_catches_short_action_table() {
    let actions = arm_actions(emulate);
    let short: Vec<ProbeAction> = actions[..ArmAction::Branch.idx()].to_vec();
    assert!(ARM_DECODE_TABLES.validate(&short).is_err());
}

#[test]
fn test_simulated_instructions() {
    // b, bl, beq
    assert_simulated(0xea00_0000, ArmAction::Branch);
    assert_simulated(0xeb00_0000, ArmAction::Branch);
    assert_simulated(0x0a00_0010, ArmAction::Branch);
    // blx .+8
    assert_simulated(0xfa00_0000, ArmAction::BranchImm);
    // bx lr, blx r3
    assert_simulated(0xe12f_ff1e, ArmAction::BranchReg);
    assert_simulated(0xe12f_ff33, ArmAction::BranchReg);
    // mrs r0, cpsr
    assert_simulated(0xe10f_0000, ArmAction::Mrs);
    // mov ip, sp
    assert_simulated(0xe1a0_c00d, ArmAction::MovIpSp);
    // pld [r0], nop, wfe
    assert_simulated(0xf5d0_f000, ArmAction::PreloadImm);
    assert_simulated(0xe320_f000, ArmAction::Wfe);
    assert_simulated(0xe320_f002, ArmAction::Wfe);
}

#[test]
fn test_emulated_instructions_get_rewritten_slots() {
    // add r0, r1, r2 -> add r0, r2, r3
    assert_emulated(0xe081_0002, 0xe082_0003);
    // addne r7, r8, r9 runs unconditionally from the slot
    assert_emulated(0x1088_7009, 0xe082_0003);
    // mov pc, lr
    assert_emulated(0xe1a0_f00e, 0xe1a0_0003);
    // ldr r0, [pc, #4]
    assert_emulated(0xe59f_0004, 0xe592_0004);
    // mul r0, r1, r2
    assert_emulated(0xe000_0291, 0xe002_0193);
    // movw r4, #0x1234
    assert_emulated(0xe301_4234, 0xe301_0234);
    // sev, and yield through the or entry in front of it
    assert_emulated(0xe320_f004, 0xe320_f004);
    assert_emulated(0xe320_f001, 0xe320_f001);
    // smuad r0, r1, r2 through two chained or entries
    assert_emulated(0xe700_f211, 0xe702_f113);
}

#[test]
fn test_block_transfers() {
    // push {r4, lr}
    assert_emulated(0xe92d_4010, 0xe92b_1004);
    assert_eq!(decode(0xe92d_4010).1.action, Some(ArmAction::BlockTransfer.idx()));
    // pop {r4, pc}
    assert_emulated(0xe8bd_8010, 0xe8ba_1002);
    // stmia r0, {r0, pc}
    assert_rejected(0xe880_8001);
    // ldm with the S bit
    assert_rejected(0xe8d0_0003);
}

#[test]
fn test_rejected_instructions() {
    // svc #0
    assert_rejected(0xef00_0000);
    // mcr p15, ...
    assert_rejected(0xee01_0f10);
    // ldr r0, [pc, #4]!
    assert_rejected(0xe5bf_0004);
    // adds pc, lr, #0
    assert_rejected(0xe29e_f000);
    // mul pc, r1, r2
    assert_rejected(0xe00f_0291);
    // msr cpsr_c, r0
    assert_rejected(0xe121_f000);
    // bkpt
    assert_rejected(0xe120_0070);
    // ldrex r0, [r1]
    assert_rejected(0xe191_0f9f);
    // ldrbt r0, [r1]
    assert_rejected(0xe4f1_0000);
    // cps
    assert_rejected(0xf102_0000);
    // permanently undefined
    assert_rejected(0xe7f0_00f0);
}

#[test]
fn test_arm_return_follows_probe_configuration() {
    let actions = arm_actions(emulate);
    let mut asi = ProbeInsn::new(ArmReturn::BxLr);
    assert_eq!(arm_decode_insn(0xe081_0002, &mut asi, &actions), InsnVerdict::Good);
    assert_eq!(asi.slot.word(1), ARM_BX_LR);
}

#[test]
fn test_conditional_branch_step() {
    let (_, asi) = decode(0x0a00_0002);

    // beq .+16, not taken
    let mut regs = ProbeRegs::new(0x1000, 0);
    asi.step(0x0a00_0002, &mut regs);
    assert_eq!(regs.pc(), 0x1004);

    // taken
    let mut regs = ProbeRegs::new(0x1000, PSR_Z_BIT);
    asi.step(0x0a00_0002, &mut regs);
    assert_eq!(regs.pc(), 0x1010);
}

#[test]
fn test_decoding_reuses_probe() {
    let actions = arm_actions(emulate);
    let mut asi = ProbeInsn::default();

    assert_eq!(arm_decode_insn(0xe081_0002, &mut asi, &actions), InsnVerdict::Good);
    assert_eq!(arm_decode_insn(0xef00_0000, &mut asi, &actions), InsnVerdict::Rejected);
    assert!(asi.handler.is_none());
    assert_eq!(arm_decode_insn(0xeb00_0000, &mut asi, &actions), InsnVerdict::GoodNoSlot);
    assert!(asi.has_action(ArmAction::Branch.idx()));
}
