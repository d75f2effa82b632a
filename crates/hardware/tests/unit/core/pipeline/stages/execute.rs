//! EX stage tests.

use vr4300_core::core::cpu::Ports;
use vr4300_core::core::pipeline::stages::{StageOutcome, ex_stage};
use vr4300_core::core::pipeline::{
    BusRequest, BusRequestKind, DcWbLatch, ExDcLatch, Resume, RfExLatch, Stage,
};
use vr4300_core::core::units::segment::SegmentTable;
use vr4300_core::isa::InstructionSet;

use crate::common::builder::instruction::*;
use crate::common::builder::pipeline_state::{ProcessorBuilder, header};
use crate::common::isa::MipsSubset;
use crate::common::mocks::bus::MockMemoryBus;

fn decoded(iw: u32, pc: u64) -> RfExLatch {
    RfExLatch {
        opcode: MipsSubset.decode(iw),
        iw,
        common: header(pc),
        ..RfExLatch::default()
    }
}

fn run(cpu: &mut vr4300_core::Vr4300) -> StageOutcome {
    let mut bus = MockMemoryBus::new();
    let mut ports = Ports {
        bus: &mut bus,
        segments: &SegmentTable,
        isa: &MipsSubset,
    };
    ex_stage(cpu, &mut ports)
}

#[test]
fn dispatch_fills_exdc() {
    let mut cpu = ProcessorBuilder::new()
        .reg(1, 10)
        .rfex(decoded(addiu(3, 1, 5), 0x40))
        .build();

    assert_eq!(run(&mut cpu), StageOutcome::Continue);
    let exdc = cpu.pipeline.exdc;
    assert_eq!(exdc.common, header(0x40));
    assert_eq!(exdc.dest, 3);
    assert_eq!(exdc.result, 15);
    assert_eq!(cpu.regs.read(3), 0, "EX never commits");
}

#[test]
fn operands_are_forwarded_from_dcwb() {
    let mut cpu = ProcessorBuilder::new()
        .reg(1, 10)
        .rfex(decoded(addiu(3, 1, 5), 0x40))
        .dcwb(DcWbLatch {
            dest: 1,
            result: 100,
            common: header(0x3C),
        })
        .build();

    let _ = run(&mut cpu);
    assert_eq!(cpu.pipeline.exdc.result, 105);
    assert_eq!(cpu.regs.read(1), 10);
}

#[test]
fn pending_load_into_source_interlocks() {
    let mut cpu = ProcessorBuilder::new()
        .rfex(decoded(addu(3, 1, 0), 0x40))
        .exdc(ExDcLatch {
            dest: 1,
            result: 0x77,
            request: BusRequest::read(0x1000, 4, true),
            ..ExDcLatch::default()
        })
        .dcwb(DcWbLatch {
            dest: 1,
            result: 0x1234,
            common: header(0x3C),
        })
        .build();

    assert_eq!(run(&mut cpu), StageOutcome::Aborted);
    let pipeline = &cpu.pipeline;
    assert_eq!(pipeline.resume, Resume::At(Stage::Ex));
    assert_eq!(pipeline.exdc.request.kind, BusRequestKind::None);
    assert_eq!(pipeline.exdc.result, 0x77, "opcode was not dispatched");
    assert_eq!(cpu.stats.load_interlocks, 1);

    assert_eq!(run(&mut cpu), StageOutcome::Continue);
    assert_eq!(cpu.pipeline.exdc.result, 0x1234);
}

#[test]
fn unused_source_does_not_interlock() {
    let mut cpu = ProcessorBuilder::new()
        .rfex(decoded(lui(1, 0x10), 0x40))
        .exdc(ExDcLatch {
            request: BusRequest::read(0x1000, 4, true),
            ..ExDcLatch::default()
        })
        .dcwb(DcWbLatch {
            dest: 1,
            result: 0,
            common: header(0x3C),
        })
        .build();

    assert_eq!(run(&mut cpu), StageOutcome::Continue);
    assert_eq!(cpu.pipeline.exdc.result, 0x10_0000);
}

#[test]
fn nop_leaves_exdc_inert() {
    let mut cpu = ProcessorBuilder::new()
        .rfex(decoded(nop(), 0x40))
        .exdc(ExDcLatch {
            dest: 9,
            request: BusRequest::write(0x1000, 1, 0xFF, 1),
            ..ExDcLatch::default()
        })
        .build();

    assert_eq!(run(&mut cpu), StageOutcome::Continue);
    let exdc = cpu.pipeline.exdc;
    assert_eq!(exdc.dest, 0);
    assert!(!exdc.request.is_pending());
}

#[test]
fn trace_logging_does_not_change_execution() {
    crate::common::harness::init_tracing();
    let mut cpu = ProcessorBuilder::new()
        .reg(1, 10)
        .rfex(decoded(addiu(3, 1, 5), 0x40))
        .build();
    cpu.trace_instructions = true;

    assert_eq!(run(&mut cpu), StageOutcome::Continue);
    assert_eq!(cpu.pipeline.exdc.result, 15);
}
