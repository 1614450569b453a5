//! Headturn Firmware for RP2040
//!
//! Two execution contexts:
//! - an interrupt executor (SWI_IRQ_1) running the tick, edge and
//!   conversion tasks, which own all control decisions
//! - the foreground thread-mode loop stepping the drive bus

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::InterruptExecutor;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use {defmt_rtt as _, panic_probe as _};

mod board;
mod channels;
mod drive_loop;
mod tasks;

use board::Board;

static EXECUTOR_CONTROL: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_CONTROL.on_interrupt()
}

#[entry]
fn main() -> ! {
    info!("Headturn firmware starting...");

    let p = embassy_rp::init(Default::default());
    let board = Board::new(p);
    info!("Peripherals initialized");

    // Control context preempts the foreground loop
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_CONTROL.start(interrupt::SWI_IRQ_1);

    spawner.spawn(tasks::tick_task(board.led)).unwrap();
    spawner.spawn(tasks::edge_task(board.comparator)).unwrap();
    spawner
        .spawn(tasks::conversion_task(board.adc, board.receiver_a, board.receiver_b))
        .unwrap();
    info!("Control tasks spawned");

    drive_loop::run(board.drive)
}
