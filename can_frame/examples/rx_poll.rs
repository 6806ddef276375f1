use std::collections::VecDeque;
use std::sync::Arc;
use std::thread;

use can_frame::{CanMessage, Endianness, FrameSource, ReceiveFlag, SignalSpec, poll};

/// Stand-in for a bus controller's receive FIFO.
struct SimulatedBus {
    fifo: VecDeque<CanMessage>,
}

impl FrameSource for SimulatedBus {
    fn receive(&mut self) -> Option<CanMessage> {
        self.fifo.pop_front()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Receive Path Example ===\n");

    let signals = [
        SignalSpec::new("engine_speed", 0, 16, Endianness::Big)?,
        SignalSpec::new("coolant_temp", 16, 8, Endianness::Big)?,
        // little-endian signals count bit positions from the last byte
        SignalSpec::new("fuel_level", 0, 16, Endianness::Little)?,
    ];

    let mut bus = SimulatedBus {
        fifo: [
            CanMessage::from_parts(0x201, &[0x0B, 0xB8, 0x5A, 0, 0, 0, 0x2C, 0x01])?,
            CanMessage::from_parts(0x201, &[0x0F, 0xA0, 0x5F])?,
        ]
        .into_iter()
        .collect(),
    };

    let flag = Arc::new(ReceiveFlag::new());

    for frame in 0..3 {
        // the "interrupt" fires for the first two frames only
        if frame < 2 {
            let isr_flag = Arc::clone(&flag);
            thread::spawn(move || isr_flag.notify()).join().map_err(|_| "isr thread panicked")?;
        }

        match poll(&mut bus, &flag) {
            Some(msg) => {
                println!("Frame {:#05x}:", msg.id);
                for (name, value) in msg.decode_all(&signals) {
                    println!("  {:<14} {}", name, value);
                }
            }
            None => println!("No frame pending"),
        }
    }

    Ok(())
}
