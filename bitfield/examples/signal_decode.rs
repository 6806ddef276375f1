use bitfield::{BitFieldError, get_bit_field, nth_byte, set_bit_field};

fn main() {
    println!("=== Bit Field Examples ===\n");

    // Example 1: Building and reading a payload
    let _ = example_build_payload();

    // Example 2: Little-endian source data
    let _ = example_little_endian();

    // Example 3: Rejected descriptors
    example_invalid_range();
}

fn example_build_payload() -> Result<(), BitFieldError> {
    println!("Example 1: Packing three signals into one payload");

    let mut payload = 0u64;
    set_bit_field(&mut payload, 1, 0, 1)?; // ignition on
    set_bit_field(&mut payload, 42, 14, 6)?; // gear ratio index
    set_bit_field(&mut payload, 0x0BB8, 32, 16)?; // engine speed, 3000 rpm

    println!("  Payload: {:#018x}", payload);
    println!("  Ignition:     {}", get_bit_field(payload, 0, 1, true)?);
    println!("  Ratio index:  {}", get_bit_field(payload, 14, 6, true)?);
    println!("  Engine speed: {}", get_bit_field(payload, 32, 16, true)?);

    print!("  Bytes:");
    for n in 0..8 {
        print!(" {:02X}", nth_byte(payload, n)?);
    }
    println!("\n");

    Ok(())
}

fn example_little_endian() -> Result<(), BitFieldError> {
    println!("Example 2: Reading a buffer stored least significant byte first");

    let raw = u64::from_le_bytes([0xDE, 0xAD, 0xBE, 0xEF, 0, 0, 0, 0]);
    println!("  As loaded:   {:#018x}", raw);
    println!("  First word:  {:#06x}", get_bit_field(raw, 0, 16, false)?);
    println!("  Second word: {:#06x}", get_bit_field(raw, 16, 16, false)?);
    println!();

    Ok(())
}

fn example_invalid_range() {
    println!("Example 3: Fields that do not fit are rejected");

    match get_bit_field(0, 60, 8, true) {
        Ok(v) => println!("  unexpected value {}", v),
        Err(e) => println!("  error: {}", e),
    }
    match nth_byte(0, 8) {
        Ok(v) => println!("  unexpected byte {}", v),
        Err(e) => println!("  error: {}", e),
    }
}
