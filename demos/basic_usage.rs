// ============================================================================
// Basic Usage Example
// ============================================================================

use bigfix::prelude::*;

fn main() -> Result<(), BigError> {
    println!("=== Bigfix Example ===\n");

    // Decimal fractions that float arithmetic cannot hold exactly.
    let a = BigDecimal::new("0.1", 10)?;
    let b = BigDecimal::new("0.2", 10)?;
    println!("0.1 + 0.2 = {}", a.add(&b)?);

    // Operands are coerced to the receiver's accuracy.
    let price = BigDecimal::new("149.95", 10)?;
    let total = price.mul(3)?;
    println!("149.95 * 3 = {}", total);
    println!("total / 3  = {}", total.div(3)?);

    // Division truncates at the receiver's accuracy.
    let third = BigDecimal::new("10", 25)?.div(3)?;
    println!("\n10 / 3 at 25 digits   = {}", third);
    println!("rendered to 4 digits  = {}", third.to_fixed(4));

    // Square roots keep the accuracy of their input.
    let root = BigDecimal::new(2, 40)?.sqrt()?;
    println!("\nsqrt(2) at 40 digits  = {}", root);
    println!("squared back          = {}", root.mul(&root)?);

    // Snapping to grids.
    let v = BigDecimal::new("1.38", 2)?;
    println!("\n1.38 floored to 0.25  = {}", v.floor_by("0.25")?);
    println!("1.38 rounded to 0.25  = {}", v.round_by("0.25")?);

    // Uniform samples in [0, 1) from the OS entropy source.
    println!("\nrandom at 30 digits   = {}", BigDecimal::random(30)?);
    println!("random at 30 digits   = {}", BigDecimal::random(30)?);

    // Huge integers are exact at any accuracy.
    let huge = BigDecimal::new("9999999999999999999999999999", 1)?;
    println!("\nhuge + 1              = {}", huge.add(1)?);

    Ok(())
}
