// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_money::prelude::*;

fn main() -> AmountResult<()> {
    println!("=== Exact Money Example ===\n");

    // The classic binary float failure case
    let naive = 0.1_f64 + 0.2_f64;
    let exact = Amount::new(0.1)?.checked_add(0.2)?;
    println!("naive f64:   0.1 + 0.2 = {naive}");
    println!("exact-money: 0.1 + 0.2 = {}\n", exact.value());

    // Mixed operands: amounts, numbers and strings coerce uniformly
    let subtotal: Amount = "25.9".parse()?;
    let discounted = subtotal.checked_sub(6.475)?;
    println!("25.9 - 6.475 = {} (full precision)", discounted.value());
    println!("display:       {} (rounded to cents)\n", discounted);

    // Percentage helpers ride on the same engine
    let net = Amount::new(249.99)?;
    let gross = net.checked_add_percent(19)?;
    println!("net {net} + 19% VAT = {gross}");
    println!("3 decimal places:   {}\n", gross.format(3));

    // The range guard refuses results that would lose precision
    println!("=== Range Guard ===");
    let big = Amount::new(9_007_199_256.0)?;
    match big.checked_add(1.0) {
        Ok(sum) => println!("unexpected: {sum}"),
        Err(err) => println!("{big} + 1 -> error: {err}"),
    }

    // Parse failures surface in the signature, not as fallback values
    println!("\n=== Parse Guard ===");
    match "randomString".parse::<Amount>() {
        Ok(amount) => println!("unexpected: {amount}"),
        Err(err) => println!("\"randomString\" -> error: {err}"),
    }

    Ok(())
}
