// ============================================================================
// Basic Usage Example
// ============================================================================

use exchange_numeric::prelude::*;

fn main() -> NumericResult<()> {
    #[cfg(feature = "logging")]
    exchange_numeric::utils::init_logging();

    println!("=== Exchange Numeric Example ===\n");

    // Market metadata as an adapter would have parsed it
    let market = MarketScales::new()
        .with_price_scale(4)
        .with_value_scale(8)
        .with_ratio_scale(8);
    let converter = ScaleConverter::default();

    println!("Market scales: {:?}\n", market);

    // Fit the order to the market's precision first
    let tick = converter.tick_size(Some(&market), ScaleField::Price)?;
    let fitted = price_to_precision(Some("27123.45678"), tick.as_deref())?;
    println!("Price fitted to tick {:?}: {:?}\n", tick, fitted);

    // Outgoing order
    println!("Placing order...");
    let price_ep = converter.to_price(Some("27123.45678"), Some(&market))?;
    let size_ev = converter.to_amount(Some("0.25"), Some(&market))?;
    println!("  priceEp: {:?} (excess digit truncated)", price_ep);
    println!("  sizeEv:  {:?}", size_ev);

    // Incoming fill
    println!("\nParsing fill...");
    let price = converter.from_price(price_ep.as_deref(), Some(&market))?;
    let amount = converter.from_amount(size_ev.as_deref(), Some(&market))?;
    let fee_rate = converter.from_ratio(Some("-25000"), Some(&market))?;
    println!("  price:    {:?}", price);
    println!("  amount:   {:?}", amount);
    println!("  fee rate: {:?}", fee_rate);

    let cost = string_math::mul(price.as_deref(), amount.as_deref())?;
    let rebate = string_math::mul(cost.as_deref(), fee_rate.as_deref())?;
    println!("  cost:     {:?}", cost);
    println!("  rebate:   {:?}", rebate);

    // Market precision derived from scales
    println!("\nPrecision:");
    for field in ScaleField::ALL {
        println!("  {:<10} tick {:?}", field.wire_name(), converter.tick_size(Some(&market), field)?);
    }

    // Unknown propagation and strict mode
    println!("\nMissing data...");
    let spot = MarketScales::new().with_price_scale(2);
    println!(
        "  permissive ratio on spot: {:?}",
        converter.from_ratio(Some("1"), Some(&spot))?
    );
    println!(
        "  strict ratio on spot:     {:?}",
        ScaleConverter::strict().from_ratio(Some("1"), Some(&spot))
    );
    println!(
        "  compare with unknown:     {:?}",
        string_math::lt(None, Some("1"))?
    );

    // Division is bounded and truncated
    println!("\nDivision:");
    println!("  10 / 3 = {:?}", string_math::div(Some("10"), Some("3"))?);
    println!("  1 / 0  = {:?}", string_math::div(Some("1"), Some("0")));

    Ok(())
}
