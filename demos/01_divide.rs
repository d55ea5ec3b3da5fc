use waybill::{ErrorTag, Result};

#[derive(Debug)]
struct SqrtCause {
    value: f64,
}

struct DivisorIsZero;
impl ErrorTag for DivisorIsZero {
    const TAG: &'static str = "DIVISOR_IS_ZERO";
    type Cause = ();
}

struct NegativeResult;
impl ErrorTag for NegativeResult {
    const TAG: &'static str = "NEGATIVE_RESULT";
    type Cause = SqrtCause;
}

fn divide(a: f64, b: f64) -> Result<f64, SqrtCause> {
    if b == 0.0 {
        return Err(DivisorIsZero::err().with_message("Cannot divide by zero"));
    }
    let quotient = a / b;
    if quotient < 0.0 {
        return Err(NegativeResult::err_with(SqrtCause { value: quotient })
            .with_message("Cannot calculate square root of negative number"));
    }
    Ok(quotient.sqrt())
}

fn main() {
    for (a, b) in [(16.0, 4.0), (5.0, 0.0), (-10.0, 1.0)] {
        match divide(a, b) {
            Ok(root) => println!("divide({a}, {b}) = {root}"),
            Err(e) if e.is::<NegativeResult>() => {
                let value = e.narrow::<NegativeResult>().map(|c| c.value);
                println!("divide({a}, {b}) -> {e} [cause value: {value:?}]");
            }
            Err(e) => println!("divide({a}, {b}) -> {e}"),
        }
    }
}
