#![no_main]
use arbitrary::Arbitrary;
use arith_engines::{DivRequest, Divider, Engine, MulRequest, Multiplier};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
pub enum Signal {
    Step { start: bool, lhs: i32, rhs: i32 },
    Reset,
}

// Arbitrary start/reset sequences: whenever `done` rises the outputs must
// match the operands latched by the accepting step.
fuzz_target!(|signals: Vec<Signal>| {
    let mut divider = Divider::new();
    let mut multiplier = Multiplier::new();
    let mut div_latched = None;
    let mut mul_latched = None;
    let mut mul_start_prev = false;

    for signal in signals {
        match signal {
            Signal::Reset => {
                divider.reset();
                multiplier.reset();
                div_latched = None;
                mul_latched = None;
                mul_start_prev = false;
            }
            Signal::Step { start, lhs, rhs } => {
                if start && divider.is_idle() {
                    div_latched = Some((lhs, rhs));
                }
                if start && !mul_start_prev && multiplier.is_idle() {
                    mul_latched = Some((lhs, rhs));
                }
                mul_start_prev = start;

                divider.step(start, DivRequest::new(lhs, rhs));
                multiplier.step(start, MulRequest::new(lhs, rhs));

                if divider.done() {
                    let (dividend, divisor) = div_latched.take().unwrap();
                    let out = divider.output();
                    if divisor == 0 {
                        assert!(out.division_by_zero());
                    } else {
                        assert_eq!(out.quotient(), dividend.wrapping_div(divisor));
                        assert_eq!(out.remainder(), dividend.wrapping_rem(divisor));
                    }
                }

                if multiplier.done() {
                    let (a, b) = mul_latched.take().unwrap();
                    assert_eq!(multiplier.output().product(), i64::from(a) * i64::from(b));
                }
            }
        }
    }
});
