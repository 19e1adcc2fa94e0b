// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bundled demonstration suites.
//!
//! The default set passes. `--with-failures` adds tests that exercise each
//! failure path: assertion, validation, error, panic and unexpected pass.

use trial::report::Reporter;
use trial::{
    Harness, RangeTester, TestItem, ensure_eq, ensure_err, ensure_false, ensure_gt, ensure_true,
};

/// Build the demo harness.
pub fn harness(with_failures: bool) -> Harness {
    let mut harness = Harness::new();

    harness.suite("Math", |s| {
        s.test("addition", || {
            ensure_eq!(2 + 2, 4);
            ensure_eq!(-3 + 3, 0);
            Ok(())
        });
        s.test("checked_division", || {
            ensure_eq!(10_i32.checked_div(2), Some(5));
            ensure_eq!(1_i32.checked_div(0), None);
            Ok(())
        });
        s.test("parse_integer", || {
            let value: i64 = "1024".parse()?;
            ensure_gt!(value, 1000);
            ensure_err!("ten".parse::<i64>());
            Ok(())
        });
        s.skip("matrix_inverse", "matrix type not implemented", || Ok(()));
        s.disabled("prime_sieve_large", || {
            let count = (2..5_000_000_u64).filter(|n| is_prime(*n)).count();
            ensure_gt!(count, 0);
            Ok(())
        });
    });

    harness.suite("Strings", |s| {
        s.test("concat", || {
            let joined = ["ab", "cd"].concat();
            ensure_eq!(joined, "abcd");
            Ok(())
        });
        s.test("uppercase", || {
            ensure_eq!("trial".to_uppercase(), "TRIAL");
            Ok(())
        });
        s.test("unicode_length", || {
            let text = "测试中文";
            ensure_eq!(text.chars().count(), 4);
            ensure_eq!(text.len(), 12);
            Ok(())
        });
        s.test_with_precondition(
            "trim",
            || !"  padded  ".is_empty(),
            || {
                ensure_eq!("  padded  ".trim(), "padded");
                ensure_false!("padded".starts_with(' '));
                Ok(())
            },
        );
        s.skip("locale_collation", "needs ICU data", || Ok(()));
    });

    if with_failures {
        register_failures(&mut harness);
    }
    harness
}

#[allow(clippy::panic)]
fn register_failures(harness: &mut Harness) {
    harness.suite("Failing", |s| {
        s.test("assertion", || {
            ensure_eq!(1 + 1, 3);
            Ok(())
        });
        s.test_with_precondition("precondition", || false, || Ok(()));
        s.test("error", || {
            let _: u8 = "300".parse()?;
            Ok(())
        });
        s.test("panic", || panic!("index out of range"));
        s.test("condition", || {
            ensure_true!("trial".contains('z'));
            Ok(())
        });
    });
}

fn is_prime(n: u64) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

#[derive(Debug)]
struct Point {
    x: i32,
    y: i32,
}

impl Point {
    fn is_valid(&self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

/// Run each range demo in turn. Returns true when every run passed.
pub fn run_ranges(reporter: &mut dyn Reporter, with_failures: bool) -> trial::Result<bool> {
    let mut all_passed = true;

    let mut basic = RangeTester::new();
    basic
        .add_named("value1".to_string(), "test1", "Basic test 1")
        .add("value2".to_string())
        .add_item(
            TestItem::named("value3".to_string(), "test3").with_description("Manual test item"),
        )
        .for_each(|v| !v.is_empty());
    all_passed &= basic.run_with(reporter)?;

    let mut numbers = RangeTester::new();
    numbers
        .add_all([1, 2, 3, 4, 5], "num")
        .add_items([
            TestItem::named(10, "test10").with_description("Special test 10"),
            TestItem::named(20, "test20").with_description("Special test 20"),
        ])
        .add_all([100, 200, 300], "")
        .for_each(|v| *v > 0);
    all_passed &= numbers.run_with(reporter)?;

    let mut signs = RangeTester::new();
    signs
        .add_named(-1.0_f64, "negative", "Should fail")
        .expect_fail("negative")
        .add_items([
            TestItem::named(1.0, "positive1").with_description("Should pass"),
            TestItem::named(-2.0, "negative2").with_description("Should fail").expect_fail(),
            TestItem::named(0.0, "zero").with_description("Should pass"),
        ])
        .expect_fail_if(|item| item.value < 0.0)
        .for_each(|v| *v >= 0.0);
    if with_failures {
        signs
            .add_named(5.0, "unexpected_pass", "Marked to fail but passes")
            .expect_fail("unexpected_pass");
    }
    all_passed &= signs.run_with(reporter)?;

    let mut points = RangeTester::new();
    points
        .add_named(Point { x: 1, y: 1 }, "valid_point", "Should pass")
        .add_named(Point { x: -1, y: 1 }, "invalid_point", "Should fail")
        .expect_fail("invalid_point")
        .add_all([Point { x: 2, y: 2 }, Point { x: 3, y: 3 }, Point { x: 4, y: 4 }], "point")
        .add_items([
            TestItem::named(Point { x: 5, y: 5 }, "point5")
                .with_description("Valid point at (5,5)"),
            TestItem::named(Point { x: -5, y: 5 }, "point_neg")
                .with_description("Invalid point")
                .expect_fail(),
        ])
        .for_each(Point::is_valid);
    all_passed &= points.run_with(reporter)?;

    let mut strings = RangeTester::new();
    strings
        .add("hello")
        .add("world")
        .add("test")
        .add_all(["one", "two", "three"], "")
        .add_named("测试中文", "chinese", "Chinese characters test")
        .add_named("!@#$%^", "special", "Special characters test")
        .try_for_each(|s| {
            if s.chars().any(char::is_control) {
                anyhow::bail!("control character in {:?}", s);
            }
            Ok(!s.is_empty())
        });
    all_passed &= strings.run_with(reporter)?;

    Ok(all_passed)
}
