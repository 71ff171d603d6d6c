// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#[derive(Debug)]
#[allow(dead_code)]
enum Shape {
    Point,
    Pair(i32, i32),
    Labeled { name: String, size: u32 },
}

crate::simple_display! {
    Shape {
        Point => "point",
        Pair(..) => "pair",
        Labeled { .. } => "labeled",
    }
}

#[yare::parameterized(
    unit_variant   = { Shape::Point, "point" },
    tuple_variant  = { Shape::Pair(1, 2), "pair" },
    struct_variant = { Shape::Labeled { name: "x".into(), size: 3 }, "labeled" },
)]
fn simple_display_matches_every_variant_shape(shape: Shape, expected: &str) {
    assert_eq!(shape.to_string(), expected);
}

#[derive(Debug, Default, PartialEq)]
struct Toggles {
    first: bool,
    second: bool,
}

impl Toggles {
    crate::flag_setters! { first, second }
}

#[test]
fn flag_setters_chain() {
    let toggles = Toggles::default().second(true);
    assert_eq!(toggles, Toggles { first: false, second: true });
    assert!(toggles.first(true).first(false).second);
}
