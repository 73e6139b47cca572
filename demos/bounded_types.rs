//! Bounded Types Example
//!
//! Declares a few bounded types and walks through construction, parsing,
//! arithmetic, gated construction and capacity limits.
//!
//! Run with: cargo run --example bounded_types
//! Add `--features tracing` to see declaration and rejection events.

use std::sync::LazyLock;

use boundkit::{
    bounded_integer, bounded_string, IntegerRange, OptionalBoundInteger, Percentage, PrivateKey,
    StringShape,
};

bounded_integer! {
    /// Volume knob position.
    pub Volume(VolumeBounds) { min: 0, max: 11 }
}

bounded_string! {
    /// Three-letter airport code.
    pub Airport(AirportBounds) { min_length: 3, max_length: 3, pattern: "[A-Z]*" }
}

static INVITE_KEY: LazyLock<PrivateKey> = LazyLock::new(PrivateKey::new);

bounded_string! {
    /// Invitation code, only issued by [`invite`].
    pub Invite(InviteBounds) { min_length: 8, max_length: 8, key: &*INVITE_KEY }
}

fn invite(n: u32) -> boundkit::Result<Invite> {
    Invite::with_key(format!("INV{:05}", n), &INVITE_KEY)
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    println!("=== Bounded Types Example ===\n");

    integers();
    strings();
    gated();
    limits();
    runtime_bounds();
}

fn integers() {
    println!("--- Integers ---\n");

    let volume = Volume::new(7).unwrap();
    println!("Volume::new(7): {:?}", volume);
    println!("Volume::new(12): {}", Volume::new(12).unwrap_err());
    println!("Volume::parse(\"3\"): {:?}", Volume::parse("3"));
    println!("padded: [{:>4}]", volume);

    println!("volume + 4: {:?}", volume + 4);
    println!("volume + 5: {}", (volume + 5).unwrap_err());
    println!("-volume: {}", (-volume).unwrap_err());
    println!("Percentage::new(50) * 2: {:?}", Percentage::new(50).unwrap() * 2);

    println!();
}

fn strings() {
    println!("--- Strings ---\n");

    let lhr = Airport::new("LHR").unwrap();
    println!("Airport::new(\"LHR\"): {:?}", lhr);
    println!("length: {}, pattern: {}", lhr.length(), Airport::pattern());
    println!("Airport::new(\"lhr\"): {}", Airport::new("lhr").unwrap_err());
    println!("Airport::new(\"LHRX\"): {}", Airport::new("LHRX").unwrap_err());

    println!();
}

fn gated() {
    println!("--- Gated Construction ---\n");

    println!("invite(42): {:?}", invite(42));
    println!("Invite::new(..): {}", Invite::new("INV00042").unwrap_err());

    let forged = PrivateKey::new();
    println!(
        "Invite::with_key(.., forged): {}",
        Invite::with_key("INV00042", &forged).unwrap_err()
    );

    println!();
}

fn limits() {
    println!("--- Capacity Limits ---\n");

    let per_user = OptionalBoundInteger::of(10).unwrap();
    let per_team = OptionalBoundInteger::of_unbounded();

    println!("per_user: {}, per_team: {}", per_user, per_team);
    println!("stricter: {}", per_user.min(per_team));
    println!("combined: {}", per_user + per_team);
    println!("per_user + 5: {:?}", per_user + 5);
    println!("per_team.int_value(): {}", per_team.int_value().unwrap_err());

    let total: Option<OptionalBoundInteger> = [3, 4, 5]
        .into_iter()
        .map(|n| OptionalBoundInteger::of(n).unwrap())
        .sum();
    println!("sum of 3, 4, 5: {:?}", total);

    println!();
}

fn runtime_bounds() {
    println!("--- Runtime Bounds ---\n");

    // Limits that only become known at startup.
    let range = IntegerRange::new(1, 64).unwrap();
    println!("range.check(\"workers\", 100): {}", range.check("workers", 100).unwrap_err());
    println!("IntegerRange::new(5, 1): {}", IntegerRange::new(5, 1).unwrap_err());

    let shape = StringShape::new(1, 16, "[a-z][a-z0-9-]*").unwrap();
    println!("shape.check(\"host\", \"db-1\"): {:?}", shape.check("host", "db-1"));
    println!("StringShape::new(.., \"(\"): {}", StringShape::new(0, 1, "(").unwrap_err());
}
