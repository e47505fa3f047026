//! Beltline Headless Simulation Harness
//!
//! Validates shift logic and catalog data without a frontend.
//! Runs entirely in-process — no rendering, no audio, no input devices.
//!
//! Usage:
//!   cargo run -p beltline-simtest
//!   cargo run -p beltline-simtest -- --verbose

use beltline_core::catalog::ShiftCatalog;
use beltline_core::engine::{InputEvent, ShiftEngine};
use beltline_core::presentation::NullPresentation;
use beltline_logic::choice::{ChoiceEffect, ChoiceState, SelectDir};
use beltline_logic::classify::Classification;
use beltline_logic::clock::ShiftClock;
use beltline_logic::constants::{INSPECTION_POINT, JAM_DISTANCE, QUEUE_OFFSET};

// ── Shift catalog (same JSON a frontend would ship) ─────────────────────
const CATALOG_JSON: &str = include_str!("../../../data/shift_catalog.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Beltline Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Shift catalog validation
    results.extend(validate_catalog(verbose));

    // 2. Clock display sweep
    results.extend(validate_clock(verbose));

    // 3. Classification rule sweep
    results.extend(validate_classification(verbose));

    // 4. Queue + jam scenario
    results.extend(validate_queue(verbose));

    // 5. Modal choice machine sweep
    results.extend(validate_choice_machine(verbose));

    // 6. End-to-end spawn cadence
    results.extend(validate_end_to_end(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Shift catalog ────────────────────────────────────────────────────

fn validate_catalog(_verbose: bool) -> Vec<TestResult> {
    println!("--- Shift Catalog ---");
    let mut results = Vec::new();

    let catalog = match ShiftCatalog::from_json(CATALOG_JSON) {
        Ok(c) => c,
        Err(e) => {
            results.push(check("catalog_parse", false, format!("{}", e)));
            return results;
        }
    };
    results.push(check(
        "catalog_parse",
        true,
        format!("{} shifts", catalog.len()),
    ));

    for (i, shift) in catalog.shifts.iter().enumerate() {
        results.push(check(
            &format!("shift_{}_durations", i),
            shift.duration_secs > 0.0 && shift.spawn_interval_secs > 0.0,
            format!(
                "{}: duration {}s, interval {}s",
                shift.name, shift.duration_secs, shift.spawn_interval_secs
            ),
        ));
        let overrides_ok = shift.dialogue_overrides.iter().all(|o| o.ordinal >= 1);
        results.push(check(
            &format!("shift_{}_overrides", i),
            overrides_ok,
            format!("{} scripted lines", shift.dialogue_overrides.len()),
        ));
    }

    results
}

// ── 2. Clock display ────────────────────────────────────────────────────

fn validate_clock(verbose: bool) -> Vec<TestResult> {
    println!("--- Shift Clock ---");
    let mut results = Vec::new();

    let cases: &[(f32, &str)] = &[
        (0.0, "12 AM"),
        (0.2, "1 AM"),
        (0.5, "3 AM"),
        (0.9, "5 AM"),
        (1.0, "6 AM"),
    ];
    for &(progress, expected) in cases {
        let mut clock = ShiftClock::new(100.0);
        clock.tick(progress * 100.0);
        let label = clock.display_label();
        if verbose {
            println!("  progress {:.1} -> {}", progress, label);
        }
        results.push(check(
            &format!("clock_at_{:.0}pct", progress * 100.0),
            label == expected,
            format!("{} (expected {})", label, expected),
        ));
    }

    // Expiry fires exactly once under repeated ticking.
    let mut clock = ShiftClock::new(10.0);
    let mut fired = 0;
    for _ in 0..100 {
        if clock.tick(0.25) == beltline_logic::clock::ClockTick::JustExpired {
            fired += 1;
        }
    }
    results.push(check(
        "clock_single_expiry",
        fired == 1 && clock.has_expired(),
        format!("JustExpired reported {} times", fired),
    ));

    results
}

// ── 3. Classification rules ─────────────────────────────────────────────

fn validate_classification(verbose: bool) -> Vec<TestResult> {
    println!("--- Classification ---");
    let mut results = Vec::new();
    let catalog = ShiftCatalog::from_json(CATALOG_JSON).expect("validated above");

    let shift0 = &catalog.get(0).unwrap().rule;
    let expected0 = [
        Classification::Good,
        Classification::Good,
        Classification::Evil,
        Classification::Good,
        Classification::Good,
    ];
    let actual0: Vec<Classification> = (1..=5).map(|n| shift0.classify(n)).collect();
    results.push(check(
        "shift0_third_is_evil",
        actual0 == expected0,
        format!("{:?}", actual0),
    ));

    let shift1 = &catalog.get(1).unwrap().rule;
    let odd_evil = (1..=10).all(|n| {
        let c = shift1.classify(n);
        if verbose {
            println!("  shift1 ordinal {} -> {:?}", n, c);
        }
        (n % 2 == 1) == (c == Classification::Evil)
    });
    results.push(check(
        "shift1_odds_are_evil",
        odd_evil,
        "ordinals 1..=10".into(),
    ));

    let shift2 = &catalog.get(2).unwrap().rule;
    let all_good = (1..=10).all(|n| shift2.classify(n) == Classification::Good);
    results.push(check("shift2_all_good", all_good, "ordinals 1..=10".into()));

    results
}

// ── 4. Queue + jam scenario ─────────────────────────────────────────────

fn validate_queue(verbose: bool) -> Vec<TestResult> {
    println!("--- Queue & Jam ---");
    let mut results = Vec::new();
    let mut sink = NullPresentation;

    let mut engine = ShiftEngine::new(ShiftCatalog::from_json(CATALOG_JSON).unwrap());
    engine.start_shift(0, &mut sink);

    // Run with no interactions until the queue backs up and jams.
    let mut jam_tick = None;
    for tick in 0..1800 {
        engine.tick(0.1, &mut sink);
        if engine.run().map(|r| r.jammed).unwrap_or(false) {
            jam_tick = Some(tick);
            break;
        }
    }
    results.push(check(
        "belt_jams_when_full",
        jam_tick.is_some(),
        format!("jammed at tick {:?}", jam_tick),
    ));

    let depth_at_jam = engine.run().map(|r| r.queue_depth).unwrap_or(0);
    if verbose {
        println!("  queue depth at jam: {}", depth_at_jam);
    }
    // Slots whose target clears the jam threshold, plus the one spawn that
    // settles inside the entry area and trips detection.
    let jam_depth = ((INSPECTION_POINT - JAM_DISTANCE) / QUEUE_OFFSET) as u32 + 2;
    results.push(check(
        "jam_depth_matches_geometry",
        depth_at_jam == jam_depth,
        format!("depth {} (geometry predicts {})", depth_at_jam, jam_depth),
    ));

    // frontmost is the item at the inspection point.
    let front_ok = engine
        .frontmost()
        .and_then(|f| engine.items().into_iter().find(|i| i.id == f))
        .map(|i| i.position == INSPECTION_POINT)
        .unwrap_or(false);
    results.push(check(
        "frontmost_at_inspection_point",
        front_ok,
        "greatest-position live item".into(),
    ));

    // Dismiss everything; the jam must clear and spawning must resume.
    let spawned_before = engine.run().unwrap().spawn_count;
    let mut guard = 0;
    while engine.run().map(|r| r.jammed).unwrap_or(false) && guard < 32 {
        if let Some(front) = engine.frontmost() {
            engine.handle_input(InputEvent::InteractWithItem(front), &mut sink);
            engine.handle_input(InputEvent::Confirm, &mut sink);
        }
        engine.tick(0.1, &mut sink);
        guard += 1;
    }
    engine.tick(0.1, &mut sink);
    let resumed = engine.run().map(|r| r.spawn_count > spawned_before).unwrap_or(false);
    results.push(check(
        "jam_clears_after_dismissals",
        resumed,
        format!("spawn count {} -> {:?}", spawned_before, engine.run().map(|r| r.spawn_count)),
    ));

    results
}

// ── 5. Modal choice machine ─────────────────────────────────────────────

fn validate_choice_machine(_verbose: bool) -> Vec<TestResult> {
    println!("--- Choice Machine ---");
    let mut results = Vec::new();

    // Exclusivity: no second modal from any open state.
    let item = ChoiceState::Idle.open_item(1, true).unwrap();
    let exit = ChoiceState::Idle.open_exit().unwrap();
    results.push(check(
        "modal_exclusivity",
        item.open_exit().is_none()
            && item.open_item(2, true).is_none()
            && exit.open_item(1, true).is_none()
            && exit.open_exit().is_none(),
        "second modal rejected from ItemChoice and ExitChoice".into(),
    ));

    // Blocked items never yield a dismissal effect.
    let blocked = ChoiceState::Idle.open_item(5, false).unwrap();
    let (_, confirm_effect) = blocked.confirm();
    let (_, cancel_effect) = blocked.cancel();
    results.push(check(
        "blocked_item_is_inert",
        confirm_effect == ChoiceEffect::Close && cancel_effect == ChoiceEffect::Close,
        format!("confirm {:?}, cancel {:?}", confirm_effect, cancel_effect),
    ));

    // Toggle sweep: two options, no wraparound.
    let mut toggled = ChoiceState::Idle.open_item(1, true).unwrap();
    let sweep_ok = !toggled.move_select(SelectDir::Left)
        && toggled.move_select(SelectDir::Right)
        && !toggled.move_select(SelectDir::Right)
        && toggled.move_select(SelectDir::Left);
    results.push(check("toggle_no_wraparound", sweep_ok, "L/R sweep".into()));

    // Exit defaults to Yes and confirming it ends the shift.
    let (_, effect) = ChoiceState::Idle.open_exit().unwrap().confirm();
    results.push(check(
        "exit_confirm_default_yes",
        effect == ChoiceEffect::BeginShiftEnd,
        format!("{:?}", effect),
    ));

    results
}

// ── 6. End-to-end spawn cadence ─────────────────────────────────────────

fn validate_end_to_end(verbose: bool) -> Vec<TestResult> {
    println!("--- End To End ---");
    let mut results = Vec::new();
    let mut sink = NullPresentation;

    // Shift 0: duration 180s, interval 10s. With the spawn-immediately
    // rule, spawns land at ~0s, 10s, and 20s: 3 items by t=25.
    let mut engine = ShiftEngine::new(ShiftCatalog::from_json(CATALOG_JSON).unwrap());
    engine.start_shift(0, &mut sink);
    for _ in 0..250 {
        engine.tick(0.1, &mut sink);
    }
    let spawned = engine.run().map(|r| r.spawn_count).unwrap_or(0);
    if verbose {
        println!("  t=25s: {} items spawned", spawned);
    }
    results.push(check(
        "three_spawns_by_25s",
        spawned == 3,
        format!("{} spawns (expected 3)", spawned),
    ));

    // Untouched shift expires into the end sequence exactly once.
    for _ in 0..2000 {
        engine.tick(0.1, &mut sink);
    }
    results.push(check(
        "clock_expiry_freezes_run",
        engine.is_ending() && engine.run().is_none(),
        "run detached at 6 AM".into(),
    ));

    results
}
