#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use gaugehub_core::error::ClientCode;
use gaugehub_server::registry::MetricRegistry;

fn registry() -> MetricRegistry {
    MetricRegistry::new("src")
}

#[test]
fn create_twice_keeps_first_value() {
    let reg = registry();
    reg.create("cpu_usage", 3.0).unwrap();

    let err = reg.create("cpu_usage", 9.0).unwrap_err();
    assert_eq!(err.client_code(), ClientCode::AlreadyExists);
    assert_eq!(reg.get("cpu_usage").unwrap(), 3.0);
    assert_eq!(reg.len().unwrap(), 1);
}

#[test]
fn create_defaults_are_visible_immediately() {
    let reg = registry();
    reg.create("cpu_usage", 0.0).unwrap();
    assert_eq!(reg.get("cpu_usage").unwrap(), 0.0);

    let all = reg.list().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "cpu_usage");
}

#[test]
fn absent_names_are_not_found() {
    let reg = registry();
    assert_eq!(reg.get("ghost").unwrap_err().client_code(), ClientCode::NotFound);
    assert_eq!(reg.update("ghost", "1").unwrap_err().client_code(), ClientCode::NotFound);
    assert_eq!(reg.set("ghost", 1.0).unwrap_err().client_code(), ClientCode::NotFound);
    assert_eq!(reg.delete("ghost").unwrap_err().client_code(), ClientCode::NotFound);
    assert!(reg.is_empty().unwrap());
}

#[test]
fn update_then_get() {
    let reg = registry();
    reg.create("cpu_usage", 0.0).unwrap();
    assert_eq!(reg.update("cpu_usage", "42.5").unwrap(), 42.5);
    assert_eq!(reg.get("cpu_usage").unwrap(), 42.5);
}

#[test]
fn invalid_update_leaves_value_unchanged() {
    let reg = registry();
    reg.create("cpu_usage", 0.0).unwrap();
    reg.update("cpu_usage", "42.5").unwrap();

    for raw in ["not-a-number", "", "NaN", "inf", "4 2"] {
        let err = reg.update("cpu_usage", raw).unwrap_err();
        assert_eq!(err.client_code(), ClientCode::InvalidValue, "raw={raw:?}");
        assert_eq!(reg.get("cpu_usage").unwrap(), 42.5, "raw={raw:?}");
    }
}

#[test]
fn invalid_value_wins_over_missing_name() {
    let reg = registry();
    let err = reg.update("ghost", "abc").unwrap_err();
    assert_eq!(err.client_code(), ClientCode::InvalidValue);
}

#[test]
fn non_finite_values_are_rejected() {
    let reg = registry();
    assert_eq!(
        reg.create("cpu_usage", f64::NAN).unwrap_err().client_code(),
        ClientCode::InvalidValue
    );
    assert!(reg.is_empty().unwrap());

    reg.create("cpu_usage", 1.0).unwrap();
    assert!(reg.set("cpu_usage", f64::INFINITY).is_err());
    assert_eq!(reg.get("cpu_usage").unwrap(), 1.0);
}

#[test]
fn invalid_names_are_rejected_without_mutation() {
    let reg = registry();
    for name in ["", "1abc", "cpu-usage", "gaugehub_api_requests_total"] {
        let err = reg.create(name, 0.0).unwrap_err();
        assert_eq!(err.client_code(), ClientCode::InvalidName, "name={name:?}");
    }
    assert!(reg.is_empty().unwrap());
}

#[test]
fn names_are_case_sensitive() {
    let reg = registry();
    reg.create("cpu", 1.0).unwrap();
    reg.create("CPU", 2.0).unwrap();
    assert_eq!(reg.get("cpu").unwrap(), 1.0);
    assert_eq!(reg.get("CPU").unwrap(), 2.0);
}

#[test]
fn name_is_reusable_after_delete() {
    let reg = registry();
    reg.create("cpu_usage", 5.0).unwrap();
    reg.delete("cpu_usage").unwrap();
    assert_eq!(reg.get("cpu_usage").unwrap_err().client_code(), ClientCode::NotFound);

    reg.create("cpu_usage", 0.0).unwrap();
    assert_eq!(reg.get("cpu_usage").unwrap(), 0.0);
}

#[test]
fn origin_is_fixed() {
    let reg = MetricRegistry::new("lab");
    assert_eq!(reg.origin(), "lab");
}

#[test]
fn concurrent_create_same_name_has_one_winner() {
    const N: usize = 32;
    let reg = Arc::new(registry());

    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..N)
            .map(|i| {
                let reg = Arc::clone(&reg);
                s.spawn(move || reg.create("cpu_usage", i as f64))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let ok = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(e) if e.client_code() == ClientCode::AlreadyExists))
        .count();
    assert_eq!(ok, 1);
    assert_eq!(conflicts, N - 1);
    assert_eq!(reg.len().unwrap(), 1);
}

#[test]
fn list_never_observes_torn_state() {
    // Writers churn metric_i with value i; every listed entry must carry its own index.
    const WRITERS: usize = 4;
    const ROUNDS: usize = 500;
    let reg = Arc::new(registry());
    let done = Arc::new(AtomicBool::new(false));

    thread::scope(|s| {
        let mut writers = Vec::with_capacity(WRITERS);
        for w in 0..WRITERS {
            let reg = Arc::clone(&reg);
            writers.push(s.spawn(move || {
                for r in 0..ROUNDS {
                    let i = w * ROUNDS + r;
                    let name = format!("metric_{i}");
                    reg.create(&name, i as f64).unwrap();
                    if r % 2 == 0 {
                        reg.delete(&name).unwrap();
                    }
                }
            }));
        }

        let reader_reg = Arc::clone(&reg);
        let reader_done = Arc::clone(&done);
        let reader = s.spawn(move || {
            let mut snapshots = 0usize;
            while !reader_done.load(Ordering::Relaxed) || snapshots == 0 {
                for sample in reader_reg.list().unwrap() {
                    let idx: usize = sample.name.trim_start_matches("metric_").parse().unwrap();
                    assert_eq!(sample.value, idx as f64, "torn entry {}", sample.name);
                }
                snapshots += 1;
            }
            snapshots
        });

        for w in writers {
            w.join().unwrap();
        }
        done.store(true, Ordering::Relaxed);
        assert!(reader.join().unwrap() > 0);
    });

    assert_eq!(reg.len().unwrap(), WRITERS * ROUNDS / 2);
}
