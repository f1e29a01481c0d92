use std::sync::{Arc, Mutex};
use std::thread;

use outcome_rail::config::{self, DiagnosticConfig, StackCapture};
use outcome_rail::{Error, OptionalOutcome, Outcome, UnitOutcome};

use crate::lock_config;

/// Tests run in parallel; hooks only record errors carrying the test's marker.
fn marked(identifier: &str) -> Error {
    Error::new("original message").with_identifier(identifier)
}

#[test]
fn disabled_capture_leaves_stack_trace_absent() {
    let _guard = lock_config();
    config::set_stack_capture(false);

    let failed: Outcome<i32> = Outcome::fail("plain");
    assert!(failed.error().stack_trace().is_none());
}

#[test]
fn enabled_capture_attaches_stack_trace() {
    let _guard = lock_config();
    config::set_stack_capture(true);

    let failed: Outcome<i32> = Outcome::fail("plain");
    assert!(failed.error().stack_trace().is_some_and(|t| !t.is_empty()));
}

#[test]
fn existing_stack_trace_is_never_overwritten() {
    let _guard = lock_config();
    let supplied = Error::new("x").with_stack_trace("at caller()");

    for enabled in [true, false] {
        config::set_stack_capture(enabled);
        let failed: Outcome<()> = Outcome::fail(supplied.clone());
        assert_eq!(failed.error().stack_trace(), Some("at caller()"));

        let forced: Outcome<()> = Outcome::fail_with(supplied.clone(), StackCapture::Force);
        assert_eq!(forced.error().stack_trace(), Some("at caller()"));
    }
}

#[test]
fn per_call_override_beats_global_setting() {
    let _guard = lock_config();

    config::set_stack_capture(true);
    let skipped: Outcome<()> = Outcome::fail_with("x", StackCapture::Skip);
    assert!(skipped.error().stack_trace().is_none());

    config::set_stack_capture(false);
    let forced: OptionalOutcome<()> = OptionalOutcome::fail_with("x", StackCapture::Force);
    assert!(forced.error().stack_trace().is_some());
}

#[test]
fn hook_sees_one_entry_per_outcome_type() {
    let _guard = lock_config();
    const ID: &str = "config.hook.three_types";

    let log = Arc::new(Mutex::new(Vec::<Error>::new()));
    let sink = Arc::clone(&log);
    config::set_error_replacer(|err| {
        if err.identifier() == Some(ID) {
            err.with_error_code(7)
        } else {
            err
        }
    });
    config::set_failure_hook(move |err| {
        if err.identifier() == Some(ID) {
            sink.lock().unwrap().push(err.clone());
        }
    });

    let unit: UnitOutcome = Outcome::fail(marked(ID));
    let value: Outcome<i32> = Outcome::fail(marked(ID));
    let optional: OptionalOutcome<i32> = OptionalOutcome::fail(marked(ID));

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 3);
    assert_eq!(log[0], *unit.error());
    assert_eq!(log[1], *value.error());
    assert_eq!(log[2], *optional.error());
    assert!(log.iter().all(|err| err.error_code() == Some(7)));
}

#[test]
fn combinators_do_not_rerun_the_pipeline() {
    let _guard = lock_config();
    const ID: &str = "config.hook.propagation";

    let count = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&count);
    config::set_failure_hook(move |err| {
        if err.identifier() == Some(ID) {
            *sink.lock().unwrap() += 1;
        }
    });

    let failed: Outcome<i32> = Outcome::fail(marked(ID));
    let _ = failed.map(|x| x + 1).and_then(Outcome::success).into_optional().truncate();

    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn sensitive_replacer_hides_original_message() {
    let _guard = lock_config();
    const ID: &str = "config.replacer.sensitive";

    config::set_error_replacer(|err| {
        if err.identifier() == Some(ID) {
            err.with_sensitivity(true)
        } else {
            err
        }
    });

    let outcomes = [
        Outcome::<()>::fail(marked(ID)).error().clone(),
        Outcome::<i32>::fail(marked(ID)).error().clone(),
        OptionalOutcome::<i32>::fail(marked(ID)).error().clone(),
    ];

    for err in outcomes {
        assert!(err.is_sensitive());
        assert!(!err.to_string().contains("original message"));
        assert!(!format!("{err:?}").contains("original message"));
    }
}

#[test]
fn last_hook_wins() {
    let _guard = lock_config();
    const ID: &str = "config.hook.last_wins";

    let hits = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::clone(&hits);
    let second = Arc::clone(&hits);
    config::set_failure_hook(move |err| {
        if err.identifier() == Some(ID) {
            first.lock().unwrap().push("first");
        }
    });
    config::set_failure_hook(move |err| {
        if err.identifier() == Some(ID) {
            second.lock().unwrap().push("second");
        }
    });

    let _: Outcome<()> = Outcome::fail(marked(ID));
    assert_eq!(*hits.lock().unwrap(), ["second"]);
}

#[test]
fn clearing_and_reset_remove_hooks() {
    let _guard = lock_config();
    const ID: &str = "config.hook.cleared";

    let count = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&count);
    config::set_failure_hook(move |err| {
        if err.identifier() == Some(ID) {
            *sink.lock().unwrap() += 1;
        }
    });
    config::clear_failure_hook();
    let _: Outcome<()> = Outcome::fail(marked(ID));

    config::set_stack_capture(false);
    config::reset();

    assert_eq!(*count.lock().unwrap(), 0);
    assert!(config::stack_capture_enabled());
}

#[test]
fn snapshot_and_install_restore_settings() {
    let _guard = lock_config();
    const ID: &str = "config.snapshot";

    config::set_stack_capture(false);
    config::set_error_replacer(|err| {
        if err.identifier() == Some(ID) {
            err.with_title("Replaced")
        } else {
            err
        }
    });
    let saved = config::snapshot();

    config::reset();
    assert!(Outcome::<()>::fail(marked(ID)).error().title() != "Replaced");

    config::install(saved);
    assert!(!config::stack_capture_enabled());
    assert_eq!(Outcome::<()>::fail(marked(ID)).error().title(), "Replaced");
}

#[test]
fn injected_config_ignores_global_settings() {
    let _guard = lock_config();
    const ID: &str = "config.injected";

    let global_hits = Arc::new(Mutex::new(0));
    let global_sink = Arc::clone(&global_hits);
    config::set_failure_hook(move |err| {
        if err.identifier() == Some(ID) {
            *global_sink.lock().unwrap() += 1;
        }
    });

    let local_hits = Arc::new(Mutex::new(Vec::new()));
    let local_sink = Arc::clone(&local_hits);
    let diagnostics = DiagnosticConfig::new()
        .stack_capture(false)
        .error_replacer(|err| err.with_error_code(99))
        .failure_hook(move |err| local_sink.lock().unwrap().push(err.error_code()));

    let value: Outcome<u8> = diagnostics.fail(marked(ID));
    let optional: OptionalOutcome<u8> = diagnostics.fail_optional(marked(ID));

    assert_eq!(value.error().error_code(), Some(99));
    assert!(value.error().stack_trace().is_none());
    assert!(optional.is_fail());
    assert_eq!(*local_hits.lock().unwrap(), [Some(99), Some(99)]);
    assert_eq!(*global_hits.lock().unwrap(), 0);
    assert!(!diagnostics.is_stack_capture_enabled());
}

#[test]
fn ensure_and_from_option_run_the_pipeline() {
    let _guard = lock_config();
    const ID: &str = "config.pipeline.ensure";

    let test_thread = thread::current().id();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    config::set_failure_hook(move |err| {
        // Failures built by parallel tests run their hook on other threads.
        if thread::current().id() == test_thread {
            sink.lock().unwrap().push(err.identifier().map(str::to_owned));
        }
    });

    let _ = Outcome::success(1).ensure(|_| false, |_| marked(ID));
    let _: Outcome<u8> = Outcome::from_option(None);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].as_deref(), Some(ID));
    assert_eq!(seen[1].as_deref(), Error::value_required().identifier());
}

#[test]
fn concurrent_setters_keep_each_slot_whole() {
    let _guard = lock_config();
    const ID: &str = "config.concurrency";
    const ROUNDS: u32 = 200;
    const BUILDERS: usize = 4;
    const PER_BUILDER: usize = 100;

    fn tag_replacer(tag: u32) -> impl Fn(Error) -> Error + Send + Sync + 'static {
        move |err| {
            if err.identifier() == Some(ID) {
                let message = format!("{} r{tag}", err.message());
                err.with_message(message)
            } else {
                err
            }
        }
    }

    fn tag_hook(tag: u32, log: &Arc<Mutex<Vec<u32>>>) -> impl Fn(&Error) + Send + Sync + 'static {
        let log = Arc::clone(log);
        move |err| {
            if err.identifier() == Some(ID) {
                log.lock().unwrap().push(tag);
            }
        }
    }

    config::set_stack_capture(false);
    let log = Arc::new(Mutex::new(Vec::new()));
    config::set_error_replacer(tag_replacer(0));
    config::set_failure_hook(tag_hook(0, &log));

    let built = thread::scope(|scope| {
        scope.spawn(|| {
            for tag in 1..=ROUNDS {
                config::set_error_replacer(tag_replacer(tag));
            }
        });
        scope.spawn(|| {
            for tag in 1..=ROUNDS {
                config::set_failure_hook(tag_hook(tag, &log));
            }
        });

        let builders: Vec<_> = (0..BUILDERS)
            .map(|_| {
                scope.spawn(|| {
                    (0..PER_BUILDER)
                        .map(|_| Outcome::<()>::fail(marked(ID)).error().clone())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        builders
            .into_iter()
            .flat_map(|builder| builder.join().unwrap())
            .collect::<Vec<_>>()
    });

    // Each failure saw exactly one replacer and one hook, never a torn mix.
    assert_eq!(built.len(), BUILDERS * PER_BUILDER);
    for err in &built {
        assert_eq!(err.message().matches(" r").count(), 1, "{}", err.message());
        assert!(err.stack_trace().is_none());
    }
    {
        let log = log.lock().unwrap();
        assert_eq!(log.len(), BUILDERS * PER_BUILDER);
        assert!(log.iter().all(|tag| *tag <= ROUNDS));
    }

    log.lock().unwrap().clear();
    let after: Outcome<()> = Outcome::fail(marked(ID));
    assert_eq!(after.error().message(), format!("original message r{ROUNDS}"));
    assert_eq!(*log.lock().unwrap(), [ROUNDS]);
}
