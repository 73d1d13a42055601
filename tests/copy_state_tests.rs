//! Copy Confirmation State Tests
//!
//! Each copy target is an independent two-state machine: idle until copied,
//! confirmed for a fixed two-second window, then idle again. Re-copying an
//! item restarts only that item's window.

use postdeck::app::dashui::copy_state::{CopyConfirmations, CONFIRMATION_TTL};
use std::thread::sleep;
use std::time::Duration;

#[test]
fn confirmation_ttl_is_two_seconds() {
    assert_eq!(CONFIRMATION_TTL, Duration::from_secs(2));
}

#[test]
fn confirm_sets_flag_immediately() {
    let mut copied = CopyConfirmations::new();
    copied.confirm("slide-1");
    assert!(copied.is_confirmed("slide-1"));
    assert!(!copied.is_confirmed("slide-2"));
}

#[test]
fn flag_reverts_after_fixed_delay() {
    let mut copied = CopyConfirmations::new();
    copied.confirm("caption");
    sleep(Duration::from_millis(2200));

    assert!(!copied.is_confirmed("caption"));

    copied.prune();
    assert!(copied.is_empty());
}

#[test]
fn items_expire_independently() {
    let mut copied = CopyConfirmations::new();
    copied.confirm("hook-0");
    sleep(Duration::from_millis(1300));
    copied.confirm("hook-1");
    sleep(Duration::from_millis(1000));

    // hook-0 is past its window, hook-1 is still inside its own
    assert!(!copied.is_confirmed("hook-0"));
    assert!(copied.is_confirmed("hook-1"));

    copied.prune();
    assert!(!copied.is_empty());
}

#[test]
fn reconfirming_restarts_the_timer() {
    let mut copied = CopyConfirmations::new();
    copied.confirm("hashtags-all");
    sleep(Duration::from_millis(1500));
    copied.confirm("hashtags-all");
    sleep(Duration::from_millis(1000));

    // 2.5s after the first copy but only 1s after the second
    assert!(copied.is_confirmed("hashtags-all"));

    sleep(Duration::from_millis(1300));
    assert!(!copied.is_confirmed("hashtags-all"));
}
