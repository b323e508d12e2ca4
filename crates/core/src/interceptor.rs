//! The fault interceptor: run a scope, turn a panic into a [`GuardError`].

use crate::error::{GuardError, GuardResult};
use crate::hook::{self, Scope};
use std::panic::{self, UnwindSafe};

/// Runs `f`, converting a panic raised inside it into an error.
///
/// The unwind stops here: the caller always gets control back. Payload
/// conversion follows [`GuardError::from_panic`].
///
/// While `f` runs, the hook treats every panic on this thread as
/// intercepted, including ones `f` catches itself with `catch_unwind`; those
/// are not printed either.
///
/// ```
/// let err = dontpanic_core::recover(|| -> u8 { panic!("no") }).unwrap_err();
/// assert_eq!(err.to_string(), "no");
/// ```
pub fn recover<T, F>(f: F) -> GuardResult<T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    let scope = Scope::enter();
    let outcome = panic::catch_unwind(f);
    drop(scope);
    // Taken on success too: a panic `f` handled itself leaves one behind.
    let location = hook::take_location();

    outcome.map_err(|payload| {
        let err = GuardError::from_panic(payload, location);
        tracing::debug!(
            error = %err,
            location = ?err.location().map(ToString::to_string),
            "intercepted panic"
        );
        err
    })
}

/// Output-slot form of [`recover`].
///
/// On success the slot is left untouched and the value returned; on failure
/// the error is written to `err` and `None` returned.
pub fn recover_into<T, F>(err: &mut Option<GuardError>, f: F) -> Option<T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match recover(f) {
        Ok(value) => Some(value),
        Err(e) => {
            *err = Some(e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;

    #[derive(Debug, thiserror::Error)]
    #[error("quota exceeded")]
    struct QuotaExceeded;

    #[test]
    fn success_passes_value_through() {
        assert_eq!(recover(|| 2 + 2).unwrap(), 4);
    }

    #[test]
    fn str_panic_becomes_error() {
        let err = recover(|| -> i32 { panic!("static message") }).unwrap_err();
        assert_eq!(err.to_string(), "static message");
        assert!(err.is_intercepted());
    }

    #[test]
    fn formatted_panic_becomes_error() {
        let n = 3;
        let err = recover(move || -> i32 { panic!("bad value {n}") }).unwrap_err();
        assert_eq!(err.to_string(), "bad value 3");
    }

    #[test]
    fn error_payload_is_forwarded() {
        let err = recover(|| -> u8 {
            let e: BoxError = Box::new(QuotaExceeded);
            std::panic::panic_any(e)
        })
        .unwrap_err();
        assert!(matches!(err, GuardError::Forwarded(_)));
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn intercepted_panic_has_location() {
        let err = recover(|| -> u8 { panic!("where am I") }).unwrap_err();
        let loc = err.location().expect("location recorded by hook");
        assert!(loc.file.ends_with("interceptor.rs"));
        assert!(loc.line > 0);
    }

    #[test]
    fn panic_handled_inside_scope_leaves_no_location() {
        let handled = recover(|| panic::catch_unwind(|| -> u8 { panic!("handled") }).is_err());
        assert!(handled.unwrap());
        assert!(hook::take_location().is_none());

        let err = recover(|| -> u8 { panic!("next") }).unwrap_err();
        assert_eq!(err.to_string(), "next");
        assert!(err.location().is_some());
    }

    #[test]
    fn nested_guards_are_independent() {
        let outer = recover(|| {
            let inner = recover(|| -> u8 { panic!("inner") });
            assert!(inner.is_err());
            "outer survived"
        });
        assert_eq!(outer.unwrap(), "outer survived");
        assert_eq!(hook::depth(), 0);
    }

    #[test]
    fn recover_into_leaves_slot_on_success() {
        let mut err = None;
        assert_eq!(recover_into(&mut err, || 7), Some(7));
        assert!(err.is_none());
    }

    #[test]
    fn recover_into_writes_slot_on_failure() {
        let mut err = None;
        let value: Option<u8> = recover_into(&mut err, || panic!("slot"));
        assert!(value.is_none());
        assert_eq!(err.unwrap().to_string(), "slot");
    }

    #[test]
    fn guards_work_on_many_threads() {
        use rayon::prelude::*;

        let failures = (0..256u32)
            .into_par_iter()
            .map(|i| recover(move || if i % 2 == 0 { panic!("even {i}") } else { i }))
            .filter(Result::is_err)
            .count();
        assert_eq!(failures, 128);
    }
}
