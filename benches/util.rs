use std::cell::Cell;
use std::env;

/// Core used when `BENCH_PIN_CORE` is unset.
const DEFAULT_PIN_CORE: usize = 2;

/// Reads `BENCH_PIN_CORE`. A core index selects that core, `off` disables pinning.
fn pin_core_setting() -> Option<usize> {
    match env::var("BENCH_PIN_CORE") {
        Ok(val) if val.eq_ignore_ascii_case("off") => None,
        Ok(val) => match val.parse() {
            Ok(core) => Some(core),
            Err(_) => {
                eprintln!("ignoring BENCH_PIN_CORE={val}, expected a core index or 'off'");
                Some(DEFAULT_PIN_CORE)
            }
        },
        Err(_) => Some(DEFAULT_PIN_CORE),
    }
}

/// Pins the calling thread to the configured core, at most once per thread. Returns the core
/// the thread ended up on, or `None` if pinning is off or the core does not exist.
pub fn pin_thread_to_core() -> Option<usize> {
    thread_local! {
        static PINNED: Cell<Option<Option<usize>>> = const { Cell::new(None) };
    }

    if let Some(pinned) = PINNED.get() {
        return pinned;
    }

    let pinned = pin_core_setting().filter(|&core| {
        core_affinity::get_core_ids()
            .and_then(|ids| ids.into_iter().find(|id| id.id == core))
            .is_some_and(core_affinity::set_for_current)
    });

    if pinned.is_none() {
        eprintln!("bench thread not pinned, timings may be noisy");
    }

    PINNED.set(Some(pinned));
    pinned
}
